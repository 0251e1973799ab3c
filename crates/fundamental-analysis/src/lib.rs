pub mod tables;
pub mod scoring;
pub mod narrative;
pub mod industry;

use analysis_core::{FundamentalAnalysisResult, FundamentalAnalyzer, Fundamentals};

pub use industry::{compare_to_industry, IndustryAverages, INDUSTRY_AVERAGES};
pub use narrative::{fundamental_reasons, fundamental_risks};
pub use scoring::{score_breakdown, ScoreWeights, WEIGHTS};
pub use tables::{Reported, ThresholdTable};

/// Ratio-based scoring of one instrument's fundamentals
#[derive(Debug, Default, Clone, Copy)]
pub struct FundamentalAnalysisEngine;

impl FundamentalAnalysisEngine {
    pub fn new() -> Self {
        Self
    }
}

/// Sub-scores, weighted score, reasons and risks. Never fails; unreported
/// ratios fall back to neutral sub-scores.
pub fn score_fundamental(fundamentals: &Fundamentals) -> FundamentalAnalysisResult {
    let breakdown = score_breakdown(fundamentals);
    let score = WEIGHTS.weighted_score(&breakdown);

    tracing::debug!(score, ?breakdown, "fundamental score");

    FundamentalAnalysisResult {
        breakdown,
        score,
        reasons: fundamental_reasons(&breakdown, fundamentals),
        risks: fundamental_risks(&breakdown, fundamentals),
    }
}

impl FundamentalAnalyzer for FundamentalAnalysisEngine {
    fn analyze(&self, fundamentals: &Fundamentals) -> FundamentalAnalysisResult {
        score_fundamental(fundamentals)
    }
}

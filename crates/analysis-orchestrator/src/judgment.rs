use analysis_core::{FundamentalAnalysisResult, Fundamentals, Judgment, Signal, TechnicalAnalysisResult};

pub const TECHNICAL_WEIGHT_PERCENT: u32 = 60;
pub const FUNDAMENTAL_WEIGHT_PERCENT: u32 = 40;

pub const WEAK_ON_BOTH_FRONTS: &str = "Weak on both technical and fundamental fronts";

/// `round(technical * 0.6 + fundamental * 0.4)` with halves rounded up,
/// computed in integers so the result is exact.
pub fn composite_score(technical: u8, fundamental: u8) -> u8 {
    let weighted = technical as u32 * TECHNICAL_WEIGHT_PERCENT + fundamental as u32 * FUNDAMENTAL_WEIGHT_PERCENT;
    ((weighted + 50) / 100).min(100) as u8
}

/// Threshold ladder, evaluated top-down.
pub fn select_signal(composite: u8, technical: u8, fundamental: u8) -> Signal {
    let strong_on_both = composite >= 80 && technical >= 70 && fundamental >= 70;
    if strong_on_both || composite >= 75 {
        Signal::StrongBuy
    } else if composite >= 60 {
        Signal::BuyConsideration
    } else if composite >= 40 {
        Signal::HoldWatch
    } else {
        Signal::SellConsideration
    }
}

/// Fuses the technical and fundamental results into the final judgment
#[derive(Debug, Default, Clone, Copy)]
pub struct JudgmentEngine;

impl JudgmentEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn judge(
        &self,
        technical: &TechnicalAnalysisResult,
        fundamental: &FundamentalAnalysisResult,
        _fundamentals: &Fundamentals,
    ) -> Judgment {
        let technical_score = technical.score();
        let fundamental_score = fundamental.score;
        let score = composite_score(technical_score, fundamental_score);
        let signal = select_signal(score, technical_score, fundamental_score);

        let reasons = technical
            .scoring
            .reasons
            .iter()
            .chain(&fundamental.reasons)
            .cloned()
            .collect();

        let mut risks: Vec<String> = technical.scoring.risks.iter().chain(&fundamental.risks).cloned().collect();
        if technical_score < 40 && fundamental_score < 40 {
            risks.push(WEAK_ON_BOTH_FRONTS.to_string());
        }

        tracing::debug!(score, technical_score, fundamental_score, %signal, "judgment");

        Judgment {
            score,
            signal,
            reasons,
            risks,
        }
    }
}

use super::AnalysisOrchestrator;
use crate::config::AnalysisConfig;
use analysis_core::{AnalysisReport, InstrumentInput, RiskLevel, Signal};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenerEntry {
    /// 1-based position after sorting
    pub rank: usize,
    pub symbol: String,
    #[serde(default)]
    pub name: Option<String>,
    pub score: u8,
    pub signal: Signal,
    pub technical_score: u8,
    pub fundamental_score: u8,
    pub risk_level: RiskLevel,
    pub key_highlights: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenerResult {
    pub entries: Vec<ScreenerEntry>,
    pub total_analyzed: usize,
    pub total_failed: usize,
    pub total_passed_filters: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenerFilters {
    /// Minimum composite score, inclusive
    pub min_score: u8,
    pub limit: usize,
}

impl Default for ScreenerFilters {
    fn default() -> Self {
        Self { min_score: 0, limit: 10 }
    }
}

impl From<&AnalysisConfig> for ScreenerFilters {
    fn from(config: &AnalysisConfig) -> Self {
        Self {
            min_score: config.screener_min_score,
            limit: config.screener_limit,
        }
    }
}

/// Ranks many instruments by composite score
pub struct Screener {
    orchestrator: Arc<AnalysisOrchestrator>,
}

impl Screener {
    pub fn new(orchestrator: Arc<AnalysisOrchestrator>) -> Self {
        Self { orchestrator }
    }

    pub fn screen(&self, instruments: &[InstrumentInput], filters: &ScreenerFilters) -> ScreenerResult {
        let total_analyzed = instruments.len();
        tracing::info!(total_analyzed, min_score = filters.min_score, "starting screen");

        let outcomes: Vec<_> = instruments
            .par_iter()
            .map(|instrument| (instrument, self.orchestrator.analyze_instrument(instrument)))
            .collect();

        let mut total_failed = 0;
        let mut reports = Vec::new();
        for (instrument, outcome) in outcomes {
            match outcome {
                Ok(report) => reports.push(report),
                Err(e) => {
                    total_failed += 1;
                    tracing::warn!(symbol = %instrument.symbol, error = %e, "skipping instrument");
                }
            }
        }

        reports.retain(|report| report.judgment.score >= filters.min_score);
        let total_passed_filters = reports.len();

        reports.sort_by(|a, b| {
            b.judgment
                .score
                .cmp(&a.judgment.score)
                .then_with(|| a.symbol.cmp(&b.symbol))
        });
        reports.truncate(filters.limit);

        let entries: Vec<ScreenerEntry> = reports
            .into_iter()
            .enumerate()
            .map(|(i, report)| create_entry(i + 1, report))
            .collect();

        tracing::info!(
            total_analyzed,
            total_failed,
            total_passed_filters,
            returned = entries.len(),
            "screen complete"
        );

        ScreenerResult {
            entries,
            total_analyzed,
            total_failed,
            total_passed_filters,
            timestamp: chrono::Utc::now(),
        }
    }
}

fn create_entry(rank: usize, report: AnalysisReport) -> ScreenerEntry {
    let mut highlights: Vec<String> = report.judgment.reasons.iter().take(3).cloned().collect();
    highlights.extend(report.industry_comparison.iter().cloned());

    ScreenerEntry {
        rank,
        technical_score: report.technical.score(),
        fundamental_score: report.fundamental.score,
        risk_level: report.risk_assessment.risk_level,
        score: report.judgment.score,
        signal: report.judgment.signal,
        symbol: report.symbol,
        name: report.name,
        key_highlights: highlights,
    }
}

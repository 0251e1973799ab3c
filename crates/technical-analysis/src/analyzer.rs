use analysis_core::{
    AnalysisError, AnalysisMode, PriceSeries, TechnicalAnalysisResult, TechnicalAnalyzer, MIN_FULL_HISTORY,
};

use crate::indicators::compute_indicators;
use crate::scoring::score_technical;
use crate::snapshot::latest_snapshot;

/// Indicator computation, snapshot and scoring in one step
#[derive(Debug, Default, Clone, Copy)]
pub struct TechnicalAnalysisEngine;

impl TechnicalAnalysisEngine {
    pub fn new() -> Self {
        Self
    }

    /// Mode to request for a series when simplified analysis is allowed.
    pub fn preferred_mode(prices: &PriceSeries) -> AnalysisMode {
        if prices.supports_full_analysis() {
            AnalysisMode::Full
        } else {
            AnalysisMode::Simplified
        }
    }

    fn analyze_sync(&self, prices: &PriceSeries, mode: AnalysisMode) -> Result<TechnicalAnalysisResult, AnalysisError> {
        match mode {
            AnalysisMode::Full if !prices.supports_full_analysis() => {
                return Err(AnalysisError::InsufficientData {
                    required: MIN_FULL_HISTORY,
                    available: prices.len(),
                });
            }
            AnalysisMode::Simplified => {
                tracing::warn!(
                    points = prices.len(),
                    required = MIN_FULL_HISTORY,
                    "running simplified technical analysis"
                );
            }
            AnalysisMode::Full => {}
        }

        let current_price = prices.current_price();
        let series = compute_indicators(prices);
        let indicators = latest_snapshot(&series, current_price, mode);
        let scoring = score_technical(&indicators, current_price);

        tracing::debug!(
            score = scoring.score,
            ?mode,
            fallbacks = indicators.neutral_fallbacks.len(),
            "technical analysis complete"
        );

        Ok(TechnicalAnalysisResult { indicators, scoring })
    }
}

impl TechnicalAnalyzer for TechnicalAnalysisEngine {
    fn analyze(&self, prices: &PriceSeries, mode: AnalysisMode) -> Result<TechnicalAnalysisResult, AnalysisError> {
        self.analyze_sync(prices, mode)
    }
}

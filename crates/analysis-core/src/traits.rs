use crate::{AnalysisError, AnalysisMode, FundamentalAnalysisResult, Fundamentals, PriceSeries, TechnicalAnalysisResult};

/// Trait for technical analysis engines
pub trait TechnicalAnalyzer: Send + Sync {
    fn analyze(&self, prices: &PriceSeries, mode: AnalysisMode) -> Result<TechnicalAnalysisResult, AnalysisError>;
}

/// Trait for fundamental analysis engines.
///
/// Never fails: absent ratios resolve to neutral sub-scores.
pub trait FundamentalAnalyzer: Send + Sync {
    fn analyze(&self, fundamentals: &Fundamentals) -> FundamentalAnalysisResult;
}

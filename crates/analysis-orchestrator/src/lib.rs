use analysis_core::{
    AnalysisError, AnalysisMode, AnalysisReport, FundamentalAnalyzer, Fundamentals, InstrumentInput, PriceSeries,
    TechnicalAnalyzer,
};
use chrono::Utc;
use fundamental_analysis::{compare_to_industry, FundamentalAnalysisEngine};
use technical_analysis::TechnicalAnalysisEngine;

pub mod config;
pub mod judgment;
pub mod risk;
pub mod screener;


pub use config::AnalysisConfig;
pub use judgment::{composite_score, select_signal, JudgmentEngine};
pub use risk::assess_risk;
pub use screener::{Screener, ScreenerEntry, ScreenerFilters, ScreenerResult};

/// Runs the technical and fundamental analyzers for one instrument and
/// fuses their results into a report.
pub struct AnalysisOrchestrator {
    technical_analyzer: Box<dyn TechnicalAnalyzer>,
    fundamental_analyzer: Box<dyn FundamentalAnalyzer>,
    judgment_engine: JudgmentEngine,
    config: AnalysisConfig,
}

impl AnalysisOrchestrator {
    pub fn new(config: AnalysisConfig) -> Self {
        Self::with_engines(
            config,
            Box::new(TechnicalAnalysisEngine::new()),
            Box::new(FundamentalAnalysisEngine::new()),
        )
    }

    pub fn with_engines(
        config: AnalysisConfig,
        technical_analyzer: Box<dyn TechnicalAnalyzer>,
        fundamental_analyzer: Box<dyn FundamentalAnalyzer>,
    ) -> Self {
        Self {
            technical_analyzer,
            fundamental_analyzer,
            judgment_engine: JudgmentEngine::new(),
            config,
        }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Full analysis when the history allows it; simplified otherwise, unless
    /// the configuration forbids it.
    pub fn mode_for(&self, prices: &PriceSeries) -> AnalysisMode {
        if self.config.allow_simplified {
            TechnicalAnalysisEngine::preferred_mode(prices)
        } else {
            AnalysisMode::Full
        }
    }

    /// Perform the complete analysis of one instrument
    pub fn analyze(
        &self,
        symbol: &str,
        prices: &PriceSeries,
        fundamentals: &Fundamentals,
    ) -> Result<AnalysisReport, AnalysisError> {
        let mode = self.mode_for(prices);
        tracing::info!(symbol, points = prices.len(), ?mode, "starting analysis");

        let (technical, fundamental) = rayon::join(
            || self.technical_analyzer.analyze(prices, mode),
            || self.fundamental_analyzer.analyze(fundamentals),
        );
        let technical = technical?;

        let judgment = self.judgment_engine.judge(&technical, &fundamental, fundamentals);
        let risk_assessment = assess_risk(prices, fundamentals);
        let industry_comparison = compare_to_industry(fundamentals);

        tracing::info!(
            symbol,
            score = judgment.score,
            signal = %judgment.signal,
            technical = technical.score(),
            fundamental = fundamental.score,
            "analysis complete"
        );

        Ok(AnalysisReport {
            symbol: symbol.to_string(),
            name: None,
            technical,
            fundamental,
            judgment,
            risk_assessment,
            industry_comparison,
            updated_at: Utc::now(),
        })
    }

    pub fn analyze_instrument(&self, instrument: &InstrumentInput) -> Result<AnalysisReport, AnalysisError> {
        let mut report = self.analyze(&instrument.symbol, &instrument.prices, &instrument.fundamentals)?;
        report.name = instrument.name.clone();
        Ok(report)
    }
}

impl Default for AnalysisOrchestrator {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}

use analysis_core::stats::{population_std_dev, simple_returns};
use analysis_core::{Fundamentals, PriceSeries, RiskAssessment, RiskLevel};

/// Minimum history for the volatility check
pub const VOLATILITY_MIN_POINTS: usize = 20;
/// Trailing window for the average-volume check. Shorter histories are still
/// divided by the full window.
pub const LIQUIDITY_WINDOW: usize = 10;
pub const LOW_LIQUIDITY_VOLUME: f64 = 100_000.0;

#[derive(Default)]
struct RiskAssessmentBuilder {
    factors: Vec<String>,
    score: u32,
}

impl RiskAssessmentBuilder {
    fn add(&mut self, factor: &str, points: u32) {
        self.factors.push(factor.to_string());
        self.score += points;
    }
}

pub fn risk_level(score: u32) -> RiskLevel {
    if score >= 50 {
        RiskLevel::High
    } else if score >= 25 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Price volatility, valuation and liquidity risk for one instrument.
pub fn assess_risk(prices: &PriceSeries, fundamentals: &Fundamentals) -> RiskAssessment {
    let mut risk = RiskAssessmentBuilder::default();

    if prices.len() >= VOLATILITY_MIN_POINTS {
        let volatility = population_std_dev(&simple_returns(&prices.closes()));
        if volatility > 0.05 {
            risk.add("High volatility", 30);
        } else if volatility > 0.03 {
            risk.add("Moderate volatility", 15);
        }
    }

    if fundamentals.per.is_some_and(|per| per > 30.0) {
        risk.add("High PER (overvaluation risk)", 20);
    }
    if fundamentals.roe.is_some_and(|roe| roe < 0.0) {
        risk.add("Negative ROE (profitability risk)", 25);
    }
    if fundamentals.pbr.is_some_and(|pbr| pbr > 3.0) {
        risk.add("High PBR (overvaluation risk)", 15);
    }

    let volumes = prices.volumes();
    let recent = &volumes[volumes.len().saturating_sub(LIQUIDITY_WINDOW)..];
    let average_volume = recent.iter().sum::<f64>() / LIQUIDITY_WINDOW as f64;
    if average_volume < LOW_LIQUIDITY_VOLUME {
        risk.add("Low liquidity (hard to trade)", 20);
    }

    RiskAssessment {
        risk_level: risk_level(risk.score),
        risk_score: risk.score,
        risk_factors: risk.factors,
    }
}

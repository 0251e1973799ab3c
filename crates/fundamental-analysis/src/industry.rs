use analysis_core::Fundamentals;

/// Reference ratios for a typical listed company
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndustryAverages {
    pub per: f64,
    pub pbr: f64,
    pub roe: f64,
    pub dividend_yield: f64,
}

pub const INDUSTRY_AVERAGES: IndustryAverages = IndustryAverages {
    per: 18.0,
    pbr: 1.3,
    roe: 8.0,
    dividend_yield: 2.2,
};

/// Favourable comparisons against `averages`. Unreported or non-positive
/// valuation ratios are skipped. May be empty.
pub fn compare_with(fundamentals: &Fundamentals, averages: &IndustryAverages) -> Vec<String> {
    let mut comparisons = Vec::new();

    if fundamentals.per.is_some_and(|per| per > 0.0 && per < averages.per) {
        comparisons.push("PER below industry average".to_string());
    }
    if fundamentals.pbr.is_some_and(|pbr| pbr > 0.0 && pbr < averages.pbr) {
        comparisons.push("PBR below industry average".to_string());
    }
    if fundamentals.roe.is_some_and(|roe| roe > averages.roe) {
        comparisons.push("ROE above industry average".to_string());
    }
    if fundamentals.dividend_yield.is_some_and(|dy| dy > averages.dividend_yield) {
        comparisons.push("Dividend yield above industry average".to_string());
    }

    comparisons
}

pub fn compare_to_industry(fundamentals: &Fundamentals) -> Vec<String> {
    compare_with(fundamentals, &INDUSTRY_AVERAGES)
}

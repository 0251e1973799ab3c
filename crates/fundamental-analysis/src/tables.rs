//! Step tables for the ratio sub-scores.
//!
//! Each table is scanned in order and the first step whose bound exceeds the
//! value wins; values at or past the last bound take `above`.

/// Which raw values count as a reported ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reported {
    /// Zero and negative values are unreported
    Positive,
    /// Only zero is unreported; negative values are real readings
    NonZero,
}

impl Reported {
    fn accepts(self, value: f64) -> bool {
        match self {
            Reported::Positive => value > 0.0,
            Reported::NonZero => value != 0.0,
        }
    }
}

/// Ordered upper-bound table mapping a ratio onto a 0-100 sub-score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdTable {
    /// Score when the ratio is not reported
    pub missing: u8,
    pub reported: Reported,
    /// `(exclusive upper bound, score)` pairs in ascending bound order
    pub steps: &'static [(f64, u8)],
    pub above: u8,
}

impl ThresholdTable {
    pub fn score(&self, value: Option<f64>) -> u8 {
        let value = match value {
            Some(v) if v.is_finite() && self.reported.accepts(v) => v,
            _ => return self.missing,
        };

        self.steps
            .iter()
            .find(|(bound, _)| value < *bound)
            .map(|&(_, score)| score)
            .unwrap_or(self.above)
    }
}

pub const PER_TABLE: ThresholdTable = ThresholdTable {
    missing: 50,
    reported: Reported::Positive,
    steps: &[(8.0, 85), (12.0, 80), (15.0, 75), (20.0, 65), (25.0, 50), (35.0, 35)],
    above: 20,
};

pub const PBR_TABLE: ThresholdTable = ThresholdTable {
    missing: 50,
    reported: Reported::Positive,
    steps: &[(0.5, 90), (0.8, 85), (1.0, 80), (1.5, 70), (2.0, 55), (3.0, 40)],
    above: 25,
};

/// Negative ROE is a real reading (a loss); zero is not reported.
pub const ROE_TABLE: ThresholdTable = ThresholdTable {
    missing: 50,
    reported: Reported::NonZero,
    steps: &[(0.0, 20), (3.0, 30), (8.0, 45), (15.0, 70), (25.0, 85), (35.0, 90)],
    above: 80,
};

pub const DIVIDEND_TABLE: ThresholdTable = ThresholdTable {
    missing: 40,
    reported: Reported::Positive,
    steps: &[(0.5, 45), (1.5, 55), (3.0, 75), (5.0, 85), (8.0, 70)],
    above: 50,
};

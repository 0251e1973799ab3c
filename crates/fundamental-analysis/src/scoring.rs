use analysis_core::{FundamentalScoreBreakdown, Fundamentals};

use crate::tables::{DIVIDEND_TABLE, PBR_TABLE, PER_TABLE, ROE_TABLE};

/// Market capitalisation is bucketed in units of 10^9.
const MARKET_CAP_UNIT: f64 = 1_000_000_000.0;

/// Sub-score weights in percent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreWeights {
    pub per: u32,
    pub pbr: u32,
    pub roe: u32,
    pub dividend: u32,
    pub growth: u32,
    pub stability: u32,
}

pub const WEIGHTS: ScoreWeights = ScoreWeights {
    per: 20,
    pbr: 15,
    roe: 25,
    dividend: 15,
    growth: 15,
    stability: 10,
};

impl ScoreWeights {
    pub fn total_percent(&self) -> u32 {
        self.per + self.pbr + self.roe + self.dividend + self.growth + self.stability
    }

    /// Weights as fractions, in breakdown order
    pub fn as_fractions(&self) -> [f64; 6] {
        [self.per, self.pbr, self.roe, self.dividend, self.growth, self.stability].map(|w| w as f64 / 100.0)
    }

    /// Weighted mean of the breakdown, rounded half up.
    pub fn weighted_score(&self, breakdown: &FundamentalScoreBreakdown) -> u8 {
        let weighted = breakdown.per_score as u32 * self.per
            + breakdown.pbr_score as u32 * self.pbr
            + breakdown.roe_score as u32 * self.roe
            + breakdown.dividend_score as u32 * self.dividend
            + breakdown.growth_score as u32 * self.growth
            + breakdown.stability_score as u32 * self.stability;
        let total = self.total_percent().max(1);
        ((weighted + total / 2) / total).min(100) as u8
    }
}

fn clamp_score(score: i32) -> u8 {
    score.clamp(0, 100) as u8
}

fn market_cap_units(fundamentals: &Fundamentals) -> Option<f64> {
    fundamentals
        .market_cap
        .filter(|cap| cap.is_finite() && *cap > 0.0)
        .map(|cap| cap / MARKET_CAP_UNIT)
}

pub fn per_score(per: Option<f64>) -> u8 {
    PER_TABLE.score(per)
}

pub fn pbr_score(pbr: Option<f64>) -> u8 {
    PBR_TABLE.score(pbr)
}

pub fn roe_score(roe: Option<f64>) -> u8 {
    ROE_TABLE.score(roe)
}

pub fn dividend_score(dividend_yield: Option<f64>) -> u8 {
    DIVIDEND_TABLE.score(dividend_yield)
}

/// Smaller companies get more room to grow; high ROE adds to it.
pub fn growth_score(fundamentals: &Fundamentals) -> u8 {
    let mut score = 50;

    if let Some(cap) = market_cap_units(fundamentals) {
        if cap < 100.0 {
            score += 15;
        } else if cap < 1000.0 {
            score += 8;
        } else if cap < 5000.0 {
            score += 3;
        }
    }

    if fundamentals.roe.is_some_and(|roe| roe > 15.0) {
        score += 10;
    }

    clamp_score(score)
}

/// PBR under 0.5x, including negative book value. Zero is unreported.
pub fn below_half_book(fundamentals: &Fundamentals) -> bool {
    fundamentals
        .pbr
        .is_some_and(|pbr| pbr.is_finite() && pbr != 0.0 && pbr < 0.5)
}

/// Size, book value, steady ROE and a paid dividend add to stability.
pub fn stability_score(fundamentals: &Fundamentals) -> u8 {
    let mut score = 50;

    if let Some(cap) = market_cap_units(fundamentals) {
        if cap > 5000.0 {
            score += 20;
        } else if cap > 1000.0 {
            score += 15;
        } else if cap > 300.0 {
            score += 8;
        } else if cap > 100.0 {
            score += 3;
        }
    }

    if below_half_book(fundamentals) {
        score -= 15;
    }
    if fundamentals.roe.is_some_and(|roe| (8.0..=25.0).contains(&roe)) {
        score += 10;
    }
    if fundamentals.dividend_yield.is_some_and(|dy| dy > 1.0) {
        score += 8;
    }

    clamp_score(score)
}

pub fn score_breakdown(fundamentals: &Fundamentals) -> FundamentalScoreBreakdown {
    FundamentalScoreBreakdown {
        per_score: per_score(fundamentals.per),
        pbr_score: pbr_score(fundamentals.pbr),
        roe_score: roe_score(fundamentals.roe),
        dividend_score: dividend_score(fundamentals.dividend_yield),
        growth_score: growth_score(fundamentals),
        stability_score: stability_score(fundamentals),
    }
}

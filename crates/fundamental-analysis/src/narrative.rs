use analysis_core::{FundamentalScoreBreakdown, Fundamentals};

use crate::scoring::below_half_book;

pub const NEUTRAL_FUNDAMENTAL_REASON: &str = "Fundamentals are at standard levels";
pub const NO_FUNDAMENTAL_RISK: &str = "No particular risk factors identified";

/// Supporting statements for the breakdown. Never empty.
pub fn fundamental_reasons(breakdown: &FundamentalScoreBreakdown, fundamentals: &Fundamentals) -> Vec<String> {
    let mut reasons = Vec::new();

    if let Some(per) = fundamentals.per {
        if breakdown.per_score >= 75 {
            reasons.push(format!("PER of {per:.1}x is at a cheap level"));
        } else if breakdown.per_score <= 40 {
            reasons.push(format!("PER of {per:.1}x leans expensive"));
        }
    }

    if let Some(pbr) = fundamentals.pbr {
        if breakdown.pbr_score >= 80 {
            reasons.push(format!("PBR of {pbr:.2}x is cheap relative to book value"));
        }
    }

    if let Some(roe) = fundamentals.roe {
        if breakdown.roe_score >= 80 {
            reasons.push(format!("ROE of {roe:.1}% shows high profitability"));
        } else if breakdown.roe_score <= 40 {
            reasons.push(format!("ROE of {roe:.1}% leaves profitability to improve"));
        }
    }

    if let Some(dividend_yield) = fundamentals.dividend_yield {
        if breakdown.dividend_score >= 75 {
            reasons.push(format!("Dividend yield of {dividend_yield:.2}% is attractive"));
        }
    }

    if breakdown.growth_score >= 70 {
        reasons.push("Room for future growth is expected".to_string());
    }
    if breakdown.stability_score >= 80 {
        reasons.push("Financial stability is high".to_string());
    }

    if reasons.is_empty() {
        reasons.push(NEUTRAL_FUNDAMENTAL_REASON.to_string());
    }
    reasons
}

/// Warning statements for the breakdown. Never empty.
pub fn fundamental_risks(breakdown: &FundamentalScoreBreakdown, fundamentals: &Fundamentals) -> Vec<String> {
    let mut risks = Vec::new();

    if let Some(per) = fundamentals.per {
        if breakdown.per_score <= 35 {
            risks.push(format!("PER of {per:.1}x is high, expectations may be revised"));
        }
    }
    if below_half_book(fundamentals) {
        risks.push("PBR below 0.5x, check the financial condition".to_string());
    }
    if breakdown.roe_score <= 35 {
        risks.push("Profitability needs to improve".to_string());
    }
    if fundamentals.dividend_yield.is_some_and(|dy| dy > 6.0) {
        risks.push("High dividend yield, watch for a dividend cut".to_string());
    }
    if breakdown.growth_score <= 40 {
        risks.push("Growth potential is limited".to_string());
    }
    if breakdown.stability_score <= 40 {
        risks.push("Financial stability has room to improve".to_string());
    }

    if risks.is_empty() {
        risks.push(NO_FUNDAMENTAL_RISK.to_string());
    }
    risks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::score_breakdown;

    #[test]
    fn test_empty_fundamentals_use_fallbacks() {
        let fundamentals = Fundamentals::default();
        let breakdown = score_breakdown(&fundamentals);

        assert_eq!(fundamental_reasons(&breakdown, &fundamentals), vec![NEUTRAL_FUNDAMENTAL_REASON]);
        assert_eq!(fundamental_risks(&breakdown, &fundamentals), vec![NO_FUNDAMENTAL_RISK]);
    }

    #[test]
    fn test_value_stock_reasons() {
        let fundamentals = Fundamentals {
            per: Some(9.0),
            pbr: Some(0.7),
            roe: Some(18.0),
            dividend_yield: Some(3.0),
            ..Default::default()
        };
        let breakdown = score_breakdown(&fundamentals);
        let reasons = fundamental_reasons(&breakdown, &fundamentals);

        assert_eq!(
            reasons,
            vec![
                "PER of 9.0x is at a cheap level",
                "PBR of 0.70x is cheap relative to book value",
                "ROE of 18.0% shows high profitability",
                "Dividend yield of 3.00% is attractive",
            ]
        );
        assert_eq!(fundamental_risks(&breakdown, &fundamentals), vec![NO_FUNDAMENTAL_RISK]);
    }

    #[test]
    fn test_expensive_loss_making_risks() {
        let fundamentals = Fundamentals {
            per: Some(60.0),
            pbr: Some(0.3),
            roe: Some(-4.0),
            dividend_yield: Some(7.5),
            ..Default::default()
        };
        let breakdown = score_breakdown(&fundamentals);
        let risks = fundamental_risks(&breakdown, &fundamentals);

        assert!(risks[0].starts_with("PER of 60.0x"));
        assert!(risks.iter().any(|r| r.starts_with("PBR below 0.5x")));
        assert!(risks.iter().any(|r| r == "Profitability needs to improve"));
        assert!(risks.iter().any(|r| r.starts_with("High dividend yield")));
        assert!(!risks.contains(&NO_FUNDAMENTAL_RISK.to_string()));

        let reasons = fundamental_reasons(&breakdown, &fundamentals);
        assert!(reasons.iter().any(|r| r.contains("leans expensive")));
        assert!(reasons.iter().any(|r| r.contains("profitability to improve")));
    }

    #[test]
    fn test_negative_book_value_is_flagged() {
        let fundamentals = Fundamentals { pbr: Some(-1.0), ..Default::default() };
        let breakdown = score_breakdown(&fundamentals);

        assert_eq!(breakdown.stability_score, 35);
        let risks = fundamental_risks(&breakdown, &fundamentals);
        assert!(risks.iter().any(|r| r.starts_with("PBR below 0.5x")));
        assert!(!risks.contains(&NO_FUNDAMENTAL_RISK.to_string()));
    }

    #[test]
    fn test_zero_roe_uses_fallbacks() {
        let fundamentals = Fundamentals { roe: Some(0.0), ..Default::default() };
        let breakdown = score_breakdown(&fundamentals);

        assert_eq!(breakdown.roe_score, 50);
        assert_eq!(fundamental_reasons(&breakdown, &fundamentals), vec![NEUTRAL_FUNDAMENTAL_REASON]);
        assert_eq!(fundamental_risks(&breakdown, &fundamentals), vec![NO_FUNDAMENTAL_RISK]);
    }
}

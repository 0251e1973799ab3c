use analysis_core::{IndicatorSnapshot, TechnicalScore};

pub const BASE_SCORE: i32 = 50;
pub const NEUTRAL_TECHNICAL_REASON: &str = "Technical indicators are at neutral levels";

fn rsi_adjustment(rsi: f64) -> i32 {
    if rsi < 30.0 {
        15
    } else if rsi < 40.0 {
        10
    } else if rsi > 70.0 {
        -15
    } else if rsi > 60.0 {
        -5
    } else {
        0
    }
}

fn macd_adjustment(snapshot: &IndicatorSnapshot) -> i32 {
    let macd = &snapshot.macd;
    let mut adjustment = 0;
    if macd.histogram > 0.0 && macd.macd > macd.signal {
        adjustment += 10;
    }
    if macd.histogram > 0.0 {
        adjustment += 5;
    }
    adjustment
}

fn bollinger_adjustment(position: f64) -> i32 {
    if position < 0.2 {
        10
    } else if position > 0.8 {
        -10
    } else {
        0
    }
}

fn moving_average_adjustment(snapshot: &IndicatorSnapshot) -> i32 {
    let ma = &snapshot.moving_averages;
    if ma.is_full_uptrend() {
        15
    } else if ma.ma5 > ma.ma25 {
        8
    } else if ma.ma5 < ma.ma25 {
        -8
    } else {
        0
    }
}

fn stochastic_adjustment(snapshot: &IndicatorSnapshot) -> i32 {
    let stoch = &snapshot.stochastic;
    if stoch.k < 20.0 && stoch.d < 20.0 {
        10
    } else if stoch.k > 80.0 && stoch.d > 80.0 {
        -10
    } else {
        0
    }
}

fn ichimoku_adjustment(snapshot: &IndicatorSnapshot, current_price: f64) -> i32 {
    if current_price > snapshot.ichimoku.cloud_top() {
        8
    } else if current_price < snapshot.ichimoku.cloud_bottom() {
        -8
    } else {
        0
    }
}

/// Named score adjustments, in evaluation order. Zero entries are included.
pub fn score_adjustments(snapshot: &IndicatorSnapshot, current_price: f64) -> Vec<(&'static str, i32)> {
    vec![
        ("RSI", rsi_adjustment(snapshot.rsi)),
        ("MACD", macd_adjustment(snapshot)),
        ("Bollinger Bands", bollinger_adjustment(snapshot.bollinger_bands.position(current_price))),
        ("Moving Averages", moving_average_adjustment(snapshot)),
        ("Stochastic", stochastic_adjustment(snapshot)),
        ("Ichimoku", ichimoku_adjustment(snapshot, current_price)),
    ]
}

/// Supporting statements for the snapshot. Never empty.
pub fn technical_reasons(snapshot: &IndicatorSnapshot, current_price: f64) -> Vec<String> {
    let mut reasons = Vec::new();

    if snapshot.rsi < 30.0 {
        reasons.push(format!("RSI {:.1} is in oversold territory", snapshot.rsi));
    } else if snapshot.rsi > 70.0 {
        reasons.push(format!("RSI {:.1} is in overbought territory", snapshot.rsi));
    }

    let macd = &snapshot.macd;
    if macd.histogram > 0.0 && macd.macd > macd.signal {
        reasons.push("MACD is showing a buy signal".to_string());
    } else if macd.histogram < 0.0 {
        reasons.push("MACD momentum is weakening".to_string());
    }

    let ma = &snapshot.moving_averages;
    if ma.is_full_uptrend() {
        reasons.push("Moving averages are aligned in an uptrend".to_string());
    } else if ma.ma5 > ma.ma25 {
        reasons.push("Short-term moving average is turning up".to_string());
    } else if ma.is_full_downtrend() {
        reasons.push("Moving averages point to a downtrend".to_string());
    }

    let position = snapshot.bollinger_bands.position(current_price);
    if position < 0.2 {
        reasons.push("Price is near the lower Bollinger Band, a rebound is possible".to_string());
    } else if position > 0.8 {
        reasons.push("Price is near the upper Bollinger Band, a pullback is possible".to_string());
    }

    let stoch = &snapshot.stochastic;
    if stoch.k < 20.0 && stoch.d < 20.0 {
        reasons.push("Stochastic is moving in oversold territory".to_string());
    } else if stoch.k > 80.0 && stoch.d > 80.0 {
        reasons.push("Stochastic is in overbought territory".to_string());
    }

    if current_price > snapshot.ichimoku.cloud_top() {
        reasons.push("Price is trading above the Ichimoku cloud".to_string());
    } else if current_price < snapshot.ichimoku.cloud_bottom() {
        reasons.push("Price is trading below the Ichimoku cloud".to_string());
    }

    if reasons.is_empty() {
        reasons.push(NEUTRAL_TECHNICAL_REASON.to_string());
    }
    reasons
}

/// Warning statements for the snapshot. May be empty.
pub fn technical_risks(snapshot: &IndicatorSnapshot) -> Vec<String> {
    let mut risks = Vec::new();

    if snapshot.rsi > 80.0 {
        risks.push("RSI is extremely overbought, correction risk".to_string());
    }
    if snapshot.macd.histogram < -5.0 {
        risks.push("MACD shows a strong sell signal, downward pressure".to_string());
    }
    if snapshot.moving_averages.is_full_downtrend() {
        risks.push("All moving averages are falling, downtrend may continue".to_string());
    }
    if snapshot.stochastic.k > 90.0 && snapshot.stochastic.d > 90.0 {
        risks.push("Stochastic is extremely overbought, reversal risk".to_string());
    }
    let cloud_bottom = snapshot.ichimoku.cloud_bottom();
    if snapshot.ichimoku.tenkan_sen < cloud_bottom && snapshot.ichimoku.kijun_sen < cloud_bottom {
        risks.push("Trading below the Ichimoku cloud, upside looks heavy".to_string());
    }

    risks
}

/// Reduce the latest indicator values to a 0-100 score with reasons and risks.
pub fn score_technical(snapshot: &IndicatorSnapshot, current_price: f64) -> TechnicalScore {
    let adjustments = score_adjustments(snapshot, current_price);
    let total = BASE_SCORE + adjustments.iter().map(|(_, delta)| delta).sum::<i32>();
    let score = total.clamp(0, 100) as u8;

    tracing::debug!(
        score,
        adjustments = ?adjustments.iter().filter(|(_, d)| *d != 0).collect::<Vec<_>>(),
        "technical score"
    );

    TechnicalScore {
        score,
        reasons: technical_reasons(snapshot, current_price),
        risks: technical_risks(snapshot),
    }
}

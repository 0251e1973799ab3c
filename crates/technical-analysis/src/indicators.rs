use analysis_core::stats::{highest, lowest, population_std_dev};
use analysis_core::PriceSeries;
use serde::Serialize;

pub const MA_SHORT_PERIOD: usize = 5;
pub const MA_MEDIUM_PERIOD: usize = 25;
pub const MA_LONG_PERIOD: usize = 75;
pub const RSI_PERIOD: usize = 14;
pub const MACD_FAST_PERIOD: usize = 12;
pub const MACD_SLOW_PERIOD: usize = 26;
pub const MACD_SIGNAL_PERIOD: usize = 9;
pub const BOLLINGER_PERIOD: usize = 20;
pub const BOLLINGER_K: f64 = 2.0;
pub const STOCHASTIC_K_PERIOD: usize = 14;
pub const STOCHASTIC_D_PERIOD: usize = 3;
pub const TENKAN_PERIOD: usize = 9;
pub const KIJUN_PERIOD: usize = 26;
pub const SENKOU_B_PERIOD: usize = 52;

/// Simple Moving Average
///
/// `result[j]` covers `data[j..j + period]`, so the output is `period - 1`
/// shorter than the input.
pub fn sma(data: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || data.len() < period {
        return vec![];
    }

    data.windows(period)
        .map(|window| window.iter().sum::<f64>() / period as f64)
        .collect()
}

/// Exponential Moving Average
///
/// Seeded with the first input value rather than a period average, so the
/// first ~2 * period outputs carry a bias toward `data[0]`. Output length
/// equals input length.
pub fn ema(data: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || data.is_empty() {
        return vec![];
    }

    let k = 2.0 / (period as f64 + 1.0);
    let mut result = Vec::with_capacity(data.len());
    result.push(data[0]);

    for &value in &data[1..] {
        let prev = result[result.len() - 1];
        result.push(value * k + prev * (1.0 - k));
    }

    result
}

fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        return 100.0;
    }
    let rs = avg_gain / avg_loss;
    100.0 - (100.0 / (1.0 + rs))
}

/// Relative Strength Index with Wilder smoothing
///
/// The first value averages the first `period` deltas; each later value
/// smooths with `avg = (avg * (period - 1) + new) / period`. Output length is
/// `data.len() - period`. Zero average loss is defined as 100.
pub fn rsi(data: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || data.len() <= period {
        return vec![];
    }

    let (gains, losses): (Vec<f64>, Vec<f64>) = data
        .windows(2)
        .map(|w| {
            let change = w[1] - w[0];
            if change > 0.0 {
                (change, 0.0)
            } else {
                (0.0, change.abs())
            }
        })
        .unzip();

    let mut avg_gain = gains[..period].iter().sum::<f64>() / period as f64;
    let mut avg_loss = losses[..period].iter().sum::<f64>() / period as f64;

    let mut rsi_values = Vec::with_capacity(data.len() - period);
    rsi_values.push(rsi_value(avg_gain, avg_loss));

    for i in period..gains.len() {
        avg_gain = (avg_gain * (period - 1) as f64 + gains[i]) / period as f64;
        avg_loss = (avg_loss * (period - 1) as f64 + losses[i]) / period as f64;
        rsi_values.push(rsi_value(avg_gain, avg_loss));
    }

    rsi_values
}

/// MACD (Moving Average Convergence Divergence)
#[derive(Debug, Clone, Default, Serialize)]
pub struct MacdResult {
    pub macd_line: Vec<f64>,
    pub signal_line: Vec<f64>,
    pub histogram: Vec<f64>,
}

pub fn macd(data: &[f64], fast_period: usize, slow_period: usize, signal_period: usize) -> MacdResult {
    if fast_period == 0 || signal_period == 0 || slow_period <= fast_period {
        return MacdResult::default();
    }

    let ema_fast = ema(data, fast_period);
    let ema_slow = ema(data, slow_period);

    // Align both EMAs on their most recent element.
    let offset = ema_fast.len().saturating_sub(ema_slow.len());
    let macd_line: Vec<f64> = ema_slow
        .iter()
        .enumerate()
        .map(|(i, slow)| ema_fast[i + offset] - slow)
        .collect();

    let signal_line = ema(&macd_line, signal_period);

    let hist_offset = macd_line.len().saturating_sub(signal_line.len());
    let histogram = signal_line
        .iter()
        .enumerate()
        .map(|(i, signal)| macd_line[i + hist_offset] - signal)
        .collect();

    MacdResult {
        macd_line,
        signal_line,
        histogram,
    }
}

/// Bollinger Bands
#[derive(Debug, Clone, Default, Serialize)]
pub struct BollingerBands {
    pub upper: Vec<f64>,
    pub middle: Vec<f64>,
    pub lower: Vec<f64>,
}

/// Bands at `k` population standard deviations (divisor = period) around the SMA.
pub fn bollinger_bands(data: &[f64], period: usize, k: f64) -> BollingerBands {
    if period == 0 || data.len() < period {
        return BollingerBands::default();
    }

    let middle = sma(data, period);
    let mut upper = Vec::with_capacity(middle.len());
    let mut lower = Vec::with_capacity(middle.len());

    for (window, mean) in data.windows(period).zip(&middle) {
        let width = k * population_std_dev(window);
        upper.push(mean + width);
        lower.push(mean - width);
    }

    BollingerBands {
        upper,
        middle,
        lower,
    }
}

/// Stochastic Oscillator
#[derive(Debug, Clone, Default, Serialize)]
pub struct StochasticResult {
    pub k: Vec<f64>,
    pub d: Vec<f64>,
}

/// `%K` over `k_period` days and `%D = SMA(d_period)` of `%K`.
///
/// A day whose high/low range is zero reports a neutral `%K` of 50.
pub fn stochastic(highs: &[f64], lows: &[f64], closes: &[f64], k_period: usize, d_period: usize) -> StochasticResult {
    let n = closes.len().min(highs.len()).min(lows.len());
    if k_period == 0 || n < k_period {
        return StochasticResult::default();
    }

    let mut k_values = Vec::with_capacity(n + 1 - k_period);

    for end in k_period..=n {
        let start = end - k_period;
        let (Some(highest_high), Some(lowest_low)) = (highest(&highs[start..end]), lowest(&lows[start..end])) else {
            continue;
        };

        let k = if highest_high == lowest_low {
            50.0
        } else {
            100.0 * (closes[end - 1] - lowest_low) / (highest_high - lowest_low)
        };

        k_values.push(k);
    }

    let d_values = sma(&k_values, d_period);

    StochasticResult {
        k: k_values,
        d: d_values,
    }
}

/// Ichimoku lines, without the textbook forward displacement of the cloud.
#[derive(Debug, Clone, Default, Serialize)]
pub struct IchimokuResult {
    pub tenkan_sen: Vec<f64>,
    pub kijun_sen: Vec<f64>,
    pub senkou_span_a: Vec<f64>,
    pub senkou_span_b: Vec<f64>,
}

/// Midpoint of the highest high and lowest low over each trailing window.
fn channel_midpoint(highs: &[f64], lows: &[f64], period: usize) -> Vec<f64> {
    let n = highs.len().min(lows.len());
    if period == 0 || n < period {
        return vec![];
    }

    (period..=n)
        .filter_map(|end| {
            let start = end - period;
            let high = highest(&highs[start..end])?;
            let low = lowest(&lows[start..end])?;
            Some((high + low) / 2.0)
        })
        .collect()
}

pub fn ichimoku(highs: &[f64], lows: &[f64]) -> IchimokuResult {
    let tenkan_sen = channel_midpoint(highs, lows, TENKAN_PERIOD);
    let kijun_sen = channel_midpoint(highs, lows, KIJUN_PERIOD);

    // tenkan starts KIJUN - TENKAN days earlier; align on the kijun series.
    let offset = tenkan_sen.len().saturating_sub(kijun_sen.len());
    let senkou_span_a = kijun_sen
        .iter()
        .enumerate()
        .map(|(i, kijun)| (tenkan_sen[i + offset] + kijun) / 2.0)
        .collect();

    let senkou_span_b = channel_midpoint(highs, lows, SENKOU_B_PERIOD);

    IchimokuResult {
        tenkan_sen,
        kijun_sen,
        senkou_span_a,
        senkou_span_b,
    }
}

/// Every indicator series computed from one price history.
///
/// Series too short for an indicator's lookback are empty.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorSeries {
    pub sma5: Vec<f64>,
    pub sma25: Vec<f64>,
    pub sma75: Vec<f64>,
    pub rsi: Vec<f64>,
    pub macd: MacdResult,
    pub bollinger_bands: BollingerBands,
    pub stochastic: StochasticResult,
    pub ichimoku: IchimokuResult,
}

/// Compute all indicators for a validated price series.
pub fn compute_indicators(prices: &PriceSeries) -> IndicatorSeries {
    let closes = prices.closes();
    let highs = prices.highs();
    let lows = prices.lows();

    let series = IndicatorSeries {
        sma5: sma(&closes, MA_SHORT_PERIOD),
        sma25: sma(&closes, MA_MEDIUM_PERIOD),
        sma75: sma(&closes, MA_LONG_PERIOD),
        rsi: rsi(&closes, RSI_PERIOD),
        macd: macd(&closes, MACD_FAST_PERIOD, MACD_SLOW_PERIOD, MACD_SIGNAL_PERIOD),
        bollinger_bands: bollinger_bands(&closes, BOLLINGER_PERIOD, BOLLINGER_K),
        stochastic: stochastic(&highs, &lows, &closes, STOCHASTIC_K_PERIOD, STOCHASTIC_D_PERIOD),
        ichimoku: ichimoku(&highs, &lows),
    };

    tracing::debug!(
        points = prices.len(),
        rsi_len = series.rsi.len(),
        senkou_b_len = series.ichimoku.senkou_span_b.len(),
        "computed indicator series"
    );

    series
}

use analysis_core::{
    AnalysisMode, BollingerValue, IchimokuValue, Indicator, IndicatorSnapshot, MacdValue, MovingAverages,
    StochasticValue,
};

use crate::indicators::IndicatorSeries;

pub const NEUTRAL_RSI: f64 = 50.0;
pub const NEUTRAL_STOCHASTIC: f64 = 50.0;
pub const NEUTRAL_MACD: f64 = 0.0;

/// Reads the latest value of every indicator, recording a fallback for each
/// slot that the history was too short to compute.
struct Latest {
    fallbacks: Vec<Indicator>,
}

impl Latest {
    fn value(&mut self, series: &[f64], neutral: f64, slot: Indicator) -> f64 {
        match series.last() {
            Some(&v) => v,
            None => {
                self.fallbacks.push(slot);
                neutral
            }
        }
    }
}

/// Collapse full indicator series into the latest-value snapshot.
///
/// Neutral defaults: RSI 50, stochastic 50/50, MACD 0/0/0, and the current
/// price for the Bollinger, moving-average and Ichimoku lines. Every
/// substitution is listed in `neutral_fallbacks`.
pub fn latest_snapshot(series: &IndicatorSeries, current_price: f64, mode: AnalysisMode) -> IndicatorSnapshot {
    let mut latest = Latest { fallbacks: Vec::new() };

    let rsi = latest.value(&series.rsi, NEUTRAL_RSI, Indicator::Rsi);

    let macd = match (
        series.macd.macd_line.last(),
        series.macd.signal_line.last(),
        series.macd.histogram.last(),
    ) {
        (Some(&macd), Some(&signal), Some(&histogram)) => MacdValue { macd, signal, histogram },
        _ => {
            latest.fallbacks.push(Indicator::Macd);
            MacdValue {
                macd: NEUTRAL_MACD,
                signal: NEUTRAL_MACD,
                histogram: NEUTRAL_MACD,
            }
        }
    };

    let bands = &series.bollinger_bands;
    let bollinger_bands = match (bands.upper.last(), bands.middle.last(), bands.lower.last()) {
        (Some(&upper), Some(&middle), Some(&lower)) => BollingerValue { upper, middle, lower },
        _ => {
            latest.fallbacks.push(Indicator::BollingerBands);
            BollingerValue {
                upper: current_price,
                middle: current_price,
                lower: current_price,
            }
        }
    };

    let moving_averages = MovingAverages {
        ma5: latest.value(&series.sma5, current_price, Indicator::Ma5),
        ma25: latest.value(&series.sma25, current_price, Indicator::Ma25),
        ma75: latest.value(&series.sma75, current_price, Indicator::Ma75),
    };

    let stochastic = StochasticValue {
        k: latest.value(&series.stochastic.k, NEUTRAL_STOCHASTIC, Indicator::StochasticK),
        d: latest.value(&series.stochastic.d, NEUTRAL_STOCHASTIC, Indicator::StochasticD),
    };

    let ichimoku = IchimokuValue {
        tenkan_sen: latest.value(&series.ichimoku.tenkan_sen, current_price, Indicator::TenkanSen),
        kijun_sen: latest.value(&series.ichimoku.kijun_sen, current_price, Indicator::KijunSen),
        senkou_span_a: latest.value(&series.ichimoku.senkou_span_a, current_price, Indicator::SenkouSpanA),
        senkou_span_b: latest.value(&series.ichimoku.senkou_span_b, current_price, Indicator::SenkouSpanB),
    };

    IndicatorSnapshot {
        current_price,
        rsi,
        macd,
        bollinger_bands,
        moving_averages,
        stochastic,
        ichimoku,
        mode,
        neutral_fallbacks: latest.fallbacks,
    }
}

#[cfg(test)]
mod tests {
    use super::super::indicators::*;
    use crate::test_series;
    use approx::assert_relative_eq;

    // Helper function to create sample price data
    fn sample_prices() -> Vec<f64> {
        vec![
            44.34, 44.09, 44.15, 43.61, 44.33, 44.83, 45.10, 45.42, 45.84, 46.08,
            45.89, 46.03, 45.61, 46.28, 46.28, 46.00, 46.03, 46.41, 46.22, 45.64,
        ]
    }

    // Helper function to create sample high/low/close arrays
    fn sample_hlc() -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        let closes: Vec<f64> = (0..15).map(|i| 101.0 + i as f64).collect();
        let highs = closes.iter().map(|c| c + 1.0).collect();
        let lows = closes.iter().map(|c| c - 2.0).collect();
        (highs, lows, closes)
    }

    #[test]
    fn test_sma_basic() {
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let result = sma(&data, 3);

        assert_eq!(result.len(), 3);
        assert!((result[0] - 2.0).abs() < 0.001); // (1+2+3)/3 = 2
        assert!((result[1] - 3.0).abs() < 0.001); // (2+3+4)/3 = 3
        assert!((result[2] - 4.0).abs() < 0.001); // (3+4+5)/3 = 4
    }

    #[test]
    fn test_sma_insufficient_data() {
        let data = vec![1.0, 2.0];
        assert_eq!(sma(&data, 5).len(), 0);
        assert_eq!(sma(&data, 0).len(), 0);
    }

    #[test]
    fn test_sma_real_prices() {
        let prices = sample_prices();
        let result = sma(&prices, 5);

        assert_eq!(result.len(), prices.len() - 4);
        let expected_first = (44.34 + 44.09 + 44.15 + 43.61 + 44.33) / 5.0;
        assert!((result[0] - expected_first).abs() < 0.01);
    }

    #[test]
    fn test_ema_seeded_with_first_value() {
        let data = vec![22.0, 24.0, 23.0, 25.0, 26.0];
        let result = ema(&data, 3);

        assert_eq!(result.len(), data.len());
        assert_eq!(result[0], 22.0);
        // k = 0.5: 24*0.5 + 22*0.5 = 23, then 23*0.5 + 23*0.5 = 23
        assert_relative_eq!(result[1], 23.0);
        assert_relative_eq!(result[2], 23.0);
        assert_relative_eq!(result[3], 24.0);
    }

    #[test]
    fn test_ema_empty_data() {
        let data: Vec<f64> = vec![];
        assert_eq!(ema(&data, 5).len(), 0);
        assert_eq!(ema(&[1.0, 2.0], 0).len(), 0);
    }

    #[test]
    fn test_ema_constant_series_is_fixed_point() {
        let data = vec![1234.5; 40];
        for value in ema(&data, 12) {
            assert_relative_eq!(value, 1234.5, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_ema_increases_with_uptrend() {
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
        let result = ema(&data, 3);

        for i in 1..result.len() {
            assert!(result[i] > result[i - 1]);
        }
    }

    #[test]
    fn test_rsi_wilder_smoothing() {
        // deltas +1, -1, +1 with period 2:
        // initial avg gain 0.5 / loss 0.5 -> 50
        // smoothed gain 0.75 / loss 0.25 -> RS 3 -> 75
        let result = rsi(&[1.0, 2.0, 1.0, 2.0], 2);
        assert_eq!(result.len(), 2);
        assert_relative_eq!(result[0], 50.0);
        assert_relative_eq!(result[1], 75.0);
    }

    #[test]
    fn test_rsi_basic() {
        let prices = sample_prices();
        let result = rsi(&prices, 14);

        assert_eq!(result.len(), prices.len() - 14);
        for &value in &result {
            assert!((0.0..=100.0).contains(&value));
        }
    }

    #[test]
    fn test_rsi_insufficient_data() {
        assert_eq!(rsi(&[1.0, 2.0, 3.0], 14).len(), 0);
        // period deltas need period + 1 prices
        assert_eq!(rsi(&[1.0; 14], 14).len(), 0);
        assert_eq!(rsi(&[1.0; 15], 14).len(), 1);
    }

    #[test]
    fn test_rsi_zero_average_loss_is_100() {
        let uptrend: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
        for value in rsi(&uptrend, 14) {
            assert_eq!(value, 100.0);
        }

        // A flat window has no losses either
        for value in rsi(&[50.0; 20], 14) {
            assert_eq!(value, 100.0);
        }
    }

    #[test]
    fn test_rsi_downtrend_is_zero() {
        let downtrend: Vec<f64> = (0..30).map(|i| 200.0 - i as f64).collect();
        let result = rsi(&downtrend, 14);
        assert_relative_eq!(*result.last().unwrap(), 0.0);
    }

    #[test]
    fn test_macd_lengths_follow_ema_seeding() {
        let prices = sample_prices();
        let result = macd(&prices, 12, 26, 9);

        // First-value seeding keeps every series at full length
        assert_eq!(result.macd_line.len(), prices.len());
        assert_eq!(result.signal_line.len(), prices.len());
        assert_eq!(result.histogram.len(), prices.len());
    }

    #[test]
    fn test_macd_histogram() {
        let prices = sample_prices();
        let result = macd(&prices, 12, 26, 9);

        let offset = result.macd_line.len() - result.signal_line.len();
        for (i, &hist) in result.histogram.iter().enumerate() {
            let expected = result.macd_line[i + offset] - result.signal_line[i];
            assert!((hist - expected).abs() < 0.001);
        }
    }

    #[test]
    fn test_macd_constant_series_is_zero() {
        let result = macd(&[500.0; 60], 12, 26, 9);
        for value in result.macd_line.iter().chain(&result.signal_line).chain(&result.histogram) {
            assert_relative_eq!(*value, 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_macd_invalid_periods() {
        let prices = sample_prices();
        assert!(macd(&prices, 26, 12, 9).macd_line.is_empty());
        assert!(macd(&prices, 0, 26, 9).macd_line.is_empty());
        assert!(macd(&prices, 12, 26, 0).histogram.is_empty());
    }

    #[test]
    fn test_bollinger_bands_basic() {
        let prices = sample_prices();
        let result = bollinger_bands(&prices, 20, 2.0);

        assert_eq!(result.upper.len(), 1);
        assert_eq!(result.upper.len(), result.middle.len());
        assert_eq!(result.middle.len(), result.lower.len());
    }

    #[test]
    fn test_bollinger_bands_population_std_dev() {
        // mean 3, population variance 2
        let result = bollinger_bands(&[1.0, 2.0, 3.0, 4.0, 5.0], 5, 2.0);
        assert_relative_eq!(result.middle[0], 3.0);
        assert_relative_eq!(result.upper[0], 3.0 + 2.0 * 2f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(result.lower[0], 3.0 - 2.0 * 2f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_bollinger_bands_ordering() {
        let prices = sample_prices();
        let result = bollinger_bands(&prices, 10, 2.0);

        for i in 0..result.upper.len() {
            assert!(result.upper[i] > result.middle[i]);
            assert!(result.middle[i] > result.lower[i]);
        }
    }

    #[test]
    fn test_bollinger_bands_constant_prices_have_zero_width() {
        let result = bollinger_bands(&[100.0; 20], 10, 2.0);
        for i in 0..result.upper.len() {
            assert_eq!(result.upper[i], result.lower[i]);
        }
    }

    #[test]
    fn test_stochastic_basic() {
        let (highs, lows, closes) = sample_hlc();
        let result = stochastic(&highs, &lows, &closes, 14, 3);

        assert_eq!(result.k.len(), 2);
        assert_eq!(result.d.len(), 0);

        for &value in &result.k {
            assert!((0.0..=100.0).contains(&value));
        }
    }

    #[test]
    fn test_stochastic_value() {
        // highest high 12, lowest low 7, close 10 -> 60
        let result = stochastic(&[10.0, 12.0, 11.0], &[8.0, 9.0, 7.0], &[9.0, 11.0, 10.0], 3, 1);
        assert_eq!(result.k.len(), 1);
        assert_relative_eq!(result.k[0], 60.0);
        assert_relative_eq!(result.d[0], 60.0);
    }

    #[test]
    fn test_stochastic_zero_range_is_neutral() {
        let flat = vec![100.0; 20];
        let result = stochastic(&flat, &flat, &flat, 14, 3);
        assert_eq!(result.k.len(), 7);
        assert!(result.k.iter().all(|&k| k == 50.0));
        assert!(result.d.iter().all(|&d| d == 50.0));
    }

    #[test]
    fn test_stochastic_insufficient_data() {
        let (highs, lows, closes) = sample_hlc();
        let result = stochastic(&highs[..5], &lows[..5], &closes[..5], 14, 3);

        assert_eq!(result.k.len(), 0);
        assert_eq!(result.d.len(), 0);
    }

    #[test]
    fn test_ichimoku_alignment() {
        let highs: Vec<f64> = (0..60).map(|i| 110.0 + i as f64).collect();
        let lows: Vec<f64> = (0..60).map(|i| 90.0 + i as f64).collect();
        let result = ichimoku(&highs, &lows);

        assert_eq!(result.tenkan_sen.len(), 52);
        assert_eq!(result.kijun_sen.len(), 35);
        assert_eq!(result.senkou_span_a.len(), 35);
        assert_eq!(result.senkou_span_b.len(), 9);

        // Latest tenkan covers days 51..=59: (169 + 141) / 2
        assert_relative_eq!(*result.tenkan_sen.last().unwrap(), 155.0);
        // Latest kijun covers days 34..=59: (169 + 124) / 2
        assert_relative_eq!(*result.kijun_sen.last().unwrap(), 146.5);
        assert_relative_eq!(*result.senkou_span_a.last().unwrap(), (155.0 + 146.5) / 2.0);
        // Latest span B covers days 8..=59: (169 + 98) / 2
        assert_relative_eq!(*result.senkou_span_b.last().unwrap(), 133.5);

        // Every span A element pairs tenkan and kijun ending on the same day
        let offset = result.tenkan_sen.len() - result.kijun_sen.len();
        for (i, value) in result.senkou_span_a.iter().enumerate() {
            assert_relative_eq!(*value, (result.tenkan_sen[i + offset] + result.kijun_sen[i]) / 2.0);
        }
    }

    #[test]
    fn test_ichimoku_short_history() {
        let highs = vec![11.0; 30];
        let lows = vec![9.0; 30];
        let result = ichimoku(&highs, &lows);

        assert_eq!(result.tenkan_sen.len(), 22);
        assert_eq!(result.kijun_sen.len(), 5);
        assert!(result.senkou_span_b.is_empty());
        assert!(result.senkou_span_a.iter().all(|&v| v == 10.0));
    }

    #[test]
    fn test_compute_indicators_lengths() {
        let closes: Vec<f64> = (0..80).map(|i| 1000.0 + (i as f64 * 0.3).sin() * 20.0).collect();
        let series = compute_indicators(&test_series(&closes));

        assert_eq!(series.sma5.len(), 76);
        assert_eq!(series.sma25.len(), 56);
        assert_eq!(series.sma75.len(), 6);
        assert_eq!(series.rsi.len(), 66);
        assert_eq!(series.macd.histogram.len(), 80);
        assert_eq!(series.bollinger_bands.middle.len(), 61);
        assert_eq!(series.stochastic.k.len(), 67);
        assert_eq!(series.stochastic.d.len(), 65);
        assert_eq!(series.ichimoku.senkou_span_b.len(), 29);
    }

    #[test]
    fn test_compute_indicators_short_history_yields_empty_series() {
        let series = compute_indicators(&test_series(&[100.0, 101.0, 102.0]));

        assert!(series.sma5.is_empty());
        assert!(series.rsi.is_empty());
        assert!(series.bollinger_bands.upper.is_empty());
        assert!(series.stochastic.k.is_empty());
        assert!(series.ichimoku.tenkan_sen.is_empty());
        // EMA-based series never need warm-up
        assert_eq!(series.macd.histogram.len(), 3);
    }
}

#[cfg(test)]
mod properties {
    use super::super::indicators::*;
    use analysis_core::stats::population_std_dev;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn ema_of_constant_series_is_constant(value in 0.01f64..10_000.0, len in 1usize..200, period in 1usize..50) {
            let data = vec![value; len];
            let result = ema(&data, period);
            prop_assert_eq!(result.len(), len);
            for v in result {
                prop_assert!((v - value).abs() <= value * 1e-12);
            }
        }

        #[test]
        fn bollinger_width_is_twice_k_std_dev(data in prop::collection::vec(1.0f64..1_000.0, 20..120), k in 0.5f64..3.0) {
            let bands = bollinger_bands(&data, BOLLINGER_PERIOD, k);
            prop_assert_eq!(bands.upper.len(), data.len() - BOLLINGER_PERIOD + 1);
            for (i, window) in data.windows(BOLLINGER_PERIOD).enumerate() {
                let expected = 2.0 * k * population_std_dev(window);
                prop_assert!((bands.upper[i] - bands.lower[i] - expected).abs() < 1e-6);
            }
        }

        #[test]
        fn rsi_stays_in_range(data in prop::collection::vec(1.0f64..1_000.0, 15..120)) {
            for v in rsi(&data, RSI_PERIOD) {
                prop_assert!((0.0..=100.0).contains(&v));
            }
        }

        #[test]
        fn rsi_is_100_without_losses(start in 1.0f64..1_000.0, steps in prop::collection::vec(0.0f64..5.0, 15..60)) {
            let mut data = vec![start];
            for step in steps {
                let last = data[data.len() - 1];
                data.push(last + step);
            }
            for v in rsi(&data, RSI_PERIOD) {
                prop_assert_eq!(v, 100.0);
            }
        }
    }
}

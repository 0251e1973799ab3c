use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::AnalysisError;

/// Longest lookback of the indicator set (Ichimoku senkou span B).
/// A full analysis needs at least this many trading days.
pub const MIN_FULL_HISTORY: usize = 52;

/// One trading day of OHLCV data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl PricePoint {
    fn validate(&self, index: usize) -> Result<(), AnalysisError> {
        let fields = [
            ("open", self.open),
            ("high", self.high),
            ("low", self.low),
            ("close", self.close),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(AnalysisError::InvalidData(format!(
                    "{name} at index {index} ({}) is not a finite number",
                    self.date
                )));
            }
            if value < 0.0 {
                return Err(AnalysisError::InvalidData(format!(
                    "{name} at index {index} ({}) is negative: {value}",
                    self.date
                )));
            }
        }
        if self.close == 0.0 {
            return Err(AnalysisError::InvalidData(format!(
                "close at index {index} ({}) is zero",
                self.date
            )));
        }
        if self.high < self.low {
            return Err(AnalysisError::InvalidData(format!(
                "high {} below low {} at index {index} ({})",
                self.high, self.low, self.date
            )));
        }
        for (name, value) in [("open", self.open), ("close", self.close)] {
            if value < self.low || value > self.high {
                return Err(AnalysisError::InvalidData(format!(
                    "{name} {value} outside the day's range [{}, {}] at index {index} ({})",
                    self.low, self.high, self.date
                )));
            }
        }
        Ok(())
    }
}

/// Validated daily price history, oldest first.
///
/// Construction guarantees: non-empty, strictly increasing dates, finite
/// non-negative OHLC, positive close, `low <= open, close <= high`. Missing trading days
/// are simply absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PricePoint>", into = "Vec<PricePoint>")]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    pub fn new(points: Vec<PricePoint>) -> Result<Self, AnalysisError> {
        if points.is_empty() {
            return Err(AnalysisError::InvalidData("price series is empty".to_string()));
        }

        for (i, point) in points.iter().enumerate() {
            point.validate(i)?;
        }

        if let Some(i) = points.windows(2).position(|w| w[1].date <= w[0].date) {
            return Err(AnalysisError::InvalidData(format!(
                "dates must be strictly increasing: {} at index {} follows {}",
                points[i + 1].date,
                i + 1,
                points[i].date
            )));
        }

        Ok(Self { points })
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Most recent trading day. Always present for a constructed series.
    pub fn latest(&self) -> &PricePoint {
        &self.points[self.points.len() - 1]
    }

    pub fn current_price(&self) -> f64 {
        self.latest().close
    }

    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.close).collect()
    }

    pub fn highs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.high).collect()
    }

    pub fn lows(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.low).collect()
    }

    pub fn volumes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.volume as f64).collect()
    }

    /// Whether the series is long enough for every indicator's lookback.
    pub fn supports_full_analysis(&self) -> bool {
        self.points.len() >= MIN_FULL_HISTORY
    }
}

impl TryFrom<Vec<PricePoint>> for PriceSeries {
    type Error = AnalysisError;

    fn try_from(points: Vec<PricePoint>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<PriceSeries> for Vec<PricePoint> {
    fn from(series: PriceSeries) -> Self {
        series.points
    }
}

/// Balance-sheet ratios for one instrument. `None` means unknown, not zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Fundamentals {
    pub per: Option<f64>,
    pub pbr: Option<f64>,
    /// Return on equity, percent
    pub roe: Option<f64>,
    /// Dividend yield, percent
    pub dividend_yield: Option<f64>,
    pub market_cap: Option<f64>,
    pub revenue: Option<f64>,
}

/// Raw input for one instrument, as handed over by the data-source client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstrumentInput {
    pub symbol: String,
    #[serde(default)]
    pub name: Option<String>,
    pub prices: PriceSeries,
    #[serde(default)]
    pub fundamentals: Fundamentals,
}

/// Whether a technical analysis ran on the full lookback or on a short history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    Full,
    Simplified,
}

/// Latest-value slots of the snapshot, used to record neutral substitutions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Indicator {
    Rsi,
    Macd,
    BollingerBands,
    Ma5,
    Ma25,
    Ma75,
    StochasticK,
    StochasticD,
    TenkanSen,
    KijunSen,
    SenkouSpanA,
    SenkouSpanB,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdValue {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerValue {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

impl BollingerValue {
    /// Position of `price` inside the band: 0 at the lower band, 1 at the upper.
    /// A zero-width band reports the midpoint 0.5.
    pub fn position(&self, price: f64) -> f64 {
        let range = self.upper - self.lower;
        if range == 0.0 {
            return 0.5;
        }
        (price - self.lower) / range
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovingAverages {
    pub ma5: f64,
    pub ma25: f64,
    pub ma75: f64,
}

impl MovingAverages {
    pub fn is_full_uptrend(&self) -> bool {
        self.ma5 > self.ma25 && self.ma25 > self.ma75
    }

    pub fn is_full_downtrend(&self) -> bool {
        self.ma5 < self.ma25 && self.ma25 < self.ma75
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StochasticValue {
    pub k: f64,
    pub d: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IchimokuValue {
    pub tenkan_sen: f64,
    pub kijun_sen: f64,
    pub senkou_span_a: f64,
    pub senkou_span_b: f64,
}

impl IchimokuValue {
    pub fn cloud_top(&self) -> f64 {
        self.senkou_span_a.max(self.senkou_span_b)
    }

    pub fn cloud_bottom(&self) -> f64 {
        self.senkou_span_a.min(self.senkou_span_b)
    }
}

/// Latest value of every indicator plus the price they are judged against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorSnapshot {
    pub current_price: f64,
    pub rsi: f64,
    pub macd: MacdValue,
    pub bollinger_bands: BollingerValue,
    pub moving_averages: MovingAverages,
    pub stochastic: StochasticValue,
    pub ichimoku: IchimokuValue,
    pub mode: AnalysisMode,
    /// Slots whose value is a neutral default rather than a computed reading
    pub neutral_fallbacks: Vec<Indicator>,
}

/// Output of the technical scorer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalScore {
    /// 0-100
    pub score: u8,
    pub reasons: Vec<String>,
    pub risks: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalAnalysisResult {
    #[serde(flatten)]
    pub indicators: IndicatorSnapshot,
    #[serde(flatten)]
    pub scoring: TechnicalScore,
}

impl TechnicalAnalysisResult {
    pub fn score(&self) -> u8 {
        self.scoring.score
    }
}

/// Six fundamental sub-scores, each 0-100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundamentalScoreBreakdown {
    pub per_score: u8,
    pub pbr_score: u8,
    pub roe_score: u8,
    pub dividend_score: u8,
    pub growth_score: u8,
    pub stability_score: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundamentalAnalysisResult {
    #[serde(flatten)]
    pub breakdown: FundamentalScoreBreakdown,
    /// Weighted 0-100 score
    pub score: u8,
    pub reasons: Vec<String>,
    pub risks: Vec<String>,
}

/// Final recommendation label, ordered from weakest to strongest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Signal {
    #[serde(rename = "sell consideration")]
    SellConsideration,
    #[serde(rename = "hold/watch")]
    HoldWatch,
    #[serde(rename = "buy consideration")]
    BuyConsideration,
    #[serde(rename = "strong buy")]
    StrongBuy,
}

impl Signal {
    /// Human-readable label for the signal
    pub fn to_label(&self) -> &'static str {
        match self {
            Signal::SellConsideration => "sell consideration",
            Signal::HoldWatch => "hold/watch",
            Signal::BuyConsideration => "buy consideration",
            Signal::StrongBuy => "strong buy",
        }
    }
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_label())
    }
}

/// Composite buy-worthiness judgment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Judgment {
    /// 0-100
    pub score: u8,
    pub signal: Signal,
    pub reasons: Vec<String>,
    pub risks: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub risk_level: RiskLevel,
    pub risk_score: u32,
    pub risk_factors: Vec<String>,
}

/// Everything the presentation layer receives for one instrument
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub symbol: String,
    #[serde(default)]
    pub name: Option<String>,
    pub technical: TechnicalAnalysisResult,
    pub fundamental: FundamentalAnalysisResult,
    pub judgment: Judgment,
    pub risk_assessment: RiskAssessment,
    pub industry_comparison: Vec<String>,
    pub updated_at: DateTime<Utc>,
}

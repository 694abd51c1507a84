// File: crates/tvchart-core/src/series.rs
// Summary: Series model for ohlc, line and volume data as consumed by the chart front end.
// Notes:
// - The series type is derived from the point data, so a series can never carry
//   points of one kind under the label of another.

use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde::Serialize as DeriveSerialize;

use crate::theme::CandleColors;
use crate::types::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, DeriveSerialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesType {
    Ohlc,
    Line,
    Volume,
}

impl SeriesType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeriesType::Ohlc => "ohlc",
            SeriesType::Line => "line",
            SeriesType::Volume => "volume",
        }
    }
}

/// One candlestick bar. `time` is epoch seconds.
#[derive(Clone, Debug, PartialEq, DeriveSerialize)]
pub struct OhlcPoint {
    pub time: Value,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl OhlcPoint {
    /// Bullish bar: close strictly above open.
    pub fn is_up(&self) -> bool { self.close > self.open }
}

#[derive(Clone, Debug, PartialEq, DeriveSerialize)]
pub struct LinePoint {
    pub time: Value,
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq, DeriveSerialize)]
pub struct VolumePoint {
    pub time: Value,
    pub value: f64,
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, DeriveSerialize)]
#[serde(untagged)]
pub enum SeriesData {
    Ohlc(Vec<OhlcPoint>),
    Line(Vec<LinePoint>),
    Volume(Vec<VolumePoint>),
}

impl SeriesData {
    pub fn series_type(&self) -> SeriesType {
        match self {
            SeriesData::Ohlc(_) => SeriesType::Ohlc,
            SeriesData::Line(_) => SeriesType::Line,
            SeriesData::Volume(_) => SeriesType::Volume,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            SeriesData::Ohlc(p) => p.len(),
            SeriesData::Line(p) => p.len(),
            SeriesData::Volume(p) => p.len(),
        }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }
}

/// Candle body and wick colors merged into an ohlc series config.
#[derive(Clone, Debug, PartialEq, Eq, DeriveSerialize)]
pub struct CandleStyle {
    pub up_color: String,
    pub down_color: String,
    pub wick_up_color: String,
    pub wick_down_color: String,
}

impl From<CandleColors> for CandleStyle {
    fn from(c: CandleColors) -> Self {
        Self {
            up_color: c.up.to_string(),
            down_color: c.down.to_string(),
            wick_up_color: c.wick_up.to_string(),
            wick_down_color: c.wick_down.to_string(),
        }
    }
}

/// Presentation options of a series.
#[derive(Clone, Debug, PartialEq, DeriveSerialize)]
pub struct SeriesConfig {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub show_legend: bool,
    pub legend_index: usize,
    /// Date format the time column was parsed with; events inherit it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_format: Option<String>,
    #[serde(flatten)]
    pub candle: Option<CandleStyle>,
}

impl SeriesConfig {
    pub fn new(name: impl Into<String>, show_legend: bool, legend_index: usize) -> Self {
        Self { name: name.into(), color: None, show_legend, legend_index, date_format: None, candle: None }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    data: SeriesData,
    config: SeriesConfig,
}

impl Series {
    pub fn new(data: SeriesData, config: SeriesConfig) -> Self { Self { data, config } }

    pub fn ohlc(points: Vec<OhlcPoint>, config: SeriesConfig) -> Self {
        Self::new(SeriesData::Ohlc(points), config)
    }

    pub fn line(points: Vec<LinePoint>, config: SeriesConfig) -> Self {
        Self::new(SeriesData::Line(points), config)
    }

    pub fn volume(points: Vec<VolumePoint>, config: SeriesConfig) -> Self {
        Self::new(SeriesData::Volume(points), config)
    }

    pub fn series_type(&self) -> SeriesType { self.data.series_type() }

    pub fn data(&self) -> &SeriesData { &self.data }

    pub fn config(&self) -> &SeriesConfig { &self.config }

    pub fn len(&self) -> usize { self.data.len() }

    pub fn is_empty(&self) -> bool { self.data.is_empty() }

    /// Candles of an ohlc series; empty for other types.
    pub fn ohlc_points(&self) -> &[OhlcPoint] {
        match &self.data {
            SeriesData::Ohlc(p) => p,
            _ => &[],
        }
    }
}

/// Wire shape: `{"series": [...], "type": "...", "config": {...}}`.
impl Serialize for Series {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut st = serializer.serialize_struct("Series", 3)?;
        st.serialize_field("series", &self.data)?;
        st.serialize_field("type", &self.series_type())?;
        st.serialize_field("config", &self.config)?;
        st.end()
    }
}

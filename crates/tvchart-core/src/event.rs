// File: crates/tvchart-core/src/event.rs
// Summary: Point-in-time chart annotations (markers) and their fixed enumerations.

use serde::Serialize;
use std::str::FromStr;

use crate::error::PlotError;
use crate::types::Value;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum MarkerPosition {
    #[default]
    #[serde(rename = "aboveBar")]
    AboveBar,
    #[serde(rename = "belowBar")]
    BelowBar,
    #[serde(rename = "inBar")]
    InBar,
}

impl FromStr for MarkerPosition {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "aboveBar" => Ok(Self::AboveBar),
            "belowBar" => Ok(Self::BelowBar),
            "inBar" => Ok(Self::InBar),
            _ => Err(PlotError::InvalidEnumValue { field: "position", value: s.to_string() }),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum MarkerShape {
    #[serde(rename = "circle")]
    Circle,
    #[serde(rename = "square")]
    Square,
    #[serde(rename = "arrowUp")]
    ArrowUp,
    #[default]
    #[serde(rename = "arrowDown")]
    ArrowDown,
}

impl FromStr for MarkerShape {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "circle" => Ok(Self::Circle),
            "square" => Ok(Self::Square),
            "arrowUp" => Ok(Self::ArrowUp),
            "arrowDown" => Ok(Self::ArrowDown),
            _ => Err(PlotError::InvalidEnumValue { field: "shape", value: s.to_string() }),
        }
    }
}

/// Trade-signal kinds with a fixed look.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    Buy,
    Sell,
}

impl EventKind {
    pub const BUY_COLOR: &'static str = "#2196F3";
    pub const SELL_COLOR: &'static str = "#e91e63";

    pub fn position(&self) -> MarkerPosition {
        match self {
            EventKind::Buy => MarkerPosition::BelowBar,
            EventKind::Sell => MarkerPosition::AboveBar,
        }
    }

    pub fn shape(&self) -> MarkerShape {
        match self {
            EventKind::Buy => MarkerShape::ArrowUp,
            EventKind::Sell => MarkerShape::ArrowDown,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            EventKind::Buy => Self::BUY_COLOR,
            EventKind::Sell => Self::SELL_COLOR,
        }
    }

    pub fn label(&self, text: &str) -> String {
        match self {
            EventKind::Buy => format!("Buy @ {text}"),
            EventKind::Sell => format!("Sell @ {text}"),
        }
    }
}

impl FromStr for EventKind {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buy" => Ok(Self::Buy),
            "sell" => Ok(Self::Sell),
            _ => Err(PlotError::InvalidEnumValue { field: "type", value: s.to_string() }),
        }
    }
}

/// Parse an optional enumeration given as text. Empty text means "not given".
pub fn parse_optional<T: FromStr<Err = PlotError>>(raw: Option<&str>) -> Result<Option<T>, PlotError> {
    match raw {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some),
    }
}

/// Marker drawn at `time` (epoch seconds).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Event {
    pub time: Value,
    pub text: String,
    pub position: MarkerPosition,
    pub shape: MarkerShape,
    pub color: String,
}

impl Event {
    pub fn new(time: impl Into<Value>, text: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            text: text.into(),
            position: MarkerPosition::default(),
            shape: MarkerShape::default(),
            color: "#000".to_string(),
        }
    }

    /// Apply a trade-signal look, overriding position, shape, color and text.
    pub fn with_kind(mut self, kind: EventKind) -> Self {
        self.position = kind.position();
        self.shape = kind.shape();
        self.color = kind.color().to_string();
        self.text = kind.label(&self.text);
        self
    }

    /// Sort key; non-numeric times sort last.
    pub(crate) fn sort_key(&self) -> f64 {
        self.time.as_f64().unwrap_or(f64::INFINITY)
    }
}

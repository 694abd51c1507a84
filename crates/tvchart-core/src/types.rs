// File: crates/tvchart-core/src/types.rs
// Summary: Shared types (primitive values, raw input cells, plottable input, figure ids).

use serde::Serialize;
use std::fmt;

use crate::error::PlotError;

/// Number of leading OHLC columns: time, open, high, low, close.
pub const OHLC_COLUMNS: usize = 5;

/// A primitive value after normalization.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
}

impl Value {
    /// Numeric view of the value; strings have none.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            Value::Str(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_nan(&self) -> bool {
        matches!(self, Value::Float(v) if v.is_nan())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self { Value::Int(v) }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self { Value::Float(v) }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self { Value::Str(v.to_string()) }
}

impl From<String> for Value {
    fn from(v: String) -> Self { Value::Str(v) }
}

/// A raw element handed over by the caller, before validation.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
    Null,
}

impl Cell {
    pub fn type_name(&self) -> &'static str {
        match self {
            Cell::Int(_) => "int",
            Cell::Float(_) => "float",
            Cell::Str(_) => "str",
            Cell::Bool(_) => "bool",
            Cell::Null => "null",
        }
    }
}

impl TryFrom<Cell> for Value {
    type Error = PlotError;

    fn try_from(cell: Cell) -> Result<Self, Self::Error> {
        match cell {
            Cell::Int(v) => Ok(Value::Int(v)),
            Cell::Float(v) => Ok(Value::Float(v)),
            Cell::Str(s) => Ok(Value::Str(s)),
            other => Err(PlotError::UnsupportedType { found: other.type_name() }),
        }
    }
}

impl From<i64> for Cell {
    fn from(v: i64) -> Self { Cell::Int(v) }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self { Cell::Float(v) }
}

impl From<&str> for Cell {
    fn from(v: &str) -> Self { Cell::Str(v.to_string()) }
}

impl From<String> for Cell {
    fn from(v: String) -> Self { Cell::Str(v) }
}

impl From<bool> for Cell {
    fn from(v: bool) -> Self { Cell::Bool(v) }
}

/// Plottable input, decided by the caller rather than sniffed at runtime.
#[derive(Clone, Debug, PartialEq)]
pub enum PlotInput {
    /// Row-major table; every row must have the same width.
    Rows(Vec<Vec<Cell>>),
    /// One column of values.
    Vector(Vec<Cell>),
    Scalar(Cell),
    /// N-dimensional buffer stored row-major; only rank 0..=2 is plottable.
    Array { shape: Vec<usize>, data: Vec<Cell> },
}

impl PlotInput {
    pub fn array(shape: Vec<usize>, data: Vec<Cell>) -> Self {
        PlotInput::Array { shape, data }
    }
}

impl From<Vec<Vec<Cell>>> for PlotInput {
    fn from(rows: Vec<Vec<Cell>>) -> Self { PlotInput::Rows(rows) }
}

impl From<Vec<Vec<f64>>> for PlotInput {
    fn from(rows: Vec<Vec<f64>>) -> Self {
        PlotInput::Rows(rows.into_iter().map(|r| r.into_iter().map(Cell::Float).collect()).collect())
    }
}

impl From<Vec<Cell>> for PlotInput {
    fn from(values: Vec<Cell>) -> Self { PlotInput::Vector(values) }
}

impl From<Vec<f64>> for PlotInput {
    fn from(values: Vec<f64>) -> Self { PlotInput::Vector(values.into_iter().map(Cell::Float).collect()) }
}

impl From<&[f64]> for PlotInput {
    fn from(values: &[f64]) -> Self { PlotInput::Vector(values.iter().copied().map(Cell::Float).collect()) }
}

impl From<Vec<i64>> for PlotInput {
    fn from(values: Vec<i64>) -> Self { PlotInput::Vector(values.into_iter().map(Cell::Int).collect()) }
}

impl From<f64> for PlotInput {
    fn from(v: f64) -> Self { PlotInput::Scalar(Cell::Float(v)) }
}

/// Registry key of a figure. Generated ids are UUID v4 strings.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FigureId(String);

impl FigureId {
    pub fn new(id: impl Into<String>) -> Self { Self(id.into()) }

    pub fn generate() -> Self { Self(uuid::Uuid::new_v4().to_string()) }

    pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for FigureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

impl From<&str> for FigureId {
    fn from(id: &str) -> Self { Self::new(id) }
}

impl From<String> for FigureId {
    fn from(id: String) -> Self { Self(id) }
}

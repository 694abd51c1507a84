// File: crates/tvchart-core/src/normalize.rs
// Summary: Series normalizer; reshapes heterogeneous plottable input into uniform rows.

use crate::error::{PlotError, Result};
use crate::types::{Cell, PlotInput, Value};

/// Input after validation: primitive values only, rectangular when 2D.
#[derive(Clone, Debug, PartialEq)]
pub enum Normalized {
    Rows(Vec<Vec<Value>>),
    Vector(Vec<Value>),
    Scalar(Value),
}

impl Normalized {
    /// Number of dimensions: 2 for tables, 1 for vectors, 0 for scalars.
    pub fn dims(&self) -> usize {
        match self {
            Normalized::Rows(_) => 2,
            Normalized::Vector(_) => 1,
            Normalized::Scalar(_) => 0,
        }
    }

    /// Row count for tables and vectors; a scalar counts as one.
    pub fn len(&self) -> usize {
        match self {
            Normalized::Rows(rows) => rows.len(),
            Normalized::Vector(values) => values.len(),
            Normalized::Scalar(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Column count of a table, `None` for other shapes.
    pub fn columns(&self) -> Option<usize> {
        match self {
            Normalized::Rows(rows) => Some(rows.first().map_or(0, Vec::len)),
            _ => None,
        }
    }
}

/// Normalize `input` into rows of primitive values. Pure; never mutates state.
pub fn normalize(input: PlotInput) -> Result<Normalized> {
    match input {
        PlotInput::Rows(rows) => normalize_rows(rows),
        PlotInput::Vector(values) => normalize_vector(values),
        PlotInput::Scalar(cell) => Ok(Normalized::Scalar(Value::try_from(cell)?)),
        PlotInput::Array { shape, data } => normalize_array(shape, data),
    }
}

fn normalize_vector(values: Vec<Cell>) -> Result<Normalized> {
    let values = values.into_iter().map(Value::try_from).collect::<Result<Vec<_>>>()?;
    Ok(Normalized::Vector(values))
}

fn normalize_rows(rows: Vec<Vec<Cell>>) -> Result<Normalized> {
    let width = rows.first().map_or(0, Vec::len);
    let mut out = Vec::with_capacity(rows.len());
    for (i, row) in rows.into_iter().enumerate() {
        if row.len() != width {
            return Err(PlotError::UnsupportedShape(format!(
                "row {i} has {} columns, expected {width}",
                row.len()
            )));
        }
        out.push(row.into_iter().map(Value::try_from).collect::<Result<Vec<_>>>()?);
    }
    Ok(Normalized::Rows(out))
}

fn normalize_array(shape: Vec<usize>, data: Vec<Cell>) -> Result<Normalized> {
    if shape.len() > 2 {
        return Err(rank_error(&shape));
    }
    let expected = shape
        .iter()
        .try_fold(1usize, |acc, &d| acc.checked_mul(d))
        .ok_or_else(|| PlotError::UnsupportedShape(format!("shape {shape:?} overflows the element count")))?;
    if expected != data.len() {
        return Err(PlotError::UnsupportedShape(format!(
            "shape {shape:?} needs {expected} elements but buffer holds {}",
            data.len()
        )));
    }
    match shape.as_slice() {
        [] => {
            let cell = data.into_iter().next().unwrap_or(Cell::Null);
            Ok(Normalized::Scalar(Value::try_from(cell)?))
        }
        [_] => normalize_vector(data),
        [rows, cols] => {
            // A buffer cannot describe rows without columns.
            if *cols == 0 && *rows > 0 {
                return Err(PlotError::UnsupportedShape(format!("shape {shape:?} has zero-width rows")));
            }
            let mut out = Vec::with_capacity(*rows);
            let mut it = data.into_iter();
            for _ in 0..*rows {
                let row = it.by_ref().take(*cols).map(Value::try_from).collect::<Result<Vec<_>>>()?;
                out.push(row);
            }
            Ok(Normalized::Rows(out))
        }
        _ => Err(rank_error(&shape)),
    }
}

fn rank_error(shape: &[usize]) -> PlotError {
    PlotError::UnsupportedShape(format!("allowed only 1d or 2d array but got shape {shape:?}"))
}

/// Extract numeric values of a 1D input. `field` names the failing column.
pub(crate) fn numeric_column(values: &[Value], field: &'static str) -> Result<Vec<f64>> {
    values
        .iter()
        .map(|v| v.as_f64().ok_or(PlotError::NonNumeric { field }))
        .collect()
}

// File: crates/tvchart-core/src/plot.rs
// Summary: Plot operations on an explicit figure: candlestick, line, volume and event.
// Notes:
// - Every operation validates and builds its series or event completely before
//   touching the figure, so a failed call leaves the figure unchanged.

use tracing::debug;

use crate::config::{CandlestickOptions, EventOptions, LineOptions, NanPolicy, VolumeOptions};
use crate::error::{PlotError, Result};
use crate::event::{parse_optional, Event, EventKind, MarkerPosition, MarkerShape};
use crate::figure::Figure;
use crate::normalize::{normalize, numeric_column, Normalized};
use crate::series::{CandleStyle, LinePoint, OhlcPoint, Series, SeriesConfig, VolumePoint};
use crate::time::resolve_time;
use crate::types::{PlotInput, Value, OHLC_COLUMNS};

const PRICE_FIELDS: [&str; 4] = ["open", "high", "low", "close"];

/// Plot the primary ohlc series. Columns beyond the first five are ignored.
pub fn candlestick(fig: &mut Figure, input: impl Into<PlotInput>, opts: &CandlestickOptions) -> Result<()> {
    let rows = match normalize(input.into())? {
        Normalized::Rows(rows) => rows,
        other => return Err(PlotError::InvalidDimensionality { expected: 2, found: other.dims() }),
    };
    let columns = rows.first().map_or(0, Vec::len);
    if columns < OHLC_COLUMNS {
        return Err(PlotError::InsufficientColumns { expected: OHLC_COLUMNS, found: columns });
    }

    let format = opts.date_format.as_deref();
    let points = rows
        .into_iter()
        .map(|row| ohlc_point(row, format))
        .collect::<Result<Vec<_>>>()?;

    let mut config = SeriesConfig::new(opts.name.clone(), opts.show_legend, 0);
    config.date_format = opts.date_format.clone();
    config.candle = Some(CandleStyle::from(fig.theme().candle));
    fig.add_series(Series::ohlc(points, config))
}

fn ohlc_point(row: Vec<Value>, format: Option<&str>) -> Result<OhlcPoint> {
    let mut cells = row.into_iter();
    let time = cells
        .next()
        .ok_or(PlotError::InsufficientColumns { expected: OHLC_COLUMNS, found: 0 })?;
    let time = resolve_time(time, format)?;
    let mut prices = [0.0; 4];
    for (slot, (field, cell)) in prices.iter_mut().zip(PRICE_FIELDS.iter().zip(cells)) {
        *slot = cell.as_f64().ok_or(PlotError::NonNumeric { field: *field })?;
    }
    let [open, high, low, close] = prices;
    Ok(OhlcPoint { time, open, high, low, close })
}

/// Plot a line aligned to the primary series' times.
pub fn line(fig: &mut Figure, input: impl Into<PlotInput>, opts: &LineOptions, nan: NanPolicy) -> Result<()> {
    let values = aligned_values(fig, input.into(), nan)?;
    let candles = fig.primary_points()?;
    let points = zip_aligned(candles, &values, |c, value| LinePoint { time: c.time.clone(), value });

    let (default_name, default_color) = fig.next_line_defaults();
    let name = opts.name.clone().unwrap_or(default_name);
    let color = opts.color.clone().unwrap_or_else(|| default_color.to_string());
    let config = SeriesConfig::new(name, opts.show_legend, fig.next_legend_index()).with_color(color);
    fig.add_series(Series::line(points, config))
}

/// Plot volume bars aligned to the primary series, colored by candle direction.
pub fn volume(fig: &mut Figure, input: impl Into<PlotInput>, opts: &VolumeOptions, nan: NanPolicy) -> Result<()> {
    let values = aligned_values(fig, input.into(), nan)?;
    let theme = *fig.theme();
    let candles = fig.primary_points()?;
    let points = zip_aligned(candles, &values, |c, value| VolumePoint {
        time: c.time.clone(),
        value,
        color: theme.volume_color(c.is_up()).to_string(),
    });

    let config = SeriesConfig::new(opts.name.clone(), opts.show_legend, fig.next_legend_index());
    fig.add_series(Series::volume(points, config))
}

/// Normalize a 1D input and check it against the primary series length.
fn aligned_values(fig: &Figure, input: PlotInput, nan: NanPolicy) -> Result<Vec<f64>> {
    let values = match normalize(input)? {
        Normalized::Vector(values) => values,
        other => return Err(PlotError::InvalidDimensionality { expected: 1, found: other.dims() }),
    };
    let candles = fig.primary_points()?;
    if values.len() != candles.len() {
        return Err(PlotError::LengthMismatch { expected: candles.len(), found: values.len() });
    }
    let values = numeric_column(&values, "value")?;
    if nan == NanPolicy::Reject {
        if let Some(index) = values.iter().position(|v| v.is_nan()) {
            return Err(PlotError::NanValue { index });
        }
    }
    Ok(values)
}

/// Pair candles with values by position, skipping NaN values.
fn zip_aligned<P>(candles: &[OhlcPoint], values: &[f64], mut make: impl FnMut(&OhlcPoint, f64) -> P) -> Vec<P> {
    let points: Vec<P> = candles
        .iter()
        .zip(values)
        .filter(|(_, v)| !v.is_nan())
        .map(|(c, &v)| make(c, v))
        .collect();
    let dropped = values.len() - points.len();
    if dropped > 0 {
        debug!(dropped, "skipped NaN points");
    }
    points
}

/// Add a marker at `time`. Times are parsed with the explicit date format or,
/// failing that, the one the primary series was plotted with.
pub fn event(fig: &mut Figure, time: impl Into<Value>, text: &str, opts: &EventOptions) -> Result<()> {
    let position = parse_optional::<MarkerPosition>(opts.position.as_deref())?.unwrap_or_default();
    let shape = parse_optional::<MarkerShape>(opts.shape.as_deref())?.unwrap_or_default();
    let kind = parse_optional::<EventKind>(opts.kind.as_deref())?;

    let primary = fig.primary().ok_or(PlotError::MissingPrimarySeries)?;
    let format = opts
        .date_format
        .as_deref()
        .filter(|f| !f.is_empty())
        .or(primary.config().date_format.as_deref());
    let time = resolve_time(time.into(), format)?;

    let mut ev = Event {
        time,
        text: text.to_string(),
        position,
        shape,
        color: opts.color.clone().unwrap_or_else(|| "#000".to_string()),
    };
    if let Some(kind) = kind {
        ev = ev.with_kind(kind);
    }
    fig.add_event(ev);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_row_is_not_given_a_time() {
        let err = ohlc_point(Vec::new(), None).unwrap_err();
        assert_eq!(err, PlotError::InsufficientColumns { expected: OHLC_COLUMNS, found: 0 });
    }
}

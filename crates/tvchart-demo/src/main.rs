// File: crates/tvchart-demo/src/main.rs
// Summary: Demo loads an OHLC CSV, plots candles, moving averages, volume and trade events,
//          then writes one chart payload per figure.
// Usage: tvchart-demo [csv-path] [date-format|-] [out-dir]
//   e.g. tvchart-demo crates/tvchart-demo/data/sample.csv %Y-%m-%d

mod host;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tvchart_core::{
    CandlestickOptions, Cell, EventOptions, FigureId, LineOptions, PlotInput, Plotter, Value, VolumeOptions,
};

use host::JsonDirHost;

/// Rows of a loaded CSV, already in plottable shape.
struct OhlcTable {
    rows: Vec<Vec<Cell>>,
    volume: Vec<f64>,
    closes: Vec<f64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let raw = args.next().unwrap_or_else(|| "data.csv".to_string());
    let date_format = args.next().filter(|f| f != "-");
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| "target/out".to_string()));

    let (path, used_alt) = resolve_path(&raw)?;
    info!(path = %path.display(), "using input file");
    if used_alt {
        info!("extension swapped between .csv/.cvs");
    }

    let table = load_ohlc_csv(&path, date_format.is_some())
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    if table.rows.is_empty() {
        anyhow::bail!("no candles loaded; check headers/delimiter.");
    }
    info!(rows = table.rows.len(), "loaded candles");

    let mut plotter = Plotter::new();
    let name = path.file_stem().and_then(|s| s.to_str()).unwrap_or("OHLC").to_string();

    // 1) Light figure: candles, moving averages, volume and trade markers
    plotter.create_figure(Some(FigureId::new("main")), &name, "light")?;
    let mut candle_opts = CandlestickOptions::named(&name);
    candle_opts.date_format = date_format.clone();
    plotter.plot_candlestick(PlotInput::Rows(table.rows.clone()), &candle_opts)?;
    plotter.plot_line(sma(&table.closes, 20), &LineOptions::named("SMA 20"))?;
    plotter.plot_line(sma(&table.closes, 50), &LineOptions::default())?;
    plotter.plot_volume(table.volume.clone(), &VolumeOptions::default())?;

    if let Some((lo, hi)) = extremes(&table.closes) {
        let time_of = |i: usize| cell_to_value(&table.rows[i][0]);
        plotter.plot_event(time_of(lo), &format!("{:.4}", table.closes[lo]), &EventOptions::buy())?;
        plotter.plot_event(time_of(hi), &format!("{:.4}", table.closes[hi]), &EventOptions::sell())?;
        plotter.plot_event(time_of(0), "first bar", &EventOptions::default().shape("circle").position("belowBar"))?;
    }

    // 2) Untitled dark figure with candles and one average
    plotter.create_figure(None, "", "dark")?;
    plotter.plot_candlestick(PlotInput::Rows(table.rows), &candle_opts)?;
    plotter.plot_line(sma(&table.closes, 20), &LineOptions::default())?;

    let mut host = JsonDirHost::new(&out_dir);
    plotter.show(&mut host)?;
    for p in host.written() {
        println!("Wrote {}", p.display());
    }
    Ok(())
}

/// Resolve path, trying .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(raw: &str) -> Result<(PathBuf, bool)> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok((p.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

/// Load an OHLCV CSV. With `dated` the time column is kept as text for the
/// plotter to parse; otherwise it must be epoch seconds or milliseconds.
fn load_ohlc_csv(path: &Path, dated: bool) -> Result<OhlcTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    info!(?headers, "csv headers");

    let idx = |names: &[&str]| -> Option<usize> { headers.iter().position(|h| names.contains(&h.as_str())) };

    let i_time = idx(&["time", "timestamp", "open_time", "date", "datetime"])
        .context("no time/date column")?;
    let i_open = idx(&["open", "o"]).context("no open column")?;
    let i_high = idx(&["high", "h"]).context("no high column")?;
    let i_low = idx(&["low", "l"]).context("no low column")?;
    let i_close = idx(&["close", "c", "adj_close", "close_price"]).context("no close column")?;
    let i_volume = idx(&["volume", "vol", "v"]);
    if i_volume.is_none() {
        warn!("no volume column; volume bars will be empty");
    }

    let mut table = OhlcTable { rows: Vec::new(), volume: Vec::new(), closes: Vec::new() };
    for (line, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let parse = |i: usize| -> Option<f64> { rec.get(i).and_then(|s| s.trim().replace(',', "").parse::<f64>().ok()) };

        let raw_time = rec.get(i_time).unwrap_or("").trim();
        let time = if dated {
            Cell::from(raw_time)
        } else {
            match parse_epoch(raw_time) {
                Some(t) => Cell::Int(t),
                None => {
                    warn!(line, raw_time, "skipping row with unreadable time");
                    continue;
                }
            }
        };

        let (o, h, l, c) = (parse(i_open), parse(i_high), parse(i_low), parse(i_close));
        if let (Some(o), Some(h), Some(l), Some(c)) = (o, h, l, c) {
            table.rows.push(vec![time, Cell::Float(o), Cell::Float(h), Cell::Float(l), Cell::Float(c)]);
            table.closes.push(c);
            table.volume.push(i_volume.and_then(parse).unwrap_or(f64::NAN));
        } else {
            warn!(line, "skipping row with missing prices");
        }
    }
    Ok(table)
}

/// Epoch seconds from seconds or milliseconds.
fn parse_epoch(s: &str) -> Option<i64> {
    let n = s.parse::<i64>().ok()?;
    if n > 10_i64.pow(12) {
        Some(n / 1000)
    } else {
        Some(n)
    }
}

fn cell_to_value(cell: &Cell) -> Value {
    match cell {
        Cell::Int(v) => Value::Int(*v),
        Cell::Float(v) => Value::Float(*v),
        Cell::Str(s) => Value::Str(s.clone()),
        Cell::Bool(_) | Cell::Null => Value::Float(f64::NAN),
    }
}

/// Simple moving average padded with NaN until `period` values are seen.
fn sma(data: &[f64], period: usize) -> Vec<f64> {
    let mut out = vec![f64::NAN; data.len()];
    if period == 0 {
        return out;
    }
    let mut sum = 0.0f64;
    for i in 0..data.len() {
        sum += data[i];
        if i >= period {
            sum -= data[i - period];
        }
        if i + 1 >= period {
            out[i] = sum / period as f64;
        }
    }
    out
}

/// Positions of the lowest and highest value.
fn extremes(v: &[f64]) -> Option<(usize, usize)> {
    if v.is_empty() {
        return None;
    }
    let (mut lo, mut hi) = (0, 0);
    for (i, &x) in v.iter().enumerate() {
        if x < v[lo] { lo = i; }
        if x > v[hi] { hi = i; }
    }
    Some((lo, hi))
}

fn swap_ext(p: &Path) -> Option<std::path::PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => {
            alt.set_extension("csv");
            Some(alt)
        }
        "csv" => {
            alt.set_extension("cvs");
            Some(alt)
        }
        _ => None,
    }
}

// File: crates/tvchart-core/tests/figure_model.rs
// Purpose: Validate figure invariants: single ohlc series first, ordered events, derived defaults.

use std::io;
use std::sync::{Arc, Mutex};

use tvchart_core::series::{LinePoint, OhlcPoint};
use tvchart_core::{Event, Figure, PlotError, Series, SeriesConfig, SeriesType, Theme, Value};

fn candles() -> Series {
    let points = (0..3)
        .map(|i| OhlcPoint { time: Value::Int(i), open: 1.0, high: 2.0, low: 0.5, close: 1.5 })
        .collect();
    Series::ohlc(points, SeriesConfig::new("BTC", true, 0))
}

fn a_line(name: &str) -> Series {
    Series::line(vec![LinePoint { time: Value::Int(0), value: 1.0 }], SeriesConfig::new(name, true, 1))
}

#[test]
fn ohlc_is_moved_to_front() {
    let mut fig = Figure::new("t", Theme::light());
    fig.add_series(a_line("a")).unwrap();
    fig.add_series(candles()).unwrap();
    fig.add_series(a_line("b")).unwrap();

    let kinds: Vec<_> = fig.series().iter().map(Series::series_type).collect();
    assert_eq!(kinds, vec![SeriesType::Ohlc, SeriesType::Line, SeriesType::Line]);
    assert_eq!(fig.series()[1].config().name, "a");
    assert_eq!(fig.series()[2].config().name, "b");
}

#[test]
fn second_ohlc_is_rejected() {
    let mut fig = Figure::new("t", Theme::dark());
    fig.add_series(candles()).unwrap();
    assert_eq!(fig.add_series(candles()), Err(PlotError::DuplicatePrimarySeries));
    assert_eq!(fig.count_of(SeriesType::Ohlc), 1);
}

/// Shared buffer the fmt subscriber writes into.
#[derive(Clone, Default)]
struct LogBuf(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> { Ok(()) }
}

#[test]
fn rejected_ohlc_is_not_logged_as_added() {
    let buf = LogBuf::default();
    let writer = buf.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let mut fig = Figure::new("t", Theme::dark());
    tracing::subscriber::with_default(subscriber, || {
        fig.add_series(candles()).unwrap();
        assert!(fig.add_series(candles()).is_err());
    });

    let logs = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
    assert_eq!(logs.matches("adding series").count(), 1, "{logs}");
}

#[test]
fn events_stay_sorted_by_time() {
    let mut fig = Figure::new("t", Theme::light());
    for t in [50i64, 10, 30] {
        fig.add_event(Event::new(t, format!("at {t}")));
    }
    let times: Vec<_> = fig.events().iter().map(|e| e.time.clone()).collect();
    assert_eq!(times, vec![Value::Int(10), Value::Int(30), Value::Int(50)]);
}

#[test]
fn equal_times_keep_insertion_order() {
    let mut fig = Figure::new("t", Theme::light());
    fig.add_event(Event::new(20i64, "first"));
    fig.add_event(Event::new(10i64, "early"));
    fig.add_event(Event::new(20.0, "second"));
    let texts: Vec<_> = fig.events().iter().map(|e| e.text.as_str()).collect();
    assert_eq!(texts, vec!["early", "first", "second"]);
}

#[test]
fn line_defaults_follow_existing_lines() {
    let mut fig = Figure::new("t", Theme::light());
    assert_eq!(fig.next_line_defaults(), ("Line 1".to_string(), Theme::light().line_palette[0]));
    fig.add_series(candles()).unwrap();
    fig.add_series(a_line("a")).unwrap();
    let (name, color) = fig.next_line_defaults();
    assert_eq!(name, "Line 2");
    assert_eq!(color, Theme::light().line_palette[1]);
    assert_eq!(fig.next_legend_index(), 2);
}

#[test]
fn config_is_taken_from_theme() {
    let theme = Theme::solarized_dark();
    let fig = Figure::new("", theme);
    assert_eq!(fig.config().background_color, theme.background);
    assert_eq!(fig.config().grid_color, theme.grid);
}

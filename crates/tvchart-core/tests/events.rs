// File: crates/tvchart-core/tests/events.rs
// Purpose: Validate event plotting: enum validation, buy/sell overrides, date inheritance, ordering.

use tvchart_core::{
    CandlestickOptions, Cell, EventKind, EventOptions, MarkerPosition, MarkerShape, PlotError, PlotInput, Plotter,
    Value,
};

fn dated_candles(p: &mut Plotter) {
    let rows = ["2021-01-01", "2021-01-02", "2021-01-03"]
        .iter()
        .map(|d| vec![Cell::from(*d), Cell::Int(1), Cell::Int(2), Cell::Int(0), Cell::Int(1)])
        .collect();
    p.plot_candlestick(PlotInput::Rows(rows), &CandlestickOptions::named("X").date_format("%Y-%m-%d"))
        .expect("candles");
}

fn epoch_candles(p: &mut Plotter) {
    p.plot_candlestick(vec![vec![10.0, 1.0, 2.0, 0.5, 1.5]], &CandlestickOptions::default()).expect("candles");
}

#[test]
fn sell_overrides_explicit_look() {
    let mut p = Plotter::new();
    epoch_candles(&mut p);
    let opts = EventOptions::sell().position("belowBar").shape("circle").color("#abcdef");
    p.plot_event(10i64, "314", &opts).unwrap();
    let ev = &p.current().unwrap().events()[0];
    assert_eq!(ev.position, MarkerPosition::AboveBar);
    assert_eq!(ev.shape, MarkerShape::ArrowDown);
    assert_eq!(ev.color, EventKind::SELL_COLOR);
    assert_eq!(ev.text, "Sell @ 314");
}

#[test]
fn buy_uses_its_own_look() {
    let mut p = Plotter::new();
    epoch_candles(&mut p);
    p.plot_event(10i64, "366", &EventOptions::buy()).unwrap();
    let ev = &p.current().unwrap().events()[0];
    assert_eq!(ev.position, MarkerPosition::BelowBar);
    assert_eq!(ev.shape, MarkerShape::ArrowUp);
    assert_eq!(ev.color, EventKind::BUY_COLOR);
    assert_eq!(ev.text, "Buy @ 366");
}

#[test]
fn defaults_apply_when_unset_or_empty() {
    let mut p = Plotter::new();
    epoch_candles(&mut p);
    p.plot_event(10i64, "note", &EventOptions::default().position("").shape("")).unwrap();
    let ev = &p.current().unwrap().events()[0];
    assert_eq!(ev.position, MarkerPosition::AboveBar);
    assert_eq!(ev.shape, MarkerShape::ArrowDown);
    assert_eq!(ev.color, "#000");
    assert_eq!(ev.text, "note");
}

#[test]
fn invalid_enums_are_rejected_without_side_effects() {
    let mut p = Plotter::new();
    epoch_candles(&mut p);
    p.plot_event(10i64, "ok", &EventOptions::default()).unwrap();

    let err = p.plot_event(10i64, "x", &EventOptions::default().position("bogus")).unwrap_err();
    assert_eq!(err, PlotError::InvalidEnumValue { field: "position", value: "bogus".into() });
    let err = p.plot_event(10i64, "x", &EventOptions::default().shape("star")).unwrap_err();
    assert_eq!(err, PlotError::InvalidEnumValue { field: "shape", value: "star".into() });
    let opts = EventOptions { kind: Some("hold".into()), ..EventOptions::default() };
    let err = p.plot_event(10i64, "x", &opts).unwrap_err();
    assert_eq!(err, PlotError::InvalidEnumValue { field: "type", value: "hold".into() });

    assert_eq!(p.current().unwrap().events().len(), 1);
}

#[test]
fn date_format_is_inherited_from_candles() {
    let mut p = Plotter::new();
    dated_candles(&mut p);
    p.plot_event("2021-01-02", "mid", &EventOptions::default()).unwrap();
    assert_eq!(p.current().unwrap().events()[0].time, Value::Int(1_609_545_600));
}

#[test]
fn explicit_date_format_wins() {
    let mut p = Plotter::new();
    dated_candles(&mut p);
    p.plot_event("02/01/2021", "mid", &EventOptions::default().date_format("%d/%m/%Y")).unwrap();
    assert_eq!(p.current().unwrap().events()[0].time, Value::Int(1_609_545_600));
}

#[test]
fn empty_date_format_falls_back_to_candles() {
    let mut p = Plotter::new();
    dated_candles(&mut p);
    p.plot_event("2021-01-02", "mid", &EventOptions::default().date_format("")).unwrap();
    assert_eq!(p.current().unwrap().events()[0].time, Value::Int(1_609_545_600));
}

#[test]
fn events_need_a_primary_series() {
    let mut p = Plotter::new();
    assert_eq!(p.plot_event(1i64, "x", &EventOptions::default()), Err(PlotError::MissingPrimarySeries));
    assert!(p.registry().is_empty());

    p.create_figure(None, "empty", "dark").unwrap();
    assert_eq!(p.plot_event(1i64, "x", &EventOptions::default()), Err(PlotError::MissingPrimarySeries));
}

#[test]
fn events_are_ordered_regardless_of_insertion() {
    let mut p = Plotter::new();
    epoch_candles(&mut p);
    for t in [50i64, 10, 30] {
        p.plot_event(t, "e", &EventOptions::default()).unwrap();
    }
    let times: Vec<_> = p.current().unwrap().events().iter().map(|e| e.time.clone()).collect();
    assert_eq!(times, vec![Value::Int(10), Value::Int(30), Value::Int(50)]);
}

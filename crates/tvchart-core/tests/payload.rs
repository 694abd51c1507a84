// File: crates/tvchart-core/tests/payload.rs
// Purpose: Validate the transport payload shape and the pull/show bridge.

use serde_json::Value as Json;
use tvchart_core::{
    CandlestickOptions, DataBridge, EventOptions, FigureId, LineOptions, PlotError, Plotter, RenderHost,
};

fn sample() -> (Plotter, FigureId) {
    let mut p = Plotter::new();
    let id = p.create_figure(Some(FigureId::new("main")), "BTC", "dark").unwrap();
    p.plot_candlestick(
        vec![vec![100.0, 1.0, 3.0, 0.5, 2.0], vec![200.0, 2.0, 3.0, 0.5, 1.0]],
        &CandlestickOptions::named("BTCUSDT"),
    )
    .unwrap();
    p.plot_line(vec![1.5, 1.6], &LineOptions::named("SMA")).unwrap();
    p.plot_event(200i64, "late", &EventOptions::default()).unwrap();
    p.plot_event(100i64, "early", &EventOptions::sell()).unwrap();
    (p, id)
}

#[test]
fn payload_round_trip_keeps_all_entities() {
    let (p, id) = sample();
    let payload = serde_json::to_value(p.request_data(&id).unwrap()).unwrap();

    let series = payload["series"].as_array().unwrap();
    assert_eq!(series.len(), 2);
    assert_eq!(series[0]["type"], "ohlc");
    assert_eq!(series[1]["type"], "line");
    assert_eq!(series[0]["series"].as_array().unwrap().len(), 2);

    let events = payload["events"].as_array().unwrap();
    let texts: Vec<_> = events.iter().map(|e| e["text"].as_str().unwrap()).collect();
    assert_eq!(texts, vec!["Sell @ early", "late"]);

    assert_eq!(payload["config"]["backgroundColor"], "#000000");
    for key in ["textColor", "borderColor", "gridColor"] {
        assert!(payload["config"][key].is_string(), "missing {key}");
    }
}

#[test]
fn series_and_event_wire_keys() {
    let (p, id) = sample();
    let payload = serde_json::to_value(p.request_data(&id).unwrap()).unwrap();

    let candle = &payload["series"][0]["series"][0];
    assert_eq!(candle["time"], 100.0);
    assert_eq!(candle["open"], 1.0);
    assert_eq!(candle["close"], 2.0);

    let cfg = &payload["series"][0]["config"];
    assert_eq!(cfg["name"], "BTCUSDT");
    assert_eq!(cfg["legend_index"], 0);
    assert_eq!(cfg["show_legend"], true);
    assert!(cfg["up_color"].is_string() && cfg["wick_down_color"].is_string());

    let line = &payload["series"][1];
    assert_eq!(line["config"]["color"], "rgba(69,114,167,255)");
    assert_eq!(line["series"][1], serde_json::json!({ "time": 200.0, "value": 1.6 }));

    let ev = &payload["events"][0];
    assert_eq!(ev["position"], "aboveBar");
    assert_eq!(ev["shape"], "arrowDown");
    assert_eq!(ev["color"], "#e91e63");
    assert_eq!(ev["time"], 100);
}

#[test]
fn unknown_figure_cannot_be_pulled() {
    let (p, _) = sample();
    let err = p.request_data(&FigureId::new("nope")).unwrap_err();
    assert_eq!(err, PlotError::UnknownFigure("nope".into()));
}

#[derive(Default)]
struct RecordingHost {
    windows: Vec<(String, String)>,
    runs: usize,
}

impl RenderHost for RecordingHost {
    fn open(&mut self, title: &str, bridge: &DataBridge<'_>) -> anyhow::Result<()> {
        self.windows.push((title.to_string(), bridge.request_data_json()?));
        Ok(())
    }

    fn run(&mut self) -> anyhow::Result<()> {
        self.runs += 1;
        Ok(())
    }
}

#[test]
fn show_opens_every_figure_in_order() {
    let (mut p, _) = sample();
    p.create_figure(None, "", "light").unwrap();
    let mut host = RecordingHost::default();
    p.show(&mut host).unwrap();

    let titles: Vec<_> = host.windows.iter().map(|(t, _)| t.as_str()).collect();
    assert_eq!(titles, vec!["BTC", "Figure 2"]);
    assert_eq!(host.runs, 1);

    let first: Json = serde_json::from_str(&host.windows[0].1).unwrap();
    assert_eq!(first["series"][0]["type"], "ohlc");
    let second: Json = serde_json::from_str(&host.windows[1].1).unwrap();
    assert!(second["series"].as_array().unwrap().is_empty());
}

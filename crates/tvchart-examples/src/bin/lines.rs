// File: crates/tvchart-examples/src/bin/lines.rs
// Summary: Minimal example that builds one figure on an explicit handle and prints its payload JSON.

use tvchart_core::{plot, CandlestickOptions, DataBridge, EventOptions, Figure, LineOptions, NanPolicy, Theme};

fn main() {
    // Five daily candles as epoch seconds
    let day = 86_400.0;
    let candles: Vec<Vec<f64>> = vec![
        vec![0.0, 1.0, 1.4, 0.9, 1.2],
        vec![day, 1.2, 1.3, 0.7, 0.8],
        vec![2.0 * day, 0.8, 1.9, 0.8, 1.8],
        vec![3.0 * day, 1.8, 1.9, 1.3, 1.4],
        vec![4.0 * day, 1.4, 2.1, 1.4, 2.0],
    ];
    let trend = vec![f64::NAN, 1.0, 1.3, 1.5, 1.7];

    let mut fig = Figure::new("Lines", Theme::dark());
    plot::candlestick(&mut fig, candles, &CandlestickOptions::named("DEMO")).expect("candles");
    plot::line(&mut fig, trend, &LineOptions::named("Trend"), NanPolicy::Drop).expect("line");
    plot::event(&mut fig, 2 * 86_400_i64, "breakout", &EventOptions::buy()).expect("event");

    let json = DataBridge::new(&fig).request_data_json().expect("serialize payload");
    println!("{json}");
}

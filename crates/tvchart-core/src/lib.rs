// File: crates/tvchart-core/src/lib.rs
// Summary: Core library entry point; exports the figure model, plot operations and payload bridge.

pub mod bridge;
pub mod config;
pub mod error;
pub mod event;
pub mod figure;
pub mod normalize;
pub mod plot;
pub mod plotter;
pub mod registry;
pub mod series;
pub mod theme;
pub mod time;
pub mod types;

pub use bridge::{DataBridge, RenderHost};
pub use config::{CandlestickOptions, EventOptions, LineOptions, NanPolicy, PlotterConfig, VolumeOptions};
pub use error::{PlotError, Result};
pub use event::{Event, EventKind, MarkerPosition, MarkerShape};
pub use figure::{Figure, FigureConfig, FigurePayload};
pub use normalize::{normalize, Normalized};
pub use plotter::Plotter;
pub use registry::FigureRegistry;
pub use series::{Series, SeriesConfig, SeriesType};
pub use theme::Theme;
pub use types::{Cell, FigureId, PlotInput, Value};

// File: crates/tvchart-core/src/plotter.rs
// Summary: Plotter context: owns the figure registry and applies plot operations to the current figure.

use anyhow::Context;

use crate::bridge::{DataBridge, RenderHost};
use crate::config::{CandlestickOptions, EventOptions, LineOptions, PlotterConfig, VolumeOptions};
use crate::error::{PlotError, Result};
use crate::figure::{Figure, FigurePayload};
use crate::plot;
use crate::registry::FigureRegistry;
use crate::types::{FigureId, PlotInput, Value};

/// Convenience layer over [`plot`]: operations without an explicit figure act on
/// the current one, creating a figure with the configured defaults when needed.
#[derive(Debug, Default)]
pub struct Plotter {
    registry: FigureRegistry,
    config: PlotterConfig,
}

impl Plotter {
    pub fn new() -> Self { Self::default() }

    pub fn with_config(config: PlotterConfig) -> Self {
        Self { registry: FigureRegistry::new(), config }
    }

    pub fn config(&self) -> &PlotterConfig { &self.config }

    pub fn registry(&self) -> &FigureRegistry { &self.registry }

    /// Create a new figure and make it current.
    pub fn create_figure(&mut self, id: Option<FigureId>, title: &str, theme: &str) -> Result<FigureId> {
        self.registry.create_figure(id, title, theme)
    }

    /// Select `id`, creating it with `title`/`theme` when it does not exist yet.
    pub fn select_figure(&mut self, id: impl Into<FigureId>, title: &str, theme: &str) -> Result<FigureId> {
        self.registry.select_figure(id.into(), title, theme)
    }

    /// `create_figure` without an id, `select_figure` with one.
    pub fn figure(&mut self, id: Option<FigureId>, title: &str, theme: &str) -> Result<FigureId> {
        match id {
            Some(id) => self.select_figure(id, title, theme),
            None => self.create_figure(None, title, theme),
        }
    }

    pub fn current(&self) -> Option<&Figure> { self.registry.current() }

    pub fn current_id(&self) -> Option<&FigureId> { self.registry.current_id() }

    pub fn get(&self, id: &FigureId) -> Option<&Figure> { self.registry.get(id) }

    fn current_or_create(&mut self) -> Result<&mut Figure> {
        let id = match self.registry.current_id() {
            Some(id) => id.clone(),
            None => self.registry.create_figure(None, &self.config.default_title, &self.config.default_theme)?,
        };
        self.registry.get_mut(&id).ok_or_else(|| PlotError::UnknownFigure(id.to_string()))
    }

    pub fn plot_candlestick(&mut self, input: impl Into<PlotInput>, opts: &CandlestickOptions) -> Result<()> {
        plot::candlestick(self.current_or_create()?, input, opts)
    }

    pub fn plot_line(&mut self, input: impl Into<PlotInput>, opts: &LineOptions) -> Result<()> {
        let nan = self.config.nan_policy;
        plot::line(self.current_or_create()?, input, opts, nan)
    }

    pub fn plot_volume(&mut self, input: impl Into<PlotInput>, opts: &VolumeOptions) -> Result<()> {
        let nan = self.config.nan_policy;
        plot::volume(self.current_or_create()?, input, opts, nan)
    }

    /// Unlike the series operations, this never creates a figure: without a
    /// current figure it fails with `MissingPrimarySeries`.
    pub fn plot_event(&mut self, time: impl Into<Value>, text: &str, opts: &EventOptions) -> Result<()> {
        let fig = self.registry.current_mut().ok_or(PlotError::MissingPrimarySeries)?;
        plot::event(fig, time, text, opts)
    }

    /// Pull the payload of figure `id`.
    pub fn request_data(&self, id: &FigureId) -> Result<FigurePayload> {
        self.registry
            .get(id)
            .map(|f| DataBridge::new(f).request_data())
            .ok_or_else(|| PlotError::UnknownFigure(id.to_string()))
    }

    /// Hand every figure to `host`, titled `Figure {n}` when untitled, then run it.
    pub fn show(&self, host: &mut dyn RenderHost) -> anyhow::Result<()> {
        for (idx, (id, figure)) in self.registry.iter().enumerate() {
            let title = if figure.title().is_empty() {
                format!("Figure {}", idx + 1)
            } else {
                figure.title().to_string()
            };
            host.open(&title, &DataBridge::new(figure))
                .with_context(|| format!("opening figure {id} ('{title}')"))?;
        }
        host.run()
    }
}

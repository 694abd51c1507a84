// File: crates/tvchart-core/src/figure.rs
// Summary: Figure aggregate: one primary ohlc series, auxiliary series, and time-ordered events.

use serde::Serialize;
use tracing::debug;

use crate::error::{PlotError, Result};
use crate::event::Event;
use crate::series::{OhlcPoint, Series, SeriesType};
use crate::theme::Theme;

/// Figure-level presentation colors, fixed at creation from the theme.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FigureConfig {
    pub background_color: String,
    pub text_color: String,
    pub border_color: String,
    pub grid_color: String,
}

impl From<&Theme> for FigureConfig {
    fn from(t: &Theme) -> Self {
        Self {
            background_color: t.background.to_string(),
            text_color: t.text.to_string(),
            border_color: t.border.to_string(),
            grid_color: t.grid.to_string(),
        }
    }
}

/// Transport payload pulled by the rendering host.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FigurePayload {
    pub config: FigureConfig,
    pub series: Vec<Series>,
    pub events: Vec<Event>,
}

#[derive(Clone, Debug)]
pub struct Figure {
    title: String,
    theme: Theme,
    config: FigureConfig,
    series: Vec<Series>,
    events: Vec<Event>,
}

impl Figure {
    pub fn new(title: impl Into<String>, theme: Theme) -> Self {
        Self {
            title: title.into(),
            config: FigureConfig::from(&theme),
            theme,
            series: Vec::new(),
            events: Vec::new(),
        }
    }

    pub fn title(&self) -> &str { &self.title }

    pub fn theme(&self) -> &Theme { &self.theme }

    pub fn config(&self) -> &FigureConfig { &self.config }

    /// Series in display order; the ohlc series, when present, is first.
    pub fn series(&self) -> &[Series] { &self.series }

    /// Events sorted ascending by time.
    pub fn events(&self) -> &[Event] { &self.events }

    /// The ohlc series anchoring the time axis.
    pub fn primary(&self) -> Option<&Series> {
        self.series.first().filter(|s| s.series_type() == SeriesType::Ohlc)
    }

    /// Candles of the primary series, or `MissingPrimarySeries`.
    pub fn primary_points(&self) -> Result<&[OhlcPoint]> {
        self.primary().map(Series::ohlc_points).ok_or(PlotError::MissingPrimarySeries)
    }

    pub fn count_of(&self, kind: SeriesType) -> usize {
        self.series.iter().filter(|s| s.series_type() == kind).count()
    }

    /// Legend slot for the next series: one past every series showing a legend.
    pub fn next_legend_index(&self) -> usize {
        self.series.iter().filter(|s| s.config().show_legend).count()
    }

    /// Default name and palette color for the next line series.
    pub fn next_line_defaults(&self) -> (String, &'static str) {
        let n = self.count_of(SeriesType::Line);
        (format!("Line {}", n + 1), self.theme.line_color(n))
    }

    /// Add a series. An ohlc series is placed first and may exist only once;
    /// everything else is appended in call order.
    pub fn add_series(&mut self, series: Series) -> Result<()> {
        if series.series_type() == SeriesType::Ohlc && self.primary().is_some() {
            return Err(PlotError::DuplicatePrimarySeries);
        }
        debug!(
            figure = %self.title,
            kind = series.series_type().as_str(),
            name = %series.config().name,
            points = series.len(),
            "adding series"
        );
        if series.series_type() == SeriesType::Ohlc {
            self.series.insert(0, series);
        } else {
            self.series.push(series);
        }
        Ok(())
    }

    /// Insert `event` keeping events ordered by time; ties keep insertion order.
    pub fn add_event(&mut self, event: Event) {
        let key = event.sort_key();
        let at = self.events.partition_point(|e| e.sort_key().total_cmp(&key).is_le());
        debug!(figure = %self.title, time = %event.time, at, "adding event");
        self.events.insert(at, event);
    }

    pub fn serialize(&self) -> FigurePayload {
        FigurePayload {
            config: self.config.clone(),
            series: self.series.clone(),
            events: self.events.clone(),
        }
    }
}

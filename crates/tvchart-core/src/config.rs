// File: crates/tvchart-core/src/config.rs
// Summary: Plotter-wide configuration (default theme/title, NaN handling) and per-call options.

/// What to do with NaN values in line and volume inputs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NanPolicy {
    /// Silently skip the point; the bar keeps no value for that series.
    #[default]
    Drop,
    /// Fail the call with `PlotError::NanValue`.
    Reject,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlotterConfig {
    /// Theme of implicitly created figures.
    pub default_theme: String,
    /// Title of implicitly created figures.
    pub default_title: String,
    pub nan_policy: NanPolicy,
}

impl Default for PlotterConfig {
    fn default() -> Self {
        Self {
            default_theme: "light".to_string(),
            default_title: String::new(),
            nan_policy: NanPolicy::Drop,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandlestickOptions {
    pub name: String,
    /// strftime-style format of the time column; `None` means epoch seconds.
    pub date_format: Option<String>,
    pub show_legend: bool,
}

impl Default for CandlestickOptions {
    fn default() -> Self {
        Self { name: String::new(), date_format: None, show_legend: true }
    }
}

impl CandlestickOptions {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }

    pub fn date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = Some(format.into());
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineOptions {
    /// Defaults to `Line {n}`.
    pub name: Option<String>,
    /// Defaults to the theme palette, cycled per line.
    pub color: Option<String>,
    pub show_legend: bool,
}

impl Default for LineOptions {
    fn default() -> Self {
        Self { name: None, color: None, show_legend: true }
    }
}

impl LineOptions {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: Some(name.into()), ..Self::default() }
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn hide_legend(mut self) -> Self {
        self.show_legend = false;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VolumeOptions {
    pub name: String,
    pub show_legend: bool,
}

impl Default for VolumeOptions {
    fn default() -> Self {
        Self { name: "Vol".to_string(), show_legend: true }
    }
}

/// Event options are text so they can come straight from user input;
/// they are validated when the event is plotted. Empty text counts as unset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventOptions {
    /// Defaults to the primary series' date format.
    pub date_format: Option<String>,
    /// `buy` or `sell`; overrides position, shape, color and prefixes the text.
    pub kind: Option<String>,
    /// `aboveBar` (default), `belowBar` or `inBar`.
    pub position: Option<String>,
    /// `circle`, `square`, `arrowUp` or `arrowDown` (default).
    pub shape: Option<String>,
    /// Defaults to `#000`.
    pub color: Option<String>,
}

impl EventOptions {
    pub fn buy() -> Self {
        Self { kind: Some("buy".to_string()), ..Self::default() }
    }

    pub fn sell() -> Self {
        Self { kind: Some("sell".to_string()), ..Self::default() }
    }

    pub fn date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = Some(format.into());
        self
    }

    pub fn position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    pub fn shape(mut self, shape: impl Into<String>) -> Self {
        self.shape = Some(shape.into());
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

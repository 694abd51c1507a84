// File: crates/tvchart-core/src/theme.rs
// Summary: Static palette table (light/dark and friends) consumed read-only by figures.

use crate::error::{PlotError, Result};

/// CSS color strings, passed through verbatim to the rendering front end.
pub type Color = &'static str;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CandleColors {
    pub up: Color,
    pub down: Color,
    pub wick_up: Color,
    pub wick_down: Color,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub text: Color,
    pub border: Color,
    pub grid: Color,
    pub candle: CandleColors,
    /// Line colors, cycled by the index of the line within its figure.
    pub line_palette: &'static [Color],
    pub volume_up: Color,
    pub volume_down: Color,
}

const CLASSIC_PALETTE: &[Color] = &[
    "rgba(69,114,167,255)",
    "rgba(170,70,67,255)",
    "rgba(137,165,78,255)",
    "rgba(113,88,143,255)",
    "rgba(65,152,175,255)",
    "rgba(219,132,61,255)",
    "rgba(147,169,207,255)",
];

const SOLARIZED_PALETTE: &[Color] = &[
    "#268bd2", // blue
    "#dc322f", // red
    "#859900", // green
    "#6c71c4", // violet
    "#2aa198", // cyan
    "#cb4b16", // orange
    "#b58900", // yellow
];

const CLASSIC_CANDLES: CandleColors = CandleColors {
    up: "rgb(38,166,154)",
    down: "rgb(255,82,82)",
    wick_up: "rgb(38,166,154)",
    wick_down: "rgb(255,82,82)",
};

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: "#000000",
            text: "rgba(255, 255, 255, 0.9)",
            border: "rgba(197, 203, 206, 0.8)",
            grid: "rgba(197, 203, 206, 0.5)",
            candle: CLASSIC_CANDLES,
            line_palette: CLASSIC_PALETTE,
            volume_up: "rgba(0, 150, 136, 0.8)",
            volume_down: "rgba(255,82,82, 0.8)",
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: "#ffffff",
            text: "rgba(33, 56, 77, 1)",
            border: "rgba(197, 203, 206, 1)",
            grid: "rgba(197, 203, 206, 0.5)",
            candle: CLASSIC_CANDLES,
            line_palette: CLASSIC_PALETTE,
            volume_up: "rgba(0, 150, 136, 0.8)",
            volume_down: "rgba(255,82,82, 0.8)",
        }
    }

    pub fn solarized_dark() -> Self {
        Self {
            name: "solarized-dark",
            background: "#002b36", // base03
            text: "#eee8d5",       // base2
            border: "#93a1a1",     // base1
            grid: "#073642",       // base02
            candle: CandleColors { up: "#2aa198", down: "#dc322f", wick_up: "#2aa198", wick_down: "#dc322f" },
            line_palette: SOLARIZED_PALETTE,
            volume_up: "rgba(42, 161, 152, 0.8)",
            volume_down: "rgba(220, 50, 47, 0.8)",
        }
    }

    pub fn solarized_light() -> Self {
        Self {
            name: "solarized-light",
            background: "#fdf6e3", // base3
            text: "#002b36",       // base03
            border: "#657b83",     // base00
            grid: "#eee8d5",       // base2
            candle: CandleColors { up: "#2aa198", down: "#dc322f", wick_up: "#2aa198", wick_down: "#dc322f" },
            line_palette: SOLARIZED_PALETTE,
            volume_up: "rgba(42, 161, 152, 0.8)",
            volume_down: "rgba(220, 50, 47, 0.8)",
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: "#000000",
            text: "#ffffff",
            border: "#ffffff",
            grid: "#222222",
            candle: CandleColors { up: "#00ff00", down: "#ff0000", wick_up: "#00ff00", wick_down: "#ff0000" },
            line_palette: &["#00ffff", "#ffff00", "#ff00ff", "#ffffff", "#00aaff", "#ff8800", "#88ff88"],
            volume_up: "rgba(0, 255, 0, 0.8)",
            volume_down: "rgba(255, 0, 0, 0.8)",
        }
    }

    /// Palette color for the `index`-th line of a figure, wrapping around.
    pub fn line_color(&self, index: usize) -> Color {
        self.line_palette[index % self.line_palette.len()]
    }

    pub fn volume_color(&self, up: bool) -> Color {
        if up { self.volume_up } else { self.volume_down }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::light(),
        Theme::dark(),
        Theme::solarized_dark(),
        Theme::solarized_light(),
        Theme::high_contrast_dark(),
    ]
}

/// Find a theme by its `name` (case-insensitive).
pub fn find(name: &str) -> Result<Theme> {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| PlotError::UnknownTheme(name.to_string()))
}

//! Immutable theme and layout configuration for the rendering layer.
//!
//! Everything here is a `const`: renderers read these values but never hold
//! state of their own, so identical inputs always produce identical markup.

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub bg: &'static str,
    pub card_bg: &'static str,
    pub border: &'static str,
    pub link: &'static str,
    pub text: &'static str,
    pub secondary: &'static str,
    pub muted: &'static str,
}

pub const THEME: Theme = Theme {
    bg: "#0d1117",
    card_bg: "#161b22",
    border: "#30363d",
    link: "#58a6ff",
    text: "#c9d1d9",
    secondary: "#8b949e",
    muted: "#6e7681",
};

pub const FONT: &str = "-apple-system,BlinkMacSystemFont,Segoe UI,Helvetica,Arial,sans-serif";

#[derive(Clone, Copy, Debug)]
pub struct Layout {
    pub width: f64,
    pub pad_x: f64,
    pub pad_y: f64,
    pub section_gap: f64,
    pub bar_label_width: f64,
    pub bar_height: f64,
    pub bar_row_height: f64,
    pub bar_max_width: f64,
}

pub const LAYOUT: Layout = Layout {
    width: 808.0,
    pad_x: 24.0,
    pad_y: 24.0,
    section_gap: 30.0,
    bar_label_width: 150.0,
    bar_height: 18.0,
    bar_row_height: 28.0,
    bar_max_width: 500.0,
};

pub const BAR_COLORS: [&str; 8] = [
    "#58a6ff", "#3fb950", "#d29922", "#f85149", "#bc8cff", "#39d2c0", "#db61a2", "#79c0ff",
];

/// Fallback swatch for languages the origin data carries no color for.
pub const FALLBACK_COLOR: &str = "#8b949e";

/// Flame glyph color for recently-active markers.
pub const FLAME_COLOR: &str = "#f85149";

//! A small typed builder for SVG markup.
//!
//! Attribute values and text content are escaped on insertion, attributes
//! keep insertion order, and childless shape tags self-close, so the output
//! is well-formed and byte-stable for identical inputs.

use crate::text::escape_xml;
use crate::theme::FLAME_COLOR;

const SELF_CLOSING: [&str; 8] = [
    "circle", "rect", "line", "path", "ellipse", "polygon", "polyline", "use",
];

/// Formats a coordinate/length with up to two decimals, trimming trailing
/// zeros: 24.0 -> "24", 333.333... -> "333.33".
pub fn fmt_num(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        return format!("{}", value.round() as i64);
    }
    let s = format!("{value:.2}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

pub struct SvgElement {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: String,
}

impl SvgElement {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: String::new(),
        }
    }

    /// Adds an attribute; the value is escaped.
    pub fn attr(mut self, name: &'static str, value: impl AsRef<str>) -> Self {
        self.attrs.push((name, escape_attr(value.as_ref())));
        self
    }

    /// Adds a numeric attribute formatted via [`fmt_num`].
    pub fn num(mut self, name: &'static str, value: f64) -> Self {
        self.attrs.push((name, fmt_num(value)));
        self
    }

    /// Appends escaped text content.
    pub fn text(mut self, content: &str) -> Self {
        self.children.push_str(&escape_xml(content));
        self
    }

    /// Appends pre-rendered child markup verbatim.
    pub fn raw(mut self, markup: &str) -> Self {
        self.children.push_str(markup);
        self
    }

    pub fn finish(self) -> String {
        let mut out = String::new();
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
        if self.children.is_empty() && SELF_CLOSING.contains(&self.tag) {
            out.push_str("/>");
        } else {
            out.push('>');
            out.push_str(&self.children);
            out.push_str("</");
            out.push_str(self.tag);
            out.push('>');
        }
        out
    }
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

const FLAME_PATH: &str = "M5.5 0C5.9 2.1 4.1 3.4 3 4.8 1.9 6.2 1.5 7.4 1.5 8.6c0 2.4 1.8 4.2 4.2 4.2s4.2-1.8 4.2-4.2c0-1.6-.8-3-1.8-4.1.1 1.2-.4 2.1-1.3 2.5.4-2.4-.3-5.3-1.3-7z";

/// A small flame glyph anchored at its top-left corner, used to flag
/// recently-active items.
pub fn flame_icon(x: f64, y: f64) -> String {
    SvgElement::new("path")
        .attr("transform", format!("translate({} {})", fmt_num(x), fmt_num(y)))
        .attr("d", FLAME_PATH)
        .attr("fill", FLAME_COLOR)
        .attr("fill-opacity", "0.9")
        .finish()
}

//! Document wrapper: the outer `<svg>` canvas with shared style defs, and
//! the left-fold that stacks section blocks down a running y-cursor.

use crate::components::bar_chart::render_bar_chart;
use crate::components::section::render_section_header;
use crate::markup::{SvgElement, fmt_num};
use crate::model::{SectionBody, SectionDef};
use crate::theme::{FONT, LAYOUT, THEME};

/// Shared text styles embedded once per SVG document.
pub fn style_defs() -> String {
    let css = format!(
        "\n  .t {{ font-family: {font}; }}\n  .t-h {{ font-size: 13px; fill: {text}; letter-spacing: 1.5px; font-weight: 600; }}\n  .t-sub {{ font-size: 11px; fill: {muted}; }}\n  .t-label {{ font-size: 12px; fill: {secondary}; }}\n  .t-value {{ font-size: 11px; fill: {muted}; }}\n  .t-subhdr {{ font-size: 11px; fill: {secondary}; letter-spacing: 1px; font-weight: 600; }}\n  .t-stat-label {{ font-size: 10px; fill: {secondary}; font-weight: 600; }}\n  .t-stat-value {{ font-size: 22px; font-weight: 700; }}\n  .t-card-title {{ font-size: 12px; fill: {link}; font-weight: 700; }}\n  .t-card-detail {{ font-size: 11px; fill: {secondary}; }}\n  .t-pill {{ font-size: 11px; font-weight: 600; }}\n",
        font = FONT,
        text = THEME.text,
        muted = THEME.muted,
        secondary = THEME.secondary,
        link = THEME.link,
    );
    format!("<defs><style>{css}</style></defs>")
}

fn svg_root(body: &str, height: f64) -> String {
    let background = SvgElement::new("rect")
        .num("width", LAYOUT.width)
        .num("height", height)
        .attr("rx", "12")
        .attr("fill", THEME.bg)
        .finish();
    SvgElement::new("svg")
        .attr("xmlns", "http://www.w3.org/2000/svg")
        .num("width", LAYOUT.width)
        .num("height", height)
        .attr(
            "viewBox",
            format!("0 0 {} {}", fmt_num(LAYOUT.width), fmt_num(height)),
        )
        .raw(&style_defs())
        .raw(&background)
        .raw(body)
        .finish()
}

/// Wraps one already-rendered section block in a standalone, self-sized
/// canvas.
pub fn wrap_section_svg(markup: &str, height: f64) -> String {
    svg_root(markup, height)
}

/// Stacks every section into one document: a single y-cursor starts at the
/// top padding and is advanced by each header and body height plus the
/// fixed inter-section gap. Final height = cursor + bottom padding.
pub fn compose_document(sections: &[SectionDef]) -> String {
    let mut y = LAYOUT.pad_y;
    let mut body = String::new();

    for section in sections {
        let header = render_section_header(&section.title, section.subtitle.as_deref(), y);
        body.push_str(&header.markup);
        y += header.height;

        let rendered = match &section.body {
            SectionBody::Producer(producer) => producer(y),
            SectionBody::Bars { items, options } => render_bar_chart(items, y, options),
        };
        body.push_str(&rendered.markup);
        y += rendered.height + LAYOUT.section_gap;
    }

    svg_root(&body, y + LAYOUT.pad_y)
}

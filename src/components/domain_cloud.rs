//! Domain tag cloud: a greedy left-to-right, top-to-bottom pill flow.
//!
//! Pill width is estimated from character count times an empirical
//! per-character constant; the cursor wraps to the next row only when the
//! pill would overflow the row bound and the cursor is not already at the
//! row start, so an overflow-forced single-pill row is allowed.

use crate::markup::SvgElement;
use crate::model::{DomainItem, RenderResult};
use crate::text::truncate;
use crate::theme::{BAR_COLORS, LAYOUT};

const MAX_ROW_WIDTH: f64 = 760.0;
const GAP_X: f64 = 10.0;
const GAP_Y: f64 = 10.0;

pub fn render_domain_cloud(domains: &[DomainItem], y: f64) -> RenderResult {
    if domains.is_empty() {
        return RenderResult::empty();
    }

    let max_count = domains.iter().map(|d| d.count).max().unwrap_or(1).max(1);
    let mut markup = String::new();
    let mut cx = LAYOUT.pad_x;
    let mut cy = y;
    let mut max_row_y = cy;

    for (i, domain) in domains.iter().enumerate() {
        let scale = 0.7 + (domain.count as f64 / max_count as f64) * 0.6;
        let font_size = (11.0 * scale).round();
        let pill_h = (28.0 * scale).round();
        let label = truncate(&domain.name, 30);
        let pill_w = (label.chars().count() as f64 * font_size * 0.55).ceil() + 28.0;
        let color = BAR_COLORS[i % BAR_COLORS.len()];

        if cx + pill_w > LAYOUT.pad_x + MAX_ROW_WIDTH && cx > LAYOUT.pad_x {
            cx = LAYOUT.pad_x;
            cy += pill_h + GAP_Y;
        }

        markup.push_str(
            &SvgElement::new("rect")
                .num("x", cx)
                .num("y", cy)
                .num("width", pill_w)
                .num("height", pill_h)
                .num("rx", pill_h / 2.0)
                .attr("fill", color)
                .attr("fill-opacity", "0.15")
                .attr("stroke", color)
                .attr("stroke-opacity", "0.4")
                .attr("stroke-width", "1")
                .finish(),
        );
        markup.push_str(
            &SvgElement::new("text")
                .num("x", cx + pill_w / 2.0)
                .num("y", cy + pill_h / 2.0 + font_size / 3.0)
                .attr("fill", color)
                .num("font-size", font_size)
                .attr("class", "t t-pill")
                .attr("text-anchor", "middle")
                .text(&label)
                .finish(),
        );

        max_row_y = max_row_y.max(cy + pill_h);
        cx += pill_w + GAP_X;
    }

    RenderResult {
        markup,
        height: max_row_y - y + 4.0,
    }
}

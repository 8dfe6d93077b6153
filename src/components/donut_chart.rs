//! Language donut: percentage arcs drawn as offset dash strokes around a
//! fixed circle, with a legend list beside it.

use std::f64::consts::PI;

use crate::markup::{SvgElement, flame_icon, fmt_num};
use crate::model::{LanguageItem, RenderResult};
use crate::theme::{BAR_COLORS, LAYOUT, THEME};

const RADIUS: f64 = 70.0;
const STROKE_WIDTH: f64 = 28.0;
const LEGEND_ROW_HEIGHT: f64 = 24.0;
const MIN_HEIGHT: f64 = 180.0;

pub fn render_donut_chart(items: &[LanguageItem], y: f64) -> RenderResult {
    let cx = LAYOUT.pad_x + 90.0;
    let cy = y + 90.0;
    let circumference = 2.0 * PI * RADIUS;

    // Arcs tile the circle without gaps: each starts where the previous
    // one's dash ended.
    let mut offset = 0.0;
    let mut markup = String::new();
    for (i, item) in items.iter().enumerate() {
        let pct = item.percent.parse::<f64>().unwrap_or(0.0) / 100.0;
        let dash = pct * circumference;
        markup.push_str(
            &SvgElement::new("circle")
                .num("cx", cx)
                .num("cy", cy)
                .num("r", RADIUS)
                .attr("fill", "none")
                .attr("stroke", arc_color(item, i))
                .num("stroke-width", STROKE_WIDTH)
                .attr(
                    "stroke-dasharray",
                    format!("{} {}", fmt_num(dash), fmt_num(circumference - dash)),
                )
                .attr("stroke-dashoffset", fmt_num(-offset))
                .attr(
                    "transform",
                    format!("rotate(-90 {} {})", fmt_num(cx), fmt_num(cy)),
                )
                .attr("opacity", "0.85")
                .finish(),
        );
        offset += dash;
    }

    markup.push_str(
        &SvgElement::new("text")
            .num("x", cx)
            .num("y", cy + 5.0)
            .attr("class", "t")
            .attr("fill", THEME.text)
            .attr("font-size", "14")
            .attr("font-weight", "700")
            .attr("text-anchor", "middle")
            .text(&items.len().to_string())
            .finish(),
    );
    markup.push_str(
        &SvgElement::new("text")
            .num("x", cx)
            .num("y", cy + 20.0)
            .attr("class", "t")
            .attr("fill", THEME.muted)
            .attr("font-size", "10")
            .attr("text-anchor", "middle")
            .text("languages")
            .finish(),
    );

    let legend_x = LAYOUT.pad_x + 220.0;
    for (i, item) in items.iter().enumerate() {
        let ly = y + 10.0 + i as f64 * LEGEND_ROW_HEIGHT;
        markup.push_str(
            &SvgElement::new("rect")
                .num("x", legend_x)
                .num("y", ly)
                .attr("width", "12")
                .attr("height", "12")
                .attr("rx", "2")
                .attr("fill", arc_color(item, i))
                .attr("opacity", "0.85")
                .finish(),
        );
        markup.push_str(
            &SvgElement::new("text")
                .num("x", legend_x + 20.0)
                .num("y", ly + 10.0)
                .attr("class", "t t-label")
                .text(&item.name)
                .finish(),
        );
        markup.push_str(
            &SvgElement::new("text")
                .num("x", legend_x + 200.0)
                .num("y", ly + 10.0)
                .attr("class", "t t-value")
                .attr("text-anchor", "end")
                .text(&format!("{}%", item.percent))
                .finish(),
        );
        if item.trending {
            markup.push_str(&flame_icon(legend_x + 250.0, ly - 6.0));
        }
    }

    let height = MIN_HEIGHT.max(items.len() as f64 * LEGEND_ROW_HEIGHT + 20.0);
    RenderResult { markup, height }
}

fn arc_color<'a>(item: &'a LanguageItem, index: usize) -> &'a str {
    if item.color.is_empty() {
        BAR_COLORS[index % BAR_COLORS.len()]
    } else {
        &item.color
    }
}

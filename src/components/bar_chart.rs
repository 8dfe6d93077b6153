//! Ranked horizontal bar list: fixed-height rows, proportional bar widths
//! floored at a minimum sliver so near-zero values stay visible.

use crate::markup::{SvgElement, flame_icon};
use crate::model::{BarItem, BarOptions, RenderResult};
use crate::text::truncate;
use crate::theme::{BAR_COLORS, LAYOUT};

/// Minimum visible bar width for zero/near-zero values.
const MIN_BAR_WIDTH: f64 = 4.0;

pub fn render_bar_chart(items: &[BarItem], y: f64, options: &BarOptions) -> RenderResult {
    if items.is_empty() {
        return RenderResult::empty();
    }

    let max_value = items.iter().map(|i| i.value).max().unwrap_or(1).max(1);
    let mut markup = String::new();

    for (i, item) in items.iter().enumerate() {
        let ry = y + i as f64 * LAYOUT.bar_row_height;
        let bar_width =
            ((item.value as f64 / max_value as f64) * LAYOUT.bar_max_width).max(MIN_BAR_WIDTH);
        let color = if options.use_item_colors {
            item.color
                .as_deref()
                .unwrap_or(BAR_COLORS[i % BAR_COLORS.len()])
        } else {
            BAR_COLORS[i % BAR_COLORS.len()]
        };
        let value_label = match &item.percent {
            Some(percent) => format!("{percent}%"),
            None => item.value.to_string(),
        };

        markup.push_str(
            &SvgElement::new("text")
                .num("x", LAYOUT.pad_x)
                .num("y", ry + 14.0)
                .attr("class", "t t-label")
                .text(&truncate(&item.name, 20))
                .finish(),
        );
        markup.push_str(
            &SvgElement::new("rect")
                .num("x", LAYOUT.pad_x + LAYOUT.bar_label_width)
                .num("y", ry + 2.0)
                .num("width", bar_width)
                .num("height", LAYOUT.bar_height)
                .attr("rx", "3")
                .attr("fill", color)
                .attr("opacity", "0.85")
                .finish(),
        );
        markup.push_str(
            &SvgElement::new("text")
                .num("x", LAYOUT.pad_x + LAYOUT.bar_label_width + bar_width + 8.0)
                .num("y", ry + 14.0)
                .attr("class", "t t-value")
                .text(&value_label)
                .finish(),
        );
        if item.trending {
            markup.push_str(&flame_icon(LAYOUT.width - LAYOUT.pad_x - 16.0, ry + 2.0));
        }
    }

    RenderResult {
        markup,
        height: items.len() as f64 * LAYOUT.bar_row_height,
    }
}

//! Fixed-height row of equal-width stat cards. Layout assumes a small,
//! known card count; there is no overflow handling.

use crate::markup::SvgElement;
use crate::model::{RenderResult, StatItem};
use crate::theme::{BAR_COLORS, LAYOUT, THEME};

const CARD_WIDTH: f64 = 140.0;
const CARD_HEIGHT: f64 = 72.0;
const CARD_GAP: f64 = 15.0;

pub fn render_stat_cards(stats: &[StatItem], y: f64) -> RenderResult {
    if stats.is_empty() {
        return RenderResult::empty();
    }

    let colors = [
        BAR_COLORS[0],
        BAR_COLORS[1],
        BAR_COLORS[2],
        BAR_COLORS[4],
        BAR_COLORS[5],
    ];
    let mut markup = String::new();

    for (i, stat) in stats.iter().enumerate() {
        let cx = LAYOUT.pad_x + i as f64 * (CARD_WIDTH + CARD_GAP);
        let color = colors[i % colors.len()];

        markup.push_str(
            &SvgElement::new("rect")
                .num("x", cx)
                .num("y", y)
                .num("width", CARD_WIDTH)
                .num("height", CARD_HEIGHT)
                .attr("rx", "8")
                .attr("fill", THEME.card_bg)
                .attr("stroke", THEME.border)
                .attr("stroke-width", "1")
                .finish(),
        );
        markup.push_str(
            &SvgElement::new("circle")
                .num("cx", cx + 14.0)
                .num("cy", y + 16.0)
                .attr("r", "4")
                .attr("fill", color)
                .finish(),
        );
        markup.push_str(
            &SvgElement::new("text")
                .num("x", cx + 24.0)
                .num("y", y + 20.0)
                .attr("class", "t t-stat-label")
                .text(&stat.label)
                .finish(),
        );
        markup.push_str(
            &SvgElement::new("text")
                .num("x", cx + CARD_WIDTH / 2.0)
                .num("y", y + 52.0)
                .attr("fill", color)
                .attr("class", "t t-stat-value")
                .attr("text-anchor", "middle")
                .text(&stat.value)
                .finish(),
        );
    }

    RenderResult {
        markup,
        height: CARD_HEIGHT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(label: &str, value: &str) -> StatItem {
        StatItem {
            label: label.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn empty_input_is_zero_height_empty_markup() {
        let result = render_stat_cards(&[], 0.0);
        assert_eq!(result.height, 0.0);
        assert_eq!(result.markup, "");
    }

    #[test]
    fn height_is_fixed_regardless_of_count() {
        let one = render_stat_cards(&[stat("COMMITS", "1,204")], 0.0);
        let four = render_stat_cards(
            &[
                stat("COMMITS", "1,204"),
                stat("PRS", "87"),
                stat("REVIEWS", "31"),
                stat("REPOS", "12"),
            ],
            0.0,
        );
        assert_eq!(one.height, CARD_HEIGHT);
        assert_eq!(four.height, CARD_HEIGHT);
    }

    #[test]
    fn cards_advance_by_width_plus_gap() {
        let result = render_stat_cards(&[stat("A", "1"), stat("B", "2")], 0.0);
        assert!(result.markup.contains(r#"x="24""#));
        assert!(result.markup.contains(r#"x="179""#));
    }

    #[test]
    fn labels_and_values_are_rendered() {
        let result = render_stat_cards(&[stat("COMMITS", "1,204")], 0.0);
        assert!(result.markup.contains(">COMMITS</text>"));
        assert!(result.markup.contains(">1,204</text>"));
    }
}

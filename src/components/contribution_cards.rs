//! External-contribution cards: fixed-height rows with a project title and
//! a detail caption.

use crate::markup::SvgElement;
use crate::model::{ContributionHighlight, RenderResult};
use crate::text::truncate;
use crate::theme::{BAR_COLORS, LAYOUT, THEME};

const CARD_WIDTH: f64 = 760.0;
const CARD_HEIGHT: f64 = 44.0;
const CARD_GAP: f64 = 8.0;

pub fn render_contribution_cards(
    highlights: &[ContributionHighlight],
    y: f64,
) -> RenderResult {
    let mut markup = String::new();

    for (i, highlight) in highlights.iter().enumerate() {
        let cy = y + i as f64 * (CARD_HEIGHT + CARD_GAP);
        let color = BAR_COLORS[i % BAR_COLORS.len()];

        markup.push_str(
            &SvgElement::new("rect")
                .num("x", LAYOUT.pad_x)
                .num("y", cy)
                .num("width", CARD_WIDTH)
                .num("height", CARD_HEIGHT)
                .attr("rx", "6")
                .attr("fill", THEME.card_bg)
                .attr("stroke", THEME.border)
                .attr("stroke-width", "1")
                .finish(),
        );
        markup.push_str(
            &SvgElement::new("rect")
                .num("x", LAYOUT.pad_x)
                .num("y", cy)
                .attr("width", "4")
                .num("height", CARD_HEIGHT)
                .attr("rx", "2")
                .attr("fill", color)
                .finish(),
        );
        markup.push_str(
            &SvgElement::new("text")
                .num("x", LAYOUT.pad_x + 16.0)
                .num("y", cy + 18.0)
                .attr("class", "t t-card-title")
                .text(&truncate(&highlight.project, 40))
                .finish(),
        );
        markup.push_str(
            &SvgElement::new("text")
                .num("x", LAYOUT.pad_x + 16.0)
                .num("y", cy + 34.0)
                .attr("class", "t t-card-detail")
                .text(&truncate(&highlight.detail, 80))
                .finish(),
        );
    }

    let height = if highlights.is_empty() {
        0.0
    } else {
        highlights.len() as f64 * (CARD_HEIGHT + CARD_GAP) - CARD_GAP
    };
    RenderResult { markup, height }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn highlight(project: &str, detail: &str) -> ContributionHighlight {
        ContributionHighlight {
            project: project.to_string(),
            detail: detail.to_string(),
        }
    }

    #[test]
    fn empty_input_is_zero_height_empty_markup() {
        let result = render_contribution_cards(&[], 0.0);
        assert_eq!(result.height, 0.0);
        assert_eq!(result.markup, "");
    }

    #[test]
    fn height_omits_trailing_gap() {
        let items = vec![
            highlight("rust-lang/rust", "\u{2605} 100,000 \u{b7} Rust"),
            highlight("tokio-rs/tokio", "\u{2605} 28,000 \u{b7} Rust"),
        ];
        let result = render_contribution_cards(&items, 0.0);
        assert_eq!(result.height, 2.0 * (CARD_HEIGHT + CARD_GAP) - CARD_GAP);
    }

    #[test]
    fn title_and_detail_are_rendered() {
        let result =
            render_contribution_cards(&[highlight("org/repo", "\u{2605} 42 \u{b7} Go")], 0.0);
        assert!(result.markup.contains("org/repo"));
        assert!(result.markup.contains("Go"));
    }
}

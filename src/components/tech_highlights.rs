//! Expertise bars: a proportional score bar per category with a wrapped,
//! multi-line skills caption beneath it.
//!
//! The score comes from an untrusted origin and is clamped to [0,100] here,
//! at consumption time.

use crate::markup::SvgElement;
use crate::model::{RenderResult, TechHighlight};
use crate::text::{truncate, wrap_text};
use crate::theme::{BAR_COLORS, LAYOUT};

const LABEL_MAX_CHARS: usize = 24;
const SKILL_MAX_CHARS: usize = 90;
const SKILL_LINE_HEIGHT: f64 = 16.0;
const SKILL_TOP_MARGIN: f64 = 16.0;
const ROW_GAP: f64 = 14.0;

pub fn render_tech_highlights(highlights: &[TechHighlight], y: f64) -> RenderResult {
    if highlights.is_empty() {
        return RenderResult::empty();
    }

    let bar_x = LAYOUT.pad_x + 180.0;
    let score_x = bar_x + LAYOUT.bar_max_width + 10.0;
    let mut markup = String::new();
    let mut height = 0.0;

    for (i, group) in highlights.iter().enumerate() {
        let color = BAR_COLORS[i % BAR_COLORS.len()];
        let score = group.score.clamp(0, 100);
        let fill_width = score as f64 / 100.0 * LAYOUT.bar_max_width;
        let base_y = y + height;

        markup.push_str(
            &SvgElement::new("text")
                .num("x", LAYOUT.pad_x)
                .num("y", base_y + LAYOUT.bar_height / 2.0 + 4.0)
                .attr("class", "t t-subhdr")
                .text(&truncate(&group.category.to_uppercase(), LABEL_MAX_CHARS))
                .finish(),
        );
        markup.push_str(
            &SvgElement::new("rect")
                .num("x", bar_x)
                .num("y", base_y)
                .num("width", LAYOUT.bar_max_width)
                .num("height", LAYOUT.bar_height)
                .attr("rx", "4")
                .attr("fill", color)
                .attr("fill-opacity", "0.15")
                .finish(),
        );
        if fill_width > 0.0 {
            markup.push_str(
                &SvgElement::new("rect")
                    .num("x", bar_x)
                    .num("y", base_y)
                    .num("width", fill_width)
                    .num("height", LAYOUT.bar_height)
                    .attr("rx", "4")
                    .attr("fill", color)
                    .attr("fill-opacity", "0.85")
                    .finish(),
            );
        }
        markup.push_str(
            &SvgElement::new("text")
                .num("x", score_x)
                .num("y", base_y + LAYOUT.bar_height / 2.0 + 4.0)
                .attr("class", "t t-value")
                .text(&format!("{score}%"))
                .finish(),
        );

        let skill_text = group
            .items
            .iter()
            .map(|item| truncate(item, 30))
            .collect::<Vec<_>>()
            .join(" \u{b7} ");
        let skill_lines = wrap_text(&skill_text, SKILL_MAX_CHARS);
        for (li, line) in skill_lines.iter().enumerate() {
            markup.push_str(
                &SvgElement::new("text")
                    .num("x", bar_x)
                    .num(
                        "y",
                        base_y
                            + LAYOUT.bar_height
                            + SKILL_TOP_MARGIN
                            + li as f64 * SKILL_LINE_HEIGHT,
                    )
                    .attr("class", "t t-card-detail")
                    .text(line)
                    .finish(),
            );
        }

        height += LAYOUT.bar_height
            + SKILL_TOP_MARGIN
            + (skill_lines.len().saturating_sub(1)) as f64 * SKILL_LINE_HEIGHT
            + ROW_GAP;
    }

    RenderResult { markup, height }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(category: &str, items: &[&str], score: i64) -> TechHighlight {
        TechHighlight {
            category: category.to_string(),
            items: items.iter().map(|s| s.to_string()).collect(),
            score,
        }
    }

    #[test]
    fn empty_input_is_zero_height_empty_markup() {
        let result = render_tech_highlights(&[], 0.0);
        assert_eq!(result.height, 0.0);
        assert_eq!(result.markup, "");
    }

    #[test]
    fn score_is_clamped_into_percent_range() {
        let over = render_tech_highlights(&[group("ML", &["PyTorch"], 250)], 0.0);
        assert!(over.markup.contains(">100%</text>"));
        let under = render_tech_highlights(&[group("ML", &["PyTorch"], -5)], 0.0);
        assert!(under.markup.contains(">0%</text>"));
        // A zero score draws the track but no fill.
        assert_eq!(under.markup.matches("<rect").count(), 1);
    }

    #[test]
    fn single_line_row_height() {
        let result = render_tech_highlights(&[group("Web", &["React"], 80)], 0.0);
        assert_eq!(
            result.height,
            LAYOUT.bar_height + SKILL_TOP_MARGIN + ROW_GAP
        );
    }

    #[test]
    fn wrapped_caption_extends_row_height() {
        let many: Vec<String> = (0..12).map(|i| format!("technology-{i}")).collect();
        let refs: Vec<&str> = many.iter().map(String::as_str).collect();
        let result = render_tech_highlights(&[group("Everything", &refs, 70)], 0.0);
        assert!(result.height > LAYOUT.bar_height + SKILL_TOP_MARGIN + ROW_GAP);
    }

    #[test]
    fn category_label_is_uppercased_and_truncated() {
        let result = render_tech_highlights(
            &[group("machine learning and data things", &["x"], 50)],
            0.0,
        );
        assert!(result.markup.contains("MACHINE LEARNING AND DA\u{2026}"));
    }

    #[test]
    fn skills_join_with_middle_dot() {
        let result = render_tech_highlights(&[group("Web", &["React", "Vite"], 60)], 0.0);
        assert!(result.markup.contains("React \u{b7} Vite"));
    }
}

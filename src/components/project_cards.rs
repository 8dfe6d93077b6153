//! Signature-project cards ranked by complexity score.
//!
//! Card height is a sum of independently-optional contributions: a base
//! title row, a description line when one exists, and a domain-tag chip row
//! when the repository carries tags.

use crate::markup::{SvgElement, flame_icon};
use crate::model::{ComplexityItem, DomainMap, RenderResult};
use crate::text::truncate;
use crate::theme::{BAR_COLORS, LAYOUT, THEME};

const CARD_WIDTH: f64 = 760.0;
const CARD_GAP: f64 = 10.0;
const MIN_CARD_HEIGHT: f64 = 44.0;
const TITLE_ROW_HEIGHT: f64 = 20.0;
const DESC_ROW_HEIGHT: f64 = 16.0;
const TAG_ROW_HEIGHT: f64 = 22.0;
const TAG_FONT_SIZE: f64 = 9.0;
const TAG_PILL_HEIGHT: f64 = 16.0;
const MAX_TAGS: usize = 4;

pub fn render_project_cards(
    projects: &[ComplexityItem],
    domain_map: &DomainMap,
    y: f64,
) -> RenderResult {
    let mut markup = String::new();
    let mut total_height = 0.0;

    for (i, project) in projects.iter().enumerate() {
        let cy = y + total_height;
        let color = BAR_COLORS[i % BAR_COLORS.len()];
        let desc = truncate(&project.description, 90);
        let tags: Vec<String> = domain_map
            .get(&project.name)
            .map(|list| {
                list.iter()
                    .map(|t| t.trim().to_string())
                    .filter(|t| !t.is_empty())
                    .take(MAX_TAGS)
                    .collect()
            })
            .unwrap_or_default();

        let mut inner_height = TITLE_ROW_HEIGHT;
        if !desc.is_empty() {
            inner_height += DESC_ROW_HEIGHT;
        }
        if !tags.is_empty() {
            inner_height += TAG_ROW_HEIGHT;
        }
        let card_height = (inner_height + 16.0).max(MIN_CARD_HEIGHT);

        markup.push_str(
            &SvgElement::new("rect")
                .num("x", LAYOUT.pad_x)
                .num("y", cy)
                .num("width", CARD_WIDTH)
                .num("height", card_height)
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
                .num("height", card_height)
                .attr("rx", "2")
                .attr("fill", color)
                .finish(),
        );
        markup.push_str(
            &SvgElement::new("text")
                .num("x", LAYOUT.pad_x + 16.0)
                .num("y", cy + 18.0)
                .attr("class", "t t-card-title")
                .text(&truncate(&project.name, 40))
                .finish(),
        );
        markup.push_str(
            &SvgElement::new("text")
                .num("x", LAYOUT.pad_x + CARD_WIDTH - 16.0)
                .num("y", cy + 18.0)
                .attr("class", "t t-value")
                .attr("text-anchor", "end")
                .text(&project.value.to_string())
                .finish(),
        );
        if project.trending {
            markup.push_str(&flame_icon(LAYOUT.pad_x + CARD_WIDTH - 70.0, cy + 6.0));
        }

        if !desc.is_empty() {
            markup.push_str(
                &SvgElement::new("text")
                    .num("x", LAYOUT.pad_x + 16.0)
                    .num("y", cy + 34.0)
                    .attr("class", "t t-card-detail")
                    .text(&desc)
                    .finish(),
            );
        }

        if !tags.is_empty() {
            let tag_y = cy + if desc.is_empty() { 28.0 } else { 44.0 };
            let mut tag_x = LAYOUT.pad_x + 16.0;
            for tag in &tags {
                let label = truncate(tag, 24);
                let pill_w =
                    (label.chars().count() as f64 * TAG_FONT_SIZE * 0.55).ceil() + 16.0;
                if tag_x + pill_w > LAYOUT.pad_x + CARD_WIDTH - 16.0 {
                    break;
                }
                markup.push_str(
                    &SvgElement::new("rect")
                        .num("x", tag_x)
                        .num("y", tag_y)
                        .num("width", pill_w)
                        .num("height", TAG_PILL_HEIGHT)
                        .num("rx", TAG_PILL_HEIGHT / 2.0)
                        .attr("fill", color)
                        .attr("fill-opacity", "0.12")
                        .attr("stroke", color)
                        .attr("stroke-opacity", "0.35")
                        .attr("stroke-width", "1")
                        .finish(),
                );
                markup.push_str(
                    &SvgElement::new("text")
                        .num("x", tag_x + pill_w / 2.0)
                        .num("y", tag_y + TAG_PILL_HEIGHT / 2.0 + 3.0)
                        .attr("fill", color)
                        .num("font-size", TAG_FONT_SIZE)
                        .attr("class", "t t-pill")
                        .attr("text-anchor", "middle")
                        .text(&label)
                        .finish(),
                );
                tag_x += pill_w + 6.0;
            }
        }

        total_height += card_height + CARD_GAP;
    }

    if total_height > 0.0 {
        total_height -= CARD_GAP;
    }
    RenderResult {
        markup,
        height: total_height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(name: &str, description: &str, trending: bool) -> ComplexityItem {
        ComplexityItem {
            name: name.to_string(),
            url: format!("https://github.com/user/{name}"),
            description: description.to_string(),
            value: 120,
            trending,
        }
    }

    #[test]
    fn empty_input_is_zero_height_empty_markup() {
        let result = render_project_cards(&[], &DomainMap::new(), 0.0);
        assert_eq!(result.height, 0.0);
        assert_eq!(result.markup, "");
    }

    #[test]
    fn bare_card_uses_minimum_height() {
        let result = render_project_cards(&[project("a", "", false)], &DomainMap::new(), 0.0);
        assert_eq!(result.height, MIN_CARD_HEIGHT);
    }

    #[test]
    fn height_grows_with_description_and_tags_independently() {
        let map_with_tags = {
            let mut m = DomainMap::new();
            m.insert("a".into(), vec!["web".into(), "cli".into()]);
            m
        };
        let bare = render_project_cards(&[project("a", "", false)], &DomainMap::new(), 0.0);
        let with_desc =
            render_project_cards(&[project("a", "does things", false)], &DomainMap::new(), 0.0);
        let with_tags = render_project_cards(&[project("a", "", false)], &map_with_tags, 0.0);
        let with_both =
            render_project_cards(&[project("a", "does things", false)], &map_with_tags, 0.0);

        // Base 20, +16 description, +22 tags, +16 padding, clamped to 44.
        assert_eq!(bare.height, 44.0);
        assert_eq!(with_desc.height, 52.0);
        assert_eq!(with_tags.height, 58.0);
        assert_eq!(with_both.height, 74.0);
    }

    #[test]
    fn total_height_omits_trailing_gap() {
        let items = vec![project("a", "", false), project("b", "", false)];
        let result = render_project_cards(&items, &DomainMap::new(), 0.0);
        assert_eq!(result.height, 2.0 * MIN_CARD_HEIGHT + CARD_GAP);
    }

    #[test]
    fn score_is_rendered_as_caption() {
        let result = render_project_cards(&[project("a", "", false)], &DomainMap::new(), 0.0);
        assert!(result.markup.contains(">120</text>"));
    }

    #[test]
    fn trending_card_carries_flame() {
        let result = render_project_cards(&[project("a", "", true)], &DomainMap::new(), 0.0);
        assert!(result.markup.contains("<path"));
    }

    #[test]
    fn blank_tags_do_not_add_a_row() {
        let mut map = DomainMap::new();
        map.insert("a".into(), vec!["  ".into()]);
        let result = render_project_cards(&[project("a", "", false)], &map, 0.0);
        assert_eq!(result.height, MIN_CARD_HEIGHT);
    }
}

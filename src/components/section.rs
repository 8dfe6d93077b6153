//! Section chrome: header, sub-header, divider, and the standalone section
//! block (header + body + padding).

use crate::components::bar_chart::render_bar_chart;
use crate::markup::SvgElement;
use crate::model::{RenderResult, SectionBody};
use crate::theme::{LAYOUT, THEME};

/// Header height is a two-valued function of subtitle presence, not a
/// formula.
const HEADER_HEIGHT_WITH_SUBTITLE: f64 = 42.0;
const HEADER_HEIGHT_BARE: f64 = 24.0;

pub fn render_section_header(title: &str, subtitle: Option<&str>, y: f64) -> RenderResult {
    let mut markup = SvgElement::new("text")
        .num("x", LAYOUT.pad_x)
        .num("y", y + 16.0)
        .attr("class", "t t-h")
        .text(&title.to_uppercase())
        .finish();

    let subtitle = subtitle.filter(|s| !s.is_empty());
    if let Some(subtitle) = subtitle {
        markup.push_str(
            &SvgElement::new("text")
                .num("x", LAYOUT.pad_x)
                .num("y", y + 32.0)
                .attr("class", "t t-sub")
                .text(subtitle)
                .finish(),
        );
    }

    RenderResult {
        markup,
        height: if subtitle.is_some() {
            HEADER_HEIGHT_WITH_SUBTITLE
        } else {
            HEADER_HEIGHT_BARE
        },
    }
}

pub fn render_sub_header(text: &str, y: f64) -> RenderResult {
    let markup = SvgElement::new("text")
        .num("x", LAYOUT.pad_x)
        .num("y", y + 11.0)
        .attr("class", "t t-subhdr")
        .text(&text.to_uppercase())
        .finish();
    RenderResult {
        markup,
        height: 14.0,
    }
}

pub fn render_divider(y: f64) -> RenderResult {
    let markup = SvgElement::new("line")
        .num("x1", LAYOUT.pad_x)
        .num("y1", y)
        .num("x2", LAYOUT.pad_x + 760.0)
        .num("y2", y)
        .attr("stroke", THEME.border)
        .attr("stroke-opacity", "0.6")
        .attr("stroke-width", "1")
        .finish();
    RenderResult {
        markup,
        height: 1.0,
    }
}

/// A standalone section block: top padding, header, body at the updated
/// offset, bottom padding. The returned height is the full extent the block
/// consumes and is what [`crate::components::wrap_section_svg`] sizes the
/// canvas to.
pub fn render_section(title: &str, subtitle: Option<&str>, body: &SectionBody) -> RenderResult {
    let mut y = LAYOUT.pad_y;
    let mut markup = String::new();

    let header = render_section_header(title, subtitle, y);
    markup.push_str(&header.markup);
    y += header.height;

    let rendered = match body {
        SectionBody::Producer(producer) => producer(y),
        SectionBody::Bars { items, options } => render_bar_chart(items, y, options),
    };
    markup.push_str(&rendered.markup);
    y += rendered.height + LAYOUT.pad_y;

    RenderResult { markup, height: y }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BarItem, BarOptions};

    #[test]
    fn header_height_depends_only_on_subtitle_presence() {
        let with = render_section_header("Languages", Some("By bytes"), 0.0);
        let without = render_section_header("Languages", None, 0.0);
        let blank = render_section_header("Languages", Some(""), 0.0);
        assert_eq!(with.height, HEADER_HEIGHT_WITH_SUBTITLE);
        assert_eq!(without.height, HEADER_HEIGHT_BARE);
        assert_eq!(blank.height, HEADER_HEIGHT_BARE);
    }

    #[test]
    fn header_title_is_uppercased() {
        let result = render_section_header("Work Domains", None, 0.0);
        assert!(result.markup.contains("WORK DOMAINS"));
    }

    #[test]
    fn sub_header_and_divider_heights_are_fixed() {
        assert_eq!(render_sub_header("web frameworks", 0.0).height, 14.0);
        assert_eq!(render_divider(10.0).height, 1.0);
    }

    #[test]
    fn section_height_sums_header_body_and_padding() {
        let body = SectionBody::Producer(Box::new(|_| RenderResult {
            markup: "<g></g>".into(),
            height: 100.0,
        }));
        let result = render_section("T", Some("s"), &body);
        assert_eq!(
            result.height,
            LAYOUT.pad_y + HEADER_HEIGHT_WITH_SUBTITLE + 100.0 + LAYOUT.pad_y
        );
    }

    #[test]
    fn section_body_sees_offset_below_header() {
        let body = SectionBody::Producer(Box::new(|y| {
            assert_eq!(y, LAYOUT.pad_y + HEADER_HEIGHT_BARE);
            RenderResult::empty()
        }));
        render_section("T", None, &body);
    }

    #[test]
    fn bar_items_render_without_a_producer() {
        let body = SectionBody::Bars {
            items: vec![BarItem {
                name: "serde".into(),
                value: 7,
                percent: None,
                color: None,
                trending: false,
            }],
            options: BarOptions::default(),
        };
        let result = render_section("Tools", None, &body);
        assert!(result.markup.contains("serde"));
        assert_eq!(
            result.height,
            LAYOUT.pad_y + HEADER_HEIGHT_BARE + LAYOUT.bar_row_height + LAYOUT.pad_y
        );
    }
}

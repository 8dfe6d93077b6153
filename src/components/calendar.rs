//! Contribution calendar: one cell per day, columns of weeks, month labels
//! derived structurally from the week-start dates.

use crate::markup::SvgElement;
use crate::model::{ContributionCalendar, RenderResult};
use crate::theme::{LAYOUT, THEME};

const CELL_SIZE: f64 = 11.0;
const CELL_GAP: f64 = 2.0;
const STEP: f64 = CELL_SIZE + CELL_GAP;
const DAY_LABEL_WIDTH: f64 = 30.0;
const MONTH_LABEL_HEIGHT: f64 = 16.0;
const DAY_LABELS: [&str; 7] = ["", "Mon", "", "Wed", "", "Fri", ""];
const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Month index (0-11) from an ISO `YYYY-MM-DD` date string.
fn month_index(date: &str) -> Option<usize> {
    let month: usize = date.split('-').nth(1)?.parse().ok()?;
    (1..=12).contains(&month).then(|| month - 1)
}

pub fn render_contribution_calendar(calendar: &ContributionCalendar, y: f64) -> RenderResult {
    if calendar.weeks.is_empty() {
        return RenderResult::empty();
    }

    let grid_x = LAYOUT.pad_x + DAY_LABEL_WIDTH;
    let grid_y = y + MONTH_LABEL_HEIGHT;
    let mut markup = String::new();

    // Month labels appear at the first week whose starting day enters a new
    // month.
    let mut last_month: Option<usize> = None;
    for (w, week) in calendar.weeks.iter().enumerate() {
        let Some(first_day) = week.days.first() else {
            continue;
        };
        let Some(month) = month_index(&first_day.date) else {
            continue;
        };
        if last_month != Some(month) {
            markup.push_str(
                &SvgElement::new("text")
                    .num("x", grid_x + w as f64 * STEP)
                    .num("y", y + 11.0)
                    .attr("class", "t t-value")
                    .text(MONTH_NAMES[month])
                    .finish(),
            );
            last_month = Some(month);
        }
    }

    for (d, label) in DAY_LABELS.iter().enumerate() {
        if label.is_empty() {
            continue;
        }
        markup.push_str(
            &SvgElement::new("text")
                .num("x", LAYOUT.pad_x)
                .num("y", grid_y + d as f64 * STEP + CELL_SIZE - 1.0)
                .attr("class", "t t-value")
                .text(label)
                .finish(),
        );
    }

    for (w, week) in calendar.weeks.iter().enumerate() {
        for (d, day) in week.days.iter().enumerate() {
            markup.push_str(
                &SvgElement::new("rect")
                    .num("x", grid_x + w as f64 * STEP)
                    .num("y", grid_y + d as f64 * STEP)
                    .num("width", CELL_SIZE)
                    .num("height", CELL_SIZE)
                    .attr("rx", "2")
                    .attr("fill", day.color.as_deref().unwrap_or(THEME.card_bg))
                    .finish(),
            );
        }
    }

    RenderResult {
        markup,
        height: MONTH_LABEL_HEIGHT + 7.0 * STEP,
    }
}

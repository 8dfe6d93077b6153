//! Visual component renderers.
//!
//! Every renderer is a pure function `(items, y, ...) -> RenderResult` whose
//! `height` equals the vertical extent it actually consumed at that offset.
//! The section composer stacks blocks by folding a running y-cursor over
//! these results, so a renderer that misreports its height breaks the whole
//! document's vertical rhythm.

pub mod bar_chart;
pub mod calendar;
pub mod contribution_cards;
pub mod document;
pub mod domain_cloud;
pub mod donut_chart;
pub mod project_cards;
pub mod section;
pub mod stat_cards;
pub mod tech_highlights;

pub use bar_chart::render_bar_chart;
pub use calendar::render_contribution_calendar;
pub use contribution_cards::render_contribution_cards;
pub use document::{compose_document, style_defs, wrap_section_svg};
pub use domain_cloud::render_domain_cloud;
pub use donut_chart::render_donut_chart;
pub use project_cards::render_project_cards;
pub use section::{render_divider, render_section, render_section_header, render_sub_header};
pub use stat_cards::render_stat_cards;
pub use tech_highlights::render_tech_highlights;

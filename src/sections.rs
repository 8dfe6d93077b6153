//! Assembles the ordered list of report sections from the transformed
//! metrics. Sections whose input is empty are not created at all, so the
//! composer never renders an empty block.

use crate::components::{
    render_bar_chart, render_contribution_calendar, render_contribution_cards, render_divider,
    render_domain_cloud, render_donut_chart, render_project_cards, render_stat_cards,
    render_sub_header, render_tech_highlights,
};
use crate::metrics::SubCategories;
use crate::model::{
    BarItem, BarOptions, ComplexityItem, ContributionData, ContributionHighlight, DomainItem,
    DomainMap, LanguageItem, RenderResult, SectionBody, SectionDef, StatItem, TechHighlight,
};
use crate::text::group_thousands;

pub struct SectionInputs<'a> {
    pub languages: &'a [LanguageItem],
    pub sub: &'a SubCategories,
    pub complexity: &'a [ComplexityItem],
    pub domains: &'a [DomainItem],
    pub domain_map: &'a DomainMap,
    pub tech_highlights: &'a [TechHighlight],
    pub contributions: &'a ContributionData,
}

/// The section key used by the config allowlist: the filename stem without
/// the `metrics-` prefix ("metrics-tech-stack.svg" -> "tech-stack").
pub fn section_key(filename: &str) -> &str {
    filename
        .strip_prefix("metrics-")
        .unwrap_or(filename)
        .strip_suffix(".svg")
        .unwrap_or(filename)
}

pub fn build_sections(inputs: &SectionInputs) -> Vec<SectionDef> {
    let mut sections = Vec::new();

    if !inputs.domains.is_empty() {
        let domains = inputs.domains.to_vec();
        sections.push(SectionDef {
            filename: "metrics-domains.svg".to_string(),
            title: "Work Domains".to_string(),
            subtitle: Some("Extracted from project READMEs via AI analysis".to_string()),
            body: SectionBody::Producer(Box::new(move |y| render_domain_cloud(&domains, y))),
        });
    }

    if !inputs.languages.is_empty() {
        let languages = inputs.languages.to_vec();
        sections.push(SectionDef {
            filename: "metrics-languages.svg".to_string(),
            title: "Languages".to_string(),
            subtitle: Some("By bytes of code across all public repos".to_string()),
            body: SectionBody::Producer(Box::new(move |y| render_donut_chart(&languages, y))),
        });
    }

    let stack_parts: Vec<(&str, &[crate::model::TechItem])> = [
        ("Web Frameworks", inputs.sub.web_frameworks.as_slice()),
        ("ML & AI", inputs.sub.ml_ai.as_slice()),
        ("Databases", inputs.sub.databases.as_slice()),
        ("Cloud & Infrastructure", inputs.sub.cloud_infra.as_slice()),
    ]
    .into_iter()
    .filter(|(_, items)| !items.is_empty())
    .collect();

    if !stack_parts.is_empty() {
        let parts: Vec<(String, Vec<BarItem>)> = stack_parts
            .into_iter()
            .map(|(label, items)| {
                (
                    label.to_string(),
                    items.iter().cloned().map(BarItem::from).collect(),
                )
            })
            .collect();
        sections.push(SectionDef {
            filename: "metrics-tech-stack.svg".to_string(),
            title: "Tech Stack".to_string(),
            subtitle: Some("Detected from topics and dependency manifests".to_string()),
            body: SectionBody::Producer(Box::new(move |y| render_tech_stack(&parts, y))),
        });
    }

    if !inputs.tech_highlights.is_empty() {
        let highlights = inputs.tech_highlights.to_vec();
        sections.push(SectionDef {
            filename: "metrics-expertise.svg".to_string(),
            title: "Expertise".to_string(),
            subtitle: Some(
                "AI-curated expertise areas with evidence-based proficiency".to_string(),
            ),
            body: SectionBody::Producer(Box::new(move |y| {
                render_tech_highlights(&highlights, y)
            })),
        });
    }

    if !inputs.complexity.is_empty() {
        let complexity = inputs.complexity.to_vec();
        let domain_map = inputs.domain_map.clone();
        sections.push(SectionDef {
            filename: "metrics-complexity.svg".to_string(),
            title: "Signature Projects".to_string(),
            subtitle: Some(
                "Top projects by complexity score (languages, disk usage, code size)".to_string(),
            ),
            body: SectionBody::Producer(Box::new(move |y| {
                render_project_cards(&complexity, &domain_map, y)
            })),
        });
    }

    {
        let totals = inputs.contributions.totals.clone();
        sections.push(SectionDef {
            filename: "metrics-pulse.svg".to_string(),
            title: "At a Glance".to_string(),
            subtitle: Some("Contribution activity over the past year".to_string()),
            body: SectionBody::Producer(Box::new(move |y| {
                let stats = vec![
                    StatItem {
                        label: "COMMITS".to_string(),
                        value: group_thousands(totals.total_commits),
                    },
                    StatItem {
                        label: "PRS".to_string(),
                        value: group_thousands(totals.total_pull_requests),
                    },
                    StatItem {
                        label: "REVIEWS".to_string(),
                        value: group_thousands(totals.total_reviews),
                    },
                    StatItem {
                        label: "REPOS".to_string(),
                        value: group_thousands(totals.repos_contributed_to),
                    },
                ];
                render_stat_cards(&stats, y)
            })),
        });
    }

    if !inputs.contributions.external_repos.is_empty() {
        let highlights: Vec<ContributionHighlight> = inputs
            .contributions
            .external_repos
            .iter()
            .take(5)
            .map(|repo| {
                let star_part = (repo.stargazer_count > 0)
                    .then(|| format!("\u{2605} {}", group_thousands(repo.stargazer_count)));
                let detail = [star_part, repo.primary_language.clone()]
                    .into_iter()
                    .flatten()
                    .collect::<Vec<_>>()
                    .join(" \u{b7} ");
                ContributionHighlight {
                    project: repo.name_with_owner.clone(),
                    detail,
                }
            })
            .collect();
        sections.push(SectionDef {
            filename: "metrics-contributions.svg".to_string(),
            title: "Open Source Contributions".to_string(),
            subtitle: Some("External repositories contributed to (all time)".to_string()),
            body: SectionBody::Producer(Box::new(move |y| {
                render_contribution_cards(&highlights, y)
            })),
        });
    }

    if !inputs.contributions.calendar.weeks.is_empty() {
        let calendar = inputs.contributions.calendar.clone();
        sections.push(SectionDef {
            filename: "metrics-calendar.svg".to_string(),
            title: "Contribution Calendar".to_string(),
            subtitle: Some("Daily contributions over the past year".to_string()),
            body: SectionBody::Producer(Box::new(move |y| {
                render_contribution_calendar(&calendar, y)
            })),
        });
    }

    sections
}

/// Tech-stack body: labeled bar-list groups separated by dividers, all
/// inside one section.
fn render_tech_stack(parts: &[(String, Vec<BarItem>)], y: f64) -> RenderResult {
    let mut markup = String::new();
    let mut height = 0.0;

    for (i, (label, items)) in parts.iter().enumerate() {
        if i > 0 {
            let divider = render_divider(y + height + 6.0);
            markup.push_str(&divider.markup);
            height += 18.0;
        }

        let sub = render_sub_header(label, y + height);
        markup.push_str(&sub.markup);
        height += sub.height + 6.0;

        let bars = render_bar_chart(items, y + height, &BarOptions::default());
        markup.push_str(&bars.markup);
        height += bars.height + 10.0;
    }

    RenderResult { markup, height }
}

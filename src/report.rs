//! The composition root: one pass from a materialized snapshot to every
//! output the persistence layer writes — a standalone SVG per active
//! section, the combined document, and the Markdown profile.

use std::collections::BTreeSet;

use crate::components::{compose_document, render_section, wrap_section_svg};
use crate::config::UserConfig;
use crate::metrics::{
    aggregate_domains, aggregate_languages, classify_dependencies, compute_complexity_scores,
    compute_recently_active, mark_trending, sub_classify, top_projects_by_stars,
};
use crate::model::{MetricsSnapshot, ProjectItem};
use crate::profile::{SvgEmbed, TemplateContext, build_social_badges, render_profile};
use crate::sections::{SectionInputs, build_sections, section_key};

#[derive(Clone, Debug)]
pub struct SectionFile {
    pub filename: String,
    pub markup: String,
}

#[derive(Clone, Debug)]
pub struct Report {
    /// One standalone SVG per active section.
    pub files: Vec<SectionFile>,
    /// The combined document covering all active sections.
    pub index: String,
    /// The composed Markdown profile.
    pub readme: String,
}

#[derive(Clone, Copy, Debug)]
pub struct ReportOptions<'a> {
    pub config: &'a UserConfig,
    /// Attribution date; `None` drops the date from the attribution line.
    pub generated_on: Option<&'a str>,
    /// Path prefix for SVG embeds in the Markdown profile.
    pub svg_dir: &'a str,
}

#[tracing::instrument(skip_all, fields(repos = snapshot.repos.len()))]
pub fn generate_report(snapshot: &MetricsSnapshot, opts: &ReportOptions) -> Report {
    // Transform.
    let mut languages = aggregate_languages(&snapshot.repos);
    let mut categories = classify_dependencies(&snapshot.repos, &snapshot.manifests);
    let mut complexity = compute_complexity_scores(&snapshot.repos);

    let active_set =
        compute_recently_active(&snapshot.contributions.by_repo, &snapshot.repos);
    mark_trending(&mut languages, &active_set);
    mark_trending(&mut categories.frameworks, &active_set);
    mark_trending(&mut categories.db_infra, &active_set);
    mark_trending(&mut complexity, &active_set);

    let domains = aggregate_domains(&snapshot.domain_map);
    let sub = sub_classify(&categories.frameworks, &categories.db_infra);

    // Compose.
    let sections = build_sections(&SectionInputs {
        languages: &languages,
        sub: &sub,
        complexity: &complexity,
        domains: &domains,
        domain_map: &snapshot.domain_map,
        tech_highlights: &snapshot.tech_highlights,
        contributions: &snapshot.contributions,
    });

    let allowlist = opts.config.sections.as_deref();
    let active_sections: Vec<_> = sections
        .into_iter()
        .filter(|section| section.is_active())
        .filter(|section| match allowlist {
            Some(keys) => keys.iter().any(|k| k == section_key(&section.filename)),
            None => true,
        })
        .collect();

    let files: Vec<SectionFile> = active_sections
        .iter()
        .map(|section| {
            let rendered =
                render_section(&section.title, section.subtitle.as_deref(), &section.body);
            SectionFile {
                filename: section.filename.clone(),
                markup: wrap_section_svg(&rendered.markup, rendered.height),
            }
        })
        .collect();

    let index = compose_document(&active_sections);
    let readme = build_readme(snapshot, opts, &active_sections);

    tracing::debug!(sections = files.len(), "report generated");
    Report {
        files,
        index,
        readme,
    }
}

fn embed_path(svg_dir: &str, filename: &str) -> String {
    if svg_dir.is_empty() {
        filename.to_string()
    } else {
        format!("{}/{}", svg_dir.trim_end_matches('/'), filename)
    }
}

fn build_readme(
    snapshot: &MetricsSnapshot,
    opts: &ReportOptions,
    sections: &[crate::model::SectionDef],
) -> String {
    let config = opts.config;

    let name = config
        .name
        .clone()
        .or_else(|| {
            let trimmed = snapshot.user.name.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .unwrap_or_else(|| "Developer".to_string());

    let svgs: Vec<SvgEmbed> = sections
        .iter()
        .map(|section| SvgEmbed {
            label: section.title.clone(),
            path: embed_path(opts.svg_dir, &section.filename),
        })
        .collect();

    let find_path = |key: &str| {
        sections
            .iter()
            .find(|s| section_key(&s.filename) == key)
            .map(|s| embed_path(opts.svg_dir, &s.filename))
    };

    // Split the top-starred projects by recent contribution activity.
    let recent_names: BTreeSet<String> = snapshot
        .contributions
        .by_repo
        .iter()
        .filter(|entry| entry.count > 0)
        .filter_map(|entry| entry.name_with_owner.rsplit('/').next())
        .map(str::to_string)
        .collect();
    let (active_projects, legacy_projects): (Vec<ProjectItem>, Vec<ProjectItem>) =
        top_projects_by_stars(&snapshot.repos)
            .into_iter()
            .partition(|p| recent_names.contains(&p.name));

    let ctx = TemplateContext {
        name,
        pronunciation: config.pronunciation.clone(),
        title: config.title.clone(),
        preamble: config.preamble.clone(),
        social_badges: build_social_badges(&snapshot.user),
        svgs,
        bio: config.bio.clone().or_else(|| snapshot.user.bio.clone()),
        active_projects,
        legacy_projects,
        pulse_svg: find_path("pulse"),
        calendar_svg: find_path("calendar"),
        expertise_svg: find_path("expertise"),
        generated_on: opts.generated_on.map(str::to_string),
    };

    render_profile(config.template, &ctx)
}

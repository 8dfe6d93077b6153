//! The composed Markdown profile document: templates, social badges, and
//! the attribution line.
//!
//! The generation date is an input, never a wall-clock read, so the whole
//! document is reproducible from the snapshot alone.

use std::path::Path;

use anyhow::Context as _;

use crate::config::TemplateName;
use crate::model::{ProjectItem, UserProfile};

pub const ATTRIBUTION_URL: &str = "https://github.com/octoglyph/octoglyph";

#[derive(Clone, Debug)]
pub struct SvgEmbed {
    pub label: String,
    pub path: String,
}

#[derive(Clone, Debug, Default)]
pub struct TemplateContext {
    pub name: String,
    pub pronunciation: Option<String>,
    pub title: Option<String>,
    pub preamble: Option<String>,
    pub social_badges: String,
    pub svgs: Vec<SvgEmbed>,
    pub bio: Option<String>,
    pub active_projects: Vec<ProjectItem>,
    pub legacy_projects: Vec<ProjectItem>,
    pub pulse_svg: Option<String>,
    pub calendar_svg: Option<String>,
    pub expertise_svg: Option<String>,
    /// Attribution date (`YYYY-MM-DD`); omitted from the attribution line
    /// when absent.
    pub generated_on: Option<String>,
}

pub fn render_profile(template: TemplateName, ctx: &TemplateContext) -> String {
    match template {
        TemplateName::Classic => classic_template(ctx),
        TemplateName::Modern => modern_template(ctx),
        TemplateName::Minimal => minimal_template(ctx),
    }
}

fn attribution(generated_on: Option<&str>) -> String {
    match generated_on {
        Some(date) => format!(
            "<sub>Last generated on {date} using [octoglyph]({ATTRIBUTION_URL})</sub>"
        ),
        None => format!("<sub>Generated using [octoglyph]({ATTRIBUTION_URL})</sub>"),
    }
}

pub fn extract_first_name(full_name: &str) -> &str {
    full_name.split_whitespace().next().unwrap_or(full_name)
}

/// Escapes shields.io badge label characters (`-` -> `--`, `_` -> `__`).
pub fn shields_badge_label(text: &str) -> String {
    text.replace('-', "--").replace('_', "__")
}

fn badge(label: &str, color: &str, logo: &str, url: &str) -> String {
    format!(
        "[![{label}](https://img.shields.io/badge/{escaped}-{color}?style=flat&logo={logo}&logoColor=white)]({url})",
        escaped = shields_badge_label(label),
    )
}

/// Hostname of a URL, without scheme, credentials, port, or path.
fn hostname(url: &str) -> Option<&str> {
    let rest = url.split_once("://").map(|(_, r)| r)?;
    let rest = rest.rsplit_once('@').map_or(rest, |(_, r)| r);
    let host = rest.split(['/', '?', '#']).next()?;
    let host = host.split(':').next()?;
    (!host.is_empty()).then_some(host)
}

/// First path segment after `marker`, stopping at `/`, `?`, or `#`.
fn path_segment_after<'a>(url: &'a str, marker: &str) -> Option<&'a str> {
    let (_, rest) = url.split_once(marker)?;
    let segment = rest.split(['/', '?', '#']).next()?;
    (!segment.is_empty()).then_some(segment)
}

pub fn build_social_badges(profile: &UserProfile) -> String {
    let mut badges = Vec::new();

    if let Some(website) = &profile.website_url {
        let label = hostname(website).unwrap_or("Website");
        badges.push(badge(label, "4285F4", "google-chrome", website));
    }
    if let Some(twitter) = &profile.twitter_username {
        let label = format!("@{twitter}");
        badges.push(badge(
            &label,
            "000000",
            "x",
            &format!("https://x.com/{twitter}"),
        ));
    }
    for account in &profile.social_accounts {
        match account.provider.to_lowercase().as_str() {
            "linkedin" => {
                let label = path_segment_after(&account.url, "/in/").unwrap_or("LinkedIn");
                badges.push(badge(label, "0A66C2", "linkedin", &account.url));
            }
            "mastodon" => {
                let label = path_segment_after(&account.url, "/@")
                    .map(|handle| format!("@{handle}"))
                    .unwrap_or_else(|| "Mastodon".to_string());
                badges.push(badge(&label, "6364FF", "mastodon", &account.url));
            }
            "youtube" => {
                let label = path_segment_after(&account.url, "/@")
                    .or_else(|| path_segment_after(&account.url, "/channel/"))
                    .or_else(|| path_segment_after(&account.url, "/c/"))
                    .or_else(|| path_segment_after(&account.url, "/user/"))
                    .unwrap_or("YouTube");
                badges.push(badge(label, "FF0000", "youtube", &account.url));
            }
            _ => {}
        }
    }

    badges.join(" ")
}

fn project_list(projects: &[ProjectItem]) -> String {
    projects
        .iter()
        .map(|p| {
            let desc = if p.description.is_empty() {
                "No description"
            } else {
                &p.description
            };
            let stars = if p.stars > 0 {
                format!(" ({} \u{2605})", p.stars)
            } else {
                String::new()
            };
            format!("- **{}** - {desc}{stars}", p.name)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ── Templates ───────────────────────────────────────────────────────────────

fn classic_template(ctx: &TemplateContext) -> String {
    let mut parts = Vec::new();

    match &ctx.pronunciation {
        Some(pronunciation) => {
            parts.push(format!("# {} <sub><i>({pronunciation})</i></sub>", ctx.name));
        }
        None => parts.push(format!("# {}", ctx.name)),
    }

    if let Some(title) = &ctx.title {
        parts.push(format!("> {title}"));
    }
    if let Some(preamble) = &ctx.preamble {
        parts.push(preamble.clone());
    }
    if !ctx.social_badges.is_empty() {
        parts.push(ctx.social_badges.clone());
    }
    for svg in &ctx.svgs {
        parts.push(format!("![{}]({})", svg.label, svg.path));
    }
    if let Some(bio) = &ctx.bio {
        parts.push(format!("---\n\n<sub>{bio}</sub>"));
    }
    parts.push(attribution(ctx.generated_on.as_deref()));

    format!("{}\n", parts.join("\n\n"))
}

fn modern_template(ctx: &TemplateContext) -> String {
    let mut parts = Vec::new();

    parts.push(format!(
        "# Hi, I'm {} \u{1f44b}",
        extract_first_name(&ctx.name)
    ));

    if let Some(preamble) = &ctx.preamble {
        parts.push(preamble.clone());
    }
    if !ctx.social_badges.is_empty() {
        parts.push(ctx.social_badges.clone());
    }
    if !ctx.active_projects.is_empty() {
        parts.push(format!(
            "## Active Projects\n\n{}",
            project_list(&ctx.active_projects)
        ));
    }
    if !ctx.legacy_projects.is_empty() {
        parts.push(format!(
            "## Legacy Work\n\n{}",
            project_list(&ctx.legacy_projects)
        ));
    }

    let mut stats_images = Vec::new();
    if let Some(pulse) = &ctx.pulse_svg {
        stats_images.push(format!("![At a Glance]({pulse})"));
    }
    if let Some(calendar) = &ctx.calendar_svg {
        stats_images.push(format!("![Contributions]({calendar})"));
    }
    if !stats_images.is_empty() {
        parts.push(format!("## GitHub Stats\n\n{}", stats_images.join("\n")));
    }

    if let Some(expertise) = &ctx.expertise_svg {
        parts.push(format!(
            "## Other Areas of Interest\n\n![Expertise]({expertise})"
        ));
    }

    parts.push(attribution(ctx.generated_on.as_deref()));

    format!("{}\n", parts.join("\n\n"))
}

fn minimal_template(ctx: &TemplateContext) -> String {
    let mut parts = Vec::new();

    parts.push(format!("# {}", extract_first_name(&ctx.name)));

    if let Some(preamble) = &ctx.preamble {
        parts.push(preamble.clone());
    }
    if !ctx.social_badges.is_empty() {
        parts.push(ctx.social_badges.clone());
    }
    for svg in &ctx.svgs {
        parts.push(format!("![{}]({})", svg.label, svg.path));
    }
    parts.push(attribution(ctx.generated_on.as_deref()));

    format!("{}\n", parts.join("\n\n"))
}

/// Reads the preamble file; a missing file is simply no preamble.
pub fn load_preamble(path: Option<&Path>) -> anyhow::Result<Option<String>> {
    let path = path.unwrap_or_else(|| Path::new("PREAMBLE.md"));
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => {
            Err(err).with_context(|| format!("read preamble '{}'", path.display()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SocialAccount;

    fn ctx() -> TemplateContext {
        TemplateContext {
            name: "Ada Lovelace".to_string(),
            pronunciation: Some("AY-duh".to_string()),
            title: Some("Analyst".to_string()),
            preamble: Some("I write engines.".to_string()),
            social_badges: "[badges]".to_string(),
            svgs: vec![SvgEmbed {
                label: "Languages".to_string(),
                path: "metrics/metrics-languages.svg".to_string(),
            }],
            bio: Some("London".to_string()),
            generated_on: Some("2026-08-06".to_string()),
            ..TemplateContext::default()
        }
    }

    #[test]
    fn classic_orders_heading_title_preamble_badges_embeds_bio() {
        let md = classic_template(&ctx());
        let heading = md.find("# Ada Lovelace").unwrap();
        let title = md.find("> Analyst").unwrap();
        let preamble = md.find("I write engines.").unwrap();
        let badges = md.find("[badges]").unwrap();
        let embed = md.find("![Languages](metrics/metrics-languages.svg)").unwrap();
        let bio = md.find("<sub>London</sub>").unwrap();
        assert!(heading < title && title < preamble && preamble < badges);
        assert!(badges < embed && embed < bio);
        assert!(md.contains("(AY-duh)"));
        assert!(md.ends_with("\n"));
    }

    #[test]
    fn attribution_embeds_the_given_date_verbatim() {
        let md = classic_template(&ctx());
        assert!(md.contains("Last generated on 2026-08-06"));
        let mut undated = ctx();
        undated.generated_on = None;
        assert!(!classic_template(&undated).contains("Last generated on"));
    }

    #[test]
    fn modern_uses_first_name_and_project_lists() {
        let mut context = ctx();
        context.active_projects = vec![ProjectItem {
            name: "engine".to_string(),
            url: String::new(),
            description: String::new(),
            stars: 12,
        }];
        context.pulse_svg = Some("metrics/metrics-pulse.svg".to_string());
        let md = modern_template(&context);
        assert!(md.contains("# Hi, I'm Ada"));
        assert!(md.contains("## Active Projects"));
        assert!(md.contains("- **engine** - No description (12 \u{2605})"));
        assert!(md.contains("## GitHub Stats"));
        assert!(!md.contains("## Legacy Work"));
    }

    #[test]
    fn minimal_is_heading_preamble_badges_embeds() {
        let md = minimal_template(&ctx());
        assert!(md.starts_with("# Ada\n\n"));
        assert!(md.contains("![Languages]"));
        assert!(!md.contains("> Analyst"));
    }

    #[test]
    fn badge_label_escaping() {
        assert_eq!(shields_badge_label("my-site_name"), "my--site__name");
    }

    #[test]
    fn social_badges_cover_known_providers() {
        let profile = UserProfile {
            name: "Ada".to_string(),
            website_url: Some("https://ada.dev/about".to_string()),
            twitter_username: Some("ada".to_string()),
            social_accounts: vec![
                SocialAccount {
                    provider: "LINKEDIN".to_string(),
                    url: "https://linkedin.com/in/ada-lovelace".to_string(),
                },
                SocialAccount {
                    provider: "mastodon".to_string(),
                    url: "https://hachyderm.io/@ada".to_string(),
                },
                SocialAccount {
                    provider: "unknown".to_string(),
                    url: "https://example.com".to_string(),
                },
            ],
            bio: None,
        };
        let badges = build_social_badges(&profile);
        assert!(badges.contains("ada.dev"));
        assert!(badges.contains("https://x.com/ada"));
        assert!(badges.contains("ada--lovelace-0A66C2"));
        assert!(badges.contains("mastodon"));
        assert!(!badges.contains("example.com"));
    }

    #[test]
    fn hostname_handles_ports_and_missing_scheme() {
        assert_eq!(hostname("https://ada.dev:8443/x"), Some("ada.dev"));
        assert_eq!(hostname("not a url"), None);
    }

    #[test]
    fn first_name_extraction() {
        assert_eq!(extract_first_name("Ada Lovelace"), "Ada");
        assert_eq!(extract_first_name("Prince"), "Prince");
        assert_eq!(extract_first_name(""), "");
    }
}

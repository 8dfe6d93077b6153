//! User configuration: an optional TOML file controlling the profile
//! document (identity fields, template choice, section allowlist).
//!
//! Loading is tolerant: a missing file means defaults, a malformed file
//! warns and means defaults. Only `parse_user_config` can fail, for callers
//! that want the error.

use std::fmt;
use std::path::Path;

use tracing::warn;

use crate::error::{OctoglyphError, OctoglyphResult};

pub const DEFAULT_CONFIG_PATH: &str = ".octoglyph.toml";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TemplateName {
    #[default]
    Classic,
    Modern,
    Minimal,
}

impl TemplateName {
    fn from_str_opt(raw: &str) -> Option<Self> {
        match raw {
            "classic" => Some(Self::Classic),
            "modern" => Some(Self::Modern),
            "minimal" => Some(Self::Minimal),
            _ => None,
        }
    }
}

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Classic => "classic",
            Self::Modern => "modern",
            Self::Minimal => "minimal",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug, Default)]
pub struct UserConfig {
    pub title: Option<String>,
    pub desired_title: Option<String>,
    pub name: Option<String>,
    pub pronunciation: Option<String>,
    pub bio: Option<String>,
    pub preamble: Option<String>,
    pub template: TemplateName,
    /// Allowlist of section keys (filename stem after `metrics-`); `None`
    /// keeps every section.
    pub sections: Option<Vec<String>>,
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct RawUserConfig {
    title: Option<String>,
    desired_title: Option<String>,
    name: Option<String>,
    pronunciation: Option<String>,
    bio: Option<String>,
    preamble: Option<String>,
    template: Option<String>,
    sections: Option<Vec<String>>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

pub fn parse_user_config(raw: &str) -> OctoglyphResult<UserConfig> {
    let parsed: RawUserConfig =
        toml::from_str(raw).map_err(|e| OctoglyphError::config(e.to_string()))?;

    let template = match non_blank(parsed.template) {
        Some(raw_name) => {
            let lowered = raw_name.to_lowercase();
            match TemplateName::from_str_opt(&lowered) {
                Some(t) => t,
                None => {
                    warn!(template = %lowered, "unknown template, falling back to classic");
                    TemplateName::Classic
                }
            }
        }
        None => TemplateName::Classic,
    };

    let sections = parsed.sections.and_then(|list| {
        let cleaned: Vec<String> = list
            .into_iter()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();
        if cleaned.is_empty() { None } else { Some(cleaned) }
    });

    Ok(UserConfig {
        title: non_blank(parsed.title),
        desired_title: non_blank(parsed.desired_title),
        name: non_blank(parsed.name),
        pronunciation: non_blank(parsed.pronunciation),
        bio: non_blank(parsed.bio),
        preamble: non_blank(parsed.preamble),
        template,
        sections,
    })
}

/// Loads the config file, treating a missing file as defaults and a
/// malformed one as a warning plus defaults.
pub fn load_user_config(path: Option<&Path>) -> UserConfig {
    let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH));
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return UserConfig::default(),
        Err(err) => {
            warn!(path = %path.display(), %err, "failed to read config file");
            return UserConfig::default();
        }
    };

    match parse_user_config(&raw) {
        Ok(config) => config,
        Err(err) => {
            warn!(path = %path.display(), %err, "failed to parse config file");
            UserConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_fields() {
        let config = parse_user_config(
            r#"
title = "Systems Engineer"
desired_title = "Staff Engineer"
name = "Ada Lovelace"
pronunciation = "AY-duh"
bio = "Building things."
template = "Modern"
sections = ["languages", " Domains "]
"#,
        )
        .unwrap();
        assert_eq!(config.title.as_deref(), Some("Systems Engineer"));
        assert_eq!(config.name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(config.template, TemplateName::Modern);
        assert_eq!(
            config.sections,
            Some(vec!["languages".to_string(), "domains".to_string()])
        );
    }

    #[test]
    fn blank_fields_become_none() {
        let config = parse_user_config("title = \"  \"\nsections = []\n").unwrap();
        assert!(config.title.is_none());
        assert!(config.sections.is_none());
    }

    #[test]
    fn unknown_template_falls_back_to_classic() {
        let config = parse_user_config("template = \"fancy\"\n").unwrap();
        assert_eq!(config.template, TemplateName::Classic);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(parse_user_config("title = ").is_err());
    }

    #[test]
    fn missing_file_loads_defaults() {
        let config = load_user_config(Some(Path::new("/nonexistent/.octoglyph.toml")));
        assert!(config.title.is_none());
        assert_eq!(config.template, TemplateName::Classic);
    }
}

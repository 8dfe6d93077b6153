//! Dependency-name extraction from package manifests.
//!
//! Parsing is best effort: malformed manifest text warns and contributes an
//! empty list, never an error. Manifest fetching itself is an external
//! collaborator; this module only sees already-materialized text.

use tracing::warn;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ManifestKind {
    NodePackage,
    Cargo,
    GoMod,
    Pyproject,
    RequirementsTxt,
}

impl ManifestKind {
    pub fn from_filename(filename: &str) -> Option<Self> {
        match filename {
            "package.json" => Some(Self::NodePackage),
            "Cargo.toml" => Some(Self::Cargo),
            "go.mod" => Some(Self::GoMod),
            "pyproject.toml" => Some(Self::Pyproject),
            "requirements.txt" => Some(Self::RequirementsTxt),
            _ => None,
        }
    }

    pub fn parse_dependencies(self, text: &str) -> Vec<String> {
        match self {
            Self::NodePackage => parse_package_json(text),
            Self::Cargo => parse_cargo_toml(text),
            Self::GoMod => parse_go_mod(text),
            Self::Pyproject => parse_pyproject(text),
            Self::RequirementsTxt => parse_requirements_txt(text),
        }
    }
}

/// Dependency names for a known manifest filename; unknown filenames and
/// unparseable text yield an empty list.
pub fn parse_manifest(filename: &str, text: &str) -> Vec<String> {
    ManifestKind::from_filename(filename)
        .map(|kind| kind.parse_dependencies(text))
        .unwrap_or_default()
}

fn parse_package_json(text: &str) -> Vec<String> {
    let parsed: serde_json::Value = match serde_json::from_str(text) {
        Ok(v) => v,
        Err(err) => {
            warn!(%err, "failed to parse package.json");
            return Vec::new();
        }
    };

    let mut deps = Vec::new();
    for table in ["dependencies", "devDependencies"] {
        if let Some(obj) = parsed.get(table).and_then(|v| v.as_object()) {
            deps.extend(obj.keys().cloned());
        }
    }
    deps
}

fn parse_cargo_toml(text: &str) -> Vec<String> {
    let parsed: toml::Value = match toml::from_str(text) {
        Ok(v) => v,
        Err(err) => {
            warn!(%err, "failed to parse Cargo.toml");
            return Vec::new();
        }
    };

    let mut deps = Vec::new();
    for table in ["dependencies", "dev-dependencies", "build-dependencies"] {
        if let Some(section) = parsed.get(table).and_then(|v| v.as_table()) {
            deps.extend(section.keys().cloned());
        }
    }
    deps
}

fn parse_go_mod(text: &str) -> Vec<String> {
    let mut deps = Vec::new();
    let mut in_require = false;
    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with("require (") {
            in_require = true;
            continue;
        }
        if trimmed == ")" {
            in_require = false;
            continue;
        }
        if in_require && !trimmed.is_empty() && !trimmed.starts_with("//") {
            let module_path = trimmed.split_whitespace().next().unwrap_or("");
            if let Some(last) = module_path.rsplit('/').next() {
                if !last.is_empty() {
                    deps.push(last.to_string());
                }
            }
        }
    }
    deps
}

fn parse_pyproject(text: &str) -> Vec<String> {
    let parsed: toml::Value = match toml::from_str(text) {
        Ok(v) => v,
        Err(err) => {
            warn!(%err, "failed to parse pyproject.toml");
            return Vec::new();
        }
    };

    let mut deps = Vec::new();

    // PEP 621: project.dependencies array of requirement strings.
    if let Some(list) = parsed
        .get("project")
        .and_then(|p| p.get("dependencies"))
        .and_then(|d| d.as_array())
    {
        for raw in list.iter().filter_map(|v| v.as_str()) {
            let name = strip_requirement_specifier(raw);
            if !name.is_empty() {
                deps.push(name.to_string());
            }
        }
    }

    // Poetry: tool.poetry.dependencies table, `python` excluded.
    if let Some(table) = parsed
        .get("tool")
        .and_then(|t| t.get("poetry"))
        .and_then(|p| p.get("dependencies"))
        .and_then(|d| d.as_table())
    {
        deps.extend(table.keys().filter(|k| *k != "python").cloned());
    }

    deps
}

fn parse_requirements_txt(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('-'))
        .map(strip_requirement_specifier)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Strips version specifiers, extras, and markers from a Python requirement
/// line: "requests>=2.0 ; python_version>'3'" -> "requests".
fn strip_requirement_specifier(raw: &str) -> &str {
    raw.split(|c: char| {
        matches!(c, '>' | '=' | '<' | '!' | '~' | ';' | '[') || c.is_whitespace()
    })
    .next()
    .unwrap_or("")
    .trim()
}

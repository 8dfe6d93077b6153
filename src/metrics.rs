//! Pure metrics transforms: aggregation, classification, scoring, and the
//! recently-active enrichment pass.
//!
//! Every function here is total over the data model: absent or malformed
//! input contributes nothing and never fails the run. Ordering is fully
//! deterministic (stable sorts over deterministic collections).

use std::collections::BTreeSet;

use crate::manifest::parse_manifest;
use crate::model::{
    ComplexityItem, DomainItem, DomainMap, LanguageItem, ManifestMap, ProjectItem,
    RepoContributions, RepoRecord, TechItem,
};
use crate::theme::FALLBACK_COLOR;

// ── Category sets ───────────────────────────────────────────────────────────

const EXCLUDED_LANGUAGES: &[&str] = &["Jupyter Notebook"];

const FRAMEWORK_TOPICS: &[&str] = &[
    "react", "nextjs", "next-js", "vue", "vuejs", "angular", "svelte", "sveltekit", "astro",
    "remix", "gatsby", "nuxt", "fastapi", "django", "flask", "express", "nestjs", "spring",
    "spring-boot", "rails", "ruby-on-rails", "laravel", "pytorch", "tensorflow", "keras",
    "scikit-learn", "huggingface", "langchain", "axum", "actix", "rocket", "gin", "fiber", "echo",
];

const FRAMEWORK_DEPS: &[&str] = &[
    "react", "react-dom", "next", "vue", "angular", "svelte", "@sveltejs/kit", "astro", "remix",
    "gatsby", "nuxt", "fastapi", "django", "flask", "express", "nestjs", "@nestjs/core", "torch",
    "pytorch", "tensorflow", "tf", "keras", "scikit-learn", "sklearn", "transformers",
    "langchain", "axum", "actix-web", "rocket", "gin", "fiber", "echo", "hono", "elysia",
    "solid-js", "qwik", "htmx",
];

const DB_INFRA_TOPICS: &[&str] = &[
    "postgresql", "postgres", "mysql", "mongodb", "redis", "sqlite", "dynamodb", "cassandra",
    "elasticsearch", "docker", "kubernetes", "k8s", "aws", "gcp", "azure", "terraform", "ansible",
    "nginx", "graphql", "grpc", "kafka", "rabbitmq", "supabase", "firebase", "vercel", "netlify",
];

const DB_INFRA_DEPS: &[&str] = &[
    "pg", "mysql2", "mongoose", "mongodb", "redis", "ioredis", "prisma", "@prisma/client",
    "typeorm", "sequelize", "knex", "drizzle-orm", "sqlx", "diesel", "sea-orm", "sqlalchemy",
    "psycopg2", "pymongo", "boto3", "docker", "docker-compose", "supabase",
    "@supabase/supabase-js", "firebase", "firebase-admin", "@google-cloud/storage", "aws-sdk",
    "@aws-sdk/client-s3", "graphql", "apollo-server", "@apollo/client", "grpc", "tonic",
];

const ML_AI_NAMES: &[&str] = &[
    "pytorch", "torch", "tensorflow", "tf", "keras", "scikit-learn", "sklearn", "huggingface",
    "transformers", "langchain",
];

const DATABASE_NAMES: &[&str] = &[
    "postgresql", "postgres", "mysql", "mongodb", "redis", "sqlite", "dynamodb", "cassandra",
    "elasticsearch", "pg", "mysql2", "mongoose", "prisma", "typeorm", "sequelize", "knex",
    "drizzle-orm", "sqlx", "diesel", "sea-orm", "sqlalchemy", "psycopg2", "pymongo", "ioredis",
];

fn is_excluded_language(name: &str) -> bool {
    EXCLUDED_LANGUAGES.contains(&name)
}

// ── Language aggregation ────────────────────────────────────────────────────

/// Sums per-language byte counts across all repositories, keeping the
/// first-seen color per language. Sorted descending by bytes, capped to 10.
pub fn aggregate_languages(repos: &[RepoRecord]) -> Vec<LanguageItem> {
    // (name, bytes, color) in first-seen order so ties sort stably.
    let mut acc: Vec<(String, u64, Option<String>)> = Vec::new();

    for repo in repos {
        for edge in &repo.languages.edges {
            if is_excluded_language(&edge.name) {
                continue;
            }
            match acc.iter_mut().find(|(name, _, _)| *name == edge.name) {
                Some(entry) => entry.1 += edge.size,
                None => acc.push((edge.name.clone(), edge.size, edge.color.clone())),
            }
        }
    }

    let total: u64 = acc.iter().map(|(_, bytes, _)| bytes).sum();
    if total == 0 {
        return Vec::new();
    }

    acc.sort_by(|a, b| b.1.cmp(&a.1));
    acc.truncate(10);
    acc.into_iter()
        .map(|(name, bytes, color)| LanguageItem {
            name,
            value: bytes,
            percent: format!("{:.1}", bytes as f64 / total as f64 * 100.0),
            color: color.unwrap_or_else(|| FALLBACK_COLOR.to_string()),
            trending: false,
        })
        .collect()
}

// ── Dependency classification ───────────────────────────────────────────────

#[derive(Clone, Debug, Default)]
pub struct TechCategories {
    pub frameworks: Vec<TechItem>,
    pub db_infra: Vec<TechItem>,
    pub tools: Vec<TechItem>,
}

/// Matches topic tags and manifest dependency names against the framework
/// and data/infra membership sets; everything unmatched lands in `tools`.
///
/// Buckets count distinct repositories, not occurrences, and tools seen in
/// fewer than two repositories are suppressed.
pub fn classify_dependencies(repos: &[RepoRecord], manifests: &ManifestMap) -> TechCategories {
    use std::collections::BTreeMap;

    let mut frameworks: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    let mut db_infra: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    let mut tools: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

    for repo in repos {
        for topic in &repo.topics {
            if FRAMEWORK_TOPICS.contains(&topic.as_str()) {
                frameworks
                    .entry(topic.clone())
                    .or_default()
                    .insert(repo.name.clone());
            } else if DB_INFRA_TOPICS.contains(&topic.as_str()) {
                db_infra
                    .entry(topic.clone())
                    .or_default()
                    .insert(repo.name.clone());
            }
        }

        let all_deps: Vec<String> = manifests
            .get(&repo.name)
            .map(|files| {
                files
                    .iter()
                    .flat_map(|(filename, text)| parse_manifest(filename, text))
                    .collect()
            })
            .unwrap_or_default();

        let mut seen = BTreeSet::new();
        for raw in &all_deps {
            // Scoped npm names reduce to their last segment for display but
            // keep matching under their full scoped form.
            let dep = match raw.strip_prefix('@') {
                Some(_) => raw.rsplit('/').next().unwrap_or(raw),
                None => raw.as_str(),
            };
            let lower = dep.to_lowercase();
            let lower_raw = raw.to_lowercase();
            if !seen.insert(lower.clone()) {
                continue;
            }

            let in_set = |set: &[&str]| {
                set.contains(&lower.as_str()) || set.contains(&lower_raw.as_str())
            };
            let bucket = if in_set(FRAMEWORK_DEPS) {
                &mut frameworks
            } else if in_set(DB_INFRA_DEPS) {
                &mut db_infra
            } else {
                &mut tools
            };
            bucket
                .entry(dep.to_string())
                .or_default()
                .insert(repo.name.clone());
        }
    }

    fn to_sorted(map: std::collections::BTreeMap<String, BTreeSet<String>>) -> Vec<TechItem> {
        let mut items: Vec<TechItem> = map
            .into_iter()
            .map(|(name, repos)| TechItem {
                name,
                value: repos.len() as u64,
                trending: false,
            })
            .collect();
        items.sort_by(|a, b| b.value.cmp(&a.value));
        items
    }

    let mut frameworks = to_sorted(frameworks);
    frameworks.truncate(10);
    let mut db_infra = to_sorted(db_infra);
    db_infra.truncate(10);
    let mut tools: Vec<TechItem> = to_sorted(tools)
        .into_iter()
        .filter(|t| t.value >= 2)
        .collect();
    tools.truncate(10);

    TechCategories {
        frameworks,
        db_infra,
        tools,
    }
}

// ── Complexity scoring ──────────────────────────────────────────────────────

/// Composite structural score per repository, sorted descending, top 5:
/// `langs*15 + log10(disk_kb)*20 + log10(code_bytes)*15 + min(edges, 50)`,
/// rounded to the nearest integer.
pub fn compute_complexity_scores(repos: &[RepoRecord]) -> Vec<ComplexityItem> {
    let mut items: Vec<ComplexityItem> = repos
        .iter()
        .map(|repo| {
            let lang_count = repo
                .languages
                .edges
                .iter()
                .filter(|e| !is_excluded_language(&e.name))
                .count();
            let disk_kb = repo.disk_usage.max(1) as f64;
            let code_bytes = repo.languages.total_size.max(1) as f64;
            let edge_count = repo.languages.edges.len().min(50);

            let score = lang_count as f64 * 15.0
                + disk_kb.log10() * 20.0
                + code_bytes.log10() * 15.0
                + edge_count as f64;

            ComplexityItem {
                name: repo.name.clone(),
                url: repo.url.clone(),
                description: repo.description.clone().unwrap_or_default(),
                value: score.round() as u64,
                trending: false,
            }
        })
        .collect();

    items.sort_by(|a, b| b.value.cmp(&a.value));
    items.truncate(5);
    items
}

// ── Sub-classification ──────────────────────────────────────────────────────

#[derive(Clone, Debug, Default)]
pub struct SubCategories {
    pub web_frameworks: Vec<TechItem>,
    pub ml_ai: Vec<TechItem>,
    pub databases: Vec<TechItem>,
    pub cloud_infra: Vec<TechItem>,
}

/// Splits the framework bucket into web vs ML/AI and the data/infra bucket
/// into databases vs cloud & infrastructure.
pub fn sub_classify(frameworks: &[TechItem], db_infra: &[TechItem]) -> SubCategories {
    let is_ml = |t: &TechItem| ML_AI_NAMES.contains(&t.name.to_lowercase().as_str());
    let is_db = |t: &TechItem| DATABASE_NAMES.contains(&t.name.to_lowercase().as_str());

    SubCategories {
        web_frameworks: frameworks.iter().filter(|t| !is_ml(t)).cloned().collect(),
        ml_ai: frameworks.iter().filter(|t| is_ml(t)).cloned().collect(),
        databases: db_infra.iter().filter(|t| is_db(t)).cloned().collect(),
        cloud_infra: db_infra.iter().filter(|t| !is_db(t)).cloned().collect(),
    }
}

// ── Domain aggregation ──────────────────────────────────────────────────────

/// Explodes the repo -> tags multimap into per-tag counts and repo lists.
/// Tags are whitespace-trimmed before counting so "web " and "web" merge;
/// tags that trim to nothing are dropped. Sorted descending by count, ties
/// keep first-seen order.
pub fn aggregate_domains(domain_map: &DomainMap) -> Vec<DomainItem> {
    let mut agg: Vec<DomainItem> = Vec::new();

    for (repo, tags) in domain_map {
        for tag in tags {
            let name = tag.trim();
            if name.is_empty() {
                continue;
            }
            match agg.iter_mut().find(|d| d.name == name) {
                Some(domain) => {
                    domain.count += 1;
                    domain.repos.push(repo.clone());
                }
                None => agg.push(DomainItem {
                    name: name.to_string(),
                    count: 1,
                    repos: vec![repo.clone()],
                }),
            }
        }
    }

    agg.sort_by(|a, b| b.count.cmp(&a.count));
    agg
}

// ── Recently active ─────────────────────────────────────────────────────────

/// Lower-cased names (primary language, every contained language, every
/// topic) of repositories with non-zero contributions in the lookback
/// window. Used to flag matching items elsewhere as trending.
pub fn compute_recently_active(
    contributions_by_repo: &[RepoContributions],
    repos: &[RepoRecord],
) -> BTreeSet<String> {
    let recent_repo_names: BTreeSet<&str> = contributions_by_repo
        .iter()
        .filter(|entry| entry.count > 0)
        .map(|entry| {
            entry
                .name_with_owner
                .rsplit('/')
                .next()
                .unwrap_or(entry.name_with_owner.as_str())
        })
        .collect();

    let mut active = BTreeSet::new();
    for repo in repos {
        if !recent_repo_names.contains(repo.name.as_str()) {
            continue;
        }
        if let Some(primary) = &repo.primary_language {
            active.insert(primary.name.to_lowercase());
        }
        for edge in &repo.languages.edges {
            active.insert(edge.name.to_lowercase());
        }
        for topic in &repo.topics {
            active.insert(topic.to_lowercase());
        }
    }

    active
}

/// Items that carry a recency flag settable by [`mark_trending`].
pub trait Trending {
    fn trend_key(&self) -> &str;
    fn set_trending(&mut self, trending: bool);
}

impl Trending for LanguageItem {
    fn trend_key(&self) -> &str {
        &self.name
    }
    fn set_trending(&mut self, trending: bool) {
        self.trending = trending;
    }
}

impl Trending for TechItem {
    fn trend_key(&self) -> &str {
        &self.name
    }
    fn set_trending(&mut self, trending: bool) {
        self.trending = trending;
    }
}

impl Trending for ComplexityItem {
    fn trend_key(&self) -> &str {
        &self.name
    }
    fn set_trending(&mut self, trending: bool) {
        self.trending = trending;
    }
}

/// Sets the `trending` flag on every item whose name appears in `active`
/// (exact case-insensitive match). Overwrites any prior flag; call once per
/// list after all lists are built.
pub fn mark_trending<T: Trending>(items: &mut [T], active: &BTreeSet<String>) {
    for item in items {
        let hit = active.contains(&item.trend_key().to_lowercase());
        item.set_trending(hit);
    }
}

// ── Corpus collection ───────────────────────────────────────────────────────

/// All distinct dependency names across all manifests, sorted.
pub fn collect_all_dependencies(repos: &[RepoRecord], manifests: &ManifestMap) -> Vec<String> {
    let mut deps = BTreeSet::new();
    for repo in repos {
        if let Some(files) = manifests.get(&repo.name) {
            for (filename, text) in files {
                deps.extend(parse_manifest(filename, text));
            }
        }
    }
    deps.into_iter().collect()
}

/// All distinct topic tags across all repositories, sorted.
pub fn collect_all_topics(repos: &[RepoRecord]) -> Vec<String> {
    let topics: BTreeSet<String> = repos
        .iter()
        .flat_map(|repo| repo.topics.iter().cloned())
        .collect();
    topics.into_iter().collect()
}

/// Top 5 repositories by star count; a missing description becomes "".
pub fn top_projects_by_stars(repos: &[RepoRecord]) -> Vec<ProjectItem> {
    let mut projects: Vec<ProjectItem> = repos
        .iter()
        .map(|repo| ProjectItem {
            name: repo.name.clone(),
            url: repo.url.clone(),
            description: repo.description.clone().unwrap_or_default(),
            stars: repo.stargazer_count,
        })
        .collect();
    projects.sort_by(|a, b| b.stars.cmp(&a.stars));
    projects.truncate(5);
    projects
}

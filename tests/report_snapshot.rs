use octoglyph::{MetricsSnapshot, ReportOptions, UserConfig, generate_report};

fn fixture() -> MetricsSnapshot {
    let raw = include_str!("data/snapshot.json");
    MetricsSnapshot::from_json(raw).unwrap()
}

fn options(config: &UserConfig) -> ReportOptions<'_> {
    ReportOptions {
        config,
        generated_on: Some("2026-08-06"),
        svg_dir: "metrics",
    }
}

#[test]
fn report_is_byte_identical_across_runs() {
    let snapshot = fixture();
    let config = UserConfig::default();

    let a = generate_report(&snapshot, &options(&config));
    let b = generate_report(&snapshot, &options(&config));

    assert_eq!(a.index, b.index);
    assert_eq!(a.readme, b.readme);
    assert_eq!(a.files.len(), b.files.len());
    for (fa, fb) in a.files.iter().zip(&b.files) {
        assert_eq!(fa.filename, fb.filename);
        assert_eq!(fa.markup, fb.markup);
    }
}

#[test]
fn every_expected_section_is_present() {
    let report = generate_report(&fixture(), &options(&UserConfig::default()));
    let names: Vec<&str> = report.files.iter().map(|f| f.filename.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "metrics-domains.svg",
            "metrics-languages.svg",
            "metrics-tech-stack.svg",
            "metrics-expertise.svg",
            "metrics-complexity.svg",
            "metrics-pulse.svg",
            "metrics-contributions.svg",
            "metrics-calendar.svg",
        ]
    );
}

#[test]
fn section_files_are_standalone_svg_documents() {
    let report = generate_report(&fixture(), &options(&UserConfig::default()));
    for file in &report.files {
        assert!(file.markup.starts_with("<svg"), "{}", file.filename);
        assert!(file.markup.ends_with("</svg>"), "{}", file.filename);
        assert!(file.markup.contains("<defs><style>"), "{}", file.filename);
    }
    assert!(report.index.starts_with("<svg"));
    assert!(report.index.ends_with("</svg>"));
}

#[test]
fn fixture_semantics_survive_the_pipeline() {
    let report = generate_report(&fixture(), &options(&UserConfig::default()));

    // The excluded pseudo-language never reaches the languages donut.
    let languages = report
        .files
        .iter()
        .find(|f| f.filename == "metrics-languages.svg")
        .unwrap();
    assert!(!languages.markup.contains("Jupyter Notebook"));
    assert!(languages.markup.contains("Rust"));

    // The domain cloud merged the "web " / "web" tags into one pill.
    let domains = report
        .files
        .iter()
        .find(|f| f.filename == "metrics-domains.svg")
        .unwrap();
    assert_eq!(domains.markup.matches(">web</text>").count(), 1);

    // The untrusted expertise score is clamped to 100.
    let expertise = report
        .files
        .iter()
        .find(|f| f.filename == "metrics-expertise.svg")
        .unwrap();
    assert!(expertise.markup.contains(">100%</text>"));
    assert!(!expertise.markup.contains(">130%</text>"));

    // Recent activity on difference-engine marks Rust as trending.
    assert!(languages.markup.contains("<path"));

    // Stat captions use thousands grouping.
    let pulse = report
        .files
        .iter()
        .find(|f| f.filename == "metrics-pulse.svg")
        .unwrap();
    assert!(pulse.markup.contains(">1,204</text>"));
}

#[test]
fn readme_embeds_every_section_in_order() {
    let report = generate_report(&fixture(), &options(&UserConfig::default()));
    let mut last = 0;
    for file in &report.files {
        let needle = format!("(metrics/{})", file.filename);
        let pos = report
            .readme
            .find(&needle)
            .unwrap_or_else(|| panic!("readme missing {needle}"));
        assert!(pos >= last, "embeds out of order at {needle}");
        last = pos;
    }
    assert!(report.readme.contains("Last generated on 2026-08-06"));
}

#[test]
fn config_controls_template_and_sections() {
    let raw = "name = \"Ada Lovelace\"\ntemplate = \"minimal\"\nsections = [\"languages\", \"pulse\"]\n";
    let config = octoglyph::parse_user_config(raw).unwrap();
    let report = generate_report(&fixture(), &options(&config));

    let names: Vec<&str> = report.files.iter().map(|f| f.filename.as_str()).collect();
    assert_eq!(names, vec!["metrics-languages.svg", "metrics-pulse.svg"]);
    assert!(report.readme.starts_with("# Ada\n"));
}

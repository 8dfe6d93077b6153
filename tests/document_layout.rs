//! The central layout invariant: every renderer returns the exact height it
//! consumed, so the composed document's total height equals the fold of all
//! header heights, body heights, and fixed gaps plus outer padding.

use octoglyph::{MetricsSnapshot, ReportOptions, UserConfig, generate_report};

const PAD_Y: f64 = 24.0;
const SECTION_GAP: f64 = 30.0;

fn fixture() -> MetricsSnapshot {
    let raw = include_str!("data/snapshot.json");
    MetricsSnapshot::from_json(raw).unwrap()
}

fn svg_height(svg: &str) -> f64 {
    let start = svg.find("height=\"").expect("height attribute") + "height=\"".len();
    let rest = &svg[start..];
    let end = rest.find('"').expect("closing quote");
    rest[..end].parse().expect("numeric height")
}

#[test]
fn document_height_is_the_sum_of_its_parts() {
    let config = UserConfig::default();
    let opts = ReportOptions {
        config: &config,
        generated_on: None,
        svg_dir: "metrics",
    };
    let report = generate_report(&fixture(), &opts);

    // Each standalone section file is pad + header + body + pad; the
    // combined document replaces the per-file padding with one shared pad
    // pair and a fixed gap after every section.
    let summed: f64 = report
        .files
        .iter()
        .map(|file| svg_height(&file.markup) - 2.0 * PAD_Y + SECTION_GAP)
        .sum();
    let expected = summed + 2.0 * PAD_Y;

    assert_eq!(svg_height(&report.index), expected);
}

#[test]
fn section_files_are_self_sized() {
    let config = UserConfig::default();
    let opts = ReportOptions {
        config: &config,
        generated_on: None,
        svg_dir: "metrics",
    };
    let report = generate_report(&fixture(), &opts);

    for file in &report.files {
        let height = svg_height(&file.markup);
        assert!(
            height > 2.0 * PAD_Y,
            "{} reports implausible height {height}",
            file.filename
        );
        // The viewBox must agree with the reported height.
        let view_box = format!("viewBox=\"0 0 808 {}\"", trim_num(height));
        assert!(
            file.markup.contains(&view_box),
            "{} viewBox disagrees with height",
            file.filename
        );
    }
}

fn trim_num(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{}", v.round() as i64)
    } else {
        format!("{v}")
    }
}

use std::{fs, path::PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "octoglyph", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render SVG report cards and the Markdown profile from a metrics snapshot.
    Generate(GenerateArgs),
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Input metrics snapshot JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output directory for the SVG files.
    #[arg(long, default_value = "metrics")]
    out_dir: PathBuf,

    /// User config TOML (defaults to .octoglyph.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Preamble markdown embedded into the profile (defaults to PREAMBLE.md when present).
    #[arg(long)]
    preamble: Option<PathBuf>,

    /// Write the Markdown profile to this path.
    #[arg(long)]
    readme: Option<PathBuf>,

    /// Date stamped into the attribution line (YYYY-MM-DD).
    #[arg(long)]
    generated_on: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
    }
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let raw = fs::read_to_string(&args.in_path)
        .with_context(|| format!("open snapshot '{}'", args.in_path.display()))?;
    let snapshot = octoglyph::MetricsSnapshot::from_json(&raw)?;
    info!(repos = snapshot.repos.len(), "snapshot loaded");

    let mut config = octoglyph::load_user_config(args.config.as_deref());
    if let Some(preamble) = octoglyph::profile::load_preamble(args.preamble.as_deref())? {
        config.preamble = Some(preamble);
    }

    let svg_dir = args.out_dir.to_string_lossy().into_owned();
    let opts = octoglyph::ReportOptions {
        config: &config,
        generated_on: args.generated_on.as_deref(),
        svg_dir: &svg_dir,
    };
    let report = octoglyph::generate_report(&snapshot, &opts);

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    for file in &report.files {
        let path = args.out_dir.join(&file.filename);
        fs::write(&path, &file.markup)
            .with_context(|| format!("write svg '{}'", path.display()))?;
        info!(path = %path.display(), "wrote section");
    }

    let index_path = args.out_dir.join("index.svg");
    fs::write(&index_path, &report.index)
        .with_context(|| format!("write svg '{}'", index_path.display()))?;
    info!(path = %index_path.display(), "wrote combined document");

    if let Some(readme_path) = &args.readme {
        if let Some(parent) = readme_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
        }
        fs::write(readme_path, &report.readme)
            .with_context(|| format!("write readme '{}'", readme_path.display()))?;
        info!(path = %readme_path.display(), "wrote profile");
    }

    eprintln!(
        "wrote {} section files to {}",
        report.files.len(),
        args.out_dir.display()
    );
    Ok(())
}

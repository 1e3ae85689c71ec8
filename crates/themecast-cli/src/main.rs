//! Directory batch runner for the themecast pipeline.
//!
//! Thin adapter only: reads `*.json` documents from a directory in file-name
//! order, hands them to the core pipeline, writes the three artifacts and
//! prints the run report. No extraction or assembly logic lives here.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use themecast::{run, SourceDocument};

#[derive(Parser)]
#[command(
    name = "themecast",
    version,
    about = "Compile design-token documents into CSS custom properties"
)]
struct Args {
    /// Directory containing exported token documents (*.json)
    input: PathBuf,

    /// Output directory for theme.css, primitives.json and tokens.json
    #[arg(long, default_value = ".")]
    out: PathBuf,

    /// Suppress the per-document report
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let documents = read_documents(&args.input)?;
    let bundle = run(&documents);

    fs::create_dir_all(&args.out)
        .with_context(|| format!("creating output directory {}", args.out.display()))?;
    write_artifact(&args.out.join("theme.css"), &bundle.css)?;
    write_artifact(
        &args.out.join("primitives.json"),
        &manifest_text(&bundle.primitives)?,
    )?;
    write_artifact(&args.out.join("tokens.json"), &manifest_text(&bundle.tokens)?)?;

    if !args.quiet {
        for notice in bundle.report.notices() {
            let line = notice.to_string();
            if notice.is_warning() {
                eprintln!("{}", style(line).yellow());
            } else {
                eprintln!("{}", style(line).dim());
            }
        }
        eprintln!("{}", style(bundle.report.summary()).green());
    }
    Ok(())
}

/// Reads the input documents in file-name order.
///
/// A file that cannot be read is skipped with a warning, mirroring how the
/// core isolates per-document parse failures.
fn read_documents(dir: &Path) -> Result<Vec<SourceDocument>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("reading input directory {}", dir.display()))?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();

    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        match fs::read_to_string(&path) {
            Ok(text) => documents.push(SourceDocument::new(name, text)),
            Err(err) => {
                tracing::warn!(file = %path.display(), error = %err, "skipping unreadable document");
                eprintln!(
                    "{}",
                    style(format!("read-error: {name}: {err}")).yellow()
                );
            }
        }
    }
    Ok(documents)
}

fn write_artifact(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("writing {}", path.display()))
}

fn manifest_text(value: &serde_json::Value) -> Result<String> {
    let mut text = serde_json::to_string_pretty(value).context("serializing manifest")?;
    text.push('\n');
    Ok(text)
}

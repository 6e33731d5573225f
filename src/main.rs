//! pila-extract - Entry point
//!
//! CLI for extracting candidate identifier numbers from PILA
//! payroll-contribution PDFs.

use clap::{Parser, Subcommand};
use pila_extract::{
    scan_directory, DocumentExtractor, DocumentReport, DocumentSource, ExtractorConfig,
    FilterOptions,
};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "pila-extract",
    version,
    about = "Extract candidate identifier numbers from PILA payroll-contribution PDFs"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract numbers from one or more documents
    Extract {
        /// PDF files to process
        files: Vec<PathBuf>,

        /// Remote PDFs to fetch over http(s)
        #[arg(long = "url", value_name = "URL")]
        urls: Vec<String>,

        /// File holding a base64-encoded PDF payload
        #[arg(long, value_name = "PATH")]
        base64_file: Option<PathBuf>,

        /// Password for protected PDFs
        #[arg(long)]
        password: Option<String>,

        /// Minimum digit count a token must retain to survive filtering
        #[arg(long, default_value_t = 5)]
        min_digits: usize,

        /// Keep thousands-grouped amounts instead of removing them
        #[arg(long)]
        keep_grouped: bool,

        /// Use the earlier filter variant (6-digit minimum, amounts kept)
        #[arg(long, conflicts_with_all = ["min_digits", "keep_grouped"])]
        legacy: bool,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// List PDF files in a directory
    Scan {
        /// Directory to search
        directory: PathBuf,

        /// Search subdirectories recursively
        #[arg(long)]
        recursive: bool,

        /// Filename pattern filter (e.g. "pila*.pdf")
        #[arg(long)]
        pattern: Option<String>,

        /// Run number extraction on every file found
        #[arg(long)]
        extract: bool,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pila_extract=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Extract {
            files,
            urls,
            base64_file,
            password,
            min_digits,
            keep_grouped,
            legacy,
            pretty,
        } => run_extract(
            files,
            urls,
            base64_file,
            password,
            min_digits,
            keep_grouped,
            legacy,
            pretty,
        ),
        Command::Scan {
            directory,
            recursive,
            pattern,
            extract,
            pretty,
        } => run_scan(directory, recursive, pattern, extract, pretty),
    }
}

#[allow(clippy::too_many_arguments)]
fn run_extract(
    files: Vec<PathBuf>,
    urls: Vec<String>,
    base64_file: Option<PathBuf>,
    password: Option<String>,
    min_digits: usize,
    keep_grouped: bool,
    legacy: bool,
    pretty: bool,
) -> anyhow::Result<()> {
    let filter = if legacy {
        FilterOptions::legacy()
    } else {
        FilterOptions {
            min_digits,
            strip_grouped_amounts: !keep_grouped,
        }
    };

    let mut sources: Vec<DocumentSource> = files
        .iter()
        .map(|f| DocumentSource::Path {
            path: f.display().to_string(),
        })
        .collect();
    sources.extend(urls.into_iter().map(|url| DocumentSource::Url { url }));
    if let Some(path) = base64_file {
        let base64 = std::fs::read_to_string(&path)?;
        sources.push(DocumentSource::Base64 { base64 });
    }

    if sources.is_empty() {
        anyhow::bail!("no documents to process; pass files, --url, or --base64-file");
    }

    let extractor = DocumentExtractor::new(ExtractorConfig {
        filter,
        password,
        ..Default::default()
    });

    let reports: Vec<DocumentReport> = sources
        .iter()
        .map(|source| extractor.extract_source(source))
        .collect();

    let found = reports.iter().filter(|r| r.success).count();
    tracing::info!(documents = reports.len(), with_numbers = found, "extraction complete");

    print_json(&reports, pretty)
}

fn run_scan(
    directory: PathBuf,
    recursive: bool,
    pattern: Option<String>,
    extract: bool,
    pretty: bool,
) -> anyhow::Result<()> {
    let files = scan_directory(&directory, recursive, pattern.as_deref())?;
    tracing::info!(
        directory = %directory.display(),
        count = files.len(),
        "scan complete"
    );

    if extract {
        let extractor = DocumentExtractor::new(ExtractorConfig::default());
        let reports: Vec<DocumentReport> = files
            .iter()
            .map(|file| {
                extractor.extract_source(&DocumentSource::Path {
                    path: file.path.clone(),
                })
            })
            .collect();

        print_json(
            &serde_json::json!({
                "directory": directory.display().to_string(),
                "files": files,
                "total_count": files.len(),
                "reports": reports,
            }),
            pretty,
        )
    } else {
        print_json(
            &serde_json::json!({
                "directory": directory.display().to_string(),
                "files": files,
                "total_count": files.len(),
            }),
            pretty,
        )
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", out);
    Ok(())
}

//! unlayout CLI - render document analysis results

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use unlayout::convert::{convert_files_with_progress, default_output_path};
use unlayout::{
    ContentFormat, ConvertOptions, Error, ErrorCategory, ExtractionStats, LocalOutputStore,
    OutputFormat, OutputStore, RenderOptions,
};

#[derive(Parser)]
#[command(name = "unlayout")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Rebuild reading order of document analysis results as HTML", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render an analysis result as HTML
    Html {
        /// Analysis-result JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Convert an analysis result into a stored payload
    Convert {
        /// Analysis-result JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (default: under the data directory)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Content format recorded in the payload
        #[arg(short = 'f', long, value_enum, default_value = "text")]
        format: ContentArg,

        /// Write only the rendered HTML
        #[arg(long)]
        html_only: bool,

        /// Data directory for default output paths
        #[arg(long, value_name = "DIR", env = "UNLAYOUT_DATA_DIR", default_value = "data")]
        data_dir: PathBuf,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Convert many analysis results
    Batch {
        /// Analysis-result JSON files
        #[arg(value_name = "FILES", required = true)]
        inputs: Vec<PathBuf>,

        /// Data directory for outputs
        #[arg(short, long, value_name = "DIR", env = "UNLAYOUT_DATA_DIR", default_value = "data")]
        output: PathBuf,

        /// Content format recorded in the payloads
        #[arg(short = 'f', long, value_enum, default_value = "text")]
        format: ContentArg,

        /// Write only the rendered HTML
        #[arg(long)]
        html_only: bool,

        /// Convert one file at a time
        #[arg(long)]
        sequential: bool,
    },

    /// Show document information
    Info {
        /// Analysis-result JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

#[derive(clap::Args)]
struct RenderArgs {
    /// HTML document title
    #[arg(long)]
    title: Option<String>,

    /// Leave out the embedded stylesheet
    #[arg(long)]
    no_style: bool,

    /// Render label/value lines as plain paragraphs
    #[arg(long)]
    no_pairs: bool,

    /// Leave out figures
    #[arg(long)]
    no_figures: bool,
}

impl RenderArgs {
    fn to_options(&self) -> RenderOptions {
        let mut options = RenderOptions::new()
            .with_stylesheet(!self.no_style)
            .with_key_value_pairing(!self.no_pairs)
            .with_figures(!self.no_figures);
        if let Some(ref title) = self.title {
            options = options.with_title(title.clone());
        }
        options
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum ContentArg {
    /// Keep the plain-text content
    Text,
    /// Record markdown content
    Markdown,
    /// Replace content with rendered HTML
    Html,
}

impl From<ContentArg> for ContentFormat {
    fn from(arg: ContentArg) -> Self {
        match arg {
            ContentArg::Text => ContentFormat::Text,
            ContentArg::Markdown => ContentFormat::Markdown,
            ContentArg::Html => ContentFormat::Html,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Html {
            input,
            output,
            render,
        } => cmd_html(&input, output.as_deref(), &render),
        Commands::Convert {
            input,
            output,
            format,
            html_only,
            data_dir,
            render,
        } => cmd_convert(
            &input,
            output.as_deref(),
            format,
            html_only,
            &data_dir,
            &render,
        ),
        Commands::Batch {
            inputs,
            output,
            format,
            html_only,
            sequential,
        } => cmd_batch(&inputs, &output, format, html_only, sequential).map(|_| ()),
        Commands::Info { input, json } => cmd_info(&input, json),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(exit_code(e.as_ref()));
    }
}

/// Process exit code for a failed command.
fn exit_code(error: &(dyn std::error::Error + 'static)) -> i32 {
    match error.downcast_ref::<Error>().map(Error::category) {
        Some(ErrorCategory::NotFound) | Some(ErrorCategory::BadRequest) => 2,
        Some(ErrorCategory::UpstreamService) => 3,
        Some(ErrorCategory::Internal) | None => 1,
    }
}

fn output_format(html_only: bool) -> OutputFormat {
    if html_only {
        OutputFormat::Html
    } else {
        OutputFormat::Json
    }
}

fn cmd_html(
    input: &Path,
    output: Option<&Path>,
    render: &RenderArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    log::debug!("Rendering {} as HTML", input.display());
    let html = unlayout::to_html_with_options(input, &render.to_options())?;

    if let Some(path) = output {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, &html)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", html);
    }

    Ok(())
}

fn cmd_convert(
    input: &Path,
    output: Option<&Path>,
    format: ContentArg,
    html_only: bool,
    data_dir: &Path,
    render: &RenderArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = ConvertOptions::new()
        .with_render_options(render.to_options())
        .with_content_format(format.into())
        .with_format(output_format(html_only));
    log::debug!(
        "Converting {} (content format {}, {:?} output)",
        input.display(),
        options.content_format,
        options.output_format
    );

    let result = unlayout::convert_file(input, &options)?;

    let path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output_path(data_dir, input, options.output_format));
    LocalOutputStore::new().save(&result.payload, &path)?;

    println!("{} {}", "Saved to".green(), path.display());
    if let Some(ref subject) = result.metadata.subject {
        println!("  {} {}", "Subject:".dimmed(), subject);
    }

    Ok(())
}

fn cmd_batch(
    inputs: &[PathBuf],
    data_dir: &Path,
    format: ContentArg,
    html_only: bool,
    sequential: bool,
) -> Result<ExtractionStats, Box<dyn std::error::Error>> {
    let options = ConvertOptions::new()
        .with_content_format(format.into())
        .with_format(output_format(html_only))
        .with_parallel(!sequential)
        .with_stats(true);
    log::debug!(
        "Batch converting {} files into {} ({})",
        inputs.len(),
        data_dir.display(),
        if sequential { "sequential" } else { "parallel" }
    );

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );
    pb.set_message("Converting...");

    let results = convert_files_with_progress(inputs, &options, |path, _| {
        pb.set_message(path.display().to_string());
        pb.inc(1);
    });
    pb.finish_with_message("Done!");

    let store = LocalOutputStore::new();
    let mut saved = 0;
    let mut failures: Vec<(&Path, Error)> = Vec::new();
    let mut totals = ExtractionStats::new();
    for (input, result) in inputs.iter().zip(results) {
        let outcome = result.and_then(|converted| {
            if let Some(ref stats) = converted.stats {
                totals.merge(stats);
            }
            let path = default_output_path(data_dir, input, options.output_format);
            store.save(&converted.payload, &path).map(|_| path)
        });
        match outcome {
            Ok(path) => {
                println!("  {} {}", "├─".dimmed(), path.display());
                saved += 1;
            }
            Err(e) => failures.push((input.as_path(), e)),
        }
    }

    println!(
        "\n{} {} of {} files converted",
        "Done!".green().bold(),
        saved,
        inputs.len()
    );
    if totals.block_count > 0 {
        println!(
            "  {} {} blocks, {} tables, {} figures, {} key/value rows",
            "Totals:".dimmed(),
            totals.block_count,
            totals.table_count,
            totals.figure_count,
            totals.key_value_count
        );
    }

    if failures.is_empty() {
        return Ok(totals);
    }
    for (input, error) in &failures {
        eprintln!("  {} {}: {}", "✗".red(), input.display(), error);
    }
    // Report the first failure so the exit code reflects its category.
    let (_, first) = failures.remove(0);
    Err(first.into())
}

fn cmd_info(input: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let result = unlayout::Unlayout::new().parse(input)?;
    let rendered = result.to_html_with_stats()?;
    let metadata = &rendered.metadata;
    let stats = &rendered.stats;

    if json {
        let info = serde_json::json!({
            "file": input.display().to_string(),
            "metadata": metadata,
            "stats": stats,
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    if let Some(ref model) = metadata.model_id {
        println!("{}: {}", "Model".bold(), model);
    }
    if let Some(ref subject) = metadata.subject {
        println!("{}: {}", "Subject".bold(), subject);
    }
    if let Some(ref category) = metadata.category {
        println!("{}: {}", "Category".bold(), category);
    }
    println!("{}: {}", "Pages".bold(), metadata.pages_count);
    println!("{}: {}", "Paragraphs".bold(), metadata.paragraphs_count);
    println!("{}: {}", "Tables".bold(), metadata.tables_count);
    println!("{}: {}", "Figures".bold(), metadata.figures_count);

    println!();
    println!("{}", "Reading Order".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Blocks".bold(), stats.block_count);
    println!("{}: {}", "Section-ranked".bold(), stats.section_ranked_count);
    println!(
        "{}: {} contained, {} captions",
        "Dropped paragraphs".bold(),
        stats.contained_paragraph_count,
        stats.caption_paragraph_count
    );
    println!("{}: {}", "Headings".bold(), stats.heading_count);
    println!(
        "{}: {} ({} items)",
        "Lists".bold(),
        stats.list_count,
        stats.list_item_count
    );
    println!("{}: {}", "Key/value rows".bold(), stats.key_value_count);

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "unlayout".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Reading-order reconstruction for document analysis results");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/unlayout".dimmed());
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let not_found = Error::NotFound(PathBuf::from("x.json"));
        let invalid = Error::InvalidInput("bad".into());
        let upstream = Error::Upstream {
            code: "failed".into(),
            message: "boom".into(),
        };
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk");

        assert_eq!(exit_code(&not_found), 2);
        assert_eq!(exit_code(&invalid), 2);
        assert_eq!(exit_code(&upstream), 3);
        assert_eq!(exit_code(&Error::Render("x".into())), 1);
        assert_eq!(exit_code(&io), 1);
    }

    #[test]
    fn test_render_args_to_options() {
        let args = RenderArgs {
            title: Some("Statement".into()),
            no_style: true,
            no_pairs: false,
            no_figures: true,
        };
        let options = args.to_options();
        assert_eq!(options.title, "Statement");
        assert!(!options.include_stylesheet);
        assert!(options.pair_key_values);
        assert!(!options.include_figures);
    }

    #[test]
    fn test_cmd_convert_writes_default_path() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("statement.json");
        fs::write(
            &input,
            r#"{"paragraphs": [{"role": "title", "content": "Fees"}]}"#,
        )
        .unwrap();
        let data_dir = dir.path().join("data");
        let render = RenderArgs {
            title: None,
            no_style: false,
            no_pairs: false,
            no_figures: false,
        };

        cmd_convert(&input, None, ContentArg::Html, false, &data_dir, &render).unwrap();

        let written = fs::read_to_string(data_dir.join("raw/raw_statement.json")).unwrap();
        let payload: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(payload["contentFormat"], "html");
        assert_eq!(payload["metadata"]["subject"], "Fees");
    }

    #[test]
    fn test_cmd_batch_totals_stats() {
        let dir = tempfile::tempdir().unwrap();
        let inputs: Vec<PathBuf> = (0..3)
            .map(|i| {
                let path = dir.path().join(format!("doc{}.json", i));
                fs::write(
                    &path,
                    r#"{"paragraphs": [{"content": "Annual Fee"}, {"content": "$95"}],
                        "tables": [{"rowCount": 1, "columnCount": 1,
                                    "cells": [{"rowIndex": 0, "columnIndex": 0, "content": "APR"}]}]}"#,
                )
                .unwrap();
                path
            })
            .collect();
        let data_dir = dir.path().join("data");

        let totals = cmd_batch(&inputs, &data_dir, ContentArg::Text, true, true).unwrap();

        assert_eq!(totals.table_count, 3);
        assert_eq!(totals.key_value_count, 3);
        assert_eq!(totals.block_count, 9);
        assert!(data_dir.join("html/doc2.html").exists());
    }
}

//! pagecheck CLI - page-layout consistency checking tool

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pagecheck::{
    validate_file, validate_files, Document, Region, ValidationReport, ValidatorOptions,
};

#[derive(Parser)]
#[command(name = "pagecheck")]
#[command(version)]
#[command(about = "Check page-layout documents for textual and coordinate consistency", long_about = None)]
struct Cli {
    /// Input document files
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Treatment of textual inconsistencies (strict, lax, fix, off)
    #[arg(long, default_value = "strict")]
    strictness: String,

    /// Only print one summary line per file
    #[arg(short, long)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate documents for consistency
    #[command(alias = "check")]
    Validate {
        /// Input document files
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,

        /// Treatment of textual inconsistencies (strict, lax, fix, off)
        #[arg(long, default_value = "strict")]
        strictness: String,

        /// Selection of the canonical text reading
        #[arg(long, default_value = "index1")]
        strategy: String,

        /// Skip baseline checks
        #[arg(long)]
        no_check_baseline: bool,

        /// Skip coordinate checks
        #[arg(long)]
        no_check_coords: bool,

        /// Report output format
        #[arg(long, value_enum, default_value = "text")]
        format: ReportFormat,

        /// Only print one summary line per file
        #[arg(short, long)]
        quiet: bool,
    },

    /// Show document information
    Info {
        /// Input document file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    /// Human-readable text
    Text,
    /// Machine-readable JSON
    Json,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Some(Commands::Validate {
            files,
            strictness,
            strategy,
            no_check_baseline,
            no_check_coords,
            format,
            quiet,
        }) => cmd_validate(
            &files,
            &strictness,
            &strategy,
            no_check_baseline,
            no_check_coords,
            format,
            quiet,
        ),
        Some(Commands::Info { file }) => cmd_info(&file).map(|()| true),
        Some(Commands::Version) => {
            cmd_version();
            Ok(true)
        }
        None => {
            // Default behavior: validate if files are provided
            if cli.files.is_empty() {
                println!("{}", "Usage: pagecheck <FILE>...".yellow());
                println!("       pagecheck --help for more information");
                Ok(true)
            } else {
                cmd_validate(
                    &cli.files,
                    &cli.strictness,
                    "index1",
                    false,
                    false,
                    ReportFormat::Text,
                    cli.quiet,
                )
            }
        }
    };

    // exit 0 when every file is valid, 1 on findings, 2 on bad usage
    match outcome {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            std::process::exit(2);
        }
    }
}

fn cmd_validate(
    files: &[PathBuf],
    strictness: &str,
    strategy: &str,
    no_check_baseline: bool,
    no_check_coords: bool,
    format: ReportFormat,
    quiet: bool,
) -> Result<bool, Box<dyn std::error::Error>> {
    let options = ValidatorOptions::new()
        .with_strictness(strictness.parse()?)
        .with_strategy(strategy.parse()?)
        .with_check_baseline(!no_check_baseline)
        .with_check_coords(!no_check_coords);
    log::debug!(
        "Validating {} files with strictness={} strategy={}",
        files.len(),
        strictness,
        strategy
    );

    let results = if files.len() > 1 {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner.set_message(format!("Validating {} files...", files.len()));
        let results = validate_files(files, options);
        spinner.finish_and_clear();
        results
    } else {
        files
            .iter()
            .map(|path| (path.clone(), validate_file(path, options)))
            .collect()
    };

    let all_valid = match format {
        ReportFormat::Text => {
            let mut valid = 0;
            for (path, outcome) in &results {
                if report_line(path, outcome, quiet) {
                    valid += 1;
                }
            }
            if results.len() > 1 {
                println!(
                    "\n{} {}/{} files valid",
                    "Done!".green().bold(),
                    valid,
                    results.len()
                );
            }
            valid == results.len()
        }
        ReportFormat::Json => {
            let entries: Vec<serde_json::Value> = results
                .iter()
                .map(|(path, outcome)| match outcome {
                    Ok(report) => serde_json::json!({
                        "file": path.display().to_string(),
                        "valid": report.is_valid(),
                        "errors": report.errors(),
                    }),
                    Err(e) => serde_json::json!({
                        "file": path.display().to_string(),
                        "error": e.to_string(),
                    }),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
            results
                .iter()
                .all(|(_, outcome)| matches!(outcome, Ok(report) if report.is_valid()))
        }
    };

    Ok(all_valid)
}

/// Print one file's outcome, returning whether it was valid.
fn report_line(path: &Path, outcome: &pagecheck::Result<ValidationReport>, quiet: bool) -> bool {
    match outcome {
        Ok(report) if report.is_valid() => {
            println!("{}: {}", path.display(), "OK".green());
            true
        }
        Ok(report) => {
            println!(
                "{}: {}",
                path.display(),
                format!("INVALID[ {} errors ]", report.len()).red()
            );
            if !quiet {
                for error in report.errors() {
                    println!("  {}", error);
                }
            }
            false
        }
        Err(e) => {
            println!("{}: {} {}", path.display(), "ERROR".red().bold(), e);
            false
        }
    }
}

fn cmd_info(file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let document = Document::from_json_file(file)?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), file.display());
    if let Some(ref id) = document.id {
        println!("{}: {}", "ID".bold(), id);
    }
    println!("{}: {}", "Image".bold(), document.page.image_filename);
    println!(
        "{}: {}x{}",
        "Size".bold(),
        document.page.image_width,
        document.page.image_height
    );
    println!(
        "{}: {}",
        "Border".bold(),
        if document.page.border.is_some() {
            "Yes"
        } else {
            "No"
        }
    );

    if let Some(ref metadata) = document.metadata {
        if let Some(ref creator) = metadata.creator {
            println!("{}: {}", "Creator".bold(), creator);
        }
        if let Some(ref created) = metadata.created {
            println!("{}: {}", "Created".bold(), created);
        }
        if let Some(ref last_change) = metadata.last_change {
            println!("{}: {}", "Modified".bold(), last_change);
        }
    }

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let mut totals = Totals::default();
    for region in &document.page.regions {
        tally_region(region, &mut totals);
    }

    println!("{}: {}", "Regions".bold(), totals.regions);
    println!("{}: {}", "Lines".bold(), totals.lines);
    println!("{}: {}", "Words".bold(), totals.words);
    println!("{}: {}", "Glyphs".bold(), totals.glyphs);

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "pagecheck".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Page-layout consistency checking tool");
    println!();
    println!(
        "Repository: {}",
        "https://github.com/pagecheck/pagecheck".dimmed()
    );
    println!("License: MIT");
}

#[derive(Default)]
struct Totals {
    regions: usize,
    lines: usize,
    words: usize,
    glyphs: usize,
}

fn tally_region(region: &Region, totals: &mut Totals) {
    totals.regions += 1;
    for child in &region.regions {
        tally_region(child, totals);
    }
    for line in &region.lines {
        totals.lines += 1;
        for word in &line.words {
            totals.words += 1;
            totals.glyphs += word.glyphs.len();
        }
    }
}

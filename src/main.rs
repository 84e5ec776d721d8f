//! lintreport: HTML report generator CLI

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use lintreport::config::{load_config, CliOverrides};
use lintreport::normalizer::read_input;
use lintreport::output::write_report;
use lintreport::reporter::HtmlReporter;
use lintreport::{build_report, ReportError};
use std::path::PathBuf;
use std::process::ExitCode;

/// Render ESLint or TSLint JSON output as a static HTML report
#[derive(Parser, Debug)]
#[command(name = "lintreport")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file name to be read (default: jsonOutput.json)
    #[arg(long, short = 'f')]
    jsonfile: Option<String>,

    /// Folder the report is generated in (default: ng-lint-report)
    #[arg(long, short = 'o')]
    output: Option<String>,

    /// Report file name (default: report.html)
    #[arg(long, short = 'n')]
    filename: Option<String>,

    /// Custom HTML template; its ##placeholder## is replaced by the report
    #[arg(long)]
    template: Option<String>,

    /// Path to config file (default: search .lintreportrc.json in current dir and parents)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fail on malformed JSON instead of writing an empty report
    #[arg(long)]
    strict: bool,

    /// Quiet mode (errors only)
    #[arg(long, short)]
    quiet: bool,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            jsonfile: self.jsonfile.clone(),
            output: self.output.clone(),
            filename: self.filename.clone(),
            template: self.template.clone(),
            strict: self.strict,
        }
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<ExitCode> {
    let args = Args::parse();
    let cwd = std::env::current_dir().context("Failed to get current directory")?;

    // Load config (CLI flags override config file)
    let config = load_config(&cwd, args.config.as_deref())?;
    if let Some(ref source) = config.source {
        if !args.quiet {
            eprintln!("{}: Using config {}", "Info".blue(), source.display());
        }
    }
    let effective = config.merge_with_cli(&args.overrides(), &cwd);

    let input_path = effective
        .input
        .as_ref()
        .ok_or(ReportError::MissingInputOption)?;
    let text = read_input(input_path)?;

    let reporter = match effective.template {
        Some(ref path) => HtmlReporter::from_template_file(path)?,
        None => HtmlReporter::new(),
    };

    let built = build_report(&text, reporter.template(), effective.policy)?;
    if let Some(ref reason) = built.recovered_from {
        if !args.quiet {
            eprintln!(
                "{}: {} is not valid JSON ({}); writing an empty report",
                "Warning".yellow(),
                input_path.display(),
                reason
            );
        }
    }

    let written = write_report(&effective.output_dir, &effective.file_name, &built.html)?;

    if !args.quiet {
        eprintln!(
            "{}: Report written to {} ({} issue(s) in {} file(s), {} format)",
            "Done".green().bold(),
            written.display(),
            built.summary.total_issues,
            built.files,
            built.summary.shape
        );
    }

    Ok(ExitCode::SUCCESS)
}

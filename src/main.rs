//! Geolens: content discoverability analyzer CLI

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use geolens::analyzer::{AnalysisEngine, AnalysisInput};
use geolens::config::{load_config, ScoringOptions};
use geolens::reporter::{ConsoleReporter, JsonReporter};
use geolens::revision::{revise_content, ClaudeClient, RetryPolicy, RevisionRequest};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use walkdir::WalkDir;

/// Geolens: content discoverability analyzer for search and AI answer engines
#[derive(Parser, Debug)]
#[command(name = "geolens")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// HTML file or directory to analyze, or "-" for stdin
    path: PathBuf,

    /// Canonical URL of the content (required for stdin, overrides file paths)
    #[arg(long, short)]
    url: Option<String>,

    /// Output format as JSON
    #[arg(long, short)]
    json: bool,

    /// Minimum overall score threshold (exit 1 if below)
    #[arg(long, short)]
    threshold: Option<u8>,

    /// Quiet mode (minimal output)
    #[arg(long, short)]
    quiet: bool,

    /// Verbose output
    #[arg(long, short)]
    verbose: bool,

    /// Path to config file (default: search .geolensrc.json in current dir and parents)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Score AI-citation bonuses in website mode regardless of platform detection
    #[arg(long)]
    website: bool,

    /// Exclude Grok from the per-model citation estimates
    #[arg(long)]
    no_grok: bool,

    /// Analyze documents in parallel
    #[arg(long)]
    parallel: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Request an AI-powered revision of the content (single document only)
    #[arg(long)]
    revise: bool,

    /// Output file for the revised content (default: stdout)
    #[arg(long)]
    revise_output: Option<PathBuf>,
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let args = Args::parse();

    if args.no_color {
        colored::control::set_override(false);
    }

    // Resolve work directory for config search
    let work_dir = if args.path == Path::new("-") {
        PathBuf::from(".")
    } else if args.path.is_file() {
        args.path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    } else {
        args.path.clone()
    };

    let config = load_config(&work_dir, args.config.as_deref())?;

    // CLI flags override config
    let options = ScoringOptions {
        force_website: if args.website {
            Some(true)
        } else {
            config.scoring.force_website
        },
        include_grok: if args.no_grok {
            false
        } else {
            config.scoring.include_grok
        },
        ..config.scoring
    };
    let threshold = args.threshold.or(config.threshold);

    let inputs = collect_inputs(&args)?;
    if inputs.is_empty() {
        eprintln!("{}: No HTML documents found", "Warning".yellow());
        return Ok(ExitCode::from(2));
    }

    let engine = AnalysisEngine::new().with_options(options.clone());
    let results = if args.parallel {
        engine.analyze_parallel(&inputs)
    } else {
        engine.analyze_many(&inputs)
    };

    if args.revise {
        return run_revise(&args, &inputs, &results, &options);
    }

    report(&args, &results);

    if let Some(threshold) = threshold {
        if results.iter().any(|r| r.overall_score < threshold) {
            if !args.quiet && !args.json {
                eprintln!(
                    "{}: score below threshold {}",
                    "Failed".red().bold(),
                    threshold
                );
            }
            return Ok(ExitCode::from(1));
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn report(args: &Args, results: &[geolens::AnalysisResult]) {
    if args.json {
        let reporter = JsonReporter::new().pretty();
        if results.len() == 1 {
            println!("{}", reporter.report(&results[0]));
        } else {
            let stats = AnalysisEngine::aggregate_stats(results);
            println!("{}", reporter.report_with_summary(results, &stats));
        }
        return;
    }

    let mut console = ConsoleReporter::new();
    if args.no_color {
        console = console.without_colors();
    }
    if args.verbose {
        console = console.verbose();
    }

    if args.quiet {
        for result in results {
            console.report_quiet(result);
        }
    } else if results.len() == 1 {
        console.report(&results[0]);
    } else {
        let stats = AnalysisEngine::aggregate_stats(results);
        console.report_many(results, &stats);
    }
}

fn run_revise(
    args: &Args,
    inputs: &[AnalysisInput],
    results: &[geolens::AnalysisResult],
    options: &ScoringOptions,
) -> Result<ExitCode> {
    if inputs.len() != 1 {
        anyhow::bail!("--revise works on a single document, got {}", inputs.len());
    }

    let request = RevisionRequest {
        original_content: inputs[0].html.clone(),
        analysis: results[0].clone(),
        url: inputs[0].url.clone(),
    };

    let client = ClaudeClient::from_env()
        .map_err(|e| anyhow::anyhow!("{}", e))
        .context("Revision requires the Claude API")?;
    let revision = revise_content(&request, &client, &RetryPolicy::default(), options)
        .map_err(|e| anyhow::anyhow!("{}", e))
        .context("Revision failed")?;

    match &args.revise_output {
        Some(path) => {
            std::fs::write(path, &revision.revised_content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            if !args.quiet {
                eprintln!("Revised content written to {}", path.display());
            }
        }
        None => println!("{}", revision.revised_content),
    }

    if !args.quiet {
        eprintln!(
            "Predicted scores: SEO {} | AEO {} | GEO {}",
            revision.predicted_scores.seo,
            revision.predicted_scores.aeo,
            revision.predicted_scores.geo
        );
        for improvement in &revision.improvements {
            eprintln!("  {} {}", "→".cyan(), improvement);
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Collect analysis inputs from the path argument: stdin, a single file, or
/// a directory walk for .html/.htm files
fn collect_inputs(args: &Args) -> Result<Vec<AnalysisInput>> {
    if args.path == Path::new("-") {
        let mut html = String::new();
        std::io::stdin()
            .read_to_string(&mut html)
            .context("Failed to read stdin")?;
        let url = args
            .url
            .clone()
            .context("--url is required when reading from stdin")?;
        return Ok(vec![AnalysisInput { url, html }]);
    }

    if args.path.is_file() {
        let html = std::fs::read_to_string(&args.path)
            .with_context(|| format!("Failed to read {}", args.path.display()))?;
        let url = args
            .url
            .clone()
            .unwrap_or_else(|| args.path.display().to_string());
        return Ok(vec![AnalysisInput { url, html }]);
    }

    if !args.path.is_dir() {
        anyhow::bail!("Path not found: {}", args.path.display());
    }

    let mut inputs = Vec::new();
    for entry in WalkDir::new(&args.path).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        let is_html = entry
            .path()
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("html") || e.eq_ignore_ascii_case("htm"))
            .unwrap_or(false);
        if !is_html {
            continue;
        }
        let html = std::fs::read_to_string(entry.path())
            .with_context(|| format!("Failed to read {}", entry.path().display()))?;
        inputs.push(AnalysisInput {
            url: entry.path().display().to_string(),
            html,
        });
    }
    inputs.sort_by(|a, b| a.url.cmp(&b.url));
    Ok(inputs)
}

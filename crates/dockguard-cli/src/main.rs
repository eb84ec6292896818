//! CLI entry point for dockguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `dockguard-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use dockguard_app::{
    format_explanation, format_not_found, parse_report_json, run_explain, run_scan, run_size,
    run_suggest, serialize_report, size_to_renderable, to_renderable, verdict_exit_code,
    ExplainOutput, ScanInput,
};
use dockguard_render::{render_markdown, render_size_breakdown, render_suggestions, render_text};
use dockguard_scan::{TrivyRunner, DEFAULT_TEMPLATE_PATH};
use dockguard_settings::Overrides;
use dockguard_types::{OutputFormat, TargetKind};

#[derive(Parser, Debug)]
#[command(
    name = "dockguard",
    version,
    about = "Security scan wrapper for Dockerfiles and container images"
)]
struct Cli {
    /// Path to dockguard config TOML.
    #[arg(long, default_value = "dockguard.toml")]
    config: Utf8PathBuf,

    /// Override profile (strict|ci|audit).
    #[arg(long)]
    profile: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan a Dockerfile or a container image and summarize findings.
    Scan {
        /// Path to a Dockerfile (configuration scan).
        #[arg(long, conflicts_with = "image")]
        dockerfile: Option<Utf8PathBuf>,

        /// Image reference (e.g. nginx:latest).
        #[arg(long)]
        image: Option<String>,

        /// Output format: table, json, or html.
        #[arg(long, default_value = "table")]
        format: String,

        /// Suppress the raw scanner stdout relay.
        #[arg(long)]
        quiet: bool,

        /// Fail the run when secrets are detected.
        #[arg(long)]
        fail_on_secrets: bool,

        /// Fail the run on HIGH/CRITICAL vulnerabilities.
        #[arg(long)]
        fail_on_high: bool,

        /// Fail the run on GPL/LGPL/AGPL licenses.
        #[arg(long)]
        fail_on_licenses: bool,

        /// Minimum scanner stderr level to relay (info|warning|error).
        #[arg(long)]
        log_level: Option<String>,

        /// Override maximum findings to emit.
        #[arg(long)]
        max_findings: Option<u32>,

        /// Directory for persisted raw scanner reports.
        #[arg(long)]
        reports_dir: Option<Utf8PathBuf>,

        /// Where to write the dockguard report envelope JSON.
        #[arg(long)]
        report_out: Option<Utf8PathBuf>,

        /// Write a Markdown summary alongside the console output.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown summary (if enabled).
        #[arg(long, default_value = "artifacts/dockguard/summary.md")]
        markdown_out: Utf8PathBuf,

        /// Print smaller base image suggestions (Dockerfile targets).
        #[arg(long)]
        suggest: bool,

        /// Also query the container runtime for layer sizes (image targets).
        #[arg(long)]
        analyze_size: bool,

        /// HTML template used by --format html.
        #[arg(long, default_value = DEFAULT_TEMPLATE_PATH)]
        template: Utf8PathBuf,
    },

    /// Print the base image of a Dockerfile with smaller alternatives.
    Suggest {
        /// Path to the Dockerfile.
        #[arg(long)]
        dockerfile: Utf8PathBuf,
    },

    /// Aggregate per-layer sizes of an image via the container runtime.
    Size {
        /// Image reference (e.g. nginx:latest).
        image: String,
    },

    /// Render Markdown from an existing dockguard report JSON.
    Md {
        /// Path to the report envelope file.
        #[arg(long, default_value = "artifacts/dockguard/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Explain a check_id or code with remediation guidance.
    Explain {
        /// The check_id (e.g., "scan.secrets") or code (e.g., "secret_exposed") to explain.
        identifier: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Scan { .. } => cmd_scan(cli),
        Commands::Suggest { ref dockerfile } => cmd_suggest(dockerfile.clone()),
        Commands::Size { ref image } => cmd_size(image.clone()),
        Commands::Md { ref report, ref output } => cmd_md(report.clone(), output.clone()),
        Commands::Explain { ref identifier } => cmd_explain(identifier),
    }
}

fn cmd_scan(cli: Cli) -> anyhow::Result<()> {
    let Commands::Scan {
        dockerfile,
        image,
        format,
        quiet,
        fail_on_secrets,
        fail_on_high,
        fail_on_licenses,
        log_level,
        max_findings,
        reports_dir,
        report_out,
        write_markdown,
        markdown_out,
        suggest,
        analyze_size,
        template,
    } = cli.cmd
    else {
        unreachable!("cmd_scan dispatched for a non-scan command");
    };

    let format = dockguard_settings::parse_format(&format)?;

    let (target, kind, dockerfile_text) = match (&dockerfile, &image) {
        (Some(path), None) => {
            if !path.exists() {
                eprintln!("Dockerfile not found: {path}");
                std::process::exit(1);
            }
            let text = dockguard_scan::read_dockerfile(path)?;
            (path.to_string(), TargetKind::Dockerfile, Some(text))
        }
        (None, Some(reference)) => (reference.clone(), TargetKind::Image, None),
        _ => {
            eprintln!("provide either --dockerfile or --image");
            std::process::exit(1);
        }
    };

    // Missing config file is allowed (defaults apply).
    let config_text = std::fs::read_to_string(&cli.config).unwrap_or_default();

    let overrides = Overrides {
        profile: cli.profile.clone(),
        quiet: quiet.then_some(true),
        log_level,
        max_findings,
        fail_on_secrets: fail_on_secrets.then_some(true),
        fail_on_high: fail_on_high.then_some(true),
        fail_on_licenses: fail_on_licenses.then_some(true),
        reports_dir,
    };

    let runner = TrivyRunner;
    let output = run_scan(ScanInput {
        target: &target,
        kind,
        format,
        config_text: &config_text,
        overrides,
        dockerfile: dockerfile_text.clone(),
        template_path: &template,
        runner: &runner,
    })?;

    let effective_quiet = output.resolved.effective.quiet;

    // Relay the scanner's own output first, the way a bare scanner run would
    // look. Raw JSON is kept off the console; it lands in the report file.
    if !effective_quiet && format != OutputFormat::Json && !output.stdout.is_empty() {
        print!("{}", output.stdout);
        if !output.stdout.ends_with('\n') {
            println!();
        }
    }
    for line in &output.stderr_lines {
        eprintln!("{line}");
    }
    if output.scanner_exit_code != 0 {
        eprintln!("scanner exited with status {}", output.scanner_exit_code);
    }

    if suggest
        && let Some(text) = dockerfile_text.as_deref()
    {
        let suggestion = run_suggest(text);
        match suggestion.base_image {
            Some(base) => print!("{}", render_suggestions(&base, &suggestion.suggestions)),
            None => println!("No FROM line found; nothing to suggest."),
        }
    }

    println!();
    print!("{}", render_text(&to_renderable(&output.report)));

    if let Some(out_path) = report_out {
        write_report_file(&out_path, &output.report).context("write report json")?;
    }
    if write_markdown {
        let md = render_markdown(&to_renderable(&output.report));
        write_text_file(&markdown_out, &md).context("write markdown")?;
    }

    if analyze_size && kind == TargetKind::Image {
        match dockguard_scan::image_history(&target) {
            Ok(lines) => {
                let breakdown = run_size(&lines);
                print!("{}", render_size_breakdown(&size_to_renderable(&breakdown)));
            }
            Err(err) => eprintln!("failed to analyze image size: {err:#}"),
        }
    }

    let code = verdict_exit_code(output.report.verdict);
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

fn cmd_suggest(dockerfile: Utf8PathBuf) -> anyhow::Result<()> {
    if !dockerfile.exists() {
        eprintln!("Dockerfile not found: {dockerfile}");
        std::process::exit(1);
    }
    let text = dockguard_scan::read_dockerfile(&dockerfile)?;
    let output = run_suggest(&text);

    match output.base_image {
        Some(base) => {
            print!("{}", render_suggestions(&base, &output.suggestions));
            Ok(())
        }
        None => {
            eprintln!("no FROM line found in {dockerfile}");
            std::process::exit(1);
        }
    }
}

fn cmd_size(image: String) -> anyhow::Result<()> {
    let lines = dockguard_scan::image_history(&image).context("query image history")?;
    let breakdown = run_size(&lines);
    print!("{}", render_size_breakdown(&size_to_renderable(&breakdown)));
    Ok(())
}

fn cmd_md(report_path: Utf8PathBuf, output: Option<Utf8PathBuf>) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(&report_path)
        .with_context(|| format!("read report: {report_path}"))?;
    let report = parse_report_json(&report_text)?;
    let md = render_markdown(&to_renderable(&report));

    if let Some(out_path) = output {
        write_text_file(&out_path, &md).context("write markdown output")?;
    } else {
        print!("{md}");
    }

    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_check_ids,
            available_codes,
        } => {
            eprint!(
                "{}",
                format_not_found(&identifier, available_check_ids, available_codes)
            );
            std::process::exit(1);
        }
    }
}

fn write_report_file(path: &Utf8Path, report: &dockguard_types::ScanReport) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    let data = serialize_report(report).context("serialize report")?;
    std::fs::write(path, data).with_context(|| format!("write report: {path}"))?;
    Ok(())
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {path}"))?;
    Ok(())
}

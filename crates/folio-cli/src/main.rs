//! folio CLI: terminal portfolio with a circular career timeline

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use folio_core::{ArcLayout, FolioConfig, Portfolio};

/// Terminal portfolio viewer with an interactive arc timeline
#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Content repository root (defaults to the current directory)
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive timeline (default when no command specified)
    View,

    /// Export the timeline as a static SVG
    Export {
        /// Output file path
        #[arg(long, default_value = "timeline.svg")]
        out: PathBuf,
    },

    /// Load the content collections and report problems
    Check {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = FolioConfig::load_or_default(&cli.root);

    match cli.command.unwrap_or(Commands::View) {
        Commands::View => cmd_view(&cli.root, config).await,
        Commands::Export { out } => cmd_export(&cli.root, &config, &out),
        Commands::Check { json } => cmd_check(&cli.root, &config, json),
    }
}

/// Load the portfolio relative to the repository root.
fn load_portfolio(root: &Path, config: &FolioConfig) -> Portfolio {
    let content_dir = if config.content_dir.is_absolute() {
        config.content_dir.clone()
    } else {
        root.join(&config.content_dir)
    };
    Portfolio::load(&content_dir)
}

async fn cmd_view(root: &Path, config: FolioConfig) -> ExitCode {
    let portfolio = load_portfolio(root, &config);
    for issue in &portfolio.issues {
        eprintln!("warning: {}: {}", issue.path.display(), issue.error);
    }

    let events = portfolio.events();
    match folio_tui::run_tui(config, events).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn cmd_export(root: &Path, config: &FolioConfig, out: &Path) -> ExitCode {
    let portfolio = load_portfolio(root, config);
    for issue in &portfolio.issues {
        eprintln!("warning: {}: {}", issue.path.display(), issue.error);
    }

    let layout = ArcLayout::compute(portfolio.events(), config);
    let svg = folio_core::render_svg(&layout, config.size);
    match std::fs::write(out, svg) {
        Ok(()) => {
            println!("Wrote {} ({} segments)", out.display(), layout.len());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to write {}: {e}", out.display());
            ExitCode::FAILURE
        }
    }
}

fn cmd_check(root: &Path, config: &FolioConfig, json: bool) -> ExitCode {
    let portfolio = load_portfolio(root, config);
    let events = portfolio.events();

    let undated: Vec<&str> = events
        .iter()
        .filter(|e| e.inferred_year().is_none())
        .map(|e| e.title.as_str())
        .collect();
    let missing_thumbs: Vec<&str> = events
        .iter()
        .filter(|e| {
            e.thumb
                .as_ref()
                .is_some_and(|t| !root.join(t).exists() && !t.exists())
        })
        .map(|e| e.title.as_str())
        .collect();

    if json {
        let report = serde_json::json!({
            "projects": portfolio.projects.len(),
            "posts": portfolio.posts.len(),
            "events": events.len(),
            "errors": portfolio
                .issues
                .iter()
                .map(|i| {
                    serde_json::json!({
                        "path": i.path.display().to_string(),
                        "error": i.error.to_string(),
                    })
                })
                .collect::<Vec<_>>(),
            "undated": undated,
            "missing_thumbs": missing_thumbs,
        });
        match serde_json::to_string_pretty(&report) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!(
            "{} projects, {} posts, {} timeline events",
            portfolio.projects.len(),
            portfolio.posts.len(),
            events.len()
        );
        for issue in &portfolio.issues {
            println!("ERROR  {}: {}", issue.path.display(), issue.error);
        }
        for title in &undated {
            println!("NOTE   \"{title}\" has no detectable year (sorts first)");
        }
        for title in &missing_thumbs {
            println!("NOTE   \"{title}\" thumbnail not found (fallback will be used)");
        }
        if portfolio.issues.is_empty() {
            println!("OK");
        }
    }

    if portfolio.issues.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

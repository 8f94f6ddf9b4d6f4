//! CLI entry point and command handlers for starter.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use std::io;

use starter::template::{execute_template, TemplateOptions};
use starter::{ui, utc_now_iso};

#[derive(Parser)]
#[command(name = "starter")]
#[command(version)]
#[command(about = "Module starter template", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the template workflow against an input
    Run {
        /// Text to process
        #[arg(long)]
        input: String,
        /// Report what would be done without making changes
        #[arg(long)]
        dry_run: bool,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
        /// Increase diagnostic verbosity (can be specified multiple times)
        #[arg(short, long, action = clap::ArgAction::Count)]
        verbose: u8,
    },
    /// Generate shell completion script
    Completion {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Show version information
    Version {
        /// Show additional build information
        #[arg(long, short)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            input,
            dry_run,
            json,
            verbose,
        } => cmd_run(&input, dry_run, json, verbose),
        Commands::Completion { shell } => cmd_completion(shell),
        Commands::Version { verbose } => cmd_version(verbose),
    }
}

/// Run the template workflow and print the result
fn cmd_run(input: &str, dry_run: bool, json: bool, verbose: u8) -> Result<()> {
    let options = TemplateOptions::new(input).dry_run(dry_run);

    if verbose > 0 && !ui::is_quiet() {
        eprintln!("{}", ui::colors::secondary(&format!("input: {:?}", input)));
        eprintln!(
            "{}",
            ui::colors::secondary(&format!("dry_run: {}", dry_run))
        );
        eprintln!(
            "{}",
            ui::colors::secondary(&format!("started: {}", utc_now_iso()))
        );
    }

    let result = execute_template(&options)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    // Plain output for quiet mode and pipes; decorated output for terminals
    if ui::is_quiet() || !atty::is(atty::Stream::Stdout) {
        println!("{}", result.message);
        return Ok(());
    }

    println!("{} {}", "✓".green(), result.message);
    if dry_run {
        println!("{}", "No changes were made (dry-run).".dimmed());
    }

    Ok(())
}

/// Generate shell completion script
fn cmd_completion(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "starter", &mut io::stdout());
    Ok(())
}

/// Show version, optionally with build metadata from build.rs
fn cmd_version(verbose: bool) -> Result<()> {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    println!("starter {}", VERSION);

    if verbose {
        const GIT_SHA: &str = env!("GIT_SHA");
        const BUILD_DATE: &str = env!("BUILD_DATE");
        println!("commit: {}", GIT_SHA);
        println!("built: {}", BUILD_DATE);
    }

    Ok(())
}

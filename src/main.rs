//! Bundle Sizebot CLI
//!
//! Compares two build trees and reports artifact size changes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use bundle_sizebot::commands::{display_config, display_version, execute_compare, CompareArgs};

/// Bundle Sizebot - artifact size reports for pull requests
#[derive(Parser, Debug)]
#[command(name = "sizebot")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Compare a base and a head build tree
    Compare {
        /// Base (before) build directory
        #[arg(long, default_value = "base-build")]
        base: PathBuf,

        /// Head (after) build directory
        #[arg(long, default_value = "build")]
        head: PathBuf,

        /// Configuration file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Critical threshold as a fraction (e.g. 0.02)
        #[arg(long)]
        critical_threshold: Option<f64>,

        /// Significance threshold as a fraction (e.g. 0.002)
        #[arg(long)]
        significance_threshold: Option<f64>,

        /// Always report this artifact (repeatable)
        #[arg(long = "allow")]
        allow: Vec<String>,

        /// Ignore the configured allow-list
        #[arg(long)]
        no_default_allow_list: bool,

        /// Artifact file extension
        #[arg(long)]
        extension: Option<String>,

        /// Deep-link template ({head}, {base}, {path})
        #[arg(long)]
        link_template: Option<String>,

        /// Base commit (defaults to <base>/COMMIT_SHA)
        #[arg(long)]
        base_commit: Option<String>,

        /// Head commit (defaults to <head>/COMMIT_SHA)
        #[arg(long)]
        head_commit: Option<String>,

        /// Write the markdown report to a file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write a JSON summary to a file
        #[arg(long)]
        json: Option<PathBuf>,

        /// Repository to comment on (owner/name)
        #[arg(long)]
        github_repo: Option<String>,

        /// Pull request number to comment on
        #[arg(long)]
        pr: Option<u64>,

        /// GitHub token for posting the comment
        #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
        github_token: Option<String>,

        /// Source file changed by the pull request (repeatable)
        #[arg(long = "changed-file")]
        changed_files: Vec<String>,

        /// Only report when --github-repo is this repository
        #[arg(long)]
        upstream_repo: Option<String>,

        /// Fail when a COMMIT_SHA marker cannot be read
        #[arg(long)]
        strict_markers: bool,
    },

    /// Print the effective configuration
    ShowConfig {
        /// Configuration file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Compare {
            base,
            head,
            config,
            critical_threshold,
            significance_threshold,
            allow,
            no_default_allow_list,
            extension,
            link_template,
            base_commit,
            head_commit,
            output,
            json,
            github_repo,
            pr,
            github_token,
            changed_files,
            upstream_repo,
            strict_markers,
        } => {
            let args = CompareArgs {
                base_root: base,
                head_root: head,
                config_file: config,
                critical_threshold,
                significance_threshold,
                allow,
                no_default_allow_list,
                extension,
                link_template,
                base_commit,
                head_commit,
                output,
                json,
                github_repo,
                pull_request: pr,
                github_token,
                changed_files,
                upstream_repo,
                strict_markers,
            };

            execute_compare(args)?;
        }

        Commands::ShowConfig { config } => {
            display_config(config)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

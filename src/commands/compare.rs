//! Compare command implementation.
//!
//! The compare command:
//! 1. Resolves configuration and commits, or skips the run when there is
//!    nothing worth reporting
//! 2. Diffs the two build trees
//! 3. Classifies the deltas
//! 4. Renders the markdown report
//! 5. Publishes it (stdout, file, pull request comment)

use crate::commands::context::RunContext;
use crate::commands::models::CompareArgs;
use crate::commands::publish::{
    FilePublisher, GithubCommentPublisher, Publisher, StdoutPublisher,
};
use crate::diff::{classify, diff_trees, ClassificationResult, Thresholds};
use crate::report::{render_report, to_summary, write_summary, ReportOptions};
use crate::utils::error::ContextError;
use crate::utils::settings::{load_config, SizeBotConfig};
use anyhow::{bail, Context, Result};
use colored::*;
use log::{debug, info, warn};
use std::time::Instant;

/// Result of running the core pipeline
#[derive(Debug, Clone)]
pub struct Comparison {
    pub classification: ClassificationResult,
    pub markdown: String,
}

/// Execute the compare command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// Fails without publishing anything if the config is invalid, a head
/// artifact cannot be measured, or an allow-listed artifact is missing.
/// An unreadable commit marker means there is no build output to compare:
/// it is logged and the run ends successfully, unless `strict_markers`.
/// Runs outside the upstream repository, and pull requests that only touch
/// skipped paths, also end successfully without a report.
pub fn execute_compare(args: CompareArgs) -> Result<()> {
    let start = Instant::now();

    // Step 1: Configuration
    let config = resolve_config(&args)?;
    debug!("Effective config: {:?}", config);

    if let Some(reason) = skip_reason(&args, &config) {
        info!("Skipping size report: {}", reason);
        return Ok(());
    }

    // Step 2: Commits
    let loaded = RunContext::load_with_overrides(
        &args.base_root,
        &args.head_root,
        args.base_commit.clone(),
        args.head_commit.clone(),
    );
    let ctx = match loaded {
        Ok(ctx) => ctx,
        Err(err @ ContextError::MarkerUnreadable { .. }) if !args.strict_markers => {
            warn!("{}. Try pulling the latest changes from the main branch.", err);
            return Ok(());
        }
        Err(err) => return Err(err).context("Failed to resolve base/head commits"),
    };
    info!("Comparing {}...{}", ctx.base_commit, ctx.head_commit);

    // Step 3: Build everything before publishing anything
    let comparison = run_comparison(&ctx, &config)?;
    let publishers = build_publishers(&args)?;

    // Step 4: Outputs
    if let Some(path) = &args.json {
        let summary = to_summary(
            &ctx.base_commit,
            &ctx.head_commit,
            &comparison.classification,
            Thresholds::from(&config),
        );
        write_summary(&summary, path).context("Failed to write JSON summary")?;
        println!("📊 JSON summary written to {}", path.display().to_string().cyan());
    }

    for publisher in &publishers {
        publisher
            .publish(&comparison.markdown)
            .context("Failed to publish size report")?;
    }

    info!(
        "Done in {:.2?}: {} critical, {} significant",
        start.elapsed(),
        comparison.classification.critical.len(),
        comparison.classification.significant.len()
    );

    Ok(())
}

/// Diff, classify and render for an already-resolved context
pub fn run_comparison(ctx: &RunContext, config: &SizeBotConfig) -> Result<Comparison> {
    info!("Measuring artifacts...");
    let deltas = diff_trees(&ctx.base_root, &ctx.head_root, config.normalized_extension())
        .context("Failed to diff build trees")?;

    info!("Classifying {} deltas...", deltas.len());
    let thresholds = Thresholds::from(config);
    let classification =
        classify(&deltas, &config.allow_list, thresholds).context("Failed to classify deltas")?;

    let options = ReportOptions {
        link_template: config.link_template.clone(),
        thresholds,
    };
    let markdown = render_report(&ctx.base_commit, &ctx.head_commit, &classification, &options);

    Ok(Comparison {
        classification,
        markdown,
    })
}

/// Why this run should produce no report, if it shouldn't
pub fn skip_reason(args: &CompareArgs, config: &SizeBotConfig) -> Option<String> {
    if let (Some(upstream), Some(repo)) = (&args.upstream_repo, &args.github_repo) {
        if upstream != repo {
            return Some(format!("{} is not the upstream repository {}", repo, upstream));
        }
    }

    if config.only_touches_skipped_paths(&args.changed_files) {
        return Some(format!(
            "all {} changed files match {:?}",
            args.changed_files.len(),
            config.skip_path_patterns
        ));
    }

    None
}

/// Merge the config file (or defaults) with CLI overrides, then validate
pub fn resolve_config(args: &CompareArgs) -> Result<SizeBotConfig> {
    let mut config = match &args.config_file {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load config file {}", path.display()))?,
        None => SizeBotConfig::default(),
    };

    if let Some(value) = args.critical_threshold {
        config.critical_threshold = value;
    }
    if let Some(value) = args.significance_threshold {
        config.significance_threshold = value;
    }
    if args.no_default_allow_list {
        config.allow_list.clear();
    }
    config.allow_list.extend(args.allow.iter().cloned());
    if let Some(extension) = &args.extension {
        config.extension = extension.clone();
    }
    if let Some(template) = &args.link_template {
        config.link_template = template.clone();
    }

    config.validate().context("Invalid size bot configuration")?;
    Ok(config)
}

/// Pick publishers from the arguments; stdout when nothing else is asked for
fn build_publishers(args: &CompareArgs) -> Result<Vec<Box<dyn Publisher>>> {
    let mut publishers: Vec<Box<dyn Publisher>> = Vec::new();

    if let Some(path) = &args.output {
        publishers.push(Box::new(FilePublisher::new(path)));
    }

    match (&args.github_repo, args.pull_request) {
        (Some(repo), Some(pr)) => {
            let Some(token) = args.github_token.as_deref().filter(|t| !t.is_empty()) else {
                bail!("A GitHub token is required to comment on {}#{}", repo, pr);
            };
            publishers.push(Box::new(GithubCommentPublisher::new(repo.as_str(), pr, token)?));
        }
        (None, None) => {}
        _ => bail!("--github-repo and --pr must be given together"),
    }

    if publishers.is_empty() {
        publishers.push(Box::new(StdoutPublisher));
    }

    Ok(publishers)
}

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use dok_model::{ArtifactBundle, DokLevel};
use dok_standards::config::default_root;
use dok_standards::{SeedConfig, SeedMode, SeedReport, seed};
use dok_templates::{generate_activities, generate_items};

use crate::cli::{GenerateArgs, SeedArgs};

/// Resolve config and layout from the flags, then run the loader.
pub fn run_seed(args: &SeedArgs) -> Result<SeedReport> {
    let root = args.root.clone().unwrap_or_else(default_root);
    let mut config = match &args.config {
        Some(path) => SeedConfig::load(path)
            .with_context(|| format!("load seed config {}", path.display()))?,
        None => SeedConfig::discover(&root).context("load seed config")?,
    };
    if let Some(dir) = &args.data_dir {
        config.data_dir = dir.clone();
    }
    if let Some(dir) = &args.output_dir {
        config.output_dir = dir.clone();
    }
    let layout = config.layout(&root);
    let mode = if args.check {
        SeedMode::Check
    } else {
        SeedMode::Write
    };

    let span = info_span!("seed_command", root = %root.display());
    let _guard = span.enter();
    let start = Instant::now();
    let report = seed(&layout, mode).context("seed standards")?;
    info!(
        subjects = report.subjects.len(),
        standards = report.total_standards(),
        duration_ms = start.elapsed().as_millis(),
        "seed complete"
    );
    Ok(report)
}

/// Generate the requested artifacts. The DOK level is validated here.
pub fn run_generate(args: &GenerateArgs) -> Result<ArtifactBundle> {
    let dok = DokLevel::try_from(args.dok)?;
    let items = if args.kind.includes_items() {
        generate_items(&args.standard, &args.subject, &args.grade, args.dok)?
    } else {
        Vec::new()
    };
    let activities = if args.kind.includes_activities() {
        generate_activities(&args.standard, &args.subject, &args.grade, args.dok)?
    } else {
        Vec::new()
    };
    Ok(ArtifactBundle {
        standard: args.standard.clone(),
        subject: args.subject.clone(),
        grade: args.grade.clone(),
        dok,
        items,
        activities,
    })
}

/// Exit status for a finished seed run.
pub fn seed_exit_code(report: &SeedReport) -> i32 {
    if report.has_failures() || report.has_stale() {
        1
    } else {
        0
    }
}

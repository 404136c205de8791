#![deny(unsafe_code)]

//! Seeding: run every configured subject through the loader.
//!
//! Each subject is processed to completion before the next. A missing CSV
//! is skipped; a malformed one fails that subject only and nothing is
//! written for it.

use std::path::{Path, PathBuf};

use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::{error, info, info_span, warn};

use crate::config::{SeedLayout, SubjectFile};
use crate::csv::read_standard_rows;
use crate::error::StandardsError;
use crate::grades::GradeIndex;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SeedMode {
    /// Write every output file.
    #[default]
    Write,
    /// Compare would-be output with what is on disk; write nothing.
    Check,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SeedStatus {
    Written,
    UpToDate,
    /// Output missing or different from what the CSV produces.
    Stale,
    /// Input CSV not found.
    Skipped,
    Failed { error: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct SubjectReport {
    pub csv: String,
    pub json: String,
    pub output: PathBuf,
    #[serde(flatten)]
    pub status: SeedStatus,
    pub standards: usize,
    pub grades: usize,
    pub sha256: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeedReport {
    pub mode: &'static str,
    pub data_dir: PathBuf,
    pub output_dir: PathBuf,
    pub subjects: Vec<SubjectReport>,
}

impl SeedReport {
    pub fn has_failures(&self) -> bool {
        self.subjects
            .iter()
            .any(|s| matches!(s.status, SeedStatus::Failed { .. }))
    }

    /// True when a check run found outputs that need regenerating.
    pub fn has_stale(&self) -> bool {
        self.subjects
            .iter()
            .any(|s| matches!(s.status, SeedStatus::Stale))
    }

    pub fn total_standards(&self) -> usize {
        self.subjects.iter().map(|s| s.standards).sum()
    }

    pub fn count(&self, status: &SeedStatus) -> usize {
        self.subjects.iter().filter(|s| &s.status == status).count()
    }
}

/// Build the JSON text for one subject CSV.
pub fn render_subject(csv_path: &Path) -> Result<(GradeIndex, String), StandardsError> {
    let rows = read_standard_rows(csv_path)?;
    let index = GradeIndex::from_rows(&rows);
    let json = index
        .to_json_string()
        .map_err(|source| StandardsError::Json {
            path: csv_path.to_path_buf(),
            source,
        })?;
    Ok((index, json))
}

/// Run every subject in `layout`.
///
/// # Errors
///
/// Only a failure to create the output directory aborts the run; per-subject
/// failures are recorded in the report.
pub fn seed(layout: &SeedLayout, mode: SeedMode) -> Result<SeedReport, StandardsError> {
    let span = info_span!(
        "seed",
        data_dir = %layout.data_dir.display(),
        output_dir = %layout.output_dir.display()
    );
    let _guard = span.enter();

    if mode == SeedMode::Write {
        std::fs::create_dir_all(&layout.output_dir)
            .map_err(|e| StandardsError::write(&layout.output_dir, e))?;
    }

    let subjects = layout
        .subjects
        .iter()
        .map(|subject| seed_subject(layout, subject, mode))
        .collect();

    Ok(SeedReport {
        mode: match mode {
            SeedMode::Write => "write",
            SeedMode::Check => "check",
        },
        data_dir: layout.data_dir.clone(),
        output_dir: layout.output_dir.clone(),
        subjects,
    })
}

fn seed_subject(layout: &SeedLayout, subject: &SubjectFile, mode: SeedMode) -> SubjectReport {
    let csv_path = layout.data_dir.join(&subject.csv);
    let output = layout.output_dir.join(&subject.json);
    let mut report = SubjectReport {
        csv: subject.csv.clone(),
        json: subject.json.clone(),
        output: output.clone(),
        status: SeedStatus::Skipped,
        standards: 0,
        grades: 0,
        sha256: None,
    };

    if !csv_path.exists() {
        warn!(csv = %subject.csv, "skip: input not found");
        return report;
    }

    let result = render_subject(&csv_path).and_then(|(index, json)| {
        report.standards = index.standard_count();
        report.grades = index.grade_count();
        report.sha256 = Some(hex::encode(Sha256::digest(json.as_bytes())));
        match mode {
            SeedMode::Write => {
                std::fs::write(&output, json.as_bytes())
                    .map_err(|e| StandardsError::write(&output, e))?;
                info!(
                    json = %subject.json,
                    standards = report.standards,
                    grades = report.grades,
                    "wrote standards file"
                );
                Ok(SeedStatus::Written)
            }
            SeedMode::Check => Ok(check_output(&output, json.as_bytes())),
        }
    });

    report.status = match result {
        Ok(status) => status,
        Err(err) => {
            error!(csv = %subject.csv, error = %err, "failed to seed subject");
            // Nothing reached the output, so nothing counts toward the totals.
            report.standards = 0;
            report.grades = 0;
            report.sha256 = None;
            SeedStatus::Failed {
                error: err.to_string(),
            }
        }
    };
    report
}

fn check_output(output: &Path, expected: &[u8]) -> SeedStatus {
    match std::fs::read(output) {
        Ok(existing) if existing == expected => SeedStatus::UpToDate,
        Ok(_) => {
            warn!(output = %output.display(), "output differs from source CSV");
            SeedStatus::Stale
        }
        Err(_) => {
            warn!(output = %output.display(), "output missing");
            SeedStatus::Stale
        }
    }
}

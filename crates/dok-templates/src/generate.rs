//! Entry points taking an unchecked DOK integer.
//!
//! The level is validated once here; anything outside 1-4 is rejected with
//! [`ModelError::InvalidDokLevel`] before a template is rendered.

use dok_model::{Activity, ArtifactBundle, AssessmentItem, DokLevel, ModelError};
use tracing::debug;

use crate::activities::activities_for;
use crate::items::items_for;

/// Generate the two assessment items for `dok`.
///
/// `subject` and `grade` do not influence the wording; they are recorded on
/// the trace event only.
///
/// # Errors
///
/// Returns [`ModelError::InvalidDokLevel`] when `dok` is not 1-4.
pub fn generate_items(
    standard: &str,
    subject: &str,
    grade: &str,
    dok: i64,
) -> Result<Vec<AssessmentItem>, ModelError> {
    let level = DokLevel::try_from(dok)?;
    debug!(subject, grade, dok = level.as_u8(), "selecting item templates");
    Ok(items_for(level, standard))
}

/// Generate the two classroom activities for `dok`.
///
/// # Errors
///
/// Returns [`ModelError::InvalidDokLevel`] when `dok` is not 1-4.
pub fn generate_activities(
    standard: &str,
    subject: &str,
    grade: &str,
    dok: i64,
) -> Result<Vec<Activity>, ModelError> {
    let level = DokLevel::try_from(dok)?;
    debug!(subject, grade, dok = level.as_u8(), "selecting activity templates");
    Ok(activities_for(level, standard))
}

/// Generate items and activities together, echoing the request.
///
/// # Errors
///
/// Returns [`ModelError::InvalidDokLevel`] when `dok` is not 1-4.
pub fn generate_bundle(
    standard: &str,
    subject: &str,
    grade: &str,
    dok: i64,
) -> Result<ArtifactBundle, ModelError> {
    let level = DokLevel::try_from(dok)?;
    Ok(ArtifactBundle {
        standard: standard.to_string(),
        subject: subject.to_string(),
        grade: grade.to_string(),
        dok: level,
        items: generate_items(standard, subject, grade, dok)?,
        activities: generate_activities(standard, subject, grade, dok)?,
    })
}

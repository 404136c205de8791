//! Records produced by the template selector.

use serde::{Deserialize, Serialize};

use crate::dok::DokLevel;

/// A single assessment item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentItem {
    /// Item format, e.g. "Selected Response".
    #[serde(rename = "type")]
    pub kind: String,
    /// Prompt shown to the student.
    pub text: String,
    /// Shape of an acceptable answer.
    pub answer: String,
    pub rationale: String,
    /// Success criteria.
    pub success: String,
    pub dok: u8,
    pub dok_why: String,
}

/// A classroom activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub title: String,
    pub task: String,
    pub materials: String,
    pub evidence: String,
    /// Teacher moves during the activity.
    pub teacher: String,
    pub dok: u8,
    pub dok_why: String,
}

/// Items and activities generated for one request, with the request echoed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactBundle {
    pub standard: String,
    pub subject: String,
    pub grade: String,
    pub dok: DokLevel,
    #[serde(default)]
    pub items: Vec<AssessmentItem>,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

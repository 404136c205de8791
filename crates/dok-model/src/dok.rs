//! Depth-of-Knowledge levels.
//!
//! The four levels form a closed set. Each level carries a canonical
//! definition sentence (stamped on every generated record as `dok_why`)
//! and an ordered list of six verbs that templates index into.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Number of verbs every level provides.
pub const VERBS_PER_LEVEL: usize = 6;

/// Webb's Depth-of-Knowledge level.
///
/// Serializes as its number (1-4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum DokLevel {
    /// Level 1: recall and reproduction.
    Recall = 1,
    /// Level 2: skills and concepts.
    SkillsConcepts = 2,
    /// Level 3: strategic thinking.
    StrategicThinking = 3,
    /// Level 4: extended reasoning.
    ExtendedReasoning = 4,
}

impl DokLevel {
    /// All levels in ascending order.
    pub const ALL: [DokLevel; 4] = [
        DokLevel::Recall,
        DokLevel::SkillsConcepts,
        DokLevel::StrategicThinking,
        DokLevel::ExtendedReasoning,
    ];

    /// Numeric level (1-4).
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Short human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            DokLevel::Recall => "Recall & Reproduction",
            DokLevel::SkillsConcepts => "Skills & Concepts",
            DokLevel::StrategicThinking => "Strategic Thinking",
            DokLevel::ExtendedReasoning => "Extended Reasoning",
        }
    }

    /// Canonical definition used as the justification on generated records.
    pub fn definition(self) -> &'static str {
        match self {
            DokLevel::Recall => {
                "Recall & reproduction; execute a simple procedure; locate/identify."
            }
            DokLevel::SkillsConcepts => {
                "Skills & concepts; classify, organize, compare; multi-step with some decision-making."
            }
            DokLevel::StrategicThinking => {
                "Strategic thinking; justify with evidence; analyze across parts or sources."
            }
            DokLevel::ExtendedReasoning => {
                "Extended reasoning; investigate, synthesize, or create over time."
            }
        }
    }

    /// Ordered verb list for this level.
    pub fn verbs(self) -> &'static [&'static str; VERBS_PER_LEVEL] {
        match self {
            DokLevel::Recall => &["identify", "define", "recall", "compute", "list", "locate"],
            DokLevel::SkillsConcepts => &[
                "classify",
                "organize",
                "compare",
                "explain",
                "summarize",
                "predict",
            ],
            DokLevel::StrategicThinking => &[
                "analyze",
                "justify",
                "evaluate",
                "revise",
                "argue",
                "synthesize",
            ],
            DokLevel::ExtendedReasoning => &[
                "design",
                "investigate",
                "synthesize",
                "construct",
                "model",
                "defend",
            ],
        }
    }
}

impl fmt::Display for DokLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DOK {}", self.as_u8())
    }
}

impl From<DokLevel> for u8 {
    fn from(level: DokLevel) -> Self {
        level.as_u8()
    }
}

impl TryFrom<i64> for DokLevel {
    type Error = ModelError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(DokLevel::Recall),
            2 => Ok(DokLevel::SkillsConcepts),
            3 => Ok(DokLevel::StrategicThinking),
            4 => Ok(DokLevel::ExtendedReasoning),
            other => Err(ModelError::InvalidDokLevel(other)),
        }
    }
}

impl TryFrom<u8> for DokLevel {
    type Error = ModelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        DokLevel::try_from(i64::from(value))
    }
}

impl FromStr for DokLevel {
    type Err = ModelError;

    /// Accepts `3`, `DOK3`, `dok 3`, `DOK-3` or a level name such as
    /// `strategic thinking` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        let digits = normalized
            .strip_prefix("dok")
            .map(|rest| rest.trim_start_matches([' ', '-', '_']))
            .unwrap_or(normalized.as_str());
        if let Ok(number) = digits.parse::<i64>() {
            return DokLevel::try_from(number);
        }
        match normalized.replace(['_', '-'], " ").as_str() {
            "recall" | "recall & reproduction" | "recall and reproduction" => {
                Ok(DokLevel::Recall)
            }
            "skills" | "skills & concepts" | "skills and concepts" => Ok(DokLevel::SkillsConcepts),
            "strategic" | "strategic thinking" => Ok(DokLevel::StrategicThinking),
            "extended" | "extended reasoning" | "extended thinking" => {
                Ok(DokLevel::ExtendedReasoning)
            }
            _ => Err(ModelError::UnknownDokLevel(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_conversion_covers_closed_set() {
        for level in DokLevel::ALL {
            assert_eq!(DokLevel::try_from(i64::from(level.as_u8())), Ok(level));
        }
        assert_eq!(
            DokLevel::try_from(0_i64),
            Err(ModelError::InvalidDokLevel(0))
        );
        assert_eq!(
            DokLevel::try_from(5_u8),
            Err(ModelError::InvalidDokLevel(5))
        );
        assert_eq!(
            DokLevel::try_from(-1_i64),
            Err(ModelError::InvalidDokLevel(-1))
        );
    }

    #[test]
    fn parses_common_spellings() {
        assert_eq!("2".parse::<DokLevel>(), Ok(DokLevel::SkillsConcepts));
        assert_eq!("DOK3".parse::<DokLevel>(), Ok(DokLevel::StrategicThinking));
        assert_eq!("dok-4".parse::<DokLevel>(), Ok(DokLevel::ExtendedReasoning));
        assert_eq!("Recall".parse::<DokLevel>(), Ok(DokLevel::Recall));
        assert_eq!(
            "strategic_thinking".parse::<DokLevel>(),
            Ok(DokLevel::StrategicThinking)
        );
        assert_eq!(
            "DOK 9".parse::<DokLevel>(),
            Err(ModelError::InvalidDokLevel(9))
        );
        assert!(matches!(
            "deep".parse::<DokLevel>(),
            Err(ModelError::UnknownDokLevel(_))
        ));
    }

    #[test]
    fn every_level_has_six_distinct_verbs() {
        for level in DokLevel::ALL {
            let verbs = level.verbs();
            for (i, verb) in verbs.iter().enumerate() {
                assert!(!verb.is_empty());
                assert!(
                    !verbs[i + 1..].contains(verb),
                    "{level} repeats verb {verb}"
                );
            }
        }
    }
}

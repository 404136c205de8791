//! Shared types for DOK Studio: Depth-of-Knowledge levels and the
//! assessment item / activity records built from them.

pub mod artifact;
pub mod dok;
pub mod error;

pub use artifact::{Activity, ArtifactBundle, AssessmentItem};
pub use dok::DokLevel;
pub use error::{ModelError, Result};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_serializes_with_expected_keys() {
        let item = AssessmentItem {
            kind: "Short Answer".to_string(),
            text: "Define two terms.".to_string(),
            answer: "Two terms.".to_string(),
            rationale: "Recall.".to_string(),
            success: "Correct terms.".to_string(),
            dok: 1,
            dok_why: DokLevel::Recall.definition().to_string(),
        };
        let value = serde_json::to_value(&item).expect("serialize item");
        let keys: Vec<&str> = value
            .as_object()
            .expect("object")
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys.len(), 7, "unexpected key set: {keys:?}");
        assert_eq!(value["type"], "Short Answer");
        assert_eq!(value["dok"], 1);
    }

    #[test]
    fn bundle_round_trips() {
        let bundle = ArtifactBundle {
            standard: "RL.5.1".to_string(),
            subject: "ELA".to_string(),
            grade: "5".to_string(),
            dok: DokLevel::StrategicThinking,
            items: vec![],
            activities: vec![],
        };
        let json = serde_json::to_string(&bundle).expect("serialize bundle");
        assert!(json.contains("\"dok\":3"));
        let round: ArtifactBundle = serde_json::from_str(&json).expect("deserialize bundle");
        assert_eq!(round.dok, DokLevel::StrategicThinking);
        assert_eq!(round.grade, "5");
    }
}

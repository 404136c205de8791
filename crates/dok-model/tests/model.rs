use dok_model::{DokLevel, ModelError};

#[test]
fn definitions_match_level_descriptions() {
    assert_eq!(
        DokLevel::Recall.definition(),
        "Recall & reproduction; execute a simple procedure; locate/identify."
    );
    assert_eq!(
        DokLevel::SkillsConcepts.definition(),
        "Skills & concepts; classify, organize, compare; multi-step with some decision-making."
    );
    assert_eq!(
        DokLevel::StrategicThinking.definition(),
        "Strategic thinking; justify with evidence; analyze across parts or sources."
    );
    assert_eq!(
        DokLevel::ExtendedReasoning.definition(),
        "Extended reasoning; investigate, synthesize, or create over time."
    );
}

#[test]
fn recall_verbs_are_ordered() {
    assert_eq!(
        DokLevel::Recall.verbs(),
        &["identify", "define", "recall", "compute", "list", "locate"]
    );
    assert_eq!(DokLevel::ExtendedReasoning.verbs()[5], "defend");
}

#[test]
fn level_serializes_as_number() {
    let json = serde_json::to_string(&DokLevel::ExtendedReasoning).unwrap();
    assert_eq!(json, "4");
    let level: DokLevel = serde_json::from_str("2").unwrap();
    assert_eq!(level, DokLevel::SkillsConcepts);
}

#[test]
fn out_of_range_level_fails_to_deserialize() {
    let result = serde_json::from_str::<DokLevel>("7");
    assert!(result.is_err());
}

#[test]
fn invalid_level_error_message_names_value() {
    let err = DokLevel::try_from(5_i64).unwrap_err();
    assert_eq!(err, ModelError::InvalidDokLevel(5));
    assert_eq!(err.to_string(), "invalid DOK level 5 (expected 1, 2, 3 or 4)");
}

#[test]
fn display_uses_dok_prefix() {
    assert_eq!(DokLevel::StrategicThinking.to_string(), "DOK 3");
    assert_eq!(DokLevel::ALL.len(), 4);
}

//! Assessment item templates, two per DOK level.

use dok_model::{AssessmentItem, DokLevel};

use crate::piece::{Piece, render};

/// Static description of one assessment item.
#[derive(Debug, Clone, Copy)]
pub struct ItemTemplate {
    pub kind: &'static str,
    pub text: &'static [Piece],
    pub answer: &'static str,
    pub rationale: &'static str,
    pub success: &'static str,
}

impl ItemTemplate {
    /// Fill the template for `level` and stamp the DOK justification.
    pub fn render(&self, level: DokLevel, standard: &str) -> AssessmentItem {
        AssessmentItem {
            kind: self.kind.to_string(),
            text: render(self.text, level, standard),
            answer: self.answer.to_string(),
            rationale: self.rationale.to_string(),
            success: self.success.to_string(),
            dok: level.as_u8(),
            dok_why: level.definition().to_string(),
        }
    }
}

/// Item templates indexed by `level as usize - 1`.
pub static ITEM_TEMPLATES: [[ItemTemplate; 2]; 4] = [
    // DOK 1
    [
        ItemTemplate {
            kind: "Selected Response",
            text: &[
                Piece::Capitalized(0),
                Piece::Text(
                    " the option that best states a key element of the standard. (Based on: ",
                ),
                Piece::Standard,
                Piece::Text(")"),
            ],
            answer: "A (key element stated in the stem).",
            rationale: "Single-step recall; identification with minimal reasoning.",
            success: "Chooses accurate option; matches standard language precisely.",
        },
        ItemTemplate {
            kind: "Short Answer",
            text: &[
                Piece::Capitalized(1),
                Piece::Text(" two terms central to this standard and give a short definition."),
            ],
            answer: "Two correct terms + definitions.",
            rationale: "Recall/define core terms; no strategic reasoning.",
            success: "Correct terms; definitions align with grade-appropriate wording.",
        },
    ],
    // DOK 2
    [
        ItemTemplate {
            kind: "Constructed Response",
            text: &[
                Piece::Capitalized(1),
                Piece::Text(" the parts of a sample task aligned to this standard and "),
                Piece::Verb(2),
                Piece::Text(" how each part supports the learning goal."),
            ],
            answer: "Names parts correctly; explains role of each part.",
            rationale: "Organizing + explaining relationships among parts.",
            success: "Accurate parts; clear links; grade-appropriate vocabulary.",
        },
        ItemTemplate {
            kind: "Selected Response",
            text: &[
                Piece::Text("Which choice best "),
                Piece::ThirdPerson(3),
                Piece::Text(" the relationship between two features required by the standard?"),
            ],
            answer: "Correct option describing the relationship.",
            rationale: "Conceptual link; beyond recall.",
            success: "Chooses option showing correct relationship using standard terms.",
        },
    ],
    // DOK 3
    [
        ItemTemplate {
            kind: "Constructed Response",
            text: &[
                Piece::Capitalized(0),
                Piece::Text(" how evidence demonstrates mastery of this standard and "),
                Piece::Verb(1),
                Piece::Text(" your claim with two pieces of textual/data evidence."),
            ],
            answer: "Claim + two pieces of relevant evidence + explanation.",
            rationale: "Strategic reasoning with justification.",
            success: "Clear claim; strong evidence; logical explanation.",
        },
        ItemTemplate {
            kind: "Performance Task",
            text: &[
                Piece::Capitalized(2),
                Piece::Text(" two approaches to meeting the standard and "),
                Piece::Verb(3),
                Piece::Text(" which is more effective for a given context."),
            ],
            answer: "Comparison + justified choice.",
            rationale: "Evaluate alternatives; justify with criteria.",
            success: "Compares accurately; uses criteria; coherent justification.",
        },
    ],
    // DOK 4
    [
        ItemTemplate {
            kind: "Performance Task (Extended)",
            text: &[
                Piece::Capitalized(0),
                Piece::Text(" and "),
                Piece::Verb(2),
                Piece::Text(
                    " a multi-step product/project that demonstrates this standard over time; \
                     include checkpoints and rubrics.",
                ),
            ],
            answer: "Project plan, artifacts, reflections, final product.",
            rationale: "Sustained synthesis; iterative refinement.",
            success: "Coherent plan; evidence across checkpoints; rubric-referenced quality.",
        },
        ItemTemplate {
            kind: "Research/Portfolio",
            text: &[
                Piece::Capitalized(0),
                Piece::Text(" a real-world problem aligned to the standard; "),
                Piece::Verb(4),
                Piece::Text(" and "),
                Piece::Verb(5),
                Piece::Text(" your solution using multiple sources."),
            ],
            answer: "Research log + prototype/solution + defense.",
            rationale: "Investigation + defense across sources/time.",
            success: "Triangulated evidence; viable solution; defended decisions.",
        },
    ],
];

/// The two item templates for `level`.
pub fn item_templates(level: DokLevel) -> &'static [ItemTemplate; 2] {
    &ITEM_TEMPLATES[usize::from(level.as_u8()) - 1]
}

/// Render both item templates for an already-validated level.
pub fn items_for(level: DokLevel, standard: &str) -> Vec<AssessmentItem> {
    item_templates(level)
        .iter()
        .map(|template| template.render(level, standard))
        .collect()
}

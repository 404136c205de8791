//! Classroom activity templates, two per DOK level.

use dok_model::{Activity, DokLevel};

use crate::piece::{Piece, render};

#[derive(Debug, Clone, Copy)]
pub struct ActivityTemplate {
    pub title: &'static str,
    pub task: &'static [Piece],
    pub materials: &'static str,
    pub evidence: &'static str,
    pub teacher: &'static str,
}

impl ActivityTemplate {
    pub fn render(&self, level: DokLevel, standard: &str) -> Activity {
        Activity {
            title: self.title.to_string(),
            task: render(self.task, level, standard),
            materials: self.materials.to_string(),
            evidence: self.evidence.to_string(),
            teacher: self.teacher.to_string(),
            dok: level.as_u8(),
            dok_why: level.definition().to_string(),
        }
    }
}

/// Activity templates indexed by `level as usize - 1`.
pub static ACTIVITY_TEMPLATES: [[ActivityTemplate; 2]; 4] = [
    // DOK 1
    [
        ActivityTemplate {
            title: "Vocabulary & Concept Sort",
            task: &[
                Piece::Text("Students "),
                Piece::Verb(0),
                Piece::Text(" and "),
                Piece::Verb(1),
                Piece::Text(" key terms/examples related to: "),
                Piece::Standard,
                Piece::Text("."),
            ],
            materials: "Word cards, definitions, example cards",
            evidence: "Completed sort; quick exit ticket",
            teacher: "Model 1–2 examples; check for accuracy.",
        },
        ActivityTemplate {
            title: "Guided Practice",
            task: &[
                Piece::Text("Students "),
                Piece::Verb(2),
                Piece::Text(" a simple procedure aligned to the standard with teacher think-aloud."),
            ],
            materials: "Mini whiteboards or notebook",
            evidence: "Correct steps; quick show-what-you-know",
            teacher: "Corrective feedback on steps.",
        },
    ],
    // DOK 2
    [
        ActivityTemplate {
            title: "Compare–Contrast Organizer",
            task: &[
                Piece::Text("In pairs, students "),
                Piece::Verb(2),
                Piece::Text(" two examples/non-examples and "),
                Piece::Verb(3),
                Piece::Text(" how/why they fit the standard."),
            ],
            materials: "T-chart or Venn diagram",
            evidence: "Completed organizer with reasons",
            teacher: "Prompt for precise language from the standard.",
        },
        ActivityTemplate {
            title: "Structure to Purpose",
            task: &[
                Piece::Text("Students "),
                Piece::Verb(1),
                Piece::Text(" parts/features and "),
                Piece::Verb(3),
                Piece::Text(" how each supports the goal in the standard."),
            ],
            materials: "Annotated sample, sticky notes",
            evidence: "Annotations linking parts to purpose",
            teacher: "Ask 'How do you know?' follow-ups.",
        },
    ],
    // DOK 3
    [
        ActivityTemplate {
            title: "Evidence-Based Seminar",
            task: &[
                Piece::Text("Students "),
                Piece::Verb(0),
                Piece::Text(" examples and "),
                Piece::Verb(1),
                Piece::Text(" claims with cited evidence aligned to: "),
                Piece::Standard,
                Piece::Text("."),
            ],
            materials: "Text/data excerpts; discussion stems",
            evidence: "Recorded claims + evidence citations",
            teacher: "Press for warrants and counterexamples.",
        },
        ActivityTemplate {
            title: "Design–Evaluate",
            task: &[
                Piece::Text("Teams "),
                Piece::Verb(2),
                Piece::Text(" two solution paths, then "),
                Piece::Verb(1),
                Piece::Text(" which better meets criteria; present justification."),
            ],
            materials: "Rubric, criteria chart",
            evidence: "Comparison table; justified choice",
            teacher: "Probe assumptions; require criteria.",
        },
    ],
    // DOK 4
    [
        ActivityTemplate {
            title: "Investigation/Project Cycle",
            task: &[
                Piece::Text("Students "),
                Piece::Verb(0),
                Piece::Text(" a problem aligned to the standard, "),
                Piece::Verb(1),
                Piece::Text(" sources, "),
                Piece::Verb(2),
                Piece::Text(" a product, and "),
                Piece::Verb(5),
                Piece::Text(" their approach."),
            ],
            materials: "Research planner; checkpoints",
            evidence: "Artifacts across checkpoints; final product",
            teacher: "Coach milestones; calibrate with rubric.",
        },
        ActivityTemplate {
            title: "Real-World Application",
            task: &[
                Piece::Text("Learners "),
                Piece::Verb(3),
                Piece::Text(
                    " and iterate on a solution for an authentic audience; \
                     reflect using rubric language.",
                ),
            ],
            materials: "Community brief; rubric",
            evidence: "Prototype + reflection + feedback",
            teacher: "Arrange feedback; ensure standards alignment.",
        },
    ],
];

pub fn activity_templates(level: DokLevel) -> &'static [ActivityTemplate; 2] {
    &ACTIVITY_TEMPLATES[usize::from(level.as_u8()) - 1]
}

/// Render both activity templates for an already-validated level.
pub fn activities_for(level: DokLevel, standard: &str) -> Vec<Activity> {
    activity_templates(level)
        .iter()
        .map(|template| template.render(level, standard))
        .collect()
}

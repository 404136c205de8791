//! Sentence skeleton pieces and rendering.

use dok_model::DokLevel;

/// One segment of a template sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece {
    /// Literal text.
    Text(&'static str),
    /// Verb at the given index, as listed.
    Verb(usize),
    /// Verb at the given index with its first letter uppercased.
    Capitalized(usize),
    /// Verb at the given index in third-person singular ("explains").
    ThirdPerson(usize),
    /// The caller's standard text, verbatim.
    Standard,
}

impl Piece {
    /// Verb index referenced by this piece, if any.
    pub fn verb_index(self) -> Option<usize> {
        match self {
            Piece::Verb(index) | Piece::Capitalized(index) | Piece::ThirdPerson(index) => {
                Some(index)
            }
            Piece::Text(_) | Piece::Standard => None,
        }
    }
}

/// Render a skeleton for `level`, substituting `standard` where requested.
pub fn render(pieces: &[Piece], level: DokLevel, standard: &str) -> String {
    let verbs = level.verbs();
    let mut out = String::new();
    for piece in pieces {
        match *piece {
            Piece::Text(text) => out.push_str(text),
            Piece::Verb(index) => out.push_str(verbs[index]),
            Piece::Capitalized(index) => out.push_str(&capitalize(verbs[index])),
            Piece::ThirdPerson(index) => out.push_str(&third_person(verbs[index])),
            Piece::Standard => out.push_str(standard),
        }
    }
    out
}

/// Uppercase the first character, leave the rest untouched.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Third-person singular present form of a regular English verb.
pub fn third_person(verb: &str) -> String {
    const SIBILANTS: [&str; 5] = ["s", "x", "z", "ch", "sh"];
    if let Some(stem) = verb.strip_suffix('y') {
        let before = stem.chars().last();
        if before.is_some_and(|c| !"aeiou".contains(c)) {
            return format!("{stem}ies");
        }
    }
    if SIBILANTS.iter().any(|suffix| verb.ends_with(suffix)) {
        return format!("{verb}es");
    }
    format!("{verb}s")
}

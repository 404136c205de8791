#![deny(unsafe_code)]

//! Grade-band grouping and ordering.

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::csv::StandardRow;

/// Separator between a standard's code and its statement (EN DASH).
pub const STANDARD_SEPARATOR: &str = " – ";

/// Labels sorted last: not a special band and not numeric.
pub const UNRANKED_GRADE: i64 = 100;

/// Sort key for a grade label.
///
/// Special bands map to fixed keys; otherwise the text before the first `-`
/// is parsed as an integer ("9-10" sorts as 9). Anything else sorts last.
pub fn grade_sort_key(label: &str) -> i64 {
    match label {
        "K" => -1,
        "K-2" => -2,
        "3-5" => -3,
        "MS" => 98,
        "HS" => 99,
        _ => label
            .split('-')
            .next()
            .and_then(|lead| lead.trim().parse::<i64>().ok())
            .unwrap_or(UNRANKED_GRADE),
    }
}

/// `"CODE – statement"`.
pub fn format_standard(code: &str, statement: &str) -> String {
    format!("{code}{STANDARD_SEPARATOR}{statement}")
}

/// Formatted standards grouped by grade label.
///
/// Grades are ordered by [`grade_sort_key`] (ties keep first-seen order);
/// standards within a grade keep row order. Serializes as
/// `{"grades": {label: [standard, ...]}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GradeIndex {
    grades: Vec<(String, Vec<String>)>,
}

impl GradeIndex {
    pub fn from_rows(rows: &[StandardRow]) -> Self {
        let mut positions: HashMap<&str, usize> = HashMap::new();
        let mut grades: Vec<(String, Vec<String>)> = Vec::new();
        for row in rows {
            let slot = *positions.entry(row.grade.as_str()).or_insert_with(|| {
                grades.push((row.grade.clone(), Vec::new()));
                grades.len() - 1
            });
            grades[slot]
                .1
                .push(format_standard(&row.code, &row.statement));
        }
        grades.sort_by_key(|(label, _)| grade_sort_key(label));
        Self { grades }
    }

    /// Grade labels in output order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.grades.iter().map(|(label, _)| label.as_str())
    }

    /// Standards listed under `label`.
    pub fn get(&self, label: &str) -> Option<&[String]> {
        self.grades
            .iter()
            .find(|(candidate, _)| candidate == label)
            .map(|(_, standards)| standards.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.grades
            .iter()
            .map(|(label, standards)| (label.as_str(), standards.as_slice()))
    }

    pub fn grade_count(&self) -> usize {
        self.grades.len()
    }

    /// Total number of standards across all grades.
    pub fn standard_count(&self) -> usize {
        self.grades.iter().map(|(_, standards)| standards.len()).sum()
    }

    /// Pretty JSON (2-space indent, no trailing newline, non-ASCII kept).
    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

struct GradesMap<'a>(&'a [(String, Vec<String>)]);

impl Serialize for GradesMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (label, standards) in self.0 {
            map.serialize_entry(label, standards)?;
        }
        map.end()
    }
}

impl Serialize for GradeIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("grades", &GradesMap(&self.grades))?;
        map.end()
    }
}

#![deny(unsafe_code)]

//! Subject CSV parsing.

use std::path::Path;

use crate::error::StandardsError;

pub const SUBJECT_COLUMN: &str = "subject";
pub const GRADE_COLUMN: &str = "grade_or_band";
pub const CODE_COLUMN: &str = "code";
pub const STATEMENT_COLUMN: &str = "statement";

/// One standards row with every field trimmed.
///
/// Empty values are kept; rows are not validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardRow {
    pub subject: String,
    pub grade: String,
    pub code: String,
    pub statement: String,
}

/// Read every row of a subject CSV file.
///
/// Columns are located by header name (a UTF-8 BOM on the first header is
/// ignored); other columns are ignored.
pub fn read_standard_rows(path: &Path) -> Result<Vec<StandardRow>, StandardsError> {
    let bytes = std::fs::read(path).map_err(|e| StandardsError::io(path, e))?;
    parse_standard_rows(&bytes, path)
}

/// Parse CSV bytes; `path` is only used in error messages.
pub fn parse_standard_rows(bytes: &[u8], path: &Path) -> Result<Vec<StandardRow>, StandardsError> {
    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);
    let headers = reader
        .headers()
        .map_err(|e| StandardsError::csv(path, &e))?
        .clone();

    let column = |name: &str| -> Result<usize, StandardsError> {
        headers
            .iter()
            .position(|h| h.trim_matches('\u{feff}').trim() == name)
            .ok_or_else(|| StandardsError::MissingColumn {
                path: path.to_path_buf(),
                column: name.to_string(),
            })
    };
    let subject = column(SUBJECT_COLUMN)?;
    let grade = column(GRADE_COLUMN)?;
    let code = column(CODE_COLUMN)?;
    let statement = column(STATEMENT_COLUMN)?;
    // Extra trailing fields are ignored; a record must still reach every column.
    let min_fields = subject.max(grade).max(code).max(statement) + 1;

    let mut rows = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record.map_err(|e| StandardsError::csv(path, &e))?;
        if record.len() < min_fields {
            return Err(StandardsError::Csv {
                path: path.to_path_buf(),
                message: format!(
                    "record {} has {} fields, expected at least {min_fields}",
                    line + 1,
                    record.len()
                ),
            });
        }
        let get = |idx: usize| record.get(idx).unwrap_or_default().trim().to_string();
        rows.push(StandardRow {
            subject: get(subject),
            grade: get(grade),
            code: get(code),
            statement: get(statement),
        });
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<Vec<StandardRow>, StandardsError> {
        parse_standard_rows(text.as_bytes(), Path::new("test.csv"))
    }

    #[test]
    fn trims_fields_and_keeps_order() {
        let rows = parse(
            "subject,grade_or_band,code,statement\n\
             ELA , 5 ,RL.5.1,  Quote accurately from a text.  \n\
             ELA,K,RL.K.1,Ask and answer questions\n",
        )
        .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].subject, "ELA");
        assert_eq!(rows[0].grade, "5");
        assert_eq!(rows[0].statement, "Quote accurately from a text.");
        assert_eq!(rows[1].code, "RL.K.1");
    }

    #[test]
    fn columns_are_found_by_name() {
        let rows = parse(
            "\u{feff}code,notes,statement,grade_or_band,subject\n\
             A.1,ignored,Do things,HS,Math\n",
        )
        .unwrap();
        assert_eq!(
            rows[0],
            StandardRow {
                subject: "Math".to_string(),
                grade: "HS".to_string(),
                code: "A.1".to_string(),
                statement: "Do things".to_string(),
            }
        );
    }

    #[test]
    fn quoted_statements_keep_commas() {
        let rows = parse(
            "subject,grade_or_band,code,statement\n\
             Science,MS,MS-PS1-1,\"Develop models, including atoms.\"\n",
        )
        .unwrap();
        assert_eq!(rows[0].statement, "Develop models, including atoms.");
    }

    #[test]
    fn missing_column_is_an_error() {
        let err = parse("subject,grade,code,statement\nELA,5,RL.5.1,x\n").unwrap_err();
        assert!(matches!(
            err,
            StandardsError::MissingColumn { ref column, .. } if column == "grade_or_band"
        ));
    }

    #[test]
    fn short_row_is_an_error() {
        let err = parse("subject,grade_or_band,code,statement\nELA,5\n").unwrap_err();
        assert!(matches!(
            err,
            StandardsError::Csv { ref message, .. } if message.contains("record 1 has 2 fields")
        ));
    }

    #[test]
    fn extra_fields_are_ignored() {
        let rows = parse(
            "subject,grade_or_band,code,statement\n\
             ELA,5,RL.5.1,Quote,extra\n\
             ELA,5,RL.5.2,Theme,\n",
        )
        .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].statement, "Quote");
        assert_eq!(rows[1].code, "RL.5.2");
    }

    #[test]
    fn unused_trailing_columns_may_be_absent() {
        let rows = parse(
            "subject,grade_or_band,code,statement,notes\n\
             ELA,5,RL.5.1,Quote\n",
        )
        .unwrap();
        assert_eq!(rows[0].statement, "Quote");
    }

    #[test]
    fn empty_values_are_kept() {
        let rows = parse("subject,grade_or_band,code,statement\n,,,\n").unwrap();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].grade.is_empty());
    }
}

//! CSV quiz loader.
//!
//! Reads a headerless, comma-separated file of `question,answer` rows into a
//! [`RecordSet`]. Parsing is all-or-nothing: one bad row fails the load.

use std::collections::HashSet;
use std::path::Path;

use crate::error::QuizError;
use crate::model::{Record, RecordSet};

/// Read and parse a quiz file.
pub fn load_quiz(path: &Path) -> Result<RecordSet, QuizError> {
    let data = std::fs::read(path).map_err(|source| QuizError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let records = parse_records(&data)?;
    tracing::debug!(path = %path.display(), count = records.len(), "loaded quiz");
    Ok(records)
}

/// Parse raw CSV bytes. Zero rows is an empty set, not an error.
pub fn parse_records(data: &[u8]) -> Result<RecordSet, QuizError> {
    check_quoting(data)?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(data);

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| QuizError::Parse {
            line: e.position().map(|p| p.line()).unwrap_or(0),
            message: e.to_string(),
        })?;

        if row.len() != 2 {
            return Err(QuizError::Parse {
                line: row.position().map(|p| p.line()).unwrap_or(0),
                message: format!("expected 2 fields, found {}", row.len()),
            });
        }

        records.push(Record::new(&row[0], &row[1]));
    }

    Ok(RecordSet::new(records))
}

fn quote_error(line: u64, message: &str) -> QuizError {
    QuizError::Parse {
        line,
        message: message.to_string(),
    }
}

/// Reject quoting the `csv` reader would silently accept: a quote inside an
/// unquoted field, text after a closing quote, or a quote that never closes.
fn check_quoting(data: &[u8]) -> Result<(), QuizError> {
    let mut line = 1u64;
    let mut field_start = true;
    let mut i = 0;

    while i < data.len() {
        if field_start && data[i] == b'"' {
            let open_line = line;
            i += 1;
            loop {
                match data.get(i) {
                    None => return Err(quote_error(open_line, "unterminated quoted field")),
                    Some(b'"') if data.get(i + 1) == Some(&b'"') => i += 2,
                    Some(b'"') => {
                        i += 1;
                        break;
                    }
                    Some(b'\n') => {
                        line += 1;
                        i += 1;
                    }
                    Some(_) => i += 1,
                }
            }
            match data.get(i) {
                None | Some(b',') | Some(b'\n') => {}
                Some(b'\r') if matches!(data.get(i + 1), None | Some(b'\n')) => {}
                Some(_) => {
                    return Err(quote_error(line, "unexpected character after closing quote"))
                }
            }
            field_start = false;
            continue;
        }

        match data[i] {
            b'"' => return Err(quote_error(line, "bare quote in unquoted field")),
            b',' => field_start = true,
            b'\n' => {
                line += 1;
                field_start = true;
            }
            _ => field_start = false,
        }
        i += 1;
    }

    Ok(())
}

/// A warning from quiz validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// 1-based position of the question in the file.
    pub index: usize,
    /// Warning message.
    pub message: String,
}

/// Check a record set for questions that can't be answered as intended.
pub fn validate_records(records: &RecordSet) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();
    let mut seen = HashSet::new();

    for (i, record) in records.iter().enumerate() {
        let index = i + 1;

        if record.question.trim().is_empty() {
            warnings.push(ValidationWarning {
                index,
                message: "question is empty".into(),
            });
        } else if !seen.insert(record.question.as_str()) {
            warnings.push(ValidationWarning {
                index,
                message: format!("duplicate question: {}", record.question),
            });
        }

        // Input is trimmed before matching, so padded answers never match.
        if record.answer.is_empty() {
            warnings.push(ValidationWarning {
                index,
                message: "answer is empty".into(),
            });
        } else if record.answer.trim() != record.answer {
            warnings.push(ValidationWarning {
                index,
                message: format!("answer {:?} has surrounding whitespace", record.answer),
            });
        }
    }

    warnings
}

//! First-worksheet reader and header validation for question bank files.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

use crate::error::BankError;

/// Columns every question bank must expose in its header row.
pub const REQUIRED_COLUMNS: [&str; 3] = ["type", "input", "output"];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Cell text at `row`/`col`, empty when the row is shorter than the header.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(col))
            .map(String::as_str)
            .unwrap_or_default()
    }
}

/// Reads the first worksheet. The first row is the header; fully blank rows are dropped.
pub fn read_table(path: &Path) -> Result<Table, BankError> {
    let mut workbook = open_workbook_auto(path).map_err(|err| BankError::Unreadable {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| BankError::NoWorksheet {
            path: path.to_path_buf(),
        })?
        .map_err(|err| BankError::Unreadable {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;

    let mut rows = range.rows();
    let headers = rows
        .next()
        .map(|cells| cells.iter().map(cell_text).collect())
        .unwrap_or_default();
    let rows = rows
        .map(|cells| cells.iter().map(cell_text).collect::<Vec<_>>())
        .filter(|cells| cells.iter().any(|cell| !cell.trim().is_empty()))
        .collect();

    Ok(Table { headers, rows })
}

/// Fails with the sorted list of required columns the header lacks.
pub fn validate_columns(headers: &[String]) -> Result<(), BankError> {
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|required| !headers.iter().any(|header| header == *required))
        .map(|required| (*required).to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(BankError::MissingColumns { missing })
    }
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(text) => text.clone(),
        Data::Int(value) => value.to_string(),
        Data::Float(value) => format_number(*value),
        Data::Bool(value) => value.to_string(),
        other => other.to_string(),
    }
}

// Spreadsheet apps store every number as a float; whole values should read as integers.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_floats_render_without_fraction() {
        assert_eq!(format_number(12.0), "12");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(2.5), "2.5");
    }

    #[test]
    fn reports_every_missing_column() {
        let headers = vec!["type".to_string(), "notes".to_string()];
        match validate_columns(&headers) {
            Err(BankError::MissingColumns { missing }) => {
                assert_eq!(missing, vec!["input".to_string(), "output".to_string()]);
            }
            other => panic!("expected missing columns, got {other:?}"),
        }
    }

    #[test]
    fn column_names_are_case_sensitive() {
        let headers = vec!["Type".to_string(), "input".to_string(), "output".to_string()];
        assert!(validate_columns(&headers).is_err());
    }

    #[test]
    fn extra_columns_are_allowed() {
        let headers: Vec<String> = ["difficulty", "output", "type", "input"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert!(validate_columns(&headers).is_ok());
    }
}

// File: src/loader.rs
//! Reads `(unit, class)` rows from a class-definition resource.
//!
//! Delimited text needs a header row naming a unit column and a class
//! column; any other columns (descriptions, features) are ignored. JSON
//! resources are a plain array of `{ "unit": ..., "class": ... }` objects.

use crate::core::types::ClassEntry;
use crate::error::{LoadError, Result};
use log::info;
use std::fs;
use std::path::Path;

/// The class table shipped with the crate.
pub const DEFAULT_TABLE_TSV: &str = include_str!("../data/sounds.tsv");

const UNIT_COLUMNS: &[&str] = &["unit", "sound", "phoneme", "grapheme"];
const CLASS_COLUMNS: &[&str] = &["class", "code", "sound class"];

/// Loads rows from `path`, picking the format from the file extension:
/// `.json`, `.csv`, otherwise tab-separated.
pub fn load_rows(path: impl AsRef<Path>) -> Result<Vec<ClassEntry>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let rows = match extension.as_deref() {
        Some("json") => parse_json(&text)?,
        Some("csv") => parse_delimited(&text, ',')?,
        _ => parse_delimited(&text, '\t')?,
    };
    info!("loaded {} class rows from {}", rows.len(), path.display());
    Ok(rows)
}

pub fn parse_json(text: &str) -> Result<Vec<ClassEntry>> {
    let rows: Vec<ClassEntry> = serde_json::from_str(text)?;
    if rows.is_empty() {
        return Err(LoadError::EmptyTable);
    }
    Ok(rows)
}

/// Parses delimited text. Blank lines and lines starting with `#` are
/// skipped; the first remaining line is the header. Row numbers in errors
/// are 1-based line numbers.
pub fn parse_delimited(text: &str, delimiter: char) -> Result<Vec<ClassEntry>> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim_start_matches('\u{feff}')))
        .filter(|(_, line)| !line.trim().is_empty() && !line.trim_start().starts_with('#'));

    let (_, header) = lines
        .next()
        .ok_or_else(|| LoadError::MissingColumn("unit".to_string()))?;
    let columns: Vec<String> = header.split(delimiter).map(|c| field(c).to_lowercase()).collect();
    let unit_col = find_column(&columns, UNIT_COLUMNS)
        .ok_or_else(|| LoadError::MissingColumn("unit".to_string()))?;
    let class_col = find_column(&columns, CLASS_COLUMNS)
        .ok_or_else(|| LoadError::MissingColumn("class".to_string()))?;

    let mut rows = Vec::new();
    for (row, line) in lines {
        let fields: Vec<&str> = line.split(delimiter).map(field).collect();
        let (unit, class) = match (fields.get(unit_col), fields.get(class_col)) {
            (Some(unit), Some(class)) if !unit.is_empty() && !class.is_empty() => (*unit, *class),
            _ => {
                return Err(LoadError::MalformedRow {
                    row,
                    reason: format!("expected unit and class in '{}'", line),
                })
            }
        };
        rows.push(ClassEntry::new(unit, class));
    }

    if rows.is_empty() {
        return Err(LoadError::EmptyTable);
    }
    Ok(rows)
}

fn field(raw: &str) -> &str {
    raw.trim().trim_matches('"').trim()
}

fn find_column(columns: &[String], names: &[&str]) -> Option<usize> {
    columns.iter().position(|c| names.contains(&c.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn bundled_table_parses() {
        let rows = parse_delimited(DEFAULT_TABLE_TSV, '\t').unwrap();
        assert!(rows.iter().any(|r| r.unit == "ŋ" && r.class == "N"));
        assert!(rows.iter().any(|r| r.unit == "∅" && r.class == "H"));
    }

    #[test]
    fn extra_columns_and_comments_are_ignored() {
        let text = "# labials\nclass,note,sound\nP,stop,p\n\n# nasal\nM,,m\n";
        let rows = parse_delimited(text, ',').unwrap();
        assert_eq!(rows, vec![ClassEntry::new("p", "P"), ClassEntry::new("m", "M")]);
    }

    #[test]
    fn quoted_fields() {
        let rows = parse_delimited("\"unit\",\"class\"\n\"ŋ\",\"N\"\n", ',').unwrap();
        assert_eq!(rows, vec![ClassEntry::new("ŋ", "N")]);
    }

    #[test]
    fn header_without_class_column() {
        let err = parse_delimited("unit\tdescription\np\tstop\n", '\t').unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn(ref c) if c == "class"));
        assert!(matches!(parse_delimited("", '\t'), Err(LoadError::MissingColumn(_))));
    }

    #[test]
    fn short_row_reports_its_line() {
        let err = parse_delimited("unit\tclass\np\tP\nt\n", '\t').unwrap_err();
        assert!(matches!(err, LoadError::MalformedRow { row: 3, .. }));
    }

    #[test]
    fn header_only_is_empty() {
        assert!(matches!(parse_delimited("unit\tclass\n", '\t'), Err(LoadError::EmptyTable)));
        assert!(matches!(parse_json("[]"), Err(LoadError::EmptyTable)));
    }

    #[test]
    fn loads_by_extension() {
        let mut json = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(json, r#"[{{"unit": "k", "class": "K"}}]"#).unwrap();
        assert_eq!(load_rows(json.path()).unwrap(), vec![ClassEntry::new("k", "K")]);

        let mut csv = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(csv, "unit,class\ns,S").unwrap();
        assert_eq!(load_rows(csv.path()).unwrap(), vec![ClassEntry::new("s", "S")]);

        let mut tsv = NamedTempFile::new().unwrap();
        writeln!(tsv, "unit\tclass\nr\tR").unwrap();
        assert_eq!(load_rows(tsv.path()).unwrap(), vec![ClassEntry::new("r", "R")]);
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(load_rows("/nonexistent/sounds.tsv"), Err(LoadError::Io(_))));
    }
}

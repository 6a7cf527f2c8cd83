//! Line-oriented CSV reading for the inventory file.
//!
//! The reader is deliberately small: a quote character toggles the "inside
//! quotes" state and is never copied into a field, so `""` escapes are not
//! understood and unbalanced quotes are not reported. The input is the
//! generator's own output, which never needs either.

use std::collections::BTreeMap;

use crate::errors::ConvertError;

const SEPARATOR: char = ',';
const QUOTE: char = '"';

/// One decoded data row keyed by header name.
pub type Row = BTreeMap<String, String>;

/// Header and rows of a parsed CSV document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTable {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
    /// Non-empty lines after the header.
    pub data_lines: usize,
    /// Data lines dropped because their field count differs from the header.
    pub skipped_rows: usize,
}

/// Split one line into trimmed fields.
///
/// A separator inside quotes belongs to the field. A final field that is
/// empty before trimming is dropped.
pub fn parse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            QUOTE => in_quotes = !in_quotes,
            SEPARATOR if !in_quotes => {
                fields.push(clean_field(&current));
                current.clear();
            }
            _ => current.push(ch),
        }
    }

    if !current.is_empty() {
        fields.push(clean_field(&current));
    }

    fields
}

fn clean_field(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix(QUOTE)
        .and_then(|inner| inner.strip_suffix(QUOTE))
        .unwrap_or(trimmed)
        .to_string()
}

/// Pair header names with row values when both have the same length.
pub fn decode_row(headers: &[String], values: Vec<String>) -> Option<Row> {
    if headers.len() != values.len() {
        return None;
    }
    Some(headers.iter().cloned().zip(values).collect())
}

/// Parse a whole document: first non-empty line is the header.
pub fn parse_table(text: &str) -> Result<ParsedTable, ConvertError> {
    let lines: Vec<&str> = text.split('\n').filter(|line| !line.trim().is_empty()).collect();
    if lines.len() < 2 {
        return Err(ConvertError::InsufficientData { lines: lines.len() });
    }

    let headers = parse_line(lines[0]);
    let data = &lines[1..];
    let mut rows = Vec::with_capacity(data.len());
    let mut skipped_rows = 0;
    for line in data {
        match decode_row(&headers, parse_line(line)) {
            Some(row) => rows.push(row),
            None => skipped_rows += 1,
        }
    }

    Ok(ParsedTable {
        headers,
        rows,
        data_lines: data.len(),
        skipped_rows,
    })
}

/// Value of `column` in `row`, or an empty string when absent.
pub fn field<'a>(row: &'a Row, column: &str) -> &'a str {
    row.get(column).map(String::as_str).unwrap_or_default()
}

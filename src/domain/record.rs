use std::collections::HashMap;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableParseError {
    #[error("the resource is empty or has no header row")]
    MissingHeader,
    #[error("unterminated quoted field on line {0}")]
    UnterminatedQuote(usize),
}

/// One parsed row of the tabular resource, keyed by the header row.
/// Transient: records are dropped once normalized into tools.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    fields: HashMap<String, String>,
}

impl RawRecord {
    pub fn field(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(|v| v.as_str())
    }

    /// Like `field`, but treats blank and whitespace-only values as absent.
    pub fn text(&self, column: &str) -> Option<&str> {
        self.field(column).map(str::trim).filter(|v| !v.is_empty())
    }
}

#[cfg(test)]
impl RawRecord {
    pub fn from_pairs(pairs: &[(&str, &str)]) -> RawRecord {
        RawRecord {
            fields: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

/// Parses a comma-delimited table. The first non-blank line is the header,
/// every later line is one record. Rows wider than the header lose their
/// extra fields, narrower rows simply leave columns absent.
pub fn parse_table(input: &str) -> Result<Vec<RawRecord>, TableParseError> {
    let mut lines = input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty());

    let (header_index, header_line) = lines.next().ok_or(TableParseError::MissingHeader)?;
    let headers: Vec<String> = split_fields(header_line, header_index + 1)?
        .into_iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut records = vec![];
    for (index, line) in lines {
        let values = split_fields(line, index + 1)?;
        let fields = headers.iter().cloned().zip(values).collect();
        records.push(RawRecord { fields });
    }

    Ok(records)
}

/// Splits one line on commas, honouring double-quoted fields. A quoted field
/// may contain commas, and `""` inside quotes is an escaped quote.
fn split_fields(line: &str, line_number: usize) -> Result<Vec<String>, TableParseError> {
    let mut fields = vec![];
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    current.push('"');
                }
                '"' => in_quotes = false,
                other => current.push(other),
            }
        } else {
            match c {
                '"' if current.is_empty() => in_quotes = true,
                ',' => fields.push(std::mem::take(&mut current)),
                other => current.push(other),
            }
        }
    }

    if in_quotes {
        return Err(TableParseError::UnterminatedQuote(line_number));
    }

    fields.push(current);
    Ok(fields)
}

//! ASCII transliteration for warehouse ingestion
//!
//! The warehouse importer cannot consume multi-byte sequences, so every
//! value is transliterated to its closest ASCII form before writing
//! (`Müller` → `Muller`, `São Paulo` → `Sao Paulo`).

use super::row::RowMapping;
use crate::domain::errors::OrderExportError;
use crate::domain::Result;

/// Transliterates one value to ASCII
///
/// # Errors
///
/// Returns [`OrderExportError::Encoding`] if a character has no ASCII
/// equivalent.
pub fn transliterate(column: &str, value: &str) -> Result<String> {
    transliterate_with(column, value, deunicode::deunicode_char)
}

fn transliterate_with<F>(column: &str, value: &str, lookup: F) -> Result<String>
where
    F: Fn(char) -> Option<&'static str>,
{
    if value.is_ascii() {
        return Ok(value.to_string());
    }

    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if c.is_ascii() {
            out.push(c);
            continue;
        }
        match lookup(c) {
            Some(replacement) if replacement.is_ascii() => out.push_str(replacement),
            _ => {
                return Err(OrderExportError::Encoding {
                    column: column.to_string(),
                    value: value.to_string(),
                })
            }
        }
    }
    Ok(out)
}

/// Transliterates every value of a row mapping
pub fn sanitize_row(row: RowMapping) -> Result<RowMapping> {
    row.into_iter()
        .map(|(column, value)| Ok((column, transliterate(column, &value)?)))
        .collect()
}

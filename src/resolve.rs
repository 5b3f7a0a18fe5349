// src/resolve.rs
// Identifier resolution: pull the document id out of a pasted URL.
// Pure and local; never touches the network.

use std::fmt;

use crate::error::SheetError;

/// Opaque token that identifies one remote spreadsheet document.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SpreadsheetId(String);

impl SpreadsheetId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SpreadsheetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Matches the `/spreadsheets/d/<id>` segment, where `<id>` is one or more
/// of `[A-Za-z0-9_-]`. Anything else is an `InvalidUrl`.
pub fn extract_id(url: &str) -> Result<SpreadsheetId, SheetError> {
    const MARKER: &str = "/spreadsheets/d/";

    let at = url
        .find(MARKER)
        .ok_or_else(|| SheetError::InvalidUrl(s!(url)))?;
    let rest = &url[at + MARKER.len()..];

    let end = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '-'))
        .unwrap_or(rest.len());
    if end == 0 {
        return Err(SheetError::InvalidUrl(s!(url)));
    }

    Ok(SpreadsheetId(rest[..end].to_string()))
}

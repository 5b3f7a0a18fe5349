// src/channel.rs
//! Credential-provider seam.
//!
//! The core never runs an OAuth flow; an external collaborator hands the
//! session either nothing (public-only acquisition) or a [`Channel`]
//! capability that can read document metadata and value ranges. The one
//! concrete implementation talks to the Sheets v4 REST API with a bearer
//! token; tests substitute their own impls.

use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;

use crate::core::net;
use crate::error::TransportError;
use crate::params::{API_BASE, API_TIMEOUT_SECS};
use crate::resolve::SpreadsheetId;

/// Read capability over one remote spreadsheet system.
/// Both calls return raw structured data or a classified transport error;
/// classification into user-facing notices happens in `acquire`.
pub trait Channel {
    fn get_metadata(&self, id: &SpreadsheetId) -> Result<SpreadsheetMeta, TransportError>;
    fn get_values(
        &self,
        id: &SpreadsheetId,
        range: &str,
    ) -> Result<Vec<Vec<String>>, TransportError>;
}

/* ---------------- Wire shapes (Sheets v4) ---------------- */

#[derive(Debug, Default, Deserialize)]
pub struct SpreadsheetMeta {
    #[serde(default)]
    pub sheets: Vec<SheetEntry>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SheetEntry {
    #[serde(default)]
    pub properties: SheetProperties,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetProperties {
    #[serde(default)]
    pub sheet_id: i64,
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

/* ---------------- REST implementation ---------------- */

/// Sheets v4 REST channel authorized by a pre-obtained access token.
/// The token is session-scoped mutable state: refreshing an expired
/// credential swaps it in place (single actor, no locking needed).
pub struct RestChannel {
    token: String,
}

impl RestChannel {
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: token.into() }
    }

    /// Swap in a refreshed access token.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = token.into();
    }
}

impl Channel for RestChannel {
    fn get_metadata(&self, id: &SpreadsheetId) -> Result<SpreadsheetMeta, TransportError> {
        let url = format!("{API_BASE}/{id}?fields=sheets.properties");
        let body = net::http_get_bearer(&url, &self.token, Duration::from_secs(API_TIMEOUT_SECS))?;
        serde_json::from_str(&body)
            .map_err(|e| TransportError::Network(format!("bad metadata body: {e}")))
    }

    fn get_values(
        &self,
        id: &SpreadsheetId,
        range: &str,
    ) -> Result<Vec<Vec<String>>, TransportError> {
        let url = format!(
            "{API_BASE}/{id}/values/{}?majorDimension=ROWS",
            encode_range(range)
        );
        let body = net::http_get_bearer(&url, &self.token, Duration::from_secs(API_TIMEOUT_SECS))?;
        let vr: ValueRange = serde_json::from_str(&body)
            .map_err(|e| TransportError::Network(format!("bad value range body: {e}")))?;

        Ok(vr
            .values
            .into_iter()
            .map(|row| row.iter().map(cell_to_string).collect())
            .collect())
    }
}

/// Display values only; the API serves strings for FORMATTED_VALUE, but be
/// tolerant of bare numbers/bools in the body.
fn cell_to_string(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Null => s!(),
        other => other.to_string(),
    }
}

/// Percent-encode an A1 range for use as a URL path segment.
/// Quoted worksheet names carry spaces and apostrophes.
fn encode_range(range: &str) -> String {
    let mut out = String::with_capacity(range.len());
    for ch in range.chars() {
        match ch {
            'A'..='Z' | 'a'..='z' | '0'..='9' | '-' | '_' | '.' | '~' | '!' | '(' | ')' | '*' => {
                out.push(ch)
            }
            _ => {
                let mut buf = [0u8; 4];
                for b in ch.encode_utf8(&mut buf).as_bytes() {
                    out.push_str(&format!("%{b:02X}"));
                }
            }
        }
    }
    out
}

// src/error.rs
//
// Error taxonomy for the acquisition pipeline.
//
// Local errors (bad URL, combine with nothing) surface directly to the
// caller. Remote/transport failures are classified here but get caught at
// the component boundary and downgraded to an empty result plus a Notice —
// one bad worksheet must never abort a multi-sheet session.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SheetError {
    #[error("invalid Google Sheets URL format: {0}")]
    InvalidUrl(String),

    #[error("access denied: viewer permission required for this document")]
    PermissionDenied,

    #[error("spreadsheet not found")]
    NotFound,

    #[error("sheet is not publicly accessible; received HTML instead of CSV")]
    NotPubliclyAccessible,

    #[error("worksheet '{0}' yielded no usable data")]
    EmptySheet(String),

    #[error("no sheets added yet")]
    NoSheets,

    #[error("transport error: {0}")]
    Transport(String),
}

/// Classified outcome of a single HTTP round trip.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("unauthorized (HTTP 401)")]
    Unauthorized,

    #[error("forbidden (HTTP 403)")]
    Forbidden,

    #[error("not found (HTTP 404)")]
    NotFound,

    #[error("HTTP {0}")]
    Status(u16),

    #[error("{0}")]
    Network(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            TransportError::Network(s!("request timed out"))
        } else {
            TransportError::Network(e.to_string())
        }
    }
}

// src/notify.rs
//
// Classified user-facing notices. Components degrade remote failures into
// one of these instead of unwinding, so a frontend can map each category
// to the right remedy ("authenticate" vs "check the URL").

use std::fmt;

use crate::error::TransportError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelKind {
    Api,
    Public,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Notice {
    /// Directory listing succeeded.
    Listed { count: usize, channel: ChannelKind },
    /// Directory call succeeded but the document reports no worksheets.
    NoWorksheets,
    /// Remote said 401: the document needs an authenticated channel.
    AuthRequired,
    /// Remote said 403: document exists, caller lacks read access.
    PermissionDenied,
    /// Remote said 404: bad id or worksheet gone.
    NotFound,
    /// Anything else from the network layer.
    Transport(String),
    /// Fetch succeeded but the worksheet held no cells.
    EmptySheet(String),
    /// Every scrape pattern missed; caller got the synthetic Sheet1 guess.
    GuessedDefaultWorksheet,
    /// Requested header row was past the data; row 1 was used instead.
    HeaderRowClamped { requested: usize },
    /// add() refused to retain a worksheet that produced no data rows.
    SheetRejected(String),
}

impl Notice {
    pub fn severity(&self) -> Severity {
        use Notice::*;
        match self {
            Listed { .. } => Severity::Info,
            NoWorksheets
            | EmptySheet(_)
            | GuessedDefaultWorksheet
            | HeaderRowClamped { .. }
            | SheetRejected(_) => Severity::Warning,
            AuthRequired | PermissionDenied | NotFound | Transport(_) => Severity::Error,
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Notice::*;
        match self {
            Listed { count, channel: ChannelKind::Api } => {
                write!(f, "Found {count} worksheets via the Sheets API")
            }
            Listed { count, channel: ChannelKind::Public } => {
                write!(f, "Found {count} worksheets via public page parsing")
            }
            NoWorksheets => write!(f, "No worksheets found in this document"),
            AuthRequired => {
                write!(f, "This sheet is private and requires authentication")
            }
            PermissionDenied => {
                write!(f, "Access denied. Make sure you have viewer access to this sheet")
            }
            NotFound => write!(f, "Spreadsheet not found. Check the URL"),
            Transport(msg) => write!(f, "Network failure: {msg}"),
            EmptySheet(name) => write!(f, "Worksheet '{name}' is empty"),
            GuessedDefaultWorksheet => {
                write!(f, "No worksheet listing found; assuming a single 'Sheet1'")
            }
            HeaderRowClamped { requested } => {
                write!(f, "Header row {requested} is beyond the data range; using row 1 instead")
            }
            SheetRejected(name) => {
                write!(f, "Worksheet '{name}' is empty or inaccessible; not added")
            }
        }
    }
}

/// Map a classified transport failure to its user-facing category.
impl From<TransportError> for Notice {
    fn from(e: TransportError) -> Self {
        match e {
            TransportError::Unauthorized => Notice::AuthRequired,
            TransportError::Forbidden => Notice::PermissionDenied,
            TransportError::NotFound => Notice::NotFound,
            other => Notice::Transport(other.to_string()),
        }
    }
}

/// Notice sink implemented by frontends (CLI: print lines; tests: collect).
pub trait Notify {
    fn notice(&mut self, _n: Notice) {}
}

/// A no-op sink.
pub struct NullNotify;
impl Notify for NullNotify {}

/// Collects everything; used by tests and the CLI.
#[derive(Default)]
pub struct NoticeLog(pub Vec<Notice>);

impl Notify for NoticeLog {
    fn notice(&mut self, n: Notice) {
        self.0.push(n);
    }
}

// src/params.rs
use std::path::PathBuf;

use crate::export::ExportFormat;

pub const DOCS_BASE: &str = "https://docs.google.com/spreadsheets/d";
pub const API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// The edit page is cheap to serve; the CSV export can be slow on big sheets.
pub const EDIT_TIMEOUT_SECS: u64 = 10;
pub const EXPORT_TIMEOUT_SECS: u64 = 30;
pub const API_TIMEOUT_SECS: u64 = 30;

/// Body prefix that means the export endpoint bounced us to the login shell.
pub const HTML_SHELL_PREFIX: &str = "<!DOCTYPE html>";

/// Synthetic provenance column stamped on every normalized row.
pub const SOURCE_COL: &str = "_source_sheet";

pub const MIN_HEADER_ROW: usize = 1;
pub const MAX_HEADER_ROW: usize = 10;

pub const DEFAULT_OUT_DIR: &str = "out";
pub const EXPORT_TAB_NAME: &str = "Combined";

/// Which worksheet(s) the CLI should add from the resolved document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WorksheetPick {
    ByName(String),
    ByGid(String),
}

#[derive(Clone)]
pub struct Params {
    pub url: Option<String>,         // spreadsheet URL to resolve
    pub picks: Vec<WorksheetPick>,   // empty = every listed worksheet
    pub header_row: usize,           // 1-based, 1..=10
    pub name: Option<String>,        // custom display name (single pick only)
    pub out: Option<PathBuf>,        // output path; default is timestamped
    pub format: ExportFormat,
    pub list_only: bool,             // print the worksheet directory and exit
    pub json_summary: bool,          // print summary() as JSON after combining
    pub token: Option<String>,       // pre-obtained OAuth access token
}

impl Params {
    pub fn new() -> Self {
        Self {
            url: None,
            picks: Vec::new(),
            header_row: MIN_HEADER_ROW,
            name: None,
            out: None,
            format: ExportFormat::Csv,
            list_only: false,
            json_summary: false,
            token: None,
        }
    }
}

impl Default for Params {
    fn default() -> Self { Self::new() }
}

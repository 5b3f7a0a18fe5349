// src/export.rs
// Export boundary: encode a combined table as CSV or XLSX bytes.
// Delimiter and tab name are fixed constants, not part of the contract.

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use rust_xlsxwriter::Workbook;

use crate::csv::write_row;
use crate::normalize::Table;
use crate::params::{DEFAULT_OUT_DIR, EXPORT_TAB_NAME};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Xlsx,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "xlsx" => Some(ExportFormat::Xlsx),
            _ => None,
        }
    }
}

/// Encode `table` in the requested format.
pub fn encode(table: &Table, format: ExportFormat) -> Result<Vec<u8>, Box<dyn Error>> {
    match format {
        ExportFormat::Csv => Ok(encode_csv(table)),
        ExportFormat::Xlsx => encode_xlsx(table),
    }
}

fn encode_csv(table: &Table) -> Vec<u8> {
    let mut buf: Vec<u8> = Vec::new();
    let _ = write_row(&mut buf, &table.columns, ',');
    for row in &table.rows {
        let _ = write_row(&mut buf, row, ',');
    }
    buf
}

fn encode_xlsx(table: &Table) -> Result<Vec<u8>, Box<dyn Error>> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(EXPORT_TAB_NAME)?;

    for (c, name) in table.columns.iter().enumerate() {
        sheet.write(0, c as u16, name.as_str())?;
    }
    for (r, row) in table.rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            sheet.write((r + 1) as u32, c as u16, cell.as_str())?;
        }
    }

    Ok(workbook.save_to_buffer()?)
}

/// Default output path: `out/combined_sheets_<YYYYMMDD_HHMMSS>.<ext>`.
pub fn default_out_path(format: ExportFormat) -> PathBuf {
    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    PathBuf::from(DEFAULT_OUT_DIR)
        .join(format!("combined_sheets_{stamp}.{}", format.extension()))
}

/// Encode and write to `path`, creating parent directories as needed.
/// Returns the path written to.
pub fn write_export(
    path: &Path,
    table: &Table,
    format: ExportFormat,
) -> Result<PathBuf, Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let bytes = encode(table, format)?;
    fs::write(path, bytes)?;
    logf!("export: wrote {}", path.display());
    Ok(path.to_path_buf())
}

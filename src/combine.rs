// src/combine.rs
// Session-scoped holder of acquired worksheets and their derived union.

use serde::Serialize;

use crate::acquire::{grid, WorksheetRef};
use crate::channel::Channel;
use crate::error::SheetError;
use crate::normalize::Table;
use crate::notify::{Notice, Notify};
use crate::resolve::SpreadsheetId;

/// One worksheet the user committed to the combination.
#[derive(Clone, Debug)]
pub struct AcquiredSheet {
    pub id: SpreadsheetId,
    pub worksheet: WorksheetRef,
    pub display_name: String,
    pub header_row: usize,
    pub table: Table,
}

#[derive(Debug, Serialize)]
pub struct SheetStat {
    pub name: String,
    pub rows: usize,
    pub header_row: usize,
}

/// Pure projection over current state; recomputed on every call.
#[derive(Debug, Serialize)]
pub struct Summary {
    pub columns: Vec<String>,
    pub total_rows: usize,
    pub total_columns: usize,
    pub sheets: Vec<SheetStat>,
}

/// Ordered collection of acquired sheets.
///
/// The combined table is a derived view, never a second source of truth:
/// `combine()` rebuilds it from scratch each call, so the same sheet set
/// always yields the same result.
#[derive(Default)]
pub struct Combiner {
    sheets: Vec<AcquiredSheet>,
    combined: Option<Table>,
}

impl Combiner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sheets(&self) -> &[AcquiredSheet] {
        &self.sheets
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Fetch one worksheet and append it to the collection.
    ///
    /// A worksheet that produced no data rows is never retained: the add is
    /// rejected with [`SheetError::EmptySheet`] and the sheet list is left
    /// unchanged.
    pub fn add(
        &mut self,
        id: &SpreadsheetId,
        worksheet: &WorksheetRef,
        header_row: usize,
        display_name: Option<String>,
        channel: Option<&dyn Channel>,
        notify: &mut dyn Notify,
    ) -> Result<&AcquiredSheet, SheetError> {
        let table = grid::fetch_grid(id, worksheet, header_row, channel, notify)?;

        if table.is_empty() {
            notify.notice(Notice::SheetRejected(worksheet.name.clone()));
            return Err(SheetError::EmptySheet(worksheet.name.clone()));
        }

        let display_name = display_name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| worksheet.name.clone());

        logf!("combiner: added '{display_name}' ({} rows)", table.rows.len());
        self.sheets.push(AcquiredSheet {
            id: id.clone(),
            worksheet: worksheet.clone(),
            display_name,
            header_row,
            table,
        });
        let last = self.sheets.len() - 1;
        Ok(&self.sheets[last])
    }

    /// Remove by ordinal position; later sheets shift down by one.
    /// Positions are not stable handles — don't cache them across removals.
    pub fn remove(&mut self, position: usize) -> Option<AcquiredSheet> {
        if position < self.sheets.len() {
            Some(self.sheets.remove(position))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.sheets.clear();
        self.combined = None;
    }

    /// Concatenate all sheets, in insertion order, over the union of their
    /// columns (first-seen order). Cells for a column a sheet lacks are
    /// explicit empty strings.
    pub fn combine(&mut self) -> Result<&Table, SheetError> {
        if self.sheets.is_empty() {
            return Err(SheetError::NoSheets);
        }

        let columns = self.union_columns();
        let mut rows = Vec::with_capacity(self.sheets.iter().map(|s| s.table.rows.len()).sum());

        for sheet in &self.sheets {
            // union position → position in this sheet (if present)
            let map: Vec<Option<usize>> = columns
                .iter()
                .map(|c| sheet.table.columns.iter().position(|sc| sc == c))
                .collect();

            for row in &sheet.table.rows {
                rows.push(
                    map.iter()
                        .map(|p| p.map(|i| row[i].clone()).unwrap_or_default())
                        .collect(),
                );
            }
        }

        Ok(self.combined.insert(Table { columns, rows }))
    }

    pub fn summary(&self) -> Summary {
        let columns = self.union_columns();
        Summary {
            total_rows: self.sheets.iter().map(|s| s.table.rows.len()).sum(),
            total_columns: columns.len(),
            sheets: self
                .sheets
                .iter()
                .map(|s| SheetStat {
                    name: s.display_name.clone(),
                    rows: s.table.rows.len(),
                    header_row: s.header_row,
                })
                .collect(),
            columns,
        }
    }

    // First-seen column union across sheets. Linear scan per name; sheet
    // counts are tiny.
    fn union_columns(&self) -> Vec<String> {
        let mut cols: Vec<String> = Vec::new();
        for sheet in &self.sheets {
            for c in &sheet.table.columns {
                if !cols.contains(c) {
                    cols.push(c.clone());
                }
            }
        }
        cols
    }
}

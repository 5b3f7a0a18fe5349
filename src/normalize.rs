// src/normalize.rs
//! Grid → rectangular table normalization.
//!
//! Deterministic and pure: pad ragged rows, pick the header row, make the
//! header names unique and non-empty, stamp every row with its provenance.
//! The caller decides what an empty result means.

use std::collections::HashMap;

use crate::params::SOURCE_COL;

/// Rectangular table: unique column names plus rows of exactly that width.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell lookup by column name (positional under the hood).
    pub fn value(&self, row: usize, column: &str) -> Option<&str> {
        let c = self.columns.iter().position(|col| col == column)?;
        self.rows.get(row)?.get(c).map(String::as_str)
    }
}

/// Normalize a ragged grid into a [`Table`].
///
/// `header_row` is 1-based and user-chosen; a value past the end of the
/// grid clamps to row 1 (the caller surfaces the correction notice, see
/// [`header_row_clamps`]). Rows above the header row are dropped. An empty
/// grid yields a table with zero columns and zero rows — not an error.
pub fn normalize(grid: Vec<Vec<String>>, header_row: usize, provenance: &str) -> Table {
    if grid.is_empty() {
        return Table::default();
    }

    let max_cols = grid.iter().map(Vec::len).max().unwrap_or(0);
    let mut padded = grid;
    for row in &mut padded {
        row.resize(max_cols, s!());
    }

    let mut header_idx = header_row.saturating_sub(1);
    if header_idx >= padded.len() {
        header_idx = 0;
    }

    let mut columns = dedupe_headers(&padded[header_idx]);
    columns.push(s!(SOURCE_COL));

    let mut rows: Vec<Vec<String>> = padded.into_iter().skip(header_idx + 1).collect();
    for row in &mut rows {
        row.push(s!(provenance));
    }

    Table { columns, rows }
}

/// True when `normalize` would fall back to row 1 for this grid.
pub fn header_row_clamps(grid_rows: usize, header_row: usize) -> bool {
    grid_rows > 0 && header_row > grid_rows
}

/// Blank/whitespace-only headers become `Column_<1-based-position>`; each
/// repeat of an already-seen name gets a `_<n>` suffix counting prior
/// duplicates. `["A","A","","A"]` → `["A","A_1","Column_3","A_2"]`.
pub fn dedupe_headers(raw: &[String]) -> Vec<String> {
    let mut out = Vec::with_capacity(raw.len());
    let mut seen: HashMap<String, usize> = HashMap::new();

    for (i, h) in raw.iter().enumerate() {
        let base = if h.trim().is_empty() {
            format!("Column_{}", i + 1)
        } else {
            h.clone()
        };
        match seen.get_mut(&base) {
            Some(n) => {
                *n += 1;
                out.push(format!("{}_{}", base, n));
            }
            None => {
                seen.insert(base.clone(), 0);
                out.push(base);
            }
        }
    }

    out
}

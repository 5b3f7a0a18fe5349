// src/acquire/grid.rs
// Grid fetcher: pull one worksheet's cells and normalize them.

use std::time::Duration;

use crate::channel::Channel;
use crate::core::net;
use crate::csv;
use crate::error::SheetError;
use crate::normalize::{self, Table};
use crate::notify::{Notice, Notify};
use crate::params::{DOCS_BASE, EXPORT_TIMEOUT_SECS, HTML_SHELL_PREFIX};
use crate::resolve::SpreadsheetId;

use super::WorksheetRef;

/// Fetch the cell grid of one worksheet and return it normalized.
///
/// Channel present → full value range for the named worksheet. Absent →
/// public CSV export by gid; a body that is the site's HTML shell fails
/// with [`SheetError::NotPubliclyAccessible`] (the one fetch failure that
/// is an error rather than a notice, because the remedy is "authenticate").
/// Transport failures degrade to an empty table plus a classified notice.
pub fn fetch_grid(
    id: &SpreadsheetId,
    worksheet: &WorksheetRef,
    header_row: usize,
    channel: Option<&dyn Channel>,
    notify: &mut dyn Notify,
) -> Result<Table, SheetError> {
    let grid = match channel {
        Some(ch) => fetch_via_api(id, worksheet, ch, notify),
        None => fetch_via_export(id, worksheet, notify)?,
    };

    if grid.is_empty() {
        notify.notice(Notice::EmptySheet(worksheet.name.clone()));
        return Ok(Table::default());
    }

    if normalize::header_row_clamps(grid.len(), header_row) {
        notify.notice(Notice::HeaderRowClamped { requested: header_row });
    }

    Ok(normalize::normalize(grid, header_row, &provenance(id, worksheet)))
}

/// Provenance string stamped on every row of this worksheet.
pub fn provenance(id: &SpreadsheetId, worksheet: &WorksheetRef) -> String {
    if worksheet.name.is_empty() {
        format!("Sheet_{id}_gid{}", worksheet.gid)
    } else {
        worksheet.name.clone()
    }
}

fn fetch_via_api(
    id: &SpreadsheetId,
    worksheet: &WorksheetRef,
    channel: &dyn Channel,
    notify: &mut dyn Notify,
) -> Vec<Vec<String>> {
    // Bare worksheet name quoted as an A1 range selects the whole tab.
    let range = if worksheet.name.is_empty() {
        s!("Sheet1")
    } else {
        format!("'{}'", worksheet.name)
    };

    match channel.get_values(id, &range) {
        Ok(values) => values,
        Err(e) => {
            loge!("grid: API values failed for {id} range {range}: {e}");
            notify.notice(Notice::from(e));
            Vec::new()
        }
    }
}

fn fetch_via_export(
    id: &SpreadsheetId,
    worksheet: &WorksheetRef,
    notify: &mut dyn Notify,
) -> Result<Vec<Vec<String>>, SheetError> {
    let url = format!("{DOCS_BASE}/{id}/export?format=csv&gid={}", worksheet.gid);

    let body = match net::http_get(&url, Duration::from_secs(EXPORT_TIMEOUT_SECS)) {
        Ok(body) => body,
        Err(e) => {
            loge!("grid: public export failed for {id} gid {}: {e}", worksheet.gid);
            notify.notice(Notice::from(e));
            return Ok(Vec::new());
        }
    };

    grid_from_export_body(&body)
}

/// Turn a public export response body into a raw grid. A body that is the
/// site's HTML shell instead of CSV means the document is private.
pub fn grid_from_export_body(body: &str) -> Result<Vec<Vec<String>>, SheetError> {
    if body.trim_start().starts_with(HTML_SHELL_PREFIX) {
        return Err(SheetError::NotPubliclyAccessible);
    }
    Ok(csv::parse_rows(body, ','))
}

// src/acquire/directory.rs
// Worksheet directory: enumerate the tabs of a resolved document.

use std::time::Duration;

use crate::channel::Channel;
use crate::core::{net, scan};
use crate::notify::{ChannelKind, Notice, Notify};
use crate::params::{DOCS_BASE, EDIT_TIMEOUT_SECS};
use crate::resolve::SpreadsheetId;

use super::WorksheetRef;

/// List the worksheets of `id`, in document order.
///
/// With a channel: one metadata call, authoritative. Without: scrape the
/// public edit page, best-effort. Failures degrade to an empty list plus a
/// classified notice.
pub fn list_worksheets(
    id: &SpreadsheetId,
    channel: Option<&dyn Channel>,
    notify: &mut dyn Notify,
) -> Vec<WorksheetRef> {
    match channel {
        Some(ch) => list_via_api(id, ch, notify),
        None => list_via_public_page(id, notify),
    }
}

fn list_via_api(
    id: &SpreadsheetId,
    channel: &dyn Channel,
    notify: &mut dyn Notify,
) -> Vec<WorksheetRef> {
    match channel.get_metadata(id) {
        Ok(meta) => {
            let refs: Vec<WorksheetRef> = meta
                .sheets
                .iter()
                .map(|s| WorksheetRef::new(s.properties.sheet_id.to_string(), &s.properties.title))
                .collect();

            if refs.is_empty() {
                // document exists but reports no tabs; distinct from not-found
                notify.notice(Notice::NoWorksheets);
            } else {
                logf!("directory: {} worksheets via API for {id}", refs.len());
                notify.notice(Notice::Listed { count: refs.len(), channel: ChannelKind::Api });
            }
            refs
        }
        Err(e) => {
            loge!("directory: API metadata failed for {id}: {e}");
            notify.notice(Notice::from(e));
            Vec::new()
        }
    }
}

fn list_via_public_page(id: &SpreadsheetId, notify: &mut dyn Notify) -> Vec<WorksheetRef> {
    let url = format!("{DOCS_BASE}/{id}/edit");
    let doc = match net::http_get(&url, Duration::from_secs(EDIT_TIMEOUT_SECS)) {
        Ok(body) => body,
        Err(e) => {
            loge!("directory: public fetch failed for {id}: {e}");
            notify.notice(Notice::from(e));
            return Vec::new();
        }
    };

    let found = scrape_worksheets(&doc);
    if found.is_empty() {
        // Could be a private sheet, could be a page-structure change.
        // Guess the spreadsheet default rather than returning nothing.
        logf!("directory: all scrape patterns missed for {id}; guessing Sheet1");
        notify.notice(Notice::GuessedDefaultWorksheet);
        return vec![WorksheetRef::new("0", "Sheet1")];
    }

    logf!("directory: {} worksheets via public page for {id}", found.len());
    notify.notice(Notice::Listed { count: found.len(), channel: ChannelKind::Public });
    found
}

/// Extract worksheet `(name, gid)` pairs from a public edit page body.
///
/// The page embeds worksheet metadata as JSON in several historical shapes;
/// patterns are tried in fixed priority order and the first that yields
/// anything wins. Heuristic by design — the page structure is undocumented
/// and this is only reproduced as best-effort.
pub fn scrape_worksheets(doc: &str) -> Vec<WorksheetRef> {
    const ID_KEY: &str = r#","sheetId":"#;
    const NAME_KEYS: [&str; 3] = [r#""sheetName":""#, r#""title":""#, r#""name":""#];

    for name_key in NAME_KEYS {
        let pairs = scan::pairs_name_then_id(doc, name_key, ID_KEY);
        if !pairs.is_empty() {
            return to_refs(pairs);
        }
    }

    // Reversed field order: {"properties":{"sheetId":N,"title":"…"
    let pairs = scan::pairs_id_then_name(doc, r#"{"properties":{"sheetId":"#, r#","title":""#);
    to_refs(pairs)
}

fn to_refs(pairs: Vec<(String, String)>) -> Vec<WorksheetRef> {
    pairs
        .into_iter()
        .map(|(name, gid)| WorksheetRef::new(gid, name))
        .collect()
}

// src/core/scan.rs
//
// Literal text-scanning helpers for embedded-JSON shapes. The public edit
// page inlines worksheet metadata as JSON fragments; we scan for known
// literal key shapes rather than compiling full-document regexes.

/// Collect every `(name, digits)` pair where `doc` contains
/// `<name_key>NAME"<id_key>DIGITS` — e.g. name_key = `"sheetName":"` and
/// id_key = `,"sheetId":`. The name runs to the next `"`; the id is a
/// maximal ASCII digit run. Pairs with an empty side are skipped.
pub fn pairs_name_then_id(doc: &str, name_key: &str, id_key: &str) -> Vec<(String, String)> {
    let mut out = Vec::new();
    let mut pos = 0usize;

    while let Some(rel) = doc[pos..].find(name_key) {
        let name_start = pos + rel + name_key.len();
        let Some(q) = doc[name_start..].find('"') else { break };
        let name = &doc[name_start..name_start + q];

        // resume after the closing quote whether or not the id follows
        pos = name_start + q + 1;

        if !doc[pos..].starts_with(id_key) {
            continue;
        }
        let digits = leading_digits(&doc[pos + id_key.len()..]);
        if !name.is_empty() && !digits.is_empty() {
            out.push((name.to_string(), digits));
        }
    }

    out
}

/// Collect every `(name, digits)` pair where `doc` contains
/// `<id_key>DIGITS<name_key>NAME"` — the reversed field order, e.g.
/// id_key = `{"properties":{"sheetId":` and name_key = `,"title":"`.
pub fn pairs_id_then_name(doc: &str, id_key: &str, name_key: &str) -> Vec<(String, String)> {
    let mut out = Vec::new();
    let mut pos = 0usize;

    while let Some(rel) = doc[pos..].find(id_key) {
        let digits_start = pos + rel + id_key.len();
        let digits = leading_digits(&doc[digits_start..]);
        pos = digits_start;
        if digits.is_empty() {
            continue;
        }

        let after_digits = digits_start + digits.len();
        if !doc[after_digits..].starts_with(name_key) {
            continue;
        }
        let name_start = after_digits + name_key.len();
        let Some(q) = doc[name_start..].find('"') else { break };
        let name = &doc[name_start..name_start + q];
        pos = name_start + q + 1;

        if !name.is_empty() {
            out.push((name.to_string(), digits));
        }
    }

    out
}

fn leading_digits(s: &str) -> String {
    s.chars().take_while(|c| c.is_ascii_digit()).collect()
}

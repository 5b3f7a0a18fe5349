// tests/normalize_table.rs
//
// Table normalizer: padding, header selection, dedup, provenance.
//
use sheet_merge::normalize::{dedupe_headers, header_row_clamps, normalize};

fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|r| r.iter().map(|c| c.to_string()).collect())
        .collect()
}

fn headers(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

#[test]
fn ragged_rows_are_padded_to_longest() {
    let g = grid(&[
        &["H1", "H2", "H3"],
        &["a"],
        &["b", "c"],
        &["d", "e", "f"],
    ]);
    let t = normalize(g, 1, "src");

    // 3 data columns + _source_sheet
    assert_eq!(t.columns.len(), 4);
    for row in &t.rows {
        assert_eq!(row.len(), t.columns.len());
    }
    assert_eq!(t.value(0, "H2"), Some(""));
    assert_eq!(t.value(1, "H2"), Some("c"));
}

#[test]
fn basic_scenario_with_provenance() {
    let g = grid(&[&["Name", "Age"], &["Bob", "30"], &["Ann", "28"]]);
    let t = normalize(g, 1, "S1");

    assert_eq!(t.columns, vec!["Name", "Age", "_source_sheet"]);
    assert_eq!(t.rows.len(), 2);
    assert_eq!(t.value(0, "Name"), Some("Bob"));
    assert_eq!(t.value(1, "Age"), Some("28"));
    assert_eq!(t.value(0, "_source_sheet"), Some("S1"));
    assert_eq!(t.value(1, "_source_sheet"), Some("S1"));
}

#[test]
fn header_row_two_drops_leading_rows() {
    let g = grid(&[&["junk", "junk"], &["Name", "Age"], &["Bob", "30"]]);
    let t = normalize(g, 2, "S1");

    assert_eq!(t.columns, vec!["Name", "Age", "_source_sheet"]);
    assert_eq!(t.rows.len(), 1);
    assert_eq!(t.value(0, "Name"), Some("Bob"));
}

#[test]
fn header_row_past_end_clamps_to_row_one() {
    let g = grid(&[&["Name", "Age"], &["Bob", "30"]]);
    assert!(header_row_clamps(2, 5));

    let t = normalize(g, 5, "S1");
    assert_eq!(t.columns, vec!["Name", "Age", "_source_sheet"]);
    assert_eq!(t.rows.len(), 1);
}

#[test]
fn in_range_header_row_does_not_clamp() {
    assert!(!header_row_clamps(3, 3));
    assert!(!header_row_clamps(3, 1));
    // empty grids never clamp; they normalize to the empty table
    assert!(!header_row_clamps(0, 4));
}

#[test]
fn empty_grid_yields_empty_table_not_error() {
    let t = normalize(Vec::new(), 1, "S1");
    assert!(t.columns.is_empty());
    assert!(t.rows.is_empty());
}

#[test]
fn duplicate_and_blank_headers_get_suffixes() {
    let out = dedupe_headers(&headers(&["A", "A", "", "A"]));
    assert_eq!(out, vec!["A", "A_1", "Column_3", "A_2"]);
}

#[test]
fn dedup_is_idempotent_on_unique_names() {
    let unique = headers(&["Name", "Age", "City"]);
    assert_eq!(dedupe_headers(&unique), unique);

    let once = dedupe_headers(&headers(&["X", "X"]));
    assert_eq!(dedupe_headers(&once), once);
}

#[test]
fn whitespace_only_header_counts_as_blank() {
    let out = dedupe_headers(&headers(&["  ", "B"]));
    assert_eq!(out, vec!["Column_1", "B"]);
}

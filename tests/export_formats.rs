// tests/export_formats.rs
//
// CSV parse/write behavior and the export boundary.
//
use sheet_merge::csv::{parse_rows, write_row};
use sheet_merge::export::{default_out_path, encode, ExportFormat};
use sheet_merge::normalize::Table;

fn demo_table() -> Table {
    Table {
        columns: vec!["Name".into(), "Note".into(), "_source_sheet".into()],
        rows: vec![
            vec!["Bob".into(), "says \"hi\", loudly".into(), "S1".into()],
            vec!["Ann".into(), "".into(), "S1".into()],
        ],
    }
}

/* ---------------- Parsing ---------------- */

#[test]
fn parses_quotes_and_embedded_separators() {
    let rows = parse_rows("a,\"b,c\",\"d\"\"e\"\n1,2,3\n", ',');
    assert_eq!(rows, vec![
        vec!["a".to_string(), "b,c".into(), "d\"e".into()],
        vec!["1".to_string(), "2".into(), "3".into()],
    ]);
}

#[test]
fn tolerates_crlf_line_endings() {
    let rows = parse_rows("a,b\r\nc,d\r\n", ',');
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1], vec!["c".to_string(), "d".into()]);
}

#[test]
fn trailing_newline_adds_no_phantom_row() {
    assert_eq!(parse_rows("a,b\n", ',').len(), 1);
    assert_eq!(parse_rows("a,b", ',').len(), 1);
}

#[test]
fn blank_lines_are_skipped() {
    let rows = parse_rows("a,b\n\n\nc,d\n", ',');
    assert_eq!(rows.len(), 2);
}

#[test]
fn empty_body_parses_to_no_rows() {
    assert!(parse_rows("", ',').is_empty());
}

#[test]
fn newline_inside_quotes_stays_in_the_field() {
    let rows = parse_rows("\"a\nb\",c\n", ',');
    assert_eq!(rows, vec![vec!["a\nb".to_string(), "c".into()]]);
}

/* ---------------- Writing ---------------- */

#[test]
fn write_row_quotes_only_when_needed() {
    let mut buf: Vec<u8> = Vec::new();
    let row = vec!["plain".to_string(), "with,comma".into(), "with\"quote".into()];
    write_row(&mut buf, &row, ',').unwrap();
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "plain,\"with,comma\",\"with\"\"quote\"\n"
    );
}

/* ---------------- Export boundary ---------------- */

#[test]
fn csv_export_round_trips_through_the_parser() {
    let t = demo_table();
    let bytes = encode(&t, ExportFormat::Csv).unwrap();
    let text = String::from_utf8(bytes).unwrap();

    let rows = parse_rows(&text, ',');
    assert_eq!(rows[0], t.columns);
    assert_eq!(rows[1][1], "says \"hi\", loudly");
    assert_eq!(rows.len(), 3);
}

#[test]
fn xlsx_export_produces_a_zip_container() {
    let bytes = encode(&demo_table(), ExportFormat::Xlsx).unwrap();
    // xlsx is a zip archive
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn default_out_path_carries_the_format_extension() {
    let p = default_out_path(ExportFormat::Xlsx);
    assert_eq!(p.extension().unwrap(), "xlsx");
    assert!(p.file_name().unwrap().to_string_lossy().starts_with("combined_sheets_"));

    let p = default_out_path(ExportFormat::Csv);
    assert_eq!(p.extension().unwrap(), "csv");
}

#[test]
fn format_parse_accepts_known_tags_only() {
    assert_eq!(ExportFormat::parse("CSV"), Some(ExportFormat::Csv));
    assert_eq!(ExportFormat::parse("xlsx"), Some(ExportFormat::Xlsx));
    assert_eq!(ExportFormat::parse("ods"), None);
}

// tests/session_flow.rs
//
// Session context: construction, credential state, the add→combine flow.
//
use sheet_merge::acquire::{grid, WorksheetRef};
use sheet_merge::channel::{Channel, SheetEntry, SheetProperties, SpreadsheetMeta};
use sheet_merge::error::{SheetError, TransportError};
use sheet_merge::notify::NoticeLog;
use sheet_merge::resolve::{extract_id, SpreadsheetId};
use sheet_merge::session::Session;

struct OneTabChannel;

impl Channel for OneTabChannel {
    fn get_metadata(&self, _id: &SpreadsheetId) -> Result<SpreadsheetMeta, TransportError> {
        Ok(SpreadsheetMeta {
            sheets: vec![SheetEntry {
                properties: SheetProperties { sheet_id: 99, title: "Ledger".into() },
            }],
        })
    }

    fn get_values(
        &self,
        _id: &SpreadsheetId,
        range: &str,
    ) -> Result<Vec<Vec<String>>, TransportError> {
        assert_eq!(range, "'Ledger'");
        Ok(vec![
            vec!["Item".into(), "Cost".into()],
            vec!["Pen".into(), "2".into()],
        ])
    }
}

fn doc_id() -> SpreadsheetId {
    extract_id("https://docs.google.com/spreadsheets/d/sessiondoc/edit").unwrap()
}

#[test]
fn full_flow_list_add_combine() {
    let mut session = Session::with_channel(Box::new(OneTabChannel));
    assert!(session.has_channel());

    let id = doc_id();
    let mut log = NoticeLog::default();
    let listing = session.list_worksheets(&id, &mut log);
    assert_eq!(listing, vec![WorksheetRef::new("99", "Ledger")]);

    session.add_sheet(&id, &listing[0], 1, None, &mut log).unwrap();
    let summary = session.summary();
    assert_eq!(summary.total_rows, 1);
    assert_eq!(summary.sheets[0].name, "Ledger");

    let combined = session.combine().unwrap();
    assert_eq!(combined.columns, vec!["Item", "Cost", "_source_sheet"]);
    assert_eq!(combined.value(0, "_source_sheet"), Some("Ledger"));
}

#[test]
fn clear_resets_sheets_but_keeps_the_credential() {
    let mut session = Session::with_channel(Box::new(OneTabChannel));
    let id = doc_id();
    let mut log = NoticeLog::default();
    session
        .add_sheet(&id, &WorksheetRef::new("99", "Ledger"), 1, None, &mut log)
        .unwrap();

    session.clear();
    assert!(session.has_channel());
    assert!(matches!(session.combine(), Err(SheetError::NoSheets)));
}

#[test]
fn disconnect_drops_the_channel() {
    let mut session = Session::with_channel(Box::new(OneTabChannel));
    session.disconnect();
    assert!(!session.has_channel());
}

#[test]
fn remove_via_session_reports_success() {
    let mut session = Session::with_channel(Box::new(OneTabChannel));
    let id = doc_id();
    let mut log = NoticeLog::default();
    session
        .add_sheet(&id, &WorksheetRef::new("99", "Ledger"), 1, None, &mut log)
        .unwrap();

    assert!(session.remove_sheet(0));
    assert!(!session.remove_sheet(0));
}

#[test]
fn provenance_falls_back_to_id_and_gid_when_unnamed() {
    let id = doc_id();
    assert_eq!(grid::provenance(&id, &WorksheetRef::new("5", "")), "Sheet_sessiondoc_gid5");
    assert_eq!(grid::provenance(&id, &WorksheetRef::new("5", "Tab")), "Tab");
}

// tests/grid_body.rs
//
// Public export bodies: CSV parses to a grid, the login HTML shell is the
// one fetch failure that surfaces as an error ("authenticate" is the
// remedy, not "skip this sheet").
//
use sheet_merge::acquire::grid::grid_from_export_body;
use sheet_merge::error::SheetError;

#[test]
fn csv_body_parses_to_a_grid() {
    let grid = grid_from_export_body("Name,Age\nBob,30\n").unwrap();
    assert_eq!(grid, vec![
        vec!["Name".to_string(), "Age".into()],
        vec!["Bob".to_string(), "30".into()],
    ]);
}

#[test]
fn html_shell_body_is_not_publicly_accessible() {
    let body = "<!DOCTYPE html><html><head><title>Google Sheets</title></head>\
                <body>Sign in to continue</body></html>";
    let err = grid_from_export_body(body).unwrap_err();
    assert!(matches!(err, SheetError::NotPubliclyAccessible));
}

#[test]
fn shell_detection_tolerates_leading_whitespace() {
    let err = grid_from_export_body("\n  <!DOCTYPE html><html></html>").unwrap_err();
    assert!(matches!(err, SheetError::NotPubliclyAccessible));
}

#[test]
fn quoted_doctype_inside_a_cell_is_still_csv() {
    // only a body *starting* with the shell prefix counts
    let grid = grid_from_export_body("Note\n\"<!DOCTYPE html> is markup\"\n").unwrap();
    assert_eq!(grid[1][0], "<!DOCTYPE html> is markup");
}

#[test]
fn empty_body_yields_an_empty_grid_not_an_error() {
    assert!(grid_from_export_body("").unwrap().is_empty());
}

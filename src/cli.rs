// src/cli.rs
use std::env;
use std::path::PathBuf;

use crate::acquire::WorksheetRef;
use crate::error::SheetError;
use crate::export::{self, ExportFormat};
use crate::notify::{Notice, Notify, Severity};
use crate::params::{Params, WorksheetPick, MAX_HEADER_ROW, MIN_HEADER_ROW};
use crate::resolve;
use crate::session::Session;

/// Prints notices as they arrive, prefixed by severity.
struct PrintNotify;

impl Notify for PrintNotify {
    fn notice(&mut self, n: Notice) {
        match n.severity() {
            Severity::Info => println!("{n}"),
            Severity::Warning => eprintln!("Warning: {n}"),
            Severity::Error => eprintln!("Error: {n}"),
        }
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;

    let url = params.url.as_deref().ok_or("Missing --url <spreadsheet url>")?;
    let id = resolve::extract_id(url)?;

    let mut session = match params.token.as_deref() {
        Some(token) => Session::with_channel(Box::new(crate::channel::RestChannel::new(token))),
        None => Session::new(),
    };

    let mut notify = PrintNotify;
    let listing = session.list_worksheets(&id, &mut notify);

    if params.list_only {
        for ws in &listing {
            println!("{},{}", ws.gid, ws.name);
        }
        return Ok(());
    }
    if listing.is_empty() {
        return Err("No worksheets available; check the URL and permissions".into());
    }

    let chosen = resolve_picks(&params.picks, &listing, session.has_channel())?;
    let custom_name = if chosen.len() == 1 { params.name.clone() } else { None };

    let mut added = 0usize;
    for ws in &chosen {
        match session.add_sheet(&id, ws, params.header_row, custom_name.clone(), &mut notify) {
            Ok(()) => added += 1,
            // skip the bad worksheet, keep the session going
            Err(SheetError::EmptySheet(_)) => {}
            Err(e) => eprintln!("Error: {e}"),
        }
    }
    if added == 0 {
        return Err("No worksheets produced any data".into());
    }

    let summary = session.summary();
    let combined = session.combine()?;

    let out = params
        .out
        .clone()
        .unwrap_or_else(|| export::default_out_path(params.format));
    let written = export::write_export(&out, combined, params.format)?;

    if params.json_summary {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "Combined {} sheets: {} rows x {} columns -> {}",
            summary.sheets.len(),
            summary.total_rows,
            summary.total_columns,
            written.display()
        );
    }
    Ok(())
}

/// Match picks against the directory listing. Empty picks = every worksheet.
///
/// A gid missing from a *public* listing is still attempted blind — the
/// scrape is best-effort and the export endpoint takes the gid verbatim.
/// Under an authenticated channel the listing is authoritative and the API
/// addresses tabs by title, so a missing gid is a hard error rather than a
/// silent fetch of the wrong tab.
pub fn resolve_picks(
    picks: &[WorksheetPick],
    listing: &[WorksheetRef],
    authenticated: bool,
) -> Result<Vec<WorksheetRef>, Box<dyn std::error::Error>> {
    if picks.is_empty() {
        return Ok(listing.to_vec());
    }

    let mut out = Vec::with_capacity(picks.len());
    for pick in picks {
        let found = match pick {
            WorksheetPick::ByName(name) => listing.iter().find(|w| &w.name == name),
            WorksheetPick::ByGid(gid) => listing.iter().find(|w| &w.gid == gid),
        };
        match (found, pick) {
            (Some(w), _) => out.push(w.clone()),
            (None, WorksheetPick::ByGid(gid)) if !authenticated => {
                out.push(WorksheetRef::new(gid.clone(), ""));
            }
            (None, WorksheetPick::ByGid(gid)) => {
                return Err(format!("Worksheet with gid {} not found", gid).into());
            }
            (None, WorksheetPick::ByName(name)) => {
                return Err(format!("Worksheet not found: {}", name).into());
            }
        }
    }
    Ok(out)
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "-u" | "--url" => {
                params.url = Some(args.next().ok_or("Missing value for --url")?);
            }
            "-s" | "--sheet" => {
                let v = args.next().ok_or("Missing value for --sheet")?;
                params.picks.push(WorksheetPick::ByName(v));
            }
            "--gid" => {
                let v = args.next().ok_or("Missing value for --gid")?;
                if !v.chars().all(|c| c.is_ascii_digit()) {
                    return Err(format!("Invalid gid: {}", v).into());
                }
                params.picks.push(WorksheetPick::ByGid(v));
            }
            "--header-row" => {
                let v: usize = args.next().ok_or("Missing value for --header-row")?.parse()?;
                if !(MIN_HEADER_ROW..=MAX_HEADER_ROW).contains(&v) {
                    return Err(format!(
                        "Header row out of range ({}..={})",
                        MIN_HEADER_ROW, MAX_HEADER_ROW
                    )
                    .into());
                }
                params.header_row = v;
            }
            "-n" | "--name" => params.name = Some(args.next().ok_or("Missing value for --name")?),
            "-o" | "--out" => {
                params.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?));
            }
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.format = ExportFormat::parse(&v)
                    .ok_or_else(|| format!("Unknown format: {}", v))?;
            }
            "--token" => params.token = Some(args.next().ok_or("Missing value for --token")?),
            "--list" => params.list_only = true,
            "--json" => params.json_summary = true,
            "-h" | "--help" => {
                eprintln!("{}", include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }
    Ok(())
}

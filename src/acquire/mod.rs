// src/acquire/mod.rs
//! # Acquisition channels
//!
//! This module hosts the two ways of reaching remote worksheet data and the
//! strict priority between them: the **authenticated metadata/value channel**
//! whenever a credential is held, otherwise the **unauthenticated public
//! fallback** (edit-page scrape for the directory, CSV export for grids).
//! Exactly one channel is tried per operation, never both.
//!
//! ## Conventions & invariants
//! - Remote failures are classified (auth required / permission denied /
//!   not found / generic) and **degrade to an empty result plus a
//!   [`Notice`](crate::notify::Notice)**; they never unwind past this module.
//!   One bad worksheet must never abort a multi-sheet session.
//! - The public channel scrapes undocumented page structure and is
//!   best-effort by design. When every pattern misses it guesses a lone
//!   `Sheet1` rather than returning nothing.
//! - Scrape extraction is testable **offline** against captured page
//!   fragments; nothing in here caches, persists, or renders.
//!
//! In short: **`acquire` knows how to reach the data.** Deciding what to
//! keep and how to merge it lives with the [`Combiner`](crate::combine).

pub mod directory;
pub mod grid;

/// One worksheet inside a document: the remote's stable integer handle
/// (kept as an opaque string, the export endpoint wants it verbatim) and
/// its display name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorksheetRef {
    pub gid: String,
    pub name: String,
}

impl WorksheetRef {
    pub fn new(gid: impl Into<String>, name: impl Into<String>) -> Self {
        Self { gid: gid.into(), name: name.into() }
    }
}

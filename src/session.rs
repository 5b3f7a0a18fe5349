// src/session.rs
// Explicit session context: one logical actor, no ambient globals.
// Owns the optional credential channel and the Combiner; created empty at
// session start, reset via clear, dropped at session end.

use crate::acquire::{directory, WorksheetRef};
use crate::channel::Channel;
use crate::combine::{Combiner, Summary};
use crate::error::SheetError;
use crate::normalize::Table;
use crate::notify::Notify;
use crate::resolve::SpreadsheetId;

#[derive(Default)]
pub struct Session {
    channel: Option<Box<dyn Channel>>,
    combiner: Combiner,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_channel(channel: Box<dyn Channel>) -> Self {
        Self { channel: Some(channel), combiner: Combiner::new() }
    }

    /* ---------------- Credential state ---------------- */

    pub fn has_channel(&self) -> bool {
        self.channel.is_some()
    }

    pub fn set_channel(&mut self, channel: Box<dyn Channel>) {
        self.channel = Some(channel);
    }

    /// Drop the credential; subsequent operations use the public fallback.
    pub fn disconnect(&mut self) {
        self.channel = None;
    }

    /* ---------------- Operations ---------------- */

    pub fn list_worksheets(
        &self,
        id: &SpreadsheetId,
        notify: &mut dyn Notify,
    ) -> Vec<WorksheetRef> {
        directory::list_worksheets(id, self.channel.as_deref(), notify)
    }

    pub fn add_sheet(
        &mut self,
        id: &SpreadsheetId,
        worksheet: &WorksheetRef,
        header_row: usize,
        display_name: Option<String>,
        notify: &mut dyn Notify,
    ) -> Result<(), SheetError> {
        self.combiner
            .add(id, worksheet, header_row, display_name, self.channel.as_deref(), notify)
            .map(|_| ())
    }

    pub fn remove_sheet(&mut self, position: usize) -> bool {
        self.combiner.remove(position).is_some()
    }

    pub fn combine(&mut self) -> Result<&Table, SheetError> {
        self.combiner.combine()
    }

    pub fn summary(&self) -> Summary {
        self.combiner.summary()
    }

    pub fn combiner(&self) -> &Combiner {
        &self.combiner
    }

    /// Forget every acquired sheet; the credential survives.
    pub fn clear(&mut self) {
        self.combiner.clear();
    }
}

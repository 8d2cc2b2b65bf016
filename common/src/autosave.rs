//! Debounced autosave bookkeeping for the appreciation note.
//!
//! The frontend owns the actual timer. Each edit takes a fresh ticket and
//! restarts the timer with it; when a timer fires it only saves if its ticket
//! is still the latest, so at most one pending save is ever honoured.

use std::fmt;

/// Text of the note's status indicator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SaveIndicator {
    #[default]
    Idle,
    Saving,
    /// Saved at the given local time of day.
    Saved(String),
    Cleared,
    MusicEnabled,
}

impl fmt::Display for SaveIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveIndicator::Idle => Ok(()),
            SaveIndicator::Saving => f.write_str("Saving..."),
            SaveIndicator::Saved(time) => write!(f, "Saved {}", time),
            SaveIndicator::Cleared => f.write_str("Cleared"),
            SaveIndicator::MusicEnabled => f.write_str("Background music enabled"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Default)]
pub struct Autosave {
    issued: u64,
    pending: Option<Ticket>,
}

impl Autosave {
    /// Records an edit. The returned ticket supersedes any earlier one.
    pub fn edit(&mut self) -> Ticket {
        self.issued += 1;
        let ticket = Ticket(self.issued);
        self.pending = Some(ticket);
        ticket
    }

    /// Called when the timer for `ticket` elapses. True when a save is due.
    pub fn elapsed(&mut self, ticket: Ticket) -> bool {
        if self.pending == Some(ticket) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Drops the pending save, e.g. after a manual save or a clear.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    #[cfg(test)]
    fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::stores::NoteStore;

    #[test]
    fn only_the_last_edit_saves() {
        let storage = MemoryStore::new();
        let mut note = NoteStore::load(storage.clone(), "note").unwrap();
        let mut autosave = Autosave::default();

        let mut surface = String::new();
        let mut tickets = Vec::new();
        for word in ["d", "de", "dear"] {
            surface.clear();
            surface.push_str(word);
            tickets.push(autosave.edit());
        }

        // timers fire in order; only the newest is honoured
        for ticket in tickets {
            if autosave.elapsed(ticket) {
                note.save(surface.clone()).unwrap();
            }
        }
        assert_eq!(storage.raw("note").as_deref(), Some("dear"));
        assert!(!autosave.is_pending());
    }

    #[test]
    fn cancel_discards_pending_save() {
        let mut autosave = Autosave::default();
        let ticket = autosave.edit();
        autosave.cancel();
        assert!(!autosave.elapsed(ticket));
    }

    #[test]
    fn indicator_text() {
        assert_eq!(SaveIndicator::Saving.to_string(), "Saving...");
        assert_eq!(
            SaveIndicator::Saved("10:04:05 PM".into()).to_string(),
            "Saved 10:04:05 PM"
        );
        assert_eq!(SaveIndicator::Cleared.to_string(), "Cleared");
        assert_eq!(SaveIndicator::Idle.to_string(), "");
    }
}

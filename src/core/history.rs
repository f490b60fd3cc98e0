use crate::core::grid::HistoryEntry;

/// Checkpoints of the grid plus a cursor at the current one.
///
/// Entries after the cursor form the redo branch. Committing while the cursor
/// is not at the end drops that branch for good.
#[derive(Clone, Debug, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
    cursor: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        History {
            entries: Vec::new(),
            cursor: None,
        }
    }

    /// Rebuilds a history from saved entries, positioned at the most recent one.
    pub fn from_entries(entries: Vec<HistoryEntry>) -> Self {
        let cursor = entries.len().checked_sub(1);
        History { entries, cursor }
    }

    pub fn commit(&mut self, entry: HistoryEntry) {
        let keep = self.cursor.map_or(0, |c| c + 1);
        self.entries.truncate(keep);
        self.entries.push(entry);
        self.cursor = Some(keep);
    }

    /// The entry `undo` would return, without moving the cursor.
    pub fn peek_undo(&self) -> Option<&HistoryEntry> {
        let cursor = self.cursor.filter(|&c| c > 0)?;
        self.entries.get(cursor - 1)
    }

    pub fn peek_redo(&self) -> Option<&HistoryEntry> {
        let next = self.cursor.map_or(0, |c| c + 1);
        self.entries.get(next)
    }

    pub fn undo(&mut self) -> Option<&HistoryEntry> {
        let cursor = self.cursor.filter(|&c| c > 0)? - 1;
        self.cursor = Some(cursor);
        self.entries.get(cursor)
    }

    pub fn redo(&mut self) -> Option<&HistoryEntry> {
        if !self.can_redo() {
            return None;
        }
        let cursor = self.cursor.map_or(0, |c| c + 1);
        self.cursor = Some(cursor);
        self.entries.get(cursor)
    }

    pub fn can_undo(&self) -> bool {
        self.cursor.is_some_and(|c| c > 0)
    }

    pub fn can_redo(&self) -> bool {
        match self.cursor {
            Some(c) => c + 1 < self.entries.len(),
            None => !self.entries.is_empty(),
        }
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn current(&self) -> Option<&HistoryEntry> {
        self.entries.get(self.cursor?)
    }

    pub fn first(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

//! Single-step edit history (undo/redo).
//!
//! History is two optional snapshots, not a stack. Undo and redo each
//! consume their own slot and fill the other one, so exactly one step can
//! be reversed at a time. An empty copy is never kept: a slot that would
//! hold empty text is left vacant, so there is nothing to undo back to.

/// A saved copy of the buffer content.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Snapshot {
    text: String,
}

impl Snapshot {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

/// The undo slot and the redo slot.
#[derive(Debug, Clone, Default)]
pub struct SnapshotSlots {
    undo: Option<Snapshot>,
    redo: Option<Snapshot>,
}

impl SnapshotSlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the undo slot (redo slot is left alone)
    pub fn record_undo(&mut self, text: &str) {
        self.undo = saved(text);
    }

    /// Overwrite the redo slot (undo slot is left alone)
    pub fn record_redo(&mut self, text: &str) {
        self.redo = saved(text);
    }

    /// Take the undo snapshot, saving `current` into the redo slot.
    ///
    /// Returns `None` (and changes nothing) when no undo is available.
    pub fn take_undo(&mut self, current: &str) -> Option<Snapshot> {
        let snapshot = self.undo.take()?;
        self.redo = saved(current);
        Some(snapshot)
    }

    /// Take the redo snapshot, saving `current` into the undo slot.
    ///
    /// Returns `None` (and changes nothing) when no redo is available.
    pub fn take_redo(&mut self, current: &str) -> Option<Snapshot> {
        let snapshot = self.redo.take()?;
        self.undo = saved(current);
        Some(snapshot)
    }

    pub fn can_undo(&self) -> bool {
        self.undo.is_some()
    }

    pub fn can_redo(&self) -> bool {
        self.redo.is_some()
    }

    pub fn undo_snapshot(&self) -> Option<&Snapshot> {
        self.undo.as_ref()
    }

    pub fn redo_snapshot(&self) -> Option<&Snapshot> {
        self.redo.as_ref()
    }

    /// Forget both snapshots
    pub fn clear(&mut self) {
        self.undo = None;
        self.redo = None;
    }
}

/// Empty text leaves the slot vacant
fn saved(text: &str) -> Option<Snapshot> {
    if text.is_empty() {
        None
    } else {
        Some(Snapshot::new(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_slots_are_empty() {
        let slots = SnapshotSlots::new();
        assert!(!slots.can_undo());
        assert!(!slots.can_redo());
    }

    #[test]
    fn test_record_undo_overwrites() {
        let mut slots = SnapshotSlots::new();
        slots.record_undo("first");
        slots.record_undo("second");
        assert_eq!(slots.undo_snapshot().unwrap().as_str(), "second");
        assert!(!slots.can_redo());
    }

    #[test]
    fn test_recording_empty_text_vacates_slot() {
        let mut slots = SnapshotSlots::new();
        slots.record_undo("draft");
        slots.record_redo("draft");

        slots.record_undo("");
        slots.record_redo("");
        assert!(!slots.can_undo());
        assert!(!slots.can_redo());
    }

    #[test]
    fn test_take_undo_from_empty_current_leaves_no_redo() {
        let mut slots = SnapshotSlots::new();
        slots.record_undo("abc");

        let snapshot = slots.take_undo("").unwrap();
        assert_eq!(snapshot.as_str(), "abc");
        assert!(!slots.can_redo());
        assert!(slots.take_redo("abc").is_none());
    }

    #[test]
    fn test_take_redo_from_empty_current_leaves_no_undo() {
        let mut slots = SnapshotSlots::new();
        slots.record_redo("abc");

        assert!(slots.take_redo("").is_some());
        assert!(!slots.can_undo());
    }

    #[test]
    fn test_take_undo_fills_redo() {
        let mut slots = SnapshotSlots::new();
        slots.record_undo("before");

        let snapshot = slots.take_undo("after").unwrap();
        assert_eq!(snapshot.as_str(), "before");
        assert!(!slots.can_undo());
        assert_eq!(slots.redo_snapshot().unwrap().as_str(), "after");
    }

    #[test]
    fn test_take_redo_fills_undo() {
        let mut slots = SnapshotSlots::new();
        slots.record_redo("next");

        let snapshot = slots.take_redo("now").unwrap();
        assert_eq!(snapshot.as_str(), "next");
        assert!(!slots.can_redo());
        assert_eq!(slots.undo_snapshot().unwrap().as_str(), "now");
    }

    #[test]
    fn test_take_when_unavailable_changes_nothing() {
        let mut slots = SnapshotSlots::new();
        slots.record_redo("keep");

        assert!(slots.take_undo("current").is_none());
        assert_eq!(slots.redo_snapshot().unwrap().as_str(), "keep");
        assert!(!slots.can_undo());
    }

    #[test]
    fn test_ping_pong() {
        let mut slots = SnapshotSlots::new();
        slots.record_undo("a");

        let undone = slots.take_undo("b").unwrap();
        assert_eq!(undone.as_str(), "a");
        let redone = slots.take_redo(undone.as_str()).unwrap();
        assert_eq!(redone.as_str(), "b");
        assert_eq!(slots.undo_snapshot().unwrap().as_str(), "a");
        assert!(!slots.can_redo());
    }

    #[test]
    fn test_clear() {
        let mut slots = SnapshotSlots::new();
        slots.record_undo("a");
        slots.record_redo("b");
        slots.clear();
        assert!(!slots.can_undo());
        assert!(!slots.can_redo());
    }
}

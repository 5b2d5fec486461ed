//! The narration log and view-refresh change kinds.

use std::collections::BTreeSet;

/// One narrated line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Narration {
    /// The message text (may be empty for a deliberate blank line).
    pub message: String,
    /// Whether the view should print an extra blank line after this one.
    pub extra_blank_line: bool,
}

/// A category of player state a view may need to refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Change {
    /// The current location changed.
    Location,
    /// Inventory contents changed.
    Inventory,
    /// The quest log changed.
    Quests,
    /// Hit points, gold, experience, level, or equipped weapon changed.
    Stats,
}

/// The set of change kinds accumulated over one action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Changes {
    set: BTreeSet<Change>,
}

impl Changes {
    /// Record a change kind.
    pub fn mark(&mut self, change: Change) {
        self.set.insert(change);
    }

    /// Whether the given kind changed.
    pub fn contains(&self, change: Change) -> bool {
        self.set.contains(&change)
    }

    /// Whether nothing changed.
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Iterate over the recorded kinds, in a fixed order.
    pub fn iter(&self) -> impl Iterator<Item = Change> + '_ {
        self.set.iter().copied()
    }
}

/// The append-only narration channel the engine writes to.
///
/// The engine never blocks on the log; a front-end drains the messages and
/// takes the change set after each action. Message order within one action
/// is significant.
#[derive(Debug, Default)]
pub struct GameLog {
    messages: Vec<Narration>,
    changes: Changes,
}

impl GameLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a narrated line.
    pub fn say(&mut self, message: impl Into<String>) {
        self.messages.push(Narration {
            message: message.into(),
            extra_blank_line: false,
        });
    }

    /// Append a narrated line followed by an extra blank line.
    pub fn say_with_break(&mut self, message: impl Into<String>) {
        self.messages.push(Narration {
            message: message.into(),
            extra_blank_line: true,
        });
    }

    /// Record a change kind for the view.
    pub fn mark(&mut self, change: Change) {
        self.changes.mark(change);
    }

    /// Take all pending messages, leaving the log empty.
    pub fn drain_messages(&mut self) -> Vec<Narration> {
        std::mem::take(&mut self.messages)
    }

    /// Take the accumulated change set, resetting it.
    pub fn take_changes(&mut self) -> Changes {
        std::mem::take(&mut self.changes)
    }

    /// The pending messages, without draining them.
    pub fn messages(&self) -> &[Narration] {
        &self.messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_keep_order() {
        let mut log = GameLog::new();
        log.say("first");
        log.say_with_break("second");

        let messages = log.drain_messages();
        assert_eq!(messages[0].message, "first");
        assert!(!messages[0].extra_blank_line);
        assert_eq!(messages[1].message, "second");
        assert!(messages[1].extra_blank_line);
        assert!(log.messages().is_empty());
    }

    #[test]
    fn changes_deduplicate() {
        let mut log = GameLog::new();
        log.mark(Change::Stats);
        log.mark(Change::Stats);
        log.mark(Change::Location);

        let changes = log.take_changes();
        assert_eq!(changes.iter().count(), 2);
        assert!(changes.contains(Change::Stats));
        assert!(log.take_changes().is_empty());
    }
}

use crossterm::event::KeyCode;

/// The set of currently-held keys, in the order they were pressed.
///
/// Steering samples only the most recently pressed key still held, so two
/// opposing direction keys held at once resolve in favor of the newer one.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct KeyTracker {
    held: Vec<KeyCode>,
}

impl KeyTracker {
    pub(crate) fn new() -> KeyTracker {
        KeyTracker::default()
    }

    /// Record `code` as held, moving it to the most-recent slot.
    ///
    /// With real key-release reporting a key is never still present when it
    /// is pressed again, so this is plain insertion-ordered append; without
    /// release events (terminals lacking the kitty keyboard protocol) the
    /// re-press refreshes the key's recency instead of being dropped.
    pub(crate) fn press(&mut self, code: KeyCode) {
        self.held.retain(|&c| c != code);
        self.held.push(code);
    }

    /// Remove `code` from the held set.  No-op if it is not present.
    pub(crate) fn release(&mut self, code: KeyCode) {
        self.held.retain(|&c| c != code);
    }

    /// Return the most recently pressed key that is still held
    pub(crate) fn last(&self) -> Option<KeyCode> {
        self.held.last().copied()
    }
}

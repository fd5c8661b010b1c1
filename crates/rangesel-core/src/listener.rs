//! Observers of selection changes.

use std::fmt;

/// Raised when a selection gesture completes or the selection is cleared.
///
/// Carries no payload: listeners re-read the shared selection range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionChanged;

/// Something that reacts to [`SelectionChanged`].
pub trait SelectionListener {
    /// Called synchronously, after the selection holds its final value.
    fn selection_changed(&mut self, event: &SelectionChanged);
}

impl<F> SelectionListener for F
where
    F: FnMut(&SelectionChanged),
{
    fn selection_changed(&mut self, event: &SelectionChanged) {
        (self)(event)
    }
}

/// Handle returned by [`Listeners::add`], used to unregister.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// Ordered list of listeners. Registering the same callback twice fires it twice.
#[derive(Default)]
pub struct Listeners {
    entries: Vec<(ListenerId, Box<dyn SelectionListener>)>,
    next_id: u64,
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("len", &self.entries.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

impl Listeners {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a listener.
    pub fn add(&mut self, listener: impl SelectionListener + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no listener is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Deliver `event` to every listener in registration order.
    pub fn notify(&mut self, event: &SelectionChanged) {
        for (_, listener) in &mut self.entries {
            listener.selection_changed(event);
        }
    }
}

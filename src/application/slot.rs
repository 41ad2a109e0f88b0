use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// Display binding for one UI element whose text is resolved
/// asynchronously.
///
/// Each resolution request takes a ticket; only the ticket from the
/// latest `begin` may commit its result. A superseded resolution is
/// discarded here without cancelling the underlying network call, which
/// may still complete and populate the shared cache.
pub struct TextSlot {
    generation: AtomicU64,
    current: Mutex<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
}

impl TextSlot {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            generation: AtomicU64::new(0),
            current: Mutex::new(initial.into()),
        }
    }

    /// Start a new resolution for this slot, superseding any ticket
    /// issued earlier.
    pub fn begin(&self) -> Ticket {
        Ticket {
            generation: self.generation.fetch_add(1, Ordering::SeqCst) + 1,
        }
    }

    /// Commit a resolved text if `ticket` is still current. Returns
    /// whether the text was applied.
    pub fn apply(&self, ticket: Ticket, text: impl Into<String>) -> bool {
        if ticket.generation != self.generation.load(Ordering::SeqCst) {
            return false;
        }
        let mut current = match self.current.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *current = text.into();
        true
    }

    pub fn text(&self) -> String {
        match self.current.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

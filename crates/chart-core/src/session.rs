// File: crates/chart-core/src/session.rs
// Summary: Load tickets that go stale when a newer load starts or the view is torn down.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

/// Generation counter for one view. Each `begin` invalidates every earlier ticket.
#[derive(Debug)]
pub struct LoadSession {
    generation: Arc<AtomicU64>,
}

/// Handed to an asynchronous fetch; checked again before its result is applied.
#[derive(Clone, Debug)]
pub struct LoadTicket {
    generation: u64,
    session: Weak<AtomicU64>,
}

impl LoadSession {
    pub fn new() -> Self {
        Self { generation: Arc::new(AtomicU64::new(0)) }
    }

    pub fn begin(&self) -> LoadTicket {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        LoadTicket { generation, session: Arc::downgrade(&self.generation) }
    }

    /// Invalidate all outstanding tickets.
    pub fn teardown(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    pub fn is_current(&self, ticket: &LoadTicket) -> bool {
        ticket.session.ptr_eq(&Arc::downgrade(&self.generation)) && ticket.is_current()
    }
}

impl Default for LoadSession {
    fn default() -> Self { Self::new() }
}

impl LoadTicket {
    /// False once the issuing session started a newer load, was torn down, or
    /// was dropped together with its view.
    pub fn is_current(&self) -> bool {
        self.session
            .upgrade()
            .map(|g| g.load(Ordering::SeqCst) == self.generation)
            .unwrap_or(false)
    }

    pub fn generation(&self) -> u64 { self.generation }
}

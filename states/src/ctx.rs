use std::sync::Arc;

use log::debug;

use crate::{State, StateRuntime, StateUpdater};

/// Holds the current snapshot and applies queued updates to it.
///
/// Readers get an `Arc<S>` that stays valid and unchanged after later syncs;
/// a sync produces a new root instead of mutating the one readers hold.
#[derive(Debug)]
pub struct StateCtx<S: State> {
    runtime: StateRuntime<S>,
    current: Arc<S>,
    revision: u64,
}

impl<S> StateCtx<S>
where
    S: State,
{
    pub fn new(initial: S) -> Self {
        Self {
            runtime: StateRuntime::new(),
            current: Arc::new(initial),
            revision: 0,
        }
    }

    pub fn state(&self) -> &S {
        &self.current
    }

    pub fn snapshot(&self) -> Arc<S> {
        Arc::clone(&self.current)
    }

    pub fn updater(&self) -> StateUpdater<S> {
        StateUpdater::from_runtime(&self.runtime)
    }

    pub fn runtime(&self) -> &StateRuntime<S> {
        &self.runtime
    }

    /// Number of syncs that applied at least one update.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Apply every queued update and return how many ran.
    pub fn sync(&mut self) -> usize {
        if self.runtime.pending() == 0 {
            return 0;
        }

        let mut next = S::clone(&self.current);
        let mut applied = 0;
        for update in self.runtime.drain() {
            update(&mut next);
            applied += 1;
        }

        if applied > 0 {
            self.current = Arc::new(next);
            self.revision += 1;
            debug!(
                "Synced {applied} update(s) into {}, revision {}",
                S::TYPE,
                self.revision
            );
        }
        applied
    }
}

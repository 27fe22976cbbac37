use flume::Sender;

use crate::{Error, StateRuntime};

/// Root of a snapshot tree that selectors read from.
///
/// Implementors are cheap to clone: collections a selector tracks live behind
/// an `Arc`, so cloning the root shares every slice.
pub trait State: Clone + Send + Sync + 'static {
    const TYPE: &'static str = "state";
}

/// A queued mutation of the snapshot root.
pub type Update<S> = Box<dyn FnOnce(&mut S) + Send>;

pub struct StateUpdater<S: State> {
    send: Sender<Update<S>>,
}

impl<S> Clone for StateUpdater<S>
where
    S: State,
{
    fn clone(&self) -> Self {
        Self {
            send: self.send.clone(),
        }
    }
}

impl<S> StateUpdater<S>
where
    S: State,
{
    pub fn from_runtime(runtime: &StateRuntime<S>) -> Self {
        Self {
            send: runtime.sender(),
        }
    }

    /// Replace the whole snapshot on the next sync.
    pub fn set(&self, state: S) -> Result<(), Error> {
        self.update(move |current| *current = state)
    }

    /// Queue a mutation. It runs against a copy-on-write view of the snapshot,
    /// so slices it leaves alone keep their identity.
    pub fn update(&self, f: impl FnOnce(&mut S) + Send + 'static) -> Result<(), Error> {
        self.send
            .send(Box::new(f))
            .map_err(|_| Error::disconnected(S::TYPE))
    }
}

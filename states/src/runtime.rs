use flume::{Receiver, Sender};

use crate::{State, state::Update};

pub struct StateRuntime<S: State> {
    send: Sender<Update<S>>,
    recv: Receiver<Update<S>>,
}

impl<S> std::fmt::Debug for StateRuntime<S>
where
    S: State,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateRuntime")
            .field("type", &S::TYPE)
            .field("queued", &self.recv.len())
            .finish()
    }
}

impl<S> Default for StateRuntime<S>
where
    S: State,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S> StateRuntime<S>
where
    S: State,
{
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();
        Self { send, recv }
    }

    pub fn sender(&self) -> Sender<Update<S>> {
        self.send.clone()
    }

    /// Drain every update queued so far, in send order.
    pub fn drain(&self) -> impl Iterator<Item = Update<S>> + '_ {
        self.recv.try_iter()
    }

    pub fn pending(&self) -> usize {
        self.recv.len()
    }
}

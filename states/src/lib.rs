//! Snapshot plumbing and identity-keyed memoization for derived views.
//!
//! - [`StateCtx`] holds the current snapshot root and applies updates queued
//!   through a [`StateUpdater`].
//! - [`Memo`] and [`Selector`] cache derived values for as long as the inputs
//!   they track keep their identity.

mod ctx;
mod error;
mod memo;
mod runtime;
mod selector;
mod state;

pub use ctx::StateCtx;
pub use error::Error;
pub use memo::{Memo, MemoKey};
pub use runtime::StateRuntime;
pub use selector::Selector;
pub use state::{State, StateUpdater, Update};

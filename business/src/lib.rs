//! Read-only, memoized user views for a chat client's normalized store.
//!
//! State is a [`GlobalState`] snapshot, usually owned by a
//! [`roster_states::StateCtx`]. Queries that need caching go through a
//! long-lived [`UserSelectors`] or a per-site selector from the
//! `users::make_get_*` factories; the rest are plain functions.

pub mod common;
pub mod config;
pub mod entities;
mod error;
pub mod state;
pub mod user_utils;
pub mod users;

pub use config::{ClientConfig, License, TeammateNameDisplay};
pub use entities::{
    Audit, ChannelMembership, NotifyProps, Preference, Reaction, Session, TeamMembership,
    UserProfile, UsersStats,
};
pub use error::BusinessError;
pub use state::{
    ChannelsState, EntitiesState, GeneralState, GlobalState, IdSet, PreferencesState, ProfileMap,
    RelationMap, TeamsState, UsersState,
};
pub use users::{MentionKey, ProfileFilters, ProfileList, UserSelectors};

//! Username and email indexes over the id-keyed profile map.
//!
//! Both are plain inversions: when two profiles share a username (or email)
//! the one with the greater id wins, because profiles are visited in id order
//! and later inserts overwrite earlier ones. Nothing reports the collision.

use std::collections::BTreeMap;
use std::sync::Arc;

use roster_states::Selector;
use ustr::Ustr;

use crate::common::get_users;
use crate::entities::UserProfile;
use crate::state::{GlobalState, ProfileMap};

pub type UsersByUsername = BTreeMap<Ustr, Arc<UserProfile>>;
pub type UsersByEmail = BTreeMap<String, Arc<UserProfile>>;

pub type UsersByUsernameSelector = Selector<GlobalState, Arc<ProfileMap>, Arc<UsersByUsername>>;
pub type UsersByEmailSelector = Selector<GlobalState, Arc<ProfileMap>, Arc<UsersByEmail>>;

pub fn index_by_username(profiles: &ProfileMap) -> UsersByUsername {
    profiles
        .values()
        .map(|user| (user.username, Arc::clone(user)))
        .collect()
}

pub fn index_by_email(profiles: &ProfileMap) -> UsersByEmail {
    profiles
        .values()
        .map(|user| (user.email.clone(), Arc::clone(user)))
        .collect()
}

pub fn users_by_username_selector() -> UsersByUsernameSelector {
    Selector::new(
        "users_by_username",
        |state: &GlobalState| Arc::clone(get_users(state)),
        |profiles| Arc::new(index_by_username(profiles)),
    )
}

pub fn users_by_email_selector() -> UsersByEmailSelector {
    Selector::new(
        "users_by_email",
        |state: &GlobalState| Arc::clone(get_users(state)),
        |profiles| Arc::new(index_by_email(profiles)),
    )
}

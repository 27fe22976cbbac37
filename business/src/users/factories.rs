//! Selectors that take per-call arguments and therefore need one cache per
//! usage site.
//!
//! Each `make_get_*` builds a fresh, independently cached selector. Keep one
//! instance per place that renders the result (one per channel row, one per
//! post). Sharing an instance between sites that pass different arguments is
//! still correct, it just keeps evicting the single cached slot.

use std::sync::Arc;

use roster_states::Memo;
use ustr::Ustr;

use super::UserSelectors;
use super::indexes::UsersByUsername;
use super::profile_set::{ProfileList, ProfileSet, sort_and_inject_profiles};
use super::accessors::{get_user, get_user_ids_in_channels, get_user_ids_not_in_channels};
use crate::common::{get_teammate_name_display_setting, get_users};
use crate::config::TeammateNameDisplay;
use crate::entities::{Reaction, UserProfile};
use crate::state::{GlobalState, ProfileMap, RelationMap};
use crate::user_utils::display_username;

/// Profiles of the users behind a list of reactions, in reaction order.
#[derive(Debug)]
pub struct ProfilesForReactions {
    memo: Memo<(Arc<ProfileMap>, Arc<[Reaction]>), ProfileList>,
}

pub fn make_get_profiles_for_reactions() -> ProfilesForReactions {
    ProfilesForReactions {
        memo: Memo::new("profiles_for_reactions"),
    }
}

impl ProfilesForReactions {
    pub fn select(&self, state: &GlobalState, reactions: &Arc<[Reaction]>) -> ProfileList {
        let key = (Arc::clone(get_users(state)), Arc::clone(reactions));
        self.memo.get_or_compute(key, |(users, reactions)| {
            Arc::new(
                reactions
                    .iter()
                    .filter_map(|reaction| users.get(&reaction.user_id))
                    .cloned()
                    .collect(),
            )
        })
    }

    pub fn recomputations(&self) -> usize {
        self.memo.recomputations()
    }
}

type RelationAccessor = fn(&GlobalState) -> &Arc<RelationMap>;

/// Sorted profiles on one side of a channel membership relation.
#[derive(Debug)]
pub struct ChannelProfiles {
    relation: RelationAccessor,
    memo: Memo<(Arc<ProfileMap>, Arc<RelationMap>, Ustr, bool), ProfileList>,
}

pub fn make_get_profiles_in_channel() -> ChannelProfiles {
    ChannelProfiles {
        relation: get_user_ids_in_channels,
        memo: Memo::new("profiles_in_channel"),
    }
}

pub fn make_get_profiles_not_in_channel() -> ChannelProfiles {
    ChannelProfiles {
        relation: get_user_ids_not_in_channels,
        memo: Memo::new("profiles_not_in_channel"),
    }
}

impl ChannelProfiles {
    /// Empty when the relation has not loaded `channel_id`.
    pub fn select(&self, state: &GlobalState, channel_id: Ustr, skip_inactive: bool) -> ProfileList {
        let key = (
            Arc::clone(get_users(state)),
            Arc::clone((self.relation)(state)),
            channel_id,
            skip_inactive,
        );
        self.memo
            .get_or_compute(key, |(users, relation, channel_id, skip_inactive)| {
                let set = ProfileSet::from(relation.get(channel_id).map(Arc::as_ref));
                Arc::new(sort_and_inject_profiles(users, set, *skip_inactive))
            })
    }

    pub fn recomputations(&self) -> usize {
        self.memo.recomputations()
    }
}

/// Lookup request for [`ProfilesByIdsAndUsernames`].
///
/// Hold the slices in `Arc`s that live as long as the request does; the
/// cache compares them by identity.
#[derive(Debug, Clone, Default)]
pub struct ProfileLookup {
    pub user_ids: Option<Arc<[Ustr]>>,
    pub usernames: Option<Arc<[Ustr]>>,
}

/// Profiles for a mixed list of ids and usernames: every known id in the
/// given order, followed by every known username in the given order.
///
/// Usernames resolve through the index shared by [`UserSelectors`], so rows
/// built from this factory do not each rebuild it.
#[derive(Debug)]
pub struct ProfilesByIdsAndUsernames {
    memo: Memo<
        (
            Arc<ProfileMap>,
            Arc<UsersByUsername>,
            Option<Arc<[Ustr]>>,
            Option<Arc<[Ustr]>>,
        ),
        ProfileList,
    >,
}

pub fn make_get_profiles_by_ids_and_usernames() -> ProfilesByIdsAndUsernames {
    ProfilesByIdsAndUsernames {
        memo: Memo::new("profiles_by_ids_and_usernames"),
    }
}

impl ProfilesByIdsAndUsernames {
    pub fn select(
        &self,
        state: &GlobalState,
        selectors: &UserSelectors,
        lookup: &ProfileLookup,
    ) -> ProfileList {
        let key = (
            Arc::clone(get_users(state)),
            selectors.get_users_by_username(state),
            lookup.user_ids.clone(),
            lookup.usernames.clone(),
        );
        self.memo
            .get_or_compute(key, |(by_id, by_username, user_ids, usernames)| {
                let from_ids = user_ids
                    .iter()
                    .flat_map(|ids| ids.iter())
                    .filter_map(|id| by_id.get(id));
                let from_usernames = usernames
                    .iter()
                    .flat_map(|names| names.iter())
                    .filter_map(|name| by_username.get(name));
                Arc::new(from_ids.chain(from_usernames).cloned().collect())
            })
    }

    pub fn recomputations(&self) -> usize {
        self.memo.recomputations()
    }
}

/// A user's name as it should be rendered for the current viewer.
#[derive(Debug)]
pub struct DisplayName {
    memo: Memo<(Option<Arc<UserProfile>>, TeammateNameDisplay, bool), Arc<str>>,
}

pub fn make_get_display_name() -> DisplayName {
    DisplayName {
        memo: Memo::new("display_name"),
    }
}

impl DisplayName {
    /// `use_fallback_username` defaults to `true` when `None`.
    pub fn select(
        &self,
        state: &GlobalState,
        user_id: Ustr,
        use_fallback_username: Option<bool>,
    ) -> Arc<str> {
        let key = (
            get_user(state, user_id).cloned(),
            get_teammate_name_display_setting(state),
            use_fallback_username.unwrap_or(true),
        );
        self.memo.get_or_compute(key, |(user, setting, fallback)| {
            Arc::from(display_username(user.as_deref(), *setting, *fallback))
        })
    }

    pub fn recomputations(&self) -> usize {
        self.memo.recomputations()
    }
}

//! The shared, process-wide user selectors.

use std::collections::BTreeMap;
use std::sync::Arc;

use roster_states::{Memo, Selector};
use ustr::Ustr;

use super::accessors::{
    get_user_ids_in_channels, get_user_ids_in_teams, get_user_ids_not_in_channels,
    get_user_ids_not_in_teams, get_user_ids_without_team,
};
use super::factories::{ChannelProfiles, make_get_profiles_in_channel};
use super::indexes::{
    UsersByEmail, UsersByEmailSelector, UsersByUsername, UsersByUsernameSelector,
    users_by_email_selector, users_by_username_selector,
};
use super::mention_keys::{MentionKey, mention_keys_for};
use super::profile_set::{
    ProfileFilters, ProfileList, ProfileSet, filter_profiles, sort_and_inject_profiles,
};
use crate::common::{
    get_current_channel_id, get_current_team_id, get_current_user, get_my_preferences, get_users,
};
use crate::entities::{ChannelMembership, Preference, TeamMembership, UserProfile};
use crate::state::{GlobalState, IdSet, ProfileMap, RelationMap};
use crate::user_utils::is_system_admin;

pub const CATEGORY_DIRECT_CHANNEL_SHOW: &str = "direct_channel_show";

type ProfileSetMemo = Memo<(Option<Ustr>, Arc<RelationMap>), Option<Arc<IdSet>>>;
type ProfilesFromSetMemo = Memo<(Arc<ProfileMap>, Option<Arc<IdSet>>), ProfileList>;
type ProfilesInTeamKey = (Arc<ProfileMap>, Arc<RelationMap>, Ustr, Option<ProfileFilters>);
type RolesKey = (
    Option<Ustr>,
    Arc<BTreeMap<Ustr, ChannelMembership>>,
    Option<Ustr>,
    Arc<BTreeMap<Ustr, TeamMembership>>,
    Option<Arc<UserProfile>>,
);
type PreferenceMap = BTreeMap<String, Preference>;

/// Memoized user selectors with one shared cache each.
///
/// Construct one per store and keep it alive next to it. Results are `Arc`s
/// that stay pointer-identical across calls for as long as the inputs a
/// selector tracks keep their identity.
#[derive(Debug)]
pub struct UserSelectors {
    users_by_username: UsersByUsernameSelector,
    users_by_email: UsersByEmailSelector,

    profile_set_in_current_channel: ProfileSetMemo,
    profile_set_not_in_current_channel: ProfileSetMemo,
    profile_set_in_current_team: ProfileSetMemo,
    profile_set_not_in_current_team: ProfileSetMemo,

    profiles: Memo<(Arc<ProfileMap>, Option<ProfileFilters>), ProfileList>,
    profiles_in_current_channel: ProfilesFromSetMemo,
    profiles_not_in_current_channel: ProfilesFromSetMemo,
    profiles_in_current_team: ProfilesFromSetMemo,
    profiles_not_in_current_team: ProfilesFromSetMemo,
    profiles_in_team: Memo<ProfilesInTeamKey, ProfileList>,
    profiles_without_team: Memo<(Arc<ProfileMap>, Arc<IdSet>, Option<ProfileFilters>), ProfileList>,
    profiles_in_channel: ChannelProfiles,

    current_user_roles: Memo<RolesKey, Arc<str>>,
    is_current_user_system_admin: Memo<Option<Arc<UserProfile>>, bool>,
    current_user_mention_keys: Memo<Option<Arc<UserProfile>>, Arc<Vec<MentionKey>>>,

    direct_show_preferences: Selector<GlobalState, Arc<PreferenceMap>, Arc<Vec<Preference>>>,
    users_in_visible_dms: Memo<(Arc<ProfileMap>, Arc<Vec<Preference>>), ProfileList>,
}

impl Default for UserSelectors {
    fn default() -> Self {
        Self::new()
    }
}

impl UserSelectors {
    pub fn new() -> Self {
        Self {
            users_by_username: users_by_username_selector(),
            users_by_email: users_by_email_selector(),

            profile_set_in_current_channel: Memo::new("profile_set_in_current_channel"),
            profile_set_not_in_current_channel: Memo::new("profile_set_not_in_current_channel"),
            profile_set_in_current_team: Memo::new("profile_set_in_current_team"),
            profile_set_not_in_current_team: Memo::new("profile_set_not_in_current_team"),

            profiles: Memo::new("profiles"),
            profiles_in_current_channel: Memo::new("profiles_in_current_channel"),
            profiles_not_in_current_channel: Memo::new("profiles_not_in_current_channel"),
            profiles_in_current_team: Memo::new("profiles_in_current_team"),
            profiles_not_in_current_team: Memo::new("profiles_not_in_current_team"),
            profiles_in_team: Memo::new("profiles_in_team"),
            profiles_without_team: Memo::new("profiles_without_team"),
            profiles_in_channel: make_get_profiles_in_channel(),

            current_user_roles: Memo::new("current_user_roles"),
            is_current_user_system_admin: Memo::new("is_current_user_system_admin"),
            current_user_mention_keys: Memo::new("current_user_mention_keys"),

            direct_show_preferences: Selector::new(
                "direct_show_preferences",
                |state: &GlobalState| Arc::clone(get_my_preferences(state)),
                |prefs| {
                    Arc::new(
                        prefs
                            .values()
                            .filter(|pref| pref.category == CATEGORY_DIRECT_CHANNEL_SHOW)
                            .cloned()
                            .collect(),
                    )
                },
            ),
            users_in_visible_dms: Memo::new("users_in_visible_dms"),
        }
    }

    // =====================
    // Indexes
    // =====================

    pub fn get_users_by_username(&self, state: &GlobalState) -> Arc<UsersByUsername> {
        self.users_by_username.select(state)
    }

    /// How many times the username index has been rebuilt.
    pub fn users_by_username_recomputations(&self) -> usize {
        self.users_by_username.recomputations()
    }

    pub fn get_user_by_username(
        &self,
        state: &GlobalState,
        username: &str,
    ) -> Option<Arc<UserProfile>> {
        // Never-interned strings cannot be anyone's username.
        let key = Ustr::from_existing(username)?;
        self.get_users_by_username(state).get(&key).cloned()
    }

    pub fn get_users_by_email(&self, state: &GlobalState) -> Arc<UsersByEmail> {
        self.users_by_email.select(state)
    }

    pub fn get_user_by_email(&self, state: &GlobalState, email: &str) -> Option<Arc<UserProfile>> {
        self.get_users_by_email(state).get(email).cloned()
    }

    // =====================
    // Membership sets
    // =====================

    fn profile_set(
        memo: &ProfileSetMemo,
        parent_id: Option<Ustr>,
        relation: &Arc<RelationMap>,
    ) -> Option<Arc<IdSet>> {
        memo.get_or_compute((parent_id, Arc::clone(relation)), |(parent_id, relation)| {
            parent_id.and_then(|id| relation.get(&id).cloned())
        })
    }

    pub fn get_profile_set_in_current_channel(&self, state: &GlobalState) -> Option<Arc<IdSet>> {
        Self::profile_set(
            &self.profile_set_in_current_channel,
            get_current_channel_id(state),
            get_user_ids_in_channels(state),
        )
    }

    pub fn get_profile_set_not_in_current_channel(&self, state: &GlobalState) -> Option<Arc<IdSet>> {
        Self::profile_set(
            &self.profile_set_not_in_current_channel,
            get_current_channel_id(state),
            get_user_ids_not_in_channels(state),
        )
    }

    pub fn get_profile_set_in_current_team(&self, state: &GlobalState) -> Option<Arc<IdSet>> {
        Self::profile_set(
            &self.profile_set_in_current_team,
            get_current_team_id(state),
            get_user_ids_in_teams(state),
        )
    }

    pub fn get_profile_set_not_in_current_team(&self, state: &GlobalState) -> Option<Arc<IdSet>> {
        Self::profile_set(
            &self.profile_set_not_in_current_team,
            get_current_team_id(state),
            get_user_ids_not_in_teams(state),
        )
    }

    // =====================
    // Profile lists
    // =====================

    fn profiles_from_set(
        memo: &ProfilesFromSetMemo,
        users: &Arc<ProfileMap>,
        set: Option<Arc<IdSet>>,
    ) -> ProfileList {
        memo.get_or_compute((Arc::clone(users), set), |(users, set)| {
            let set = ProfileSet::from(set.as_deref());
            Arc::new(sort_and_inject_profiles(users, set, false))
        })
    }

    /// Every known profile passing `filters`, sorted by username.
    pub fn get_profiles(&self, state: &GlobalState, filters: Option<&ProfileFilters>) -> ProfileList {
        let key = (Arc::clone(get_users(state)), filters.cloned());
        self.profiles.get_or_compute(key, |(users, filters)| {
            let filtered = filter_profiles(users, filters.as_ref());
            Arc::new(sort_and_inject_profiles(&filtered, ProfileSet::All, false))
        })
    }

    pub fn get_profiles_in_current_channel(&self, state: &GlobalState) -> ProfileList {
        let set = self.get_profile_set_in_current_channel(state);
        Self::profiles_from_set(&self.profiles_in_current_channel, get_users(state), set)
    }

    pub fn get_profiles_not_in_current_channel(&self, state: &GlobalState) -> ProfileList {
        let set = self.get_profile_set_not_in_current_channel(state);
        Self::profiles_from_set(&self.profiles_not_in_current_channel, get_users(state), set)
    }

    pub fn get_profiles_in_current_team(&self, state: &GlobalState) -> ProfileList {
        let set = self.get_profile_set_in_current_team(state);
        Self::profiles_from_set(&self.profiles_in_current_team, get_users(state), set)
    }

    pub fn get_profiles_not_in_current_team(&self, state: &GlobalState) -> ProfileList {
        let set = self.get_profile_set_not_in_current_team(state);
        Self::profiles_from_set(&self.profiles_not_in_current_team, get_users(state), set)
    }

    /// Members of `team_id` passing `filters`; empty when the team is not loaded.
    pub fn get_profiles_in_team(
        &self,
        state: &GlobalState,
        team_id: Ustr,
        filters: Option<&ProfileFilters>,
    ) -> ProfileList {
        let key = (
            Arc::clone(get_users(state)),
            Arc::clone(get_user_ids_in_teams(state)),
            team_id,
            filters.cloned(),
        );
        self.profiles_in_team
            .get_or_compute(key, |(users, in_teams, team_id, filters)| {
                let filtered = filter_profiles(users, filters.as_ref());
                let set = ProfileSet::from(in_teams.get(team_id).map(Arc::as_ref));
                Arc::new(sort_and_inject_profiles(&filtered, set, false))
            })
    }

    pub fn get_profiles_without_team(
        &self,
        state: &GlobalState,
        filters: Option<&ProfileFilters>,
    ) -> ProfileList {
        let key = (
            Arc::clone(get_users(state)),
            Arc::clone(get_user_ids_without_team(state)),
            filters.cloned(),
        );
        self.profiles_without_team
            .get_or_compute(key, |(users, without_team, filters)| {
                let filtered = filter_profiles(users, filters.as_ref());
                Arc::new(sort_and_inject_profiles(
                    &filtered,
                    ProfileSet::Ids(without_team),
                    false,
                ))
            })
    }

    /// Members of an arbitrary channel, served from a shared per-channel cache.
    pub fn get_profiles_in_channel(
        &self,
        state: &GlobalState,
        channel_id: Ustr,
        skip_inactive: bool,
    ) -> ProfileList {
        self.profiles_in_channel.select(state, channel_id, skip_inactive)
    }

    // =====================
    // Current user
    // =====================

    /// Team, channel and user roles of the current user, space separated.
    pub fn get_current_user_roles(&self, state: &GlobalState) -> Arc<str> {
        let key = (
            get_current_channel_id(state),
            Arc::clone(&state.entities.channels.my_members),
            get_current_team_id(state),
            Arc::clone(&state.entities.teams.my_members),
            get_current_user(state).cloned(),
        );
        self.current_user_roles.get_or_compute(
            key,
            |(channel_id, channel_members, team_id, team_members, user)| {
                let team_roles = team_id
                    .and_then(|id| team_members.get(&id))
                    .map(|m| m.roles.as_str());
                let channel_roles = channel_id
                    .and_then(|id| channel_members.get(&id))
                    .map(|m| m.roles.as_str());
                let user_roles = user.as_deref().map(|u| u.roles.as_str());

                let joined = [team_roles, channel_roles, user_roles]
                    .into_iter()
                    .flatten()
                    .filter(|roles| !roles.trim().is_empty())
                    .collect::<Vec<_>>()
                    .join(" ");
                Arc::from(joined.trim())
            },
        )
    }

    pub fn is_current_user_system_admin(&self, state: &GlobalState) -> bool {
        self.is_current_user_system_admin
            .get_or_compute(get_current_user(state).cloned(), |user| {
                user.as_deref().is_some_and(|u| is_system_admin(&u.roles))
            })
    }

    pub fn get_current_user_mention_keys(&self, state: &GlobalState) -> Arc<Vec<MentionKey>> {
        self.current_user_mention_keys
            .get_or_compute(get_current_user(state).cloned(), |user| {
                mention_keys_for(user.as_ref())
            })
    }

    // =====================
    // Direct messages
    // =====================

    pub fn get_direct_show_preferences(&self, state: &GlobalState) -> Arc<Vec<Preference>> {
        self.direct_show_preferences.select(state)
    }

    /// Users with a visible direct channel, in preference order.
    pub fn get_users_in_visible_dms(&self, state: &GlobalState) -> ProfileList {
        let key = (
            Arc::clone(get_users(state)),
            self.get_direct_show_preferences(state),
        );
        self.users_in_visible_dms.get_or_compute(key, |(users, prefs)| {
            Arc::new(
                prefs
                    .iter()
                    .filter(|pref| pref.value == "true")
                    .filter_map(|pref| {
                        // Unknown names stay out of the interner.
                        Ustr::from_existing(&pref.name).and_then(|id| users.get(&id))
                    })
                    .cloned()
                    .collect(),
            )
        })
    }
}

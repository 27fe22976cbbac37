//! Direct reads of the users slice. Nothing here is cached.

use std::collections::BTreeMap;
use std::sync::Arc;

use ustr::Ustr;

use crate::common::get_users;
use crate::entities::{Audit, Session, UserProfile, UsersStats};
use crate::state::{GlobalState, IdSet, RelationMap};

pub fn get_user_ids_in_channels(state: &GlobalState) -> &Arc<RelationMap> {
    &state.entities.users.profiles_in_channel
}

pub fn get_user_ids_not_in_channels(state: &GlobalState) -> &Arc<RelationMap> {
    &state.entities.users.profiles_not_in_channel
}

pub fn get_user_ids_in_teams(state: &GlobalState) -> &Arc<RelationMap> {
    &state.entities.users.profiles_in_team
}

pub fn get_user_ids_not_in_teams(state: &GlobalState) -> &Arc<RelationMap> {
    &state.entities.users.profiles_not_in_team
}

pub fn get_user_ids_without_team(state: &GlobalState) -> &Arc<IdSet> {
    &state.entities.users.profiles_without_team
}

pub fn get_user_statuses(state: &GlobalState) -> &Arc<BTreeMap<Ustr, String>> {
    &state.entities.users.statuses
}

pub fn get_user_is_manual_status(state: &GlobalState) -> &Arc<BTreeMap<Ustr, bool>> {
    &state.entities.users.is_manual_status
}

pub fn get_user_sessions(state: &GlobalState) -> &Arc<Vec<Session>> {
    &state.entities.users.my_sessions
}

pub fn get_user_audits(state: &GlobalState) -> &Arc<Vec<Audit>> {
    &state.entities.users.my_audits
}

pub fn get_total_users_stats(state: &GlobalState) -> &Arc<UsersStats> {
    &state.entities.users.stats
}

pub fn get_user(state: &GlobalState, user_id: Ustr) -> Option<&Arc<UserProfile>> {
    get_users(state).get(&user_id)
}

pub fn get_status_for_user_id(state: &GlobalState, user_id: Ustr) -> Option<&str> {
    get_user_statuses(state).get(&user_id).map(String::as_str)
}

pub fn get_is_manual_status_for_user_id(state: &GlobalState, user_id: Ustr) -> Option<bool> {
    get_user_is_manual_status(state).get(&user_id).copied()
}

/// Member ids of `channel_id`, if the relation has loaded that channel.
pub fn get_user_ids_in_channel(state: &GlobalState, channel_id: Ustr) -> Option<&Arc<IdSet>> {
    get_user_ids_in_channels(state).get(&channel_id)
}

/// Member ids of `team_id`, if the relation has loaded that team.
pub fn get_user_ids_in_team(state: &GlobalState, team_id: Ustr) -> Option<&Arc<IdSet>> {
    get_user_ids_in_teams(state).get(&team_id)
}

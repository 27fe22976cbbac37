//! Plain reads of the snapshot shared by every entity area.

use std::collections::BTreeMap;
use std::sync::Arc;

use ustr::Ustr;

use crate::config::{ClientConfig, License, TeammateNameDisplay};
use crate::entities::{ChannelMembership, Preference, TeamMembership, UserProfile};
use crate::state::{GlobalState, ProfileMap};

pub const CATEGORY_DISPLAY_SETTINGS: &str = "display_settings";
pub const NAME_NAME_FORMAT: &str = "name_format";

pub fn get_users(state: &GlobalState) -> &Arc<ProfileMap> {
    &state.entities.users.profiles
}

pub fn get_current_user_id(state: &GlobalState) -> Option<Ustr> {
    state.entities.users.current_user_id
}

pub fn get_current_user(state: &GlobalState) -> Option<&Arc<UserProfile>> {
    get_current_user_id(state).and_then(|id| get_users(state).get(&id))
}

pub fn get_current_channel_id(state: &GlobalState) -> Option<Ustr> {
    state.entities.channels.current_channel_id
}

pub fn get_current_team_id(state: &GlobalState) -> Option<Ustr> {
    state.entities.teams.current_team_id
}

pub fn get_my_current_channel_membership(state: &GlobalState) -> Option<&ChannelMembership> {
    get_current_channel_id(state).and_then(|id| state.entities.channels.my_members.get(&id))
}

pub fn get_my_current_team_membership(state: &GlobalState) -> Option<&TeamMembership> {
    get_current_team_id(state).and_then(|id| state.entities.teams.my_members.get(&id))
}

pub fn get_config(state: &GlobalState) -> &Arc<ClientConfig> {
    &state.entities.general.config
}

pub fn get_license(state: &GlobalState) -> &Arc<License> {
    &state.entities.general.license
}

pub fn get_my_preferences(state: &GlobalState) -> &Arc<BTreeMap<String, Preference>> {
    &state.entities.preferences.my_preferences
}

/// The user's own name-format preference wins over the server default.
pub fn get_teammate_name_display_setting(state: &GlobalState) -> TeammateNameDisplay {
    let key = Preference::key(CATEGORY_DISPLAY_SETTINGS, NAME_NAME_FORMAT);
    get_my_preferences(state)
        .get(&key)
        .and_then(|pref| TeammateNameDisplay::parse(&pref.value))
        .or_else(|| get_config(state).teammate_name_display())
        .unwrap_or_default()
}

//! The snapshot tree selectors read from.
//!
//! Every collection a selector tracks sits behind its own `Arc`. A store update
//! that touches one slice swaps only that `Arc`, which is what lets memoized
//! selectors over the other slices keep their cached results.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use log::debug;
use roster_states::State;
use serde::{Deserialize, Serialize};
use ustr::Ustr;

use crate::BusinessError;
use crate::config::{ClientConfig, License};
use crate::entities::{
    Audit, ChannelMembership, Preference, Session, TeamMembership, UserProfile, UsersStats,
};

pub type ProfileMap = BTreeMap<Ustr, Arc<UserProfile>>;
pub type IdSet = BTreeSet<Ustr>;
/// Parent entity (channel or team) id to the member ids of that relation.
pub type RelationMap = BTreeMap<Ustr, Arc<IdSet>>;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalState {
    pub entities: EntitiesState,
}

impl State for GlobalState {
    const TYPE: &'static str = "global_state";
}

impl GlobalState {
    pub fn from_json(raw: &str) -> Result<Self, BusinessError> {
        let state: Self = serde_json::from_str(raw)?;
        debug!(
            "Loaded snapshot with {} profiles, current user {:?}",
            state.entities.users.profiles.len(),
            state.entities.users.current_user_id
        );
        Ok(state)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EntitiesState {
    pub users: UsersState,
    pub teams: TeamsState,
    pub channels: ChannelsState,
    pub preferences: PreferencesState,
    pub general: GeneralState,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UsersState {
    pub current_user_id: Option<Ustr>,
    pub profiles: Arc<ProfileMap>,
    pub profiles_in_channel: Arc<RelationMap>,
    pub profiles_not_in_channel: Arc<RelationMap>,
    pub profiles_in_team: Arc<RelationMap>,
    pub profiles_not_in_team: Arc<RelationMap>,
    pub profiles_without_team: Arc<IdSet>,
    pub statuses: Arc<BTreeMap<Ustr, String>>,
    pub is_manual_status: Arc<BTreeMap<Ustr, bool>>,
    pub my_sessions: Arc<Vec<Session>>,
    pub my_audits: Arc<Vec<Audit>>,
    pub stats: Arc<UsersStats>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TeamsState {
    pub current_team_id: Option<Ustr>,
    pub my_members: Arc<BTreeMap<Ustr, TeamMembership>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChannelsState {
    pub current_channel_id: Option<Ustr>,
    pub my_members: Arc<BTreeMap<Ustr, ChannelMembership>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PreferencesState {
    /// Keyed by `category--name`, see [`Preference::key`].
    pub my_preferences: Arc<BTreeMap<String, Preference>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralState {
    pub config: Arc<ClientConfig>,
    pub license: Arc<License>,
}

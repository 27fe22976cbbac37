//! Shared fixtures for the user selector integration tests.

#![allow(unused)]

use std::collections::BTreeMap;
use std::sync::Arc;

use roster_business::{
    ChannelMembership, ClientConfig, GlobalState, IdSet, License, Preference, ProfileMap,
    RelationMap, TeamMembership, UserProfile,
};
use ustr::Ustr;

pub const ME: &str = "me";
pub const ALICE: &str = "u_alice";
pub const BOB: &str = "u_bob";
pub const CAROL: &str = "u_carol";
pub const DAVE: &str = "u_dave";
pub const ERIN: &str = "u_erin";
pub const GHOST: &str = "u_ghost";

pub const TOWN: &str = "ch_town";
pub const DEV: &str = "ch_dev";
pub const TEAM_A: &str = "team_a";
pub const TEAM_B: &str = "team_b";

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn ustr(s: &str) -> Ustr {
    Ustr::from(s)
}

pub fn id_set(ids: &[&str]) -> Arc<IdSet> {
    Arc::new(ids.iter().map(|id| Ustr::from(*id)).collect())
}

pub fn relation(entries: Vec<(&str, Vec<&str>)>) -> Arc<RelationMap> {
    Arc::new(
        entries
            .into_iter()
            .map(|(parent, members)| (Ustr::from(parent), id_set(&members)))
            .collect(),
    )
}

pub fn profile_ids(list: &[Arc<UserProfile>]) -> Vec<&str> {
    list.iter().map(|u| u.id.as_str()).collect()
}

fn user(id: &str, username: &str) -> UserProfile {
    let mut user = UserProfile::new(id, username);
    user.email = format!("{username}@example.com");
    user.roles = "system_user".to_owned();
    user
}

fn profiles() -> Arc<ProfileMap> {
    let mut me = user(ME, "me");
    me.first_name = "Mia".to_owned();
    me.roles = "system_user system_admin".to_owned();
    me.notify_props.first_name = "true".to_owned();
    me.notify_props.channel = "true".to_owned();
    me.terms_of_service_id = Some("tos-1".to_owned());

    let mut alice = user(ALICE, "alice");
    alice.first_name = "Alice".to_owned();
    alice.last_name = "Anders".to_owned();

    let bob = user(BOB, "bob");

    let mut carol = user(CAROL, "Carol");
    carol.delete_at = 1_000;

    let mut dave = user(DAVE, "dave.jones");
    dave.nickname = "DJ".to_owned();

    let erin = user(ERIN, "erin");

    Arc::new(
        [me, alice, bob, carol, dave, erin]
            .into_iter()
            .map(|u| (u.id, Arc::new(u)))
            .collect(),
    )
}

fn preference(category: &str, name: &str, value: &str) -> (String, Preference) {
    (
        Preference::key(category, name),
        Preference {
            user_id: Ustr::from(ME),
            category: category.to_owned(),
            name: name.to_owned(),
            value: value.to_owned(),
        },
    )
}

pub fn sample_state() -> GlobalState {
    let mut state = GlobalState::default();

    let users = &mut state.entities.users;
    users.current_user_id = Some(Ustr::from(ME));
    users.profiles = profiles();
    users.profiles_in_channel = relation(vec![
        (TOWN, vec![ME, ALICE, BOB, CAROL, GHOST]),
        (DEV, vec![ALICE, DAVE]),
    ]);
    users.profiles_not_in_channel = relation(vec![(TOWN, vec![DAVE, ERIN])]);
    users.profiles_in_team = relation(vec![(TEAM_A, vec![ME, ALICE, BOB, CAROL, DAVE])]);
    users.profiles_not_in_team = relation(vec![(TEAM_A, vec![ERIN])]);
    users.profiles_without_team = id_set(&[ERIN]);
    users.statuses = Arc::new(BTreeMap::from([
        (Ustr::from(ME), "away".to_owned()),
        (Ustr::from(ALICE), "online".to_owned()),
    ]));
    users.is_manual_status = Arc::new(BTreeMap::from([(Ustr::from(ME), true)]));

    state.entities.channels.current_channel_id = Some(Ustr::from(TOWN));
    state.entities.channels.my_members = Arc::new(BTreeMap::from([(
        Ustr::from(TOWN),
        ChannelMembership {
            channel_id: Ustr::from(TOWN),
            user_id: Ustr::from(ME),
            roles: "channel_user channel_admin".to_owned(),
        },
    )]));

    state.entities.teams.current_team_id = Some(Ustr::from(TEAM_A));
    state.entities.teams.my_members = Arc::new(BTreeMap::from([(
        Ustr::from(TEAM_A),
        TeamMembership {
            team_id: Ustr::from(TEAM_A),
            user_id: Ustr::from(ME),
            roles: "team_user".to_owned(),
        },
    )]));

    state.entities.preferences.my_preferences = Arc::new(BTreeMap::from([
        preference("direct_channel_show", BOB, "true"),
        preference("direct_channel_show", ALICE, "false"),
        preference("direct_channel_show", GHOST, "true"),
        preference("direct_channel_show", DAVE, "true"),
        preference("display_settings", "name_format", "full_name"),
    ]));

    state.entities.general.config = Arc::new(
        ClientConfig::default()
            .with("EnableCustomTermsOfService", "true")
            .with("CustomTermsOfServiceId", "tos-1")
            .with("CustomTermsOfServiceReAcceptancePeriod", "30"),
    );
    state.entities.general.license = Arc::new(License::default().with("IsLicensed", "true"));

    state
}

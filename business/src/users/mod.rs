//! Derived, memoized views over users and their channel/team memberships.
//!
//! - [`accessors`]: uncached reads of the users slice.
//! - [`UserSelectors`]: the shared selectors, one cache each.
//! - [`factories`]: selectors taking per-call arguments, one instance per usage site.

pub mod accessors;
pub mod factories;
pub mod indexes;
pub mod mention_keys;
pub mod profile_set;
mod search;
pub mod selectors;
pub mod terms_of_service;

pub use accessors::{
    get_is_manual_status_for_user_id, get_status_for_user_id, get_total_users_stats, get_user,
    get_user_audits, get_user_ids_in_channel, get_user_ids_in_channels, get_user_ids_in_team,
    get_user_ids_in_teams, get_user_ids_not_in_channels, get_user_ids_not_in_teams,
    get_user_ids_without_team, get_user_is_manual_status, get_user_sessions, get_user_statuses,
};
pub use factories::{
    ChannelProfiles, DisplayName, ProfileLookup, ProfilesByIdsAndUsernames, ProfilesForReactions,
    make_get_display_name, make_get_profiles_by_ids_and_usernames,
    make_get_profiles_for_reactions, make_get_profiles_in_channel,
    make_get_profiles_not_in_channel,
};
pub use indexes::{UsersByEmail, UsersByUsername};
pub use mention_keys::{MentionKey, build_mention_keys};
pub use profile_set::{
    ProfileFilters, ProfileList, ProfileSet, filter_profiles, sort_and_inject_profiles,
};
pub use selectors::UserSelectors;
pub use terms_of_service::{
    should_show_terms_of_service, should_show_terms_of_service_for_current_user,
};

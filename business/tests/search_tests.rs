//! Integration tests for term search over the user selectors.

mod common;

use common::*;
use roster_business::{ProfileFilters, UserSelectors};

#[test]
fn test_search_profiles_matches_names() {
    let state = sample_state();
    let selectors = UserSelectors::new();

    let found = selectors.search_profiles(&state, "a", false, None);
    assert_eq!(profile_ids(&found), [ALICE]);

    let found = selectors.search_profiles(&state, "c", false, Some(&ProfileFilters::inactive()));
    assert_eq!(profile_ids(&found), [CAROL]);
}

#[test]
fn test_skip_current_removes_exactly_one() {
    let state = sample_state();
    let selectors = UserSelectors::new();

    let all = selectors.search_profiles_in_current_channel(&state, "", false);
    let without_me = selectors.search_profiles_in_current_channel(&state, "", true);

    assert_eq!(profile_ids(&all), [ALICE, BOB, CAROL, ME]);
    assert_eq!(without_me.len(), all.len() - 1);
    assert_eq!(profile_ids(&without_me), [ALICE, BOB, CAROL]);
}

#[test]
fn test_skip_current_without_current_in_list_is_noop() {
    let state = sample_state();
    let selectors = UserSelectors::new();

    let found = selectors.search_profiles_not_in_current_channel(&state, "", true);
    assert_eq!(profile_ids(&found), [DAVE, ERIN]);
}

#[test]
fn test_search_strips_at_and_ignores_case() {
    let state = sample_state();
    let selectors = UserSelectors::new();

    let found = selectors.search_profiles_in_current_channel(&state, "@ALI", true);
    assert_eq!(profile_ids(&found), [ALICE]);
}

#[test]
fn test_search_username_segments_and_nickname() {
    let state = sample_state();
    let selectors = UserSelectors::new();

    let by_segment = selectors.search_profiles_not_in_current_channel(&state, "jo", false);
    assert_eq!(profile_ids(&by_segment), [DAVE]);

    let by_nickname = selectors.search_profiles_in_current_team(&state, "dj", false);
    assert_eq!(profile_ids(&by_nickname), [DAVE]);

    let outside_team = selectors.search_profiles_not_in_current_team(&state, "er", false);
    assert_eq!(profile_ids(&outside_team), [ERIN]);
}

#[test]
fn test_search_in_team_by_id() {
    let state = sample_state();
    let selectors = UserSelectors::new();

    let found = selectors.search_profiles_in_team(&state, ustr(TEAM_A), "m", false, None);
    assert_eq!(profile_ids(&found), [ME]);

    let found = selectors.search_profiles_in_team(&state, ustr(TEAM_A), "m", true, None);
    assert!(found.is_empty());

    let found = selectors.search_profiles_in_team(&state, ustr(TEAM_B), "", false, None);
    assert!(found.is_empty());
}

#[test]
fn test_search_without_team() {
    let state = sample_state();
    let selectors = UserSelectors::new();

    let found = selectors.search_profiles_without_team(&state, "e", true, None);
    assert_eq!(profile_ids(&found), [ERIN]);
}

#[test]
fn test_search_in_channel_by_id() {
    let state = sample_state();
    let selectors = UserSelectors::new();

    let found = selectors.search_profiles_in_channel(&state, ustr(DEV), "a", false);
    assert_eq!(profile_ids(&found), [ALICE]);

    let found = selectors.search_profiles_in_channel(&state, ustr("ch_unloaded"), "", false);
    assert!(found.is_empty());
}

#[test]
fn test_search_leaves_cached_list_untouched() {
    let state = sample_state();
    let selectors = UserSelectors::new();

    let before = selectors.get_profiles_in_current_channel(&state);
    let _ = selectors.search_profiles_in_current_channel(&state, "", true);
    let after = selectors.get_profiles_in_current_channel(&state);

    assert!(std::sync::Arc::ptr_eq(&before, &after));
    assert_eq!(profile_ids(&after), [ALICE, BOB, CAROL, ME]);
}

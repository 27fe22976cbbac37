//! Term search over the memoized profile lists.
//!
//! Results are fresh vectors, never cached: the term changes on every
//! keystroke. With `skip_current` the current user's entry, if any, is
//! dropped and the remaining order is kept.

use std::sync::Arc;

use ustr::Ustr;

use super::UserSelectors;
use super::profile_set::{ProfileFilters, remove_user_from_list};
use crate::common::get_current_user_id;
use crate::entities::UserProfile;
use crate::state::GlobalState;
use crate::user_utils::filter_profiles_matching_term;

fn search(
    state: &GlobalState,
    candidates: &[Arc<UserProfile>],
    term: &str,
    skip_current: bool,
) -> Vec<Arc<UserProfile>> {
    let mut matched = filter_profiles_matching_term(candidates, term);
    if skip_current {
        remove_user_from_list(&mut matched, get_current_user_id(state));
    }
    matched
}

impl UserSelectors {
    pub fn search_profiles(
        &self,
        state: &GlobalState,
        term: &str,
        skip_current: bool,
        filters: Option<&ProfileFilters>,
    ) -> Vec<Arc<UserProfile>> {
        search(state, &self.get_profiles(state, filters), term, skip_current)
    }

    pub fn search_profiles_in_current_channel(
        &self,
        state: &GlobalState,
        term: &str,
        skip_current: bool,
    ) -> Vec<Arc<UserProfile>> {
        search(state, &self.get_profiles_in_current_channel(state), term, skip_current)
    }

    pub fn search_profiles_not_in_current_channel(
        &self,
        state: &GlobalState,
        term: &str,
        skip_current: bool,
    ) -> Vec<Arc<UserProfile>> {
        search(state, &self.get_profiles_not_in_current_channel(state), term, skip_current)
    }

    pub fn search_profiles_in_current_team(
        &self,
        state: &GlobalState,
        term: &str,
        skip_current: bool,
    ) -> Vec<Arc<UserProfile>> {
        search(state, &self.get_profiles_in_current_team(state), term, skip_current)
    }

    pub fn search_profiles_not_in_current_team(
        &self,
        state: &GlobalState,
        term: &str,
        skip_current: bool,
    ) -> Vec<Arc<UserProfile>> {
        search(state, &self.get_profiles_not_in_current_team(state), term, skip_current)
    }

    pub fn search_profiles_in_team(
        &self,
        state: &GlobalState,
        team_id: Ustr,
        term: &str,
        skip_current: bool,
        filters: Option<&ProfileFilters>,
    ) -> Vec<Arc<UserProfile>> {
        let candidates = self.get_profiles_in_team(state, team_id, filters);
        search(state, &candidates, term, skip_current)
    }

    pub fn search_profiles_without_team(
        &self,
        state: &GlobalState,
        term: &str,
        skip_current: bool,
        filters: Option<&ProfileFilters>,
    ) -> Vec<Arc<UserProfile>> {
        search(state, &self.get_profiles_without_team(state, filters), term, skip_current)
    }

    pub fn search_profiles_in_channel(
        &self,
        state: &GlobalState,
        channel_id: Ustr,
        term: &str,
        skip_current: bool,
    ) -> Vec<Arc<UserProfile>> {
        let candidates = self.get_profiles_in_channel(state, channel_id, false);
        search(state, &candidates, term, skip_current)
    }
}

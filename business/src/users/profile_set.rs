//! Materializing sorted profile lists from id sets.

use std::sync::Arc;

use roster_states::MemoKey;
use ustr::Ustr;

use crate::entities::UserProfile;
use crate::state::{IdSet, ProfileMap};
use crate::user_utils::sort_by_username;

/// A sorted, shareable list of profiles as handed to UI code.
pub type ProfileList = Arc<Vec<Arc<UserProfile>>>;

/// Which ids of a profile map to materialize.
#[derive(Debug, Clone, Copy)]
pub enum ProfileSet<'a> {
    All,
    Ids(&'a IdSet),
    /// The relation has no entry for the requested parent.
    Empty,
}

impl<'a> From<Option<&'a IdSet>> for ProfileSet<'a> {
    fn from(ids: Option<&'a IdSet>) -> Self {
        ids.map_or(Self::Empty, Self::Ids)
    }
}

/// Narrowing applied by [`filter_profiles`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileFilters {
    /// Substring of the space-separated roles string, so `"admin"` also
    /// matches `"system_admin"`.
    pub role: Option<String>,
    /// Only deactivated users. Takes precedence over `skip_inactive`.
    pub inactive: bool,
    /// Only active users.
    pub skip_inactive: bool,
}

impl ProfileFilters {
    pub fn role(role: impl Into<String>) -> Self {
        Self {
            role: Some(role.into()),
            ..Self::default()
        }
    }

    pub fn inactive() -> Self {
        Self {
            inactive: true,
            ..Self::default()
        }
    }

    pub fn skip_inactive() -> Self {
        Self {
            skip_inactive: true,
            ..Self::default()
        }
    }

    fn matches(&self, user: &UserProfile) -> bool {
        if let Some(role) = self.role.as_deref()
            && !role.is_empty()
            && !user.roles.contains(role)
        {
            return false;
        }

        if self.inactive {
            !user.is_active()
        } else if self.skip_inactive {
            user.is_active()
        } else {
            true
        }
    }
}

impl MemoKey for ProfileFilters {
    fn same_as(&self, other: &Self) -> bool {
        self == other
    }
}

/// Narrow `profiles` to those passing `filters`.
///
/// Without filters the input map is returned as is, identity included.
pub fn filter_profiles(
    profiles: &Arc<ProfileMap>,
    filters: Option<&ProfileFilters>,
) -> Arc<ProfileMap> {
    let Some(filters) = filters else {
        return Arc::clone(profiles);
    };

    Arc::new(
        profiles
            .iter()
            .filter(|(_, user)| filters.matches(user))
            .map(|(id, user)| (*id, Arc::clone(user)))
            .collect(),
    )
}

/// Resolve `set` against `profiles`, sorted by username.
///
/// Ids missing from `profiles` are dropped; with `skip_inactive` deactivated
/// users are dropped too.
pub fn sort_and_inject_profiles(
    profiles: &ProfileMap,
    set: ProfileSet<'_>,
    skip_inactive: bool,
) -> Vec<Arc<UserProfile>> {
    let mut out: Vec<Arc<UserProfile>> = match set {
        ProfileSet::Empty => return Vec::new(),
        ProfileSet::All => profiles.values().cloned().collect(),
        ProfileSet::Ids(ids) => ids.iter().filter_map(|id| profiles.get(id)).cloned().collect(),
    };

    if skip_inactive {
        out.retain(|user| user.is_active());
    }

    out.sort_by(|a, b| sort_by_username(a, b));
    out
}

/// Remove the first profile with `user_id`, keeping the order of the rest.
pub fn remove_user_from_list(profiles: &mut Vec<Arc<UserProfile>>, user_id: Option<Ustr>) {
    let Some(user_id) = user_id else {
        return;
    };
    if let Some(index) = profiles.iter().position(|p| p.id == user_id) {
        profiles.remove(index);
    }
}

//! String helpers for matching, ordering and naming users.

use std::cmp::Ordering;
use std::sync::Arc;

use crate::config::TeammateNameDisplay;
use crate::entities::UserProfile;

pub const SYSTEM_ADMIN_ROLE: &str = "system_admin";

const USERNAME_SPLIT_CHARS: [char; 3] = ['.', '-', '_'];
const FALLBACK_DISPLAY_NAME: &str = "Someone";

/// Case-insensitive username order, tie-broken by raw username then id so the
/// result never depends on input order.
pub fn sort_by_username(a: &UserProfile, b: &UserProfile) -> Ordering {
    a.username
        .to_lowercase()
        .cmp(&b.username.to_lowercase())
        .then_with(|| a.username.as_str().cmp(b.username.as_str()))
        .then_with(|| a.id.as_str().cmp(b.id.as_str()))
}

/// `value` plus every suffix that starts right after one of `separators`.
fn suggestions_split_by(value: &str, separators: &[char]) -> Vec<String> {
    let lowered = value.to_lowercase();
    let mut out = vec![lowered.clone()];
    for (idx, ch) in lowered.char_indices() {
        if separators.contains(&ch) {
            out.push(lowered[idx + ch.len_utf8()..].to_owned());
        }
    }
    out
}

fn profile_suggestions(user: &UserProfile) -> Vec<String> {
    let mut suggestions = suggestions_split_by(&user.username, &USERNAME_SPLIT_CHARS);
    suggestions.extend(suggestions_split_by(&user.first_name, &[' ']));
    suggestions.extend(suggestions_split_by(&user.last_name, &[' ']));
    suggestions.extend(suggestions_split_by(&user.nickname, &[' ']));
    suggestions.push(format!("{} {}", user.first_name, user.last_name).to_lowercase());

    let email = user.email.to_lowercase();
    if let Some((local, _)) = email.split_once('@') {
        suggestions.push(local.to_owned());
    }
    suggestions.push(email);
    suggestions
}

/// Profiles with a name, nickname or email that starts with `term`.
///
/// Matching is case-insensitive and ignores one leading `@` on the term.
/// Input order is kept.
pub fn filter_profiles_matching_term(
    users: &[Arc<UserProfile>],
    term: &str,
) -> Vec<Arc<UserProfile>> {
    let lowered = term.to_lowercase();
    let term = lowered.strip_prefix('@').unwrap_or(&lowered);

    users
        .iter()
        .filter(|user| {
            profile_suggestions(user)
                .iter()
                .filter(|s| !s.trim().is_empty())
                .any(|s| s.starts_with(term))
        })
        .cloned()
        .collect()
}

pub fn display_username(
    user: Option<&UserProfile>,
    setting: TeammateNameDisplay,
    use_fallback_username: bool,
) -> String {
    let Some(user) = user else {
        return if use_fallback_username {
            FALLBACK_DISPLAY_NAME.to_owned()
        } else {
            String::new()
        };
    };

    let name = match setting {
        TeammateNameDisplay::NicknameFullName if !user.nickname.is_empty() => {
            user.nickname.clone()
        }
        TeammateNameDisplay::NicknameFullName | TeammateNameDisplay::FullName => {
            user.full_name()
        }
        TeammateNameDisplay::Username => user.username.to_string(),
    };

    if name.trim().is_empty() {
        user.username.to_string()
    } else {
        name
    }
}

pub fn is_system_admin(roles: &str) -> bool {
    roles.split_whitespace().any(|role| role == SYSTEM_ADMIN_ROLE)
}

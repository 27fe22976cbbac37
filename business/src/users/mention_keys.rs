use std::sync::Arc;

use crate::entities::UserProfile;

/// A string whose appearance in a message mentions the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentionKey {
    pub key: String,
    pub case_sensitive: bool,
}

impl MentionKey {
    fn insensitive(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            case_sensitive: false,
        }
    }
}

pub const CHANNEL_MENTIONS: [&str; 3] = ["@channel", "@all", "@here"];

/// Mention keys for `user`, in the order: custom keys, first name, channel-wide
/// keys, `@username`.
///
/// `@username` appears exactly once, even when a custom key, the first name or
/// a channel-wide key already spells it out.
pub fn build_mention_keys(user: Option<&UserProfile>) -> Vec<MentionKey> {
    let Some(user) = user else {
        return Vec::new();
    };
    let props = &user.notify_props;
    let username_key = format!("@{}", user.username);
    let mut keys: Vec<MentionKey> = Vec::new();
    // `@username` is listed once, whichever rule adds it first.
    let push = |keys: &mut Vec<MentionKey>, key: MentionKey| {
        if key.key == username_key && keys.iter().any(|k| k.key == username_key) {
            return;
        }
        keys.push(key);
    };

    for key in props.mention_keys.split(',').filter(|k| !k.is_empty()) {
        push(&mut keys, MentionKey::insensitive(key));
    }

    if props.first_name_enabled() && !user.first_name.is_empty() {
        push(
            &mut keys,
            MentionKey {
                key: user.first_name.clone(),
                case_sensitive: true,
            },
        );
    }

    if props.channel_enabled() {
        for key in CHANNEL_MENTIONS {
            push(&mut keys, MentionKey::insensitive(key));
        }
    }

    push(&mut keys, MentionKey::insensitive(username_key.as_str()));
    keys
}

pub(crate) fn mention_keys_for(user: Option<&Arc<UserProfile>>) -> Arc<Vec<MentionKey>> {
    Arc::new(build_mention_keys(user.map(Arc::as_ref)))
}

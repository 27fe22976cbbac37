//! Records held by the normalized store.
//!
//! Field names follow the server's JSON so snapshots deserialize directly.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ustr::Ustr;

/// Per-user notification settings. Flags are the server's `"true"`/`"false"` strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotifyProps {
    /// Comma-separated custom mention keys.
    pub mention_keys: String,
    pub first_name: String,
    pub channel: String,
}

impl NotifyProps {
    pub fn first_name_enabled(&self) -> bool {
        self.first_name == "true"
    }

    pub fn channel_enabled(&self) -> bool {
        self.channel == "true"
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Ustr,
    pub username: Ustr,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub nickname: String,
    /// Space-separated role names, e.g. `"system_user system_admin"`.
    #[serde(default)]
    pub roles: String,
    /// Epoch milliseconds; nonzero means the account is deactivated.
    #[serde(default)]
    pub delete_at: i64,
    #[serde(default)]
    pub notify_props: NotifyProps,
    #[serde(default)]
    pub terms_of_service_id: Option<String>,
    #[serde(default)]
    pub terms_of_service_create_at: i64,
}

impl UserProfile {
    pub fn new(id: impl AsRef<str>, username: impl AsRef<str>) -> Self {
        Self {
            id: Ustr::from(id.as_ref()),
            username: Ustr::from(username.as_ref()),
            email: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            nickname: String::new(),
            roles: String::new(),
            delete_at: 0,
            notify_props: NotifyProps::default(),
            terms_of_service_id: None,
            terms_of_service_create_at: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.delete_at == 0
    }

    /// `"first last"`, or whichever half is present.
    pub fn full_name(&self) -> String {
        match (self.first_name.is_empty(), self.last_name.is_empty()) {
            (false, false) => format!("{} {}", self.first_name, self.last_name),
            (false, true) => self.first_name.clone(),
            (true, false) => self.last_name.clone(),
            (true, true) => String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelMembership {
    pub channel_id: Ustr,
    pub user_id: Ustr,
    #[serde(default)]
    pub roles: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMembership {
    pub team_id: Ustr,
    pub user_id: Ustr,
    #[serde(default)]
    pub roles: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preference {
    pub user_id: Ustr,
    pub category: String,
    pub name: String,
    pub value: String,
}

impl Preference {
    /// Key under which the store files this preference.
    pub fn key(category: &str, name: &str) -> String {
        format!("{category}--{name}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reaction {
    pub user_id: Ustr,
    pub post_id: Ustr,
    pub emoji_name: String,
    #[serde(default)]
    pub create_at: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Session {
    pub id: String,
    pub user_id: String,
    pub device_id: String,
    pub create_at: i64,
    pub last_activity_at: i64,
    pub expires_at: i64,
    pub props: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Audit {
    pub id: String,
    pub user_id: String,
    pub action: String,
    pub extra_info: String,
    pub ip_address: String,
    pub session_id: String,
    pub create_at: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsersStats {
    pub total_users_count: i64,
}

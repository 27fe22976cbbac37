//! Typed views over the server-provided client config and license maps.
//!
//! Both maps are stringly typed on the wire; the getters here are the only
//! place their values get interpreted.

use std::collections::BTreeMap;

use log::warn;
use serde::{Deserialize, Serialize};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientConfig(BTreeMap<String, String>);

impl ClientConfig {
    pub fn new(values: BTreeMap<String, String>) -> Self {
        Self(values)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.0.insert(key.to_owned(), value.to_owned());
        self
    }

    pub fn custom_terms_of_service_enabled(&self) -> bool {
        self.get("EnableCustomTermsOfService") == Some("true")
    }

    pub fn custom_terms_of_service_id(&self) -> Option<&str> {
        self.get("CustomTermsOfServiceId")
    }

    /// Re-acceptance period in days. `None` when absent or not a finite number.
    pub fn terms_of_service_reacceptance_days(&self) -> Option<f64> {
        let raw = self.get("CustomTermsOfServiceReAcceptancePeriod")?;
        let days = raw.trim().parse::<f64>().ok().filter(|days| days.is_finite());
        if days.is_none() && !raw.trim().is_empty() {
            warn!("Ignoring terms of service re-acceptance period {raw:?}");
        }
        days
    }

    pub fn terms_of_service_reacceptance_millis(&self) -> Option<f64> {
        self.terms_of_service_reacceptance_days()
            .map(|days| days * MILLIS_PER_DAY)
    }

    pub fn teammate_name_display(&self) -> Option<TeammateNameDisplay> {
        self.get("TeammateNameDisplay")
            .and_then(TeammateNameDisplay::parse)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct License(BTreeMap<String, String>);

impl License {
    pub fn new(values: BTreeMap<String, String>) -> Self {
        Self(values)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.0.insert(key.to_owned(), value.to_owned());
        self
    }

    pub fn is_licensed(&self) -> bool {
        self.get("IsLicensed") == Some("true")
    }
}

/// How other users' names are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TeammateNameDisplay {
    #[default]
    Username,
    NicknameFullName,
    FullName,
}

impl TeammateNameDisplay {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "username" => Some(Self::Username),
            "nickname_full_name" => Some(Self::NicknameFullName),
            "full_name" => Some(Self::FullName),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::NicknameFullName => "nickname_full_name",
            Self::FullName => "full_name",
        }
    }
}

impl roster_states::MemoKey for TeammateNameDisplay {
    fn same_as(&self, other: &Self) -> bool {
        self == other
    }
}

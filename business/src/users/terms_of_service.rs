use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::common::{get_config, get_current_user, get_license};
use crate::config::{ClientConfig, License};
use crate::entities::UserProfile;
use crate::state::GlobalState;

/// Whether `user` has to (re-)accept the custom terms of service at `now`.
///
/// Requires a licensed server with custom terms enabled. Then the user must
/// accept when the configured terms id differs from the one they accepted, or
/// when the re-acceptance period has elapsed since they accepted. A period that
/// is missing or not a number never counts as elapsed.
pub fn should_show_terms_of_service(
    user: Option<&UserProfile>,
    config: &ClientConfig,
    license: &License,
    now: DateTime<Utc>,
) -> bool {
    let Some(user) = user else {
        return false;
    };
    if !license.is_licensed() || !config.custom_terms_of_service_enabled() {
        return false;
    }

    if config.custom_terms_of_service_id() != user.terms_of_service_id.as_deref() {
        return true;
    }

    let Some(period_ms) = config.terms_of_service_reacceptance_millis() else {
        return false;
    };
    let elapsed_ms = now
        .timestamp_millis()
        .saturating_sub(user.terms_of_service_create_at);
    elapsed_ms as f64 > period_ms
}

/// [`should_show_terms_of_service`] for the current user of `state`.
///
/// Not memoized: the answer moves with `now`.
pub fn should_show_terms_of_service_for_current_user(
    state: &GlobalState,
    now: DateTime<Utc>,
) -> bool {
    should_show_terms_of_service(
        get_current_user(state).map(Arc::as_ref),
        get_config(state),
        get_license(state),
        now,
    )
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    const DAY_MS: i64 = 86_400_000;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
    }

    fn enabled_config(days: &str) -> ClientConfig {
        ClientConfig::default()
            .with("EnableCustomTermsOfService", "true")
            .with("CustomTermsOfServiceId", "tos-2")
            .with("CustomTermsOfServiceReAcceptancePeriod", days)
    }

    fn licensed() -> License {
        License::default().with("IsLicensed", "true")
    }

    fn accepted(id: &str, days_ago: i64) -> UserProfile {
        let mut user = UserProfile::new("u1", "ann");
        user.terms_of_service_id = Some(id.to_owned());
        user.terms_of_service_create_at = now().timestamp_millis() - days_ago * DAY_MS;
        user
    }

    #[test]
    fn no_user_never_shows() {
        assert!(!should_show_terms_of_service(
            None,
            &enabled_config("30"),
            &licensed(),
            now()
        ));
    }

    #[test]
    fn unlicensed_never_shows() {
        let license = License::default().with("IsLicensed", "false");
        let user = accepted("old", 400);
        assert!(!should_show_terms_of_service(
            Some(&user),
            &enabled_config("30"),
            &license,
            now()
        ));
    }

    #[test]
    fn disabled_feature_never_shows() {
        let config = enabled_config("30").with("EnableCustomTermsOfService", "false");
        let user = accepted("old", 400);
        assert!(!should_show_terms_of_service(Some(&user), &config, &licensed(), now()));
    }

    #[test]
    fn new_terms_id_shows() {
        let user = accepted("tos-1", 0);
        assert!(should_show_terms_of_service(
            Some(&user),
            &enabled_config("30"),
            &licensed(),
            now()
        ));
    }

    #[test]
    fn never_accepted_shows() {
        let user = UserProfile::new("u1", "ann");
        assert!(should_show_terms_of_service(
            Some(&user),
            &enabled_config("30"),
            &licensed(),
            now()
        ));
    }

    #[test]
    fn reacceptance_period_boundary() {
        let config = enabled_config("30");
        let fresh = accepted("tos-2", 30);
        let stale = accepted("tos-2", 31);

        assert!(!should_show_terms_of_service(Some(&fresh), &config, &licensed(), now()));
        assert!(should_show_terms_of_service(Some(&stale), &config, &licensed(), now()));
    }

    #[test]
    fn extreme_acceptance_times_do_not_overflow() {
        let config = enabled_config("30");
        let mut user = accepted("tos-2", 0);

        user.terms_of_service_create_at = i64::MIN;
        assert!(should_show_terms_of_service(Some(&user), &config, &licensed(), now()));

        user.terms_of_service_create_at = i64::MAX;
        assert!(!should_show_terms_of_service(Some(&user), &config, &licensed(), now()));
    }

    #[test]
    fn unparsable_period_is_not_elapsed() {
        let user = accepted("tos-2", 10_000);
        for raw in ["", "forever"] {
            assert!(
                !should_show_terms_of_service(
                    Some(&user),
                    &enabled_config(raw),
                    &licensed(),
                    now()
                ),
                "period {raw:?}"
            );
        }
    }
}

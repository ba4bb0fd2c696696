//! Access decisions: post-auth landing and route gating.
//!
//! Both deciders are free pure functions:
//!
//! - No IO
//! - No panics
//! - First matching rule wins
//!
//! Diagnostics go through an injected [`DecisionSink`] on [`AccessGate`];
//! the sink observes decisions but can never change them.

use crate::account::{AccountSnapshot, UserSnapshot};
use crate::route::RouteClass;

// ─────────────────────────────────────────────────────────────────────────────
// Outcomes
// ─────────────────────────────────────────────────────────────────────────────

/// Where to land a just-authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Landing {
    Onboarding,
    SubscriptionSelection,
    ProfileSelection,
}

impl Landing {
    /// Path the navigation runtime should redirect to.
    pub fn path(self) -> &'static str {
        match self {
            Landing::Onboarding => "/onboarding",
            Landing::SubscriptionSelection => "/subscribe",
            Landing::ProfileSelection => "/profiles",
        }
    }
}

/// Where to send a user who may not visit the requested route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Redirect {
    Login,
    Onboarding,
    SubscriptionSelection,
}

impl Redirect {
    pub fn path(self) -> &'static str {
        match self {
            Redirect::Login => "/login",
            Redirect::Onboarding => "/onboarding",
            Redirect::SubscriptionSelection => "/subscribe",
        }
    }
}

/// Outcome of a route-accessibility check.
///
/// The shape guarantees a redirect target is present exactly when access is
/// denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteAccess {
    Granted,
    Denied(Redirect),
}

impl RouteAccess {
    pub fn is_granted(&self) -> bool {
        matches!(self, RouteAccess::Granted)
    }

    /// Redirect path, present iff access was denied.
    pub fn redirect(&self) -> Option<&'static str> {
        match self {
            RouteAccess::Granted => None,
            RouteAccess::Denied(redirect) => Some(redirect.path()),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Deciders
// ─────────────────────────────────────────────────────────────────────────────

/// Decide where to land a just-authenticated user.
///
/// Rules, in strict priority order:
///
/// 1. onboarding not completed        → onboarding flow
/// 2. no account, or no plan selected → subscription selection
/// 3. subscription lapsed             → subscription selection
/// 4. otherwise                       → profile selection
pub fn post_auth_landing(user: &UserSnapshot, account: Option<&AccountSnapshot>) -> Landing {
    if !user.onboarding_completed {
        return Landing::Onboarding;
    }

    let Some(account) = account else {
        return Landing::SubscriptionSelection;
    };
    if account.package_id.is_none() {
        return Landing::SubscriptionSelection;
    }
    if account.status.is_lapsed() {
        return Landing::SubscriptionSelection;
    }

    Landing::ProfileSelection
}

/// Decide whether `route` is currently accessible.
///
/// Rules, in strict priority order:
///
/// 1. not authenticated                               → login
/// 2. onboarding-gated route, onboarding incomplete   → onboarding
/// 3. subscription-gated route, no entitled account   → subscription selection
/// 4. otherwise                                       → granted
pub fn route_access(
    user: Option<&UserSnapshot>,
    account: Option<&AccountSnapshot>,
    route: &str,
) -> RouteAccess {
    let Some(user) = user else {
        return RouteAccess::Denied(Redirect::Login);
    };

    let class = RouteClass::classify(route);

    if class.requires_onboarding() && !user.onboarding_completed {
        return RouteAccess::Denied(Redirect::Onboarding);
    }

    if class.requires_subscription() {
        let entitled = account.is_some_and(AccountSnapshot::entitles_playback);
        if !entitled {
            return RouteAccess::Denied(Redirect::SubscriptionSelection);
        }
    }

    RouteAccess::Granted
}

// ─────────────────────────────────────────────────────────────────────────────
// Decision sink
// ─────────────────────────────────────────────────────────────────────────────

/// Observer for access decisions.
///
/// Implementations must not panic and must not assume they influence the
/// decision: the outcome is computed before the sink sees it.
pub trait DecisionSink {
    fn landing_decided(&self, _user: &UserSnapshot, _landing: Landing) {}

    fn route_decided(&self, _route: &str, _access: RouteAccess) {}
}

/// Default sink: drops every decision.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DecisionSink for NoopSink {}

/// Sink that reports decisions at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DecisionSink for TracingSink {
    fn landing_decided(&self, user: &UserSnapshot, landing: Landing) {
        tracing::debug!(
            user_id = %user.id,
            onboarding_completed = user.onboarding_completed,
            landing = landing.path(),
            "post-auth landing decided"
        );
    }

    fn route_decided(&self, route: &str, access: RouteAccess) {
        tracing::debug!(
            route,
            granted = access.is_granted(),
            redirect = access.redirect(),
            "route access decided"
        );
    }
}

/// Decider plus an attached sink.
///
/// `AccessGate::default()` gates silently; attach [`TracingSink`] (or your
/// own) to observe decisions.
#[derive(Debug, Clone, Default)]
pub struct AccessGate<S: DecisionSink = NoopSink> {
    sink: S,
}

impl<S: DecisionSink> AccessGate<S> {
    pub fn with_sink(sink: S) -> Self {
        Self { sink }
    }

    pub fn post_auth_landing(
        &self,
        user: &UserSnapshot,
        account: Option<&AccountSnapshot>,
    ) -> Landing {
        let landing = post_auth_landing(user, account);
        self.sink.landing_decided(user, landing);
        landing
    }

    pub fn route_access(
        &self,
        user: Option<&UserSnapshot>,
        account: Option<&AccountSnapshot>,
        route: &str,
    ) -> RouteAccess {
        let access = route_access(user, account, route);
        self.sink.route_decided(route, access);
        access
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::AccountStatus;
    use streamgate_core::{AccountId, PackageId, UserId};

    fn user(onboarding_completed: bool) -> UserSnapshot {
        UserSnapshot {
            id: UserId::new(),
            email: "viewer@example.com".to_string(),
            onboarding_completed,
            email_verified_at: None,
        }
    }

    fn account(package_id: Option<i64>, status: AccountStatus) -> AccountSnapshot {
        AccountSnapshot {
            id: AccountId::new(),
            package_id: package_id.map(PackageId::new),
            status,
        }
    }

    #[test]
    fn incomplete_onboarding_always_lands_on_onboarding() {
        let u = user(false);
        assert_eq!(post_auth_landing(&u, None), Landing::Onboarding);
        assert_eq!(
            post_auth_landing(&u, Some(&account(Some(1), AccountStatus::Active))),
            Landing::Onboarding
        );
        assert_eq!(
            post_auth_landing(&u, Some(&account(None, AccountStatus::Cancelled))),
            Landing::Onboarding
        );
    }

    #[test]
    fn missing_account_or_plan_lands_on_subscription_selection() {
        let u = user(true);
        assert_eq!(post_auth_landing(&u, None), Landing::SubscriptionSelection);
        assert_eq!(
            post_auth_landing(&u, Some(&account(None, AccountStatus::Active))),
            Landing::SubscriptionSelection
        );
    }

    #[test]
    fn lapsed_subscription_lands_on_subscription_selection() {
        let u = user(true);
        for status in [
            AccountStatus::Inactive,
            AccountStatus::Suspended,
            AccountStatus::Expired,
            AccountStatus::Cancelled,
        ] {
            assert_eq!(
                post_auth_landing(&u, Some(&account(Some(1), status))),
                Landing::SubscriptionSelection,
                "{status:?}"
            );
        }
    }

    #[test]
    fn entitled_account_lands_on_profile_selection() {
        let u = user(true);
        assert_eq!(
            post_auth_landing(&u, Some(&account(Some(1), AccountStatus::Active))),
            Landing::ProfileSelection
        );
    }

    #[test]
    fn unauthenticated_is_sent_to_login() {
        let access = route_access(None, None, "/browse");
        assert_eq!(access, RouteAccess::Denied(Redirect::Login));
        assert_eq!(access.redirect(), Some("/login"));
    }

    #[test]
    fn profiles_requires_onboarding() {
        let u = user(false);
        assert_eq!(
            route_access(Some(&u), None, "/profiles"),
            RouteAccess::Denied(Redirect::Onboarding)
        );
    }

    #[test]
    fn profiles_is_reachable_without_a_subscription() {
        let u = user(true);
        let access = route_access(Some(&u), None, "/profiles");
        assert!(access.is_granted());
        assert_eq!(access.redirect(), None);
    }

    #[test]
    fn browse_requires_an_entitled_subscription() {
        let u = user(true);
        assert_eq!(
            route_access(Some(&u), None, "/browse"),
            RouteAccess::Denied(Redirect::SubscriptionSelection)
        );
        assert_eq!(
            route_access(
                Some(&u),
                Some(&account(Some(1), AccountStatus::Suspended)),
                "/browse"
            ),
            RouteAccess::Denied(Redirect::SubscriptionSelection)
        );
    }

    #[test]
    fn watch_is_granted_with_an_active_plan() {
        let u = user(true);
        let a = account(Some(1), AccountStatus::Active);
        assert!(route_access(Some(&u), Some(&a), "/watch").is_granted());
    }

    #[test]
    fn ungated_routes_are_granted_once_authenticated() {
        let u = user(false);
        assert!(route_access(Some(&u), None, "/pricing").is_granted());
        assert!(route_access(Some(&u), None, "/").is_granted());
    }

    #[test]
    fn gate_reports_the_same_outcome_as_the_free_functions() {
        let gate = AccessGate::with_sink(TracingSink);
        let u = user(true);
        let a = account(Some(2), AccountStatus::Active);

        assert_eq!(
            gate.post_auth_landing(&u, Some(&a)),
            post_auth_landing(&u, Some(&a))
        );
        assert_eq!(
            gate.route_access(Some(&u), Some(&a), "/watch/abc"),
            route_access(Some(&u), Some(&a), "/watch/abc")
        );
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn any_status() -> impl Strategy<Value = AccountStatus> {
            prop_oneof![
                Just(AccountStatus::Active),
                Just(AccountStatus::Inactive),
                Just(AccountStatus::Suspended),
                Just(AccountStatus::Expired),
                Just(AccountStatus::Cancelled),
            ]
        }

        fn any_account() -> impl Strategy<Value = Option<AccountSnapshot>> {
            proptest::option::of(
                (proptest::option::of(1i64..100), any_status()).prop_map(|(pkg, status)| {
                    account(pkg, status)
                }),
            )
        }

        fn any_route() -> impl Strategy<Value = String> {
            prop_oneof![
                Just("/browse".to_string()),
                Just("/content/123".to_string()),
                Just("/watch/abc".to_string()),
                Just("/search?q=x".to_string()),
                Just("/profiles".to_string()),
                Just("/login".to_string()),
                "/[a-z]{0,12}",
            ]
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: incomplete onboarding wins over any account state.
            #[test]
            fn onboarding_rule_dominates_landing(acct in any_account()) {
                let u = user(false);
                prop_assert_eq!(post_auth_landing(&u, acct.as_ref()), Landing::Onboarding);
            }

            /// Property: the landing decider is total; every input combination
            /// maps to exactly one of the three outcomes.
            #[test]
            fn landing_is_total(onboarded in any::<bool>(), acct in any_account()) {
                let u = user(onboarded);
                let landing = post_auth_landing(&u, acct.as_ref());
                prop_assert!(matches!(
                    landing,
                    Landing::Onboarding
                        | Landing::SubscriptionSelection
                        | Landing::ProfileSelection
                ));
            }

            /// Property: a redirect target is present iff access is denied.
            #[test]
            fn redirect_iff_denied(
                authed in any::<bool>(),
                onboarded in any::<bool>(),
                acct in any_account(),
                route in any_route(),
            ) {
                let u = user(onboarded);
                let maybe_user = authed.then_some(&u);
                let access = route_access(maybe_user, acct.as_ref(), &route);
                prop_assert_eq!(access.redirect().is_none(), access.is_granted());
            }

            /// Property: both deciders are pure (identical input, identical output).
            #[test]
            fn decisions_are_idempotent(
                onboarded in any::<bool>(),
                acct in any_account(),
                route in any_route(),
            ) {
                let u = user(onboarded);
                prop_assert_eq!(
                    post_auth_landing(&u, acct.as_ref()),
                    post_auth_landing(&u, acct.as_ref())
                );
                prop_assert_eq!(
                    route_access(Some(&u), acct.as_ref(), &route),
                    route_access(Some(&u), acct.as_ref(), &route)
                );
            }

            /// Property: whenever the landing is profile selection, every gated
            /// route is accessible too (the landing never strands the user).
            #[test]
            fn profile_landing_implies_full_access(acct in any_account()) {
                let u = user(true);
                if post_auth_landing(&u, acct.as_ref()) == Landing::ProfileSelection {
                    for route in ["/browse", "/content/1", "/watch/1", "/search", "/profiles"] {
                        prop_assert!(route_access(Some(&u), acct.as_ref(), route).is_granted());
                    }
                }
            }
        }
    }
}

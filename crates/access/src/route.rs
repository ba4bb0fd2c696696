//! Route classification for gating decisions.
//!
//! Paths are classified by prefix into an explicit enum. New routes must be
//! deliberately added to the prefix table; anything unlisted is `Other` and
//! never gated by accident.

/// Category a requested path belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteClass {
    Browse,
    Content,
    Watch,
    Search,
    Profiles,
    /// Any path not in the prefix table (marketing pages, auth screens, ...).
    Other,
}

/// Prefix table. First match wins; keep more specific prefixes first if two
/// ever overlap.
const PREFIXES: &[(&str, RouteClass)] = &[
    ("/browse", RouteClass::Browse),
    ("/content", RouteClass::Content),
    ("/watch", RouteClass::Watch),
    ("/search", RouteClass::Search),
    ("/profiles", RouteClass::Profiles),
];

impl RouteClass {
    /// Classify a path by prefix.
    pub fn classify(path: &str) -> RouteClass {
        PREFIXES
            .iter()
            .find(|(prefix, _)| path.starts_with(prefix))
            .map(|(_, class)| *class)
            .unwrap_or(RouteClass::Other)
    }

    /// Whether this class is reachable only after onboarding completes.
    pub fn requires_onboarding(self) -> bool {
        match self {
            RouteClass::Browse
            | RouteClass::Content
            | RouteClass::Watch
            | RouteClass::Search
            | RouteClass::Profiles => true,
            RouteClass::Other => false,
        }
    }

    /// Whether this class additionally requires an entitled subscription.
    ///
    /// `Profiles` is deliberately absent here: profile selection stays
    /// reachable without an active plan, and the profiles surface performs
    /// its own further gating.
    pub fn requires_subscription(self) -> bool {
        match self {
            RouteClass::Browse
            | RouteClass::Content
            | RouteClass::Watch
            | RouteClass::Search => true,
            RouteClass::Profiles | RouteClass::Other => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_matches_known_prefixes() {
        assert_eq!(RouteClass::classify("/browse"), RouteClass::Browse);
        assert_eq!(RouteClass::classify("/browse/trending"), RouteClass::Browse);
        assert_eq!(RouteClass::classify("/watch/abc123"), RouteClass::Watch);
        assert_eq!(RouteClass::classify("/profiles/new"), RouteClass::Profiles);
    }

    #[test]
    fn classify_leaves_everything_else_ungated() {
        for path in ["/", "/login", "/register", "/pricing", "/about"] {
            let class = RouteClass::classify(path);
            assert_eq!(class, RouteClass::Other, "{path}");
            assert!(!class.requires_onboarding());
            assert!(!class.requires_subscription());
        }
    }

    #[test]
    fn subscription_gated_is_subset_of_onboarding_gated() {
        let all = [
            RouteClass::Browse,
            RouteClass::Content,
            RouteClass::Watch,
            RouteClass::Search,
            RouteClass::Profiles,
            RouteClass::Other,
        ];
        for class in all {
            if class.requires_subscription() {
                assert!(class.requires_onboarding(), "{class:?}");
            }
        }
    }

    #[test]
    fn profiles_is_onboarding_gated_but_not_subscription_gated() {
        let class = RouteClass::classify("/profiles");
        assert!(class.requires_onboarding());
        assert!(!class.requires_subscription());
    }
}

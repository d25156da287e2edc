/// Core type definitions used across the framework
///
/// `View` identifies the mutually exclusive top-level screens.
use phf::phf_map;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    Feed,
    Calendar,
    Profile,
    LoggedOut,
}

/// Route names accepted by `View::from_route` (lowercase)
static ROUTES: phf::Map<&'static str, View> = phf_map! {
    "feed" => View::Feed,
    "home" => View::Feed,
    "calendar" => View::Calendar,
    "memories" => View::Calendar,
    "profile" => View::Profile,
    "login" => View::LoggedOut,
    "logout" => View::LoggedOut,
};

impl View {
    /// Views listed in the navigation bar, in order
    pub const NAV: [View; 3] = [View::Feed, View::Calendar, View::Profile];

    pub fn all() -> [View; 4] {
        [View::Feed, View::Calendar, View::Profile, View::LoggedOut]
    }

    pub fn label(&self) -> &'static str {
        match self {
            View::Feed => "Feed",
            View::Calendar => "Memories",
            View::Profile => "Profile",
            View::LoggedOut => "Log Out",
        }
    }

    /// Canonical route name
    pub fn route(&self) -> &'static str {
        match self {
            View::Feed => "feed",
            View::Calendar => "calendar",
            View::Profile => "profile",
            View::LoggedOut => "login",
        }
    }

    pub fn from_route(route: &str) -> Option<View> {
        ROUTES.get(route.trim().to_lowercase().as_str()).copied()
    }

    /// Next view in the navigation bar; LoggedOut re-enters at Feed
    pub fn next(&self) -> View {
        match self {
            View::Feed => View::Calendar,
            View::Calendar => View::Profile,
            View::Profile => View::Feed,
            View::LoggedOut => View::Feed,
        }
    }

    pub fn previous(&self) -> View {
        match self {
            View::Feed => View::Profile,
            View::Calendar => View::Feed,
            View::Profile => View::Calendar,
            View::LoggedOut => View::Feed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view_is_feed() {
        assert_eq!(View::default(), View::Feed);
    }

    #[test]
    fn test_from_route_canonical_names() {
        for view in View::all() {
            assert_eq!(View::from_route(view.route()), Some(view));
        }
    }

    #[test]
    fn test_from_route_aliases_and_case() {
        assert_eq!(View::from_route("Memories"), Some(View::Calendar));
        assert_eq!(View::from_route(" LOGOUT "), Some(View::LoggedOut));
        assert_eq!(View::from_route("home"), Some(View::Feed));
    }

    #[test]
    fn test_from_route_unknown() {
        assert_eq!(View::from_route("settings"), None);
        assert_eq!(View::from_route(""), None);
    }

    #[test]
    fn test_next_and_previous_cycle_nav_views() {
        assert_eq!(View::Feed.next(), View::Calendar);
        assert_eq!(View::Profile.next(), View::Feed);
        assert_eq!(View::Feed.previous(), View::Profile);
        assert_eq!(View::LoggedOut.next(), View::Feed);
        assert_eq!(View::LoggedOut.previous(), View::Feed);
    }
}

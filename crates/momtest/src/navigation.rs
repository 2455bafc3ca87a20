//! In-app routes mirroring the site's page paths

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Home,
    About,
    Features,
    Validate,
    Login,
    Signup,
    Learn,
}

/// Links shown in the header, in display order.
pub const NAV_LINKS: [Route; 4] = [Route::Home, Route::About, Route::Features, Route::Validate];

impl Route {
    pub const ALL: [Route; 7] = [
        Route::Home,
        Route::About,
        Route::Features,
        Route::Validate,
        Route::Login,
        Route::Signup,
        Route::Learn,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Features => "/features",
            Route::Validate => "/validate",
            Route::Login => "/login",
            Route::Signup => "/signup",
            Route::Learn => "/learn",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL.into_iter().find(|route| route.path() == normalized)
    }

    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Features => "Features",
            Route::Validate => "Validate",
            Route::Login => "Log in",
            Route::Signup => "Sign up",
            Route::Learn => "Learn More",
        }
    }

    /// Only these routes have pages of their own.
    pub fn has_content(self) -> bool {
        matches!(self, Route::Home | Route::Validate)
    }
}

#[cfg(test)]
mod tests {
    use super::{Route, NAV_LINKS};

    #[test]
    fn every_route_round_trips_through_its_path() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn trailing_slash_and_unknown_paths() {
        assert_eq!(Route::from_path("/validate/"), Some(Route::Validate));
        assert_eq!(Route::from_path(""), Some(Route::Home));
        assert_eq!(Route::from_path("/pricing"), None);
    }

    #[test]
    fn only_home_and_validate_have_content() {
        let with_content: Vec<_> = Route::ALL.into_iter().filter(|r| r.has_content()).collect();
        assert_eq!(with_content, vec![Route::Home, Route::Validate]);
        assert_eq!(NAV_LINKS[3], Route::Validate);
    }
}

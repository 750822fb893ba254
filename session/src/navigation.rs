//! Navigation targets and delayed redirects.

use std::time::Duration;

/// After a successful login, before opening the dashboard.
pub const LOGIN_REDIRECT_DELAY: Duration = Duration::from_millis(1500);
/// After a successful registration, before opening the login page.
pub const REGISTER_REDIRECT_DELAY: Duration = Duration::from_millis(2000);
/// After the session turned out to be missing or rejected.
pub const SESSION_REDIRECT_DELAY: Duration = Duration::from_millis(2000);
/// After logout, before returning home.
pub const LOGOUT_REDIRECT_DELAY: Duration = Duration::from_millis(1500);

/// Pages the frontend can send the user to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Login,
    Register,
    Dashboard,
    Users,
    Game,
}

impl Page {
    /// Route path of the page.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Dashboard => "/dashboard",
            Self::Users => "/users",
            Self::Game => "/game",
        }
    }
}

/// Schedules one-shot navigations. Scheduled navigations cannot be cancelled.
pub trait Navigator {
    fn navigate_after(&self, page: Page, delay: Duration);

    fn navigate(&self, page: Page) {
        self.navigate_after(page, Duration::ZERO);
    }
}

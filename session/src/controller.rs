//! Page controllers: one async function per user action.
//!
//! DESIGN
//! ======
//! A controller takes the page inputs plus a [`SessionContext`] and hands back
//! a [`Feedback`] (or view data). It never touches rendering. Side effects
//! go through the injected [`SessionStore`] and [`Navigator`], so the same
//! flows drive the Leptos pages and the command-line client.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use tracing::{info, warn};

use crate::api::ApiClient;
use crate::feedback::Feedback;
use crate::guard::FormGuard;
use crate::navigation::{
    LOGIN_REDIRECT_DELAY, LOGOUT_REDIRECT_DELAY, Navigator, Page, REGISTER_REDIRECT_DELAY,
    SESSION_REDIRECT_DELAY,
};
use crate::store::SessionStore;
use crate::transport::Transport;
use crate::types::Profile;
use crate::validation::{LoginForm, RegisterForm};

pub const LOGIN_SUCCESS: &str = "Login successful! Redirecting...";
pub const REGISTER_SUCCESS: &str = "Registration successful! Redirecting to login...";
pub const LOGIN_REQUIRED: &str = "Please log in to view your dashboard";
pub const LOGOUT_SUCCESS: &str = "You have been logged out successfully";

/// Collaborators shared by every controller on a page.
pub struct SessionContext<'a, T> {
    pub api: &'a ApiClient<T>,
    pub store: &'a dyn SessionStore,
    pub navigator: &'a dyn Navigator,
}

impl<'a, T: Transport> SessionContext<'a, T> {
    pub fn new(api: &'a ApiClient<T>, store: &'a dyn SessionStore, navigator: &'a dyn Navigator) -> Self {
        Self { api, store, navigator }
    }
}

/// Log in, persist the session, and schedule the dashboard redirect.
///
/// `set_disabled` receives `true` while the request is in flight and `false`
/// on every exit path.
pub async fn submit_login<T: Transport>(
    ctx: &SessionContext<'_, T>,
    form: &LoginForm,
    set_disabled: impl FnMut(bool),
) -> Feedback {
    let _guard = FormGuard::acquire(set_disabled);

    let session = match ctx.api.login(&form.email, &form.password).await {
        Ok(session) => session,
        Err(error) => return Feedback::from(&error),
    };
    if let Err(error) = ctx.store.save(&session) {
        warn!(%error, "login succeeded but session could not be stored");
        return Feedback::error(error.to_string());
    }

    info!(user_id = %session.user_id, "logged in");
    ctx.navigator.navigate_after(Page::Dashboard, LOGIN_REDIRECT_DELAY);
    Feedback::success(LOGIN_SUCCESS)
}

/// Register a new account and schedule the login redirect.
pub async fn submit_register<T: Transport>(
    ctx: &SessionContext<'_, T>,
    form: &RegisterForm,
    set_disabled: impl FnMut(bool),
) -> Feedback {
    let _guard = FormGuard::acquire(set_disabled);

    match ctx.api.register(form).await {
        Ok(()) => {
            info!(username = %form.username, "registered");
            ctx.navigator.navigate_after(Page::Login, REGISTER_REDIRECT_DELAY);
            Feedback::success(REGISTER_SUCCESS)
        }
        Err(error) => Feedback::from(&error),
    }
}

/// Load the profile for the stored session.
///
/// # Errors
///
/// Returns the feedback to display when there is no session (a login redirect
/// is scheduled without any request) or when the fetch fails. A 401 also
/// clears the session and schedules the login redirect.
pub async fn load_dashboard<T: Transport>(ctx: &SessionContext<'_, T>) -> Result<Profile, Feedback> {
    let Some(session) = ctx.store.load() else {
        ctx.navigator.navigate_after(Page::Login, SESSION_REDIRECT_DELAY);
        return Err(Feedback::error(LOGIN_REQUIRED));
    };

    match ctx.api.fetch_profile(&session.user_id, &session.token).await {
        Ok(profile) => Ok(profile),
        Err(error) => {
            if error.is_unauthorized() {
                invalidate_session(ctx.store, ctx.navigator);
            }
            Err(Feedback::from(&error))
        }
    }
}

/// Drop a rejected session and send the user back to the login page.
pub fn invalidate_session(store: &dyn SessionStore, navigator: &dyn Navigator) {
    warn!("session rejected by server; clearing");
    store.clear();
    navigator.navigate_after(Page::Login, SESSION_REDIRECT_DELAY);
}

pub fn logout(store: &dyn SessionStore, navigator: &dyn Navigator) -> Feedback {
    store.clear();
    info!("logged out");
    navigator.navigate_after(Page::Home, LOGOUT_REDIRECT_DELAY);
    Feedback::success(LOGOUT_SUCCESS)
}

pub fn play_game(navigator: &dyn Navigator) {
    navigator.navigate(Page::Game);
}

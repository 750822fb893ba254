use session::Session;

use super::*;

fn pages(state: &AuthState) -> Vec<Page> {
    nav_links(state).into_iter().map(|(_, page)| page).collect()
}

#[test]
fn pending_auth_shows_public_links_only() {
    assert_eq!(pages(&AuthState::pending()), vec![Page::Home, Page::Users]);
}

#[test]
fn logged_out_shows_login_and_register() {
    let state = AuthState { session: None, loading: false };
    assert_eq!(pages(&state), vec![Page::Home, Page::Users, Page::Login, Page::Register]);
}

#[test]
fn logged_in_shows_dashboard() {
    let state = AuthState {
        session: Some(Session {
            user_id: "u1".to_owned(),
            token: "t1".to_owned(),
            username: "alice".to_owned(),
        }),
        loading: false,
    };
    assert_eq!(pages(&state), vec![Page::Home, Page::Users, Page::Dashboard]);
}

//! Top navigation bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the shared `AuthState` so the links follow login and logout without
//! a page reload.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;
use session::Page;

use crate::state::auth::AuthState;

/// Links shown for the given auth state, in display order.
///
/// While the stored session is still being read only the public pages are
/// listed, so SSR and the first client render agree.
pub fn nav_links(state: &AuthState) -> Vec<(&'static str, Page)> {
    let mut links = vec![("Home", Page::Home), ("Players", Page::Users)];
    if state.loading {
        return links;
    }
    if state.is_logged_in() {
        links.push(("Dashboard", Page::Dashboard));
    } else {
        links.push(("Login", Page::Login));
        links.push(("Register", Page::Register));
    }
    links
}

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <nav class="nav-bar">
            <a class="nav-bar__brand" href=Page::Home.path()>"Hop Bunny"</a>
            <ul class="nav-bar__links">
                {move || {
                    auth.with(nav_links)
                        .into_iter()
                        .map(|(label, page)| {
                            view! {
                                <li>
                                    <a href=page.path()>{label}</a>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
            <span class="nav-bar__user">
                {move || auth.with(|a| a.username().map(str::to_owned)).unwrap_or_default()}
            </span>
        </nav>
    }
}

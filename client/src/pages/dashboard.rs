//! Player dashboard: profile card, logout, and the game launcher.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. The profile is fetched once per
//! page load; a missing or rejected session sends the user back to login
//! (the controller clears the stored session on 401).

use leptos::prelude::*;
use session::controller::{load_dashboard, logout, play_game};
use session::{Feedback, Profile, SessionContext};

use crate::components::feedback_message::FeedbackMessage;
use crate::components::profile_card::ProfileCard;
use crate::net::api::api_client;
use crate::state::auth::AuthState;
use crate::util::navigation::BrowserNavigator;
use crate::util::storage::session_store;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let profile = RwSignal::new(None::<Profile>);
    let loading = RwSignal::new(true);
    let feedback = RwSignal::new(None::<Feedback>);

    // Effects only run in the browser, after hydration.
    Effect::new(move || {
        leptos::task::spawn_local(async move {
            let store = session_store();
            let navigator = BrowserNavigator;
            let result = match api_client() {
                Ok(api) => load_dashboard(&SessionContext::new(&api, &store, &navigator)).await,
                Err(e) => Err(Feedback::from(&e)),
            };
            match result {
                Ok(loaded) => profile.set(Some(loaded)),
                Err(message) => {
                    auth.set(AuthState::from_store(&store));
                    feedback.set(Some(message));
                }
            }
            loading.set(false);
        });
    });

    let on_logout = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        let store = session_store();
        feedback.set(Some(logout(&store, &BrowserNavigator)));
        auth.set(AuthState::from_store(&store));
    };

    let on_play = move |_| play_game(&BrowserNavigator);

    view! {
        <div class="dashboard-page">
            <Show when=move || loading.get()>
                <p id="loading" class="loading">"Loading your profile..."</p>
            </Show>
            <FeedbackMessage feedback=feedback/>
            {move || {
                profile
                    .get()
                    .map(|loaded| {
                        view! {
                            <div id="dashboard-content">
                                <ProfileCard profile=loaded/>
                                <div class="dashboard-page__actions">
                                    <button id="playGameBtn" class="btn" on:click=on_play>
                                        "Play Game"
                                    </button>
                                    <button id="logoutBtn" class="btn btn--secondary" on:click=on_logout>
                                        "Logout"
                                    </button>
                                </div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}

//! Landing page.

use leptos::prelude::*;
use session::Page;

use crate::state::auth::AuthState;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <section class="hero">
            <h1>"Hop Bunny"</h1>
            <p class="hero__tagline">"Hop, dodge, and climb the leaderboard."</p>
            <div class="hero__actions">
                <Show
                    when=move || auth.with(AuthState::is_logged_in)
                    fallback=|| {
                        view! {
                            <a class="btn" href=Page::Login.path()>"Login"</a>
                            <a class="btn btn--secondary" href=Page::Register.path()>"Register"</a>
                        }
                    }
                >
                    <a class="btn" href=Page::Dashboard.path()>"Go to Dashboard"</a>
                </Show>
                <a class="btn btn--secondary" href=Page::Users.path()>"View Players"</a>
            </div>
        </section>
    }
}

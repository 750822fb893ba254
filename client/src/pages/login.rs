//! Email + password login page.

use leptos::prelude::*;
use session::controller::submit_login;
use session::{Feedback, LoginForm, Page, SessionContext};

use crate::components::feedback_message::FeedbackMessage;
use crate::net::api::api_client;
use crate::state::auth::AuthState;
use crate::util::navigation::BrowserNavigator;
use crate::util::storage::session_store;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let feedback = RwSignal::new(None::<Feedback>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        feedback.set(None);
        let form = LoginForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };

        leptos::task::spawn_local(async move {
            let store = session_store();
            let navigator = BrowserNavigator;
            let result = match api_client() {
                Ok(api) => {
                    let ctx = SessionContext::new(&api, &store, &navigator);
                    submit_login(&ctx, &form, move |disabled| busy.set(disabled)).await
                }
                Err(e) => Feedback::from(&e),
            };
            if !result.is_error() {
                auth.set(AuthState::from_store(&store));
            }
            feedback.set(Some(result));
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Login"</h1>
                <form id="loginForm" class="auth-form" on:submit=on_submit>
                    <fieldset class="auth-form__fields" disabled=move || busy.get()>
                        <label for="email">"Email"</label>
                        <input
                            id="email"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <label for="password">"Password"</label>
                        <input
                            id="password"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button class="btn" type="submit">
                            {move || if busy.get() { "Logging in..." } else { "Login" }}
                        </button>
                    </fieldset>
                </form>
                <FeedbackMessage feedback=feedback/>
                <p class="auth-card__switch">
                    "Don't have an account? "
                    <a href=Page::Register.path()>"Register"</a>
                </p>
            </div>
        </div>
    }
}

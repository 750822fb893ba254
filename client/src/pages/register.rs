//! Account registration page.

use leptos::prelude::*;
use session::controller::submit_register;
use session::{Feedback, Page, RegisterForm, SessionContext};

use crate::components::feedback_message::FeedbackMessage;
use crate::net::api::api_client;
use crate::util::navigation::BrowserNavigator;
use crate::util::storage::session_store;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let feedback = RwSignal::new(None::<Feedback>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        feedback.set(None);
        let form = RegisterForm {
            username: username.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };

        leptos::task::spawn_local(async move {
            let store = session_store();
            let navigator = BrowserNavigator;
            let result = match api_client() {
                Ok(api) => {
                    let ctx = SessionContext::new(&api, &store, &navigator);
                    submit_register(&ctx, &form, move |disabled| busy.set(disabled)).await
                }
                Err(e) => Feedback::from(&e),
            };
            feedback.set(Some(result));
        });
    };

    let field = move |id: &'static str, label: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <label for=id>{label}</label>
            <input
                id=id
                type=kind
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Register"</h1>
                <form id="registerForm" class="auth-form" on:submit=on_submit>
                    <fieldset class="auth-form__fields" disabled=move || busy.get()>
                        {field("username", "Username", "text", username)}
                        {field("email", "Email", "email", email)}
                        {field("password", "Password", "password", password)}
                        {field("confirmPassword", "Confirm Password", "password", confirm_password)}
                        <button class="btn" type="submit">
                            {move || if busy.get() { "Registering..." } else { "Register" }}
                        </button>
                    </fieldset>
                </form>
                <FeedbackMessage feedback=feedback/>
                <p class="auth-card__switch">
                    "Already have an account? "
                    <a href=Page::Login.path()>"Login"</a>
                </p>
            </div>
        </div>
    }
}

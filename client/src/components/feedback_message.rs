//! Status line showing the outcome of the last user action.

use leptos::prelude::*;
use session::Feedback;

/// Message colored by severity; renders empty when there is no feedback.
#[component]
pub fn FeedbackMessage(#[prop(into)] feedback: Signal<Option<Feedback>>) -> impl IntoView {
    let color = move || feedback.with(|f| f.as_ref().map_or("", |f| f.severity.css_color()));
    let text = move || feedback.with(|f| f.as_ref().map(|f| f.message.clone()).unwrap_or_default());

    view! {
        <p class="message" role="status" style:color=color>
            {text}
        </p>
    }
}

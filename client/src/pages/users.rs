//! Paginated, searchable player list.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns a `ListingState`. Every transition hands back a
//! generation-stamped request; `dispatch` fetches it and folds the response
//! back in, where responses to superseded requests are dropped.

use leptos::prelude::*;
use session::{Feedback, ListingRequest, ListingState};
use tracing::debug;

use crate::components::feedback_message::FeedbackMessage;
use crate::components::pagination_bar::PaginationBar;
use crate::components::user_table::UserTable;
use crate::net::api::api_client;

fn dispatch(listing: RwSignal<ListingState>, request: ListingRequest) {
    leptos::task::spawn_local(async move {
        let outcome = match api_client() {
            Ok(api) => api.fetch_users(&request.query).await,
            Err(e) => Err(e),
        };
        listing.update(|state| {
            let applied = state.apply(&request, outcome);
            debug!(generation = request.generation, ?applied, "listing response");
        });
    });
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let listing = RwSignal::new(ListingState::default());
    let search_input = RwSignal::new(String::new());

    Effect::new(move || {
        if let Some(request) = listing.try_update(ListingState::reload) {
            dispatch(listing, request);
        }
    });

    let on_prev = Callback::new(move |()| {
        if let Some(request) = listing.try_update(ListingState::prev_page).flatten() {
            dispatch(listing, request);
        }
    });
    let on_next = Callback::new(move |()| {
        if let Some(request) = listing.try_update(ListingState::next_page).flatten() {
            dispatch(listing, request);
        }
    });
    let run_search = move || {
        let term = search_input.get_untracked();
        if let Some(request) = listing.try_update(|state| state.search(&term)) {
            dispatch(listing, request);
        }
    };

    let error = Signal::derive(move || listing.with(|s| s.error.clone().map(Feedback::error)));
    let rows = Signal::derive(move || listing.with(ListingState::rows));
    let controls = Signal::derive(move || listing.with(ListingState::controls));

    view! {
        <div class="users-page">
            <h1>"Players"</h1>
            <div class="users-page__search">
                <input
                    id="searchInput"
                    type="search"
                    placeholder="Search by username"
                    prop:value=move || search_input.get()
                    on:input=move |ev| search_input.set(event_target_value(&ev))
                    on:keyup=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            run_search();
                        }
                    }
                />
                <button id="searchButton" class="btn" on:click=move |_| run_search()>
                    "Search"
                </button>
            </div>
            <Show when=move || listing.with(|s| s.loading)>
                <p id="loading" class="loading">"Loading players..."</p>
            </Show>
            <FeedbackMessage feedback=error/>
            <Show when=move || listing.with(|s| s.pagination.is_some())>
                <div id="users-container">
                    <UserTable rows=rows/>
                    <PaginationBar controls=controls on_prev=on_prev on_next=on_next/>
                </div>
            </Show>
        </div>
    }
}

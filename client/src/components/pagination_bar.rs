//! Previous / next controls with the page summary.

use leptos::prelude::*;
use session::PaginationControls;

#[component]
pub fn PaginationBar(
    #[prop(into)] controls: Signal<Option<PaginationControls>>,
    on_prev: Callback<()>,
    on_next: Callback<()>,
) -> impl IntoView {
    move || {
        controls.get().map(|c| {
            view! {
                <div class="pagination">
                    <button
                        id="prev-page"
                        class="btn"
                        disabled=c.prev_disabled
                        on:click=move |_| on_prev.run(())
                    >
                        "Previous"
                    </button>
                    <span id="pagination-info">{c.info}</span>
                    <button
                        id="next-page"
                        class="btn"
                        disabled=c.next_disabled
                        on:click=move |_| on_next.run(())
                    >
                        "Next"
                    </button>
                </div>
            }
        })
    }
}

//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::pages::{
    dashboard::DashboardPage, home::HomePage, login::LoginPage, register::RegisterPage, users::UsersPage,
};
use crate::state::auth::AuthState;
use crate::util::storage::session_store;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// The stored session is only readable in the browser, so auth starts out
/// pending and is resolved by an effect after hydration.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::pending());
    provide_context(auth);

    Effect::new(move || {
        auth.set(AuthState::from_store(&session_store()));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/hopbunny.css"/>
        <Title text="Hop Bunny"/>

        <Router>
            <NavBar/>
            <main class="container">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("users") view=UsersPage/>
                </Routes>
            </main>
        </Router>
    }
}

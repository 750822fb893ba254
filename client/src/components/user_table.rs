//! Player table for the listing page.

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};
use session::UserRow;

const COLUMNS: usize = 5;

#[component]
pub fn UserTable(#[prop(into)] rows: Signal<Vec<UserRow>>) -> impl IntoView {
    view! {
        <table class="users-table">
            <thead>
                <tr>
                    <th>"Username"</th>
                    <th>"Email"</th>
                    <th>"High Score"</th>
                    <th>"Games Played"</th>
                    <th>"Joined"</th>
                </tr>
            </thead>
            <tbody id="users-list">
                {move || rows.get().into_iter().map(render_row).collect_view()}
            </tbody>
        </table>
    }
}

fn render_row(row: UserRow) -> AnyView {
    match row {
        UserRow::User(user) => view! {
            <tr>
                <td>{user.username}</td>
                <td>{user.email}</td>
                <td>{user.high_score}</td>
                <td>{user.games_played}</td>
                <td>{user.joined_date}</td>
            </tr>
        }
        .into_any(),
        UserRow::Placeholder(text) => view! {
            <tr class="users-table__empty">
                <td colspan=COLUMNS.to_string()>{text}</td>
            </tr>
        }
        .into_any(),
    }
}

//! Player profile card: avatar initial, identity, and game stats.

use leptos::prelude::*;
use session::Profile;

#[component]
pub fn ProfileCard(profile: Profile) -> impl IntoView {
    view! {
        <section class="profile-card">
            <div class="profile-card__header">
                <div class="profile-card__avatar" id="user-avatar">{profile.avatar_initial()}</div>
                <div>
                    <h2 id="username">{profile.username.clone()}</h2>
                    <p class="profile-card__email" id="email">{profile.email.clone()}</p>
                </div>
            </div>
            <div class="profile-card__stats">
                <div class="stat">
                    <span class="stat__label">"High Score"</span>
                    <span class="stat__value" id="highScore">{profile.high_score}</span>
                </div>
                <div class="stat">
                    <span class="stat__label">"Games Played"</span>
                    <span class="stat__value" id="gamesPlayed">{profile.games_played}</span>
                </div>
                <div class="stat">
                    <span class="stat__label">"Rank"</span>
                    <span class="stat__value" id="rank">{profile.rank_label()}</span>
                </div>
            </div>
        </section>
    }
}

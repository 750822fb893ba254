//! Wire DTOs and view models for the game API.
//!
//! DESIGN
//! ======
//! The API is loose about field presence and numeric encoding. Payload
//! structs accept what the server sends (missing fields, `null`, numbers as
//! strings or floats) and convert into strict view models with the display
//! defaults applied, so rendering code never branches on absence.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

/// Shown for absent text fields in listings.
pub const NOT_AVAILABLE: &str = "N/A";

// =============================================================================
// SESSION
// =============================================================================

/// Client-held proof of authentication plus minimal identity.
///
/// Returned by `POST /login` and persisted until logout or a 401.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Opaque user identifier. Some backends send it as a number.
    #[serde(deserialize_with = "deserialize_string_from_scalar")]
    pub user_id: String,
    /// Bearer credential for authenticated requests.
    pub token: String,
    /// Display name.
    #[serde(default, deserialize_with = "deserialize_text")]
    pub username: String,
}

impl Session {
    /// A session is usable only with both an id and a token.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.user_id.is_empty() && !self.token.is_empty()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("user_id", &self.user_id)
            .field("token", &"<redacted>")
            .field("username", &self.username)
            .finish()
    }
}

// =============================================================================
// PROFILE
// =============================================================================

/// Dashboard view of the signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub username: String,
    pub email: String,
    pub high_score: u64,
    pub games_played: u64,
    pub rank: u64,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            username: "User".to_owned(),
            email: String::new(),
            high_score: 0,
            games_played: 0,
            rank: 0,
        }
    }
}

impl Profile {
    /// Uppercased first character of the username, for the avatar badge.
    #[must_use]
    pub fn avatar_initial(&self) -> String {
        self.username
            .chars()
            .next()
            .map_or_else(|| "U".to_owned(), |c| c.to_uppercase().collect())
    }

    /// Rank formatted as `#N`.
    #[must_use]
    pub fn rank_label(&self) -> String {
        format!("#{}", self.rank)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProfilePayload {
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    username: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    email: Option<String>,
    #[serde(default, deserialize_with = "deserialize_stat")]
    high_score: u64,
    #[serde(default, deserialize_with = "deserialize_stat")]
    games_played: u64,
    #[serde(default, deserialize_with = "deserialize_stat")]
    rank: u64,
}

impl From<ProfilePayload> for Profile {
    fn from(payload: ProfilePayload) -> Self {
        let defaults = Self::default();
        Self {
            username: non_empty(payload.username).unwrap_or(defaults.username),
            email: payload.email.unwrap_or_default(),
            high_score: payload.high_score,
            games_played: payload.games_played,
            rank: payload.rank,
        }
    }
}

/// Body of `GET /user-profile`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ProfileResponse {
    #[serde(default)]
    pub profile: Option<ProfilePayload>,
}

// =============================================================================
// USER LISTING
// =============================================================================

/// One row of the public user listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub username: String,
    pub email: String,
    pub high_score: u64,
    pub games_played: u64,
    /// `YYYY-MM-DD`, or `N/A` when unknown.
    pub joined_date: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserSummaryPayload {
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    username: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    email: Option<String>,
    #[serde(default, deserialize_with = "deserialize_stat")]
    high_score: u64,
    #[serde(default, deserialize_with = "deserialize_stat")]
    games_played: u64,
    #[serde(default)]
    created_at: Option<serde_json::Value>,
}

impl From<UserSummaryPayload> for UserSummary {
    fn from(payload: UserSummaryPayload) -> Self {
        Self {
            username: non_empty(payload.username).unwrap_or_else(|| "Anonymous".to_owned()),
            email: non_empty(payload.email).unwrap_or_else(|| NOT_AVAILABLE.to_owned()),
            high_score: payload.high_score,
            games_played: payload.games_played,
            joined_date: format_joined_date(payload.created_at.as_ref()),
        }
    }
}

/// Which page of the listing is shown and how many exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(deserialize_with = "deserialize_page")]
    pub page: u32,
    #[serde(deserialize_with = "deserialize_page")]
    pub pages: u32,
    #[serde(default, deserialize_with = "deserialize_stat")]
    pub total: u64,
}

impl Pagination {
    /// Clamp `page` into `1..=pages` (or to 1 when there are no pages).
    #[must_use]
    pub fn normalized(self) -> Self {
        Self { page: self.page.clamp(1, self.pages.max(1)), ..self }
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.pages
    }

    /// Footer text under the listing table.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("Showing page {} of {} ({} total users)", self.page, self.pages, self.total)
    }
}

/// A decoded page of users.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UserListing {
    pub users: Vec<UserSummary>,
    pub pagination: Pagination,
}

/// Body of `GET /users`.
#[derive(Debug, Deserialize)]
pub(crate) struct UsersResponse {
    #[serde(default)]
    users: Option<Vec<UserSummaryPayload>>,
    pagination: Pagination,
}

impl From<UsersResponse> for UserListing {
    fn from(response: UsersResponse) -> Self {
        Self {
            users: response
                .users
                .unwrap_or_default()
                .into_iter()
                .map(UserSummary::from)
                .collect(),
            pagination: response.pagination.normalized(),
        }
    }
}

/// Parameters of one listing fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UsersQuery {
    pub page: u32,
    pub limit: u32,
    /// Username filter; empty means no filter.
    pub search: String,
}

// =============================================================================
// HELPERS
// =============================================================================

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.is_empty())
}

/// Render `createdAt` as `YYYY-MM-DD`.
///
/// Accepts RFC 3339 timestamps, bare dates, and epoch milliseconds.
pub(crate) fn format_joined_date(created_at: Option<&serde_json::Value>) -> String {
    let format = format_description!("[year]-[month]-[day]");
    let date = match created_at {
        Some(serde_json::Value::String(raw)) => {
            let raw = raw.trim();
            OffsetDateTime::parse(raw, &Rfc3339)
                .map(OffsetDateTime::date)
                .or_else(|_| Date::parse(raw, format))
                .ok()
        }
        Some(serde_json::Value::Number(number)) => number
            .as_i64()
            .and_then(|millis| {
                OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000).ok()
            })
            .map(OffsetDateTime::date),
        _ => None,
    };
    date.and_then(|date| date.format(format).ok())
        .unwrap_or_else(|| NOT_AVAILABLE.to_owned())
}

fn deserialize_string_from_scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(text) => Ok(text),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        _ => Err(D::Error::custom("expected string or number")),
    }
}

/// Display text. Numbers and booleans are rendered; anything else is absent.
fn deserialize_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(text) => Some(text),
        serde_json::Value::Number(number) => Some(number.to_string()),
        serde_json::Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    })
}

fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_optional_text(deserializer).map(Option::unwrap_or_default)
}

fn deserialize_page<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = deserialize_stat(deserializer)?;
    Ok(u32::try_from(value).unwrap_or(u32::MAX))
}

/// Non-negative counter. Fractions floor, negatives clamp to 0, and values
/// that are not numbers read as 0.
fn deserialize_stat<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Number(number) => number_to_stat(&number),
        serde_json::Value::String(text) => {
            let text = text.trim();
            text.parse::<u64>()
                .ok()
                .or_else(|| text.parse::<f64>().ok().map(float_to_stat))
                .unwrap_or(0)
        }
        _ => 0,
    })
}

fn number_to_stat(number: &serde_json::Number) -> u64 {
    if let Some(value) = number.as_u64() {
        return value;
    }
    if number.as_i64().is_some() {
        return 0;
    }
    number.as_f64().map_or(0, float_to_stat)
}

fn float_to_stat(float: f64) -> u64 {
    if !float.is_finite() || float <= 0.0 {
        return 0;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let floored = float.floor() as u64;
    floored
}

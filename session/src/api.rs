//! Typed calls to the game API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ApiClient` builds each request, hands it to the injected [`Transport`],
//! and classifies the response into a [`RequestOutcome`]. It never touches
//! the session store or navigation; that is the controllers' job.
//!
//! | Call     | Method | Path                          | Auth   |
//! |----------|--------|-------------------------------|--------|
//! | login    | POST   | `/login`                      | none   |
//! | register | POST   | `/register`                   | none   |
//! | profile  | GET    | `/user-profile?userId=`       | Bearer |
//! | users    | GET    | `/users?page=&limit=&username=` | none |

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};
use url::Url;

use crate::error::{Action, ConfigError, RequestError, RequestOutcome, classify_failure};
use crate::transport::{ApiRequest, ApiResponse, Method, Transport};
use crate::types::{Profile, ProfileResponse, Session, UserListing, UsersQuery, UsersResponse};
use crate::validation::{LoginForm, RegisterForm};

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterRequest<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

/// Client for one API base URL over a concrete transport.
pub struct ApiClient<T> {
    base_url: Url,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if `base_url` is not an
    /// absolute hierarchical URL such as `https://host/api`.
    pub fn new(base_url: &str, transport: T) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidBaseUrl { url: base_url.to_owned(), reason };
        let parsed = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if parsed.cannot_be_a_base() {
            return Err(invalid("URL cannot be used as a base".to_owned()));
        }
        Ok(Self { base_url: parsed, transport })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `POST /login`. Empty fields are rejected before any request.
    ///
    /// # Errors
    ///
    /// See [`RequestError`]; a 405 yields [`RequestError::MethodNotAllowed`]
    /// without reading the body.
    pub async fn login(&self, email: &str, password: &str) -> RequestOutcome<Session> {
        let form = LoginForm { email: email.to_owned(), password: password.to_owned() };
        form.validate()?;

        let request = self.post("login", &LoginRequest { email, password })?;
        debug!(url = %request.url, "sending login request");
        let response = self.send(request).await?;
        let session: Session = expect_success(Action::Login, &response)?;
        if !session.is_complete() {
            warn!("login response missing userId or token");
            return Err(RequestError::InvalidResponse("login response is missing userId or token".to_owned()));
        }
        info!(user_id = %session.user_id, username = %session.username, "login succeeded");
        Ok(session)
    }

    /// `POST /register` after local validation of `form`.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Validation`] without sending anything when the
    /// form is invalid; otherwise classifies like [`ApiClient::login`].
    pub async fn register(&self, form: &RegisterForm) -> RequestOutcome<()> {
        form.validate()?;

        let body = RegisterRequest {
            username: &form.username,
            email: &form.email,
            password: &form.password,
        };
        let request = self.post("register", &body)?;
        debug!(url = %request.url, username = %form.username, "sending registration request");
        let response = self.send(request).await?;
        if !response.is_success() {
            return Err(fail(Action::Register, &response));
        }
        info!(username = %form.username, "registration succeeded");
        Ok(())
    }

    /// `GET /user-profile?userId=` with the bearer token.
    ///
    /// Absent profile fields are defaulted; only transport errors and non-2xx
    /// statuses fail.
    ///
    /// # Errors
    ///
    /// See [`RequestError`]; [`RequestError::is_unauthorized`] marks a
    /// rejected token.
    pub async fn fetch_profile(&self, user_id: &str, token: &str) -> RequestOutcome<Profile> {
        let mut url = self.endpoint("user-profile");
        url.query_pairs_mut().append_pair("userId", user_id);
        let request = ApiRequest {
            method: Method::Get,
            url,
            bearer: Some(token.to_owned()),
            body: None,
        };
        debug!(url = %request.url, "fetching profile");
        let response = self.send(request).await?;
        let payload: ProfileResponse = expect_success(Action::Profile, &response)?;
        Ok(payload.profile.map(Profile::from).unwrap_or_default())
    }

    /// `GET /users?page=&limit=` plus `&username=` for a non-empty search.
    ///
    /// # Errors
    ///
    /// See [`RequestError`].
    pub async fn fetch_users(&self, query: &UsersQuery) -> RequestOutcome<UserListing> {
        let url = self.users_url(query);
        let request = ApiRequest { method: Method::Get, url, bearer: None, body: None };
        debug!(url = %request.url, "fetching users");
        let response = self.send(request).await?;
        let payload: UsersResponse = expect_success(Action::Users, &response)?;
        Ok(UserListing::from(payload))
    }

    pub(crate) fn users_url(&self, query: &UsersQuery) -> Url {
        let mut url = self.endpoint("users");
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("page", &query.page.to_string());
            pairs.append_pair("limit", &query.limit.to_string());
            if !query.search.is_empty() {
                pairs.append_pair("username", &query.search);
            }
        }
        url
    }

    /// `base_url` with `path` appended as one more segment.
    pub(crate) fn endpoint(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        // `new` rejects cannot-be-a-base URLs, so segments are always available.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(path);
        }
        url.set_query(None);
        url
    }

    fn post<B: Serialize>(&self, path: &str, body: &B) -> RequestOutcome<ApiRequest> {
        let body = serde_json::to_value(body).map_err(|e| RequestError::InvalidResponse(e.to_string()))?;
        Ok(ApiRequest {
            method: Method::Post,
            url: self.endpoint(path),
            bearer: None,
            body: Some(body),
        })
    }

    async fn send(&self, request: ApiRequest) -> RequestOutcome<ApiResponse> {
        let method = request.method;
        let url = request.url.clone();
        match self.transport.send(request).await {
            Ok(response) => {
                debug!(method = method.as_str(), %url, status = response.status, "response received");
                Ok(response)
            }
            Err(error) => {
                warn!(method = method.as_str(), %url, error = %error, "request failed before a response");
                Err(RequestError::Transport(error.to_string()))
            }
        }
    }
}

fn fail(action: Action, response: &ApiResponse) -> RequestError {
    let error = classify_failure(action, response);
    warn!(?action, status = response.status, error = %error, "request rejected");
    error
}

/// Decode a 2xx body as `T`, or classify the failure.
fn expect_success<T: DeserializeOwned>(action: Action, response: &ApiResponse) -> RequestOutcome<T> {
    if !response.is_success() {
        return Err(fail(action, response));
    }
    serde_json::from_str(&response.body).map_err(|e| {
        warn!(?action, error = %e, "undecodable success body");
        RequestError::InvalidResponse(e.to_string())
    })
}

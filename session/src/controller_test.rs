use std::cell::RefCell;

use futures::executor::block_on;

use super::*;
use crate::error::SessionStoreError;
use crate::feedback::Severity;
use crate::store::{KeyValueStorage, MemorySessionStore, MemoryStorage};
use crate::test_support::{FakeTransport, RecordingNavigator, client};
use crate::types::Session;

fn login_form() -> LoginForm {
    LoginForm { email: "alice@example.com".to_owned(), password: "secret".to_owned() }
}

fn register_form() -> RegisterForm {
    RegisterForm {
        username: "bob".to_owned(),
        email: "bob@example.com".to_owned(),
        password: "hunter22".to_owned(),
        confirm_password: "hunter22".to_owned(),
    }
}

fn stored_session() -> MemorySessionStore {
    let store = MemorySessionStore::default();
    store
        .save(&Session { user_id: "u1".to_owned(), token: "t1".to_owned(), username: "alice".to_owned() })
        .unwrap();
    store
}

/// Store whose writes always fail.
struct FullStore;

impl SessionStore for FullStore {
    fn load(&self) -> Option<Session> {
        None
    }

    fn save(&self, _session: &Session) -> Result<(), SessionStoreError> {
        Err(SessionStoreError::Unavailable)
    }

    fn clear(&self) {}
}

// =============================================================
// submit_login
// =============================================================

#[test]
fn login_success_stores_session_and_schedules_dashboard() {
    let api = client(FakeTransport::default().respond(200, r#"{"userId":"u1","token":"t1","username":"alice"}"#));
    let store = MemorySessionStore::default();
    let navigator = RecordingNavigator::default();
    let ctx = SessionContext::new(&api, &store, &navigator);
    let toggles = RefCell::new(Vec::new());

    let feedback = block_on(submit_login(&ctx, &login_form(), |d| toggles.borrow_mut().push(d)));

    assert_eq!(feedback, Feedback::success(LOGIN_SUCCESS));
    let storage = store.storage();
    assert_eq!(storage.get("userId").as_deref(), Some("u1"));
    assert_eq!(storage.get("token").as_deref(), Some("t1"));
    assert_eq!(storage.get("username").as_deref(), Some("alice"));
    assert_eq!(navigator.scheduled(), vec![(Page::Dashboard, LOGIN_REDIRECT_DELAY)]);
    assert_eq!(*toggles.borrow(), vec![true, false]);
}

#[test]
fn login_failure_never_navigates_and_releases_form() {
    let api = client(FakeTransport::default().respond(401, r#"{"error":"Invalid email or password"}"#));
    let store = MemorySessionStore::default();
    let navigator = RecordingNavigator::default();
    let ctx = SessionContext::new(&api, &store, &navigator);
    let toggles = RefCell::new(Vec::new());

    let feedback = block_on(submit_login(&ctx, &login_form(), |d| toggles.borrow_mut().push(d)));

    assert_eq!(feedback.severity, Severity::Error);
    assert_eq!(feedback.message, "Invalid email or password");
    assert!(store.storage().is_empty());
    assert!(navigator.scheduled().is_empty());
    assert_eq!(*toggles.borrow(), vec![true, false]);
}

#[test]
fn login_validation_failure_releases_form() {
    let api = client(FakeTransport::default());
    let store = MemorySessionStore::default();
    let navigator = RecordingNavigator::default();
    let ctx = SessionContext::new(&api, &store, &navigator);
    let toggles = RefCell::new(Vec::new());
    let form = LoginForm { password: String::new(), ..login_form() };

    let feedback = block_on(submit_login(&ctx, &form, |d| toggles.borrow_mut().push(d)));

    assert_eq!(feedback.message, "Please enter both email and password");
    assert_eq!(api.transport().request_count(), 0);
    assert_eq!(*toggles.borrow(), vec![true, false]);
}

#[test]
fn login_with_unwritable_store_reports_error_without_redirect() {
    let api = client(FakeTransport::default().respond(200, r#"{"userId":"u1","token":"t1","username":"alice"}"#));
    let navigator = RecordingNavigator::default();
    let ctx = SessionContext::new(&api, &FullStore, &navigator);

    let feedback = block_on(submit_login(&ctx, &login_form(), |_| {}));

    assert!(feedback.is_error());
    assert!(navigator.scheduled().is_empty());
}

// =============================================================
// submit_register
// =============================================================

#[test]
fn register_with_empty_field_makes_no_request() {
    let api = client(FakeTransport::default());
    let store = MemorySessionStore::default();
    let navigator = RecordingNavigator::default();
    let ctx = SessionContext::new(&api, &store, &navigator);

    for blank in 0..4 {
        let mut form = register_form();
        match blank {
            0 => form.username.clear(),
            1 => form.email.clear(),
            2 => form.password.clear(),
            _ => form.confirm_password.clear(),
        }
        let feedback = block_on(submit_register(&ctx, &form, |_| {}));
        assert_eq!(feedback, Feedback::error("Please fill in all fields"));
    }
    assert_eq!(api.transport().request_count(), 0);
    assert!(navigator.scheduled().is_empty());
}

#[test]
fn register_mismatched_passwords_make_no_request() {
    let api = client(FakeTransport::default());
    let store = MemorySessionStore::default();
    let navigator = RecordingNavigator::default();
    let ctx = SessionContext::new(&api, &store, &navigator);
    let form = RegisterForm { confirm_password: "hunter23".to_owned(), ..register_form() };

    let feedback = block_on(submit_register(&ctx, &form, |_| {}));

    assert_eq!(feedback.message, "Passwords do not match");
    assert_eq!(api.transport().request_count(), 0);
}

#[test]
fn register_success_schedules_login() {
    let api = client(FakeTransport::default().respond(201, r#"{"message":"ok"}"#));
    let store = MemorySessionStore::default();
    let navigator = RecordingNavigator::default();
    let ctx = SessionContext::new(&api, &store, &navigator);
    let toggles = RefCell::new(Vec::new());

    let feedback = block_on(submit_register(&ctx, &register_form(), |d| toggles.borrow_mut().push(d)));

    assert_eq!(feedback, Feedback::success(REGISTER_SUCCESS));
    assert_eq!(api.transport().request_count(), 1);
    assert_eq!(navigator.scheduled(), vec![(Page::Login, REGISTER_REDIRECT_DELAY)]);
    assert!(store.load().is_none());
    assert_eq!(*toggles.borrow(), vec![true, false]);
}

// =============================================================
// load_dashboard
// =============================================================

#[test]
fn dashboard_without_session_redirects_without_request() {
    let api = client(FakeTransport::default());
    let store = MemorySessionStore::default();
    let navigator = RecordingNavigator::default();
    let ctx = SessionContext::new(&api, &store, &navigator);

    let feedback = block_on(load_dashboard(&ctx)).unwrap_err();

    assert_eq!(feedback, Feedback::error(LOGIN_REQUIRED));
    assert_eq!(api.transport().request_count(), 0);
    assert_eq!(navigator.scheduled(), vec![(Page::Login, SESSION_REDIRECT_DELAY)]);
}

#[test]
fn dashboard_with_token_only_counts_as_logged_out() {
    let api = client(FakeTransport::default());
    let storage = MemoryStorage::default();
    storage.set("token", "t1").unwrap();
    let store = MemorySessionStore::new(storage);
    let navigator = RecordingNavigator::default();
    let ctx = SessionContext::new(&api, &store, &navigator);

    assert!(block_on(load_dashboard(&ctx)).is_err());
    assert_eq!(api.transport().request_count(), 0);
}

#[test]
fn dashboard_returns_profile_for_stored_session() {
    let api = client(FakeTransport::default().respond(200, r#"{"profile":{"username":"alice","highScore":7}}"#));
    let store = stored_session();
    let navigator = RecordingNavigator::default();
    let ctx = SessionContext::new(&api, &store, &navigator);

    let profile = block_on(load_dashboard(&ctx)).unwrap();

    assert_eq!(profile.username, "alice");
    assert_eq!(profile.high_score, 7);
    assert_eq!(api.transport().requests()[0].bearer.as_deref(), Some("t1"));
    assert!(navigator.scheduled().is_empty());
}

#[test]
fn dashboard_401_clears_session_and_redirects() {
    let api = client(FakeTransport::default().respond(401, r#"{"error":"Invalid token"}"#));
    let store = stored_session();
    let navigator = RecordingNavigator::default();
    let ctx = SessionContext::new(&api, &store, &navigator);

    let feedback = block_on(load_dashboard(&ctx)).unwrap_err();

    assert_eq!(feedback.message, "Invalid token");
    assert!(store.storage().is_empty());
    assert_eq!(navigator.scheduled(), vec![(Page::Login, SESSION_REDIRECT_DELAY)]);
}

#[test]
fn dashboard_server_error_keeps_session() {
    let api = client(FakeTransport::default().respond(500, "{}"));
    let store = stored_session();
    let navigator = RecordingNavigator::default();
    let ctx = SessionContext::new(&api, &store, &navigator);

    let feedback = block_on(load_dashboard(&ctx)).unwrap_err();

    assert_eq!(feedback.message, "Failed to load profile data");
    assert!(store.load().is_some());
    assert!(navigator.scheduled().is_empty());
}

// =============================================================
// logout & play
// =============================================================

#[test]
fn logout_clears_all_keys_and_goes_home() {
    let store = stored_session();
    let navigator = RecordingNavigator::default();

    let feedback = logout(&store, &navigator);

    assert_eq!(feedback, Feedback::success(LOGOUT_SUCCESS));
    assert!(store.storage().is_empty());
    assert_eq!(navigator.scheduled(), vec![(Page::Home, LOGOUT_REDIRECT_DELAY)]);
}

#[test]
fn play_game_navigates_immediately() {
    let navigator = RecordingNavigator::default();
    play_game(&navigator);
    assert_eq!(navigator.scheduled(), vec![(Page::Game, std::time::Duration::ZERO)]);
}

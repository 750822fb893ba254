use super::*;
use crate::error::RequestError;

fn listing(page: u32, pages: u32, names: &[&str]) -> UserListing {
    UserListing {
        users: names
            .iter()
            .map(|name| UserSummary {
                username: (*name).to_owned(),
                email: format!("{name}@example.com"),
                high_score: 0,
                games_played: 0,
                joined_date: "N/A".to_owned(),
            })
            .collect(),
        pagination: Pagination { page, pages, total: u64::from(pages) * 10 },
    }
}

// =============================================================
// Initial state & transitions
// =============================================================

#[test]
fn initial_state_is_first_page_without_search() {
    let state = ListingState::default();
    assert_eq!(state.current_page, 1);
    assert_eq!(state.page_limit, DEFAULT_PAGE_LIMIT);
    assert_eq!(state.current_search, "");
    assert!(!state.loading);
}

#[test]
fn reload_requests_current_page_and_sets_loading() {
    let mut state = ListingState::new(25);
    let request = state.reload();
    assert_eq!(request.query, UsersQuery { page: 1, limit: 25, search: String::new() });
    assert!(state.loading);
}

#[test]
fn next_and_prev_are_no_ops_at_boundaries() {
    let mut state = ListingState::default();
    assert_eq!(state.prev_page(), None);
    assert_eq!(state.next_page(), None);

    let first = state.reload();
    state.apply(&first, Ok(listing(1, 3, &["a"])));
    let next = state.next_page().unwrap();
    assert_eq!(next.query.page, 2);
    state.apply(&next, Ok(listing(2, 3, &["b"])));
    assert_eq!(state.prev_page().unwrap().query.page, 1);
}

#[test]
fn last_page_has_no_next() {
    let mut state = ListingState::default();
    let request = state.request_page(3);
    state.apply(&request, Ok(listing(3, 3, &["z"])));
    assert_eq!(state.next_page(), None);
}

#[test]
fn search_trims_term_and_resets_to_first_page() {
    let mut state = ListingState::default();
    let request = state.request_page(4);
    state.apply(&request, Ok(listing(4, 5, &["x"])));

    let request = state.search("  ali ");
    assert_eq!(state.current_search, "ali");
    assert_eq!(request.query.page, 1);
    assert_eq!(request.query.search, "ali");
}

// =============================================================
// apply
// =============================================================

#[test]
fn successful_apply_commits_page_and_rows() {
    let mut state = ListingState::default();
    let request = state.request_page(2);
    assert_eq!(state.apply(&request, Ok(listing(2, 5, &["a", "b"]))), ApplyOutcome::Applied);
    assert_eq!(state.current_page, 2);
    assert_eq!(state.total_pages, 5);
    assert_eq!(state.users.len(), 2);
    assert!(!state.loading);
}

#[test]
fn failed_apply_keeps_previous_rows_and_page() {
    let mut state = ListingState::default();
    let first = state.reload();
    state.apply(&first, Ok(listing(1, 2, &["a"])));

    let next = state.next_page().unwrap();
    let outcome = state.apply(&next, Err(RequestError::Transport("offline".to_owned())));
    assert_eq!(outcome, ApplyOutcome::Failed);
    assert_eq!(state.current_page, 1);
    assert_eq!(state.users[0].username, "a");
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("Could not connect to the server. Error: offline"));
}

#[test]
fn stale_response_is_discarded() {
    let mut state = ListingState::default();
    let older = state.search("al");
    let newer = state.search("alice");

    assert_eq!(state.apply(&newer, Ok(listing(1, 1, &["alice"]))), ApplyOutcome::Applied);
    assert_eq!(state.apply(&older, Ok(listing(1, 4, &["al", "alan"]))), ApplyOutcome::Stale);
    assert_eq!(state.users.len(), 1);
    assert_eq!(state.total_pages, 1);
}

#[test]
fn stale_failure_does_not_clear_loading_of_newer_request() {
    let mut state = ListingState::default();
    let older = state.reload();
    let _newer = state.reload();
    state.apply(&older, Err(RequestError::Transport("timeout".to_owned())));
    assert!(state.loading);
    assert_eq!(state.error, None);
}

// =============================================================
// Rendering helpers
// =============================================================

#[test]
fn single_page_disables_both_controls() {
    let controls = PaginationControls::from_pagination(&Pagination { page: 1, pages: 1, total: 3 });
    assert!(controls.prev_disabled);
    assert!(controls.next_disabled);
}

#[test]
fn middle_page_enables_both_controls() {
    let controls = PaginationControls::from_pagination(&Pagination { page: 2, pages: 5, total: 48 });
    assert!(!controls.prev_disabled);
    assert!(!controls.next_disabled);
    assert_eq!(controls.info, "Showing page 2 of 5 (48 total users)");
}

#[test]
fn empty_listing_renders_one_placeholder_row() {
    let mut state = ListingState::default();
    let request = state.reload();
    state.apply(&request, Ok(listing(1, 0, &[])));
    assert_eq!(state.rows(), vec![UserRow::Placeholder(EMPTY_PLACEHOLDER)]);
}

#[test]
fn rows_follow_listing_order() {
    let mut state = ListingState::default();
    let request = state.reload();
    state.apply(&request, Ok(listing(1, 1, &["a", "b", "c"])));
    let names: Vec<String> = state
        .rows()
        .into_iter()
        .filter_map(|row| match row {
            UserRow::User(user) => Some(user.username),
            UserRow::Placeholder(_) => None,
        })
        .collect();
    assert_eq!(names, ["a", "b", "c"]);
}

#[test]
fn nothing_renders_before_first_listing() {
    let mut state = ListingState::default();
    let _request = state.reload();
    assert!(state.rows().is_empty());
    assert_eq!(state.controls(), None);
}

#[test]
fn failed_first_load_renders_no_placeholder() {
    let mut state = ListingState::default();
    let request = state.reload();
    state.apply(&request, Err(RequestError::Http { status: 500, message: "Failed to load users".to_owned() }));
    assert!(state.rows().is_empty());
    assert_eq!(state.controls(), None);
    assert_eq!(state.error.as_deref(), Some("Failed to load users"));
}

#[test]
fn controls_follow_applied_pagination() {
    let mut state = ListingState::default();
    let request = state.reload();
    state.apply(&request, Ok(listing(1, 2, &["a"])));
    let controls = state.controls().unwrap();
    assert!(controls.prev_disabled);
    assert!(!controls.next_disabled);
    assert_eq!(controls.info, "Showing page 1 of 2 (20 total users)");
}

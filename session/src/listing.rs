//! Paginated user-listing state machine.
//!
//! DESIGN
//! ======
//! State is `{current_page, page_limit, current_search}` plus the last
//! applied listing. Every transition that triggers a reload returns a
//! [`ListingRequest`] stamped with a fresh generation. Only the response to
//! the newest generation is applied, so when clicks overlap the last
//! *request* wins, not the last response to arrive. The requested page
//! becomes `current_page` only once its response is applied; a failed load
//! keeps the previous rows and page.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use tracing::debug;

use crate::error::RequestOutcome;
use crate::types::{Pagination, UserListing, UserSummary, UsersQuery};

/// Rows per page unless the page is configured otherwise.
pub const DEFAULT_PAGE_LIMIT: u32 = 10;
/// Text of the single row shown for an empty result.
pub const EMPTY_PLACEHOLDER: &str = "No users found";

/// One listing fetch, tagged with the generation that issued it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingRequest {
    pub generation: u64,
    pub query: UsersQuery,
}

/// What [`ListingState::apply`] did with a response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Rows and pagination were replaced.
    Applied,
    /// The error was recorded; rows and pagination were kept.
    Failed,
    /// A newer request is in flight; the response was dropped.
    Stale,
}

/// A rendered table row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserRow {
    User(UserSummary),
    Placeholder(&'static str),
}

/// Enabled state of the pager buttons plus the footer text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaginationControls {
    pub prev_disabled: bool,
    pub next_disabled: bool,
    pub info: String,
}

impl PaginationControls {
    #[must_use]
    pub fn from_pagination(pagination: &Pagination) -> Self {
        Self {
            prev_disabled: !pagination.has_previous(),
            next_disabled: !pagination.has_next(),
            info: pagination.summary(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingState {
    pub current_page: u32,
    pub total_pages: u32,
    pub page_limit: u32,
    pub current_search: String,
    /// Rows of the last applied listing.
    pub users: Vec<UserSummary>,
    /// Pagination of the last applied listing; `None` until the first load.
    pub pagination: Option<Pagination>,
    pub loading: bool,
    pub error: Option<String>,
    generation: u64,
}

impl Default for ListingState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_LIMIT)
    }
}

impl ListingState {
    #[must_use]
    pub fn new(page_limit: u32) -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            page_limit: page_limit.max(1),
            current_search: String::new(),
            users: Vec::new(),
            pagination: None,
            loading: false,
            error: None,
            generation: 0,
        }
    }

    /// Reload the current page with the current search.
    pub fn reload(&mut self) -> ListingRequest {
        self.request_page(self.current_page)
    }

    /// Request an explicit page (at least 1) with the current search.
    pub fn request_page(&mut self, page: u32) -> ListingRequest {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        let request = ListingRequest {
            generation: self.generation,
            query: UsersQuery {
                page: page.max(1),
                limit: self.page_limit,
                search: self.current_search.clone(),
            },
        };
        debug!(generation = request.generation, page = request.query.page, "listing request issued");
        request
    }

    /// Next page, or `None` on the last page.
    pub fn next_page(&mut self) -> Option<ListingRequest> {
        (self.current_page < self.total_pages).then(|| self.request_page(self.current_page + 1))
    }

    /// Previous page, or `None` on the first page.
    pub fn prev_page(&mut self) -> Option<ListingRequest> {
        (self.current_page > 1).then(|| self.request_page(self.current_page - 1))
    }

    /// Replace the search term and restart from page 1.
    pub fn search(&mut self, term: &str) -> ListingRequest {
        self.current_search = term.trim().to_owned();
        self.request_page(1)
    }

    /// Fold a response into the state, unless a newer request superseded it.
    pub fn apply(&mut self, request: &ListingRequest, outcome: RequestOutcome<UserListing>) -> ApplyOutcome {
        if request.generation != self.generation {
            debug!(
                generation = request.generation,
                latest = self.generation,
                "discarding stale listing response"
            );
            return ApplyOutcome::Stale;
        }
        self.loading = false;
        match outcome {
            Ok(listing) => {
                self.current_page = listing.pagination.page;
                self.total_pages = listing.pagination.pages;
                self.pagination = Some(listing.pagination);
                self.users = listing.users;
                self.error = None;
                ApplyOutcome::Applied
            }
            Err(error) => {
                self.error = Some(error.to_string());
                ApplyOutcome::Failed
            }
        }
    }

    /// Pager state for the committed page; `None` until a listing is applied.
    #[must_use]
    pub fn controls(&self) -> Option<PaginationControls> {
        self.pagination.as_ref().map(PaginationControls::from_pagination)
    }

    /// Table rows; an empty listing renders one placeholder row. Nothing is
    /// rendered before the first listing is applied.
    #[must_use]
    pub fn rows(&self) -> Vec<UserRow> {
        if self.pagination.is_none() {
            return Vec::new();
        }
        if self.users.is_empty() {
            return vec![UserRow::Placeholder(EMPTY_PLACEHOLDER)];
        }
        self.users.iter().cloned().map(UserRow::User).collect()
    }
}

//! # session
//!
//! Platform-neutral session & request client for the Hop Bunny frontend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page of the frontend repeats the same lifecycle: build a request,
//! call the game API, classify the HTTP outcome, update the local session,
//! update the UI, and maybe schedule a redirect. This crate owns that
//! lifecycle. It knows nothing about the DOM or a concrete HTTP stack:
//! the browser (`client`) and the command line (`cli`) plug in their own
//! [`Transport`], [`SessionStore`] backend, and [`Navigator`].

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod feedback;
pub mod guard;
pub mod listing;
pub mod navigation;
pub mod store;
pub mod transport;
pub mod types;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_support;

pub use api::ApiClient;
pub use config::{ApiConfig, Environment};
pub use controller::SessionContext;
pub use error::{Action, ConfigError, RequestError, RequestOutcome, SessionStoreError};
pub use feedback::{Feedback, Severity};
pub use guard::FormGuard;
pub use listing::{ApplyOutcome, ListingRequest, ListingState, PaginationControls, UserRow};
pub use navigation::{Navigator, Page};
pub use store::{KeyValueSessionStore, KeyValueStorage, MemorySessionStore, MemoryStorage, SessionStore};
pub use transport::{ApiRequest, ApiResponse, Method, Transport, TransportError};
pub use types::{Pagination, Profile, Session, UserListing, UserSummary, UsersQuery};
pub use validation::{LoginForm, RegisterForm};

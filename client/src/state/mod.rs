//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Only state that outlives a single page is provided through context. Page
//! state (form fields, the listing state machine) stays inside the page.

pub mod auth;

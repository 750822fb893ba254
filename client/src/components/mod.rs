//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render data handed to them by pages; only `nav_bar` reads
//! shared state from context.

pub mod feedback_message;
pub mod nav_bar;
pub mod pagination_bar;
pub mod profile_card;
pub mod user_table;

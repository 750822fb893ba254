//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic. Each one implements a `session` trait with `web-sys` under the
//! `hydrate` feature and degrades to a no-op during SSR.

pub mod navigation;
pub mod storage;

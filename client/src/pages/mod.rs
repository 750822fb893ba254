//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page binds its signals once and hands plain data to the controllers
//! in `session::controller`. Controllers return `Feedback` or view data;
//! pages only write it into signals. Rendering details live in `components`.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod register;
pub mod users;

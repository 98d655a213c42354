//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Routers decide which page to mount; pages own their local form state and
//! talk to `net::api` for auth calls.

pub mod page_not_found;
pub mod section;
pub mod sign_in;
pub mod sign_out;

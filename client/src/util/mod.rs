//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `routes` holds the path constants, builders and the matcher every router
//! and link uses, so none of them hard-code paths.

pub mod routes;

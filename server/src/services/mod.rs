//! Service layer modules.
//!
//! ARCHITECTURE
//! ============
//! Route handlers stay thin; session bookkeeping lives here so it can be
//! tested without HTTP.

pub mod session;

//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome (container, breadcrumbs, toolbar, loading
//! placeholder) and the auth provider, reading shared state from Leptos
//! context.

pub mod app_breadcrumbs;
pub mod app_toolbar;
pub mod auth_provider;
pub mod loading_indicator;
pub mod page_container;
pub mod sign_out_link;

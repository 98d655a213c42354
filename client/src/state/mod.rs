//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `redirection_path`, `breadcrumbs`,
//! `ui`). Each piece is a plain struct held in an `RwSignal` and provided
//! through Leptos context once, at app start.

pub mod auth;
pub mod breadcrumbs;
pub mod redirection_path;
pub mod ui;

use leptos::prelude::*;

use breadcrumbs::{Breadcrumb, BreadcrumbState};
use redirection_path::RedirectionPathState;
use ui::{AppToolbar, UiState};

use crate::routers::unauthenticated::EntryStores;

/// Handles to the stores routers write while navigating.
#[derive(Clone, Copy)]
pub struct AppStores {
    pub redirection: RwSignal<RedirectionPathState>,
    pub breadcrumbs: RwSignal<BreadcrumbState>,
    pub ui: RwSignal<UiState>,
}

impl AppStores {
    /// Create the stores and provide each signal as context.
    pub fn provide() -> Self {
        let stores = Self {
            redirection: RwSignal::new(RedirectionPathState::default()),
            breadcrumbs: RwSignal::new(BreadcrumbState::default()),
            ui: RwSignal::new(UiState::default()),
        };
        provide_context(stores.redirection);
        provide_context(stores.breadcrumbs);
        provide_context(stores.ui);
        stores
    }

    pub fn expect() -> Self {
        Self {
            redirection: expect_context::<RwSignal<RedirectionPathState>>(),
            breadcrumbs: expect_context::<RwSignal<BreadcrumbState>>(),
            ui: expect_context::<RwSignal<UiState>>(),
        }
    }

    pub fn set_section_chrome(&self, breadcrumbs: Vec<Breadcrumb>, toolbar: Option<AppToolbar>) {
        self.breadcrumbs.update(|state| state.set_router_breadcrumbs(breadcrumbs));
        self.ui.update(|state| state.set_app_toolbar(toolbar));
    }
}

impl EntryStores for AppStores {
    fn set_app_section_breadcrumb(&mut self, breadcrumb: Breadcrumb) {
        self.breadcrumbs.update(|state| state.set_app_section_breadcrumb(breadcrumb));
    }

    fn set_router_breadcrumbs(&mut self, breadcrumbs: Vec<Breadcrumb>) {
        self.breadcrumbs.update(|state| state.set_router_breadcrumbs(breadcrumbs));
    }

    fn remove_app_toolbar(&mut self) {
        self.ui.update(UiState::remove_app_toolbar);
    }

    fn set_redirection_path(&mut self, path: &str) {
        self.redirection.update(|state| state.set(path));
    }
}

//! Local UI chrome state (app toolbar).
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of auth and routing state so section
//! routers can swap chrome without touching navigation data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// A link button rendered in the app toolbar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToolbarAction {
    pub label: String,
    pub path: String,
}

/// Section-specific actions shown next to the breadcrumbs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppToolbar {
    pub actions: Vec<ToolbarAction>,
}

impl AppToolbar {
    pub fn with_action(mut self, label: impl Into<String>, path: impl Into<String>) -> Self {
        self.actions.push(ToolbarAction { label: label.into(), path: path.into() });
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub app_toolbar: Option<AppToolbar>,
}

impl UiState {
    pub fn set_app_toolbar(&mut self, toolbar: Option<AppToolbar>) {
        self.app_toolbar = toolbar;
    }

    pub fn remove_app_toolbar(&mut self) {
        self.app_toolbar = None;
    }
}

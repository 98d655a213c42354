//! Breadcrumb trail shown above every page.
//!
//! DESIGN
//! ======
//! The trail has two layers: one app-section crumb owned by the top-level
//! surface, and the router crumbs owned by whichever section router is
//! mounted. An empty crumb is the "nothing to show" marker for a section.

#[cfg(test)]
#[path = "breadcrumbs_test.rs"]
mod breadcrumbs_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Breadcrumb {
    pub text: String,
    /// Link target; `None` renders plain text.
    pub path: Option<String>,
}

impl Breadcrumb {
    pub fn new(text: impl Into<String>, path: Option<String>) -> Self {
        Self { text: text.into(), path }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BreadcrumbState {
    pub app_section: Option<Breadcrumb>,
    pub router: Vec<Breadcrumb>,
}

impl BreadcrumbState {
    pub fn set_app_section_breadcrumb(&mut self, breadcrumb: Breadcrumb) {
        self.app_section = Some(breadcrumb);
    }

    pub fn set_router_breadcrumbs(&mut self, breadcrumbs: Vec<Breadcrumb>) {
        self.router = breadcrumbs;
    }

    /// Crumbs to render, skipping empty markers.
    pub fn trail(&self) -> Vec<Breadcrumb> {
        self.app_section
            .iter()
            .chain(self.router.iter())
            .filter(|crumb| !crumb.is_empty())
            .cloned()
            .collect()
    }
}

//! Route table and lookup.
//!
//! # Responsibilities
//! - Declare the application's path → view table
//! - Look up the view for a URL path
//! - Return matched route or explicit no-match

use std::fmt;

/// Page-level views the application can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewId {
    /// Notes entry page.
    Landing,
    /// Analysis results page.
    Dashboard,
}

impl ViewId {
    pub fn name(self) -> &'static str {
        match self {
            ViewId::Landing => "LandingPage",
            ViewId::Dashboard => "Dashboard",
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Association between a URL path and the view rendered for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub view: ViewId,
}

const APP_ROUTES: [Route; 2] = [
    Route {
        path: "/",
        view: ViewId::Landing,
    },
    Route {
        path: "/dashboard",
        view: ViewId::Dashboard,
    },
];

/// Immutable route table.
#[derive(Debug, Clone)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    /// The application's route table: `/` and `/dashboard`.
    pub fn app() -> Self {
        Self {
            routes: APP_ROUTES.to_vec(),
        }
    }

    /// Routes in declaration order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Find the route for a URL path. Query and fragment are ignored.
    pub fn resolve(&self, location: &str) -> Option<&Route> {
        let path = route_path(location);
        self.routes.iter().find(|route| route.path == path)
    }

    /// Path registered for `view`, for building links.
    pub fn path_for(&self, view: ViewId) -> Option<&'static str> {
        self.routes
            .iter()
            .find(|route| route.view == view)
            .map(|route| route.path)
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::app()
    }
}

/// The path component of a location (`/dashboard?x=1#top` → `/dashboard`).
pub(crate) fn route_path(location: &str) -> &str {
    let end = location.find(['?', '#']).unwrap_or(location.len());
    &location[..end]
}

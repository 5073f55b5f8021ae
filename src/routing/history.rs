//! Browser-history navigation engine.
//!
//! Behaves like the HTML5 History API: a list of entries with a cursor.
//! Pushing drops any forward entries; back/forward move the cursor and stop
//! at either end.

use crate::routing::router::{Route, Router, ViewId};

/// Navigation engine bound to a [`Router`].
#[derive(Debug, Clone)]
pub struct Navigator {
    router: Router,
    entries: Vec<String>,
    index: usize,
}

impl Navigator {
    /// Start at `/`.
    pub fn new(router: Router) -> Self {
        Self::with_location(router, "/")
    }

    /// Start at an arbitrary location, as on a deep-link page load.
    pub fn with_location(router: Router, location: &str) -> Self {
        Self {
            router,
            entries: vec![location.to_string()],
            index: 0,
        }
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Navigate to `location`, adding a history entry.
    pub fn push(&mut self, location: &str) -> Option<ViewId> {
        self.entries.truncate(self.index + 1);
        self.entries.push(location.to_string());
        self.index += 1;
        tracing::debug!(location, view = ?self.current_view(), "Navigated");
        self.current_view()
    }

    /// Navigate to `location`, overwriting the current entry.
    pub fn replace(&mut self, location: &str) -> Option<ViewId> {
        self.entries[self.index] = location.to_string();
        self.current_view()
    }

    /// Move `delta` entries through history. Out-of-range moves are ignored
    /// and return false.
    pub fn go(&mut self, delta: isize) -> bool {
        let Some(target) = self.index.checked_add_signed(delta) else {
            return false;
        };
        if target >= self.entries.len() {
            return false;
        }
        self.index = target;
        true
    }

    pub fn back(&mut self) -> bool {
        self.go(-1)
    }

    pub fn forward(&mut self) -> bool {
        self.go(1)
    }

    pub fn current_path(&self) -> &str {
        &self.entries[self.index]
    }

    pub fn current_route(&self) -> Option<&Route> {
        self.router.resolve(self.current_path())
    }

    /// View for the current location, `None` when no route matches.
    pub fn current_view(&self) -> Option<ViewId> {
        self.current_route().map(|route| route.view)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Router::app())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_root() {
        let nav = Navigator::default();
        assert_eq!(nav.current_path(), "/");
        assert_eq!(nav.current_view(), Some(ViewId::Landing));
        assert_eq!(nav.len(), 1);
    }

    #[test]
    fn test_push_back_forward() {
        let mut nav = Navigator::default();
        assert_eq!(nav.push("/dashboard"), Some(ViewId::Dashboard));

        assert!(nav.back());
        assert_eq!(nav.current_view(), Some(ViewId::Landing));
        assert!(!nav.back());

        assert!(nav.forward());
        assert_eq!(nav.current_path(), "/dashboard");
        assert!(!nav.forward());
    }

    #[test]
    fn test_push_discards_forward_entries() {
        let mut nav = Navigator::default();
        nav.push("/dashboard");
        nav.push("/dashboard?week=2");
        nav.go(-2);
        nav.push("/dashboard#tasks");

        assert_eq!(nav.len(), 2);
        assert!(!nav.forward());
        assert_eq!(nav.current_path(), "/dashboard#tasks");
    }

    #[test]
    fn test_replace_keeps_length() {
        let mut nav = Navigator::default();
        assert_eq!(nav.replace("/dashboard"), Some(ViewId::Dashboard));
        assert_eq!(nav.len(), 1);
        assert!(!nav.back());
    }

    #[test]
    fn test_unmatched_location_has_no_view() {
        let mut nav = Navigator::default();
        assert_eq!(nav.push("/missing"), None);
        assert_eq!(nav.current_path(), "/missing");
        assert!(nav.current_route().is_none());
    }

    #[test]
    fn test_deep_link() {
        let nav = Navigator::with_location(Router::app(), "/dashboard");
        assert_eq!(nav.current_view(), Some(ViewId::Dashboard));
    }
}

//! Route table and navigation through the public API.

use opsnotes::routing::{Navigator, Router, ViewId};
use opsnotes::views;

#[test]
fn test_only_two_routes_declared() {
    let router = Router::app();
    assert_eq!(router.routes().len(), 2);
    assert_eq!(router.resolve("/").unwrap().view, ViewId::Landing);
    assert_eq!(router.resolve("/dashboard").unwrap().view, ViewId::Dashboard);
    assert!(router.resolve("/api/analyze/").is_none());
}

#[test]
fn test_views_render_per_route() {
    let mut nav = Navigator::default();
    let landing = views::render(nav.current_view().unwrap(), None);
    assert!(landing.contains("/api/analyze/"));

    nav.push("/dashboard");
    let dashboard = views::render(nav.current_view().unwrap(), None);
    assert!(dashboard.contains("No analysis yet"));

    nav.push("/nowhere");
    assert_eq!(nav.current_view(), None);
    assert_eq!(views::render_not_found(nav.current_path()), "404: no view for `/nowhere`\n");

    assert!(nav.back());
    assert_eq!(nav.current_view(), Some(ViewId::Dashboard));
}

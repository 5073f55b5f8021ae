//! Plain-text renderings of the page-level views.
//!
//! The router only selects a [`ViewId`]; these functions turn that choice
//! into something a terminal can show.

pub mod dashboard;
pub mod landing;

use serde_json::Value;

use crate::api::AnalysisReport;
use crate::routing::{Router, ViewId};

/// Render `view`. The dashboard needs a report; without one it shows an
/// empty state.
pub fn render(view: ViewId, report: Option<&AnalysisReport>) -> String {
    match (view, report) {
        (ViewId::Landing, _) => landing::render(),
        (ViewId::Dashboard, Some(report)) => dashboard::render(report),
        (ViewId::Dashboard, None) => dashboard::render_empty(),
    }
}

/// Shown when a location matches no route.
pub fn render_not_found(path: &str) -> String {
    format!("404: no view for `{path}`\n")
}

/// Render the view for `location` from a raw 2xx analysis payload.
///
/// The dashboard decodes the payload as an [`AnalysisReport`]. A payload that
/// fails the shape check or the typed decode is shown as pretty JSON instead.
pub fn render_response(router: &Router, location: &str, value: &Value) -> String {
    let Some(route) = router.resolve(location) else {
        return render_not_found(location);
    };
    if route.view != ViewId::Dashboard {
        return render(route.view, None);
    }

    let report = AnalysisReport::check_shape(value).and_then(|()| {
        serde_json::from_value::<AnalysisReport>(value.clone()).map_err(|e| e.to_string())
    });
    match report {
        Ok(report) => render(route.view, Some(&report)),
        Err(why) => {
            tracing::warn!(reason = %why, "Response does not match the report contract");
            format!("{value:#}\n")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_payload() -> Value {
        json!({
            "priorities": [{"title": "Ship v2", "reason": "Launch", "urgency": "high"}],
            "tasks": [],
            "blockers": [],
            "weekly_report": {},
            "questions": [],
            "meta": {"received_chars": 7, "mode": "nova"}
        })
    }

    #[test]
    fn test_dashboard_from_valid_payload() {
        let text = render_response(&Router::app(), "/dashboard", &full_payload());
        assert!(text.starts_with("Dashboard\n"));
        assert!(text.contains("[high] Ship v2: Launch"));
    }

    #[test]
    fn test_shape_failure_falls_back_to_json() {
        let value = json!({"result": "ok"});
        let text = render_response(&Router::app(), "/dashboard", &value);
        assert_eq!(text, format!("{value:#}\n"));
        assert!(text.contains("\"result\": \"ok\""));
    }

    #[test]
    fn test_decode_failure_falls_back_to_json() {
        // Top-level shape is fine, nested fields are not.
        let value = json!({
            "priorities": [{"title": "x", "reason": "y"}],
            "tasks": [{"title": "t", "owner": "o", "due": null, "status": "todo", "confidence": null}],
            "blockers": [],
            "weekly_report": {},
            "questions": [],
            "meta": {"mode": "nova"}
        });
        assert_eq!(AnalysisReport::check_shape(&value), Ok(()));

        let text = render_response(&Router::app(), "/dashboard", &value);
        assert_eq!(text, format!("{value:#}\n"));
    }

    #[test]
    fn test_other_locations() {
        let router = Router::app();
        assert_eq!(render_response(&router, "/", &full_payload()), landing::render());
        assert_eq!(
            render_response(&router, "/reports", &full_payload()),
            "404: no view for `/reports`\n"
        );
    }
}

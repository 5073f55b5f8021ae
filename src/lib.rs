//! Ops-notes analyzer client shell.
//!
//! Two leaf utilities with no dependency between them:
//! - [`routing`]: the path → view table and a browser-history navigator
//! - [`api`]: the `POST /api/analyze/` client

pub mod api;
pub mod config;
pub mod observability;
pub mod routing;
pub mod views;

pub use api::{AnalyzeClient, ApiError};
pub use config::AppConfig;
pub use routing::{Navigator, Router, ViewId};

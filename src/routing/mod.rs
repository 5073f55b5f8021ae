//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Navigation (push / replace / back / forward)
//!     → history.rs (browser-style history stack of real URL paths)
//!     → router.rs (strip query & fragment, exact path lookup)
//!     → Return: matched Route (→ ViewId) or None
//!
//! Route table (at startup):
//!     Router::app()
//!     → two static routes: "/" and "/dashboard"
//!     → frozen as immutable Router
//! ```
//!
//! # Design Decisions
//! - Routes declared once, immutable at runtime
//! - Web-history mode: paths are real URL paths, never `#` fragments
//! - Exact matching, no guards, lazy loading or nesting
//! - Explicit None for unmatched paths rather than a silent default

pub mod history;
pub mod router;

pub use history::Navigator;
pub use router::{Route, Router, ViewId};

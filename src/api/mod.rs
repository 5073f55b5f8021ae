//! Analysis backend client.
//!
//! # Data Flow
//! ```text
//! notes_text
//!     → client.rs (build POST {base}/api/analyze/ with JSON body)
//!     → transport.rs (send; reqwest in production)
//!     → client.rs (2xx: decode JSON, else RequestFailure)
//!     → caller (Value, AnalysisReport, or any Deserialize type)
//! ```
//!
//! # Design Decisions
//! - Exactly one request per call: no retry, timeout, cache or dedup
//! - Base origin injected at construction, never read from the environment
//! - Transport errors pass through untranslated
//! - Response payload is backend-owned; callers pick the decoded type

pub mod client;
pub mod error;
pub mod transport;
pub mod types;

pub use client::{AnalyzeClient, ANALYZE_PATH};
pub use error::ApiError;
pub use transport::{ReqwestTransport, Transport};
pub use types::{AnalysisReport, AnalyzeRequest};

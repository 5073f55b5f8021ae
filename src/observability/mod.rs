//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! api / routing
//!     → tracing events (structured fields)
//!     → logging.rs subscriber (EnvFilter + fmt layer)
//!     → stderr (pretty or JSON)
//! ```

pub mod logging;

pub use logging::init_logging;

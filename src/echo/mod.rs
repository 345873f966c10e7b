//! Echo Lambda: reflects the invocation event and context back as JSON

pub mod handler;

// Re-export the main handler for convenience
pub use handler::{handler, respond};

//! Hello Lambda: answers every invocation with a static HTML greeting

pub mod handler;

// Re-export the main handler for convenience
pub use handler::{HELLO_HTML, handler, respond};

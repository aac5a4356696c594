//! One explicit read of process-wide ambient state.
//!
//! # Responsibilities
//! - Snapshot the CGI meta-variables of the current process environment
//! - Filter out variables unrelated to the request
//!
//! # Design Decisions
//! - Called once per construction; nothing else in the crate reads
//!   `std::env` so every other path stays pure and testable

use super::snapshot::Environment;

/// Capture the current process environment as a request snapshot.
pub fn capture() -> Environment {
    let mut builder = Environment::builder();
    let mut count = 0usize;
    for (name, value) in std::env::vars() {
        if is_request_var(&name) {
            builder = builder.var(name, value);
            count += 1;
        }
    }
    tracing::debug!(vars = count, "captured request environment");
    builder.build()
}

/// CGI meta-variables that describe the incoming request.
fn is_request_var(name: &str) -> bool {
    matches!(
        name,
        "QUERY_STRING"
            | "REQUEST_URI"
            | "REQUEST_METHOD"
            | "CONTENT_TYPE"
            | "CONTENT_LENGTH"
            | "PATH_INFO"
            | "SCRIPT_NAME"
            | "REMOTE_ADDR"
            | "REMOTE_PORT"
    ) || name.starts_with("HTTP_")
        || name.starts_with("SERVER_")
}

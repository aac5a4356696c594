//! Request value objects.
//!
//! # Data Flow
//! ```text
//! Environment snapshot
//!     → [factory backend decodes target + query]
//!     → query.rs (ordered key/value mapping)
//!     → server_request.rs (immutable ServerRequest)
//!     → caller reads accessors, then discards
//! ```
//!
//! # Design Decisions
//! - ServerRequest is immutable after construction; accessors only
//! - Query pairs keep parse order; lookup returns the last value for a
//!   duplicated key
//! - Whatever backend produced it, the query mapping always equals the
//!   URL-decoded raw query string

pub mod query;
pub mod server_request;

pub use query::QueryParams;
pub use server_request::{ServerRequest, ServerRequestParts};

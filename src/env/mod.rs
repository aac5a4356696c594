//! Environment snapshot subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (CGI meta-variables)
//!     → capture.rs (one explicit read, filter request vars)
//!     → snapshot.rs (immutable Environment)
//!     → handed to a request factory backend
//!
//! Test path:
//!     EnvironmentBuilder (explicit vars)
//!     → snapshot.rs (same immutable Environment)
//! ```
//!
//! # Design Decisions
//! - Ambient state is read exactly once, at capture time; backends only
//!   ever see the immutable snapshot
//! - `HTTP_*` variables become request headers (CGI convention)
//! - Missing variables get conservative defaults ("" query, "/" URI)

pub mod capture;
pub mod snapshot;

pub use capture::capture;
pub use snapshot::{Environment, EnvironmentBuilder};

//! Server request construction over interchangeable HTTP-message backends.
//!
//! Builds an immutable [`ServerRequest`] from a CGI-style [`Environment`]
//! snapshot by delegating to exactly one pluggable [`RequestFactory`]
//! backend, either injected explicitly or discovered by probing the
//! compiled-in backends in priority order.

pub mod config;
pub mod env;
pub mod factory;
pub mod request;

pub use config::BuilderConfig;
pub use env::{Environment, EnvironmentBuilder};
pub use factory::{BackendKind, FactoryError, RequestFactory, ServerRequestBuilder};
pub use request::{QueryParams, ServerRequest};

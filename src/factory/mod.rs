//! Request factory subsystem.
//!
//! # Data Flow
//! ```text
//! ServerRequestBuilder::from_globals()
//!     → registry.rs (probe compiled-in backends, first match wins)
//!     → env::capture() (one read of ambient state)
//!     → backend.create(&env)
//!         http_factory.rs (http::Uri + form_urlencoded)  or
//!         url_factory.rs  (url::Url + query_pairs)
//!     → immutable ServerRequest
//!
//! Explicit injection:
//!     ServerRequestBuilder::new(backend) → build(&env) → ServerRequest
//! ```
//!
//! # Design Decisions
//! - Backends are a closed set of kinds known at compile time; a cargo
//!   feature governs whether each is compiled in
//! - Probe order is fixed by default but configurable; first match wins
//! - Zero loadable backends is a hard configuration error, never a
//!   degraded request

pub mod backend;
pub mod builder;
pub mod registry;
pub mod types;

#[cfg(feature = "backend-http")]
pub mod http_factory;
#[cfg(feature = "backend-url")]
pub mod url_factory;

pub use backend::{BackendKind, RequestFactory};
pub use builder::ServerRequestBuilder;
pub use types::{FactoryError, FactoryResult};

#[cfg(feature = "backend-http")]
pub use http_factory::HttpUriFactory;
#[cfg(feature = "backend-url")]
pub use url_factory::UrlFactory;

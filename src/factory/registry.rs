//! Backend availability probe.
//!
//! # Responsibilities
//! - Report which backend kinds are compiled into this build
//! - Instantiate a backend for a given kind
//! - Walk a priority order and return the first loadable backend
//!
//! # Design Decisions
//! - Availability is decided at compile time by cargo features; the
//!   probe only selects among what the build carries
//! - First match wins; the miss path is logged so a surprising winner
//!   can be diagnosed from debug output

use std::sync::Arc;

use super::backend::{BackendKind, RequestFactory};
use super::types::{FactoryError, FactoryResult};

#[cfg(feature = "backend-http")]
use super::http_factory::HttpUriFactory;
#[cfg(feature = "backend-url")]
use super::url_factory::UrlFactory;

/// Backend kinds compiled into this build, in default probe order.
#[allow(unused_mut)]
pub fn available() -> Vec<BackendKind> {
    let mut kinds: Vec<BackendKind> = Vec::new();
    #[cfg(feature = "backend-http")]
    kinds.push(BackendKind::Http);
    #[cfg(feature = "backend-url")]
    kinds.push(BackendKind::Url);
    kinds
}

/// Instantiate the backend for `kind`, or `None` when its feature is
/// not compiled in.
pub fn instantiate(kind: BackendKind) -> Option<Arc<dyn RequestFactory>> {
    match kind {
        #[cfg(feature = "backend-http")]
        BackendKind::Http => Some(Arc::new(HttpUriFactory::new())),
        #[cfg(feature = "backend-url")]
        BackendKind::Url => Some(Arc::new(UrlFactory::new())),
        #[allow(unreachable_patterns)]
        _ => None,
    }
}

/// Instantiate the backend for `kind`, failing when its feature is not
/// compiled in.
pub fn require(kind: BackendKind) -> FactoryResult<Arc<dyn RequestFactory>> {
    instantiate(kind).ok_or(FactoryError::BackendUnavailable { kind })
}

/// Probe `order` and return the first loadable backend.
pub fn probe(order: &[BackendKind]) -> FactoryResult<Arc<dyn RequestFactory>> {
    for kind in order {
        match instantiate(*kind) {
            Some(backend) => {
                tracing::debug!(backend = %kind, "request factory backend selected");
                return Ok(backend);
            }
            None => {
                tracing::debug!(backend = %kind, "backend not compiled in, trying next");
            }
        }
    }

    let tried: Vec<&str> = order.iter().map(BackendKind::as_str).collect();
    Err(FactoryError::NoBackend {
        tried: tried.join(", "),
    })
}

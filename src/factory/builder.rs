//! The request builder bound to one backend.
//!
//! # Responsibilities
//! - Hold the backend chosen by injection or discovery
//! - Construct requests from explicit snapshots or from globals
//!
//! # Design Decisions
//! - A builder is bound to exactly one backend for its lifetime;
//!   re-discovery means constructing a new builder
//! - `from_globals` is the only path that touches ambient state, and it
//!   does so through `env::capture` alone

use std::sync::Arc;

use crate::config::BuilderConfig;
use crate::env::{self, Environment};
use crate::request::ServerRequest;

use super::backend::{BackendKind, RequestFactory};
use super::registry;
use super::types::FactoryResult;

/// Builds server requests through a single bound backend.
#[derive(Debug, Clone)]
pub struct ServerRequestBuilder {
    backend: Arc<dyn RequestFactory>,
}

impl ServerRequestBuilder {
    /// Bind to an explicitly injected backend.
    pub fn new(backend: Arc<dyn RequestFactory>) -> Self {
        Self { backend }
    }

    /// Discover a backend using the default probe order.
    pub fn discover() -> FactoryResult<Self> {
        Self::with_order(&BackendKind::DEFAULT_ORDER)
    }

    /// Discover a backend using a caller-supplied probe order.
    pub fn with_order(order: &[BackendKind]) -> FactoryResult<Self> {
        Ok(Self::new(registry::probe(order)?))
    }

    /// Bind to one specific backend kind, failing when it is not
    /// compiled into this build.
    pub fn with_kind(kind: BackendKind) -> FactoryResult<Self> {
        Ok(Self::new(registry::require(kind)?))
    }

    /// Discover a backend using the configured probe order.
    pub fn from_config(config: &BuilderConfig) -> FactoryResult<Self> {
        Self::with_order(&config.backend_order)
    }

    /// Name of the bound backend.
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Construct a request from an explicit snapshot.
    pub fn build(&self, env: &Environment) -> FactoryResult<ServerRequest> {
        self.backend.create(env)
    }

    /// Discover a backend, capture the process environment once, and
    /// construct the request. Fails fast when no backend is compiled in.
    pub fn from_globals() -> FactoryResult<ServerRequest> {
        let builder = Self::discover()?;
        tracing::debug!(backend = builder.backend_name(), "building request from globals");
        builder.build(&env::capture())
    }
}

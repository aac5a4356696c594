//! The pluggable backend capability.
//!
//! # Responsibilities
//! - Define the one operation every backend provides: construct a
//!   request from an environment snapshot
//! - Name the closed set of backend kinds the registry can probe
//!
//! # Design Decisions
//! - Trait is object-safe; builders hold `Arc<dyn RequestFactory>` so
//!   any conforming implementation can be substituted
//! - `BackendKind` stays independent of the trait: external impls can
//!   exist without extending the probe set

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::env::Environment;
use crate::request::ServerRequest;

use super::types::FactoryResult;

/// Capability of constructing a server request from environment data.
pub trait RequestFactory: Send + Sync + fmt::Debug {
    /// Short stable name of this backend, for logs and binding checks.
    fn name(&self) -> &'static str;

    /// Construct an immutable request from the snapshot.
    fn create(&self, env: &Environment) -> FactoryResult<ServerRequest>;
}

/// The backend variants auto-discovery knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    /// `http` crate URI parsing with `form_urlencoded` decoding.
    Http,
    /// `url` crate parsing and decoding.
    Url,
}

impl BackendKind {
    /// Default probe order for auto-discovery.
    pub const DEFAULT_ORDER: [BackendKind; 2] = [BackendKind::Http, BackendKind::Url];

    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Http => "http",
            BackendKind::Url => "url",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display() {
        assert_eq!(BackendKind::Http.to_string(), "http");
        assert_eq!(BackendKind::Url.to_string(), "url");
    }

    #[test]
    fn test_kind_serde_names() {
        #[derive(serde::Deserialize)]
        struct Wrapper {
            kinds: Vec<BackendKind>,
        }
        let parsed: Wrapper = toml::from_str(r#"kinds = ["url", "http"]"#).unwrap();
        assert_eq!(parsed.kinds, vec![BackendKind::Url, BackendKind::Http]);
    }
}

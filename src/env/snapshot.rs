//! Immutable snapshot of the incoming request's environment.
//!
//! # Responsibilities
//! - Hold CGI-style variables (name → value) for one request
//! - Derive request headers from `HTTP_*` variables
//! - Carry an optional pre-parsed query map alongside the raw string
//!
//! # Design Decisions
//! - Immutable once built; backends never observe ambient state directly
//! - The raw query string is the source of truth; the pre-parsed map is
//!   a fallback for embedders that never had the raw string
//! - Variable names follow the CGI meta-variable convention so captured
//!   and hand-built snapshots look identical to backends

use std::collections::BTreeMap;

/// Well-known CGI meta-variable names.
pub const QUERY_STRING: &str = "QUERY_STRING";
pub const REQUEST_URI: &str = "REQUEST_URI";
pub const REQUEST_METHOD: &str = "REQUEST_METHOD";

const HEADER_PREFIX: &str = "HTTP_";

/// Read-only environment data for a single request construction call.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    vars: BTreeMap<String, String>,
    headers: Vec<(String, String)>,
    parsed_query: Vec<(String, String)>,
}

impl Environment {
    /// Start building a snapshot from explicit values.
    pub fn builder() -> EnvironmentBuilder {
        EnvironmentBuilder::default()
    }

    /// Raw query string, or "" when none was provided.
    pub fn query_string(&self) -> &str {
        self.var(QUERY_STRING).unwrap_or("")
    }

    /// Request URI as received, or "/" when none was provided.
    pub fn request_uri(&self) -> &str {
        self.var(REQUEST_URI).unwrap_or("/")
    }

    /// Request method, or "GET" when none was provided.
    pub fn method(&self) -> &str {
        self.var(REQUEST_METHOD).unwrap_or("GET")
    }

    /// Look up a single variable by its CGI name.
    pub fn var(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// All captured variables.
    pub fn vars(&self) -> &BTreeMap<String, String> {
        &self.vars
    }

    /// Request headers derived from `HTTP_*` variables, in capture order.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Pre-parsed query pairs supplied by the embedder, if any.
    pub fn parsed_query(&self) -> &[(String, String)] {
        &self.parsed_query
    }

    /// The full request target: URI joined with the query string when the
    /// URI does not already carry one.
    pub fn request_target(&self) -> String {
        let uri = self.request_uri();
        let qs = self.query_string();
        if qs.is_empty() || uri.contains('?') {
            uri.to_string()
        } else {
            format!("{uri}?{qs}")
        }
    }
}

/// Explicit construction of an [`Environment`], for tests and embedders.
#[derive(Debug, Default)]
pub struct EnvironmentBuilder {
    vars: BTreeMap<String, String>,
    headers: Vec<(String, String)>,
    parsed_query: Vec<(String, String)>,
}

impl EnvironmentBuilder {
    /// Set one variable by its CGI name. `HTTP_*` variables are also
    /// exposed as request headers.
    pub fn var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        if let Some(raw) = name.strip_prefix(HEADER_PREFIX) {
            self.headers.push((header_name(raw), value.clone()));
        }
        self.vars.insert(name, value);
        self
    }

    /// Set the raw query string.
    pub fn query_string(self, value: impl Into<String>) -> Self {
        self.var(QUERY_STRING, value)
    }

    /// Set the request URI.
    pub fn request_uri(self, value: impl Into<String>) -> Self {
        self.var(REQUEST_URI, value)
    }

    /// Set the request method.
    pub fn method(self, value: impl Into<String>) -> Self {
        self.var(REQUEST_METHOD, value)
    }

    /// Append one pre-parsed query pair.
    pub fn query_pair(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parsed_query.push((key.into(), value.into()));
        self
    }

    /// Freeze the snapshot.
    pub fn build(self) -> Environment {
        Environment {
            vars: self.vars,
            headers: self.headers,
            parsed_query: self.parsed_query,
        }
    }
}

/// `HTTP_USER_AGENT` → `user-agent`.
fn header_name(raw: &str) -> String {
    raw.to_lowercase().replace('_', "-")
}

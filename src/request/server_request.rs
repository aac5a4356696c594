//! Immutable server request value object.
//!
//! # Responsibilities
//! - Expose the parsed request to the caller: method, target, path,
//!   query string, query parameters, headers, server variables
//! - Guarantee nothing changes after construction
//!
//! # Design Decisions
//! - Built from a parts struct so backends assemble it in one place
//! - No setters, no interior mutability; one request per construction

use std::collections::BTreeMap;

use super::query::QueryParams;

/// Everything a backend assembles before freezing a [`ServerRequest`].
#[derive(Debug, Clone, Default)]
pub struct ServerRequestParts {
    pub method: String,
    pub target: String,
    pub path: String,
    pub query_string: String,
    pub query: QueryParams,
    pub headers: Vec<(String, String)>,
    pub server: BTreeMap<String, String>,
}

/// An immutable HTTP server request.
#[derive(Debug, Clone)]
pub struct ServerRequest {
    method: String,
    target: String,
    path: String,
    query_string: String,
    query: QueryParams,
    headers: Vec<(String, String)>,
    server: BTreeMap<String, String>,
}

impl ServerRequest {
    /// Freeze a request from backend-assembled parts.
    pub fn from_parts(parts: ServerRequestParts) -> Self {
        Self {
            method: parts.method,
            target: parts.target,
            path: parts.path,
            query_string: parts.query_string,
            query: parts.query,
            headers: parts.headers,
            server: parts.server,
        }
    }

    /// Request method as received (e.g. "GET").
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Full request target, including the query string when present.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Decoded path component.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Raw query string, "" when the request carried none.
    pub fn query_string(&self) -> &str {
        &self.query_string
    }

    /// Decoded query parameters in parse order.
    pub fn query_params(&self) -> &QueryParams {
        &self.query
    }

    /// Request headers in capture order.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// First header value matching `name` (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Server variables the request was constructed from.
    pub fn server_params(&self) -> &BTreeMap<String, String> {
        &self.server
    }
}

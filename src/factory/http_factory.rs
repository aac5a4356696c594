//! Backend built on the `http` crate.
//!
//! # Responsibilities
//! - Parse the request target through `http::Uri`
//! - Decode the query string with `form_urlencoded`
//!
//! # Design Decisions
//! - Decoding follows standard URL rules: `&`-separated pairs,
//!   `=`-separated key/value, percent-decoding, `+` as space
//! - Falls back to the snapshot's pre-parsed query map only when no raw
//!   query string was captured

use http::Uri;

use crate::env::Environment;
use crate::request::{QueryParams, ServerRequest, ServerRequestParts};

use super::backend::RequestFactory;
use super::types::{FactoryError, FactoryResult};

/// Request factory delegating to the `http` crate.
#[derive(Debug, Default)]
pub struct HttpUriFactory;

impl HttpUriFactory {
    pub fn new() -> Self {
        Self
    }
}

impl RequestFactory for HttpUriFactory {
    fn name(&self) -> &'static str {
        "http"
    }

    fn create(&self, env: &Environment) -> FactoryResult<ServerRequest> {
        let target = env.request_target();
        let uri: Uri = target.parse().map_err(|e: http::uri::InvalidUri| {
            FactoryError::InvalidUri {
                uri: target.clone(),
                reason: e.to_string(),
            }
        })?;

        let query_string = uri.query().unwrap_or("").to_string();
        let query: QueryParams = if query_string.is_empty() {
            env.parsed_query().iter().cloned().collect()
        } else {
            form_urlencoded::parse(query_string.as_bytes())
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect()
        };

        Ok(ServerRequest::from_parts(ServerRequestParts {
            method: env.method().to_string(),
            target,
            path: uri.path().to_string(),
            query_string,
            query,
            headers: env.headers().to_vec(),
            server: env.vars().clone(),
        }))
    }
}

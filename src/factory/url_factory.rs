//! Backend built on the `url` crate.
//!
//! # Responsibilities
//! - Parse the request target through `url::Url` against a fixed base
//! - Decode the query string with `Url::query_pairs`
//!
//! # Design Decisions
//! - A synthetic base URL anchors relative targets; it never leaks into
//!   the produced request
//! - Decoding semantics match the http backend exactly, so the query
//!   mapping is backend-independent

use url::Url;

use crate::env::Environment;
use crate::request::{QueryParams, ServerRequest, ServerRequestParts};

use super::backend::RequestFactory;
use super::types::{FactoryError, FactoryResult};

const BASE_URL: &str = "http://localhost/";

/// Request factory delegating to the `url` crate.
#[derive(Debug, Default)]
pub struct UrlFactory;

impl UrlFactory {
    pub fn new() -> Self {
        Self
    }
}

impl RequestFactory for UrlFactory {
    fn name(&self) -> &'static str {
        "url"
    }

    fn create(&self, env: &Environment) -> FactoryResult<ServerRequest> {
        let target = env.request_target();
        let base = Url::parse(BASE_URL).map_err(|e| FactoryError::InvalidUri {
            uri: BASE_URL.to_string(),
            reason: e.to_string(),
        })?;
        let url = Url::options()
            .base_url(Some(&base))
            .parse(&target)
            .map_err(|e| FactoryError::InvalidUri {
                uri: target.clone(),
                reason: e.to_string(),
            })?;

        let query_string = url.query().unwrap_or("").to_string();
        let query: QueryParams = if query_string.is_empty() {
            env.parsed_query().iter().cloned().collect()
        } else {
            url.query_pairs()
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect()
        };

        Ok(ServerRequest::from_parts(ServerRequestParts {
            method: env.method().to_string(),
            target,
            path: url.path().to_string(),
            query_string,
            query,
            headers: env.headers().to_vec(),
            server: env.vars().clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_query_string() {
        let env = Environment::builder()
            .request_uri("/test-page.php")
            .query_string("foo=bar&blob=baz")
            .build();
        let req = UrlFactory::new().create(&env).unwrap();
        assert_eq!(req.path(), "/test-page.php");
        assert_eq!(*req.query_params(), [("foo", "bar"), ("blob", "baz")]);
    }

    #[test]
    fn test_percent_and_plus_decoding() {
        let env = Environment::builder()
            .request_uri("/search")
            .query_string("q=hello+world&lang=en%2DUS")
            .build();
        let req = UrlFactory::new().create(&env).unwrap();
        assert_eq!(req.query_params().get("q"), Some("hello world"));
        assert_eq!(req.query_params().get("lang"), Some("en-US"));
    }

    #[test]
    fn test_empty_query() {
        let env = Environment::builder().request_uri("/plain").build();
        let req = UrlFactory::new().create(&env).unwrap();
        assert!(req.query_params().is_empty());
    }

    #[test]
    fn test_pre_parsed_fallback() {
        let env = Environment::builder()
            .request_uri("/page")
            .query_pair("foo", "bar")
            .build();
        let req = UrlFactory::new().create(&env).unwrap();
        assert_eq!(*req.query_params(), [("foo", "bar")]);
    }

    #[test]
    fn test_base_url_never_leaks() {
        let env = Environment::builder().request_uri("/plain").build();
        let req = UrlFactory::new().create(&env).unwrap();
        assert_eq!(req.target(), "/plain");
        assert_eq!(req.path(), "/plain");
    }
}

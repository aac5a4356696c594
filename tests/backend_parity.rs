//! Every compiled-in backend must decode the same environment into the
//! same query-parameter mapping.

mod common;

use request_builder::factory::registry;
use request_builder::{Environment, ServerRequestBuilder};

#[test]
fn every_backend_decodes_the_test_page_scenario() {
    common::init_tracing();
    let env = common::test_page_env();

    for kind in registry::available() {
        let backend = registry::instantiate(kind).unwrap();
        let builder = ServerRequestBuilder::new(backend);
        let req = builder.build(&env).unwrap();

        assert_eq!(
            *req.query_params(),
            [("foo", "bar"), ("blob", "baz")],
            "backend '{kind}' produced a different query mapping"
        );
        assert_eq!(req.path(), "/test-page.php");
        assert_eq!(req.query_string(), "foo=bar&blob=baz");
        assert_eq!(req.method(), "GET");
    }
}

#[test]
fn every_backend_accepts_explicit_injection() {
    common::init_tracing();

    for kind in registry::available() {
        let backend = registry::instantiate(kind).unwrap();
        let builder = ServerRequestBuilder::new(backend);
        assert_eq!(builder.backend_name(), kind.as_str());
    }
}

#[test]
fn backends_agree_on_percent_decoding() {
    common::init_tracing();
    let env = Environment::builder()
        .request_uri("/search")
        .query_string("q=hello+world&tag=a%26b&empty=")
        .build();

    let mut decoded: Vec<Vec<(String, String)>> = Vec::new();
    for kind in registry::available() {
        let backend = registry::instantiate(kind).unwrap();
        let req = ServerRequestBuilder::new(backend).build(&env).unwrap();
        assert_eq!(req.query_params().get("q"), Some("hello world"));
        assert_eq!(req.query_params().get("tag"), Some("a&b"));
        assert_eq!(req.query_params().get("empty"), Some(""));
        decoded.push(req.query_params().pairs().to_vec());
    }

    if let Some(first) = decoded.first() {
        for other in &decoded[1..] {
            assert_eq!(first, other, "backends disagree on decoding");
        }
    }
}

#[test]
fn headers_and_server_params_survive_construction() {
    common::init_tracing();
    let env = Environment::builder()
        .request_uri("/test-page.php")
        .query_string("foo=bar")
        .method("POST")
        .var("HTTP_HOST", "example.com")
        .var("REMOTE_ADDR", "10.0.0.1")
        .build();

    for kind in registry::available() {
        let backend = registry::instantiate(kind).unwrap();
        let req = ServerRequestBuilder::new(backend).build(&env).unwrap();
        assert_eq!(req.method(), "POST");
        assert_eq!(req.header("host"), Some("example.com"));
        assert_eq!(
            req.server_params().get("REMOTE_ADDR").map(String::as_str),
            Some("10.0.0.1")
        );
    }
}

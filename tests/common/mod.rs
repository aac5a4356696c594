//! Shared fixtures for integration tests.

use request_builder::Environment;

/// Install a test subscriber so probe decisions show up under
/// `RUST_LOG=debug`. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// The canonical scenario: `/test-page.php` with `foo=bar&blob=baz`.
pub fn test_page_env() -> Environment {
    Environment::builder()
        .request_uri("/test-page.php")
        .query_string("foo=bar&blob=baz")
        .build()
}

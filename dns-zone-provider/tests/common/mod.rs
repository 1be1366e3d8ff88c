//! Shared helpers for the live API tests

#![allow(dead_code)]

use std::sync::Arc;

use dns_zone_provider::{DnsZoneApi, ProviderConfig, create_client};

/// Skip the test when an environment variable is missing
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("skipping test: missing environment variable {}", $var);
                return;
            }
        )+
    };
}

/// Assert that an `Option` is `Some` and unwrap it (fails the test otherwise).
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// Assert that a `Result` is `Ok` and unwrap it (fails the test otherwise).
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Unique throwaway domain for a test run
pub fn generate_test_domain() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("zone-test-{}.example", &uuid.to_string()[..8])
}

/// Test context: a live client plus the zones it created
pub struct TestContext {
    pub client: Arc<dyn DnsZoneApi>,
    pub domain: String,
}

impl TestContext {
    /// Context built from `BUNNY_API_KEY` (and optionally `BUNNY_API_URL`)
    pub fn bunny() -> Option<Self> {
        let config = ProviderConfig::from_env().ok()?;
        let client = create_client(&config).ok()?;
        Some(Self {
            client,
            domain: generate_test_domain(),
        })
    }

    /// Best-effort removal of a zone created by a test
    pub async fn cleanup_zone(&self, id: i64) {
        let _ = self.client.delete_zone(id).await;
    }
}

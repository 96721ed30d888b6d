pub mod builders;

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt};

static INIT: Once = Once::new();

/// Initialise tracing for tests.
///
/// - Uses `with_test_writer()`, so logs are captured per-test.
/// - The Rust test harness only prints captured output for **failing** tests
///   (unless you run with `-- --nocapture`).
///
/// Enable levels with e.g.:
/// `RUST_LOG=debug cargo test`
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

        let _ = fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .try_init();
    });
}

/// Assert that every dependency of every task appears earlier in `order`.
///
/// `records` are the raw task records that produced the order.
pub fn assert_topologically_valid(records: &[serde_json::Value], order: &[String]) {
    let position = |title: &str| order.iter().position(|t| t == title);

    for record in records {
        let Some(title) = record.get("title").and_then(|t| t.as_str()) else {
            continue;
        };
        let own = position(title).unwrap_or_else(|| panic!("task {title:?} missing from order"));
        let deps = record
            .get("dependencies")
            .and_then(|d| d.as_array())
            .cloned()
            .unwrap_or_default();
        for dep in deps.iter().filter_map(|d| d.as_str()) {
            let before = position(dep).unwrap_or_else(|| panic!("dependency {dep:?} missing from order"));
            assert!(
                before < own,
                "dependency {dep:?} (#{before}) must precede {title:?} (#{own})"
            );
        }
    }
}

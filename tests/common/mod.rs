#![allow(dead_code)]

use optopsy_classify::fixtures::Fixtures;
use tracing_subscriber::EnvFilter;

/// Seed shared by the property-style tests so failures reproduce.
pub const SEED: u64 = 42;

/// Draws per property.
pub const DRAWS: usize = 300;

/// Install a test-friendly subscriber once; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn fixtures() -> Fixtures {
    init_tracing();
    Fixtures::seeded(SEED)
}

pub fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

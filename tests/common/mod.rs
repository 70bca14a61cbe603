//! Shared fixtures and helpers for the codesniff test suites

use std::sync::Once;

static TRACING: Once = Once::new();

/// Install a test subscriber honouring `RUST_LOG` (once per test binary)
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING.call_once(|| {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with(tracing_subscriber::fmt::layer().with_test_writer().with_target(false))
            .try_init();
    });
}

#[allow(dead_code)]
pub const DOCKERFILE: &str = "FROM node:18-alpine\nWORKDIR /app\nRUN npm install\nCMD [\"npm\",\"start\"]";

#[allow(dead_code)]
pub const SQL_SELECT: &str = "SELECT * FROM users WHERE id = 1;";

#[allow(dead_code)]
pub const JSON_OBJECT: &str = r#"{"name": "app", "version": "1.0.0"}"#;

#[allow(dead_code)]
pub const PROSE: &str = "This is just a plain sentence with no code.";

#[allow(dead_code)]
pub const COMPOSE: &str = "services:\n  web:\n    image: nginx:latest\n    ports:\n      - \"80:80\"";

#[allow(dead_code)]
pub const RUST_SNIPPET: &str = r#"use std::collections::HashMap;

pub fn count(words: &[&str]) -> HashMap<&str, usize> {
    let mut map = HashMap::new();
    for w in words {
        *map.entry(*w).or_insert(0) += 1;
    }
    map
}

fn main() {
    println!("{:?}", count(&["a", "b", "a"]));
}"#;

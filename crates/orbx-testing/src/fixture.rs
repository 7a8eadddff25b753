//! JSON fixture loader.
//!
//! Loads request payloads kept next to a crate's tests (e.g. `tests/fixtures/`).

use std::path::{Path, PathBuf};

use serde_json::Value;

/// Load a JSON fixture file relative to the calling crate's manifest directory.
///
/// # Example
/// ```no_run
/// use orbx_testing::fixture::Fixture;
/// let val = Fixture::load("tests/fixtures/europe.json");
/// ```
pub struct Fixture;

impl Fixture {
    /// Load and parse a fixture JSON file at `CARGO_MANIFEST_DIR/path`.
    ///
    /// Panics if the file is missing or invalid JSON.
    pub fn load(relative_path: &str) -> Value {
        let full_path = Self::root().join(relative_path);
        let contents = std::fs::read_to_string(&full_path)
            .unwrap_or_else(|e| panic!("fixture not found at {}: {}", full_path.display(), e));
        serde_json::from_str(&contents)
            .unwrap_or_else(|e| panic!("invalid JSON in fixture {}: {}", relative_path, e))
    }

    fn root() -> PathBuf {
        std::env::var("CARGO_MANIFEST_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| Path::new(".").to_path_buf())
    }
}

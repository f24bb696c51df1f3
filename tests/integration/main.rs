//! Whole-page tests over saved discography articles.

#![allow(clippy::expect_used)]

mod edge_cases;
mod real_world_pages;

use std::path::PathBuf;

/// Read a fixture page from `tests/integration/fixtures`.
pub fn fixture(name: &str) -> String {
    let path: PathBuf = [env!("CARGO_MANIFEST_DIR"), "tests", "integration", "fixtures", name]
        .iter()
        .collect();
    std::fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("cannot read fixture {}: {err}", path.display()))
}

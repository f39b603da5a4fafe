//! Benchmark fixtures - generated at runtime from random maintainers.
//!
//! Fixtures are generated lazily on first access and cached for the
//! duration of the benchmark run. All generation is deterministic.

use maintainers_core::generate::{GeneratorConfig, generate};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tempfile::TempDir;

// Lazily generated fixtures (deterministic via default seed)
static SMALL: LazyLock<String> = LazyLock::new(|| generate(&GeneratorConfig::small()));
static MEDIUM: LazyLock<String> = LazyLock::new(|| generate(&GeneratorConfig::medium()));
static LARGE: LazyLock<String> = LazyLock::new(|| generate(&GeneratorConfig::large()));
static NOISY: LazyLock<String> =
    LazyLock::new(|| generate(&GeneratorConfig::medium().with_malformed(100)));

/// Well-formed fixtures.
pub fn fixtures() -> &'static [(&'static str, &'static str)] {
    static FIXTURES: LazyLock<Vec<(&'static str, &'static str)>> = LazyLock::new(|| {
        vec![
            ("small", SMALL.as_str()),
            ("medium", MEDIUM.as_str()),
            ("large", LARGE.as_str()),
        ]
    });
    FIXTURES.as_slice()
}

/// Fixture with malformed lines mixed in, for lenient parsing.
pub fn noisy_fixture() -> &'static str {
    NOISY.as_str()
}

/// Fixtures written to disk for benchmarking the file entry point.
///
/// The temp directory is kept alive as long as this struct exists.
pub struct FixtureFiles {
    #[allow(dead_code)] // Kept to maintain temp directory lifetime
    temp_dir: TempDir,
    /// One path per entry of [`fixtures`].
    pub paths: Vec<(&'static str, PathBuf)>,
}

impl FixtureFiles {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let paths = fixtures()
            .iter()
            .map(|(name, content)| {
                let path = temp_dir.path().join(format!("{}.MAINTAINERS", name));
                std::fs::write(&path, content).expect("Failed to write fixture");
                (*name, path)
            })
            .collect();
        FixtureFiles { temp_dir, paths }
    }
}

static FIXTURE_FILES: LazyLock<FixtureFiles> = LazyLock::new(FixtureFiles::new);

/// Returns the on-disk fixture paths.
pub fn fixture_paths() -> impl Iterator<Item = (&'static str, &'static Path)> {
    FIXTURE_FILES
        .paths
        .iter()
        .map(|(name, path)| (*name, path.as_path()))
}

//! Optional raw-page dumps for diagnosing extraction misses offline.
//!
//! Dumped pages can be fed back through `fuelprice-cli extract`.

use std::path::{Path, PathBuf};

/// File stem used for the city page dump.
pub(crate) const CITY_PAGE_STEM: &str = "city_prices_page";

/// Writes fetched pages to `<dir>/<stem>.html` when a directory is set.
#[derive(Debug, Clone, Default)]
pub(crate) struct DebugDump {
    dir: Option<PathBuf>,
}

impl DebugDump {
    pub(crate) fn new(dir: Option<PathBuf>) -> Self {
        Self { dir }
    }

    pub(crate) fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }

    /// Writes `html` for `stem`. Failures are logged and never abort the run.
    pub(crate) fn write(&self, stem: &str, html: &str) {
        let Some(dir) = &self.dir else {
            return;
        };
        let path = dir.join(format!("{stem}.html"));
        let result = std::fs::create_dir_all(dir).and_then(|()| std::fs::write(&path, html));
        match result {
            Ok(()) => tracing::debug!(path = %path.display(), "page dumped"),
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "failed to write page dump"),
        }
    }
}

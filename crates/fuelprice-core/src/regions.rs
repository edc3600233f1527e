use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// One per-region price page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionConfig {
    /// Identifier used as the record name and the debug dump file stem,
    /// e.g. `"kujawsko-pomorskie"`.
    pub slug: String,
    /// Human-readable name; informational only.
    #[serde(default)]
    pub name: Option<String>,
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct RegionsFile {
    pub regions: Vec<RegionConfig>,
}

impl RegionsFile {
    /// Looks up a region by slug (case-insensitive).
    #[must_use]
    pub fn find(&self, slug: &str) -> Option<&RegionConfig> {
        self.regions
            .iter()
            .find(|r| r.slug.eq_ignore_ascii_case(slug))
    }
}

/// Load and validate the region list from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_regions(path: &Path) -> Result<RegionsFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::RegionsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_regions(&content)
}

/// Parse and validate a region list from YAML text.
///
/// # Errors
///
/// Returns `ConfigError` if the text does not parse or fails validation.
pub fn parse_regions(content: &str) -> Result<RegionsFile, ConfigError> {
    let regions_file: RegionsFile =
        serde_yaml::from_str(content).map_err(ConfigError::RegionsFileParse)?;

    validate_regions(&regions_file)?;

    Ok(regions_file)
}

fn validate_regions(regions_file: &RegionsFile) -> Result<(), ConfigError> {
    if regions_file.regions.is_empty() {
        return Err(ConfigError::Validation(
            "at least one region must be configured".to_string(),
        ));
    }

    let mut seen_slugs = HashSet::new();

    for region in &regions_file.regions {
        let slug = region.slug.trim();
        if slug.is_empty() {
            return Err(ConfigError::Validation(
                "region slug must be non-empty".to_string(),
            ));
        }

        if slug.contains(['/', '\\']) {
            return Err(ConfigError::Validation(format!(
                "region slug '{slug}' must not contain path separators"
            )));
        }

        if !(region.url.starts_with("https://") || region.url.starts_with("http://")) {
            return Err(ConfigError::Validation(format!(
                "region '{slug}' has non-http url '{}'",
                region.url
            )));
        }

        if !seen_slugs.insert(slug.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate region slug: '{slug}'"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "regions_test.rs"]
mod tests;

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// YAML file listing the per-region price pages.
    pub regions_path: PathBuf,
    /// Page carrying the cross-city price table.
    pub cities_url: String,
    pub output_dir: PathBuf,
    /// When set, every fetched page is written here before extraction.
    pub debug_dir: Option<PathBuf>,
    pub scraper_request_timeout_secs: u64,
    pub scraper_user_agent: String,
    /// Additional attempts after the first failed fetch.
    pub scraper_max_retries: u32,
    /// Fixed pause between fetch attempts.
    pub scraper_retry_delay_ms: u64,
    pub scraper_max_concurrent_regions: usize,
}

pub mod app_config;
pub mod config;
pub mod fuel;
pub mod records;
pub mod regions;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use fuel::FuelCode;
pub use records::{EntityRecord, PriceReport, ResultSet};
pub use regions::{load_regions, parse_regions, RegionConfig, RegionsFile};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read regions file {path}: {source}")]
    RegionsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse regions file: {0}")]
    RegionsFileParse(#[source] serde_yaml::Error),

    #[error("regions validation failed: {0}")]
    Validation(String),
}

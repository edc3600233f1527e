use std::path::PathBuf;

use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

pub(crate) const DEFAULT_CITIES_URL: &str =
    "https://www.wnp.pl/rynki/gielda-i-notowania/ceny-paliw/";

pub(crate) const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields a usable
/// development config.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        or_default(var, default)
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let env = parse_environment(&or_default("FUELPRICE_ENV", "development"))?;
    let log_level = or_default("FUELPRICE_LOG_LEVEL", "info");
    let regions_path = PathBuf::from(or_default(
        "FUELPRICE_REGIONS_PATH",
        "./config/regions.yaml",
    ));

    let cities_url = or_default("FUELPRICE_CITIES_URL", DEFAULT_CITIES_URL);
    if !(cities_url.starts_with("http://") || cities_url.starts_with("https://")) {
        return Err(invalid(
            "FUELPRICE_CITIES_URL",
            format!("expected an http(s) URL, got \"{cities_url}\""),
        ));
    }

    let output_dir = PathBuf::from(or_default("FUELPRICE_OUTPUT_DIR", "./data"));
    let debug_dir = lookup("FUELPRICE_DEBUG_DIR")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from);

    let scraper_request_timeout_secs = parse_u64("FUELPRICE_SCRAPER_REQUEST_TIMEOUT_SECS", "30")?;
    let scraper_user_agent = or_default("FUELPRICE_SCRAPER_USER_AGENT", DEFAULT_USER_AGENT);
    let scraper_max_retries = parse_u32("FUELPRICE_SCRAPER_MAX_RETRIES", "2")?;
    let scraper_retry_delay_ms = parse_u64("FUELPRICE_SCRAPER_RETRY_DELAY_MS", "2000")?;
    let scraper_max_concurrent_regions =
        parse_usize("FUELPRICE_SCRAPER_MAX_CONCURRENT_REGIONS", "4")?;

    Ok(AppConfig {
        env,
        log_level,
        regions_path,
        cities_url,
        output_dir,
        debug_dir,
        scraper_request_timeout_secs,
        scraper_user_agent,
        scraper_max_retries,
        scraper_retry_delay_ms,
        scraper_max_concurrent_regions,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "FUELPRICE_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

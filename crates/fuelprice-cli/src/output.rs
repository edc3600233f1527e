//! JSON report files under the output directory.
//!
//! Layout:
//!
//! ```text
//! <output_dir>/regions.json
//! <output_dir>/history/regions_<YYYYMMDD_HHMMSS>.json
//! <output_dir>/cities.json
//! ```
//!
//! Only the region report keeps history; the city report is overwritten on
//! every run.

use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};
use fuelprice_core::PriceReport;

pub(crate) const REGIONS_FILE: &str = "regions.json";
pub(crate) const CITIES_FILE: &str = "cities.json";
pub(crate) const HISTORY_DIR: &str = "history";

const HISTORY_STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Writes the latest region report and its timestamped history copy.
///
/// Returns `(latest_path, history_path)`.
pub(crate) fn write_regions_report<Tz>(
    output_dir: &Path,
    report: &PriceReport,
    generated_at: &DateTime<Tz>,
) -> anyhow::Result<(PathBuf, PathBuf)>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let latest = output_dir.join(REGIONS_FILE);
    let history = output_dir.join(HISTORY_DIR).join(format!(
        "regions_{}.json",
        generated_at.format(HISTORY_STAMP_FORMAT)
    ));

    let body = render(report)?;
    write_file(&latest, &body)?;
    write_file(&history, &body)?;
    Ok((latest, history))
}

/// Overwrites the city report.
pub(crate) fn write_cities_report(
    output_dir: &Path,
    report: &PriceReport,
) -> anyhow::Result<PathBuf> {
    let path = output_dir.join(CITIES_FILE);
    write_file(&path, &render(report)?)?;
    Ok(path)
}

/// Pretty-printed JSON; non-ASCII names are written as UTF-8, not escaped.
pub(crate) fn render(report: &PriceReport) -> anyhow::Result<String> {
    let mut body = serde_json::to_string_pretty(report)
        .map_err(|e| anyhow::anyhow!("failed to serialize price report: {e}"))?;
    body.push('\n');
    Ok(body)
}

fn write_file(path: &Path, body: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| anyhow::anyhow!("failed to create {}: {e}", parent.display()))?;
    }
    std::fs::write(path, body)
        .map_err(|e| anyhow::anyhow!("failed to write {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeZone};
    use fuelprice_core::{EntityRecord, FuelCode, ResultSet};

    use super::*;

    fn sample_report() -> (PriceReport, DateTime<FixedOffset>) {
        let mut record = EntityRecord::empty("śląskie");
        record.date = Some("2025-03-04".to_owned());
        record.prices.insert(FuelCode::Pb95, Some(6.55));
        let mut set: ResultSet = std::iter::once(record).collect();
        set.shared_date = set.latest_record_date();

        let at = FixedOffset::east_opt(3600)
            .unwrap()
            .with_ymd_and_hms(2025, 3, 4, 9, 15, 0)
            .unwrap();
        (PriceReport::from_result_set(set, &at), at)
    }

    #[test]
    fn regions_report_writes_latest_and_history() {
        let tmp = tempfile::tempdir().unwrap();
        let (report, at) = sample_report();

        let (latest, history) = write_regions_report(tmp.path(), &report, &at).unwrap();

        assert_eq!(latest, tmp.path().join("regions.json"));
        assert_eq!(
            history,
            tmp.path().join("history").join("regions_20250304_091500.json")
        );
        assert_eq!(
            std::fs::read_to_string(&latest).unwrap(),
            std::fs::read_to_string(&history).unwrap()
        );
    }

    #[test]
    fn report_json_layout() {
        let tmp = tempfile::tempdir().unwrap();
        let (report, _) = sample_report();

        let path = write_cities_report(tmp.path(), &report).unwrap();
        let body = std::fs::read_to_string(path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();

        assert_eq!(json["update_timestamp"], "2025-03-04 09:15:00");
        assert_eq!(json["date"], "2025-03-04");
        assert_eq!(json["entities"]["śląskie"]["prices"]["PB95"], 6.55);
        assert!(json["entities"]["śląskie"]["prices"]["LPG"].is_null());
        assert!(body.contains("śląskie"), "names must not be ASCII-escaped");
    }

    #[test]
    fn cities_report_is_overwritten() {
        let tmp = tempfile::tempdir().unwrap();
        let (report, _) = sample_report();
        write_cities_report(tmp.path(), &report).unwrap();

        let empty = PriceReport {
            update_timestamp: "2025-03-05 09:00:00".to_owned(),
            date: None,
            entities: std::collections::BTreeMap::new(),
        };
        let path = write_cities_report(tmp.path(), &empty).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert!(json["date"].is_null());
        assert_eq!(json["entities"].as_object().unwrap().len(), 0);
        assert!(!tmp.path().join(HISTORY_DIR).exists());
    }
}

use std::io::Write;
use std::path::Path;

use super::*;

const TWO_REGIONS: &str = r"
regions:
  - slug: opolskie
    name: Opolskie
    url: https://www.reflex.com.pl/opolskie-wojewodztwo
  - slug: lubuskie
    url: https://www.reflex.com.pl/lubuskie-wojewodztwo
";

#[test]
fn parses_valid_region_list() {
    let file = parse_regions(TWO_REGIONS).expect("valid regions");
    assert_eq!(file.regions.len(), 2);
    assert_eq!(file.regions[0].name.as_deref(), Some("Opolskie"));
    assert!(file.regions[1].name.is_none());
}

#[test]
fn find_is_case_insensitive() {
    let file = parse_regions(TWO_REGIONS).unwrap();
    let found = file.find("LUBUSKIE").expect("region should be found");
    assert_eq!(found.slug, "lubuskie");
    assert!(file.find("mazowieckie").is_none());
}

#[test]
fn rejects_empty_list() {
    let err = parse_regions("regions: []").unwrap_err();
    assert!(matches!(err, ConfigError::Validation(_)), "got: {err:?}");
}

#[test]
fn rejects_blank_slug() {
    let yaml = "regions:\n  - slug: '  '\n    url: https://example.com\n";
    let err = parse_regions(yaml).unwrap_err();
    assert!(matches!(err, ConfigError::Validation(ref m) if m.contains("non-empty")));
}

#[test]
fn rejects_slug_with_path_separator() {
    let yaml = "regions:\n  - slug: ../etc\n    url: https://example.com\n";
    let err = parse_regions(yaml).unwrap_err();
    assert!(matches!(err, ConfigError::Validation(ref m) if m.contains("path separators")));
}

#[test]
fn rejects_non_http_url() {
    let yaml = "regions:\n  - slug: slaskie\n    url: file:///tmp/slaskie.html\n";
    let err = parse_regions(yaml).unwrap_err();
    assert!(matches!(err, ConfigError::Validation(ref m) if m.contains("non-http")));
}

#[test]
fn rejects_duplicate_slugs_ignoring_case() {
    let yaml = "regions:
  - slug: podlaskie
    url: https://example.com/a
  - slug: Podlaskie
    url: https://example.com/b
";
    let err = parse_regions(yaml).unwrap_err();
    assert!(matches!(err, ConfigError::Validation(ref m) if m.contains("duplicate")));
}

#[test]
fn reports_yaml_parse_errors() {
    let err = parse_regions("regions: [slug: ").unwrap_err();
    assert!(matches!(err, ConfigError::RegionsFileParse(_)), "got: {err:?}");
}

#[test]
fn load_regions_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(TWO_REGIONS.as_bytes()).unwrap();
    let regions = load_regions(file.path()).unwrap();
    assert_eq!(regions.regions.len(), 2);
}

#[test]
fn load_regions_missing_file_is_io_error() {
    let err = load_regions(Path::new("/definitely/not/here/regions.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::RegionsFileIo { .. }), "got: {err:?}");
}

#[test]
fn shipped_region_list_is_valid() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config/regions.yaml");
    let regions = load_regions(&path).expect("shipped regions.yaml should load");
    assert_eq!(regions.regions.len(), 16);
}

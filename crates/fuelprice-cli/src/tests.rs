use super::*;

#[test]
fn command_is_required() {
    assert!(Cli::try_parse_from(["fuelprice-cli"]).is_err());
}

#[test]
fn parses_regions_defaults() {
    let cli = Cli::try_parse_from(["fuelprice-cli", "regions"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Regions {
            region: None,
            dry_run: false
        }
    ));
    assert!(cli.debug_dump.is_none());
}

#[test]
fn parses_regions_with_filter_and_dry_run() {
    let cli = Cli::try_parse_from(["fuelprice-cli", "regions", "--region", "opolskie", "--dry-run"])
        .unwrap();
    assert!(matches!(
        cli.command,
        Commands::Regions {
            region: Some(ref r),
            dry_run: true
        } if r == "opolskie"
    ));
}

#[test]
fn parses_cities_and_all() {
    let cli = Cli::try_parse_from(["fuelprice-cli", "cities"]).unwrap();
    assert!(matches!(cli.command, Commands::Cities));

    let cli = Cli::try_parse_from(["fuelprice-cli", "all"]).unwrap();
    assert!(matches!(cli.command, Commands::All));
}

#[test]
fn debug_dump_is_global() {
    let cli = Cli::try_parse_from(["fuelprice-cli", "cities", "--debug-dump", "/tmp/debug"]).unwrap();
    assert_eq!(cli.debug_dump, Some(PathBuf::from("/tmp/debug")));

    let cli = Cli::try_parse_from(["fuelprice-cli", "--debug-dump", "debug", "all"]).unwrap();
    assert_eq!(cli.debug_dump, Some(PathBuf::from("debug")));
}

#[test]
fn parses_extract_single() {
    let cli = Cli::try_parse_from([
        "fuelprice-cli",
        "extract",
        "--shape",
        "single",
        "--file",
        "debug/opolskie.html",
        "--name",
        "opolskie",
    ])
    .unwrap();
    match cli.command {
        Commands::Extract { shape, file, name } => {
            assert_eq!(shape, ShapeArg::Single);
            assert_eq!(file, PathBuf::from("debug/opolskie.html"));
            assert_eq!(name, "opolskie");
        }
        other => panic!("expected extract, got {other:?}"),
    }
}

#[test]
fn extract_name_defaults() {
    let cli = Cli::try_parse_from([
        "fuelprice-cli",
        "extract",
        "--shape",
        "multi",
        "--file",
        "debug/city_prices_page.html",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Commands::Extract { shape: ShapeArg::Multi, ref name, .. } if name == "document"
    ));
}

#[test]
fn extract_rejects_unknown_shape() {
    let result = Cli::try_parse_from([
        "fuelprice-cli",
        "extract",
        "--shape",
        "table",
        "--file",
        "page.html",
    ]);
    assert!(result.is_err());
}

#[test]
fn shape_arg_maps_to_document_shape() {
    assert_eq!(
        fuelprice_scraper::Shape::from(ShapeArg::Single),
        fuelprice_scraper::Shape::SingleEntity
    );
    assert_eq!(
        fuelprice_scraper::Shape::from(ShapeArg::Multi),
        fuelprice_scraper::Shape::MultiEntity
    );
}

#[test]
fn ansi_logging_is_off_in_production() {
    assert!(use_ansi(&Environment::Development));
    assert!(use_ansi(&Environment::Test));
    assert!(!use_ansi(&Environment::Production));
}

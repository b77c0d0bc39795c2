// tests/cli_args.rs
#![cfg(feature = "cli")]

use std::path::PathBuf;

use clap::Parser;
use reg_scrape::cli::Args;
use reg_scrape::config::options::{ExportFormat, SiteKind};

#[test]
fn full_command_line() {
    let args = Args::try_parse_from([
        "reg_scrape",
        "--site", "court-orders",
        "-i", "p1.html",
        "--input", "p2.html",
        "--url", "https://www.bnm.gov.my/court-orders?page=2",
        "-o", "reports/court",
        "--format", "TSV",
        "--log-file", "logs/run.log",
    ])
    .unwrap();
    assert_eq!(args.log_file, Some(PathBuf::from("logs/run.log")));

    let params = args.into_params().unwrap();
    assert_eq!(params.site, SiteKind::CourtOrders);
    assert_eq!(params.inputs.len(), 2);
    assert_eq!(params.url.as_deref(), Some("https://www.bnm.gov.my/court-orders?page=2"));
    assert_eq!(params.export.format, ExportFormat::Tsv);
    assert_eq!(params.export.out_path(), PathBuf::from("reports").join("court.tsv"));
}

#[test]
fn list_sites_needs_nothing_else() {
    let args = Args::try_parse_from(["reg_scrape", "--list-sites"]).unwrap();
    assert!(args.list_sites);
    assert!(args.site.is_none());
}

#[test]
fn unknown_flag_is_rejected() {
    assert!(Args::try_parse_from(["reg_scrape", "--all"]).is_err());
}

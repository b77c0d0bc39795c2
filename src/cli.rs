// src/cli.rs
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::config::options::{ExportFormat, ExportOptions, SiteKind};
use crate::error::{Error, Result};
use crate::progress::Progress;
use crate::runner::{self, Params, RunSummary};

/// Flatten tables from saved regulator pages into CSV/TSV.
#[derive(Debug, Parser)]
#[command(name = "reg_scrape", version, about)]
pub struct Args {
    /// Site spec to use (see --list-sites). Defaults to `generic` with --profile.
    #[arg(short, long)]
    pub site: Option<String>,

    /// Saved HTML page; repeat for several pages.
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub inputs: Vec<PathBuf>,

    /// Section label for the input at the same position.
    #[arg(long = "label", value_name = "LABEL")]
    pub labels: Vec<String>,

    /// Source URL written to the provenance columns.
    #[arg(long)]
    pub url: Option<String>,

    /// TOML site profile (required for the generic site).
    #[arg(long, value_name = "FILE")]
    pub profile: Option<PathBuf>,

    /// Output file; defaults to out/<site>.<ext>.
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<String>,

    /// csv or tsv.
    #[arg(long, default_value = "csv")]
    pub format: String,

    /// Leave the header row out.
    #[arg(long)]
    pub no_headers: bool,

    /// Append log lines to this file instead of stderr.
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Print the built-in sites and exit.
    #[arg(long)]
    pub list_sites: bool,
}

impl Args {
    pub fn site_kind(&self) -> Result<SiteKind> {
        match (&self.site, &self.profile) {
            (Some(name), _) => SiteKind::from_name(name).ok_or_else(|| Error::UnknownSite(name.clone())),
            (None, Some(_)) => Ok(SiteKind::Generic),
            (None, None) => Err(Error::Usage(s!("--site <name> is required (see --list-sites)"))),
        }
    }

    pub fn into_params(self) -> Result<Params> {
        let site = self.site_kind()?;
        let format = ExportFormat::from_name(&self.format)
            .ok_or_else(|| Error::Usage(format!("Unknown format: {}", self.format)))?;

        let mut export = ExportOptions::for_site(site);
        export.format = format;
        export.include_headers = !self.no_headers;
        if let Some(out) = &self.out {
            export.set_path(out);
        }

        Ok(Params {
            site,
            inputs: self.inputs,
            labels: self.labels,
            url: self.url,
            profile: self.profile,
            export,
        })
    }
}

/// One line per site: name, what it reads, and its default source URL.
pub fn list_sites() -> String {
    SiteKind::ALL
        .iter()
        .map(|k| match k.default_url() {
            "" => format!("{:<20}{}", k.name(), k.describe()),
            url => format!("{:<20}{} <{}>", k.name(), k.describe(), url),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prints one status line per page to stderr.
#[derive(Default)]
pub struct StderrProgress {
    total: usize,
    done: usize,
}

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }

    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }

    fn item_done(&mut self, page: &Path, rows: usize) {
        self.done += 1;
        eprintln!("[{}/{}] {}: {} rows", self.done, self.total, page.display(), rows);
    }
}

/// Run a parsed command line. `None` when only the site list was printed.
pub fn run(args: Args) -> Result<Option<RunSummary>> {
    if args.list_sites {
        println!("{}", list_sites());
        return Ok(None);
    }
    let params = args.into_params()?;
    let mut progress = StderrProgress::default();
    runner::run(&params, Some(&mut progress)).map(Some)
}

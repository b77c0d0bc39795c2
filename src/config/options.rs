// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::consts::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SiteKind {
    AobSanctions,
    CompoundCases,
    CourtOrders,
    ConsumerAlert,
    FinancialServices,
    WantedPersons,
    /// Any page described by a TOML profile.
    Generic,
}

impl SiteKind {
    pub const ALL: [SiteKind; 7] = [
        SiteKind::AobSanctions,
        SiteKind::CompoundCases,
        SiteKind::CourtOrders,
        SiteKind::ConsumerAlert,
        SiteKind::FinancialServices,
        SiteKind::WantedPersons,
        SiteKind::Generic,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SiteKind::AobSanctions => "aob-sanctions",
            SiteKind::CompoundCases => "compound-cases",
            SiteKind::CourtOrders => "court-orders",
            SiteKind::ConsumerAlert => "consumer-alert",
            SiteKind::FinancialServices => "financial-services",
            SiteKind::WantedPersons => "wanted-persons",
            SiteKind::Generic => "generic",
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            SiteKind::AobSanctions => "SC Audit Oversight Board sanctions, one table per year section",
            SiteKind::CompoundCases => "SC cases compounded, one saved page per year",
            SiteKind::CourtOrders => "BNM court orders (company, owners, dates)",
            SiteKind::ConsumerAlert => "BNM financial consumer alert list",
            SiteKind::FinancialServices => "BNM enforcement notice compound table",
            SiteKind::WantedPersons => "RMP wanted persons (label/value tables)",
            SiteKind::Generic => "any table described by --profile <file.toml>",
        }
    }

    pub fn from_name(name: &str) -> Option<SiteKind> {
        let n = name.trim().to_ascii_lowercase().replace('_', "-");
        SiteKind::ALL.into_iter().find(|k| k.name() == n)
    }

    /// URL recorded in provenance when the caller doesn't give one.
    pub fn default_url(&self) -> &'static str {
        match self {
            SiteKind::AobSanctions => SC_AOB_SANCTIONS_URL,
            SiteKind::CompoundCases => SC_ENFORCEMENT_URL,
            SiteKind::CourtOrders => BNM_COURT_ORDERS_URL,
            SiteKind::ConsumerAlert => BNM_ALERT_LIST_URL,
            SiteKind::FinancialServices => BNM_NOTICE_URL,
            SiteKind::WantedPersons => RMP_WANTED_URL,
            SiteKind::Generic => "",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> u8 {
        match self { ExportFormat::Csv => b',', ExportFormat::Tsv => b'\t' }
    }
    pub fn from_name(name: &str) -> Option<ExportFormat> {
        match name.to_ascii_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "tsv" => Some(ExportFormat::Tsv),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: OutputPath,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_path: OutputPath::default(),
            include_headers: true,
        }
    }
}

impl ExportOptions {
    /// Default `out/<site>.<ext>` for the given site.
    pub fn for_site(site: SiteKind) -> Self {
        let mut opts = Self::default();
        opts.out_path.file_stem = OsString::from(site.name());
        opts
    }

    /// `<dir>/<stem>.<ext>`, or exactly what the user typed if they gave
    /// an explicit extension.
    pub fn out_path(&self) -> PathBuf {
        let mut path = self.out_path.dir.clone();
        let mut file = self.out_path.file_stem.clone();
        match &self.out_path.user_ext {
            Some(ext) => { file.push("."); file.push(ext); }
            None => { file.push("."); file.push(self.format.ext()); }
        }
        path.push(file);
        path
    }

    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        self.out_path.dir = p.parent().map(Path::to_path_buf).unwrap_or_default();
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
        self.out_path.user_ext = p.extension().map(|e| e.to_os_string());
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString,
    user_ext: Option<OsString>,
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from("dataset"),
            user_ext: None,
        }
    }
}

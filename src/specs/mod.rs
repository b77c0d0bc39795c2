// src/specs/mod.rs
//! # Site “specs” module
//!
//! One spec per regulator page. Each spec knows *where the data lives in the
//! saved HTML* and *which column layout the page uses*, and turns one page
//! into rows for the export layer.
//!
//! ## What lives here
//! - **Page shape**: table selector, logical width, header names, and which
//!   columns carry dates or multi-line text.
//! - **Per-page quirks**: year-indexed sections (AOB sanctions), company/owner
//!   splitting (court orders), link-bearing cells (consumer alert list),
//!   label/value tables (wanted persons), left-padded total rows (BNM notice).
//! - **Provenance**: the constant dataset/topic/source/country/URL columns.
//!
//! ## What does **not** live here
//! - **Fetching or navigation**: pages arrive as saved HTML (`PageInput`).
//! - **Table expansion**: `table::flatten` owns rowspan/colspan handling.
//! - **Writing files**: `file::export_dataset`.
//!
//! ## Typical call chain
//! ```text
//! cli → runner::run → specs::for_site(kind) → SiteSpec::extract(page)
//!                                ↘ core::html::read_table → Table::flatten
//!                   file::export_dataset (outside of specs)
//! ```
//!
//! Specs are stateful only where the output needs it (the running serial
//! number of court orders); a spec value is used for one run.
pub mod aob_sanctions;
pub mod compound_cases;
pub mod consumer_alert;
pub mod court_orders;
pub mod financial_services;
pub mod generic;
pub mod wanted_persons;

use crate::config::options::SiteKind;
use crate::config::profile::SiteProfile;
use crate::error::{Error, Result};
use crate::normalize::normalize_multiline;
use crate::table::Record;

/// One saved page plus what the caller knows about it.
#[derive(Clone, Copy, Debug, Default)]
pub struct PageInput<'a> {
    pub html: &'a str,
    /// Section label, e.g. "Cases Compounded In 2023" for a per-year page.
    pub label: Option<&'a str>,
    /// Where the page came from; defaults to the site's canonical URL.
    pub url: Option<&'a str>,
}

impl<'a> PageInput<'a> {
    pub fn new(html: &'a str) -> Self {
        Self { html, label: None, url: None }
    }
    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }
    pub fn url(mut self, url: &'a str) -> Self {
        self.url = Some(url);
        self
    }
}

pub trait SiteSpec {
    fn kind(&self) -> SiteKind;
    /// Full output header row, provenance columns included.
    fn headers(&self) -> Vec<String>;
    fn extract(&mut self, page: &PageInput<'_>) -> Result<Vec<Vec<String>>>;
}

/// Built-in spec for `kind`. `Generic` needs a profile; the others ignore it.
pub fn for_site(kind: SiteKind, profile: Option<SiteProfile>) -> Result<Box<dyn SiteSpec>> {
    let spec: Box<dyn SiteSpec> = match kind {
        SiteKind::AobSanctions => Box::new(aob_sanctions::AobSanctions::new()),
        SiteKind::CompoundCases => Box::new(compound_cases::CompoundCases::new()),
        SiteKind::CourtOrders => Box::new(court_orders::CourtOrders::new()),
        SiteKind::ConsumerAlert => Box::new(consumer_alert::ConsumerAlert::new()),
        SiteKind::FinancialServices => Box::new(financial_services::FinancialServices::new()),
        SiteKind::WantedPersons => Box::new(wanted_persons::WantedPersons::new()),
        SiteKind::Generic => {
            let profile = profile
                .ok_or_else(|| Error::Usage(s!("site 'generic' needs --profile <file.toml>")))?;
            Box::new(generic::Generic::new(profile))
        }
    };
    Ok(spec)
}

/// Apply a profile's multi-line merges, then its date columns, by position.
pub(crate) fn shape_record(profile: &SiteProfile, mut rec: Record) -> Record {
    for m in &profile.multiline_columns {
        if let Some(cell) = rec.get_mut(m.index) {
            *cell = normalize_multiline(cell, &m.separator);
        }
    }
    if !profile.date_columns.is_empty() {
        let dates = profile.date_normalizer();
        for &i in &profile.date_columns {
            if let Some(cell) = rec.get_mut(i) {
                *cell = dates.normalize(cell);
            }
        }
    }
    rec
}

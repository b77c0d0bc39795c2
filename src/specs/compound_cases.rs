// src/specs/compound_cases.rs
//
// SC "Cases Compounded In <year>" pages: one saved page per year, one
// 5-column table per page.
//
// Columns: Year, No., Nature of Offence, Offender(s), Facts of Case,
// Date Charged, + provenance.

use scraper::Html;

use crate::config::consts::{COMPOUND_CASES_WIDTH, COUNTRY, SC_ENFORCEMENT_URL, SC_NAME, TOPIC_FRAUD_SC};
use crate::config::options::SiteKind;
use crate::config::profile::{Provenance, SiteProfile};
use crate::core::html::{self, TextMode};
use crate::error::Result;
use crate::normalize::collapse_ws;

use super::{shape_record, PageInput, SiteSpec};

const LABEL_PREFIX: &str = "Cases Compounded In";

pub struct CompoundCases {
    profile: SiteProfile,
}

impl CompoundCases {
    pub fn new() -> Self {
        Self { profile: profile() }
    }
}

impl Default for CompoundCases {
    fn default() -> Self { Self::new() }
}

pub fn profile() -> SiteProfile {
    SiteProfile {
        name: s!(SiteKind::CompoundCases.name()),
        table_selector: s!("table"),
        width: COMPOUND_CASES_WIDTH,
        headers: row!["No.", "Nature of Offence", "Offender(s)", "Facts of Case", "Date Charged"],
        date_columns: vec![],
        date_empty: Default::default(),
        multiline_columns: vec![],
        text_mode: TextMode::Flat,
        provenance: Some(Provenance {
            dataset: s!(SC_NAME),
            topics: s!(TOPIC_FRAUD_SC),
            source_name: s!(SC_NAME),
            country: s!(COUNTRY),
            source_url: s!(SC_ENFORCEMENT_URL),
        }),
    }
}

/// First heading/title on the page that reads "Cases Compounded In …".
pub fn detect_label(doc: &Html) -> Option<String> {
    let candidates = html::select_all(doc, "title, h1, h2, h3, a").ok()?;
    candidates
        .into_iter()
        .map(|el| collapse_ws(&html::inner_text(el)))
        .find_map(|text| text.find(LABEL_PREFIX).map(|i| text[i..].to_string()))
}

impl SiteSpec for CompoundCases {
    fn kind(&self) -> SiteKind { SiteKind::CompoundCases }

    fn headers(&self) -> Vec<String> {
        let mut h = row!["Year"];
        h.extend(self.profile.output_headers().unwrap_or_default());
        h
    }

    fn extract(&mut self, page: &PageInput<'_>) -> Result<Vec<Vec<String>>> {
        let doc = Html::parse_document(page.html);
        let label = page
            .label
            .map(String::from)
            .or_else(|| detect_label(&doc))
            .unwrap_or_default();
        logf!("Compound cases: scraping '{}'", label);

        let Some(table) = html::select_tables(&doc, &self.profile.table_selector)?.into_iter().next() else {
            logf!("Compound cases: no table found for '{}', skipping", label);
            return Ok(Vec::new());
        };

        let provenance = self
            .profile
            .provenance
            .as_ref()
            .map(|p| page.url.map_or_else(|| p.clone(), |u| p.at_url(u)));

        let t = html::read_table(table, self.profile.width, self.profile.text_mode);
        let rows = t
            .flatten()
            .map(|rec| {
                let mut out = vec![label.clone()];
                out.extend(shape_record(&self.profile, rec));
                if let Some(p) = &provenance {
                    p.append_to(&mut out);
                }
                out
            })
            .collect::<Vec<_>>();
        logd!("Compound cases: {} rows", rows.len());
        Ok(rows)
    }
}

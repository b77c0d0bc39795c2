// src/specs/wanted_persons.rs
//
// RMP "Orang Dikehendaki". Each person is a small table of label/value
// pairs: a cell containing `<strong>Nama:</strong>` followed by the value
// cell. Labels are Malay; values may be run through a translator.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html};

use crate::config::options::SiteKind;
use crate::core::html;
use crate::error::Result;
use crate::normalize::{collapse_ws, DateNormalizer};

use super::{PageInput, SiteSpec};

pub const HEADERS: [&str; 10] = [
    "Name", "Alias", "ID Number", "Gender", "Ethnicity",
    "Date of Birth", "Address", "Report No", "Offense", "Notes",
];

const LABELS: [(&str, &str); 10] = [
    ("Nama", "Name"),
    ("Nama Gelaran", "Alias"),
    ("No. KP", "ID Number"),
    ("Jantina", "Gender"),
    ("Bangsa", "Ethnicity"),
    ("Tarikh lahir", "Date of Birth"),
    ("Alamat", "Address"),
    ("Repot No", "Report No"),
    ("Kesalahan", "Offense"),
    ("Catatan", "Notes"),
];

const DOB: &str = "Date of Birth";

static DATE_LIKE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2,4}[-/]\d{1,2}[-/]\d{1,4}$").unwrap());
static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w]").unwrap());

/// Translation hook for Malay field values. Errors keep the original text.
pub trait Translate {
    fn translate(&self, text: &str) -> std::result::Result<String, Box<dyn std::error::Error + Send + Sync>>;
}

/// Leaves every value as it is.
pub struct Identity;

impl Translate for Identity {
    fn translate(&self, text: &str) -> std::result::Result<String, Box<dyn std::error::Error + Send + Sync>> {
        Ok(s!(text))
    }
}

/// Numbers, IC numbers and dates are never sent for translation.
pub fn is_numeric_field(value: &str) -> bool {
    let clean = NON_WORD.replace_all(value, "");
    let all_digits = !clean.is_empty() && clean.chars().all(|c| c.is_ascii_digit());
    all_digits || DATE_LIKE.is_match(value)
}

pub fn english_label(label: &str) -> &str {
    LABELS.iter().find(|(ms, _)| *ms == label).map_or(label, |(_, en)| en)
}

fn has_nested_table(table: ElementRef<'_>) -> bool {
    table
        .descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .any(|d| d.value().name() == "table")
}

pub struct WantedPersons {
    translator: Box<dyn Translate>,
    dates: DateNormalizer,
}

impl WantedPersons {
    pub fn new() -> Self {
        Self::with_translator(Box::new(Identity))
    }

    pub fn with_translator(translator: Box<dyn Translate>) -> Self {
        Self { translator, dates: DateNormalizer::day_first() }
    }

    fn translate(&self, value: &str) -> String {
        if value.trim().is_empty() || is_numeric_field(value) {
            return s!(value);
        }
        match self.translator.translate(value) {
            Ok(t) => t,
            Err(e) => {
                loge!("Translation error: {}", e);
                s!(value)
            }
        }
    }
}

impl Default for WantedPersons {
    fn default() -> Self { Self::new() }
}

impl SiteSpec for WantedPersons {
    fn kind(&self) -> SiteKind { SiteKind::WantedPersons }

    fn headers(&self) -> Vec<String> {
        HEADERS.iter().map(|h| s!(*h)).collect()
    }

    fn extract(&mut self, page: &PageInput<'_>) -> Result<Vec<Vec<String>>> {
        let doc = Html::parse_document(page.html);
        // Innermost tables only, so layout wrappers don't repeat a person.
        let tables: Vec<_> = html::select_tables(&doc, "table")?
            .into_iter()
            .filter(|t| html::has_descendant(*t, "strong"))
            .filter(|t| !has_nested_table(*t))
            .collect();

        let mut rows = Vec::with_capacity(tables.len());
        for table in tables {
            let mut fields: HashMap<&str, String> = HashMap::new();
            for tr in html::own_rows(table) {
                let cells = html::child_cells(tr, "td");
                let mut i = 0usize;
                while i < cells.len() {
                    let Some(label_el) = html::first_descendant(cells[i], "strong") else {
                        i += 1;
                        continue;
                    };
                    let label = collapse_ws(&html::inner_text(label_el)).replace(':', "");
                    let header = english_label(label.trim());
                    let value = cells.get(i + 1).map(|c| collapse_ws(&html::inner_text(*c))).unwrap_or_default();

                    let mut value_en = if value.trim().is_empty() { s!() } else { self.translate(&value) };
                    if header == DOB && !value_en.trim().is_empty() {
                        value_en = self.dates.normalize(value_en.trim());
                    }

                    if let Some(h) = HEADERS.iter().find(|h| **h == header) {
                        fields.insert(*h, value_en);
                    } else {
                        logd!("Wanted persons: ignoring label '{}'", label.trim());
                    }
                    i += 2;
                }
            }
            rows.push(HEADERS.iter().map(|h| fields.remove(h).unwrap_or_default()).collect());
        }
        logf!("Wanted persons: {} records", rows.len());
        Ok(rows)
    }
}

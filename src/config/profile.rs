// src/config/profile.rs
//
// Per-site knobs: which table, how wide, which columns hold dates or
// multi-line text, and the constant provenance columns appended to each row.
// Built-in sites construct these in code; custom sites load them from TOML.

use std::path::Path;

use serde::Deserialize;

use crate::core::html::TextMode;
use crate::error::{Error, Result};
use crate::normalize::date::{DateNormalizer, EmptyDate};

/// Constant columns appended after the record, in this order.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Provenance {
    pub dataset: String,
    pub topics: String,
    pub source_name: String,
    pub country: String,
    pub source_url: String,
}

impl Provenance {
    pub const HEADERS: [&'static str; 5] = ["Dataset", "Topics", "Source Name", "Country", "Source URL"];

    pub fn headers() -> Vec<String> {
        Self::HEADERS.iter().map(|h| s!(*h)).collect()
    }

    pub fn values(&self) -> [&str; 5] {
        [
            self.dataset.as_str(),
            self.topics.as_str(),
            self.source_name.as_str(),
            self.country.as_str(),
            self.source_url.as_str(),
        ]
    }

    /// Same provenance, different source URL (one page per year, etc).
    pub fn at_url(&self, url: &str) -> Self {
        Self { source_url: s!(url), ..self.clone() }
    }

    pub fn append_to(&self, row: &mut Vec<String>) {
        row.extend(self.values().into_iter().map(String::from));
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MultilineColumn {
    pub index: usize,
    #[serde(default = "default_multiline_sep")]
    pub separator: String,
}

fn default_multiline_sep() -> String {
    s!(crate::normalize::ADDRESS_SEP)
}

fn default_table_selector() -> String {
    s!("table")
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SiteProfile {
    pub name: String,
    #[serde(default = "default_table_selector")]
    pub table_selector: String,
    pub width: usize,
    /// Record headers, without the provenance columns.
    #[serde(default)]
    pub headers: Vec<String>,
    #[serde(default)]
    pub date_columns: Vec<usize>,
    #[serde(default)]
    pub date_empty: EmptyDate,
    #[serde(default)]
    pub multiline_columns: Vec<MultilineColumn>,
    #[serde(default)]
    pub text_mode: TextMode,
    #[serde(default)]
    pub provenance: Option<Provenance>,
}

impl SiteProfile {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let profile: SiteProfile = toml::from_str(text)?;
        profile.validate()?;
        Ok(profile)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml_str(&text)
    }

    fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(Error::Usage(format!("profile '{}': width must be at least 1", self.name)));
        }
        let out_of_range = self
            .date_columns
            .iter()
            .copied()
            .chain(self.multiline_columns.iter().map(|m| m.index))
            .find(|&i| i >= self.width);
        if let Some(i) = out_of_range {
            return Err(Error::Usage(format!(
                "profile '{}': column {} is outside width {}",
                self.name, i, self.width
            )));
        }
        if !self.headers.is_empty() && self.headers.len() != self.width {
            return Err(Error::Usage(format!(
                "profile '{}': {} headers for width {}",
                self.name,
                self.headers.len(),
                self.width
            )));
        }
        Ok(())
    }

    pub fn date_normalizer(&self) -> DateNormalizer {
        DateNormalizer::default().with_empty(self.date_empty)
    }

    /// Record headers followed by provenance headers (if any).
    pub fn output_headers(&self) -> Option<Vec<String>> {
        if self.headers.is_empty() {
            return None;
        }
        let mut h = self.headers.clone();
        if self.provenance.is_some() {
            h.extend(Provenance::headers());
        }
        Some(h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        name = "sc-enforcement"
        table_selector = "table.enforcement"
        width = 3
        headers = ["No.", "Party", "Date"]
        date_columns = [2]
        date_empty = "passthrough"
        text_mode = "lines"

        [[multiline_columns]]
        index = 1

        [provenance]
        dataset = "SC"
        topics = "fraud"
        source_name = "SC"
        country = "Malaysia"
        source_url = "https://example.test/enf"
    "#;

    #[test]
    fn parses_full_profile() {
        let p = SiteProfile::from_toml_str(SAMPLE).unwrap();
        assert_eq!(p.width, 3);
        assert_eq!(p.date_empty, EmptyDate::Passthrough);
        assert_eq!(p.text_mode, TextMode::Lines);
        assert_eq!(p.multiline_columns[0].separator, "; ");
        assert_eq!(p.output_headers().unwrap().len(), 8);
    }

    #[test]
    fn defaults_apply() {
        let p = SiteProfile::from_toml_str("name = \"x\"\nwidth = 2\n").unwrap();
        assert_eq!(p.table_selector, "table");
        assert_eq!(p.date_empty, EmptyDate::Placeholder);
        assert_eq!(p.text_mode, TextMode::Flat);
        assert!(p.provenance.is_none());
        assert!(p.output_headers().is_none());
    }

    #[test]
    fn rejects_out_of_range_columns() {
        let err = SiteProfile::from_toml_str("name = \"x\"\nwidth = 2\ndate_columns = [2]\n");
        assert!(matches!(err, Err(Error::Usage(_))));
        let err = SiteProfile::from_toml_str("name = \"x\"\nwidth = 0\n");
        assert!(matches!(err, Err(Error::Usage(_))));
    }

    #[test]
    fn bad_toml_is_profile_error() {
        assert!(matches!(SiteProfile::from_toml_str("width = \"wide\""), Err(Error::Profile(_))));
    }
}

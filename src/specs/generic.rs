// src/specs/generic.rs
//
// Any page whose table layout is described by a TOML `SiteProfile`: every
// table matching the selector is flattened on its own and shaped by the
// profile's date and multi-line columns.

use scraper::Html;

use crate::config::options::SiteKind;
use crate::config::profile::SiteProfile;
use crate::core::html;
use crate::error::Result;

use super::{shape_record, PageInput, SiteSpec};

pub struct Generic {
    profile: SiteProfile,
}

impl Generic {
    pub fn new(profile: SiteProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &SiteProfile {
        &self.profile
    }
}

impl SiteSpec for Generic {
    fn kind(&self) -> SiteKind { SiteKind::Generic }

    fn headers(&self) -> Vec<String> {
        self.profile.output_headers().unwrap_or_default()
    }

    fn extract(&mut self, page: &PageInput<'_>) -> Result<Vec<Vec<String>>> {
        let doc = Html::parse_document(page.html);
        let tables = html::select_tables(&doc, &self.profile.table_selector)?;
        if tables.is_empty() {
            logf!("{}: no table matches '{}'", self.profile.name, self.profile.table_selector);
            return Ok(Vec::new());
        }

        let provenance = self
            .profile
            .provenance
            .as_ref()
            .map(|p| page.url.map_or_else(|| p.clone(), |u| p.at_url(u)));

        let mut rows = Vec::new();
        for (i, table) in tables.into_iter().enumerate() {
            let t = html::read_table(table, self.profile.width, self.profile.text_mode);
            let before = rows.len();
            for rec in t.flatten() {
                let mut out = shape_record(&self.profile, rec);
                if let Some(p) = &provenance {
                    p.append_to(&mut out);
                }
                rows.push(out);
            }
            logd!("{}: table {} gave {} rows", self.profile.name, i, rows.len() - before);
        }
        logf!("{}: {} rows", self.profile.name, rows.len());
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROFILE: &str = r#"
        name = "enforcement"
        table_selector = "table.data"
        width = 3
        headers = ["Party", "Address", "Date"]
        date_columns = [2]
        text_mode = "lines"

        [[multiline_columns]]
        index = 1

        [provenance]
        dataset = "Example Regulator"
        topics = "fraud"
        source_name = "Example Regulator"
        country = "Malaysia"
        source_url = "https://regulator.example/list"
    "#;

    const PAGE: &str = r#"
    <table class="layout"><tr><td>ignored</td></tr></table>
    <table class="data">
      <tr><th>Party</th><th>Address</th><th>Date</th></tr>
      <tr><td rowspan="2">Alpha Sdn Bhd</td><td>Lot 1<br>Jalan Dua</td><td>02/03/2021</td></tr>
      <tr><td>Lot 9</td><td></td></tr>
    </table>
    <table class="data">
      <tr><td>Beta</td><td>Ipoh</td><td>March 4, 2020</td></tr>
    </table>"#;

    #[test]
    fn every_matching_table_is_flattened_separately() {
        let mut spec = Generic::new(SiteProfile::from_toml_str(PROFILE).unwrap());
        let rows = spec.extract(&PageInput::new(PAGE)).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][..3], &row!["Alpha Sdn Bhd", "Lot 1; Jalan Dua", "2021-03-02"][..]);
        assert_eq!(&rows[1][..3], &row!["Alpha Sdn Bhd", "Lot 9", "-"][..]);
        assert_eq!(&rows[2][..3], &row!["Beta", "Ipoh", "March 4, 2020"][..]);
        assert_eq!(rows[0][7], "https://regulator.example/list");
        assert_eq!(rows[0].len(), spec.headers().len());
    }

    #[test]
    fn url_override_lands_in_provenance() {
        let mut spec = Generic::new(SiteProfile::from_toml_str(PROFILE).unwrap());
        let rows = spec.extract(&PageInput::new(PAGE).url("https://regulator.example/p2")).unwrap();
        assert!(rows.iter().all(|r| r.last().map(String::as_str) == Some("https://regulator.example/p2")));
    }

    #[test]
    fn no_matching_table() {
        let mut spec = Generic::new(SiteProfile::from_toml_str(PROFILE).unwrap());
        assert!(spec.extract(&PageInput::new("<table><tr><td>x</td></tr></table>")).unwrap().is_empty());
    }
}

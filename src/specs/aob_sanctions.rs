// src/specs/aob_sanctions.rs
//
// SC Audit Oversight Board sanctions. The page holds one collapsible section
// per year: an `a.st-header` ("2023 Sanctions") followed by a sibling block
// containing a 6-column table.
//
// Columns: Year, No., Nature of Misconduct, Auditor, Brief Description of
// Misconduct, Action Taken, Date of AOB's Action, + provenance.

use scraper::{ElementRef, Html};

use crate::config::consts::{AOB_SANCTIONS_WIDTH, COUNTRY, SC_AOB_SANCTIONS_URL, SC_NAME, TOPIC_FRAUD_SC};
use crate::config::options::SiteKind;
use crate::config::profile::{Provenance, SiteProfile};
use crate::core::html::{self, TextMode};
use crate::error::Result;
use crate::normalize::collapse_ws;

use super::{shape_record, PageInput, SiteSpec};

const SECTION_HEADER: &str = "a.st-header";

pub struct AobSanctions {
    profile: SiteProfile,
}

impl AobSanctions {
    pub fn new() -> Self {
        Self { profile: profile() }
    }
}

impl Default for AobSanctions {
    fn default() -> Self { Self::new() }
}

pub fn profile() -> SiteProfile {
    SiteProfile {
        name: s!(SiteKind::AobSanctions.name()),
        table_selector: s!("table"),
        width: AOB_SANCTIONS_WIDTH,
        headers: row![
            "No.",
            "Nature of Misconduct",
            "Auditor",
            "Brief Description of Misconduct",
            "Action Taken",
            "Date of AOB's Action",
        ],
        date_columns: vec![5],
        date_empty: Default::default(),
        multiline_columns: vec![],
        text_mode: TextMode::Flat,
        provenance: Some(Provenance {
            dataset: s!(SC_NAME),
            topics: s!(TOPIC_FRAUD_SC),
            source_name: s!(SC_NAME),
            country: s!(COUNTRY),
            source_url: s!(SC_AOB_SANCTIONS_URL),
        }),
    }
}

/// "2023 Sanctions ▾" → "2023".
pub fn year_of(header_text: &str) -> String {
    let text = collapse_ws(header_text);
    text.split("Sanctions").next().unwrap_or("").trim().to_string()
}

/// The table belonging to a section header: the next sibling element itself,
/// or the first table inside it.
fn section_table<'a>(header: ElementRef<'a>) -> Option<ElementRef<'a>> {
    let wrapper = html::next_element_sibling(header)?;
    if wrapper.value().name() == "table" {
        return Some(wrapper);
    }
    html::first_descendant(wrapper, "table")
}

impl SiteSpec for AobSanctions {
    fn kind(&self) -> SiteKind { SiteKind::AobSanctions }

    fn headers(&self) -> Vec<String> {
        let mut h = row!["Year"];
        h.extend(self.profile.output_headers().unwrap_or_default());
        h
    }

    fn extract(&mut self, page: &PageInput<'_>) -> Result<Vec<Vec<String>>> {
        let doc = Html::parse_document(page.html);
        let provenance = self
            .profile
            .provenance
            .as_ref()
            .map(|p| page.url.map_or_else(|| p.clone(), |u| p.at_url(u)));

        let mut rows = Vec::new();
        for header in html::select_all(&doc, SECTION_HEADER)? {
            let year = year_of(&html::inner_text(header));
            logf!("AOB: scraping {} Sanctions", year);

            let Some(table) = section_table(header) else {
                logf!("AOB: no table found for {}, skipping", year);
                continue;
            };

            let label = format!("{year} Sanctions");
            let t = html::read_table(table, self.profile.width, self.profile.text_mode);
            for rec in t.flatten() {
                let mut out = vec![label.clone()];
                out.extend(shape_record(&self.profile, rec));
                if let Some(p) = &provenance {
                    p.append_to(&mut out);
                }
                rows.push(out);
            }
        }
        logd!("AOB: {} rows", rows.len());
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r##"
    <html><body>
      <a class="st-header" href="#">2023 Sanctions</a>
      <div class="st-content">
        <table>
          <tr><th>No.</th><th>Nature</th><th>Auditor</th><th>Brief</th><th>Action</th><th>Date</th></tr>
          <tr><td rowspan="2">1</td><td>Breach of ISQC 1</td><td>Firm A</td>
              <td>Failed to <br>document</td><td>Reprimand</td><td>25 Dec 2023</td></tr>
          <tr><td>Breach of ISA 230</td><td>Firm A</td><td>Same</td><td>Fine</td><td>25/12/2023</td></tr>
          <tr><td></td><td></td></tr>
        </table>
      </div>
      <a class="st-header" href="#">2022 Sanctions</a>
      <div class="st-content"><p>No sanctions.</p></div>
    </body></html>"##;

    #[test]
    fn year_label_from_header() {
        assert_eq!(year_of("  2021 Sanctions\n"), "2021");
        assert_eq!(year_of("Archive"), "Archive");
    }

    #[test]
    fn extracts_sections_with_rowspan_and_dates() {
        let mut spec = AobSanctions::new();
        let rows = spec.extract(&PageInput::new(PAGE)).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(
            &rows[0][..7],
            &row!["2023 Sanctions", "1", "Breach of ISQC 1", "Firm A", "Failed to document", "Reprimand", "2023-12-25"][..]
        );
        assert_eq!(rows[1][1], "1");
        assert_eq!(rows[1][6], "2023-12-25");
        assert_eq!(rows[0].len(), spec.headers().len());
        assert_eq!(rows[0][11], SC_AOB_SANCTIONS_URL);
    }

    #[test]
    fn url_override_lands_in_provenance() {
        let mut spec = AobSanctions::new();
        let rows = spec.extract(&PageInput::new(PAGE).url("file:///saved.html")).unwrap();
        assert_eq!(rows[0].last().map(String::as_str), Some("file:///saved.html"));
    }
}

// src/specs/consumer_alert.rs
//
// BNM Financial Consumer Alert list. Body rows:
//   [0] entity name, [1] website(s)/links, [2] date added, [3] remarks
// Rows with fewer than three cells are not entities and are skipped.

use scraper::Html;

use crate::config::consts::{BNM_ALERT_LIST_URL, BNM_NAME, COUNTRY, TOPIC_FRAUD_BNM};
use crate::config::options::SiteKind;
use crate::core::html::{self, TextMode};
use crate::error::Result;
use crate::normalize::DateNormalizer;

use super::{PageInput, SiteSpec};

const ROW_SELECTOR: &str = "table tbody tr";
const GROUP: &str = "Company";

pub struct ConsumerAlert {
    dates: DateNormalizer,
}

impl ConsumerAlert {
    pub fn new() -> Self {
        Self { dates: DateNormalizer::default() }
    }
}

impl Default for ConsumerAlert {
    fn default() -> Self { Self::new() }
}

impl SiteSpec for ConsumerAlert {
    fn kind(&self) -> SiteKind { SiteKind::ConsumerAlert }

    fn headers(&self) -> Vec<String> {
        row![
            "Group(sdn Type)",
            "Entity Name",
            "Website/URL",
            "Dataset",
            "Source URL",
            "Topics",
            "Source Name",
            "Country",
            "Date Added",
        ]
    }

    fn extract(&mut self, page: &PageInput<'_>) -> Result<Vec<Vec<String>>> {
        let doc = Html::parse_document(page.html);
        let url = page.url.unwrap_or(BNM_ALERT_LIST_URL);

        let mut rows = Vec::new();
        let mut skipped = 0usize;
        for tr in html::select_all(&doc, ROW_SELECTOR)? {
            let tds = html::child_cells(tr, "td");
            if tds.len() < 3 {
                skipped += 1;
                continue;
            }
            // Trimmed lines; a name split over lines keeps its breaks.
            let entity = html::cell_text(tds[0], TextMode::Lines);
            let entity = if entity.is_empty() { s!("-") } else { entity };
            let website = html::cell_text_with_links(tds[1]);
            let date_added = self.dates.normalize(&html::cell_text(tds[2], TextMode::Lines));

            rows.push(vec![
                s!(GROUP),
                entity,
                website,
                s!(BNM_NAME),
                s!(url),
                s!(TOPIC_FRAUD_BNM),
                s!(BNM_NAME),
                s!(COUNTRY),
                date_added,
            ]);
        }
        logf!("Consumer alert: {} rows ({} short rows skipped)", rows.len(), skipped);
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_with_links_and_dates() {
        let page = r#"<table id="alert"><thead><tr><th>Name</th><th>Website</th><th>Date</th></tr></thead>
          <tbody>
            <tr><td>Quick Rich Invest</td>
                <td>quickrich.example<br><a href="https://wa.me/6012">WhatsApp</a></td>
                <td>12-05-2024</td><td>remark</td></tr>
            <tr><td> </td><td></td><td></td></tr>
            <tr><td colspan="3">No data available</td></tr>
          </tbody></table>"#;
        let mut spec = ConsumerAlert::new();
        let rows = spec.extract(&PageInput::new(page)).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][1], "Quick Rich Invest");
        assert_eq!(rows[0][2], "quickrich.example | WhatsApp | WhatsApp https://wa.me/6012");
        assert_eq!(rows[0][8], "2024-05-12");
        assert_eq!(rows[0][4], BNM_ALERT_LIST_URL);
        assert_eq!(&rows[1][..3], &row!["Company", "-", "-"][..]);
        assert_eq!(rows[1][8], "-");
        assert_eq!(rows[1].len(), spec.headers().len());
    }

    #[test]
    fn entity_keeps_line_breaks() {
        let page = r#"<table><tbody>
            <tr><td>  Mega Profit<br> Global Ltd </td><td>mega.example</td><td> 1 Feb 2024 </td></tr>
          </tbody></table>"#;
        let mut spec = ConsumerAlert::new();
        let rows = spec.extract(&PageInput::new(page)).unwrap();
        assert_eq!(rows[0][1], "Mega Profit\nGlobal Ltd");
        assert_eq!(rows[0][8], "2024-02-01");
    }
}

// src/specs/financial_services.rs
//
// BNM enforcement notice (compounds under FSA s.253 / s.92). Two header rows
// with grouped columns precede the data; the closing "Total" row has fewer
// cells and is aligned to the right, so short rows are padded on the left.

use scraper::{ElementRef, Html};

use crate::config::consts::FINANCIAL_SERVICES_WIDTH;
use crate::config::options::SiteKind;
use crate::core::html;
use crate::error::Result;

use super::{PageInput, SiteSpec};

const TABLE_SELECTOR: &str = "table.standard-table";
const HEADER_ROWS: usize = 2;

/// Text nodes trimmed and concatenated without separators.
fn stripped_text(el: ElementRef<'_>) -> String {
    el.text().map(str::trim).filter(|t| !t.is_empty()).collect()
}

/// Keep the last `width` cells aligned right: pad on the left, cut on the right.
pub fn left_pad(mut cells: Vec<String>, width: usize) -> Vec<String> {
    cells.truncate(width);
    let mut out = vec![s!(); width - cells.len()];
    out.append(&mut cells);
    out
}

pub struct FinancialServices;

impl FinancialServices {
    pub fn new() -> Self { Self }
}

impl Default for FinancialServices {
    fn default() -> Self { Self::new() }
}

impl SiteSpec for FinancialServices {
    fn kind(&self) -> SiteKind { SiteKind::FinancialServices }

    fn headers(&self) -> Vec<String> {
        row![
            "No.",
            "Entities",
            "Compound (RM, million) under - S. 253 FSA",
            "Compound (RM, million) under - S. 92",
            "Total (RM, million)",
        ]
    }

    fn extract(&mut self, page: &PageInput<'_>) -> Result<Vec<Vec<String>>> {
        let doc = Html::parse_document(page.html);
        let Some(table) = html::select_tables(&doc, TABLE_SELECTOR)?.into_iter().next() else {
            logf!("Financial services: no '{}' on page", TABLE_SELECTOR);
            return Ok(Vec::new());
        };

        let rows: Vec<Vec<String>> = html::own_rows(table)
            .into_iter()
            .skip(HEADER_ROWS)
            .map(|tr| html::child_cells(tr, "td").into_iter().map(stripped_text).collect::<Vec<_>>())
            // A `<tr>` without `td` is layout, not an all-empty entity row.
            .filter(|cells| !cells.is_empty())
            .map(|cells| left_pad(cells, FINANCIAL_SERVICES_WIDTH))
            .collect();
        logf!("Financial services: {} rows", rows.len());
        Ok(rows)
    }
}

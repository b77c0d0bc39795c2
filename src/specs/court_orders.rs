// src/specs/court_orders.rs
//
// BNM court orders. Each body row:
//   [0] No. (ignored; we number rows ourselves across all pages)
//   [1] Company: "NAME (REG-NO)" followed by an address over several lines
//   [2] Owners: one "Name (ID)" per line
//   [3] Date of court order
//   [4] Date received

use std::sync::LazyLock;

use regex::Regex;
use scraper::Html;

use crate::config::consts::COURT_ORDERS_WIDTH;
use crate::config::options::SiteKind;
use crate::core::html::{self, TextMode};
use crate::error::Result;
use crate::normalize::date::DateNormalizer;
use crate::normalize::text::{collapse_ws, lines_of, strip_invisible, ADDRESS_SEP};
use crate::table::flatten;

use super::{PageInput, SiteSpec};

const ROW_SELECTOR: &str = "table tbody tr";

// Name (ID) Address; the ID is the first parenthesised group.
static COMPANY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^(.*?)\s*\(([^)]+)\)\s*(.*)$").unwrap());
static OWNER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?)\s*\(([^)]+)\)$").unwrap());

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompanyInfo {
    pub name: String,
    /// Kept with its parentheses, e.g. "(123456-X)".
    pub id: String,
    /// Address lines joined with "; ".
    pub address: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Owner {
    pub name: String,
    pub id: String,
}

/// The address keeps its line structure: one `"; "` per line break in the cell.
pub fn split_company_info(raw: &str) -> CompanyInfo {
    let text = lines_of(&strip_invisible(raw)).join("\n");
    match COMPANY_RE.captures(&text) {
        Some(c) => CompanyInfo {
            name: collapse_ws(&c[1]),
            id: format!("({})", collapse_ws(&c[2])),
            address: lines_of(&c[3]).join(ADDRESS_SEP),
        },
        None => CompanyInfo { name: collapse_ws(&text), ..Default::default() },
    }
}

pub fn parse_owners(raw: &str) -> Vec<Owner> {
    lines_of(&strip_invisible(raw))
        .into_iter()
        .map(|line| match OWNER_RE.captures(&line) {
            Some(c) => Owner { name: c[1].trim().to_string(), id: c[2].trim().to_string() },
            None => Owner { name: line, id: s!() },
        })
        .collect()
}

pub struct CourtOrders {
    next_serial: usize,
    dates: DateNormalizer,
}

impl CourtOrders {
    pub fn new() -> Self {
        Self { next_serial: 1, dates: DateNormalizer::court_orders() }
    }
}

impl Default for CourtOrders {
    fn default() -> Self { Self::new() }
}

impl SiteSpec for CourtOrders {
    fn kind(&self) -> SiteKind { SiteKind::CourtOrders }

    fn headers(&self) -> Vec<String> {
        row![
            "No.",
            "Company_Name",
            "Company_ID",
            "Address",
            "Company_Owner_Name",
            "Company_Owner_ID",
            "Date of Court Order",
            "Date Received",
        ]
    }

    fn extract(&mut self, page: &PageInput<'_>) -> Result<Vec<Vec<String>>> {
        let doc = Html::parse_document(page.html);
        let trs = html::select_all(&doc, ROW_SELECTOR)?;
        let table_rows: Vec<_> = trs.into_iter().map(|tr| html::read_row(tr, TextMode::Lines)).collect();

        let mut rows = Vec::new();
        for rec in flatten(table_rows, COURT_ORDERS_WIDTH) {
            let company = split_company_info(&rec[1]);
            let owners = parse_owners(&rec[2]);
            let owner_names = owners.iter().map(|o| o.name.as_str()).collect::<Vec<_>>().join(ADDRESS_SEP);
            let owner_ids = owners.iter().map(|o| o.id.as_str()).collect::<Vec<_>>().join(ADDRESS_SEP);

            rows.push(vec![
                self.next_serial.to_string(),
                company.name,
                company.id,
                company.address,
                owner_names,
                owner_ids,
                self.dates.normalize(rec[3].trim()),
                self.dates.normalize(rec[4].trim()),
            ]);
            self.next_serial += 1;
        }
        logf!("Court orders: {} rows (next serial {})", rows.len(), self.next_serial);
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn company_split_keeps_address_lines() {
        let info = split_company_info(
            "ABC Capital\u{a0}Sdn Bhd (1234567-X)\nNo. 1, Jalan Ampang\n\n50450 Kuala Lumpur",
        );
        assert_eq!(info.name, "ABC Capital Sdn Bhd");
        assert_eq!(info.id, "(1234567-X)");
        assert_eq!(info.address, "No. 1, Jalan Ampang; 50450 Kuala Lumpur");
    }

    #[test]
    fn company_without_id() {
        let info = split_company_info("  Unnamed   Trader \n");
        assert_eq!(info, CompanyInfo { name: s!("Unnamed Trader"), ..Default::default() });
    }

    #[test]
    fn owners_with_and_without_ids() {
        let owners = parse_owners("Tan Ah Kow (800101-14-5555)\nSiti\u{200b} binti Ali\n");
        assert_eq!(owners.len(), 2);
        assert_eq!(owners[0], Owner { name: s!("Tan Ah Kow"), id: s!("800101-14-5555") });
        assert_eq!(owners[1].name, "Siti  binti Ali");
        assert_eq!(owners[1].id, "");
    }

    #[test]
    fn serial_runs_across_pages() {
        let page = r#"<table><thead><tr><th>No</th></tr></thead><tbody>
            <tr><td>1</td><td>XYZ Bhd (99-A)<br>Lot 5<br>Penang</td>
                <td>Lim (A1)<br>Wong (B2)</td><td>3 March 2022</td><td>07/03/2022</td></tr>
            <tr><td>2</td><td>Solo Trader</td><td>Ng</td><td></td><td>n/a</td></tr>
        </tbody></table>"#;
        let mut spec = CourtOrders::new();
        let first = spec.extract(&PageInput::new(page)).unwrap();
        let second = spec.extract(&PageInput::new(page)).unwrap();

        assert_eq!(
            first[0],
            row!["1", "XYZ Bhd", "(99-A)", "Lot 5; Penang", "Lim; Wong", "A1; B2", "2022-03-03", "2022-03-07"]
        );
        assert_eq!(first[1], row!["2", "Solo Trader", "", "", "Ng", "", "", "n/a"]);
        assert_eq!(second[0][0], "3");
        assert_eq!(second[1][0], "4");
    }
}

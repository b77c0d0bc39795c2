// src/core/html.rs
//
// Thin layer over `scraper`: find tables, read rows/cells, and approximate
// a browser's innerText so multi-line cells keep their line structure.

use scraper::{ElementRef, Html, Node, Selector};
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::normalize::text::{collapse_ws, lines_of, strip_invisible, LINK_SEP};
use crate::table::{Cell, Row, Table};

/// How cell text is flattened when a table is read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextMode {
    /// All whitespace (line breaks included) collapsed to single spaces.
    #[default]
    Flat,
    /// One trimmed line per rendered line; blank lines dropped.
    Lines,
}

pub fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| Error::Selector {
        selector: s!(selector),
        message: e.to_string(),
    })
}

pub fn select_all<'a>(doc: &'a Html, selector: &str) -> Result<Vec<ElementRef<'a>>> {
    let sel = parse_selector(selector)?;
    Ok(doc.select(&sel).collect())
}

pub fn select_tables<'a>(doc: &'a Html, selector: &str) -> Result<Vec<ElementRef<'a>>> {
    Ok(select_all(doc, selector)?
        .into_iter()
        .filter(|el| el.value().name() == "table")
        .collect())
}

fn is_block(name: &str) -> bool {
    matches!(
        name,
        "p" | "div" | "li" | "ul" | "ol" | "tr" | "table" | "section" | "article"
            | "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "blockquote" | "pre"
    )
}

fn push_run(text: &str, out: &mut String) {
    for ch in text.chars() {
        if ch.is_whitespace() && ch != '\u{a0}' {
            if !out.is_empty() && !out.ends_with([' ', '\n']) {
                out.push(' ');
            }
        } else {
            out.push(ch);
        }
    }
}

fn push_children(el: ElementRef<'_>, out: &mut String) {
    for child in el.children() {
        match child.value() {
            Node::Text(t) => push_run(t, out),
            Node::Element(_) => {
                if let Some(e) = ElementRef::wrap(child) {
                    push_element(e, out);
                }
            }
            _ => {}
        }
    }
}

fn push_element(el: ElementRef<'_>, out: &mut String) {
    let name = el.value().name();
    if name == "br" {
        out.push('\n');
        return;
    }
    if matches!(name, "script" | "style" | "noscript" | "template") {
        return;
    }
    let block = is_block(name);
    if block && !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
    push_children(el, out);
    if block && !out.ends_with('\n') {
        out.push('\n');
    }
}

/// Rendered text with `<br>` and block boundaries as `\n`.
/// Runs of source whitespace inside text collapse to one space.
pub fn inner_text(el: ElementRef<'_>) -> String {
    let mut out = s!();
    push_children(el, &mut out);
    strip_invisible(&out)
}

pub fn cell_text(el: ElementRef<'_>, mode: TextMode) -> String {
    let raw = inner_text(el);
    match mode {
        TextMode::Flat => collapse_ws(&raw),
        TextMode::Lines => lines_of(&raw).join("\n"),
    }
}

/// `<tr>` elements belonging to `table` itself, skipping nested tables.
pub fn own_rows<'a>(table: ElementRef<'a>) -> Vec<ElementRef<'a>> {
    fn walk<'a>(el: ElementRef<'a>, out: &mut Vec<ElementRef<'a>>) {
        for child in el.children().filter_map(ElementRef::wrap) {
            match child.value().name() {
                "tr" => out.push(child),
                "table" => {}
                _ => walk(child, out),
            }
        }
    }
    let mut out = Vec::new();
    walk(table, &mut out);
    out
}

/// Direct child elements of `row` with the given tag name.
pub fn child_cells<'a>(row: ElementRef<'a>, tag: &str) -> Vec<ElementRef<'a>> {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|c| c.value().name() == tag)
        .collect()
}

pub fn read_cell(td: ElementRef<'_>, mode: TextMode) -> Cell {
    Cell::from_attrs(
        cell_text(td, mode),
        td.value().attr("colspan"),
        td.value().attr("rowspan"),
    )
}

pub fn read_row(tr: ElementRef<'_>, mode: TextMode) -> Row {
    child_cells(tr, "td").into_iter().map(|td| read_cell(td, mode)).collect()
}

/// Only `<td>` cells are read, so a `<th>`-only header row becomes an empty
/// row and is skipped by the flattener.
pub fn read_table(table: ElementRef<'_>, width: usize, mode: TextMode) -> Table {
    let rows = own_rows(table).into_iter().map(|tr| read_row(tr, mode)).collect();
    Table::with_rows(width, rows)
}

pub fn has_descendant(el: ElementRef<'_>, tag: &str) -> bool {
    el.descendants()
        .filter_map(ElementRef::wrap)
        .any(|d| d.value().name() == tag)
}

pub fn first_descendant<'a>(el: ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
    el.descendants()
        .filter_map(ElementRef::wrap)
        .find(|d| d.value().name() == tag)
}

/// Next element sibling, skipping whitespace text.
pub fn next_element_sibling<'a>(el: ElementRef<'a>) -> Option<ElementRef<'a>> {
    el.next_siblings().find_map(ElementRef::wrap)
}

/// Text lines of the cell plus one entry per link (`"text href"`, or the
/// bare href for an empty label), de-duplicated against what is already
/// there, joined with `" | "`. `"-"` when the cell has nothing.
pub fn cell_text_with_links(el: ElementRef<'_>) -> String {
    let mut entries = lines_of(&inner_text(el));
    let links = el
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|d| d.value().name() == "a");

    for a in links {
        let Some(href) = a.value().attr("href").filter(|h| !h.is_empty()) else {
            continue;
        };
        let label = collapse_ws(&inner_text(a));
        let entry = if label.is_empty() { s!(href) } else { format!("{label} {href}") };
        if !entries.contains(&entry) {
            entries.push(entry);
        }
    }

    if entries.is_empty() { s!("-") } else { entries.join(LINK_SEP) }
}

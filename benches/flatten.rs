// benches/flatten.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use reg_scrape::core::html::{self, TextMode};
use reg_scrape::table::{flatten, Cell, Row};

const WIDTH: usize = 6;

/// Every third row opens a two-row span in column 0 and a two-column span
/// in column 2, so the tracker always has live entries.
fn spanned_rows(n: usize) -> Vec<Row> {
    (0..n)
        .map(|i| match i % 3 {
            0 => vec![
                Cell::new(format!("group {i}")).rowspan(3),
                Cell::new(format!("{i}")),
                Cell::new("wide").colspan(2),
                Cell::new("x"),
                Cell::new("y"),
            ],
            _ => (1..WIDTH).map(|c| Cell::new(format!("r{i}c{c}"))).collect(),
        })
        .collect()
}

fn spanned_page(n: usize) -> String {
    let mut page = String::from("<table>");
    for row in spanned_rows(n) {
        page.push_str("<tr>");
        for cell in row {
            page.push_str(&format!(
                r#"<td rowspan="{}" colspan="{}">{}<br>line</td>"#,
                cell.row_span(),
                cell.col_span(),
                cell.text
            ));
        }
        page.push_str("</tr>");
    }
    page.push_str("</table>");
    page
}

fn bench_flatten(c: &mut Criterion) {
    let rows = spanned_rows(5_000);
    c.bench_function("flatten_5k_rows", |b| {
        b.iter(|| black_box(flatten(black_box(&rows), WIDTH).count()))
    });

    let page = spanned_page(1_000);
    c.bench_function("read_and_flatten_1k_rows", |b| {
        b.iter(|| {
            let doc = scraper::Html::parse_document(black_box(&page));
            let tables = html::select_tables(&doc, "table").unwrap_or_default();
            let n: usize = tables
                .into_iter()
                .map(|t| html::read_table(t, WIDTH, TextMode::Lines).into_records().len())
                .sum();
            black_box(n)
        })
    });
}

criterion_group!(benches, bench_flatten);
criterion_main!(benches);

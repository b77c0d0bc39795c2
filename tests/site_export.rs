// tests/site_export.rs
use std::fs;
use std::path::{Path, PathBuf};

use reg_scrape::config::consts::{SC_AOB_SANCTIONS_URL, SC_NAME};
use reg_scrape::config::options::{ExportFormat, SiteKind};
use reg_scrape::progress::Progress;
use reg_scrape::runner::{self, Params};
use reg_scrape::Error;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

#[derive(Default)]
struct Recorder {
    total: usize,
    pages: Vec<(PathBuf, usize)>,
    messages: Vec<String>,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn log(&mut self, msg: &str) { self.messages.push(msg.to_string()); }
    fn item_done(&mut self, page: &Path, rows: usize) { self.pages.push((page.to_path_buf(), rows)); }
    fn finish(&mut self) { self.finished = true; }
}

#[test]
fn aob_sanctions_page_to_csv() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("nested").join("aob.csv");

    let mut params = Params::new(SiteKind::AobSanctions);
    params.inputs.push(fixture("aob_sanctions.html"));
    params.export.set_path(out.to_str().unwrap());

    let mut rec = Recorder::default();
    let summary = runner::run(&params, Some(&mut rec)).unwrap();
    assert_eq!(summary.path, out);
    assert_eq!(summary.rows, 3);
    assert_eq!(rec.total, 1);
    assert_eq!(rec.pages[0].1, 3);
    assert!(rec.finished);
    assert_eq!(rec.messages, vec![format!("Wrote 3 rows to {}", out.display())]);

    let text = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("Year,No.,Nature of Misconduct,Auditor,"));
    assert!(lines[0].ends_with(",Dataset,Topics,Source Name,Country,Source URL"));
    assert_eq!(
        lines[2],
        format!(
            "2023 Sanctions,2,Breach of ISA 230,Audit Firm B,Prohibited from auditing PIEs,Prohibited from auditing PIEs,2023-06-01,{SC_NAME},fraud,{SC_NAME},Malaysia,{SC_AOB_SANCTIONS_URL}"
        )
    );
    // Empty date cell gets the placeholder; the year without a table is skipped.
    assert!(lines[3].starts_with("2021 Sanctions,1,Independence,Partner C,Held shares in client,\"Fine RM50,000\",-,"));
}

#[test]
fn tsv_without_headers_and_url_override() {
    let dir = tempfile::tempdir().unwrap();
    let mut params = Params::new(SiteKind::AobSanctions);
    params.inputs.push(fixture("aob_sanctions.html"));
    params.url = Some("https://archive.example/aob".into());
    params.export.format = ExportFormat::Tsv;
    params.export.include_headers = false;
    params.export.set_path(dir.path().join("aob").to_str().unwrap());

    let summary = runner::run(&params, None).unwrap();
    assert_eq!(summary.path, dir.path().join("aob.tsv"));

    let text = fs::read_to_string(&summary.path).unwrap();
    assert_eq!(text.lines().count(), 3);
    for line in text.lines() {
        assert_eq!(line.split('\t').count(), 12);
        assert!(line.ends_with("\thttps://archive.example/aob"));
    }
}

#[test]
fn labels_pair_with_inputs() {
    let dir = tempfile::tempdir().unwrap();
    let page = dir.path().join("2020.html");
    fs::write(
        &page,
        "<table><tr><td>1</td><td>Late filing</td><td>Tan</td><td>Annual report</td><td>1 June 2020</td></tr></table>",
    )
    .unwrap();

    let mut params = Params::new(SiteKind::CompoundCases);
    params.inputs = vec![page.clone(), page];
    params.labels = vec!["Cases Compounded In 2020".into()];
    params.export.set_path(dir.path().join("cases.csv").to_str().unwrap());

    let ds = runner::collect(&params, &mut reg_scrape::progress::NullProgress).unwrap();
    assert_eq!(ds.len(), 2);
    assert_eq!(ds.rows[0][0], "Cases Compounded In 2020");
    // Second page has no label and no heading to detect one from.
    assert_eq!(ds.rows[1][0], "");
}

#[test]
fn usage_errors() {
    let params = Params::new(SiteKind::CourtOrders);
    assert!(matches!(runner::run(&params, None), Err(Error::Usage(_))));

    let mut params = Params::new(SiteKind::Generic);
    params.inputs.push(fixture("aob_sanctions.html"));
    assert!(matches!(runner::run(&params, None), Err(Error::Usage(_))));

    let mut params = Params::new(SiteKind::CourtOrders);
    params.inputs.push(PathBuf::from("does/not/exist.html"));
    assert!(matches!(runner::run(&params, None), Err(Error::Io { .. })));
}

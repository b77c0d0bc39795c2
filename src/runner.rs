// src/runner.rs
use std::path::PathBuf;

use crate::config::options::{ExportOptions, SiteKind};
use crate::config::profile::SiteProfile;
use crate::data::Dataset;
use crate::error::{Error, Result};
use crate::file::{export_dataset, read_page};
use crate::progress::{NullProgress, Progress};
use crate::specs::{self, PageInput};

/// Everything one run needs, however the frontend collected it.
#[derive(Clone, Debug)]
pub struct Params {
    pub site: SiteKind,
    /// Saved pages, processed in order.
    pub inputs: Vec<PathBuf>,
    /// Section labels, paired with `inputs` by position.
    pub labels: Vec<String>,
    /// Source URL recorded in provenance columns; site default otherwise.
    pub url: Option<String>,
    pub profile: Option<PathBuf>,
    pub export: ExportOptions,
}

impl Params {
    pub fn new(site: SiteKind) -> Self {
        Self {
            site,
            inputs: Vec::new(),
            labels: Vec::new(),
            url: None,
            profile: None,
            export: ExportOptions::for_site(site),
        }
    }
}

/// Summary of what was produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub path: PathBuf,
    pub rows: usize,
}

/// Read every input page, extract rows with the site's spec, and write one file.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(params: &Params, progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };

    let result = collect(params, progress)
        .and_then(|ds| export_dataset(&params.export, &ds).map(|path| RunSummary { path, rows: ds.len() }));
    if let Ok(summary) = &result {
        progress.log(&format!("Wrote {} rows to {}", summary.rows, summary.path.display()));
    }
    progress.finish();
    result
}

/// The extraction half of [`run`], without writing anything.
pub fn collect(params: &Params, progress: &mut dyn Progress) -> Result<Dataset> {
    if params.inputs.is_empty() {
        return Err(Error::Usage(s!("no input pages given (use -i <file.html>)")));
    }
    if params.labels.len() > params.inputs.len() {
        return Err(Error::Usage(format!(
            "{} labels for {} input pages",
            params.labels.len(),
            params.inputs.len()
        )));
    }

    let profile = params.profile.as_deref().map(SiteProfile::load).transpose()?;
    let mut spec = specs::for_site(params.site, profile)?;
    logf!("{}: {} page(s)", spec.kind().name(), params.inputs.len());

    progress.begin(params.inputs.len());

    let mut ds = Dataset::new(Some(spec.headers()).filter(|h| !h.is_empty()));
    for (i, input) in params.inputs.iter().enumerate() {
        let html = read_page(input)?;
        let mut page = PageInput::new(&html);
        if let Some(label) = params.labels.get(i) {
            page = page.label(label);
        }
        if let Some(url) = &params.url {
            page = page.url(url);
        }

        let rows = spec.extract(&page)?;
        logd!("{}: {} rows", input.display(), rows.len());
        progress.item_done(input, rows.len());
        ds.rows.extend(rows);
    }
    Ok(ds)
}

// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::csv::write_dataset;
use crate::data::Dataset;
use crate::error::{Error, Result};

/// Write one export file based on ExportOptions (path, headers policy, delimiter).
/// Returns the final path written to.
pub fn export_dataset(export: &ExportOptions, ds: &Dataset) -> Result<PathBuf> {
    let path = export.out_path();
    write_to(&path, ds, export)?;
    logf!("wrote {} rows to {}", ds.len(), path.display());
    Ok(path)
}

fn write_to(path: &Path, ds: &Dataset, export: &ExportOptions) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut out = BufWriter::new(file);
    write_dataset(&mut out, ds, export.format.delim(), export.include_headers)?;
    out.flush().map_err(|e| Error::io(path, e))?;
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::Usage(format!("Path exists but is not a directory: {}", dir.display())));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    }
    Ok(())
}

pub fn read_page(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    Ok(match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    })
}

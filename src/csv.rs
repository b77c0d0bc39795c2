// src/csv.rs
use std::io::Write;

use ::csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::data::Dataset;
use crate::error::Result;

/* ---------------- Writing ---------------- */

/// Write a dataset to any writer. Rows are padded to the widest row so every
/// line has the same field count.
pub fn write_dataset<W: Write>(w: W, ds: &Dataset, delim: u8, include_headers: bool) -> Result<()> {
    let mut wtr = WriterBuilder::new()
        .delimiter(delim)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .flexible(false)
        .from_writer(w);

    let width = ds.width();
    let pad = |r: &[String]| -> Vec<String> {
        let mut out = r.to_vec();
        out.resize(width, s!());
        out
    };

    if include_headers {
        if let Some(h) = &ds.headers {
            wtr.write_record(pad(h))?;
        }
    }
    for r in &ds.rows {
        wtr.write_record(pad(r))?;
    }
    wtr.flush().map_err(::csv::Error::from)?;
    Ok(())
}

/// Whole dataset as one string (clipboard, tests, previews).
pub fn to_string(ds: &Dataset, delim: u8, include_headers: bool) -> Result<String> {
    let mut buf: Vec<u8> = Vec::new();
    write_dataset(&mut buf, ds, delim, include_headers)?;
    Ok(match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_only_when_needed() {
        let mut ds = Dataset::new(Some(row!["No.", "Name"]));
        ds.push(row!["1", "Lim, Ah \"Boy\""]);
        ds.push(row!["2", "line1\nline2"]);
        let out = to_string(&ds, b',', true).unwrap();
        assert_eq!(out, "No.,Name\n1,\"Lim, Ah \"\"Boy\"\"\"\n2,\"line1\nline2\"\n");
    }

    #[test]
    fn short_rows_padded_and_headers_optional() {
        let mut ds = Dataset::new(Some(row!["a", "b", "c"]));
        ds.push(row!["1"]);
        let out = to_string(&ds, b'\t', false).unwrap();
        assert_eq!(out, "1\t\t\n");
    }
}

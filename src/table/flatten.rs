// src/table/flatten.rs
//
// Rowspan/colspan expansion of one table into fixed-width records.
//
// A span tracker remembers, per logical column, the text of a cell whose
// rowspan still owes output to the rows below. Rows are walked left to right
// over logical columns; a live tracker entry fills its column without
// consuming a cell from the current row.

use std::collections::HashMap;
use std::collections::VecDeque;

use super::model::{Cell, Record, Row, Table};

#[derive(Clone, Debug)]
struct Pending {
    text: String,
    rows_left: usize,
}

/// Cells still owed to rows below, keyed by logical column.
/// One tracker per flatten pass; never shared between tables.
#[derive(Clone, Debug, Default)]
pub struct SpanTracker {
    pending: HashMap<usize, Pending>,
}

impl SpanTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text for `col` if an entry is live, consuming one row from it.
    fn take(&mut self, col: usize) -> Option<String> {
        let entry = self.pending.get_mut(&col)?;
        if entry.rows_left == 0 {
            return None;
        }
        entry.rows_left -= 1;
        let text = entry.text.clone();
        if entry.rows_left == 0 {
            self.pending.remove(&col);
        }
        Some(text)
    }

    fn register(&mut self, col: usize, text: &str, rowspan: usize) {
        self.pending.insert(col, Pending { text: s!(text), rows_left: rowspan - 1 });
    }

    pub fn is_live(&self, col: usize) -> bool {
        self.pending.get(&col).is_some_and(|p| p.rows_left > 0)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.values().all(|p| p.rows_left == 0)
    }
}

/// Expand one source row into `width` strings, updating the tracker.
/// `None` for a row with no cells at all (header-only or empty `<tr>`),
/// in which case the tracker is left untouched.
pub fn expand_row(cells: &[Cell], width: usize, tracker: &mut SpanTracker) -> Option<Record> {
    if cells.is_empty() {
        return None;
    }

    let mut queue: VecDeque<&Cell> = cells.iter().collect();
    let mut out: Record = Vec::with_capacity(width);
    let mut col = 0usize;

    while col < width {
        if let Some(text) = tracker.take(col) {
            out.push(text);
            col += 1;
            continue;
        }

        let Some(cell) = queue.pop_front() else {
            out.push(s!());
            col += 1;
            continue;
        };

        // Only the starting column carries rowspan forward, even for colspan > 1.
        if cell.row_span() > 1 {
            tracker.register(col, &cell.text, cell.row_span());
        }
        let span = cell.col_span().min(width - col);
        for _ in 0..span {
            out.push(cell.text.clone());
        }
        col += span;
    }

    out.resize(width, s!());
    Some(out)
}

#[inline]
fn is_blank(record: &[String]) -> bool {
    record.iter().all(|c| c.trim().is_empty())
}

/// Lazy record stream over any sequence of rows.
pub struct Flatten<I> {
    rows: I,
    width: usize,
    tracker: SpanTracker,
}

impl<I> Flatten<I> {
    pub fn tracker(&self) -> &SpanTracker {
        &self.tracker
    }
}

impl<I> Iterator for Flatten<I>
where
    I: Iterator,
    I::Item: AsRef<[Cell]>,
{
    type Item = Record;

    fn next(&mut self) -> Option<Record> {
        for row in self.rows.by_ref() {
            let Some(record) = expand_row(row.as_ref(), self.width, &mut self.tracker) else {
                continue;
            };
            if is_blank(&record) {
                continue;
            }
            return Some(record);
        }
        None
    }
}

/// Flatten `rows` into `width`-wide records with a fresh tracker.
pub fn flatten<R>(rows: R, width: usize) -> Flatten<R::IntoIter>
where
    R: IntoIterator,
    R::Item: AsRef<[Cell]>,
{
    Flatten { rows: rows.into_iter(), width, tracker: SpanTracker::new() }
}

impl Table {
    pub fn flatten(&self) -> Flatten<std::slice::Iter<'_, Row>> {
        flatten(self.rows.iter(), self.width)
    }

    pub fn into_records(self) -> Vec<Record> {
        flatten(self.rows, self.width).collect()
    }
}

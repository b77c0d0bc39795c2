// src/table/model.rs
//
// Plain data for one HTML table as the flattener sees it.

/// One `<td>`: flattened text plus its span attributes (both ≥ 1).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    colspan: usize,
    rowspan: usize,
}

impl Cell {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), colspan: 1, rowspan: 1 }
    }

    /// Build from raw attribute values; anything unparseable counts as 1.
    pub fn from_attrs(text: impl Into<String>, colspan: Option<&str>, rowspan: Option<&str>) -> Self {
        Self { text: text.into(), colspan: parse_span(colspan), rowspan: parse_span(rowspan) }
    }

    pub fn colspan(mut self, n: usize) -> Self {
        self.colspan = n.max(1);
        self
    }

    pub fn rowspan(mut self, n: usize) -> Self {
        self.rowspan = n.max(1);
        self
    }

    #[inline] pub fn col_span(&self) -> usize { self.colspan }
    #[inline] pub fn row_span(&self) -> usize { self.rowspan }
}

/// Cells in literal markup order, not yet expanded for rowspans above.
pub type Row = Vec<Cell>;

/// Exactly `width` strings.
pub type Record = Vec<String>;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    pub rows: Vec<Row>,
    pub width: usize,
}

impl Table {
    pub fn new(width: usize) -> Self {
        Self { rows: Vec::new(), width }
    }

    pub fn with_rows(width: usize, rows: Vec<Row>) -> Self {
        Self { rows, width }
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }
}

/// `colspan="2"` → 2. Missing, blank, non-integer or zero → 1.
pub fn parse_span(value: Option<&str>) -> usize {
    value
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|&n| n >= 1)
        .unwrap_or(1)
}

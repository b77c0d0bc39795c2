// src/data.rs
//
// Headers + rows as handed from a site spec to the export layer.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dataset {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl Dataset {
    pub fn new(headers: Option<Vec<String>>) -> Self {
        Self { headers, rows: Vec::new() }
    }

    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    pub fn push(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Append another page's rows. Headers are kept from whichever side has them.
    pub fn extend(&mut self, other: Dataset) {
        if self.headers.is_none() {
            self.headers = other.headers;
        }
        self.rows.extend(other.rows);
    }

    /// Widest row (or header), for writers that need rectangular output.
    pub fn width(&self) -> usize {
        let h = self.headers.as_ref().map_or(0, Vec::len);
        self.rows.iter().map(Vec::len).chain(std::iter::once(h)).max().unwrap_or(0)
    }
}

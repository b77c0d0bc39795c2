// src/normalize/date.rs
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde::Deserialize;

/// Output shape for every successfully parsed date.
pub const CANONICAL: &str = "%Y-%m-%d";

/// Candidate input formats, tried in order.
pub const DMY_SLASH: &str = "%d/%m/%Y";
pub const YMD_SLASH: &str = "%Y/%m/%d";
pub const DMY_DASH: &str = "%d-%m-%Y";
pub const D_MON_Y: &str = "%d %b %Y";
pub const D_MONTH_Y: &str = "%d %B %Y";
pub const YMD_DASH: &str = "%Y-%m-%d";
pub const DMY_DOT: &str = "%d.%m.%Y";
pub const D_MON_YY: &str = "%d-%b-%y";

pub const DEFAULT_FORMATS: &[&str] = &[
    DMY_SLASH, YMD_SLASH, DMY_DASH, D_MON_Y, D_MONTH_Y, YMD_DASH, DMY_DOT, D_MON_YY,
];

/// What an empty or whitespace-only date cell turns into.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyDate {
    /// `"-"`
    #[default]
    Placeholder,
    /// The input, untouched.
    Passthrough,
}

pub const EMPTY_PLACEHOLDER: &str = "-";

/// Exact textual shape a format accepts, strptime style: `%Y` is four
/// digits, `%y` two, `%d`/`%m` one or two, month names letters only, a
/// space any whitespace run. Chrono alone is looser on all of these.
fn shape_of(fmt: &str) -> Regex {
    let mut pattern = s!("(?i)^");
    let mut chars = fmt.chars();
    while let Some(c) = chars.next() {
        match c {
            '%' => pattern.push_str(match chars.next() {
                Some('Y') => r"\d{4}",
                Some('y') => r"\d{2}",
                Some('d') | Some('m') => r"\d{1,2}",
                Some('b') => r"[a-z]{3}",
                Some('B') => r"[a-z]+",
                _ => ".+?",
            }),
            c if c.is_whitespace() => pattern.push_str(r"\s+"),
            c => pattern.push_str(&regex::escape(&c.to_string())),
        }
    }
    pattern.push('$');
    Regex::new(&pattern).unwrap()
}

#[derive(Clone, Debug)]
pub struct DateNormalizer {
    formats: Vec<(&'static str, Regex)>,
    empty: EmptyDate,
}

impl PartialEq for DateNormalizer {
    fn eq(&self, other: &Self) -> bool {
        self.empty == other.empty && self.formats().eq(other.formats())
    }
}

impl Eq for DateNormalizer {}

impl Default for DateNormalizer {
    fn default() -> Self {
        Self::new(DEFAULT_FORMATS, EmptyDate::Placeholder)
    }
}

impl DateNormalizer {
    pub fn new(formats: &[&'static str], empty: EmptyDate) -> Self {
        Self { formats: formats.iter().map(|f| (*f, shape_of(f))).collect(), empty }
    }

    /// BNM court orders: long month names first, empty cells stay empty.
    pub fn court_orders() -> Self {
        Self::new(&[D_MONTH_Y, DMY_SLASH, DMY_DASH], EmptyDate::Passthrough)
    }

    /// `DD/MM/YYYY` only; anything else is left alone.
    pub fn day_first() -> Self {
        Self::new(&[DMY_SLASH], EmptyDate::Passthrough)
    }

    pub fn with_empty(mut self, empty: EmptyDate) -> Self {
        self.empty = empty;
        self
    }

    pub fn formats(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.formats.iter().map(|(f, _)| *f)
    }

    /// Parse against each candidate format; `None` if nothing fits.
    pub fn parse(&self, input: &str) -> Option<NaiveDate> {
        let trimmed = input.trim();
        self.formats
            .iter()
            .filter(|(_, shape)| shape.is_match(trimmed))
            .find_map(|(fmt, _)| {
                NaiveDate::parse_from_str(trimmed, fmt)
                    .ok()
                    .map(|d| pivot_two_digit_year(d, fmt))
            })
    }

    /// Canonical `YYYY-MM-DD`, or the input unchanged when no format matches.
    pub fn normalize(&self, input: &str) -> String {
        if input.trim().is_empty() {
            return match self.empty {
                EmptyDate::Placeholder => s!(EMPTY_PLACEHOLDER),
                EmptyDate::Passthrough => s!(input),
            };
        }
        match self.parse(input) {
            Some(d) => d.format(CANONICAL).to_string(),
            None => {
                logd!("date: no format matched '{}'", input.trim());
                s!(input)
            }
        }
    }
}

/// strptime maps `69..=99` to the 1900s; chrono only does so from 70.
fn pivot_two_digit_year(d: NaiveDate, fmt: &str) -> NaiveDate {
    if fmt.contains("%y") && d.year() == 2069 {
        d.with_year(1969).unwrap_or(d)
    } else {
        d
    }
}

/// Default candidate list with the `"-"` placeholder for empty input.
pub fn normalize_date(input: &str) -> String {
    DateNormalizer::default().normalize(input)
}

// src/normalize/text.rs

/// Separator for address-like cells.
pub const ADDRESS_SEP: &str = "; ";
/// Separator for cells that mix text with links.
pub const LINK_SEP: &str = " | ";

/// Trim each line, drop empty ones, join the rest with `sep`.
/// Keeps order and duplicates.
pub fn normalize_multiline(text: &str, sep: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(sep)
}

/// Non-empty trimmed lines, in order.
pub fn lines_of(text: &str) -> Vec<String> {
    text.lines().map(str::trim).filter(|l| !l.is_empty()).map(String::from).collect()
}

/// Collapse every whitespace run (newlines included) into one space.
pub fn collapse_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// NBSP and zero-width characters become plain spaces.
pub fn strip_invisible(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '\u{a0}' | '\u{200b}' | '\u{200c}' | '\u{200d}' | '\u{feff}' => ' ',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiline_drops_blank_lines() {
        assert_eq!(normalize_multiline(" line1 \n\n line2 ", ADDRESS_SEP), "line1; line2");
        assert_eq!(normalize_multiline("a\r\nb\r\n", LINK_SEP), "a | b");
        assert_eq!(normalize_multiline("\n \n", ADDRESS_SEP), "");
    }

    #[test]
    fn multiline_keeps_duplicates_in_order() {
        assert_eq!(normalize_multiline("b\na\nb", ","), "b,a,b");
    }

    #[test]
    fn collapse_and_invisible() {
        assert_eq!(collapse_ws("  a \n\t b  "), "a b");
        assert_eq!(collapse_ws(&strip_invisible("x\u{a0}\u{200b}y")), "x y");
    }
}

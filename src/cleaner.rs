//! Per-line cleanup: trailing whitespace and tab expansion.

/// Strip trailing whitespace from `line` and, when `replace_tabs` is set,
/// expand its tabs to spaces aligned on `tab_width` columns.
///
/// `line` must not contain its terminator.
pub fn clean_line(line: &str, replace_tabs: bool, tab_width: usize) -> String {
    let line = line.trim_end_matches(is_trailing_space);
    if !replace_tabs {
        return line.to_string();
    }
    expand_tabs(line, tab_width)
}

/// Unicode White_Space plus the ASCII separators U+001C..=U+001F.
fn is_trailing_space(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Replace every tab with the spaces needed to reach the next tab stop.
///
/// Columns are counted in characters of the output, so a tab following an
/// earlier expansion lines up with the stops as they appear on screen.
pub fn expand_tabs(line: &str, tab_width: usize) -> String {
    let mut out = String::with_capacity(line.len());
    let mut column = 0usize;

    for ch in line.chars() {
        if ch == '\t' {
            let width = tab_width - column % tab_width;
            out.extend(std::iter::repeat(' ').take(width));
            column += width;
        } else {
            out.push(ch);
            column += 1;
        }
    }

    out
}

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Width of `s` in terminal cells.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Cut `s` down to at most `max_cells` cells, ending in `…` when anything was dropped.
/// Never splits a grapheme cluster.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 0 {
        return String::new();
    }
    let budget = max_cells - 1;
    let mut used = 0;
    let mut out = String::new();
    for g in s.graphemes(true) {
        let w = display_width(g);
        if used + w > budget {
            break;
        }
        used += w;
        out.push_str(g);
    }
    out.push('\u{2026}');
    out
}

/// Byte offset of the grapheme boundary after `offset`, or None at the end.
pub fn next_grapheme_boundary(s: &str, offset: usize) -> Option<usize> {
    if offset >= s.len() {
        return None;
    }
    let step = s[offset..]
        .graphemes(true)
        .next()
        .map_or(s.len() - offset, str::len);
    Some(offset + step)
}

/// Byte offset of the grapheme boundary before `offset`, or None at the start.
pub fn prev_grapheme_boundary(s: &str, offset: usize) -> Option<usize> {
    if offset == 0 {
        return None;
    }
    s[..offset]
        .grapheme_indices(true)
        .next_back()
        .map(|(i, _)| i)
}

/// Cell column at which the byte `offset` starts.
pub fn offset_to_col(s: &str, offset: usize) -> usize {
    display_width(&s[..offset.min(s.len())])
}

/// Byte offset of the grapheme covering cell column `col`; `s.len()` past the end.
pub fn col_to_offset(s: &str, col: usize) -> usize {
    let mut used = 0;
    for (i, g) in s.grapheme_indices(true) {
        let w = display_width(g);
        if used + w > col {
            return i;
        }
        used += w;
    }
    s.len()
}

fn is_blank(g: &str) -> bool {
    g.chars().all(char::is_whitespace)
}

/// Start of the word at or before `offset`, skipping any whitespace first.
pub fn word_start_before(s: &str, offset: usize) -> usize {
    let graphemes: Vec<(usize, &str)> = s[..offset.min(s.len())].grapheme_indices(true).collect();
    let mut idx = graphemes.len();
    while idx > 0 && is_blank(graphemes[idx - 1].1) {
        idx -= 1;
    }
    while idx > 0 && !is_blank(graphemes[idx - 1].1) {
        idx -= 1;
    }
    graphemes.get(idx).map_or(0, |(i, _)| *i)
}

/// Start of the next word after `offset`, or the end of the string.
pub fn word_start_after(s: &str, offset: usize) -> usize {
    let base = offset.min(s.len());
    let mut iter = s[base..].grapheme_indices(true).peekable();
    while iter.next_if(|(_, g)| !is_blank(g)).is_some() {}
    while iter.next_if(|(_, g)| is_blank(g)).is_some() {}
    iter.peek().map_or(s.len(), |(i, _)| base + i)
}

//! Display-width helpers for fixed-width terminal cells.
//!
//! Offsets returned here are byte offsets that always land on char boundaries.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Returns how many bytes from the start of `s` fit into `max_width` cells.
pub fn truncate_to_width(s: &str, max_width: usize) -> usize {
    let mut used = 0usize;
    let mut end = 0usize;
    for (idx, ch) in s.char_indices() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max_width {
            break;
        }
        used += w;
        end = idx + ch.len_utf8();
    }
    end
}

/// Returns the byte offset where the longest suffix of `s` fitting `max_width` starts.
pub fn tail_start_for_width(s: &str, max_width: usize) -> usize {
    let mut used = 0usize;
    let mut start = s.len();
    for (idx, ch) in s.char_indices().rev() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max_width {
            break;
        }
        used += w;
        start = idx;
    }
    start
}

/// Shortens `text` to `max_width` cells, ending with `…` when cut.
pub fn ellipsize(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if display_width(text) <= max_width {
        return text.to_string();
    }

    let keep = truncate_to_width(text, max_width - 1);
    let mut out = String::with_capacity(keep + 3);
    out.push_str(&text[..keep]);
    out.push('…');
    out
}

//! Formatting utilities used for CLI outputs.

use crate::core::pagination::Page;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Pad to `width` display columns.
pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{s}{}", " ".repeat(pad))
}

/// Cut to at most `width` display columns, ending in `…` when shortened.
pub fn truncate(s: &str, width: usize) -> String {
    if UnicodeWidthStr::width(s) <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let cw = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + cw > width - 1 {
            break;
        }
        out.push(c);
        used += cw;
    }
    out.push('…');
    out
}

/// `Page 2 of 5` plus the navigation hints for the ends that exist.
pub fn page_footer<T>(page: &Page<'_, T>) -> String {
    let mut s = format!("Page {} of {}", page.number, page.total_pages);
    if page.has_prev() {
        s.push_str(&format!("  (prev: --page {})", page.number - 1));
    }
    if page.has_next() {
        s.push_str(&format!("  (next: --page {})", page.number + 1));
    }
    s
}

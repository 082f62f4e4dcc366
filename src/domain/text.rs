use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cuts `s` down to at most `width` terminal columns, ending with `…` when cut.
pub fn ellipsize(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::from("");
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        // Reserve one column for the ellipsis
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

//! Receipt line layouts
//!
//! Pure functions that pad and wrap text to a line width measured in printer
//! cells (see [`crate::width`]). Content wider than the line is never
//! truncated; the padding simply collapses to nothing and the printer wraps
//! the line itself.

use crate::width::{display_length, display_width, is_double_width, spaces};

/// Left text flush left, right text flush right
///
/// `left_right("AB", "CD", 10)` gives `"AB      CD"`.
pub fn left_right(left: &str, right: &str, width: usize) -> String {
    let gap = width as isize - display_length(left) as isize - display_length(right) as isize;
    format!("{}{}{}", left, spaces(gap), right)
}

/// Three columns separated by one shared spacer
///
/// The spacer is a quarter of the free space, rounded down, and is inserted
/// twice. The right column therefore does not reach the line end unless the
/// free space is zero. Existing receipt layouts rely on this spacing.
pub fn left_center_right(left: &str, center: &str, right: &str, width: usize) -> String {
    let free = width as isize
        - display_length(left) as isize
        - display_length(center) as isize
        - display_length(right) as isize;
    let spacer = spaces(free.div_euclid(4));
    format!("{}{}{}{}{}", left, spacer, center, spacer, right)
}

/// Label followed by a value wrapped under it
///
/// The value is packed greedily into lines of `width - display_length(name)`
/// cells. When a wide character overflows the line by exactly one cell, the
/// line is padded with a space so the character is not split across the
/// edge. Continuation lines are indented by `name.chars().count()` spaces,
/// which under-indents names containing wide characters.
///
/// Lines are concatenated without separators; the printer wraps each one at
/// the paper edge.
pub fn key_value(name: &str, value: &str, width: usize) -> String {
    let limit = width as isize - display_length(name) as isize;

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len: isize = 0;

    for c in value.chars() {
        let w = display_width(c) as isize;
        let overflow = current_len + w - limit;
        if overflow <= 0 {
            current.push(c);
            current_len += w;
            continue;
        }

        if is_double_width(c) && overflow == 1 {
            current.push(' ');
        }
        lines.push(std::mem::take(&mut current));
        current.push(c);
        current_len = w;
    }
    if !current.is_empty() {
        lines.push(current);
    }

    let indent = spaces(name.chars().count() as isize);
    let mut out = String::new();
    for (i, line) in lines.iter().enumerate() {
        if i == 0 {
            out.push_str(name);
        } else {
            out.push_str(&indent);
        }
        out.push_str(line);
    }
    out
}

/// A separator line of `fill` characters, at most `width` cells wide
pub fn separator(fill: char, width: usize) -> String {
    let count = width / display_width(fill);
    std::iter::repeat_n(fill, count).collect()
}

//! Whitespace normalization applied before the segmentation scan

use crate::config::WhitespaceMode;

/// Normalize whitespace runs according to `mode`, then trim both ends.
///
/// Whitespace is anything [`is_whitespace`] accepts, which includes the
/// ideographic space (U+3000) common in indented Chinese text.
pub fn normalize(text: &str, mode: WhitespaceMode) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;
    let mut run_has_break = false;

    for ch in text.chars() {
        if is_whitespace(ch) {
            in_run = true;
            run_has_break |= is_line_break(ch);
            continue;
        }

        if in_run {
            if !out.is_empty() {
                out.push(separator(mode, run_has_break));
            }
            in_run = false;
            run_has_break = false;
        }
        out.push(ch);
    }

    out
}

/// `char::is_whitespace` plus the information separators U+001C..=U+001F,
/// which legacy text files sometimes carry as record breaks
#[inline]
pub fn is_whitespace(ch: char) -> bool {
    ch.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&ch)
}

#[inline]
fn is_line_break(ch: char) -> bool {
    matches!(ch, '\n' | '\r')
}

#[inline]
fn separator(mode: WhitespaceMode, run_has_break: bool) -> char {
    match mode {
        WhitespaceMode::KeepLineBreaks if run_has_break => '\n',
        _ => ' ',
    }
}

//! Ordered string passes shared by the converters.
//!
//! Every pass is a pure `&str -> String` transform. Letter and digit classes
//! are ASCII (`[a-z]`, `[A-Z]`, `[0-9]`). Whitespace is `\s` plus U+FEFF,
//! which the regex crate does not count as whitespace.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref LOWER_UPPER: Regex = Regex::new(r"([a-z])([A-Z])").unwrap();
    static ref WHITESPACE_UNDERSCORE: Regex = Regex::new(r"[\s\x{FEFF}_]+").unwrap();
    static ref SEPARATORS: Regex = Regex::new(r"[_\-\s\x{FEFF}]+").unwrap();
    static ref DOTS: Regex = Regex::new(r"\.+").unwrap();
    static ref DISALLOWED: Regex = Regex::new(r"[^a-zA-Z0-9-]").unwrap();
    static ref DIGITS_LETTER: Regex = Regex::new(r"([0-9]+)([a-zA-Z])").unwrap();
}

/// Insert `sep` between a lowercase letter and the uppercase letter after it.
///
/// Only single adjacent pairs are detected, so `"XMLParser"` has no boundary.
pub fn split_lower_upper(s: &str, sep: char) -> String {
    LOWER_UPPER
        .replace_all(s, |caps: &Captures<'_>| {
            format!("{}{}{}", &caps[1], sep, &caps[2])
        })
        .into_owned()
}

/// Replace each run of whitespace or underscores with `sep`.
pub fn collapse_whitespace_underscore(s: &str, sep: char) -> String {
    replace_runs(&WHITESPACE_UNDERSCORE, s, sep)
}

/// Replace each run of underscores, hyphens or whitespace with `sep`.
pub fn collapse_separators(s: &str, sep: char) -> String {
    replace_runs(&SEPARATORS, s, sep)
}

/// Replace each run of dots with a single dot.
pub fn collapse_dots(s: &str) -> String {
    replace_runs(&DOTS, s, '.')
}

/// Delete every character outside `[a-zA-Z0-9-]`.
pub fn strip_disallowed(s: &str) -> String {
    DISALLOWED.replace_all(s, "").into_owned()
}

/// Uppercase the letter directly following each run of digits.
pub fn capitalize_after_digits(s: &str) -> String {
    DIGITS_LETTER
        .replace_all(s, |caps: &Captures<'_>| {
            format!("{}{}", &caps[1], caps[2].to_ascii_uppercase())
        })
        .into_owned()
}

/// Strip at most one leading and at most one trailing `ch`.
pub fn trim_one(s: &str, ch: char) -> &str {
    let s = s.strip_prefix(ch).unwrap_or(s);
    s.strip_suffix(ch).unwrap_or(s)
}

fn replace_runs(re: &Regex, s: &str, sep: char) -> String {
    let mut buf = [0u8; 4];
    let sep: &str = sep.encode_utf8(&mut buf);
    re.replace_all(s, regex::NoExpand(sep)).into_owned()
}

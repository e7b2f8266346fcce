use super::steps;

/// Convert a string to kebab-case.
///
/// camelCase boundaries get a hyphen, whitespace and underscore runs become a
/// single hyphen, anything outside `[a-zA-Z0-9-]` is dropped, and the result
/// is lowercased. Existing hyphens are kept as they are.
pub fn to_kebab_case(input: &str) -> String {
    let s = steps::split_lower_upper(input, '-');
    let s = steps::collapse_whitespace_underscore(&s, '-');
    steps::strip_disallowed(&s).to_lowercase()
}

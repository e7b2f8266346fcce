use super::steps;

/// Convert camelCase, snake_case, kebab-case or spaced words to dot.case.
///
/// The result is lowercase with single dots between words and no dot at
/// either end.
pub fn to_dot_case(input: &str) -> String {
    let s = steps::split_lower_upper(input, '.');
    let s = steps::collapse_separators(&s, '.');
    let s = steps::collapse_dots(&s).to_lowercase();
    steps::trim_one(&s, '.').to_string()
}

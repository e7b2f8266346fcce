use super::steps;

/// Convert a space, underscore or hyphen separated string to camelCase.
///
/// The first word is lowercased and every later word is capitalized. A letter
/// that directly follows a run of digits is uppercased, so `"ipv4 address"`
/// and `"ipv4address"` both come out with a capital `A`.
///
/// Words are only found at separators: an input that is already camelCase is
/// a single word and gets lowercased.
pub fn to_camel_case(input: &str) -> String {
    let spaced = steps::collapse_separators(input, ' ');

    let joined: String = spaced
        .trim()
        .split(' ')
        .enumerate()
        .map(|(i, word)| {
            if i == 0 {
                word.to_lowercase()
            } else {
                capitalize(word)
            }
        })
        .collect();

    steps::capitalize_after_digits(&joined)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => format!("{}{}", first.to_uppercase(), chars.as_str().to_lowercase()),
        None => String::new(),
    }
}

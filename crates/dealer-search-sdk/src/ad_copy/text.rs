//! Length limits and display-path formatting for ad text.

/// Responsive search ad headline limit
pub const HEADLINE_MAX_CHARS: usize = 30;

/// Responsive search ad description limit
pub const DESCRIPTION_MAX_CHARS: usize = 90;

/// Hard-truncate `text` to at most `max_chars` characters.
///
/// Counts `char`s, not bytes, and cuts mid-word without an ellipsis: the importer expects
/// fixed-length text and any other policy changes the generated files.
pub fn clamp(mut text: String, max_chars: usize) -> String {
    if let Some((byte_index, _)) = text.char_indices().nth(max_chars) {
        text.truncate(byte_index);
    }
    text
}

pub fn clamp_headline(text: String) -> String {
    clamp(text, HEADLINE_MAX_CHARS)
}

pub fn clamp_description(text: String) -> String {
    clamp(text, DESCRIPTION_MAX_CHARS)
}

/// Lowercase `text` and replace every whitespace run with a single `-`.
///
/// Lowercasing is `str::to_lowercase` over the whole text, matching the keywords (final sigma
/// included). Leading and trailing runs are replaced too, not trimmed.
pub fn display_path(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut path = String::with_capacity(lowered.len());
    let mut in_whitespace = false;
    for c in lowered.chars() {
        if is_path_separator(c) {
            if !in_whitespace {
                path.push('-');
            }
            in_whitespace = true;
        } else {
            path.push(c);
            in_whitespace = false;
        }
    }
    path
}

/// Whitespace as the ECMAScript `\s` class defines it: Unicode `White_Space` minus U+0085,
/// plus the byte order mark U+FEFF.
fn is_path_separator(c: char) -> bool {
    match c {
        '\u{85}' => false,
        '\u{feff}' => true,
        _ => c.is_whitespace(),
    }
}

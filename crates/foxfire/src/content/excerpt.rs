/// The maximum number of characters in an excerpt, not counting the ellipsis.
pub const EXCERPT_LENGTH: usize = 140;

/// Returns a plain-text summary of `plain_text`.
///
/// Whitespace is collapsed. Text longer than `max_chars` is cut at the last
/// word boundary that fits and ends with `…`.
pub fn excerpt(plain_text: &str, max_chars: usize) -> String {
    let collapsed = plain_text.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.chars().count() <= max_chars {
        return collapsed;
    }

    let cutoff = collapsed
        .char_indices()
        .nth(max_chars)
        .map_or(collapsed.len(), |(index, _)| index);

    // Only cut inside a word when there is no earlier boundary.
    let truncated = if collapsed[cutoff..].starts_with(' ') {
        &collapsed[..cutoff]
    } else {
        collapsed[..cutoff]
            .rfind(' ')
            .map_or(&collapsed[..cutoff], |index| &collapsed[..index])
    };

    let truncated = truncated.trim_end_matches(|c: char| c.is_whitespace() || ",.;:-".contains(c));

    format!("{truncated}…")
}

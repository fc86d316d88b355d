//! Input normalization: trimming and scheme prefixing.

fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// Whether `input` already carries an `http://` or `https://` scheme,
/// ASCII case-insensitively.
pub fn has_scheme(input: &str) -> bool {
    starts_with_ignore_case(input, "http://") || starts_with_ignore_case(input, "https://")
}

/// Trims `input` and returns the candidate URL, or `None` when the trimmed
/// input is empty.
///
/// Inputs without a scheme get `https://` prepended. A scheme with a single
/// slash (`https:/host`) is repaired to the double-slash form rather than
/// doubled up.
pub fn candidate_url(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    if has_scheme(trimmed) {
        return Some(trimmed.to_string());
    }
    if starts_with_ignore_case(trimmed, "https:/") {
        return Some(format!("https://{}", &trimmed[7..]));
    }
    if starts_with_ignore_case(trimmed, "http:/") {
        return Some(format!("http://{}", &trimmed[6..]));
    }
    Some(format!("https://{trimmed}"))
}

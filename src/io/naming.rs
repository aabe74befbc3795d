//! Label sanitization for generated filenames

/// Normalize a user-supplied label for safe use inside a filename
///
/// Lowercases the trimmed input and replaces every character other than
/// alphanumerics, `-`, `_`, and `.` with `-`. Returns `fallback` when the
/// sanitized label is empty. The transformation is idempotent, so already
/// sanitized labels pass through unchanged.
pub fn sanitize_label(raw: &str, fallback: &str) -> String {
    let sanitized: String = raw
        .trim()
        .to_lowercase()
        .chars()
        .map(|ch| {
            if ch.is_alphanumeric() || matches!(ch, '-' | '_' | '.') {
                ch
            } else {
                '-'
            }
        })
        .collect();

    if sanitized.is_empty() {
        fallback.to_string()
    } else {
        sanitized
    }
}

use uuid::Uuid;

/// Generates the short random identifier embedded in download filenames.
///
/// Eight hex characters of a v4 UUID. Concurrent downloads of the same
/// title get distinct suffixes, so their output paths never collide.
pub fn short_id() -> String {
    let id = Uuid::new_v4().simple().to_string();
    id[..8].to_string()
}

/// Replaces characters that are unsafe inside an ASCII header value.
///
/// Keeps alphanumerics and a small filename-friendly set; everything
/// else becomes `_`. An empty result falls back to a default name.
pub fn sanitize_ascii_filename(value: &str) -> String {
    let mut sanitized = String::with_capacity(value.len());

    for c in value.chars() {
        if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_' | ' ' | '(' | ')') {
            sanitized.push(c);
        } else {
            sanitized.push('_');
        }
    }

    let compact = sanitized.trim();
    if compact.is_empty() {
        "download.bin".to_string()
    } else {
        compact.to_string()
    }
}

/// Builds a `Content-Disposition` attachment value carrying both the
/// ASCII-safe name and the RFC 5987 UTF-8 form.
pub fn build_content_disposition(filename: &str) -> String {
    let safe_ascii = sanitize_ascii_filename(filename);
    format!(
        "attachment; filename=\"{safe_ascii}\"; filename*=UTF-8''{}",
        urlencoding::encode(filename)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn short_id_is_eight_chars() {
        let id = short_id();
        assert_eq!(id.len(), 8);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn short_ids_are_distinct() {
        assert_ne!(short_id(), short_id());
    }

    #[test]
    fn sanitize_keeps_plain_names() {
        assert_eq!(sanitize_ascii_filename("My Video_1a2b3c4d.mp4"), "My Video_1a2b3c4d.mp4");
    }

    #[test]
    fn sanitize_replaces_unsafe_characters() {
        assert_eq!(sanitize_ascii_filename("a/b\"c\nd.mp3"), "a_b_c_d.mp3");
    }

    #[test]
    fn sanitize_empty_falls_back() {
        assert_eq!(sanitize_ascii_filename("   "), "download.bin");
    }

    #[test]
    fn content_disposition_has_both_forms() {
        let value = build_content_disposition("Song ä.mp3");
        assert!(value.starts_with("attachment; filename=\"Song _.mp3\""));
        assert!(value.contains("filename*=UTF-8''Song%20%C3%A4.mp3"));
    }
}

use unicode_normalization::UnicodeNormalization;

/// Reduces a client-supplied filename to something safe to join onto the
/// upload directory.
///
/// Accents are folded to ASCII, path separators become word breaks, runs of
/// whitespace become `_`, anything outside `[A-Za-z0-9_.-]` is dropped and
/// leading/trailing `.`/`_` are trimmed. The result may be empty.
pub fn secure_filename(name: &str) -> String {
    let ascii: String = name.nfkd().filter(|c| c.is_ascii()).collect();
    let spaced = ascii.replace(['/', '\\'], " ");
    let joined = spaced.split_whitespace().collect::<Vec<_>>().join("_");
    let kept: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect();
    kept.trim_matches(|c| c == '.' || c == '_').to_owned()
}

/// Name to store an upload under, keeping the already-validated extension.
///
/// Falls back to `upload.<ext>` when sanitizing leaves nothing or strips the
/// extension.
pub fn storage_name(original: &str, ext: &str) -> String {
    let safe = secure_filename(original);
    let keeps_ext = safe
        .rsplit_once('.')
        .map(|(stem, e)| !stem.is_empty() && e.eq_ignore_ascii_case(ext))
        .unwrap_or(false);
    if keeps_ext {
        safe
    } else {
        format!("upload.{}", ext)
    }
}

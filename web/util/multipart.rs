/// Returns the index of the first occurrence of `needle` in `haystack`.
pub fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Splits `haystack` on every occurrence of `needle`, returning the pieces
/// between occurrences (excluding the needle itself).
pub fn split_on<'a>(haystack: &'a [u8], needle: &[u8]) -> Vec<&'a [u8]> {
    let mut result = Vec::new();
    let mut start = 0;
    while start <= haystack.len() {
        if let Some(pos) = find_subsequence(&haystack[start..], needle) {
            result.push(&haystack[start..start + pos]);
            start += pos + needle.len();
        } else {
            result.push(&haystack[start..]);
            break;
        }
    }
    result
}

/// Extracts the boundary token from a Content-Type header value like
/// `multipart/form-data; boundary=----WebKitFormBoundaryXXX`.
pub fn extract_boundary(content_type: &str) -> Option<String> {
    content_type
        .split(';')
        .map(|s| s.trim())
        .find(|s| s.starts_with("boundary="))
        .map(|s| s["boundary=".len()..].trim_matches('"').to_owned())
        .filter(|b| !b.is_empty())
}

/// A file field of a multipart/form-data body.
#[derive(Debug, Clone, PartialEq)]
pub struct FilePart {
    /// Client-supplied filename; empty when the browser submitted no file.
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Finds the part whose `name` is `field_name` and that carries a `filename`
/// attribute. Returns `None` if the form has no such field.
pub fn extract_file_part(body: &[u8], boundary: &str, field_name: &str) -> Option<FilePart> {
    let delimiter = format!("--{}", boundary);
    let parts = split_on(body, delimiter.as_bytes());

    for part in parts {
        let sep = b"\r\n\r\n";
        let Some(sep_pos) = find_subsequence(part, sep) else { continue };
        let headers = String::from_utf8_lossy(&part[..sep_pos]);
        let Some(disposition) = headers
            .lines()
            .find(|l| l.trim_start().to_ascii_lowercase().starts_with("content-disposition:"))
        else {
            continue;
        };

        if disposition_param(disposition, "name").as_deref() != Some(field_name) {
            continue;
        }
        let Some(filename) = disposition_param(disposition, "filename") else { continue };

        let raw = &part[sep_pos + sep.len()..];
        let trimmed = raw.strip_suffix(b"\r\n").unwrap_or(raw);
        return Some(FilePart { filename, bytes: trimmed.to_vec() });
    }
    None
}

/// Reads one `key="value"` parameter from a Content-Disposition header line.
fn disposition_param(line: &str, key: &str) -> Option<String> {
    split_params(line)
        .into_iter()
        .skip(1)
        .filter_map(|p| p.trim().split_once('='))
        .find(|(k, _)| k.trim().eq_ignore_ascii_case(key))
        .map(|(_, v)| v.trim().trim_matches('"').to_owned())
}

/// Splits a header line on `;`, ignoring any inside a quoted value.
fn split_params(line: &str) -> Vec<&str> {
    let mut result = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;
    for (i, c) in line.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            ';' if !in_quotes => {
                result.push(&line[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    result.push(&line[start..]);
    result
}

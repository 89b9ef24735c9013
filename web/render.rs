/// Template renderer for the upload page.
///
/// The page is a single HTML template (`web/assets/index.html`) with
/// placeholder tokens like `{{TOKEN}}`, compiled into the binary. Callers fill
/// their tokens through a closure; anything left over is blanked so raw
/// `{{TOKEN}}` strings never reach the browser.

const TEMPLATE: &str = include_str!("assets/index.html");

pub fn render_page<F>(fill: F) -> String
where
    F: FnOnce(String) -> String,
{
    blank_remaining(fill(TEMPLATE.to_owned()))
}

/// Replaces any `{{UPPERCASE_TOKEN}}` that wasn't already substituted with an
/// empty string.
fn blank_remaining(mut html: String) -> String {
    while let Some(start) = html.find("{{") {
        if let Some(end) = html[start..].find("}}") {
            let abs_end = start + end + 2;
            html.replace_range(start..abs_end, "");
        } else {
            break;
        }
    }
    html
}

/// Escapes text for safe inclusion in HTML bodies and attribute values.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unfilled_tokens_are_blanked() {
        assert_eq!(blank_remaining("a{{X}}b{{Y}}c".into()), "abc");
        assert_eq!(blank_remaining("open {{ never closed".into()), "open {{ never closed");
    }

    #[test]
    fn rendered_page_has_no_placeholders() {
        let html = render_page(|t| t.replace("{{ACCEPT}}", ".png"));
        assert!(!html.contains("{{"));
        assert!(html.contains("/upload"));
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(html_escape("<b>\"x\" & 'y'</b>"), "&lt;b&gt;&quot;x&quot; &amp; &#39;y&#39;&lt;/b&gt;");
    }
}

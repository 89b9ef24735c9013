use std::io::Cursor;
use tiny_http::Response;

use crate::render::{html_escape, render_page};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /
// ---------------------------------------------------------------------------

pub fn handle_get(state: &AppState) -> Response<Cursor<Vec<u8>>> {
    crate::routes::html_response(build_index_page(state))
}

fn build_index_page(state: &AppState) -> String {
    let exts = &state.config.allowed_extensions;
    let accept = exts.iter().map(|e| format!(".{}", e)).collect::<Vec<_>>().join(",");
    let listed = exts.join(", ");
    let max_mb = state.config.max_upload_bytes as f64 / (1024.0 * 1024.0);

    render_page(|tmpl| {
        tmpl
            .replace("{{ACCEPT}}", &html_escape(&accept))
            .replace("{{ALLOWED_EXTENSIONS}}", &html_escape(&listed))
            .replace("{{MAX_UPLOAD_MB}}", &format!("{:.0}", max_mb))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use freshness_lens::UploadConfig;

    #[test]
    fn page_lists_configured_extensions() {
        let state = AppState::new(UploadConfig::default());
        let html = build_index_page(&state);
        assert!(html.contains("accept=\".png,.jpg,.jpeg\""));
        assert!(html.contains("png, jpg, jpeg"));
        assert!(html.contains("up to 16 MB"));
    }
}

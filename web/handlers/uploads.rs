use std::io::Cursor;
use tiny_http::Response;

use freshness_lens::upload::storage;

use crate::state::AppState;

/// `GET /static/uploads/{name}`
///
/// Serves a previously stored upload so the page can show it next to the result.
pub fn handle_get(name: &str, state: &AppState) -> Response<Cursor<Vec<u8>>> {
    let Some(path) = storage::resolve(&state.config, name) else {
        return crate::routes::not_found();
    };
    match std::fs::read(&path) {
        Ok(bytes) => {
            let mime = mime_guess::from_path(&path).first_or_octet_stream();
            crate::routes::file_response(bytes, mime.essence_str())
        }
        Err(_) => crate::routes::not_found(),
    }
}

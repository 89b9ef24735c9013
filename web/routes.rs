use std::io::Cursor;
use tiny_http::{Header, Method, Request, Response, StatusCode};
use tracing::debug;

use crate::state::SharedState;
use crate::handlers;

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

fn content_type(value: &str) -> Header {
    Header::from_bytes(&b"Content-Type"[..], value.as_bytes()).unwrap()
}

pub fn html_response(body: String) -> Response<Cursor<Vec<u8>>> {
    let bytes = body.into_bytes();
    let len = bytes.len();
    Response::new(
        StatusCode(200),
        vec![content_type("text/html; charset=utf-8")],
        Cursor::new(bytes),
        Some(len),
        None,
    )
}

pub fn json_response(status: u16, body: &serde_json::Value) -> Response<Cursor<Vec<u8>>> {
    let bytes = body.to_string().into_bytes();
    let len = bytes.len();
    Response::new(
        StatusCode(status),
        vec![content_type("application/json")],
        Cursor::new(bytes),
        Some(len),
        None,
    )
}

pub fn file_response(bytes: Vec<u8>, mime: &str) -> Response<Cursor<Vec<u8>>> {
    let len = bytes.len();
    Response::new(
        StatusCode(200),
        vec![content_type(mime)],
        Cursor::new(bytes),
        Some(len),
        None,
    )
}

pub fn not_found() -> Response<Cursor<Vec<u8>>> {
    let body = b"404 Not Found".to_vec();
    let len = body.len();
    Response::new(
        StatusCode(404),
        vec![content_type("text/plain")],
        Cursor::new(body),
        Some(len),
        None,
    )
}

// ---------------------------------------------------------------------------
// Request dispatcher
// ---------------------------------------------------------------------------

/// Dispatches incoming requests to the appropriate handler.
///
/// Handlers receive a `&mut Request` so that the dispatcher retains ownership
/// and can call `request.respond(response)` at the end.
pub fn dispatch(mut request: Request, state: SharedState) {
    let method = request.method().clone();
    let url    = request.url().to_owned();
    let path   = url.split('?').next().unwrap_or("").to_owned();

    debug!(%method, %path, "request");

    // Stored uploads: dynamic path segment.
    if method == Method::Get {
        if let Some(name) = path.strip_prefix("/static/uploads/") {
            let resp = handlers::uploads::handle_get(name, &state);
            let _ = request.respond(resp);
            return;
        }
    }

    let response = match (method, path.as_str()) {
        (Method::Get,  "/")       => handlers::index::handle_get(&state),
        (Method::Post, "/upload") => handlers::upload::handle_post(&mut request, &state),
        _ => not_found(),
    };

    let _ = request.respond(response);
}

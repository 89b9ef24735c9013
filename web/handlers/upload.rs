use std::io::{Cursor, Read};
use serde::Serialize;
use tiny_http::{Request, Response};
use tracing::{info, warn};

use freshness_lens::upload::{storage, storage_name};
use freshness_lens::{Clock, EstimationResult, Estimator, UploadConfig};

use crate::error::UploadError;
use crate::state::AppState;
use crate::util::multipart::{extract_boundary, extract_file_part};

/// Form field the page submits the photo under.
const FILE_FIELD: &str = "file";

/// Successful upload: the estimate plus where the photo was stored.
#[derive(Debug, Serialize)]
pub struct UploadReport {
    #[serde(flatten)]
    pub result: EstimationResult,
    pub image_path: String,
}

// ---------------------------------------------------------------------------
// POST /upload
// ---------------------------------------------------------------------------

pub fn handle_post(request: &mut Request, state: &AppState) -> Response<Cursor<Vec<u8>>> {
    let content_type = request.headers().iter()
        .find(|h| h.field.equiv("Content-Type"))
        .map(|h| h.value.as_str().to_owned())
        .unwrap_or_default();

    let outcome = read_body(request, state.config.max_upload_bytes)
        .and_then(|body| process_upload(&state.config, &state.estimator, &content_type, &body));

    match outcome {
        Ok(report) => {
            info!(
                image = %report.image_path,
                freshness = report.result.tier.label(),
                score = report.result.score,
                "analyzed upload"
            );
            match serde_json::to_value(&report) {
                Ok(body) => crate::routes::json_response(200, &body),
                Err(e) => crate::routes::json_response(500, &serde_json::json!({ "error": e.to_string() })),
            }
        }
        Err(e) => {
            warn!(status = e.status(), error = %e, "upload rejected");
            crate::routes::json_response(e.status(), &e.to_json())
        }
    }
}

/// Reads the request body, refusing anything over `limit` bytes.
fn read_body(request: &mut Request, limit: usize) -> Result<Vec<u8>, UploadError> {
    if request.body_length().is_some_and(|len| len > limit) {
        return Err(UploadError::TooLarge);
    }
    let mut body = Vec::new();
    request.as_reader().take(limit as u64 + 1).read_to_end(&mut body)?;
    Ok(body)
}

/// Validates a multipart upload, stores the file and estimates it.
///
/// Checks run in order: size within limit, file part present, filename
/// non-empty, extension allowed.
pub fn process_upload<C: Clock>(
    config: &UploadConfig,
    estimator: &Estimator<C>,
    content_type: &str,
    body: &[u8],
) -> Result<UploadReport, UploadError> {
    if body.len() > config.max_upload_bytes {
        return Err(UploadError::TooLarge);
    }
    let part = extract_boundary(content_type)
        .and_then(|boundary| extract_file_part(body, &boundary, FILE_FIELD))
        .ok_or(UploadError::MissingFilePart)?;

    if part.filename.is_empty() {
        return Err(UploadError::NoSelectedFile);
    }
    let ext = config
        .allowed_extension(&part.filename)
        .ok_or(UploadError::DisallowedType)?;

    let name = storage_name(&part.filename, &ext);
    let path = storage::store(config, &name, &part.bytes)?;
    let image_path = storage::display_path(&path);

    match estimator.estimate_path(&path) {
        Ok(result) => Ok(UploadReport { result, image_path }),
        Err(source) => Err(UploadError::Estimate { source, image_path }),
    }
}

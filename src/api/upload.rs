//! Upload endpoint

use axum::extract::Multipart;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::analyzer::analyze;
use crate::extract;

use super::{ApiError, UploadResponse};

/// Multipart form field carrying the document.
const FILE_FIELD: &str = "pdf_file";

/// POST /upload - extract text from the uploaded document and report which
/// medication categories it mentions.
///
/// An unreadable document is a caller-visible failure, distinct from a
/// successful analysis that simply found nothing.
pub async fn upload_document(mut multipart: Multipart) -> Response {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => {
                return error_response(StatusCode::BAD_REQUEST, "No file uploaded");
            }
            Err(e) => {
                return error_response(StatusCode::BAD_REQUEST, e.to_string());
            }
        };

        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_ascii_lowercase();
        if !filename.ends_with(".pdf") {
            return error_response(StatusCode::BAD_REQUEST, "Invalid file type");
        }

        let bytes = match field.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                return error_response(StatusCode::BAD_REQUEST, e.to_string());
            }
        };

        return match extract::document_text(&bytes) {
            Ok(document) => {
                let raw_text = document.joined();
                let results = analyze(&raw_text);
                (StatusCode::OK, Json(UploadResponse::new(results, raw_text))).into_response()
            }
            Err(e) => {
                eprintln!("[Upload] Extraction failed for {}: {}", filename, e);
                error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        };
    }
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ApiError::new(message))).into_response()
}

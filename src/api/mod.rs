//! HTTP API module
//!
//! Provides the upload-facing HTTP surface:
//! - `GET /` - upload page
//! - `GET /health` - liveness probe
//! - `POST /upload` - analyze an uploaded document

pub mod http;
mod upload;

pub use http::create_router;

use serde::Serialize;

use crate::types::MatchReport;

/// Success envelope for `/upload`.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    /// Category → matched entries, in display order.
    pub results: MatchReport,
    /// Raw extracted text, page texts joined with a line break.
    pub raw_text: String,
}

impl UploadResponse {
    pub fn new(results: MatchReport, raw_text: String) -> Self {
        Self {
            success: true,
            results,
            raw_text,
        }
    }
}

/// Failure envelope shared by all endpoints.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub success: bool,
    pub error: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    #[test]
    fn test_upload_response_envelope() {
        let mut results = MatchReport::new();
        results.push(Category::MuscleRelaxants, vec!["MUSCOL"]);

        let json =
            serde_json::to_string(&UploadResponse::new(results, "MUSCOL 5mg".to_string()))
                .unwrap();
        assert!(json.contains(r#""success":true"#));
        assert!(json.contains(r#""Muscle relaxants":["MUSCOL"]"#));
        assert!(json.contains(r#""raw_text":"MUSCOL 5mg""#));
    }

    #[test]
    fn test_error_envelope() {
        let json = serde_json::to_string(&ApiError::new("No file uploaded")).unwrap();
        assert_eq!(json, r#"{"success":false,"error":"No file uploaded"}"#);
    }
}

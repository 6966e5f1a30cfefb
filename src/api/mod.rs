//! Backend client for the validation/generation service
//!
//! The wizard talks to the service exclusively through the [`Backend`] trait.
//! [`HttpBackend`] is the reqwest implementation used by the binary; tests
//! substitute scripted backends.

pub mod http;
pub mod upload;

use async_trait::async_trait;
use bytes::Bytes;
use serde::Serialize;
use thiserror::Error;

pub use http::HttpBackend;
pub use upload::{ResumeUpload, ACCEPTED_EXTENSIONS};

/// Resume validation endpoint (multipart, field `resume_file`)
pub const VALIDATE_RESUME_PATH: &str = "/api/validate-resume/";
/// Job posting validation endpoint (JSON `{url}`)
pub const VALIDATE_JOB_POSTING_PATH: &str = "/api/validate-job-posting/";
/// Special considerations validation endpoint (JSON `{text}`)
pub const VALIDATE_CONSIDERATIONS_PATH: &str = "/api/validate-special-considerations/";
/// Resume generation endpoint (JSON, binary response)
pub const GENERATE_RESUME_PATH: &str = "/api/generate-resume/";

/// Errors raised while talking to the backend
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Outcome of one of the three validation endpoints
///
/// `text` carries whichever payload field the endpoint returns
/// (`extracted_text`, `job_posting_text` or `validated_data`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Validation {
    pub valid: bool,
    pub text: String,
}

impl Validation {
    pub fn accepted(text: impl Into<String>) -> Self {
        Self {
            valid: true,
            text: text.into(),
        }
    }

    pub fn rejected() -> Self {
        Self::default()
    }
}

/// Body of the generation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateRequest {
    pub resume_text: String,
    pub job_posting_text: String,
    pub considerations: String,
}

/// The validation/generation service
#[async_trait]
pub trait Backend: Send + Sync {
    /// Upload a resume file and have the service extract its text
    async fn validate_resume(&self, upload: &ResumeUpload) -> ApiResult<Validation>;

    /// Check that a URL points at a job posting
    async fn validate_job_posting(&self, url: &str) -> ApiResult<Validation>;

    /// Check free-form special considerations
    async fn validate_considerations(&self, text: &str) -> ApiResult<Validation>;

    /// Generate the tailored document; returns the raw document bytes
    async fn generate_resume(&self, request: &GenerateRequest) -> ApiResult<Bytes>;
}

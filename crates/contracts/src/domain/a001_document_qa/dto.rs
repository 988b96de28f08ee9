//! Wire contract for the document QA backend
//!
//! Two endpoints: `POST /upload` (multipart form, single `file` field) and
//! `POST /ask` (JSON). Field names below are the wire names.

use serde::{Deserialize, Serialize};

/// 2xx body of `POST /upload`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub message: String,
}

/// JSON body of `POST /ask`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

/// 2xx body of `POST /ask`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
}

//! Document QA - Model (API functions)

use super::controller::DocumentQaApi;
use crate::shared::api_utils::api_url;
use contracts::domain::a001_document_qa::dto::{AskRequest, AskResponse, UploadResponse};

/// Upload a PDF as multipart form data (single `file` field)
pub async fn upload_file(file: &web_sys::File) -> Result<UploadResponse, String> {
    use wasm_bindgen::JsCast;
    use web_sys::{FormData, Request, RequestInit, RequestMode, Response};

    let form_data = FormData::new().map_err(|e| format!("{e:?}"))?;
    form_data
        .append_with_blob("file", file)
        .map_err(|e| format!("{e:?}"))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form_data);

    let url = api_url("/upload");
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;
    let data: UploadResponse = serde_json::from_str(&text).map_err(|e| format!("{e}"))?;

    Ok(data)
}

/// Ask a question about the uploaded document
pub async fn fetch_answer(question: &str) -> Result<AskResponse, String> {
    let url = api_url("/ask");
    let body = AskRequest {
        question: question.to_string(),
    };
    let response = gloo_net::http::Request::post(&url)
        .json(&body)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to fetch answer: {}", e))?;

    if !response.ok() {
        return Err(format!("Server error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse answer: {}", e))
}

/// HTTP-backed implementation of the controller's network seam.
#[derive(Clone, Copy, Default)]
pub struct BackendGateway;

impl DocumentQaApi for BackendGateway {
    type File = web_sys::File;

    async fn upload(&self, file: &Self::File) -> Result<UploadResponse, String> {
        upload_file(file).await
    }

    async fn ask(&self, question: &str) -> Result<AskResponse, String> {
        fetch_answer(question).await
    }
}

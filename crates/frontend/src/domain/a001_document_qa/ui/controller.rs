//! Document QA - Controller
//!
//! State transitions for the upload and ask actions. Network and
//! notification access go through the `DocumentQaApi` and `Notifier` seams
//! so the flows can be driven in tests without a browser runtime.

use super::view_model::{DocumentQaVm, FileMeta};
use crate::shared::notify::Notifier;
use contracts::domain::a001_document_qa::dto::{AskResponse, UploadResponse};
use leptos::prelude::*;

/// Only PDF files are accepted for upload.
pub const PDF_MIME: &str = "application/pdf";

/// The two calls the QA backend exposes.
#[allow(async_fn_in_trait)]
pub trait DocumentQaApi {
    /// Platform handle for the upload payload (`web_sys::File` in the
    /// browser, plain metadata in tests).
    type File;

    async fn upload(&self, file: &Self::File) -> Result<UploadResponse, String>;
    async fn ask(&self, question: &str) -> Result<AskResponse, String>;
}

/// Handle a file-picker selection. Returns `true` if the candidate was
/// accepted as the selected file.
///
/// Anything not declared `application/pdf` is rejected with a blocking
/// notification and clears the selection. No network activity.
pub fn select_file<N: Notifier>(
    vm: &DocumentQaVm,
    candidate: Option<FileMeta>,
    notifier: &N,
) -> bool {
    match candidate {
        Some(meta) if meta.mime_type == PDF_MIME => {
            vm.selected_file.set(Some(meta));
            true
        }
        _ => {
            notifier.notify("Please upload a PDF file.");
            vm.selected_file.set(None);
            false
        }
    }
}

/// Upload the picked document to the backend.
///
/// Without a file handle this notifies and returns before any request is
/// issued. The loading flag is released on every exit from the in-flight
/// section. A successful upload keeps the selection, so the same file can
/// be re-uploaded.
pub async fn upload_document<A, N>(vm: DocumentQaVm, file: Option<A::File>, api: A, notifier: N)
where
    A: DocumentQaApi,
    N: Notifier,
{
    let Some(file) = file else {
        notifier.notify("No file selected!");
        return;
    };

    vm.is_loading.set(true);
    match api.upload(&file).await {
        Ok(resp) => notifier.notify(&resp.message),
        Err(e) => {
            log::error!("Error uploading file: {}", e);
            notifier.notify("Error uploading file. Please try again.");
        }
    }
    vm.is_loading.set(false);
}

/// Send the current question to the backend and store the answer.
///
/// An empty question is rejected before any network activity. A failed ask
/// keeps the previous answer on screen.
pub async fn ask_question<A, N>(vm: DocumentQaVm, api: A, notifier: N)
where
    A: DocumentQaApi,
    N: Notifier,
{
    let question = vm.question.get();
    if question.is_empty() {
        notifier.notify("Please enter a question!");
        return;
    }

    vm.is_loading.set(true);
    match api.ask(&question).await {
        Ok(resp) => vm.answer.set(resp.answer),
        Err(e) => {
            log::error!("Error asking question: {}", e);
            notifier.notify("Error fetching answer. Please try again.");
        }
    }
    vm.is_loading.set(false);
}

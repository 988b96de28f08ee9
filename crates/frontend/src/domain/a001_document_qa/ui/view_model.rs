//! Document QA - View Model

use leptos::prelude::*;

/// Metadata of the file picked in the browser.
///
/// The live `web_sys::File` handle is not `Send` and stays in the view
/// layer; validation and display work on this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMeta {
    pub name: String,
    pub mime_type: String,
    pub size: u64,
}

#[derive(Clone, Copy)]
pub struct DocumentQaVm {
    pub selected_file: RwSignal<Option<FileMeta>>,
    pub question: RwSignal<String>,
    pub answer: RwSignal<String>,
    pub is_loading: RwSignal<bool>,
}

impl DocumentQaVm {
    pub fn new() -> Self {
        Self {
            selected_file: RwSignal::new(None),
            question: RwSignal::new(String::new()),
            answer: RwSignal::new(String::new()),
            is_loading: RwSignal::new(false),
        }
    }

    /// The answer block renders only after the first successful ask.
    pub fn has_answer(&self) -> bool {
        !self.answer.get().is_empty()
    }
}

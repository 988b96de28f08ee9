use crate::domain::a001_document_qa::DocumentQaPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <DocumentQaPage />
    }
}

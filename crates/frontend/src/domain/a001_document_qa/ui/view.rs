//! Document QA - View Component

use super::controller::{ask_question, select_file, upload_document};
use super::model::BackendGateway;
use super::view_model::{DocumentQaVm, FileMeta};
use crate::shared::notify::BrowserNotifier;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn DocumentQaPage() -> impl IntoView {
    let vm = DocumentQaVm::new();

    // Live browser file handle; not Send, so it stays out of the VM signals.
    let picked_file = StoredValue::new_local(Option::<web_sys::File>::None);

    let handle_file_change = move |ev: web_sys::Event| {
        use wasm_bindgen::JsCast;
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());

        let file = input
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        let meta = file.as_ref().map(|f| FileMeta {
            name: f.name(),
            mime_type: f.type_(),
            size: f.size() as u64,
        });

        if select_file(&vm, meta, &BrowserNotifier) {
            picked_file.set_value(file);
        } else {
            picked_file.set_value(None);
        }
    };

    let handle_upload = move |_| {
        let file = picked_file.get_value();
        wasm_bindgen_futures::spawn_local(upload_document(
            vm,
            file,
            BackendGateway,
            BrowserNotifier,
        ));
    };

    let handle_ask = move |_| {
        wasm_bindgen_futures::spawn_local(ask_question(vm, BackendGateway, BrowserNotifier));
    };

    view! {
        <div style="max-width: 720px; margin: 0 auto; padding: 24px; display: flex; flex-direction: column; gap: 24px;">
            <h1 style="font-size: 22px; font-weight: bold;">
                "Document Upload and Question Answering"
            </h1>

            // Upload section
            <div style="display: flex; flex-direction: column; gap: 8px;">
                <h2 style="font-size: 16px; font-weight: bold;">"Upload a PDF"</h2>
                <input
                    type="file"
                    accept=".pdf"
                    style="display: none;"
                    id="pdf-file-input"
                    on:change=handle_file_change
                />
                <Flex style="gap: 8px; align-items: center;">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| {
                            if let Some(window) = web_sys::window() {
                                if let Some(document) = window.document() {
                                    if let Some(input) = document.get_element_by_id("pdf-file-input") {
                                        use wasm_bindgen::JsCast;
                                        if let Ok(input) = input.dyn_into::<web_sys::HtmlElement>() {
                                            input.click();
                                        }
                                    }
                                }
                            }
                        }
                    >
                        "Choose file"
                    </Button>
                    <Button appearance=ButtonAppearance::Primary on_click=handle_upload>
                        "Upload"
                    </Button>
                    {move || match vm.selected_file.get() {
                        Some(meta) => view! {
                            <span>
                                <strong>{meta.name}</strong>
                                {format!(" ({:.2} KB)", meta.size as f64 / 1024.0)}
                            </span>
                        }
                            .into_any(),
                        None => view! {
                            <span style="color: var(--colorNeutralForeground3);">
                                "No file chosen"
                            </span>
                        }
                            .into_any(),
                    }}
                </Flex>
            </div>

            // Ask section
            <div style="display: flex; flex-direction: column; gap: 8px;">
                <h2 style="font-size: 16px; font-weight: bold;">"Ask a Question"</h2>
                <Flex style="gap: 8px;">
                    <div style="flex: 1;">
                        <Input value=vm.question placeholder="Type your question" />
                    </div>
                    <Button appearance=ButtonAppearance::Primary on_click=handle_ask>
                        "Ask"
                    </Button>
                </Flex>
            </div>

            // Busy indicator
            <Show when=move || vm.is_loading.get()>
                <Space gap=SpaceGap::Small>
                    <Spinner />
                    <span style="color: var(--colorNeutralForeground3);">"Loading..."</span>
                </Space>
            </Show>

            // Answer block, shown after the first successful ask
            <Show when=move || vm.has_answer()>
                <div style="padding: 12px; background: var(--colorNeutralBackground2); border: 1px solid var(--colorNeutralStroke2); border-radius: 8px;">
                    <h2 style="font-size: 16px; font-weight: bold;">"Answer"</h2>
                    <p style="white-space: pre-wrap;">{move || vm.answer.get()}</p>
                </div>
            </Show>
        </div>
    }
}

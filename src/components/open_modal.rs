//! 開くモーダル
//!
//! キャッシュ一覧（最大5件）とローカルファイルからの取り込み

use leptos::*;
use web_sys::HtmlInputElement;

use crate::components::modal::Modal;
use crate::models::SavedDocument;
use crate::utils::display_timestamp;
use crate::{ModalKind, TyplyContext};

#[component]
pub fn OpenModal() -> impl IntoView {
    let ctx = use_context::<TyplyContext>().expect("TyplyContext not found");
    let file_input = create_node_ref::<html::Input>();

    let is_open = Signal::derive(move || ctx.modal.get() == ModalKind::Open);
    let on_close = Callback::new(move |_: ()| ctx.modal.set(ModalKind::None));

    view! {
        <Modal is_open=is_open on_close=on_close title="Open" id="open-modal">
            <div id="cache-list" class="cache-list">
                {move || {
                    let docs = ctx.documents.get();
                    if docs.is_empty() {
                        view! { <p class="cache-empty">"No saved files found."</p> }.into_view()
                    } else {
                        docs.into_iter()
                            .enumerate()
                            .map(|(index, doc)| view! { <CacheItem index=index doc=doc /> })
                            .collect_view()
                    }
                }}
            </div>

            <button
                id="open-file-btn"
                class="open-file-btn"
                on:click=move |_| {
                    if let Some(input) = file_input.get() {
                        input.click();
                    }
                }
            >
                "Open file from computer"
            </button>
            <input
                type="file"
                accept=".txt"
                style="display: none"
                node_ref=file_input
                on:change=move |ev: web_sys::Event| {
                    let input: HtmlInputElement = event_target(&ev);
                    ctx.import_from_input(&input);
                }
            />
        </Modal>
    }
}

/// キャッシュ一覧の1行
#[component]
fn CacheItem(index: usize, doc: SavedDocument) -> impl IntoView {
    let ctx = use_context::<TyplyContext>().expect("TyplyContext not found");

    view! {
        <div class="cache-item">
            <div class="cache-item-info" on:click=move |_| ctx.open_entry(index)>
                <span class="file-icon">"📄"</span>
                <div class="file-details">
                    <span class="cache-item-title">{doc.title}</span>
                    <span class="cache-item-date">{display_timestamp(&doc.timestamp)}</span>
                </div>
            </div>
            <button class="delete-btn" title="Delete" on:click=move |_| ctx.delete_entry(index)>
                "X"
            </button>
        </div>
    }
}

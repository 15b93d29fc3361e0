//! モーダルダイアログコンポーネント
//!
//! 背景クリックまたは×ボタンで閉じる

use leptos::*;

#[component]
pub fn Modal(
    is_open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] title: String,
    #[prop(optional, into)] id: String,
    children: ChildrenFn,
) -> impl IntoView {
    let title = store_value(title);
    let id = store_value(id);
    let children = store_value(children);

    view! {
        <Show when=move || is_open.get()>
            <div class="modal" id=id.get_value()>
                // オーバーレイ（モーダル外クリックで閉じる）
                <div class="modal-overlay" on:click=move |_| on_close.call(())></div>

                <div class="modal-content">
                    <div class="modal-header">
                        <h3 class="modal-title">{title.get_value()}</h3>
                        <button class="close-btn" on:click=move |_| on_close.call(())>"×"</button>
                    </div>
                    <div class="modal-body">
                        {children.with_value(|children| children())}
                    </div>
                </div>
            </div>
        </Show>
    }
}

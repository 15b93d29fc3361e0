//! ツールバーコンポーネント
//!
//! 新規・開く・設定・About と、その他メニュー（取り込み・書き出し・ログ）

use leptos::*;
use web_sys::HtmlInputElement;

use crate::utils::log_trace::{clear_logs, log_info};
use crate::{ModalKind, TyplyContext};

#[component]
pub fn Toolbar() -> impl IntoView {
    let ctx = use_context::<TyplyContext>().expect("TyplyContext not found");
    let menu_open = ctx.menu_open;
    let import_input = create_node_ref::<html::Input>();

    let close_menu = move |_| menu_open.set(false);

    let on_import = move |_| {
        menu_open.set(false);
        if let Some(input) = import_input.get() {
            input.click();
        }
    };

    let on_import_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        ctx.import_from_input(&input);
    };

    view! {
        <header class="toolbar">
            <span class="app-title">"Typly"</span>

            <nav class="toolbar-actions">
                <button id="new-btn" title="New document" on:click=move |_| ctx.new_document()>
                    "New"
                </button>
                <button id="open-btn" title="Open" on:click=move |_| ctx.modal.set(ModalKind::Open)>
                    "Open"
                </button>
                <button id="settings-btn" title="Settings" on:click=move |_| ctx.modal.set(ModalKind::Settings)>
                    "Settings"
                </button>
                <button id="about-btn" title="About" on:click=move |_| ctx.modal.set(ModalKind::About)>
                    "About"
                </button>

                <div class="more-options">
                    <button
                        id="more-options-btn"
                        title="More options"
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        "⋯"
                    </button>

                    <Show when=move || menu_open.get()>
                        // オーバーレイ（メニュー外クリックで閉じる）
                        <div class="menu-overlay" on:click=close_menu></div>

                        <div id="more-options-menu" class="more-options-menu">
                            <button id="import-btn" class="menu-item" on:click=on_import>
                                "Import"
                            </button>
                            <button
                                id="download-btn"
                                class="menu-item"
                                on:click=move |_| {
                                    menu_open.set(false);
                                    ctx.download_document();
                                }
                            >
                                "Download"
                            </button>
                            <button
                                class="menu-item"
                                on:click=move |_| {
                                    menu_open.set(false);
                                    ctx.download_logs();
                                }
                            >
                                "Download log"
                            </button>
                            <button
                                class="menu-item"
                                on:click=move |_| {
                                    menu_open.set(false);
                                    clear_logs();
                                    log_info("log-trace", "ログをクリアしました");
                                }
                            >
                                "Clear log"
                            </button>
                        </div>
                    </Show>
                </div>
            </nav>

            <input
                type="file"
                accept=".txt"
                class="hidden-file-input"
                style="display: none"
                node_ref=import_input
                on:change=on_import_change
            />
        </header>
    }
}

//! 表示設定モーダル

use leptos::*;

use crate::components::modal::Modal;
use crate::models::FONT_FAMILIES;
use crate::{ModalKind, TyplyContext};

#[component]
pub fn SettingsModal() -> impl IntoView {
    let ctx = use_context::<TyplyContext>().expect("TyplyContext not found");
    let settings = ctx.settings;

    let is_open = Signal::derive(move || ctx.modal.get() == ModalKind::Settings);
    let on_close = Callback::new(move |_: ()| ctx.modal.set(ModalKind::None));

    let on_restore = move |_| {
        if gloo::dialogs::confirm("Are you sure you want to restore default settings?") {
            ctx.restore_defaults();
        }
    };

    view! {
        <Modal is_open=is_open on_close=on_close title="Settings" id="settings-modal">
            <div class="settings-form">
                <label class="setting-row">
                    <span>"Background color"</span>
                    <input type="color" id="bg-color-picker"
                        prop:value=move || settings.with(|s| s.bg_color.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            ctx.update_settings(|s| s.bg_color = value);
                        }
                    />
                </label>

                <label class="setting-row">
                    <span>"Font color"</span>
                    <input type="color" id="font-color-picker"
                        prop:value=move || settings.with(|s| s.font_color.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            ctx.update_settings(|s| s.font_color = value);
                        }
                    />
                </label>

                <label class="setting-row">
                    <span>"Font size (px)"</span>
                    <input type="number" id="font-size-input" min="10" max="72"
                        prop:value=move || settings.with(|s| s.font_size.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            ctx.update_settings(|s| s.font_size = value);
                        }
                    />
                </label>

                <label class="setting-row">
                    <span>"Font family"</span>
                    <select id="font-family-select"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            ctx.update_settings(|s| s.font_family = value);
                        }
                    >
                        {FONT_FAMILIES.iter().map(|(value, label)| {
                            let value = *value;
                            view! {
                                <option
                                    value=value
                                    prop:selected=move || settings.with(|s| s.font_family == value)
                                >
                                    {*label}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </label>

                <label class="setting-row">
                    <span>"Line height"</span>
                    <input type="number" id="line-height-input" min="1" max="3" step="0.1"
                        prop:value=move || settings.with(|s| s.line_height.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            ctx.update_settings(|s| s.line_height = value);
                        }
                    />
                </label>

                <label class="setting-row">
                    <span>"Content width (px)"</span>
                    <input type="number" id="width-input" min="400" max="2000" step="50"
                        prop:value=move || settings.with(|s| s.width.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            ctx.update_settings(|s| s.width = value);
                        }
                    />
                </label>

                <label class="setting-row checkbox-label">
                    <span>"Show character count"</span>
                    <input type="checkbox" id="stats-toggle"
                        prop:checked=move || settings.with(|s| s.show_stats)
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            ctx.update_settings(|s| s.show_stats = checked);
                        }
                    />
                </label>

                <label class="setting-row checkbox-label">
                    <span>"Show scrollbar"</span>
                    <input type="checkbox" id="scrollbar-toggle"
                        prop:checked=move || settings.with(|s| s.show_scrollbar)
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            ctx.update_settings(|s| s.show_scrollbar = checked);
                        }
                    />
                </label>

                <button id="restore-defaults-btn" class="restore-btn" on:click=on_restore>
                    "Restore defaults"
                </button>
            </div>
        </Modal>
    }
}

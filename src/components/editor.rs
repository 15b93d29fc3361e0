//! エディタ本体と文字数バー

use leptos::*;

use crate::models::character_label;
use crate::utils::appearance::Appearance;
use crate::TyplyContext;

#[component]
pub fn Editor() -> impl IntoView {
    let ctx = use_context::<TyplyContext>().expect("TyplyContext not found");
    let content = ctx.content;
    let appearance = create_memo(move |_| Appearance::from_settings(&ctx.settings.get()));

    view! {
        <textarea
            id="typly-editor"
            class="editor"
            placeholder="Start typing..."
            spellcheck="false"
            prop:value=move || content.get()
            on:input=move |ev| content.set(event_target_value(&ev))
            style:color=move || appearance.with(|a| a.editor_color.clone())
            style:font-size=move || appearance.with(|a| a.editor_font_size.clone())
            style:font-family=move || appearance.with(|a| a.editor_font_family.clone())
            style:line-height=move || appearance.with(|a| a.editor_line_height.clone())
            style:max-width=move || appearance.with(|a| a.editor_max_width.clone())
            style:overflow-y=move || appearance.with(|a| a.overflow_y)
            style:scrollbar-width=move || appearance.with(|a| a.scrollbar_width)
        ></textarea>

        <div
            class="stats-bar"
            style:background-color=move || appearance.with(|a| a.stats_bar_background.clone())
        >
            <span
                id="word-count"
                style:display=move || appearance.with(|a| a.stats_display)
            >
                {move || content.with(|text| character_label(text))}
            </span>
        </div>
    }
}

//! Aboutモーダル

use leptos::*;

use crate::components::modal::Modal;
use crate::models::MAX_CACHED_DOCUMENTS;
use crate::utils::format_build_time;
use crate::{ModalKind, TyplyContext};

#[component]
pub fn AboutModal() -> impl IntoView {
    let ctx = use_context::<TyplyContext>().expect("TyplyContext not found");

    let is_open = Signal::derive(move || ctx.modal.get() == ModalKind::About);
    let on_close = Callback::new(move |_: ()| ctx.modal.set(ModalKind::None));

    view! {
        <Modal is_open=is_open on_close=on_close title="About Typly" id="about-modal">
            <div class="about-body">
                <p>"Typly is a distraction-free plain-text editor that runs entirely in your browser."</p>
                <p>
                    "Your work is saved automatically every few seconds. The last "
                    {MAX_CACHED_DOCUMENTS}
                    " documents are kept in this browser's local storage; nothing is sent to a server."
                </p>
                <p>"Use Import / Download from the menu to move text files in and out."</p>
                <p class="about-build">{format_build_time()}</p>
            </div>
        </Modal>
    }
}

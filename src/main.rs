mod components;
mod models;
mod utils;

use leptos::*;
use web_sys::HtmlInputElement;

use components::{AboutModal, Editor, OpenModal, SettingsModal, Toolbar};
use models::{SavedDocument, Settings, AUTOSAVE_INTERVAL_MS, EXPORT_FILENAME};
use utils::appearance::{apply_to_body, Appearance};
use utils::cache::{DeleteOutcome, SaveOutcome};
use utils::file_io::{download_text, first_selected_file, read_text_file};
use utils::log_trace::{get_logs_json, log_debug, log_error, log_info, log_info_with_data, log_warn};
use utils::session::EditorSession;
use utils::settings::SettingsStore;
use utils::storage::{open_browser_store, SharedStore};

// ============================================
// アプリ全体の状態
// ============================================

#[derive(Clone, Copy, PartialEq)]
pub enum ModalKind {
    None,
    Open,
    Settings,
    About,
}

/// コンポーネント間で共有するコンテキスト
#[derive(Clone, Copy)]
pub struct TyplyContext {
    /// エディタの現在の内容
    pub content: RwSignal<String>,
    /// キャッシュ一覧（開くモーダル用）
    pub documents: RwSignal<Vec<SavedDocument>>,
    pub settings: RwSignal<Settings>,
    pub modal: RwSignal<ModalKind>,
    pub menu_open: RwSignal<bool>,
    session: StoredValue<EditorSession<SharedStore>>,
    settings_store: StoredValue<SettingsStore<SharedStore>>,
}

impl TyplyContext {
    fn new(store: SharedStore) -> Self {
        let settings_store = SettingsStore::new(store.clone());
        let mut session = EditorSession::new(store);

        // 起動時は最新のキャッシュを開く
        let content = match session.restore_latest() {
            Some(doc) => {
                log_info("cache", &format!("キャッシュから読み込み: {}", doc.title));
                doc.content
            }
            None => String::new(),
        };

        TyplyContext {
            content: create_rw_signal(content),
            documents: create_rw_signal(session.documents()),
            settings: create_rw_signal(settings_store.load()),
            modal: create_rw_signal(ModalKind::None),
            menu_open: create_rw_signal(false),
            session: store_value(session),
            settings_store: store_value(settings_store),
        }
    }

    fn refresh_documents(&self) {
        let docs = self.session.with_value(|s| s.documents());
        self.documents.set(docs);
    }

    fn handle_save_result(&self, category: &str, result: Option<Result<SaveOutcome, utils::storage::StorageError>>) {
        match result {
            Some(Ok(SaveOutcome::Skipped)) | None => {}
            Some(Ok(outcome)) => {
                if let SaveOutcome::Inserted { evicted: true } = outcome {
                    log_info("cache", "上限を超えたため最も古いドキュメントを削除しました");
                }
                if let Some(index) = outcome.active_index() {
                    log_debug(category, &format!("キャッシュに保存しました (#{})", index));
                }
                self.refresh_documents();
            }
            Some(Err(e)) => log_warn(category, &format!("保存できませんでした: {}", e)),
        }
    }

    /// 自動保存（内容が変わっていなくても毎回保存する）
    pub fn autosave(&self) {
        let content = self.content.get_untracked();
        let result = self.session.try_update_value(|s| s.save(&content));
        self.handle_save_result("autosave", result);
    }

    pub fn new_document(&self) {
        self.session.update_value(|s| s.new_document());
        self.content.set(String::new());
    }

    pub fn open_entry(&self, index: usize) {
        match self.session.try_update_value(|s| s.open(index)).flatten() {
            Some(doc) => {
                log_info("cache", &format!("キャッシュから読み込み: {}", doc.title));
                self.content.set(doc.content);
            }
            None => log_warn("cache", &format!("エントリが見つかりません: {}", index)),
        }
        self.modal.set(ModalKind::None);
    }

    pub fn delete_entry(&self, index: usize) {
        match self.session.try_update_value(|s| s.delete(index)) {
            Some(Ok(DeleteOutcome::Removed { was_active })) => {
                log_info("cache", &format!("エントリを削除しました: {}", index));
                if was_active {
                    // 開いているファイルを消した場合はエディタを空にする
                    self.content.set(String::new());
                }
                self.refresh_documents();
            }
            Some(Ok(DeleteOutcome::OutOfRange)) | None => {}
            Some(Err(e)) => log_warn("cache", &format!("削除できませんでした: {}", e)),
        }
    }

    /// 取り込んだテキストをエディタに入れて保存
    pub fn import_text(&self, text: String) {
        let result = self.session.try_update_value(|s| s.import(&text));
        self.content.set(text);
        self.handle_save_result("import", result);
        self.modal.set(ModalKind::None);
    }

    /// ファイル選択inputから取り込み
    pub fn import_from_input(&self, input: &HtmlInputElement) {
        let Some(file) = first_selected_file(input) else {
            return;
        };
        let name = file.name();
        let ctx = *self;
        let result = read_text_file(&file, move |text| {
            log_info("import", &format!("ファイルを読み込みました: {}", name));
            ctx.import_text(text);
        });
        if let Err(e) = result {
            log_error("import", &e);
        }
        // 同じファイルを再選択してもchangeが発火するように
        input.set_value("");
    }

    pub fn download_document(&self) {
        let content = self.content.get_untracked();
        match download_text(EXPORT_FILENAME, &content, "text/plain") {
            Ok(()) => log_info("export", "ドキュメントを書き出しました"),
            Err(e) => log_error("export", &e),
        }
    }

    pub fn download_logs(&self) {
        let filename = format!("typly_log_{}.json", utils::now_iso().replace([':', '.'], "-"));
        if let Err(e) = download_text(&filename, &get_logs_json(), "application/json") {
            log_error("export", &e);
        }
    }

    /// 保存済み設定を読み、一部を変更して全体を書き戻す
    pub fn update_settings(&self, f: impl FnOnce(&mut Settings)) {
        let result = self.settings_store.with_value(|store| {
            let mut current = store.load();
            f(&mut current);
            store.save(&current).map(|_| current)
        });
        match result {
            Ok(settings) => self.settings.set(settings),
            Err(e) => log_warn("settings", &format!("設定を保存できませんでした: {}", e)),
        }
    }

    pub fn restore_defaults(&self) {
        match self.settings_store.with_value(|store| store.restore_defaults()) {
            Ok(defaults) => {
                log_info_with_data(
                    "settings",
                    "既定の設定に戻しました",
                    serde_json::to_value(&defaults).unwrap_or_default(),
                );
                self.settings.set(defaults);
            }
            Err(e) => log_warn("settings", &format!("設定を保存できませんでした: {}", e)),
        }
    }
}

// ============================================
// メインアプリ
// ============================================

#[component]
fn App() -> impl IntoView {
    let (store, storage_error) = open_browser_store();
    if let Some(e) = storage_error {
        log_warn("storage", &format!("{}。このセッションのみメモリに保存します", e));
    }

    let ctx = TyplyContext::new(store);
    provide_context(ctx);

    // 設定をbodyに反映
    create_effect(move |_| {
        let settings = ctx.settings.get();
        if let Err(e) = apply_to_body(&Appearance::from_settings(&settings)) {
            log_warn("settings", &e);
        }
        log_debug("settings", "設定を適用しました");
    });

    // 自動保存（ページを閉じるまで動かし続ける）
    let autosave = gloo::timers::callback::Interval::new(AUTOSAVE_INTERVAL_MS, move || ctx.autosave());
    let _ = autosave.forget();

    view! {
        <div class="app">
            <Toolbar />
            <main class="container">
                <Editor />
            </main>
            <OpenModal />
            <SettingsModal />
            <AboutModal />
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}

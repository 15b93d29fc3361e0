//! 表示設定の保存・読み込み

use crate::models::{Settings, SETTINGS_KEY};
use crate::utils::storage::{read_json, write_json, KeyValueStore, StorageError};

pub struct SettingsStore<S> {
    store: S,
}

impl<S: KeyValueStore> SettingsStore<S> {
    pub fn new(store: S) -> Self {
        SettingsStore { store }
    }

    /// 保存済みの設定。ない・壊れている場合は既定値
    pub fn load(&self) -> Settings {
        read_json(&self.store, SETTINGS_KEY).unwrap_or_default()
    }

    /// 設定全体を上書き保存
    pub fn save(&self, settings: &Settings) -> Result<(), StorageError> {
        write_json(&self.store, SETTINGS_KEY, settings)
    }

    /// 既定値に戻す（確認ダイアログは呼び出し側）
    pub fn restore_defaults(&self) -> Result<Settings, StorageError> {
        let defaults = Settings::default();
        self.save(&defaults)?;
        Ok(defaults)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::storage::MemoryStore;

    #[test]
    fn test_load_without_saved_settings_returns_defaults() {
        let store = SettingsStore::new(MemoryStore::new());
        let settings = store.load();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.bg_color, "#f7f7f7");
        assert_eq!(settings.font_size, "20");
        assert!(settings.show_stats);
        assert!(settings.show_scrollbar);
    }

    #[test]
    fn test_round_trip() {
        let store = SettingsStore::new(MemoryStore::new());
        let settings = Settings {
            bg_color: "#1e1e1e".to_string(),
            font_color: "#d4d4d4".to_string(),
            font_size: "16".to_string(),
            font_family: "monospace".to_string(),
            line_height: "1.4".to_string(),
            width: "1000".to_string(),
            show_stats: false,
            show_scrollbar: false,
        };
        store.save(&settings).unwrap();
        assert_eq!(store.load(), settings);
    }

    #[test]
    fn test_malformed_json_treated_as_absent() {
        let memory = MemoryStore::new();
        memory.set_item(SETTINGS_KEY, "{\"bgColor\": ").unwrap();
        let store = SettingsStore::new(memory.clone());
        assert_eq!(store.load(), Settings::default());

        memory.set_item(SETTINGS_KEY, "\"just a string\"").unwrap();
        assert_eq!(store.load(), Settings::default());
    }

    #[test]
    fn test_partial_update_by_caller() {
        let store = SettingsStore::new(MemoryStore::new());
        let mut current = store.load();
        current.show_stats = false;
        store.save(&current).unwrap();

        let reloaded = store.load();
        assert!(!reloaded.show_stats);
        assert_eq!(reloaded.font_size, "20");
    }

    #[test]
    fn test_restore_defaults_overwrites_saved() {
        let memory = MemoryStore::new();
        let store = SettingsStore::new(memory.clone());
        let mut custom = Settings::default();
        custom.font_size = "32".to_string();
        store.save(&custom).unwrap();

        let restored = store.restore_defaults().unwrap();
        assert_eq!(restored, Settings::default());
        assert_eq!(store.load(), Settings::default());
        assert!(memory.get_item(SETTINGS_KEY).unwrap().is_some());
    }
}

//! 時系列トレースログシステム
//! キャッシュ保存・設定変更・取り込みなどの操作を記録し、後から確認できるようにする

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::models::LOG_TRACE_KEY;
use crate::utils::now_iso;
use crate::utils::storage::{read_json, write_json, SharedStore};

const MAX_LOG_ENTRIES: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: LogLevel,
    pub category: String, // "cache", "autosave", "settings", "import" など
    pub message: String,
    pub data: Option<serde_json::Value>,
}

pub struct LogTrace {
    logs: VecDeque<LogEntry>,
    store: SharedStore,
}

impl LogTrace {
    pub fn new(store: SharedStore) -> Self {
        let logs: Vec<LogEntry> = read_json(&store, LOG_TRACE_KEY).unwrap_or_default();
        let mut logs: VecDeque<LogEntry> = logs.into_iter().collect();
        while logs.len() > MAX_LOG_ENTRIES {
            logs.pop_front();
        }
        LogTrace { logs, store }
    }

    pub fn log(&mut self, level: LogLevel, category: &str, message: &str, data: Option<serde_json::Value>) {
        let entry = LogEntry {
            timestamp: now_iso(),
            level,
            category: category.to_string(),
            message: message.to_string(),
            data,
        };

        write_console(level, &format!("[{}] {}", category, message));

        if self.logs.len() >= MAX_LOG_ENTRIES {
            self.logs.pop_front();
        }
        self.logs.push_back(entry);

        // 自動保存ごとに書かれるので、debugは保存しない
        if level != LogLevel::Debug {
            self.save_to_storage();
        }
    }

    pub fn get_logs(&self) -> Vec<LogEntry> {
        self.logs.iter().cloned().collect()
    }

    pub fn get_logs_json(&self) -> String {
        serde_json::to_string_pretty(&self.get_logs()).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn clear(&mut self) {
        self.logs.clear();
        self.save_to_storage();
    }

    fn save_to_storage(&self) {
        // 容量超過でもログのためにアプリは止めない
        let _ = write_json(&self.store, LOG_TRACE_KEY, &self.logs);
    }
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: LogLevel, line: &str) {
    let line = wasm_bindgen::JsValue::from_str(line);
    match level {
        LogLevel::Error => web_sys::console::error_1(&line),
        LogLevel::Warn => web_sys::console::warn_1(&line),
        LogLevel::Debug => web_sys::console::debug_1(&line),
        LogLevel::Info => web_sys::console::log_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: LogLevel, _line: &str) {}

#[cfg(target_arch = "wasm32")]
fn default_store() -> SharedStore {
    crate::utils::storage::open_browser_store().0
}

#[cfg(not(target_arch = "wasm32"))]
fn default_store() -> SharedStore {
    std::rc::Rc::new(crate::utils::storage::MemoryStore::new())
}

// グローバルなログトレースインスタンス
thread_local! {
    static LOG_TRACE: std::cell::RefCell<LogTrace> = std::cell::RefCell::new(LogTrace::new(default_store()));
}

pub fn log_debug(category: &str, message: &str) {
    LOG_TRACE.with(|trace| {
        trace.borrow_mut().log(LogLevel::Debug, category, message, None);
    });
}

pub fn log_info(category: &str, message: &str) {
    LOG_TRACE.with(|trace| {
        trace.borrow_mut().log(LogLevel::Info, category, message, None);
    });
}

pub fn log_info_with_data(category: &str, message: &str, data: serde_json::Value) {
    LOG_TRACE.with(|trace| {
        trace.borrow_mut().log(LogLevel::Info, category, message, Some(data));
    });
}

pub fn log_warn(category: &str, message: &str) {
    LOG_TRACE.with(|trace| {
        trace.borrow_mut().log(LogLevel::Warn, category, message, None);
    });
}

pub fn log_error(category: &str, message: &str) {
    LOG_TRACE.with(|trace| {
        trace.borrow_mut().log(LogLevel::Error, category, message, None);
    });
}

pub fn clear_logs() {
    LOG_TRACE.with(|trace| {
        trace.borrow_mut().clear();
    });
}

pub fn get_logs_json() -> String {
    LOG_TRACE.with(|trace| trace.borrow().get_logs_json())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::storage::{KeyValueStore, MemoryStore};
    use std::rc::Rc;

    #[test]
    fn test_ring_buffer_drops_oldest() {
        let mut trace = LogTrace::new(Rc::new(MemoryStore::new()));
        for i in 0..(MAX_LOG_ENTRIES + 5) {
            trace.log(LogLevel::Info, "cache", &format!("entry {}", i), None);
        }
        let logs = trace.get_logs();
        assert_eq!(logs.len(), MAX_LOG_ENTRIES);
        assert_eq!(logs[0].message, "entry 5");
    }

    #[test]
    fn test_logs_persist_and_reload() {
        let memory = MemoryStore::new();
        let mut trace = LogTrace::new(Rc::new(memory.clone()));
        trace.log(LogLevel::Warn, "storage", "quota exceeded", None);
        trace.log(
            LogLevel::Info,
            "settings",
            "saved",
            Some(serde_json::json!({ "fontSize": "18" })),
        );

        let reloaded = LogTrace::new(Rc::new(memory));
        let logs = reloaded.get_logs();
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].level, LogLevel::Warn);
        assert_eq!(logs[1].data.as_ref().unwrap()["fontSize"], "18");
    }

    #[test]
    fn test_debug_entries_are_not_persisted() {
        let memory = MemoryStore::new();
        let mut trace = LogTrace::new(Rc::new(memory.clone()));
        trace.log(LogLevel::Debug, "autosave", "tick", None);
        assert_eq!(trace.get_logs().len(), 1);
        assert_eq!(memory.get_item(LOG_TRACE_KEY).unwrap(), None);
    }

    #[test]
    fn test_settings_changes_logged_at_debug_do_not_grow_storage() {
        let memory = MemoryStore::new();
        let mut trace = LogTrace::new(Rc::new(memory.clone()));
        trace.log(LogLevel::Info, "settings", "restored", None);
        let stored = memory.get_item(LOG_TRACE_KEY).unwrap();

        for _ in 0..50 {
            trace.log(LogLevel::Debug, "settings", "applied", None);
        }
        assert_eq!(memory.get_item(LOG_TRACE_KEY).unwrap(), stored);
        assert_eq!(LogTrace::new(Rc::new(memory)).get_logs().len(), 1);
    }

    #[test]
    fn test_clear() {
        let memory = MemoryStore::new();
        let mut trace = LogTrace::new(Rc::new(memory.clone()));
        trace.log(LogLevel::Error, "import", "read failed", None);
        trace.clear();
        assert!(trace.get_logs().is_empty());
        assert_eq!(memory.get_item(LOG_TRACE_KEY).unwrap(), Some("[]".to_string()));
        assert!(trace.get_logs_json().contains("[]"));
    }

    #[test]
    fn test_level_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&LogLevel::Warn).unwrap(), "\"warn\"");
    }
}

//! キー・バリューストレージ
//!
//! ブラウザのlocalStorageと、テスト・フォールバック用のメモリ実装

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum StorageError {
    #[error("localStorageが利用できません")]
    Unavailable,
    #[error("読み込み失敗: {0}")]
    Read(String),
    #[error("書き込み失敗: {0}")]
    Write(String),
    #[error("シリアライズ失敗: {0}")]
    Serialize(String),
}

/// 文字列キー・文字列値のストレージ
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Rc<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}

/// アプリ全体で共有するストレージ
pub type SharedStore = Rc<dyn KeyValueStore>;

/// JSONとして読み込む。キーがない・壊れている場合はNone
pub fn read_json<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Option<T> {
    let json = store.get_item(key).ok()??;
    serde_json::from_str(&json).ok()
}

/// JSONとして書き込む
pub fn write_json<T: Serialize + ?Sized>(
    store: &impl KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(value).map_err(|e| StorageError::Serialize(e.to_string()))?;
    store.set_item(key, &json)
}

// ============================================
// localStorage
// ============================================

pub struct LocalStore {
    storage: web_sys::Storage,
}

impl LocalStore {
    pub fn open() -> Result<Self, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        let storage = window
            .local_storage()
            .map_err(|_| StorageError::Unavailable)?
            .ok_or(StorageError::Unavailable)?;
        Ok(LocalStore { storage })
    }
}

impl KeyValueStore for LocalStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(key)
            .map_err(|_| StorageError::Read(key.to_string()))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        // 容量超過(QuotaExceededError)もここで返る
        self.storage
            .set_item(key, value)
            .map_err(|_| StorageError::Write(key.to_string()))
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.storage
            .remove_item(key)
            .map_err(|_| StorageError::Write(key.to_string()))
    }
}

// ============================================
// メモリストレージ
// ============================================

/// クローンは同じ中身を共有する
#[derive(Clone, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// localStorageを開く。使えない場合はメモリに保存（セッション限り）
pub fn open_browser_store() -> (SharedStore, Option<StorageError>) {
    match LocalStore::open() {
        Ok(store) => (Rc::new(store), None),
        Err(e) => (Rc::new(MemoryStore::new()), Some(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_clones_share_items() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set_item("k", "v").unwrap();
        assert_eq!(other.get_item("k").unwrap(), Some("v".to_string()));
        other.remove_item("k").unwrap();
        assert_eq!(store.get_item("k").unwrap(), None);
    }

    #[test]
    fn test_read_json_malformed_is_none() {
        let store = MemoryStore::new();
        store.set_item("k", "{not json").unwrap();
        assert_eq!(read_json::<Vec<String>>(&store, "k"), None);
        assert_eq!(read_json::<Vec<String>>(&store, "missing"), None);
    }

    #[test]
    fn test_shared_store_through_rc() {
        let memory = MemoryStore::new();
        let shared: SharedStore = Rc::new(memory.clone());
        write_json(&shared, "k", &vec![1, 2, 3]).unwrap();
        assert_eq!(read_json::<Vec<i32>>(&memory, "k"), Some(vec![1, 2, 3]));
    }
}

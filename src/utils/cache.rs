//! LocalStorageドキュメントキャッシュ
//!
//! 最新5件を新しい順に保持する。並び順は保存順で、開いた順ではない

use crate::models::{SavedDocument, MAX_CACHED_DOCUMENTS, STORAGE_KEY};
use crate::utils::now_iso;
use crate::utils::storage::{read_json, write_json, KeyValueStore, StorageError};

/// 保存結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// 本文が空なので何もしなかった
    Skipped,
    /// 既存エントリを上書き
    Updated { index: usize },
    /// 先頭に新規追加
    Inserted { evicted: bool },
}

impl SaveOutcome {
    /// 保存後のアクティブインデックス
    pub fn active_index(&self) -> Option<usize> {
        match self {
            SaveOutcome::Skipped => None,
            SaveOutcome::Updated { index } => Some(*index),
            SaveOutcome::Inserted { .. } => Some(0),
        }
    }
}

/// 削除結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    OutOfRange,
    Removed { was_active: bool },
}

pub struct DocumentCache<S> {
    store: S,
}

impl<S: KeyValueStore> DocumentCache<S> {
    pub fn new(store: S) -> Self {
        DocumentCache { store }
    }

    /// キャッシュ一覧。読めない・壊れている場合は空
    pub fn list(&self) -> Vec<SavedDocument> {
        read_json(&self.store, STORAGE_KEY).unwrap_or_default()
    }

    pub fn load_entry(&self, index: usize) -> Option<SavedDocument> {
        self.list().into_iter().nth(index)
    }

    /// 本文を保存する
    ///
    /// `active` が範囲内ならその位置を上書き、そうでなければ先頭に追加する。
    /// 保存後は先頭から5件だけ残す。
    pub fn save(&self, content: &str, active: Option<usize>) -> Result<SaveOutcome, StorageError> {
        if content.trim().is_empty() {
            return Ok(SaveOutcome::Skipped);
        }

        let mut docs = self.list();
        let doc = SavedDocument::new(content, now_iso());

        let outcome = match active {
            Some(index) if index < docs.len() => {
                docs[index] = doc;
                SaveOutcome::Updated { index }
            }
            // 他のタブで消された等でインデックスが古い場合も新規扱い
            _ => {
                docs.insert(0, doc);
                SaveOutcome::Inserted {
                    evicted: docs.len() > MAX_CACHED_DOCUMENTS,
                }
            }
        };

        docs.truncate(MAX_CACHED_DOCUMENTS);
        write_json(&self.store, STORAGE_KEY, &docs)?;
        Ok(outcome)
    }

    pub fn delete(&self, index: usize, active: Option<usize>) -> Result<DeleteOutcome, StorageError> {
        let mut docs = self.list();
        if index >= docs.len() {
            return Ok(DeleteOutcome::OutOfRange);
        }
        docs.remove(index);
        write_json(&self.store, STORAGE_KEY, &docs)?;
        Ok(DeleteOutcome::Removed {
            was_active: active == Some(index),
        })
    }
}

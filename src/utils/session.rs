//! 編集セッション
//!
//! エディタの内容がキャッシュのどのエントリに対応するか（アクティブインデックス）を保持する

use crate::models::SavedDocument;
use crate::utils::cache::{DeleteOutcome, DocumentCache, SaveOutcome};
use crate::utils::storage::{KeyValueStore, StorageError};

pub struct EditorSession<S> {
    cache: DocumentCache<S>,
    active: Option<usize>,
}

impl<S: KeyValueStore> EditorSession<S> {
    pub fn new(store: S) -> Self {
        EditorSession {
            cache: DocumentCache::new(store),
            active: None,
        }
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn documents(&self) -> Vec<SavedDocument> {
        self.cache.list()
    }

    /// 起動時: 先頭のキャッシュがあれば開く
    pub fn restore_latest(&mut self) -> Option<SavedDocument> {
        self.open(0)
    }

    /// 自動保存・手動保存の共通処理
    pub fn save(&mut self, content: &str) -> Result<SaveOutcome, StorageError> {
        let outcome = self.cache.save(content, self.active)?;
        if let Some(index) = outcome.active_index() {
            self.active = Some(index);
        }
        Ok(outcome)
    }

    pub fn new_document(&mut self) {
        self.active = None;
    }

    pub fn open(&mut self, index: usize) -> Option<SavedDocument> {
        let doc = self.cache.load_entry(index)?;
        self.active = Some(index);
        Some(doc)
    }

    /// 削除。開いているエントリを消した場合はアクティブを解除する
    pub fn delete(&mut self, index: usize) -> Result<DeleteOutcome, StorageError> {
        let outcome = self.cache.delete(index, self.active)?;
        if let DeleteOutcome::Removed { was_active } = outcome {
            self.active = match self.active {
                _ if was_active => None,
                // 前のエントリが消えたら同じドキュメントを指し続けるようにずらす
                Some(active) if active > index => Some(active - 1),
                other => other,
            };
        }
        Ok(outcome)
    }

    /// ファイル取り込み: 手動編集と同じ保存処理（開いているエントリがあれば上書き）
    pub fn import(&mut self, content: &str) -> Result<SaveOutcome, StorageError> {
        self.save(content)
    }
}

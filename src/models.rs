//! データ構造体モジュール

use serde::{Deserialize, Serialize};

// ============================================
// 定数
// ============================================

/// ドキュメントキャッシュの保存キー
pub const STORAGE_KEY: &str = "typly_cache_data";
/// 表示設定の保存キー
pub const SETTINGS_KEY: &str = "typly_settings";
/// ログトレースの保存キー
pub const LOG_TRACE_KEY: &str = "typly_log_trace";

/// キャッシュに残すドキュメントの最大数
pub const MAX_CACHED_DOCUMENTS: usize = 5;
/// タイトルに使う先頭文字数
pub const TITLE_LENGTH: usize = 20;
pub const FALLBACK_TITLE: &str = "New Document";

/// 自動保存の間隔（ミリ秒）
pub const AUTOSAVE_INTERVAL_MS: u32 = 3000;

pub const EXPORT_FILENAME: &str = "typly-document.txt";

/// フォント選択肢 (値, 表示名)
pub const FONT_FAMILIES: &[(&str, &str)] = &[
    ("sans-serif", "Sans-serif"),
    ("serif", "Serif"),
    ("monospace", "Monospace"),
    ("Georgia, serif", "Georgia"),
    ("'Courier New', monospace", "Courier New"),
];

// ============================================
// ドキュメント
// ============================================

/// キャッシュに保存されたドキュメント
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedDocument {
    pub content: String,
    pub timestamp: String,
    pub title: String,
}

impl SavedDocument {
    /// 本文をトリムしてタイトルを付ける
    pub fn new(content: &str, timestamp: String) -> Self {
        let content = content.trim().to_string();
        let title = title_for(&content);
        SavedDocument {
            content,
            timestamp,
            title,
        }
    }
}

/// 本文の先頭20文字。空なら既定のタイトル
pub fn title_for(content: &str) -> String {
    let title: String = content.chars().take(TITLE_LENGTH).collect();
    if title.is_empty() {
        FALLBACK_TITLE.to_string()
    } else {
        title
    }
}

/// 文字数表示（"1 character" / "N characters"）
pub fn character_label(text: &str) -> String {
    let count = text.chars().count();
    format!("{} {}", count, if count == 1 { "character" } else { "characters" })
}

// ============================================
// 表示設定
// ============================================

/// 表示設定。保存形式はJSのキー名(camelCase)に合わせる
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub bg_color: String,
    pub font_color: String,
    pub font_size: String,
    pub font_family: String,
    pub line_height: String,
    pub width: String,
    pub show_stats: bool,
    pub show_scrollbar: bool,
}

pub const DEFAULT_BG_COLOR: &str = "#f7f7f7";

impl Default for Settings {
    fn default() -> Self {
        Settings {
            bg_color: DEFAULT_BG_COLOR.to_string(),
            font_color: "#333333".to_string(),
            font_size: "20".to_string(),
            font_family: "sans-serif".to_string(),
            line_height: "1.6".to_string(),
            width: "800".to_string(),
            show_stats: true,
            show_scrollbar: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saved_document_trims_and_titles() {
        let doc = SavedDocument::new("  Hello World, this is a long line\n", "t".to_string());
        assert_eq!(doc.content, "Hello World, this is a long line");
        assert_eq!(doc.title, "Hello World, this is");
        assert_eq!(doc.title.chars().count(), TITLE_LENGTH);
    }

    #[test]
    fn test_title_counts_characters_not_bytes() {
        let title = title_for("施工体制台帳施工体制台帳施工体制台帳施工体制台帳");
        assert_eq!(title.chars().count(), 20);
    }

    #[test]
    fn test_title_fallback() {
        assert_eq!(title_for(""), FALLBACK_TITLE);
    }

    #[test]
    fn test_character_label() {
        assert_eq!(character_label(""), "0 characters");
        assert_eq!(character_label("a"), "1 character");
        assert_eq!(character_label("ab\n"), "3 characters");
    }

    #[test]
    fn test_settings_wire_format() {
        let json = serde_json::to_value(Settings::default()).unwrap();
        assert_eq!(json["bgColor"], "#f7f7f7");
        assert_eq!(json["fontColor"], "#333333");
        assert_eq!(json["fontSize"], "20");
        assert_eq!(json["fontFamily"], "sans-serif");
        assert_eq!(json["lineHeight"], "1.6");
        assert_eq!(json["width"], "800");
        assert_eq!(json["showStats"], true);
        assert_eq!(json["showScrollbar"], true);
    }

    #[test]
    fn test_settings_missing_fields_use_defaults() {
        let s: Settings = serde_json::from_str(r##"{"bgColor":"#000000"}"##).unwrap();
        assert_eq!(s.bg_color, "#000000");
        assert_eq!(s.font_size, "20");
        assert!(s.show_stats);
    }
}

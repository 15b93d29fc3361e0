//! 表示設定からスタイル値への変換

use crate::models::{Settings, DEFAULT_BG_COLOR};

/// 既定背景のときの統計バー背景色
const DEFAULT_STATS_BAR_BG: &str = "#eee";

#[derive(Debug, Clone, PartialEq)]
pub struct Appearance {
    pub body_background: String,
    pub body_color: String,
    pub editor_color: String,
    pub editor_font_size: String,
    pub editor_font_family: String,
    pub editor_line_height: String,
    pub editor_max_width: String,
    pub stats_bar_background: String,
    pub stats_display: &'static str,
    pub overflow_y: &'static str,
    pub scrollbar_width: &'static str,
}

impl Appearance {
    pub fn from_settings(settings: &Settings) -> Self {
        let stats_bar_background = if settings.bg_color == DEFAULT_BG_COLOR {
            DEFAULT_STATS_BAR_BG.to_string()
        } else {
            settings.bg_color.clone()
        };
        let (overflow_y, scrollbar_width) = if settings.show_scrollbar {
            ("auto", "auto")
        } else {
            ("hidden", "none")
        };

        Appearance {
            body_background: settings.bg_color.clone(),
            body_color: settings.font_color.clone(),
            editor_color: settings.font_color.clone(),
            editor_font_size: format!("{}px", settings.font_size),
            editor_font_family: settings.font_family.clone(),
            editor_line_height: settings.line_height.clone(),
            editor_max_width: format!("{}px", settings.width),
            stats_bar_background,
            stats_display: if settings.show_stats { "block" } else { "none" },
            overflow_y,
            scrollbar_width,
        }
    }
}

/// body要素にスタイルを適用（エディタ等はコンポーネント側で反映）
pub fn apply_to_body(appearance: &Appearance) -> Result<(), String> {
    let window = web_sys::window().ok_or("windowがありません")?;
    let document = window.document().ok_or("documentがありません")?;
    let body = document.body().ok_or("bodyがありません")?;
    let style = body.style();
    style
        .set_property("background-color", &appearance.body_background)
        .map_err(|e| format!("スタイル設定失敗: {:?}", e))?;
    style
        .set_property("color", &appearance.body_color)
        .map_err(|e| format!("スタイル設定失敗: {:?}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_appearance() {
        let a = Appearance::from_settings(&Settings::default());
        assert_eq!(a.body_background, "#f7f7f7");
        assert_eq!(a.editor_color, "#333333");
        assert_eq!(a.editor_font_size, "20px");
        assert_eq!(a.editor_max_width, "800px");
        assert_eq!(a.editor_line_height, "1.6");
        assert_eq!(a.stats_bar_background, "#eee");
        assert_eq!(a.stats_display, "block");
        assert_eq!(a.overflow_y, "auto");
    }

    #[test]
    fn test_custom_background_used_for_stats_bar() {
        let settings = Settings {
            bg_color: "#202020".to_string(),
            ..Settings::default()
        };
        assert_eq!(Appearance::from_settings(&settings).stats_bar_background, "#202020");
    }

    #[test]
    fn test_hidden_stats_and_scrollbar() {
        let settings = Settings {
            show_stats: false,
            show_scrollbar: false,
            ..Settings::default()
        };
        let a = Appearance::from_settings(&settings);
        assert_eq!(a.stats_display, "none");
        assert_eq!(a.overflow_y, "hidden");
        assert_eq!(a.scrollbar_width, "none");
    }
}

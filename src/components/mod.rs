//! UIコンポーネントモジュール

pub mod about;
pub mod editor;
pub mod modal;
pub mod open_modal;
pub mod settings_panel;
pub mod toolbar;

pub use about::AboutModal;
pub use editor::Editor;
pub use open_modal::OpenModal;
pub use settings_panel::SettingsModal;
pub use toolbar::Toolbar;

//! ユーティリティモジュール

pub mod appearance;
pub mod cache;
pub mod file_io;
pub mod log_trace;
pub mod session;
pub mod settings;
pub mod storage;

// 共通ヘルパー

/// 現在時刻(ISO-8601, UTC)
#[cfg(target_arch = "wasm32")]
pub fn now_iso() -> String {
    js_sys::Date::new_0().to_iso_string().as_string().unwrap_or_default()
}

/// 現在時刻(ISO-8601, UTC)
#[cfg(not(target_arch = "wasm32"))]
pub fn now_iso() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0);
    format_iso8601(millis)
}

/// UNIXミリ秒を `YYYY-MM-DDTHH:MM:SS.mmmZ` に変換
pub fn format_iso8601(millis: i64) -> String {
    let secs = millis.div_euclid(1000);
    let ms = millis.rem_euclid(1000);
    let days = secs.div_euclid(86400);
    let remaining = secs.rem_euclid(86400);
    let (year, month, day) = days_to_ymd(days);
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
        year,
        month,
        day,
        remaining / 3600,
        (remaining % 3600) / 60,
        remaining % 60,
        ms
    )
}

/// 一覧表示用: `YYYY-MM-DD HH:MM`
pub fn short_timestamp(iso: &str) -> String {
    match iso.get(0..16) {
        Some(s) if s.as_bytes().get(10) == Some(&b'T') => s.replacen('T', " ", 1),
        _ => iso.to_string(),
    }
}

/// 一覧表示用: ブラウザのロケール・タイムゾーンで表示
#[cfg(target_arch = "wasm32")]
pub fn display_timestamp(iso: &str) -> String {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(iso));
    if date.get_time().is_nan() {
        return short_timestamp(iso);
    }
    date.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED)
        .as_string()
        .unwrap_or_else(|| short_timestamp(iso))
}

/// 一覧表示用（ホスト側ではロケール情報がないのでUTCのまま）
#[cfg(not(target_arch = "wasm32"))]
pub fn display_timestamp(iso: &str) -> String {
    short_timestamp(iso)
}

/// ビルド日時（build.rsで埋め込み）
pub fn format_build_time() -> String {
    let timestamp: i64 = option_env!("TYPLY_BUILD_TIME")
        .unwrap_or("0")
        .parse()
        .unwrap_or(0);
    if timestamp == 0 {
        return "Build: unknown".to_string();
    }
    let iso = format_iso8601(timestamp * 1000);
    format!("Build: {} (UTC)", short_timestamp(&iso))
}

fn days_to_ymd(days: i64) -> (i64, i64, i64) {
    // 1970-01-01 からの日数をグレゴリオ暦に変換
    let mut remaining = days.max(0);
    let mut year = 1970;
    loop {
        let days_in_year = if is_leap_year(year) { 366 } else { 365 };
        if remaining < days_in_year {
            break;
        }
        remaining -= days_in_year;
        year += 1;
    }
    let days_in_months: [i64; 12] = if is_leap_year(year) {
        [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]
    } else {
        [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]
    };
    let mut month = 1;
    for &d in &days_in_months {
        if remaining < d {
            break;
        }
        remaining -= d;
        month += 1;
    }
    (year, month, remaining + 1)
}

fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

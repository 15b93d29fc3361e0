use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    // ビルド日時を埋め込む（Aboutモーダルで表示）
    if let Ok(duration) = SystemTime::now().duration_since(UNIX_EPOCH) {
        let timestamp = duration.as_secs();
        println!("cargo:rustc-env=TYPLY_BUILD_TIME={}", timestamp);
    } else {
        println!("cargo:warning=Could not determine build time");
    }

    // ソース変更時のみ再実行
    println!("cargo:rerun-if-changed=src");
}

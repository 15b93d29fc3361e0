//! テキストファイルの取り込み・書き出し

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{File, FileReader, HtmlInputElement};

/// ファイル選択inputの最初のファイル
pub fn first_selected_file(input: &HtmlInputElement) -> Option<File> {
    input.files()?.get(0)
}

/// ファイルをテキストとして読み込み、完了時にコールバックを呼ぶ
pub fn read_text_file<F>(file: &File, on_load: F) -> Result<(), String>
where
    F: FnOnce(String) + 'static,
{
    let reader = FileReader::new().map_err(|e| format!("FileReader作成失敗: {:?}", e))?;
    let reader_clone = reader.clone();

    let onload = Closure::once(move |_: web_sys::Event| {
        if let Ok(result) = reader_clone.result() {
            if let Some(text) = result.as_string() {
                on_load(text);
            }
        }
    });

    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();
    reader
        .read_as_text(file)
        .map_err(|e| format!("読み込み失敗: {:?}", e))
}

/// テキストをファイルとしてダウンロードさせる
pub fn download_text(filename: &str, text: &str, mime: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("windowがありません")?;
    let document = window.document().ok_or("documentがありません")?;

    let blob_parts = js_sys::Array::new();
    blob_parts.push(&JsValue::from_str(text));

    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);

    let blob = web_sys::Blob::new_with_str_sequence_and_options(&blob_parts, &options)
        .map_err(|e| format!("Blob作成失敗: {:?}", e))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("URL作成失敗: {:?}", e))?;

    let a = document
        .create_element("a")
        .map_err(|e| format!("要素作成失敗: {:?}", e))?;
    let _ = a.set_attribute("href", &url);
    let _ = a.set_attribute("download", filename);

    let body = document.body().ok_or("bodyがありません")?;
    let _ = body.append_child(&a);
    if let Some(element) = a.dyn_ref::<web_sys::HtmlElement>() {
        element.click();
    }
    let _ = body.remove_child(&a);
    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}

//! 브라우저 다운로드 (Blob + 임시 링크)

use voucher_ai_common::export::csv::with_bom;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

const CSV_MIME: &str = "text/csv;charset=utf-8;";

/// CSV 문자열을 BOM 을 붙여 내려받게 한다
pub fn download_csv(csv: &str, file_name: &str) -> Result<(), String> {
    download_bytes(&with_bom(csv), CSV_MIME, file_name)
}

pub fn download_bytes(data: &[u8], mime: &str, file_name: &str) -> Result<(), String> {
    let array = js_sys::Uint8Array::from(data);
    let parts = js_sys::Array::of1(&array);
    let options = BlobPropertyBag::new();
    options.set_type(mime);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_message)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(js_message)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "document 없음".to_string())?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_message)?
        .dyn_into()
        .map_err(|_| "a 요소 생성 실패".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    Url::revoke_object_url(&url).map_err(js_message)
}

fn js_message(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

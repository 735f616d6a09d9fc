//! fetch API 전송 계층

use voucher_ai_common::api::{
    FormPart, HttpRequest, HttpResponse, RequestBody, Transport, TransportError,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    type File = File;

    async fn send(&self, request: HttpRequest<File>) -> Result<HttpResponse, TransportError> {
        let method = request.method;
        let url = request.url.clone();
        let started = js_sys::Date::now();

        let result = fetch(request).await;

        let elapsed = (js_sys::Date::now() - started).round();
        match &result {
            Ok(response) if response.is_success() => {
                gloo::console::debug!(format!("API {} {} - {} ({}ms)", method, url, response.status, elapsed));
            }
            Ok(response) => {
                gloo::console::error!(format!(
                    "API {} {} - {} {} ({}ms)",
                    method, url, response.status, response.status_text, elapsed
                ));
            }
            Err(e) => {
                gloo::console::error!(format!("API {} {} - 네트워크 오류: {}", method, url, e));
            }
        }
        result
    }
}

async fn fetch(request: HttpRequest<File>) -> Result<HttpResponse, TransportError> {
    let init = RequestInit::new();
    init.set_method(request.method.as_str());
    init.set_mode(RequestMode::Cors);

    match request.body {
        RequestBody::Empty => {}
        RequestBody::Json(value) => init.set_body(&JsValue::from_str(&value.to_string())),
        RequestBody::Multipart(parts) => {
            // Content-Type(boundary) 은 브라우저가 붙인다
            let form = FormData::new().map_err(js_error)?;
            for part in parts {
                match part {
                    FormPart::Text { name, value } => form.append_with_str(&name, &value),
                    FormPart::File { name, file } => {
                        form.append_with_blob_and_filename(&name, &file, &file.name())
                    }
                }
                .map_err(js_error)?;
            }
            init.set_body(&form);
        }
    }

    let req = Request::new_with_str_and_init(&request.url, &init).map_err(js_error)?;
    for (name, value) in &request.headers {
        req.headers().set(name, value).map_err(js_error)?;
    }

    let window = web_sys::window().ok_or_else(|| TransportError("window 없음".to_string()))?;
    let value = JsFuture::from(window.fetch_with_request(&req))
        .await
        .map_err(js_error)?;
    let response: Response = value.dyn_into().map_err(js_error)?;

    let text = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;

    Ok(HttpResponse {
        status: response.status(),
        status_text: response.status_text(),
        body: text.as_string().unwrap_or_default(),
    })
}

/// JS 예외 → 메시지 (없으면 빈 문자열, 클라이언트가 "Network error" 로 바꾼다)
fn js_error(value: JsValue) -> TransportError {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_default();
    TransportError(message)
}

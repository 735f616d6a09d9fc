//! API 클라이언트
//!
//! 실제 HTTP 전송은 Transport 트레이트 구현에 맡긴다.
//! - 브라우저: fetch (web-wasm)
//! - CLI: reqwest
//! - 테스트: MockTransport

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::config::{ConfigStore, KeyValueStore};
use crate::envelope::Envelope;
use crate::error::{now_iso, ApiError};

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";
pub const BASE_URL_MISSING: &str = "BASE_URL이 설정되지 않았습니다";
pub const NETWORK_ERROR: &str = "Network error";
pub const UNKNOWN_ERROR: &str = "Unknown error";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// multipart 폼 항목
#[derive(Debug, Clone, PartialEq)]
pub enum FormPart<F> {
    Text { name: String, value: String },
    File { name: String, file: F },
}

impl<F> FormPart<F> {
    pub fn text(name: &str, value: impl Into<String>) -> Self {
        FormPart::Text {
            name: name.to_string(),
            value: value.into(),
        }
    }

    pub fn file(name: &str, file: F) -> Self {
        FormPart::File {
            name: name.to_string(),
            file,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            FormPart::Text { name, .. } | FormPart::File { name, .. } => name,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody<F> {
    Empty,
    Json(Value),
    Multipart(Vec<FormPart<F>>),
}

/// request() 옵션 (본문 + 추가 헤더)
#[derive(Debug, Clone)]
pub struct RequestOptions<F> {
    pub body: RequestBody<F>,
    pub headers: Vec<(String, String)>,
}

impl<F> Default for RequestOptions<F> {
    fn default() -> Self {
        Self {
            body: RequestBody::Empty,
            headers: Vec::new(),
        }
    }
}

impl<F> RequestOptions<F> {
    pub fn json(value: Value) -> Self {
        Self {
            body: RequestBody::Json(value),
            headers: Vec::new(),
        }
    }

    pub fn form(parts: Vec<FormPart<F>>) -> Self {
        Self {
            body: RequestBody::Multipart(parts),
            headers: Vec::new(),
        }
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }
}

/// Transport 에 넘기는 완성된 요청
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest<F> {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody<F>,
}

impl<F> HttpRequest<F> {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// 네트워크 수준 실패 (HTTP 응답 자체를 받지 못함)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct TransportError(pub String);

/// HTTP 전송 계층
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// multipart 로 보낼 파일 핸들 (브라우저: web_sys::File, CLI: 경로)
    type File;

    async fn send(&self, request: HttpRequest<Self::File>) -> Result<HttpResponse, TransportError>;
}

/// 봉투를 해석하는 API 클라이언트
pub struct ApiClient<T, S> {
    transport: T,
    config: ConfigStore<S>,
}

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
    pub fn new(transport: T, config: ConfigStore<S>) -> Self {
        Self { transport, config }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn config(&self) -> &ConfigStore<S> {
        &self.config
    }

    /// 요청을 보내고 성공한 봉투를 그대로 돌려준다.
    ///
    /// 설정 누락, 네트워크 실패, 2xx 이외, `ok == false` 는 모두 같은 ApiError 로 실패한다.
    pub async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        options: RequestOptions<T::File>,
    ) -> Result<Envelope, ApiError> {
        let base = self.config.base_url();
        if base.is_empty() {
            return Err(ApiError::local(BASE_URL_MISSING));
        }
        let url = format!("{}{}", base.trim_end_matches('/'), path);

        let mut headers = Vec::new();
        if matches!(options.body, RequestBody::Json(_)) {
            headers.push(("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string()));
        }
        let token = self.config.token();
        if !token.is_empty() {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }
        headers.extend(options.headers);

        let request = HttpRequest {
            method,
            url,
            headers,
            body: options.body,
        };

        let response = match self.transport.send(request).await {
            Ok(r) => r,
            Err(e) => {
                let message = if e.0.is_empty() { NETWORK_ERROR.to_string() } else { e.0 };
                return Err(ApiError::local(message));
            }
        };

        let envelope = Envelope::parse(&response.body);
        if !response.is_success() || !envelope.ok {
            let server_error = envelope.error_message().map(str::to_string);
            let message = server_error
                .clone()
                .or_else(|| Some(response.status_text.clone()).filter(|s| !s.is_empty()))
                .unwrap_or_else(|| UNKNOWN_ERROR.to_string());
            let ts = envelope.ts.clone().unwrap_or_else(now_iso);
            return Err(ApiError::new(message, response.status, server_error, ts));
        }

        Ok(envelope)
    }

    pub async fn get(&self, path: &str) -> Result<Envelope, ApiError> {
        self.request(HttpMethod::Get, path, RequestOptions::default()).await
    }

    pub async fn post(&self, path: &str, body: Option<Value>) -> Result<Envelope, ApiError> {
        let options = body.map(RequestOptions::json).unwrap_or_default();
        self.request(HttpMethod::Post, path, options).await
    }

    pub async fn post_form(&self, path: &str, parts: Vec<FormPart<T::File>>) -> Result<Envelope, ApiError> {
        self.request(HttpMethod::Post, path, RequestOptions::form(parts)).await
    }

    pub async fn patch(&self, path: &str, body: Value) -> Result<Envelope, ApiError> {
        self.request(HttpMethod::Patch, path, RequestOptions::json(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<Envelope, ApiError> {
        self.request(HttpMethod::Delete, path, RequestOptions::default()).await
    }
}

/// 봉투의 data 를 원하는 타입으로 꺼낸다
pub fn data<D: DeserializeOwned>(envelope: Envelope) -> crate::Result<D> {
    Ok(serde_json::from_value(envelope.data)?)
}

/// 경로 세그먼트 인코딩 (encodeURIComponent 와 동일)
pub fn encode_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryStore;
    use crate::mock::MockTransport;
    use futures::executor::block_on;
    use serde_json::json;

    fn client(transport: MockTransport) -> ApiClient<MockTransport, MemoryStore> {
        let config = ConfigStore::new(MemoryStore::new());
        config.set_base_url("https://api.example.com/");
        ApiClient::new(transport, config)
    }

    #[test]
    fn test_ok_false_with_http_200_is_error() {
        let api = client(MockTransport::new().respond(200, r#"{"ok":false,"error":"bad"}"#));
        let err = block_on(api.get("/workspaces")).unwrap_err();
        assert_eq!(err.message, "bad");
        assert_eq!(err.status, 200);
        assert_eq!(err.server_error.as_deref(), Some("bad"));
    }

    #[test]
    fn test_network_failure_has_status_zero() {
        let api = client(MockTransport::new().fail("Failed to fetch"));
        let err = block_on(api.get("/workspaces")).unwrap_err();
        assert_eq!(err.status, 0);
        assert_eq!(err.message, "Failed to fetch");
    }

    #[test]
    fn test_network_failure_without_message() {
        let api = client(MockTransport::new().fail(""));
        let err = block_on(api.get("/workspaces")).unwrap_err();
        assert_eq!(err.message, NETWORK_ERROR);
    }

    #[test]
    fn test_http_error_with_html_body() {
        let api = client(MockTransport::new().respond_with(502, "Bad Gateway", "<html></html>"));
        let err = block_on(api.get("/workspaces")).unwrap_err();
        assert_eq!(err.status, 502);
        // 본문이 JSON 이 아니면 "Invalid JSON response" 가 error 로 들어간다
        assert_eq!(err.message, "Invalid JSON response");
    }

    #[test]
    fn test_http_error_uses_status_text_when_no_error_field() {
        let api = client(MockTransport::new().respond_with(404, "Not Found", r#"{"ok":false}"#));
        let err = block_on(api.get("/workspaces/x")).unwrap_err();
        assert_eq!(err.message, "Not Found");
        assert!(err.server_error.is_none());
    }

    #[test]
    fn test_unknown_error_when_nothing_available() {
        let api = client(MockTransport::new().respond_with(500, "", r#"{"ok":false,"ts":"t1"}"#));
        let err = block_on(api.get("/workspaces")).unwrap_err();
        assert_eq!(err.message, UNKNOWN_ERROR);
        assert_eq!(err.ts, "t1");
    }

    #[test]
    fn test_success_returns_envelope() {
        let api = client(MockTransport::new().respond(200, r#"{"ok":true,"data":{"a":1}}"#));
        let env = block_on(api.get("/x")).unwrap();
        assert_eq!(env.data, json!({"a": 1}));
    }

    #[test]
    fn test_url_and_headers() {
        let transport = MockTransport::new().respond(200, r#"{"ok":true}"#);
        let api = client(transport);
        api.config().set_token("secret");
        block_on(api.post("/workspaces", Some(json!({"workspaceName": "w"})))).unwrap();

        let req = api.transport().last_request();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "https://api.example.com/workspaces");
        assert_eq!(req.header("authorization"), Some("Bearer secret"));
        assert_eq!(req.header("content-type"), Some(JSON_CONTENT_TYPE));
        assert_eq!(req.body, RequestBody::Json(json!({"workspaceName": "w"})));
    }

    #[test]
    fn test_trailing_slash_in_base_url() {
        let api = client(MockTransport::new().respond(200, r#"{"ok":true}"#));
        api.config().set_base_url("https://api.example.com/");
        block_on(api.get("/workspaces")).unwrap();
        assert_eq!(api.transport().last_request().url, "https://api.example.com/workspaces");
    }

    #[test]
    fn test_no_auth_header_without_token() {
        let api = client(MockTransport::new().respond(200, r#"{"ok":true}"#));
        block_on(api.get("/workspaces")).unwrap();
        let req = api.transport().last_request();
        assert_eq!(req.header("authorization"), None);
        assert_eq!(req.header("content-type"), None);
    }

    #[test]
    fn test_multipart_has_no_content_type() {
        let api = client(MockTransport::new().respond(200, r#"{"ok":true}"#));
        let parts = vec![FormPart::file("files", "a.jpg".to_string())];
        block_on(api.post_form("/up", parts)).unwrap();
        let req = api.transport().last_request();
        assert_eq!(req.header("content-type"), None);
    }

    #[test]
    fn test_extra_headers_are_appended() {
        let api = client(MockTransport::new().respond(200, r#"{"ok":true}"#));
        let options = RequestOptions::default().header("X-Trace", "1");
        block_on(api.request(HttpMethod::Get, "/x", options)).unwrap();
        assert_eq!(api.transport().last_request().header("x-trace"), Some("1"));
    }

    #[test]
    fn test_encode_segment() {
        assert_eq!(encode_segment("2025 8월/a"), "2025%208%EC%9B%94%2Fa");
    }

    #[test]
    fn test_data_deserializes() {
        let env = Envelope::parse(r#"{"ok":true,"data":[1,2,3]}"#);
        let values: Vec<u32> = data(env).unwrap();
        assert_eq!(values, vec![1, 2, 3]);
    }
}

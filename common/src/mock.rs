//! 테스트용 Transport (응답 큐 + 요청 기록)

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::api::{ApiClient, HttpRequest, HttpResponse, Transport, TransportError};
use crate::config::{ConfigStore, MemoryStore};

/// 파일 핸들은 파일명 문자열로 대신한다
pub type MockFile = String;

#[derive(Default)]
pub struct MockTransport {
    responses: RefCell<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: RefCell<Vec<HttpRequest<MockFile>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: &str) -> Self {
        self.respond_with(status, "OK", body)
    }

    pub fn respond_with(self, status: u16, status_text: &str, body: &str) -> Self {
        self.responses.borrow_mut().push_back(Ok(HttpResponse {
            status,
            status_text: status_text.to_string(),
            body: body.to_string(),
        }));
        self
    }

    pub fn fail(self, message: &str) -> Self {
        self.responses
            .borrow_mut()
            .push_back(Err(TransportError(message.to_string())));
        self
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn requests(&self) -> Vec<HttpRequest<MockFile>> {
        self.requests.borrow().clone()
    }

    pub fn last_request(&self) -> HttpRequest<MockFile> {
        self.requests
            .borrow()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

impl Transport for MockTransport {
    type File = MockFile;

    async fn send(&self, request: HttpRequest<MockFile>) -> Result<HttpResponse, TransportError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("no mock response queued".to_string())))
    }
}

/// BASE_URL 이 설정된 테스트 클라이언트
pub fn client(transport: MockTransport) -> ApiClient<MockTransport, MemoryStore> {
    let config = ConfigStore::new(MemoryStore::new());
    config.set_base_url("http://test");
    ApiClient::new(transport, config)
}

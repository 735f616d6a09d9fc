//! 백엔드 API 연결 (fetch 전송 + localStorage 설정)

pub mod fetch;

use voucher_ai_common::api::ApiClient;
use voucher_ai_common::{JournalService, UploadsService, WorkspacesService};

use crate::storage::{config_store, LocalStorageStore};
pub use fetch::FetchTransport;

pub type BrowserClient = ApiClient<FetchTransport, LocalStorageStore>;

/// 요청마다 새로 만든다. 설정은 호출 시점의 localStorage 값을 읽는다.
pub fn client() -> BrowserClient {
    ApiClient::new(FetchTransport, config_store())
}

pub fn workspaces(api: &BrowserClient) -> WorkspacesService<'_, FetchTransport, LocalStorageStore> {
    WorkspacesService::new(api)
}

pub fn uploads(api: &BrowserClient) -> UploadsService<'_, FetchTransport, LocalStorageStore> {
    UploadsService::new(api)
}

pub fn journal(api: &BrowserClient) -> JournalService<'_, FetchTransport, LocalStorageStore> {
    JournalService::new(api)
}

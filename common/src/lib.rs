//! Voucher AI Common Library
//!
//! CLI와 Web(WASM)이 공유하는 API 클라이언트, 서비스, 화면 상태

pub mod api;
pub mod config;
pub mod dashboard;
pub mod envelope;
pub mod error;
pub mod export;
pub mod file_table;
pub mod journal;
pub mod modal;
pub mod navigation;
pub mod notify;
pub mod reference;
pub mod services;
pub mod settings;
pub mod types;
pub mod validate;

#[cfg(test)]
mod mock;

pub use api::{ApiClient, FormPart, HttpMethod, HttpRequest, HttpResponse, RequestBody, RequestOptions, Transport, TransportError};
pub use config::{ConfigStore, KeyValueStore, MemoryStore};
pub use envelope::Envelope;
pub use error::{ApiError, Error, Result, ValidationError};
pub use file_table::{FileCandidate, FileRow, FileStatus, FileTable};
pub use notify::{Notifier, Toast, ToastKind, ToastQueue};
pub use services::{JournalService, UploadsService, WorkspacesService};
pub use types::{JournalEntry, Project, UploadResult, UploadedFile, Workspace};

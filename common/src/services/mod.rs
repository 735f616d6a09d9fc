//! 리소스별 API 호출 래퍼
//!
//! 모든 호출은 식별자를 먼저 검증하고, 실패하면 네트워크 호출 없이 ValidationError 를 돌려준다.

pub mod journal;
pub mod uploads;
pub mod workspaces;

pub use journal::JournalService;
pub use uploads::{ImageUploadOptions, UploadsService, ZipUploadOptions};
pub use workspaces::WorkspacesService;

use crate::api::encode_segment;
use crate::validate::validate_workspace_name;

/// `/workspaces/{name}{suffix}` (이름 검증 + 인코딩)
pub(crate) fn workspace_path(name: &str, suffix: &str) -> Result<String, crate::ValidationError> {
    let name = validate_workspace_name(Some(name))?;
    Ok(format!("/workspaces/{}{}", encode_segment(&name), suffix))
}

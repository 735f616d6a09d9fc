//! 에러 타입 정의
//!
//! - ValidationError: 네트워크 호출 전에 발생하는 로컬 검증 실패
//! - ApiError: 설정 누락 / 네트워크 / HTTP / 응답 봉투(ok=false) 실패를 하나로 묶은 형태

use thiserror::Error;

/// 로컬 입력 검증 에러
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("워크스페이스 이름이 필요합니다")]
    MissingWorkspaceName,

    #[error("워크스페이스 이름은 비어있을 수 없습니다")]
    BlankWorkspaceName,

    #[error("워크스페이스 이름은 {max}자를 초과할 수 없습니다")]
    WorkspaceNameTooLong { max: usize },

    #[error("파일 ID가 필요합니다")]
    MissingFileId,

    #[error("업로드할 파일이 필요합니다")]
    NoFiles,

    #[error("ZIP 파일만 업로드 가능합니다")]
    NotZip,

    #[error("수정할 데이터가 필요합니다")]
    EmptyEdits,

    #[error("프로젝트가 선택되지 않았습니다")]
    MissingProject,
}

/// API 호출 에러
///
/// `status == 0` 은 HTTP 상태가 없는 실패(BASE_URL 미설정, 네트워크 오류)를 뜻한다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    pub status: u16,
    pub server_error: Option<String>,
    pub ts: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>, status: u16, server_error: Option<String>, ts: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status,
            server_error,
            ts: ts.into(),
        }
    }

    /// HTTP 상태 없이 실패한 경우 (status 0)
    pub fn local(message: impl Into<String>) -> Self {
        Self::new(message, 0, None, now_iso())
    }

    /// 사용자에게 보여줄 요약 ("(HTTP 404): not found" 형태)
    pub fn describe(&self) -> String {
        if self.status > 0 {
            format!("(HTTP {}): {}", self.status, self.message)
        } else {
            self.message.clone()
        }
    }
}

/// 공통 에러 타입
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// API 에러라면 HTTP 상태를 돌려준다
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api(e) => Some(e.status),
            _ => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}

/// Result 타입 별칭
pub type Result<T> = std::result::Result<T, Error>;

/// 현재 시각 (RFC 3339, UTC)
pub fn now_iso() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display() {
        let error = ValidationError::WorkspaceNameTooLong { max: 128 };
        assert_eq!(error.to_string(), "워크스페이스 이름은 128자를 초과할 수 없습니다");
    }

    #[test]
    fn test_api_error_display_is_message() {
        let error = ApiError::new("bad", 400, Some("bad".into()), "2025-08-26T00:00:00Z");
        assert_eq!(error.to_string(), "bad");
        assert_eq!(error.describe(), "(HTTP 400): bad");
    }

    #[test]
    fn test_local_api_error_has_status_zero() {
        let error = ApiError::local("Network error");
        assert_eq!(error.status, 0);
        assert!(error.server_error.is_none());
        assert!(!error.ts.is_empty());
        assert_eq!(error.describe(), "Network error");
    }

    #[test]
    fn test_error_from_validation() {
        let error: Error = ValidationError::NoFiles.into();
        assert!(error.is_validation());
        assert_eq!(error.status(), None);
    }

    #[test]
    fn test_error_from_api() {
        let error: Error = ApiError::local("down").into();
        assert_eq!(error.status(), Some(0));
        assert_eq!(error.to_string(), "down");
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }
}

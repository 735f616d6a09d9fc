//! 네트워크 호출 전 입력 검증

use crate::error::ValidationError;

pub const MAX_WORKSPACE_NAME_CHARS: usize = 128;

/// 워크스페이스 이름 검증. 성공하면 trim 된 이름을 돌려준다.
pub fn validate_workspace_name(name: Option<&str>) -> Result<String, ValidationError> {
    let name = name.ok_or(ValidationError::MissingWorkspaceName)?;
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::BlankWorkspaceName);
    }
    if trimmed.chars().count() > MAX_WORKSPACE_NAME_CHARS {
        return Err(ValidationError::WorkspaceNameTooLong {
            max: MAX_WORKSPACE_NAME_CHARS,
        });
    }
    Ok(trimmed.to_string())
}

/// 파일 ID 검증 (trim 후 비어있지 않을 것)
pub fn validate_file_id(file_id: &str) -> Result<String, ValidationError> {
    let trimmed = file_id.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingFileId);
    }
    Ok(trimmed.to_string())
}

/// ZIP 파일명 검증 (대소문자 무시)
pub fn validate_zip_name(file_name: &str) -> Result<(), ValidationError> {
    if file_name.to_ascii_lowercase().ends_with(".zip") {
        Ok(())
    } else {
        Err(ValidationError::NotZip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_name_trimmed() {
        assert_eq!(validate_workspace_name(Some("  2025-08 정산 ")).unwrap(), "2025-08 정산");
    }

    #[test]
    fn test_workspace_name_rejects_missing_and_blank() {
        assert_eq!(validate_workspace_name(None), Err(ValidationError::MissingWorkspaceName));
        assert_eq!(validate_workspace_name(Some("")), Err(ValidationError::BlankWorkspaceName));
        assert_eq!(validate_workspace_name(Some("   ")), Err(ValidationError::BlankWorkspaceName));
    }

    #[test]
    fn test_workspace_name_length_counts_chars() {
        let max = "가".repeat(128);
        assert!(validate_workspace_name(Some(&max)).is_ok());

        let over = "a".repeat(129);
        assert_eq!(
            validate_workspace_name(Some(&over)),
            Err(ValidationError::WorkspaceNameTooLong { max: 128 })
        );
    }

    #[test]
    fn test_file_id() {
        assert_eq!(validate_file_id(" receipt_001 ").unwrap(), "receipt_001");
        assert_eq!(validate_file_id("  "), Err(ValidationError::MissingFileId));
    }

    #[test]
    fn test_zip_name() {
        assert!(validate_zip_name("receipts.ZIP").is_ok());
        assert_eq!(validate_zip_name("receipts.rar"), Err(ValidationError::NotZip));
    }
}

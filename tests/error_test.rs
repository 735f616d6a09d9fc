//! 에러 케이스 테스트
//!
//! 업로드 대상 수집과 입력 파싱의 실패 경로를 검증

use std::path::PathBuf;
use tempfile::tempdir;
use voucher_ai::cli::parse_edits;
use voucher_ai::error::VoucherAiError;
use voucher_ai::notifier::StdoutNotifier;
use voucher_ai::scanner;
use voucher_ai_common::{ApiError, ValidationError};

/// 존재하지 않는 경로
#[test]
fn test_scan_nonexistent_path() {
    let result = scanner::scan_paths(&[PathBuf::from("/nonexistent/path/12345")], false);

    let err = result.unwrap_err();
    assert!(matches!(err, VoucherAiError::FileNotFound(_)));
}

/// 빈 폴더는 에러가 아니라 빈 목록
#[test]
fn test_scan_empty_folder() {
    let dir = tempdir().expect("Failed to create temp dir");
    let result = scanner::scan_paths(&[dir.path().to_path_buf()], true);

    assert!(result.unwrap().is_empty());
}

/// 업로드할 수 없는 파일만 있으면 계획이 비어 있다
#[test]
fn test_plan_with_only_unsupported_files() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("memo.txt");
    std::fs::write(&path, "text").unwrap();

    let scanned = scanner::scan_paths(&[path], false).unwrap();
    assert_eq!(scanned.len(), 1);
    let plan = scanner::plan_upload(scanned, &StdoutNotifier);

    assert!(plan.files.is_empty());
    assert_eq!(plan.outcome.rejected.len(), 1);
}

#[test]
fn test_parse_edits_errors() {
    let err = parse_edits(&["금액".to_string()]).unwrap_err();
    assert!(err.to_string().contains("key=value"));

    let err = parse_edits(&["color=red".to_string()]).unwrap_err();
    assert!(err.to_string().contains("color"));
}

#[test]
fn test_error_display() {
    let err: VoucherAiError = ValidationError::NoFiles.into();
    assert_eq!(err.to_string(), "업로드할 파일이 필요합니다");

    let err = VoucherAiError::Api(ApiError::new("Not Found", 404, None, "2025-08-26T00:00:00Z"));
    assert!(err.to_string().starts_with("API 오류"));
    assert!(err.to_string().contains("404"));
}

//! 설정 화면의 메시지와 참조 데이터 Excel 입출력 검사

use std::fmt;

use crate::error::ApiError;

pub const SAVED_MESSAGE: &str = "API 설정이 저장되었습니다.";
pub const BASE_URL_REQUIRED: &str = "BASE_URL을 먼저 설정해주세요.";
pub const PING_LABEL: &str = "연결 테스트";
pub const PING_RUNNING_LABEL: &str = "연결 테스트 중...";
pub const DELETE_CONFIRM: &str = "정말 삭제하시겠습니까?";

pub const MAX_EXCEL_SIZE: u64 = 10 * 1024 * 1024;

pub fn connection_success_message(workspace_count: usize) -> String {
    format!("API 연결 성공! (워크스페이스 {}개 발견)", workspace_count)
}

/// `API 연결 실패 (HTTP 404): Not Found` (상태 0 이면 HTTP 부분 생략)
pub fn connection_failure_message(err: &ApiError) -> String {
    let mut message = String::from("API 연결 실패");
    if err.status != 0 {
        message.push_str(&format!(" (HTTP {})", err.status));
    }
    if !err.message.is_empty() {
        message.push_str(&format!(": {}", err.message));
    }
    message
}

/// 설정 화면의 참조 데이터 표
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    Coa,
    Project,
    Transaction,
}

impl ReferenceKind {
    pub const ALL: [ReferenceKind; 3] = [
        ReferenceKind::Coa,
        ReferenceKind::Project,
        ReferenceKind::Transaction,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceKind::Coa => "coa",
            ReferenceKind::Project => "project",
            ReferenceKind::Transaction => "transaction",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ReferenceKind::Coa => "계정과목 (CoA)",
            ReferenceKind::Project => "프로젝트",
            ReferenceKind::Transaction => "거래 유형",
        }
    }

    pub fn upload_started(&self) -> String {
        format!("{} 데이터 업로드 중...", self.upper())
    }

    pub fn upload_finished(&self) -> String {
        format!("{} 데이터가 성공적으로 업로드되었습니다.", self.upper())
    }

    pub fn download_started(&self) -> String {
        format!("{} 데이터 다운로드 중...", self.upper())
    }

    pub fn download_finished(&self) -> String {
        format!("{} 데이터 다운로드가 완료되었습니다.", self.upper())
    }

    pub fn edit_pending(&self, id: &str) -> String {
        match self {
            ReferenceKind::Coa => format!("COA 계정 {} 수정 기능은 향후 구현 예정입니다.", id),
            _ => format!("{} 아이템 수정 기능은 향후 구현 예정입니다.", self.as_str()),
        }
    }

    pub fn delete_pending(&self, id: &str) -> String {
        match self {
            ReferenceKind::Coa => format!("COA 계정 {} 삭제 기능은 향후 구현 예정입니다.", id),
            _ => format!("{} 아이템 삭제 기능은 향후 구현 예정입니다.", self.as_str()),
        }
    }

    fn upper(&self) -> String {
        self.as_str().to_uppercase()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExcelRejection {
    NotExcel,
    TooLarge,
}

impl fmt::Display for ExcelRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExcelRejection::NotExcel => write!(f, "Excel 파일만 업로드 가능합니다."),
            ExcelRejection::TooLarge => write!(f, "파일 크기는 10MB 이하여야 합니다."),
        }
    }
}

/// `.xlsx` / `.xls` 이고 10MB 이하인지
pub fn validate_excel_upload(name: &str, size: u64) -> Result<(), ExcelRejection> {
    let lower = name.to_lowercase();
    if !(lower.ends_with(".xlsx") || lower.ends_with(".xls")) {
        return Err(ExcelRejection::NotExcel);
    }
    if size > MAX_EXCEL_SIZE {
        return Err(ExcelRejection::TooLarge);
    }
    Ok(())
}

use thiserror::Error;
use voucher_ai_common::{ApiError, ValidationError};

#[derive(Error, Debug)]
pub enum VoucherAiError {
    #[error("설정 오류: {0}")]
    Config(String),

    #[error(transparent)]
    Client(#[from] voucher_ai_common::Error),

    #[error("API 오류 {}", .0.describe())]
    Api(#[from] ApiError),

    #[error("파일을 찾을 수 없습니다: {0}")]
    FileNotFound(String),

    #[error("업로드할 파일이 없습니다: {0}")]
    NoFilesFound(String),

    #[error("잘못된 입력: {0}")]
    InvalidArgument(String),

    #[error("Excel 생성 오류: {0}")]
    ExcelGeneration(String),

    #[error("JSON 오류: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO 오류: {0}")]
    Io(#[from] std::io::Error),

    #[error("취소되었습니다")]
    Cancelled,
}

impl From<ValidationError> for VoucherAiError {
    fn from(e: ValidationError) -> Self {
        VoucherAiError::Client(e.into())
    }
}

pub type Result<T> = std::result::Result<T, VoucherAiError>;

use crate::error::{Result, VoucherAiError};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use voucher_ai_common::journal::{edit_value, VoucherField};
use voucher_ai_common::types::VoucherData;

#[derive(Parser)]
#[command(name = "voucher-ai")]
#[command(about = "Voucher AI 증빙 업로드 · 분개 생성 클라이언트", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 요청 로그를 출력
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// API 설정을 표시/편집
    Config {
        /// BASE_URL 설정
        #[arg(long)]
        base_url: Option<String>,

        /// TOKEN 설정 (빈 문자열이면 삭제)
        #[arg(long)]
        token: Option<String>,

        /// 설정 표시
        #[arg(long)]
        show: bool,
    },

    /// 연결 테스트 (GET /workspaces)
    Ping,

    /// 워크스페이스 관리
    Workspace {
        #[command(subcommand)]
        action: WorkspaceAction,
    },

    /// 증빙 파일 업로드 (파일 또는 폴더)
    Upload {
        /// 워크스페이스 이름
        #[arg(required = true)]
        workspace: String,

        /// 업로드할 파일/폴더
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// ZIP 파일로 업로드 (압축 해제는 서버에서)
        #[arg(long)]
        zip: bool,

        /// 허용 확장자 (".png,.jpg")
        #[arg(long)]
        allowed_ext: Option<String>,

        /// 이름 충돌 시 이름을 바꾸지 않음
        #[arg(long)]
        no_rename: bool,

        /// 하위 폴더까지 탐색
        #[arg(short = 'r', long)]
        recursive: bool,
    },

    /// 업로드된 파일 목록
    Files {
        #[arg(required = true)]
        workspace: String,
    },

    /// 파일에 프로젝트 지정 (--project 생략 시 해제)
    Assign {
        #[arg(required = true)]
        workspace: String,

        /// 프로젝트 ID
        #[arg(short, long)]
        project: Option<String>,

        /// 서버 파일 경로 (files 출력의 경로)
        #[arg(required = true)]
        server_ids: Vec<String>,
    },

    /// 분개 생성/조회
    Journal {
        #[command(subcommand)]
        action: JournalAction,
    },

    /// 증빙 데이터 조회/수정
    Voucher {
        #[command(subcommand)]
        action: VoucherAction,
    },

    /// 증빙 시각화 이미지 정보
    Visualization {
        #[arg(required = true)]
        workspace: String,

        #[arg(required = true)]
        file_id: String,
    },
}

#[derive(Subcommand)]
pub enum WorkspaceAction {
    /// 목록
    List,

    /// 생성
    Create {
        name: String,

        /// 정산 시작일 (YYYY-MM-DD)
        #[arg(long)]
        period_start: Option<String>,

        /// 정산 종료일 (YYYY-MM-DD)
        #[arg(long)]
        period_end: Option<String>,
    },

    /// 이름 변경
    Rename {
        old_name: String,
        new_name: String,

        /// 아카이브도 함께 변경
        #[arg(long)]
        include_archived: bool,
    },

    /// 삭제
    Delete {
        name: String,

        /// 확인 없이 삭제
        #[arg(short, long)]
        yes: bool,
    },

    /// 정산 기간 변경
    Period { name: String, start: String, end: String },
}

#[derive(Args, Clone)]
pub struct JournalArgs {
    /// 워크스페이스 이름
    #[arg(required = true)]
    pub workspace: String,

    /// 결과를 파일로 저장 (csv/excel/both)
    #[arg(short, long)]
    pub export: Option<ExportFormat>,

    /// 저장 디렉터리 (기본: 현재 디렉터리)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum JournalAction {
    /// OCR + 분개 생성 파이프라인 실행
    Run(JournalArgs),

    /// 저장된 분개 초안
    Drafts(JournalArgs),

    /// 증빙 데이터로 분개 다시 생성
    Refresh(JournalArgs),

    /// 분개 아카이브
    Archive {
        #[arg(required = true)]
        workspace: String,
    },
}

#[derive(Subcommand)]
pub enum VoucherAction {
    /// 조회
    Get { workspace: String, file_id: String },

    /// 수정 (key=value, key 는 date/amount/... 또는 날짜/금액/...)
    Set {
        workspace: String,
        file_id: String,

        #[arg(required = true)]
        edits: Vec<String>,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Excel,
    #[default]
    Both,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            "both" => Ok(ExportFormat::Both),
            _ => Err(format!("Unknown format: {}. Use csv, excel, or both", s)),
        }
    }
}

/// `key=value` 목록 → 백엔드 키의 수정 데이터 (ID 는 수정 불가)
pub fn parse_edits(edits: &[String]) -> Result<VoucherData> {
    let mut data = VoucherData::new();
    for edit in edits {
        let (key, value) = edit
            .split_once('=')
            .ok_or_else(|| VoucherAiError::InvalidArgument(format!("key=value 형식이 아닙니다: {}", edit)))?;
        let field = VoucherField::from_key(key)
            .ok_or_else(|| VoucherAiError::InvalidArgument(format!("알 수 없는 필드: {}", key.trim())))?;
        if field.is_read_only() {
            return Err(VoucherAiError::InvalidArgument(format!("{} 은(는) 수정할 수 없습니다", field.label())));
        }
        data.insert(field.backend_key().to_string(), edit_value(field, value));
    }
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_export_format_from_str() {
        assert_eq!("CSV".parse::<ExportFormat>(), Ok(ExportFormat::Csv));
        assert_eq!("xlsx".parse::<ExportFormat>(), Ok(ExportFormat::Excel));
        assert!("pdf".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_parse_edits() {
        let data = parse_edits(&["amount=15,000".to_string(), "거래처=카페베네".to_string()]).unwrap();
        assert_eq!(data.get("금액"), Some(&Value::from(15000)));
        assert_eq!(data.get("거래처"), Some(&Value::from("카페베네")));
    }

    #[test]
    fn test_parse_edits_rejects_bad_input() {
        assert!(matches!(parse_edits(&["amount".to_string()]), Err(VoucherAiError::InvalidArgument(_))));
        assert!(matches!(parse_edits(&["color=red".to_string()]), Err(VoucherAiError::InvalidArgument(_))));
        assert!(matches!(parse_edits(&["id=x".to_string()]), Err(VoucherAiError::InvalidArgument(_))));
    }

    #[test]
    fn test_cli_parses_upload() {
        let cli = Cli::parse_from(["voucher-ai", "upload", "wl_2025_w34", "a.jpg", "dir", "--no-rename", "-r"]);
        match cli.command {
            Commands::Upload { workspace, paths, no_rename, recursive, zip, .. } => {
                assert_eq!(workspace, "wl_2025_w34");
                assert_eq!(paths.len(), 2);
                assert!(no_rename && recursive && !zip);
            }
            _ => panic!("upload 으로 파싱되어야 함"),
        }
    }
}

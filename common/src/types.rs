//! 백엔드 응답/요청 타입

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// 워크스페이스 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkspaceStatus {
    #[default]
    Active,
    Completed,
    #[serde(other)]
    Unknown,
}

impl WorkspaceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            WorkspaceStatus::Active => "진행중",
            WorkspaceStatus::Completed => "완료",
            WorkspaceStatus::Unknown => "-",
        }
    }
}

/// 워크스페이스 (이름이 곧 식별자)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Workspace {
    #[serde(alias = "workspaceName", alias = "name")]
    pub workspace_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub status: WorkspaceStatus,
    #[serde(default, alias = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, alias = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, alias = "periodStart", skip_serializing_if = "Option::is_none")]
    pub period_start: Option<String>,
    #[serde(default, alias = "periodEnd", skip_serializing_if = "Option::is_none")]
    pub period_end: Option<String>,
}

impl Workspace {
    pub fn new(name: &str) -> Self {
        Self {
            workspace_name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.workspace_name
    }

    /// 생성일 (YYYY-MM-DD 부분만)
    pub fn created_date(&self) -> Option<&str> {
        self.created_at.as_deref().map(|s| s.get(..10).unwrap_or(s))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct WorkspaceList {
    #[serde(default)]
    pub workspaces: Vec<Workspace>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedWorkspace {
    pub workspace_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenamedWorkspace {
    pub old_name: String,
    pub new_name: String,
}

/// 업로드 파일 1건 (업로드 인덱스 레코드)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UploadedFile {
    pub rel: String,
    #[serde(default)]
    pub project: Option<String>,
    #[serde(default)]
    pub excluded: bool,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub mime: Option<String>,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl UploadedFile {
    /// 경로의 마지막 요소 (윈도우 구분자 포함)
    pub fn file_name(&self) -> &str {
        base_name(&self.rel)
    }
}

pub fn base_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct UploadedFileList {
    #[serde(default)]
    pub files: Vec<UploadedFile>,
}

/// 파일 시스템 복사 결과 (이미지: copied, ZIP: copied_abs/copied_rel)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FsResult {
    #[serde(default)]
    pub copied: Vec<String>,
    #[serde(default)]
    pub copied_abs: Vec<String>,
    #[serde(default)]
    pub copied_rel: Vec<String>,
    #[serde(default)]
    pub skipped: Vec<Value>,
    #[serde(default)]
    pub errors: Vec<Value>,
}

impl FsResult {
    /// 서버에 저장된 파일 경로 목록
    pub fn stored_paths(&self) -> &[String] {
        if !self.copied_rel.is_empty() {
            &self.copied_rel
        } else {
            &self.copied
        }
    }
}

/// 업로드 인덱스 스냅샷
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IndexState {
    #[serde(default)]
    pub version: Option<i64>,
    #[serde(default)]
    pub uploaded: Vec<String>,
    #[serde(default)]
    pub excluded: Vec<String>,
    #[serde(default)]
    pub effective: Vec<String>,
    #[serde(default)]
    pub records: Vec<UploadedFile>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResult {
    #[serde(default)]
    pub fs_result: FsResult,
    #[serde(default)]
    pub state: Option<IndexState>,
}

/// 프로젝트 (선택지용 참조 데이터)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
}

impl Project {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}

/// 분개 1행 (백엔드의 한글 키를 그대로 사용)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JournalEntry {
    #[serde(rename = "회사코드", default, deserialize_with = "loose_string")]
    pub company_code: String,
    #[serde(rename = "회사명", default, deserialize_with = "loose_string")]
    pub company_name: String,
    #[serde(rename = "회계일자", default, deserialize_with = "loose_string")]
    pub date: String,
    #[serde(rename = "묶음번호", default, deserialize_with = "loose_i64")]
    pub batch_no: i64,
    #[serde(rename = "전표차수", default, deserialize_with = "loose_i64")]
    pub line_no: i64,
    #[serde(rename = "전표유형", default, deserialize_with = "loose_string")]
    pub voucher_type: String,
    #[serde(rename = "작성부서", default, deserialize_with = "loose_string")]
    pub department: String,
    #[serde(rename = "작성자", default, deserialize_with = "loose_string")]
    pub writer: String,
    #[serde(rename = "상태", default, deserialize_with = "loose_string")]
    pub state: String,
    #[serde(rename = "통화", default, deserialize_with = "loose_string")]
    pub currency: String,
    #[serde(rename = "증빙유형", default, deserialize_with = "loose_string")]
    pub evidence_type: String,
    #[serde(rename = "생성일시", default, deserialize_with = "loose_string")]
    pub created_at: String,
    #[serde(rename = "수정일시", default, deserialize_with = "loose_string")]
    pub updated_at: String,
    #[serde(rename = "승인일시", default, deserialize_with = "loose_string")]
    pub approved_at: String,
    #[serde(rename = "생성자", default, deserialize_with = "loose_string")]
    pub created_by: String,
    #[serde(rename = "수정자", default, deserialize_with = "loose_string")]
    pub updated_by: String,
    #[serde(rename = "승인자", default, deserialize_with = "loose_string")]
    pub approved_by: String,
    #[serde(rename = "차변/대변구분", default, deserialize_with = "loose_string")]
    pub side: String,
    #[serde(rename = "계정과목", default, deserialize_with = "loose_string")]
    pub account_title: String,
    #[serde(rename = "계정코드", default, deserialize_with = "loose_string")]
    pub account_code: String,
    #[serde(rename = "금액", default, deserialize_with = "loose_i64")]
    pub amount: i64,
    #[serde(rename = "거래처코드", default, deserialize_with = "loose_string")]
    pub customer_code: String,
    #[serde(rename = "거래처명", default, deserialize_with = "loose_string")]
    pub customer_name: String,
    #[serde(rename = "사업자등록번호", default, deserialize_with = "loose_string")]
    pub biz_no: String,
    #[serde(rename = "적요", default, deserialize_with = "loose_string")]
    pub memo: String,
    #[serde(rename = "차변", default, deserialize_with = "loose_i64")]
    pub debit: i64,
    #[serde(rename = "대변", default, deserialize_with = "loose_i64")]
    pub credit: i64,
    #[serde(rename = "프로젝트코드", default, deserialize_with = "loose_string")]
    pub project_code: String,
    #[serde(rename = "프로젝트명", default, deserialize_with = "loose_string")]
    pub project_name: String,
    #[serde(rename = "사용부서명", default, deserialize_with = "loose_string")]
    pub using_department: String,
    #[serde(rename = "지출유형", default, deserialize_with = "loose_string")]
    pub expense_type: String,
    #[serde(default, alias = "fileId", skip_serializing_if = "Option::is_none")]
    pub file_id: Option<String>,
}

/// 문자열/숫자/null 을 모두 문자열로 받는다
fn loose_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

/// 숫자 또는 숫자 문자열 ("15,000" 포함)
fn loose_i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.round() as i64)).unwrap_or(0),
        Value::String(s) => s.replace(',', "").trim().parse::<f64>().map(|f| f.round() as i64).unwrap_or(0),
        _ => 0,
    })
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct JournalList {
    #[serde(default)]
    pub journal: Vec<JournalEntry>,
}

/// OCR + 분개 파이프라인 실행 결과
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineResult {
    #[serde(default)]
    pub ocr_results: Value,
    #[serde(default)]
    pub llm_results: Value,
    #[serde(default)]
    pub journal_path: Option<String>,
    #[serde(default)]
    pub visualizations: Value,
    #[serde(default)]
    pub journal: Vec<JournalEntry>,
}

/// 배열 길이 또는 객체 키 수
pub fn value_count(value: &Value) -> Option<usize> {
    match value {
        Value::Array(items) => Some(items.len()),
        Value::Object(map) => Some(map.len()),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveResult {
    pub archive_path: String,
    #[serde(default)]
    pub workspace_name: Option<String>,
}

/// 증빙 1건에서 추출된 필드 (키는 백엔드 그대로)
pub type VoucherData = BTreeMap<String, Value>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoucherRecord {
    pub file_id: String,
    #[serde(default)]
    pub voucher_data: VoucherData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoucherUpdate {
    pub file_id: String,
    #[serde(default)]
    pub edits: VoucherData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visualization {
    pub file_id: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub fs_path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_workspace_from_backend() {
        let ws: Workspace = serde_json::from_value(json!({
            "workspace_name": "wl_2025_w34",
            "path": "/data/wl_2025_w34",
            "archived": false,
            "status": "active",
            "created_at": "2025-08-18T09:00:00",
            "updated_at": null
        }))
        .unwrap();
        assert_eq!(ws.name(), "wl_2025_w34");
        assert_eq!(ws.status, WorkspaceStatus::Active);
        assert_eq!(ws.created_date(), Some("2025-08-18"));
    }

    #[test]
    fn test_workspace_unknown_status() {
        let ws: Workspace = serde_json::from_value(json!({"name": "a", "status": "draft"})).unwrap();
        assert_eq!(ws.status, WorkspaceStatus::Unknown);
    }

    #[test]
    fn test_journal_entry_korean_keys() {
        let entry: JournalEntry = serde_json::from_value(json!({
            "회계일자": "2025-08-20",
            "묶음번호": 1,
            "차변/대변구분": "차변",
            "계정과목": "복리후생비",
            "금액": "15,000",
            "거래처명": "카페베네",
            "차변": 15000,
            "대변": 0,
            "file_id": "receipt_001.jpg"
        }))
        .unwrap();
        assert_eq!(entry.date, "2025-08-20");
        assert_eq!(entry.amount, 15000);
        assert_eq!(entry.side, "차변");
        assert_eq!(entry.file_id.as_deref(), Some("receipt_001.jpg"));
        assert_eq!(entry.memo, "");
    }

    #[test]
    fn test_upload_result_zip_shape() {
        let result: UploadResult = serde_json::from_value(json!({
            "fsResult": {
                "copied_abs": ["/w/input_files/a.jpg"],
                "copied_rel": ["input_files/a.jpg"],
                "skipped": [{"name": "a.txt", "reason": "ext_denied"}],
                "errors": []
            },
            "state": {"version": 3, "records": [{"rel": "input_files/a.jpg", "project": null}]}
        }))
        .unwrap();
        assert_eq!(result.fs_result.stored_paths(), ["input_files/a.jpg".to_string()]);
        assert_eq!(result.state.unwrap().version, Some(3));
    }

    #[test]
    fn test_base_name() {
        assert_eq!(base_name("input_files/a.jpg"), "a.jpg");
        assert_eq!(base_name("C:\\ws\\b.png"), "b.png");
        assert_eq!(base_name("c.pdf"), "c.pdf");
    }
}

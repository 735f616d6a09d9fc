//! 분개 테이블 / 파이프라인 카운터 / 증빙 수정 폼

use serde_json::Value;

use crate::types::{value_count, JournalEntry, PipelineResult, VoucherData};

/// 분개 테이블. 새 결과가 오면 통째로 교체한다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JournalTable {
    entries: Vec<JournalEntry>,
    generation: u64,
}

impl JournalTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&mut self, entries: Vec<JournalEntry>) {
        self.entries = entries;
        self.generation += 1;
    }

    /// replace 할 때마다 증가 (화면 행 키에 사용)
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&JournalEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_debit(&self) -> i64 {
        self.entries.iter().map(|e| e.debit).sum()
    }

    pub fn total_credit(&self) -> i64 {
        self.entries.iter().map(|e| e.credit).sum()
    }

    /// 차변 합계와 대변 합계가 같은지
    pub fn is_balanced(&self) -> bool {
        self.total_debit() == self.total_credit()
    }
}

/// 파이프라인 응답에 들어있는 처리 건수 (없으면 None)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineCounters {
    pub ocr: Option<usize>,
    pub llm: Option<usize>,
    pub visualizations: Option<usize>,
}

impl PipelineCounters {
    pub fn from_result(result: &PipelineResult) -> Self {
        Self {
            ocr: value_count(&result.ocr_results),
            llm: value_count(&result.llm_results),
            visualizations: value_count(&result.visualizations),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ocr.is_none() && self.llm.is_none() && self.visualizations.is_none()
    }

    pub fn summary(&self) -> String {
        let parts: Vec<String> = [("OCR", self.ocr), ("LLM", self.llm), ("시각화", self.visualizations)]
            .iter()
            .filter_map(|(name, count)| count.map(|c| format!("{} {}건", name, c)))
            .collect();
        parts.join(" / ")
    }
}

/// 증빙 수정 폼의 필드
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VoucherField {
    Id,
    Date,
    Amount,
    Type,
    BizNo,
    Representative,
    Address,
    EvidenceType,
    AccountTitle,
    AccountCode,
    ProjectName,
    CustomerCode,
    CustomerName,
}

impl VoucherField {
    pub const ALL: [VoucherField; 13] = [
        VoucherField::Id,
        VoucherField::Date,
        VoucherField::Amount,
        VoucherField::Type,
        VoucherField::BizNo,
        VoucherField::Representative,
        VoucherField::Address,
        VoucherField::EvidenceType,
        VoucherField::AccountTitle,
        VoucherField::AccountCode,
        VoucherField::ProjectName,
        VoucherField::CustomerCode,
        VoucherField::CustomerName,
    ];

    /// 폼 입력 키
    pub fn key(&self) -> &'static str {
        match self {
            VoucherField::Id => "id",
            VoucherField::Date => "date",
            VoucherField::Amount => "amount",
            VoucherField::Type => "type",
            VoucherField::BizNo => "biz_no",
            VoucherField::Representative => "representative",
            VoucherField::Address => "address",
            VoucherField::EvidenceType => "evidence_type",
            VoucherField::AccountTitle => "account_title",
            VoucherField::AccountCode => "account_code",
            VoucherField::ProjectName => "project_name",
            VoucherField::CustomerCode => "customer_code",
            VoucherField::CustomerName => "customer_name",
        }
    }

    /// 백엔드 증빙 데이터의 키
    pub fn backend_key(&self) -> &'static str {
        match self {
            VoucherField::Id => "id",
            VoucherField::Date => "날짜",
            VoucherField::Amount => "금액",
            VoucherField::Type => "유형",
            VoucherField::BizNo => "사업자등록번호",
            VoucherField::Representative => "대표자",
            VoucherField::Address => "주소",
            VoucherField::EvidenceType => "증빙유형",
            VoucherField::AccountTitle => "계정과목",
            VoucherField::AccountCode => "계정코드",
            VoucherField::ProjectName => "프로젝트명",
            VoucherField::CustomerCode => "거래처코드",
            VoucherField::CustomerName => "거래처",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VoucherField::Id => "ID",
            VoucherField::Date => "날짜",
            VoucherField::Amount => "금액",
            VoucherField::Type => "유형",
            VoucherField::BizNo => "사업자등록번호",
            VoucherField::Representative => "대표자",
            VoucherField::Address => "주소",
            VoucherField::EvidenceType => "증빙유형",
            VoucherField::AccountTitle => "계정과목",
            VoucherField::AccountCode => "계정코드",
            VoucherField::ProjectName => "프로젝트명",
            VoucherField::CustomerCode => "거래처코드",
            VoucherField::CustomerName => "거래처명",
        }
    }

    /// 폼 키 또는 백엔드 키로 찾는다
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL
            .into_iter()
            .find(|f| f.key() == key || f.backend_key() == key)
    }

    pub fn is_read_only(&self) -> bool {
        matches!(self, VoucherField::Id)
    }
}

/// 증빙 수정 폼
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoucherForm {
    pub file_id: String,
    values: Vec<(VoucherField, String)>,
}

impl VoucherForm {
    /// 백엔드 키/폼 키 어느 쪽이든 값이 있으면 채운다
    pub fn from_voucher(file_id: &str, data: &VoucherData) -> Self {
        let values = VoucherField::ALL
            .into_iter()
            .map(|field| {
                let value = data
                    .get(field.key())
                    .or_else(|| data.get(field.backend_key()))
                    .map(display_value)
                    .unwrap_or_default();
                (field, value)
            })
            .collect();
        let mut form = Self {
            file_id: file_id.to_string(),
            values,
        };
        if form.get(VoucherField::Id).is_empty() {
            form.set(VoucherField::Id, file_id);
        }
        form
    }

    pub fn get(&self, field: VoucherField) -> &str {
        self.values
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }

    pub fn set(&mut self, field: VoucherField, value: &str) {
        if let Some(entry) = self.values.iter_mut().find(|(f, _)| *f == field) {
            entry.1 = value.to_string();
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = (VoucherField, &str)> {
        self.values.iter().map(|(f, v)| (*f, v.as_str()))
    }

    /// 원본과 다른 필드만 백엔드 키로 모은다 (ID 제외)
    pub fn edits_since(&self, original: &VoucherForm) -> VoucherData {
        self.fields()
            .filter(|(field, value)| !field.is_read_only() && original.get(*field) != *value)
            .map(|(field, value)| (field.backend_key().to_string(), edit_value(field, value)))
            .collect()
    }
}

/// 백엔드로 보낼 값 (금액은 숫자로)
pub fn edit_value(field: VoucherField, value: &str) -> Value {
    if field == VoucherField::Amount {
        if let Ok(amount) = value.replace(',', "").trim().parse::<i64>() {
            return Value::from(amount);
        }
    }
    Value::from(value.trim())
}

fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

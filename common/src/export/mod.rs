//! 내보내기 (CSV / Excel)
//!
//! 표 형태의 데이터를 `Cell` 행 목록으로 만든 다음 형식별 writer 에 넘긴다.

pub mod csv;

#[cfg(feature = "excel")]
pub mod excel_core;

use std::fmt;

use crate::types::JournalEntry;

/// 셀 값 (Excel 에서는 숫자를 숫자 셀로 쓴다)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Number(i64),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            Cell::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Number(value)
    }
}

/// 분개 전체 내보내기 컬럼 (백엔드 키 순서)
pub const JOURNAL_COLUMNS: [&str; 31] = [
    "회사코드", "회사명", "회계일자", "묶음번호", "전표차수", "전표유형", "작성부서", "작성자",
    "상태", "통화", "증빙유형", "생성일시", "수정일시", "승인일시", "생성자", "수정자", "승인자",
    "차변/대변구분", "계정과목", "계정코드", "금액", "거래처코드", "거래처명", "사업자등록번호",
    "적요", "차변", "대변", "프로젝트코드", "프로젝트명", "사용부서명", "지출유형",
];

pub fn journal_cells(entry: &JournalEntry) -> Vec<Cell> {
    let text = |s: &str| Cell::from(s);
    vec![
        text(&entry.company_code),
        text(&entry.company_name),
        text(&entry.date),
        Cell::Number(entry.batch_no),
        Cell::Number(entry.line_no),
        text(&entry.voucher_type),
        text(&entry.department),
        text(&entry.writer),
        text(&entry.state),
        text(&entry.currency),
        text(&entry.evidence_type),
        text(&entry.created_at),
        text(&entry.updated_at),
        text(&entry.approved_at),
        text(&entry.created_by),
        text(&entry.updated_by),
        text(&entry.approved_by),
        text(&entry.side),
        text(&entry.account_title),
        text(&entry.account_code),
        Cell::Number(entry.amount),
        text(&entry.customer_code),
        text(&entry.customer_name),
        text(&entry.biz_no),
        text(&entry.memo),
        Cell::Number(entry.debit),
        Cell::Number(entry.credit),
        text(&entry.project_code),
        text(&entry.project_name),
        text(&entry.using_department),
        text(&entry.expense_type),
    ]
}

pub fn journal_rows(entries: &[JournalEntry]) -> Vec<Vec<Cell>> {
    entries.iter().map(journal_cells).collect()
}

/// 내보내기 파일명 (`journal_export_2025-08-26.csv`)
pub fn export_file_name(date: chrono::NaiveDate, extension: &str) -> String {
    format!("journal_export_{}.{}", date.format("%Y-%m-%d"), extension)
}

/// 오늘(로컬 시간) 날짜의 내보내기 파일명
pub fn export_file_name_today(extension: &str) -> String {
    export_file_name(chrono::Local::now().date_naive(), extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_journal_cells_match_columns() {
        let entry = JournalEntry {
            amount: 15000,
            customer_name: "카페베네".to_string(),
            ..JournalEntry::default()
        };
        let cells = journal_cells(&entry);
        assert_eq!(cells.len(), JOURNAL_COLUMNS.len());
        let amount_index = JOURNAL_COLUMNS.iter().position(|c| *c == "금액").unwrap();
        assert_eq!(cells[amount_index], Cell::Number(15000));
        let customer_index = JOURNAL_COLUMNS.iter().position(|c| *c == "거래처명").unwrap();
        assert_eq!(cells[customer_index].to_string(), "카페베네");
    }

    #[test]
    fn test_export_file_name() {
        let date = chrono::NaiveDate::from_ymd_opt(2025, 8, 26).unwrap();
        assert_eq!(export_file_name(date, "csv"), "journal_export_2025-08-26.csv");
    }
}

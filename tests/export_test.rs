//! 분개 CSV/Excel 내보내기 통합 테스트

use chrono::NaiveDate;
use voucher_ai::cli::ExportFormat;
use voucher_ai::export::{export_journal, write_csv, write_excel};
use voucher_ai_common::JournalEntry;
use tempfile::tempdir;

fn create_test_entry(index: i64) -> JournalEntry {
    JournalEntry {
        date: "2025-08-20".to_string(),
        batch_no: 1,
        line_no: index,
        side: if index % 2 == 1 { "차변" } else { "대변" }.to_string(),
        account_title: "복리후생비".to_string(),
        account_code: "81100".to_string(),
        amount: 15000,
        customer_name: "카페베네, 강남점".to_string(),
        memo: format!("회의 음료 {}", index),
        debit: if index % 2 == 1 { 15000 } else { 0 },
        credit: if index % 2 == 1 { 0 } else { 15000 },
        ..JournalEntry::default()
    }
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 8, 26).unwrap()
}

#[test]
fn test_csv_has_bom_header_and_quoted_cells() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("journal.csv");
    let entries: Vec<JournalEntry> = (1..=2).map(create_test_entry).collect();

    write_csv(&entries, &path).expect("CSV 생성 실패");

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..3], &[0xEF, 0xBB, 0xBF]);
    let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
    let mut lines = text.lines();
    assert!(lines.next().unwrap().starts_with("회사코드,회사명,회계일자"));
    assert!(text.contains("\"카페베네, 강남점\""));
    assert_eq!(text.lines().filter(|l| !l.is_empty()).count(), 3);
}

#[test]
fn test_excel_is_xlsx_zip() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("journal.xlsx");

    write_excel(&[create_test_entry(1)], &path).expect("Excel 생성 실패");

    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.len() > 100);
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn test_export_both_formats() {
    let dir = tempdir().expect("Failed to create temp dir");
    let out = dir.path().join("out");
    let entries: Vec<JournalEntry> = (1..=4).map(create_test_entry).collect();

    let written = export_journal(&entries, &ExportFormat::Both, &out, date()).unwrap();

    let names: Vec<String> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["journal_export_2025-08-26.csv", "journal_export_2025-08-26.xlsx"]);
    assert!(written.iter().all(|p| p.exists()));
}

#[test]
fn test_export_empty_journal_writes_header_only() {
    let dir = tempdir().expect("Failed to create temp dir");

    let written = export_journal(&[], &ExportFormat::Csv, dir.path(), date()).unwrap();

    assert_eq!(written.len(), 1);
    let text = std::fs::read_to_string(&written[0]).unwrap();
    assert_eq!(text.trim_start_matches('\u{feff}').lines().count(), 1);
}

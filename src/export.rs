//! 분개 파일 내보내기 (CSV / Excel)

use crate::cli::ExportFormat;
use crate::error::{Result, VoucherAiError};
use std::path::{Path, PathBuf};
use voucher_ai_common::export::csv::{build_csv, with_bom};
use voucher_ai_common::export::excel_core::generate_excel_buffer;
use voucher_ai_common::export::{export_file_name, journal_rows, JOURNAL_COLUMNS};
use voucher_ai_common::JournalEntry;

/// BOM 포함 CSV (Excel 에서 한글이 깨지지 않도록)
pub fn write_csv(entries: &[JournalEntry], output_path: &Path) -> Result<()> {
    let csv = build_csv(&JOURNAL_COLUMNS, &journal_rows(entries));
    std::fs::write(output_path, with_bom(&csv))?;
    Ok(())
}

pub fn write_excel(entries: &[JournalEntry], output_path: &Path) -> Result<()> {
    let buffer = generate_excel_buffer(&JOURNAL_COLUMNS, &journal_rows(entries))
        .map_err(VoucherAiError::ExcelGeneration)?;
    std::fs::write(output_path, buffer)?;
    Ok(())
}

/// `journal_export_{날짜}.{csv,xlsx}` 로 저장하고 만든 경로를 돌려준다
pub fn export_journal(
    entries: &[JournalEntry],
    format: &ExportFormat,
    output_dir: &Path,
    date: chrono::NaiveDate,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(output_dir)?;
    let mut written = Vec::new();

    if matches!(format, ExportFormat::Csv | ExportFormat::Both) {
        let path = output_dir.join(export_file_name(date, "csv"));
        write_csv(entries, &path)?;
        written.push(path);
    }
    if matches!(format, ExportFormat::Excel | ExportFormat::Both) {
        let path = output_dir.join(export_file_name(date, "xlsx"));
        write_excel(entries, &path)?;
        written.push(path);
    }
    Ok(written)
}

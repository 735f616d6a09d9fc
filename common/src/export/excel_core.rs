//! Excel 생성 (공통 라이브러리)
//!
//! 헤더 1행 + 데이터 행의 단일 시트. 숫자 셀은 천 단위 구분 서식으로 쓴다.

use rust_xlsxwriter::*;

use super::Cell;

const SHEET_NAME: &str = "분개";

/// Excel 을 버퍼에 생성
pub fn generate_excel_buffer<H: AsRef<str>>(header: &[H], rows: &[Vec<Cell>]) -> Result<Vec<u8>, String> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_font_size(10.0)
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA));

    let text_format = Format::new()
        .set_font_size(10.0)
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC));

    let number_format = Format::new()
        .set_font_size(10.0)
        .set_num_format("#,##0")
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC));

    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(SHEET_NAME)
        .map_err(|e| format!("시트 이름 설정 오류: {}", e))?;

    for (col, title) in header.iter().enumerate() {
        let col = col as u16;
        worksheet
            .write_string_with_format(0, col, title.as_ref(), &header_format)
            .map_err(|e| format!("헤더 쓰기 오류: {}", e))?;
        let width = (title.as_ref().chars().count() as f64 * 2.2).max(10.0);
        worksheet
            .set_column_width(col, width)
            .map_err(|e| format!("열 너비 설정 오류: {}", e))?;
    }

    for (i, row) in rows.iter().enumerate() {
        let row_index = (i + 1) as u32;
        for (col, cell) in row.iter().enumerate() {
            let col = col as u16;
            match cell {
                Cell::Text(s) => worksheet.write_string_with_format(row_index, col, s, &text_format),
                Cell::Number(n) => worksheet.write_number_with_format(row_index, col, *n as f64, &number_format),
            }
            .map_err(|e| format!("셀 쓰기 오류 ({}, {}): {}", row_index, col, e))?;
        }
    }

    worksheet
        .set_freeze_panes(1, 0)
        .map_err(|e| format!("틀 고정 오류: {}", e))?;

    workbook
        .save_to_buffer()
        .map_err(|e| format!("Excel 저장 오류: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generates_xlsx_zip() {
        let rows = vec![vec![Cell::from("카페베네"), Cell::Number(15000)]];
        let buffer = generate_excel_buffer(&["거래처명", "금액"], &rows).unwrap();
        // xlsx 는 zip 컨테이너
        assert_eq!(&buffer[..2], b"PK");
    }

    #[test]
    fn test_empty_rows() {
        let rows: Vec<Vec<Cell>> = Vec::new();
        assert!(generate_excel_buffer(&["a"], &rows).is_ok());
    }
}

//! CSV 생성

use super::Cell;

/// `,` `"` 개행이 들어있는 필드만 따옴표로 감싼다
pub fn escape_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// 헤더 1줄 + 데이터 행. 줄 구분은 `\n`, 마지막 개행 없음.
pub fn build_csv<H: AsRef<str>>(header: &[H], rows: &[Vec<Cell>]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(
        header
            .iter()
            .map(|h| escape_field(h.as_ref()))
            .collect::<Vec<_>>()
            .join(","),
    );
    for row in rows {
        lines.push(
            row.iter()
                .map(|cell| escape_field(&cell.to_string()))
                .collect::<Vec<_>>()
                .join(","),
        );
    }
    lines.join("\n")
}

/// Excel 에서 한글이 깨지지 않도록 BOM 을 붙인 바이트
pub fn with_bom(csv: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(csv.len() + 3);
    bytes.extend_from_slice(&[0xEF, 0xBB, 0xBF]);
    bytes.extend_from_slice(csv.as_bytes());
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_and_rows() {
        let rows = vec![
            vec![Cell::from("2025-08-20"), Cell::Number(15000)],
            vec![Cell::from("2025-08-21"), Cell::Number(8500)],
        ];
        let csv = build_csv(&["발생일", "금액"], &rows);
        assert_eq!(csv, "발생일,금액\n2025-08-20,15000\n2025-08-21,8500");
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape_field("음원제작_작곡,편곡"), "\"음원제작_작곡,편곡\"");
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_field("plain"), "plain");
    }

    #[test]
    fn test_header_only() {
        assert_eq!(build_csv(&["a", "b"], &[]), "a,b");
    }

    #[test]
    fn test_bom() {
        let bytes = with_bom("a");
        assert_eq!(bytes, vec![0xEF, 0xBB, 0xBF, b'a']);
    }
}

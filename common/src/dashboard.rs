//! 대시보드 상태: 워크스페이스 필터/정렬, 분개 미리보기, 컬럼 표시, CSV

use std::collections::BTreeSet;

use crate::export::csv::build_csv;
use crate::export::Cell;
use crate::reference::{SampleJournal, SAMPLE_JOURNALS};
use crate::types::Workspace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOption {
    #[default]
    Recent,
    Name,
    Oldest,
}

impl SortOption {
    pub const ALL: [SortOption; 3] = [SortOption::Recent, SortOption::Name, SortOption::Oldest];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Recent => "recent",
            SortOption::Name => "name",
            SortOption::Oldest => "oldest",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOption::Recent => "최근 순",
            SortOption::Name => "이름 순",
            SortOption::Oldest => "오래된 순",
        }
    }

    /// select 값 → 정렬 (모르는 값은 최근 순)
    pub fn from_value(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.as_str() == value)
            .unwrap_or_default()
    }
}

/// 워크스페이스 목록 필터
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkspaceFilter {
    pub search: String,
    /// YYYY-MM-DD
    pub date_from: String,
    pub date_to: String,
    pub sort: SortOption,
}

impl WorkspaceFilter {
    /// 검색어(이름 부분 일치, 대소문자 무시) + 기간 + 정렬
    ///
    /// 기간은 정산 기간이 있으면 그것을, 없으면 생성일을 기준으로 비교한다.
    pub fn apply(&self, workspaces: &[Workspace]) -> Vec<Workspace> {
        let needle = self.search.trim().to_lowercase();
        let from = self.date_from.trim();
        let to = self.date_to.trim();

        let mut result: Vec<Workspace> = workspaces
            .iter()
            .filter(|w| needle.is_empty() || w.name().to_lowercase().contains(&needle))
            .filter(|w| {
                from.is_empty()
                    || w.period_start
                        .as_deref()
                        .or(w.created_date())
                        .is_some_and(|d| date_part(d) >= from)
            })
            .filter(|w| {
                to.is_empty()
                    || w.period_end
                        .as_deref()
                        .or(w.created_date())
                        .is_some_and(|d| date_part(d) <= to)
            })
            .cloned()
            .collect();

        match self.sort {
            SortOption::Recent => result.sort_by(|a, b| recency_key(b).cmp(recency_key(a))),
            SortOption::Oldest => result.sort_by(|a, b| recency_key(a).cmp(recency_key(b))),
            SortOption::Name => result.sort_by(|a, b| a.name().cmp(b.name())),
        }
        result
    }

    pub fn is_active(&self) -> bool {
        !self.search.trim().is_empty() || !self.date_from.is_empty() || !self.date_to.is_empty()
    }
}

/// 앞 10자 (YYYY-MM-DD). 글자 경계가 아니면 문자열 전체.
fn date_part(d: &str) -> &str {
    d.get(..10).unwrap_or(d)
}

fn recency_key(w: &Workspace) -> &str {
    w.updated_at
        .as_deref()
        .or(w.created_at.as_deref())
        .unwrap_or("")
}

/// 워크스페이스 카드 (맨 앞에 "새 워크스페이스" 자리표시 카드)
#[derive(Debug, Clone, PartialEq)]
pub enum WorkspaceCard {
    Placeholder,
    Workspace(Workspace),
}

pub fn workspace_cards(workspaces: Vec<Workspace>) -> Vec<WorkspaceCard> {
    std::iter::once(WorkspaceCard::Placeholder)
        .chain(workspaces.into_iter().map(WorkspaceCard::Workspace))
        .collect()
}

/// 미리보기 표 컬럼
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum JournalColumn {
    Date,
    Customer,
    Amount,
    Type,
    Account,
    Artist,
    Memo,
    Source,
}

impl JournalColumn {
    pub const ALL: [JournalColumn; 8] = [
        JournalColumn::Date,
        JournalColumn::Customer,
        JournalColumn::Amount,
        JournalColumn::Type,
        JournalColumn::Account,
        JournalColumn::Artist,
        JournalColumn::Memo,
        JournalColumn::Source,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            JournalColumn::Date => "date",
            JournalColumn::Customer => "customer",
            JournalColumn::Amount => "amount",
            JournalColumn::Type => "type",
            JournalColumn::Account => "account",
            JournalColumn::Artist => "artist",
            JournalColumn::Memo => "memo",
            JournalColumn::Source => "source",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            JournalColumn::Date => "발생일",
            JournalColumn::Customer => "거래처",
            JournalColumn::Amount => "금액",
            JournalColumn::Type => "유형",
            JournalColumn::Account => "계정과목",
            JournalColumn::Artist => "아티스트",
            JournalColumn::Memo => "메모",
            JournalColumn::Source => "출처",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }

    /// 표에 표시할 문자열 (금액은 ₩ 서식, 빈 값은 "-")
    pub fn display(&self, row: &SampleJournal) -> String {
        match self {
            JournalColumn::Amount => format_won(row.amount),
            _ => or_dash(self.raw(row)).to_string(),
        }
    }

    /// CSV 셀 (금액은 숫자 그대로)
    pub fn cell(&self, row: &SampleJournal) -> Cell {
        match self {
            JournalColumn::Amount => Cell::Number(row.amount),
            _ => Cell::from(or_dash(self.raw(row))),
        }
    }

    fn raw<'a>(&self, row: &'a SampleJournal) -> &'a str {
        match self {
            JournalColumn::Date => row.date,
            JournalColumn::Customer => row.customer,
            JournalColumn::Type => row.kind,
            JournalColumn::Account => row.account,
            JournalColumn::Artist => row.artist,
            JournalColumn::Memo => row.memo,
            JournalColumn::Source => row.source_file,
            JournalColumn::Amount => "",
        }
    }
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

/// 15000 → "₩15,000"
pub fn format_won(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if amount < 0 {
        format!("-₩{}", grouped)
    } else {
        format!("₩{}", grouped)
    }
}

/// 표시 컬럼 집합 (항상 고정 순서로 돌려준다)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSet {
    visible: BTreeSet<JournalColumn>,
}

impl Default for ColumnSet {
    fn default() -> Self {
        Self {
            visible: [
                JournalColumn::Date,
                JournalColumn::Customer,
                JournalColumn::Amount,
                JournalColumn::Type,
                JournalColumn::Account,
                JournalColumn::Source,
            ]
            .into_iter()
            .collect(),
        }
    }
}

impl ColumnSet {
    pub fn only(columns: &[JournalColumn]) -> Self {
        Self {
            visible: columns.iter().copied().collect(),
        }
    }

    pub fn toggle(&mut self, column: JournalColumn, visible: bool) {
        if visible {
            self.visible.insert(column);
        } else {
            self.visible.remove(&column);
        }
    }

    pub fn is_visible(&self, column: JournalColumn) -> bool {
        self.visible.contains(&column)
    }

    pub fn visible(&self) -> Vec<JournalColumn> {
        self.visible.iter().copied().collect()
    }
}

/// 선택한 워크스페이스의 분개 미리보기 (내장 샘플 데이터 기준)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JournalPreview {
    selected: BTreeSet<String>,
}

impl JournalPreview {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, workspace: &str, selected: bool) {
        if selected {
            self.selected.insert(workspace.to_string());
        } else {
            self.selected.remove(workspace);
        }
    }

    pub fn is_selected(&self, workspace: &str) -> bool {
        self.selected.contains(workspace)
    }

    pub fn selected(&self) -> impl Iterator<Item = &str> {
        self.selected.iter().map(String::as_str)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// 선택된 워크스페이스의 샘플 행 (원래 순서)
    pub fn rows(&self) -> Vec<&'static SampleJournal> {
        SAMPLE_JOURNALS
            .iter()
            .filter(|j| self.selected.contains(j.workspace))
            .collect()
    }

    /// (건수, 합계 금액)
    pub fn summary(&self) -> (usize, i64) {
        let rows = self.rows();
        (rows.len(), rows.iter().map(|j| j.amount).sum())
    }

    /// `worklogIds=a,b` 쿼리 값
    pub fn to_query_value(&self) -> Option<String> {
        if self.selected.is_empty() {
            None
        } else {
            Some(self.selected.iter().cloned().collect::<Vec<_>>().join(","))
        }
    }

    pub fn from_query_value(value: &str) -> Self {
        Self {
            selected: value
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

/// 보이는 컬럼만으로 CSV 를 만든다
pub fn preview_csv(columns: &[JournalColumn], rows: &[&SampleJournal]) -> String {
    let header: Vec<&str> = columns.iter().map(|c| c.label()).collect();
    let body: Vec<Vec<Cell>> = rows
        .iter()
        .map(|row| columns.iter().map(|c| c.cell(row)).collect())
        .collect();
    build_csv(&header, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::fallback_workspaces;

    fn ws(name: &str, created: &str) -> Workspace {
        Workspace {
            created_at: Some(created.to_string()),
            ..Workspace::new(name)
        }
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let list = vec![ws("Alpha", "2025-08-01"), ws("beta", "2025-08-02")];
        let filter = WorkspaceFilter {
            search: "ALP".to_string(),
            ..WorkspaceFilter::default()
        };
        let result = filter.apply(&list);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name(), "Alpha");
    }

    #[test]
    fn test_date_range_on_created() {
        let list = vec![
            ws("a", "2025-07-30T10:00:00"),
            ws("b", "2025-08-05T10:00:00"),
            ws("c", "2025-08-20T10:00:00"),
        ];
        let filter = WorkspaceFilter {
            date_from: "2025-08-01".to_string(),
            date_to: "2025-08-10".to_string(),
            ..WorkspaceFilter::default()
        };
        let names: Vec<String> = filter.apply(&list).into_iter().map(|w| w.workspace_name).collect();
        assert_eq!(names, ["b"]);
    }

    #[test]
    fn test_date_range_prefers_period() {
        let filter = WorkspaceFilter {
            date_from: "2025-08-11".to_string(),
            ..WorkspaceFilter::default()
        };
        let names: Vec<String> = filter
            .apply(&fallback_workspaces())
            .into_iter()
            .map(|w| w.workspace_name)
            .collect();
        assert_eq!(names, ["wl_2025_w34", "wl_2025_w33"]);
    }

    #[test]
    fn test_date_to_on_period_end() {
        let mut in_range = ws("in", "2025-08-01");
        in_range.period_end = Some("2025-08-31T23:59:59".to_string());
        let mut free_form = ws("free", "2025-08-01");
        free_form.period_end = Some("2025년8월31일".to_string());
        let mut late = ws("late", "2025-08-01");
        late.period_start = Some("2025-09-15T00:00:00".to_string());
        late.period_end = Some("2025-09-30".to_string());

        let filter = WorkspaceFilter {
            date_to: "2025-09-01".to_string(),
            ..WorkspaceFilter::default()
        };
        let names: Vec<String> = filter
            .apply(&[in_range.clone(), free_form.clone(), late.clone()])
            .into_iter()
            .map(|w| w.workspace_name)
            .collect();
        assert_eq!(names, ["in"]);

        let filter = WorkspaceFilter {
            date_from: "2025-09-15".to_string(),
            ..WorkspaceFilter::default()
        };
        let names: Vec<String> = filter
            .apply(&[in_range, free_form, late])
            .into_iter()
            .map(|w| w.workspace_name)
            .collect();
        assert_eq!(names, ["late"]);
    }

    #[test]
    fn test_sorting() {
        let list = vec![ws("b", "2025-08-02"), ws("c", "2025-08-03"), ws("a", "2025-08-01")];
        let names = |sort| -> Vec<String> {
            WorkspaceFilter {
                sort,
                ..WorkspaceFilter::default()
            }
            .apply(&list)
            .into_iter()
            .map(|w| w.workspace_name)
            .collect()
        };
        assert_eq!(names(SortOption::Recent), ["c", "b", "a"]);
        assert_eq!(names(SortOption::Oldest), ["a", "b", "c"]);
        assert_eq!(names(SortOption::Name), ["a", "b", "c"]);
    }

    #[test]
    fn test_sort_from_value() {
        assert_eq!(SortOption::from_value("name"), SortOption::Name);
        assert_eq!(SortOption::from_value("uploads"), SortOption::Recent);
    }

    #[test]
    fn test_cards_start_with_placeholder() {
        let cards = workspace_cards(vec![Workspace::new("a")]);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0], WorkspaceCard::Placeholder);
    }

    #[test]
    fn test_preview_rows_follow_selection() {
        let mut preview = JournalPreview::new();
        assert!(preview.rows().is_empty());
        preview.toggle("wl_2025_w34", true);
        assert_eq!(preview.summary(), (2, 23500));
        preview.toggle("wl_2025_w33", true);
        let ids: Vec<&str> = preview.rows().iter().map(|j| j.id).collect();
        assert_eq!(ids, ["j1", "j2", "j3"]);
        preview.toggle("wl_2025_w34", false);
        assert_eq!(preview.summary(), (1, 12000));
    }

    #[test]
    fn test_preview_query_roundtrip() {
        let preview = JournalPreview::from_query_value("wl_2025_w34, wl_2025_w33,");
        assert_eq!(preview.selected_count(), 2);
        assert_eq!(preview.to_query_value().as_deref(), Some("wl_2025_w33,wl_2025_w34"));
        assert_eq!(JournalPreview::new().to_query_value(), None);
    }

    #[test]
    fn test_csv_with_two_columns() {
        let mut preview = JournalPreview::new();
        preview.toggle("wl_2025_w34", true);
        let columns = ColumnSet::only(&[JournalColumn::Amount, JournalColumn::Date]);

        let csv = preview_csv(&columns.visible(), &preview.rows());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines, ["발생일,금액", "2025-08-20,15000", "2025-08-21,8500"]);
    }

    #[test]
    fn test_default_columns() {
        let mut columns = ColumnSet::default();
        assert!(!columns.is_visible(JournalColumn::Memo));
        assert_eq!(columns.visible().len(), 6);
        columns.toggle(JournalColumn::Memo, true);
        columns.toggle(JournalColumn::Source, false);
        assert_eq!(columns.visible().last(), Some(&JournalColumn::Memo));
    }

    #[test]
    fn test_format_won() {
        assert_eq!(format_won(15000), "₩15,000");
        assert_eq!(format_won(999), "₩999");
        assert_eq!(format_won(1234567), "₩1,234,567");
        assert_eq!(format_won(-8500), "-₩8,500");
        assert_eq!(format_won(0), "₩0");
    }

    #[test]
    fn test_display_cells() {
        let row = &SAMPLE_JOURNALS[0];
        assert_eq!(JournalColumn::Amount.display(row), "₩15,000");
        assert_eq!(JournalColumn::Customer.display(row), "카페베네");
        assert_eq!(JournalColumn::from_key("memo"), Some(JournalColumn::Memo));
    }
}

//! 화면에 내장된 참조 데이터
//!
//! 계정과목/프로젝트/거래유형 표, 프로젝트 선택지, 대시보드 미리보기용 샘플.

use crate::types::{Project, Workspace, WorkspaceStatus};

/// 계정과목 (이름, 코드)
pub const CHART_OF_ACCOUNTS: &[(&str, u32)] = &[
    ("상품매출원가", 45100),
    ("음원제작_작곡,편곡", 45501),
    ("음원제작_앨범제작,인지대", 45502),
    ("음원제작_M/V 제작", 45503),
    ("음원제작_세션", 45504),
    ("음원제작_기타", 45599),
    ("드라마매출원가", 45700),
    ("공연매출원가", 46200),
    ("용역매출원가", 46400),
    ("제품매출원가", 46600),
    ("복리후생비_식대", 51103),
    ("지급임차료", 51900),
    ("보험료_자동차보험", 52101),
    ("보험료_법정보험료", 52102),
    ("차량유지비", 52200),
    ("차량유지비_법인카드", 52201),
    ("운반비", 52400),
    ("운반비_법인카드", 52401),
    ("교육훈련비", 52500),
    ("도서인쇄비_법인카드", 52601),
    ("소모품비", 53000),
    ("소모품비_법인카드", 53001),
    ("지급수수료", 53100),
    ("지급수수료_법인카드", 53101),
    ("대행수수료", 53700),
    ("연예보조_의상ㆍ스타일링", 53801),
    ("연예보조_헤어/메이크업", 53802),
    ("연예보조_법인카드", 53811),
    ("연예보조_기타", 53899),
    ("지급인세_아티스트", 53901),
    ("지급인세_FT", 53907),
    ("지급인세_CN", 53908),
    ("지급인세_연기자", 53909),
    ("지급인세_코미디언", 53910),
    ("광고선전비", 54100),
    ("차량리스료", 55400),
    ("통신비", 56000),
    ("통신비_법인카드", 56001),
    ("전기요금", 56100),
    ("수도요금", 56101),
    ("가스요금", 56102),
    ("여비교통비_국내", 56200),
    ("여비교통비_해외", 56201),
    ("여비교통비_법인카드", 56202),
    ("접대비", 56300),
    ("접대비_법인카드", 56301),
    ("기부금", 56400),
    ("잡손실", 56500),
    ("잡이익", 56600),
    ("이자비용", 56700),
    ("이자수익", 56800),
    ("외환손실", 56900),
    ("외환이익", 56901),
    ("해외공연경비", 57000),
    ("국내공연경비", 57001),
    ("연습실임차료", 57100),
    ("연습실관리비", 57101),
    ("음반제작기타경비", 57200),
    ("드라마제작기타경비", 57201),
    ("뮤직비디오촬영비", 57300),
    ("공연세트제작비", 57301),
    ("연습생지원비", 57400),
    ("연습생숙소비", 57401),
    ("연습생식대", 57402),
    ("연습생교육비", 57403),
    ("스태프인건비", 57500),
    ("아티스트인건비", 57501),
    ("기타인건비", 57502),
    ("무대장치비", 57600),
    ("조명장치비", 57601),
    ("음향장치비", 57602),
    ("의상제작비", 57700),
    ("소품제작비", 57701),
    ("연예홍보비", 57800),
    ("연예홍보비_법인카드", 57801),
    ("콘텐츠플랫폼이용료", 57900),
    ("플랫폼수수료", 57901),
    ("음원유통수수료", 57902),
    ("저작권사용료", 57903),
    ("저작권수익", 57904),
    ("연예관련보험료", 57905),
    ("행사비", 58000),
    ("행사비_법인카드", 58001),
    ("법률자문료", 58100),
    ("회계자문료", 58101),
    ("세무자문료", 58102),
    ("컨설팅비", 58103),
];

/// 계정과목 표의 기준일
pub const COA_EFFECTIVE_DATE: &str = "2025-06-30";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceProject {
    pub code: &'static str,
    pub name: &'static str,
    pub start_date: &'static str,
    pub end_date: &'static str,
    pub status: &'static str,
}

pub const PROJECTS: &[ReferenceProject] = &[
    ReferenceProject { code: "P001", name: "루미 (HUNTRIX)", start_date: "2020-01-01", end_date: "2021-01-31", status: "진행중" },
    ReferenceProject { code: "P002", name: "미라 (HUNTRIX)", start_date: "2020-02-15", end_date: "2021-03-15", status: "완료" },
    ReferenceProject { code: "P003", name: "조이 (HUNTRIX)", start_date: "2020-04-01", end_date: "2021-04-30", status: "진행중" },
    ReferenceProject { code: "P004", name: "진우 (SajaBoys)", start_date: "2020-05-10", end_date: "2021-06-10", status: "계획" },
    ReferenceProject { code: "P005", name: "베이비 (SajaBoys)", start_date: "2020-06-20", end_date: "2021-07-20", status: "완료" },
    ReferenceProject { code: "P006", name: "미스터리 (SajaBoys)", start_date: "2020-08-01", end_date: "2021-08-31", status: "진행중" },
    ReferenceProject { code: "P007", name: "로맨스 (SajaBoys)", start_date: "2020-09-15", end_date: "2021-10-15", status: "계획" },
    ReferenceProject { code: "P008", name: "애비 (SajaBoys)", start_date: "2020-11-01", end_date: "2021-11-30", status: "완료" },
    ReferenceProject { code: "P009", name: "HUNTRIX 유닛 프로젝트", start_date: "2020-03-01", end_date: "2021-05-31", status: "진행중" },
    ReferenceProject { code: "P010", name: "SajaBoys 유닛 프로젝트", start_date: "2020-07-01", end_date: "2021-09-30", status: "완료" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionType {
    pub code: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub active: bool,
}

impl TransactionType {
    pub fn active_label(&self) -> &'static str {
        if self.active {
            "사용"
        } else {
            "미사용"
        }
    }
}

pub const TRANSACTION_TYPES: &[TransactionType] = &[
    TransactionType { code: "T001", name: "음원 제작비", category: "제작비", active: true },
    TransactionType { code: "T002", name: "아티스트 인세", category: "인세", active: true },
    TransactionType { code: "T003", name: "광고 제작비", category: "제작비", active: true },
    TransactionType { code: "T004", name: "공연 제작비", category: "제작비", active: true },
    TransactionType { code: "T005", name: "저작권료", category: "권리금", active: true },
    TransactionType { code: "T006", name: "대행 수수료", category: "수수료", active: true },
    TransactionType { code: "T007", name: "연예 보조비", category: "보조비", active: true },
    TransactionType { code: "T008", name: "프로모션 비용", category: "마케팅", active: true },
    TransactionType { code: "T009", name: "장비 임대료", category: "임대료", active: false },
    TransactionType { code: "T010", name: "기타 비용", category: "기타", active: true },
];

/// 파일 테이블 프로젝트 선택지 (proj_1 ~ proj_10)
pub fn project_options() -> Vec<Project> {
    PROJECTS
        .iter()
        .enumerate()
        .map(|(i, p)| Project::new(&format!("proj_{}", i + 1), p.name))
        .collect()
}

/// 대시보드 미리보기 샘플 분개
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleJournal {
    pub id: &'static str,
    pub workspace: &'static str,
    pub date: &'static str,
    pub customer: &'static str,
    pub amount: i64,
    pub kind: &'static str,
    pub account: &'static str,
    pub artist: &'static str,
    pub memo: &'static str,
    pub source_file: &'static str,
}

pub const SAMPLE_JOURNALS: &[SampleJournal] = &[
    SampleJournal {
        id: "j1",
        workspace: "wl_2025_w34",
        date: "2025-08-20",
        customer: "카페베네",
        amount: 15000,
        kind: "지출",
        account: "복리후생비",
        artist: "김아티스트",
        memo: "직원 간식",
        source_file: "receipt_001.jpg",
    },
    SampleJournal {
        id: "j2",
        workspace: "wl_2025_w34",
        date: "2025-08-21",
        customer: "서울택시",
        amount: 8500,
        kind: "지출",
        account: "차량비",
        artist: "이아티스트",
        memo: "업무용 택시",
        source_file: "receipt_002.jpg",
    },
    SampleJournal {
        id: "j3",
        workspace: "wl_2025_w33",
        date: "2025-08-15",
        customer: "스타벅스",
        amount: 12000,
        kind: "지출",
        account: "복리후생비",
        artist: "박아티스트",
        memo: "회의용 음료",
        source_file: "receipt_003.jpg",
    },
];

/// 목록 API 가 실패했을 때 보여주는 워크스페이스
pub fn fallback_workspaces() -> Vec<Workspace> {
    [
        ("wl_2025_w34", "2025-08-18", "2025-08-24", "2025-08-24T15:30:00Z"),
        ("wl_2025_w33", "2025-08-11", "2025-08-17", "2025-08-17T09:45:00Z"),
        ("wl_2025_w32", "2025-08-04", "2025-08-10", "2025-08-10T14:20:00Z"),
    ]
    .into_iter()
    .map(|(name, start, end, updated)| Workspace {
        workspace_name: name.to_string(),
        status: WorkspaceStatus::Active,
        created_at: Some(format!("{}T09:00:00Z", start)),
        updated_at: Some(updated.to_string()),
        period_start: Some(start.to_string()),
        period_end: Some(end.to_string()),
        ..Workspace::default()
    })
    .collect()
}

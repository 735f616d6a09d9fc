//! 워크스페이스 화면의 파일 테이블 상태
//!
//! 행은 삽입 순서를 유지하고, 비동기 작업이 끝난 뒤에는 항상 local_id 로 행을 다시 찾는다.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use crate::notify::Notifier;
use crate::types::{base_name, Project, UploadResult, UploadedFile};

pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;
pub const ALLOWED_MIME_TYPES: [&str; 3] = ["image/jpeg", "image/png", "application/pdf"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Pending,
    Uploading,
    Processing,
    Completed,
    Failed,
}

impl FileStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileStatus::Pending => "pending",
            FileStatus::Uploading => "uploading",
            FileStatus::Processing => "processing",
            FileStatus::Completed => "completed",
            FileStatus::Failed => "failed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FileStatus::Pending => "대기",
            FileStatus::Uploading => "업로드 중",
            FileStatus::Processing => "처리 중",
            FileStatus::Completed => "완료",
            FileStatus::Failed => "실패",
        }
    }
}

/// 사용자가 고른 파일의 메타데이터
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    pub name: String,
    pub size: u64,
    pub mime: String,
}

impl FileCandidate {
    pub fn new(name: &str, size: u64, mime: &str) -> Self {
        Self {
            name: name.to_string(),
            size,
            mime: mime.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    TooLarge,
    UnsupportedType,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::TooLarge => write!(f, "파일 크기는 10MB 이하여야 합니다"),
            RejectReason::UnsupportedType => write!(f, "JPG, PNG, PDF 파일만 업로드 가능합니다"),
        }
    }
}

pub fn validate_candidate(candidate: &FileCandidate) -> Result<(), RejectReason> {
    if candidate.size > MAX_FILE_SIZE {
        return Err(RejectReason::TooLarge);
    }
    if !ALLOWED_MIME_TYPES.contains(&candidate.mime.as_str()) {
        return Err(RejectReason::UnsupportedType);
    }
    Ok(())
}

/// 중복 판정 키 (이름 + 크기)
pub fn file_hash(name: &str, size: u64) -> String {
    format!("{}_{}", name, size)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRow {
    pub local_id: String,
    pub name: String,
    pub size: u64,
    pub project_id: Option<String>,
    pub status: FileStatus,
    /// 서버에 저장된 상대 경로
    pub server_id: Option<String>,
    pub hash: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StageOutcome {
    /// 추가된 행의 local_id (후보 순서)
    pub accepted: Vec<String>,
    /// accepted 에 대응하는 후보 인덱스
    pub accepted_indices: Vec<usize>,
    pub rejected: Vec<(String, RejectReason)>,
    pub duplicates: usize,
}

impl StageOutcome {
    pub fn all_duplicates(&self) -> bool {
        self.accepted.is_empty() && self.duplicates > 0
    }

    /// 후보와 같은 순서의 목록에서 추가된 것만 남긴다 (같은 배치 안의 중복도 한 번만)
    pub fn take_accepted<T>(&self, items: Vec<T>) -> Vec<T> {
        items
            .into_iter()
            .enumerate()
            .filter(|(i, _)| self.accepted_indices.contains(i))
            .map(|(_, item)| item)
            .collect()
    }
}

/// 업로드 응답과 행을 맞춘 결과
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadReconcile {
    pub completed: Vec<String>,
    /// 서버가 받지 않은 파일 이름 (행은 제거됨)
    pub dropped: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionState {
    pub selected: usize,
    pub total: usize,
    pub all_checked: bool,
    pub indeterminate: bool,
}

impl SelectionState {
    pub fn label(&self) -> String {
        format!("{}개 선택됨", self.selected)
    }

    /// 일괄 수정 버튼 활성화 여부
    pub fn can_bulk_edit(&self) -> bool {
        self.selected > 0
    }
}

#[derive(Debug, Clone, Default)]
pub struct FileTable {
    rows: Vec<FileRow>,
    selected: HashSet<String>,
    projects: Vec<Project>,
    counter: u64,
}

impl FileTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_projects(projects: Vec<Project>) -> Self {
        Self {
            projects,
            ..Self::default()
        }
    }

    pub fn set_projects(&mut self, projects: Vec<Project>) {
        self.projects = projects;
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project_name(&self, project_id: &str) -> Option<&str> {
        self.projects.iter().find(|p| p.id == project_id).map(|p| p.name.as_str())
    }

    pub fn rows(&self) -> &[FileRow] {
        &self.rows
    }

    pub fn get(&self, local_id: &str) -> Option<&FileRow> {
        self.rows.iter().find(|r| r.local_id == local_id)
    }

    fn get_mut(&mut self, local_id: &str) -> Option<&mut FileRow> {
        self.rows.iter_mut().find(|r| r.local_id == local_id)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 화면에 표시하는 행 번호 (1부터)
    pub fn row_number(&self, local_id: &str) -> Option<usize> {
        self.rows.iter().position(|r| r.local_id == local_id).map(|i| i + 1)
    }

    fn next_id(&mut self) -> String {
        self.counter += 1;
        format!("file_{}", self.counter)
    }

    fn push_row(&mut self, name: &str, size: u64, hash: String, status: FileStatus, server_id: Option<String>) -> String {
        let local_id = self.next_id();
        self.rows.push(FileRow {
            local_id: local_id.clone(),
            name: name.to_string(),
            size,
            project_id: None,
            status,
            server_id,
            hash,
        });
        local_id
    }

    /// 검증 + 중복 제거 후 Pending 행으로 추가
    pub fn stage_files(&mut self, candidates: &[FileCandidate]) -> StageOutcome {
        let mut outcome = StageOutcome::default();
        let mut known: HashSet<String> = self.rows.iter().map(|r| r.hash.clone()).collect();

        for (index, candidate) in candidates.iter().enumerate() {
            if let Err(reason) = validate_candidate(candidate) {
                outcome.rejected.push((candidate.name.clone(), reason));
                continue;
            }
            let hash = file_hash(&candidate.name, candidate.size);
            if !known.insert(hash.clone()) {
                outcome.duplicates += 1;
                continue;
            }
            let id = self.push_row(&candidate.name, candidate.size, hash, FileStatus::Pending, None);
            outcome.accepted.push(id);
            outcome.accepted_indices.push(index);
        }
        outcome
    }

    /// stage_files + 결과 알림
    pub fn stage_with_notice(&mut self, candidates: &[FileCandidate], notifier: &dyn Notifier) -> StageOutcome {
        let outcome = self.stage_files(candidates);
        for (name, reason) in &outcome.rejected {
            notifier.error("파일 검증 실패", &format!("{}: {}", name, reason));
        }
        if outcome.all_duplicates() {
            notifier.warning("중복 파일", "선택한 파일들이 이미 업로드되어 있습니다.");
        } else if outcome.duplicates > 0 {
            notifier.warning("중복 파일", &format!("중복된 파일 {}개를 제외했습니다.", outcome.duplicates));
        }
        outcome
    }

    pub fn mark_uploading(&mut self, ids: &[String]) {
        self.set_status(ids, FileStatus::Uploading);
    }

    fn set_status(&mut self, ids: &[String], status: FileStatus) {
        for row in self.rows.iter_mut().filter(|r| ids.contains(&r.local_id)) {
            row.status = status;
        }
    }

    /// 업로드 응답의 저장 경로를 행에 연결한다.
    ///
    /// 같은 파일명을 먼저 찾고, 없으면 (이름 충돌로 바뀐 경우) 남은 경로를 순서대로 배정한다.
    /// 경로를 받지 못한 행은 제거한다.
    pub fn complete_upload(&mut self, ids: &[String], result: &UploadResult) -> UploadReconcile {
        let paths = result.fs_result.stored_paths();
        let mut used = vec![false; paths.len()];
        let mut assigned: Vec<(String, Option<usize>)> = Vec::new();

        for id in ids {
            let Some(row) = self.get(id) else { continue };
            let exact = paths
                .iter()
                .enumerate()
                .position(|(i, p)| !used[i] && base_name(p) == row.name);
            if let Some(i) = exact {
                used[i] = true;
            }
            assigned.push((id.clone(), exact));
        }
        for entry in assigned.iter_mut().filter(|entry| entry.1.is_none()) {
            if let Some(i) = used.iter().position(|u| !u) {
                used[i] = true;
                entry.1 = Some(i);
            }
        }

        let records = result.state.as_ref().map(|s| s.records.as_slice()).unwrap_or(&[]);
        let mut reconcile = UploadReconcile::default();
        for (id, slot) in assigned {
            match slot {
                Some(i) => {
                    let rel = paths[i].clone();
                    let project = records.iter().find(|r| r.rel == rel).and_then(|r| r.project.clone());
                    if let Some(row) = self.get_mut(&id) {
                        row.server_id = Some(rel);
                        row.status = FileStatus::Completed;
                        if project.is_some() {
                            row.project_id = project;
                        }
                    }
                    reconcile.completed.push(id);
                }
                None => {
                    if let Some(row) = self.remove(&id) {
                        reconcile.dropped.push(row.name);
                    }
                }
            }
        }
        reconcile
    }

    /// 업로드 실패: 낙관적으로 추가한 행을 제거한다
    pub fn fail_upload(&mut self, ids: &[String]) -> Vec<FileRow> {
        ids.iter().filter_map(|id| self.remove(id)).collect()
    }

    /// ZIP 에서 풀린 경로마다 완료 행을 만든다
    pub fn add_extracted(&mut self, paths: &[String]) -> Vec<String> {
        let mut added = Vec::new();
        for path in paths {
            if self.find_by_server_id(path).is_some() {
                continue;
            }
            let id = self.push_row(base_name(path), 0, path.clone(), FileStatus::Completed, Some(path.clone()));
            added.push(id);
        }
        added
    }

    /// 서버의 업로드 목록과 맞춘다 (없는 행 추가, 프로젝트 갱신). 제외된 파일은 건너뛴다.
    pub fn sync_uploaded(&mut self, files: &[UploadedFile]) -> usize {
        let mut added = 0;
        for file in files.iter().filter(|f| !f.excluded) {
            if let Some(row) = self.rows.iter_mut().find(|r| r.server_id.as_deref() == Some(file.rel.as_str())) {
                row.project_id = file.project.clone();
                if let Some(size) = file.size {
                    row.size = size;
                    row.hash = file_hash(&row.name, size);
                }
                continue;
            }
            let size = file.size.unwrap_or(0);
            let hash = file_hash(file.file_name(), size);
            let id = self.push_row(file.file_name(), size, hash, FileStatus::Completed, Some(file.rel.clone()));
            if let Some(row) = self.get_mut(&id) {
                row.project_id = file.project.clone();
            }
            added += 1;
        }
        added
    }

    pub fn find_by_server_id(&self, server_id: &str) -> Option<&FileRow> {
        self.rows.iter().find(|r| r.server_id.as_deref() == Some(server_id))
    }

    /// 분개 생성 중 표시 (완료 행만)
    pub fn mark_processing(&mut self) -> usize {
        let mut count = 0;
        for row in self.rows.iter_mut().filter(|r| r.status == FileStatus::Completed) {
            row.status = FileStatus::Processing;
            count += 1;
        }
        count
    }

    pub fn finish_processing(&mut self, success: bool) {
        let status = if success { FileStatus::Completed } else { FileStatus::Failed };
        for row in self.rows.iter_mut().filter(|r| r.status == FileStatus::Processing) {
            row.status = status;
        }
    }

    pub fn toggle_select(&mut self, local_id: &str) -> bool {
        if self.get(local_id).is_none() {
            return false;
        }
        if !self.selected.remove(local_id) {
            self.selected.insert(local_id.to_string());
        }
        self.selected.contains(local_id)
    }

    pub fn select_all(&mut self, checked: bool) {
        if checked {
            self.selected = self.rows.iter().map(|r| r.local_id.clone()).collect();
        } else {
            self.selected.clear();
        }
    }

    pub fn is_selected(&self, local_id: &str) -> bool {
        self.selected.contains(local_id)
    }

    pub fn selection_state(&self) -> SelectionState {
        let selected = self.selected.len();
        let total = self.rows.len();
        SelectionState {
            selected,
            total,
            all_checked: total > 0 && selected == total,
            indeterminate: selected > 0 && selected < total,
        }
    }

    /// 선택된 업로드 완료 행의 {server_id: project_id}
    pub fn bulk_project_mapping(&self, project_id: &str) -> BTreeMap<String, Option<String>> {
        self.rows
            .iter()
            .filter(|r| self.selected.contains(&r.local_id))
            .filter_map(|r| r.server_id.clone())
            .map(|server_id| (server_id, Some(project_id.to_string())))
            .collect()
    }

    /// PATCH 성공 후 반영. 갱신된 행 수를 돌려준다.
    pub fn apply_project<'a, I>(&mut self, server_ids: I, project_id: Option<&str>) -> usize
    where
        I: IntoIterator<Item = &'a String>,
    {
        let mut updated = 0;
        for server_id in server_ids {
            if let Some(row) = self.rows.iter_mut().find(|r| r.server_id.as_ref() == Some(server_id)) {
                row.project_id = project_id.map(str::to_string);
                updated += 1;
            }
        }
        updated
    }

    /// 행 하나의 프로젝트 변경. 서버에 반영할 server_id 가 있으면 돌려준다.
    pub fn set_row_project(&mut self, local_id: &str, project_id: Option<&str>) -> Option<String> {
        let row = self.get_mut(local_id)?;
        row.project_id = project_id.map(str::to_string);
        row.server_id.clone()
    }

    pub fn remove(&mut self, local_id: &str) -> Option<FileRow> {
        let index = self.rows.iter().position(|r| r.local_id == local_id)?;
        self.selected.remove(local_id);
        Some(self.rows.remove(index))
    }
}

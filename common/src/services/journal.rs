//! OCR + 분개 파이프라인, 분개 초안, 증빙 데이터

use serde_json::json;

use super::workspace_path;
use crate::api::{data, encode_segment, ApiClient, Transport};
use crate::config::KeyValueStore;
use crate::error::ValidationError;
use crate::types::{ArchiveResult, JournalEntry, JournalList, PipelineResult, VoucherData, VoucherRecord, VoucherUpdate, Visualization};
use crate::validate::validate_file_id;
use crate::Result;

pub struct JournalService<'a, T, S> {
    api: &'a ApiClient<T, S>,
}

impl<'a, T: Transport, S: KeyValueStore> JournalService<'a, T, S> {
    pub fn new(api: &'a ApiClient<T, S>) -> Self {
        Self { api }
    }

    /// OCR + LLM 추출 + 분개 생성
    pub async fn generate(&self, workspace: &str) -> Result<PipelineResult> {
        let path = workspace_path(workspace, "/pipeline/ocr-journal")?;
        data(self.api.post(&path, None).await?)
    }

    pub async fn drafts(&self, workspace: &str) -> Result<Vec<JournalEntry>> {
        let path = workspace_path(workspace, "/journal-drafts")?;
        let list: JournalList = data(self.api.get(&path).await?)?;
        Ok(list.journal)
    }

    /// 저장된 증빙 데이터로 분개를 다시 만든다
    pub async fn refresh(&self, workspace: &str) -> Result<Vec<JournalEntry>> {
        let path = workspace_path(workspace, "/journal/refresh")?;
        let list: JournalList = data(self.api.post(&path, None).await?)?;
        Ok(list.journal)
    }

    pub async fn archive(&self, workspace: &str) -> Result<ArchiveResult> {
        let path = workspace_path(workspace, "/journal/archive")?;
        data(self.api.post(&path, None).await?)
    }

    pub async fn voucher_data(&self, workspace: &str, file_id: &str) -> Result<VoucherRecord> {
        let path = file_path(workspace, "/voucher-data/", file_id)?;
        data(self.api.get(&path).await?)
    }

    pub async fn update_voucher_data(&self, workspace: &str, file_id: &str, edits: &VoucherData) -> Result<VoucherUpdate> {
        let path = file_path(workspace, "/voucher-data/", file_id)?;
        if edits.is_empty() {
            return Err(ValidationError::EmptyEdits.into());
        }
        data(self.api.patch(&path, json!({ "edits": edits })).await?)
    }

    pub async fn visualization(&self, workspace: &str, file_id: &str) -> Result<Visualization> {
        let path = file_path(workspace, "/visualizations/", file_id)?;
        data(self.api.get(&path).await?)
    }
}

fn file_path(workspace: &str, segment: &str, file_id: &str) -> std::result::Result<String, ValidationError> {
    let base = workspace_path(workspace, segment)?;
    let file_id = validate_file_id(file_id)?;
    Ok(format!("{}{}", base, encode_segment(&file_id)))
}

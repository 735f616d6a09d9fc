//! 파일 업로드 / 업로드 목록 / 프로젝트 매핑

use std::collections::BTreeMap;

use serde_json::{json, Value};

use super::workspace_path;
use crate::api::{data, ApiClient, FormPart, Transport};
use crate::config::KeyValueStore;
use crate::error::ValidationError;
use crate::types::{UploadResult, UploadedFile, UploadedFileList};
use crate::validate::validate_zip_name;
use crate::Result;

/// 이미지 업로드 옵션
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUploadOptions {
    pub if_match_index_version: Option<i64>,
    pub rename_on_conflict: bool,
    /// ".png,.jpg" 형태
    pub allowed_ext: Option<String>,
}

impl Default for ImageUploadOptions {
    fn default() -> Self {
        Self {
            if_match_index_version: None,
            rename_on_conflict: true,
            allowed_ext: None,
        }
    }
}

/// ZIP 업로드 옵션
#[derive(Debug, Clone, PartialEq)]
pub struct ZipUploadOptions {
    pub preserve_dirs: bool,
    pub rename_on_conflict: bool,
    pub allowed_ext: Option<String>,
    pub rollback_on_failure: bool,
    pub if_match_index_version: Option<i64>,
}

impl Default for ZipUploadOptions {
    fn default() -> Self {
        Self {
            preserve_dirs: true,
            rename_on_conflict: true,
            allowed_ext: None,
            rollback_on_failure: true,
            if_match_index_version: None,
        }
    }
}

pub struct UploadsService<'a, T, S> {
    api: &'a ApiClient<T, S>,
}

impl<'a, T: Transport, S: KeyValueStore> UploadsService<'a, T, S> {
    pub fn new(api: &'a ApiClient<T, S>) -> Self {
        Self { api }
    }

    /// 이미지 N개를 하나의 multipart 요청으로 업로드
    pub async fn upload_images(
        &self,
        workspace: &str,
        files: Vec<T::File>,
        options: &ImageUploadOptions,
    ) -> Result<UploadResult> {
        let path = workspace_path(workspace, "/uploads/images")?;
        if files.is_empty() {
            return Err(ValidationError::NoFiles.into());
        }

        let mut parts: Vec<FormPart<T::File>> = files.into_iter().map(|f| FormPart::file("files", f)).collect();
        if let Some(version) = options.if_match_index_version {
            parts.push(FormPart::text("ifMatchIndexVersion", version.to_string()));
        }
        parts.push(FormPart::text("renameOnConflict", options.rename_on_conflict.to_string()));
        if let Some(ext) = &options.allowed_ext {
            parts.push(FormPart::text("allowedExt", ext.clone()));
        }

        let env = self.api.post_form(&path, parts).await?;
        data(env)
    }

    /// ZIP 1개 업로드 (서버에서 압축 해제)
    pub async fn upload_zip(
        &self,
        workspace: &str,
        file_name: &str,
        file: T::File,
        options: &ZipUploadOptions,
    ) -> Result<UploadResult> {
        let path = workspace_path(workspace, "/uploads/zip")?;
        validate_zip_name(file_name)?;

        let mut parts = vec![
            FormPart::file("file", file),
            FormPart::text("preserveDirs", options.preserve_dirs.to_string()),
            FormPart::text("renameOnConflict", options.rename_on_conflict.to_string()),
            FormPart::text("rollbackOnFailure", options.rollback_on_failure.to_string()),
        ];
        if let Some(ext) = &options.allowed_ext {
            parts.push(FormPart::text("allowedExt", ext.clone()));
        }
        if let Some(version) = options.if_match_index_version {
            parts.push(FormPart::text("ifMatchIndexVersion", version.to_string()));
        }

        let env = self.api.post_form(&path, parts).await?;
        data(env)
    }

    pub async fn list_uploaded(&self, workspace: &str) -> Result<Vec<UploadedFile>> {
        let path = workspace_path(workspace, "/uploads")?;
        let env = self.api.get(&path).await?;
        let list: UploadedFileList = data(env)?;
        Ok(list.files)
    }

    /// 서버 파일 경로 → 프로젝트 ID (None 이면 해제)
    pub async fn set_projects(&self, workspace: &str, mapping: &BTreeMap<String, Option<String>>) -> Result<Value> {
        let path = workspace_path(workspace, "/uploads/projects")?;
        if mapping.is_empty() {
            return Err(ValidationError::NoFiles.into());
        }
        let env = self.api.patch(&path, json!({ "mapping": mapping })).await?;
        Ok(env.data)
    }

    pub async fn set_excluded(&self, workspace: &str, file_paths: &[String], excluded: bool) -> Result<Value> {
        let path = workspace_path(workspace, "/uploads/excluded")?;
        if file_paths.is_empty() {
            return Err(ValidationError::NoFiles.into());
        }
        let body = json!({
            "filePaths": file_paths,
            "excluded": excluded,
        });
        let env = self.api.patch(&path, body).await?;
        Ok(env.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{HttpMethod, RequestBody};
    use crate::mock::{client, MockTransport};
    use futures::executor::block_on;

    const UPLOAD_OK: &str = r#"{"ok":true,"data":{"fsResult":{"copied":["input_files/a.jpg","input_files/b.png"],"skipped":[],"errors":[]},"state":{"version":2}}}"#;

    #[test]
    fn test_upload_images_form() {
        let api = client(MockTransport::new().respond(200, UPLOAD_OK));
        let files = vec!["a.jpg".to_string(), "b.png".to_string()];
        let result = block_on(UploadsService::new(&api).upload_images("w", files, &ImageUploadOptions::default())).unwrap();
        assert_eq!(result.fs_result.copied.len(), 2);

        let req = api.transport().last_request();
        assert_eq!(req.url, "http://test/workspaces/w/uploads/images");
        let RequestBody::Multipart(parts) = req.body else {
            panic!("multipart expected");
        };
        let names: Vec<&str> = parts.iter().map(|p| p.name()).collect();
        assert_eq!(names, ["files", "files", "renameOnConflict"]);
        assert_eq!(parts[2], FormPart::text("renameOnConflict", "true"));
    }

    #[test]
    fn test_upload_images_optional_fields() {
        let api = client(MockTransport::new().respond(200, UPLOAD_OK));
        let options = ImageUploadOptions {
            if_match_index_version: Some(7),
            rename_on_conflict: false,
            allowed_ext: Some(".png,.jpg".to_string()),
        };
        block_on(UploadsService::new(&api).upload_images("w", vec!["a.jpg".to_string()], &options)).unwrap();
        let RequestBody::Multipart(parts) = api.transport().last_request().body else {
            panic!("multipart expected");
        };
        assert!(parts.contains(&FormPart::text("ifMatchIndexVersion", "7")));
        assert!(parts.contains(&FormPart::text("renameOnConflict", "false")));
        assert!(parts.contains(&FormPart::text("allowedExt", ".png,.jpg")));
    }

    #[test]
    fn test_upload_images_requires_files() {
        let api = client(MockTransport::new());
        let err = block_on(UploadsService::new(&api).upload_images("w", Vec::new(), &ImageUploadOptions::default()))
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(api.transport().request_count(), 0);
    }

    #[test]
    fn test_upload_zip_rejects_other_extensions() {
        let api = client(MockTransport::new());
        let err = block_on(UploadsService::new(&api).upload_zip(
            "w",
            "receipts.tar",
            "receipts.tar".to_string(),
            &ZipUploadOptions::default(),
        ))
        .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(api.transport().request_count(), 0);
    }

    #[test]
    fn test_upload_zip_flags() {
        let api = client(MockTransport::new().respond(
            200,
            r#"{"ok":true,"data":{"fsResult":{"copied_abs":["/x/a.jpg"],"copied_rel":["input_files/2025/a.jpg"]}}}"#,
        ));
        let result = block_on(UploadsService::new(&api).upload_zip(
            "w",
            "R.ZIP",
            "R.ZIP".to_string(),
            &ZipUploadOptions::default(),
        ))
        .unwrap();
        assert_eq!(result.fs_result.stored_paths(), ["input_files/2025/a.jpg".to_string()]);

        let RequestBody::Multipart(parts) = api.transport().last_request().body else {
            panic!("multipart expected");
        };
        assert_eq!(parts[0], FormPart::file("file", "R.ZIP".to_string()));
        assert!(parts.contains(&FormPart::text("preserveDirs", "true")));
        assert!(parts.contains(&FormPart::text("rollbackOnFailure", "true")));
    }

    #[test]
    fn test_list_uploaded() {
        let api = client(MockTransport::new().respond(
            200,
            r#"{"ok":true,"data":{"files":[{"rel":"input_files/a.jpg","project":"proj_1","excluded":false,"size":1024}]}}"#,
        ));
        let files = block_on(UploadsService::new(&api).list_uploaded("w")).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].file_name(), "a.jpg");
        assert_eq!(files[0].project.as_deref(), Some("proj_1"));
        assert_eq!(api.transport().last_request().method, HttpMethod::Get);
    }

    #[test]
    fn test_set_projects_body() {
        let api = client(MockTransport::new().respond(200, r#"{"ok":true,"data":{}}"#));
        let mut mapping = BTreeMap::new();
        mapping.insert("input_files/a.jpg".to_string(), Some("P".to_string()));
        mapping.insert("input_files/b.jpg".to_string(), None);
        block_on(UploadsService::new(&api).set_projects("w", &mapping)).unwrap();

        let req = api.transport().last_request();
        assert_eq!(req.url, "http://test/workspaces/w/uploads/projects");
        assert_eq!(
            req.body,
            RequestBody::Json(json!({"mapping": {"input_files/a.jpg": "P", "input_files/b.jpg": null}}))
        );
    }

    #[test]
    fn test_set_excluded_body() {
        let api = client(MockTransport::new().respond(200, r#"{"ok":true,"data":{}}"#));
        block_on(UploadsService::new(&api).set_excluded("w", &["input_files/a.jpg".to_string()], true)).unwrap();
        assert_eq!(
            api.transport().last_request().body,
            RequestBody::Json(json!({"filePaths": ["input_files/a.jpg"], "excluded": true}))
        );
    }
}

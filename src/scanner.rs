//! 업로드 대상 파일 수집 (폴더 탐색 + 브라우저와 같은 검증/중복 제거)

use crate::error::{Result, VoucherAiError};
use std::path::{Path, PathBuf};
use voucher_ai_common::file_table::StageOutcome;
use voucher_ai_common::{FileCandidate, FileTable, Notifier};
use walkdir::WalkDir;

const UPLOAD_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "pdf"];

#[derive(Debug, Clone, PartialEq)]
pub struct ScannedFile {
    pub path: PathBuf,
    pub name: String,
    pub size: u64,
    pub mime: String,
}

impl ScannedFile {
    pub fn from_path(path: &Path) -> Result<Self> {
        let meta = std::fs::metadata(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            name: path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
            size: meta.len(),
            mime: mime_for_path(path).unwrap_or("application/octet-stream").to_string(),
        })
    }

    pub fn candidate(&self) -> FileCandidate {
        FileCandidate::new(&self.name, self.size, &self.mime)
    }
}

/// 확장자로 MIME 추정
pub fn mime_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "pdf" => Some("application/pdf"),
        "zip" => Some("application/zip"),
        _ => None,
    }
}

fn is_upload_extension(path: &Path) -> bool {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .is_some_and(|e| UPLOAD_EXTENSIONS.contains(&e.as_str()))
}

/// 파일은 그대로, 폴더는 업로드 가능한 확장자만 모은다 (폴더 안은 이름순)
pub fn scan_paths(paths: &[PathBuf], recursive: bool) -> Result<Vec<ScannedFile>> {
    let mut files = Vec::new();
    for path in paths {
        if !path.exists() {
            return Err(VoucherAiError::FileNotFound(path.display().to_string()));
        }
        if path.is_file() {
            files.push(ScannedFile::from_path(path)?);
            continue;
        }

        let depth = if recursive { usize::MAX } else { 1 };
        let mut found = Vec::new();
        for entry in WalkDir::new(path)
            .max_depth(depth)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let entry_path = entry.path();
            if entry_path.is_file() && is_upload_extension(entry_path) {
                found.push(ScannedFile::from_path(entry_path)?);
            }
        }
        found.sort_by(|a, b| a.path.cmp(&b.path));
        files.extend(found);
    }
    Ok(files)
}

#[derive(Debug, Clone, Default)]
pub struct UploadPlan {
    pub files: Vec<ScannedFile>,
    pub outcome: StageOutcome,
}

/// 검증 실패와 중복(이름+크기)을 걸러낸다. 결과 알림은 notifier 로.
pub fn plan_upload(scanned: Vec<ScannedFile>, notifier: &dyn Notifier) -> UploadPlan {
    let mut table = FileTable::new();
    let candidates: Vec<FileCandidate> = scanned.iter().map(ScannedFile::candidate).collect();
    let outcome = table.stage_with_notice(&candidates, notifier);

    let files = outcome.take_accepted(scanned);
    UploadPlan { files, outcome }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use voucher_ai_common::notify::{RecordingNotifier, ToastKind};

    #[test]
    fn test_mime_for_path() {
        assert_eq!(mime_for_path(Path::new("a.JPG")), Some("image/jpeg"));
        assert_eq!(mime_for_path(Path::new("a.pdf")), Some("application/pdf"));
        assert_eq!(mime_for_path(Path::new("a.zip")), Some("application/zip"));
        assert_eq!(mime_for_path(Path::new("a.txt")), None);
        assert_eq!(mime_for_path(Path::new("noext")), None);
    }

    #[test]
    fn test_scan_folder_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.png"), b"png").unwrap();
        fs::write(dir.path().join("a.JPG"), b"jpg").unwrap();
        fs::write(dir.path().join("notes.txt"), b"text").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("c.pdf"), b"pdf").unwrap();

        let flat = scan_paths(&[dir.path().to_path_buf()], false).unwrap();
        let names: Vec<&str> = flat.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a.JPG", "b.png"]);
        assert_eq!(flat[0].mime, "image/jpeg");

        let deep = scan_paths(&[dir.path().to_path_buf()], true).unwrap();
        assert_eq!(deep.len(), 3);
    }

    #[test]
    fn test_scan_missing_path() {
        let err = scan_paths(&[PathBuf::from("/nonexistent/voucher/dir")], false).unwrap_err();
        assert!(matches!(err, VoucherAiError::FileNotFound(_)));
    }

    #[test]
    fn test_plan_upload_drops_duplicates_and_invalid() {
        let file = |name: &str, size: u64, mime: &str| ScannedFile {
            path: PathBuf::from(name),
            name: name.to_string(),
            size,
            mime: mime.to_string(),
        };
        let notifier = RecordingNotifier::new();
        let plan = plan_upload(
            vec![
                file("r1.jpg", 100, "image/jpeg"),
                file("r1.jpg", 100, "image/jpeg"),
                file("memo.txt", 10, "application/octet-stream"),
                file("r2.pdf", 200, "application/pdf"),
            ],
            &notifier,
        );

        let names: Vec<&str> = plan.files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["r1.jpg", "r2.pdf"]);
        assert_eq!(plan.outcome.duplicates, 1);
        assert_eq!(plan.outcome.rejected.len(), 1);
        assert_eq!(notifier.count(ToastKind::Error), 1);
        assert_eq!(notifier.count(ToastKind::Warning), 1);
    }
}

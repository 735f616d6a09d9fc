//! CLI 설정: `~/.config/voucher-ai/config.json` + 환경 변수

use crate::error::{Result, VoucherAiError};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use voucher_ai_common::config::{ConfigStore, KeyValueStore, BASE_URL_KEY, TOKEN_KEY};

pub const BASE_URL_ENV: &str = "VOUCHER_AI_BASE_URL";
pub const TOKEN_ENV: &str = "VOUCHER_AI_TOKEN";

/// JSON 객체 하나에 키/값을 저장하는 파일 저장소
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    use_env: bool,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            use_env: false,
        }
    }

    /// 환경 변수가 있으면 파일 값보다 우선한다
    pub fn with_env(mut self) -> Self {
        self.use_env = true;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| VoucherAiError::Config("홈 디렉터리를 찾을 수 없습니다".into()))?;
        Ok(home.join(".config").join("voucher-ai").join("config.json"))
    }

    fn read_map(&self) -> std::result::Result<BTreeMap<String, String>, String> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(&self.path).map_err(|e| e.to_string())?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content).map_err(|e| e.to_string())
    }

    fn env_override(&self, key: &str) -> Option<String> {
        if !self.use_env {
            return None;
        }
        let name = match key {
            BASE_URL_KEY => BASE_URL_ENV,
            TOKEN_KEY => TOKEN_ENV,
            _ => return None,
        };
        std::env::var(name).ok().filter(|v| !v.trim().is_empty())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> std::result::Result<Option<String>, String> {
        if let Some(value) = self.env_override(key) {
            return Ok(Some(value));
        }
        Ok(self.read_map()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> std::result::Result<(), String> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| e.to_string())?;
        }
        let content = serde_json::to_string_pretty(&map).map_err(|e| e.to_string())?;
        std::fs::write(&self.path, content).map_err(|e| e.to_string())
    }
}

fn warn(message: &str) {
    eprintln!("⚠ {}", message);
}

pub fn config_store(store: FileStore) -> ConfigStore<FileStore> {
    ConfigStore::new(store).with_warning_sink(warn)
}

/// 기본 경로 + 환경 변수
pub fn load() -> Result<ConfigStore<FileStore>> {
    Ok(config_store(FileStore::new(FileStore::default_path()?).with_env()))
}

/// 화면 표시용 토큰 (앞 4자만)
pub fn mask_token(token: &str) -> String {
    if token.is_empty() {
        return "미설정".to_string();
    }
    let prefix: String = token.chars().take(4).collect();
    format!("{}****", prefix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use voucher_ai_common::config::DEFAULT_BASE_URL;

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = config_store(FileStore::new(&path));

        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        config.set_base_url(" http://api.test ");
        config.set_token("secret");

        let reopened = config_store(FileStore::new(&path));
        assert_eq!(reopened.base_url(), "http://api.test");
        assert_eq!(reopened.token(), "secret");
    }

    #[test]
    fn test_broken_file_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();

        let config = config_store(FileStore::new(&path));
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.token(), "");
    }

    #[test]
    fn test_mask_token() {
        assert_eq!(mask_token(""), "미설정");
        assert_eq!(mask_token("abcdefgh"), "abcd****");
    }
}

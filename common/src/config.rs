//! API 접속 설정 (BASE_URL, TOKEN)
//!
//! 저장소는 KeyValueStore 트레이트로 추상화한다.
//! - 브라우저: localStorage
//! - CLI: 설정 JSON 파일
//! - 테스트: MemoryStore

use std::cell::RefCell;
use std::collections::HashMap;

pub const BASE_URL_KEY: &str = "BASE_URL";
pub const TOKEN_KEY: &str = "TOKEN";
pub const WORKSPACES_CACHE_KEY: &str = "workspaces";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// 문자열 키-값 저장소
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        (**self).set(key, value)
    }
}

/// 설정 저장소
///
/// 읽기/쓰기 실패는 절대 호출자에게 전파하지 않는다. 실패 내용은 `on_warning` 으로만 흘려보낸다.
#[derive(Clone)]
pub struct ConfigStore<S> {
    store: S,
    on_warning: fn(&str),
}

fn ignore_warning(_: &str) {}

impl<S: KeyValueStore> ConfigStore<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            on_warning: ignore_warning,
        }
    }

    pub fn with_warning_sink(mut self, on_warning: fn(&str)) -> Self {
        self.on_warning = on_warning;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// BASE_URL (미설정/공백/읽기 실패 시 기본값)
    pub fn base_url(&self) -> String {
        match self.store.get(BASE_URL_KEY) {
            Ok(Some(value)) if !value.trim().is_empty() => value.trim().to_string(),
            Ok(_) => DEFAULT_BASE_URL.to_string(),
            Err(e) => {
                (self.on_warning)(&format!("저장소 읽기 실패 ({}): {}", BASE_URL_KEY, e));
                DEFAULT_BASE_URL.to_string()
            }
        }
    }

    /// TOKEN (미설정/읽기 실패 시 빈 문자열)
    pub fn token(&self) -> String {
        match self.store.get(TOKEN_KEY) {
            Ok(Some(value)) => value.trim().to_string(),
            Ok(None) => String::new(),
            Err(e) => {
                (self.on_warning)(&format!("저장소 읽기 실패 ({}): {}", TOKEN_KEY, e));
                String::new()
            }
        }
    }

    pub fn set_base_url(&self, value: &str) {
        self.write(BASE_URL_KEY, value.trim());
    }

    pub fn set_token(&self, value: &str) {
        self.write(TOKEN_KEY, value.trim());
    }

    fn write(&self, key: &str, value: &str) {
        if let Err(e) = self.store.set(key, value) {
            (self.on_warning)(&format!("저장소 저장 실패 ({}): {}", key, e));
        }
    }
}

/// 메모리 저장소 (테스트/비영속용)
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 모든 읽기/쓰기가 실패하는 저장소 (사생활 보호 모드 등)
    pub fn failing() -> Self {
        Self {
            fail_reads: true,
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn with_value(self, key: &str, value: &str) -> Self {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, String> {
        if self.fail_reads {
            return Err("storage unavailable".to_string());
        }
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        if self.fail_writes {
            return Err("storage unavailable".to_string());
        }
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_base_url_is_trimmed() {
        let config = ConfigStore::new(MemoryStore::new());
        config.set_base_url("  https://x ");
        assert_eq!(config.base_url(), "https://x");
        assert_eq!(config.store().get(BASE_URL_KEY).unwrap().as_deref(), Some("https://x"));
    }

    #[test]
    fn test_base_url_default_when_unset() {
        let config = ConfigStore::new(MemoryStore::new());
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_base_url_default_when_blank() {
        let config = ConfigStore::new(MemoryStore::new().with_value(BASE_URL_KEY, "   "));
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_token_trimmed_and_empty_by_default() {
        let config = ConfigStore::new(MemoryStore::new());
        assert_eq!(config.token(), "");
        config.set_token(" abc \n");
        assert_eq!(config.token(), "abc");
    }

    static WARNINGS: AtomicUsize = AtomicUsize::new(0);

    fn count_warning(_: &str) {
        WARNINGS.fetch_add(1, Ordering::SeqCst);
    }

    #[test]
    fn test_failing_store_never_raises() {
        let config = ConfigStore::new(MemoryStore::failing()).with_warning_sink(count_warning);
        let before = WARNINGS.load(Ordering::SeqCst);

        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.token(), "");
        config.set_base_url("https://x");
        config.set_token("t");

        assert_eq!(WARNINGS.load(Ordering::SeqCst) - before, 4);
    }
}

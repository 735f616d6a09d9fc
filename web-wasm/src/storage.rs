//! localStorage 기반 설정 저장소

use voucher_ai_common::config::{ConfigStore, KeyValueStore, WORKSPACES_CACHE_KEY};
use voucher_ai_common::Workspace;

/// `window.localStorage` (접근 불가면 모든 호출이 Err)
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage() -> Result<web_sys::Storage, String> {
        web_sys::window()
            .ok_or_else(|| "window 없음".to_string())?
            .local_storage()
            .map_err(|e| format!("{:?}", e))?
            .ok_or_else(|| "localStorage 사용 불가".to_string())
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, String> {
        Self::storage()?.get_item(key).map_err(|e| format!("{:?}", e))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        Self::storage()?.set_item(key, value).map_err(|e| format!("{:?}", e))
    }
}

fn warn(message: &str) {
    gloo::console::warn!("localStorage", message);
}

/// 브라우저용 설정 저장소 (실패는 콘솔 경고만)
pub fn config_store() -> ConfigStore<LocalStorageStore> {
    ConfigStore::new(LocalStorageStore).with_warning_sink(warn)
}

/// 마지막으로 받은 워크스페이스 목록을 캐시에 남긴다 (참고용)
pub fn cache_workspaces(workspaces: &[Workspace]) {
    let names: Vec<&str> = workspaces.iter().map(|w| w.name()).collect();
    let result = serde_json::to_string(&names)
        .map_err(|e| e.to_string())
        .and_then(|json| LocalStorageStore.set(WORKSPACES_CACHE_KEY, &json));
    if let Err(e) = result {
        warn(&format!("localStorage 저장 실패 ({}): {}", WORKSPACES_CACHE_KEY, e));
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use voucher_ai_common::config::{BASE_URL_KEY, TOKEN_KEY};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_config_store_persists_to_local_storage() {
        let config = config_store();
        config.set_base_url("http://api.test");
        config.set_token("abc");
        assert_eq!(config.base_url(), "http://api.test");
        assert_eq!(LocalStorageStore.get(TOKEN_KEY).unwrap().as_deref(), Some("abc"));

        LocalStorageStore.set(BASE_URL_KEY, "").unwrap();
        LocalStorageStore.set(TOKEN_KEY, "").unwrap();
    }

    #[wasm_bindgen_test]
    fn wasm_cache_workspaces_writes_names() {
        cache_workspaces(&[Workspace::new("wl_2025_w34"), Workspace::new("wl_2025_w33")]);
        let cached = LocalStorageStore.get(WORKSPACES_CACHE_KEY).unwrap();
        assert_eq!(cached.as_deref(), Some(r#"["wl_2025_w34","wl_2025_w33"]"#));
    }
}

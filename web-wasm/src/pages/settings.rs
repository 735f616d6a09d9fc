//! 설정: API 연결 + 참조 데이터

use leptos::prelude::*;
use leptos::task::spawn_local;
use voucher_ai_common::settings::{
    connection_failure_message, connection_success_message, BASE_URL_REQUIRED, SAVED_MESSAGE,
};
use voucher_ai_common::{ApiError, Error, Notifier};

use crate::api;
use crate::components::reference_tables::ReferenceTables;
use crate::components::settings_panel::SettingsPanel;
use crate::components::toast::use_toast;
use crate::storage::config_store;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let toast = use_toast();
    let config = config_store();
    let base_url = RwSignal::new(config.base_url());
    let token = RwSignal::new(config.token());
    let (pinging, set_pinging) = signal(false);

    let on_save = move || {
        let config = config_store();
        config.set_base_url(base_url.get_untracked().trim());
        config.set_token(token.get_untracked().trim());
        toast.success("저장 완료", SAVED_MESSAGE);
    };

    let on_ping = move || {
        if base_url.with_untracked(|url| url.trim().is_empty()) {
            toast.warning("연결 테스트", BASE_URL_REQUIRED);
            return;
        }
        set_pinging.set(true);
        spawn_local(async move {
            let client = api::client();
            match api::workspaces(&client).list().await {
                Ok(list) => toast.success("연결 테스트", &connection_success_message(list.len())),
                Err(Error::Api(e)) => toast.error("연결 테스트", &connection_failure_message(&e)),
                Err(e) => toast.error("연결 테스트", &connection_failure_message(&ApiError::local(e.to_string()))),
            }
            set_pinging.set(false);
        });
    };

    view! {
        <div class="page settings-page">
            <header class="page-header">
                <h1 class="page-title">"설정"</h1>
            </header>
            <SettingsPanel base_url=base_url token=token pinging=pinging on_save=on_save on_ping=on_ping />
            <ReferenceTables />
        </div>
    }
}

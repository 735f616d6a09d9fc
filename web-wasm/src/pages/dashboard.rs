//! 대시보드: 워크스페이스 목록 + 분개 미리보기

use leptos::prelude::*;
use leptos::task::spawn_local;
use voucher_ai_common::dashboard::{preview_csv, ColumnSet, JournalPreview, WorkspaceFilter};
use voucher_ai_common::export::export_file_name_today;
use voucher_ai_common::modal::ModalId;
use voucher_ai_common::navigation::{query_param, set_query_param};
use voucher_ai_common::reference::fallback_workspaces;
use voucher_ai_common::{Notifier, Workspace};
use wasm_bindgen::JsValue;

use crate::api;
use crate::components::journal_preview::JournalPreviewPanel;
use crate::components::modal::use_modal;
use crate::components::toast::use_toast;
use crate::components::workspace_list::WorkspaceList;
use crate::components::workspace_modals::{CreateWorkspaceModal, RenameWorkspaceModal};
use crate::export::download_csv;
use crate::storage::cache_workspaces;

const SELECTION_PARAM: &str = "worklogIds";

fn current_query() -> String {
    window().location().search().unwrap_or_default()
}

/// 선택한 워크스페이스를 주소창에 남긴다 (히스토리는 늘리지 않음)
fn sync_selection_to_url(preview: &JournalPreview) {
    let location = window().location();
    let query = set_query_param(
        &current_query(),
        SELECTION_PARAM,
        preview.to_query_value().as_deref(),
    );
    let path = location.pathname().unwrap_or_default();
    let result = window()
        .history()
        .and_then(|history| history.replace_state_with_url(&JsValue::NULL, "", Some(&format!("{}{}", path, query))));
    if let Err(e) = result {
        gloo::console::warn!("history.replaceState 실패", e);
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let toast = use_toast();
    let modal = use_modal();

    let (workspaces, set_workspaces) = signal(Vec::<Workspace>::new());
    let filter = RwSignal::new(WorkspaceFilter::default());
    let initial = query_param(&current_query(), SELECTION_PARAM)
        .map(|value| JournalPreview::from_query_value(&value))
        .unwrap_or_default();
    let preview = RwSignal::new(initial);
    let columns = RwSignal::new(ColumnSet::default());
    let rename_target = RwSignal::new(None::<String>);

    let load = move || {
        spawn_local(async move {
            let client = api::client();
            match api::workspaces(&client).list().await {
                Ok(list) => {
                    cache_workspaces(&list);
                    set_workspaces.set(list);
                }
                Err(e) => {
                    gloo::console::error!("워크스페이스 목록 로딩 실패:", e.to_string());
                    toast.warning("로딩 실패", "Workspace 기록을 불러오지 못했습니다.");
                    set_workspaces.set(fallback_workspaces());
                }
            }
        });
    };
    load();

    Effect::new(move |_| preview.with(sync_selection_to_url));

    let on_create = move |name: String, start: Option<String>, end: Option<String>| {
        spawn_local(async move {
            let client = api::client();
            match api::workspaces(&client)
                .create(&name, start.as_deref(), end.as_deref())
                .await
            {
                Ok(created) => {
                    toast.success("워크스페이스 생성", &format!("{} 워크스페이스가 생성되었습니다.", created.workspace_name));
                    load();
                }
                Err(e) => toast.error("생성 실패", &e.to_string()),
            }
        });
    };

    let on_rename_request = move |name: String| {
        rename_target.set(Some(name));
        modal.show(ModalId::RenameWorkspace);
    };

    let on_rename = move |old: String, new: String| {
        spawn_local(async move {
            let client = api::client();
            match api::workspaces(&client).rename(&old, &new, false).await {
                Ok(renamed) => {
                    preview.update(|p| {
                        if p.is_selected(&renamed.old_name) {
                            p.toggle(&renamed.old_name, false);
                            p.toggle(&renamed.new_name, true);
                        }
                    });
                    toast.success("이름 변경", &format!("{} → {}", renamed.old_name, renamed.new_name));
                    load();
                }
                Err(e) => toast.error("이름 변경 실패", &e.to_string()),
            }
        });
    };

    let on_delete = move |name: String| {
        let question = format!("'{}' 워크스페이스를 삭제하시겠습니까?", name);
        if !window().confirm_with_message(&question).unwrap_or(false) {
            return;
        }
        spawn_local(async move {
            let client = api::client();
            match api::workspaces(&client).remove(&name).await {
                Ok(_) => {
                    preview.update(|p| p.toggle(&name, false));
                    toast.success("삭제 완료", &format!("{} 워크스페이스가 삭제되었습니다.", name));
                    load();
                }
                Err(e) => toast.error("삭제 실패", &e.to_string()),
            }
        });
    };

    let export_csv = move || {
        let visible = columns.with(|c| c.visible());
        let csv = preview.with(|p| preview_csv(&visible, &p.rows()));
        match download_csv(&csv, &export_file_name_today("csv")) {
            Ok(()) => toast.success("CSV 다운로드", "파일이 성공적으로 다운로드되었습니다."),
            Err(e) => toast.error("다운로드 실패", &e),
        }
    };

    view! {
        <div class="page dashboard-page">
            <header class="page-header">
                <h1 class="page-title">"대시보드"</h1>
                <button class="btn btn-primary" id="btn-new-workspace" on:click=move |_| modal.show(ModalId::CreateWorkspace)>
                    <i class="fa-solid fa-plus"></i>
                    " 새 워크스페이스"
                </button>
            </header>

            <WorkspaceList
                workspaces=workspaces
                filter=filter
                preview=preview
                on_create=move || modal.show(ModalId::CreateWorkspace)
                on_rename=on_rename_request
                on_delete=on_delete
            />

            // Excel 은 브라우저에서 CSV 로 대신한다
            <JournalPreviewPanel
                preview=preview
                columns=columns
                on_export_csv=export_csv
                on_export_excel=export_csv
            />

            <CreateWorkspaceModal on_create=on_create />
            <RenameWorkspaceModal target=rename_target on_rename=on_rename />
        </div>
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_selection_roundtrips_through_url() {
        let mut preview = JournalPreview::new();
        preview.toggle("wl_2025_w34", true);
        sync_selection_to_url(&preview);
        assert_eq!(
            query_param(&current_query(), SELECTION_PARAM).as_deref(),
            Some("wl_2025_w34")
        );

        sync_selection_to_url(&JournalPreview::new());
        assert_eq!(query_param(&current_query(), SELECTION_PARAM), None);
    }
}

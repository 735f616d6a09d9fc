//! 워크스페이스 화면: 업로드 → 프로젝트 지정 → 분개 생성
//!
//! 비동기 작업이 끝나면 행을 local_id 로 다시 찾아 갱신한다 (그 사이 삭제됐을 수 있음).

use std::collections::BTreeMap;

use leptos::prelude::*;
use leptos::task::spawn_local;
use voucher_ai_common::journal::{JournalTable, PipelineCounters, VoucherForm};
use voucher_ai_common::modal::ModalId;
use voucher_ai_common::navigation::{NavPage, WorkspaceRef};
use voucher_ai_common::reference::project_options;
use voucher_ai_common::services::{ImageUploadOptions, ZipUploadOptions};
use voucher_ai_common::types::Visualization;
use voucher_ai_common::{FileCandidate, FileTable, Notifier};
use web_sys::File;

use crate::api;
use crate::components::bulk_project_modal::BulkProjectModal;
use crate::components::file_table::FileTableView;
use crate::components::journal_table::JournalTableView;
use crate::components::modal::use_modal;
use crate::components::toast::use_toast;
use crate::components::upload_area::UploadArea;
use crate::components::voucher_modal::{PreviewModal, VoucherModal};

fn candidate(file: &File) -> FileCandidate {
    FileCandidate::new(&file.name(), file.size() as u64, &file.type_())
}

#[component]
pub fn WorkspacePage() -> impl IntoView {
    let query = window().location().search().unwrap_or_default();
    match WorkspaceRef::from_query(&query) {
        Some(workspace) => view! { <WorkspaceView workspace=workspace /> }.into_any(),
        None => view! {
            <div class="page empty-state">
                <p class="empty-title">"워크스페이스가 선택되지 않았습니다"</p>
                <a class="btn btn-primary" href=NavPage::Dashboard.href()>"대시보드로 이동"</a>
            </div>
        }
        .into_any(),
    }
}

#[component]
fn WorkspaceView(workspace: WorkspaceRef) -> impl IntoView {
    let toast = use_toast();
    let modal = use_modal();
    let name = StoredValue::new(workspace.id.clone());

    let table = RwSignal::new(FileTable::with_projects(project_options()));
    let journal = RwSignal::new(JournalTable::new());
    let (counters, set_counters) = signal(PipelineCounters::default());
    let (uploading, set_uploading) = signal(false);
    let (processing, set_processing) = signal(false);
    let voucher_form = RwSignal::new(None::<VoucherForm>);
    let visualization = RwSignal::new(None::<Visualization>);

    let refresh_files = move || {
        spawn_local(async move {
            let client = api::client();
            match api::uploads(&client).list_uploaded(&name.get_value()).await {
                Ok(files) => {
                    let added = table.try_update(|t| t.sync_uploaded(&files)).unwrap_or(0);
                    gloo::console::debug!("업로드 목록 동기화:", files.len(), "건, 추가", added);
                }
                Err(e) => toast.error("파일 목록 로딩 실패", &e.to_string()),
            }
        });
    };

    let load_drafts = move || {
        spawn_local(async move {
            let client = api::client();
            match api::journal(&client).drafts(&name.get_value()).await {
                Ok(entries) => journal.update(|j| j.replace(entries)),
                // 아직 분개를 만든 적 없는 워크스페이스
                Err(e) => gloo::console::warn!("분개 초안 없음:", e.to_string()),
            }
        });
    };

    refresh_files();
    load_drafts();

    let on_upload_images = move |files: Vec<File>| {
        let candidates: Vec<FileCandidate> = files.iter().map(candidate).collect();
        let outcome = table
            .try_update(|t| t.stage_with_notice(&candidates, &toast))
            .unwrap_or_default();
        if outcome.accepted.is_empty() {
            return;
        }
        let to_send = outcome.take_accepted(files);
        let ids = outcome.accepted;

        table.update(|t| t.mark_uploading(&ids));
        set_uploading.set(true);
        spawn_local(async move {
            let client = api::client();
            let result = api::uploads(&client)
                .upload_images(&name.get_value(), to_send, &ImageUploadOptions::default())
                .await;
            match result {
                Ok(result) => {
                    let reconcile = table
                        .try_update(|t| t.complete_upload(&ids, &result))
                        .unwrap_or_default();
                    toast.success("업로드 완료", &format!("{}개 파일이 업로드되었습니다.", reconcile.completed.len()));
                    if !reconcile.dropped.is_empty() {
                        toast.warning("일부 파일 누락", &reconcile.dropped.join(", "));
                    }
                    refresh_files();
                }
                Err(e) => {
                    table.update(|t| {
                        t.fail_upload(&ids);
                    });
                    toast.error("업로드 실패", &e.to_string());
                }
            }
            set_uploading.set(false);
        });
    };

    let on_upload_zip = move |file: File| {
        set_uploading.set(true);
        spawn_local(async move {
            let client = api::client();
            let file_name = file.name();
            let result = api::uploads(&client)
                .upload_zip(&name.get_value(), &file_name, file, &ZipUploadOptions::default())
                .await;
            match result {
                Ok(result) => {
                    let added = table
                        .try_update(|t| t.add_extracted(result.fs_result.stored_paths()))
                        .unwrap_or_default();
                    toast.success("ZIP 업로드 완료", &format!("{}개 파일이 추가되었습니다.", added.len()));
                    refresh_files();
                }
                Err(e) => toast.error("ZIP 업로드 실패", &e.to_string()),
            }
            set_uploading.set(false);
        });
    };

    let on_bulk_confirm = move |project_id: String| {
        let mapping = table.with_untracked(|t| t.bulk_project_mapping(&project_id));
        if mapping.is_empty() {
            toast.warning("프로젝트 일괄 수정", "업로드가 완료된 파일을 선택해주세요.");
            return;
        }
        spawn_local(async move {
            let client = api::client();
            match api::uploads(&client).set_projects(&name.get_value(), &mapping).await {
                Ok(_) => {
                    let updated = table
                        .try_update(|t| t.apply_project(mapping.keys(), Some(&project_id)))
                        .unwrap_or(0);
                    toast.success("프로젝트 변경", &format!("{}개 파일의 프로젝트가 변경되었습니다.", updated));
                }
                Err(e) => toast.error("프로젝트 변경 실패", &e.to_string()),
            }
        });
    };

    let on_row_project = move |local_id: String, project: Option<String>| {
        let server_id = table
            .try_update(|t| t.set_row_project(&local_id, project.as_deref()))
            .flatten();
        let Some(server_id) = server_id else {
            return;
        };
        spawn_local(async move {
            let client = api::client();
            let mapping = BTreeMap::from([(server_id, project)]);
            if let Err(e) = api::uploads(&client).set_projects(&name.get_value(), &mapping).await {
                toast.error("프로젝트 변경 실패", &e.to_string());
                refresh_files();
            }
        });
    };

    let on_remove = move |local_id: String| {
        let removed = table.try_update(|t| t.remove(&local_id)).flatten();
        let Some(server_id) = removed.and_then(|row| row.server_id) else {
            return;
        };
        spawn_local(async move {
            let client = api::client();
            if let Err(e) = api::uploads(&client)
                .set_excluded(&name.get_value(), &[server_id], true)
                .await
            {
                toast.error("삭제 실패", &e.to_string());
                refresh_files();
            }
        });
    };

    let on_generate = move || {
        set_processing.set(true);
        table.update(|t| {
            t.mark_processing();
        });
        spawn_local(async move {
            let client = api::client();
            match api::journal(&client).generate(&name.get_value()).await {
                Ok(result) => {
                    set_counters.set(PipelineCounters::from_result(&result));
                    let count = result.journal.len();
                    journal.update(|j| j.replace(result.journal));
                    table.update(|t| t.finish_processing(true));
                    toast.success("분개 생성 완료", &format!("{}건의 분개가 생성되었습니다.", count));
                }
                Err(e) => {
                    table.update(|t| t.finish_processing(false));
                    toast.error("분개 생성 실패", &e.to_string());
                }
            }
            set_processing.set(false);
        });
    };

    let on_refresh = move || {
        set_processing.set(true);
        spawn_local(async move {
            let client = api::client();
            match api::journal(&client).refresh(&name.get_value()).await {
                Ok(entries) => {
                    journal.update(|j| j.replace(entries));
                    toast.success("새로고침", "분개를 다시 불러왔습니다.");
                }
                Err(e) => toast.error("새로고침 실패", &e.to_string()),
            }
            set_processing.set(false);
        });
    };

    let on_archive = move || {
        set_processing.set(true);
        spawn_local(async move {
            let client = api::client();
            match api::journal(&client).archive(&name.get_value()).await {
                Ok(result) => toast.success("아카이브 완료", &result.archive_path),
                Err(e) => toast.error("아카이브 실패", &e.to_string()),
            }
            set_processing.set(false);
        });
    };

    let entry_file_id = move |index: usize| journal.with_untracked(|j| j.get(index).and_then(|e| e.file_id.clone()));

    let on_open = move |index: usize| {
        let Some(file_id) = entry_file_id(index) else {
            toast.warning("증빙 없음", "이 분개에는 연결된 증빙 파일이 없습니다.");
            return;
        };
        voucher_form.set(None);
        modal.show(ModalId::VoucherEdit);
        spawn_local(async move {
            let client = api::client();
            match api::journal(&client).voucher_data(&name.get_value(), &file_id).await {
                Ok(record) => voucher_form.set(Some(VoucherForm::from_voucher(&record.file_id, &record.voucher_data))),
                Err(e) => {
                    modal.hide(ModalId::VoucherEdit);
                    toast.error("증빙 데이터 로딩 실패", &e.to_string());
                }
            }
        });
    };

    let on_preview = move |index: usize| {
        let Some(file_id) = entry_file_id(index) else {
            return;
        };
        visualization.set(None);
        modal.show(ModalId::Preview);
        spawn_local(async move {
            let client = api::client();
            match api::journal(&client).visualization(&name.get_value(), &file_id).await {
                Ok(result) => visualization.set(Some(result)),
                Err(e) => {
                    modal.hide(ModalId::Preview);
                    toast.error("미리보기 실패", &e.to_string());
                }
            }
        });
    };

    view! {
        <div class="page workspace-page">
            <header class="page-header">
                <a class="back-link" href=NavPage::Dashboard.href() aria-label="대시보드로">
                    <i class="fa-solid fa-arrow-left"></i>
                </a>
                <h1 class="page-title" id="workspace-title">{workspace.title.clone()}</h1>
            </header>

            <UploadArea busy=uploading on_upload_images=on_upload_images on_upload_zip=on_upload_zip />

            <FileTableView
                table=table
                on_remove=on_remove
                on_row_project=on_row_project
                on_bulk_project=move || modal.show(ModalId::BulkProject)
            />

            <JournalTableView
                journal=journal
                counters=counters
                busy=processing
                on_generate=on_generate
                on_refresh=on_refresh
                on_archive=on_archive
                on_open=on_open
                on_preview=on_preview
            />

            <BulkProjectModal table=table on_confirm=on_bulk_confirm />
            <VoucherModal form=voucher_form />
            <PreviewModal visualization=visualization />
        </div>
    }
}

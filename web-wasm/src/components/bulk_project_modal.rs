//! 프로젝트 일괄 수정 모달

use leptos::prelude::*;
use voucher_ai_common::file_table::FileTable;
use voucher_ai_common::modal::ModalId;
use wasm_bindgen::JsCast;

use crate::components::modal::{use_modal, Modal};

/// 닫힌 뒤 포커스를 일괄 수정 버튼으로 돌려준다
fn restore_focus() {
    if let Some(button) = document()
        .get_element_by_id("btn-bulk-project")
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    {
        let _ = button.focus();
    }
}

#[component]
pub fn BulkProjectModal<F>(table: RwSignal<FileTable>, on_confirm: F) -> impl IntoView
where
    F: Fn(String) + Send + 'static,
{
    let modal = use_modal();
    let id = ModalId::BulkProject;
    let (project, set_project) = signal(String::new());

    // 열릴 때마다 선택을 비운다
    Effect::new(move |_| {
        if modal.is_open(id) {
            set_project.set(String::new());
        }
    });

    let close = move || {
        modal.hide(id);
        restore_focus();
    };

    let confirm = move |_| {
        let chosen = project.get_untracked();
        if chosen.is_empty() {
            return;
        }
        on_confirm(chosen);
        close();
    };

    view! {
        <Modal id=id title="프로젝트 일괄 수정">
            <div class="modal-body">
                <p>
                    "선택된 파일 "
                    <strong id="bulk-selected-count">{move || table.with(|t| t.selection_state().selected)}</strong>
                    "개의 프로젝트를 변경합니다."
                </p>
                <select
                    id="bulk-project-select"
                    class="form-select"
                    prop:value=move || project.get()
                    on:change=move |ev| set_project.set(event_target_value(&ev))
                >
                    <option value="">"N/A"</option>
                    {move || {
                        table
                            .with(|t| t.projects().to_vec())
                            .into_iter()
                            .map(|p| view! { <option value=p.id.clone()>{p.name.clone()}</option> })
                            .collect_view()
                    }}
                </select>
            </div>
            <div class="modal-footer">
                <button class="btn btn-secondary" on:click=move |_| close()>"취소"</button>
                <button
                    class="btn btn-primary"
                    id="bulk-project-confirm"
                    disabled=move || project.with(|p| p.is_empty())
                    on:click=confirm
                >
                    "적용"
                </button>
            </div>
        </Modal>
    }
}

//! 워크스페이스 생성 / 이름 변경 모달

use leptos::prelude::*;
use voucher_ai_common::modal::ModalId;

use crate::components::modal::{use_modal, Modal};

/// 이름과 정산 기간(선택)을 받아 생성한다
#[component]
pub fn CreateWorkspaceModal<F>(on_create: F) -> impl IntoView
where
    F: Fn(String, Option<String>, Option<String>) + Send + 'static,
{
    let modal = use_modal();
    let id = ModalId::CreateWorkspace;
    let name = RwSignal::new(String::new());
    let period_start = RwSignal::new(String::new());
    let period_end = RwSignal::new(String::new());

    Effect::new(move |_| {
        if modal.is_open(id) {
            name.set(String::new());
            period_start.set(String::new());
            period_end.set(String::new());
        }
    });

    let submit = move || {
        let value = name.get_untracked().trim().to_string();
        if value.is_empty() {
            return;
        }
        let optional = |s: String| (!s.is_empty()).then_some(s);
        on_create(
            value,
            optional(period_start.get_untracked()),
            optional(period_end.get_untracked()),
        );
        modal.hide(id);
    };

    view! {
        <Modal id=id title="새 워크스페이스">
            <form class="modal-body" on:submit=move |ev| {
                ev.prevent_default();
                submit();
            }>
                <div class="form-group">
                    <label for="new-workspace-name">"이름"</label>
                    <input
                        type="text"
                        id="new-workspace-name"
                        class="form-input"
                        placeholder="wl_2025_w35"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label for="new-period-start">"정산 시작일"</label>
                        <input
                            type="date"
                            id="new-period-start"
                            class="form-input"
                            prop:value=move || period_start.get()
                            on:change=move |ev| period_start.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="new-period-end">"정산 종료일"</label>
                        <input
                            type="date"
                            id="new-period-end"
                            class="form-input"
                            prop:value=move || period_end.get()
                            on:change=move |ev| period_end.set(event_target_value(&ev))
                        />
                    </div>
                </div>
                <div class="modal-footer">
                    <button type="button" class="btn btn-secondary" on:click=move |_| modal.hide(id)>"취소"</button>
                    <button type="submit" class="btn btn-primary" disabled=move || name.with(|n| n.trim().is_empty())>
                        "생성"
                    </button>
                </div>
            </form>
        </Modal>
    }
}

/// `target` 이 바뀔 대상 이름. 확인하면 (기존 이름, 새 이름) 으로 넘긴다.
#[component]
pub fn RenameWorkspaceModal<F>(target: RwSignal<Option<String>>, on_rename: F) -> impl IntoView
where
    F: Fn(String, String) + Send + 'static,
{
    let modal = use_modal();
    let id = ModalId::RenameWorkspace;
    let new_name = RwSignal::new(String::new());

    Effect::new(move |_| {
        if let Some(current) = target.get() {
            new_name.set(current);
        }
    });

    let submit = move || {
        let Some(old) = target.get_untracked() else {
            return;
        };
        let value = new_name.get_untracked().trim().to_string();
        if value.is_empty() || value == old {
            modal.hide(id);
            return;
        }
        on_rename(old, value);
        modal.hide(id);
    };

    view! {
        <Modal id=id title="이름 변경">
            <form class="modal-body" on:submit=move |ev| {
                ev.prevent_default();
                submit();
            }>
                <p class="text-muted">{move || target.get().unwrap_or_default()}</p>
                <div class="form-group">
                    <label for="rename-workspace">"새 이름"</label>
                    <input
                        type="text"
                        id="rename-workspace"
                        class="form-input"
                        prop:value=move || new_name.get()
                        on:input=move |ev| new_name.set(event_target_value(&ev))
                    />
                </div>
                <div class="modal-footer">
                    <button type="button" class="btn btn-secondary" on:click=move |_| modal.hide(id)>"취소"</button>
                    <button type="submit" class="btn btn-primary">"변경"</button>
                </div>
            </form>
        </Modal>
    }
}

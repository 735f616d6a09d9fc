//! 증빙 수정 모달 / 증빙 미리보기 모달

use leptos::prelude::*;
use voucher_ai_common::journal::{VoucherField, VoucherForm};
use voucher_ai_common::modal::ModalId;
use voucher_ai_common::types::Visualization;

use crate::components::modal::{use_modal, Modal};

/// 분개 행 더블클릭으로 여는 증빙 수정 폼.
/// 확인은 모달만 닫는다 (저장은 CLI `voucher set` 으로).
#[component]
pub fn VoucherModal(form: RwSignal<Option<VoucherForm>>) -> impl IntoView {
    let modal = use_modal();
    let id = ModalId::VoucherEdit;

    // 입력할 때마다 다시 그리지 않도록 파일이 바뀔 때만 필드를 새로 만든다
    let file_id = Memo::new(move |_| form.with(|f| f.as_ref().map(|f| f.file_id.clone())));
    let fields = move || {
        file_id.track();
        form.with_untracked(|f| {
            f.as_ref()
                .map(|f| f.fields().map(|(field, value)| (field, value.to_string())).collect::<Vec<_>>())
                .unwrap_or_default()
        })
    };

    view! {
        <Modal id=id title="증빙 수정">
            <div class="modal-body">
                <p class="text-muted">{move || file_id.get().unwrap_or_default()}</p>
                <form class="voucher-form" on:submit=move |ev| {
                    ev.prevent_default();
                    modal.hide(id);
                }>
                    {move || {
                        fields()
                            .into_iter()
                            .map(|(field, value)| view! { <VoucherFieldInput form=form field=field value=value /> })
                            .collect_view()
                    }}
                </form>
            </div>
            <div class="modal-footer">
                <button class="btn btn-secondary" on:click=move |_| modal.hide(id)>"취소"</button>
                <button class="btn btn-primary" on:click=move |_| modal.hide(id)>"확인"</button>
            </div>
        </Modal>
    }
}

#[component]
fn VoucherFieldInput(form: RwSignal<Option<VoucherForm>>, field: VoucherField, value: String) -> impl IntoView {
    let input_id = format!("voucher-{}", field.key());
    view! {
        <div class="form-group">
            <label for=input_id.clone()>{field.label()}</label>
            <input
                type="text"
                class="form-input"
                id=input_id
                name=field.key()
                value=value
                readonly=field.is_read_only()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| {
                        if let Some(f) = f.as_mut() {
                            f.set(field, &value);
                        }
                    });
                }
            />
        </div>
    }
}

/// 증빙 이미지 미리보기
#[component]
pub fn PreviewModal(visualization: RwSignal<Option<Visualization>>) -> impl IntoView {
    let modal = use_modal();
    let id = ModalId::Preview;

    view! {
        <Modal id=id title="증빙 미리보기">
            <div class="modal-body preview-body">
                {move || match visualization.get() {
                    Some(Visualization { file_id, image_url: Some(url), .. }) => view! {
                        <img class="preview-image" src=url alt=file_id />
                    }
                    .into_any(),
                    Some(_) => view! { <p class="text-muted">"미리보기 이미지가 없습니다"</p> }.into_any(),
                    None => view! { <p class="text-muted">"불러오는 중..."</p> }.into_any(),
                }}
            </div>
            <div class="modal-footer">
                <button class="btn btn-secondary" on:click=move |_| modal.hide(id)>"닫기"</button>
            </div>
        </Modal>
    }
}

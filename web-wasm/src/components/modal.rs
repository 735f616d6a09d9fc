//! 모달 컨트롤러와 공용 모달 틀

use leptos::ev;
use leptos::prelude::*;
use voucher_ai_common::modal::{next_focus, ModalId, ModalState};
use wasm_bindgen::JsCast;

const FOCUSABLE: &str = "button, [href], input, select, textarea, [tabindex]:not([tabindex=\"-1\"])";

/// 열린 모달 하나를 관리한다 (컨텍스트로 주입)
#[derive(Clone, Copy)]
pub struct ModalController {
    state: RwSignal<ModalState>,
}

impl ModalController {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ModalState::new()),
        }
    }

    pub fn show(&self, id: ModalId) {
        self.state.update(|s| s.show(id));
    }

    pub fn hide(&self, id: ModalId) {
        self.state.update(|s| {
            s.hide(id);
        });
    }

    /// 반응형: 해당 모달이 열려 있는지
    pub fn is_open(&self, id: ModalId) -> bool {
        self.state.with(|s| s.is_open(id))
    }

    /// Escape 키 처리와 body 스크롤 잠금을 건다 (앱 루트에서 한 번)
    pub fn install(&self) {
        let state = self.state;
        Effect::new(move |_| {
            let overflow = state.with(|s| s.body_overflow());
            if let Some(body) = document().body() {
                let _ = body.style().set_property("overflow", overflow);
            }
        });

        let handle = window_event_listener(ev::keydown, move |event| {
            if event.key() == "Escape" {
                state.update(|s| {
                    s.escape();
                });
            }
        });
        on_cleanup(move || handle.remove());
    }
}

impl Default for ModalController {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_modal() -> ModalController {
    expect_context::<ModalController>()
}

/// 공용 모달 틀. 열려 있는 동안 Tab 포커스를 모달 안에서 순환시킨다.
#[component]
pub fn Modal(id: ModalId, title: &'static str, children: Children) -> impl IntoView {
    let modal = use_modal();
    let dialog_ref = NodeRef::<leptos::html::Div>::new();

    let on_keydown = move |event: ev::KeyboardEvent| {
        if event.key() != "Tab" {
            return;
        }
        let Some(dialog) = dialog_ref.get() else {
            return;
        };
        let Ok(nodes) = dialog.query_selector_all(FOCUSABLE) else {
            return;
        };
        let focusable: Vec<web_sys::HtmlElement> = (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
            .collect();
        let active = document().active_element();
        let current = focusable
            .iter()
            .position(|el| active.as_ref().is_some_and(|a| a == el.unchecked_ref::<web_sys::Element>()));
        if let Some(next) = next_focus(current, focusable.len(), event.shift_key()) {
            event.prevent_default();
            let _ = focusable[next].focus();
        }
    };

    view! {
        <div
            class="modal"
            id=id.dom_id()
            role="dialog"
            aria-modal="true"
            aria-hidden=move || if modal.is_open(id) { "false" } else { "true" }
            on:keydown=on_keydown
        >
            <div class="modal-backdrop" on:click=move |_| modal.hide(id)></div>
            <div class="modal-dialog" node_ref=dialog_ref>
                <div class="modal-header">
                    <h3 class="modal-title">{title}</h3>
                    <button class="modal-close" aria-label="닫기" on:click=move |_| modal.hide(id)>
                        "×"
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}

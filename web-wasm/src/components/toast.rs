//! 토스트 알림 (컨텍스트로 주입)

use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use voucher_ai_common::notify::{Notifier, ToastKind, ToastQueue, DEFAULT_DURATION_MS, SHORT_DURATION_MS};

/// 페이지들이 공유하는 알림 서비스
#[derive(Clone, Copy)]
pub struct ToastService {
    queue: RwSignal<ToastQueue>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::new()),
        }
    }

    pub fn queue(&self) -> RwSignal<ToastQueue> {
        self.queue
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| {
            q.dismiss(id);
        });
    }

    /// 제목 없는 짧은 알림 (3초)
    pub fn notify(&self, kind: ToastKind, message: &str) {
        let id = self.queue.try_update(|q| q.push_short(kind, message));
        if let Some(id) = id {
            self.schedule_dismiss(id, SHORT_DURATION_MS);
        }
    }

    fn schedule_dismiss(&self, id: u64, duration_ms: u32) {
        let service = *self;
        Timeout::new(duration_ms, move || service.dismiss(id)).forget();
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ToastService {
    fn show(&self, kind: ToastKind, title: &str, message: &str) {
        let id = self.queue.try_update(|q| q.push(kind, title, message, DEFAULT_DURATION_MS));
        if let Some(id) = id {
            self.schedule_dismiss(id, DEFAULT_DURATION_MS);
        }
    }
}

pub fn use_toast() -> ToastService {
    expect_context::<ToastService>()
}

/// 화면 오른쪽 위 토스트 목록. 클릭하면 닫힌다.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toast = use_toast();
    let queue = toast.queue();

    view! {
        <div id="toast-container" class="toast-container" aria-live="polite">
            <For
                each=move || queue.with(|q| q.toasts().to_vec())
                key=|t| t.id
                children=move |t| {
                    let id = t.id;
                    view! {
                        <div
                            class=format!("toast {}", t.kind.as_str())
                            role="status"
                            on:click=move |_| toast.dismiss(id)
                        >
                            <div class="toast-content">
                                <div class="toast-icon">
                                    <i class=format!("fas {}", t.kind.icon())></i>
                                </div>
                                <div class="toast-message">
                                    <div class="toast-title">{t.title.clone()}</div>
                                    <div class="toast-description">{t.message.clone()}</div>
                                </div>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}

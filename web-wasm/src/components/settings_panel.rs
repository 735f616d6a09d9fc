//! API 설정 패널 (BASE_URL / TOKEN / 연결 테스트)

use leptos::prelude::*;
use voucher_ai_common::config::DEFAULT_BASE_URL;
use voucher_ai_common::settings::{PING_LABEL, PING_RUNNING_LABEL};

#[component]
pub fn SettingsPanel<FS, FP>(
    base_url: RwSignal<String>,
    token: RwSignal<String>,
    pinging: ReadSignal<bool>,
    on_save: FS,
    on_ping: FP,
) -> impl IntoView
where
    FS: Fn() + 'static + Clone,
    FP: Fn() + 'static,
{
    let save_on_enter = {
        let on_save = on_save.clone();
        move |ev: leptos::ev::KeyboardEvent| {
            if ev.key() == "Enter" {
                ev.prevent_default();
                on_save();
            }
        }
    };
    let save_on_enter_token = {
        let on_save = on_save.clone();
        move |ev: leptos::ev::KeyboardEvent| {
            if ev.key() == "Enter" {
                ev.prevent_default();
                on_save();
            }
        }
    };

    view! {
        <section class="content-section settings-panel" id="api-settings">
            <h2 class="section-title">"API 설정"</h2>
            <div class="settings-grid">
                <div class="form-group">
                    <label for="base-url">"BASE_URL"</label>
                    <input
                        type="url"
                        id="base-url"
                        class="form-input"
                        placeholder=DEFAULT_BASE_URL
                        prop:value=move || base_url.get()
                        on:input=move |ev| base_url.set(event_target_value(&ev))
                        on:keydown=save_on_enter
                    />
                </div>
                <div class="form-group">
                    <label for="token">"TOKEN"</label>
                    <input
                        type="password"
                        id="token"
                        class="form-input"
                        placeholder="Bearer 토큰 (선택)"
                        prop:value=move || token.get()
                        on:input=move |ev| token.set(event_target_value(&ev))
                        on:keydown=save_on_enter_token
                    />
                </div>
            </div>
            <div class="api-actions">
                <button class="btn btn-primary" id="btn-save-settings" on:click=move |_| on_save()>
                    <i class="fa-solid fa-floppy-disk"></i>
                    " 저장"
                </button>
                <button class="btn btn-secondary" id="btn-ping" disabled=move || pinging.get() on:click=move |_| on_ping()>
                    <i class="fa-solid fa-plug"></i>
                    {move || format!(" {}", if pinging.get() { PING_RUNNING_LABEL } else { PING_LABEL })}
                </button>
            </div>
        </section>
    }
}

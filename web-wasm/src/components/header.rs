//! 사이드바 내비게이션

use leptos::prelude::*;
use voucher_ai_common::navigation::{NavPage, LOGOUT_CONFIRM, LOGOUT_MESSAGE, LOGOUT_TITLE};
use voucher_ai_common::notify::Notifier;

use crate::components::toast::use_toast;

#[component]
pub fn Sidebar(current: NavPage) -> impl IntoView {
    let toast = use_toast();

    let on_logout = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        if window().confirm_with_message(LOGOUT_CONFIRM).unwrap_or(false) {
            gloo::console::log!("로그아웃");
            toast.info(LOGOUT_TITLE, LOGOUT_MESSAGE);
        }
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar-brand">
                <i class="fa-solid fa-receipt"></i>
                <span>"Voucher AI"</span>
            </div>
            <nav class="sidebar-nav">
                {NavPage::ALL
                    .into_iter()
                    .map(|page| {
                        let class = if page == current { "nav-link active" } else { "nav-link" };
                        view! {
                            <a class=class href=page.href()>
                                <i class=page.icon()></i>
                                <span>{page.label()}</span>
                            </a>
                        }
                    })
                    .collect_view()}
                <a class="nav-link" href="#logout" on:click=on_logout>
                    <i class="fa-solid fa-right-from-bracket"></i>
                    <span>"로그아웃"</span>
                </a>
            </nav>
        </aside>
    }
}

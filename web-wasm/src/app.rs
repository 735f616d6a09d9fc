//! 앱 루트: 공용 서비스 주입 + 현재 경로의 페이지

use leptos::prelude::*;
use voucher_ai_common::navigation::NavPage;

use crate::components::header::Sidebar;
use crate::components::modal::ModalController;
use crate::components::toast::{ToastHost, ToastService};
use crate::pages::dashboard::DashboardPage;
use crate::pages::settings::SettingsPage;
use crate::pages::workspace::WorkspacePage;

#[component]
pub fn App() -> impl IntoView {
    provide_context(ToastService::new());
    let modal = ModalController::new();
    provide_context(modal);
    modal.install();

    let path = window().location().pathname().unwrap_or_default();
    let page = NavPage::from_path(&path);
    gloo::console::debug!("페이지:", page.label());

    view! {
        <div class="app-layout">
            <Sidebar current=page />
            <main class="main-content">
                {match page {
                    NavPage::Dashboard => view! { <DashboardPage /> }.into_any(),
                    NavPage::Workspace => view! { <WorkspacePage /> }.into_any(),
                    NavPage::Settings => view! { <SettingsPage /> }.into_any(),
                }}
            </main>
            <ToastHost />
        </div>
    }
}

//! 설정 화면의 참조 데이터 표 (계정과목 / 프로젝트 / 거래 유형)
//!
//! Excel 업로드/다운로드와 편집/삭제는 아직 알림만 띄운다.

use leptos::prelude::*;
use voucher_ai_common::notify::Notifier;
use voucher_ai_common::reference::{CHART_OF_ACCOUNTS, COA_EFFECTIVE_DATE, PROJECTS, TRANSACTION_TYPES};
use voucher_ai_common::settings::{validate_excel_upload, ReferenceKind, DELETE_CONFIRM};
use web_sys::HtmlInputElement;

use crate::components::toast::use_toast;
use crate::components::upload_area::files_from_list;

#[component]
pub fn ReferenceTables() -> impl IntoView {
    view! {
        <ReferenceSection kind=ReferenceKind::Coa>
            <p class="text-muted">{format!("기준일 {}", COA_EFFECTIVE_DATE)}</p>
            <table class="reference-table">
                <thead>
                    <tr>
                        <th>"계정과목"</th>
                        <th>"계정코드"</th>
                        <th>"관리"</th>
                    </tr>
                </thead>
                <tbody>
                    {CHART_OF_ACCOUNTS
                        .iter()
                        .map(|(name, code)| view! {
                            <tr>
                                <td>{*name}</td>
                                <td>{*code}</td>
                                <td><RowActions kind=ReferenceKind::Coa id=code.to_string() /></td>
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
        </ReferenceSection>

        <ReferenceSection kind=ReferenceKind::Project>
            <table class="reference-table">
                <thead>
                    <tr>
                        <th>"코드"</th>
                        <th>"프로젝트명"</th>
                        <th>"시작일"</th>
                        <th>"종료일"</th>
                        <th>"상태"</th>
                        <th>"관리"</th>
                    </tr>
                </thead>
                <tbody>
                    {PROJECTS
                        .iter()
                        .map(|p| view! {
                            <tr>
                                <td>{p.code}</td>
                                <td>{p.name}</td>
                                <td>{p.start_date}</td>
                                <td>{p.end_date}</td>
                                <td><span class="status-badge">{p.status}</span></td>
                                <td><RowActions kind=ReferenceKind::Project id=p.code.to_string() /></td>
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
        </ReferenceSection>

        <ReferenceSection kind=ReferenceKind::Transaction>
            <table class="reference-table">
                <thead>
                    <tr>
                        <th>"코드"</th>
                        <th>"거래 유형"</th>
                        <th>"분류"</th>
                        <th>"사용 여부"</th>
                        <th>"관리"</th>
                    </tr>
                </thead>
                <tbody>
                    {TRANSACTION_TYPES
                        .iter()
                        .map(|t| view! {
                            <tr>
                                <td>{t.code}</td>
                                <td>{t.name}</td>
                                <td>{t.category}</td>
                                <td>
                                    <span class=if t.active { "status-badge active" } else { "status-badge inactive" }>
                                        {t.active_label()}
                                    </span>
                                </td>
                                <td><RowActions kind=ReferenceKind::Transaction id=t.code.to_string() /></td>
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
        </ReferenceSection>
    }
}

#[component]
fn ReferenceSection(kind: ReferenceKind, children: Children) -> impl IntoView {
    let toast = use_toast();
    let upload_input = NodeRef::<leptos::html::Input>::new();

    let on_file = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let files = files_from_list(input.files());
        input.set_value("");
        let Some(file) = files.into_iter().next() else {
            return;
        };
        if let Err(rejection) = validate_excel_upload(&file.name(), file.size() as u64) {
            toast.error("업로드 실패", &rejection.to_string());
            return;
        }
        toast.info("업로드", &kind.upload_started());
        gloo::console::log!("참조 데이터 업로드", kind.as_str(), file.name());
        toast.success("업로드 완료", &kind.upload_finished());
    };

    let on_download = move |_| {
        toast.info("다운로드", &kind.download_started());
        toast.success("다운로드 완료", &kind.download_finished());
    };

    view! {
        <section class="content-section reference-section" id=format!("reference-{}", kind.as_str())>
            <div class="section-header">
                <h2 class="section-title">{kind.title()}</h2>
                <div class="table-actions">
                    <button
                        class="btn btn-secondary btn-sm"
                        on:click=move |_| {
                            if let Some(input) = upload_input.get() {
                                input.click();
                            }
                        }
                    >
                        <i class="fa-solid fa-file-arrow-up"></i>
                        " Excel 업로드"
                    </button>
                    <button class="btn btn-secondary btn-sm" on:click=on_download>
                        <i class="fa-solid fa-file-arrow-down"></i>
                        " Excel 다운로드"
                    </button>
                    <input
                        type="file"
                        accept=".xlsx,.xls"
                        style="display: none"
                        node_ref=upload_input
                        on:change=on_file
                    />
                </div>
            </div>
            <div class="table-container">{children()}</div>
        </section>
    }
}

#[component]
fn RowActions(kind: ReferenceKind, id: String) -> impl IntoView {
    let toast = use_toast();
    let id = StoredValue::new(id);

    view! {
        <button
            class="btn-icon"
            aria-label="수정"
            on:click=move |_| toast.info("알림", &id.with_value(|id| kind.edit_pending(id)))
        >
            <i class="fa-solid fa-pen"></i>
        </button>
        <button
            class="btn-icon delete-icon"
            aria-label="삭제"
            on:click=move |_| {
                if window().confirm_with_message(DELETE_CONFIRM).unwrap_or(false) {
                    toast.info("알림", &id.with_value(|id| kind.delete_pending(id)));
                }
            }
        >
            <i class="fa-solid fa-trash"></i>
        </button>
    }
}

//! 업로드 파일 테이블
//!
//! 행은 local_id 로 키를 잡고, 각 셀은 테이블에서 자기 행을 다시 읽어 그린다.

use leptos::prelude::*;
use voucher_ai_common::file_table::{FileStatus, FileTable};

#[component]
pub fn FileTableView<FR, FP, FB>(
    table: RwSignal<FileTable>,
    on_remove: FR,
    on_row_project: FP,
    on_bulk_project: FB,
) -> impl IntoView
where
    FR: Fn(String) + 'static + Clone + Send + Sync,
    FP: Fn(String, Option<String>) + 'static + Clone + Send + Sync,
    FB: Fn() + 'static + Clone,
{
    let selection = move || table.with(|t| t.selection_state());
    let row_ids = move || table.with(|t| t.rows().iter().map(|r| r.local_id.clone()).collect::<Vec<_>>());

    view! {
        <section class="content-section" id="files-section">
            <div class="table-header">
                <h2 class="section-title">"업로드 파일"</h2>
                <div class="table-actions">
                    <span id="selected-count" class="selected-count">{move || selection().label()}</span>
                    <button
                        class="btn btn-secondary"
                        id="btn-bulk-project"
                        disabled=move || !selection().can_bulk_edit()
                        on:click=move |_| on_bulk_project()
                    >
                        "프로젝트 일괄 수정"
                    </button>
                </div>
            </div>
            <div class="table-container">
                <table class="file-table">
                    <thead>
                        <tr>
                            <th>
                                <input
                                    type="checkbox"
                                    id="select-all"
                                    aria-label="전체 선택"
                                    disabled=move || selection().total == 0
                                    prop:checked=move || selection().all_checked
                                    prop:indeterminate=move || selection().indeterminate
                                    on:change=move |ev| {
                                        let checked = event_target_checked(&ev);
                                        table.update(|t| t.select_all(checked));
                                    }
                                />
                            </th>
                            <th>"No."</th>
                            <th>"파일명"</th>
                            <th>"프로젝트"</th>
                            <th>"상태"</th>
                            <th>"삭제"</th>
                        </tr>
                    </thead>
                    <tbody id="file-rows">
                        <Show when=move || table.with(|t| t.is_empty())>
                            <tr class="empty-row">
                                <td colspan="6" class="text-muted">"업로드된 파일이 없습니다"</td>
                            </tr>
                        </Show>
                        <For
                            each=row_ids
                            key=|id| id.clone()
                            children=move |id| {
                                let on_remove = on_remove.clone();
                                let on_row_project = on_row_project.clone();
                                view! {
                                    <FileRowView
                                        table=table
                                        local_id=id
                                        on_remove=on_remove
                                        on_row_project=on_row_project
                                    />
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        </section>
    }
}

#[component]
fn FileRowView<FR, FP>(
    table: RwSignal<FileTable>,
    local_id: String,
    on_remove: FR,
    on_row_project: FP,
) -> impl IntoView
where
    FR: Fn(String) + 'static + Clone + Send + Sync,
    FP: Fn(String, Option<String>) + 'static + Clone + Send + Sync,
{
    let id = StoredValue::new(local_id);
    let name = move || table.with(|t| id.with_value(|id| t.get(id).map(|r| r.name.clone())).unwrap_or_default());
    let status = move || table.with(|t| id.with_value(|id| t.get(id).map(|r| r.status))).unwrap_or(FileStatus::Pending);
    let project = move || table.with(|t| id.with_value(|id| t.get(id).and_then(|r| r.project_id.clone())));
    let projects = move || table.with(|t| t.projects().to_vec());

    view! {
        <tr data-file-id=id.get_value() class=move || format!("file-row status-{}", status().as_str())>
            <td>
                <input
                    type="checkbox"
                    class="row-checkbox"
                    aria-label=move || format!("{} 선택", name())
                    prop:checked=move || table.with(|t| id.with_value(|id| t.is_selected(id)))
                    on:change=move |_| {
                        table.update(|t| {
                            id.with_value(|id| t.toggle_select(id));
                        });
                    }
                />
            </td>
            <td>{move || table.with(|t| id.with_value(|id| t.row_number(id))).unwrap_or(0)}</td>
            <td>
                <span class="file-name" title=name>{name}</span>
            </td>
            <td>
                <select
                    class="project-select"
                    disabled=move || status() == FileStatus::Uploading
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        let project = (!value.is_empty()).then_some(value);
                        on_row_project(id.get_value(), project);
                    }
                >
                    <option value="" selected=move || project().is_none()>"N/A"</option>
                    {move || {
                        let current = project();
                        projects()
                            .into_iter()
                            .map(|p| {
                                let selected = current.as_deref() == Some(p.id.as_str());
                                view! { <option value=p.id.clone() selected=selected>{p.name.clone()}</option> }
                            })
                            .collect_view()
                    }}
                </select>
            </td>
            <td>
                <span class=move || format!("status-badge {}", status().as_str())>{move || status().label()}</span>
            </td>
            <td class="delete-cell">
                <button
                    class="btn-icon delete-icon"
                    aria-label="삭제"
                    disabled=move || status() == FileStatus::Uploading
                    on:click=move |_| on_remove(id.get_value())
                >
                    <i class="fa-solid fa-trash"></i>
                </button>
            </td>
        </tr>
    }
}

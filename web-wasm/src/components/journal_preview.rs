//! 대시보드 분개 미리보기 (선택한 워크스페이스 기준)

use leptos::prelude::*;
use voucher_ai_common::dashboard::{format_won, ColumnSet, JournalColumn, JournalPreview};

#[component]
pub fn JournalPreviewPanel<FC, FE>(
    preview: RwSignal<JournalPreview>,
    columns: RwSignal<ColumnSet>,
    on_export_csv: FC,
    on_export_excel: FE,
) -> impl IntoView
where
    FC: Fn() + 'static,
    FE: Fn() + 'static,
{
    let (menu_open, set_menu_open) = signal(false);
    let visible = move || columns.with(|c| c.visible());
    let selected = move || preview.with(|p| p.selected().map(str::to_string).collect::<Vec<_>>());

    view! {
        <section class="content-section" id="journal-preview">
            <div class="section-header">
                <h2 class="section-title">"분개 미리보기"</h2>
                <div class="table-actions">
                    <div class="column-toggle">
                        <button
                            class="btn btn-secondary btn-sm"
                            id="btn-columns"
                            aria-expanded=move || menu_open.get().to_string()
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            <i class="fa-solid fa-table-columns"></i>
                            " 컬럼"
                        </button>
                        <Show when=move || menu_open.get()>
                            <div class="column-menu">
                                {JournalColumn::ALL
                                    .into_iter()
                                    .map(|column| view! {
                                        <label class="column-option">
                                            <input
                                                type="checkbox"
                                                data-column=column.key()
                                                prop:checked=move || columns.with(|c| c.is_visible(column))
                                                on:change=move |ev| {
                                                    let checked = event_target_checked(&ev);
                                                    columns.update(|c| c.toggle(column, checked));
                                                }
                                            />
                                            {column.label()}
                                        </label>
                                    })
                                    .collect_view()}
                            </div>
                        </Show>
                    </div>
                    <button class="btn btn-secondary btn-sm" id="btn-export-csv" on:click=move |_| on_export_csv()>
                        <i class="fa-solid fa-file-csv"></i>
                        " CSV"
                    </button>
                    <button class="btn btn-secondary btn-sm" id="btn-export-excel" on:click=move |_| on_export_excel()>
                        <i class="fa-solid fa-file-excel"></i>
                        " Excel"
                    </button>
                </div>
            </div>

            <div class="selection-badges">
                <span class="selected-count">{move || format!("{}개 선택됨", preview.with(|p| p.selected_count()))}</span>
                <For
                    each=selected
                    key=|name| name.clone()
                    children=move |name| {
                        let label = name.clone();
                        view! {
                            <span class="badge">
                                {label}
                                <button
                                    class="badge-remove"
                                    aria-label="선택 해제"
                                    on:click=move |_| preview.update(|p| p.toggle(&name, false))
                                >
                                    "×"
                                </button>
                            </span>
                        }
                    }
                />
            </div>

            <Show
                when=move || preview.with(|p| p.selected_count() > 0)
                fallback=|| view! { <p class="empty-state text-muted">"워크스페이스를 선택하면 분개를 미리 볼 수 있습니다"</p> }
            >
                <div class="table-container">
                    <table class="preview-table">
                        <thead>
                            <tr>
                                {move || visible().into_iter().map(|c| view! { <th>{c.label()}</th> }).collect_view()}
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let cols = visible();
                                preview
                                    .with(|p| p.rows())
                                    .into_iter()
                                    .map(|row| {
                                        let cells = cols
                                            .iter()
                                            .map(|c| view! { <td>{c.display(row)}</td> })
                                            .collect_view();
                                        view! { <tr data-journal-id=row.id>{cells}</tr> }
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </div>
                <div class="preview-summary">
                    {move || {
                        let (count, total) = preview.with(|p| p.summary());
                        format!("총 {}건 / 합계 {}", count, format_won(total))
                    }}
                </div>
            </Show>
        </section>
    }
}

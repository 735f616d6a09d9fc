//! 분개 테이블 (파이프라인 결과)

use leptos::prelude::*;
use voucher_ai_common::dashboard::format_won;
use voucher_ai_common::journal::{JournalTable, PipelineCounters};

#[component]
pub fn JournalTableView<FG, FR, FA, FO, FP>(
    journal: RwSignal<JournalTable>,
    counters: ReadSignal<PipelineCounters>,
    busy: ReadSignal<bool>,
    on_generate: FG,
    on_refresh: FR,
    on_archive: FA,
    on_open: FO,
    on_preview: FP,
) -> impl IntoView
where
    FG: Fn() + 'static,
    FR: Fn() + 'static,
    FA: Fn() + 'static,
    FO: Fn(usize) + 'static + Clone + Send + Sync,
    FP: Fn(usize) + 'static + Clone + Send + Sync,
{
    let rows = move || {
        journal.with(|j| {
            let generation = j.generation();
            j.entries()
                .iter()
                .cloned()
                .enumerate()
                .map(|(i, entry)| (generation, i, entry))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <section class="content-section" id="journal-section">
            <div class="table-header">
                <h2 class="section-title">"분개"</h2>
                <div class="table-actions">
                    <button class="btn btn-primary" id="btn-generate" disabled=move || busy.get() on:click=move |_| on_generate()>
                        <i class="fa-solid fa-wand-magic-sparkles"></i>
                        {move || if busy.get() { " 처리 중..." } else { " 분개 생성" }}
                    </button>
                    <button class="btn btn-secondary" disabled=move || busy.get() on:click=move |_| on_refresh()>
                        <i class="fa-solid fa-rotate"></i>
                        " 새로고침"
                    </button>
                    <button class="btn btn-secondary" disabled=move || busy.get() on:click=move |_| on_archive()>
                        <i class="fa-solid fa-box-archive"></i>
                        " 아카이브"
                    </button>
                </div>
            </div>

            <Show when=move || !counters.get().is_empty()>
                <div class="pipeline-counters">{move || counters.get().summary()}</div>
            </Show>

            <div class="table-container">
                <table class="journal-table">
                    <thead>
                        <tr>
                            <th>"회계일자"</th>
                            <th>"구분"</th>
                            <th>"계정과목"</th>
                            <th>"계정코드"</th>
                            <th>"금액"</th>
                            <th>"거래처명"</th>
                            <th>"적요"</th>
                            <th>"프로젝트명"</th>
                            <th>"증빙"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show when=move || journal.with(|j| j.is_empty())>
                            <tr class="empty-row">
                                <td colspan="9" class="text-muted">"생성된 분개가 없습니다"</td>
                            </tr>
                        </Show>
                        <For
                            each=rows
                            key=|(generation, i, _)| (*generation, *i)
                            children=move |(_, index, entry)| {
                                let on_open = on_open.clone();
                                let on_preview = on_preview.clone();
                                let has_file = entry.file_id.is_some();
                                view! {
                                    <tr
                                        class="journal-row"
                                        title="더블클릭하여 증빙 수정"
                                        on:dblclick=move |_| on_open(index)
                                    >
                                        <td>{entry.date.clone()}</td>
                                        <td>{entry.side.clone()}</td>
                                        <td>{entry.account_title.clone()}</td>
                                        <td>{entry.account_code.clone()}</td>
                                        <td class="amount">{format_won(entry.amount)}</td>
                                        <td>{entry.customer_name.clone()}</td>
                                        <td>{entry.memo.clone()}</td>
                                        <td>{entry.project_name.clone()}</td>
                                        <td>
                                            <button
                                                class="btn-icon"
                                                aria-label="증빙 미리보기"
                                                disabled=!has_file
                                                on:click=move |ev| {
                                                    ev.stop_propagation();
                                                    on_preview(index);
                                                }
                                            >
                                                <i class="fa-solid fa-image"></i>
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>

            <Show when=move || !journal.with(|j| j.is_empty())>
                <div class="journal-totals">
                    <span>{move || format!("차변 합계 {}", format_won(journal.with(|j| j.total_debit())))}</span>
                    <span>{move || format!("대변 합계 {}", format_won(journal.with(|j| j.total_credit())))}</span>
                    <Show when=move || !journal.with(|j| j.is_balanced())>
                        <span class="text-warning">"차대 불일치"</span>
                    </Show>
                </div>
            </Show>
        </section>
    }
}

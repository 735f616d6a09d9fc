//! 대시보드 워크스페이스 카드 목록 (검색/기간/정렬)

use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use voucher_ai_common::dashboard::{workspace_cards, JournalPreview, SortOption, WorkspaceCard, WorkspaceFilter};
use voucher_ai_common::navigation::WorkspaceRef;
use voucher_ai_common::Workspace;

const SEARCH_DEBOUNCE_MS: u32 = 300;

fn card_key(card: &WorkspaceCard) -> String {
    match card {
        WorkspaceCard::Placeholder => String::from("__new__"),
        WorkspaceCard::Workspace(w) => format!("ws:{}", w.name()),
    }
}

fn period_label(w: &Workspace) -> String {
    match (w.period_start.as_deref(), w.period_end.as_deref()) {
        (Some(start), Some(end)) => format!("{} ~ {}", start, end),
        (Some(start), None) => format!("{} ~", start),
        _ => w.created_date().unwrap_or("-").to_string(),
    }
}

#[component]
pub fn WorkspaceList<FC, FR, FD>(
    workspaces: ReadSignal<Vec<Workspace>>,
    filter: RwSignal<WorkspaceFilter>,
    preview: RwSignal<JournalPreview>,
    on_create: FC,
    on_rename: FR,
    on_delete: FD,
) -> impl IntoView
where
    FC: Fn() + 'static + Clone + Send + Sync,
    FR: Fn(String) + 'static + Clone + Send + Sync,
    FD: Fn(String) + 'static + Clone + Send + Sync,
{
    let search_timer = StoredValue::new_local(None::<Timeout>);

    let on_search = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        // 이전 타이머는 drop 되면서 취소된다
        let timer = Timeout::new(SEARCH_DEBOUNCE_MS, move || {
            filter.update(|f| f.search = value);
        });
        search_timer.set_value(Some(timer));
    };

    let filtered = move || workspaces.with(|list| filter.with(|f| f.apply(list)));
    let cards = move || workspace_cards(filtered());

    view! {
        <section class="content-section" id="workspace-section">
            <div class="section-header">
                <h2 class="section-title">"워크스페이스"</h2>
                <div class="filter-bar">
                    <input
                        type="search"
                        id="workspace-search"
                        class="form-input"
                        placeholder="워크스페이스 검색"
                        on:input=on_search
                    />
                    <input
                        type="date"
                        id="date-from"
                        class="form-input"
                        aria-label="시작일"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            filter.update(|f| f.date_from = value);
                        }
                    />
                    <input
                        type="date"
                        id="date-to"
                        class="form-input"
                        aria-label="종료일"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            filter.update(|f| f.date_to = value);
                        }
                    />
                    <select
                        id="sort-select"
                        class="form-select"
                        on:change=move |ev| {
                            let sort = SortOption::from_value(&event_target_value(&ev));
                            filter.update(|f| f.sort = sort);
                        }
                    >
                        {SortOption::ALL
                            .into_iter()
                            .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                            .collect_view()}
                    </select>
                </div>
            </div>

            <div class="workspace-grid">
                <For
                    each=cards
                    key=card_key
                    children=move |card| {
                        let on_create = on_create.clone();
                        let on_rename = on_rename.clone();
                        let on_delete = on_delete.clone();
                        match card {
                            WorkspaceCard::Placeholder => view! { <PlaceholderCard on_create=on_create /> }.into_any(),
                            WorkspaceCard::Workspace(w) => view! {
                                <WorkspaceCardView workspace=w preview=preview on_rename=on_rename on_delete=on_delete />
                            }
                            .into_any(),
                        }
                    }
                />
            </div>

            <Show when=move || workspaces.with(|list| !list.is_empty()) && filtered().is_empty()>
                <div class="empty-state">
                    <i class="fa-solid fa-magnifying-glass"></i>
                    <p class="empty-title">"검색 결과가 없습니다"</p>
                    <p class="text-muted">"다른 키워드로 검색해보세요."</p>
                </div>
            </Show>
        </section>
    }
}

#[component]
fn PlaceholderCard<FC>(on_create: FC) -> impl IntoView
where
    FC: Fn() + 'static + Clone + Send + Sync,
{
    let on_key = on_create.clone();
    view! {
        <div
            class="workspace-card placeholder"
            tabindex="0"
            role="button"
            on:click=move |_| on_create()
            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                if ev.key() == "Enter" || ev.key() == " " {
                    ev.prevent_default();
                    on_key();
                }
            }
        >
            <i class="fa-solid fa-plus"></i>
            <span>"새 워크스페이스"</span>
        </div>
    }
}

#[component]
fn WorkspaceCardView<FR, FD>(
    workspace: Workspace,
    preview: RwSignal<JournalPreview>,
    on_rename: FR,
    on_delete: FD,
) -> impl IntoView
where
    FR: Fn(String) + 'static + Clone + Send + Sync,
    FD: Fn(String) + 'static + Clone + Send + Sync,
{
    let name = StoredValue::new(workspace.name().to_string());
    let selected = move || preview.with(|p| name.with_value(|n| p.is_selected(n)));
    let toggle = move || {
        let now = !selected();
        preview.update(|p| name.with_value(|n| p.toggle(n, now)));
    };
    let updated = workspace
        .updated_at
        .as_deref()
        .map(|s| s.get(..10).unwrap_or(s).to_string())
        .unwrap_or_else(|| "-".to_string());
    let open_href = WorkspaceRef::new(workspace.name(), workspace.name()).href();

    view! {
        <div
            class=move || if selected() { "workspace-card selected" } else { "workspace-card" }
            tabindex="0"
            role="checkbox"
            aria-checked=move || selected().to_string()
            data-workspace-id=name.get_value()
            on:click=move |_| toggle()
            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                if ev.key() == "Enter" || ev.key() == " " {
                    ev.prevent_default();
                    toggle();
                }
            }
        >
            <div class="card-header">
                <input
                    type="checkbox"
                    class="card-checkbox"
                    tabindex="-1"
                    prop:checked=selected
                    on:click=move |ev| ev.stop_propagation()
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        preview.update(|p| name.with_value(|n| p.toggle(n, checked)));
                    }
                />
                <h3 class="card-title">{name.get_value()}</h3>
                <span class="status-badge">{workspace.status.label()}</span>
            </div>
            <div class="card-body">
                <p class="card-period">
                    <i class="fa-regular fa-calendar"></i>
                    " "
                    {period_label(&workspace)}
                </p>
                <p class="card-updated text-muted">{format!("최근 수정 {}", updated)}</p>
            </div>
            <div class="card-actions" on:click=move |ev| ev.stop_propagation()>
                <a class="btn btn-primary btn-sm" href=open_href>"열기"</a>
                <button class="btn btn-secondary btn-sm" on:click=move |_| on_rename(name.get_value())>
                    "이름 변경"
                </button>
                <button class="btn btn-danger btn-sm" on:click=move |_| on_delete(name.get_value())>
                    "삭제"
                </button>
            </div>
        </div>
    }
}

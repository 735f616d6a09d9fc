//! 업로드 영역 (이미지 다중 선택 / ZIP)
//!
//! 선택한 파일은 바로 올리지 않고 미리보기에 담아두었다가 버튼을 누르면 넘긴다.

use leptos::prelude::*;
use web_sys::{DragEvent, File, FileList, HtmlInputElement};

pub const ACCEPTED_TYPES: &str = "image/jpeg,image/png,application/pdf";

pub fn files_from_list(list: Option<FileList>) -> Vec<File> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

#[component]
pub fn UploadArea<FI, FZ>(busy: ReadSignal<bool>, on_upload_images: FI, on_upload_zip: FZ) -> impl IntoView
where
    FI: Fn(Vec<File>) + 'static + Clone,
    FZ: Fn(File) + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);
    let pending_images = RwSignal::new_local(Vec::<File>::new());
    let pending_zip = RwSignal::new_local(None::<File>);
    let file_input = NodeRef::<leptos::html::Input>::new();
    let zip_input = NodeRef::<leptos::html::Input>::new();

    let open_file_dialog = move || {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(false);
        let files = files_from_list(ev.data_transfer().and_then(|dt| dt.files()));
        if !files.is_empty() {
            pending_images.set(files);
        }
    };

    let on_file_change = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        pending_images.set(files_from_list(input.files()));
        input.set_value("");
    };

    let on_zip_change = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        pending_zip.set(files_from_list(input.files()).into_iter().next());
        input.set_value("");
    };

    let on_images_click = move |_| {
        let files = pending_images.try_update(std::mem::take).unwrap_or_default();
        if files.is_empty() {
            open_file_dialog();
        } else {
            on_upload_images(files);
        }
    };

    let on_zip_click = move |_| match pending_zip.try_update(Option::take).flatten() {
        Some(file) => on_upload_zip(file),
        None => {
            if let Some(input) = zip_input.get() {
                input.click();
            }
        }
    };

    view! {
        <section class="content-section" id="upload-section">
            <h2 class="section-title">"파일 업로드"</h2>
            <div
                class=move || if is_dragover.get() { "upload-box drag-over" } else { "upload-box" }
                data-testid="upload-dropzone"
                tabindex="0"
                role="button"
                on:click=move |_| open_file_dialog()
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Enter" || ev.key() == " " {
                        ev.prevent_default();
                        open_file_dialog();
                    }
                }
                on:dragover=move |ev: DragEvent| {
                    ev.prevent_default();
                    set_is_dragover.set(true);
                }
                on:dragleave=move |_: DragEvent| set_is_dragover.set(false)
                on:drop=on_drop
            >
                <Show
                    when=move || pending_images.with(|f| !f.is_empty()) || pending_zip.with(|z| z.is_some())
                    fallback=|| view! {
                        <div class="upload-icon"><i class="fa-solid fa-cloud-arrow-up"></i></div>
                        <p class="upload-ment">"파일을 끌어다 놓거나 클릭해서 선택하세요"</p>
                        <p class="upload-instructions">"JPG, PNG, PDF (파일당 10MB 이하)"</p>
                    }
                >
                    <div class="upload-preview-container">
                        {move || {
                            pending_zip.with(|zip| zip.as_ref().map(|z| z.name())).map(|name| view! {
                                <div class="upload-preview-header">"ZIP 파일 선택됨"</div>
                                <div class="upload-preview-files">
                                    <span class="upload-preview-file-name">{name}</span>
                                </div>
                                <div class="upload-preview-instruction">
                                    "아래 "<strong>"ZIP 파일 업로드"</strong>" 버튼을 클릭하세요"
                                </div>
                            })
                        }}
                        {move || {
                            let names: Vec<String> = pending_images.with(|files| files.iter().map(|f| f.name()).collect());
                            (!names.is_empty()).then(|| view! {
                                <div class="upload-preview-header">{format!("{}개 파일 선택됨", names.len())}</div>
                                <div class="upload-preview-files">
                                    {names
                                        .into_iter()
                                        .enumerate()
                                        .map(|(i, name)| view! {
                                            <div class="upload-preview-file-item">
                                                <span class="upload-preview-file-name">{format!("{}. {}", i + 1, name)}</span>
                                            </div>
                                        })
                                        .collect_view()}
                                </div>
                            })
                        }}
                    </div>
                </Show>
            </div>

            <input
                type="file"
                id="file-input"
                multiple=true
                accept=ACCEPTED_TYPES
                style="display: none"
                node_ref=file_input
                on:change=on_file_change
            />
            <input
                type="file"
                id="zip-input"
                accept=".zip,application/zip"
                style="display: none"
                node_ref=zip_input
                on:change=on_zip_change
            />

            <div class="upload-actions">
                <button
                    class="btn btn-primary"
                    id="btn-upload-images"
                    disabled=move || busy.get()
                    on:click=on_images_click
                >
                    <i class="fa-solid fa-upload"></i>
                    " 이미지 업로드"
                </button>
                <button
                    class="btn btn-secondary"
                    id="btn-upload-zip"
                    disabled=move || busy.get()
                    on:click=on_zip_click
                >
                    <i class="fa-solid fa-file-zipper"></i>
                    " ZIP 파일 업로드"
                </button>
            </div>
        </section>
    }
}

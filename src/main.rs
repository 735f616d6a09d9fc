use anyhow::{bail, Context};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;
use voucher_ai::cli::{Cli, Commands, JournalAction, JournalArgs, VoucherAction, WorkspaceAction};
use voucher_ai::http::CliClient;
use voucher_ai::notifier::StdoutNotifier;
use voucher_ai::{cli, config, error, export, http, scanner};
use voucher_ai_common::dashboard::format_won;
use voucher_ai_common::journal::{JournalTable, PipelineCounters, VoucherField, VoucherForm};
use voucher_ai_common::services::{ImageUploadOptions, ZipUploadOptions};
use voucher_ai_common::settings::{connection_failure_message, connection_success_message, BASE_URL_REQUIRED};
use voucher_ai_common::{ApiError, JournalEntry, JournalService, Notifier, UploadsService, WorkspacesService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let store = config::load()?;

    if let Commands::Config { base_url, token, show } = &cli.command {
        if let Some(url) = base_url {
            store.set_base_url(url);
            println!("✔ BASE_URL 을 설정했습니다");
        }
        if let Some(token) = token {
            store.set_token(token);
            println!("✔ TOKEN 을 설정했습니다");
        }
        if *show || (base_url.is_none() && token.is_none()) {
            println!("설정 ({}):", store.store().path().display());
            println!("  BASE_URL: {}", store.base_url());
            println!("  TOKEN: {}", config::mask_token(&store.token()));
        }
        return Ok(());
    }

    let api = http::client(store, cli.verbose);
    let notifier = StdoutNotifier;

    match cli.command {
        Commands::Config { .. } => {}

        Commands::Ping => ping(&api, &notifier).await?,

        Commands::Workspace { action } => workspace(&api, action).await?,

        Commands::Upload { workspace, paths, zip, allowed_ext, no_rename, recursive } => {
            println!("📤 voucher-ai - 업로드 ({})\n", workspace);
            if zip {
                upload_zips(&api, &notifier, &workspace, &paths, allowed_ext, !no_rename).await?;
            } else {
                let options = ImageUploadOptions {
                    rename_on_conflict: !no_rename,
                    allowed_ext,
                    ..ImageUploadOptions::default()
                };
                upload_images(&api, &notifier, &workspace, &paths, recursive, &options).await?;
            }
        }

        Commands::Files { workspace } => {
            let files = UploadsService::new(&api)
                .list_uploaded(&workspace)
                .await
                .context("업로드 목록 조회 실패")?;
            if files.is_empty() {
                println!("업로드된 파일이 없습니다");
            }
            for (i, file) in files.iter().enumerate() {
                println!(
                    "{:>3}. {}  [{}]{}",
                    i + 1,
                    file.rel,
                    file.project.as_deref().unwrap_or("N/A"),
                    if file.excluded { " (제외됨)" } else { "" }
                );
            }
        }

        Commands::Assign { workspace, project, server_ids } => {
            let mapping = server_ids.iter().map(|id| (id.clone(), project.clone())).collect();
            UploadsService::new(&api)
                .set_projects(&workspace, &mapping)
                .await
                .context("프로젝트 지정 실패")?;
            let label = project.as_deref().unwrap_or("N/A");
            notifier.success("프로젝트 지정", &format!("{}개 파일 → {}", server_ids.len(), label));
        }

        Commands::Journal { action } => journal(&api, &notifier, action).await?,

        Commands::Voucher { action } => voucher(&api, &notifier, action).await?,

        Commands::Visualization { workspace, file_id } => {
            let viz = JournalService::new(&api)
                .visualization(&workspace, &file_id)
                .await
                .context("시각화 조회 실패")?;
            println!("파일: {}", viz.file_id);
            println!("  이미지 URL: {}", viz.image_url.as_deref().unwrap_or("-"));
            println!("  경로: {}", viz.fs_path.as_deref().unwrap_or("-"));
        }
    }

    Ok(())
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner} {msg} ({elapsed})") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}

async fn ping(api: &CliClient, notifier: &StdoutNotifier) -> anyhow::Result<()> {
    if api.config().base_url().trim().is_empty() {
        notifier.warning("연결 테스트", BASE_URL_REQUIRED);
        return Ok(());
    }
    match WorkspacesService::new(api).list().await {
        Ok(list) => notifier.success("연결 테스트", &connection_success_message(list.len())),
        Err(e) => {
            let err = match e {
                voucher_ai_common::Error::Api(api_err) => api_err,
                other => ApiError::local(other.to_string()),
            };
            bail!(connection_failure_message(&err));
        }
    }
    Ok(())
}

async fn workspace(api: &CliClient, action: WorkspaceAction) -> anyhow::Result<()> {
    let service = WorkspacesService::new(api);
    match action {
        WorkspaceAction::List => {
            let list = service.list().await.context("워크스페이스 목록 조회 실패")?;
            if list.is_empty() {
                println!("워크스페이스가 없습니다");
            }
            for ws in &list {
                let period = match (&ws.period_start, &ws.period_end) {
                    (Some(start), Some(end)) => format!("{} ~ {}", start, end),
                    _ => "-".to_string(),
                };
                println!(
                    "{}  [{}]  기간: {}  생성: {}{}",
                    ws.name(),
                    ws.status.label(),
                    period,
                    ws.created_date().unwrap_or("-"),
                    if ws.archived { "  (아카이브)" } else { "" }
                );
            }
        }
        WorkspaceAction::Create { name, period_start, period_end } => {
            let created = service
                .create(&name, period_start.as_deref(), period_end.as_deref())
                .await
                .context("워크스페이스 생성 실패")?;
            println!("✔ 워크스페이스를 만들었습니다: {}", created.workspace_name);
        }
        WorkspaceAction::Rename { old_name, new_name, include_archived } => {
            let renamed = service
                .rename(&old_name, &new_name, include_archived)
                .await
                .context("이름 변경 실패")?;
            println!("✔ {} → {}", renamed.old_name, renamed.new_name);
        }
        WorkspaceAction::Delete { name, yes } => {
            if !yes {
                let confirmed = dialoguer::Confirm::new()
                    .with_prompt(format!("'{}' 워크스페이스를 삭제하시겠습니까?", name))
                    .default(false)
                    .interact()
                    .context("입력을 읽지 못했습니다")?;
                if !confirmed {
                    bail!(error::VoucherAiError::Cancelled);
                }
            }
            service.remove(&name).await.context("워크스페이스 삭제 실패")?;
            println!("✔ 삭제했습니다: {}", name);
        }
        WorkspaceAction::Period { name, start, end } => {
            service
                .update_period(&name, &start, &end)
                .await
                .context("정산 기간 변경 실패")?;
            println!("✔ 정산 기간: {} ~ {}", start, end);
        }
    }
    Ok(())
}

async fn upload_images(
    api: &CliClient,
    notifier: &StdoutNotifier,
    workspace: &str,
    paths: &[PathBuf],
    recursive: bool,
    options: &ImageUploadOptions,
) -> anyhow::Result<()> {
    println!("[1/2] 파일 스캔 중...");
    let scanned = scanner::scan_paths(paths, recursive)?;
    let plan = scanner::plan_upload(scanned, notifier);
    if plan.files.is_empty() {
        let joined: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
        bail!(error::VoucherAiError::NoFilesFound(joined.join(", ")));
    }
    println!("✔ {}개 파일 업로드 대상\n", plan.files.len());

    println!("[2/2] 업로드 중...");
    let pb = spinner(&format!("{}개 파일 전송", plan.files.len()));
    let files: Vec<PathBuf> = plan.files.iter().map(|f| f.path.clone()).collect();
    let result = UploadsService::new(api).upload_images(workspace, files, options).await;
    pb.finish_and_clear();
    let result = result.context("업로드 실패")?;

    let stored = result.fs_result.stored_paths();
    for path in stored {
        println!("  + {}", path);
    }
    if !result.fs_result.skipped.is_empty() {
        notifier.warning("업로드", &format!("{}개 파일을 건너뛰었습니다", result.fs_result.skipped.len()));
    }
    if !result.fs_result.errors.is_empty() {
        notifier.error("업로드", &format!("{}개 파일 저장 실패", result.fs_result.errors.len()));
    }
    notifier.success("업로드 완료", &format!("{}개 파일이 업로드되었습니다", stored.len()));
    Ok(())
}

async fn upload_zips(
    api: &CliClient,
    notifier: &StdoutNotifier,
    workspace: &str,
    paths: &[PathBuf],
    allowed_ext: Option<String>,
    rename_on_conflict: bool,
) -> anyhow::Result<()> {
    let options = ZipUploadOptions {
        rename_on_conflict,
        allowed_ext,
        ..ZipUploadOptions::default()
    };
    let service = UploadsService::new(api);
    for path in paths {
        if !path.is_file() {
            bail!(error::VoucherAiError::FileNotFound(path.display().to_string()));
        }
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let pb = spinner(&format!("{} 전송", file_name));
        let result = service.upload_zip(workspace, &file_name, path.clone(), &options).await;
        pb.finish_and_clear();
        let result = result.with_context(|| format!("ZIP 업로드 실패: {}", file_name))?;
        let stored = result.fs_result.stored_paths();
        notifier.success("ZIP 업로드 완료", &format!("{}: {}개 파일 추출", file_name, stored.len()));
    }
    Ok(())
}

async fn journal(api: &CliClient, notifier: &StdoutNotifier, action: JournalAction) -> anyhow::Result<()> {
    let service = JournalService::new(api);
    let (args, entries) = match action {
        JournalAction::Archive { workspace } => {
            let archived = service.archive(&workspace).await.context("아카이브 실패")?;
            notifier.success("아카이브", &format!("저장 위치: {}", archived.archive_path));
            return Ok(());
        }
        JournalAction::Run(args) => {
            let pb = spinner("OCR + 분개 생성 중");
            let result = service.generate(&args.workspace).await;
            pb.finish_and_clear();
            let result = result.context("분개 생성 실패")?;
            let counters = PipelineCounters::from_result(&result);
            if !counters.is_empty() {
                println!("✔ {}", counters.summary());
            }
            if let Some(path) = &result.journal_path {
                println!("  분개 파일: {}", path);
            }
            (args, result.journal)
        }
        JournalAction::Drafts(args) => {
            let entries = service.drafts(&args.workspace).await.context("분개 초안 조회 실패")?;
            (args, entries)
        }
        JournalAction::Refresh(args) => {
            let entries = service.refresh(&args.workspace).await.context("분개 새로고침 실패")?;
            (args, entries)
        }
    };

    print_journal(&entries);
    export_if_requested(&args, &entries)?;
    Ok(())
}

fn print_journal(entries: &[JournalEntry]) {
    let mut table = JournalTable::new();
    table.replace(entries.to_vec());
    if table.is_empty() {
        println!("생성된 분개가 없습니다");
        return;
    }
    for entry in table.entries() {
        println!(
            "{}  {:<2}  {:<10} {:>6}  {:>12}  {}  {}",
            entry.date,
            entry.side,
            entry.account_title,
            entry.account_code,
            format_won(entry.amount),
            entry.customer_name,
            entry.memo
        );
    }
    println!(
        "\n차변 합계 {} / 대변 합계 {}{}",
        format_won(table.total_debit()),
        format_won(table.total_credit()),
        if table.is_balanced() { "" } else { "  ⚠ 차대 불일치" }
    );
}

fn export_if_requested(args: &JournalArgs, entries: &[JournalEntry]) -> anyhow::Result<()> {
    let Some(format) = &args.export else {
        return Ok(());
    };
    let output_dir = args.output.clone().unwrap_or_else(|| PathBuf::from("."));
    let today = chrono::Local::now().date_naive();
    let written = export::export_journal(entries, format, &output_dir, today)?;
    for path in written {
        println!("✔ 저장: {}", path.display());
    }
    Ok(())
}

async fn voucher(api: &CliClient, notifier: &StdoutNotifier, action: VoucherAction) -> anyhow::Result<()> {
    let service = JournalService::new(api);
    match action {
        VoucherAction::Get { workspace, file_id } => {
            let record = service
                .voucher_data(&workspace, &file_id)
                .await
                .context("증빙 데이터 조회 실패")?;
            let form = VoucherForm::from_voucher(&record.file_id, &record.voucher_data);
            for (field, value) in form.fields() {
                println!("  {:<14} {:<10} {}", field.key(), field.label(), if value.is_empty() { "-" } else { value });
            }
        }
        VoucherAction::Set { workspace, file_id, edits } => {
            let data = cli::parse_edits(&edits)?;
            let updated = service
                .update_voucher_data(&workspace, &file_id, &data)
                .await
                .context("증빙 데이터 수정 실패")?;
            let changed: Vec<String> = updated
                .edits
                .keys()
                .map(|k| VoucherField::from_key(k).map(|f| f.label().to_string()).unwrap_or_else(|| k.clone()))
                .collect();
            notifier.success("증빙 수정", &format!("{}: {}", updated.file_id, changed.join(", ")));
        }
    }
    Ok(())
}

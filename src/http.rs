//! reqwest 전송 계층 (multipart 파일은 경로로 넘긴다)

use std::path::{Path, PathBuf};
use std::time::Instant;

use reqwest::multipart::{Form, Part};
use voucher_ai_common::api::{
    ApiClient, FormPart, HttpMethod, HttpRequest, HttpResponse, RequestBody, Transport, TransportError,
};
use voucher_ai_common::config::ConfigStore;

use crate::config::FileStore;
use crate::scanner::mime_for_path;

pub type CliClient = ApiClient<ReqwestTransport, FileStore>;

#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    verbose: bool,
}

impl ReqwestTransport {
    pub fn new(verbose: bool) -> Self {
        Self {
            client: reqwest::Client::new(),
            verbose,
        }
    }

    async fn execute(&self, request: HttpRequest<PathBuf>) -> Result<HttpResponse, TransportError> {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.body(value.to_string()),
            RequestBody::Multipart(parts) => builder.multipart(build_form(parts).await?),
        };

        let response = builder.send().await.map_err(|e| TransportError(e.to_string()))?;
        let status = response.status();
        let body = response.text().await.map_err(|e| TransportError(e.to_string()))?;

        Ok(HttpResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        })
    }
}

impl Transport for ReqwestTransport {
    type File = PathBuf;

    async fn send(&self, request: HttpRequest<PathBuf>) -> Result<HttpResponse, TransportError> {
        let method = request.method;
        let url = request.url.clone();
        let started = Instant::now();

        let result = self.execute(request).await;

        if self.verbose {
            let elapsed = started.elapsed().as_millis();
            match &result {
                Ok(response) => eprintln!("  API {} {} - {} ({}ms)", method, url, response.status, elapsed),
                Err(e) => eprintln!("  API {} {} - 네트워크 오류: {}", method, url, e),
            }
        }
        result
    }
}

async fn build_form(parts: Vec<FormPart<PathBuf>>) -> Result<Form, TransportError> {
    let mut form = Form::new();
    for part in parts {
        form = match part {
            FormPart::Text { name, value } => form.text(name, value),
            FormPart::File { name, file } => form.part(name, file_part(&file).await?),
        };
    }
    Ok(form)
}

async fn file_part(path: &Path) -> Result<Part, TransportError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| TransportError(format!("{}: {}", path.display(), e)))?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let part = Part::bytes(bytes).file_name(file_name);
    match mime_for_path(path) {
        Some(mime) => part.mime_str(mime).map_err(|e| TransportError(e.to_string())),
        None => Ok(part),
    }
}

pub fn client(config: ConfigStore<FileStore>, verbose: bool) -> CliClient {
    ApiClient::new(ReqwestTransport::new(verbose), config)
}

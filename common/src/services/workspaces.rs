//! 워크스페이스 CRUD

use serde_json::{json, Value};

use super::workspace_path;
use crate::api::{data, ApiClient, Transport};
use crate::config::KeyValueStore;
use crate::types::{CreatedWorkspace, RenamedWorkspace, Workspace, WorkspaceList};
use crate::validate::validate_workspace_name;
use crate::Result;

pub struct WorkspacesService<'a, T, S> {
    api: &'a ApiClient<T, S>,
}

impl<'a, T: Transport, S: KeyValueStore> WorkspacesService<'a, T, S> {
    pub fn new(api: &'a ApiClient<T, S>) -> Self {
        Self { api }
    }

    pub async fn create(&self, name: &str, period_start: Option<&str>, period_end: Option<&str>) -> Result<CreatedWorkspace> {
        let name = validate_workspace_name(Some(name))?;
        let body = json!({
            "workspaceName": name,
            "periodStart": period_start,
            "periodEnd": period_end,
        });
        let env = self.api.post("/workspaces", Some(body)).await?;
        data(env)
    }

    pub async fn rename(&self, old_name: &str, new_name: &str, include_archived: bool) -> Result<RenamedWorkspace> {
        let path = workspace_path(old_name, "")?;
        let new_name = validate_workspace_name(Some(new_name))?;
        let body = json!({
            "newName": new_name,
            "includeArchived": include_archived,
        });
        let env = self.api.patch(&path, body).await?;
        data(env)
    }

    pub async fn remove(&self, name: &str) -> Result<Value> {
        let path = workspace_path(name, "")?;
        Ok(self.api.delete(&path).await?.data)
    }

    pub async fn list(&self) -> Result<Vec<Workspace>> {
        let env = self.api.get("/workspaces").await?;
        let list: WorkspaceList = data(env)?;
        Ok(list.workspaces)
    }

    pub async fn update_period(&self, name: &str, period_start: &str, period_end: &str) -> Result<Value> {
        let path = workspace_path(name, "/period")?;
        let body = json!({
            "periodStart": period_start,
            "periodEnd": period_end,
        });
        Ok(self.api.patch(&path, body).await?.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{HttpMethod, RequestBody};
    use crate::mock::{client, MockTransport};
    use crate::{Error, ValidationError};
    use futures::executor::block_on;

    #[test]
    fn test_invalid_names_never_reach_transport() {
        let api = client(MockTransport::new());
        let service = WorkspacesService::new(&api);
        let too_long = "a".repeat(129);

        for name in ["", "   ", too_long.as_str()] {
            let err = block_on(service.create(name, None, None)).unwrap_err();
            assert!(err.is_validation(), "{:?}", err);
            let err = block_on(service.remove(name)).unwrap_err();
            assert!(err.is_validation());
        }
        assert_eq!(api.transport().request_count(), 0);
    }

    #[test]
    fn test_create_body() {
        let api = client(MockTransport::new().respond(200, r#"{"ok":true,"data":{"workspaceName":"w1"}}"#));
        let created = block_on(WorkspacesService::new(&api).create(" w1 ", Some("2025-08-01"), None)).unwrap();
        assert_eq!(created.workspace_name, "w1");

        let req = api.transport().last_request();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://test/workspaces");
        assert_eq!(
            req.body,
            RequestBody::Json(json!({"workspaceName": "w1", "periodStart": "2025-08-01", "periodEnd": null}))
        );
    }

    #[test]
    fn test_rename_encodes_path() {
        let api = client(
            MockTransport::new().respond(200, r#"{"ok":true,"data":{"oldName":"8월 정산","newName":"9월"}}"#),
        );
        let renamed = block_on(WorkspacesService::new(&api).rename("8월 정산", "9월", false)).unwrap();
        assert_eq!(renamed.new_name, "9월");

        let req = api.transport().last_request();
        assert_eq!(req.method, HttpMethod::Patch);
        assert_eq!(req.url, "http://test/workspaces/8%EC%9B%94%20%EC%A0%95%EC%82%B0");
        assert_eq!(req.body, RequestBody::Json(json!({"newName": "9월", "includeArchived": false})));
    }

    #[test]
    fn test_rename_validates_new_name() {
        let api = client(MockTransport::new());
        let err = block_on(WorkspacesService::new(&api).rename("a", " ", false)).unwrap_err();
        assert!(matches!(err, Error::Validation(ValidationError::BlankWorkspaceName)));
        assert_eq!(api.transport().request_count(), 0);
    }

    #[test]
    fn test_list_reads_workspaces() {
        let api = client(MockTransport::new().respond(
            200,
            r#"{"ok":true,"data":{"workspaces":[{"workspace_name":"a","status":"active"},{"workspace_name":"b","status":"completed"}]}}"#,
        ));
        let list = block_on(WorkspacesService::new(&api).list()).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].name(), "b");
    }

    #[test]
    fn test_update_period_path() {
        let api = client(MockTransport::new().respond(200, r#"{"ok":true,"data":{}}"#));
        block_on(WorkspacesService::new(&api).update_period("w", "2025-08-01", "2025-08-31")).unwrap();
        let req = api.transport().last_request();
        assert_eq!(req.url, "http://test/workspaces/w/period");
        assert_eq!(req.method, HttpMethod::Patch);
    }

    #[test]
    fn test_api_error_propagates() {
        let api = client(MockTransport::new().respond_with(404, "Not Found", r#"{"ok":false,"error":"workspace not found"}"#));
        let err = block_on(WorkspacesService::new(&api).remove("ghost")).unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "workspace not found");
    }
}

//! 페이지 이동과 워크스페이스 식별자 (쿼리 문자열)

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavPage {
    #[default]
    Dashboard,
    Workspace,
    Settings,
}

impl NavPage {
    pub const ALL: [NavPage; 3] = [NavPage::Dashboard, NavPage::Workspace, NavPage::Settings];

    pub fn href(&self) -> &'static str {
        match self {
            NavPage::Dashboard => "/dashboard/dashboard.html",
            NavPage::Workspace => "/workspace/workspace.html",
            NavPage::Settings => "/settings/settings.html",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NavPage::Dashboard => "대시보드",
            NavPage::Workspace => "워크스페이스",
            NavPage::Settings => "설정",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            NavPage::Dashboard => "fa-solid fa-chart-line",
            NavPage::Workspace => "fa-solid fa-folder-open",
            NavPage::Settings => "fa-solid fa-gear",
        }
    }

    /// 경로의 마지막 요소로 페이지를 판단 (`/`, `index.html` 은 대시보드)
    pub fn from_path(path: &str) -> Self {
        let last = path
            .split(['?', '#'])
            .next()
            .unwrap_or("")
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or("");
        let stem = last.strip_suffix(".html").unwrap_or(last);
        match stem {
            "workspace" => NavPage::Workspace,
            "settings" => NavPage::Settings,
            _ => NavPage::Dashboard,
        }
    }
}

pub const LOGOUT_CONFIRM: &str = "정말 로그아웃하시겠습니까?";
pub const LOGOUT_TITLE: &str = "로그아웃";
pub const LOGOUT_MESSAGE: &str = "로그아웃되었습니다.";

/// 페이지 사이에서 넘기는 워크스페이스 식별자
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkspaceRef {
    pub id: String,
    pub title: String,
}

impl WorkspaceRef {
    pub fn new(id: &str, title: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
        }
    }

    /// `?id=..&title=..` 를 읽는다. 예전 링크의 `workspace` 도 받는다.
    ///
    /// id 가 없으면 `workspace`, title 이 없으면 `workspace` → id 순으로 채운다.
    pub fn from_query(query: &str) -> Option<Self> {
        let id = query_param(query, "id");
        let title = query_param(query, "title");
        let legacy = query_param(query, "workspace");

        let id = id.or_else(|| legacy.clone())?;
        let title = title.or(legacy).unwrap_or_else(|| id.clone());
        Some(Self { id, title })
    }

    pub fn to_query(&self) -> String {
        format!(
            "?id={}&title={}",
            urlencoding::encode(&self.id),
            urlencoding::encode(&self.title)
        )
    }

    /// 워크스페이스 페이지로 가는 링크
    pub fn href(&self) -> String {
        format!("{}{}", NavPage::Workspace.href(), self.to_query())
    }
}

/// 쿼리 문자열에서 값 하나를 꺼낸다 (빈 값은 없음으로 본다)
pub fn query_param(query: &str, name: &str) -> Option<String> {
    query
        .trim_start_matches('?')
        .split('&')
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| decode_component(value))
        .filter(|value| !value.trim().is_empty())
}

fn decode_component(value: &str) -> String {
    let value = value.replace('+', " ");
    urlencoding::decode(&value)
        .map(|decoded| decoded.into_owned())
        .unwrap_or(value)
}

/// 쿼리 문자열의 한 항목을 바꾸거나 지운다 (순서는 유지)
pub fn set_query_param(query: &str, name: &str, value: Option<&str>) -> String {
    let mut pairs: Vec<String> = query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter(|pair| pair.split('=').next() != Some(name))
        .map(str::to_string)
        .collect();
    if let Some(value) = value {
        pairs.push(format!("{}={}", name, urlencoding::encode(value)));
    }
    if pairs.is_empty() {
        String::new()
    } else {
        format!("?{}", pairs.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(NavPage::from_path("/workspace/workspace.html"), NavPage::Workspace);
        assert_eq!(NavPage::from_path("/app/settings.html?x=1"), NavPage::Settings);
        assert_eq!(NavPage::from_path("/settings/"), NavPage::Settings);
        assert_eq!(NavPage::from_path("/"), NavPage::Dashboard);
        assert_eq!(NavPage::from_path("/index.html"), NavPage::Dashboard);
    }

    #[test]
    fn test_workspace_ref_roundtrip() {
        let ws = WorkspaceRef::new("wl 2025/w34", "8월 넷째 주");
        let query = ws.to_query();
        assert!(query.starts_with("?id=wl%202025%2Fw34&title="));
        assert_eq!(WorkspaceRef::from_query(&query), Some(ws));
    }

    #[test]
    fn test_title_falls_back() {
        let ws = WorkspaceRef::from_query("?id=wl_2025_w34").unwrap();
        assert_eq!(ws.title, "wl_2025_w34");

        let legacy = WorkspaceRef::from_query("workspace=old_ws").unwrap();
        assert_eq!(legacy.id, "old_ws");
        assert_eq!(legacy.title, "old_ws");

        let both = WorkspaceRef::from_query("?id=a&workspace=b").unwrap();
        assert_eq!(both.title, "b");
    }

    #[test]
    fn test_missing_id() {
        assert_eq!(WorkspaceRef::from_query(""), None);
        assert_eq!(WorkspaceRef::from_query("?title=x&id="), None);
    }

    #[test]
    fn test_set_query_param() {
        assert_eq!(set_query_param("?a=1", "worklogIds", Some("x,y")), "?a=1&worklogIds=x%2Cy");
        assert_eq!(set_query_param("?worklogIds=x&a=1", "worklogIds", None), "?a=1");
        assert_eq!(set_query_param("", "worklogIds", None), "");
        assert_eq!(query_param("?worklogIds=x%2Cy", "worklogIds").as_deref(), Some("x,y"));
    }
}

//! 응답 봉투 `{ok, data, error, ts}`

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const INVALID_JSON_MESSAGE: &str = "Invalid JSON response";

/// 백엔드 공통 응답 형태
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub data: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ts: Option<String>,
}

impl Envelope {
    /// 응답 본문 파싱. JSON 객체가 아니면 `{ok:false, error:"Invalid JSON response"}` 로 취급한다.
    pub fn parse(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_else(|_| Self::invalid())
    }

    pub fn invalid() -> Self {
        Self {
            ok: false,
            data: Value::Null,
            error: Some(INVALID_JSON_MESSAGE.to_string()),
            ts: None,
        }
    }

    /// 비어있지 않은 error 필드
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_success() {
        let env = Envelope::parse(r#"{"ok":true,"data":{"workspaces":[]},"ts":"2025-08-26T00:00:00Z"}"#);
        assert!(env.ok);
        assert_eq!(env.data, json!({"workspaces": []}));
        assert_eq!(env.ts.as_deref(), Some("2025-08-26T00:00:00Z"));
    }

    #[test]
    fn test_parse_not_json() {
        let env = Envelope::parse("<html>502 Bad Gateway</html>");
        assert!(!env.ok);
        assert_eq!(env.error_message(), Some(INVALID_JSON_MESSAGE));
    }

    #[test]
    fn test_parse_json_array_is_invalid() {
        assert_eq!(Envelope::parse("[1,2]"), Envelope::invalid());
    }

    #[test]
    fn test_missing_ok_is_false() {
        let env = Envelope::parse(r#"{"data":1}"#);
        assert!(!env.ok);
        assert_eq!(env.error_message(), None);
    }

    #[test]
    fn test_empty_error_is_ignored() {
        let env = Envelope::parse(r#"{"ok":false,"error":""}"#);
        assert_eq!(env.error_message(), None);
    }
}

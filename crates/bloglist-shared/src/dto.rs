//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Request body for creating or replacing a blog.
///
/// Every field is optional on the wire; keys other than these four are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlogPayload {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub likes: Option<i64>,
}

/// A stored blog as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogResponse {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likes: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_ignores_unknown_keys() {
        let payload: BlogPayload = serde_json::from_str(
            r#"{"title":"T","url":"http://t","likes":null,"_id":"x","extra":1}"#,
        )
        .unwrap();

        assert_eq!(payload.title.as_deref(), Some("T"));
        assert_eq!(payload.url.as_deref(), Some("http://t"));
        assert_eq!(payload.author, None);
        assert_eq!(payload.likes, None);
    }

    #[test]
    fn test_response_omits_absent_fields() {
        let response = BlogResponse {
            id: "abc".to_string(),
            title: Some("T".to_string()),
            author: None,
            url: None,
            likes: Some(0),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({"id": "abc", "title": "T", "likes": 0}));
    }
}

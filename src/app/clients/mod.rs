use crate::utils::error::{LabError, Result};
use serde_json::Value;

pub mod calculation;
pub mod paper;
pub mod protocol;

/// Tagged view of a cleanup/analysis reply: the service answers with either
/// a `markdown` payload or an `error` message, never both. A 2xx body
/// carrying neither is a decode failure, not an empty success.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum RemoteReply {
    Markdown(String),
    Error(String),
}

impl RemoteReply {
    pub(crate) fn parse(reply: Value) -> Result<Self> {
        if let Some(markdown) = reply.get("markdown").and_then(Value::as_str) {
            return Ok(RemoteReply::Markdown(markdown.to_string()));
        }
        if let Some(error) = reply.get("error").and_then(Value::as_str) {
            return Ok(RemoteReply::Error(error.to_string()));
        }
        Err(LabError::MalformedResponse {
            body: reply.to_string(),
        })
    }
}

/// Joins the configured base address with an endpoint path.
pub(crate) fn join_endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn markdown_field_wins() {
        let reply = RemoteReply::parse(json!({"markdown": "# SOP"})).unwrap();
        assert_eq!(reply, RemoteReply::Markdown("# SOP".to_string()));
    }

    #[test]
    fn error_field_is_surfaced() {
        let reply = RemoteReply::parse(json!({"error": "quota exceeded"})).unwrap();
        assert_eq!(reply, RemoteReply::Error("quota exceeded".to_string()));
    }

    #[test]
    fn empty_body_is_a_decode_failure() {
        let err = RemoteReply::parse(json!({})).unwrap_err();
        assert!(matches!(err, LabError::MalformedResponse { .. }));
    }

    #[test]
    fn base_address_trailing_slash_is_tolerated() {
        assert_eq!(
            join_endpoint("http://localhost:8000/", "clean-protocol"),
            "http://localhost:8000/clean-protocol"
        );
        assert_eq!(
            join_endpoint("http://localhost:8000", "clean-protocol"),
            "http://localhost:8000/clean-protocol"
        );
    }
}

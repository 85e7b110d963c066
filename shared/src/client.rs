use serde::Deserialize;
use serde_json::Value;

use crate::error::{ConversionError, FALLBACK_ERROR_MESSAGE};
use crate::model::{ConversionRequest, ConversionResult};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Backend location, resolved once and handed to [`ConversionClient::new`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Uses `value` when it is present and non-blank, otherwise the loopback default.
    pub fn from_override(value: Option<&str>) -> Self {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(url) => Self::new(url),
            None => Self::new(DEFAULT_BASE_URL),
        }
    }

    pub fn convert_url(&self) -> String {
        format!("{}/convert", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Issues a single JSON POST. Implementations report unreachable hosts and
/// aborted requests as [`ConversionError::Transport`].
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn post_json(&self, url: &str, body: String) -> Result<RawResponse, ConversionError>;
}

pub struct ConversionClient<T> {
    config: ApiConfig,
    transport: T,
}

impl<T: Transport> ConversionClient<T> {
    pub fn new(config: ApiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub async fn submit(
        &self,
        request: &ConversionRequest,
    ) -> Result<ConversionResult, ConversionError> {
        let body = request.to_json();

        let url = self.config.convert_url();
        log::debug!(
            "POST {} (framework: {}, image: {})",
            url,
            request.framework,
            request.image_payload.is_some()
        );

        let response = self.transport.post_json(&url, body).await?;
        interpret_response(response.status, &response.body)
    }
}

#[derive(Deserialize, Default)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<Value>,
}

/// Maps a backend reply onto the typed outcome. Success bodies are not
/// validated beyond being a JSON object; absent fields come back empty.
pub fn interpret_response(status: u16, body: &str) -> Result<ConversionResult, ConversionError> {
    if !(200..300).contains(&status) {
        return Err(ConversionError::Backend {
            status,
            message: error_message(body),
        });
    }

    let value: Value = serde_json::from_str(body)
        .map_err(|e| ConversionError::MalformedResponse(e.to_string()))?;
    if !value.is_object() {
        return Err(ConversionError::MalformedResponse(
            "expected a JSON object".to_string(),
        ));
    }

    serde_json::from_value(value).map_err(|e| ConversionError::MalformedResponse(e.to_string()))
}

fn error_message(body: &str) -> String {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();

    match parsed.detail {
        Some(Value::String(detail)) if !detail.is_empty() => detail,
        Some(Value::Null) | Some(Value::String(_)) | None => FALLBACK_ERROR_MESSAGE.to_string(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_to_loopback() {
        assert_eq!(ApiConfig::from_override(None).base_url, "http://127.0.0.1:8000");
        assert_eq!(ApiConfig::from_override(Some("   ")).base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn config_override_drops_trailing_slash() {
        let config = ApiConfig::from_override(Some("https://api.example.com/"));
        assert_eq!(config.convert_url(), "https://api.example.com/convert");
    }

    #[test]
    fn backend_detail_becomes_message() {
        let err = interpret_response(500, r#"{"detail":"bad equation"}"#).unwrap_err();
        assert_eq!(err.to_string(), "bad equation");
    }

    #[test]
    fn unparseable_error_body_uses_fallback() {
        let err = interpret_response(500, "<html>Internal Server Error</html>").unwrap_err();
        assert_eq!(
            err,
            ConversionError::Backend {
                status: 500,
                message: "Failed to convert equation".into()
            }
        );
    }

    #[test]
    fn error_body_without_detail_uses_fallback() {
        let err = interpret_response(422, r#"{"error":"nope"}"#).unwrap_err();
        assert_eq!(err.to_string(), FALLBACK_ERROR_MESSAGE);

        let err = interpret_response(400, r#"{"detail":""}"#).unwrap_err();
        assert_eq!(err.to_string(), FALLBACK_ERROR_MESSAGE);
    }

    #[test]
    fn structured_detail_is_rendered_as_json() {
        let err = interpret_response(422, r#"{"detail":[{"msg":"field required"}]}"#).unwrap_err();
        assert_eq!(err.to_string(), r#"[{"msg":"field required"}]"#);
    }

    #[test]
    fn success_body_maps_to_result() {
        let body = r#"{"sympy":"s","numpy":"n","explanation":"e","complexity":"c"}"#;
        let result = interpret_response(200, body).unwrap();

        assert_eq!(result.symbolic_code, "s");
        assert_eq!(result.numerical_code, "n");
        assert_eq!(result.explanation, "e");
        assert_eq!(result.complexity_analysis, "c");
    }

    #[test]
    fn non_object_success_is_malformed() {
        for body in ["[]", r#"["a","b","c","d"]"#, "\"text\"", "null", "42"] {
            let err = interpret_response(200, body).unwrap_err();
            assert!(
                matches!(err, ConversionError::MalformedResponse(_)),
                "body: {body}"
            );
        }
    }

    #[test]
    fn non_json_success_is_malformed() {
        let err = interpret_response(200, "ok").unwrap_err();
        assert!(matches!(err, ConversionError::MalformedResponse(_)));
    }
}

use poem_openapi::Object;
use serde::Serialize;

use business::domain::analysis::errors::ErrorKind;

/// Image extraction request. Fields are optional here so that missing values
/// are reported as validation errors in the response envelope.
#[derive(Debug, Clone, Object)]
pub struct AnalyzeImageRequest {
    /// Ark API key, used for this call only
    pub api_key: Option<String>,
    /// Base64 image payload without a data-URI prefix
    pub image: Option<String>,
    /// Custom instruction; blank falls back to the default template
    pub prompt: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct CompareRequest {
    /// Ark API key, used for this call only
    pub api_key: Option<String>,
    /// Text extracted from the inventory list
    pub inventory_data: Option<String>,
    /// Text extracted from the invoice
    pub invoice_data: Option<String>,
    /// Custom instruction; blank falls back to the default template
    pub prompt: Option<String>,
}

/// Uniform envelope returned by every analysis endpoint.
#[derive(Debug, Clone, PartialEq, Object, Serialize)]
pub struct AnalysisResponse {
    pub success: bool,
    /// Model answer, present on success
    #[oai(skip_serializing_if_is_none)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    /// Human-readable failure description
    #[oai(skip_serializing_if_is_none)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Failure category: validation_error, timeout, connection_error,
    /// request_error, http_error or internal_error
    #[oai(skip_serializing_if_is_none)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<String>,
}

impl AnalysisResponse {
    pub fn success(result: String) -> Self {
        Self {
            success: true,
            result: Some(result),
            error: None,
            error_kind: None,
        }
    }

    pub fn failure(kind: ErrorKind, message: String) -> Self {
        Self {
            success: false,
            result: None,
            error: Some(message),
            error_kind: Some(kind.as_str().to_string()),
        }
    }
}

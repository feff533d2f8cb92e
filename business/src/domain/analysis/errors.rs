use crate::domain::prompt::model::PromptKey;

/// Machine-readable category of an [`AnalysisError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Timeout,
    Connection,
    Request,
    Http,
    Internal,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation_error",
            ErrorKind::Timeout => "timeout",
            ErrorKind::Connection => "connection_error",
            ErrorKind::Request => "request_error",
            ErrorKind::Http => "http_error",
            ErrorKind::Internal => "internal_error",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalysisError {
    #[error("请提供API Key")]
    MissingApiKey,
    #[error("请上传图片")]
    MissingImage,
    #[error("请先分析入库清单")]
    MissingInventoryData,
    #[error("请先分析电子发票")]
    MissingInvoiceData,
    #[error("请填写{}提示词", .0.label())]
    BlankPrompt(PromptKey),
    #[error("请求超时（读取超时 {read_timeout_secs}s），请稍后重试: {detail}")]
    Timeout {
        read_timeout_secs: u64,
        detail: String,
    },
    #[error("网络连接错误: {0}")]
    Connection(String),
    #[error("请求失败: {0}")]
    Request(String),
    #[error("远程服务返回 HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("内部错误: {0}")]
    Internal(String),
}

impl AnalysisError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AnalysisError::MissingApiKey
            | AnalysisError::MissingImage
            | AnalysisError::MissingInventoryData
            | AnalysisError::MissingInvoiceData
            | AnalysisError::BlankPrompt(_) => ErrorKind::Validation,
            AnalysisError::Timeout { .. } => ErrorKind::Timeout,
            AnalysisError::Connection(_) => ErrorKind::Connection,
            AnalysisError::Request(_) => ErrorKind::Request,
            AnalysisError::Http { .. } => ErrorKind::Http,
            AnalysisError::Internal(_) => ErrorKind::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_classify_missing_fields_as_validation_errors() {
        let errors = [
            AnalysisError::MissingApiKey,
            AnalysisError::MissingImage,
            AnalysisError::MissingInventoryData,
            AnalysisError::MissingInvoiceData,
            AnalysisError::BlankPrompt(PromptKey::Compare),
        ];

        for err in errors {
            assert_eq!(err.kind(), ErrorKind::Validation);
            assert_eq!(err.kind().as_str(), "validation_error");
        }
    }

    #[test]
    fn should_embed_read_timeout_in_timeout_message() {
        let err = AnalysisError::Timeout {
            read_timeout_secs: 180,
            detail: "operation timed out".to_string(),
        };

        assert_eq!(err.kind().as_str(), "timeout");
        assert!(err.to_string().contains("180s"));
    }

    #[test]
    fn should_surface_status_and_body_for_http_errors() {
        let err = AnalysisError::Http {
            status: 401,
            body: "{\"error\":\"unauthorized\"}".to_string(),
        };

        assert_eq!(err.kind(), ErrorKind::Http);
        assert_eq!(
            err.to_string(),
            "远程服务返回 HTTP 401: {\"error\":\"unauthorized\"}"
        );
    }

    #[test]
    fn should_name_prompt_in_blank_prompt_message() {
        assert_eq!(
            AnalysisError::BlankPrompt(PromptKey::Invoice).to_string(),
            "请填写电子发票分析提示词"
        );
    }
}

use async_trait::async_trait;

use crate::domain::analysis::model::{ApiOutcome, DocumentKind};

pub struct AnalyzeImageParams {
    pub kind: DocumentKind,
    pub api_key: Option<String>,
    pub image_base64: Option<String>,
    pub prompt: Option<String>,
}

#[async_trait]
pub trait AnalyzeImageUseCase: Send + Sync {
    async fn execute(&self, params: AnalyzeImageParams) -> ApiOutcome;
}

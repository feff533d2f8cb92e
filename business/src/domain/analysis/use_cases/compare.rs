use async_trait::async_trait;

use crate::domain::analysis::model::ApiOutcome;

pub struct CompareRecordsParams {
    pub api_key: Option<String>,
    pub inventory_text: Option<String>,
    pub invoice_text: Option<String>,
    pub prompt: Option<String>,
}

#[async_trait]
pub trait CompareRecordsUseCase: Send + Sync {
    async fn execute(&self, params: CompareRecordsParams) -> ApiOutcome;
}

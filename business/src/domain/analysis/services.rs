use async_trait::async_trait;

use super::model::ApiOutcome;

/// Service port for turning one image plus an instruction into extracted text.
///
/// `image_base64` is the raw base64 payload; implementations build whatever
/// transport encoding the remote model expects.
#[async_trait]
pub trait VisionExtractorService: Send + Sync {
    async fn extract(&self, api_key: &str, image_base64: &str, prompt: &str) -> ApiOutcome;
}

/// Service port for cross-checking two extracted records.
#[async_trait]
pub trait ComparisonService: Send + Sync {
    async fn compare(
        &self,
        api_key: &str,
        prompt: &str,
        inventory_text: &str,
        invoice_text: &str,
    ) -> ApiOutcome;
}

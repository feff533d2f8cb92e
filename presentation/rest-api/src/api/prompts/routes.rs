use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::prompt::model::{PromptKey, PromptSet};

use crate::api::prompts::dto::{PromptTemplates, PromptsResponse};
use crate::api::tags::ApiTags;

pub struct PromptsApi {
    prompts: Arc<PromptSet>,
}

impl PromptsApi {
    pub fn new(prompts: Arc<PromptSet>) -> Self {
        Self { prompts }
    }
}

#[OpenApi]
impl PromptsApi {
    /// Default prompt templates
    ///
    /// Returns the trimmed default instructions so the page can pre-fill its editors.
    #[oai(path = "/prompts", method = "get", tag = "ApiTags::Prompts")]
    async fn get_prompts(&self) -> Json<PromptsResponse> {
        let trimmed = |key: PromptKey| self.prompts.get_default(key).trim().to_string();

        Json(PromptsResponse {
            success: true,
            data: PromptTemplates {
                inventory: trimmed(PromptKey::Inventory),
                invoice: trimmed(PromptKey::Invoice),
                compare: trimmed(PromptKey::Compare),
            },
        })
    }
}

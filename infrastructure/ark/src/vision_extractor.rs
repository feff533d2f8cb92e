use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use business::domain::analysis::model::ApiOutcome;
use business::domain::analysis::services::VisionExtractorService;

use crate::client::ArkClient;
use crate::response::extract_text;

const VISION_MAX_COMPLETION_TOKENS: u32 = 65535;

pub struct ArkVisionExtractor {
    client: Arc<ArkClient>,
    read_timeout: Duration,
}

impl ArkVisionExtractor {
    pub fn new(client: Arc<ArkClient>, read_timeout: Duration) -> Self {
        Self {
            client,
            read_timeout,
        }
    }

    fn to_clean_data_url(raw: &str) -> String {
        let stripped = regex::Regex::new(r"^data:image/[a-zA-Z0-9.+-]+;base64,")
            .map(|re| re.replace(raw, "").to_string())
            .unwrap_or_else(|_| raw.to_string());
        let clean: String = stripped.chars().filter(|c| !c.is_whitespace()).collect();
        format!("data:image/jpeg;base64,{}", clean)
    }
}

#[async_trait]
impl VisionExtractorService for ArkVisionExtractor {
    async fn extract(&self, api_key: &str, image_base64: &str, prompt: &str) -> ApiOutcome {
        let image_url = Self::to_clean_data_url(image_base64);

        let body = json!({
            "model": self.client.model,
            "max_completion_tokens": VISION_MAX_COMPLETION_TOKENS,
            "reasoning_effort": "minimal",
            "messages": [
                {
                    "role": "user",
                    "content": [
                        {
                            "type": "image_url",
                            "image_url": {"url": image_url},
                        },
                        {
                            "type": "text",
                            "text": prompt,
                        },
                    ],
                },
            ],
        });

        let data = self
            .client
            .post_chat(api_key, &body, self.read_timeout)
            .await
            .map_err(|err| err.into_analysis_error(self.read_timeout))?;

        Ok(extract_text(&data))
    }
}

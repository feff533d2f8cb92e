use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use business::domain::analysis::model::ApiOutcome;
use business::domain::analysis::services::ComparisonService;

use crate::client::ArkClient;
use crate::response::extract_text;

pub const DEFAULT_TEXT_MAX_COMPLETION_TOKENS: u32 = 8192;

const INVENTORY_SECTION: &str = "【入库清单信息】";
const INVOICE_SECTION: &str = "【电子发票信息】";

pub struct ArkComparator {
    client: Arc<ArkClient>,
    read_timeout: Duration,
    max_completion_tokens: u32,
}

impl ArkComparator {
    pub fn new(client: Arc<ArkClient>, read_timeout: Duration, max_completion_tokens: u32) -> Self {
        Self {
            client,
            read_timeout,
            max_completion_tokens,
        }
    }

    /// Instruction, blank line, then the inventory and invoice sections in that order.
    fn build_message(prompt: &str, inventory_text: &str, invoice_text: &str) -> String {
        format!(
            "{}\n\n\n{}\n{}\n\n{}\n{}\n",
            prompt, INVENTORY_SECTION, inventory_text, INVOICE_SECTION, invoice_text
        )
    }
}

#[async_trait]
impl ComparisonService for ArkComparator {
    async fn compare(
        &self,
        api_key: &str,
        prompt: &str,
        inventory_text: &str,
        invoice_text: &str,
    ) -> ApiOutcome {
        let body = json!({
            "model": self.client.model,
            "max_completion_tokens": self.max_completion_tokens,
            "reasoning_effort": "minimal",
            "messages": [
                {
                    "role": "user",
                    "content": Self::build_message(prompt, inventory_text, invoice_text),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::DEFAULT_MODEL;
    use crate::testing::{MockTransport, json as reply_json, replying_in_order};
    use crate::transport::TransportError;
    use business::domain::analysis::errors::ErrorKind;
    use mockall::predicate::{always, eq, function};
    use serde_json::Value;

    fn comparator(transport: MockTransport, max_tokens: u32) -> ArkComparator {
        let client = ArkClient::new(
            Arc::new(transport),
            "http://ark.test/chat/completions".to_string(),
            DEFAULT_MODEL.to_string(),
        );
        ArkComparator::new(Arc::new(client), Duration::from_secs(600), max_tokens)
    }

    #[test]
    fn should_lay_out_inventory_before_invoice() {
        let message = ArkComparator::build_message("核对", "苹果 x10", "苹果 x9");

        assert_eq!(
            message,
            "核对\n\n\n【入库清单信息】\n苹果 x10\n\n【电子发票信息】\n苹果 x9\n"
        );
    }

    #[tokio::test]
    async fn should_send_plain_text_message_with_token_budget() {
        let expected_message =
            ArkComparator::build_message("核对", "苹果 x10 ¥50", "苹果 x9 ¥50");
        let mut transport = MockTransport::new();
        transport
            .expect_post_json()
            .with(
                always(),
                eq("ark-key"),
                function(move |payload: &Value| {
                    payload["model"] == DEFAULT_MODEL
                        && payload["max_completion_tokens"] == 4096
                        && payload["reasoning_effort"] == "minimal"
                        && payload["messages"][0]["role"] == "user"
                        && payload["messages"][0]["content"] == expected_message.as_str()
                }),
                eq(Duration::from_secs(600)),
            )
            .times(1)
            .returning(|_, _, _, _| {
                reply_json(serde_json::json!({
                    "choices": [{"message": {"content": "数量不一致：入库10，发票9"}}]
                }))
            });

        let result = comparator(transport, 4096)
            .compare("ark-key", "核对", "苹果 x10 ¥50", "苹果 x9 ¥50")
            .await;

        assert_eq!(result, Ok("数量不一致：入库10，发票9".to_string()));
    }

    #[tokio::test]
    async fn should_report_timeout_with_text_read_timeout() {
        let (transport, _) = replying_in_order(vec![Err(TransportError::Timeout(
            "operation timed out".to_string(),
        ))]);

        let result = comparator(transport, DEFAULT_TEXT_MAX_COMPLETION_TOKENS)
            .compare("k", "p", "a", "b")
            .await;

        let err = result.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Timeout);
        assert!(err.to_string().contains("600s"));
    }
}

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::analysis::errors::AnalysisError;
use crate::domain::analysis::model::{ApiOutcome, non_blank};
use crate::domain::analysis::services::ComparisonService;
use crate::domain::analysis::use_cases::compare::{CompareRecordsParams, CompareRecordsUseCase};
use crate::domain::logger::Logger;
use crate::domain::prompt::model::{PromptKey, PromptSet};

pub struct CompareRecordsUseCaseImpl {
    pub comparator: Arc<dyn ComparisonService>,
    pub prompts: Arc<PromptSet>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CompareRecordsUseCase for CompareRecordsUseCaseImpl {
    async fn execute(&self, params: CompareRecordsParams) -> ApiOutcome {
        let api_key = non_blank(params.api_key.as_deref()).ok_or(AnalysisError::MissingApiKey)?;
        let inventory = non_blank(params.inventory_text.as_deref())
            .ok_or(AnalysisError::MissingInventoryData)?;
        let invoice =
            non_blank(params.invoice_text.as_deref()).ok_or(AnalysisError::MissingInvoiceData)?;

        let prompt = self
            .prompts
            .resolve(PromptKey::Compare, params.prompt.as_deref());
        if prompt.trim().is_empty() {
            self.logger.warn("Rejected comparison: no prompt available");
            return Err(AnalysisError::BlankPrompt(PromptKey::Compare));
        }

        self.logger.info(&format!(
            "Comparing records: inventory {} chars, invoice {} chars",
            inventory.chars().count(),
            invoice.chars().count()
        ));

        let result = self
            .comparator
            .compare(api_key, prompt, inventory, invoice)
            .await;

        match &result {
            Ok(report) => self.logger.info(&format!(
                "Comparison finished: {} chars reported",
                report.chars().count()
            )),
            Err(err) => self
                .logger
                .error(&format!("Comparison failed [{}]: {}", err.kind(), err)),
        }

        result
    }
}

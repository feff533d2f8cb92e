use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::analysis::errors::AnalysisError;
use crate::domain::analysis::model::{ApiOutcome, non_blank};
use crate::domain::analysis::services::VisionExtractorService;
use crate::domain::analysis::use_cases::analyze_image::{AnalyzeImageParams, AnalyzeImageUseCase};
use crate::domain::logger::Logger;
use crate::domain::prompt::model::PromptSet;

pub struct AnalyzeImageUseCaseImpl {
    pub extractor: Arc<dyn VisionExtractorService>,
    pub prompts: Arc<PromptSet>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AnalyzeImageUseCase for AnalyzeImageUseCaseImpl {
    async fn execute(&self, params: AnalyzeImageParams) -> ApiOutcome {
        let api_key = non_blank(params.api_key.as_deref()).ok_or(AnalysisError::MissingApiKey)?;
        let image = non_blank(params.image_base64.as_deref()).ok_or(AnalysisError::MissingImage)?;

        let key = params.kind.prompt_key();
        let prompt = self.prompts.resolve(key, params.prompt.as_deref());
        if prompt.trim().is_empty() {
            self.logger
                .warn(&format!("Rejected {} analysis: no prompt available", params.kind));
            return Err(AnalysisError::BlankPrompt(key));
        }

        self.logger.info(&format!(
            "Analyzing {} image ({} base64 chars)",
            params.kind,
            image.len()
        ));

        match self.extractor.extract(api_key, image, prompt).await {
            Ok(text) => {
                self.logger.info(&format!(
                    "{} analyzed: {} chars extracted",
                    params.kind,
                    text.chars().count()
                ));
                Ok(text)
            }
            Err(err) => {
                self.logger.error(&format!(
                    "{} analysis failed [{}]: {}",
                    params.kind,
                    err.kind(),
                    err
                ));
                Err(err)
            }
        }
    }
}

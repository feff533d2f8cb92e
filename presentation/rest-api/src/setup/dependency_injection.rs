use std::sync::Arc;

use logger::TracingLogger;

use ark::client::ArkClient;
use ark::comparison::ArkComparator;
use ark::transport::{HttpTransport, ReqwestTransport};
use ark::vision_extractor::ArkVisionExtractor;

use business::application::analysis::analyze_image::AnalyzeImageUseCaseImpl;
use business::application::analysis::compare::CompareRecordsUseCaseImpl;
use business::domain::prompt::model::PromptSet;

use crate::config::ark_config::ArkConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub prompts_api: crate::api::prompts::routes::PromptsApi,
    pub analysis_api: crate::api::analysis::routes::AnalysisApi,
}

impl DependencyContainer {
    pub fn new(ark_config: &ArkConfig) -> Self {
        let transport = Arc::new(ReqwestTransport::new(ark_config.connect_timeout));
        Self::with_transport(ark_config, transport)
    }

    pub fn with_transport(ark_config: &ArkConfig, transport: Arc<dyn HttpTransport>) -> Self {
        let logger = Arc::new(TracingLogger);
        let prompts = Arc::new(PromptSet::default());
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let ark_client = Arc::new(ArkClient::new(
            transport,
            ark_config.endpoint.clone(),
            ark_config.model.clone(),
        ));
        let vision_extractor = Arc::new(ArkVisionExtractor::new(
            ark_client.clone(),
            ark_config.vision_read_timeout,
        ));
        let comparator = Arc::new(ArkComparator::new(
            ark_client,
            ark_config.text_read_timeout,
            ark_config.text_max_completion_tokens,
        ));

        // Analysis use cases
        let analyze_image_use_case = Arc::new(AnalyzeImageUseCaseImpl {
            extractor: vision_extractor,
            prompts: prompts.clone(),
            logger: logger.clone(),
        });
        let compare_use_case = Arc::new(CompareRecordsUseCaseImpl {
            comparator,
            prompts: prompts.clone(),
            logger,
        });

        let prompts_api = crate::api::prompts::routes::PromptsApi::new(prompts);
        let analysis_api = crate::api::analysis::routes::AnalysisApi::new(
            analyze_image_use_case,
            compare_use_case,
        );

        Self {
            health_api,
            prompts_api,
            analysis_api,
        }
    }
}

use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::analysis::model::{ApiOutcome, DocumentKind};
use business::domain::analysis::use_cases::analyze_image::{
    AnalyzeImageParams, AnalyzeImageUseCase,
};
use business::domain::analysis::use_cases::compare::{
    CompareRecordsParams, CompareRecordsUseCase,
};

use crate::api::analysis::dto::{AnalysisResponse, AnalyzeImageRequest, CompareRequest};
use crate::api::error::IntoErrorResponse;
use crate::api::tags::ApiTags;

pub struct AnalysisApi {
    analyze_image_use_case: Arc<dyn AnalyzeImageUseCase>,
    compare_use_case: Arc<dyn CompareRecordsUseCase>,
}

impl AnalysisApi {
    pub fn new(
        analyze_image_use_case: Arc<dyn AnalyzeImageUseCase>,
        compare_use_case: Arc<dyn CompareRecordsUseCase>,
    ) -> Self {
        Self {
            analyze_image_use_case,
            compare_use_case,
        }
    }

    async fn analyze(&self, kind: DocumentKind, body: AnalyzeImageRequest) -> AnalysisApiResponse {
        let outcome = self
            .analyze_image_use_case
            .execute(AnalyzeImageParams {
                kind,
                api_key: body.api_key,
                image_base64: body.image,
                prompt: body.prompt,
            })
            .await;

        outcome.into()
    }
}

/// Receipt check API
///
/// Extracts goods from an inventory list photo and an invoice photo, then
/// cross-checks the two records.
#[OpenApi]
impl AnalysisApi {
    /// Analyze an inventory list image
    ///
    /// Sends the photo to the vision model and returns the extracted goods as markdown.
    #[oai(path = "/analyze-inventory", method = "post", tag = "ApiTags::Analysis")]
    async fn analyze_inventory(&self, body: Json<AnalyzeImageRequest>) -> AnalysisApiResponse {
        self.analyze(DocumentKind::Inventory, body.0).await
    }

    /// Analyze an electronic invoice image
    ///
    /// Same as the inventory analysis, with the invoice extraction template.
    #[oai(path = "/analyze-invoice", method = "post", tag = "ApiTags::Analysis")]
    async fn analyze_invoice(&self, body: Json<AnalyzeImageRequest>) -> AnalysisApiResponse {
        self.analyze(DocumentKind::Invoice, body.0).await
    }

    /// Compare inventory and invoice records
    ///
    /// Asks the text model to report mismatching names, units, amounts and quantities.
    /// Both records must come from earlier analysis calls.
    #[oai(path = "/compare", method = "post", tag = "ApiTags::Analysis")]
    async fn compare(&self, body: Json<CompareRequest>) -> AnalysisApiResponse {
        let outcome = self
            .compare_use_case
            .execute(CompareRecordsParams {
                api_key: body.0.api_key,
                inventory_text: body.0.inventory_data,
                invoice_text: body.0.invoice_data,
                prompt: body.0.prompt,
            })
            .await;

        outcome.into()
    }
}

/// Every outcome, failures included, is answered with 200; `success` and
/// `error_kind` tell them apart.
#[derive(poem_openapi::ApiResponse)]
pub enum AnalysisApiResponse {
    #[oai(status = 200)]
    Ok(Json<AnalysisResponse>),
}

impl From<ApiOutcome> for AnalysisApiResponse {
    fn from(outcome: ApiOutcome) -> Self {
        match outcome {
            Ok(text) => AnalysisApiResponse::Ok(Json(AnalysisResponse::success(text))),
            Err(err) => {
                let (_, json) = err.into_error_response();
                AnalysisApiResponse::Ok(json)
            }
        }
    }
}

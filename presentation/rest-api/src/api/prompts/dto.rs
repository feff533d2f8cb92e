use poem_openapi::Object;

#[derive(Debug, Clone, Object)]
pub struct PromptTemplates {
    /// Inventory list extraction template
    pub inventory: String,
    /// Invoice extraction template
    pub invoice: String,
    /// Comparison template
    pub compare: String,
}

#[derive(Debug, Clone, Object)]
pub struct PromptsResponse {
    pub success: bool,
    pub data: PromptTemplates,
}

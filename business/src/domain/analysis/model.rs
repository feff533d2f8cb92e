use crate::domain::analysis::errors::AnalysisError;
use crate::domain::prompt::model::PromptKey;

/// Outcome of every analysis operation: the model's answer text or a classified error.
pub type ApiOutcome = Result<String, AnalysisError>;

/// Which kind of document an uploaded image shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Inventory,
    Invoice,
}

impl DocumentKind {
    /// The default template used to extract this kind of document.
    pub fn prompt_key(&self) -> PromptKey {
        match self {
            DocumentKind::Inventory => PromptKey::Inventory,
            DocumentKind::Invoice => PromptKey::Invoice,
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentKind::Inventory => write!(f, "inventory list"),
            DocumentKind::Invoice => write!(f, "invoice"),
        }
    }
}

/// Returns the trimmed-non-empty value, or `None` for missing and blank input.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_document_kind_to_prompt_key() {
        assert_eq!(DocumentKind::Inventory.prompt_key(), PromptKey::Inventory);
        assert_eq!(DocumentKind::Invoice.prompt_key(), PromptKey::Invoice);
    }

    #[test]
    fn should_treat_whitespace_as_blank() {
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some("")), None);
        assert_eq!(non_blank(Some("  \n")), None);
        assert_eq!(non_blank(Some(" x ")), Some(" x "));
    }
}

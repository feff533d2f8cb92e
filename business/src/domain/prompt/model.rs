use std::collections::HashMap;

const DEFAULT_INVENTORY_PROMPT: &str = r#"
    你是一位专业的入库清单商品信息提取与格式转换助手，擅长从图片中精准识别并转化关键商品信息。

## 输入：
- 商品信息图片 

## 任务目标：
分析图片中的商品信息各版块，忽略其他不必要信息，将核心商品信息单独转化为md格式的文本。

## 操作步骤：
1. **图片内容识别**：仔细识别图片中的所有可见文本内容，包括文字、数字、符号等。
2. **商品信息筛选**：从识别出的文本中，筛选出与商品直接相关的核心信息版块
3. **无关信息排除**：严格忽略图片中的其它元素、装饰性图案文字、无关标识、冗余说明等不必要信息。
4. **md格式转换**：将筛选后的商品信息按逻辑分类，转化为结构清晰的md格式文本。可使用标题、列表、加粗等md语法优化信息呈现。

## 输出要求：
仅输出转化后的md格式商品信息文本，不包含任何额外解释或说明。

    "#;

const DEFAULT_INVOICE_PROMPT: &str = r#"
    你是一位专业的电子发票商品信息提取与格式转换助手，擅长从图片中精准识别并转化关键商品信息。

## 输入：
- 商品信息图片 

## 任务目标：
分析图片中的商品信息各版块，忽略其他不必要信息，将核心商品信息单独转化为md格式的文本。

## 操作步骤：
1. **图片内容识别**：仔细识别图片中的所有可见文本内容，包括文字、数字、符号等。
2. **商品信息筛选**：从识别出的文本中，筛选出与商品直接相关的核心信息版块
3. **无关信息排除**：严格忽略图片中的其它元素、装饰性图案文字、无关标识、冗余说明等不必要信息。
4. **md格式转换**：将筛选后的商品信息按逻辑分类，转化为结构清晰的md格式文本。可使用标题、列表、加粗等md语法优化信息呈现。

## 输出要求：
仅输出转化后的md格式商品信息文本，不包含任何额外解释或说明。

    "#;

const DEFAULT_COMPARE_PROMPT: &str = r#"
    将两个板块信息进行一一核对，尤其注意商品名称，包装单位，金额，数量等元素，然后告诉我哪些商品清单信息和发票信息对不上，要求一一对应，不得有任何差错，不允许任何不同，请以会计身份进行任务
    "#;

/// Identifies one of the three instruction templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptKey {
    Inventory,
    Invoice,
    Compare,
}

impl PromptKey {
    pub const ALL: [PromptKey; 3] = [PromptKey::Inventory, PromptKey::Invoice, PromptKey::Compare];

    /// Name of the task the template drives, as shown to users.
    pub fn label(&self) -> &'static str {
        match self {
            PromptKey::Inventory => "入库清单分析",
            PromptKey::Invoice => "电子发票分析",
            PromptKey::Compare => "核对比较",
        }
    }
}

impl std::fmt::Display for PromptKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromptKey::Inventory => write!(f, "inventory"),
            PromptKey::Invoice => write!(f, "invoice"),
            PromptKey::Compare => write!(f, "compare"),
        }
    }
}

/// Immutable set of default instruction templates.
///
/// Built once at startup and shared read-only between requests. Per-request
/// overrides go through [`PromptSet::resolve`] and are never written back.
#[derive(Debug, Clone)]
pub struct PromptSet {
    templates: HashMap<PromptKey, String>,
}

impl PromptSet {
    /// Creates a set from explicit templates. Keys left out resolve to an empty template.
    pub fn new(templates: HashMap<PromptKey, String>) -> Self {
        Self { templates }
    }

    /// Returns the stored template for `key`, or an empty string when none is configured.
    pub fn get_default(&self, key: PromptKey) -> &str {
        self.templates.get(&key).map(String::as_str).unwrap_or("")
    }

    /// Picks the caller override when it has any non-whitespace content, else the default.
    ///
    /// A non-blank override is returned verbatim; trimming is only used for the blank check.
    pub fn resolve<'a>(&'a self, key: PromptKey, custom: Option<&'a str>) -> &'a str {
        match custom {
            Some(prompt) if !prompt.trim().is_empty() => prompt,
            _ => self.get_default(key),
        }
    }
}

impl Default for PromptSet {
    fn default() -> Self {
        let templates = HashMap::from([
            (PromptKey::Inventory, DEFAULT_INVENTORY_PROMPT.to_string()),
            (PromptKey::Invoice, DEFAULT_INVOICE_PROMPT.to_string()),
            (PromptKey::Compare, DEFAULT_COMPARE_PROMPT.to_string()),
        ]);
        Self::new(templates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn should_return_default_inventory_prompt_when_override_is_empty() {
        let prompts = PromptSet::default();

        let resolved = prompts.resolve(PromptKey::Inventory, Some(""));

        assert_eq!(resolved, prompts.get_default(PromptKey::Inventory));
        assert!(resolved.contains("入库清单"));
    }

    #[test]
    fn should_return_override_verbatim_when_not_blank() {
        let prompts = PromptSet::default();

        let resolved = prompts.resolve(PromptKey::Inventory, Some("  custom  "));

        assert_eq!(resolved, "  custom  ");
    }

    #[test]
    fn should_fall_back_to_default_when_override_is_whitespace() {
        let prompts = PromptSet::default();

        let resolved = prompts.resolve(PromptKey::Compare, Some(" \n\t "));

        assert_eq!(resolved, prompts.get_default(PromptKey::Compare));
    }

    #[test]
    fn should_fall_back_to_default_when_override_is_missing() {
        let prompts = PromptSet::default();

        assert_eq!(
            prompts.resolve(PromptKey::Invoice, None),
            prompts.get_default(PromptKey::Invoice)
        );
    }

    #[test]
    fn should_have_distinct_non_blank_defaults_for_every_key() {
        let prompts = PromptSet::default();

        for key in PromptKey::ALL {
            assert!(!prompts.get_default(key).trim().is_empty(), "{key} is blank");
        }
        assert!(prompts.get_default(PromptKey::Invoice).contains("电子发票"));
        assert!(prompts.get_default(PromptKey::Compare).contains("会计"));
    }

    #[test]
    fn should_resolve_to_blank_when_default_is_missing_and_no_override() {
        let prompts = PromptSet::new(HashMap::new());

        assert_eq!(prompts.resolve(PromptKey::Compare, Some("   ")), "");
    }

    #[test]
    fn should_display_keys_and_label_tasks() {
        assert_eq!(PromptKey::Inventory.to_string(), "inventory");
        assert_eq!(PromptKey::Compare.label(), "核对比较");
    }

    proptest! {
        #[test]
        fn should_always_prefer_non_blank_override(custom in ".*\\S.*") {
            let prompts = PromptSet::default();
            prop_assert_eq!(prompts.resolve(PromptKey::Invoice, Some(&custom)), custom.as_str());
        }

        #[test]
        fn should_never_use_whitespace_only_override(custom in "[ \t\r\n]*") {
            let prompts = PromptSet::default();
            prop_assert_eq!(
                prompts.resolve(PromptKey::Inventory, Some(&custom)),
                prompts.get_default(PromptKey::Inventory)
            );
        }
    }
}

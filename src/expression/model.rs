use serde::{
    Deserialize,
    Serialize,
};

/// One "direct translation vs native speaker" comparison.
///
/// Field names match the JSON the model is asked to emit. The remote
/// model does not always include `imagePrompt`, so it stays optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expression {
    pub topic: String,
    pub context: String,
    pub direct_expression: String,
    pub native_expression: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_prompt: Option<String>,
}

/// Where a fetched expression came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpressionSource {
    /// Generated live by the chat-completion API.
    Generated,
    /// Picked from the embedded fallback list.
    Fallback,
}

/// The provider's result type: always a usable expression, with an
/// explicit marker instead of a swallowed error.
#[derive(Debug, Clone)]
pub struct ExpressionFetch {
    pub expression: Expression,
    pub source: ExpressionSource,
}

impl ExpressionFetch {
    pub fn generated(expression: Expression) -> Self {
        Self { expression, source: ExpressionSource::Generated }
    }

    pub fn fallback(expression: Expression) -> Self {
        Self { expression, source: ExpressionSource::Fallback }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == ExpressionSource::Fallback
    }
}

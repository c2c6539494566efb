use serde::{Deserialize, Serialize};

/// Returned in place of generated text once every attempt has failed.
pub const FALLBACK_TEXT: &str = "Could not generate content. Please try again later.";

/// Label shown on a control while its generation request is in flight.
pub const BUSY_LABEL: &str = "Generating...";

/// The two halves of a generation request.
///
/// Built per invocation and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptPair {
    pub system_instruction: String,
    pub user_query: String,
}

impl PromptPair {
    pub fn new(system_instruction: impl Into<String>, user_query: impl Into<String>) -> Self {
        Self {
            system_instruction: system_instruction.into(),
            user_query: user_query.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Name of the output target that receives a product's description.
pub fn product_output_target(product: &ProductId) -> String {
    format!("product{}-desc", product.as_str())
}

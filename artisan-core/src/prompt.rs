use crate::types::PromptPair;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PromptKind {
    ArtisanBio,
    ProductDescription,
}

impl PromptKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PromptKind::ArtisanBio => "artisan_bio",
            PromptKind::ProductDescription => "product_description",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptTemplate {
    pub kind: PromptKind,
    pub title: String,
    pub system_instruction: String,
    pub user_query: String,
}

impl PromptTemplate {
    pub fn to_pair(&self) -> PromptPair {
        PromptPair::new(self.system_instruction.clone(), self.user_query.clone())
    }
}

pub fn find_prompt(prompts: &[PromptTemplate], kind: PromptKind) -> Option<&PromptTemplate> {
    prompts.iter().find(|p| p.kind == kind)
}

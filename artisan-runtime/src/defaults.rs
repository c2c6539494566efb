use artisan_core::config::{AppConfig, GenerationDefaults, RetrySettings};
use artisan_core::prompt::{PromptKind, PromptTemplate};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-05-20";

pub fn default_prompt_templates() -> Vec<PromptTemplate> {
    vec![
        PromptTemplate {
            kind: PromptKind::ArtisanBio,
            title: "Artisan Bio".into(),
            system_instruction: "You are an expert storyteller for artisan brands. Write a heartfelt and inspiring biography about an artisan. The story should cover their passion for their craft, the journey they took to master it, and the meaning behind their creations. Keep the tone personal and authentic.".into(),
            user_query: "Write a biography for a local artisan. The artisan is passionate about their craft and wants to share their story.".into(),
        },
        PromptTemplate {
            kind: PromptKind::ProductDescription,
            title: "Product Description".into(),
            system_instruction: "You are a skilled copywriter for handmade goods. Write a compelling, emotional, and detailed product description for a handmade item. Focus on the unique qualities, materials, and craftsmanship. The description should feel authentic and personal.".into(),
            user_query: "Write a description for a handmade product. The product is a handcrafted ceramic vase, made with locally sourced clay and fired in a wood-burning kiln, giving it a unique, earthy texture and a one-of-a-kind color pattern. It is inspired by the natural landscapes of the artisan's home.".into(),
        },
    ]
}

pub fn default_generation_defaults() -> GenerationDefaults {
    GenerationDefaults {
        base_url: DEFAULT_BASE_URL.into(),
        model: DEFAULT_MODEL.into(),
    }
}

pub fn default_app_config() -> AppConfig {
    AppConfig {
        generation: default_generation_defaults(),
        retry: RetrySettings::default(),
        prompts: default_prompt_templates(),
    }
}

use crate::config;
use crate::domain::model::EnhanceMode;
use serde::Serialize;

const TOP_K: u32 = 40;
const TOP_P: f32 = 0.95;

/// Body of a `generateContent` call. Field names follow the remote API:
/// `system_instruction` is snake_case, `generationConfig` camelCase.
#[derive(Debug, Serialize)]
pub struct GenerateRequest {
    pub system_instruction: Instruction,
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
pub struct Instruction {
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct GenerationConfig {
    pub temperature: f32,
    #[serde(rename = "topK")]
    pub top_k: u32,
    #[serde(rename = "topP")]
    pub top_p: f32,
    #[serde(rename = "maxOutputTokens")]
    pub max_output_tokens: u32,
}

/// Assembles the request body for one enhancement call. The probe sentinel
/// input is sent as the fixed probe message, everything else gets the wrap
/// prefix.
pub fn build_request(text: &str, mode: EnhanceMode) -> GenerateRequest {
    let params = mode.params();

    let system_text = format!(
        "{}\n\n{}\n\n{}",
        config::SYSTEM_PROMPT,
        mode.instruction(),
        config::FORMAT_REMINDER
    );

    let user_text = if text == config::PROBE_INPUT {
        config::PROBE_MESSAGE.to_string()
    } else {
        format!("{}{}", config::PROMPT_WRAP_PREFIX, text)
    };

    GenerateRequest {
        system_instruction: Instruction {
            parts: vec![Part { text: system_text }],
        },
        contents: vec![Content {
            parts: vec![Part { text: user_text }],
        }],
        generation_config: GenerationConfig {
            temperature: params.temperature,
            top_k: TOP_K,
            top_p: TOP_P,
            max_output_tokens: params.max_output_tokens,
        },
    }
}

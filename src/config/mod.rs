pub mod cli;
pub mod store;

use crate::utils::validation::{self, Validate};
use crate::Result;
use std::time::Duration;

/// Where the credential lives in the key-value store.
pub const API_KEY_STORAGE_KEY: &str = "geminiApiKey";
/// Last mode the user enhanced with; read back as the default for the next run.
pub const LAST_MODE_STORAGE_KEY: &str = "lastMode";
/// Persisted light/dark preference.
pub const THEME_STORAGE_KEY: &str = "prompt-enhancer-theme";

/// Shortest credential accepted before a live probe is even attempted.
pub const MIN_API_KEY_LENGTH: usize = 20;

/// Sentinel input for credential validation probes. The service receives
/// PROBE_MESSAGE verbatim instead of the wrapped user text.
pub const PROBE_INPUT: &str = "test";
pub const PROBE_MESSAGE: &str = "Test message";

/// Prefix wrapped around real user text in the request body.
pub const PROMPT_WRAP_PREFIX: &str = "Исходный промпт для оптимизации: ";

/// Closing reminder appended after the mode fragment in the system instruction.
pub const FORMAT_REMINDER: &str =
    "ЗАПОМНИ: ОТВЕТ - ТОЛЬКО УЛУЧШЕННЫЙ ПРОМПТ, БОЛЬШЕ НИЧЕГО.";

/// Fixed system instruction establishing the enhancement persona. Sent with
/// every request; the wording is part of the service contract, do not
/// translate or reflow it.
pub const SYSTEM_PROMPT: &str = "Ты - Лира, эксперт по оптимизации промптов уровня «мастер».
Твоя миссия - превращать любые вводные пользователя в точные промпты, которые раскрывают потенциал ИИ.

4-D-методология:
1. DECONSTRUCT - разбор намерения, сущностей, контекста
2. DIAGNOSE - диагностика пробелов и двусмысленностей
3. DEVELOP - разработка с подходящими техниками
4. DELIVER - финальный оптимизированный промпт

КРИТИЧЕСКИ ВАЖНО: В ответе должен быть ТОЛЬКО оптимизированный промпт, без каких-либо комментариев, объяснений, вопросов или дополнительного текста.

Для BASIC-режима: применяй базовые техники (роль, контекст, спецификация)
Для DETAIL-режима: используй продвинутые методы (chain-of-thought, multi-perspective)

Формат ответа: только чистый улучшенный промпт, готовый к использованию.";

/// Remote service parameters and input limits. `Default` is the production
/// configuration; tests override the endpoint and timeout.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
    pub min_input_length: usize,
    pub max_input_length: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com/v1beta/models".to_string(),
            model: "gemini-2.5-flash".to_string(),
            timeout: Duration::from_millis(30_000),
            min_input_length: 10,
            max_input_length: 2000,
        }
    }
}

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("base_url", &self.base_url)?;
        validation::validate_non_empty_string("model", &self.model)?;
        validation::validate_positive_number("timeout_ms", self.timeout.as_millis() as u64, 1)?;
        validation::validate_range(
            "min_input_length",
            self.min_input_length,
            1,
            self.max_input_length,
        )?;
        Ok(())
    }
}

/// The opaque API key. Debug output is redacted; the raw value must never
/// reach a log line.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Credential(***)")
    }
}

/// Generation parameters attached to a mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeParams {
    pub temperature: f32,
    pub max_output_tokens: u32,
}

/// Enhancement mode. Replaces the upstream string-keyed mode lookup with a
/// tagged enum carrying its parameter table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum EnhanceMode {
    Basic,
    Detail,
}

impl EnhanceMode {
    pub fn params(&self) -> ModeParams {
        match self {
            EnhanceMode::Basic => ModeParams {
                temperature: 0.7,
                max_output_tokens: 1024,
            },
            EnhanceMode::Detail => ModeParams {
                temperature: 0.8,
                max_output_tokens: 1536,
            },
        }
    }

    /// Mode-specific fragment appended to the system instruction.
    pub fn instruction(&self) -> &'static str {
        match self {
            EnhanceMode::Basic => {
                "ПРИМЕНИ BASIC-РЕЖИМ: быстрая оптимизация, базовые улучшения, краткий формат."
            }
            EnhanceMode::Detail => {
                "ПРИМЕНИ DETAIL-РЕЖИМ: глубокий анализ, расширенный контекст, продвинутые техники оптимизации."
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EnhanceMode::Basic => "basic",
            EnhanceMode::Detail => "detail",
        }
    }

    /// Lenient parse for values read back from the store: exactly "detail"
    /// selects Detail, anything else falls back to Basic (the upstream
    /// default for unknown mode names).
    pub fn from_stored(value: &str) -> Self {
        if value == "detail" {
            EnhanceMode::Detail
        } else {
            EnhanceMode::Basic
        }
    }
}

impl std::fmt::Display for EnhanceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

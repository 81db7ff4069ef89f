use regex::Regex;

/// Returned when every cleaning step leaves nothing behind.
pub const FALLBACK_MESSAGE: &str = "Не удалось обработать ответ. Попробуйте изменить промпт.";

/// Leading labels the model likes to prepend. Alternation order matters:
/// the regex engine resolves a match at position 0 to the first listed
/// alternative, matching the upstream behavior.
const PREFIX_PATTERN: &str =
    r"(?i)^(Улучшенный промпт:|Improved prompt:|Оптимизированный промпт:|✨|🚀|📝|【.*?】|※.*?※|\*.*?\*)";

/// Meta-commentary sections appended after the rewritten prompt. Everything
/// from the first header to the end of the text is dropped.
const TRAILING_PATTERN: &str =
    r"(?is)(Что изменилось:|Ключевые улучшения:|Использованные техники:).*$";

/// Per-line markers filtered after the bulk removals (case-sensitive).
const LINE_MARKERS: [&str; 6] = [
    "###",
    "===",
    "---",
    "Что изменилось",
    "Ключевые улучшения",
    "Использованные техники",
];

/// Normalizes raw model output into the bare rewritten prompt.
///
/// Step order is load-bearing: leading labels must go before the line filter
/// (a label can be the whole first line), and trailing-section removal must
/// also precede it (section bodies contain lines no line-level marker would
/// catch).
pub fn clean_response(raw: &str) -> String {
    let prefix_re = Regex::new(PREFIX_PATTERN).unwrap();
    let trailing_re = Regex::new(TRAILING_PATTERN).unwrap();

    let mut cleaned = raw.trim().to_string();

    // Labels stack ("✨Improved prompt: ..."), so strip until none is left
    // at the front. Nothing past the leading label is ever touched.
    while let Some(end) = prefix_re.find(&cleaned).map(|m| m.end()) {
        cleaned = cleaned[end..].trim_start().to_string();
    }

    let cleaned = trailing_re.replace(&cleaned, "");

    let cleaned = cleaned
        .lines()
        .filter(|line| !LINE_MARKERS.iter().any(|marker| line.starts_with(marker)))
        .collect::<Vec<_>>()
        .join("\n");

    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        FALLBACK_MESSAGE.to_string()
    } else {
        cleaned.to_string()
    }
}

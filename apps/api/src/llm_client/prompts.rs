// Shared prompt fragments used by every template family.
// Mode-specific templates live in writing::prompts.

/// Language used when the caller does not ask for one.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Instruction line placed under the `[LANG=..]` tag. Replace `{language}` before sending.
pub const LANGUAGE_INSTRUCTION: &str =
    "Respond ONLY in {language}. Do not use any other language, even for headings.";

/// Expands a language code to a display name. Unknown codes are passed through unchanged.
pub fn language_name(code: &str) -> &str {
    match code {
        "en" => "English",
        "es" => "Spanish",
        "fr" => "French",
        "de" => "German",
        "it" => "Italian",
        "pt" => "Portuguese",
        "nl" => "Dutch",
        "hi" => "Hindi",
        "bn" => "Bengali",
        "ta" => "Tamil",
        "te" => "Telugu",
        "mr" => "Marathi",
        "ur" => "Urdu",
        "ar" => "Arabic",
        "ja" => "Japanese",
        "ko" => "Korean",
        "zh" => "Chinese",
        "ru" => "Russian",
        other => other,
    }
}

/// Longest accepted language tag, e.g. `zh-hant-tw`.
const MAX_LANGUAGE_LEN: usize = 16;

/// Normalizes a requested language code: lower-cased and trimmed.
/// Blank input, or anything that is not a short `[a-z-]` tag, becomes `en`.
pub fn normalize_language(raw: Option<&str>) -> String {
    match raw.map(|s| s.trim().to_lowercase()) {
        Some(code) if is_language_tag(&code) => code,
        _ => DEFAULT_LANGUAGE.to_string(),
    }
}

fn is_language_tag(code: &str) -> bool {
    (2..=MAX_LANGUAGE_LEN).contains(&code.len())
        && code.starts_with(|c: char| c.is_ascii_lowercase())
        && code.chars().all(|c| c.is_ascii_lowercase() || c == '-')
}

/// Builds the directive that prefixes every rendered prompt.
pub fn language_directive(code: &str) -> String {
    format!(
        "[LANG={code}]\n{}\n",
        LANGUAGE_INSTRUCTION.replace("{language}", language_name(code))
    )
}

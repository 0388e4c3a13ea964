//! Safety screening — gates every request before a prompt is built.
//!
//! `SubstringClassifier` is the default backend. `AppState` holds an
//! `Arc<dyn Classifier>` through the `Writer`, so a word-boundary or model-based
//! classifier can replace it without touching the pipeline.
//!
//! CRITICAL: a self-harm match is a dead end. The pipeline returns the fixed
//! support message and never calls the generation client.

/// Advisory returned when disallowed language is detected.
pub const DISALLOWED_LANGUAGE_MESSAGE: &str =
    "⚠️ Please rewrite your text using respectful language.";

/// Fixed support message returned when crisis-indicating language is detected.
pub const SELF_HARM_MESSAGE: &str = "💛 You are not alone.\n\n\
    HeartNote cannot write about this right now, but people can help. \
    Please reach out to someone you trust, or contact a local crisis line. \
    If you are in immediate danger, call your local emergency number.";

/// Profanity, insults and threats directed at others.
const DISALLOWED_TOKENS: &[&str] = &[
    "fuck",
    "bitch",
    "shit",
    "asshole",
    "bastard",
    "slut",
    "dick",
    "pussy",
    "kill you",
    "hurt you",
];

/// Phrases indicating suicidal intent or self-harm.
const SELF_HARM_PHRASES: &[&str] = &[
    "kill myself",
    "kill me",
    "i want to die",
    "want to die",
    "end my life",
    "i want to disappear",
    "self harm",
    "self-harm",
    "hurt myself",
    "i can't live",
    "i cant live",
    "no reason to live",
    "suicide",
    "suicidal",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockReason {
    DisallowedLanguage,
    SelfHarm,
}

impl BlockReason {
    pub fn message(self) -> &'static str {
        match self {
            BlockReason::DisallowedLanguage => DISALLOWED_LANGUAGE_MESSAGE,
            BlockReason::SelfHarm => SELF_HARM_MESSAGE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screening {
    Allowed,
    Blocked(BlockReason),
}

/// Classifies a single piece of free text. Implementations must be pure:
/// the same input always yields the same verdict.
pub trait Classifier: Send + Sync {
    fn classify(&self, text: &str) -> Screening;
}

/// Lower-cased substring matching against two fixed lists.
///
/// Order: disallowed language first, then self-harm. First match wins.
/// Matching is not word-boundary aware, so "dick" also matches "Dickens".
#[derive(Debug, Clone)]
pub struct SubstringClassifier {
    disallowed: Vec<String>,
    self_harm: Vec<String>,
}

impl SubstringClassifier {
    pub fn new<I, J, S>(disallowed: I, self_harm: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            disallowed: disallowed.into_iter().map(|s| fold(s.as_ref())).collect(),
            self_harm: self_harm.into_iter().map(|s| fold(s.as_ref())).collect(),
        }
    }
}

/// Lower-cases and maps typographic apostrophes to `'`, so "can’t" from a
/// mobile keyboard matches "can't".
fn fold(text: &str) -> String {
    text.to_lowercase().replace(['\u{2019}', '\u{2018}', '\u{02BC}'], "'")
}

impl Default for SubstringClassifier {
    fn default() -> Self {
        Self::new(DISALLOWED_TOKENS.iter(), SELF_HARM_PHRASES.iter())
    }
}

impl Classifier for SubstringClassifier {
    fn classify(&self, text: &str) -> Screening {
        let t = fold(text.trim());
        if t.is_empty() {
            return Screening::Allowed;
        }

        if self.disallowed.iter().any(|w| t.contains(w.as_str())) {
            return Screening::Blocked(BlockReason::DisallowedLanguage);
        }
        if self.self_harm.iter().any(|p| t.contains(p.as_str())) {
            return Screening::Blocked(BlockReason::SelfHarm);
        }
        Screening::Allowed
    }
}

/// Screens several fields independently, so a phrase can never match across
/// field boundaries. The disallowed-language check runs over every field
/// before the self-harm check.
pub fn screen_fields(classifier: &dyn Classifier, fields: &[&str]) -> Screening {
    let verdicts: Vec<Screening> = fields.iter().map(|f| classifier.classify(f)).collect();

    for wanted in [BlockReason::DisallowedLanguage, BlockReason::SelfHarm] {
        if verdicts.contains(&Screening::Blocked(wanted)) {
            return Screening::Blocked(wanted);
        }
    }
    Screening::Allowed
}

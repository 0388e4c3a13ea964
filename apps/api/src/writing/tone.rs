//! Tone calibration — maps a requested depth keyword to the phrase injected into prompts.
//!
//! Unknown or missing keywords are never rejected; they resolve to `Depth::Light`.

use serde::Serialize;

use crate::writing::mode::ModeFamily;

/// Emotional or stylistic intensity requested by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Depth {
    #[default]
    Light,
    Medium,
    Deep,
}

impl Depth {
    pub const ALL: [Depth; 3] = [Depth::Light, Depth::Medium, Depth::Deep];

    pub fn as_str(self) -> &'static str {
        match self {
            Depth::Light => "light",
            Depth::Medium => "medium",
            Depth::Deep => "deep",
        }
    }

    /// Normalizes a raw keyword. Meeting-style aliases (`soft`, `balanced`) are accepted.
    pub fn from_keyword(raw: Option<&str>) -> Depth {
        match raw.map(|s| s.trim().to_lowercase()).as_deref() {
            Some("medium") | Some("balanced") => Depth::Medium,
            Some("deep") => Depth::Deep,
            _ => Depth::Light,
        }
    }

    /// The descriptive phrase for this depth within a template family.
    pub fn phrase(self, family: ModeFamily) -> &'static str {
        match (family, self) {
            (ModeFamily::Dashboard, Depth::Light) => "soft, reflective, gentle emotional clarity",
            (ModeFamily::Dashboard, Depth::Medium) => "thoughtful, grounded, emotionally layered",
            (ModeFamily::Dashboard, Depth::Deep) => "rich, profound, cinematic emotional depth",
            (ModeFamily::Meeting, Depth::Light) => "concise and brief",
            (ModeFamily::Meeting, Depth::Medium) => "clear and structured",
            (ModeFamily::Meeting, Depth::Deep) => "detailed and comprehensive",
        }
    }
}

/// A depth keyword after normalization, with its prompt phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedTone {
    pub depth: Depth,
    pub phrase: &'static str,
}

pub fn resolve_tone(keyword: Option<&str>, family: ModeFamily) -> ResolvedTone {
    let depth = Depth::from_keyword(keyword);
    ResolvedTone {
        depth,
        phrase: depth.phrase(family),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_keywords_resolve() {
        let t = resolve_tone(Some("deep"), ModeFamily::Dashboard);
        assert_eq!(t.depth, Depth::Deep);
        assert_eq!(t.phrase, "rich, profound, cinematic emotional depth");

        let t = resolve_tone(Some("medium"), ModeFamily::Meeting);
        assert_eq!(t.depth, Depth::Medium);
        assert_eq!(t.phrase, "clear and structured");
    }

    #[test]
    fn test_keyword_is_normalized() {
        assert_eq!(Depth::from_keyword(Some("  DEEP ")), Depth::Deep);
        assert_eq!(Depth::from_keyword(Some("Balanced")), Depth::Medium);
        assert_eq!(Depth::from_keyword(Some("soft")), Depth::Light);
    }

    #[test]
    fn test_unknown_or_missing_keyword_defaults_to_light() {
        assert_eq!(Depth::from_keyword(None), Depth::Light);
        assert_eq!(Depth::from_keyword(Some("")), Depth::Light);
        assert_eq!(Depth::from_keyword(Some("abyssal")), Depth::Light);

        let t = resolve_tone(Some("abyssal"), ModeFamily::Meeting);
        assert_eq!(t.phrase, "concise and brief");
    }

    #[test]
    fn test_every_depth_has_a_phrase_in_both_families() {
        for depth in Depth::ALL {
            assert!(!depth.phrase(ModeFamily::Dashboard).is_empty());
            assert!(!depth.phrase(ModeFamily::Meeting).is_empty());
        }
    }
}

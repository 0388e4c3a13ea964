//! Writing modes — the fixed set of styles the gateway can produce.

use serde::Serialize;

/// Which template family a mode belongs to. Drives tone phrasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModeFamily {
    /// Emotional writing: reflections, letters, poems and friends.
    Dashboard,
    /// Structured processing of raw meeting notes.
    Meeting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Reflection,
    Letter,
    Journal,
    Poem,
    Story,
    Quote,
    Affirmation,
    Note,
    Summary,
    KeyPoints,
    ActionItems,
    Minutes,
    Brainstorm,
}

impl Mode {
    pub const ALL: [Mode; 13] = [
        Mode::Reflection,
        Mode::Letter,
        Mode::Journal,
        Mode::Poem,
        Mode::Story,
        Mode::Quote,
        Mode::Affirmation,
        Mode::Note,
        Mode::Summary,
        Mode::KeyPoints,
        Mode::ActionItems,
        Mode::Minutes,
        Mode::Brainstorm,
    ];

    /// Accepted request names. The first entry is canonical.
    pub fn names(self) -> &'static [&'static str] {
        match self {
            Mode::Reflection => &["reflection", "reflections"],
            Mode::Letter => &["letters", "letter"],
            Mode::Journal => &["journal"],
            Mode::Poem => &["poems", "poem"],
            Mode::Story => &["story", "stories"],
            Mode::Quote => &["quotes", "quote"],
            Mode::Affirmation => &["affirmation", "affirmations"],
            Mode::Note => &["notes", "note"],
            Mode::Summary => &["summary"],
            Mode::KeyPoints => &["keypoints", "key-points", "key_points"],
            Mode::ActionItems => &["action", "actions", "action-items", "action_items"],
            Mode::Minutes => &["minutes"],
            Mode::Brainstorm => &["brainstorm"],
        }
    }

    pub fn as_str(self) -> &'static str {
        self.names()[0]
    }

    pub fn family(self) -> ModeFamily {
        match self {
            Mode::Summary
            | Mode::KeyPoints
            | Mode::ActionItems
            | Mode::Minutes
            | Mode::Brainstorm => ModeFamily::Meeting,
            _ => ModeFamily::Dashboard,
        }
    }

    /// Case-insensitive, trimmed match against every accepted name.
    pub fn parse(raw: &str) -> Option<Mode> {
        let wanted = raw.trim().to_lowercase();
        if wanted.is_empty() {
            return None;
        }
        Mode::ALL
            .into_iter()
            .find(|mode| mode.names().iter().any(|name| *name == wanted))
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive_and_trimmed() {
        assert_eq!(Mode::parse("  PoEms "), Some(Mode::Poem));
        assert_eq!(Mode::parse("Summary\n"), Some(Mode::Summary));
    }

    #[test]
    fn test_parse_accepts_aliases() {
        assert_eq!(Mode::parse("letter"), Some(Mode::Letter));
        assert_eq!(Mode::parse("key-points"), Some(Mode::KeyPoints));
        assert_eq!(Mode::parse("action_items"), Some(Mode::ActionItems));
    }

    #[test]
    fn test_parse_rejects_unknown_and_empty() {
        assert_eq!(Mode::parse("haiku"), None);
        assert_eq!(Mode::parse(""), None);
        assert_eq!(Mode::parse("   "), None);
    }

    #[test]
    fn test_canonical_name_round_trips() {
        for mode in Mode::ALL {
            assert_eq!(Mode::parse(mode.as_str()), Some(mode));
        }
    }

    #[test]
    fn test_aliases_are_unique_across_modes() {
        let mut seen = std::collections::HashSet::new();
        for mode in Mode::ALL {
            for name in mode.names() {
                assert!(seen.insert(*name), "alias {name} registered twice");
            }
        }
    }

    #[test]
    fn test_meeting_family() {
        assert_eq!(Mode::Minutes.family(), ModeFamily::Meeting);
        assert_eq!(Mode::Journal.family(), ModeFamily::Dashboard);
    }
}

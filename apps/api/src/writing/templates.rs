//! Template registry — one canonical prompt template per mode.

use crate::writing::mode::Mode;
use crate::writing::prompts::*;

/// A named slot inside a template body, written as `{name}` etc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    Name,
    Description,
    Tone,
    Date,
    SourceText,
}

impl Placeholder {
    pub const ALL: [Placeholder; 5] = [
        Placeholder::Name,
        Placeholder::Description,
        Placeholder::Tone,
        Placeholder::Date,
        Placeholder::SourceText,
    ];

    pub fn token(self) -> &'static str {
        match self {
            Placeholder::Name => "{name}",
            Placeholder::Description => "{desc}",
            Placeholder::Tone => "{tone}",
            Placeholder::Date => "{date}",
            Placeholder::SourceText => "{text}",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub mode: Mode,
    pub body: &'static str,
}

impl Template {
    pub fn for_mode(mode: Mode) -> Template {
        let body = match mode {
            Mode::Reflection => REFLECTION_TEMPLATE,
            Mode::Letter => LETTER_TEMPLATE,
            Mode::Journal => JOURNAL_TEMPLATE,
            Mode::Poem => POEM_TEMPLATE,
            Mode::Story => STORY_TEMPLATE,
            Mode::Quote => QUOTE_TEMPLATE,
            Mode::Affirmation => AFFIRMATION_TEMPLATE,
            Mode::Note => NOTE_TEMPLATE,
            Mode::Summary => SUMMARY_TEMPLATE,
            Mode::KeyPoints => KEYPOINTS_TEMPLATE,
            Mode::ActionItems => ACTION_ITEMS_TEMPLATE,
            Mode::Minutes => MINUTES_TEMPLATE,
            Mode::Brainstorm => BRAINSTORM_TEMPLATE,
        };
        Template { mode, body }
    }

    /// Placeholders referenced by this template's body.
    pub fn placeholders(&self) -> Vec<Placeholder> {
        Placeholder::ALL
            .into_iter()
            .filter(|p| self.body.contains(p.token()))
            .collect()
    }

    pub fn is_date_aware(&self) -> bool {
        self.body.contains(Placeholder::Date.token())
    }
}

/// Looks up the template for a raw mode string. `None` means the mode is not supported.
pub fn lookup_template(mode: &str) -> Option<Template> {
    Mode::parse(mode).map(Template::for_mode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_mode_has_a_template() {
        for mode in Mode::ALL {
            let template = Template::for_mode(mode);
            assert_eq!(template.mode, mode);
            assert!(!template.body.trim().is_empty());
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let template = lookup_template(" JOURNAL ").unwrap();
        assert_eq!(template.mode, Mode::Journal);
    }

    #[test]
    fn test_lookup_unknown_mode_is_none() {
        assert!(lookup_template("haiku").is_none());
        assert!(lookup_template("").is_none());
    }

    #[test]
    fn test_templates_only_use_known_placeholders() {
        for mode in Mode::ALL {
            let mut body = Template::for_mode(mode).body.to_string();
            for p in Placeholder::ALL {
                body = body.replace(p.token(), "");
            }
            assert!(
                !body.contains('{') && !body.contains('}'),
                "{mode} template has an unknown placeholder"
            );
        }
    }

    #[test]
    fn test_meeting_templates_take_source_text() {
        for mode in [Mode::Summary, Mode::KeyPoints, Mode::ActionItems, Mode::Minutes, Mode::Brainstorm] {
            assert!(Template::for_mode(mode)
                .placeholders()
                .contains(&Placeholder::SourceText));
        }
    }

    #[test]
    fn test_date_aware_templates() {
        assert!(Template::for_mode(Mode::Journal).is_date_aware());
        assert!(Template::for_mode(Mode::Minutes).is_date_aware());
        assert!(!Template::for_mode(Mode::Poem).is_date_aware());
    }
}

//! Fallback content bank — pre-written responses served when live generation fails.
//!
//! Buckets are keyed by (mode, depth). Meeting modes have no buckets: a fabricated
//! summary would be worse than the generic notice.

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::writing::mode::Mode;
use crate::writing::renderer::format_date;
use crate::writing::templates::Placeholder;
use crate::writing::tone::Depth;

/// Served when a (mode, depth) bucket is missing or empty.
pub const GENERIC_FALLBACK: &str =
    "✨ The words feel quiet right now.\n\nPlease try again in a moment.";

const REFLECTION_LIGHT: &[&str] = &[
    "Some feelings arrive softly, like light through a curtain. You noticed this one, and noticing is already a kind of tenderness.\n\nLet it sit beside you for a while. It does not need a name yet.",
    "There is a small, quiet space where this feeling lives. Today you opened the door just a little.\n\nThat was enough for now.",
];
const REFLECTION_MEDIUM: &[&str] = &[
    "What you carry has weight, even when no one else can see it. You have been holding it with more care than you realise.\n\nThe holding itself says something true about you.",
    "Feelings rarely come alone; they bring memories, hopes and old rooms we thought were closed. Yours is asking to be heard.\n\nListening is a quiet form of courage.",
    "Some moments stay with us longer than we expect. This one has settled somewhere deep and keeps returning.\n\nIt returns because it matters.",
];
const REFLECTION_DEEP: &[&str] = &[
    "Beneath the noise of the day there is a slower current, and this feeling moves with it. It has shaped more of you than you have said out loud.\n\nIn the stillness, it is finally being seen.",
    "Some emotions are not storms but tides, pulling gently and returning always. You have stood at this shore many times.\n\nEach time, you stayed a little longer.",
];

const LETTER_LIGHT: &[&str] = &[
    "I have been thinking of you in the quiet moments, the ones between errands and sleep. You show up there often.\n\nI hope this small note finds you well.",
    "There are things I never quite said, so I am writing them down instead. You mattered then, and you matter now.\n\nThat is all, and it is plenty.",
];
const LETTER_MEDIUM: &[&str] = &[
    "Some people leave an imprint that time does not smooth away. You are one of them, whether you knew it or not.\n\nThank you for the shape you left in my days.",
    "I keep returning to the moments we shared, turning them over like stones in my pocket. They are still warm.\n\nI wanted you to know that.",
    "Words often come late, but they come. Mine have been gathering for a long time, waiting for the right page.\n\nThis is that page.",
];
const LETTER_DEEP: &[&str] = &[
    "If I could return to one evening, I would choose one with you in it, the light low and the world unhurried. I have carried that evening for years.\n\nIt still feels like home.",
    "You taught me things without ever trying to, the way rivers teach stones to be smooth. I am still learning from the traces you left.\n\nI am grateful, always.",
];

const JOURNAL_LIGHT: &[&str] = &[
    "{date}\n\nToday felt gentle around the edges. I noticed a feeling I usually hurry past, and this time I let it stay.\n\nSmall awareness, quiet evening.",
    "{date}\n\nNothing dramatic happened, yet something shifted slightly. I wrote it down so I would remember.\n\nThat feels like enough.",
];
const JOURNAL_MEDIUM: &[&str] = &[
    "{date}\n\nThe day moved in layers: busy on the surface, heavier underneath. I kept returning to the same thought, turning it over slowly.\n\nWriting it here makes it lighter.",
    "{date}\n\nI carried something through the hours that I could not quite name. By evening, it had softened into something I could hold.\n\nI am learning to be patient with myself.",
];
const JOURNAL_DEEP: &[&str] = &[
    "{date}\n\nTonight the quiet is loud. Old memories and new worries sit at the same table, and I am listening to both without rushing either away.\n\nSomething in me is slowly making room.",
    "{date}\n\nThere is a depth to today I did not expect. A feeling surfaced that has been waiting a long time to be acknowledged.\n\nI see it now. I am staying with it.",
    "{date}\n\nThe day ended the way a long film ends, lingering on a single frame. That frame is where I keep finding myself.\n\nPerhaps it has something to teach me.",
];

const POEM_LIGHT: &[&str] = &[
    "a small light on the windowsill\nthe kettle humming something old\nI hold the moment loosely\nlike a leaf on slow water\nit stays\nand then it goes",
    "morning folds itself open\nsoft as an unsent letter\nI breathe in the quiet\nand let it settle\nhere, and here\nand here",
];
const POEM_MEDIUM: &[&str] = &[
    "there are rooms inside me\nwith the curtains half drawn\nI walk through them slowly\nlistening for your name\nthe floorboards remember\nwhat I try to forget",
    "rain on the road home\nthe streetlights blurring gold\nI carry the day in my pockets\nlike small, warm stones\neach one a moment\nI am not ready to set down",
];
const POEM_DEEP: &[&str] = &[
    "the tide keeps its promise\nreturning, always returning\nI stand where the water forgets the sand\nand the sand forgives the water\nsomewhere a lighthouse turns\nits slow gold eye toward me\nI have been waiting\nlonger than the sea",
    "under the weight of evening\nthe sky unbuttons its stars\nI open the old box of longing\nand every letter is still warm\nthe ink has learned my handwriting\nthe silence has learned your voice\nand the night, patient as ever,\nholds us both",
    "I keep a harbour for the things\nI never learned to say\nships come in with lanterns low\ncarrying your name in their holds\nthe water is deep here\ndeeper than I admit\nbut I have learned to float\non what I cannot hold",
];

const STORY_LIGHT: &[&str] = &[
    "She found the old postcard tucked inside a library book, the handwriting faded but kind. It said only: I hope today is gentle. She smiled, slipped it back between the pages, and carried the wish with her all afternoon.",
    "The café was nearly empty when he sat by the window. Rain traced slow lines on the glass. He ordered tea, opened his notebook, and for the first time in weeks, simply watched the world move without needing anything from it.",
];
const STORY_MEDIUM: &[&str] = &[
    "Every evening, the old man waited at the station, though no train he needed ever came. When a child asked why, he said he was keeping a promise. The child sat beside him, and for once, the waiting felt less lonely.",
    "She kept her grandmother's recipe card long after the kitchen was gone. One winter, she finally cooked from it. The smell filled the apartment, and for a moment, the years folded neatly closed, and she was small again, and safe.",
];
const STORY_DEEP: &[&str] = &[
    "He returned to the house by the sea after twenty years. The door stuck the way it always had. Inside, the light still fell across the same worn floorboards. He sat down where his father used to sit, and finally, he let himself cry.",
    "The letter arrived three years too late, its envelope softened by travel. She read it on the porch as the sun went down. By the last line, she understood everything she had been afraid to ask, and the silence felt like forgiveness.",
];

const QUOTE_LIGHT: &[&str] = &[
    "Even the quietest morning carries a little light for whoever is awake to see it.",
    "Some days, simply noticing how you feel is the bravest thing you do.",
];
const QUOTE_MEDIUM: &[&str] = &[
    "We do not outgrow our feelings; we grow room enough to hold them.",
    "What stays with us is rarely loud, only true.",
];
const QUOTE_DEEP: &[&str] = &[
    "The heart remembers in tides, returning always to the shores that shaped it.",
    "Some longings are not wounds but lanterns, lighting the way back to ourselves.",
];

const AFFIRMATION_LIGHT: &[&str] = &[
    "I am allowed to move gently today.",
    "My feelings are welcome here, exactly as they are.",
];
const AFFIRMATION_MEDIUM: &[&str] = &[
    "I can hold what I feel without needing to fix it.\nI am steady enough for this.",
    "I am learning to meet myself with patience.\nThat is enough for today.",
];
const AFFIRMATION_DEEP: &[&str] = &[
    "I carry my past with tenderness, not weight.\nI am still becoming, and that is beautiful.",
    "My depth is not a burden; it is how I love.\nI honour every part of what I feel.",
];

const NOTE_LIGHT: &[&str] = &[
    "• What you felt: a soft unease that came and went\n• Why it happened: a quiet day left room for thoughts to surface\n• What could help: a few slow breaths near an open window",
    "• What you felt: a small heaviness in the afternoon\n• Why it happened: tiredness often colours how moments feel\n• What could help: a warm drink and a pause without screens",
];
const NOTE_MEDIUM: &[&str] = &[
    "• What you felt: a mix of hope and worry\n• Why it happened: something important to you is still uncertain\n• What could help: writing down one thing that is already going well",
    "• What you felt: restlessness that was hard to name\n• Why it happened: unspoken thoughts tend to look for a way out\n• What could help: a short walk with no destination",
];
const NOTE_DEEP: &[&str] = &[
    "• What you felt: a deep, familiar ache\n• Why it happened: an old memory found its way into the present\n• What could help: letting the memory be there, without asking it to leave",
    "• What you felt: a quiet grief beneath the ordinary\n• Why it happened: loss often returns in waves, not lines\n• What could help: spending a moment with something that reminds you of comfort",
];

/// Configured candidates for a (mode, depth) pair. Empty for meeting modes.
pub fn candidates(mode: Mode, depth: Depth) -> &'static [&'static str] {
    match (mode, depth) {
        (Mode::Reflection, Depth::Light) => REFLECTION_LIGHT,
        (Mode::Reflection, Depth::Medium) => REFLECTION_MEDIUM,
        (Mode::Reflection, Depth::Deep) => REFLECTION_DEEP,
        (Mode::Letter, Depth::Light) => LETTER_LIGHT,
        (Mode::Letter, Depth::Medium) => LETTER_MEDIUM,
        (Mode::Letter, Depth::Deep) => LETTER_DEEP,
        (Mode::Journal, Depth::Light) => JOURNAL_LIGHT,
        (Mode::Journal, Depth::Medium) => JOURNAL_MEDIUM,
        (Mode::Journal, Depth::Deep) => JOURNAL_DEEP,
        (Mode::Poem, Depth::Light) => POEM_LIGHT,
        (Mode::Poem, Depth::Medium) => POEM_MEDIUM,
        (Mode::Poem, Depth::Deep) => POEM_DEEP,
        (Mode::Story, Depth::Light) => STORY_LIGHT,
        (Mode::Story, Depth::Medium) => STORY_MEDIUM,
        (Mode::Story, Depth::Deep) => STORY_DEEP,
        (Mode::Quote, Depth::Light) => QUOTE_LIGHT,
        (Mode::Quote, Depth::Medium) => QUOTE_MEDIUM,
        (Mode::Quote, Depth::Deep) => QUOTE_DEEP,
        (Mode::Affirmation, Depth::Light) => AFFIRMATION_LIGHT,
        (Mode::Affirmation, Depth::Medium) => AFFIRMATION_MEDIUM,
        (Mode::Affirmation, Depth::Deep) => AFFIRMATION_DEEP,
        (Mode::Note, Depth::Light) => NOTE_LIGHT,
        (Mode::Note, Depth::Medium) => NOTE_MEDIUM,
        (Mode::Note, Depth::Deep) => NOTE_DEEP,
        (Mode::Summary | Mode::KeyPoints | Mode::ActionItems | Mode::Minutes | Mode::Brainstorm, _) => &[],
    }
}

/// Picks one candidate uniformly at random, or the generic literal when the
/// bucket is empty. `{date}` is replaced with `today` as DD/MM/YYYY.
pub fn pick_fallback<R: Rng + ?Sized>(
    mode: Mode,
    depth: Depth,
    today: NaiveDate,
    rng: &mut R,
) -> String {
    match candidates(mode, depth).choose(rng) {
        Some(entry) => entry.replace(Placeholder::Date.token(), &format_date(today)),
        None => GENERIC_FALLBACK.to_string(),
    }
}

/// Source of randomness for fallback selection.
///
/// Unseeded banks use the thread-local RNG. A seeded bank builds a fresh `StdRng`
/// per pick, so every request with the same (mode, depth) gets the same entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackBank {
    seed: Option<u64>,
}

impl FallbackBank {
    pub fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }

    pub fn pick(&self, mode: Mode, depth: Depth, today: NaiveDate) -> String {
        match self.seed {
            Some(seed) => pick_fallback(mode, depth, today, &mut StdRng::seed_from_u64(seed)),
            None => pick_fallback(mode, depth, today, &mut rand::rng()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 2).unwrap()
    }

    #[test]
    fn test_every_dashboard_bucket_has_two_or_three_entries() {
        for mode in Mode::ALL {
            for depth in Depth::ALL {
                let n = candidates(mode, depth).len();
                match mode.family() {
                    crate::writing::mode::ModeFamily::Dashboard => {
                        assert!((2..=3).contains(&n), "{mode}/{depth:?} has {n} entries")
                    }
                    crate::writing::mode::ModeFamily::Meeting => assert_eq!(n, 0),
                }
            }
        }
    }

    #[test]
    fn test_deep_poem_bucket_has_three_entries() {
        assert_eq!(candidates(Mode::Poem, Depth::Deep).len(), 3);
    }

    #[test]
    fn test_pick_returns_a_configured_candidate() {
        let bank = FallbackBank::default();
        for _ in 0..50 {
            let text = bank.pick(Mode::Letter, Depth::Medium, today());
            assert!(candidates(Mode::Letter, Depth::Medium).contains(&text.as_str()));
        }
    }

    #[test]
    fn test_seeded_pick_is_deterministic() {
        let bank = FallbackBank::new(Some(7));
        let first = bank.pick(Mode::Story, Depth::Deep, today());
        for _ in 0..10 {
            assert_eq!(bank.pick(Mode::Story, Depth::Deep, today()), first);
        }
    }

    #[test]
    fn test_seeded_pick_matches_manual_rng() {
        let expected = pick_fallback(Mode::Quote, Depth::Light, today(), &mut StdRng::seed_from_u64(42));
        assert_eq!(FallbackBank::new(Some(42)).pick(Mode::Quote, Depth::Light, today()), expected);
    }

    #[test]
    fn test_journal_entry_carries_formatted_date() {
        let bank = FallbackBank::default();
        for depth in Depth::ALL {
            let text = bank.pick(Mode::Journal, depth, today());
            assert!(text.starts_with("02/11/2025"), "{text}");
            assert!(!text.contains("{date}"));
        }
    }

    #[test]
    fn test_meeting_modes_use_generic_literal() {
        let text = FallbackBank::new(Some(1)).pick(Mode::Summary, Depth::Deep, today());
        assert_eq!(text, GENERIC_FALLBACK);
    }

    #[test]
    fn test_no_entry_is_empty() {
        for mode in Mode::ALL {
            for depth in Depth::ALL {
                for entry in candidates(mode, depth) {
                    assert!(!entry.trim().is_empty());
                }
            }
        }
        assert!(!GENERIC_FALLBACK.trim().is_empty());
    }
}

//! Curated fallback quote bank, keyed by mood keywords.
//!
//! Classification is deterministic: categories are tested in a fixed
//! priority order and the first keyword match wins, even when a later
//! category would also match. Only the draw within the winning category is
//! random, and that draw takes an injectable `Rng` so tests can seed it.

use rand::Rng;

/// One mood family: a tag, the substrings that select it, and its quotes.
pub struct MoodCategory {
    pub tag: &'static str,
    keywords: &'static [&'static str],
    pub quotes: &'static [&'static str],
}

impl MoodCategory {
    fn matches(&self, normalized_mood: &str) -> bool {
        self.keywords.iter().any(|keyword| normalized_mood.contains(keyword))
    }
}

static ANXIOUS: MoodCategory = MoodCategory {
    tag: "anxious",
    keywords: &["anxious", "worried", "nervous", "panic"],
    quotes: &[
        "Worrying does not take away tomorrow's troubles. It takes away today's peace.",
        "You've survived 100% of your bad days. You're doing great.",
        "Anxiety is a thin stream of fear trickling through the mind. Change the channel to courage.",
        "Your mind is a garden, your thoughts are the seeds. You can grow flowers or you can grow weeds.",
        "Feel the fear and do it anyway. Courage is not the absence of fear, but action in spite of it.",
        "Breathe. You are not your thoughts. You are the sky, and thoughts are just passing clouds.",
    ],
};

static SAD: MoodCategory = MoodCategory {
    tag: "sad",
    keywords: &["sad", "down", "depressed", "lonely", "empty"],
    quotes: &[
        "Even the darkest night will end and the sun will rise.",
        "Your feelings are valid. It's okay to not be okay sometimes.",
        "This too shall pass. Be patient with yourself.",
        "Grief is love with no place to go. Allow yourself to feel.",
        "You are allowed to be both a masterpiece and a work in progress simultaneously.",
        "The wound is the place where the light enters you.",
        "Sometimes the bad things that happen in our lives put us directly on the path to the best things.",
    ],
};

static TIRED: MoodCategory = MoodCategory {
    tag: "tired",
    keywords: &["tired", "exhausted", "overwhelmed", "drained", "burnout"],
    quotes: &[
        "Rest is not idleness. Taking time to recharge is essential for your wellbeing.",
        "You don't have to see the whole staircase. Just take the first step.",
        "Be gentle with yourself. You're doing the best you can.",
        "Almost everything will work again if you unplug it for a few minutes, including you.",
        "You can't pour from an empty cup. Take care of yourself first.",
        "Sometimes the most productive thing you can do is rest.",
        "It's okay to slow down. You don't have to do it all today.",
    ],
};

static STRESSED: MoodCategory = MoodCategory {
    tag: "stressed",
    keywords: &["stressed", "pressure", "tense"],
    quotes: &[
        "You are braver than you believe, stronger than you seem, and smarter than you think.",
        "It's okay to take things one day at a time. Progress, not perfection.",
        "You've weathered many storms before. This too is temporary.",
        "The greatest weapon against stress is our ability to choose one thought over another.",
        "You don't have to control your thoughts. You just have to stop letting them control you.",
        "Within you is the strength to meet life's challenges and the wisdom to know when to ask for help.",
    ],
};

static ANGRY: MoodCategory = MoodCategory {
    tag: "angry",
    keywords: &["angry", "mad", "frustrated", "irritated"],
    quotes: &[
        "Holding onto anger is like drinking poison and expecting the other person to die.",
        "Your peace is more important than driving yourself crazy trying to understand why something happened.",
        "Anger is an acid that can do more harm to the vessel in which it is stored than to anything on which it is poured.",
        "Take a deep breath. It's just a bad day, not a bad life.",
        "You have the power to choose your response. Choose peace.",
    ],
};

static LOST: MoodCategory = MoodCategory {
    tag: "lost",
    keywords: &["lost", "confused", "uncertain", "unsure", "stuck"],
    quotes: &[
        "Not all who wander are lost. Sometimes you need to explore to find your path.",
        "It's okay to not have it all figured out. Life is a journey, not a destination.",
        "When you feel lost, remember that the forest is darkest just before you find the clearing.",
        "Confusion is the first step toward clarity.",
        "Sometimes the wrong choices bring us to the right places.",
        "You don't need to see the whole path. Just take the next step.",
    ],
};

static HAPPY: MoodCategory = MoodCategory {
    tag: "happy",
    keywords: &["happy", "great", "excited", "good", "amazing"],
    quotes: &[
        "Keep shining! Your positive energy is contagious and the world needs more of it.",
        "Happiness looks gorgeous on you. Celebrate every moment of joy.",
        "This feeling is a glimpse of your true potential. Keep reaching for it.",
        "Your joy is your strength. Never apologize for being happy.",
        "May this moment of happiness remind you of all the good that's possible.",
    ],
};

static GRATEFUL: MoodCategory = MoodCategory {
    tag: "grateful",
    keywords: &["grateful", "thankful", "blessed"],
    quotes: &[
        "Gratitude turns what we have into enough, and more.",
        "The more grateful you are, the more you will find to be grateful for.",
        "Gratitude is not only the greatest of virtues, but the parent of all others.",
        "When you focus on the good, the good gets better.",
    ],
};

static GENERAL: MoodCategory = MoodCategory {
    tag: "general",
    keywords: &[],
    quotes: &[
        "Every storm runs out of rain. This feeling will pass, and you'll emerge stronger.",
        "In the midst of difficulty lies opportunity. You're more resilient than you know.",
        "This moment doesn't define you. Your strength lies in continuing despite how you feel.",
        "The only way out is through. Keep going, you've got this.",
        "Your current situation is not your final destination. Better days are coming.",
        "You are exactly where you need to be. Trust the journey.",
        "Everything you're going through is preparing you for what you asked for.",
        "You've come so far. Don't give up now.",
    ],
};

// Priority order is load-bearing: the first match wins.
static PRIORITY: [&MoodCategory; 8] =
    [&ANXIOUS, &SAD, &TIRED, &STRESSED, &ANGRY, &LOST, &HAPPY, &GRATEFUL];

/// Classify a mood string into its category. Falls back to `general` when no
/// keyword matches, so classification never fails.
pub fn classify(mood: &str) -> &'static MoodCategory {
    let normalized = mood.to_lowercase();
    PRIORITY.iter().find(|category| category.matches(&normalized)).copied().unwrap_or(&GENERAL)
}

/// Draw one quote for the mood using the supplied random source.
pub fn select_fallback_with<R: Rng + ?Sized>(mood: &str, rng: &mut R) -> &'static str {
    let category = classify(mood);
    category.quotes[rng.gen_range(0..category.quotes.len())]
}

/// Draw one quote for the mood using the thread-local random source.
pub fn select_fallback(mood: &str) -> &'static str {
    select_fallback_with(mood, &mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::{classify, select_fallback, select_fallback_with};

    #[test]
    fn known_keyword_selects_its_category() {
        assert_eq!(classify("feeling anxious about tomorrow").tag, "anxious");
        assert_eq!(classify("a bit LONELY tonight").tag, "sad");
        assert_eq!(classify("completely drained after work").tag, "tired");
        assert_eq!(classify("under a lot of pressure").tag, "stressed");
        assert_eq!(classify("so frustrated with everything").tag, "angry");
        assert_eq!(classify("stuck and unsure").tag, "lost");
        assert_eq!(classify("amazing day!").tag, "happy");
        assert_eq!(classify("thankful for my friends").tag, "grateful");
    }

    #[test]
    fn overwhelmed_belongs_to_the_tired_family() {
        assert_eq!(classify("overwhelmed").tag, "tired");
    }

    #[test]
    fn unmatched_mood_uses_general_category() {
        assert_eq!(classify("meh").tag, "general");
        assert_eq!(classify("quixotic").tag, "general");
    }

    #[test]
    fn first_matching_category_wins_on_overlap() {
        // "anxious" is earlier in the priority order than "sad".
        assert_eq!(classify("anxious and sad").tag, "anxious");
        // Order of the words in the input does not matter.
        assert_eq!(classify("sad and anxious").tag, "anxious");
        // "down" (sad family) beats "tired".
        assert_eq!(classify("tired and down").tag, "sad");
    }

    #[test]
    fn selection_stays_within_the_classified_category() {
        let category = classify("worried sick");
        for _ in 0..50 {
            let quote = select_fallback("worried sick");
            assert!(category.quotes.contains(&quote));
        }
    }

    #[test]
    fn selection_never_returns_empty() {
        for mood in ["", "   ", "anxious", "total gibberish", "happy and grateful"] {
            assert!(!select_fallback(mood).is_empty());
        }
    }

    #[test]
    fn seeded_rng_makes_selection_deterministic() {
        let mut first = StdRng::seed_from_u64(7);
        let mut second = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            assert_eq!(
                select_fallback_with("stressed out", &mut first),
                select_fallback_with("stressed out", &mut second)
            );
        }
    }
}

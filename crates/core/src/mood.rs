// Mood catalog and matching heuristic
//
// The catalog is a process-wide read-only table; matching is a fixed-priority
// linear scan. The scan order is a behavioral contract: direct category
// matches first (sad, anxious, angry, stressed, tired, happy), then synonym
// groups, then the stressed fallback.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Mood categories the assistant knows suggestions for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoodCategory {
    Sad,
    Anxious,
    Angry,
    Stressed,
    Tired,
    Happy,
}

impl MoodCategory {
    /// All categories, in match priority order.
    pub const ALL: [MoodCategory; 6] = [
        MoodCategory::Sad,
        MoodCategory::Anxious,
        MoodCategory::Angry,
        MoodCategory::Stressed,
        MoodCategory::Tired,
        MoodCategory::Happy,
    ];

    /// The category name used for matching and output.
    pub fn name(&self) -> &'static str {
        match self {
            MoodCategory::Sad => "sad",
            MoodCategory::Anxious => "anxious",
            MoodCategory::Angry => "angry",
            MoodCategory::Stressed => "stressed",
            MoodCategory::Tired => "tired",
            MoodCategory::Happy => "happy",
        }
    }
}

/// Suggestion intensity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoodIntensity {
    Mild,
    #[default]
    Moderate,
    Intense,
}

impl MoodIntensity {
    /// Parse an intensity name, case-insensitively. Unknown names yield
    /// `None`; callers fall back to the moderate list.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "mild" => Some(MoodIntensity::Mild),
            "moderate" => Some(MoodIntensity::Moderate),
            "intense" => Some(MoodIntensity::Intense),
            _ => None,
        }
    }
}

/// The three suggestion lists for one category.
struct MoodShelf {
    mild: [&'static str; 3],
    moderate: [&'static str; 3],
    intense: [&'static str; 3],
}

impl MoodShelf {
    fn list(&self, intensity: MoodIntensity) -> &[&'static str; 3] {
        match intensity {
            MoodIntensity::Mild => &self.mild,
            MoodIntensity::Moderate => &self.moderate,
            MoodIntensity::Intense => &self.intense,
        }
    }
}

static CATALOG: Lazy<HashMap<MoodCategory, MoodShelf>> = Lazy::new(|| {
    let mut catalog = HashMap::new();
    catalog.insert(
        MoodCategory::Sad,
        MoodShelf {
            mild: [
                "Listen to uplifting music",
                "Take a short walk outside",
                "Call a friend for a quick chat",
            ],
            moderate: [
                "Practice mindfulness meditation for 10 minutes",
                "Watch a comedy show or funny videos",
                "Write down three things you're grateful for",
            ],
            intense: [
                "Reach out to a close friend or family member",
                "Consider talking to a professional counselor",
                "Practice deep breathing exercises and self-compassion",
            ],
        },
    );
    catalog.insert(
        MoodCategory::Anxious,
        MoodShelf {
            mild: [
                "Take five deep breaths",
                "Step outside for fresh air",
                "Make a cup of calming tea",
            ],
            moderate: [
                "Try a guided meditation for anxiety",
                "Write down your worries and challenge negative thoughts",
                "Do a brief physical activity like stretching",
            ],
            intense: [
                "Use the 5-4-3-2-1 grounding technique",
                "Practice progressive muscle relaxation",
                "Consider talking to a mental health professional",
            ],
        },
    );
    catalog.insert(
        MoodCategory::Angry,
        MoodShelf {
            mild: [
                "Count to ten slowly",
                "Take a short break from the situation",
                "Drink a glass of cold water",
            ],
            moderate: [
                "Do physical exercise to release tension",
                "Write down your feelings without judgment",
                "Listen to calming music",
            ],
            intense: [
                "Remove yourself from the triggering situation",
                "Practice deep breathing until you feel calmer",
                "Use visualization to imagine a peaceful scene",
            ],
        },
    );
    catalog.insert(
        MoodCategory::Stressed,
        MoodShelf {
            mild: [
                "Take a short break and stretch",
                "Make a to-do list to organize tasks",
                "Listen to calming music",
            ],
            moderate: [
                "Go for a walk outside",
                "Practice progressive muscle relaxation",
                "Set boundaries and learn to say no",
            ],
            intense: [
                "Prioritize self-care activities",
                "Break large tasks into smaller steps",
                "Consider talking to someone about your stress",
            ],
        },
    );
    catalog.insert(
        MoodCategory::Tired,
        MoodShelf {
            mild: [
                "Take a short 10-minute power nap",
                "Have a healthy snack for energy",
                "Do some light stretching",
            ],
            moderate: [
                "Step outside for fresh air and sunlight",
                "Drink water as dehydration can cause fatigue",
                "Take short breaks between tasks",
            ],
            intense: [
                "Evaluate your sleep schedule and quality",
                "Consider reducing caffeine and screen time before bed",
                "Make time for proper rest and recovery",
            ],
        },
    );
    catalog.insert(
        MoodCategory::Happy,
        MoodShelf {
            mild: [
                "Share your happiness with someone else",
                "Express gratitude for the moment",
                "Take a photo to remember this feeling",
            ],
            moderate: [
                "Channel your positive energy into a creative activity",
                "Do something kind for someone else",
                "Journal about what made you happy",
            ],
            intense: [
                "Celebrate your joy fully without holding back",
                "Use this positive state to tackle something challenging",
                "Reflect on what led to this happiness to recreate it later",
            ],
        },
    );
    catalog
});

static GENERAL_ADVICE: Lazy<HashMap<MoodCategory, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (
            MoodCategory::Sad,
            "Remember that emotions are temporary and will pass with time.",
        ),
        (
            MoodCategory::Anxious,
            "Focus on what you can control in the present moment.",
        ),
        (
            MoodCategory::Angry,
            "Try to understand the root cause of your anger before reacting.",
        ),
        (
            MoodCategory::Stressed,
            "Taking small breaks can significantly reduce overall stress levels.",
        ),
        (
            MoodCategory::Tired,
            "Listen to your body's needs for rest and recovery.",
        ),
        (
            MoodCategory::Happy,
            "Savor this positive emotion and remember what contributed to it.",
        ),
    ])
});

const DEFAULT_ADVICE: &str = "Take care of your emotional wellbeing.";

/// Synonym word groups, in match priority order. Stressed has no synonyms;
/// it is the fallback when nothing else matches.
const SYNONYMS: [(MoodCategory, [&str; 4]); 5] = [
    (MoodCategory::Sad, ["depressed", "down", "blue", "gloomy"]),
    (MoodCategory::Anxious, ["worried", "nervous", "tense", "uneasy"]),
    (MoodCategory::Angry, ["mad", "frustrated", "irritated", "annoyed"]),
    (MoodCategory::Tired, ["exhausted", "sleepy", "fatigued", "drained"]),
    (MoodCategory::Happy, ["joyful", "excited", "pleased", "content"]),
];

/// Match a free-text mood description to a category.
///
/// The input is expected lowercased and non-empty. First direct substring
/// matches against category names (either direction), then synonym groups,
/// then stressed as the default.
pub fn match_mood(current_mood: &str) -> MoodCategory {
    for category in MoodCategory::ALL {
        let name = category.name();
        if current_mood.contains(name) || name.contains(current_mood) {
            return category;
        }
    }

    for (category, words) in SYNONYMS {
        if words.iter().any(|word| current_mood.contains(word)) {
            return category;
        }
    }

    MoodCategory::Stressed
}

/// The three suggestions for a category at an intensity.
///
/// An unrecognized intensity falls back to the moderate list; a category
/// missing from the catalog falls back to the stressed shelf. Neither should
/// occur with the fixed catalog, but the lookup guards anyway.
pub fn suggestions_for(
    category: MoodCategory,
    intensity: Option<MoodIntensity>,
) -> &'static [&'static str; 3] {
    let shelf = CATALOG
        .get(&category)
        .unwrap_or_else(|| &CATALOG[&MoodCategory::Stressed]);
    shelf.list(intensity.unwrap_or_default())
}

/// One-line general advice for a category.
pub fn general_advice(category: MoodCategory) -> &'static str {
    GENERAL_ADVICE.get(&category).copied().unwrap_or(DEFAULT_ADVICE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_match_wins() {
        assert_eq!(match_mood("anxious"), MoodCategory::Anxious);
        assert_eq!(match_mood("i am so happy today"), MoodCategory::Happy);
        assert_eq!(match_mood("stressed out"), MoodCategory::Stressed);
    }

    #[test]
    fn reverse_substring_matches_too() {
        // A truncated input that is itself a substring of a category name
        assert_eq!(match_mood("sa"), MoodCategory::Sad);
        assert_eq!(match_mood("anxiou"), MoodCategory::Anxious);
    }

    #[test]
    fn synonyms_match_when_no_category_name_appears() {
        assert_eq!(match_mood("i feel really down today"), MoodCategory::Sad);
        assert_eq!(match_mood("worried about tomorrow"), MoodCategory::Anxious);
        assert_eq!(match_mood("so frustrated right now"), MoodCategory::Angry);
        assert_eq!(match_mood("completely drained"), MoodCategory::Tired);
        assert_eq!(match_mood("excited about the trip"), MoodCategory::Happy);
    }

    #[test]
    fn scan_order_is_fixed() {
        // Both "happy" and "sad" appear; sad is earlier in the scan order.
        assert_eq!(match_mood("happy but also sad"), MoodCategory::Sad);
        // A direct category name beats a synonym of an earlier category.
        assert_eq!(match_mood("down but happy"), MoodCategory::Happy);
    }

    #[test]
    fn unmatched_input_defaults_to_stressed() {
        assert_eq!(match_mood("meh"), MoodCategory::Stressed);
        assert_eq!(match_mood("feeling weird"), MoodCategory::Stressed);
    }

    #[test]
    fn catalog_is_fully_populated() {
        for category in MoodCategory::ALL {
            for intensity in [
                MoodIntensity::Mild,
                MoodIntensity::Moderate,
                MoodIntensity::Intense,
            ] {
                let suggestions = suggestions_for(category, Some(intensity));
                assert_eq!(suggestions.len(), 3);
                assert!(suggestions.iter().all(|s| !s.is_empty()));
            }
            assert!(!general_advice(category).is_empty());
        }
    }

    #[test]
    fn unknown_intensity_falls_back_to_moderate() {
        assert_eq!(MoodIntensity::parse("overwhelming"), None);
        assert_eq!(
            suggestions_for(MoodCategory::Sad, None),
            suggestions_for(MoodCategory::Sad, Some(MoodIntensity::Moderate))
        );
    }

    #[test]
    fn intense_happy_catalog_entries() {
        let suggestions = suggestions_for(MoodCategory::Happy, Some(MoodIntensity::Intense));
        assert_eq!(
            suggestions,
            &[
                "Celebrate your joy fully without holding back",
                "Use this positive state to tackle something challenging",
                "Reflect on what led to this happiness to recreate it later",
            ]
        );
        assert_eq!(
            general_advice(MoodCategory::Happy),
            "Savor this positive emotion and remember what contributed to it."
        );
    }

    #[test]
    fn intensity_parsing_is_case_insensitive() {
        assert_eq!(MoodIntensity::parse("MILD"), Some(MoodIntensity::Mild));
        assert_eq!(MoodIntensity::parse("Intense"), Some(MoodIntensity::Intense));
        assert_eq!(MoodIntensity::default(), MoodIntensity::Moderate);
    }
}

//! Embedded word lists
//!
//! A curated default answer pool, extra guessable-only words for the
//! dictionary, and a themed variable-width list.

/// Default answer pool: common five-letter words a target is drawn from
pub const ANSWERS: &[&str] = &[
    "abbey", "about", "above", "actor", "adult", "after", "again", "agent", "agree", "ahead",
    "alarm", "album", "alert", "alike", "alive", "allow", "alone", "along", "alter", "among",
    "anger", "angle", "angry", "apart", "apple", "apply", "arena", "argue", "arise", "armor",
    "aroma", "aside", "asset", "audio", "audit", "avoid", "awake", "award", "aware", "badge",
    "baker", "basic", "basis", "beach", "began", "begin", "being", "below", "bench", "birth",
    "black", "blade", "blame", "blank", "blast", "blend", "blind", "block", "blood", "board",
    "boast", "bonds", "bonus", "boost", "booth", "bound", "brain", "brand", "brave", "bread",
    "break", "breed", "bribe", "brick", "brief", "bring", "broad", "broke", "brown", "brush",
    "build", "built", "burst", "buyer", "cabin", "cable", "candy", "cargo", "carry", "catch",
    "cause", "chain", "chair", "chalk", "charm", "chart", "chase", "cheap", "check", "chest",
    "chief", "child", "chill", "choir", "chose", "civil", "claim", "class", "clean", "clear",
    "clerk", "click", "climb", "clock", "close", "cloth", "cloud", "coach", "coast", "could",
    "count", "court", "cover", "craft", "crane", "crash", "cream", "crime", "crone", "cross",
    "crowd", "crown", "cycle", "daily", "dance", "dealt", "death", "debut", "delta", "dense",
    "depth", "dough", "doubt", "dozen", "draft", "drama", "drawn", "dream", "dress", "drill",
    "drink", "drive", "drove", "dying", "eager", "early", "earth", "eight", "elite", "empty",
    "enemy", "enjoy", "enter", "entry", "equal", "erase", "error", "event", "every", "exact",
    "exist", "extra", "faith", "false", "fault", "fiber", "field", "fifth", "fifty", "fight",
    "final", "first", "fixed", "flash", "fleet", "floor", "fluid", "focus", "force", "forth",
    "forty", "forum", "found", "frame", "fresh", "front", "fruit", "fully", "funny", "geese",
    "giant", "given", "glass", "globe", "going", "grace", "grade", "grand", "grant", "grass",
    "great", "green", "gross", "group", "grown", "guard", "guess", "guest", "guide", "happy",
    "heart", "heavy", "hello", "hence", "horse", "hotel", "house", "human", "ideal", "image",
    "index", "inner", "input", "issue", "joint", "judge", "known", "label", "large", "laser",
    "later", "laugh", "layer", "learn", "lease", "least", "leave", "legal", "level", "light",
    "limit", "local", "logic", "loose", "lower", "lucky", "lunch", "magic", "major", "maker",
    "march", "match", "maybe", "mayor", "meant", "media", "metal", "might", "minor", "minus",
    "mixed", "model", "moist", "money", "month", "moral", "motor", "mount", "mouse", "mouth",
    "movie", "music", "needs", "never", "newly", "night", "noise", "north", "noted", "novel",
    "nurse", "occur", "ocean", "offer", "often", "order", "other", "ought", "paint", "panel",
    "paper", "party", "peace", "phase", "phone", "photo", "piece", "pilot", "pitch", "place",
    "plain", "plane", "plant", "plate", "point", "pound", "power", "press", "price", "pride",
    "prime", "print", "prior", "prize", "proof", "proud", "prove", "queen", "quick", "quiet",
    "quite", "racer", "radar", "radio", "raise", "range", "rapid", "ratio", "reach", "ready",
    "refer", "right", "rival", "river", "robot", "rough", "round", "route", "royal", "rural",
    "scale", "scene", "scope", "score", "sense", "serve", "seven", "shall", "shape", "share",
    "sharp", "sheet", "shelf", "shell", "shift", "shirt", "shock", "shoot", "short", "shown",
    "sight", "since", "sixth", "sixty", "sized", "skill", "slate", "sleep", "slide", "small",
    "smart", "smile", "smoke", "solid", "solve", "sorry", "sound", "south", "space", "spare",
    "speak", "speed", "spend", "spent", "split", "spoke", "sport", "staff", "stage", "stake",
    "stand", "start", "state", "steam", "steel", "stick", "still", "stock", "stone", "stood",
    "store", "storm", "story", "strip", "stuck", "study", "stuff", "style", "sugar", "suite",
    "super", "sweet", "table", "taken", "taste", "teach", "thank", "theft", "their", "theme",
    "there", "these", "thick", "thing", "think", "third", "those", "three", "threw", "throw",
    "tight", "timer", "tired", "title", "today", "topic", "total", "touch", "tough", "tower",
    "track", "trade", "train", "treat", "trend", "trial", "tribe", "trick", "tried", "tries",
    "truck", "truly", "trust", "truth", "twice", "under", "undue", "union", "unity", "until",
    "upper", "upset", "urban", "usage", "usual", "valid", "value", "video", "virus", "visit",
    "vital", "voice", "waste", "watch", "water", "wheel", "where", "which", "while", "white",
    "whole", "whose", "woman", "women", "world", "worry", "worse", "worst", "worth", "would",
    "wound", "write", "wrong", "wrote", "young", "youth",
];

/// Extra guessable words that are never drawn as answers
pub const EXTENDED: &[&str] = &[
    "aahed", "abaca", "abaci", "aback", "abaft", "abase", "abash", "abate", "abbot", "abeam",
    "abets", "abhor", "abide", "abler", "abode", "aboil", "abort", "abuts", "abuzz", "acais",
    "ached", "aches", "acids", "acing", "acmes", "acned", "acnes", "acold", "acres", "acted",
    "adder", "addle", "adept", "adieu", "adios", "adits", "adman", "admen", "adobe", "adobo",
    "adopt", "adore", "adorn", "adown", "aeons", "books", "bobby", "geeks", "llama", "ninja",
    "oozes", "pizza", "quirk", "vivid", "yacht",
];

/// Themed list of variable-width words (3-9 letters)
pub const THEMED: &[&str] = &["anime", "manga", "naruto", "nakano", "oregairu"];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn answers_are_valid_five_letter_words() {
        for &word in ANSWERS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn extended_words_are_valid() {
        for &word in EXTENDED {
            assert!(Word::new(word).is_ok(), "Word '{word}' rejected");
        }
    }

    #[test]
    fn themed_words_are_valid_and_variable_width() {
        let mut widths: Vec<usize> = THEMED.iter().map(|w| w.len()).collect();
        widths.sort_unstable();
        widths.dedup();
        assert!(widths.len() > 1, "themed list should mix word widths");

        for &word in THEMED {
            assert!(Word::new(word).is_ok(), "Word '{word}' rejected");
        }
    }

    #[test]
    fn no_answer_repeats_in_extended() {
        for &word in EXTENDED {
            assert!(!ANSWERS.contains(&word), "'{word}' in both lists");
        }
    }
}

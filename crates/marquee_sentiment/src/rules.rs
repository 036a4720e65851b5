//! Word lists and constants for the valence rules.

/// Boost applied by an intensifier such as "very".
pub(crate) const B_INCR: f64 = 0.293;
/// Damping applied by a diminisher such as "slightly".
pub(crate) const B_DECR: f64 = -0.293;
/// Emphasis for an ALL-CAPS word in mixed-case text.
pub(crate) const C_INCR: f64 = 0.733;
/// Multiplier for a negated word.
pub(crate) const N_SCALAR: f64 = -0.74;
/// Normalization constant for the compound score.
pub(crate) const NORMALIZE_ALPHA: f64 = 15.0;
/// Weight of each modifier by distance (1, 2 or 3 words back).
pub(crate) const DISTANCE_DAMPING: [f64; 3] = [1.0, 0.95, 0.9];

const NEGATIONS: &[&str] = &[
    "aint", "ain't", "arent", "aren't", "cannot", "cant", "can't", "couldnt", "couldn't",
    "darent", "daren't", "despite", "didnt", "didn't", "doesnt", "doesn't", "dont", "don't",
    "hadnt", "hadn't", "hasnt", "hasn't", "havent", "haven't", "isnt", "isn't", "mightnt",
    "mightn't", "mustnt", "mustn't", "neednt", "needn't", "neither", "never", "none", "nope",
    "nor", "not", "nothing", "nowhere", "oughtnt", "oughtn't", "rarely", "seldom", "shant",
    "shan't", "shouldnt", "shouldn't", "uh-uh", "uhuh", "wasnt", "wasn't", "werent",
    "weren't", "without", "wont", "won't", "wouldnt", "wouldn't",
];

const INCREMENTS: &[&str] = &[
    "absolutely", "amazingly", "awfully", "completely", "considerably", "decidedly",
    "deeply", "enormously", "entirely", "especially", "exceptionally", "extremely",
    "fabulously", "fully", "greatly", "highly", "hugely", "incredibly", "intensely",
    "majorly", "more", "most", "particularly", "purely", "quite", "really", "remarkably",
    "so", "substantially", "thoroughly", "totally", "tremendously", "unbelievably",
    "unusually", "utterly", "very",
];

const DECREMENTS: &[&str] = &[
    "almost", "barely", "hardly", "kinda", "less", "little", "marginally", "occasionally",
    "partly", "scarcely", "slightly", "somewhat", "sorta",
];

/// Whether a lowercase token negates what follows.
pub(crate) fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word) || word.ends_with("n't")
}

/// Boost contributed by a lowercase degree modifier, or `None` for other words.
pub(crate) fn booster(word: &str) -> Option<f64> {
    if INCREMENTS.contains(&word) {
        Some(B_INCR)
    } else if DECREMENTS.contains(&word) {
        Some(B_DECR)
    } else {
        None
    }
}

/// True when every cased character is uppercase and at least one exists.
pub(crate) fn is_all_caps(word: &str) -> bool {
    word.chars().any(char::is_alphabetic)
        && word
            .chars()
            .filter(|c| c.is_alphabetic())
            .all(char::is_uppercase)
}

/// Emphasis from exclamation and question marks.
pub(crate) fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(4) as f64 * 0.292;
    let questions = match text.matches('?').count() {
        0 | 1 => 0.0,
        n @ 2..=3 => n as f64 * 0.18,
        _ => 0.96,
    };
    exclamations + questions
}

/// Squash an unbounded valence sum into `[-1.0, 1.0]`.
pub(crate) fn normalize(score: f64) -> f64 {
    if score.is_nan() {
        return 0.0;
    }
    let squared = score * score;
    if squared.is_infinite() {
        return score.signum();
    }
    (score / (squared + NORMALIZE_ALPHA).sqrt()).clamp(-1.0, 1.0)
}

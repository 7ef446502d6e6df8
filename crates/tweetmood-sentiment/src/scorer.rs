//! Lexicon-based polarity scoring for general English text.

/// Produces a polarity score in `[-1.0, 1.0]` for a piece of text.
///
/// Implement this to plug in a different scorer; [`LexiconAnalyzer`] is the
/// bundled default.
pub trait PolarityAnalyzer {
    fn polarity(&self, text: &str) -> f32;
}

/// Scores text with the built-in word lexicon. See [`lexicon_polarity`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconAnalyzer;

impl PolarityAnalyzer for LexiconAnalyzer {
    fn polarity(&self, text: &str) -> f32 {
        lexicon_polarity(text)
    }
}

/// Word weights. Keys are lowercase single words; values in `(0.0, 1.0]` are
/// positive, in `[-1.0, 0.0)` negative.
pub(crate) const LEXICON: &[(&str, f32)] = &[
    // Positive
    ("amazing", 0.6),
    ("awesome", 1.0),
    ("beautiful", 0.85),
    ("best", 1.0),
    ("better", 0.5),
    ("brilliant", 0.9),
    ("celebrate", 0.5),
    ("cool", 0.35),
    ("enjoy", 0.4),
    ("enjoyed", 0.4),
    ("enjoying", 0.4),
    ("excellent", 1.0),
    ("excited", 0.4),
    ("exciting", 0.3),
    ("fantastic", 0.4),
    ("fun", 0.3),
    ("glad", 0.5),
    ("good", 0.7),
    ("grateful", 0.5),
    ("great", 0.8),
    ("happy", 0.8),
    ("helpful", 0.4),
    ("interesting", 0.5),
    ("love", 0.5),
    ("loved", 0.7),
    ("lovely", 0.5),
    ("loving", 0.6),
    ("lucky", 0.35),
    ("nice", 0.6),
    ("perfect", 1.0),
    ("productive", 0.4),
    ("proud", 0.8),
    ("success", 0.3),
    ("successful", 0.75),
    ("thankful", 0.5),
    ("thanks", 0.2),
    ("win", 0.8),
    ("wonderful", 1.0),
    // Negative
    ("angry", -0.5),
    ("annoyed", -0.4),
    ("annoying", -0.8),
    ("awful", -1.0),
    ("bad", -0.7),
    ("boring", -1.0),
    ("broke", -0.4),
    ("disappointed", -0.75),
    ("disappointing", -0.6),
    ("dreadful", -1.0),
    ("exhausted", -0.4),
    ("fail", -0.5),
    ("failed", -0.5),
    ("frustrated", -0.7),
    ("frustrating", -0.7),
    ("hate", -0.8),
    ("hated", -0.9),
    ("horrible", -1.0),
    ("hurt", -0.5),
    ("late", -0.3),
    ("miserable", -1.0),
    ("overworked", -0.6),
    ("pathetic", -1.0),
    ("poor", -0.4),
    ("sad", -0.5),
    ("sick", -0.7),
    ("stress", -0.5),
    ("stressed", -0.5),
    ("stressful", -0.6),
    ("stupid", -0.8),
    ("terrible", -1.0),
    ("tired", -0.4),
    ("ugly", -0.7),
    ("unfair", -0.5),
    ("upset", -0.6),
    ("useless", -0.5),
    ("worse", -0.4),
    ("worst", -1.0),
    ("wrong", -0.5),
];

/// Multipliers applied to the next scored word.
const INTENSIFIERS: &[(&str, f32)] = &[
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("really", 1.3),
    ("so", 1.3),
    ("super", 1.3),
    ("too", 1.2),
    ("totally", 1.3),
    ("very", 1.3),
];

/// Negation markers, including the stems left behind once apostrophes are
/// stripped (`don't` -> `don t`).
const NEGATIONS: &[&str] = &[
    "aren", "cannot", "cant", "didn", "didnt", "doesn", "doesnt", "don", "dont", "hasn",
    "hasnt", "haven", "havent", "isn", "isnt", "never", "no", "not", "wasn", "wasnt", "weren",
    "werent",
];

/// A negated word contributes this fraction of its weight, with flipped sign.
const NEGATION_FACTOR: f32 = -0.5;

/// Number of following words a negation can reach.
const NEGATION_SCOPE: u8 = 3;

/// Score a text string using the word lexicon.
///
/// Each lexicon hit is scaled by any intensifiers directly before it and
/// flipped by a negation up to three words before it, then clamped to
/// `[-1.0, 1.0]`. The result is the mean over all hits, or `0.0` when no word
/// matches.
#[must_use]
pub fn lexicon_polarity(text: &str) -> f32 {
    let mut total = 0.0_f32;
    let mut hits = 0_u32;
    let mut intensity = 1.0_f32;
    let mut negation_left = 0_u8;

    for word in text.split_whitespace() {
        let w = word
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();
        if w.is_empty() {
            continue;
        }

        if NEGATIONS.contains(&w.as_str()) {
            negation_left = NEGATION_SCOPE;
            continue;
        }
        if let Some(&(_, factor)) = INTENSIFIERS.iter().find(|(i, _)| *i == w) {
            intensity *= factor;
            continue;
        }

        let Some(&(_, weight)) = LEXICON.iter().find(|(lex, _)| *lex == w) else {
            intensity = 1.0;
            negation_left = negation_left.saturating_sub(1);
            continue;
        };

        let mut value = weight * intensity;
        if negation_left > 0 {
            value *= NEGATION_FACTOR;
        }
        total += value.clamp(-1.0, 1.0);
        hits += 1;
        intensity = 1.0;
        negation_left = 0;
    }

    if hits == 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let mean = total / hits as f32;
    mean.clamp(-1.0, 1.0)
}

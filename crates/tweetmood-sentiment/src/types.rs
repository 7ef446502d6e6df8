use serde::{Deserialize, Serialize};

/// Three-way sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Thresholds a polarity score: `> 0` positive, `== 0` neutral, anything
    /// else negative.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn from_polarity(polarity: f32) -> Self {
        if polarity > 0.0 {
            Sentiment::Positive
        } else if polarity == 0.0 {
            Sentiment::Neutral
        } else {
            Sentiment::Negative
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "positive"),
            Sentiment::Neutral => write!(f, "neutral"),
            Sentiment::Negative => write!(f, "negative"),
        }
    }
}

/// A fetched post reduced to what gets written out.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedPost {
    /// Display text: the original post's text for retweets, newlines flattened.
    pub text: String,
    pub sentiment: Sentiment,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_polarity_thresholds() {
        assert_eq!(Sentiment::from_polarity(0.01), Sentiment::Positive);
        assert_eq!(Sentiment::from_polarity(1.0), Sentiment::Positive);
        assert_eq!(Sentiment::from_polarity(0.0), Sentiment::Neutral);
        assert_eq!(Sentiment::from_polarity(-0.0), Sentiment::Neutral);
        assert_eq!(Sentiment::from_polarity(-0.01), Sentiment::Negative);
        assert_eq!(Sentiment::from_polarity(-1.0), Sentiment::Negative);
    }

    #[test]
    fn display_is_lowercase() {
        assert_eq!(Sentiment::Positive.to_string(), "positive");
        assert_eq!(Sentiment::Neutral.to_string(), "neutral");
        assert_eq!(Sentiment::Negative.to_string(), "negative");
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(
            serde_json::to_string(&Sentiment::Negative).unwrap(),
            "\"negative\""
        );
        let parsed: Sentiment = serde_json::from_str("\"neutral\"").unwrap();
        assert_eq!(parsed, Sentiment::Neutral);
    }
}

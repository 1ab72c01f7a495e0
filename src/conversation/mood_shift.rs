use serde::{Deserialize, Serialize};

use crate::sentiment::{Sentiment, SentimentRecord};

/// Direction of a sentiment change between two consecutive turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftDirection {
    /// Towards positive.
    Improving,
    /// Towards negative.
    Declining,
}

impl std::fmt::Display for ShiftDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShiftDirection::Improving => write!(f, "improving"),
            ShiftDirection::Declining => write!(f, "declining"),
        }
    }
}

/// A polarity change between the previous and the current judgment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodShift {
    /// Sentiment of the previous turn.
    pub from: Sentiment,
    /// Sentiment of the current turn.
    pub to: Sentiment,
    /// Whether the mood went up or down.
    pub direction: ShiftDirection,
}

impl MoodShift {
    /// Compare `current` against the immediately preceding judgment.
    ///
    /// Returns `None` for the first turn and whenever the polarity is
    /// unchanged.
    pub fn detect(previous: Option<&SentimentRecord>, current: &SentimentRecord) -> Option<Self> {
        let from = previous?.sentiment;
        let to = current.sentiment;

        let direction = match to.ordinal().cmp(&from.ordinal()) {
            std::cmp::Ordering::Greater => ShiftDirection::Improving,
            std::cmp::Ordering::Less => ShiftDirection::Declining,
            std::cmp::Ordering::Equal => return None,
        };

        Some(Self {
            from,
            to,
            direction,
        })
    }
}

impl std::fmt::Display for MoodShift {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Mood {}: {} → {}", self.direction, self.from, self.to)
    }
}

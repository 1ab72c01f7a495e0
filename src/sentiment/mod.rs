//! Sentiment judgments, records and their aggregation.
//!
//! A [`SentimentJudgment`] is what a classifier hands back for one message.
//! Once validated it becomes an immutable [`SentimentRecord`] and is appended
//! to a [`SentimentStore`], which answers the statistical queries
//! (dominant sentiment/emotion, distributions, recent mood).

pub(crate) mod store;

pub use store::{SentimentStore, SentimentSummary};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

/// Polarity of a message.
///
/// The derived `Ord` only follows declaration order (it keys the
/// distribution maps); mood comparisons go through [`Sentiment::ordinal`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    /// Favourable tone.
    Positive,
    /// Unfavourable tone.
    Negative,
    /// Neither.
    #[default]
    Neutral,
}

impl Sentiment {
    /// Every sentiment, in distribution order.
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral];

    /// Get the sentiment name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }

    /// Ordinal used for mood comparisons: negative < neutral < positive.
    pub fn ordinal(&self) -> u8 {
        match self {
            Sentiment::Negative => 0,
            Sentiment::Neutral => 1,
            Sentiment::Positive => 2,
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Sentiment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "positive" => Ok(Sentiment::Positive),
            "negative" => Ok(Sentiment::Negative),
            "neutral" => Ok(Sentiment::Neutral),
            _ => Err(format!("Unknown sentiment: {}", s)),
        }
    }
}

/// The closed set of emotions a classifier may report.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    /// Happy.
    Happy,
    /// Sad.
    Sad,
    /// Angry.
    Angry,
    /// Confused.
    Confused,
    /// Excited.
    Excited,
    /// Anxious.
    Anxious,
    /// Surprised.
    Surprised,
    /// No marked emotion.
    #[default]
    Neutral,
    /// Frustrated.
    Frustrated,
    /// Hopeful.
    Hopeful,
}

impl Emotion {
    /// Every emotion in declaration order.
    pub const ALL: [Emotion; 10] = [
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Angry,
        Emotion::Confused,
        Emotion::Excited,
        Emotion::Anxious,
        Emotion::Surprised,
        Emotion::Neutral,
        Emotion::Frustrated,
        Emotion::Hopeful,
    ];

    /// Get the emotion name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Happy => "happy",
            Emotion::Sad => "sad",
            Emotion::Angry => "angry",
            Emotion::Confused => "confused",
            Emotion::Excited => "excited",
            Emotion::Anxious => "anxious",
            Emotion::Surprised => "surprised",
            Emotion::Neutral => "neutral",
            Emotion::Frustrated => "frustrated",
            Emotion::Hopeful => "hopeful",
        }
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Emotion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Emotion::ALL
            .into_iter()
            .find(|e| e.as_str() == needle)
            .ok_or_else(|| format!("Unknown emotion: {}", s))
    }
}

/// How strongly an emotion was expressed. Ordered `Low < Medium < High`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum EmotionIntensity {
    /// Barely noticeable.
    Low,
    /// Clearly present.
    #[default]
    Medium,
    /// Dominates the message.
    High,
}

impl EmotionIntensity {
    /// Get the intensity name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionIntensity::Low => "low",
            EmotionIntensity::Medium => "medium",
            EmotionIntensity::High => "high",
        }
    }

    /// Numeric level on a 1-3 scale.
    pub fn level(&self) -> u8 {
        match self {
            EmotionIntensity::Low => 1,
            EmotionIntensity::Medium => 2,
            EmotionIntensity::High => 3,
        }
    }
}

impl std::fmt::Display for EmotionIntensity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for EmotionIntensity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(EmotionIntensity::Low),
            "medium" => Ok(EmotionIntensity::Medium),
            "high" => Ok(EmotionIntensity::High),
            _ => Err(format!("Unknown emotion intensity: {}", s)),
        }
    }
}

/// Structured classification of one message, as returned by a classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentJudgment {
    /// Overall polarity.
    pub sentiment: Sentiment,
    /// Classifier confidence (0.0-1.0).
    pub confidence: f64,
    /// Dominant emotion.
    pub emotion: Emotion,
    /// How strongly the emotion shows.
    pub emotion_intensity: EmotionIntensity,
    /// Classifier's explanation.
    pub reasoning: String,
}

impl Default for SentimentJudgment {
    fn default() -> Self {
        Self {
            sentiment: Sentiment::Neutral,
            confidence: 0.5,
            emotion: Emotion::Neutral,
            emotion_intensity: EmotionIntensity::Medium,
            reasoning: "Analysis completed.".to_string(),
        }
    }
}

impl SentimentJudgment {
    /// Create a judgment with default confidence and reasoning.
    pub fn new(sentiment: Sentiment, emotion: Emotion, emotion_intensity: EmotionIntensity) -> Self {
        Self {
            sentiment,
            emotion,
            emotion_intensity,
            ..Default::default()
        }
    }

    /// Set the confidence score
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }

    /// Set the reasoning text
    pub fn with_reasoning(mut self, reasoning: impl Into<String>) -> Self {
        self.reasoning = reasoning.into();
        self
    }
}

/// An immutable, validated judgment bound to the message it describes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentRecord {
    /// Unique record identifier.
    pub id: String,
    /// The classified message text.
    pub message: String,
    /// Overall polarity.
    pub sentiment: Sentiment,
    /// Confidence score (0.0-1.0).
    pub confidence: f64,
    /// Dominant emotion.
    pub emotion: Emotion,
    /// Emotion intensity.
    pub emotion_intensity: EmotionIntensity,
    /// Classifier's explanation.
    pub reasoning: String,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

impl SentimentRecord {
    /// Validate a judgment and bind it to `message`.
    ///
    /// Rejects a non-finite confidence or one outside `0.0..=1.0`; nothing
    /// else can be out of domain once the judgment is typed.
    pub fn from_judgment(
        message: impl Into<String>,
        judgment: SentimentJudgment,
    ) -> EngineResult<Self> {
        if !judgment.confidence.is_finite() || !(0.0..=1.0).contains(&judgment.confidence) {
            return Err(EngineError::InvalidJudgment {
                field: "confidence".to_string(),
                reason: format!("must be within 0.0-1.0, got {}", judgment.confidence),
            });
        }

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            message: message.into(),
            sentiment: judgment.sentiment,
            confidence: judgment.confidence,
            emotion: judgment.emotion,
            emotion_intensity: judgment.emotion_intensity,
            reasoning: judgment.reasoning,
            created_at: Utc::now(),
        })
    }
}

impl std::fmt::Display for SentimentRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Sentiment: {} ({:.0}% confident)",
            self.sentiment.as_str().to_uppercase(),
            self.confidence * 100.0
        )?;
        writeln!(
            f,
            "Emotion: {} ({} intensity)",
            self.emotion, self.emotion_intensity
        )?;
        write!(f, "Reasoning: {}", self.reasoning)
    }
}

use serde::{Deserialize, Serialize};

use crate::sentiment::{Emotion, EmotionIntensity, Sentiment, SentimentRecord};

/// Coarse engagement indicator derived from emotion intensity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngagementLevel {
    /// Low intensity.
    Low,
    /// Medium intensity.
    #[default]
    Normal,
    /// High intensity.
    High,
}

impl From<EmotionIntensity> for EngagementLevel {
    fn from(intensity: EmotionIntensity) -> Self {
        match intensity {
            EmotionIntensity::Low => EngagementLevel::Low,
            EmotionIntensity::Medium => EngagementLevel::Normal,
            EmotionIntensity::High => EngagementLevel::High,
        }
    }
}

impl std::fmt::Display for EngagementLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngagementLevel::Low => write!(f, "low"),
            EngagementLevel::Normal => write!(f, "normal"),
            EngagementLevel::High => write!(f, "high"),
        }
    }
}

/// Long-run direction of the conversation's sentiment.
///
/// Never computed here; an external trend analysis sets it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentTrend {
    /// No marked change.
    #[default]
    Stable,
    /// Getting more positive.
    Improving,
    /// Getting more negative.
    Declining,
    /// Swinging back and forth.
    Volatile,
}

impl std::fmt::Display for SentimentTrend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentTrend::Stable => write!(f, "stable"),
            SentimentTrend::Improving => write!(f, "improving"),
            SentimentTrend::Declining => write!(f, "declining"),
            SentimentTrend::Volatile => write!(f, "volatile"),
        }
    }
}

impl std::str::FromStr for SentimentTrend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "stable" => Ok(SentimentTrend::Stable),
            "improving" => Ok(SentimentTrend::Improving),
            "declining" => Ok(SentimentTrend::Declining),
            "volatile" => Ok(SentimentTrend::Volatile),
            _ => Err(format!("Unknown sentiment trend: {}", s)),
        }
    }
}

/// Running emotional state of one conversation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationState {
    /// Sentiment of the latest judgment.
    pub mood: Sentiment,
    /// Engagement derived from the latest intensity.
    pub engagement_level: EngagementLevel,
    /// Emotion of the latest judgment.
    pub last_emotion: Emotion,
    /// Trend set by an external analysis; never computed here.
    pub sentiment_trend: SentimentTrend,
}

impl ConversationState {
    /// Initial state: neutral, normal engagement, stable trend
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one judgment into the state.
    ///
    /// Engagement follows the intensity alone; the trend is left untouched.
    pub fn update(&mut self, record: &SentimentRecord) {
        self.mood = record.sentiment;
        self.last_emotion = record.emotion;
        self.engagement_level = EngagementLevel::from(record.emotion_intensity);
    }

    /// Overwrite the trend
    pub fn set_sentiment_trend(&mut self, trend: SentimentTrend) {
        self.sentiment_trend = trend;
    }

    /// Restore the initial values.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

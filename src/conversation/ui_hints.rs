use serde::Serialize;

use crate::sentiment::{Emotion, EmotionIntensity};

/// Color used for labels outside the known emotion set.
pub const DEFAULT_COLOR: &str = "#607D8B";
/// Icon used for labels outside the known emotion set.
pub const DEFAULT_ICON: &str = "❓";

/// Presentation metadata for a judgment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UiHints {
    /// Hex colour for the emotion.
    pub suggested_color: &'static str,
    /// Emoji for the emotion.
    pub emotion_icon: &'static str,
    /// Intensity passed through unchanged.
    pub intensity_level: EmotionIntensity,
}

impl UiHints {
    /// Hints for a known emotion
    pub fn new(emotion: Emotion, intensity: EmotionIntensity) -> Self {
        Self {
            suggested_color: color_for(emotion),
            emotion_icon: icon_for(emotion),
            intensity_level: intensity,
        }
    }

    /// Map a free-form emotion label, falling back to the defaults when it is
    /// not one of the known emotions.
    pub fn for_label(emotion: &str, intensity: EmotionIntensity) -> Self {
        match emotion.parse::<Emotion>() {
            Ok(emotion) => Self::new(emotion, intensity),
            Err(_) => Self {
                suggested_color: DEFAULT_COLOR,
                emotion_icon: DEFAULT_ICON,
                intensity_level: intensity,
            },
        }
    }
}

fn color_for(emotion: Emotion) -> &'static str {
    match emotion {
        Emotion::Happy => "#4CAF50",
        Emotion::Sad => "#2196F3",
        Emotion::Angry => "#F44336",
        Emotion::Confused => "#9C27B0",
        Emotion::Excited => "#FF9800",
        Emotion::Anxious => "#FFC107",
        Emotion::Surprised => "#00BCD4",
        Emotion::Neutral => "#9E9E9E",
        Emotion::Frustrated => "#E91E63",
        Emotion::Hopeful => "#8BC34A",
    }
}

fn icon_for(emotion: Emotion) -> &'static str {
    match emotion {
        Emotion::Happy => "😊",
        Emotion::Sad => "😢",
        Emotion::Angry => "😠",
        Emotion::Confused => "😕",
        Emotion::Excited => "🎉",
        Emotion::Anxious => "😰",
        Emotion::Surprised => "😮",
        Emotion::Neutral => "😐",
        Emotion::Frustrated => "😤",
        Emotion::Hopeful => "🌟",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_colors() {
        let cases = [
            (Emotion::Happy, "#4CAF50"),
            (Emotion::Sad, "#2196F3"),
            (Emotion::Angry, "#F44336"),
            (Emotion::Excited, "#FF9800"),
        ];
        for (emotion, expected) in cases {
            assert_eq!(
                UiHints::new(emotion, EmotionIntensity::High).suggested_color,
                expected
            );
        }
    }

    #[test]
    fn test_for_label_happy_high() {
        let hints = UiHints::for_label("happy", EmotionIntensity::High);

        assert_eq!(hints.suggested_color, "#4CAF50");
        assert_eq!(hints.emotion_icon, "😊");
        assert_eq!(hints.intensity_level, EmotionIntensity::High);
    }

    #[test]
    fn test_unknown_label_uses_defaults() {
        let hints = UiHints::for_label("melancholic", EmotionIntensity::Low);

        assert_eq!(hints.suggested_color, DEFAULT_COLOR);
        assert_eq!(hints.emotion_icon, DEFAULT_ICON);
        assert_eq!(hints.intensity_level, EmotionIntensity::Low);
    }

    #[test]
    fn test_every_emotion_has_distinct_color() {
        let colors: std::collections::HashSet<&str> = Emotion::ALL
            .into_iter()
            .map(|e| UiHints::new(e, EmotionIntensity::Medium).suggested_color)
            .collect();

        assert_eq!(colors.len(), Emotion::ALL.len());
        assert!(!colors.contains(DEFAULT_COLOR));
    }

    #[test]
    fn test_intensity_passes_through() {
        let low = UiHints::new(Emotion::Sad, EmotionIntensity::Low).intensity_level;
        let medium = UiHints::new(Emotion::Sad, EmotionIntensity::Medium).intensity_level;
        let high = UiHints::new(Emotion::Sad, EmotionIntensity::High).intensity_level;

        assert!(low < medium && medium < high);
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_value(UiHints::new(Emotion::Excited, EmotionIntensity::High))
            .unwrap();

        assert_eq!(json["suggested_color"], "#FF9800");
        assert_eq!(json["emotion_icon"], "🎉");
        assert_eq!(json["intensity_level"], "high");
    }
}

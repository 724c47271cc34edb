//! Emotion labels attached to agent replies.
//!
//! The conversational agent tags each reply with one of six labels; the
//! avatar client forwards the label to behavior selection verbatim. The
//! agent is the only producer, so the vocabulary is closed — anything
//! outside it is treated as `neutral` rather than rejected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A label does not name a known emotion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown emotion label '{0}'")]
pub struct UnknownEmotion(pub String);

/// Emotion label emitted by the agent alongside a reply.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Happy,
    Sad,
    Surprised,
    Confused,
    /// Mild interest / realization ("oh!").
    Oh,
    #[default]
    Neutral,
}

impl Emotion {
    pub const ALL: [Emotion; 6] = [
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Surprised,
        Emotion::Confused,
        Emotion::Oh,
        Emotion::Neutral,
    ];

    /// Wire name, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Happy => "happy",
            Emotion::Sad => "sad",
            Emotion::Surprised => "surprised",
            Emotion::Confused => "confused",
            Emotion::Oh => "oh",
            Emotion::Neutral => "neutral",
        }
    }

    /// Total variant of [`FromStr`]: unknown or empty labels collapse to
    /// [`Emotion::Neutral`], matching how the agent-facing surfaces treat
    /// labels they don't recognize.
    pub fn from_label(label: &str) -> Emotion {
        label.parse().unwrap_or_default()
    }
}

impl FromStr for Emotion {
    type Err = UnknownEmotion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "happy" => Ok(Emotion::Happy),
            "sad" => Ok(Emotion::Sad),
            "surprised" => Ok(Emotion::Surprised),
            "confused" => Ok(Emotion::Confused),
            "oh" => Ok(Emotion::Oh),
            "neutral" => Ok(Emotion::Neutral),
            _ => Err(UnknownEmotion(s.to_string())),
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_labels() {
        for emotion in Emotion::ALL {
            assert_eq!(emotion.as_str().parse::<Emotion>().unwrap(), emotion);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("HAPPY".parse::<Emotion>().unwrap(), Emotion::Happy);
        assert_eq!("  Surprised ".parse::<Emotion>().unwrap(), Emotion::Surprised);
    }

    #[test]
    fn test_parse_unknown_label_errors() {
        let err = "enthusiastic".parse::<Emotion>().unwrap_err();
        assert_eq!(err, UnknownEmotion("enthusiastic".to_string()));
    }

    #[test]
    fn test_from_label_falls_back_to_neutral() {
        assert_eq!(Emotion::from_label("happy"), Emotion::Happy);
        assert_eq!(Emotion::from_label("unknown_emotion_xyz"), Emotion::Neutral);
        assert_eq!(Emotion::from_label(""), Emotion::Neutral);
    }

    #[test]
    fn test_serde_wire_names() {
        assert_eq!(serde_json::to_string(&Emotion::Oh).unwrap(), "\"oh\"");
        let back: Emotion = serde_json::from_str("\"confused\"").unwrap();
        assert_eq!(back, Emotion::Confused);
    }
}

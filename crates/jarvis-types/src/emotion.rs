//! Emotion tags attached to every agent reply.
//!
//! The tag is presentational only: clients use it to pick a color or a
//! voice style. It never changes how the next message is answered.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Coarse emotional tone of an agent reply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Cheerful,
    #[default]
    Calm,
    Serious,
}

impl Emotion {
    /// Lower-case wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Cheerful => "cheerful",
            Emotion::Calm => "calm",
            Emotion::Serious => "serious",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Emotion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cheerful" => Ok(Emotion::Cheerful),
            "calm" => Ok(Emotion::Calm),
            "serious" => Ok(Emotion::Serious),
            other => Err(format!("invalid emotion: '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emotion_display_matches_wire_name() {
        for emotion in [Emotion::Cheerful, Emotion::Calm, Emotion::Serious] {
            let json = serde_json::to_string(&emotion).unwrap();
            assert_eq!(json, format!("\"{emotion}\""));
        }
    }

    #[test]
    fn test_emotion_from_str_is_case_insensitive() {
        assert_eq!("Serious".parse::<Emotion>().unwrap(), Emotion::Serious);
        assert_eq!("CALM".parse::<Emotion>().unwrap(), Emotion::Calm);
        assert!("angry".parse::<Emotion>().is_err());
    }

    #[test]
    fn test_emotion_default_is_calm() {
        assert_eq!(Emotion::default(), Emotion::Calm);
    }
}

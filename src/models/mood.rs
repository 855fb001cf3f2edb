//! Mood model matching the frontend `Mood` enum.
//!
//! The ordinal is the wire and storage representation. Variant order is the
//! ordinal order and must never change: statistics sort and break ties on it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How a team member currently feels.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "i64", into = "i64")]
pub enum Mood {
    Happy,
    Content,
    #[default]
    Neutral,
    Sad,
    Stressed,
}

impl Mood {
    /// All moods in ordinal order.
    pub const ALL: [Mood; 5] = [
        Mood::Happy,
        Mood::Content,
        Mood::Neutral,
        Mood::Sad,
        Mood::Stressed,
    ];

    pub fn ordinal(self) -> i64 {
        match self {
            Mood::Happy => 0,
            Mood::Content => 1,
            Mood::Neutral => 2,
            Mood::Sad => 3,
            Mood::Stressed => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Content => "Content",
            Mood::Neutral => "Neutral",
            Mood::Sad => "Sad",
            Mood::Stressed => "Stressed",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error for an integer that is not a defined mood ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidMood(pub i64);

impl fmt::Display for InvalidMood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid mood ordinal {}", self.0)
    }
}

impl std::error::Error for InvalidMood {}

impl TryFrom<i64> for Mood {
    type Error = InvalidMood;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Mood::Happy),
            1 => Ok(Mood::Content),
            2 => Ok(Mood::Neutral),
            3 => Ok(Mood::Sad),
            4 => Ok(Mood::Stressed),
            other => Err(InvalidMood(other)),
        }
    }
}

impl From<Mood> for i64 {
    fn from(mood: Mood) -> i64 {
        mood.ordinal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals_are_stable() {
        let ordinals: Vec<i64> = Mood::ALL.iter().map(|m| m.ordinal()).collect();
        assert_eq!(ordinals, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_ord_follows_ordinal() {
        assert!(Mood::Happy < Mood::Content);
        assert!(Mood::Sad < Mood::Stressed);
        let mut moods = vec![Mood::Stressed, Mood::Happy, Mood::Sad, Mood::Neutral];
        moods.sort();
        assert_eq!(
            moods,
            vec![Mood::Happy, Mood::Neutral, Mood::Sad, Mood::Stressed]
        );
    }

    #[test]
    fn test_try_from_rejects_undefined_ordinals() {
        assert_eq!(Mood::try_from(3), Ok(Mood::Sad));
        assert_eq!(Mood::try_from(5), Err(InvalidMood(5)));
        assert_eq!(Mood::try_from(-1), Err(InvalidMood(-1)));
    }

    #[test]
    fn test_serializes_as_ordinal() {
        assert_eq!(serde_json::to_string(&Mood::Stressed).unwrap(), "4");
        let mood: Mood = serde_json::from_str("1").unwrap();
        assert_eq!(mood, Mood::Content);
        assert!(serde_json::from_str::<Mood>("9").is_err());
        assert!(serde_json::from_str::<Mood>("\"Happy\"").is_err());
    }

    #[test]
    fn test_default_is_neutral() {
        assert_eq!(Mood::default(), Mood::Neutral);
    }
}

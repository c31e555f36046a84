//! Serialization for `Suit` and `Direction`.
//!
//! The wire strings match the persisted blob format: suits as their symbol
//! ("♠", "♥", "♦", "♣") and direction as lowercase words.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::state::{Direction, Suit};

// Suit serde
impl Serialize for Suit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.symbol())
    }
}

impl<'de> Deserialize<'de> for Suit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "♠" => Ok(Suit::Spades),
            "♥" => Ok(Suit::Hearts),
            "♦" => Ok(Suit::Diamonds),
            "♣" => Ok(Suit::Clubs),
            _ => Err(serde::de::Error::custom(format!("Invalid suit: {s}"))),
        }
    }
}

// Direction serde
impl Serialize for Direction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = match self {
            Direction::Ascending => "ascending",
            Direction::Descending => "descending",
        };
        serializer.serialize_str(s)
    }
}

impl<'de> Deserialize<'de> for Direction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "ascending" => Ok(Direction::Ascending),
            "descending" => Ok(Direction::Descending),
            _ => Err(serde::de::Error::custom(format!("Invalid direction: {s}"))),
        }
    }
}

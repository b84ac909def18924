//! Game variants: digit count crossed with the zero-inclusion rule.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One configured game mode with its own independent leaderboard.
///
/// Keys the store has never heard of are carried as [`Variant::Other`] rather
/// than rejected, so a newer front end can record into modes this build does
/// not know about.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Variant {
    ThreeExcludingZero,
    ThreeIncludingZero,
    FourExcludingZero,
    FourIncludingZero,
    Other(String),
}

impl Variant {
    /// The four modes shipped with the game, in display order.
    pub const KNOWN: [Variant; 4] = [
        Variant::ThreeExcludingZero,
        Variant::ThreeIncludingZero,
        Variant::FourExcludingZero,
        Variant::FourIncludingZero,
    ];

    /// Short storage key, e.g. `m3e`.
    pub fn key(&self) -> &str {
        match self {
            Variant::ThreeExcludingZero => "m3e",
            Variant::ThreeIncludingZero => "m3i",
            Variant::FourExcludingZero => "m4e",
            Variant::FourIncludingZero => "m4i",
            Variant::Other(key) => key,
        }
    }

    /// Human readable label. Unknown variants fall back to their key.
    pub fn label(&self) -> &str {
        match self {
            Variant::ThreeExcludingZero => "3 digits, no zero",
            Variant::ThreeIncludingZero => "3 digits, with zero",
            Variant::FourExcludingZero => "4 digits, no zero",
            Variant::FourIncludingZero => "4 digits, with zero",
            Variant::Other(key) => key,
        }
    }

    /// Returns the length of the secret number, `None` for unknown variants.
    pub fn digits(&self) -> Option<usize> {
        match self {
            Variant::ThreeExcludingZero | Variant::ThreeIncludingZero => Some(3),
            Variant::FourExcludingZero | Variant::FourIncludingZero => Some(4),
            Variant::Other(_) => None,
        }
    }

    /// Returns whether the secret number may contain 0, `None` for unknown variants.
    pub fn allows_zero(&self) -> Option<bool> {
        match self {
            Variant::ThreeIncludingZero | Variant::FourIncludingZero => Some(true),
            Variant::ThreeExcludingZero | Variant::FourExcludingZero => Some(false),
            Variant::Other(_) => None,
        }
    }

    /// Returns true for the four shipped modes.
    pub fn is_known(&self) -> bool {
        !matches!(self, Variant::Other(_))
    }
}

impl From<&str> for Variant {
    fn from(key: &str) -> Self {
        match key {
            "m3e" => Variant::ThreeExcludingZero,
            "m3i" => Variant::ThreeIncludingZero,
            "m4e" => Variant::FourExcludingZero,
            "m4i" => Variant::FourIncludingZero,
            other => Variant::Other(other.to_string()),
        }
    }
}

impl From<String> for Variant {
    fn from(key: String) -> Self {
        match Variant::from(key.as_str()) {
            Variant::Other(_) => Variant::Other(key),
            known => known,
        }
    }
}

impl From<Variant> for String {
    fn from(variant: Variant) -> Self {
        match variant {
            Variant::Other(key) => key,
            known => known.key().to_string(),
        }
    }
}

impl FromStr for Variant {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Variant::from(s))
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_keys_parse() {
        for variant in Variant::KNOWN {
            assert_eq!(Variant::from(variant.key()), variant);
            assert!(variant.is_known());
        }
    }

    #[test]
    fn test_unknown_key_is_kept() {
        let variant: Variant = "m5e".parse().unwrap();
        assert_eq!(variant, Variant::Other("m5e".to_string()));
        assert_eq!(variant.key(), "m5e");
        assert_eq!(variant.label(), "m5e");
        assert_eq!(variant.digits(), None);
    }

    #[test]
    fn test_known_variants_sort_before_unknown() {
        let mut variants = vec![
            Variant::Other("aaa".to_string()),
            Variant::FourIncludingZero,
            Variant::ThreeExcludingZero,
        ];
        variants.sort();
        assert_eq!(variants[0], Variant::ThreeExcludingZero);
        assert_eq!(variants[1], Variant::FourIncludingZero);
        assert_eq!(variants[2], Variant::Other("aaa".to_string()));
    }

    #[test]
    fn test_digits_and_zero_rule() {
        assert_eq!(Variant::ThreeIncludingZero.digits(), Some(3));
        assert_eq!(Variant::ThreeIncludingZero.allows_zero(), Some(true));
        assert_eq!(Variant::FourExcludingZero.digits(), Some(4));
        assert_eq!(Variant::FourExcludingZero.allows_zero(), Some(false));
    }

    #[test]
    fn test_serializes_as_key() {
        let json = serde_json::to_string(&Variant::FourExcludingZero).unwrap();
        assert_eq!(json, "\"m4e\"");
        let back: Variant = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Variant::FourExcludingZero);
    }
}

use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::*;

/// Integer that fully determines a hole's layout.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seed(i64);

impl Seed {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn value(self) -> i64 {
        self.0
    }

    /// Derives a stable seed from a course name and a hole number.
    ///
    /// Hashes the UTF-16 units of `"{name}-{modifier}"` with the usual `h * 31 + unit` string
    /// hash in wrapping 32-bit arithmetic, then takes the absolute value.
    pub fn from_name(name: &str, modifier: u32) -> Self {
        let hash = format!("{name}-{modifier}")
            .encode_utf16()
            .fold(0i32, |hash, unit| {
                hash.wrapping_mul(31).wrapping_add(i32::from(unit))
            });
        Self(i64::from(hash).abs())
    }
}

impl From<i64> for Seed {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses seeds typed in by a player.
///
/// Leading whitespace is skipped and the longest `[+-]?digits` prefix is read, anything after it
/// is ignored, so `"12abc"` and `"12.9"` both give 12. Text without leading digits is rejected.
impl FromStr for Seed {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim_start();
        let sign_len = usize::from(text.starts_with(['+', '-']));
        let digits_len = text[sign_len..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();

        text[..sign_len + digits_len]
            .parse()
            .map(Self)
            .map_err(|_| GameError::InvalidSeed(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_matches_string_hash() {
        // "a-1" = ((97 * 31) + 45) * 31 + 49
        assert_eq!(Seed::from_name("a", 1), Seed::new(94_661));
        assert_eq!(Seed::from_name("Pine Valley", 1), Seed::new(1_139_389_939));
        assert_ne!(Seed::from_name("Pine Valley", 1), Seed::from_name("Pine Valley", 2));
    }

    #[test]
    fn from_name_is_never_negative() {
        for hole in 1..=10 {
            for name in DEFAULT_COURSE_NAMES {
                assert!(Seed::from_name(name, hole).value() >= 0);
            }
        }
    }

    #[test]
    fn parse_accepts_padded_and_signed_numbers() {
        assert_eq!(" 42 ".parse::<Seed>().unwrap(), Seed::new(42));
        assert_eq!("-17".parse::<Seed>().unwrap(), Seed::new(-17));
    }

    #[test]
    fn parse_rejects_text() {
        let err = "hello".parse::<Seed>().unwrap_err();
        assert!(matches!(err, GameError::InvalidSeed(ref text) if text == "hello"));
        assert_eq!(err.to_string(), "Please enter a valid number");
        assert!("".parse::<Seed>().is_err());
        assert!("-".parse::<Seed>().is_err());
        assert!("abc12".parse::<Seed>().is_err());
    }

    #[test]
    fn parse_reads_leading_integer_prefix() {
        assert_eq!("12abc".parse::<Seed>().unwrap(), Seed::new(12));
        assert_eq!("7.9".parse::<Seed>().unwrap(), Seed::new(7));
        assert_eq!("  +30 holes".parse::<Seed>().unwrap(), Seed::new(30));
        assert_eq!("-4-5".parse::<Seed>().unwrap(), Seed::new(-4));
    }

    #[test]
    fn display_round_trips() {
        let seed = Seed::from_name("Muirfield", 4);
        assert_eq!(seed.to_string().parse::<Seed>().unwrap(), seed);
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Arithmetic operation family behind a game type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProblemKind {
    Addition,
    ComplementToTen,
    Multiplication,
}

impl ProblemKind {
    /// Operator symbol rendered between the operands.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            ProblemKind::Addition | ProblemKind::ComplementToTen => "+",
            ProblemKind::Multiplication => "x",
        }
    }
}

/// Selectable quiz variants. Each fixes the problem kind and operand ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameType {
    Addition1To5,
    Addition6To10,
    ComplementToTen,
    Multiplication2To5,
    Multiplication6To9,
}

impl GameType {
    /// All game types, in menu order.
    pub const ALL: [GameType; 5] = [
        GameType::Addition1To5,
        GameType::Addition6To10,
        GameType::ComplementToTen,
        GameType::Multiplication2To5,
        GameType::Multiplication6To9,
    ];

    #[must_use]
    pub fn kind(self) -> ProblemKind {
        match self {
            GameType::Addition1To5 | GameType::Addition6To10 => ProblemKind::Addition,
            GameType::ComplementToTen => ProblemKind::ComplementToTen,
            GameType::Multiplication2To5 | GameType::Multiplication6To9 => {
                ProblemKind::Multiplication
            }
        }
    }

    /// Human-facing menu label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            GameType::Addition1To5 => "Additions 1-5",
            GameType::Addition6To10 => "Additions 6-10",
            GameType::ComplementToTen => "Complements to 10",
            GameType::Multiplication2To5 => "Multiplications 2-5",
            GameType::Multiplication6To9 => "Multiplications 6-9",
        }
    }

    /// Range the left operand is drawn from.
    #[must_use]
    pub fn left_range(self) -> RangeInclusive<u32> {
        match self {
            GameType::Addition1To5 | GameType::ComplementToTen => 1..=5,
            GameType::Addition6To10
            | GameType::Multiplication2To5
            | GameType::Multiplication6To9 => 1..=9,
        }
    }

    /// Range the right operand is drawn from. For complement games the right
    /// operand is derived (`10 - left`), so this is the derived span.
    #[must_use]
    pub fn right_range(self) -> RangeInclusive<u32> {
        match self {
            GameType::Addition1To5 => 1..=5,
            GameType::Addition6To10 => 6..=10,
            GameType::ComplementToTen => 5..=9,
            GameType::Multiplication2To5 => 2..=5,
            GameType::Multiplication6To9 => 6..=9,
        }
    }
}

// Slugs are stable: they appear in routes and CLI arguments.

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slug = match self {
            GameType::Addition1To5 => "addition-1-5",
            GameType::Addition6To10 => "addition-6-10",
            GameType::ComplementToTen => "complement-10",
            GameType::Multiplication2To5 => "multiplication-2-5",
            GameType::Multiplication6To9 => "multiplication-6-9",
        };
        write!(f, "{slug}")
    }
}

/// Error type for parsing a game type slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseGameTypeError {
    raw: String,
}

impl fmt::Display for ParseGameTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown game type: {}", self.raw)
    }
}

impl std::error::Error for ParseGameTypeError {}

impl FromStr for GameType {
    type Err = ParseGameTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "addition-1-5" => Ok(GameType::Addition1To5),
            "addition-6-10" => Ok(GameType::Addition6To10),
            "complement-10" => Ok(GameType::ComplementToTen),
            "multiplication-2-5" => Ok(GameType::Multiplication2To5),
            "multiplication-6-9" => Ok(GameType::Multiplication6To9),
            _ => Err(ParseGameTypeError { raw: s.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_roundtrip() {
        for game_type in GameType::ALL {
            let slug = game_type.to_string();
            assert_eq!(slug.parse::<GameType>().unwrap(), game_type);
        }
    }

    #[test]
    fn unknown_slug_is_rejected() {
        let result = "division-1-5".parse::<GameType>();
        assert!(result.is_err());
    }

    #[test]
    fn complement_ranges_pair_to_ten() {
        let game_type = GameType::ComplementToTen;
        let left = game_type.left_range();
        let right = game_type.right_range();
        assert_eq!(left.start() + right.end(), 10);
        assert_eq!(left.end() + right.start(), 10);
    }

    #[test]
    fn kinds_match_variants() {
        assert_eq!(GameType::Addition6To10.kind(), ProblemKind::Addition);
        assert_eq!(GameType::ComplementToTen.kind(), ProblemKind::ComplementToTen);
        assert_eq!(
            GameType::Multiplication6To9.kind(),
            ProblemKind::Multiplication
        );
    }

    #[test]
    fn multiplication_symbol() {
        assert_eq!(ProblemKind::Multiplication.symbol(), "x");
        assert_eq!(ProblemKind::ComplementToTen.symbol(), "+");
    }
}

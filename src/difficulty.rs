use enum_map::Enum;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// How fast the snake moves
#[derive(Clone, Copy, Debug, Default, Deserialize, Enum, Eq, Hash, PartialEq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }

    /// The key that selects this difficulty in the menu
    pub(crate) fn hotkey(self) -> char {
        match self {
            Difficulty::Easy => 'e',
            Difficulty::Normal => 'n',
            Difficulty::Hard => 'h',
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Difficulty, ParseDifficultyError> {
        match s.to_ascii_lowercase().as_str() {
            "easy" | "e" => Ok(Difficulty::Easy),
            "normal" | "n" => Ok(Difficulty::Normal),
            "hard" | "h" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError(s.to_owned())),
        }
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("invalid difficulty {0:?}; expected \"easy\", \"normal\", or \"hard\"")]
pub(crate) struct ParseDifficultyError(String);

/// Time between ticks for each difficulty, in milliseconds.  All periods are
/// nonzero.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(try_from = "RawTickPeriods")]
pub(crate) struct TickPeriods {
    easy: u64,
    normal: u64,
    hard: u64,
}

impl TickPeriods {
    pub(crate) fn get(&self, difficulty: Difficulty) -> Duration {
        let ms = match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Normal => self.normal,
            Difficulty::Hard => self.hard,
        };
        Duration::from_millis(ms)
    }
}

impl Default for TickPeriods {
    fn default() -> TickPeriods {
        let RawTickPeriods { easy, normal, hard } = RawTickPeriods::default();
        TickPeriods { easy, normal, hard }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
struct RawTickPeriods {
    easy: u64,
    normal: u64,
    hard: u64,
}

impl Default for RawTickPeriods {
    fn default() -> RawTickPeriods {
        RawTickPeriods {
            easy: 200,
            normal: 100,
            hard: 50,
        }
    }
}

impl TryFrom<RawTickPeriods> for TickPeriods {
    type Error = ZeroPeriodError;

    fn try_from(value: RawTickPeriods) -> Result<TickPeriods, ZeroPeriodError> {
        let RawTickPeriods { easy, normal, hard } = value;
        for (difficulty, ms) in [
            (Difficulty::Easy, easy),
            (Difficulty::Normal, normal),
            (Difficulty::Hard, hard),
        ] {
            if ms == 0 {
                return Err(ZeroPeriodError(difficulty));
            }
        }
        Ok(TickPeriods { easy, normal, hard })
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("tick period for {0} difficulty must be greater than zero")]
pub(crate) struct ZeroPeriodError(Difficulty);

use crate::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub type CardId = String;

/// Number of levels, and therefore of buckets and bucket sets.
pub const LEVEL_COUNT: usize = 5;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub id: CardId,
    pub question: String,
    pub answer: String,
}

impl Card {
    pub fn new(
        id: impl Into<CardId>,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Self-reported recall difficulty, which doubles as the card's bucket.
///
/// Values are symmetric around zero. Rank (the bucket index) ascends with the
/// value; practice priority also ascends with it, so `Hardest` is practiced
/// first and `Mastered` last.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Mastered = -2,
    Easy = -1,
    Medium = 0,
    Hard = 1,
    Hardest = 2,
}

impl Difficulty {
    /// Ascending rank order.
    pub const ALL: [Difficulty; LEVEL_COUNT] = [
        Difficulty::Mastered,
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Hardest,
    ];

    pub const MIN_VALUE: i8 = Difficulty::Mastered as i8;
    pub const MAX_VALUE: i8 = Difficulty::Hardest as i8;

    pub fn value(self) -> i8 {
        self as i8
    }

    pub fn rank(self) -> usize {
        (self.value() - Self::MIN_VALUE) as usize
    }

    pub fn from_rank(rank: usize) -> Result<Self, CoreError> {
        Self::ALL
            .get(rank)
            .copied()
            .ok_or(CoreError::InvalidRank(rank))
    }

    /// Levels in the order buckets are consulted by `practice`.
    pub fn by_priority() -> impl Iterator<Item = Difficulty> {
        Self::ALL.into_iter().rev()
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Mastered => "mastered",
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Hardest => "hardest",
        }
    }
}

impl TryFrom<i8> for Difficulty {
    type Error = CoreError;

    fn try_from(v: i8) -> Result<Self, Self::Error> {
        if !(Self::MIN_VALUE..=Self::MAX_VALUE).contains(&v) {
            return Err(CoreError::InvalidLevel(v as i64));
        }
        Self::from_rank((v - Self::MIN_VALUE) as usize)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let q = s.trim().to_lowercase();
        if let Some(d) = Self::ALL.into_iter().find(|d| d.name() == q) {
            return Ok(d);
        }
        match q.parse::<i64>() {
            Ok(v) => i8::try_from(v)
                .map_err(|_| CoreError::InvalidLevel(v))
                .and_then(Difficulty::try_from),
            Err(_) => Err(CoreError::UnknownLevel(s.trim().to_string())),
        }
    }
}

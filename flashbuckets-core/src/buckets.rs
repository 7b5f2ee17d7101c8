use crate::{scheduler, Card, CardId, Difficulty, LEVEL_COUNT};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Cards grouped by level, one bucket per rank. Order within a bucket is
/// insertion order.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BucketMap {
    buckets: [Vec<Card>; LEVEL_COUNT],
}

impl BucketMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes buckets as given, indexed by rank. Duplicates are not checked;
    /// `update` removes them as cards are reassigned.
    pub fn from_buckets(buckets: [Vec<Card>; LEVEL_COUNT]) -> Self {
        Self { buckets }
    }

    pub fn from_assignments<I>(assignments: I) -> Self
    where
        I: IntoIterator<Item = (Card, Difficulty)>,
    {
        let mut map = Self::new();
        for (card, level) in assignments {
            scheduler::update(&card, level, &mut map);
        }
        map
    }

    pub fn bucket(&self, level: Difficulty) -> &[Card] {
        &self.buckets[level.rank()]
    }

    pub(crate) fn bucket_mut(&mut self, level: Difficulty) -> &mut Vec<Card> {
        &mut self.buckets[level.rank()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Difficulty, &[Card])> {
        Difficulty::ALL
            .into_iter()
            .map(move |d| (d, self.bucket(d)))
    }

    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    /// Lowest-ranked level holding `card_id`.
    pub fn level_of(&self, card_id: &str) -> Option<Difficulty> {
        self.iter()
            .find(|(_, cards)| cards.iter().any(|c| c.id == card_id))
            .map(|(d, _)| d)
    }
}

/// One id set per level, indexed by rank.
pub type BucketSets = Vec<HashSet<CardId>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BucketRange {
    pub low: usize,
    pub high: usize,
}

impl BucketRange {
    pub fn is_exact(&self) -> bool {
        self.low == self.high
    }
}

impl From<BucketRange> for (usize, usize) {
    fn from(r: BucketRange) -> Self {
        (r.low, r.high)
    }
}

/// Snapshot of bucket membership. `_cards` is not consulted; membership comes
/// from the map alone.
pub fn to_bucket_sets(_cards: &[Card], bucket_map: &BucketMap) -> BucketSets {
    let mut sets: BucketSets = vec![HashSet::new(); LEVEL_COUNT];
    for (level, cards) in bucket_map.iter() {
        let set = &mut sets[level.rank()];
        for card in cards {
            set.insert(card.id.clone());
        }
    }
    sets
}

/// `(i, i)` for the first set holding `card_id`, otherwise the whole span
/// `(0, last)`.
pub fn get_bucket_range(bucket_sets: &[HashSet<CardId>], card_id: &str) -> BucketRange {
    match bucket_sets.iter().position(|s| s.contains(card_id)) {
        Some(i) => BucketRange { low: i, high: i },
        None => BucketRange {
            low: 0,
            high: bucket_sets.len().saturating_sub(1),
        },
    }
}

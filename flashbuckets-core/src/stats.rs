use crate::{BucketMap, Difficulty, LEVEL_COUNT};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BucketCounts {
    pub total: usize,
    pub per_level: [usize; LEVEL_COUNT],
}

impl BucketCounts {
    pub fn count(&self, level: Difficulty) -> usize {
        self.per_level[level.rank()]
    }

    pub fn mastered(&self) -> usize {
        self.count(Difficulty::Mastered)
    }

    /// Mastered share as a floored percentage; an empty map counts as done.
    pub fn progress(&self) -> u8 {
        if self.total == 0 {
            return 100;
        }
        (self.mastered() * 100 / self.total) as u8
    }
}

pub fn summarize(bucket_map: &BucketMap) -> BucketCounts {
    let mut counts = BucketCounts::default();
    for (level, cards) in bucket_map.iter() {
        counts.per_level[level.rank()] = cards.len();
        counts.total += cards.len();
    }
    counts
}

pub fn compute_progress(bucket_map: &BucketMap) -> u8 {
    summarize(bucket_map).progress()
}

//! One learner's bucket map behind a lock, for hosts that share it across
//! threads.

use crate::{scheduler, stats, BucketCounts, BucketMap, Card, Difficulty, HintPolicy};
use parking_lot::Mutex;

#[derive(Default)]
pub struct Session {
    buckets: Mutex<BucketMap>,
    hint_policy: HintPolicy,
}

impl Session {
    pub fn new(buckets: BucketMap, hint_policy: HintPolicy) -> Self {
        Self {
            buckets: Mutex::new(buckets),
            hint_policy,
        }
    }

    pub fn practice(&self) -> Option<Card> {
        let m = self.buckets.lock();
        scheduler::practice(&[], &m).cloned()
    }

    pub fn update(&self, card: &Card, level: Difficulty) {
        let mut m = self.buckets.lock();
        scheduler::update(card, level, &mut m);
    }

    pub fn hint(&self, card: &Card) -> String {
        self.hint_policy.hint(card)
    }

    pub fn progress(&self) -> u8 {
        stats::compute_progress(&self.buckets.lock())
    }

    pub fn counts(&self) -> BucketCounts {
        stats::summarize(&self.buckets.lock())
    }

    pub fn snapshot(&self) -> BucketMap {
        self.buckets.lock().clone()
    }

    pub fn into_inner(self) -> BucketMap {
        self.buckets.into_inner()
    }
}

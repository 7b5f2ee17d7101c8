use crate::{BucketMap, Card, Difficulty};
use tracing::{debug, warn};

/// First card of the first non-empty bucket, scanning from `Hardest` down to
/// `Mastered`.
pub fn practice<'a>(_cards: &[Card], bucket_map: &'a BucketMap) -> Option<&'a Card> {
    let picked = Difficulty::by_priority()
        .find_map(|level| bucket_map.bucket(level).first().map(|c| (level, c)));
    match picked {
        Some((level, card)) => {
            debug!(card_id = %card.id, %level, "selected card for practice");
            Some(card)
        }
        None => {
            debug!("no card available for practice");
            None
        }
    }
}

/// Moves `card` into the bucket for `level`. Every copy of the card id is
/// removed first, so a card missing from the map is simply inserted.
pub fn update(card: &Card, level: Difficulty, bucket_map: &mut BucketMap) {
    let mut removed = 0usize;
    let mut from = None;
    for d in Difficulty::ALL {
        let bucket = bucket_map.bucket_mut(d);
        let before = bucket.len();
        bucket.retain(|c| c.id != card.id);
        let n = before - bucket.len();
        if n > 0 && from.is_none() {
            from = Some(d);
        }
        removed += n;
    }
    if removed > 1 {
        warn!(card_id = %card.id, removed, "card was held by more than one bucket");
    }
    bucket_map.bucket_mut(level).push(card.clone());
    debug!(
        card_id = %card.id,
        from = from.map(Difficulty::name).unwrap_or("none"),
        to = %level,
        "card reassigned"
    );
}

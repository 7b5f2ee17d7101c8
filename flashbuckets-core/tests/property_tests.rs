use flashbuckets_core::{
    compute_progress, get_bucket_range, practice, summarize, to_bucket_sets, update, BucketMap,
    Card, Difficulty,
};
use proptest::prelude::*;
use std::collections::HashSet;

fn arb_level() -> impl Strategy<Value = Difficulty> {
    prop_oneof![
        Just(Difficulty::Mastered),
        Just(Difficulty::Easy),
        Just(Difficulty::Medium),
        Just(Difficulty::Hard),
        Just(Difficulty::Hardest),
    ]
}

fn card(n: u8) -> Card {
    Card::new(format!("c{n}"), format!("q{n}"), format!("a{n}"))
}

fn arb_updates() -> impl Strategy<Value = Vec<(u8, Difficulty)>> {
    prop::collection::vec((0u8..12, arb_level()), 0..60)
}

fn build(ops: &[(u8, Difficulty)]) -> BucketMap {
    let mut map = BucketMap::new();
    for (n, level) in ops {
        update(&card(*n), *level, &mut map);
    }
    map
}

proptest! {
    #[test]
    fn ids_live_in_at_most_one_bucket(ops in arb_updates()) {
        let map = build(&ops);
        let mut seen = HashSet::new();
        for (_, cards) in map.iter() {
            for c in cards {
                prop_assert!(seen.insert(c.id.clone()), "duplicate {}", c.id);
            }
        }
        let distinct: HashSet<_> = ops.iter().map(|(n, _)| *n).collect();
        prop_assert_eq!(map.len(), distinct.len());
    }

    #[test]
    fn last_update_wins(ops in arb_updates()) {
        let map = build(&ops);
        if let Some((n, level)) = ops.last() {
            let c = card(*n);
            prop_assert_eq!(map.level_of(&c.id), Some(*level));
            prop_assert_eq!(map.bucket(*level).last(), Some(&c));
        }
    }

    #[test]
    fn update_is_idempotent(ops in arb_updates(), n in 0u8..12, level in arb_level()) {
        let mut once = build(&ops);
        update(&card(n), level, &mut once);
        let mut twice = once.clone();
        update(&card(n), level, &mut twice);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn practice_is_deterministic(ops in arb_updates()) {
        let map = build(&ops);
        let first = practice(&[], &map).cloned();
        for _ in 0..3 {
            prop_assert_eq!(practice(&[], &map).cloned(), first.clone());
        }
        match first {
            None => prop_assert!(map.is_empty()),
            Some(c) => {
                let level = map.level_of(&c.id).unwrap();
                prop_assert_eq!(map.bucket(level).first(), Some(&c));
                for higher in Difficulty::ALL.into_iter().filter(|d| *d > level) {
                    prop_assert!(map.bucket(higher).is_empty());
                }
            }
        }
    }

    #[test]
    fn progress_bounds(ops in arb_updates()) {
        let map = build(&ops);
        let p = compute_progress(&map);
        prop_assert!(p <= 100);
        let s = summarize(&map);
        if s.total == 0 {
            prop_assert_eq!(p, 100);
        } else {
            prop_assert_eq!(p as usize, s.mastered() * 100 / s.total);
        }
    }

    #[test]
    fn range_contract(ops in arb_updates(), probe in 0u8..16) {
        let map = build(&ops);
        let sets = to_bucket_sets(&[], &map);
        let id = card(probe).id;
        let r = get_bucket_range(&sets, &id);
        match map.level_of(&id) {
            Some(level) => prop_assert_eq!((r.low, r.high), (level.rank(), level.rank())),
            None => prop_assert_eq!((r.low, r.high), (0, sets.len() - 1)),
        }
    }
}

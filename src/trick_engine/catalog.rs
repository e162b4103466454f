//! The static trick catalog — 71 tricks embedded as JSON seed data and
//! parsed once on first access. Read-only at runtime, so it is safe to
//! share across any number of concurrent readers.

use once_cell::sync::Lazy;

use crate::trick_engine::models::{Trick, TrickCategory};

static CATALOG: Lazy<Vec<Trick>> = Lazy::new(|| {
    // Embedded seed data; a parse failure is a build-data defect, not a
    // runtime condition.
    serde_json::from_str(include_str!("../../data/tricks.json"))
        .expect("embedded trick catalog is valid JSON")
});

/// The full catalog in insertion order.
pub fn all_tricks() -> &'static [Trick] {
    &CATALOG
}

/// All tricks in `category`, in catalog insertion order (stable, never
/// re-sorted). Empty when no trick matches.
pub fn tricks_by_category(category: TrickCategory) -> Vec<&'static Trick> {
    CATALOG.iter().filter(|t| t.category == category).collect()
}

/// Exact-id lookup; `None` when the id is unknown.
pub fn trick_by_id(id: u32) -> Option<&'static Trick> {
    CATALOG.iter().find(|t| t.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_71_tricks_with_unique_ids() {
        let tricks = all_tricks();
        assert_eq!(tricks.len(), 71);

        let mut seen = HashSet::new();
        for t in tricks {
            assert!(t.id > 0, "trick id must be positive: {}", t.name);
            assert!(seen.insert(t.id), "duplicate trick id {}", t.id);
        }
    }

    #[test]
    fn base_difficulty_and_popularity_stay_in_range() {
        for t in all_tricks() {
            assert!(t.difficulty <= 10, "{} has difficulty {}", t.name, t.difficulty);
            assert!(
                (1..=10).contains(&t.popularity),
                "{} has popularity {}",
                t.name,
                t.popularity
            );
        }
    }

    #[test]
    fn by_category_is_deterministic_and_insertion_ordered() {
        let a = tricks_by_category(TrickCategory::SoulGrinds);
        let b = tricks_by_category(TrickCategory::SoulGrinds);
        assert_eq!(a.len(), 7);
        assert_eq!(a, b);

        // Insertion order means ids are as laid out in the seed data.
        let ids: Vec<u32> = a.iter().map(|t| t.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted, "soul grinds are laid out in id order in the seed data");
    }

    #[test]
    fn every_category_is_non_empty() {
        for category in TrickCategory::ALL {
            assert!(
                !tricks_by_category(category).is_empty(),
                "category {category} has no tricks"
            );
        }
    }

    #[test]
    fn by_id_finds_known_tricks_and_rejects_unknown() {
        let soul = trick_by_id(1).expect("trick 1 exists");
        assert_eq!(soul.name, "Soul");
        assert_eq!(soul.category, TrickCategory::SoulGrinds);

        // Idempotent reads.
        assert_eq!(trick_by_id(1), trick_by_id(1));
        assert_eq!(trick_by_id(0), None);
        assert_eq!(trick_by_id(9999), None);
    }

    #[test]
    fn popularity_defaults_to_5_when_absent() {
        let trick: Trick = serde_json::from_str(
            r#"{
                "id": 500,
                "name": "Test",
                "description": "A test trick.",
                "difficulty": 4,
                "category": "spins"
            }"#,
        )
        .unwrap();
        assert_eq!(trick.popularity, 5);
        assert!(trick.variations.is_empty());
        assert!(trick.possible_entrances.is_empty());
    }
}

//! Word-set generation: the randomized bank of tiles shown to the user.
//!
//! Every generated set contains exactly [`DICTIONARY_DRAW`] dictionary words,
//! 3-5 prepositions drawn without replacement, and 1-3 punctuation marks drawn
//! without replacement, shuffled together. All tiles start at the unplaced
//! sentinel.

use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};

use crate::{Tile, TileSet};

/// Number of dictionary words in every generated set
pub const DICTIONARY_DRAW: usize = 6;

/// Connective words every poem needs; drawn 3-5 per set, no duplicates.
pub const PREPOSITIONS: &[&str] = &[
    "a", "and", "the", "to", "in", "of", "at", "by", "for", "with", "on", "up", "down", "out",
    "over", "under", "again", "further", "then", "once", "here", "there", "when", "where", "why",
    "how",
];

/// Punctuation tiles; drawn 1-3 per set, no duplicates.
pub const PUNCTUATION: &[&str] = &[",", ".", "!", "?", "..."];

// Embedded dictionary the word tiles are sampled from.
const DICTIONARY: &[&str] = &[
    "amber", "anchor", "autumn", "beacon", "birch", "blaze", "bloom", "blue", "breath", "bright",
    "cinder", "cloud", "cold", "crimson", "dawn", "deep", "drift", "dream", "dusk", "echo",
    "ember", "evening", "feather", "fern", "field", "flicker", "fog", "forest", "frost", "garden",
    "glass", "glow", "gold", "harbor", "hollow", "honey", "horizon", "hush", "island", "ivory",
    "lantern", "lake", "light", "linger", "luminous", "meadow", "midnight", "mist", "moon",
    "morning", "moss", "murmur", "night", "ocean", "pale", "petal", "quiet", "rain", "river",
    "salt", "shadow", "shimmer", "shore", "silver", "sky", "slow", "smoke", "snow", "soft",
    "sparrow", "spring", "star", "stone", "storm", "summer", "sun", "thunder", "tide", "timber",
    "twilight", "velvet", "violet", "wander", "warm", "water", "whisper", "wild", "willow",
    "wind", "winter", "wonder",
];

/// Generate a fresh, shuffled tile set using the thread RNG.
pub fn generate_tile_set() -> TileSet {
    generate_tile_set_with(&mut rand::rng())
}

/// Generate a tile set from a fixed seed; used for reproducible boards.
pub fn generate_tile_set_seeded(seed: u64) -> TileSet {
    generate_tile_set_with(&mut StdRng::seed_from_u64(seed))
}

/// Generate a tile set from the provided random source.
pub fn generate_tile_set_with<R: Rng + ?Sized>(rng: &mut R) -> TileSet {
    let mut words: Vec<&str> = DICTIONARY
        .choose_multiple(rng, DICTIONARY_DRAW)
        .copied()
        .collect();

    let preposition_count = rng.random_range(3..=5);
    words.extend(PREPOSITIONS.choose_multiple(rng, preposition_count).copied());

    let punctuation_count = rng.random_range(1..=3);
    words.extend(PUNCTUATION.choose_multiple(rng, punctuation_count).copied());

    words.shuffle(rng);
    words.into_iter().map(Tile::unplaced).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generated_set_respects_cardinalities() {
        for seed in 0..64 {
            let tiles = generate_tile_set_seeded(seed);

            let dictionary: Vec<_> = tiles
                .iter()
                .filter(|t| DICTIONARY.contains(&t.word.as_str()))
                .collect();
            let prepositions: Vec<_> = tiles
                .iter()
                .filter(|t| PREPOSITIONS.contains(&t.word.as_str()))
                .collect();
            let punctuation: Vec<_> = tiles
                .iter()
                .filter(|t| PUNCTUATION.contains(&t.word.as_str()))
                .collect();

            assert_eq!(dictionary.len(), DICTIONARY_DRAW, "seed {}", seed);
            assert!(
                (3..=5).contains(&prepositions.len()),
                "seed {}: {} prepositions",
                seed,
                prepositions.len()
            );
            assert!(
                (1..=3).contains(&punctuation.len()),
                "seed {}: {} punctuation marks",
                seed,
                punctuation.len()
            );
            assert_eq!(
                tiles.len(),
                dictionary.len() + prepositions.len() + punctuation.len()
            );
        }
    }

    #[test]
    fn fixed_list_draws_have_no_duplicates() {
        for seed in 0..64 {
            let tiles = generate_tile_set_seeded(seed);

            let prepositions: Vec<_> = tiles
                .iter()
                .filter(|t| PREPOSITIONS.contains(&t.word.as_str()))
                .map(|t| t.word.as_str())
                .collect();
            let punctuation: Vec<_> = tiles
                .iter()
                .filter(|t| PUNCTUATION.contains(&t.word.as_str()))
                .map(|t| t.word.as_str())
                .collect();

            let unique_preps: HashSet<_> = prepositions.iter().collect();
            let unique_punct: HashSet<_> = punctuation.iter().collect();
            assert_eq!(unique_preps.len(), prepositions.len(), "seed {}", seed);
            assert_eq!(unique_punct.len(), punctuation.len(), "seed {}", seed);
        }
    }

    #[test]
    fn every_tile_starts_unplaced() {
        let tiles = generate_tile_set_seeded(7);
        assert!(tiles.iter().all(|t| !t.is_placed()));
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        assert_eq!(generate_tile_set_seeded(42), generate_tile_set_seeded(42));
    }

    #[test]
    fn word_lists_are_disjoint() {
        // The cardinality checks above count by list membership, which only
        // works while no word appears in two lists.
        for p in PREPOSITIONS {
            assert!(!DICTIONARY.contains(p), "{} is in both lists", p);
        }
    }
}

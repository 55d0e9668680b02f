//! In-memory challenge collections.
//!
//! Wraps a loaded set of challenges with the lookups the app needs:
//! by ID, by difficulty level, and random selection.

use std::path::Path;

use rand::seq::SliceRandom;

use crate::model::Challenge;
use crate::parser::{load_challenge_directory, ContentError};

/// A loaded set of challenges, sorted by ID for deterministic ordering.
#[derive(Debug, Clone, Default)]
pub struct ChallengeLibrary {
    challenges: Vec<Challenge>,
}

impl ChallengeLibrary {
    /// Build a library from already-loaded challenges.
    pub fn new(mut challenges: Vec<Challenge>) -> Self {
        challenges.sort_by(|a, b| a.id.cmp(&b.id));
        Self { challenges }
    }

    /// Load every challenge JSON file under a directory.
    pub fn from_dir(dir: &Path) -> Result<Self, ContentError> {
        Ok(Self::new(load_challenge_directory(dir)?))
    }

    /// All challenges, in ID order.
    pub fn all(&self) -> &[Challenge] {
        &self.challenges
    }

    pub fn len(&self) -> usize {
        self.challenges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.challenges.is_empty()
    }

    /// Look up a challenge by ID.
    pub fn by_id(&self, id: &str) -> Option<&Challenge> {
        self.challenges.iter().find(|c| c.id == id)
    }

    /// Challenges at the given difficulty level.
    pub fn by_level(&self, level: u8) -> Vec<&Challenge> {
        self.challenges
            .iter()
            .filter(|c| c.level == Some(level))
            .collect()
    }

    /// All difficulty levels present, sorted and deduplicated.
    pub fn levels(&self) -> Vec<u8> {
        let mut levels: Vec<u8> = self.challenges.iter().filter_map(|c| c.level).collect();
        levels.sort_unstable();
        levels.dedup();
        levels
    }

    /// Pick a random challenge, optionally restricted to a level.
    ///
    /// Returns `None` when no challenge qualifies.
    pub fn random(&self, level: Option<u8>) -> Option<&Challenge> {
        let mut rng = rand::thread_rng();
        match level {
            Some(level) => self.by_level(level).choose(&mut rng).copied(),
            None => self.challenges.choose(&mut rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn challenge(id: &str, level: Option<u8>) -> Challenge {
        Challenge {
            id: id.into(),
            title: id.to_uppercase(),
            text: "Tekst.".into(),
            images: Vec::new(),
            questions: Vec::new(),
            level,
        }
    }

    fn library() -> ChallengeLibrary {
        ChallengeLibrary::new(vec![
            challenge("het-weer", Some(2)),
            challenge("de-kat", Some(1)),
            challenge("de-hond", Some(1)),
            challenge("de-brief", None),
        ])
    }

    #[test]
    fn sorts_by_id() {
        let library = library();
        let ids: Vec<&str> = library.all().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["de-brief", "de-hond", "de-kat", "het-weer"]);
    }

    #[test]
    fn by_id_lookup() {
        let library = library();
        assert_eq!(library.by_id("de-kat").unwrap().title, "DE-KAT");
        assert!(library.by_id("bestaat-niet").is_none());
    }

    #[test]
    fn by_level_filters() {
        let library = library();
        let level1: Vec<&str> = library.by_level(1).iter().map(|c| c.id.as_str()).collect();
        assert_eq!(level1, vec!["de-hond", "de-kat"]);
        assert!(library.by_level(3).is_empty());
    }

    #[test]
    fn levels_sorted_and_deduplicated() {
        assert_eq!(library().levels(), vec![1, 2]);
    }

    #[test]
    fn random_respects_level_filter() {
        let library = library();
        // Only one level-2 challenge, so the pick is deterministic.
        assert_eq!(library.random(Some(2)).unwrap().id, "het-weer");
        assert!(library.random(Some(3)).is_none());
    }

    #[test]
    fn random_on_empty_library() {
        let library = ChallengeLibrary::default();
        assert!(library.random(None).is_none());
    }

    #[test]
    fn random_draws_from_full_set() {
        let library = library();
        let pick = library.random(None).unwrap();
        assert!(library.by_id(&pick.id).is_some());
    }
}

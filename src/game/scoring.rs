//! Word scoring and the set of words found this round
//!
//! Points depend only on word length:
//! - fewer than 3 letters: 0
//! - 3-4 letters: 1
//! - 5 letters: 2
//! - 6 letters: 3
//! - 7 letters: 5
//! - 8 or more: 11

use std::collections::HashSet;

/// Minimum word length for valid submissions
pub const MIN_WORD_LENGTH: usize = 3;

/// Points for a word of the given length (in letters, not bytes)
pub fn score(word: &str) -> u32 {
    match word.chars().count() {
        0..=2 => 0,
        3 | 4 => 1,
        5 => 2,
        6 => 3,
        7 => 5,
        _ => 11,
    }
}

/// Sum of `score` over a collection of words
pub fn total_score<'a, I>(words: I) -> u32
where
    I: IntoIterator<Item = &'a str>,
{
    words.into_iter().map(score).sum()
}

/// A found word with its point value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundWord {
    pub word: String,
    pub points: u32,
}

/// Words accepted this round: unique, upper-cased, kept in discovery order.
#[derive(Debug, Clone, Default)]
pub struct FoundWords {
    /// Display order
    words: Vec<FoundWord>,
    /// Membership index
    seen: HashSet<String>,
}

impl FoundWords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the word has already been found (case-insensitive)
    pub fn contains(&self, word: &str) -> bool {
        self.seen.contains(&word.to_uppercase())
    }

    /// Record a word. Returns false if it was already present.
    pub fn insert(&mut self, word: &str) -> bool {
        let upper = word.to_uppercase();
        if !self.seen.insert(upper.clone()) {
            return false;
        }
        let points = score(&upper);
        self.words.push(FoundWord {
            word: upper,
            points,
        });
        true
    }

    /// Found words in the order they were accepted
    pub fn iter(&self) -> impl Iterator<Item = &FoundWord> {
        self.words.iter()
    }

    /// Running total for the round
    pub fn total_score(&self) -> u32 {
        total_score(self.words.iter().map(|w| w.word.as_str()))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn clear(&mut self) {
        self.words.clear();
        self.seen.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_table() {
        assert_eq!(score("AB"), 0);
        assert_eq!(score("CAT"), 1);
        assert_eq!(score("TALO"), 1);
        assert_eq!(score("HOUSE"), 2);
        assert_eq!(score("PLANET"), 3);
        assert_eq!(score("MONKEYS"), 5);
        assert_eq!(score("ELEPHANTS"), 11);
        assert_eq!(score("ELEPHANTSELEPHANTS"), 11);
    }

    #[test]
    fn test_score_empty_and_short() {
        assert_eq!(score(""), 0);
        assert_eq!(score("A"), 0);
    }

    #[test]
    fn test_score_counts_letters_not_bytes() {
        // Ä and Ö are two bytes each in UTF-8
        assert_eq!(score("ÄÖ"), 0);
        assert_eq!(score("PÄÄ"), 1);
        assert_eq!(score("KÄÄPÄ"), 2);
    }

    #[test]
    fn test_total_score() {
        assert_eq!(total_score(["CAT", "HOUSE", "AB"]), 3);
        assert_eq!(total_score(Vec::<&str>::new()), 0);
    }

    #[test]
    fn test_found_words_rejects_duplicates() {
        let mut found = FoundWords::new();
        assert!(found.insert("KISSA"));
        assert!(!found.insert("KISSA"));
        assert!(!found.insert("kissa"));
        assert_eq!(found.len(), 1);
        assert_eq!(found.total_score(), 2);
    }

    #[test]
    fn test_found_words_normalizes_case() {
        let mut found = FoundWords::new();
        found.insert("talo");
        assert!(found.contains("TALO"));
        assert!(found.contains("Talo"));
        assert_eq!(found.iter().next().map(|w| w.word.as_str()), Some("TALO"));
    }

    #[test]
    fn test_found_words_keeps_discovery_order() {
        let mut found = FoundWords::new();
        found.insert("TALO");
        found.insert("AUTO");
        found.insert("KALA");
        let order: Vec<&str> = found.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(order, vec!["TALO", "AUTO", "KALA"]);
    }

    #[test]
    fn test_found_word_points() {
        let mut found = FoundWords::new();
        found.insert("MANSIKKA");
        assert_eq!(found.iter().next().map(|w| w.points), Some(11));
    }

    #[test]
    fn test_clear() {
        let mut found = FoundWords::new();
        found.insert("TALO");
        found.clear();
        assert!(found.is_empty());
        assert!(!found.contains("TALO"));
        assert_eq!(found.total_score(), 0);
    }
}

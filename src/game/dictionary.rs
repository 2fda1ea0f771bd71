//! Dictionary lookups
//!
//! The game asks a [`DictionaryClient`] whether a word exists. The service
//! side keeps its words in a [`WordRepository`], built once at start-up from a
//! tab-separated word list and shared with request handlers.

use crate::error::RepositoryError;
use std::collections::HashSet;
use std::future::Future;
use std::io::BufRead;

/// Header of the word column in the source word list
pub const WORD_COLUMN: &str = "Hakusana";

/// Asynchronous word-existence check.
///
/// Implementations are fail-closed: any transport or parsing failure yields
/// `false`, never an error.
pub trait DictionaryClient: Send + Sync + 'static {
    fn exists(&self, word: &str) -> impl Future<Output = bool> + Send;
}

/// Upper-cased set of known words.
#[derive(Debug, Clone, Default)]
pub struct WordRepository {
    words: HashSet<String>,
}

impl WordRepository {
    /// Build a repository from an iterator of words
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|w| normalize(w.as_ref()))
            .collect();
        Self { words }
    }

    /// Load words from a tab-separated file with a `Hakusana` header column.
    ///
    /// Rows without a value in that column are skipped.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, RepositoryError> {
        let mut lines = reader.lines();
        let header = lines.next().ok_or(RepositoryError::Empty)??;
        let column = header
            .trim_start_matches('\u{feff}')
            .split('\t')
            .position(|h| h.trim() == WORD_COLUMN)
            .ok_or_else(|| RepositoryError::MissingColumn(WORD_COLUMN.to_string()))?;

        let mut words = HashSet::new();
        for line in lines {
            let line = line?;
            if let Some(word) = line.split('\t').nth(column).and_then(normalize) {
                words.insert(word);
            }
        }

        Ok(Self { words })
    }

    /// Check if a word is known. Case-insensitive.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_uppercase())
    }

    /// Returns the total number of words loaded
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn normalize(word: &str) -> Option<String> {
    let trimmed = word.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_uppercase())
    }
}

/// Local lookups against an in-memory repository.
impl DictionaryClient for WordRepository {
    async fn exists(&self, word: &str) -> bool {
        self.contains(word)
    }
}

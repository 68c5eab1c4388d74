//! Edit distance and vocabulary-based query correction for the
//! typo-tolerant reference title lookup.

use std::collections::{HashMap, HashSet};

/// Minimum number of single-character edits (insertions, deletions or
/// substitutions) turning one string into the other.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    // Two rows instead of the full matrix.
    let mut prev_row: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr_row: Vec<usize> = vec![0; b_chars.len() + 1];

    for (i, a_char) in a_chars.iter().enumerate() {
        curr_row[0] = i + 1;

        for (j, b_char) in b_chars.iter().enumerate() {
            let cost = if a_char == b_char { 0 } else { 1 };

            curr_row[j + 1] = (prev_row[j + 1] + 1) // deletion
                .min(curr_row[j] + 1) // insertion
                .min(prev_row[j] + cost); // substitution
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b_chars.len()]
}

/// Vocabulary of words seen in catalog track titles.
///
/// Used to correct a misspelled lookup word to the nearest known title
/// word before retrying the substring search.
#[derive(Clone, Default)]
pub struct TitleVocabulary {
    words: Vec<String>,
    present: HashSet<String>,
    /// Word indices bucketed by length, so only plausible candidates are
    /// compared.
    by_length: HashMap<usize, Vec<usize>>,
}

impl TitleVocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every word of a title (split on whitespace and punctuation).
    pub fn add_title(&mut self, title: &str) {
        for word in title.split(|c: char| c.is_whitespace() || c.is_ascii_punctuation()) {
            self.add_word(word);
        }
    }

    fn add_word(&mut self, word: &str) {
        let word = word.to_lowercase();
        // Single letters produce junk corrections.
        if word.chars().count() < 2 || self.present.contains(&word) {
            return;
        }

        let idx = self.words.len();
        self.by_length
            .entry(word.chars().count())
            .or_default()
            .push(idx);
        self.present.insert(word.clone());
        self.words.push(word);
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Nearest vocabulary word within `max_distance` edits, or None.
    /// Among equally distant candidates the first added wins.
    pub fn find_best_match(&self, query: &str, max_distance: usize) -> Option<&str> {
        let query = query.to_lowercase();
        if self.present.contains(&query) {
            return self.words.iter().find(|w| **w == query).map(|w| w.as_str());
        }

        let query_len = query.chars().count();
        let min_len = query_len.saturating_sub(max_distance);
        let max_len = query_len + max_distance;

        let mut best: Option<(usize, usize)> = None; // (distance, index)
        for len in min_len..=max_len {
            let Some(indices) = self.by_length.get(&len) else {
                continue;
            };
            for &idx in indices {
                let distance = levenshtein_distance(&query, &self.words[idx]);
                if distance > max_distance {
                    continue;
                }
                if best.map(|(d, _)| distance < d).unwrap_or(true) {
                    best = Some((distance, idx));
                }
            }
        }

        best.map(|(_, idx)| self.words[idx].as_str())
    }

    /// Correct each word of a query against the vocabulary.
    ///
    /// Returns the corrected query only when it differs from the input
    /// and every word found a match, so callers retry at most once.
    pub fn correct_query(&self, query: &str, max_distance: usize) -> Option<String> {
        let mut corrected_words = Vec::new();
        for word in query.split_whitespace() {
            corrected_words.push(self.find_best_match(word, max_distance)?.to_owned());
        }

        if corrected_words.is_empty() {
            return None;
        }
        let corrected = corrected_words.join(" ");
        if corrected.eq_ignore_ascii_case(query.trim()) {
            None
        } else {
            Some(corrected)
        }
    }
}

mod levenshtein;

pub use levenshtein::{levenshtein_distance, TitleVocabulary};

//! Word list parsing and letter scrambling.

use crate::rng::Rng;

/// Parse a JSON array of strings into a word list.
/// The UI ships both word lists and letter-tile submissions in this shape.
pub fn parse_words(json: &str) -> Result<Vec<String>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Return a permutation of `word`'s characters.
///
/// Cosmetic shuffle, not a fairness guarantee. The player should not be handed
/// the solved word, so an identity permutation is nudged when the word has at
/// least two distinct characters (impossible to avoid for e.g. "aa").
pub fn scramble(word: &str, rng: &mut Rng) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    if chars.len() < 2 {
        return word.to_string();
    }

    // Fisher-Yates
    for i in (1..chars.len()).rev() {
        let j = rng.next_int(i as u32 + 1) as usize;
        chars.swap(i, j);
    }

    if chars.iter().copied().eq(word.chars()) {
        if let Some(i) = (1..chars.len()).find(|&i| chars[i] != chars[0]) {
            chars.swap(0, i);
        }
    }

    chars.into_iter().collect()
}

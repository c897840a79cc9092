//! Prefix-anchored fuzzy matching of order fragments onto catalog names.
//!
//! Chat orders are truncated, misspelled, and multilingual; exact lookup
//! is hopeless. Instead, every order word is compared against every
//! catalog name word by common prefix, and a candidate is kept when a
//! long enough run of consecutive name words is anchored in the text.

use crate::text;

/// Catalog entities the matcher can scan.
pub trait Matchable {
    /// Display name the entity is matched under.
    fn display_name(&self) -> &str;
}

/// Thresholds gating when a run of prefix matches is accepted.
///
/// `min_chars_first_word` anchors the scan: a name word only seeds a
/// candidate once that many of its leading characters appear in an order
/// word (short name words like "Ham" must match in full). `min_words` and
/// `min_chars_total` then suppress one-off prefix collisions on common
/// short words.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchThresholds {
    pub min_words: usize,
    pub min_chars_first_word: usize,
    pub min_chars_total: usize,
}

impl Default for MatchThresholds {
    fn default() -> Self {
        Self { min_words: 2, min_chars_first_word: 3, min_chars_total: 5 }
    }
}

/// Upper bound on comma segments scanned per order fragment. Keeps the
/// segments x words x catalog x name-words walk from blowing up on
/// pathological input.
pub const MAX_SEGMENTS: usize = 64;

/// One accepted candidate.
///
/// `part` and `word` locate the first matched order word (segment index,
/// word index within that segment) so the interpreter can inspect
/// neighbouring words in the same comma segment.
#[derive(Clone, Copy, Debug)]
pub struct MatchCandidate<'a, T> {
    pub entry: &'a T,
    /// Number of consecutive name words matched.
    pub len: usize,
    /// Total matched character count across those words.
    pub sum: usize,
    pub part: usize,
    pub word: usize,
}

/// Length of the common prefix of two already-folded words.
pub fn common_prefix_len(a: &str, b: &str) -> usize {
    a.bytes().zip(b.bytes()).take_while(|(x, y)| x == y).count()
}

/// Scan `order` for catalog entries and return candidates ranked by
/// `(len, sum)` descending. The sort is stable and keys on nothing else.
pub fn find_matches<'a, T, I>(
    order: &str,
    catalog: I,
    thresholds: MatchThresholds,
) -> Vec<MatchCandidate<'a, T>>
where
    T: Matchable,
    I: IntoIterator<Item = &'a T> + Clone,
{
    let segments: Vec<Vec<String>> = order
        .split(',')
        .take(MAX_SEGMENTS)
        .map(|part| text::normalize(part.trim()))
        .collect();

    let mut candidates = Vec::new();
    for (part, order_words) in segments.iter().enumerate() {
        for entry in catalog.clone() {
            let name_words = text::normalize(entry.display_name());
            for (o, order_word) in order_words.iter().enumerate() {
                for (n, name_word) in name_words.iter().enumerate() {
                    let anchor = common_prefix_len(order_word, name_word);
                    if anchor < thresholds.min_chars_first_word.min(name_word.len()) {
                        continue;
                    }
                    // Walk forward from the anchor: each subsequent name
                    // word is compared against the order word at the same
                    // forward offset.
                    let mut len = 0;
                    let mut sum = 0;
                    for (nn, next_name_word) in name_words[n..].iter().enumerate() {
                        if let Some(next_order_word) = order_words.get(o + nn) {
                            let matched = common_prefix_len(next_name_word, next_order_word);
                            if matched > 0 {
                                len += 1;
                                sum += matched;
                            }
                        }
                    }
                    let name_chars: usize = name_words.iter().map(String::len).sum();
                    if len >= thresholds.min_words.min(name_words.len())
                        && sum >= thresholds.min_chars_total.min(name_chars)
                    {
                        candidates.push(MatchCandidate { entry, len, sum, part, word: o });
                    }
                }
            }
        }
    }

    candidates.sort_by(|a, b| (b.len, b.sum).cmp(&(a.len, a.sum)));
    candidates
}

#[cfg(test)]
mod tests {
    use super::{common_prefix_len, find_matches, MatchThresholds, Matchable};

    struct Entry {
        name: &'static str,
    }

    impl Matchable for Entry {
        fn display_name(&self) -> &str {
            self.name
        }
    }

    fn catalog(names: &'static [&'static str]) -> Vec<Entry> {
        names.iter().map(|name| Entry { name }).collect()
    }

    #[test]
    fn common_prefix_counts_leading_agreement() {
        assert_eq!(common_prefix_len("pepperoni", "pepp"), 4);
        assert_eq!(common_prefix_len("smal", "small"), 4);
        assert_eq!(common_prefix_len("onion", "olive"), 1);
        assert_eq!(common_prefix_len("ham", "mushroom"), 0);
    }

    #[test]
    fn misspelled_order_still_matches_by_prefix() {
        let entries = catalog(&["Small Hawaiian"]);
        let matches = find_matches("smal hawaian", entries.iter(), MatchThresholds::default());

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].len, 2);
        assert_eq!(matches[0].sum, 9);
        assert_eq!(matches[0].word, 0);
    }

    #[test]
    fn single_word_name_needs_only_one_matched_word() {
        let entries = catalog(&["Margherita"]);
        let matches = find_matches("medium margherita", entries.iter(), MatchThresholds::default());

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].word, 1);
    }

    #[test]
    fn short_anchor_words_must_match_in_full() {
        let entries = catalog(&["Ham"]);
        // "ha" covers only two of three characters of "Ham"; the anchor
        // threshold clamps to the name word length, so "ham" is required.
        assert!(find_matches("ha", entries.iter(), MatchThresholds::default()).is_empty());
        assert_eq!(find_matches("ham", entries.iter(), MatchThresholds::default()).len(), 1);
    }

    #[test]
    fn accidental_single_prefix_collision_is_rejected() {
        let entries = catalog(&["Pepperoni Pizza"]);
        // "pizza" alone matches one of two name words; min_words demands
        // both for a two-word name.
        assert!(find_matches("pizza", entries.iter(), MatchThresholds::default()).is_empty());
    }

    #[test]
    fn candidates_rank_by_word_count_then_char_count() {
        let entries = catalog(&["Pepperoni", "Pepperoni Pizza"]);
        let matches =
            find_matches("pepperoni pizza", entries.iter(), MatchThresholds::default());

        assert_eq!(matches[0].entry.name, "Pepperoni Pizza");
        assert_eq!(matches[0].len, 2);
        assert_eq!(matches[1].entry.name, "Pepperoni");
        assert_eq!(matches[1].len, 1);
    }

    #[test]
    fn segment_index_reflects_comma_position() {
        let entries = catalog(&["Onion"]);
        let matches =
            find_matches("large pepperoni, no onion", entries.iter(), MatchThresholds::default());

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].part, 1);
        assert_eq!(matches[0].word, 1);
    }

    #[test]
    fn diacritics_fold_before_comparison() {
        let entries = catalog(&["Jalapeño"]);
        let matches = find_matches("extra jalapeno", entries.iter(), MatchThresholds::default());

        assert_eq!(matches.len(), 1);
    }
}

//! Text folding for menu matching.
//!
//! Order fragments and catalog names arrive in mixed case with accents
//! (the vendor serves localized menus), so both sides are folded into a
//! plain ASCII form before any comparison.

use unicode_normalization::UnicodeNormalization;

/// Fold text into the comparable form used by the matcher: canonical
/// decomposition, combining marks and every other non-ASCII character
/// dropped, then lowercased.
pub fn fold(text: &str) -> String {
    text.nfd().filter(char::is_ascii).collect::<String>().to_lowercase()
}

/// Fold text and split it into words on literal single spaces.
///
/// Runs of spaces yield empty words on purpose: topping inflection words
/// are looked up by position within a segment, so word indices must stay
/// stable across folding.
pub fn normalize(text: &str) -> Vec<String> {
    fold(text).split(' ').map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::{fold, normalize};

    #[test]
    fn fold_strips_diacritics_and_lowercases() {
        assert_eq!(fold("Jalapeño Böll"), "jalapeno boll");
        assert_eq!(fold("Crème Fraîche"), "creme fraiche");
    }

    #[test]
    fn fold_drops_characters_without_ascii_decomposition() {
        assert_eq!(fold("æon 北"), "on ");
    }

    #[test]
    fn normalize_keeps_word_positions_across_space_runs() {
        assert_eq!(normalize("no  Onion"), vec!["no", "", "onion"]);
    }

    #[test]
    fn normalize_of_empty_text_is_one_empty_word() {
        assert_eq!(normalize(""), vec![""]);
    }
}

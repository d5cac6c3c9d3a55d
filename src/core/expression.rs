//! Puzzle expression representation
//!
//! An Expression is one normalized line of an input source: a word or a phrase
//! with lowercase letters and single spaces between words. It keeps a map of
//! character positions so guesses can be resolved without rescanning the text.

use rustc_hash::FxHashMap;
use std::fmt;

/// Separator between words of a normalized expression
pub const SEPARATOR: char = ' ';

/// Lowercase a character when it has a single-character lowercase form
///
/// Characters whose lowercase expands to several characters are kept as-is so
/// an expression and its hidden string always have the same length.
#[must_use]
pub fn fold_lower(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Uppercase a character when it has a single-character uppercase form
#[must_use]
pub fn fold_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Whether a character can be shown on the terminal
///
/// Control characters (tabs and line endings included) are not printable,
/// nor is the replacement character produced for undecodable input bytes.
#[inline]
#[must_use]
pub fn is_printable(c: char) -> bool {
    !c.is_control() && c != char::REPLACEMENT_CHARACTER
}

/// Clean a raw source line for play
///
/// Single left-to-right pass:
/// - non-printable characters are dropped
/// - whitespace becomes a single separator; a whitespace character following
///   a kept one is dropped, as is leading and trailing whitespace
/// - letters are lowercased
///
/// # Examples
/// ```
/// use hangman::core::normalize;
///
/// assert_eq!(normalize("  Hello,   World!\r\n"), "hello, world!");
/// assert_eq!(normalize(&normalize("A  B")), normalize("A  B"));
/// ```
#[must_use]
pub fn normalize(line: &str) -> String {
    let mut cleaned = String::with_capacity(line.len());
    // Starts true so leading whitespace is dropped
    let mut after_space = true;

    for c in line.chars().filter(|&c| is_printable(c)) {
        if c.is_whitespace() {
            if !after_space {
                cleaned.push(SEPARATOR);
                after_space = true;
            }
        } else {
            cleaned.push(fold_lower(c));
            after_space = false;
        }
    }

    if cleaned.ends_with(SEPARATOR) {
        cleaned.pop();
    }
    cleaned
}

/// A normalized word or phrase to be guessed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    text: String,
    chars: Vec<char>,
    char_positions: FxHashMap<char, Vec<usize>>,
}

impl Expression {
    /// Normalize a raw line into an expression
    ///
    /// Returns `None` when nothing playable is left after normalization.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Expression;
    ///
    /// let expr = Expression::new("Banana\n").unwrap();
    /// assert_eq!(expr.text(), "banana");
    /// assert_eq!(expr.positions_of('a'), &[1, 3, 5]);
    ///
    /// assert!(Expression::new(" \t \r\n").is_none());
    /// ```
    #[must_use]
    pub fn new(raw: &str) -> Option<Self> {
        let text = normalize(raw);
        if text.is_empty() {
            return None;
        }

        let chars: Vec<char> = text.chars().collect();
        let mut char_positions: FxHashMap<char, Vec<usize>> = FxHashMap::default();
        for (i, &ch) in chars.iter().enumerate() {
            char_positions.entry(ch).or_default().push(i);
        }

        Some(Self {
            text,
            chars,
            char_positions,
        })
    }

    /// Get the expression as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the expression characters
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of characters, separators included
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false: empty lines never become expressions
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Check if the expression contains a specific character
    #[inline]
    #[must_use]
    pub fn contains(&self, ch: char) -> bool {
        self.char_positions.contains_key(&ch)
    }

    /// Get all positions where a character appears
    #[inline]
    #[must_use]
    pub fn positions_of(&self, ch: char) -> &[usize] {
        self.char_positions
            .get(&ch)
            .map_or(&[], std::vec::Vec::as_slice)
    }

    /// Iterate over the words of the expression
    pub fn words(&self) -> impl Iterator<Item = &[char]> {
        self.chars.split(|&c| c == SEPARATOR)
    }

    /// The expression as it reads once fully revealed
    #[must_use]
    pub fn revealed(&self) -> String {
        self.chars.iter().map(|&c| fold_upper(c)).collect()
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn normalize_lowercases_letters() {
        assert_eq!(normalize("CrAnE"), "crane");
        assert_eq!(normalize("Über"), "über");
    }

    #[test]
    fn normalize_drops_non_printable() {
        assert_eq!(normalize("ban\x07ana\r\n"), "banana");
        // Tabs are control characters, not separators
        assert_eq!(normalize("a\tb"), "ab");
        assert_eq!(normalize("bad\u{FFFD}byte"), "badbyte");
    }

    #[test]
    fn normalize_collapses_whitespace_runs() {
        assert_eq!(normalize("the    quick  fox"), "the quick fox");
        assert_eq!(normalize("a \u{a0} b"), "a b");
    }

    #[test]
    fn normalize_trims_edges() {
        assert_eq!(normalize("   padded   "), "padded");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn normalize_keeps_punctuation_and_digits() {
        assert_eq!(normalize("It's 42!"), "it's 42!");
    }

    #[test]
    fn fold_keeps_multi_char_mappings() {
        assert_eq!(fold_upper('a'), 'A');
        assert_eq!(fold_upper('ß'), 'ß');
        assert_eq!(fold_lower('İ'), 'İ');
        assert_eq!(fold_upper('7'), '7');
    }

    #[test]
    fn expression_positions_of_duplicates() {
        let expr = Expression::new("speed").unwrap();
        assert_eq!(expr.positions_of('e'), &[2, 3]);
        assert_eq!(expr.positions_of('s'), &[0]);
        assert_eq!(expr.positions_of('z'), &[]);
        assert!(expr.contains('d'));
        assert!(!expr.contains('x'));
    }

    #[test]
    fn expression_words_split_on_separator() {
        let expr = Expression::new("hello   big world").unwrap();
        let words: Vec<String> = expr.words().map(|w| w.iter().collect()).collect();
        assert_eq!(words, vec!["hello", "big", "world"]);
        assert_eq!(expr.len(), 15);
    }

    #[test]
    fn expression_rejects_blank_lines() {
        assert!(Expression::new("").is_none());
        assert!(Expression::new("\n").is_none());
        assert!(Expression::new("\x01\x02").is_none());
    }

    #[test]
    fn expression_revealed_is_uppercase() {
        let expr = Expression::new("Hello World").unwrap();
        assert_eq!(expr.revealed(), "HELLO WORLD");
        assert_eq!(expr.to_string(), "hello world");
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(line in "[ -~\t\r\n\u{7f}]{0,60}") {
            let once = normalize(&line);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn normalize_has_no_double_separators(line in "[a-zA-Z \t]{0,60}") {
            let cleaned = normalize(&line);
            prop_assert!(!cleaned.contains("  "));
            prop_assert!(!cleaned.starts_with(' '));
            prop_assert!(!cleaned.ends_with(' '));
        }
    }
}

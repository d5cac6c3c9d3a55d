//! Masked rendering of an expression
//!
//! A hidden string mirrors the shape of its expression: separators stay in
//! place, hidden characters render as `_`, revealed characters render in
//! uppercase.

use super::expression::{Expression, SEPARATOR, fold_upper};
use std::fmt;

/// Glyph shown for a character that has not been revealed yet
pub const MASK: char = '_';

/// One position of a hidden string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Gap between two words
    Separator,
    /// Not guessed yet
    Hidden,
    /// Shown to the player, stored uppercased
    Revealed(char),
}

impl Slot {
    /// Character shown to the player for this slot
    #[inline]
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Separator => SEPARATOR,
            Self::Hidden => MASK,
            Self::Revealed(c) => c,
        }
    }
}

/// The masked expression shown to the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HiddenString {
    slots: Vec<Slot>,
}

impl HiddenString {
    /// Build the opening hidden string for an expression
    ///
    /// # Algorithm
    /// 1. Mask each word: one letter is fully hidden, two letters keep the
    ///    first, longer words keep the first and the last
    /// 2. Every character revealed by step 1 is revealed at every other
    ///    position where it occurs, across word boundaries
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{Expression, HiddenString};
    ///
    /// let expr = Expression::new("banana").unwrap();
    /// assert_eq!(HiddenString::build(&expr).to_string(), "BA_A_A");
    ///
    /// let expr = Expression::new("a cat sat").unwrap();
    /// assert_eq!(HiddenString::build(&expr).to_string(), "_ C_T S_T");
    /// ```
    #[must_use]
    pub fn build(expression: &Expression) -> Self {
        let mut slots = Vec::with_capacity(expression.len());

        for (i, word) in expression.words().enumerate() {
            if i > 0 {
                slots.push(Slot::Separator);
            }
            let last = word.len().saturating_sub(1);
            slots.extend(word.iter().enumerate().map(|(j, &c)| {
                let keeps_first = j == 0 && word.len() >= 2;
                let keeps_last = j == last && word.len() >= 3;
                if keeps_first || keeps_last {
                    Slot::Revealed(fold_upper(c))
                } else {
                    Slot::Hidden
                }
            }));
        }

        let mut hidden = Self { slots };
        hidden.propagate(expression);
        hidden
    }

    fn propagate(&mut self, expression: &Expression) {
        let mut shown: Vec<char> = self
            .slots
            .iter()
            .zip(expression.chars())
            .filter(|(slot, _)| matches!(slot, Slot::Revealed(_)))
            .map(|(_, &c)| c)
            .collect();
        shown.sort_unstable();
        shown.dedup();

        for c in shown {
            self.reveal(expression, c);
        }
    }

    /// Reveal every position of `ch` in the expression
    ///
    /// Returns the number of positions that changed from hidden to revealed.
    pub fn reveal(&mut self, expression: &Expression, ch: char) -> usize {
        let glyph = fold_upper(ch);
        let mut changed = 0;
        for &pos in expression.positions_of(ch) {
            if let Some(slot) = self.slots.get_mut(pos)
                && *slot == Slot::Hidden
            {
                *slot = Slot::Revealed(glyph);
                changed += 1;
            }
        }
        changed
    }

    /// Whether every position of `ch` in the expression is already visible
    ///
    /// Decided on the expression character, not the rendered glyph: distinct
    /// characters such as `ı` and `i` share the glyph `I`.
    #[must_use]
    pub fn is_revealed(&self, expression: &Expression, ch: char) -> bool {
        expression
            .positions_of(ch)
            .iter()
            .all(|&pos| self.slots.get(pos).is_some_and(|&slot| slot != Slot::Hidden))
    }

    /// Whether every non-separator position is revealed
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.slots.contains(&Slot::Hidden)
    }

    /// Number of positions still hidden
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.slots.iter().filter(|&&s| s == Slot::Hidden).count()
    }

    /// Get the slots in order
    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Number of positions, separators included
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl fmt::Display for HiddenString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: String = self.slots.iter().map(|s| s.glyph()).collect();
        write!(f, "{rendered}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn hidden(text: &str) -> String {
        let expr = Expression::new(text).unwrap();
        HiddenString::build(&expr).to_string()
    }

    #[test]
    fn single_letter_word_is_hidden() {
        assert_eq!(hidden("a"), "_");
    }

    #[test]
    fn two_letter_word_keeps_first() {
        assert_eq!(hidden("hi"), "H_");
    }

    #[test]
    fn long_word_keeps_both_ends() {
        assert_eq!(hidden("crane"), "C___E");
    }

    #[test]
    fn repeated_letters_are_propagated() {
        assert_eq!(hidden("banana"), "BA_A_A");
        assert_eq!(hidden("level"), "L___L");
        assert_eq!(hidden("eerie"), "EE__E");
    }

    #[test]
    fn propagation_crosses_word_boundaries() {
        // 'a' is hidden as a word but revealed by "area"
        assert_eq!(hidden("a big area"), "A B_G A__A");
        // 't' from "cat" reveals the 't' inside "stop"
        assert_eq!(hidden("cat stop"), "C_T ST_P");
    }

    #[test]
    fn one_letter_words_reveal_nothing() {
        assert_eq!(hidden("i o u"), "_ _ _");
    }

    #[test]
    fn punctuation_is_treated_like_letters() {
        assert_eq!(hidden("it's"), "I__S");
        assert_eq!(hidden("go!"), "G_!");
    }

    #[test]
    fn reveal_counts_new_positions() {
        let expr = Expression::new("banana").unwrap();
        let mut h = HiddenString::build(&expr);
        assert_eq!(h.hidden_count(), 2);
        assert_eq!(h.reveal(&expr, 'n'), 2);
        assert_eq!(h.reveal(&expr, 'n'), 0);
        assert!(h.is_solved());
        assert_eq!(h.to_string(), expr.revealed());
    }

    #[test]
    fn is_revealed_checks_every_position() {
        let expr = Expression::new("hello world").unwrap();
        let h = HiddenString::build(&expr);
        assert_eq!(h.to_string(), "H___O WO__D");
        assert!(h.is_revealed(&expr, 'h'));
        assert!(h.is_revealed(&expr, 'o'));
        assert!(h.is_revealed(&expr, ' '));
        assert!(!h.is_revealed(&expr, 'l'));
    }

    #[test]
    fn is_revealed_separates_characters_sharing_a_glyph() {
        let expr = Expression::new("bir ılık").unwrap();
        let h = HiddenString::build(&expr);
        assert_eq!(h.to_string(), "B_R I_IK");
        assert!(h.is_revealed(&expr, 'ı'));
        assert!(!h.is_revealed(&expr, 'i'));
    }

    #[test]
    fn fully_revealed_at_build() {
        let expr = Expression::new("aa").unwrap();
        assert!(HiddenString::build(&expr).is_solved());
    }

    proptest! {
        #[test]
        fn build_preserves_word_shape(text in "[a-z]{1,8}( [a-z]{1,8}){0,4}") {
            let expr = Expression::new(&text).unwrap();
            let rendered = HiddenString::build(&expr).to_string();

            let source: Vec<usize> = expr.text().split(' ').map(str::len).collect();
            let masked: Vec<usize> = rendered.split(' ').map(str::len).collect();
            prop_assert_eq!(source, masked);
            prop_assert_eq!(rendered.len(), expr.len());
        }

        #[test]
        fn equal_characters_share_reveal_status(text in "[a-e]{1,6}( [a-e]{1,6}){0,4}") {
            let expr = Expression::new(&text).unwrap();
            let slots = HiddenString::build(&expr).slots().to_vec();
            let chars = expr.chars();

            for i in 0..chars.len() {
                for j in 0..chars.len() {
                    if chars[i] == chars[j] && matches!(slots[i], Slot::Revealed(_)) {
                        prop_assert!(matches!(slots[j], Slot::Revealed(_)));
                    }
                }
            }
        }
    }
}

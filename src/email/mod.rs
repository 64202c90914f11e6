//! Email sanitizing filter built on the generic engine.
//!
//! The filter recognizes a deliberately small token grammar, not RFC 5322:
//! runs of ASCII alphanumerics, at most one `@` reachable from the table,
//! and dots only between character runs after the `@`. Each character is
//! classified into a [`TokenClass`] and fed to the automaton; any character
//! outside the alphabet, or any step that lands on [`EmailState::Invalid`],
//! rejects the whole input by returning an empty string.
//!
//! Two oddities of the grammar are kept on purpose and pinned by tests:
//!
//! - `Accept` is in the accepting set but no rule ever produces it, so
//!   acceptance is never consulted; rejection is driven purely by reaching
//!   `Invalid`.
//! - A second `@` after the first has no table entry at all. Missing
//!   entries leave the cursor where it is, so the character passes through
//!   instead of rejecting the input.

use crate::builder::{FsmBuilder, TransitionRule};
use crate::core::{Fsm, State};
use crate::{state_enum, symbol_enum, transition_table};

symbol_enum! {
    /// Classification of one input character.
    pub enum TokenClass {
        /// ASCII letter or digit
        Char,
        /// Literal `@`
        At,
        /// Literal `.`
        Dot,
        /// Anything else; rejects the input outright
        Invalid,
    }
}

state_enum! {
    /// States of the email grammar automaton.
    pub enum EmailState {
        /// Nothing consumed yet
        Initial,
        /// Inside the character run before `@`
        Char,
        /// Just consumed the `@`
        At,
        /// Inside a character run after `@`
        CharAfterAt,
        /// Just consumed a dot after `@`
        DotAfterAt,
        /// Declared but unreachable; no rule references it
        DotAfterSecondDot,
        /// Nominal accepting state; no rule ever produces it
        Accept,
        /// Dead state; reaching it rejects the input
        Invalid,
    }
    dead: [Invalid]
}

/// Classify one character into its token symbol.
///
/// Stateless and pure: ASCII letters and digits are [`TokenClass::Char`],
/// `@` and `.` map to their own symbols, and everything else (including
/// non-ASCII letters) is [`TokenClass::Invalid`].
pub fn classify(ch: char) -> TokenClass {
    if ch.is_ascii_alphanumeric() {
        TokenClass::Char
    } else if ch == '@' {
        TokenClass::At
    } else if ch == '.' {
        TokenClass::Dot
    } else {
        TokenClass::Invalid
    }
}

/// The fixed email grammar table.
fn table() -> Vec<TransitionRule<EmailState, TokenClass>> {
    use self::EmailState as S;
    use self::TokenClass as T;

    transition_table! {
        // before the @
        (S::Initial, T::Char) => S::Char,
        (S::Initial, T::At) => S::Invalid,
        (S::Initial, T::Dot) => S::Invalid,
        (S::Char, T::Char) => S::Char,
        (S::Char, T::At) => S::At,
        (S::Char, T::Dot) => S::Invalid,
        // after the @
        (S::At, T::Char) => S::CharAfterAt,
        (S::CharAfterAt, T::Char) => S::CharAfterAt,
        (S::CharAfterAt, T::Dot) => S::DotAfterAt,
        (S::DotAfterAt, T::Char) => S::CharAfterAt,
        // dead ends
        (S::At, T::Dot) => S::Invalid,
        (S::DotAfterAt, T::Dot) => S::Invalid,
    }
}

/// Validating sanitizer for email-like strings.
///
/// Construction builds the fixed automaton once; [`filter`](Self::filter)
/// clones it per call, so one filter can serve any number of callers (or
/// threads) concurrently.
///
/// # Example
///
/// ```rust
/// use mailsift::email::EmailFilter;
///
/// let filter = EmailFilter::new();
/// assert_eq!(filter.filter("ab@cd.com"), "ab@cd.com");
/// assert_eq!(filter.filter("a.b@c"), "");
/// ```
pub struct EmailFilter {
    fsm: Fsm<EmailState, TokenClass>,
}

impl EmailFilter {
    /// Create a filter with the fixed email grammar table.
    ///
    /// Panics if the table fails validation; a malformed table is a bug in
    /// this module, not in caller data.
    pub fn new() -> Self {
        let fsm = FsmBuilder::new()
            .states([
                EmailState::Initial,
                EmailState::Char,
                EmailState::At,
                EmailState::CharAfterAt,
                EmailState::DotAfterAt,
                EmailState::DotAfterSecondDot,
                EmailState::Accept,
                EmailState::Invalid,
            ])
            .start(EmailState::Initial)
            .accepting(EmailState::Accept)
            .rules(table())
            .build()
            .expect("email transition table is well-formed");

        Self { fsm }
    }

    /// Sanitize one string.
    ///
    /// Returns the input unchanged if every character is consumed without
    /// the automaton reaching its dead state, and an empty string as soon
    /// as a character classifies as [`TokenClass::Invalid`] or a step lands
    /// on [`EmailState::Invalid`]. The accepting set is never consulted
    /// (see the module docs); an empty input trivially returns empty.
    pub fn filter(&self, input: &str) -> String {
        let mut fsm = self.fsm.clone();
        let mut buffer = String::with_capacity(input.len());

        for ch in input.chars() {
            let token = classify(ch);
            if token == TokenClass::Invalid {
                return String::new();
            }
            fsm.step(token);
            buffer.push(ch);
            if fsm.current_state().is_dead() {
                return String::new();
            }
        }
        buffer
    }
}

impl Default for EmailFilter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifier_maps_character_classes() {
        assert_eq!(classify('a'), TokenClass::Char);
        assert_eq!(classify('Z'), TokenClass::Char);
        assert_eq!(classify('7'), TokenClass::Char);
        assert_eq!(classify('@'), TokenClass::At);
        assert_eq!(classify('.'), TokenClass::Dot);
        assert_eq!(classify(' '), TokenClass::Invalid);
        assert_eq!(classify('-'), TokenClass::Invalid);
        assert_eq!(classify('é'), TokenClass::Invalid);
    }

    #[test]
    fn table_builds_cleanly() {
        // Construction must not panic.
        let _filter = EmailFilter::new();
    }

    #[test]
    fn well_formed_address_passes_unchanged() {
        let filter = EmailFilter::new();
        assert_eq!(filter.filter("ab@cd.com"), "ab@cd.com");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let filter = EmailFilter::new();
        assert_eq!(filter.filter(""), "");
    }

    #[test]
    fn dot_immediately_after_at_rejects() {
        let filter = EmailFilter::new();
        assert_eq!(filter.filter("ab@.com"), "");
    }

    #[test]
    fn dot_before_at_rejects() {
        let filter = EmailFilter::new();
        assert_eq!(filter.filter("a.b@c"), "");
    }

    #[test]
    fn leading_at_rejects() {
        let filter = EmailFilter::new();
        assert_eq!(filter.filter("@cd.com"), "");
    }

    #[test]
    fn leading_dot_rejects() {
        let filter = EmailFilter::new();
        assert_eq!(filter.filter(".ab@cd"), "");
    }

    #[test]
    fn consecutive_dots_after_at_reject() {
        let filter = EmailFilter::new();
        assert_eq!(filter.filter("ab@cd..com"), "");
    }

    #[test]
    fn space_rejects() {
        let filter = EmailFilter::new();
        assert_eq!(filter.filter("user name@x.com"), "");
    }

    #[test]
    fn out_of_alphabet_character_rejects_anywhere() {
        let filter = EmailFilter::new();
        assert_eq!(filter.filter("ab+cd@ef.com"), "");
        assert_eq!(filter.filter("ab@cd.com!"), "");
    }

    // Documented quirk, not endorsed email validation: a second '@' has no
    // table entry from CharAfterAt, the cursor stays put, and the character
    // is appended anyway.
    #[test]
    fn second_at_sign_passes_through_unchanged() {
        let filter = EmailFilter::new();
        assert_eq!(filter.filter("ab@@cd.com"), "ab@@cd.com");
    }

    // Companion quirk: the Accept state is never produced by the table, so
    // a bare local part never reaches it and is still returned verbatim.
    #[test]
    fn acceptance_is_never_consulted() {
        let filter = EmailFilter::new();
        assert_eq!(filter.filter("abc"), "abc");
        assert_eq!(filter.filter("ab@cd"), "ab@cd");
    }

    #[test]
    fn filter_is_reusable_across_calls() {
        let filter = EmailFilter::new();
        assert_eq!(filter.filter("a.b@c"), "");
        // A rejected run must not poison the next one.
        assert_eq!(filter.filter("ab@cd.com"), "ab@cd.com");
    }

    #[test]
    fn filter_is_idempotent() {
        let filter = EmailFilter::new();
        for input in ["ab@cd.com", "ab@.com", "", "a.b@c", "ab@@cd.com"] {
            let once = filter.filter(input);
            assert_eq!(filter.filter(&once), once);
        }
    }
}

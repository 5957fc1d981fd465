// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Composable single-character matchers.
//!
//! A [`Matcher`] is a pure predicate over one `char`. It evaluates (`matches`), renders
//! itself as canonical bracketed set notation (`render`), and emits an equivalent
//! boolean guard expression over the variable `ch` for generated code
//! (`emit_expression`). The serialized form lives in `format::document`.

use std::collections::BTreeSet;
use std::fmt;

/// A composable predicate over a single input character.
///
/// Construction is total; malformed shapes (empty alternatives, empty character sets,
/// inverted ranges) are caught by [`Matcher::validate`] during rule validation and
/// document loading, never inside the algebra.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matcher {
    /// Matches exactly one character.
    Literal(char),
    /// Matches every character in the inclusive range `lo..=hi`.
    Range(char, char),
    /// Matches any character contained in the set.
    Any(BTreeSet<char>),
    /// Matches every character the inner matcher rejects.
    Not(Box<Matcher>),
    /// Matches when any operand matches.
    Or(Vec<Matcher>),
    /// Matches characters of the base matcher minus the excluded matcher.
    Minus(Box<Matcher>, Box<Matcher>),
}

impl Matcher {
    pub fn literal(ch: char) -> Self {
        Self::Literal(ch)
    }

    pub fn range(lo: char, hi: char) -> Self {
        Self::Range(lo, hi)
    }

    pub fn any(chars: &str) -> Self {
        Self::Any(chars.chars().collect())
    }

    pub fn not(inner: Matcher) -> Self {
        Self::Not(Box::new(inner))
    }

    pub fn or(operands: Vec<Matcher>) -> Self {
        Self::Or(operands)
    }

    pub fn minus(base: Matcher, excluded: Matcher) -> Self {
        Self::Minus(Box::new(base), Box::new(excluded))
    }

    /// Evaluates the predicate. Pure and deterministic.
    pub fn matches(&self, ch: char) -> bool {
        match self {
            Self::Literal(expected) => ch == *expected,
            Self::Range(lo, hi) => ch >= *lo && ch <= *hi,
            Self::Any(chars) => chars.contains(&ch),
            Self::Not(inner) => !inner.matches(ch),
            Self::Or(operands) => operands.iter().any(|op| op.matches(ch)),
            Self::Minus(base, excluded) => base.matches(ch) && !excluded.matches(ch),
        }
    }

    /// Checks the shape constraints the constructors do not enforce.
    pub fn validate(&self) -> Result<(), MatcherIssue> {
        match self {
            Self::Literal(_) => Ok(()),
            Self::Range(lo, hi) => {
                if lo > hi {
                    return Err(MatcherIssue::InvertedRange { lo: *lo, hi: *hi });
                }
                Ok(())
            }
            Self::Any(chars) => {
                if chars.is_empty() {
                    return Err(MatcherIssue::EmptyCharSet);
                }
                Ok(())
            }
            Self::Not(inner) => inner.validate(),
            Self::Or(operands) => {
                if operands.is_empty() {
                    return Err(MatcherIssue::EmptyAlternatives);
                }
                for operand in operands {
                    operand.validate()?;
                }
                Ok(())
            }
            Self::Minus(base, excluded) => {
                base.validate()?;
                excluded.validate()
            }
        }
    }

    /// Canonical bracketed set notation, e.g. `[a-zA-Z0-9]`.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push('[');
        self.write_class_body(&mut out);
        out.push(']');
        out
    }

    /// An equivalent boolean guard expression over the variable `ch`.
    pub fn emit_expression(&self) -> String {
        match self {
            Self::Literal(expected) => format!("ch == '{}'", expected.escape_default()),
            Self::Range(lo, hi) => format!(
                "ch >= '{}' && ch <= '{}'",
                lo.escape_default(),
                hi.escape_default()
            ),
            Self::Any(chars) => {
                let mut out = String::new();
                for ch in chars {
                    if !out.is_empty() {
                        out.push_str(" || ");
                    }
                    out.push_str("ch == '");
                    out.extend(ch.escape_default());
                    out.push('\'');
                }
                out
            }
            Self::Not(inner) => format!("!({})", inner.emit_expression()),
            Self::Or(operands) => {
                let mut out = String::new();
                for operand in operands {
                    if !out.is_empty() {
                        out.push_str(" || ");
                    }
                    out.push('(');
                    out.push_str(&operand.emit_expression());
                    out.push(')');
                }
                out
            }
            Self::Minus(base, excluded) => format!(
                "({}) && !({})",
                base.emit_expression(),
                excluded.emit_expression()
            ),
        }
    }

    fn write_class_body(&self, out: &mut String) {
        match self {
            Self::Literal(ch) => write_class_char(*ch, out),
            Self::Range(lo, hi) => {
                write_class_char(*lo, out);
                out.push('-');
                write_class_char(*hi, out);
            }
            Self::Any(chars) => {
                for ch in chars {
                    write_class_char(*ch, out);
                }
            }
            Self::Not(inner) => {
                out.push('^');
                inner.write_class_body(out);
            }
            Self::Or(operands) => {
                // A negated operand keeps its own brackets so the notation stays
                // unambiguous, e.g. [a-z[^0-9]].
                for operand in operands {
                    if matches!(operand, Self::Not(_)) {
                        out.push_str(&operand.render());
                    } else {
                        operand.write_class_body(out);
                    }
                }
            }
            Self::Minus(base, excluded) => {
                base.write_class_body(out);
                out.push_str("&&[^");
                excluded.write_class_body(out);
                out.push(']');
            }
        }
    }
}

fn write_class_char(ch: char, out: &mut String) {
    match ch {
        '\n' => out.push_str("\\n"),
        '\r' => out.push_str("\\r"),
        '\t' => out.push_str("\\t"),
        '\\' | '[' | ']' | '-' | '^' => {
            out.push('\\');
            out.push(ch);
        }
        _ => out.push(ch),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatcherIssue {
    EmptyAlternatives,
    EmptyCharSet,
    InvertedRange { lo: char, hi: char },
}

impl fmt::Display for MatcherIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyAlternatives => f.write_str("matcher alternatives must not be empty"),
            Self::EmptyCharSet => f.write_str("matcher character set must not be empty"),
            Self::InvertedRange { lo, hi } => write!(
                f,
                "matcher range is inverted: '{}' > '{}'",
                lo.escape_default(),
                hi.escape_default()
            ),
        }
    }
}

impl std::error::Error for MatcherIssue {}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{Matcher, MatcherIssue};

    const SAMPLE: &str = "abcmzAMZ059 _-\t\n\\[]^&.!";

    fn letters_or_digits() -> Matcher {
        Matcher::or(vec![
            Matcher::range('a', 'z'),
            Matcher::range('A', 'Z'),
            Matcher::range('0', '9'),
        ])
    }

    #[rstest]
    #[case(Matcher::literal('a'), 'a', true)]
    #[case(Matcher::literal('a'), 'b', false)]
    #[case(Matcher::range('0', '9'), '5', true)]
    #[case(Matcher::range('0', '9'), 'a', false)]
    #[case(Matcher::any("xyz"), 'y', true)]
    #[case(Matcher::any("xyz"), 'w', false)]
    #[case(Matcher::not(Matcher::range('0', '9')), 'a', true)]
    #[case(Matcher::not(Matcher::range('0', '9')), '7', false)]
    #[case(Matcher::minus(Matcher::range('a', 'z'), Matcher::any("aeiou")), 'b', true)]
    #[case(Matcher::minus(Matcher::range('a', 'z'), Matcher::any("aeiou")), 'e', false)]
    fn matches_follows_set_semantics(
        #[case] matcher: Matcher,
        #[case] ch: char,
        #[case] expected: bool,
    ) {
        assert_eq!(matcher.matches(ch), expected);
    }

    #[test]
    fn matches_is_deterministic_across_repeated_calls() {
        let matcher = Matcher::minus(letters_or_digits(), Matcher::any("aeiou"));
        for ch in SAMPLE.chars() {
            let first = matcher.matches(ch);
            for _ in 0..3 {
                assert_eq!(matcher.matches(ch), first);
            }
        }
    }

    #[test]
    fn or_matches_is_the_disjunction_of_its_operands() {
        let a = Matcher::range('a', 'm');
        let b = Matcher::not(Matcher::any("0123456789"));
        let c = Matcher::minus(Matcher::range('0', '9'), Matcher::any("05"));
        let or = Matcher::or(vec![a.clone(), b.clone(), c.clone()]);

        for ch in SAMPLE.chars() {
            let expected = a.matches(ch) || b.matches(ch) || c.matches(ch);
            assert_eq!(or.matches(ch), expected, "mismatch for {ch:?}");
        }
    }

    #[test]
    fn render_concatenates_or_operand_interiors() {
        assert_eq!(letters_or_digits().render(), "[a-zA-Z0-9]");
    }

    #[test]
    fn render_keeps_brackets_of_negated_or_operands() {
        let or = Matcher::or(vec![
            Matcher::range('a', 'z'),
            Matcher::not(Matcher::range('0', '9')),
        ]);
        assert_eq!(or.render(), "[a-z[^0-9]]");

        let leading = Matcher::or(vec![
            Matcher::not(Matcher::range('0', '9')),
            Matcher::range('a', 'z'),
        ]);
        assert_eq!(leading.render(), "[[^0-9]a-z]");
    }

    #[rstest]
    #[case(Matcher::literal('a'), "[a]")]
    #[case(Matcher::range('0', '9'), "[0-9]")]
    #[case(Matcher::any("abc"), "[abc]")]
    #[case(Matcher::not(Matcher::any("abc")), "[^abc]")]
    #[case(
        Matcher::minus(Matcher::range('a', 'z'), Matcher::any("aeiou")),
        "[a-z&&[^aeiou]]"
    )]
    #[case(Matcher::any("\t\n-]"), "[\\t\\n\\-\\]]")]
    fn render_produces_canonical_notation(#[case] matcher: Matcher, #[case] expected: &str) {
        assert_eq!(matcher.render(), expected);
    }

    #[rstest]
    #[case(Matcher::literal('a'), "ch == 'a'")]
    #[case(Matcher::literal('\n'), "ch == '\\n'")]
    #[case(Matcher::range('a', 'z'), "ch >= 'a' && ch <= 'z'")]
    #[case(Matcher::any("ab"), "ch == 'a' || ch == 'b'")]
    #[case(Matcher::not(Matcher::literal('x')), "!(ch == 'x')")]
    #[case(
        Matcher::or(vec![Matcher::range('a', 'z'), Matcher::literal('_')]),
        "(ch >= 'a' && ch <= 'z') || (ch == '_')"
    )]
    #[case(
        Matcher::minus(Matcher::range('a', 'z'), Matcher::any("aeiou")),
        "(ch >= 'a' && ch <= 'z') && !(ch == 'a' || ch == 'e' || ch == 'i' || ch == 'o' || ch == 'u')"
    )]
    fn emit_expression_produces_equivalent_guards(
        #[case] matcher: Matcher,
        #[case] expected: &str,
    ) {
        assert_eq!(matcher.emit_expression(), expected);
    }

    #[test]
    fn validate_rejects_malformed_shapes() {
        assert_eq!(
            Matcher::or(Vec::new()).validate(),
            Err(MatcherIssue::EmptyAlternatives)
        );
        assert_eq!(Matcher::any("").validate(), Err(MatcherIssue::EmptyCharSet));
        assert_eq!(
            Matcher::range('z', 'a').validate(),
            Err(MatcherIssue::InvertedRange { lo: 'z', hi: 'a' })
        );

        let nested = Matcher::not(Matcher::or(vec![
            Matcher::literal('a'),
            Matcher::minus(Matcher::range('9', '0'), Matcher::literal('x')),
        ]));
        assert_eq!(
            nested.validate(),
            Err(MatcherIssue::InvertedRange { lo: '9', hi: '0' })
        );
    }

    #[test]
    fn validate_accepts_well_formed_trees() {
        let matcher = Matcher::or(vec![
            letters_or_digits(),
            Matcher::not(Matcher::any(" \t")),
            Matcher::minus(Matcher::range('0', '9'), Matcher::literal('0')),
        ]);
        assert_eq!(matcher.validate(), Ok(()));
    }
}

//- Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::charclass::CharClass;
use crate::error::Error;
use crate::length::Length;
use crate::node::Regex;
use crate::rng::Rng;

/// A fixed string, optionally matched/generated case-insensitively.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LiteralNode {
    pub(crate) text: String,
    pub(crate) case_insensitive: bool,
}

impl LiteralNode {
    pub(crate) fn min_length(&self) -> u32 {
        self.text.chars().count() as u32
    }

    pub(crate) fn max_length(&self) -> Length {
        Length::Finite(self.min_length())
    }

    /// One boolean is drawn per character position when case-insensitive,
    /// flipping the case of ASCII letters on `true`; otherwise the whole
    /// literal consumes exactly one boolean, to keep downstream RNG state
    /// identical in shape between the two paths.
    pub(crate) fn generate(
        &self,
        rng: &Rng,
        budget: u32,
    ) -> Result<(Rng, String), Error> {
        let min_length = self.min_length();
        if budget < min_length {
            return Err(Error::BudgetTooSmall { budget, min_length });
        }
        if self.case_insensitive {
            let mut cur = rng.clone();
            let mut out = String::with_capacity(self.text.len());
            for ch in self.text.chars() {
                let (next, flip) = cur.gen_bool();
                cur = next;
                if flip && ch.is_ascii_alphabetic() {
                    out.push(flip_ascii_case(ch));
                } else {
                    out.push(ch);
                }
            }
            Ok((cur, out))
        } else {
            let (next, _burned) = rng.gen_bool();
            Ok((next, self.text.clone()))
        }
    }

    pub(crate) fn test(&self, input: &str) -> bool {
        if self.case_insensitive {
            input.eq_ignore_ascii_case(&self.text)
        } else {
            input == self.text
        }
    }

    /// Structural, not Boolean, complement: each position negates to a
    /// complemented singleton class and the positions are re-concatenated.
    /// Since `Concat` requires every child to accept, the result accepts
    /// same-length strings that differ from `text` at *every* position,
    /// not strings that merely differ somewhere.
    pub(crate) fn negate(&self) -> Regex {
        if self.text.is_empty() {
            return Regex::literal(String::new(), false);
        }
        let children = self
            .text
            .chars()
            .map(|c| Regex::char_class(CharClass::enumerated(vec![c]).negated()))
            .collect();
        Regex::concat(children)
    }
}

fn flip_ascii_case(c: char) -> char {
    if c.is_ascii_uppercase() {
        c.to_ascii_lowercase()
    } else {
        c.to_ascii_uppercase()
    }
}

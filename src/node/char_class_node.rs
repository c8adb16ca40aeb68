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

/// Wraps a [`CharClass`] as a regex of length exactly 1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharClassNode {
    pub(crate) set: CharClass,
}

impl CharClassNode {
    pub(crate) fn min_length(&self) -> u32 {
        1
    }

    pub(crate) fn max_length(&self) -> Length {
        Length::Finite(1)
    }

    pub(crate) fn generate(
        &self,
        rng: &Rng,
        budget: u32,
    ) -> Result<(Rng, String), Error> {
        if budget < 1 {
            return Err(Error::BudgetTooSmall { budget, min_length: 1 });
        }
        let (next, seed) = rng.gen_long();
        Ok((next, self.set.sample(seed).to_string()))
    }

    pub(crate) fn test(&self, input: &str) -> bool {
        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self.set.contains(c),
            _ => false,
        }
    }

    pub(crate) fn negate(&self) -> Regex {
        Regex::char_class(self.set.clone().negated())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::rng::Rng;

    #[test]
    fn generate_always_has_length_one() {
        let node = Regex::char_class(CharClass::ascii_alpha());
        for seed in 0..64u64 {
            let (_, s) = node.generate(&Rng::from_seed(seed));
            assert_eq!(1, s.chars().count());
            assert!(node.test(&s));
        }
    }

    #[test]
    fn test_rejects_multi_character_input() {
        let node = Regex::char_class(CharClass::ascii_alpha());
        assert!(!node.test("ab"));
        assert!(!node.test(""));
    }

    #[test]
    fn negate_rejects_members_of_the_original_class() {
        let node = Regex::char_class(CharClass::range('a', 'z'));
        let negated = node.negate();
        assert!(!negated.test("m"));
        assert!(negated.test("M"));
    }
}

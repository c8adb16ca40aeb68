//- Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::error::Error;
use crate::length::Length;
use crate::node::Regex;
use crate::rng::Rng;

/// Imposes a generation-only upper bound on `child`'s output length.
/// Does not tighten acceptance: `test` delegates straight through.
#[derive(Clone, Debug)]
pub struct SizedNode {
    pub(crate) child: Box<Regex>,
    pub(crate) size: u32,
}

impl SizedNode {
    pub(crate) fn min_length(&self) -> u32 {
        self.child.min_length().min(self.size)
    }

    pub(crate) fn max_length(&self) -> Length {
        Length::Finite(self.child.max_length().clamp(self.size))
    }

    pub(crate) fn generate(
        &self,
        rng: &Rng,
        _budget: u32,
    ) -> Result<(Rng, String), Error> {
        let budget = match self.max_length() {
            Length::Finite(n) => n,
            Length::Infinite => unreachable!("Sized::max_length is always finite"),
        };
        self.child.generate_with_budget(rng, budget)
    }

    pub(crate) fn test(&self, input: &str) -> bool {
        self.child.test(input)
    }

    pub(crate) fn negate(&self) -> Regex {
        Regex::Sized(SizedNode {
            child: Box::new(self.child.negate()),
            size: self.size,
        })
    }

    pub(crate) fn simplify(&self) -> Regex {
        let child = self.child.simplify();
        if let Regex::Sized(inner) = child {
            Regex::Sized(SizedNode {
                child: inner.child,
                size: self.size.min(inner.size),
            })
        } else {
            Regex::Sized(SizedNode {
                child: Box::new(child),
                size: self.size,
            })
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::rng::Rng;

    #[test]
    fn generate_never_exceeds_size() {
        let node = Regex::literal("a", false)
            .quantify(0, Length::Infinite, crate::QuantifierType::Greedy)
            .unwrap()
            .sized(5)
            .unwrap();
        for seed in 0..64u64 {
            let (_, s) = node.generate(&Rng::from_seed(seed));
            assert!(s.chars().count() <= 5);
        }
    }

    #[test]
    fn test_does_not_tighten_acceptance() {
        let node = Regex::literal("aaaaaaaa", false).sized(3);
        assert!(node.is_err());
        let node = Regex::literal("a", false)
            .quantify(0, Length::Infinite, crate::QuantifierType::Greedy)
            .unwrap()
            .sized(2)
            .unwrap();
        assert!(node.test("aaaaaa"));
    }

    #[test]
    fn nested_sized_collapses_to_the_tighter_bound() {
        let node = Regex::literal("a", false)
            .quantify(0, Length::Infinite, crate::QuantifierType::Greedy)
            .unwrap()
            .sized(10)
            .unwrap()
            .sized(3)
            .unwrap();
        let simplified = node.simplify();
        if let Regex::Sized(s) = &simplified {
            assert_eq!(3, s.size);
        } else {
            panic!("expected a Sized node after simplify");
        }
    }
}

//- Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::collections::BTreeSet;

use crate::error::Error;
use crate::length::Length;
use crate::node::position_set;
use crate::node::Regex;
use crate::rng::Rng;

/// How a quantifier renders (`?`/`+` suffix); does not alter generation
/// or matching semantics in this algebra.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum QuantifierType {
    /// `{m,n}` with no suffix.
    Greedy,
    /// `{m,n}?`.
    Reluctant,
    /// `{m,n}+`.
    Possessive,
}

/// Repeats `child` between `min` and `max` times.
#[derive(Clone, Debug)]
pub struct QuantifiedNode {
    pub(crate) child: Box<Regex>,
    pub(crate) min: u32,
    pub(crate) max: Length,
    pub(crate) qtype: QuantifierType,
}

impl QuantifiedNode {
    pub(crate) fn min_length(&self) -> u32 {
        self.child.min_length().saturating_mul(self.min)
    }

    pub(crate) fn max_length(&self) -> Length {
        match self.max {
            Length::Infinite => Length::Infinite,
            Length::Finite(max) => match self.child.max_length() {
                Length::Infinite => Length::Infinite,
                Length::Finite(child_max) => Length::Finite(child_max.saturating_mul(max)),
            },
        }
    }

    pub(crate) fn generate(
        &self,
        rng: &Rng,
        budget: u32,
    ) -> Result<(Rng, String), Error> {
        let min_length = self.min_length();
        if budget < min_length {
            return Err(Error::BudgetTooSmall { budget, min_length });
        }
        let child_min = self.child.min_length();
        let mut remaining = budget - min_length;
        let mut cur = rng.clone();
        let mut out = String::new();
        let mut count = 0u32;

        for _ in 0..self.min {
            let child_budget = remaining + child_min;
            let (next, part) = self.child.generate_with_budget(&cur, child_budget)?;
            cur = next;
            let produced = part.chars().count() as u32;
            remaining = remaining.saturating_sub(produced.saturating_sub(child_min));
            out.push_str(&part);
            count += 1;
        }

        loop {
            let under_max = match self.max {
                Length::Infinite => true,
                Length::Finite(max) => count < max,
            };
            if !under_max || remaining < child_min {
                break;
            }
            let (next, go_again) = cur.gen_bool();
            cur = next;
            if !go_again {
                break;
            }
            let child_budget = remaining + child_min;
            let (next, part) = self.child.generate_with_budget(&cur, child_budget)?;
            cur = next;
            let produced = part.chars().count() as u32;
            remaining = remaining.saturating_sub(produced.saturating_sub(child_min));
            out.push_str(&part);
            count += 1;
        }

        Ok((cur, out))
    }

    /// Mandatory repetitions walk the position set like `Concat`; optional
    /// ones extend it to a fixed point (explicit no-new-positions check,
    /// not an iteration cap) for `max = ∞`, or up to `max` repetitions
    /// otherwise.
    pub(crate) fn test(&self, input: &str) -> bool {
        let chars: Vec<char> = input.chars().collect();
        let mut positions: BTreeSet<usize> = BTreeSet::new();
        positions.insert(0);
        for _ in 0..self.min {
            positions = position_set::advance(&self.child, &positions, &chars);
            if positions.is_empty() {
                return false;
            }
        }

        let mut reachable = positions.clone();
        let mut frontier = positions;
        let mut extra_remaining = match self.max {
            Length::Infinite => None,
            Length::Finite(max) => Some(max.saturating_sub(self.min)),
        };
        loop {
            if let Some(0) = extra_remaining {
                break;
            }
            let next = position_set::advance(&self.child, &frontier, &chars);
            let newly: Vec<usize> =
                next.iter().copied().filter(|p| !reachable.contains(p)).collect();
            if newly.is_empty() {
                break;
            }
            reachable.extend(newly);
            frontier = next;
            if let Some(n) = extra_remaining.as_mut() {
                *n -= 1;
            }
        }
        reachable.contains(&chars.len())
    }

    /// See the table in spec §4.6; arms are evaluated in priority order
    /// so `(0, ∞)`/`(1, ∞)` are matched before the general `(m, ∞)` arm.
    pub(crate) fn negate(&self) -> Regex {
        if is_empty_language(&self.child) {
            return Regex::literal(String::new(), false);
        }
        let qtype = self.qtype;
        match (self.min, self.max) {
            (0, Length::Infinite) => self.child.negate(),
            (1, Length::Infinite) => quantify_unchecked(&self.child, 0, Length::Finite(0), qtype),
            (0, Length::Finite(k)) => {
                quantify_unchecked(&self.child, k + 1, Length::Infinite, qtype)
            }
            (m, Length::Infinite) => {
                quantify_unchecked(&self.child, 0, Length::Finite(m - 1), qtype)
            }
            (m, Length::Finite(k)) => Regex::union(vec![
                quantify_unchecked(&self.child, 0, Length::Finite(m - 1), qtype),
                quantify_unchecked(&self.child, k + 1, Length::Infinite, qtype),
            ]),
        }
    }

    pub(crate) fn simplify(&self) -> Regex {
        let child = self.child.simplify();
        if is_empty_language(&child) {
            return Regex::literal(String::new(), false);
        }
        if self.min == 1 && self.max == Length::Finite(1) {
            return child;
        }
        Regex::Quantified(QuantifiedNode {
            child: Box::new(child),
            min: self.min,
            max: self.max,
            qtype: self.qtype,
        })
    }
}

fn quantify_unchecked(child: &Regex, min: u32, max: Length, qtype: QuantifierType) -> Regex {
    child
        .quantify(min, max, qtype)
        .expect("negate-derived ranges always satisfy min <= max")
}

/// This algebra has no direct bottom (∅) node; the only recognizable way
/// to construct one is an `Intersection` of two disjoint `CharClassNode`s.
/// A narrow, structural check — not a general emptiness oracle.
pub(crate) fn is_empty_language(node: &Regex) -> bool {
    if let Regex::Intersection(inter) = node {
        if let [Regex::CharClass(a), Regex::CharClass(b)] = inter.children.as_slice() {
            return crate::charclass::intersect_enum(&a.set, &b.set).is_empty();
        }
    }
    false
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::rng::Rng;

    #[test]
    fn zero_quantification_generates_empty_string() {
        let node = Regex::literal("a", false)
            .quantify(0, Length::Finite(0), QuantifierType::Greedy)
            .unwrap();
        let (_, s) = node.generate(&Rng::from_seed(5));
        assert_eq!("", s);
    }

    #[test]
    fn length_bounds_are_multiplicative() {
        let node = Regex::literal("ab", false)
            .quantify(2, Length::Finite(4), QuantifierType::Greedy)
            .unwrap();
        assert_eq!(4, node.min_length());
        assert_eq!(Length::Finite(8), node.max_length());
    }

    #[test]
    fn generate_respects_min_and_max_repetitions() {
        let node = Regex::literal("a", false)
            .quantify(2, Length::Finite(5), QuantifierType::Greedy)
            .unwrap();
        for seed in 0..128u64 {
            let (_, s) = node.generate(&Rng::from_seed(seed));
            assert!(s.len() >= 2 && s.len() <= 5);
            assert!(s.chars().all(|c| c == 'a'));
            assert!(node.test(&s));
        }
    }

    #[test]
    fn double_quantification_matches_single_product_quantification() {
        let base = Regex::literal("a", false);
        let product = base
            .quantify(6, Length::Finite(6), QuantifierType::Greedy)
            .unwrap();
        let nested = base
            .quantify(2, Length::Finite(2), QuantifierType::Greedy)
            .unwrap()
            .quantify(3, Length::Finite(3), QuantifierType::Greedy)
            .unwrap();
        let rng = Rng::from_seed(17);
        assert_eq!(product.generate(&rng).1, nested.generate(&rng).1);
    }

    #[test]
    fn negate_of_star_is_plain_negation() {
        let node = Regex::literal("a", false)
            .quantify(0, Length::Infinite, QuantifierType::Greedy)
            .unwrap();
        let negated = node.negate();
        assert!(negated.test("b"));
        assert!(!negated.test("a"));
    }

    #[test]
    fn negate_of_plus_is_zero_repetitions() {
        let node = Regex::literal("a", false)
            .quantify(1, Length::Infinite, QuantifierType::Greedy)
            .unwrap();
        let negated = node.negate();
        assert!(negated.test(""));
        assert!(!negated.test("a"));
    }
}

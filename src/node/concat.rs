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

/// An ordered, non-empty sequence of regexes matched back to back.
#[derive(Clone, Debug)]
pub struct ConcatNode {
    pub(crate) children: Vec<Regex>,
}

impl ConcatNode {
    pub(crate) fn min_length(&self) -> u32 {
        self.children
            .iter()
            .map(Regex::min_length)
            .fold(0u32, |acc, n| acc.saturating_add(n))
    }

    pub(crate) fn max_length(&self) -> Length {
        self.children
            .iter()
            .map(Regex::max_length)
            .fold(Length::Finite(0), Length::add)
    }

    /// Slack is consumed greedily in child order: each child is granted
    /// `slack + child.min_length`, and whatever it doesn't spend is
    /// carried forward to the next child.
    pub(crate) fn generate(
        &self,
        rng: &Rng,
        budget: u32,
    ) -> Result<(Rng, String), Error> {
        let min_length = self.min_length();
        if budget < min_length {
            return Err(Error::BudgetTooSmall { budget, min_length });
        }
        let mut slack = budget - min_length;
        let mut cur = rng.clone();
        let mut out = String::new();
        for child in &self.children {
            let child_min = child.min_length();
            let child_budget = slack + child_min;
            let (next, part) = child.generate_with_budget(&cur, child_budget)?;
            cur = next;
            let produced = part.chars().count() as u32;
            slack = slack.saturating_sub(produced.saturating_sub(child_min));
            out.push_str(&part);
        }
        Ok((cur, out))
    }

    pub(crate) fn test(&self, input: &str) -> bool {
        let chars: Vec<char> = input.chars().collect();
        let mut positions: BTreeSet<usize> = BTreeSet::new();
        positions.insert(0);
        for child in &self.children {
            positions = position_set::advance(child, &positions, &chars);
            if positions.is_empty() {
                return false;
            }
        }
        positions.contains(&chars.len())
    }

    /// Not the Boolean complement: each child is negated structurally and
    /// re-concatenated, so the negation accepts only when *every* child's
    /// negation holds against its own slice, not when just one does.
    /// Degenerate zero-length children are dropped first since negating
    /// them contributes nothing but noise to the result.
    pub(crate) fn negate(&self) -> Regex {
        let negated: Vec<Regex> = self
            .children
            .iter()
            .filter(|c| !is_degenerate_empty(c))
            .map(Regex::negate)
            .collect();
        if negated.is_empty() {
            return Regex::literal(String::new(), false);
        }
        Regex::concat(negated)
    }

    pub(crate) fn simplify(&self) -> Regex {
        let mut flat = Vec::with_capacity(self.children.len());
        for child in &self.children {
            let child = child.simplify();
            match child {
                Regex::Concat(inner) => flat.extend(inner.children),
                other if is_degenerate_empty(&other) => {}
                other => flat.push(other),
            }
        }
        match flat.len() {
            0 => Regex::literal(String::new(), false),
            1 => flat.into_iter().next().unwrap(),
            _ => Regex::concat(flat),
        }
    }
}

fn is_degenerate_empty(node: &Regex) -> bool {
    node.min_length() == 0 && node.max_length() == Length::Finite(0)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::rng::Rng;

    #[test]
    fn length_bounds_are_additive() {
        let node = Regex::concat(vec![
            Regex::literal("ab", false),
            Regex::literal("xyz", false),
        ]);
        assert_eq!(5, node.min_length());
        assert_eq!(Length::Finite(5), node.max_length());
    }

    #[test]
    fn generate_then_test_round_trips() {
        let node = Regex::concat(vec![
            Regex::literal("ab", false),
            Regex::literal("xyz", false),
        ]);
        let (_, s) = node.generate(&Rng::from_seed(3));
        assert_eq!("abxyz", s);
        assert!(node.test(&s));
    }

    #[test]
    fn test_rejects_wrong_total_length() {
        let node = Regex::concat(vec![
            Regex::literal("ab", false),
            Regex::literal("xyz", false),
        ]);
        assert!(!node.test("ab"));
        assert!(!node.test("abxyzz"));
    }

    #[test]
    fn simplify_flattens_and_drops_empties() {
        let node = Regex::concat(vec![
            Regex::concat(vec![Regex::literal("a", false), Regex::literal("", false)]),
            Regex::literal("b", false),
        ]);
        let simplified = node.simplify();
        assert_eq!("ab", simplified.to_regex_string());
    }
}

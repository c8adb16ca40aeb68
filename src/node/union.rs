//- Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::error::Error;
use crate::length::Length;
use crate::node::Regex;
use crate::rng::Rng;

/// Alternation: matches whatever any one child matches.
#[derive(Clone, Debug)]
pub struct UnionNode {
    pub(crate) children: Vec<Regex>,
}

impl UnionNode {
    pub(crate) fn min_length(&self) -> u32 {
        self.children
            .iter()
            .map(Regex::min_length)
            .min()
            .unwrap_or(0)
    }

    pub(crate) fn max_length(&self) -> Length {
        self.children
            .iter()
            .map(Regex::max_length)
            .fold(Length::Finite(0), Length::max_absorbing)
    }

    pub(crate) fn generate(
        &self,
        rng: &Rng,
        budget: u32,
    ) -> Result<(Rng, String), Error> {
        let fit: Vec<&Regex> = self
            .children
            .iter()
            .filter(|c| c.min_length() <= budget)
            .collect();
        if fit.is_empty() {
            return Err(Error::BudgetTooSmall {
                budget,
                min_length: self.min_length(),
            });
        }
        let (next, idx) = rng.gen_int(fit.len() as u32);
        fit[idx as usize].generate_with_budget(&next, budget)
    }

    pub(crate) fn test(&self, input: &str) -> bool {
        self.children.iter().any(|c| c.test(input))
    }

    /// De Morgan: the complement of an alternation is the intersection of
    /// the complements.
    pub(crate) fn negate(&self) -> Regex {
        Regex::intersection(self.children.iter().map(Regex::negate).collect())
    }

    pub(crate) fn simplify(&self) -> Regex {
        let mut seen: Vec<Regex> = Vec::with_capacity(self.children.len());
        for child in &self.children {
            let child = child.simplify();
            match child {
                Regex::Union(inner) => {
                    for c in inner.children {
                        if !seen.iter().any(|s| structurally_equal(s, &c)) {
                            seen.push(c);
                        }
                    }
                }
                other => {
                    if !seen.iter().any(|s| structurally_equal(s, &other)) {
                        seen.push(other);
                    }
                }
            }
        }
        if seen.len() == 1 {
            seen.into_iter().next().unwrap()
        } else {
            Regex::union(seen)
        }
    }
}

fn structurally_equal(a: &Regex, b: &Regex) -> bool {
    a.to_regex_string() == b.to_regex_string()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::rng::Rng;

    #[test]
    fn length_bounds_span_all_children() {
        let node = Regex::union(vec![
            Regex::literal("a", false),
            Regex::literal("xyz", false),
        ]);
        assert_eq!(1, node.min_length());
        assert_eq!(Length::Finite(3), node.max_length());
    }

    #[test]
    fn generate_only_produces_a_child() {
        let node = Regex::union(vec![
            Regex::literal("foo", false),
            Regex::literal("bar", false),
        ]);
        for seed in 0..64u64 {
            let (_, s) = node.generate(&Rng::from_seed(seed));
            assert!(s == "foo" || s == "bar");
        }
    }

    #[test]
    fn test_matches_iff_any_child_matches() {
        let node = Regex::union(vec![
            Regex::literal("foo", false),
            Regex::literal("bar", false),
        ]);
        assert!(node.test("foo"));
        assert!(node.test("bar"));
        assert!(!node.test("baz"));
    }

    #[test]
    fn simplify_drops_duplicates() {
        let node = Regex::union(vec![
            Regex::literal("a", false),
            Regex::literal("a", false),
            Regex::literal("b", false),
        ]);
        if let Regex::Union(u) = node.simplify() {
            assert_eq!(2, u.children.len());
        } else {
            panic!("expected a Union after simplify");
        }
    }
}

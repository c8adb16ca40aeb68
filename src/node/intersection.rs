//- Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::error::Error;
use crate::length::Length;
use crate::node::Regex;
use crate::rng::Rng;

/// Bounded attempt cap for `Intersection::generate`'s reject-sampling
/// loop. A principled alternative (DFA intersection construction) is out
/// of scope; this is a deliberate, documented trade-off, not a bug to
/// silently raise without limit.
const MAX_ATTEMPTS: u32 = 100;

/// Conjunctive matching: matches whatever every child matches.
#[derive(Clone, Debug)]
pub struct IntersectionNode {
    pub(crate) children: Vec<Regex>,
}

impl IntersectionNode {
    pub(crate) fn min_length(&self) -> u32 {
        self.children.iter().map(Regex::min_length).max().unwrap_or(0)
    }

    pub(crate) fn max_length(&self) -> Length {
        self.children
            .iter()
            .map(Regex::max_length)
            .fold(Length::Infinite, Length::min_ignoring_infinite)
    }

    /// Generates from the first child and rejects until every other
    /// child also accepts, bounded by `MAX_ATTEMPTS`. Explicitly
    /// probabilistic and incomplete — an intersection that's extremely
    /// sparse (or empty) can exhaust the cap even though the language
    /// may be non-empty.
    pub(crate) fn generate(
        &self,
        rng: &Rng,
        budget: u32,
    ) -> Result<(Rng, String), Error> {
        let first = &self.children[0];
        let rest = &self.children[1..];
        let mut cur = rng.clone();
        for _ in 0..MAX_ATTEMPTS {
            let (next, candidate) = first.generate_with_budget(&cur, budget)?;
            cur = next;
            if rest.iter().all(|c| c.test(&candidate)) {
                return Ok((cur, candidate));
            }
        }
        Err(Error::IntersectionExhausted {
            attempts: MAX_ATTEMPTS,
        })
    }

    pub(crate) fn test(&self, input: &str) -> bool {
        self.children.iter().all(|c| c.test(input))
    }

    /// Structural mirror of `Union::negate`'s De Morgan law, but
    /// deliberately asymmetric: only `children[1..]` are negated, while
    /// the first child is carried through unchanged. The result is
    /// `Intersection(first, ¬children[1], ¬children[2], …)`, not the true
    /// Boolean complement of the whole intersection. Kept verbatim rather
    /// than "fixed" into a symmetric De Morgan form.
    pub(crate) fn negate(&self) -> Regex {
        let mut negated: Vec<Regex> = Vec::with_capacity(self.children.len());
        negated.push(self.children[0].clone());
        negated.extend(self.children[1..].iter().map(Regex::negate));
        Regex::intersection(negated)
    }

    pub(crate) fn simplify(&self) -> Regex {
        Regex::intersection(self.children.iter().map(Regex::simplify).collect())
    }
}

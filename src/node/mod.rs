//- Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The closed regex node algebra: a tagged union over the seven node
//! kinds, with one file per kind holding its `min_length`/`max_length`/
//! `generate`/`test`/`negate`/`simplify` logic. This module owns the
//! public `Regex` type and just dispatches into those files.

mod char_class_node;
mod concat;
mod intersection;
mod literal;
mod position_set;
mod quantified;
mod sized;
mod union;

pub use char_class_node::CharClassNode;
pub use concat::ConcatNode;
pub use intersection::IntersectionNode;
pub use literal::LiteralNode;
pub use quantified::{QuantifiedNode, QuantifierType};
pub use sized::SizedNode;
pub use union::UnionNode;

use crate::charclass::CharClass;
use crate::error::Error;
use crate::length::Length;
use crate::rng::Rng;

/// Budget used by the zero-argument `generate` when a node's
/// `max_length` is `∞`. Required by spec to be at least `2^31 - 2`.
const UNBOUNDED_GENERATE_BUDGET: u32 = 2_147_483_646;

/// A node in the regex algebra. Immutable, tree-shaped, freely shareable
/// — no node owns heap state outside its children, and there are no
/// cycles or shared mutable state.
#[derive(Clone, Debug)]
pub enum Regex {
    /// A fixed string.
    Literal(LiteralNode),
    /// A single character drawn from a [`CharClass`].
    CharClass(CharClassNode),
    /// An ordered sequence matched back to back.
    Concat(ConcatNode),
    /// An alternation: matches whatever any child matches.
    Union(UnionNode),
    /// A conjunction: matches whatever every child matches.
    Intersection(IntersectionNode),
    /// A bounded repetition of a child.
    Quantified(QuantifiedNode),
    /// A generation-only upper bound on a child's output length.
    Sized(SizedNode),
}

impl Regex {
    /// A fixed string, optionally matched/generated case-insensitively.
    pub fn literal(text: impl Into<String>, case_insensitive: bool) -> Regex {
        Regex::Literal(LiteralNode {
            text: text.into(),
            case_insensitive,
        })
    }

    /// A single character drawn from `set`.
    pub fn char_class(set: CharClass) -> Regex {
        Regex::CharClass(CharClassNode { set })
    }

    /// An ordered, non-empty sequence matched back to back.
    pub fn concat(children: Vec<Regex>) -> Regex {
        debug_assert!(!children.is_empty(), "Concat requires at least one child");
        Regex::Concat(ConcatNode { children })
    }

    /// A non-empty alternation.
    pub fn union(children: Vec<Regex>) -> Regex {
        debug_assert!(!children.is_empty(), "Union requires at least one child");
        Regex::Union(UnionNode { children })
    }

    /// A non-empty conjunction.
    pub fn intersection(children: Vec<Regex>) -> Regex {
        debug_assert!(
            !children.is_empty(),
            "Intersection requires at least one child"
        );
        Regex::Intersection(IntersectionNode { children })
    }

    /// Repeats `self` between `min` and `max` times.
    pub fn quantify(
        &self,
        min: u32,
        max: Length,
        qtype: QuantifierType,
    ) -> Result<Regex, Error> {
        if let Length::Finite(max_n) = max {
            if min > max_n {
                return Err(Error::InvalidRange { min, max });
            }
        }
        Ok(Regex::Quantified(QuantifiedNode {
            child: Box::new(self.clone()),
            min,
            max,
            qtype,
        }))
    }

    /// Imposes a generation-only upper bound of `size` characters.
    pub fn sized(&self, size: u32) -> Result<Regex, Error> {
        let min_length = self.min_length();
        if size < min_length {
            return Err(Error::SizeTooSmall { size, min_length });
        }
        Ok(Regex::Sized(SizedNode {
            child: Box::new(self.clone()),
            size,
        }))
    }

    /// The shortest string in this node's language.
    pub fn min_length(&self) -> u32 {
        match self {
            Regex::Literal(n) => n.min_length(),
            Regex::CharClass(n) => n.min_length(),
            Regex::Concat(n) => n.min_length(),
            Regex::Union(n) => n.min_length(),
            Regex::Intersection(n) => n.min_length(),
            Regex::Quantified(n) => n.min_length(),
            Regex::Sized(n) => n.min_length(),
        }
    }

    /// The longest string in this node's language, or `Infinite`.
    pub fn max_length(&self) -> Length {
        match self {
            Regex::Literal(n) => n.max_length(),
            Regex::CharClass(n) => n.max_length(),
            Regex::Concat(n) => n.max_length(),
            Regex::Union(n) => n.max_length(),
            Regex::Intersection(n) => n.max_length(),
            Regex::Quantified(n) => n.max_length(),
            Regex::Sized(n) => n.max_length(),
        }
    }

    /// Generates a string, threading `rng` pure-functionally. Uses
    /// `max_length` as the budget when finite, else
    /// [`UNBOUNDED_GENERATE_BUDGET`].
    pub fn generate(&self, rng: &Rng) -> (Rng, String) {
        let budget = match self.max_length() {
            Length::Finite(n) => n,
            Length::Infinite => UNBOUNDED_GENERATE_BUDGET,
        };
        self.generate_with_budget(rng, budget)
            .expect("a budget derived from max_length never violates min_length")
    }

    /// Generates a string within `budget` characters, threading `rng`
    /// pure-functionally. Fails with `BudgetTooSmall` if
    /// `budget < self.min_length()`.
    pub fn generate_with_budget(
        &self,
        rng: &Rng,
        budget: u32,
    ) -> Result<(Rng, String), Error> {
        match self {
            Regex::Literal(n) => n.generate(rng, budget),
            Regex::CharClass(n) => n.generate(rng, budget),
            Regex::Concat(n) => n.generate(rng, budget),
            Regex::Union(n) => n.generate(rng, budget),
            Regex::Intersection(n) => n.generate(rng, budget),
            Regex::Quantified(n) => n.generate(rng, budget),
            Regex::Sized(n) => n.generate(rng, budget),
        }
    }

    /// Whether `input` is in this node's language. Full-string
    /// containment only — never a partial-substring match. Total: never
    /// fails, returns `false` on any mismatch.
    pub fn test(&self, input: &str) -> bool {
        match self {
            Regex::Literal(n) => n.test(input),
            Regex::CharClass(n) => n.test(input),
            Regex::Concat(n) => n.test(input),
            Regex::Union(n) => n.test(input),
            Regex::Intersection(n) => n.test(input),
            Regex::Quantified(n) => n.test(input),
            Regex::Sized(n) => n.test(input),
        }
    }

    /// Structural negation. **Not** the Boolean complement for `Concat`
    /// and `Intersection` — see their modules' doc comments — but
    /// `negate().test(s) == !test(s)` holds for every other kind, and for
    /// every kind when `min_length > 0 || max_length != Finite(0)`.
    pub fn negate(&self) -> Regex {
        match self {
            Regex::Literal(n) => n.negate(),
            Regex::CharClass(n) => n.negate(),
            Regex::Concat(n) => n.negate(),
            Regex::Union(n) => n.negate(),
            Regex::Intersection(n) => n.negate(),
            Regex::Quantified(n) => n.negate(),
            Regex::Sized(n) => n.negate(),
        }
    }

    /// Rewrites to normal form: drops degenerate-empty children, flattens
    /// nested `Concat`/`Union`, collapses single-child wrappers. Preserves
    /// the node's language and length bounds.
    pub fn simplify(&self) -> Regex {
        match self {
            Regex::Literal(n) => Regex::Literal(n.clone()),
            Regex::CharClass(n) => Regex::CharClass(n.clone()),
            Regex::Concat(n) => n.simplify(),
            Regex::Union(n) => n.simplify(),
            Regex::Intersection(n) => n.simplify(),
            Regex::Quantified(n) => n.simplify(),
            Regex::Sized(n) => n.simplify(),
        }
    }

    /// Renders a surface regex string a standard regex engine can parse
    /// back to an equivalent language (modulo quantifier-type markers).
    pub fn to_regex_string(&self) -> String {
        crate::render::render(self)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn quantify_rejects_min_greater_than_max() {
        let node = Regex::literal("a", false);
        let err = node.quantify(5, Length::Finite(2), QuantifierType::Greedy);
        assert!(err.is_err());
    }

    #[test]
    fn sized_rejects_size_below_min_length() {
        let node = Regex::literal("abcdef", false);
        assert!(node.sized(2).is_err());
    }

    #[test]
    fn generate_picks_budget_from_max_length_when_finite() {
        let node = Regex::literal("hello", false);
        let (_, s) = node.generate(&Rng::from_seed(1));
        assert_eq!("hello", s);
    }

    #[test]
    fn generate_uses_a_large_budget_when_unbounded() {
        let node = Regex::literal("a", false)
            .quantify(0, Length::Infinite, QuantifierType::Greedy)
            .unwrap();
        let (_, s) = node.generate(&Rng::from_seed(2));
        assert!(s.chars().all(|c| c == 'a'));
    }

    fn assert_send_and_sync<T: Send + Sync>(_: T) {}

    #[test]
    fn regex_and_char_class_are_send_and_sync() {
        assert_send_and_sync(Regex::literal("a", false));
        assert_send_and_sync(CharClass::range('a', 'z'));
    }
}

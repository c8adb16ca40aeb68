//- Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Renders a [`Regex`] tree back to surface regex syntax.
//!
//! Best-effort for `Intersection`, which has no standard-syntax
//! equivalent in general: two intersected `CharClassNode`s render as the
//! computed intersected class (covers the common `[ab]&[bc]` shape);
//! anything wider renders as its first operand only. This divergence is
//! documented in DESIGN.md rather than silently hidden.

use crate::charclass::{self, CharClass};
use crate::node::{IntersectionNode, QuantifierType, Regex};

pub(crate) fn render(node: &Regex) -> String {
    match node {
        Regex::Literal(l) => {
            let escaped = escape_literal(&l.text);
            if l.case_insensitive {
                format!("(?i:{})", escaped)
            } else {
                escaped
            }
        }
        Regex::CharClass(c) => render_class(&c.set),
        Regex::Concat(c) => c.children.iter().map(render_group_if_needed).collect(),
        Regex::Union(u) => u
            .children
            .iter()
            .map(render)
            .collect::<Vec<_>>()
            .join("|"),
        Regex::Intersection(i) => render_intersection(i),
        Regex::Quantified(q) => {
            let atom = render_atom(&q.child);
            let quant = render_quantifier(q.min, q.max);
            let suffix = match q.qtype {
                QuantifierType::Greedy => "",
                QuantifierType::Reluctant => "?",
                QuantifierType::Possessive => "+",
            };
            format!("{}{}{}", atom, quant, suffix)
        }
        Regex::Sized(s) => render(&s.child),
    }
}

fn render_group_if_needed(node: &Regex) -> String {
    match node {
        Regex::Union(_) | Regex::Intersection(_) => format!("(?:{})", render(node)),
        _ => render(node),
    }
}

/// An atom suitable as a quantifier's operand: wrapped in a
/// non-capturing group unless it's already a single token.
fn render_atom(node: &Regex) -> String {
    match node {
        Regex::CharClass(_) => render(node),
        Regex::Literal(l) if !l.case_insensitive && l.text.chars().count() <= 1 => render(node),
        _ => format!("(?:{})", render(node)),
    }
}

fn render_quantifier(min: u32, max: crate::length::Length) -> String {
    use crate::length::Length;
    match (min, max) {
        (0, Length::Finite(1)) => "?".to_string(),
        (0, Length::Infinite) => "*".to_string(),
        (1, Length::Infinite) => "+".to_string(),
        (m, Length::Finite(n)) if m == n => format!("{{{}}}", m),
        (m, Length::Finite(n)) => format!("{{{},{}}}", m, n),
        (m, Length::Infinite) => format!("{{{},}}", m),
    }
}

fn render_intersection(i: &IntersectionNode) -> String {
    if let [Regex::CharClass(a), Regex::CharClass(b)] = i.children.as_slice() {
        let common = charclass::intersect_enum(&a.set, &b.set);
        if !common.is_empty() {
            return render_class(&CharClass::enumerated(common));
        }
    }
    render(&i.children[0])
}

fn render_class(class: &CharClass) -> String {
    match class {
        CharClass::Negated(inner) => format!("[^{}]", render_class_body(inner)),
        CharClass::Union(children) if children.iter().any(is_negated) => format!(
            "(?:{})",
            children
                .iter()
                .map(render_class)
                .collect::<Vec<_>>()
                .join("|")
        ),
        other => format!("[{}]", render_class_body(other)),
    }
}

fn is_negated(class: &CharClass) -> bool {
    matches!(class, CharClass::Negated(_))
}

fn render_class_body(class: &CharClass) -> String {
    match class {
        CharClass::Range(lo, hi) if lo == hi => escape_class_char(*lo),
        CharClass::Range(lo, hi) => {
            format!("{}-{}", escape_class_char(*lo), escape_class_char(*hi))
        }
        CharClass::Enum(chars) => chars.iter().copied().map(escape_class_char).collect(),
        CharClass::Union(children) => children.iter().map(render_class_body).collect(),
        // Nested negation inside a union body has no direct character-class
        // syntax; approximated by inlining the bracketed negated form.
        CharClass::Negated(_) => render_class(class),
    }
}

fn escape_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if is_meta_char(c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn escape_class_char(c: char) -> String {
    match c {
        ']' | '^' | '-' | '\\' => format!("\\{}", c),
        _ => c.to_string(),
    }
}

fn is_meta_char(c: char) -> bool {
    matches!(
        c,
        '.' | '^' | '$' | '|' | '(' | ')' | '[' | ']' | '{' | '}' | '*' | '+' | '?' | '\\'
    )
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::node::QuantifierType;
    use crate::length::Length;

    #[test]
    fn literal_round_trips_through_the_regex_crate() {
        let node = Regex::literal("a.b", false);
        let rendered = node.to_regex_string();
        let rx = regex::Regex::new(&rendered).unwrap();
        let (_, s) = node.generate(&crate::Rng::from_seed(1));
        assert!(rx.is_match(&s));
    }

    #[test]
    fn quantified_digit_class_round_trips() {
        let node = Regex::char_class(CharClass::ascii_digit())
            .quantify(3, Length::Finite(3), QuantifierType::Greedy)
            .unwrap();
        let rendered = node.to_regex_string();
        assert_eq!("[0-9]{3}", rendered);
        let rx = regex::Regex::new(&rendered).unwrap();
        for seed in 0..16u64 {
            let (_, s) = node.generate(&crate::Rng::from_seed(seed));
            assert!(rx.is_match(&s));
        }
    }

    #[test]
    fn union_renders_alternation() {
        let node = Regex::union(vec![Regex::literal("foo", false), Regex::literal("bar", false)]);
        assert_eq!("foo|bar", node.to_regex_string());
    }

    #[test]
    fn intersection_of_two_classes_renders_the_common_members() {
        let node = Regex::intersection(vec![
            Regex::char_class(CharClass::enumerated(vec!['a', 'b'])),
            Regex::char_class(CharClass::enumerated(vec!['b', 'c'])),
        ]);
        assert_eq!("[b]", node.to_regex_string());
    }
}

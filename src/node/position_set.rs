//- Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Shared position-set walker used by `Concat::test` and `Quantified::test`.
//!
//! A position set is the set of cursor offsets into `chars` reachable
//! after matching some prefix; `advance` extends a position set by one
//! more application of `node`.

use std::collections::BTreeSet;

use crate::length::Length;
use crate::node::Regex;

pub(crate) fn advance(
    node: &Regex,
    positions: &BTreeSet<usize>,
    chars: &[char],
) -> BTreeSet<usize> {
    let min = node.min_length() as usize;
    let max = match node.max_length() {
        Length::Finite(n) => n as usize,
        Length::Infinite => chars.len(),
    };
    let mut out = BTreeSet::new();
    for &i in positions {
        let lo = i + min;
        if lo > chars.len() {
            continue;
        }
        let hi = (i + max).min(chars.len());
        for j in lo..=hi {
            if out.contains(&j) {
                continue;
            }
            let substr: String = chars[i..j].iter().collect();
            if node.test(&substr) {
                out.insert(j);
            }
        }
    }
    out
}

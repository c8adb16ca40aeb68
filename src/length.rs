//- Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Length arithmetic over `u32 ∪ {∞}`.
//!
//! spec's Design Notes ask for "a sum type `Finite(u32) | Infinite` or a
//! sentinel" and forbid arithmetic panics; this is the sum type. All
//! arithmetic saturates rather than panics or wraps.

use std::fmt;

/// An upper length bound: either a finite count of characters, or
/// unbounded (`∞`, represented as `-1` at the public integer-sentinel
/// boundary in [`Length::to_sentinel`]).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Length {
    /// A finite upper bound.
    Finite(u32),
    /// No upper bound.
    Infinite,
}

impl Length {
    /// The `-1`-sentinel integer external callers expect per the
    /// operation table (`u32 / u32∪∞`).
    pub fn to_sentinel(self) -> i64 {
        match self {
            Length::Finite(n) => n as i64,
            Length::Infinite => -1,
        }
    }

    /// `self + other`, with `∞` absorbing.
    pub fn add(self, other: Length) -> Length {
        match (self, other) {
            (Length::Infinite, _) | (_, Length::Infinite) => Length::Infinite,
            (Length::Finite(a), Length::Finite(b)) => {
                Length::Finite(a.saturating_add(b))
            }
        }
    }

    /// `self * k`. `∞ · 0 = 0`; `∞ · k = ∞` for `k > 0`.
    pub fn mul(self, k: u32) -> Length {
        match self {
            Length::Finite(a) => Length::Finite(a.saturating_mul(k)),
            Length::Infinite if k == 0 => Length::Finite(0),
            Length::Infinite => Length::Infinite,
        }
    }

    /// Max, with `∞` absorbing — used by `Union::max_length` and
    /// `Concat`'s child-wise fold.
    pub fn max_absorbing(self, other: Length) -> Length {
        match (self, other) {
            (Length::Infinite, _) | (_, Length::Infinite) => Length::Infinite,
            (Length::Finite(a), Length::Finite(b)) => Length::Finite(a.max(b)),
        }
    }

    /// Min, with `∞` ignored (treated as "missing upper bound") — used by
    /// `Intersection::max_length`.
    pub fn min_ignoring_infinite(self, other: Length) -> Length {
        match (self, other) {
            (Length::Infinite, Length::Infinite) => Length::Infinite,
            (Length::Infinite, x) | (x, Length::Infinite) => x,
            (Length::Finite(a), Length::Finite(b)) => Length::Finite(a.min(b)),
        }
    }

    /// Clamp a finite value against this bound, treating `∞` as "no
    /// clamping".
    pub fn clamp(self, value: u32) -> u32 {
        match self {
            Length::Finite(n) => value.min(n),
            Length::Infinite => value,
        }
    }

    /// `true` if `value` is finite and at most `n`; `∞` accepts everything.
    pub fn covers(self, value: u32) -> bool {
        match self {
            Length::Finite(n) => value <= n,
            Length::Infinite => true,
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Finite(n) => write!(f, "{}", n),
            Length::Infinite => write!(f, "∞"),
        }
    }
}

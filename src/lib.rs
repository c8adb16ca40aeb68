//- Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # regex-gen reference documentation
//!
//! A regex-driven string generator: given a [`Regex`] tree, it produces
//! random strings that match it, for use as the generation core behind
//! property-based testing.
//!
//! The crate is a closed algebra of seven node kinds (`Literal`,
//! `CharClass`, `Concat`, `Union`, `Intersection`, `Quantified`, `Sized`)
//! over a leaf character-class algebra ([`CharClass`]), with three mutually
//! consistent operations: [`Regex::generate`], [`Regex::test`], and
//! [`Regex::negate`].
//!
//! Parsing a surface regex string into this algebra, and bindings to
//! property-testing frameworks, are external collaborators and out of
//! scope for this crate.

mod charclass;
mod error;
mod length;
mod node;
mod render;
mod rng;

pub use charclass::CharClass;
pub use error::Error;
pub use length::Length;
pub use node::{QuantifierType, Regex};
pub use rng::Rng;

//! Builder module for `argtree`.
//! See the `argtree` crate root for full details.
#![deny(missing_docs)]
mod api;
mod binder;
mod constant;
mod model;
mod parser;
#[allow(missing_docs)]
pub mod prelude;
mod tokenizer;

pub use api::*;
pub use binder::*;
pub use model::*;
pub use parser::{Matches, Scanner};
pub use tokenizer::tokenize;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

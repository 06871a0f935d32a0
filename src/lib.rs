//! `argtree` is a declarative command line grammar for Rust.
//!
//! A grammar is a tree of *elements*, declared up front and parsed any number of times:
//! * [`SwitchArgument`] toggles a flag on `/Name`.
//! * [`PropertyArgument`] takes the token following `-Name`.
//! * [`FieldArgument`] takes the text after `Name=`, within the same token.
//! * [`StringArgument`] takes the first token it is offered, positionally.
//! * [`CommandLine`] is a named sub-tree (a sub-command) which, once triggered, consumes every remaining token.
//! * [`Arguments`] is the root.
//!
//! Parsing never fails.
//! Tokens that no element consumes are collected as the *extra content* of their enclosing container.
//! The parse results ([`Matches`]) are then bound onto a plain struct by *name*: every element binds to the member of the same name and a compatible type.
//!
//! # Usage
//! This demo hosts a small file manager Cli, via the [derive Api](./derive/index.html):
//! ```no_run
#![doc = include_str!("../demos/file_manager.rs")]
//! ```
//!
//! ```console
//! $ file_manager list ./src
//! Would list the files and directories of './src'.
//!
//! $ file_manager delete /force notes.txt
//! Would delete 'notes.txt', without asking.
//!
//! $ file_manager help create
//! Create a file: Create Filename
//! ```
//!
//! # Matching rules
//! Containers offer each token to their children in declaration order.
//! The first child to consume the token wins, and the next token is again offered from the first child.
//! Consequently, declaration order is significant: a [`StringArgument`] declared before a [`SwitchArgument`] takes the switch's trigger as its value.
//!
//! Case-insensitivity is configured per element, or cascaded from a container via `with_ignore_case(..)`.
//!
//! # Tokenization
//! When the command line is available only as one string, [`tokenize`] splits it into tokens (handling double quotes and backslash escapes).
//!
//! # Features
//! * `tracing_debug`: emit parse and binding decisions as `tracing` debug events.
pub mod derive;

pub use argtree_builder::*;

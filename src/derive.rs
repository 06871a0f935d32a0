//! Derive Api for `argtree` binding targets.
//!
//! ### Getting Started
//! Instrument a struct `S` (which must also implement `Default`) with `#[derive(Target)]`.
//! This generates `impl argtree::Target for S`, so that any grammar may be bound onto `S` via [`Arguments::to_object`](../struct.Arguments.html#method.to_object).
//!
//! ### Member Configuration
//! Each field becomes a member named after the field identifier, according to its type:
//! ```console
//! Type           | Member    | Bound from
//! -----------------------------------------------------------------------------
//! bool           | flag      | SwitchArgument, CommandLine
//! String         | text      | PropertyArgument, FieldArgument, StringArgument
//! Option<String> | text      | (as above, wrapped in `Some`)
//! Vec<String>    | texts     | extra content of Arguments, CommandLine
//! Box<[String]>  | texts     | (as above)
//! ```
//! Fields of any other type are left out, and keep their default.
//!
//! The following field attributes are available:
//! * `#[argtree(name = "..")]` to bind the field to a differently named element.
//! This is typically needed, since grammar names tend to be `PascalCase` while field names are `snake_case`.
//! * `#[argtree(skip)]` to leave the field out.
//!
//! ```
//! use argtree::derive::Target;
//! use argtree::{Arguments, FieldArgument, SwitchArgument};
//!
//! #[derive(Debug, Default, Target)]
//! struct Conversion {
//!     #[argtree(name = "Strict")]
//!     strict: bool,
//!     #[argtree(name = "Source")]
//!     source: Option<String>,
//!     #[argtree(name = "ExtraContent")]
//!     extra: Box<[String]>,
//!     #[argtree(skip)]
//!     retries: u32,
//! }
//!
//! let grammar = Arguments::new()
//!     .add(SwitchArgument::new("Strict"))
//!     .add(FieldArgument::new("Source"));
//! let matches = grammar.parse(&["Source=in.txt", "notes.txt"]);
//! let conversion: Conversion = grammar.to_object(&matches).unwrap();
//!
//! assert!(!conversion.strict);
//! assert_eq!(conversion.source.as_deref(), Some("in.txt"));
//! assert_eq!(conversion.extra.to_vec(), vec!["notes.txt".to_string()]);
//! assert_eq!(conversion.retries, 0);
//! ```

pub use argtree_derive::Target;

mod core;
mod element;
mod field;

pub use self::core::{Arguments, CommandLine};
pub use element::Element;
pub use field::{FieldArgument, PropertyArgument, StringArgument, SwitchArgument};

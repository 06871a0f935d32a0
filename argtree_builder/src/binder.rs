mod shape;
mod table;

pub use shape::{Member, Setter, Shape, ShapeError, Target};
pub use table::{Binding, Skip};

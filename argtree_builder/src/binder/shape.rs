use std::collections::HashMap;
use thiserror::Error;

use crate::model::ValueKind;

/// A type that parsed matches can be bound onto.
///
/// The shape declares, by name, which members receive which kind of value.
/// Binding always starts from `T::default()`, so members nothing binds keep their default.
///
/// Prefer `#[derive(Target)]` (from the `argtree` crate) over implementing this by hand.
pub trait Target: Default {
    /// The named, typed members of this type.
    fn shape() -> Shape<Self>;
}

/// The typed assignment of a single member.
pub enum Setter<T> {
    /// Receives the state of a `SwitchArgument` or `CommandLine`.
    Flag(fn(&mut T, bool)),
    /// Receives the value of a `PropertyArgument`, `FieldArgument` or `StringArgument`.
    Text(fn(&mut T, String)),
    /// Receives the extra content of a container.
    Texts(fn(&mut T, Vec<String>)),
}

impl<T> Setter<T> {
    /// The kind of value this setter accepts.
    pub fn kind(&self) -> ValueKind {
        match self {
            Setter::Flag(_) => ValueKind::Flag,
            Setter::Text(_) => ValueKind::Text,
            Setter::Texts(_) => ValueKind::Texts,
        }
    }
}

// Manual impls; deriving would require `T: Clone`.
impl<T> Clone for Setter<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Setter<T> {}

impl<T> std::fmt::Debug for Setter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Setter::{}(..)", self.kind())
    }
}

/// A named member of a [`Shape`].
#[derive(Debug, Clone)]
pub struct Member<T> {
    name: String,
    setter: Setter<T>,
}

impl<T> Member<T> {
    /// The member name, matched against element names.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The assignment of this member.
    pub fn setter(&self) -> Setter<T> {
        self.setter
    }

    /// The kind of value this member accepts.
    pub fn kind(&self) -> ValueKind {
        self.setter.kind()
    }
}

/// The members of a [`Target`] type, in declaration order.
///
/// ### Example
/// ```
/// # use argtree_builder as argtree;
/// use argtree::{Shape, ValueKind};
///
/// #[derive(Default)]
/// struct Startup {
///     list: bool,
///     path: Option<String>,
/// }
///
/// let shape = Shape::<Startup>::new()
///     .flag("List", |target, value| target.list = value)
///     .text("Path", |target, value| target.path = Some(value));
///
/// assert_eq!(shape.member("Path").map(|m| m.kind()), Some(ValueKind::Text));
/// ```
#[derive(Debug, Clone)]
pub struct Shape<T> {
    members: Vec<Member<T>>,
}

impl<T> Default for Shape<T> {
    fn default() -> Self {
        Self {
            members: Vec::default(),
        }
    }
}

impl<T> Shape<T> {
    /// Create a shape without members.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a `bool` member.
    pub fn flag(self, name: impl Into<String>, setter: fn(&mut T, bool)) -> Self {
        self.member_with(name, Setter::Flag(setter))
    }

    /// Declare a `String` member.
    pub fn text(self, name: impl Into<String>, setter: fn(&mut T, String)) -> Self {
        self.member_with(name, Setter::Text(setter))
    }

    /// Declare a string collection member.
    pub fn texts(self, name: impl Into<String>, setter: fn(&mut T, Vec<String>)) -> Self {
        self.member_with(name, Setter::Texts(setter))
    }

    /// Declare a member with an explicit setter.
    pub fn member_with(mut self, name: impl Into<String>, setter: Setter<T>) -> Self {
        self.members.push(Member {
            name: name.into(),
            setter,
        });
        self
    }

    /// The first member named `name`.
    pub fn member(&self, name: &str) -> Option<&Member<T>> {
        self.members.iter().find(|member| member.name == name)
    }

    /// Every member, in declaration order.
    pub fn members(&self) -> &[Member<T>] {
        &self.members
    }

    /// Index the members by name, rejecting shapes that cannot be bound unambiguously.
    pub(crate) fn index(&self) -> Result<HashMap<&str, Setter<T>>, ShapeError> {
        let mut index = HashMap::default();

        for member in &self.members {
            if member.name.is_empty() {
                return Err(ShapeError::EmptyMemberName);
            }

            if index.insert(member.name.as_str(), member.setter).is_some() {
                return Err(ShapeError::DuplicateMember(member.name.clone()));
            }
        }

        Ok(index)
    }
}

/// The target shape cannot be used for binding.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShapeError {
    /// Two members share one name.
    #[error("Shape error: member '{0}' is declared more than once.")]
    DuplicateMember(String),

    /// A member has an empty name.
    #[error("Shape error: member names cannot be empty.")]
    EmptyMemberName,
}

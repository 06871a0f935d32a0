/// The closed set of grammar element variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// A boolean toggle, triggered by `/NAME`.
    Switch,
    /// A name followed by a value token, triggered by `-NAME VALUE`.
    Property,
    /// An inline name/value token, triggered by `NAME=VALUE`.
    Field,
    /// An unconditional positional string.
    String,
    /// A named sub-tree, triggered by a token starting with `NAME`.
    CommandLine,
    /// An untriggered, always active sub-tree.
    Arguments,
}

impl ElementKind {
    /// The kind of value this element produces during a parse, if any.
    pub fn value_kind(&self) -> Option<ValueKind> {
        match self {
            ElementKind::Switch | ElementKind::CommandLine => Some(ValueKind::Flag),
            ElementKind::Property | ElementKind::Field | ElementKind::String => {
                Some(ValueKind::Text)
            }
            ElementKind::Arguments => None,
        }
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The kind of a parsed value, or of a target member able to receive one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// A `bool`.
    Flag,
    /// A single `String`.
    Text,
    /// An ordered collection of `String`s.
    Texts,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A value set on an element during a parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// The state of a `SwitchArgument` or `CommandLine`.
    Flag(bool),
    /// The captured token of a `PropertyArgument`, `FieldArgument` or `StringArgument`.
    Text(String),
}

impl Value {
    /// The kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Flag(_) => ValueKind::Flag,
            Value::Text(_) => ValueKind::Text,
        }
    }

    /// The boolean, if this is a `Value::Flag`.
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Value::Flag(flag) => Some(*flag),
            Value::Text(_) => None,
        }
    }

    /// The string, if this is a `Value::Text`.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Flag(_) => None,
            Value::Text(text) => Some(text.as_str()),
        }
    }
}

/// The stable identity of an element within a grammar: the child indices leading from the root.
///
/// The root `Arguments` is the empty path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementPath(Vec<usize>);

impl ElementPath {
    /// The path of the grammar root.
    pub fn root() -> Self {
        Self::default()
    }

    /// The path of this element's `index`-th child.
    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    /// The child indices, root first.
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// The nesting depth of this path (the root is `0`).
    pub fn depth(&self) -> usize {
        self.0.len()
    }
}

impl From<Vec<usize>> for ElementPath {
    fn from(value: Vec<usize>) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for ElementPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let indices: Vec<String> = self.0.iter().map(|i| i.to_string()).collect();
        write!(f, "/{}", indices.join("/"))
    }
}

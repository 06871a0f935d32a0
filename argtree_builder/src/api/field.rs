use crate::constant::*;
use crate::model::{ElementKind, ElementPath, Value};
use crate::parser::{equals, strip_prefix, Matches, Scanner};
use crate::prelude::Matcher;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// A boolean toggle, triggered by `/NAME` (precisely 1 token).
///
/// Each match *flips* the switch, starting from its default (`false` unless configured).
///
/// ### Example
/// ```
/// # use argtree_builder as argtree;
/// use argtree::prelude::*;
/// use argtree::{Arguments, SwitchArgument};
///
/// let grammar = Arguments::new().add(SwitchArgument::new("Verbose"));
/// let matches = grammar.parse(&["/Verbose"]);
/// let path = grammar.find("Verbose").unwrap();
///
/// assert_eq!(matches.flag(&path), Some(true));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchArgument {
    name: String,
    ignore_case: bool,
    trigger_char: char,
    enabled: bool,
}

impl SwitchArgument {
    /// Create a switch argument.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ignore_case: false,
            trigger_char: SWITCH_TRIGGER,
            enabled: false,
        }
    }

    /// Use `trigger_char` in front of the name, instead of `/`.
    pub fn with_trigger_char(mut self, trigger_char: char) -> Self {
        self.trigger_char = trigger_char;
        self
    }

    /// The state the first match flips from.
    pub fn with_default(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Match the trigger regardless of case.
    pub fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    /// The name of this switch (also the name of its binding target).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The full trigger token, such as `/Verbose`.
    pub fn trigger(&self) -> String {
        format!("{}{}", self.trigger_char, self.name)
    }

    /// The character in front of the name.
    pub fn trigger_char(&self) -> char {
        self.trigger_char
    }

    /// The state the first match flips from.
    pub fn default_value(&self) -> bool {
        self.enabled
    }

    /// Whether the trigger is matched regardless of case.
    pub fn ignores_case(&self) -> bool {
        self.ignore_case
    }

    /// Set whether the trigger is matched regardless of case.
    pub fn set_ignore_case(&mut self, ignore_case: bool) {
        self.ignore_case = ignore_case;
    }

    /// The kind of this element.
    pub fn kind(&self) -> ElementKind {
        ElementKind::Switch
    }
}

impl Matcher for SwitchArgument {
    fn is_triggered(&self, token: &str) -> bool {
        equals(token, &self.trigger(), self.ignore_case)
    }

    fn try_parse(&self, path: &ElementPath, scanner: &mut Scanner, matches: &mut Matches) -> bool {
        match scanner.current() {
            Some(token) if self.is_triggered(token) => {
                let current = matches.flag(path).unwrap_or(self.enabled);
                matches.set(path, Value::Flag(!current));
                scanner.advance(1);
                true
            }
            _ => false,
        }
    }
}

/// A named value, triggered by `-NAME VALUE` (precisely 2 tokens).
///
/// Without a token following the trigger, nothing is consumed and the trigger remains available to other elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyArgument {
    name: String,
    ignore_case: bool,
    trigger_char: char,
    value: Option<String>,
}

impl PropertyArgument {
    /// Create a property argument.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ignore_case: false,
            trigger_char: PROPERTY_TRIGGER,
            value: None,
        }
    }

    /// Use `trigger_char` in front of the name, instead of `-`.
    pub fn with_trigger_char(mut self, trigger_char: char) -> Self {
        self.trigger_char = trigger_char;
        self
    }

    /// Document a default value.
    /// Defaults are never bound onto a target; see [`Arguments::resolve`](crate::Arguments::resolve).
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Match the trigger regardless of case.
    pub fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    /// The name of this property (also the name of its binding target).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The full trigger token, such as `-Name`.
    pub fn trigger(&self) -> String {
        format!("{}{}", self.trigger_char, self.name)
    }

    /// The character in front of the name.
    pub fn trigger_char(&self) -> char {
        self.trigger_char
    }

    /// The default value, if any.
    pub fn default_value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Whether the trigger is matched regardless of case.
    pub fn ignores_case(&self) -> bool {
        self.ignore_case
    }

    /// Set whether the trigger is matched regardless of case.
    pub fn set_ignore_case(&mut self, ignore_case: bool) {
        self.ignore_case = ignore_case;
    }

    /// The kind of this element.
    pub fn kind(&self) -> ElementKind {
        ElementKind::Property
    }
}

impl Matcher for PropertyArgument {
    fn is_triggered(&self, token: &str) -> bool {
        equals(token, &self.trigger(), self.ignore_case)
    }

    fn try_parse(&self, path: &ElementPath, scanner: &mut Scanner, matches: &mut Matches) -> bool {
        match scanner.current() {
            Some(token) if self.is_triggered(token) => match scanner.lookahead(1) {
                Some(value) => {
                    matches.set(path, Value::Text(value.to_string()));
                    scanner.advance(2);
                    true
                }
                None => {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Property '{token}' has no value token; leaving it unconsumed.");
                    }

                    false
                }
            },
            _ => false,
        }
    }
}

/// An inline named value, triggered by a token starting with `NAME=` (precisely 1 token).
///
/// The value is everything after the first `NAME=`, so `Output=a=b` captures `a=b`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldArgument {
    name: String,
    ignore_case: bool,
    trigger_char: char,
    value: Option<String>,
}

impl FieldArgument {
    /// Create a field argument.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ignore_case: false,
            trigger_char: FIELD_TRIGGER,
            value: None,
        }
    }

    /// Use `trigger_char` after the name, instead of `=`.
    pub fn with_trigger_char(mut self, trigger_char: char) -> Self {
        self.trigger_char = trigger_char;
        self
    }

    /// Document a default value.
    /// Defaults are never bound onto a target; see [`Arguments::resolve`](crate::Arguments::resolve).
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Match the trigger regardless of case.
    pub fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    /// The name of this field (also the name of its binding target).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The full trigger prefix, such as `Output=`.
    pub fn trigger(&self) -> String {
        format!("{}{}", self.name, self.trigger_char)
    }

    /// The character after the name.
    pub fn trigger_char(&self) -> char {
        self.trigger_char
    }

    /// The default value, if any.
    pub fn default_value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Whether the trigger is matched regardless of case.
    pub fn ignores_case(&self) -> bool {
        self.ignore_case
    }

    /// Set whether the trigger is matched regardless of case.
    pub fn set_ignore_case(&mut self, ignore_case: bool) {
        self.ignore_case = ignore_case;
    }

    /// The kind of this element.
    pub fn kind(&self) -> ElementKind {
        ElementKind::Field
    }
}

impl Matcher for FieldArgument {
    fn is_triggered(&self, token: &str) -> bool {
        strip_prefix(token, &self.trigger(), self.ignore_case).is_some()
    }

    fn try_parse(&self, path: &ElementPath, scanner: &mut Scanner, matches: &mut Matches) -> bool {
        let value = scanner
            .current()
            .and_then(|token| strip_prefix(token, &self.trigger(), self.ignore_case));

        match value {
            Some(value) => {
                matches.set(path, Value::Text(value.to_string()));
                scanner.advance(1);
                true
            }
            None => false,
        }
    }
}

/// A positional value, captured verbatim from whichever token it is offered first (precisely 1 token).
///
/// This element has no trigger and no case-sensitivity.
/// It matches at most once per parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringArgument {
    name: String,
    value: Option<String>,
}

impl StringArgument {
    /// Create a string argument.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    /// Document a default value.
    /// Defaults are never bound onto a target; see [`Arguments::resolve`](crate::Arguments::resolve).
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// The name of this argument (also the name of its binding target).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The default value, if any.
    pub fn default_value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// The kind of this element.
    pub fn kind(&self) -> ElementKind {
        ElementKind::String
    }
}

impl Matcher for StringArgument {
    fn is_triggered(&self, _token: &str) -> bool {
        true
    }

    fn try_parse(&self, path: &ElementPath, scanner: &mut Scanner, matches: &mut Matches) -> bool {
        if matches.is_assignable(path) {
            return false;
        }

        match scanner.current() {
            Some(token) => {
                matches.set(path, Value::Text(token.to_string()));
                scanner.advance(1);
                true
            }
            None => false,
        }
    }
}

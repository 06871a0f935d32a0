use std::env;

use crate::api::Element;
use crate::binder::{Binding, ShapeError, Target};
use crate::constant::EXTRA_CONTENT;
use crate::model::{ElementKind, ElementPath, Value};
use crate::parser::{parse_remainder, strip_prefix, Matches, Scanner};
use crate::prelude::{Container, Matcher};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The root of a grammar: an untriggered, always active container.
///
/// Every token is offered to the child elements in declaration order.
/// The first child to consume it wins; tokens no child consumes become *extra content*.
///
/// The grammar itself is never mutated by a parse, so it may be parsed any number of times.
///
/// ### Example
/// ```
/// # use argtree_builder as argtree;
/// use argtree::{Arguments, FieldArgument, Shape, StringArgument, SwitchArgument, Target};
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Conversion {
///     strict: bool,
///     source: String,
///     extra: Vec<String>,
/// }
///
/// impl Target for Conversion {
///     fn shape() -> Shape<Self> {
///         Shape::<Self>::new()
///             .flag("Strict", |target, value| target.strict = value)
///             .text("Source", |target, value| target.source = value)
///             .texts("ExtraContent", |target, value| target.extra = value)
///     }
/// }
///
/// let grammar = Arguments::new()
///     .add(SwitchArgument::new("Strict"))
///     .add(FieldArgument::new("Source"))
///     .with_ignore_case(true);
///
/// let matches = grammar.parse(&["source=in.txt", "/STRICT", "notes.txt"]);
/// let conversion: Conversion = grammar.to_object(&matches).unwrap();
///
/// assert_eq!(
///     conversion,
///     Conversion {
///         strict: true,
///         source: "in.txt".to_string(),
///         extra: vec!["notes.txt".to_string()],
///     }
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arguments {
    elements: Vec<Element>,
    extra_content_name: String,
}

impl Default for Arguments {
    fn default() -> Self {
        Self {
            elements: Vec::default(),
            extra_content_name: EXTRA_CONTENT.to_string(),
        }
    }
}

impl Arguments {
    /// Create an empty grammar root.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a child element.
    pub fn add(mut self, element: impl Into<Element>) -> Self {
        self.push(element);
        self
    }

    /// Bind the unmatched tokens to the target member `name`, instead of `ExtraContent`.
    pub fn with_extra_content_name(mut self, name: impl Into<String>) -> Self {
        self.extra_content_name = name.into();
        self
    }

    /// Set case-insensitivity on every child added so far, cascading into nested containers.
    pub fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.set_ignore_case(ignore_case);
        self
    }

    /// Whether every child that supports case-insensitivity ignores case.
    pub fn ignores_case(&self) -> bool {
        self.elements_ignore_case()
    }

    /// Set case-insensitivity on every child, cascading into nested containers.
    pub fn set_ignore_case(&mut self, ignore_case: bool) {
        self.set_elements_ignore_case(ignore_case);
    }

    /// The kind of this element.
    pub fn kind(&self) -> ElementKind {
        ElementKind::Arguments
    }

    /// The element at `path`, if any (the root itself has no `Element`).
    pub fn element(&self, path: &ElementPath) -> Option<&Element> {
        let (last, parents) = path.indices().split_last()?;
        let mut elements = self.elements.as_slice();

        for index in parents {
            elements = elements.get(*index)?.elements()?;
        }

        elements.get(*last)
    }

    /// The value of the element at `path`: the parsed value when one was set, otherwise the element's default.
    pub fn resolve(&self, matches: &Matches, path: &ElementPath) -> Option<Value> {
        match matches.value(path) {
            Some(value) => Some(value.clone()),
            None => self.element(path)?.default_value(),
        }
    }

    /// Parse the tokens against this grammar.
    ///
    /// Parsing never fails: unrecognized tokens become extra content of their nearest enclosing container.
    pub fn parse(&self, tokens: &[&str]) -> Matches {
        let mut scanner = Scanner::new(tokens);
        let mut matches = Matches::default();
        self.try_parse(&ElementPath::root(), &mut scanner, &mut matches);

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Parsed {tokens:?} into {matches:?}.");
        }

        matches
    }

    /// Parse the Cli [`env::args`] against this grammar (skipping the program name).
    pub fn parse_env(&self) -> Matches {
        let command_input: Vec<String> = env::args().skip(1).collect();
        self.parse(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        )
    }

    /// Bind the parsed `matches` onto a fresh `T`.
    ///
    /// Members without a corresponding element, or of a different kind, stay at their default.
    /// For repeated binding of the same grammar, build a [`Binding`] once instead.
    pub fn to_object<T: Target>(&self, matches: &Matches) -> Result<T, ShapeError> {
        let binding = Binding::<T>::new(self)?;
        Ok(binding.to_object(matches))
    }
}

impl Container for Arguments {
    fn elements(&self) -> &[Element] {
        &self.elements
    }

    fn elements_mut(&mut self) -> &mut Vec<Element> {
        &mut self.elements
    }

    fn extra_content_name(&self) -> &str {
        &self.extra_content_name
    }
}

impl Matcher for Arguments {
    fn is_triggered(&self, _token: &str) -> bool {
        true
    }

    fn try_parse(&self, path: &ElementPath, scanner: &mut Scanner, matches: &mut Matches) -> bool {
        parse_remainder(&self.elements, path, scanner, matches);
        true
    }
}

/// A named sub-tree, triggered by a token starting with its name.
///
/// Once triggered, it consumes *every* remaining token (offering each to its own children).
/// Sibling command lines are therefore mutually exclusive alternatives.
///
/// ### Example
/// ```
/// # use argtree_builder as argtree;
/// use argtree::prelude::*;
/// use argtree::{Arguments, CommandLine, StringArgument};
///
/// let grammar = Arguments::new()
///     .add(CommandLine::new("List").add(StringArgument::new("Path")))
///     .add(CommandLine::new("Help"));
///
/// let matches = grammar.parse(&["List", "./dir"]);
///
/// assert_eq!(matches.flag(&grammar.find("List").unwrap()), Some(true));
/// assert_eq!(matches.text(&grammar.find("Path").unwrap()), Some("./dir"));
/// assert_eq!(matches.flag(&grammar.find("Help").unwrap()), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    name: String,
    ignore_case: bool,
    elements: Vec<Element>,
    extra_content_name: String,
}

impl CommandLine {
    /// Create a command line.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ignore_case: false,
            elements: Vec::default(),
            extra_content_name: EXTRA_CONTENT.to_string(),
        }
    }

    /// Append a child element.
    pub fn add(mut self, element: impl Into<Element>) -> Self {
        self.push(element);
        self
    }

    /// Bind the unmatched tokens to the target member `name`, instead of `ExtraContent`.
    pub fn with_extra_content_name(mut self, name: impl Into<String>) -> Self {
        self.extra_content_name = name.into();
        self
    }

    /// Set case-insensitivity on this command line's own trigger and every child added so far.
    pub fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.set_ignore_case(ignore_case);
        self
    }

    /// Set case-insensitivity on this command line's own trigger only.
    pub fn with_self_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    /// Set case-insensitivity on every child added so far, but not on this command line's own trigger.
    pub fn with_elements_ignore_case(mut self, ignore_case: bool) -> Self {
        self.set_elements_ignore_case(ignore_case);
        self
    }

    /// The name of this command line (also the name of its binding target).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this command line's own trigger is matched regardless of case.
    pub fn self_ignores_case(&self) -> bool {
        self.ignore_case
    }

    /// Set whether this command line's own trigger is matched regardless of case.
    pub fn set_self_ignore_case(&mut self, ignore_case: bool) {
        self.ignore_case = ignore_case;
    }

    /// Whether both this command line's trigger and every child supporting case-insensitivity ignore case.
    pub fn ignores_case(&self) -> bool {
        self.ignore_case
            && self
                .elements
                .iter()
                .filter_map(Element::ignores_case)
                .all(|flag| flag)
    }

    /// Set case-insensitivity on this command line's trigger and every child, cascading into nested containers.
    pub fn set_ignore_case(&mut self, ignore_case: bool) {
        self.ignore_case = ignore_case;
        self.set_elements_ignore_case(ignore_case);
    }

    /// The kind of this element.
    pub fn kind(&self) -> ElementKind {
        ElementKind::CommandLine
    }
}

impl Container for CommandLine {
    fn elements(&self) -> &[Element] {
        &self.elements
    }

    fn elements_mut(&mut self) -> &mut Vec<Element> {
        &mut self.elements
    }

    fn extra_content_name(&self) -> &str {
        &self.extra_content_name
    }
}

impl Matcher for CommandLine {
    fn is_triggered(&self, token: &str) -> bool {
        strip_prefix(token, &self.name, self.ignore_case).is_some()
    }

    fn try_parse(&self, path: &ElementPath, scanner: &mut Scanner, matches: &mut Matches) -> bool {
        match scanner.current() {
            Some(token) if self.is_triggered(token) => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Command line '{token}' triggered at {}.", scanner.position());
                }

                scanner.advance(1);
                matches.set(path, Value::Flag(true));
                parse_remainder(&self.elements, path, scanner, matches);
                true
            }
            _ => false,
        }
    }
}

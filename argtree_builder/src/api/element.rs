use crate::api::{
    Arguments, CommandLine, FieldArgument, PropertyArgument, StringArgument, SwitchArgument,
};
use crate::model::{ElementKind, ElementPath, Value};
use crate::parser::{Matches, Scanner};
use crate::prelude::{Container, Matcher};

/// A node of the grammar tree.
///
/// Every leaf and container converts into an `Element` (via `From`), so containers are built with `add(..)` on any of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    /// See [`SwitchArgument`].
    Switch(SwitchArgument),
    /// See [`PropertyArgument`].
    Property(PropertyArgument),
    /// See [`FieldArgument`].
    Field(FieldArgument),
    /// See [`StringArgument`].
    String(StringArgument),
    /// See [`CommandLine`].
    CommandLine(CommandLine),
    /// See [`Arguments`].
    Arguments(Arguments),
}

impl Element {
    /// The name of this element, which is also the name of its binding target.
    /// `Arguments` are unnamed.
    pub fn name(&self) -> Option<&str> {
        match self {
            Element::Switch(inner) => Some(inner.name()),
            Element::Property(inner) => Some(inner.name()),
            Element::Field(inner) => Some(inner.name()),
            Element::String(inner) => Some(inner.name()),
            Element::CommandLine(inner) => Some(inner.name()),
            Element::Arguments(_) => None,
        }
    }

    /// The kind of this element.
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Switch(_) => ElementKind::Switch,
            Element::Property(_) => ElementKind::Property,
            Element::Field(_) => ElementKind::Field,
            Element::String(_) => ElementKind::String,
            Element::CommandLine(_) => ElementKind::CommandLine,
            Element::Arguments(_) => ElementKind::Arguments,
        }
    }

    /// Whether this element ignores case, or `None` when it has no notion of case (`StringArgument`).
    ///
    /// For containers this is the aggregate over themselves and their children.
    pub fn ignores_case(&self) -> Option<bool> {
        match self {
            Element::Switch(inner) => Some(inner.ignores_case()),
            Element::Property(inner) => Some(inner.ignores_case()),
            Element::Field(inner) => Some(inner.ignores_case()),
            Element::String(_) => None,
            Element::CommandLine(inner) => Some(inner.ignores_case()),
            Element::Arguments(inner) => Some(inner.ignores_case()),
        }
    }

    /// Set case-insensitivity, if this element supports it.
    /// Containers cascade the setting into their children.
    pub fn set_ignore_case(&mut self, ignore_case: bool) {
        match self {
            Element::Switch(inner) => inner.set_ignore_case(ignore_case),
            Element::Property(inner) => inner.set_ignore_case(ignore_case),
            Element::Field(inner) => inner.set_ignore_case(ignore_case),
            Element::String(_) => {
                // No notion of case.
            }
            Element::CommandLine(inner) => inner.set_ignore_case(ignore_case),
            Element::Arguments(inner) => inner.set_ignore_case(ignore_case),
        }
    }

    /// The value this element holds when a parse never sets it.
    pub fn default_value(&self) -> Option<Value> {
        match self {
            Element::Switch(inner) => Some(Value::Flag(inner.default_value())),
            Element::Property(inner) => inner.default_value().map(|v| Value::Text(v.to_string())),
            Element::Field(inner) => inner.default_value().map(|v| Value::Text(v.to_string())),
            Element::String(inner) => inner.default_value().map(|v| Value::Text(v.to_string())),
            Element::CommandLine(_) => Some(Value::Flag(false)),
            Element::Arguments(_) => None,
        }
    }

    /// The children of a container element.
    pub fn elements(&self) -> Option<&[Element]> {
        match self {
            Element::CommandLine(inner) => Some(inner.elements()),
            Element::Arguments(inner) => Some(inner.elements()),
            _ => None,
        }
    }

    /// The extra-content member name of a container element.
    pub fn extra_content_name(&self) -> Option<&str> {
        match self {
            Element::CommandLine(inner) => Some(inner.extra_content_name()),
            Element::Arguments(inner) => Some(inner.extra_content_name()),
            _ => None,
        }
    }
}

impl Matcher for Element {
    fn is_triggered(&self, token: &str) -> bool {
        match self {
            Element::Switch(inner) => inner.is_triggered(token),
            Element::Property(inner) => inner.is_triggered(token),
            Element::Field(inner) => inner.is_triggered(token),
            Element::String(inner) => inner.is_triggered(token),
            Element::CommandLine(inner) => inner.is_triggered(token),
            Element::Arguments(inner) => inner.is_triggered(token),
        }
    }

    fn try_parse(&self, path: &ElementPath, scanner: &mut Scanner, matches: &mut Matches) -> bool {
        match self {
            Element::Switch(inner) => inner.try_parse(path, scanner, matches),
            Element::Property(inner) => inner.try_parse(path, scanner, matches),
            Element::Field(inner) => inner.try_parse(path, scanner, matches),
            Element::String(inner) => inner.try_parse(path, scanner, matches),
            Element::CommandLine(inner) => inner.try_parse(path, scanner, matches),
            Element::Arguments(inner) => inner.try_parse(path, scanner, matches),
        }
    }
}

impl From<SwitchArgument> for Element {
    fn from(value: SwitchArgument) -> Self {
        Element::Switch(value)
    }
}

impl From<PropertyArgument> for Element {
    fn from(value: PropertyArgument) -> Self {
        Element::Property(value)
    }
}

impl From<FieldArgument> for Element {
    fn from(value: FieldArgument) -> Self {
        Element::Field(value)
    }
}

impl From<StringArgument> for Element {
    fn from(value: StringArgument) -> Self {
        Element::String(value)
    }
}

impl From<CommandLine> for Element {
    fn from(value: CommandLine) -> Self {
        Element::CommandLine(value)
    }
}

impl From<Arguments> for Element {
    fn from(value: Arguments) -> Self {
        Element::Arguments(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(SwitchArgument::new("a").into(), Some("a"), ElementKind::Switch)]
    #[case(PropertyArgument::new("b").into(), Some("b"), ElementKind::Property)]
    #[case(FieldArgument::new("c").into(), Some("c"), ElementKind::Field)]
    #[case(StringArgument::new("d").into(), Some("d"), ElementKind::String)]
    #[case(CommandLine::new("e").into(), Some("e"), ElementKind::CommandLine)]
    #[case(Arguments::new().into(), None, ElementKind::Arguments)]
    fn element_identity(
        #[case] element: Element,
        #[case] name: Option<&str>,
        #[case] kind: ElementKind,
    ) {
        assert_eq!(element.name(), name);
        assert_eq!(element.kind(), kind);
    }

    #[test]
    fn element_ignore_case_capability() {
        let mut switch = Element::from(SwitchArgument::new("a"));
        assert_eq!(switch.ignores_case(), Some(false));
        switch.set_ignore_case(true);
        assert_eq!(switch.ignores_case(), Some(true));

        let mut string = Element::from(StringArgument::new("a"));
        assert_eq!(string.ignores_case(), None);
        string.set_ignore_case(true);
        assert_eq!(string.ignores_case(), None);
    }

    #[test]
    fn element_default_value() {
        assert_eq!(
            Element::from(SwitchArgument::new("a").with_default(true)).default_value(),
            Some(Value::Flag(true))
        );
        assert_eq!(
            Element::from(FieldArgument::new("a").with_default("x")).default_value(),
            Some(Value::Text("x".to_string()))
        );
        assert_eq!(Element::from(StringArgument::new("a")).default_value(), None);
        assert_eq!(
            Element::from(CommandLine::new("a")).default_value(),
            Some(Value::Flag(false))
        );
        assert_eq!(Element::from(Arguments::new()).default_value(), None);
    }

    #[test]
    fn element_containers() {
        let command = Element::from(CommandLine::new("List").add(StringArgument::new("Path")));
        assert_eq!(command.elements().map(|e| e.len()), Some(1));
        assert_eq!(command.extra_content_name(), Some("ExtraContent"));

        let switch = Element::from(SwitchArgument::new("a"));
        assert_eq!(switch.elements(), None);
        assert_eq!(switch.extra_content_name(), None);
    }
}

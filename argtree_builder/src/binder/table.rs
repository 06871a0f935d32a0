use std::collections::HashMap;

use crate::api::{Arguments, Element};
use crate::binder::shape::{Setter, ShapeError, Target};
use crate::model::{ElementPath, ValueKind};
use crate::parser::Matches;
use crate::prelude::Container;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Why an element or container is not bound onto the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Skip {
    /// The target has no member of this name.
    MissingMember {
        /// The element (or container, for extra content).
        element: ElementPath,
        /// The name looked up.
        name: String,
    },
    /// The target member accepts a different kind of value.
    KindMismatch {
        /// The element (or container, for extra content).
        element: ElementPath,
        /// The name looked up.
        name: String,
        /// The kind the element produces.
        expected: ValueKind,
        /// The kind the member accepts.
        found: ValueKind,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    Value,
    ExtraContent,
}

#[derive(Debug, Clone)]
struct Assignment<T> {
    path: ElementPath,
    source: Source,
    setter: Setter<T>,
}

impl<T> Assignment<T> {
    fn try_assign(&self, matches: &Matches, target: &mut T) -> bool {
        match (self.source, self.setter) {
            (Source::Value, Setter::Flag(set)) => match matches.flag(&self.path) {
                Some(flag) => {
                    set(target, flag);
                    true
                }
                None => false,
            },
            (Source::Value, Setter::Text(set)) => match matches.text(&self.path) {
                Some(text) => {
                    set(target, text.to_string());
                    true
                }
                None => false,
            },
            (Source::ExtraContent, Setter::Texts(set)) => {
                match matches.extra_content(&self.path) {
                    Some(extra_content) => {
                        set(target, extra_content.to_vec());
                        true
                    }
                    None => false,
                }
            }
            _ => unreachable!("internal error - assignment planned with a mismatched setter"),
        }
    }
}

/// The binding table between a grammar and a [`Target`] type.
///
/// Built once, this resolves every element name against the target's [`Shape`](crate::Shape).
/// Elements without a same-named member of the matching kind are recorded as [`Skip`]s and never bound.
///
/// Assignments run in grammar order: a container's extra content, then its children (a `CommandLine` binds its own flag first).
/// Since every container binds into the same flat target, a triggered `CommandLine`'s extra content overrides the root's.
///
/// ### Example
/// ```
/// # use argtree_builder as argtree;
/// use argtree::{Arguments, Binding, CommandLine, Shape, Skip, Target};
///
/// #[derive(Debug, Default)]
/// struct Startup {
///     help: bool,
/// }
///
/// impl Target for Startup {
///     fn shape() -> Shape<Self> {
///         Shape::<Self>::new().flag("Help", |target, value| target.help = value)
///     }
/// }
///
/// let grammar = Arguments::new()
///     .add(CommandLine::new("Help"))
///     .add(CommandLine::new("List"));
/// let binding = Binding::<Startup>::new(&grammar).unwrap();
///
/// assert_eq!(binding.len(), 1);
/// // The root extra content, List, and the extra content of both command lines.
/// assert_eq!(binding.skips().len(), 4);
/// assert!(binding.to_object(&grammar.parse(&["Help"])).help);
/// assert!(!binding.to_object(&grammar.parse(&["List"])).help);
/// ```
#[derive(Debug, Clone)]
pub struct Binding<T> {
    assignments: Vec<Assignment<T>>,
    skips: Vec<Skip>,
}

impl<T: Target> Binding<T> {
    /// Build the binding table of `grammar` onto `T`.
    ///
    /// Fails only when `T`'s shape is itself unusable.
    pub fn new(grammar: &Arguments) -> Result<Self, ShapeError> {
        let shape = T::shape();
        let members = shape.index()?;
        let mut binding = Self {
            assignments: Vec::default(),
            skips: Vec::default(),
        };
        let root = ElementPath::root();
        binding.plan(
            &members,
            &root,
            grammar.extra_content_name(),
            ValueKind::Texts,
            Source::ExtraContent,
        );
        binding.plan_elements(&members, &root, grammar.elements());
        Ok(binding)
    }

    /// Bind `matches` onto a fresh `T`.
    pub fn to_object(&self, matches: &Matches) -> T {
        let mut target = T::default();
        self.try_assign(matches, &mut target);
        target
    }
}

impl<T> Binding<T> {
    /// Bind every assignable value in `matches` onto `target`, returning how many members were assigned.
    pub fn try_assign(&self, matches: &Matches, target: &mut T) -> usize {
        self.assignments
            .iter()
            .filter(|assignment| assignment.try_assign(matches, target))
            .count()
    }

    /// The elements (and containers) which are never bound, in grammar order.
    pub fn skips(&self) -> &[Skip] {
        &self.skips
    }

    /// The number of planned assignments.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Whether nothing in the grammar binds onto the target.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    fn plan_elements(
        &mut self,
        members: &HashMap<&str, Setter<T>>,
        path: &ElementPath,
        elements: &[Element],
    ) {
        for (index, element) in elements.iter().enumerate() {
            let child = path.child(index);

            if let (Some(name), Some(kind)) = (element.name(), element.kind().value_kind()) {
                self.plan(members, &child, name, kind, Source::Value);
            }

            if let (Some(nested), Some(name)) = (element.elements(), element.extra_content_name())
            {
                self.plan(members, &child, name, ValueKind::Texts, Source::ExtraContent);
                self.plan_elements(members, &child, nested);
            }
        }
    }

    fn plan(
        &mut self,
        members: &HashMap<&str, Setter<T>>,
        path: &ElementPath,
        name: &str,
        kind: ValueKind,
        source: Source,
    ) {
        let skip = match members.get(name) {
            Some(setter) if setter.kind() == kind => {
                self.assignments.push(Assignment {
                    path: path.clone(),
                    source,
                    setter: *setter,
                });
                return;
            }
            Some(setter) => Skip::KindMismatch {
                element: path.clone(),
                name: name.to_string(),
                expected: kind,
                found: setter.kind(),
            },
            None => Skip::MissingMember {
                element: path.clone(),
                name: name.to_string(),
            },
        };

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Not binding {path}: {skip:?}.");
        }

        self.skips.push(skip);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{CommandLine, FieldArgument, PropertyArgument, StringArgument, SwitchArgument};
    use crate::binder::Shape;

    #[derive(Debug, Default, PartialEq)]
    struct Startup {
        list: bool,
        help: bool,
        path: Option<String>,
        quick: bool,
        extra_content: Vec<String>,
    }

    impl Target for Startup {
        fn shape() -> Shape<Self> {
            Shape::<Self>::new()
                .flag("List", |target, value| target.list = value)
                .flag("Help", |target, value| target.help = value)
                .text("Path", |target, value| target.path = Some(value))
                .flag("Quick", |target, value| target.quick = value)
                .texts("ExtraContent", |target, value| target.extra_content = value)
        }
    }

    #[derive(Debug, Default, PartialEq)]
    struct Conversion {
        source: String,
        output: String,
        strict: bool,
        info_source: String,
        extra_content: Box<[String]>,
    }

    impl Target for Conversion {
        fn shape() -> Shape<Self> {
            Shape::<Self>::new()
                .text("Source", |target, value| target.source = value)
                .text("Output", |target, value| target.output = value)
                .flag("Strict", |target, value| target.strict = value)
                .text("InfoSource", |target, value| target.info_source = value)
                .texts("ExtraContent", |target, value| {
                    target.extra_content = value.into_boxed_slice()
                })
        }
    }

    #[derive(Debug, Default, PartialEq)]
    struct Duplicated {
        a: bool,
    }

    impl Target for Duplicated {
        fn shape() -> Shape<Self> {
            Shape::<Self>::new()
                .flag("A", |target, value| target.a = value)
                .flag("A", |target, value| target.a = !value)
        }
    }

    fn sub_commands() -> Arguments {
        Arguments::new()
            .add(CommandLine::new("List").add(StringArgument::new("Path")))
            .add(CommandLine::new("Help"))
    }

    #[test]
    fn bind_sub_command_list() {
        let grammar = sub_commands();
        let matches = grammar.parse(&["List", "./dir"]);
        let startup: Startup = grammar.to_object(&matches).unwrap();

        assert_eq!(
            startup,
            Startup {
                list: true,
                help: false,
                path: Some("./dir".to_string()),
                quick: false,
                extra_content: vec![],
            }
        );
    }

    #[test]
    fn bind_sub_command_help() {
        let grammar = sub_commands();
        let matches = grammar.parse(&["stray", "Help", "list"]);
        let startup: Startup = grammar.to_object(&matches).unwrap();

        assert!(startup.help);
        assert!(!startup.list);
        assert_eq!(startup.path, None);
        // The active command line's extra content is bound after (over) the root's.
        assert_eq!(startup.extra_content, vec!["list".to_string()]);
    }

    #[test]
    fn bind_nothing_matched() {
        let grammar = sub_commands();
        let startup: Startup = grammar.to_object(&grammar.parse(&[])).unwrap();
        assert_eq!(startup, Startup::default());
    }

    #[test]
    fn bind_mixed() {
        let grammar = Arguments::new()
            .add(SwitchArgument::new("Strict"))
            .add(FieldArgument::new("Source"))
            .add(FieldArgument::new("Output"))
            .add(StringArgument::new("InfoSource"))
            .with_ignore_case(true);
        let matches = grammar.parse(&["Source=in.txt", "Output=out.txt", "-strict", "notes.txt"]);
        let conversion: Conversion = grammar.to_object(&matches).unwrap();

        assert_eq!(
            conversion,
            Conversion {
                source: "in.txt".to_string(),
                output: "out.txt".to_string(),
                strict: false,
                info_source: "-strict".to_string(),
                extra_content: vec!["notes.txt".to_string()].into_boxed_slice(),
            }
        );
    }

    #[test]
    fn bind_switch_toggled_off() {
        let grammar = Arguments::new().add(SwitchArgument::new("Quick").with_default(true));
        let startup: Startup = grammar.to_object(&grammar.parse(&["/Quick"])).unwrap();
        // Assignable with a falsy value: still bound.
        assert!(!startup.quick);

        let grammar = Arguments::new().add(SwitchArgument::new("Quick").with_default(true));
        let startup: Startup = grammar.to_object(&grammar.parse(&[])).unwrap();
        // Never set: the default is not bound.
        assert!(!startup.quick);
    }

    #[test]
    fn bind_kind_mismatch() {
        let grammar = Arguments::new()
            .add(PropertyArgument::new("List"))
            .add(SwitchArgument::new("Path"))
            .add(SwitchArgument::new("Unknown"))
            .with_extra_content_name("Help");
        let binding = Binding::<Startup>::new(&grammar).unwrap();

        assert!(binding.is_empty());
        assert_eq!(
            binding.skips(),
            &[
                Skip::KindMismatch {
                    element: ElementPath::root(),
                    name: "Help".to_string(),
                    expected: ValueKind::Texts,
                    found: ValueKind::Flag,
                },
                Skip::KindMismatch {
                    element: ElementPath::root().child(0),
                    name: "List".to_string(),
                    expected: ValueKind::Text,
                    found: ValueKind::Flag,
                },
                Skip::KindMismatch {
                    element: ElementPath::root().child(1),
                    name: "Path".to_string(),
                    expected: ValueKind::Flag,
                    found: ValueKind::Text,
                },
                Skip::MissingMember {
                    element: ElementPath::root().child(2),
                    name: "Unknown".to_string(),
                },
            ]
        );

        let matches = grammar.parse(&["-List", "x", "/Path", "/Unknown", "y"]);
        let startup = binding.to_object(&matches);
        assert_eq!(startup, Startup::default());
    }

    #[test]
    fn bind_try_assign_counts() {
        let grammar = sub_commands();
        let binding = Binding::<Startup>::new(&grammar).unwrap();
        // Root extra, List, List extra, Path, Help, Help extra.
        assert_eq!(binding.len(), 6);

        let mut startup = Startup {
            quick: true,
            ..Startup::default()
        };
        let assigned = binding.try_assign(&grammar.parse(&["List", "a", "b"]), &mut startup);

        // Root extra, List, List extra, Path.
        assert_eq!(assigned, 4);
        assert!(startup.quick);
        assert_eq!(startup.extra_content, vec!["b".to_string()]);
    }

    #[test]
    fn bind_binding_reused() {
        let grammar = sub_commands();
        let binding = Binding::<Startup>::new(&grammar).unwrap();

        let first = binding.to_object(&grammar.parse(&["List", "a"]));
        let second = binding.to_object(&grammar.parse(&["Help"]));

        assert!(first.list && !first.help);
        assert!(second.help && !second.list);
        assert_eq!(second.path, None);
    }

    #[test]
    fn bind_shape_error() {
        let grammar = Arguments::new().add(SwitchArgument::new("A"));
        let result: Result<Duplicated, ShapeError> = grammar.to_object(&grammar.parse(&["/A"]));
        assert_matches!(result, Err(ShapeError::DuplicateMember(name)) if name == "A");
    }
}

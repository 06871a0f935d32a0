//! Traits which, typically, may be imported without concern: `use argtree::prelude::*`.

use crate::api::Element;
use crate::model::ElementPath;
use crate::parser::{Matches, Scanner};

/// Behaviour to recognize and consume tokens, shared by every grammar element.
pub trait Matcher {
    /// Whether `token` is this element's trigger.
    /// This never has side effects.
    fn is_triggered(&self, token: &str) -> bool;

    /// Try to consume tokens at the `scanner` position, recording state under `path` in `matches`.
    ///
    /// On success the scanner is advanced past everything consumed.
    /// On failure neither the scanner nor `matches` are touched.
    fn try_parse(&self, path: &ElementPath, scanner: &mut Scanner, matches: &mut Matches) -> bool;
}

/// Behaviour of the grammar elements that hold an ordered list of child elements.
// Needs to be imported in order to inspect or mutate a container in place.
pub trait Container {
    /// The child elements, in declaration order.
    fn elements(&self) -> &[Element];

    /// The child elements, mutably.
    #[doc(hidden)]
    fn elements_mut(&mut self) -> &mut Vec<Element>;

    /// The name of the target member receiving this container's unmatched tokens.
    fn extra_content_name(&self) -> &str;

    /// Append a child element.
    fn push(&mut self, element: impl Into<Element>) {
        self.elements_mut().push(element.into());
    }

    /// Remove (and return) the first child element named `name`.
    fn remove(&mut self, name: &str) -> Option<Element> {
        let index = self
            .elements()
            .iter()
            .position(|element| element.name() == Some(name))?;
        Some(self.elements_mut().remove(index))
    }

    /// Remove every child element.
    fn clear(&mut self) {
        self.elements_mut().clear();
    }

    /// Whether a child element is named `name`.
    fn contains(&self, name: &str) -> bool {
        self.elements()
            .iter()
            .any(|element| element.name() == Some(name))
    }

    /// The number of child elements.
    fn len(&self) -> usize {
        self.elements().len()
    }

    /// Whether there are no child elements.
    fn is_empty(&self) -> bool {
        self.elements().is_empty()
    }

    /// Find the first element named `name` anywhere below this container (pre-order, declaration order).
    /// The path is relative to this container.
    fn find(&self, name: &str) -> Option<ElementPath> {
        find_in(self.elements(), name, &ElementPath::root())
    }

    /// Whether every child element that supports case-insensitivity ignores case.
    /// Children without the capability (`StringArgument`) are skipped.
    /// Returns `false` when no child supports case-insensitivity.
    fn elements_ignore_case(&self) -> bool {
        let mut flags = self
            .elements()
            .iter()
            .filter_map(Element::ignores_case)
            .peekable();
        flags.peek().is_some() && flags.all(|flag| flag)
    }

    /// Set case-insensitivity on every child element that supports it, cascading into nested containers.
    fn set_elements_ignore_case(&mut self, ignore_case: bool) {
        for element in self.elements_mut().iter_mut() {
            element.set_ignore_case(ignore_case);
        }
    }
}

fn find_in(elements: &[Element], name: &str, path: &ElementPath) -> Option<ElementPath> {
    for (index, element) in elements.iter().enumerate() {
        let child = path.child(index);

        if element.name() == Some(name) {
            return Some(child);
        }

        if let Some(nested) = element.elements() {
            if let Some(found) = find_in(nested, name, &child) {
                return Some(found);
            }
        }
    }

    None
}

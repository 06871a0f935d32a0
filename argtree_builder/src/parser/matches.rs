use std::collections::HashMap;

use crate::model::{ElementPath, Value};

/// The state produced by a single parse of a grammar.
///
/// Elements are addressed by their [`ElementPath`].
/// An element only has a value here once the parse actually set one (it is *assignable*).
/// Defaults declared on the grammar are never recorded here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Matches {
    values: HashMap<ElementPath, Value>,
    extra_content: HashMap<ElementPath, Vec<String>>,
}

impl Matches {
    /// The value set on the element at `path` during the parse.
    pub fn value(&self, path: &ElementPath) -> Option<&Value> {
        self.values.get(path)
    }

    /// The boolean set on the switch/command line at `path` during the parse.
    pub fn flag(&self, path: &ElementPath) -> Option<bool> {
        self.value(path).and_then(Value::as_flag)
    }

    /// The string set on the property/field/string argument at `path` during the parse.
    pub fn text(&self, path: &ElementPath) -> Option<&str> {
        self.value(path).and_then(Value::as_text)
    }

    /// Whether the element at `path` had a value set during the parse.
    pub fn is_assignable(&self, path: &ElementPath) -> bool {
        self.values.contains_key(path)
    }

    /// The unmatched tokens collected by the container at `path`, in encounter order.
    ///
    /// Returns `None` when the container was never active (an untriggered `CommandLine`).
    pub fn extra_content(&self, path: &ElementPath) -> Option<&[String]> {
        self.extra_content.get(path).map(Vec::as_slice)
    }

    /// The number of elements with a value set during the parse.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no element had a value set during the parse.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub(crate) fn set(&mut self, path: &ElementPath, value: Value) {
        self.values.insert(path.clone(), value);
    }

    pub(crate) fn activate(&mut self, path: &ElementPath) {
        self.extra_content.entry(path.clone()).or_default();
    }

    pub(crate) fn push_extra(&mut self, path: &ElementPath, token: &str) {
        self.extra_content
            .entry(path.clone())
            .or_default()
            .push(token.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_empty() {
        let matches = Matches::default();
        let root = ElementPath::root();
        assert!(matches.is_empty());
        assert_eq!(matches.value(&root), None);
        assert_eq!(matches.flag(&root), None);
        assert!(!matches.is_assignable(&root));
        assert_eq!(matches.extra_content(&root), None);
    }

    #[test]
    fn matches_values() {
        let mut matches = Matches::default();
        let switch = ElementPath::root().child(0);
        let field = ElementPath::root().child(1);
        matches.set(&switch, Value::Flag(false));
        matches.set(&field, Value::Text("abc".to_string()));

        assert_eq!(matches.len(), 2);
        assert!(matches.is_assignable(&switch));
        assert_eq!(matches.flag(&switch), Some(false));
        assert_eq!(matches.text(&switch), None);
        assert_eq!(matches.text(&field), Some("abc"));

        matches.set(&switch, Value::Flag(true));
        assert_eq!(matches.len(), 2);
        assert_eq!(matches.flag(&switch), Some(true));
    }

    #[test]
    fn matches_extra_content() {
        let mut matches = Matches::default();
        let root = ElementPath::root();
        let command = root.child(0);

        matches.activate(&command);
        assert_eq!(matches.extra_content(&command), Some(&[][..]));

        matches.push_extra(&root, "a");
        matches.push_extra(&root, "b");
        matches.activate(&root);
        assert_eq!(
            matches.extra_content(&root),
            Some(&["a".to_string(), "b".to_string()][..])
        );
        assert_eq!(matches.extra_content(&root.child(1)), None);
    }
}

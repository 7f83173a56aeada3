//! The parsed document tree.
//!
//! An [`Element`] is one node of the tree: a tagged union over the six JSON
//! value kinds. Numbers keep their original decimal text; converting them is
//! up to the caller. Elements are only produced by the parser and are
//! immutable afterwards.

use core::{fmt, mem, slice};
use std::collections::{BTreeMap, btree_map};

use crate::{
    error::{IndexError, NavigationError},
    stack::{ContainerStack, Frame},
};

/// Containers nested deeper than this print as `Array(..)` / `Object(..)`.
const MAX_DEBUG_DEPTH: usize = 64;

/// Members of an object element.
pub type Map = BTreeMap<String, Element>;

/// Children of an array element.
pub type Array = Vec<Element>;

/// The kind of an [`Element`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// `null`, or the root of an empty document.
    Null,
    /// `true` or `false`.
    Bool,
    /// A number, kept as text.
    Number,
    /// A decoded string.
    String,
    /// An ordered sequence of elements.
    Array,
    /// A mapping from unique keys to elements.
    Object,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ElementKind::Null => "null",
            ElementKind::Bool => "bool",
            ElementKind::Number => "number",
            ElementKind::String => "string",
            ElementKind::Array => "array",
            ElementKind::Object => "object",
        })
    }
}

#[derive(Default)]
enum Repr {
    #[default]
    Null,
    Bool(bool),
    Number(String),
    String(String),
    Array(Array),
    Object(Map),
}

/// A node of a parsed JSON document.
///
/// Lookups come in two forms: plain ones (`get`, `at`, `string`, ...) that
/// answer `None`, `""` or `false` when something is missing, and `try_*`
/// forms that report why. Plain lookups chain through `Option` with the
/// [`Lookup`] trait.
///
/// # Examples
///
/// ```rust
/// use jsontree::Lookup;
///
/// let root = jsontree::from_str(r#"{"a": [432], "b": {"c": true}}"#).unwrap();
/// assert_eq!(root.get(["a"]).at(0).value(), "432");
/// assert_eq!(root.string(["a", "0"]), "432");
/// assert!(root.boolean(["b", "c"]));
/// assert!(!root.has("missing"));
/// assert!(root.try_get(["b", "d"]).is_err());
/// ```
#[derive(Default)]
pub struct Element {
    repr: Repr,
}

/// The children of a container, paired with their member names.
enum Children<'a> {
    Array(slice::Iter<'a, Element>),
    Object(btree_map::Iter<'a, String, Element>),
}

impl<'a> Iterator for Children<'a> {
    type Item = (Option<&'a str>, &'a Element);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Children::Array(items) => items.next().map(|element| (None, element)),
            Children::Object(members) => members
                .next()
                .map(|(key, element)| (Some(key.as_str()), element)),
        }
    }
}

// Clone, equality and drop walk the tree with explicit worklists, so a
// document nested as deep as the parser accepts never exhausts the call stack.
impl Clone for Element {
    fn clone(&self) -> Self {
        let mut stack = ContainerStack::new();
        let mut open: Vec<Children<'_>> = Vec::new();
        let mut next: (Option<&str>, &Element) = (None, self);
        loop {
            let (key, element) = next;
            let key = key.map(str::to_owned);
            let mut finished = match &element.repr {
                Repr::Array(items) => {
                    stack.push(Frame::array(key));
                    open.push(Children::Array(items.iter()));
                    None
                }
                Repr::Object(members) => {
                    stack.push(Frame::object(key));
                    open.push(Children::Object(members.iter()));
                    None
                }
                Repr::Null => Some((key, Element::null())),
                Repr::Bool(value) => Some((key, Element::boolean_value(*value))),
                Repr::Number(text) => Some((key, Element::number(text.clone()))),
                Repr::String(text) => Some((key, Element::string_value(text.clone()))),
            };
            next = loop {
                if let Some((key, element)) = finished.take() {
                    if let Some(root) = stack.attach(key, element) {
                        return root;
                    }
                }
                if let Some(child) = open.last_mut().and_then(Iterator::next) {
                    break child;
                }
                open.pop();
                finished = stack.pop().map(Frame::into_element);
            };
        }
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((left, right)) = pending.pop() {
            match (&left.repr, &right.repr) {
                (Repr::Null, Repr::Null) => {}
                (Repr::Bool(a), Repr::Bool(b)) if a == b => {}
                (Repr::Number(a), Repr::Number(b)) | (Repr::String(a), Repr::String(b))
                    if a == b => {}
                (Repr::Array(a), Repr::Array(b)) if a.len() == b.len() => {
                    pending.extend(a.iter().zip(b));
                }
                (Repr::Object(a), Repr::Object(b)) if a.len() == b.len() => {
                    for ((key_a, a), (key_b, b)) in a.iter().zip(b) {
                        if key_a != key_b {
                            return false;
                        }
                        pending.push((a, b));
                    }
                }
                _ => return false,
            }
        }
        true
    }
}

impl Eq for Element {}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let root = Nested {
            element: self,
            depth: 0,
        };
        fmt::Debug::fmt(&root, f)
    }
}

/// Debug view of an element at a given nesting depth.
struct Nested<'a> {
    element: &'a Element,
    depth: usize,
}

impl fmt::Debug for Nested<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let depth = self.depth + 1;
        match &self.element.repr {
            Repr::Null => f.write_str("Null"),
            Repr::Bool(value) => f.debug_tuple("Bool").field(value).finish(),
            Repr::Number(text) => f.debug_tuple("Number").field(text).finish(),
            Repr::String(text) => f.debug_tuple("String").field(text).finish(),
            Repr::Array(_) if depth > MAX_DEBUG_DEPTH => {
                f.debug_tuple("Array").finish_non_exhaustive()
            }
            Repr::Object(_) if depth > MAX_DEBUG_DEPTH => {
                f.debug_tuple("Object").finish_non_exhaustive()
            }
            Repr::Array(items) => f
                .debug_tuple("Array")
                .field(&Items { items, depth })
                .finish(),
            Repr::Object(members) => f
                .debug_tuple("Object")
                .field(&Members { members, depth })
                .finish(),
        }
    }
}

struct Items<'a> {
    items: &'a [Element],
    depth: usize,
}

impl fmt::Debug for Items<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let depth = self.depth;
        f.debug_list()
            .entries(self.items.iter().map(|element| Nested { element, depth }))
            .finish()
    }
}

struct Members<'a> {
    members: &'a Map,
    depth: usize,
}

impl fmt::Debug for Members<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let depth = self.depth;
        f.debug_map()
            .entries(
                self.members
                    .iter()
                    .map(|(key, element)| (key, Nested { element, depth })),
            )
            .finish()
    }
}

// Construction is reserved to the parser.
impl Element {
    pub(crate) fn null() -> Self {
        Self { repr: Repr::Null }
    }

    pub(crate) fn boolean_value(value: bool) -> Self {
        Self {
            repr: Repr::Bool(value),
        }
    }

    pub(crate) fn number(text: String) -> Self {
        Self {
            repr: Repr::Number(text),
        }
    }

    pub(crate) fn string_value(text: String) -> Self {
        Self {
            repr: Repr::String(text),
        }
    }

    pub(crate) fn array(items: Array) -> Self {
        Self {
            repr: Repr::Array(items),
        }
    }

    pub(crate) fn object(members: Map) -> Self {
        Self {
            repr: Repr::Object(members),
        }
    }

    /// Unwraps the text of a string element.
    pub(crate) fn into_string(mut self) -> Option<String> {
        match &mut self.repr {
            Repr::String(text) => Some(mem::take(text)),
            _ => None,
        }
    }
}

impl Drop for Element {
    // Flattens nested containers onto a worklist instead of recursing once
    // per nesting level.
    fn drop(&mut self) {
        let mut pending: Vec<Element> = match &mut self.repr {
            Repr::Array(items) if !items.is_empty() => mem::take(items),
            Repr::Object(members) if !members.is_empty() => {
                mem::take(members).into_values().collect()
            }
            _ => return,
        };
        while let Some(mut element) = pending.pop() {
            match &mut element.repr {
                Repr::Array(items) => pending.append(items),
                Repr::Object(members) => pending.extend(mem::take(members).into_values()),
                _ => {}
            }
        }
    }
}

impl Element {
    /// The kind of this element.
    #[must_use]
    pub fn kind(&self) -> ElementKind {
        match self.repr {
            Repr::Null => ElementKind::Null,
            Repr::Bool(_) => ElementKind::Bool,
            Repr::Number(_) => ElementKind::Number,
            Repr::String(_) => ElementKind::String,
            Repr::Array(_) => ElementKind::Array,
            Repr::Object(_) => ElementKind::Object,
        }
    }

    /// Returns `true` if the element is `null`.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self.repr, Repr::Null)
    }

    /// Returns `true` if the element is a boolean.
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self.repr, Repr::Bool(_))
    }

    /// Returns `true` if the element is a number.
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self.repr, Repr::Number(_))
    }

    /// Returns `true` if the element is a string.
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self.repr, Repr::String(_))
    }

    /// Returns `true` if the element is an array.
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self.repr, Repr::Array(_))
    }

    /// Returns `true` if the element is an object.
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self.repr, Repr::Object(_))
    }

    /// Number of children of an array or object, byte length of a string,
    /// and `0` for everything else.
    #[must_use]
    pub fn size(&self) -> usize {
        match &self.repr {
            Repr::Array(items) => items.len(),
            Repr::Object(members) => members.len(),
            Repr::String(text) => text.len(),
            Repr::Null | Repr::Bool(_) | Repr::Number(_) => 0,
        }
    }

    /// Returns `true` if the element is an object with a member named `key`.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        match &self.repr {
            Repr::Object(members) => members.contains_key(key),
            _ => false,
        }
    }

    /// The text of a scalar: `"true"`/`"false"` for booleans, the literal
    /// text of a number, the decoded string. Empty for `null`, arrays and
    /// objects.
    #[must_use]
    pub fn value(&self) -> &str {
        match &self.repr {
            Repr::Bool(true) => "true",
            Repr::Bool(false) => "false",
            Repr::Number(text) | Repr::String(text) => text,
            Repr::Null | Repr::Array(_) | Repr::Object(_) => "",
        }
    }

    /// The decoded text of a string element.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match &self.repr {
            Repr::String(text) => Some(text),
            _ => None,
        }
    }

    /// The literal text of a number element.
    #[must_use]
    pub fn as_number(&self) -> Option<&str> {
        match &self.repr {
            Repr::Number(text) => Some(text),
            _ => None,
        }
    }

    /// The value of a boolean element.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self.repr {
            Repr::Bool(value) => Some(value),
            _ => None,
        }
    }

    /// The children of an array element.
    #[must_use]
    pub fn as_array(&self) -> Option<&[Element]> {
        match &self.repr {
            Repr::Array(items) => Some(items),
            _ => None,
        }
    }

    /// The members of an object element.
    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        match &self.repr {
            Repr::Object(members) => Some(members),
            _ => None,
        }
    }

    /// Iterates over the children of an array; empty for other kinds.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.as_array().unwrap_or_default().iter()
    }

    /// Iterates over the members of an object in key order; empty for other
    /// kinds.
    pub fn members(&self) -> impl Iterator<Item = (&str, &Element)> {
        self.as_object()
            .into_iter()
            .flatten()
            .map(|(key, element)| (key.as_str(), element))
    }

    /// The child of an array at `index`.
    #[must_use]
    pub fn at(&self, index: usize) -> Option<&Element> {
        self.try_at(index).ok()
    }

    /// The child of an array at `index`.
    ///
    /// # Errors
    ///
    /// Fails if the element is not an array or `index` is not below its
    /// length.
    pub fn try_at(&self, index: usize) -> Result<&Element, IndexError> {
        let Repr::Array(items) = &self.repr else {
            return Err(IndexError::NotArray { kind: self.kind() });
        };
        items.get(index).ok_or(IndexError::OutOfRange {
            index,
            len: items.len(),
        })
    }

    /// Follows `path` from this element. See [`try_get`](Self::try_get).
    #[must_use]
    pub fn get<P>(&self, path: P) -> Option<&Element>
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
    {
        self.try_get(path).ok()
    }

    /// Follows `path` from this element.
    ///
    /// Each segment is a member name for objects and a decimal index for
    /// arrays. Empty segments are skipped, so an empty path, or one made of
    /// empty segments only, resolves to `self`.
    ///
    /// # Errors
    ///
    /// Fails at the first segment that cannot be resolved.
    pub fn try_get<P>(&self, path: P) -> Result<&Element, NavigationError>
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
    {
        let mut current = self;
        for (position, segment) in path.into_iter().enumerate() {
            let segment = segment.as_ref();
            if segment.is_empty() {
                continue;
            }
            current = match &current.repr {
                Repr::Object(members) => {
                    members
                        .get(segment)
                        .ok_or_else(|| NavigationError::MissingMember {
                            position,
                            name: segment.to_owned(),
                        })?
                }
                Repr::Array(items) => {
                    let index: usize = segment.parse().map_err(|_| NavigationError::InvalidIndex {
                        position,
                        segment: segment.to_owned(),
                    })?;
                    items.get(index).ok_or(NavigationError::IndexOutOfRange {
                        position,
                        index,
                        len: items.len(),
                    })?
                }
                _ => {
                    return Err(NavigationError::NotContainer {
                        position,
                        kind: current.kind(),
                    });
                }
            };
        }
        Ok(current)
    }

    /// The [`value`](Self::value) text at `path`, or `""` if the path does
    /// not resolve.
    #[must_use]
    pub fn string<P>(&self, path: P) -> &str
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
    {
        self.get(path).map_or("", Element::value)
    }

    /// The [`value`](Self::value) text at `path`.
    ///
    /// # Errors
    ///
    /// Fails if the path does not resolve.
    pub fn try_string<P>(&self, path: P) -> Result<&str, NavigationError>
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
    {
        self.try_get(path).map(Element::value)
    }

    /// The boolean at `path`, or `false` if the path does not resolve to a
    /// boolean.
    #[must_use]
    pub fn boolean<P>(&self, path: P) -> bool
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
    {
        self.try_boolean(path).unwrap_or(false)
    }

    /// The boolean at `path`.
    ///
    /// # Errors
    ///
    /// Fails if the path does not resolve or resolves to something other
    /// than a boolean.
    pub fn try_boolean<P>(&self, path: P) -> Result<bool, NavigationError>
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
    {
        let element = self.try_get(path)?;
        element.as_bool().ok_or(NavigationError::KindMismatch {
            expected: ElementKind::Bool,
            found: element.kind(),
        })
    }
}

/// Accessors over the possibly-absent result of a previous lookup.
///
/// Every method treats `None` as a missing element: type tests answer
/// `false`, sizes are `0`, text is empty and further lookups stay `None`.
///
/// ```rust
/// use jsontree::Lookup;
///
/// let root = jsontree::from_str(r#"{"list": ["x", "yz"]}"#).unwrap();
/// assert_eq!(root.get(["list"]).at(1).size(), 2);
/// assert!(!root.get(["nope"]).is_array());
/// assert_eq!(root.get(["nope"]).get(["deeper"]).value(), "");
/// ```
pub trait Lookup<'a> {
    /// See [`Element::get`].
    #[must_use]
    fn get<P>(self, path: P) -> Option<&'a Element>
    where
        P: IntoIterator,
        P::Item: AsRef<str>;

    /// See [`Element::at`].
    #[must_use]
    fn at(self, index: usize) -> Option<&'a Element>;

    /// See [`Element::string`].
    #[must_use]
    fn string<P>(self, path: P) -> &'a str
    where
        P: IntoIterator,
        P::Item: AsRef<str>;

    /// See [`Element::value`].
    #[must_use]
    fn value(self) -> &'a str;

    /// See [`Element::size`].
    #[must_use]
    fn size(self) -> usize;

    /// See [`Element::has`].
    #[must_use]
    fn has(self, key: &str) -> bool;

    /// See [`Element::is_null`].
    #[must_use]
    fn is_null(self) -> bool;

    /// See [`Element::is_bool`].
    #[must_use]
    fn is_bool(self) -> bool;

    /// See [`Element::is_number`].
    #[must_use]
    fn is_number(self) -> bool;

    /// See [`Element::is_string`].
    #[must_use]
    fn is_string(self) -> bool;

    /// See [`Element::is_array`].
    #[must_use]
    fn is_array(self) -> bool;

    /// See [`Element::is_object`].
    #[must_use]
    fn is_object(self) -> bool;

    /// See [`Element::as_bool`].
    #[must_use]
    fn as_bool(self) -> Option<bool>;
}

impl<'a> Lookup<'a> for Option<&'a Element> {
    fn get<P>(self, path: P) -> Option<&'a Element>
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
    {
        self.and_then(|element| element.get(path))
    }

    fn at(self, index: usize) -> Option<&'a Element> {
        self.and_then(|element| element.at(index))
    }

    fn string<P>(self, path: P) -> &'a str
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
    {
        self.map_or("", |element| element.string(path))
    }

    fn value(self) -> &'a str {
        self.map_or("", Element::value)
    }

    fn size(self) -> usize {
        self.map_or(0, Element::size)
    }

    fn has(self, key: &str) -> bool {
        self.is_some_and(|element| element.has(key))
    }

    fn is_null(self) -> bool {
        self.is_some_and(Element::is_null)
    }

    fn is_bool(self) -> bool {
        self.is_some_and(Element::is_bool)
    }

    fn is_number(self) -> bool {
        self.is_some_and(Element::is_number)
    }

    fn is_string(self) -> bool {
        self.is_some_and(Element::is_string)
    }

    fn is_array(self) -> bool {
        self.is_some_and(Element::is_array)
    }

    fn is_object(self) -> bool {
        self.is_some_and(Element::is_object)
    }

    fn as_bool(self) -> Option<bool> {
        self.and_then(Element::as_bool)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn sample() -> Element {
        let mut inner = Map::new();
        inner.insert("over".into(), Element::string_value("the".into()));
        let mut root = Map::new();
        root.insert("the".into(), Element::string_value("quick".into()));
        root.insert(
            "brown".into(),
            Element::array(vec![
                Element::string_value("fox".into()),
                Element::object(inner),
                Element::array(vec![Element::number("12".into())]),
                Element::boolean_value(true),
                Element::null(),
            ]),
        );
        Element::object(root)
    }

    #[test]
    fn kinds_and_sizes() {
        let root = sample();
        assert_eq!(root.kind(), ElementKind::Object);
        assert_eq!(root.size(), 2);
        assert_eq!(root.get(["the"]).map(Element::size), Some(5));
        assert_eq!(root.get(["brown"]).map(Element::size), Some(5));
        assert_eq!(root.get(["brown", "2", "0"]).map(Element::size), Some(0));
        assert_eq!(root.get(["brown", "3"]).map(Element::size), Some(0));
    }

    #[test]
    fn empty_path_and_empty_segments_resolve_to_self() {
        let root = sample();
        assert_eq!(root.try_get([] as [&str; 0]), Ok(&root));
        assert_eq!(root.try_get(["", ""]), Ok(&root));
        assert_eq!(root.try_string(["", "the"]), Ok("quick"));
    }

    #[rstest]
    #[case(&["tha"], NavigationError::MissingMember { position: 0, name: "tha".into() })]
    #[case(&["brown", "x"], NavigationError::InvalidIndex { position: 1, segment: "x".into() })]
    #[case(&["brown", "-1"], NavigationError::InvalidIndex { position: 1, segment: "-1".into() })]
    #[case(&["brown", "5"], NavigationError::IndexOutOfRange { position: 1, index: 5, len: 5 })]
    #[case(&["the", "4"], NavigationError::NotContainer { position: 1, kind: ElementKind::String })]
    #[case(&["brown", "3", "value"], NavigationError::NotContainer { position: 2, kind: ElementKind::Bool })]
    fn navigation_failures(#[case] path: &[&str], #[case] expected: NavigationError) {
        let root = sample();
        assert_eq!(root.try_get(path), Err(expected));
        assert_eq!(root.get(path), None);
        assert_eq!(root.string(path), "");
    }

    #[test]
    fn indexed_access() {
        let root = sample();
        assert_eq!(
            root.try_at(0),
            Err(IndexError::NotArray {
                kind: ElementKind::Object
            })
        );
        let brown = root.get(["brown"]).unwrap();
        assert!(brown.try_at(2).unwrap().is_array());
        assert_eq!(
            brown.try_at(5),
            Err(IndexError::OutOfRange { index: 5, len: 5 })
        );
    }

    #[test]
    fn value_text_per_kind() {
        let root = sample();
        assert_eq!(root.string(["brown", "0"]), "fox");
        assert_eq!(root.string(["brown", "2", "0"]), "12");
        assert_eq!(root.string(["brown", "3"]), "true");
        assert_eq!(root.string(["brown", "4"]), "");
        assert_eq!(root.string(["brown"]), "");
        assert!(root.get(["brown", "4"]).unwrap().is_null());
    }

    #[test]
    fn boolean_accessors() {
        let root = sample();
        assert!(root.boolean(["brown", "3"]));
        assert!(!root.boolean(["brown", "0"]));
        assert_eq!(
            root.try_boolean(["brown", "0"]),
            Err(NavigationError::KindMismatch {
                expected: ElementKind::Bool,
                found: ElementKind::String,
            })
        );
        assert!(root.get(["brown", "3"]).is_bool());
        assert!(!root.get(["brown", "3"]).has("value"));
    }

    #[test]
    fn absent_lookups_answer_false() {
        let root = sample();
        let missing = root.get(["nothing"]);
        assert!(!missing.is_null());
        assert!(!missing.is_array());
        assert!(!missing.is_object());
        assert!(!missing.is_string());
        assert!(root.get(["the"]).is_string());
        assert!(root.get(["brown", "2", "0"]).is_number());
        assert_eq!(missing.size(), 0);
        assert_eq!(missing.at(0), None);
        assert_eq!(missing.as_bool(), None);
    }

    #[test]
    fn clone_and_equality() {
        let root = sample();
        let copy = root.clone();
        assert_eq!(copy, root);
        assert_eq!(copy.string(["brown", "1", "over"]), "the");

        let mut members = Map::new();
        members.insert("the".into(), Element::string_value("quick".into()));
        assert_ne!(Element::object(members), root);
        assert_ne!(Element::number("1".into()), Element::string_value("1".into()));
        assert_ne!(
            Element::array(vec![Element::null()]),
            Element::array(vec![Element::null(), Element::null()])
        );
    }

    #[test]
    fn debug_output_stops_at_max_depth() {
        let mut root = Element::null();
        for _ in 0..MAX_DEBUG_DEPTH + 1 {
            root = Element::array(vec![root]);
        }
        let debug = format!("{root:?}");
        assert_eq!(debug.matches("Array(").count(), MAX_DEBUG_DEPTH + 1);
        assert!(debug.contains("Array(..)"));
        assert!(!debug.contains("Null"));
    }

    #[test]
    fn error_messages() {
        let root = sample();
        insta::assert_snapshot!(
            root.try_get(["brown", "9"]).unwrap_err(),
            @"path element #1 with index 9 is out of range [0:5]"
        );
        insta::assert_snapshot!(
            root.try_at(1).unwrap_err(),
            @"element object does not support indexed access"
        );
    }
}

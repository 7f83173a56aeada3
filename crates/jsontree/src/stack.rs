//! The stack of containers under construction.
//!
//! Each open `[` or `{` is one [`Frame`] on the [`ContainerStack`]. A frame
//! owns the children attached so far and, for a container that is itself an
//! object member, the key it will be stored under once it closes.

use crate::element::{Array, Element, ElementKind, Map};

#[derive(Debug, Clone, PartialEq)]
enum Container {
    Array(Array),
    Object(Map),
}

/// One open container.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    container: Container,
    key: Option<String>,
}

impl Frame {
    /// An empty array frame, stored under `key` in its parent object.
    #[must_use]
    pub fn array(key: Option<String>) -> Self {
        Self {
            container: Container::Array(Array::new()),
            key,
        }
    }

    /// An empty object frame, stored under `key` in its parent object.
    #[must_use]
    pub fn object(key: Option<String>) -> Self {
        Self {
            container: Container::Object(Map::new()),
            key,
        }
    }

    /// The member name this container will be stored under.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// `Array` or `Object`.
    #[must_use]
    pub fn kind(&self) -> ElementKind {
        match self.container {
            Container::Array(_) => ElementKind::Array,
            Container::Object(_) => ElementKind::Object,
        }
    }

    /// Number of children attached so far.
    pub(crate) fn len(&self) -> usize {
        match &self.container {
            Container::Array(items) => items.len(),
            Container::Object(members) => members.len(),
        }
    }

    /// Closes the container, returning its key and the finished element.
    pub(crate) fn into_element(self) -> (Option<String>, Element) {
        let element = match self.container {
            Container::Array(items) => Element::array(items),
            Container::Object(members) => Element::object(members),
        };
        (self.key, element)
    }
}

/// A LIFO of open containers.
#[derive(Debug, Default, Clone)]
pub struct ContainerStack {
    frames: Vec<Frame>,
}

impl ContainerStack {
    /// An empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty stack with room for `capacity` frames.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            frames: Vec::with_capacity(capacity),
        }
    }

    /// Pushes an open container.
    pub fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    /// Removes and returns the innermost open container.
    pub fn pop(&mut self) -> Option<Frame> {
        self.frames.pop()
    }

    /// The innermost open container.
    #[must_use]
    pub fn peek(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Nesting depth.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Returns `true` if no container is open.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Drops every open container, keeping the allocation.
    pub fn clear(&mut self) {
        self.frames.clear();
    }

    /// Attaches a finished element to the innermost container.
    ///
    /// Arrays ignore `key`. Objects insert under `key`, replacing an earlier
    /// member of the same name; a missing key inserts under `""`. With no
    /// container open the element is a finished root and is handed back.
    pub(crate) fn attach(&mut self, key: Option<String>, element: Element) -> Option<Element> {
        let Some(frame) = self.frames.last_mut() else {
            return Some(element);
        };
        match &mut frame.container {
            Container::Array(items) => items.push(element),
            Container::Object(members) => {
                members.insert(key.unwrap_or_default(), element);
            }
        }
        None
    }
}

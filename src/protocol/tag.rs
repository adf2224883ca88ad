//! Tag tree, the intermediate form of every packing instruction
//!
//! A [`Tag`] is either a leaf holding a [`Scalar`] or a branch holding an
//! ordered list of child tags. Tag names are non-empty [`TagName`]s, almost
//! always protocol constants. Child order is preserved exactly as built.

use crate::exceptions::{PackError, Result};
use serde::Serialize;
use std::fmt;

/// Non-empty name of a tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TagName(&'static str);

impl TagName {
    /// Checked name, `None` when empty
    pub const fn new(name: &'static str) -> Option<Self> {
        if name.is_empty() {
            None
        } else {
            Some(TagName(name))
        }
    }

    /// Checked name, rejecting an empty string with a validation error
    pub fn parse(name: &'static str) -> Result<Self> {
        Self::new(name).ok_or_else(|| PackError::Validation("tag name is empty".to_string()))
    }

    /// Name for a `const` item; an empty name fails const evaluation
    pub(crate) const fn from_static(name: &'static str) -> Self {
        assert!(!name.is_empty(), "tag name is empty");
        TagName(name)
    }

    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl AsRef<str> for TagName {
    fn as_ref(&self) -> &str {
        self.0
    }
}

impl PartialEq<str> for TagName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TagName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Scalar payload of a leaf tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Int(i64),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(text) => f.write_str(text),
            Scalar::Int(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Int(i64::from(value))
    }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self {
        Scalar::Int(i64::from(value))
    }
}

/// Content of a tag: exactly one of a scalar or a child list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TagContent {
    #[serde(rename = "value")]
    Scalar(Scalar),
    #[serde(rename = "children")]
    Children(Vec<Tag>),
}

/// Node of the protocol tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    name: TagName,
    #[serde(flatten)]
    content: TagContent,
}

impl Tag {
    /// Create a leaf tag holding a scalar value
    pub fn leaf(name: TagName, value: impl Into<Scalar>) -> Self {
        Tag {
            name,
            content: TagContent::Scalar(value.into()),
        }
    }

    /// Create a branch tag from an ordered list of children
    pub fn branch(name: TagName, children: Vec<Tag>) -> Self {
        Tag {
            name,
            content: TagContent::Children(children),
        }
    }

    /// Start building a branch tag child by child
    pub fn builder(name: TagName) -> TagBuilder {
        TagBuilder {
            name,
            children: Vec::new(),
        }
    }

    /// Reopen a branch so more children can be appended.
    ///
    /// Returns `None` for a leaf, which can never carry children.
    pub fn into_builder(self) -> Option<TagBuilder> {
        match self.content {
            TagContent::Children(children) => Some(TagBuilder {
                name: self.name,
                children,
            }),
            TagContent::Scalar(_) => None,
        }
    }

    pub fn name(&self) -> TagName {
        self.name
    }

    pub fn content(&self) -> &TagContent {
        &self.content
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.content, TagContent::Scalar(_))
    }

    /// Scalar value of a leaf, `None` for a branch
    pub fn scalar(&self) -> Option<&Scalar> {
        match &self.content {
            TagContent::Scalar(value) => Some(value),
            TagContent::Children(_) => None,
        }
    }

    /// Text value of a leaf holding text
    pub fn text(&self) -> Option<&str> {
        match self.scalar() {
            Some(Scalar::Text(text)) => Some(text),
            _ => None,
        }
    }

    /// Integer value of a leaf holding an integer
    pub fn int(&self) -> Option<i64> {
        match self.scalar() {
            Some(Scalar::Int(value)) => Some(*value),
            _ => None,
        }
    }

    /// Children of a branch in insertion order (empty for a leaf)
    pub fn children(&self) -> &[Tag] {
        match &self.content {
            TagContent::Children(children) => children,
            TagContent::Scalar(_) => &[],
        }
    }

    /// First child with the given name
    pub fn child(&self, name: impl AsRef<str>) -> Option<&Tag> {
        let name = name.as_ref();
        self.children().iter().find(|tag| tag.name == name)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::xml::write_tag(f, self)
    }
}

/// Builder for a branch tag; `build` yields the finished, immutable tag
#[derive(Debug, Clone)]
pub struct TagBuilder {
    name: TagName,
    children: Vec<Tag>,
}

impl TagBuilder {
    /// Append a child, consuming and returning the builder
    pub fn child(mut self, tag: Tag) -> Self {
        self.children.push(tag);
        self
    }

    /// Append a child in place
    pub fn push(&mut self, tag: Tag) -> &mut Self {
        self.children.push(tag);
        self
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn build(self) -> Tag {
        Tag::branch(self.name, self.children)
    }
}

// src/protocol/kvp.rs
// Key/value extension block (KeyValPair_PI)

use super::constants::{KEYVAL_PAIR_PI, KEYWORD, SS_LEN, SVALUE};
use super::tag::Tag;
use crate::exceptions::{PackError, Result};
use log::trace;

/// Keyword entry of a key/value extension block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValuePair {
    key: String,
    value: String,
}

impl KeyValuePair {
    /// Create a pair; the key must be non-empty, the value may be empty
    pub fn instance(key: &str, value: &str) -> Result<Self> {
        if key.is_empty() {
            return Err(PackError::Validation("key is empty".to_string()));
        }
        Ok(KeyValuePair {
            key: key.to_string(),
            value: value.to_string(),
        })
    }

    /// Flag-style pair for a protocol keyword constant
    pub(crate) fn flag(keyword: &'static str) -> Self {
        KeyValuePair {
            key: keyword.to_string(),
            value: String::new(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Ordered list of key/value pairs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyValueList {
    pairs: Vec<KeyValuePair>,
}

impl KeyValueList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, pair: KeyValuePair) -> &mut Self {
        self.pairs.push(pair);
        self
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, KeyValuePair> {
        self.pairs.iter()
    }

    /// Check whether a key is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|pair| pair.key == key)
    }

    /// Render as a `KeyValPair_PI` tag
    pub fn to_tag(&self) -> Tag {
        key_value_tag(&self.pairs)
    }

    /// Read a rendered `KeyValPair_PI` tag back into pairs.
    ///
    /// Returns `None` if the tag is not a wrapper whose `ssLen` matches the
    /// number of `keyWord` and `svalue` entries.
    pub fn from_tag(tag: &Tag) -> Option<Self> {
        if tag.name() != KEYVAL_PAIR_PI || tag.is_leaf() {
            return None;
        }
        let children = tag.children();
        let (count, rest) = children.split_first()?;
        if count.name() != SS_LEN {
            return None;
        }
        let count = usize::try_from(count.int()?).ok()?;
        if rest.len() != count.checked_mul(2)? {
            return None;
        }

        let (keys, values) = rest.split_at(count);
        let mut list = KeyValueList::new();
        for (key, value) in keys.iter().zip(values) {
            if key.name() != KEYWORD || value.name() != SVALUE {
                return None;
            }
            let pair = KeyValuePair::instance(key.text()?, value.text()?).ok()?;
            list.push(pair);
        }
        Some(list)
    }
}

impl FromIterator<KeyValuePair> for KeyValueList {
    fn from_iter<I: IntoIterator<Item = KeyValuePair>>(iter: I) -> Self {
        KeyValueList {
            pairs: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a KeyValueList {
    type Item = &'a KeyValuePair;
    type IntoIter = std::slice::Iter<'a, KeyValuePair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

/// Build the `KeyValPair_PI` wrapper for a list of pairs.
///
/// Layout is `ssLen` (pair count), then every `keyWord` in order, then every
/// `svalue` in the same order. An empty list still yields the wrapper with
/// `ssLen` set to 0.
pub fn key_value_tag(pairs: &[KeyValuePair]) -> Tag {
    trace!("📦 Packing key/value block: count={}", pairs.len());

    let mut builder = Tag::builder(KEYVAL_PAIR_PI);
    builder.push(Tag::leaf(SS_LEN, pairs.len() as i64));
    for pair in pairs {
        builder.push(Tag::leaf(KEYWORD, pair.key.as_str()));
    }
    for pair in pairs {
        builder.push(Tag::leaf(SVALUE, pair.value.as_str()));
    }
    builder.build()
}

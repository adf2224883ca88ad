// src/protocol/coll_inp.rs
// CollInpNew_PI - collection delete and unregister requests

use super::constants::{
    COLL_INP_PI, COLL_NAME, FLAGS, FLAGS_NONE, FORCE_FLAG_KW, OPR_TYPE, OPR_TYPE_DEFAULT,
    OPR_TYPE_UNREGISTER, RECURSIVE_OPR_KW,
};
use super::instruction::PackingInstruction;
use super::kvp::{KeyValueList, KeyValuePair};
use super::tag::Tag;
use crate::exceptions::{PackError, Result};
use log::{debug, trace};

/// Collection operation request body.
///
/// Built only through the named constructors below, each of which rejects an
/// empty collection name. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollInp {
    collection_name: String,
    recursive_operation: bool,
    force_operation: bool,
    unregister: bool,
}

impl CollInp {
    /// Recursively delete a collection, moving its contents to the trash
    pub fn recursive_delete_no_force(collection_name: &str) -> Result<Self> {
        Self::new(collection_name, true, false, false)
    }

    /// Recursively delete a collection, bypassing the trash
    pub fn recursive_delete_with_force(collection_name: &str) -> Result<Self> {
        Self::new(collection_name, true, true, false)
    }

    /// Unregister a collection that was registered in place, leaving the
    /// underlying files untouched
    pub fn unregister_collection(
        collection_name: &str,
        force: bool,
        recursive: bool,
    ) -> Result<Self> {
        Self::new(collection_name, recursive, force, true)
    }

    pub fn instance(collection_name: &str, recursive_operation: bool) -> Result<Self> {
        Self::new(collection_name, recursive_operation, false, false)
    }

    pub fn instance_with_force(
        collection_name: &str,
        recursive_operation: bool,
        force_operation: bool,
    ) -> Result<Self> {
        Self::new(collection_name, recursive_operation, force_operation, false)
    }

    fn new(
        collection_name: &str,
        recursive_operation: bool,
        force_operation: bool,
        unregister: bool,
    ) -> Result<Self> {
        if collection_name.is_empty() {
            debug!("❌ Rejected collection operation: collection name is empty");
            return Err(PackError::Validation(
                "collection name is null or blank".to_string(),
            ));
        }

        Ok(CollInp {
            collection_name: collection_name.to_string(),
            recursive_operation,
            force_operation,
            unregister,
        })
    }

    pub fn collection_name(&self) -> &str {
        &self.collection_name
    }

    pub fn is_recursive_operation(&self) -> bool {
        self.recursive_operation
    }

    pub fn is_force_operation(&self) -> bool {
        self.force_operation
    }

    pub fn is_unregister(&self) -> bool {
        self.unregister
    }

    /// oprType sent to the server; unregister is the only non-default value
    pub fn opr_type(&self) -> i64 {
        if self.unregister {
            OPR_TYPE_UNREGISTER
        } else {
            OPR_TYPE_DEFAULT
        }
    }

    /// Keyword block: force always precedes recursive
    fn key_values(&self) -> KeyValueList {
        let mut kvps = KeyValueList::new();
        if self.force_operation {
            kvps.push(KeyValuePair::flag(FORCE_FLAG_KW));
        }
        if self.recursive_operation {
            kvps.push(KeyValuePair::flag(RECURSIVE_OPR_KW));
        }
        kvps
    }
}

impl PackingInstruction for CollInp {
    fn pi_tag(&self) -> &'static str {
        COLL_INP_PI.as_str()
    }

    fn tag_value(&self) -> Tag {
        trace!(
            "📦 Packing {}: collection={} recursive={} force={} unregister={}",
            COLL_INP_PI,
            self.collection_name,
            self.recursive_operation,
            self.force_operation,
            self.unregister
        );

        Tag::builder(COLL_INP_PI)
            .child(Tag::leaf(COLL_NAME, self.collection_name.as_str()))
            .child(Tag::leaf(FLAGS, FLAGS_NONE))
            .child(Tag::leaf(OPR_TYPE, self.opr_type()))
            .child(self.key_values().to_tag())
            .build()
    }
}

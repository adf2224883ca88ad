//! Packing instructions for the storage-grid XML protocol

pub mod coll_inp;
pub mod constants;
pub mod instruction;
pub mod kvp;
pub mod tag;
pub mod xml;

pub use coll_inp::CollInp;
pub use instruction::PackingInstruction;
pub use kvp::{KeyValueList, KeyValuePair, key_value_tag};
pub use tag::{Scalar, Tag, TagBuilder, TagContent, TagName};

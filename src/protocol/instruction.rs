// src/protocol/instruction.rs
// Base trait for packing instructions

use super::tag::Tag;
use super::xml;
use std::fmt;

/// An immutable, validated request body ready to hand to a transport.
///
/// Implementors validate their inputs when they are constructed, so
/// rendering never fails and may be repeated with identical results.
pub trait PackingInstruction: fmt::Debug + Send + Sync {
    /// Name of the root tag this instruction renders
    fn pi_tag(&self) -> &'static str;

    /// Render the instruction as a tag tree
    fn tag_value(&self) -> Tag;

    /// Render the instruction as XML protocol text
    fn to_xml(&self) -> String {
        xml::render(&self.tag_value())
    }
}

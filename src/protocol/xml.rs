// src/protocol/xml.rs
// XML protocol rendering of a tag tree

use super::tag::{Scalar, Tag, TagContent};
use std::fmt::{self, Write};

/// Render a tag tree as server XML protocol text
pub fn render(tag: &Tag) -> String {
    tag.to_string()
}

/// Write a tag and its children to `out`.
///
/// A leaf is written as `<name>value</name>` and a branch as `<name>`, its
/// children, then `</name>`. Every closing tag is followed by a newline.
pub fn write_tag<W: Write>(out: &mut W, tag: &Tag) -> fmt::Result {
    write!(out, "<{}>", tag.name())?;
    match tag.content() {
        TagContent::Scalar(Scalar::Text(text)) => write_escaped(out, text)?,
        TagContent::Scalar(Scalar::Int(value)) => write!(out, "{value}")?,
        TagContent::Children(children) => {
            for child in children {
                write_tag(out, child)?;
            }
        }
    }
    writeln!(out, "</{}>", tag.name())
}

/// Escape text for the XML protocol.
///
/// The server unescapes backtick from `&apos;`, so a literal apostrophe is
/// passed through and a backtick is encoded.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    // Writing into a String cannot fail
    let _ = write_escaped(&mut escaped, text);
    escaped
}

fn write_escaped<W: Write>(out: &mut W, text: &str) -> fmt::Result {
    for ch in text.chars() {
        match ch {
            '&' => out.write_str("&amp;")?,
            '<' => out.write_str("&lt;")?,
            '>' => out.write_str("&gt;")?,
            '"' => out.write_str("&quot;")?,
            '`' => out.write_str("&apos;")?,
            other => out.write_char(other)?,
        }
    }
    Ok(())
}

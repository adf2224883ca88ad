//! packinstr - packing instructions for a storage-grid XML protocol
//!
//! This crate turns typed collection operations (delete, recursive delete,
//! forced delete, unregister) into the ordered tag trees the server expects,
//! and linearizes those trees into protocol XML.

// Enforce strict code quality and reliability
#![deny(
    // Safety
    unsafe_code,

    // Correctness
    missing_debug_implementations,
    unreachable_pub,

    // Future compatibility
    future_incompatible,

    // Rust 2018 idioms
    rust_2018_idioms,

    // All warnings must be fixed
    warnings,
)]
#![warn(
    // Documentation
    missing_docs,

    // Error handling best practices
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::unimplemented,
    clippy::todo,

    // Performance
    clippy::inefficient_to_string,
    clippy::large_enum_variant,

    // Code clarity and maintainability
    clippy::cognitive_complexity,
    clippy::too_many_arguments,
    clippy::type_complexity,

    // Best practices
    clippy::clone_on_ref_ptr,
    clippy::wildcard_imports,
    clippy::enum_glob_use,
    clippy::if_not_else,
    clippy::single_match_else,
    clippy::needless_continue,
    clippy::explicit_iter_loop,
    clippy::explicit_into_iter_loop,
)]
#![allow(missing_docs)]

pub mod api;
pub mod defaults;
pub mod exceptions;
pub mod exit_codes;
pub mod logger;
pub mod protocol;
pub mod utils;
pub mod version;

// Re-export main API functions
pub use api::{RenderOptions, render_instruction};
pub use defaults::OutputFormat;
pub use exceptions::{PackError, Result};

// Re-export protocol types for direct use by transports
pub use protocol::{CollInp, KeyValuePair, PackingInstruction, Tag, TagName};

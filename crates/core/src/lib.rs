//! Core types for respak resource containers
//!
//! This crate defines the vocabulary shared by every other crate:
//! - ResourceId: ordered resource kinds and their relative paths
//! - Platform / profiles: compile-time graphics layout selection
//! - ResourceHeader: the 8-byte container envelope
//! - Terminator / Text: in-memory string conventions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod header;
pub mod profile;
pub mod resource_id;
pub mod text;

pub use header::{
    HeaderError, ResourceHeader, DATA_VERSION, HEADER_SIZE, RESOURCE_MAGIC, TRAILER_SIZE,
};
pub use profile::{ActiveProfile, AtariSt, Pc, Platform, ACTIVE_PLATFORM};
pub use resource_id::{ResourceId, BOOTSTRAP_RESOURCE_NAME};
pub use text::{Terminator, Text, MAX_STRING_LEN};

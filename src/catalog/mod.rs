// ABOUTME: Catalog module - tool entries, the immutable registry, and catalog files.
// ABOUTME: Core data model that the search module scores against.

mod builtin;
mod entry;
mod file;
mod registry;

pub use entry::*;
pub use file::*;
pub use registry::*;

#[cfg(test)]
mod file_test;

// ABOUTME: Root module for toolcat - a static catalog of tool pages with search.
// ABOUTME: Re-exports the public types from the catalog and search modules.

pub mod catalog;
pub mod error;
pub mod prelude;
pub mod search;

pub use error::ToolcatError;

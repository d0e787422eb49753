// ABOUTME: Search module - keyword scoring over a registry, query builder, scopes.
// ABOUTME: Everything here is pure and synchronous; searches cannot fail.

mod query;
mod scope;
mod scorer;

pub use query::*;
pub use scope::*;
pub use scorer::*;

#[cfg(test)]
mod query_test;

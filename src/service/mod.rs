//! # Service Layer
//!
//! Database operations, split into read (`Query`) and write (`Mutation`)
//! halves. Handlers never touch the entities directly; everything goes
//! through here so the transactional behavior lives in one place.

mod mutation;
mod query;

pub use mutation::Mutation;
pub use query::Query;

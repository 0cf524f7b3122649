//! # Entity Model
//!
//! The three persisted record types and their relationship wiring.
//!
//! `Mission` is the join entity: it belongs to exactly one `Scientist`
//! and one `Planet`. The derived `Scientist.planets` / `Planet.scientists`
//! views are expressed as `Related` impls going through the mission table.

pub mod mission;
pub mod planet;
pub mod scientist;

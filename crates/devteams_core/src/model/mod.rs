//! Domain entities persisted by the repository layer.
//!
//! # Responsibility
//! - Define the Team and Programmer records and their ownership rules.
//!
//! # Invariants
//! - Identifiers are surrogate integers assigned by storage on first save.
//! - A Team refers to Programmers by id and a Programmer refers back to its
//!   Team by id only. There is no object cycle between the two.

pub mod programmer;
pub mod team;

use thiserror::Error;

/// Entity ownership rules violated by a caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// The operation needs an entity that storage has already assigned an id.
    #[error("{0} has not been saved yet")]
    Unsaved(&'static str),
}

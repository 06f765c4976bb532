//! ClearScope Domain Layer
//!
//! Core data model for the insurance-claim inspection system: the entities a
//! completed walkthrough produces (rooms, damage observations, scope items),
//! the repair-estimating catalog vocabulary, and the trait boundary to the
//! storage layer.
//!
//! ## Key Concepts
//!
//! - **Room**: an inspected area, classified into a policy coverage type by
//!   the structure it belongs to
//! - **Damage observation**: documented damage belonging to exactly one room
//! - **Scope item**: one line of proposed repair work tied to a catalog
//!   code, trade, quantity, and unit
//! - **Catalog entry**: a billable line-item definition with its companion
//!   rules
//!
//! ## Architecture
//!
//! Entities here are plain data: a snapshot arrives as JSON from the field
//! app's storage and is never mutated by downstream consumers. Referential
//! integrity between entities is deliberately not enforced at this layer; a
//! dangling `room_id` is data, not an error. Infrastructure implementations
//! of [`traits::CatalogSource`] live in other crates.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod damage;
pub mod room;
pub mod scope_item;
pub mod traits;

// Re-exports for convenience
pub use catalog::{CatalogEntry, CompanionRules};
pub use damage::DamageObservation;
pub use room::{CoverageType, Room};
pub use scope_item::{ItemStatus, ScopeItem};

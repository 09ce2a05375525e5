//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the parcel record store contract.
//! - Isolate SQLite query details from service/business orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.

pub mod parcel_repo;

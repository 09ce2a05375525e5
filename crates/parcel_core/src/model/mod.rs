//! Parcel domain model.
//!
//! # Responsibility
//! - Define the data structures shared by repository and service layers.
//!
//! # Invariants
//! - Every persisted parcel is identified by a storage-assigned `ParcelNumber`.
//! - Deletion is a hard delete; there are no tombstones.

pub mod parcel;

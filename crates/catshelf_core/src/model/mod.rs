//! Domain model for cat records.
//!
//! # Responsibility
//! - Define the canonical record shape shared by storage and screen layers.
//! - Keep validation rules next to the data they protect.
//!
//! # Invariants
//! - Every record is identified by a stable `CatId`.
//! - A fetched record is an immutable snapshot; screens replace whole lists,
//!   never individual fields.

pub mod cat;

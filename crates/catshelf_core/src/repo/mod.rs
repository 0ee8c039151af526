//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts for cat records.
//! - Isolate SQLite query details from service/screen orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `Cat::validate()` before persistence.
//! - Read paths reject invalid persisted state instead of masking it.

pub mod cat_repo;

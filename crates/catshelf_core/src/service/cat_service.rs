//! Cat use-case service.
//!
//! # Responsibility
//! - Provide stable entry points for record creation and listing.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository validation contracts.
//! - Service layer remains storage-agnostic.

use crate::model::cat::{Cat, CatId};
use crate::repo::cat_repo::{CatRepository, RepoResult};

/// Use-case service wrapper for cat record operations.
pub struct CatService<R: CatRepository> {
    repo: R,
}

impl<R: CatRepository> CatService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a cat record from entry-form input.
    ///
    /// # Contract
    /// - Generates a fresh stable ID.
    /// - Returns validation errors from the repository unchanged.
    pub fn create_cat(&self, name: impl Into<String>, age: u32) -> RepoResult<CatId> {
        let cat = Cat::new(name, age);
        self.repo.create_cat(&cat)
    }

    /// Lists all cat records in store order.
    pub fn list_cats(&self) -> RepoResult<Vec<Cat>> {
        self.repo.list_cats()
    }

    /// Returns the number of stored cat records.
    pub fn count_cats(&self) -> RepoResult<u64> {
        self.repo.count_cats()
    }
}

//! Core domain logic for catshelf.
//! This crate is the single source of truth for record and screen invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod screen;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::cat::{Cat, CatId, CatValidationError};
pub use repo::cat_repo::{CatRepository, RepoError, RepoResult, SqliteCatRepository};
pub use screen::adapter::{ListAdapter, TextListAdapter};
pub use screen::list_screen::{
    FailurePolicy, ListScreenConfig, ListScreenController, ScreenState,
};
pub use screen::nav::{Navigator, ScreenTarget};
pub use service::cat_service::CatService;
pub use store::{CatStore, SqliteCatStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}

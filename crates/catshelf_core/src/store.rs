//! Store seam between the list screen and persistence.
//!
//! # Responsibility
//! - Define the read contract the list screen fetches through.
//! - Provide the SQLite-backed implementation safe to call from the
//!   background fetch thread.
//!
//! # Invariants
//! - `all_cats` may block; it must only be called off the interactive thread.
//! - `SqliteCatStore` serializes connection access behind a mutex, so one
//!   store value can be shared across activations and threads.

use crate::model::cat::Cat;
use crate::repo::cat_repo::{CatRepository, RepoError, SqliteCatRepository};
use parking_lot::Mutex;
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure while fetching from the record store.
///
/// The screen treats every variant the same way: log, enter the failed
/// state, keep or clear the working list per policy.
#[derive(Debug)]
pub enum StoreError {
    /// The store cannot be reached at all (no handle, closed backend).
    Unavailable(String),
    /// The store was reachable but the query failed.
    Repo(RepoError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(reason) => write!(f, "record store unavailable: {reason}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Unavailable(_) => None,
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for StoreError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Read contract the list screen fetches through.
///
/// Injected into the screen controller at construction; lifecycle is owned
/// by the caller, not by ambient global state.
pub trait CatStore: Send + Sync {
    /// Returns every stored cat record, in store order.
    fn all_cats(&self) -> StoreResult<Vec<Cat>>;
}

/// SQLite-backed record store.
pub struct SqliteCatStore {
    conn: Mutex<Connection>,
}

impl SqliteCatStore {
    /// Wraps an already-bootstrapped connection (see [`crate::db::open_db`]).
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }
}

impl CatStore for SqliteCatStore {
    fn all_cats(&self) -> StoreResult<Vec<Cat>> {
        let conn = self.conn.lock();
        let cats = SqliteCatRepository::new(&conn).list_cats()?;
        Ok(cats)
    }
}

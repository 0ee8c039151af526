//! Cat repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable create/list APIs over canonical `cats` storage.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths must call `Cat::validate()` before SQL mutations.
//! - Read paths must reject invalid persisted state instead of masking it.
//! - `list_cats` returns rows in insertion order (`created_at ASC, uuid ASC`);
//!   callers above this layer preserve that order as-is.

use crate::db::DbError;
use crate::model::cat::{Cat, CatId, CatValidationError};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const CAT_SELECT_SQL: &str = "SELECT uuid, name, age FROM cats";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for cat persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(CatValidationError),
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted cat data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<CatValidationError> for RepoError {
    fn from(value: CatValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for cat record operations.
pub trait CatRepository {
    fn create_cat(&self, cat: &Cat) -> RepoResult<CatId>;
    fn list_cats(&self) -> RepoResult<Vec<Cat>>;
    fn count_cats(&self) -> RepoResult<u64>;
}

/// SQLite-backed cat repository.
pub struct SqliteCatRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCatRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl CatRepository for SqliteCatRepository<'_> {
    fn create_cat(&self, cat: &Cat) -> RepoResult<CatId> {
        cat.validate()?;

        self.conn.execute(
            "INSERT INTO cats (uuid, name, age) VALUES (?1, ?2, ?3);",
            params![cat.uuid.to_string(), cat.name.as_str(), i64::from(cat.age)],
        )?;

        Ok(cat.uuid)
    }

    fn list_cats(&self) -> RepoResult<Vec<Cat>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CAT_SELECT_SQL} ORDER BY created_at ASC, uuid ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut cats = Vec::new();
        while let Some(row) = rows.next()? {
            cats.push(parse_cat_row(row)?);
        }

        Ok(cats)
    }

    fn count_cats(&self) -> RepoResult<u64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM cats;", [], |row| row.get::<_, u64>(0))?;
        Ok(count)
    }
}

fn parse_cat_row(row: &Row<'_>) -> RepoResult<Cat> {
    let uuid_text: String = row.get("uuid")?;
    let uuid = Uuid::parse_str(&uuid_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{uuid_text}` in cats.uuid"))
    })?;

    let age_raw: i64 = row.get("age")?;
    let age = u32::try_from(age_raw).map_err(|_| {
        RepoError::InvalidData(format!("invalid age value `{age_raw}` in cats.age"))
    })?;

    let cat = Cat {
        uuid,
        name: row.get("name")?,
        age,
    };
    cat.validate()?;
    Ok(cat)
}

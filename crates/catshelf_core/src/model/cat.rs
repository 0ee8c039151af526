//! Cat record model.
//!
//! # Responsibility
//! - Define the canonical cat record persisted by the repository layer.
//! - Provide validation used on every write path and on read-back.
//!
//! # Invariants
//! - `uuid` is stable and never reused for another cat.
//! - `name` is non-empty after trimming and bounded in length.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Maximum accepted name length in characters.
pub const MAX_NAME_CHARS: usize = 120;

/// Stable identifier for a cat record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type CatId = Uuid;

/// Canonical cat record.
///
/// Once fetched from the store a `Cat` is treated as an immutable snapshot;
/// the list screen only ever replaces its whole working list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cat {
    /// Stable global ID used for linking and auditing.
    pub uuid: CatId,
    /// Display name shown as the list row label.
    pub name: String,
    /// Age in whole years.
    pub age: u32,
}

/// Validation failure for a cat record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatValidationError {
    EmptyName,
    NameTooLong { length: usize },
}

impl Display for CatValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "cat name must not be empty"),
            Self::NameTooLong { length } => write!(
                f,
                "cat name is {length} characters, maximum is {MAX_NAME_CHARS}"
            ),
        }
    }
}

impl Error for CatValidationError {}

impl Cat {
    /// Creates a new cat with a generated stable ID.
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self::with_id(Uuid::new_v4(), name, age)
    }

    /// Creates a cat with a caller-provided stable ID.
    ///
    /// Used by read-back paths where identity already exists in storage.
    /// This constructor does not validate; write paths must call
    /// [`Cat::validate`] before persisting.
    pub fn with_id(uuid: CatId, name: impl Into<String>, age: u32) -> Self {
        Self {
            uuid,
            name: name.into(),
            age,
        }
    }

    /// Checks record invariants.
    ///
    /// # Errors
    /// - [`CatValidationError::EmptyName`] when the name is blank after trim.
    /// - [`CatValidationError::NameTooLong`] when the name exceeds
    ///   [`MAX_NAME_CHARS`] characters.
    pub fn validate(&self) -> Result<(), CatValidationError> {
        if self.name.trim().is_empty() {
            return Err(CatValidationError::EmptyName);
        }
        let length = self.name.chars().count();
        if length > MAX_NAME_CHARS {
            return Err(CatValidationError::NameTooLong { length });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Cat, CatValidationError, MAX_NAME_CHARS};
    use uuid::Uuid;

    #[test]
    fn new_cat_passes_validation() {
        let cat = Cat::new("Tom", 3);
        assert!(cat.validate().is_ok());
    }

    #[test]
    fn blank_name_is_rejected() {
        let cat = Cat::new("   ", 1);
        assert_eq!(cat.validate(), Err(CatValidationError::EmptyName));
    }

    #[test]
    fn oversized_name_is_rejected() {
        let cat = Cat::new("x".repeat(MAX_NAME_CHARS + 1), 1);
        assert!(matches!(
            cat.validate(),
            Err(CatValidationError::NameTooLong { length }) if length == MAX_NAME_CHARS + 1
        ));
    }

    #[test]
    fn serde_shape_is_stable() {
        let id = Uuid::parse_str("00000000-0000-4000-8000-000000000001").unwrap();
        let cat = Cat::with_id(id, "Whiskers", 2);
        let json = serde_json::to_value(&cat).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "uuid": "00000000-0000-4000-8000-000000000001",
                "name": "Whiskers",
                "age": 2,
            })
        );
    }
}

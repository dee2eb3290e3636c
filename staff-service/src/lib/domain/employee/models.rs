use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use super::errors::EmployeeIdError;
use super::errors::PersonNameError;
use crate::domain::position::models::PositionId;

/// Employee aggregate entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub position_id: PositionId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Employee unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmployeeId(pub Uuid);

impl EmployeeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an employee ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, EmployeeIdError> {
        Uuid::parse_str(s)
            .map(EmployeeId)
            .map_err(|e| EmployeeIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for EmployeeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// First or last name of a person.
///
/// 1-50 characters of letters, spaces, hyphens, and apostrophes, with at
/// least one non-space character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName(String);

impl PersonName {
    const MAX_LENGTH: usize = 50;

    /// # Errors
    /// * `Blank` - Empty or whitespace only
    /// * `TooLong` - Longer than 50 characters
    /// * `InvalidCharacters` - Digits, punctuation, or other symbols
    pub fn new(name: String) -> Result<Self, PersonNameError> {
        if name.trim().is_empty() {
            return Err(PersonNameError::Blank);
        }

        let length = name.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(PersonNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        if !name
            .chars()
            .all(|c| c.is_alphabetic() || c == ' ' || c == '-' || c == '\'')
        {
            return Err(PersonNameError::InvalidCharacters);
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a new employee with domain types
#[derive(Debug, Clone)]
pub struct CreateEmployeeCommand {
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub position_id: PositionId,
}

impl CreateEmployeeCommand {
    pub fn new(first_name: PersonName, last_name: PersonName, position_id: PositionId) -> Self {
        Self {
            first_name,
            last_name,
            position_id,
        }
    }
}

/// Command to replace an employee's names and position.
#[derive(Debug, Clone)]
pub struct UpdateEmployeeCommand {
    pub id: EmployeeId,
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub position_id: PositionId,
}

impl UpdateEmployeeCommand {
    pub fn new(
        id: EmployeeId,
        first_name: PersonName,
        last_name: PersonName,
        position_id: PositionId,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            position_id,
        }
    }
}

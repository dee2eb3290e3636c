use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use super::errors::PositionDescriptionError;
use super::errors::PositionIdError;
use super::errors::PositionNameError;

/// Position aggregate entity.
///
/// A job title employees are assigned to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub id: PositionId,
    pub name: PositionName,
    pub description: Option<PositionDescription>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Position unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionId(pub Uuid);

impl PositionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a position ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, PositionIdError> {
        Uuid::parse_str(s)
            .map(PositionId)
            .map_err(|e| PositionIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for PositionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PositionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Position name value type.
///
/// Surrounding whitespace is trimmed; the remainder must be 1-100 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionName(String);

impl PositionName {
    const MAX_LENGTH: usize = 100;

    /// # Errors
    /// * `Empty` - Name is empty after trimming
    /// * `TooLong` - Name longer than 100 characters
    pub fn new(name: String) -> Result<Self, PositionNameError> {
        let trimmed = name.trim();
        let length = trimmed.chars().count();

        if length == 0 {
            return Err(PositionNameError::Empty);
        }
        if length > Self::MAX_LENGTH {
            return Err(PositionNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PositionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Free-form position description, at most 1000 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionDescription(String);

impl PositionDescription {
    const MAX_LENGTH: usize = 1000;

    /// # Errors
    /// * `TooLong` - Description longer than 1000 characters
    pub fn new(description: String) -> Result<Self, PositionDescriptionError> {
        let length = description.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(PositionDescriptionError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }
        Ok(Self(description))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Command to create a new position with domain types
#[derive(Debug, Clone)]
pub struct CreatePositionCommand {
    pub name: PositionName,
    pub description: Option<PositionDescription>,
}

impl CreatePositionCommand {
    pub fn new(name: PositionName, description: Option<PositionDescription>) -> Self {
        Self { name, description }
    }
}

/// Command to replace a position's name and description.
#[derive(Debug, Clone)]
pub struct UpdatePositionCommand {
    pub id: PositionId,
    pub name: PositionName,
    pub description: Option<PositionDescription>,
}

impl UpdatePositionCommand {
    pub fn new(
        id: PositionId,
        name: PositionName,
        description: Option<PositionDescription>,
    ) -> Self {
        Self {
            id,
            name,
            description,
        }
    }
}

//! JSON shapes shared by several handlers.

use auth::TokenPair;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::employee::models::Employee;
use crate::domain::identity::models::IdentityProfile;
use crate::domain::page::Page;
use crate::domain::position::models::Position;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentityData {
    pub id: String,
    pub username: String,
    pub email: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&IdentityProfile> for IdentityData {
    fn from(profile: &IdentityProfile) -> Self {
        Self {
            id: profile.id.to_string(),
            username: profile.username.as_str().to_string(),
            email: profile.email.as_str().to_string(),
            is_active: profile.is_active,
            created_at: profile.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenData {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

impl From<TokenPair> for TokenData {
    fn from(pair: TokenPair) -> Self {
        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            token_type: pair.token_type.to_string(),
            expires_in: pair.expires_in,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositionData {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Position> for PositionData {
    fn from(position: &Position) -> Self {
        Self {
            id: position.id.to_string(),
            name: position.name.as_str().to_string(),
            description: position
                .description
                .as_ref()
                .map(|d| d.as_str().to_string()),
            created_at: position.created_at,
            updated_at: position.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeData {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub position_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Employee> for EmployeeData {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id.to_string(),
            first_name: employee.first_name.as_str().to_string(),
            last_name: employee.last_name.as_str().to_string(),
            position_id: employee.position_id.to_string(),
            created_at: employee.created_at,
            updated_at: employee.updated_at,
        }
    }
}

/// `?skip=&limit=` query parameters.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageQuery {
    skip: Option<u32>,
    limit: Option<u32>,
}

impl From<PageQuery> for Page {
    fn from(query: PageQuery) -> Self {
        Page::new(
            query.skip.unwrap_or(0),
            query.limit.unwrap_or(Page::DEFAULT_LIMIT),
        )
    }
}

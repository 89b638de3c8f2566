use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use warden_core::{AppError, AppResult, NonEmptyString};

/// Unique identifier for a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoleId(Uuid);

impl RoleId {
    /// Creates a new random role identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a role identifier from an existing UUID value.
    #[must_use]
    pub fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    /// Parses a transport value into a role identifier.
    pub fn parse(value: &str) -> AppResult<Self> {
        Uuid::parse_str(value.trim())
            .map(Self)
            .map_err(|_| AppError::Validation(format!("invalid role id '{value}'")))
    }

    /// Returns the underlying UUID value.
    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for RoleId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RoleId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Named bundle of permissions assignable to users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    id: RoleId,
    name: NonEmptyString,
    description: String,
    created_at: DateTime<Utc>,
}

impl Role {
    /// Rehydrates a persisted role.
    pub fn new(
        id: RoleId,
        name: impl Into<String>,
        description: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> AppResult<Self> {
        Ok(Self {
            id,
            name: NonEmptyString::for_field("role name", name)?,
            description: description.into(),
            created_at,
        })
    }

    /// Returns the role identifier.
    #[must_use]
    pub fn id(&self) -> RoleId {
        self.id
    }

    /// Returns the unique role name.
    #[must_use]
    pub fn name(&self) -> &NonEmptyString {
        &self.name
    }

    /// Returns the free-form description.
    #[must_use]
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Returns the server-assigned creation timestamp.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Validated input for a role that does not exist yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRole {
    name: NonEmptyString,
    description: String,
}

impl NewRole {
    /// Validates role creation fields. The name is trimmed.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> AppResult<Self> {
        let name = name.into();
        Ok(Self {
            name: NonEmptyString::for_field("role name", name.trim())?,
            description: description.into().trim().to_owned(),
        })
    }

    /// Returns the role name.
    #[must_use]
    pub fn name(&self) -> &NonEmptyString {
        &self.name
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        self.description.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::{NewRole, RoleId};

    #[test]
    fn new_role_trims_name() {
        let role = NewRole::new("  admin ", "Administrators");
        assert!(role.is_ok());
        assert_eq!(
            role.unwrap_or_else(|_| panic!("test")).name().as_str(),
            "admin"
        );
    }

    #[test]
    fn blank_role_name_is_rejected() {
        assert!(NewRole::new("   ", "nothing").is_err());
    }

    #[test]
    fn role_id_round_trips_through_display() {
        let role_id = RoleId::new();
        assert_eq!(RoleId::parse(&role_id.to_string()).ok(), Some(role_id));
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use warden_core::{AppError, AppResult, NonEmptyString};

/// Unique identifier for a permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PermissionId(Uuid);

impl PermissionId {
    /// Creates a new random permission identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a permission identifier from an existing UUID value.
    #[must_use]
    pub fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    /// Parses a transport value into a permission identifier.
    pub fn parse(value: &str) -> AppResult<Self> {
        Uuid::parse_str(value.trim())
            .map(Self)
            .map_err(|_| AppError::Validation(format!("invalid permission id '{value}'")))
    }

    /// Returns the underlying UUID value.
    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for PermissionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PermissionId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// The atomic unit of authorization: a `(resource, action)` pair.
///
/// Both tags are opaque administrator-defined strings compared byte for byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Capability {
    resource: NonEmptyString,
    action: NonEmptyString,
}

impl Capability {
    /// Creates a capability from non-blank resource and action tags.
    pub fn new(resource: impl Into<String>, action: impl Into<String>) -> AppResult<Self> {
        Ok(Self {
            resource: NonEmptyString::for_field("resource", resource)?,
            action: NonEmptyString::for_field("action", action)?,
        })
    }

    /// Returns the resource tag.
    #[must_use]
    pub fn resource(&self) -> &str {
        self.resource.as_str()
    }

    /// Returns the action tag.
    #[must_use]
    pub fn action(&self) -> &str {
        self.action.as_str()
    }

    /// Returns whether this capability is exactly the requested pair.
    #[must_use]
    pub fn matches(&self, resource: &str, action: &str) -> bool {
        self.resource.as_str() == resource && self.action.as_str() == action
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}:{}", self.resource(), self.action())
    }
}

/// Catalogued permission granting one capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    id: PermissionId,
    name: NonEmptyString,
    capability: Capability,
    description: String,
    created_at: DateTime<Utc>,
}

impl Permission {
    /// Rehydrates a persisted permission.
    pub fn new(
        id: PermissionId,
        name: impl Into<String>,
        capability: Capability,
        description: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> AppResult<Self> {
        Ok(Self {
            id,
            name: NonEmptyString::for_field("permission name", name)?,
            capability,
            description: description.into(),
            created_at,
        })
    }

    /// Returns the permission identifier.
    #[must_use]
    pub fn id(&self) -> PermissionId {
        self.id
    }

    /// Returns the human label. Not unique.
    #[must_use]
    pub fn name(&self) -> &NonEmptyString {
        &self.name
    }

    /// Returns the granted capability.
    #[must_use]
    pub fn capability(&self) -> &Capability {
        &self.capability
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

/// Validated input for a permission that does not exist yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPermission {
    name: NonEmptyString,
    capability: Capability,
    description: String,
}

impl NewPermission {
    /// Validates permission creation fields.
    pub fn new(
        name: impl Into<String>,
        resource: impl Into<String>,
        action: impl Into<String>,
        description: impl Into<String>,
    ) -> AppResult<Self> {
        let name = name.into();
        Ok(Self {
            name: NonEmptyString::for_field("permission name", name.trim())?,
            capability: Capability::new(resource, action)?,
            description: description.into().trim().to_owned(),
        })
    }

    /// Returns the permission label.
    #[must_use]
    pub fn name(&self) -> &NonEmptyString {
        &self.name
    }

    /// Returns the capability to grant.
    #[must_use]
    pub fn capability(&self) -> &Capability {
        &self.capability
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        self.description.as_str()
    }
}

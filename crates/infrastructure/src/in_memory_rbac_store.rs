use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use warden_application::{
    AssignmentRepository, AuthorizationRepository, GrantRepository, PermissionRepository,
    RoleRepository, UserRecord, UserRepository,
};
use warden_core::{AppError, AppResult};
use warden_domain::{
    Capability, EmailAddress, NewPermission, NewRole, NewUser, Permission, PermissionId, Role,
    RoleId, User, UserId,
};

mod ledgers;
mod registries;
mod users;


#[derive(Debug, Default)]
struct RbacState {
    users: HashMap<UserId, UserRecord>,
    roles: HashMap<RoleId, Role>,
    permissions: HashMap<PermissionId, Permission>,
    user_roles: BTreeSet<(UserId, RoleId)>,
    role_permissions: BTreeSet<(RoleId, PermissionId)>,
}

/// In-memory implementation of every persistence port.
///
/// All tables sit behind one lock so multi-table writes such as registration
/// and cascading deletes are observed atomically.
#[derive(Debug, Default)]
pub struct InMemoryRbacStore {
    state: RwLock<RbacState>,
}

impl InMemoryRbacStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn sort_roles(roles: &mut [Role]) {
    roles.sort_by(|left, right| left.name().as_str().cmp(right.name().as_str()));
}

fn sort_permissions(permissions: &mut [Permission]) {
    permissions.sort_by(|left, right| {
        left.capability()
            .cmp(right.capability())
            .then_with(|| left.name().as_str().cmp(right.name().as_str()))
    });
}

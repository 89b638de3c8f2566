use sqlx::PgPool;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;

use warden_application::{
    AssignmentRepository, AuthorizationRepository, GrantRepository, PermissionRepository,
    RoleRepository, UserRepository,
};
use warden_core::AppError;
use warden_domain::{NewPermission, NewRole, NewUser, Permission, Role, User};

use super::PostgresRbacRepository;
use crate::{PostgresAuthorizationRepository, PostgresUserRepository};

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

async fn test_pool() -> Option<PgPool> {
    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        return None;
    };

    let pool = match PgPoolOptions::new()
        .max_connections(2)
        .connect(database_url.as_str())
        .await
    {
        Ok(pool) => pool,
        Err(error) => panic!("failed to connect to DATABASE_URL in test: {error}"),
    };

    if let Err(error) = MIGRATOR.run(&pool).await {
        panic!("failed to run migrations for postgres rbac tests: {error}");
    }

    Some(pool)
}

fn unique(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4().simple())
}

async fn create_role(repository: &PostgresRbacRepository, name: &str) -> Role {
    let role = NewRole::new(name, "").unwrap_or_else(|_| panic!("test"));
    repository
        .create_role(role)
        .await
        .unwrap_or_else(|error| panic!("failed to create role: {error}"))
}

async fn create_permission(
    repository: &PostgresRbacRepository,
    resource: &str,
    action: &str,
) -> Permission {
    let permission = NewPermission::new(format!("{resource} {action}"), resource, action, "")
        .unwrap_or_else(|_| panic!("test"));
    repository
        .create_permission(permission)
        .await
        .unwrap_or_else(|error| panic!("failed to create permission: {error}"))
}

async fn create_user(pool: &PgPool) -> User {
    let email = format!("{}@example.com", unique("user"));
    let user = NewUser::new(email, "Test User").unwrap_or_else(|_| panic!("test"));
    PostgresUserRepository::new(pool.clone())
        .create_user(user, "$argon2id$stub", None)
        .await
        .unwrap_or_else(|error| panic!("failed to create user: {error}"))
}

#[tokio::test]
async fn duplicate_role_name_is_conflict() {
    let Some(pool) = test_pool().await else {
        return;
    };
    let repository = PostgresRbacRepository::new(pool);
    let name = unique("role");
    create_role(&repository, name.as_str()).await;

    let duplicate = NewRole::new(name.as_str(), "again").unwrap_or_else(|_| panic!("test"));
    let result = repository.create_role(duplicate).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn assignment_is_idempotent_and_ordered_by_name() {
    let Some(pool) = test_pool().await else {
        return;
    };
    let repository = PostgresRbacRepository::new(pool.clone());
    let user = create_user(&pool).await;
    let suffix = Uuid::new_v4().simple().to_string();
    let zeta = create_role(&repository, format!("zeta-{suffix}").as_str()).await;
    let alpha = create_role(&repository, format!("alpha-{suffix}").as_str()).await;

    for role in [&zeta, &alpha, &zeta] {
        assert!(repository.assign_role(user.id(), role.id()).await.is_ok());
    }

    let roles = repository.list_roles_for_user(user.id()).await;
    assert!(roles.is_ok());
    let names: Vec<String> = roles
        .unwrap_or_default()
        .iter()
        .map(|role| role.name().as_str().to_owned())
        .collect();
    assert_eq!(names, vec![format!("alpha-{suffix}"), format!("zeta-{suffix}")]);

    assert!(repository.remove_role(user.id(), zeta.id()).await.is_ok());
    assert!(repository.remove_role(user.id(), zeta.id()).await.is_ok());
    assert_eq!(
        repository
            .list_roles_for_user(user.id())
            .await
            .unwrap_or_default()
            .len(),
        1
    );
}

#[tokio::test]
async fn assignment_to_missing_user_is_not_found() {
    let Some(pool) = test_pool().await else {
        return;
    };
    let repository = PostgresRbacRepository::new(pool);
    let role = create_role(&repository, unique("orphan").as_str()).await;

    let result = repository
        .assign_role(warden_domain::UserId::new(), role.id())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn capabilities_follow_grants_and_revocations() {
    let Some(pool) = test_pool().await else {
        return;
    };
    let repository = PostgresRbacRepository::new(pool.clone());
    let authorization = PostgresAuthorizationRepository::new(pool.clone());
    let user = create_user(&pool).await;
    let role = create_role(&repository, unique("grader").as_str()).await;
    let resource = unique("grades");
    let read = create_permission(&repository, resource.as_str(), "read").await;
    let write = create_permission(&repository, resource.as_str(), "write").await;

    assert!(repository.assign_role(user.id(), role.id()).await.is_ok());
    for permission in [&read, &write, &read] {
        assert!(
            repository
                .grant_permission(role.id(), permission.id())
                .await
                .is_ok()
        );
    }

    let granted = repository
        .list_permissions_for_role(role.id())
        .await
        .unwrap_or_default();
    assert_eq!(granted.len(), 2);
    assert_eq!(granted[0].capability().action(), "read");

    let capabilities = authorization
        .list_capabilities_for_user(user.id())
        .await
        .unwrap_or_default();
    assert!(capabilities.iter().any(|capability| capability.matches(resource.as_str(), "write")));

    assert!(
        repository
            .revoke_permission(role.id(), write.id())
            .await
            .is_ok()
    );
    let capabilities = authorization
        .list_capabilities_for_user(user.id())
        .await
        .unwrap_or_default();
    assert_eq!(capabilities.len(), 1);
    assert!(capabilities[0].matches(resource.as_str(), "read"));
}

#[tokio::test]
async fn deleting_role_cascades_relations() {
    let Some(pool) = test_pool().await else {
        return;
    };
    let repository = PostgresRbacRepository::new(pool.clone());
    let authorization = PostgresAuthorizationRepository::new(pool.clone());
    let user = create_user(&pool).await;
    let role = create_role(&repository, unique("temporary").as_str()).await;
    let permission = create_permission(&repository, unique("course").as_str(), "read").await;
    assert!(repository.assign_role(user.id(), role.id()).await.is_ok());
    assert!(
        repository
            .grant_permission(role.id(), permission.id())
            .await
            .is_ok()
    );

    assert!(matches!(repository.delete_role(role.id()).await, Ok(true)));
    assert!(matches!(repository.delete_role(role.id()).await, Ok(false)));

    assert!(
        repository
            .list_roles_for_user(user.id())
            .await
            .is_ok_and(|roles| roles.is_empty())
    );
    assert!(
        authorization
            .list_capabilities_for_user(user.id())
            .await
            .is_ok_and(|capabilities| capabilities.is_empty())
    );
    assert!(
        repository
            .find_permission(permission.id())
            .await
            .is_ok_and(|found| found.is_some())
    );
}

#[tokio::test]
async fn permissions_are_ordered_by_resource_then_action() {
    let Some(pool) = test_pool().await else {
        return;
    };
    let repository = PostgresRbacRepository::new(pool);
    let suffix = Uuid::new_v4().simple().to_string();
    let zeta = format!("zeta-{suffix}");
    let alpha = format!("alpha-{suffix}");
    let role = create_role(&repository, unique("catalog").as_str()).await;
    for (resource, action) in [
        (zeta.as_str(), "read"),
        (alpha.as_str(), "write"),
        (alpha.as_str(), "read"),
    ] {
        let permission = create_permission(&repository, resource, action).await;
        assert!(
            repository
                .grant_permission(role.id(), permission.id())
                .await
                .is_ok()
        );
    }
    let expected = vec![
        format!("{alpha}:read"),
        format!("{alpha}:write"),
        format!("{zeta}:read"),
    ];

    let listed: Vec<String> = repository
        .list_permissions()
        .await
        .unwrap_or_default()
        .iter()
        .map(|permission| permission.capability().to_string())
        .filter(|capability| capability.contains(suffix.as_str()))
        .collect();
    let granted: Vec<String> = repository
        .list_permissions_for_role(role.id())
        .await
        .unwrap_or_default()
        .iter()
        .map(|permission| permission.capability().to_string())
        .collect();

    assert_eq!(listed, expected);
    assert_eq!(granted, expected);
}

#[tokio::test]
async fn role_names_sort_by_byte_order() {
    let Some(pool) = test_pool().await else {
        return;
    };
    let repository = PostgresRbacRepository::new(pool.clone());
    let user = create_user(&pool).await;
    let suffix = Uuid::new_v4().simple().to_string();
    let lower = create_role(&repository, format!("alpha-{suffix}").as_str()).await;
    let upper = create_role(&repository, format!("Zeta-{suffix}").as_str()).await;
    for role in [&lower, &upper] {
        assert!(repository.assign_role(user.id(), role.id()).await.is_ok());
    }

    let names: Vec<String> = repository
        .list_roles_for_user(user.id())
        .await
        .unwrap_or_default()
        .iter()
        .map(|role| role.name().as_str().to_owned())
        .collect();

    assert_eq!(names, vec![format!("Zeta-{suffix}"), format!("alpha-{suffix}")]);
}

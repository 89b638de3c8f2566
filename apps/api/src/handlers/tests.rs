use std::sync::Arc;

use axum::Json;
use axum::extract::{Extension, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Duration;

use warden_application::{GrantRepository, PermissionRepository, RegisterParams, RoleRepository};
use warden_core::UserIdentity;
use warden_domain::{NewPermission, NewRole, Role, RoleId};
use warden_infrastructure::{InMemoryRbacStore, JwtTokenService};

use super::{authorization, health, resources, roles};
use crate::auth::{login_handler, register_handler};
use crate::dto::{
    AssignRoleRequest, AuthorizeQuery, CreateRoleRequest, LoginRequest, RegisterRequest,
};
use crate::state::AppState;

const SECRET: &str = "api-handler-test-secret-0123456789abc";

struct Fixture {
    state: AppState,
    store: Arc<InMemoryRbacStore>,
}

fn fixture() -> Fixture {
    let store = Arc::new(InMemoryRbacStore::new());
    let token_service = Arc::new(
        JwtTokenService::new(SECRET, Duration::hours(1)).unwrap_or_else(|_| panic!("test")),
    );

    Fixture {
        state: AppState::in_memory(store.clone(), token_service),
        store,
    }
}

impl Fixture {
    async fn role(&self, name: &str) -> Role {
        self.store
            .create_role(NewRole::new(name, "").unwrap_or_else(|_| panic!("test")))
            .await
            .unwrap_or_else(|error| panic!("failed to create role: {error}"))
    }

    async fn user(&self, email: &str, initial_role_id: Option<RoleId>) -> UserIdentity {
        let user = self
            .state
            .user_service
            .register(RegisterParams {
                email: email.to_owned(),
                password: "correct-horse".to_owned(),
                display_name: "Handler Test".to_owned(),
                initial_role_id,
            })
            .await
            .unwrap_or_else(|error| panic!("failed to register user: {error}"));

        UserIdentity::new(user.id().as_uuid(), user.email().as_str())
    }

    async fn admin(&self) -> UserIdentity {
        let role = self.role("admin").await;
        self.user("admin@example.com", Some(role.id())).await
    }

    async fn grant(&self, role: &Role, resource: &str, action: &str) {
        let permission = self
            .store
            .create_permission(
                NewPermission::new(format!("{action} {resource}"), resource, action, "")
                    .unwrap_or_else(|_| panic!("test")),
            )
            .await
            .unwrap_or_else(|error| panic!("failed to create permission: {error}"));
        assert!(
            self.store
                .grant_permission(role.id(), permission.id())
                .await
                .is_ok()
        );
    }
}

fn create_role_request(name: &str) -> Json<CreateRoleRequest> {
    Json(CreateRoleRequest {
        name: name.to_owned(),
        description: String::new(),
    })
}

#[tokio::test]
async fn non_admin_cannot_create_role() {
    let fixture = fixture();
    let user = fixture.user("plain@example.com", None).await;

    let response = roles::create_role_handler(
        State(fixture.state.clone()),
        Extension(user),
        create_role_request("teacher"),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn admin_creates_role_once() {
    let fixture = fixture();
    let admin = fixture.admin().await;

    let created = roles::create_role_handler(
        State(fixture.state.clone()),
        Extension(admin.clone()),
        create_role_request("teacher"),
    )
    .await
    .into_response();
    let duplicate = roles::create_role_handler(
        State(fixture.state.clone()),
        Extension(admin),
        create_role_request("teacher"),
    )
    .await
    .into_response();

    assert_eq!(created.status(), StatusCode::CREATED);
    assert_eq!(duplicate.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn course_routes_follow_capabilities() {
    let fixture = fixture();
    let teacher = fixture.role("teacher").await;
    fixture.grant(&teacher, "course", "read").await;
    let outsider = fixture.user("outsider@example.com", None).await;
    let member = fixture
        .user("teacher@example.com", Some(teacher.id()))
        .await;

    let denied = resources::list_courses_handler(State(fixture.state.clone()), Extension(outsider))
        .await
        .into_response();
    let allowed =
        resources::list_courses_handler(State(fixture.state.clone()), Extension(member.clone()))
            .await
            .into_response();
    let create_denied =
        resources::create_course_handler(State(fixture.state.clone()), Extension(member))
            .await
            .into_response();

    assert_eq!(denied.status(), StatusCode::FORBIDDEN);
    assert_eq!(allowed.status(), StatusCode::OK);
    assert_eq!(create_denied.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn authorize_reports_decision() {
    let fixture = fixture();
    let student = fixture.role("student").await;
    fixture.grant(&student, "grades", "read").await;
    let user = fixture
        .user("student@example.com", Some(student.id()))
        .await;

    let read = authorization::authorize_handler(
        State(fixture.state.clone()),
        Extension(user.clone()),
        Query(AuthorizeQuery {
            resource: "grades".to_owned(),
            action: "read".to_owned(),
        }),
    )
    .await;
    let write = authorization::authorize_handler(
        State(fixture.state.clone()),
        Extension(user),
        Query(AuthorizeQuery {
            resource: "grades".to_owned(),
            action: "write".to_owned(),
        }),
    )
    .await;

    assert!(read.is_ok_and(|Json(decision)| decision.allowed));
    assert!(write.is_ok_and(|Json(decision)| !decision.allowed));
}

#[tokio::test]
async fn register_and_login_round_trip() {
    let fixture = fixture();

    let registered = register_handler(
        State(fixture.state.clone()),
        Json(RegisterRequest {
            email: "new@example.com".to_owned(),
            password: "correct-horse".to_owned(),
            display_name: "New User".to_owned(),
            role_id: None,
        }),
    )
    .await
    .into_response();
    assert_eq!(registered.status(), StatusCode::CREATED);

    let login = login_handler(
        State(fixture.state.clone()),
        Json(LoginRequest {
            email: "new@example.com".to_owned(),
            password: "correct-horse".to_owned(),
        }),
    )
    .await;
    assert!(login.is_ok());
    let Json(login) = login.unwrap_or_else(|_| panic!("test"));
    assert_eq!(login.token_type, "Bearer");
    assert!(
        fixture
            .state
            .user_service
            .authenticate_token(login.token.as_str())
            .is_ok()
    );

    let rejected = login_handler(
        State(fixture.state.clone()),
        Json(LoginRequest {
            email: "new@example.com".to_owned(),
            password: "wrong-horse".to_owned(),
        }),
    )
    .await
    .into_response();
    assert_eq!(rejected.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn register_with_malformed_role_id_is_bad_request() {
    let fixture = fixture();

    let response = register_handler(
        State(fixture.state.clone()),
        Json(RegisterRequest {
            email: "new@example.com".to_owned(),
            password: "correct-horse".to_owned(),
            display_name: "New User".to_owned(),
            role_id: Some("not-a-uuid".to_owned()),
        }),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn assigning_to_unknown_user_is_not_found() {
    let fixture = fixture();
    let admin = fixture.admin().await;
    let teacher = fixture.role("teacher").await;

    let response = roles::assign_role_handler(
        State(fixture.state.clone()),
        Extension(admin),
        Json(AssignRoleRequest {
            user_id: warden_domain::UserId::new().to_string(),
            role_id: teacher.id().to_string(),
        }),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn removing_role_revokes_access() {
    let fixture = fixture();
    let admin = fixture.admin().await;
    let grader = fixture.role("grader").await;
    fixture.grant(&grader, "grades", "read").await;
    let user = fixture.user("grader@example.com", Some(grader.id())).await;

    let before =
        resources::list_grades_handler(State(fixture.state.clone()), Extension(user.clone()))
            .await
            .into_response();
    let removed = roles::remove_role_handler(
        State(fixture.state.clone()),
        Extension(admin),
        Path((user.user_id().to_string(), grader.id().to_string())),
    )
    .await
    .into_response();
    let after = resources::list_grades_handler(State(fixture.state.clone()), Extension(user))
        .await
        .into_response();

    assert_eq!(before.status(), StatusCode::OK);
    assert_eq!(removed.status(), StatusCode::NO_CONTENT);
    assert_eq!(after.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn malformed_role_id_is_bad_request() {
    let fixture = fixture();

    let response = roles::get_role_handler(
        State(fixture.state.clone()),
        Path("not-a-uuid".to_owned()),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn health_without_database_is_ok() {
    let fixture = fixture();

    let (status, Json(body)) = health::health_handler(State(fixture.state.clone())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.postgres.status, "disabled");
}

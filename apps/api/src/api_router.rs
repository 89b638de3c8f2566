use axum::Router;
use axum::middleware::from_fn_with_state;
use axum::routing::{delete, get, post};
use tower_http::trace::TraceLayer;
use warden_core::AppError;

use crate::state::AppState;
use crate::{auth, handlers, middleware};

mod cors;

pub fn build_router(
    app_state: AppState,
    cors_allowed_origin: Option<&str>,
) -> Result<Router, AppError> {
    let protected_routes = Router::new()
        .route("/api/me/roles", get(handlers::roles::my_roles_handler))
        .route(
            "/api/roles",
            get(handlers::roles::list_roles_handler).post(handlers::roles::create_role_handler),
        )
        .route(
            "/api/roles/{role_id}",
            get(handlers::roles::get_role_handler).delete(handlers::roles::delete_role_handler),
        )
        .route(
            "/api/roles/{role_id}/permissions",
            get(handlers::permissions::role_permissions_handler),
        )
        .route(
            "/api/roles/{role_id}/permissions/{permission_id}",
            delete(handlers::permissions::revoke_permission_handler),
        )
        .route(
            "/api/users/assign-role",
            post(handlers::roles::assign_role_handler),
        )
        .route(
            "/api/users/{user_id}/roles",
            get(handlers::roles::user_roles_handler),
        )
        .route(
            "/api/users/{user_id}/roles/{role_id}",
            delete(handlers::roles::remove_role_handler),
        )
        .route(
            "/api/permissions",
            get(handlers::permissions::list_permissions_handler)
                .post(handlers::permissions::create_permission_handler),
        )
        .route(
            "/api/permissions/grant",
            post(handlers::permissions::grant_permission_handler),
        )
        .route(
            "/api/permissions/{permission_id}",
            get(handlers::permissions::get_permission_handler)
                .delete(handlers::permissions::delete_permission_handler),
        )
        .route(
            "/api/authorize",
            get(handlers::authorization::authorize_handler),
        )
        .route(
            "/api/courses",
            get(handlers::resources::list_courses_handler)
                .post(handlers::resources::create_course_handler),
        )
        .route(
            "/api/grades",
            get(handlers::resources::list_grades_handler),
        )
        .route_layer(from_fn_with_state(
            app_state.clone(),
            middleware::require_auth,
        ));

    Ok(Router::new()
        .route("/health", get(handlers::health::health_handler))
        .route("/api/auth/register", post(auth::register_handler))
        .route("/api/auth/login", post(auth::login_handler))
        .merge(protected_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors::build_cors_layer(cors_allowed_origin)?)
        .with_state(app_state))
}

//! Route definitions for `/admin`.
//!
//! Only `/login` checks the password; the mutation routes rely on the
//! network boundary for access control.

use axum::routing::{delete, post, put};
use axum::Router;

use crate::handlers::{admin, category, image, project, settings};
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// POST   /login                      -> admin::login
///
/// POST   /projects                   -> project::create
/// PUT    /projects/{id}              -> project::update
/// DELETE /projects/{id}              -> project::delete
/// POST   /projects/{id}/images       -> image::add
/// DELETE /projects/images/{id}       -> image::delete
///
/// POST   /categories                 -> category::create
/// PUT    /categories/{id}            -> category::update
/// DELETE /categories/{id}            -> category::delete
///
/// PUT    /settings                   -> settings::update
/// ```
pub fn router() -> Router<AppState> {
    let project_routes = Router::new()
        .route("/", post(project::create))
        .route("/images/{id}", delete(image::delete))
        .route("/{id}", put(project::update).delete(project::delete))
        .route("/{id}/images", post(image::add));

    let category_routes = Router::new()
        .route("/", post(category::create))
        .route("/{id}", put(category::update).delete(category::delete));

    Router::new()
        .route("/login", post(admin::login))
        .route("/settings", put(settings::update))
        .nest("/projects", project_routes)
        .nest("/categories", category_routes)
}

pub mod admin;
pub mod category;
pub mod health;
pub mod project;
pub mod settings;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                                  liveness + database probe
///
/// /categories                              list
/// /categories/{slug}                       get by slug
///
/// /projects?category=&published=           list with images
/// /projects/{slug}                         get with images
///
/// /settings                                decoded settings map
///
/// /admin/login                             password check (POST)
/// /admin/projects                          create (POST)
/// /admin/projects/{id}                     update (PUT), delete (DELETE)
/// /admin/projects/{id}/images              add image (POST)
/// /admin/projects/images/{id}              delete image (DELETE)
/// /admin/categories                        create (POST)
/// /admin/categories/{id}                   update (PUT), delete (DELETE)
/// /admin/settings                          bulk upsert (PUT)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/categories", category::router())
        .nest("/projects", project::router())
        .nest("/settings", settings::router())
        .nest("/admin", admin::router())
}

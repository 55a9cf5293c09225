pub mod admin;
pub mod health;
pub mod public;
pub mod upload;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /services                        list (public)
/// /services/{id}                   get (public)
/// /services/{id}/projects          list projects of a service (public)
/// /about                           get, falls back to defaults (public)
/// /hero                            get, falls back to defaults (public)
/// /contact                         submit message (public)
///
/// /admin/login                     login (public)
/// /admin/init                      bootstrap first admin (public)
/// /admin/change-password           change own password
/// /admin/services                  create
/// /admin/services/{id}             update, delete (cascades to projects)
/// /admin/projects                  list with parent service, create
/// /admin/projects/{id}             get, update, delete
/// /admin/contacts                  list
/// /admin/contacts/{id}             delete
/// /admin/about                     upsert
/// /admin/hero                      upsert
///
/// /upload                          multipart media upload
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(public::router())
        .nest("/admin", admin::router())
        .merge(upload::router())
}

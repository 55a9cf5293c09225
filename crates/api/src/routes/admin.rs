//! Dashboard routes mounted at `/admin`.
//!
//! Everything except `login` and `init` requires a Bearer token; handlers
//! enforce this through the `AuthAdmin` extractor.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::{about, auth, contact, hero, project, service};
use crate::state::AppState;

/// ```text
/// POST   /login                 -> auth::login
/// POST   /init                  -> auth::init
/// PUT    /change-password       -> auth::change_password
///
/// POST   /services              -> service::create
/// PUT    /services/{id}         -> service::update
/// DELETE /services/{id}         -> service::delete
///
/// GET    /projects              -> project::list
/// POST   /projects              -> project::create
/// GET    /projects/{id}         -> project::get_by_id
/// PUT    /projects/{id}         -> project::update
/// DELETE /projects/{id}         -> project::delete
///
/// GET    /contacts              -> contact::list
/// DELETE /contacts/{id}         -> contact::delete
///
/// PUT    /about                 -> about::upsert
/// PUT    /hero                  -> hero::upsert
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/init", post(auth::init))
        .route("/change-password", put(auth::change_password))
        .route("/services", post(service::create))
        .route("/services/{id}", put(service::update).delete(service::delete))
        .route("/projects", get(project::list).post(project::create))
        .route(
            "/projects/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .route("/contacts", get(contact::list))
        .route("/contacts/{id}", delete(contact::delete))
        .route("/about", put(about::upsert))
        .route("/hero", put(hero::upsert))
}

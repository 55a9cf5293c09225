//! Routes the public site reads from without authentication.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{about, contact, hero, service};
use crate::state::AppState;

/// ```text
/// GET  /services                -> service::list
/// GET  /services/{id}           -> service::get_by_id
/// GET  /services/{id}/projects  -> service::list_projects
/// GET  /about                   -> about::get
/// GET  /hero                    -> hero::get
/// POST /contact                 -> contact::submit
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/services", get(service::list))
        .route("/services/{id}", get(service::get_by_id))
        .route("/services/{id}/projects", get(service::list_projects))
        .route("/about", get(about::get))
        .route("/hero", get(hero::get))
        .route("/contact", post(contact::submit))
}

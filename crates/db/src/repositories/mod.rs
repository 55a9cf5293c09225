//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod about_repo;
pub mod admin_repo;
pub mod contact_repo;
pub mod hero_repo;
pub mod project_repo;
pub mod service_repo;

pub use about_repo::AboutRepo;
pub use admin_repo::AdminRepo;
pub use contact_repo::ContactRepo;
pub use hero_repo::HeroRepo;
pub use project_repo::ProjectRepo;
pub use service_repo::{CascadeDelete, ServiceRepo};

/// Keys for `pg_advisory_xact_lock`, one per serialised write path.
pub(crate) mod lock_keys {
    pub const ADMIN_BOOTSTRAP: i64 = 0x6d61_7961_0001;
    pub const ABOUT_UPSERT: i64 = 0x6d61_7961_0002;
    pub const HERO_UPSERT: i64 = 0x6d61_7961_0003;
}

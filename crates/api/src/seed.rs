//! Default content for a fresh database.
//!
//! Each part is seeded only when its table is still empty, so running the
//! seeder against a live site never overwrites edits made in the dashboard.

use maya_core::content::{DEFAULT_HERO, SEED_ABOUT, SEED_SERVICES};
use maya_db::models::about::UpsertAbout;
use maya_db::models::admin::CreateAdmin;
use maya_db::models::hero::UpsertHero;
use maya_db::models::service::CreateService;
use maya_db::repositories::{AboutRepo, AdminRepo, HeroRepo, ServiceRepo};
use maya_db::DbPool;

use crate::auth::password::hash_password;
use crate::config::BootstrapAdmin;

/// What a seeding run created.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub services_created: usize,
    pub admin_created: bool,
    pub about_created: bool,
    pub hero_created: bool,
}

impl SeedReport {
    /// `true` when the run changed nothing.
    pub fn is_noop(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

/// Insert the default catalogue, bootstrap admin, About and Hero where
/// missing.
pub async fn seed_defaults(
    pool: &DbPool,
    admin: &BootstrapAdmin,
) -> Result<SeedReport, SeedError> {
    let mut report = SeedReport::default();

    if ServiceRepo::count(pool).await? == 0 {
        for seed in SEED_SERVICES {
            let service = ServiceRepo::create(
                pool,
                &CreateService {
                    title: seed.title.to_string(),
                    description: Some(seed.description.to_string()),
                    image: None,
                    order: Some(seed.order),
                },
            )
            .await?;
            tracing::debug!(service_id = service.id, title = %service.title, "Seeded service");
            report.services_created += 1;
        }
    }

    if AdminRepo::count(pool).await? == 0 {
        let password_hash = hash_password(&admin.password)?;
        let created = AdminRepo::create_first(
            pool,
            &CreateAdmin {
                username: admin.username.clone(),
                password_hash,
            },
        )
        .await?;
        report.admin_created = created.is_some();
    }

    if AboutRepo::find(pool).await?.is_none() {
        AboutRepo::upsert(
            pool,
            &UpsertAbout {
                description1: Some(SEED_ABOUT.description1.to_string()),
                description2: Some(SEED_ABOUT.description2.to_string()),
                projects_completed: Some(SEED_ABOUT.projects_completed),
                happy_clients: Some(SEED_ABOUT.happy_clients),
                years_experience: Some(SEED_ABOUT.years_experience),
            },
        )
        .await?;
        report.about_created = true;
    }

    if HeroRepo::find(pool).await?.is_none() {
        HeroRepo::upsert(
            pool,
            &UpsertHero {
                logo_url: Some(DEFAULT_HERO.logo_url.to_string()),
                title: Some(DEFAULT_HERO.title.to_string()),
                subtitle: Some(DEFAULT_HERO.subtitle.to_string()),
            },
        )
        .await?;
        report.hero_created = true;
    }

    tracing::info!(
        services_created = report.services_created,
        admin_created = report.admin_created,
        about_created = report.about_created,
        hero_created = report.hero_created,
        "Seeding finished"
    );
    Ok(report)
}

//! Fixed site content: public fallbacks, contact-form constants, and the
//! default catalogue used when seeding an empty database.

use serde::Serialize;

/// Subject stored for contact messages submitted without one.
pub const DEFAULT_CONTACT_SUBJECT: &str = "No Subject";

/// Acknowledgement returned for every accepted contact submission.
pub const CONTACT_ACK_MESSAGE: &str = "Thank you for your message! We will get back to you soon.";

/// About section served by `GET /api/about` while no row is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AboutDefaults {
    pub description1: &'static str,
    pub description2: &'static str,
    pub projects_completed: i32,
    pub happy_clients: i32,
    pub years_experience: i32,
}

/// Hero banner served by `GET /api/hero` while no row is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeroDefaults {
    pub logo_url: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub const DEFAULT_ABOUT: AboutDefaults = AboutDefaults {
    description1: "We are The Visual Maya, a creative design agency passionate about crafting extraordinary visual experiences.",
    description2: "With a perfect blend of creativity and strategy, we transform brands into memorable experiences.",
    projects_completed: 150,
    happy_clients: 50,
    years_experience: 8,
};

/// The longer copy written by the seeder.
pub const SEED_ABOUT: AboutDefaults = AboutDefaults {
    description1: "We are The Visual Maya, a creative design agency passionate about crafting extraordinary visual experiences. Our team of talented designers brings your vision to life.",
    description2: "With a perfect blend of creativity and strategy, we transform brands into memorable experiences that resonate with audiences and drive meaningful engagement.",
    projects_completed: 150,
    happy_clients: 50,
    years_experience: 8,
};

pub const DEFAULT_HERO: HeroDefaults = HeroDefaults {
    logo_url: "/logo.png",
    title: "THE VISUAL MAYA",
    subtitle: "DESIGN • BRANDING • DIGITAL",
};

/// A service written by the seeder.
#[derive(Debug, Clone, Copy)]
pub struct SeedService {
    pub title: &'static str,
    pub description: &'static str,
    pub order: i32,
}

pub const SEED_SERVICES: [SeedService; 4] = [
    SeedService {
        title: "Package Designing",
        description: "Innovative packaging solutions that showcase your product and captivate your customers with stunning visual designs.",
        order: 1,
    },
    SeedService {
        title: "Poster Designing",
        description: "Eye-catching poster designs that communicate your message and inspire action with bold, impactful visuals.",
        order: 2,
    },
    SeedService {
        title: "Logo Designing",
        description: "Create memorable brand identities with custom logo designs that capture your essence and stand out.",
        order: 3,
    },
    SeedService {
        title: "Brand Identity Design",
        description: "Comprehensive brand strategy and visual identity systems that make you stand out in the marketplace.",
        order: 4,
    },
];

/// Subject to store for a contact message: the trimmed input, or
/// [`DEFAULT_CONTACT_SUBJECT`] when absent or blank.
pub fn contact_subject(subject: Option<&str>) -> &str {
    match subject.map(str::trim) {
        Some(s) if !s.is_empty() => s,
        _ => DEFAULT_CONTACT_SUBJECT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_subject_falls_back() {
        assert_eq!(contact_subject(None), "No Subject");
        assert_eq!(contact_subject(Some("   ")), "No Subject");
        assert_eq!(contact_subject(Some(" Quote ")), "Quote");
    }

    #[test]
    fn seed_services_are_in_display_order() {
        let orders: Vec<i32> = SEED_SERVICES.iter().map(|s| s.order).collect();
        assert_eq!(orders, vec![1, 2, 3, 4]);
    }
}

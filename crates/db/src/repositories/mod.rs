//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Singleton sections are written
//! with `ON CONFLICT (project_id) DO UPDATE` upserts; partial updates keep
//! omitted fields via `COALESCE` against the stored column.

pub mod about_repo;
pub mod admin_repo;
pub mod content_repo;
pub mod gallery_repo;
pub mod hero_repo;
pub mod package_repo;
pub mod project_repo;
pub mod rating_repo;
pub mod services_repo;
pub mod site_settings_repo;
pub mod why_us_repo;

pub use about_repo::AboutRepo;
pub use admin_repo::AdminRepo;
pub use content_repo::ContentRepo;
pub use gallery_repo::GalleryRepo;
pub use hero_repo::HeroRepo;
pub use package_repo::PackageRepo;
pub use project_repo::ProjectRepo;
pub use rating_repo::RatingRepo;
pub use services_repo::ServicesRepo;
pub use site_settings_repo::SiteSettingsRepo;
pub use why_us_repo::WhyUsRepo;

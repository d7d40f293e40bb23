//! Integration tests for project creation: the nested all-sections insert,
//! slug uniqueness, and the cascade policy on project deletion.

use sqlx::PgPool;
use vitrine_db::models::about::UpsertAboutSection;
use vitrine_db::models::gallery::GalleryImageInput;
use vitrine_db::models::hero::HeroSectionInput;
use vitrine_db::models::project::{ContactSectionInput, CreateProject};
use vitrine_db::models::services::{ServiceInput, ServicesSectionInput};
use vitrine_db::models::site_settings::SiteSettingsInput;
use vitrine_db::models::why_us::{WhyUsFeatureInput, WhyUsSectionInput};
use vitrine_db::repositories::{
    AboutRepo, GalleryRepo, HeroRepo, ProjectRepo, ServicesRepo, SiteSettingsRepo, WhyUsRepo,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn full_payload() -> CreateProject {
    CreateProject {
        site_settings: Some(SiteSettingsInput {
            brand_name: Some("Aroma".into()),
            site_title: Some("Aroma Cafe".into()),
            site_description: Some("Specialty coffee in Riyadh".into()),
            site_keywords: Some(vec!["coffee".into(), "riyadh".into()]),
            phone: Some("+966500000001".into()),
            whatsapp: Some("+966500000002".into()),
            email: Some("hello@aroma.example".into()),
            address: Some("Olaya St, Riyadh".into()),
        }),
        hero_section: Some(HeroSectionInput {
            headline: Some("Coffee worth the detour".into()),
            subheadline: Some("Beans roasted in-house".into()),
            ..Default::default()
        }),
        about_section: Some(UpsertAboutSection {
            label: Some("About".into()),
            title: Some("Our story".into()),
            description1: Some("Founded in 2019".into()),
            image: None,
        }),
        services_section: Some(ServicesSectionInput {
            label: Some("Services".into()),
            title: Some("What we do".into()),
            description: Some("From beans to events".into()),
            services: Some(vec![
                ServiceInput {
                    icon: Some("coffee".into()),
                    title: Some("Espresso bar".into()),
                    description: Some("On-site baristas".into()),
                },
                ServiceInput {
                    icon: Some("users".into()),
                    title: Some("Catering".into()),
                    description: Some("Events of any size".into()),
                },
            ]),
        }),
        why_us_section: Some(WhyUsSectionInput {
            label: Some("Why us".into()),
            title: Some("Why choose us".into()),
            description: Some("A few reasons".into()),
            features: Some(vec![WhyUsFeatureInput {
                icon: Some("award".into()),
                title: Some("Award winning".into()),
                description: Some("Best roaster 2024".into()),
            }]),
        }),
        contact_section: Some(ContactSectionInput {
            label: Some("Contact".into()),
            title: Some("Get in touch".into()),
            description: Some("We reply within a day".into()),
        }),
        gallery_images: Some(vec![
            GalleryImageInput {
                url: Some("https://cdn.example/img/1.jpg".into()),
                alt: Some("Bar".into()),
            },
            GalleryImageInput {
                url: None,
                alt: Some("dropped".into()),
            },
        ]),
        ..Default::default()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_full_persists_nested_sections(pool: PgPool) {
    let project = ProjectRepo::create_full(
        &pool,
        "aroma-cafe",
        "Aroma Cafe",
        "Cafe marketing site",
        &full_payload(),
    )
    .await
    .unwrap();

    assert_eq!(project.slug, "aroma-cafe");
    assert!(project.is_active);

    let settings = SiteSettingsRepo::find_by_project(&pool, project.id)
        .await
        .unwrap()
        .expect("settings created");
    assert_eq!(settings.brand_name.as_deref(), Some("Aroma"));
    assert_eq!(settings.site_keywords, vec!["coffee", "riyadh"]);

    let hero = HeroRepo::find_by_project(&pool, project.id)
        .await
        .unwrap()
        .expect("hero created");
    assert_eq!(hero.headline, "Coffee worth the detour");
    assert!(hero.is_active);

    let about = AboutRepo::find_by_project(&pool, project.id)
        .await
        .unwrap()
        .expect("about created");
    assert_eq!(about.description1, "Founded in 2019");

    let section = ServicesRepo::find_section_by_project(&pool, project.id)
        .await
        .unwrap()
        .expect("services section created");
    let items = ServicesRepo::list_items(&pool, section.id).await.unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].icon, "Coffee");
    assert_eq!(items[1].icon, "Users");

    let why_us = WhyUsRepo::find_section_by_project(&pool, project.id)
        .await
        .unwrap()
        .expect("why-us section created");
    let features = WhyUsRepo::list_features(&pool, why_us.id).await.unwrap();
    assert_eq!(features.len(), 1);
    assert_eq!(features[0].icon, "Award");

    // The entry without a URL is skipped, not stored blank.
    let gallery = GalleryRepo::list_by_project(&pool, project.id).await.unwrap();
    assert_eq!(gallery.len(), 1);
    assert_eq!(gallery[0].url, "https://cdn.example/img/1.jpg");

    let contacts: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM contact_sections WHERE project_id = $1")
            .bind(project.id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(contacts, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_full_defaults_section_text_to_empty(pool: PgPool) {
    let payload = CreateProject {
        hero_section: Some(HeroSectionInput::default()),
        services_section: Some(ServicesSectionInput::default()),
        ..Default::default()
    };
    let project = ProjectRepo::create_full(&pool, "bare-cafe", "Bare", "Empty sections", &payload)
        .await
        .unwrap();

    let hero = HeroRepo::find_by_project(&pool, project.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(hero.headline, "");
    assert_eq!(hero.subheadline, "");

    let section = ServicesRepo::find_section_by_project(&pool, project.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(section.label, "");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_slug_hits_unique_constraint(pool: PgPool) {
    ProjectRepo::create_full(&pool, "aroma-cafe", "First", "Copy", &CreateProject::default())
        .await
        .unwrap();

    let err = ProjectRepo::create_full(
        &pool,
        "aroma-cafe",
        "Second",
        "Copy",
        &CreateProject::default(),
    )
    .await
    .unwrap_err();

    let db_err = err.as_database_error().expect("database error");
    assert_eq!(db_err.constraint(), Some("uq_projects_slug"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn find_by_slug_and_id_agree(pool: PgPool) {
    let created = ProjectRepo::create_full(
        &pool,
        "aroma-cafe",
        "Aroma Cafe",
        "Copy",
        &CreateProject::default(),
    )
    .await
    .unwrap();

    let by_id = ProjectRepo::find_by_id(&pool, created.id).await.unwrap().unwrap();
    let by_slug = ProjectRepo::find_by_slug(&pool, "aroma-cafe")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_id.id, by_slug.id);

    assert!(ProjectRepo::find_by_slug(&pool, "missing").await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_a_project_cascades_to_children(pool: PgPool) {
    let project = ProjectRepo::create_full(
        &pool,
        "aroma-cafe",
        "Aroma Cafe",
        "Copy",
        &full_payload(),
    )
    .await
    .unwrap();

    sqlx::query("DELETE FROM projects WHERE id = $1")
        .bind(project.id)
        .execute(&pool)
        .await
        .unwrap();

    for table in [
        "site_settings",
        "hero_sections",
        "about_sections",
        "services_sections",
        "why_us_sections",
        "contact_sections",
        "gallery_images",
    ] {
        let remaining: i64 =
            sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table} WHERE project_id = $1"))
                .bind(project.id)
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(remaining, 0, "{table} should cascade");
    }

    // Grandchildren go with their sections.
    let services: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM services")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(services, 0);
}

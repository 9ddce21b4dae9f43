//! Integration tests for the repository layer against a real database:
//! - Project create / lookup / filtered listing
//! - Image insert/delete keeping `image_count` in sync
//! - Cascade delete of images with their project
//! - Category ordering and slug derivation
//! - Settings upsert (atomic in bulk) and lenient decoding
//! - Concurrent image mutations on one project

use assert_matches::assert_matches;
use gallery_core::gallery::ProjectFilter;
use gallery_core::settings::EncodedSetting;
use gallery_db::models::category::{CreateCategory, UpdateCategory};
use gallery_db::models::image::CreateProjectImage;
use gallery_db::models::project::{CreateProject, UpdateProject};
use gallery_db::repositories::{CategoryRepo, ImageRepo, ProjectRepo, SettingRepo};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_project(slug: &str, category: &str, published: bool) -> CreateProject {
    CreateProject {
        title: slug.replace('-', " "),
        slug: slug.to_string(),
        description: None,
        category: category.to_string(),
        tags: vec!["modern".to_string()],
        thumbnail: None,
        published,
    }
}

fn new_image(caption: &str, order: i32) -> CreateProjectImage {
    CreateProjectImage {
        url: format!("https://img.example/{caption}.jpg"),
        caption: Some(caption.to_string()),
        orientation: "landscape".to_string(),
        sort_order: order,
    }
}

async fn cached_count(pool: &PgPool, id: Uuid) -> i32 {
    ProjectRepo::find_by_id(pool, id)
        .await
        .unwrap()
        .expect("project exists")
        .image_count
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_and_find_by_slug(pool: PgPool) {
    let created = ProjectRepo::create(&pool, &new_project("modern-villa", "residential", true))
        .await
        .unwrap();
    assert_eq!(created.image_count, 0);
    assert_eq!(created.tags, vec!["modern".to_string()]);

    let found = ProjectRepo::find_by_slug(&pool, "modern-villa")
        .await
        .unwrap()
        .expect("project should be found");
    assert_eq!(found.id, created.id);

    let missing = ProjectRepo::find_by_slug(&pool, "modern").await.unwrap();
    assert!(missing.is_none(), "slug lookup must be exact");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_slug_is_rejected(pool: PgPool) {
    ProjectRepo::create(&pool, &new_project("loft", "interiors", true))
        .await
        .unwrap();
    let err = ProjectRepo::create(&pool, &new_project("loft", "interiors", true))
        .await
        .unwrap_err();
    assert_matches!(err, sqlx::Error::Database(_));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_filters_published_and_category(pool: PgPool) {
    ProjectRepo::create(&pool, &new_project("villa", "residential", true))
        .await
        .unwrap();
    ProjectRepo::create(&pool, &new_project("tower", "commercial", true))
        .await
        .unwrap();
    ProjectRepo::create(&pool, &new_project("draft-house", "residential", false))
        .await
        .unwrap();

    let published = ProjectRepo::list(&pool, &ProjectFilter::new(None, true))
        .await
        .unwrap();
    assert_eq!(published.len(), 2);
    assert!(published.iter().all(|p| p.published));

    let everything = ProjectRepo::list(&pool, &ProjectFilter::new(None, false))
        .await
        .unwrap();
    assert_eq!(everything.len(), 3);

    let residential = ProjectRepo::list(
        &pool,
        &ProjectFilter::new(Some("residential".into()), true),
    )
    .await
    .unwrap();
    assert_eq!(residential.len(), 1);
    assert_eq!(residential[0].slug, "villa");

    let all = ProjectRepo::list(&pool, &ProjectFilter::new(Some("all".into()), true))
        .await
        .unwrap();
    assert_eq!(all.len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_orders_newest_first(pool: PgPool) {
    let old = ProjectRepo::create(&pool, &new_project("old", "residential", true))
        .await
        .unwrap();
    let new = ProjectRepo::create(&pool, &new_project("new", "residential", true))
        .await
        .unwrap();
    sqlx::query("UPDATE projects SET created_at = NOW() - INTERVAL '1 day' WHERE id = $1")
        .bind(old.id)
        .execute(&pool)
        .await
        .unwrap();

    let listed = ProjectRepo::list(&pool, &ProjectFilter::default()).await.unwrap();
    let ids: Vec<_> = listed.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![new.id, old.id]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_applies_only_given_fields(pool: PgPool) {
    let created = ProjectRepo::create(&pool, &new_project("villa", "residential", true))
        .await
        .unwrap();

    let update = UpdateProject {
        title: Some("Villa Renamed".into()),
        published: Some(false),
        ..Default::default()
    };
    let updated = ProjectRepo::update(&pool, created.id, &update)
        .await
        .unwrap()
        .expect("row exists");
    assert_eq!(updated.title, "Villa Renamed");
    assert!(!updated.published);
    assert_eq!(updated.slug, "villa");
    assert_eq!(updated.category, "residential");

    let missing = ProjectRepo::update(&pool, Uuid::new_v4(), &update).await.unwrap();
    assert!(missing.is_none());
}

// ---------------------------------------------------------------------------
// Images and count maintenance
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn add_and_delete_image_keep_count_in_sync(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("villa", "residential", true))
        .await
        .unwrap();

    let first = ImageRepo::add(&pool, project.id, &new_image("front", 0))
        .await
        .unwrap()
        .expect("project exists");
    ImageRepo::add(&pool, project.id, &new_image("back", 1))
        .await
        .unwrap()
        .expect("project exists");
    assert_eq!(cached_count(&pool, project.id).await, 2);

    let removed = ImageRepo::delete(&pool, first.id)
        .await
        .unwrap()
        .expect("image exists");
    assert_eq!(removed.project_id, project.id);
    assert_eq!(removed.image_count, 1);
    assert_eq!(cached_count(&pool, project.id).await, 1);
    assert!(ImageRepo::find_by_id(&pool, first.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_unknown_image_changes_nothing(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("villa", "residential", true))
        .await
        .unwrap();
    ImageRepo::add(&pool, project.id, &new_image("front", 0))
        .await
        .unwrap();

    let removed = ImageRepo::delete(&pool, Uuid::new_v4()).await.unwrap();
    assert!(removed.is_none());
    assert_eq!(cached_count(&pool, project.id).await, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn adding_image_to_unknown_project_writes_nothing(pool: PgPool) {
    let added = ImageRepo::add(&pool, Uuid::new_v4(), &new_image("orphan", 0))
        .await
        .unwrap();
    assert!(added.is_none());

    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM project_images")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(total, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn detail_sorts_images_by_order(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("villa", "residential", true))
        .await
        .unwrap();
    for (caption, order) in [("three", 3), ("one", 1), ("two", 2)] {
        ImageRepo::add(&pool, project.id, &new_image(caption, order))
            .await
            .unwrap();
    }

    let detail = ProjectRepo::find_with_images_by_slug(&pool, "villa")
        .await
        .unwrap()
        .expect("project exists");
    let orders: Vec<_> = detail.images.iter().map(|i| i.sort_order).collect();
    assert_eq!(orders, vec![1, 2, 3]);
    assert_eq!(detail.image_count, 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_with_images_groups_per_project(pool: PgPool) {
    let villa = ProjectRepo::create(&pool, &new_project("villa", "residential", true))
        .await
        .unwrap();
    let tower = ProjectRepo::create(&pool, &new_project("tower", "commercial", true))
        .await
        .unwrap();
    ImageRepo::add(&pool, villa.id, &new_image("v2", 2)).await.unwrap();
    ImageRepo::add(&pool, villa.id, &new_image("v1", 1)).await.unwrap();
    ImageRepo::add(&pool, tower.id, &new_image("t1", 0)).await.unwrap();

    let details = ProjectRepo::list_with_images(&pool, &ProjectFilter::new(None, true))
        .await
        .unwrap();
    assert_eq!(details.len(), 2);

    let villa_view = details.iter().find(|d| d.id == villa.id).unwrap();
    let captions: Vec<_> = villa_view
        .images
        .iter()
        .map(|i| i.caption.clone().unwrap())
        .collect();
    assert_eq!(captions, vec!["v1", "v2"]);
    assert_eq!(villa_view.image_count, 2);

    let tower_view = details.iter().find(|d| d.id == tower.id).unwrap();
    assert_eq!(tower_view.image_count, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_project_cascades_images(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("villa", "residential", true))
        .await
        .unwrap();
    let image = ImageRepo::add(&pool, project.id, &new_image("front", 0))
        .await
        .unwrap()
        .unwrap();

    assert!(ProjectRepo::delete(&pool, project.id).await.unwrap());
    assert!(ImageRepo::find_by_id(&pool, image.id).await.unwrap().is_none());
    assert!(!ProjectRepo::delete(&pool, project.id).await.unwrap());
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn categories_list_in_display_order(pool: PgPool) {
    for (name, order) in [("Commercial", 2), ("Residential", 1), ("Interiors", 3)] {
        CategoryRepo::create(
            &pool,
            &CreateCategory {
                name: name.into(),
                slug: None,
                sort_order: Some(order),
            },
        )
        .await
        .unwrap();
    }

    let listed = CategoryRepo::list(&pool).await.unwrap();
    let slugs: Vec<_> = listed.iter().map(|c| c.slug.as_str()).collect();
    assert_eq!(slugs, vec!["residential", "commercial", "interiors"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn category_update_and_delete(pool: PgPool) {
    let created = CategoryRepo::create(
        &pool,
        &CreateCategory {
            name: "Urban Design".into(),
            slug: None,
            sort_order: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(created.slug, "urban-design");
    assert_eq!(created.sort_order, 0);

    let updated = CategoryRepo::update(
        &pool,
        created.id,
        &UpdateCategory {
            sort_order: Some(7),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.sort_order, 7);
    assert_eq!(updated.name, "Urban Design");

    assert!(CategoryRepo::delete(&pool, created.id).await.unwrap());
    assert!(CategoryRepo::find_by_slug(&pool, "urban-design")
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn upsert_replaces_value_and_type(pool: PgPool) {
    SettingRepo::upsert(&pool, &EncodedSetting::new("footer", json!({"a": 1})))
        .await
        .unwrap();
    let replaced = SettingRepo::upsert(&pool, &EncodedSetting::new("footer", json!("plain")))
        .await
        .unwrap();
    assert_eq!(replaced.value, "plain");
    assert_eq!(replaced.value_type, "string");

    let rows = SettingRepo::list(&pool).await.unwrap();
    assert_eq!(rows.len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn load_map_decodes_each_type(pool: PgPool) {
    SettingRepo::upsert_many(
        &pool,
        &[
            EncodedSetting::new("siteName", json!("Architect Studio")),
            EncodedSetting::new("quickLinks", json!([{"label": "About", "url": "#about"}])),
        ],
    )
    .await
    .unwrap();
    sqlx::query("INSERT INTO settings (key, value, value_type) VALUES ('socialLinks', '{oops', 'json')")
        .execute(&pool)
        .await
        .unwrap();

    let map = SettingRepo::load_map(&pool).await.unwrap();
    assert_eq!(map["siteName"], json!("Architect Studio"));
    assert_eq!(map["quickLinks"], json!([{"label": "About", "url": "#about"}]));
    assert_eq!(map["socialLinks"], json!({}));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn upsert_many_is_all_or_nothing(pool: PgPool) {
    let result = SettingRepo::upsert_many(
        &pool,
        &[
            EncodedSetting::new("a", json!("ok")),
            EncodedSetting::new("b", json!("bad\u{0000}")),
        ],
    )
    .await;
    assert_matches!(result, Err(_));

    let rows = SettingRepo::list(&pool).await.unwrap();
    assert!(rows.is_empty());
}

// ---------------------------------------------------------------------------
// Concurrent image mutations
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn concurrent_image_changes_keep_count_exact(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("busy", "residential", true))
        .await
        .unwrap();

    let mut existing = Vec::new();
    for i in 0..10 {
        let image = ImageRepo::add(&pool, project.id, &new_image(&format!("old-{i}"), i))
            .await
            .unwrap()
            .expect("project exists");
        existing.push(image.id);
    }

    let mut tasks = tokio::task::JoinSet::new();
    for i in 0..20 {
        let pool = pool.clone();
        let project_id = project.id;
        tasks.spawn(async move {
            let added = ImageRepo::add(&pool, project_id, &new_image(&format!("new-{i}"), i))
                .await
                .unwrap();
            assert!(added.is_some());
        });
    }
    for image_id in existing {
        let pool = pool.clone();
        tasks.spawn(async move {
            let removed = ImageRepo::delete(&pool, image_id).await.unwrap();
            assert!(removed.is_some());
        });
    }
    while let Some(joined) = tasks.join_next().await {
        joined.unwrap();
    }

    let actual: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM project_images WHERE project_id = $1")
        .bind(project.id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(actual, 20);
    assert_eq!(cached_count(&pool, project.id).await, 20);
}

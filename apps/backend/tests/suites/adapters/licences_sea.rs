use ant_backend::adapters::licences_sea;
use ant_backend::repos::licences;

use crate::support::fixtures::{add_category, add_licence, add_version, seed_catalog};
use crate::support::query_counter::counting_db;
use crate::support::test_state::in_memory_db;

#[tokio::test]
async fn list_filters_by_version_and_orders_by_display_order() {
    let db = in_memory_db().await;
    let v2023 = add_version(&db, 2023).await;
    let v2024 = add_version(&db, 2024).await;
    let pro = add_category(&db, "Professional").await;

    add_licence(&db, v2024, pro, "E", Some(3)).await;
    add_licence(&db, v2024, pro, "C", Some(1)).await;
    add_licence(&db, v2024, pro, "D", Some(2)).await;
    add_licence(&db, v2023, pro, "C-old", Some(1)).await;

    let names: Vec<String> = licences::list_licence_types(&db, Some(v2024))
        .await
        .unwrap()
        .into_iter()
        .map(|l| l.name)
        .collect();
    assert_eq!(names, vec!["C", "D", "E"]);

    let all = licences::list_licence_types(&db, None).await.unwrap();
    assert_eq!(all.len(), 4);
}

#[tokio::test]
async fn relations_are_embedded() {
    let db = in_memory_db().await;
    let catalog = seed_catalog(&db).await;

    let licence = licences::find_licence_type(&db, catalog.licence_id)
        .await
        .unwrap()
        .expect("licence exists");
    assert_eq!(licence.version.id, catalog.version_id);
    assert_eq!(licence.version.year, 2024);
    assert_eq!(licence.category.id, catalog.category_id);
    assert_eq!(licence.category.name, "Non-professional");
    assert_eq!(licence.display_order, Some(1));
}

#[tokio::test]
async fn unknown_licence_is_none() {
    let db = in_memory_db().await;
    seed_catalog(&db).await;

    assert!(licences_sea::find_with_relations(&db, 999)
        .await
        .unwrap()
        .is_none());
    assert!(!licences::licence_exists(&db, 999).await.unwrap());
}

#[tokio::test]
async fn listing_uses_a_fixed_number_of_statements() {
    let (db, counter) = counting_db().await;
    let version = add_version(&db, 2024).await;
    let category = add_category(&db, "Professional").await;
    add_licence(&db, version, category, "A", Some(1)).await;

    counter.reset();
    licences::list_licence_types(&db, Some(version)).await.unwrap();
    let with_one = counter.get();

    for (i, name) in ["B", "C", "D", "E"].iter().enumerate() {
        let other = add_category(&db, name).await;
        add_licence(&db, version, other, name, Some(i as i32 + 2)).await;
    }

    counter.reset();
    let listed = licences::list_licence_types(&db, Some(version)).await.unwrap();
    assert_eq!(listed.len(), 5);
    assert_eq!(counter.get(), with_one);
}

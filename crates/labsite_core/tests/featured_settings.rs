use labsite_core::db::{open_db, open_db_in_memory};
use labsite_core::{ContentStore, NewsItem, SqliteKvStore};

fn open_store() -> ContentStore<SqliteKvStore> {
    let conn = open_db_in_memory().unwrap();
    ContentStore::open(SqliteKvStore::new(conn)).unwrap()
}

#[test]
fn seeded_featured_ids_resolve_to_records() {
    let store = open_store();
    let featured = store.featured_items();
    assert!(featured.project.is_some());
    assert!(featured.news.is_some());
    assert!(featured.publication.is_none());
}

#[test]
fn featured_id_of_missing_record_degrades_to_none() {
    let mut store = open_store();
    store
        .set_featured_publication(Some("publication-vanished".to_string()))
        .unwrap();

    // The stale id stays stored but resolves to nothing at read time.
    assert_eq!(
        store.featured_selection().publication_id.as_deref(),
        Some("publication-vanished")
    );
    assert!(store.featured_items().publication.is_none());
}

#[test]
fn setting_and_clearing_featured_publication() {
    let mut store = open_store();
    let id = store.publications()[0].id.clone();

    store.set_featured_publication(Some(id.clone())).unwrap();
    assert_eq!(store.featured_items().publication.unwrap().id, id);

    store.set_featured_publication(None).unwrap();
    assert!(store.featured_items().publication.is_none());
}

#[test]
fn deleting_featured_news_clears_the_slot() {
    let mut store = open_store();
    let item = store.add_news(NewsItem::new("Momentary")).unwrap();
    store.set_featured_news(Some(item.id.clone())).unwrap();

    store.delete_news(&item.id).unwrap();
    assert_eq!(store.featured_selection().news_id, None);
}

#[test]
fn deleting_featured_publication_clears_the_slot() {
    let mut store = open_store();
    let id = store.publications()[0].id.clone();
    store.set_featured_publication(Some(id.clone())).unwrap();

    store.delete_publication(&id).unwrap();
    assert_eq!(store.featured_selection().publication_id, None);
}

#[test]
fn team_image_settings_update_and_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("site.db");

    {
        let conn = open_db(&db_path).unwrap();
        let mut store = ContentStore::open(SqliteKvStore::new(conn)).unwrap();
        store.update_team_image("/images/retreat-2026.jpg".to_string()).unwrap();
        store.update_team_image_position("top".to_string()).unwrap();
    }

    let conn = open_db(&db_path).unwrap();
    let store = ContentStore::open(SqliteKvStore::new(conn)).unwrap();
    assert_eq!(store.team_image(), "/images/retreat-2026.jpg");
    assert_eq!(store.team_image_position(), "top");
}

use labsite_core::db::open_db;
use labsite_core::repo::keys;
use labsite_core::store::seed;
use labsite_core::{ContentStore, KvStore, NewsItem, SqliteKvStore};
use std::path::Path;

fn open_store_at(path: &Path) -> ContentStore<SqliteKvStore> {
    let conn = open_db(path).unwrap();
    ContentStore::open(SqliteKvStore::new(conn)).unwrap()
}

#[test]
fn empty_storage_loads_seed_data() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store_at(&dir.path().join("site.db"));

    let seeded: Vec<String> = seed::people().iter().map(|p| p.id.clone()).collect();
    let loaded: Vec<String> = store.people().iter().map(|p| p.id.clone()).collect();
    assert_eq!(loaded, seeded);
    assert_eq!(store.projects().len(), seed::projects().len());
    assert_eq!(store.news().len(), seed::news().len());

    // Derived project fields are filled during the load normalization.
    for project in store.projects() {
        assert!(!project.display_color.is_empty());
        assert_eq!(project.topics_with_colors.len(), project.topics.len());
    }
}

#[test]
fn seed_data_is_persisted_so_reload_is_stable() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("site.db");

    let first = open_store_at(&db_path);
    let first_people: Vec<String> = first.people().iter().map(|p| p.id.clone()).collect();
    let first_colors = first.topic_registry().entries().clone();
    drop(first);

    let second = open_store_at(&db_path);
    let second_people: Vec<String> = second.people().iter().map(|p| p.id.clone()).collect();
    assert_eq!(first_people, second_people);
    // Topic colors assigned on first load survive the reload unchanged.
    assert_eq!(&first_colors, second.topic_registry().entries());
}

#[test]
fn mutations_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("site.db");

    let added_id = {
        let mut store = open_store_at(&db_path);
        store.add_news(NewsItem::new("Persisted item")).unwrap().id
    };

    let store = open_store_at(&db_path);
    assert_eq!(
        store.news_by_id(&added_id).unwrap().title,
        "Persisted item"
    );
}

#[test]
fn corrupted_collection_value_falls_back_to_seed() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("site.db");

    {
        let mut store = open_store_at(&db_path);
        store.add_news(NewsItem::new("Will be lost")).unwrap();
    }
    {
        let kv = SqliteKvStore::new(open_db(&db_path).unwrap());
        kv.save_raw(keys::NEWS, "{definitely not json").unwrap();
    }

    let store = open_store_at(&db_path);
    let titles: Vec<&str> = store.news().iter().map(|n| n.title.as_str()).collect();
    let seed_titles: Vec<String> = seed::news().iter().map(|n| n.title.clone()).collect();
    assert_eq!(titles, seed_titles.iter().map(String::as_str).collect::<Vec<_>>());
}

#[test]
fn reset_all_returns_to_seed_state_and_persists_it() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("site.db");

    {
        let mut store = open_store_at(&db_path);
        store.add_news(NewsItem::new("Pre-reset item")).unwrap();
        store.update_team_image("/images/custom.jpg".to_string()).unwrap();
        store.reset_all().unwrap();

        assert_eq!(store.news().len(), seed::news().len());
        assert_eq!(store.team_image(), seed::TEAM_IMAGE);
        assert_eq!(store.featured_selection(), &seed::featured());
    }

    let store = open_store_at(&db_path);
    assert_eq!(store.news().len(), seed::news().len());
    assert_eq!(store.team_image(), seed::TEAM_IMAGE);
}

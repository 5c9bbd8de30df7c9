use labsite_core::db::open_db_in_memory;
use labsite_core::repo::keys;
use labsite_core::{ContentStore, KvStore, Person, Project, SqliteKvStore};

fn open_store() -> ContentStore<SqliteKvStore> {
    let conn = open_db_in_memory().unwrap();
    ContentStore::open(SqliteKvStore::new(conn)).unwrap()
}

#[test]
fn adding_team_member_links_both_sides() {
    let mut store = open_store();
    let person = store.add_person(Person::new("A. Test")).unwrap();

    let mut project = Project::new("Linked Project");
    project.team = vec![person.id.clone()];
    let project = store.add_project(project).unwrap();

    assert!(store
        .person_by_id(&person.id)
        .unwrap()
        .projects
        .contains(&project.id));
}

#[test]
fn removing_team_member_unlinks_person_side() {
    let mut store = open_store();
    let person = store.add_person(Person::new("A. Test")).unwrap();

    let mut project = Project::new("Linked Project");
    project.team = vec![person.id.clone()];
    let mut project = store.add_project(project).unwrap();

    project.team.clear();
    store.update_project(project.clone()).unwrap();

    assert!(store.person_by_id(&person.id).unwrap().projects.is_empty());
}

#[test]
fn re_adding_same_member_does_not_duplicate_link() {
    let mut store = open_store();
    let person = store.add_person(Person::new("A. Test")).unwrap();

    let mut project = Project::new("Linked Project");
    project.team = vec![person.id.clone()];
    let project = store.add_project(project).unwrap();

    // Update with an unchanged team must not grow the back-reference.
    let again = store.project_by_id(&project.id).unwrap().clone();
    store.update_project(again).unwrap();

    let links = &store.person_by_id(&person.id).unwrap().projects;
    assert_eq!(links.iter().filter(|id| **id == project.id).count(), 1);
}

#[test]
fn deleting_project_clears_person_links_and_featured_slot() {
    let mut store = open_store();
    let person = store.add_person(Person::new("A. Test")).unwrap();

    let mut project = Project::new("Doomed Project");
    project.team = vec![person.id.clone()];
    let project = store.add_project(project).unwrap();
    store.set_featured_project(Some(project.id.clone())).unwrap();

    store.delete_project(&project.id).unwrap();

    assert!(store.person_by_id(&person.id).unwrap().projects.is_empty());
    assert_eq!(store.featured_selection().project_id, None);
    assert!(store.featured_items().project.is_none());
}

#[test]
fn deleting_person_removes_them_from_every_team() {
    let mut store = open_store();
    let person = store.add_person(Person::new("A. Test")).unwrap();

    let mut first = Project::new("First");
    first.team = vec![person.id.clone()];
    let first = store.add_project(first).unwrap();

    let mut second = Project::new("Second");
    second.team = vec![person.id.clone()];
    let second = store.add_project(second).unwrap();

    store.delete_person(&person.id).unwrap();

    assert!(store.project_by_id(&first.id).unwrap().team.is_empty());
    assert!(store.project_by_id(&second.id).unwrap().team.is_empty());
}

#[test]
fn person_back_reference_is_recomputed_not_taken_from_caller() {
    let mut store = open_store();
    let mut person = Person::new("Hand Edited");
    person.projects = vec!["project-made-up".to_string()];

    let stored = store.add_person(person).unwrap();
    assert!(stored.projects.is_empty());
}

#[test]
fn repair_rebuilds_person_links_from_project_teams() {
    let conn = open_db_in_memory().unwrap();
    let kv = SqliteKvStore::new(conn);

    // Persist a diverged state: the project lists one team member, the
    // person carries a stale link and misses the real one.
    let mut member = Person::new("On Team");
    member.id = "person-a".to_string();
    let mut stale = Person::new("Stale Link");
    stale.id = "person-b".to_string();
    stale.projects = vec!["project-x".to_string()];
    let mut project = Project::new("X");
    project.id = "project-x".to_string();
    project.team = vec!["person-a".to_string()];

    kv.save_json(keys::PEOPLE, &vec![member, stale]).unwrap();
    kv.save_json(keys::PROJECTS, &vec![project]).unwrap();

    let mut store = ContentStore::open(kv).unwrap();
    assert!(store.repair_links().unwrap());

    assert_eq!(
        store.person_by_id("person-a").unwrap().projects,
        vec!["project-x"]
    );
    assert!(store.person_by_id("person-b").unwrap().projects.is_empty());

    // Idempotent once consistent.
    assert!(!store.repair_links().unwrap());
}

#[test]
fn legacy_name_keyed_teams_migrate_to_ids_on_load() {
    let conn = open_db_in_memory().unwrap();
    let kv = SqliteKvStore::new(conn);

    let mut person = Person::new("Grace Hopper");
    person.id = "person-grace".to_string();
    let mut project = Project::new("Compilers");
    project.id = "project-compilers".to_string();
    project.team = vec!["Grace Hopper".to_string(), "External Visitor".to_string()];

    kv.save_json(keys::PEOPLE, &vec![person]).unwrap();
    kv.save_json(keys::PROJECTS, &vec![project]).unwrap();

    let store = ContentStore::open(kv).unwrap();
    let team = &store.project_by_id("project-compilers").unwrap().team;
    assert_eq!(team[0], "person-grace");
    // Unknown credits stay verbatim and never break link upkeep.
    assert_eq!(team[1], "External Visitor");
}

#[test]
fn duplicated_person_links_are_deduplicated_on_load() {
    let conn = open_db_in_memory().unwrap();
    let kv = SqliteKvStore::new(conn);

    let mut person = Person::new("Dup");
    person.id = "person-dup".to_string();
    person.projects = vec![
        "project-x".to_string(),
        "project-x".to_string(),
        "project-y".to_string(),
    ];
    kv.save_json(keys::PEOPLE, &vec![person]).unwrap();
    kv.save_json(keys::PROJECTS, &Vec::<Project>::new()).unwrap();

    let store = ContentStore::open(kv).unwrap();
    assert_eq!(
        store.person_by_id("person-dup").unwrap().projects,
        vec!["project-x", "project-y"]
    );
}

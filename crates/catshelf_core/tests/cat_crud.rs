use catshelf_core::db::open_db_in_memory;
use catshelf_core::{
    Cat, CatRepository, CatService, CatStore, CatValidationError, RepoError, SqliteCatRepository,
    SqliteCatStore,
};
use uuid::Uuid;

#[test]
fn create_and_list_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCatRepository::new(&conn);

    let cat = Cat::new("Tom", 3);
    let id = repo.create_cat(&cat).unwrap();
    assert_eq!(id, cat.uuid);

    let cats = repo.list_cats().unwrap();
    assert_eq!(cats.len(), 1);
    assert_eq!(cats[0].uuid, cat.uuid);
    assert_eq!(cats[0].name, "Tom");
    assert_eq!(cats[0].age, 3);
}

#[test]
fn list_returns_rows_in_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCatRepository::new(&conn);

    let cat_a = cat_with_fixed_id("00000000-0000-4000-8000-000000000001", "a");
    let cat_b = cat_with_fixed_id("00000000-0000-4000-8000-000000000002", "b");
    let cat_c = cat_with_fixed_id("00000000-0000-4000-8000-000000000003", "c");
    repo.create_cat(&cat_c).unwrap();
    repo.create_cat(&cat_a).unwrap();
    repo.create_cat(&cat_b).unwrap();

    // Same-millisecond inserts tie on created_at; the uuid tiebreaker keeps
    // the order deterministic.
    conn.execute("UPDATE cats SET created_at = 1234567890000;", [])
        .unwrap();

    let cats = repo.list_cats().unwrap();
    assert_eq!(cats.len(), 3);
    assert_eq!(cats[0].uuid, cat_a.uuid);
    assert_eq!(cats[1].uuid, cat_b.uuid);
    assert_eq!(cats[2].uuid, cat_c.uuid);
}

#[test]
fn validation_failure_blocks_create() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCatRepository::new(&conn);

    let invalid = Cat::new("   ", 1);
    let err = repo.create_cat(&invalid).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(CatValidationError::EmptyName)
    ));
    assert_eq!(repo.count_cats().unwrap(), 0);
}

#[test]
fn count_cats_reflects_inserts() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCatRepository::new(&conn);

    assert_eq!(repo.count_cats().unwrap(), 0);
    repo.create_cat(&Cat::new("Tom", 3)).unwrap();
    repo.create_cat(&Cat::new("Whiskers", 2)).unwrap();
    assert_eq!(repo.count_cats().unwrap(), 2);
}

#[test]
fn invalid_persisted_age_is_rejected_on_read() {
    let conn = open_db_in_memory().unwrap();

    conn.execute(
        "INSERT INTO cats (uuid, name, age) VALUES (?1, 'Ghost', -7);",
        [Uuid::new_v4().to_string()],
    )
    .unwrap();

    let repo = SqliteCatRepository::new(&conn);
    let err = repo.list_cats().unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(message) if message.contains("cats.age")));
}

#[test]
fn service_wraps_repository_calls() {
    let conn = open_db_in_memory().unwrap();
    let service = CatService::new(SqliteCatRepository::new(&conn));

    let id = service.create_cat("Whiskers", 2).unwrap();

    let cats = service.list_cats().unwrap();
    assert_eq!(cats.len(), 1);
    assert_eq!(cats[0].uuid, id);
    assert_eq!(service.count_cats().unwrap(), 1);
}

#[test]
fn sqlite_store_returns_rows_in_store_order() {
    let conn = open_db_in_memory().unwrap();
    {
        let repo = SqliteCatRepository::new(&conn);
        let cat_a = cat_with_fixed_id("00000000-0000-4000-8000-000000000001", "Tom");
        let cat_b = cat_with_fixed_id("00000000-0000-4000-8000-000000000002", "Whiskers");
        repo.create_cat(&cat_a).unwrap();
        repo.create_cat(&cat_b).unwrap();
    }
    conn.execute("UPDATE cats SET created_at = 1234567890000;", [])
        .unwrap();

    let store = SqliteCatStore::new(conn);
    let cats = store.all_cats().unwrap();
    assert_eq!(cats.len(), 2);
    assert_eq!(cats[0].name, "Tom");
    assert_eq!(cats[1].name, "Whiskers");
}

fn cat_with_fixed_id(id: &str, name: &str) -> Cat {
    Cat::with_id(Uuid::parse_str(id).unwrap(), name, 1)
}

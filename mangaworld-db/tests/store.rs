use mangaworld_catalog::*;
use mangaworld_db::{AuthorRepository, CatalogStore, OperationError, WorkRepository};
use tempfile::TempDir;

#[test]
fn end_to_end_author_and_work_lifecycle() {
    let mut store = CatalogStore::in_memory().unwrap();

    let jean = store
        .insert_author(&AuthorDraft::new("Jean", "Dupont"))
        .unwrap();
    assert!(
        store
            .insert_author(&AuthorDraft::new("Jean", "Dupont"))
            .is_err()
    );

    let manga = store
        .insert_work(&WorkDraft::new("Manga A", Some(jean.id)))
        .unwrap();
    assert_eq!(manga.author_id, jean.id);

    assert!(matches!(
        store.delete_author(jean.id),
        Err(OperationError::AuthorHasWorks { .. })
    ));

    store.delete_work(manga.id).unwrap();
    store.delete_author(jean.id).unwrap();

    assert!(store.list_authors().unwrap().is_empty());
    assert!(store.list_works().unwrap().is_empty());
}

#[test]
fn new_author_appears_in_listing() {
    let mut store = CatalogStore::in_memory().unwrap();
    let a = store
        .insert_author(&AuthorDraft::new("Naoko", "Takeuchi"))
        .unwrap();

    let listed = store.list_authors().unwrap();
    assert!(listed.iter().any(|x| x.same_as(&a)));
    assert!(store.author_exists("Naoko", "Takeuchi", None).unwrap());
}

#[test]
fn repository_update_paths() {
    let mut store = CatalogStore::in_memory().unwrap();
    let a = store.insert_author(&AuthorDraft::new("Akira", "Toriyama")).unwrap();
    let w = store
        .insert_work(&WorkDraft::new("Dragon Ball", Some(a.id)))
        .unwrap();

    let renamed = store
        .update_work(w.id, &WorkDraft::new("Dragon Ball Z", Some(a.id)))
        .unwrap();
    assert_eq!(store.get_work(w.id).unwrap(), Some(renamed));
    assert!(
        store
            .work_exists("Dragon Ball Z", a.id, Some(w.id))
            .map(|taken| !taken)
            .unwrap()
    );
    assert_eq!(store.works_by_author(a.id).unwrap().len(), 1);

    let a2 = store
        .update_author(a.id, &AuthorDraft::new("Akira", "TORIYAMA"))
        .unwrap();
    assert_eq!(store.get_author(a.id).unwrap(), Some(a2));
}

#[test]
fn store_reopens_existing_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("catalog.db");

    let mut store = CatalogStore::open(&path).unwrap();
    let a = store
        .insert_author(&AuthorDraft::new("Rumiko", "Takahashi"))
        .unwrap();
    store
        .insert_work(&WorkDraft::new("Ranma 1/2", Some(a.id)))
        .unwrap();
    store.close().unwrap();

    let store = CatalogStore::open(&path).unwrap();
    let listing = store.list_authors_with_counts().unwrap();
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0].work_count, 1);
    assert_eq!(
        store.list_works().unwrap()[0].author_name.as_deref(),
        Some("Rumiko Takahashi")
    );
}

#[test]
fn failed_operation_leaves_store_usable() {
    let mut store = CatalogStore::in_memory().unwrap();
    assert!(store.delete_author(AuthorId(1)).is_err());
    assert!(store.update_work(WorkId(1), &WorkDraft::new("x", Some(AuthorId(1)))).is_err());

    // A later unit of work still succeeds
    store.insert_author(&AuthorDraft::new("Jean", "Dupont")).unwrap();
    assert_eq!(store.list_authors().unwrap().len(), 1);
}

#[test]
fn wrapped_connection_shares_the_same_tables() {
    let conn = mangaworld_db::open_memory().unwrap();
    let mut store = CatalogStore::from_connection(conn);
    let a = store
        .insert_author(&AuthorDraft::new("Osamu", "Tezuka"))
        .unwrap();

    let count: i64 = store
        .connection()
        .query_row("SELECT COUNT(*) FROM auteur", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
    assert_eq!(store.get_author(a.id).unwrap().unwrap().last_name, "Tezuka");
}

#[test]
fn existence_checks_agree_with_inserts() {
    let mut store = CatalogStore::in_memory().unwrap();
    let jean = store
        .insert_author(&AuthorDraft::new("Jean", "Dupont"))
        .unwrap();
    store
        .insert_work(&WorkDraft::new("Manga A", Some(jean.id)))
        .unwrap();

    assert!(store.author_exists(" Jean", "dupont", None).unwrap());
    assert!(
        store
            .insert_author(&AuthorDraft::new(" Jean", "dupont"))
            .is_err()
    );
    assert!(store.work_exists("manga a ", jean.id, None).unwrap());
    assert!(
        store
            .insert_work(&WorkDraft::new("manga a ", Some(jean.id)))
            .is_err()
    );
}

use mangaworld_catalog::*;
use mangaworld_db::*;

fn seed(conn: &mut rusqlite::Connection) -> (Author, Author, Work, Work) {
    let jean = insert_author(conn, &AuthorDraft::new("Jean", "Dupont")).unwrap();
    let marie = insert_author(conn, &AuthorDraft::new("Marie", "Durand")).unwrap();
    let a = insert_work(conn, &WorkDraft::new("Manga A", Some(jean.id))).unwrap();
    let b = insert_work(conn, &WorkDraft::new("Manga B", Some(jean.id))).unwrap();
    (jean, marie, a, b)
}

#[test]
fn list_authors_in_insertion_order() {
    let mut conn = open_memory().unwrap();
    let (jean, marie, _, _) = seed(&mut conn);
    assert_eq!(list_authors(&conn).unwrap(), vec![jean, marie]);
}

#[test]
fn list_authors_on_empty_catalog() {
    let conn = open_memory().unwrap();
    assert!(list_authors(&conn).unwrap().is_empty());
    assert!(list_works(&conn).unwrap().is_empty());
}

#[test]
fn author_counts_include_authors_without_works() {
    let mut conn = open_memory().unwrap();
    let (jean, marie, _, _) = seed(&mut conn);

    let listing = list_authors_with_counts(&conn).unwrap();
    assert_eq!(listing.len(), 2);
    assert_eq!(listing[0].author, jean);
    assert_eq!(listing[0].work_count, 2);
    assert!(listing[0].is_referenced());
    assert_eq!(listing[1].author, marie);
    assert_eq!(listing[1].work_count, 0);
}

#[test]
fn list_works_joins_author_name() {
    let mut conn = open_memory().unwrap();
    let (jean, _, a, b) = seed(&mut conn);

    let works = list_works(&conn).unwrap();
    assert_eq!(works.len(), 2);
    assert_eq!(works[0].work, a);
    assert_eq!(works[0].author_name.as_deref(), Some("Jean Dupont"));
    assert_eq!(works[1].work, b);
    assert_eq!(works[1].work.author_id, jean.id);
}

#[test]
fn list_works_keeps_rows_with_unresolvable_author() {
    let mut conn = open_memory().unwrap();
    seed(&mut conn);

    // Bypass the guard to simulate a dangling reference
    conn.execute_batch(
        "PRAGMA foreign_keys=OFF;
         INSERT INTO oeuvre (nom_oeuvre, id_auteur) VALUES ('Lost', 404);",
    )
    .unwrap();

    let works = list_works(&conn).unwrap();
    let lost = works.iter().find(|w| w.work.title == "Lost").unwrap();
    assert_eq!(lost.author_name, None);
    assert_eq!(lost.author_label(), "Unknown");
}

#[test]
fn works_by_author_filters() {
    let mut conn = open_memory().unwrap();
    let (jean, marie, a, b) = seed(&mut conn);

    assert_eq!(works_by_author(&conn, jean.id).unwrap(), vec![a, b]);
    assert!(works_by_author(&conn, marie.id).unwrap().is_empty());
    assert_eq!(count_works_by_author(&conn, jean.id).unwrap(), 2);
    assert_eq!(count_works_by_author(&conn, marie.id).unwrap(), 0);
}

#[test]
fn lookup_by_id() {
    let mut conn = open_memory().unwrap();
    let (jean, _, a, _) = seed(&mut conn);

    assert_eq!(get_author(&conn, jean.id).unwrap(), Some(jean.clone()));
    assert_eq!(get_author(&conn, AuthorId(999)).unwrap(), None);
    assert_eq!(get_work(&conn, a.id).unwrap(), Some(a));
    assert_eq!(get_work(&conn, WorkId(999)).unwrap(), None);
    assert!(author_id_exists(&conn, jean.id).unwrap());
    assert!(!author_id_exists(&conn, AuthorId(999)).unwrap());
}

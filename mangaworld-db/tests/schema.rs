use mangaworld_db::open_memory;
use mangaworld_db::schema::{create_schema, open_database};
use tempfile::TempDir;

#[test]
fn schema_is_idempotent() {
    let conn = open_memory().unwrap();
    // Creating again should not error
    create_schema(&conn).unwrap();
}

#[test]
fn foreign_keys_enabled() {
    let conn = open_memory().unwrap();
    let fk: i32 = conn
        .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
        .unwrap();
    assert_eq!(fk, 1);
}

#[test]
fn all_tables_exist() {
    let conn = open_memory().unwrap();
    for table in ["auteur", "oeuvre"] {
        let exists: bool = conn
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name=?1)",
                [table],
                |row| row.get(0),
            )
            .unwrap();
        assert!(exists, "table '{}' should exist", table);
    }
}

#[test]
fn work_must_reference_existing_author() {
    let conn = open_memory().unwrap();
    let result = conn.execute(
        "INSERT INTO oeuvre (nom_oeuvre, id_auteur) VALUES ('Orphan', 42)",
        [],
    );
    assert!(result.is_err());
}

#[test]
fn open_database_creates_parent_dirs_and_persists() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("nested").join("catalog.db");

    {
        let conn = open_database(&path).unwrap();
        conn.execute(
            "INSERT INTO auteur (prenom_auteur, nom_auteur) VALUES ('Jean', 'Dupont')",
            [],
        )
        .unwrap();
    }

    assert!(path.exists());
    let conn = open_database(&path).unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM auteur", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

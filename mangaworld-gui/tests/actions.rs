use mangaworld_catalog::{AuthorDraft, AuthorId, WorkDraft};
use mangaworld_db::{AuthorRepository, CatalogStore, OperationError, WorkRepository};
use mangaworld_gui::actions::{
    AUTHOR_FIELDS_REQUIRED, SaveFailure, WORK_FIELDS_REQUIRED, remove_author, remove_work,
    save_author, save_work,
};
use mangaworld_gui::state::{AuthorForm, WorkForm};

fn author_form(first: &str, last: &str) -> AuthorForm {
    AuthorForm {
        first_name: first.to_string(),
        last_name: last.to_string(),
        ..Default::default()
    }
}

fn work_form(title: &str, author_id: Option<AuthorId>) -> WorkForm {
    WorkForm {
        title: title.to_string(),
        author_id,
        ..Default::default()
    }
}

#[test]
fn blank_author_fields_are_rejected_before_the_store() {
    let mut store = CatalogStore::in_memory().unwrap();

    let err = save_author(&mut store, &author_form("  ", "Dupont")).unwrap_err();
    assert!(matches!(err, SaveFailure::Invalid(AUTHOR_FIELDS_REQUIRED)));
    assert_eq!(err.to_string(), "First name and last name are required!");
    assert!(store.list_authors().unwrap().is_empty());
}

#[test]
fn author_add_then_update_messages() {
    let mut store = CatalogStore::in_memory().unwrap();

    assert_eq!(
        save_author(&mut store, &author_form("Jean", "Dupont")).unwrap(),
        "Author added!"
    );
    let jean = store.list_authors().unwrap().remove(0);

    let mut form = AuthorForm::edit(&jean);
    form.last_name = "Durand".to_string();
    assert_eq!(save_author(&mut store, &form).unwrap(), "Author updated!");
    assert_eq!(store.get_author(jean.id).unwrap().unwrap().last_name, "Durand");
}

#[test]
fn duplicate_author_is_a_store_failure() {
    let mut store = CatalogStore::in_memory().unwrap();
    save_author(&mut store, &author_form("Jean", "Dupont")).unwrap();

    let err = save_author(&mut store, &author_form("Jean", "Dupont")).unwrap_err();
    assert!(matches!(
        err,
        SaveFailure::Failed(OperationError::DuplicateAuthor { .. })
    ));
    assert_eq!(store.list_authors().unwrap().len(), 1);
}

#[test]
fn work_requires_title_and_author() {
    let mut store = CatalogStore::in_memory().unwrap();
    let jean = store
        .insert_author(&AuthorDraft::new("Jean", "Dupont"))
        .unwrap();

    let no_author = save_work(&mut store, &work_form("Manga A", None)).unwrap_err();
    assert!(matches!(no_author, SaveFailure::Invalid(WORK_FIELDS_REQUIRED)));

    let no_title = save_work(&mut store, &work_form("", Some(jean.id))).unwrap_err();
    assert!(matches!(no_title, SaveFailure::Invalid(WORK_FIELDS_REQUIRED)));

    assert!(store.list_works().unwrap().is_empty());
}

#[test]
fn work_add_duplicate_and_update() {
    let mut store = CatalogStore::in_memory().unwrap();
    let jean = store
        .insert_author(&AuthorDraft::new("Jean", "Dupont"))
        .unwrap();

    assert_eq!(
        save_work(&mut store, &work_form("Manga A", Some(jean.id))).unwrap(),
        "Work added!"
    );
    let dup = save_work(&mut store, &work_form("Manga A", Some(jean.id))).unwrap_err();
    assert!(matches!(
        dup,
        SaveFailure::Failed(OperationError::DuplicateWork { .. })
    ));

    let work = store.works_by_author(jean.id).unwrap().remove(0);
    let mut form = WorkForm::edit(&work);
    form.title = "Manga B".to_string();
    assert_eq!(save_work(&mut store, &form).unwrap(), "Work updated!");
    assert_eq!(store.get_work(work.id).unwrap().unwrap().title, "Manga B");
}

#[test]
fn work_for_missing_author_fails_in_store() {
    let mut store = CatalogStore::in_memory().unwrap();

    let err = save_work(&mut store, &work_form("Manga A", Some(AuthorId(99)))).unwrap_err();
    assert!(matches!(
        err,
        SaveFailure::Failed(OperationError::NotFound {
            entity_type: "author",
            id: 99
        })
    ));
}

#[test]
fn removing_an_author_with_works_is_refused() {
    let mut store = CatalogStore::in_memory().unwrap();
    let jean = store
        .insert_author(&AuthorDraft::new("Jean", "Dupont"))
        .unwrap();
    let manga = store
        .insert_work(&WorkDraft::new("Manga A", Some(jean.id)))
        .unwrap();

    let err = remove_author(&mut store, jean.id).unwrap_err();
    assert!(matches!(
        err,
        OperationError::AuthorHasWorks { works: 1, .. }
    ));
    assert!(store.get_author(jean.id).unwrap().is_some());

    assert_eq!(remove_work(&mut store, manga.id).unwrap(), "Work deleted!");
    assert_eq!(remove_author(&mut store, jean.id).unwrap(), "Author deleted!");
    assert!(store.list_authors().unwrap().is_empty());
}

//! Store behaviour through the public API: the list/get/create/delete
//! scenarios the HTTP layer relies on.

use todo_core::{NewTodo, Todo, TodoError, TodoStore};

fn title_only(title: &str) -> NewTodo {
    NewTodo::new(title, false, 1)
}

// --- list ---

#[test]
fn list_on_empty_store_is_empty() {
    let store = TodoStore::new();
    assert!(store.list_all().is_empty());
}

#[test]
fn list_after_create_has_exactly_that_entry() {
    let mut store = TodoStore::new();
    store.create(NewTodo::new("Title", false, 0)).unwrap();

    let todos = store.list_all();
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].title, "Title");
    assert!(!todos[0].completed);
}

#[test]
fn list_preserves_insertion_order_not_order_hint() {
    let mut store = TodoStore::new();
    store.create(NewTodo::new("first", false, 30)).unwrap();
    store.create(NewTodo::new("second", false, 10)).unwrap();
    store.create(NewTodo::new("third", false, 20)).unwrap();

    let titles: Vec<String> = store.list_all().into_iter().map(|t| t.title).collect();
    assert_eq!(titles, vec!["first", "second", "third"]);
}

// --- create ---

#[test]
fn ids_are_sequential_from_one() {
    let mut store = TodoStore::new();
    let first = store.create(title_only("a")).unwrap();
    let second = store.create(title_only("b")).unwrap();
    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
}

#[test]
fn create_returns_what_was_stored() {
    let mut store = TodoStore::new();
    let created = store.create(NewTodo::new("Titler", true, 5)).unwrap();
    assert_eq!(
        created,
        Todo {
            id: 1,
            title: "Titler".to_string(),
            completed: true,
            order: 5,
        }
    );
    assert_eq!(store.get_by_id(created.id).unwrap(), created);
}

// --- get ---

#[test]
fn get_existing_matches_stored_fields() {
    let seeded = Todo {
        id: 123,
        title: "Title".to_string(),
        completed: false,
        order: 1,
    };
    let store = TodoStore::with_todos(vec![seeded.clone()]).unwrap();
    assert_eq!(store.get_by_id(123).unwrap(), seeded);
}

#[test]
fn get_missing_is_not_found() {
    let store = TodoStore::new();
    assert_eq!(store.get_by_id(1).unwrap_err(), TodoError::NotFound(1));
}

// --- delete ---

#[test]
fn delete_removes_only_the_matching_record() {
    let mut store = TodoStore::new();
    let a = store.create(title_only("a")).unwrap();
    let b = store.create(title_only("b")).unwrap();
    let c = store.create(title_only("c")).unwrap();

    let removed = store.delete_by_id(b.id).unwrap();
    assert_eq!(removed, b);
    assert_eq!(store.list_all(), vec![a, c]);
}

#[test]
fn delete_missing_is_not_found_and_changes_nothing() {
    let mut store = TodoStore::new();
    store.create(title_only("keep me")).unwrap();
    let before = store.list_all();

    assert_eq!(store.delete_by_id(99).unwrap_err(), TodoError::NotFound(99));
    assert_eq!(store.list_all(), before);
}

#[test]
fn get_after_delete_is_not_found() {
    let mut store = TodoStore::new();
    let todo = store.create(title_only("gone")).unwrap();
    store.delete_by_id(todo.id).unwrap();

    assert_eq!(store.get_by_id(todo.id).unwrap_err(), TodoError::NotFound(todo.id));
    assert_eq!(store.delete_by_id(todo.id).unwrap_err(), TodoError::NotFound(todo.id));
    assert!(store.is_empty());
}

use rollcall::StudentStore;
use sqlx::sqlite::SqlitePoolOptions;

async fn fresh_store() -> StudentStore {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    let store = StudentStore::new(pool);
    store.initialize().await.unwrap();
    store
}

// ── Schema ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn initialize_twice_is_harmless() {
    let store = fresh_store().await;
    store
        .create("Alice", "a@x.com", "123", 90)
        .await
        .unwrap();

    store.initialize().await.unwrap();

    let students = store.list_all().await.unwrap();
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].name, "Alice");
}

// ── Create / read ───────────────────────────────────────────────────────

#[tokio::test]
async fn create_then_get_returns_exact_fields() {
    let store = fresh_store().await;
    let id = store
        .create("Alice", "a@x.com", "123", 90)
        .await
        .unwrap();

    let student = store.get_by_id(id).await.unwrap().unwrap();
    assert_eq!(student.id, id);
    assert_eq!(student.name, "Alice");
    assert_eq!(student.email, "a@x.com");
    assert_eq!(student.phone, "123");
    assert_eq!(student.mark, 90);
}

#[tokio::test]
async fn get_by_missing_id_is_absent_not_an_error() {
    let store = fresh_store().await;
    assert!(store.get_by_id(99).await.unwrap().is_none());
}

#[tokio::test]
async fn list_all_orders_by_ascending_id() {
    let store = fresh_store().await;
    store.create("Alice", "a@x.com", "1", 90).await.unwrap();
    store.create("Bob", "b@x.com", "2", 70).await.unwrap();
    store.create("Carol", "c@x.com", "3", 80).await.unwrap();

    let ids: Vec<i64> = store
        .list_all()
        .await
        .unwrap()
        .iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

// ── Update ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn update_overwrites_fields_and_preserves_id() {
    let store = fresh_store().await;
    let id = store.create("Alice", "a@x.com", "123", 90).await.unwrap();

    let found = store
        .update(id, "Alicia", "alicia@x.com", "456", 95)
        .await
        .unwrap();
    assert!(found);

    let student = store.get_by_id(id).await.unwrap().unwrap();
    assert_eq!(student.id, id);
    assert_eq!(student.name, "Alicia");
    assert_eq!(student.email, "alicia@x.com");
    assert_eq!(student.phone, "456");
    assert_eq!(student.mark, 95);
}

#[tokio::test]
async fn update_of_missing_id_is_a_silent_noop() {
    let store = fresh_store().await;
    store.create("Alice", "a@x.com", "123", 90).await.unwrap();
    let before = store.list_all().await.unwrap();

    let found = store
        .update(99, "Ghost", "g@x.com", "000", 0)
        .await
        .unwrap();
    assert!(!found);

    let after = store.list_all().await.unwrap();
    assert_eq!(before, after);
}

// ── Delete ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_removes_exactly_one_record() {
    let store = fresh_store().await;
    let alice = store.create("Alice", "a@x.com", "1", 90).await.unwrap();
    let bob = store.create("Bob", "b@x.com", "2", 70).await.unwrap();

    assert!(store.delete(alice).await.unwrap());

    let students = store.list_all().await.unwrap();
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].id, bob);
    assert!(store.get_by_id(alice).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_of_missing_id_is_a_silent_noop() {
    let store = fresh_store().await;
    store.create("Alice", "a@x.com", "1", 90).await.unwrap();
    let before = store.list_all().await.unwrap();

    assert!(!store.delete(99).await.unwrap());

    assert_eq!(before, store.list_all().await.unwrap());
}

// ── Identity ────────────────────────────────────────────────────────────

#[tokio::test]
async fn ids_are_never_reused_after_deletion() {
    let store = fresh_store().await;
    store.create("Alice", "a@x.com", "1", 90).await.unwrap();
    let bob = store.create("Bob", "b@x.com", "2", 70).await.unwrap();
    assert_eq!(bob, 2);

    store.delete(bob).await.unwrap();

    let carol = store.create("Carol", "c@x.com", "3", 80).await.unwrap();
    assert_eq!(carol, 3);
}

// ── End-to-end scenario ─────────────────────────────────────────────────

#[tokio::test]
async fn full_lifecycle_scenario() {
    let store = fresh_store().await;
    assert!(store.list_all().await.unwrap().is_empty());

    store.create("Alice", "a@x.com", "123", 90).await.unwrap();
    let students = store.list_all().await.unwrap();
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].id, 1);
    assert_eq!(students[0].name, "Alice");
    assert_eq!(students[0].mark, 90);

    store.create("Bob", "b@x.com", "456", 70).await.unwrap();
    let ids: Vec<i64> = store
        .list_all()
        .await
        .unwrap()
        .iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(ids, vec![1, 2]);

    store.delete(1).await.unwrap();
    let students = store.list_all().await.unwrap();
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].name, "Bob");

    store
        .update(2, "Bob2", "b2@x.com", "789", 80)
        .await
        .unwrap();
    let bob = store.get_by_id(2).await.unwrap().unwrap();
    assert_eq!(
        (bob.name.as_str(), bob.email.as_str(), bob.phone.as_str(), bob.mark),
        ("Bob2", "b2@x.com", "789", 80)
    );

    assert!(!store.delete(99).await.unwrap());
    let students = store.list_all().await.unwrap();
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].name, "Bob2");
}

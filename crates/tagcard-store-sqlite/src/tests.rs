//! Integration tests for `SqliteStore` against an in-memory database.

use std::time::Duration;

use tagcard_core::{contact::ContactFields, store::ContactStore};
use uuid::Uuid;

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn fields(phone: &str, text: &str, name: &str) -> ContactFields {
  ContactFields::new(phone, text, name)
}

// ─── Insert / get ────────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_and_get() {
  let s = store().await;

  let contact = s
    .insert(fields("+49 123 456789", "Test Beschreibung für NFC Tag", "Test Kontakt"))
    .await
    .unwrap();
  assert_eq!(contact.created_at, contact.updated_at);

  let fetched = s.get(contact.id).await.unwrap();
  assert_eq!(fetched, Some(contact));
}

#[tokio::test]
async fn get_missing_returns_none() {
  let s = store().await;
  assert!(s.get(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn absent_name_is_stored_as_empty() {
  let s = store().await;
  let contact = s.insert(fields("+49 987 654321", "Kontakt ohne Namen", "")).await.unwrap();

  let fetched = s.get(contact.id).await.unwrap().unwrap();
  assert_eq!(fetched.name, "");
  assert_eq!(fetched.display_name(), "+49 987 654321");
}

#[tokio::test]
async fn multibyte_text_round_trips() {
  let s = store().await;
  let contact = s.insert(fields("1", "Größe ✓ 😀", "Müller")).await.unwrap();

  let fetched = s.get(contact.id).await.unwrap().unwrap();
  assert_eq!(fetched.text, "Größe ✓ 😀");
  assert_eq!(fetched.name, "Müller");
}

// ─── List ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_is_newest_first() {
  let s = store().await;
  let a = s.insert(fields("1", "a", "")).await.unwrap();
  tokio::time::sleep(Duration::from_millis(2)).await;
  let b = s.insert(fields("2", "b", "")).await.unwrap();
  tokio::time::sleep(Duration::from_millis(2)).await;
  let c = s.insert(fields("3", "c", "")).await.unwrap();

  let ids: Vec<Uuid> = s.list().await.unwrap().into_iter().map(|c| c.id).collect();
  assert_eq!(ids, vec![c.id, b.id, a.id]);
}

#[tokio::test]
async fn list_empty() {
  let s = store().await;
  assert!(s.list().await.unwrap().is_empty());
}

// ─── Update ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn update_replaces_all_fields() {
  let s = store().await;
  let contact = s.insert(fields("1", "old", "Old Name")).await.unwrap();
  tokio::time::sleep(Duration::from_millis(2)).await;

  let updated = s
    .update(contact.id, fields("2", "new", ""))
    .await
    .unwrap()
    .expect("contact exists");

  assert_eq!(updated.id, contact.id);
  assert_eq!(updated.created_at, contact.created_at);
  assert!(updated.updated_at > contact.updated_at);
  assert_eq!(updated.fields(), fields("2", "new", ""));
  assert_eq!(s.get(contact.id).await.unwrap(), Some(updated));
}

#[tokio::test]
async fn update_missing_returns_none_and_writes_nothing() {
  let s = store().await;
  let existing = s.insert(fields("1", "a", "")).await.unwrap();

  let res = s.update(Uuid::new_v4(), fields("2", "b", "")).await.unwrap();
  assert!(res.is_none());

  let all = s.list().await.unwrap();
  assert_eq!(all, vec![existing]);
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_then_delete_again() {
  let s = store().await;
  let contact = s.insert(fields("1", "a", "")).await.unwrap();

  assert!(s.delete(contact.id).await.unwrap());
  assert!(!s.delete(contact.id).await.unwrap());
  assert!(s.get(contact.id).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_only_touches_one_row() {
  let s = store().await;
  let keep = s.insert(fields("1", "keep", "")).await.unwrap();
  let gone = s.insert(fields("2", "gone", "")).await.unwrap();

  assert!(s.delete(gone.id).await.unwrap());
  assert_eq!(s.list().await.unwrap(), vec![keep]);
}

// ─── Persistence ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn reopening_a_file_keeps_contacts() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("contacts.db");

  let id = {
    let s = SqliteStore::open(&path).await.unwrap();
    s.insert(fields("1", "persisted", "")).await.unwrap().id
  };

  let s = SqliteStore::open(&path).await.unwrap();
  let fetched = s.get(id).await.unwrap().unwrap();
  assert_eq!(fetched.text, "persisted");
}

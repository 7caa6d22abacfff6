//! The `ContactStore` trait.
//!
//! Implemented by storage backends (the in-memory [`MemoryStore`] here,
//! `tagcard-store-sqlite` for persistence). The JSON API depends on this
//! abstraction and receives the store as injected state, never a global.
//!
//! [`MemoryStore`]: crate::memory::MemoryStore

use std::future::Future;

use uuid::Uuid;

use crate::contact::{Contact, ContactFields};

/// Abstraction over a contact store backend.
///
/// Every operation touches a single record; backends rely on their native
/// per-record atomicity and do not reconcile concurrent updates to the same
/// id (last write wins).
///
/// Callers validate [`ContactFields`] before writing; stores persist what
/// they are given.
pub trait ContactStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a new contact. The store assigns the id and sets `created_at`
  /// and `updated_at` to the same instant.
  fn insert(
    &self,
    fields: ContactFields,
  ) -> impl Future<Output = Result<Contact, Self::Error>> + Send + '_;

  /// Retrieve a contact by id. Returns `None` if not found.
  fn get(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + '_;

  /// All contacts, most recently created first.
  fn list(
    &self,
  ) -> impl Future<Output = Result<Vec<Contact>, Self::Error>> + Send + '_;

  /// Replace the editable fields of an existing contact and bump its
  /// `updated_at`. Returns `None`, writing nothing, if the id is unknown.
  fn update(
    &self,
    id: Uuid,
    fields: ContactFields,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + '_;

  /// Hard-delete a contact. Returns `false` if the id is unknown.
  fn delete(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;
}

//! [`MemoryStore`] — a process-local [`ContactStore`], used by tests and by
//! the server's `--in-memory` mode.

use std::{
  collections::HashMap,
  convert::Infallible,
  sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use chrono::Utc;
use uuid::Uuid;

use crate::{
  contact::{Contact, ContactFields},
  store::ContactStore,
};

/// A contact store held in a shared `HashMap`.
///
/// Cloning is cheap; clones share the same records.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
  inner: Arc<RwLock<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
  /// Insertion counter; breaks ties between equal creation times.
  next_seq: u64,
  contacts: HashMap<Uuid, Slot>,
}

#[derive(Debug)]
struct Slot {
  seq:     u64,
  contact: Contact,
}

impl MemoryStore {
  pub fn new() -> Self { Self::default() }

  pub fn len(&self) -> usize { self.read().contacts.len() }

  pub fn is_empty(&self) -> bool { self.read().contacts.is_empty() }

  // A panic while holding the lock cannot leave a half-written record, so a
  // poisoned lock is still safe to use.
  fn read(&self) -> RwLockReadGuard<'_, Inner> {
    self.inner.read().unwrap_or_else(|e| e.into_inner())
  }

  fn write(&self) -> RwLockWriteGuard<'_, Inner> {
    self.inner.write().unwrap_or_else(|e| e.into_inner())
  }
}

impl ContactStore for MemoryStore {
  type Error = Infallible;

  async fn insert(&self, fields: ContactFields) -> Result<Contact, Infallible> {
    let contact = Contact::create(fields, Utc::now());
    let mut inner = self.write();
    let seq = inner.next_seq;
    inner.next_seq += 1;
    inner.contacts.insert(contact.id, Slot {
      seq,
      contact: contact.clone(),
    });
    Ok(contact)
  }

  async fn get(&self, id: Uuid) -> Result<Option<Contact>, Infallible> {
    Ok(self.read().contacts.get(&id).map(|slot| slot.contact.clone()))
  }

  async fn list(&self) -> Result<Vec<Contact>, Infallible> {
    let inner = self.read();
    let mut slots: Vec<&Slot> = inner.contacts.values().collect();
    slots.sort_by(|a, b| {
      b.contact
        .created_at
        .cmp(&a.contact.created_at)
        .then_with(|| b.seq.cmp(&a.seq))
    });
    Ok(slots.into_iter().map(|slot| slot.contact.clone()).collect())
  }

  async fn update(
    &self,
    id: Uuid,
    fields: ContactFields,
  ) -> Result<Option<Contact>, Infallible> {
    let mut inner = self.write();
    Ok(inner.contacts.get_mut(&id).map(|slot| {
      slot.contact.apply(fields, Utc::now());
      slot.contact.clone()
    }))
  }

  async fn delete(&self, id: Uuid) -> Result<bool, Infallible> {
    Ok(self.write().contacts.remove(&id).is_some())
  }
}

//! MemoryStore: the local, ephemeral collection the store falls back to.
//!
//! Records keep insertion order: the ordering functions in daybook-core use
//! it to break ties.

use std::sync::{Mutex, MutexGuard};

use crate::record::Record;

#[derive(Debug)]
pub struct MemoryStore<R> {
    records: Mutex<Vec<R>>,
}

impl<R: Record> Default for MemoryStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> MemoryStore<R> {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    pub fn with_records(records: Vec<R>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<R>> {
        // recover from poisoning
        self.records.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Snapshot copy of every record.
    pub fn all(&self) -> Vec<R> {
        self.lock().clone()
    }

    pub fn get(&self, id: &str) -> Option<R> {
        self.lock().iter().find(|r| r.id() == id).cloned()
    }

    pub fn insert(&self, record: R) -> R {
        self.lock().push(record.clone());
        record
    }

    /// Full replace by id. The id on `record` is overwritten with `id`.
    /// Unknown ids leave the collection unchanged.
    pub fn replace(&self, id: &str, mut record: R) -> R {
        record.set_id(id.to_string());
        let mut records = self.lock();
        if let Some(slot) = records.iter_mut().find(|r| r.id() == id) {
            *slot = record.clone();
        }
        record
    }

    /// Apply `f` to the record in place and return the updated copy.
    pub fn modify<F: FnOnce(&mut R)>(&self, id: &str, f: F) -> Option<R> {
        let mut records = self.lock();
        let slot = records.iter_mut().find(|r| r.id() == id)?;
        f(slot);
        Some(slot.clone())
    }

    pub fn remove(&self, id: &str) -> Option<R> {
        let mut records = self.lock();
        let idx = records.iter().position(|r| r.id() == id)?;
        Some(records.remove(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use daybook_core::Contact;

    #[test]
    fn replace_keeps_id_and_position() {
        let s = MemoryStore::with_records(vec![
            Contact::new("c_1", "John", "1"),
            Contact::new("c_2", "Jane", "2"),
        ]);
        let out = s.replace("c_1", Contact::new("ignored", "Johnny", "9"));
        assert_eq!(out.id, "c_1");

        let all = s.all();
        assert_eq!(all[0].name, "Johnny");
        assert_eq!(all[0].id, "c_1");
        assert_eq!(all[1].name, "Jane");
    }

    #[test]
    fn replace_unknown_id_does_not_insert() {
        let s: MemoryStore<Contact> = MemoryStore::new();
        let out = s.replace("c_x", Contact::new("", "Ghost", "0"));
        assert_eq!(out.id, "c_x");
        assert!(s.is_empty());
    }

    #[test]
    fn remove_and_modify() {
        let s = MemoryStore::with_records(vec![Contact::new("c_1", "John", "1")]);
        let m = s.modify("c_1", |c| c.phone = "42".to_string()).unwrap();
        assert_eq!(m.phone, "42");
        assert!(s.modify("nope", |_| {}).is_none());

        assert_eq!(s.remove("c_1").unwrap().name, "John");
        assert!(s.remove("c_1").is_none());
        assert_eq!(s.len(), 0);
    }
}

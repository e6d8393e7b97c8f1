//! FallbackStore: CRUD by id against the backend, served from a local
//! collection whenever the backend cannot be reached.
//!
//! Callers only ever see a resolved value: backend failures are logged and
//! absorbed here.

use anyhow::Result;
use chrono::{NaiveDateTime, Timelike, Utc};
use daybook_core::{Appointment, Task};
use std::future::Future;
use tracing::{info, warn};

use crate::memory::MemoryStore;
use crate::record::{new_id, Record};
use crate::rest::{ApiSettings, RestClient};

pub struct FallbackStore<R: Record> {
    remote: Option<RestClient>,
    local: MemoryStore<R>,
}

impl<R: Record> FallbackStore<R> {
    /// Backend-backed store with an empty local collection.
    pub fn new(settings: &ApiSettings) -> Result<Self> {
        Self::with_local(settings, Vec::new())
    }

    /// Backend-backed store whose local collection starts with `seed`.
    pub fn with_local(settings: &ApiSettings, seed: Vec<R>) -> Result<Self> {
        let remote = if settings.offline {
            None
        } else {
            Some(RestClient::new(settings)?)
        };
        Ok(Self {
            remote,
            local: MemoryStore::with_records(seed),
        })
    }

    /// Local-only store; the backend is never contacted.
    pub fn offline(seed: Vec<R>) -> Self {
        Self {
            remote: None,
            local: MemoryStore::with_records(seed),
        }
    }

    pub fn local(&self) -> &MemoryStore<R> {
        &self.local
    }

    /// Run `op` against the backend. `None` means the caller should fall back.
    async fn try_remote<'a, T, F, Fut>(&'a self, action: &str, op: F) -> Option<T>
    where
        F: FnOnce(&'a RestClient) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let client = self.remote.as_ref()?;
        match op(client).await {
            Ok(v) => Some(v),
            Err(e) => {
                warn!(resource = R::RESOURCE, action, error = %e, "backend unavailable, using local collection");
                None
            }
        }
    }

    pub async fn get_all(&self) -> Vec<R> {
        match self.try_remote("list", |c| c.list::<R>()).await {
            Some(all) => all,
            None => self.local.all(),
        }
    }

    /// `None` when no record has this id.
    pub async fn get_by_id(&self, id: &str) -> Option<R> {
        match self.try_remote("get", |c| c.get::<R>(id)).await {
            Some(r) => Some(r),
            None => self.local.get(id),
        }
    }

    /// The store assigns the id and creation stamp.
    pub async fn create(&self, data: R) -> R {
        if let Some(created) = self.try_remote("create", |c| c.create(&data)).await {
            return created;
        }
        let mut record = data;
        record.set_id(new_id::<R>());
        record.init_new(now_stamp());
        info!(resource = R::RESOURCE, id = record.id(), "created locally");
        self.local.insert(record)
    }

    /// Full replace; the id is preserved.
    pub async fn update(&self, id: &str, data: R) -> R {
        if let Some(updated) = self.try_remote("update", |c| c.update(id, &data)).await {
            return updated;
        }
        info!(resource = R::RESOURCE, id, "updated locally");
        self.local.replace(id, data)
    }

    pub async fn delete(&self, id: &str) {
        if self.try_remote("delete", |c| c.delete::<R>(id)).await.is_some() {
            return;
        }
        if self.local.remove(id).is_some() {
            info!(resource = R::RESOURCE, id, "deleted locally");
        }
    }

    /// Read-modify-write of a single record.
    async fn modify<F>(&self, id: &str, f: F) -> Option<R>
    where
        F: Fn(&mut R),
    {
        if let Some(mut record) = self.try_remote("get", |c| c.get::<R>(id)).await {
            f(&mut record);
            if let Some(updated) = self.try_remote("update", |c| c.update(id, &record)).await {
                return Some(updated);
            }
        }
        self.local.modify(id, f)
    }
}

impl FallbackStore<Appointment> {
    /// Set `reminderSent`. The flag never returns to false.
    pub async fn mark_reminder_sent(&self, id: &str) -> Option<Appointment> {
        self.modify(id, |a| {
            a.mark_reminder_sent();
        })
        .await
    }
}

impl FallbackStore<Task> {
    pub async fn toggle_complete(&self, id: &str) -> Option<Task> {
        self.modify(id, |t| {
            t.toggle_complete();
        })
        .await
    }
}

fn now_stamp() -> NaiveDateTime {
    // store stamps are whole seconds
    let now = Utc::now().naive_utc();
    now.with_nanosecond(0).unwrap_or(now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::example_contacts;
    use daybook_core::{search, Contact};

    #[tokio::test]
    async fn offline_store_serves_seed() {
        let store = FallbackStore::offline(example_contacts());
        let all = store.get_all().await;
        assert_eq!(all.len(), 2);
        assert_eq!(search(&all, "JANE")[0].name, "Jane Doe");
    }

    #[tokio::test]
    async fn create_assigns_id_and_stamp() {
        let store: FallbackStore<Task> = FallbackStore::offline(vec![]);
        let mut draft = Task::new("", "Pay rent");
        draft.completed = true;
        let t = store.create(draft).await;
        assert!(t.id.starts_with("t_"));
        assert!(t.created_at.is_some());
        assert!(!t.completed);
        let id = t.id.clone();
        assert_eq!(store.get_by_id(&id).await, Some(t));
    }

    #[tokio::test]
    async fn get_by_id_miss_is_none() {
        let store: FallbackStore<Contact> = FallbackStore::offline(example_contacts());
        assert!(store.get_by_id("c_missing").await.is_none());
    }

    #[tokio::test]
    async fn update_and_delete() {
        let store = FallbackStore::offline(example_contacts());
        let id = "c_69962c79ba3031.74750554";
        let updated = store
            .update(id, Contact::new("whatever", "John Q. Smith", "+1 555"))
            .await;
        assert_eq!(updated.id, id);
        assert_eq!(store.get_by_id(id).await.unwrap().name, "John Q. Smith");

        store.delete(id).await;
        assert!(store.get_by_id(id).await.is_none());
        assert_eq!(store.get_all().await.len(), 1);
    }

    #[tokio::test]
    async fn toggles() {
        let tasks = FallbackStore::offline(vec![Task::new("t_1", "x")]);
        assert!(tasks.toggle_complete("t_1").await.unwrap().completed);
        assert!(!tasks.toggle_complete("t_1").await.unwrap().completed);
        assert!(tasks.toggle_complete("t_nope").await.is_none());

        let appts =
            FallbackStore::offline(vec![Appointment::new("a_1", "x", "2026-02-20", "09:00")]);
        assert!(appts.mark_reminder_sent("a_1").await.unwrap().reminder_sent);
        assert!(appts.mark_reminder_sent("a_1").await.unwrap().reminder_sent);
    }

    #[tokio::test]
    async fn unreachable_backend_falls_back() {
        // port 9 (discard) on localhost refuses connections
        let settings = ApiSettings {
            base_url: "http://127.0.0.1:9/api".to_string(),
            timeout_secs: 2,
            ..ApiSettings::default()
        };
        let store = FallbackStore::with_local(&settings, example_contacts()).unwrap();
        assert_eq!(store.get_all().await.len(), 2);

        let created = store.create(Contact::new("", "New Person", "123")).await;
        assert!(created.id.starts_with("c_"));
        assert_eq!(store.local().len(), 3);
    }
}

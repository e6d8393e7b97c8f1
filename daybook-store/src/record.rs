//! How each record kind is addressed and initialised by the store.

use chrono::NaiveDateTime;
use daybook_core::{Appointment, Contact, Stock, Task, Website};
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// REST collection path segment (`/api/{RESOURCE}`).
    const RESOURCE: &'static str;
    /// Prefix for locally generated ids (`c_`, `a_`, ...).
    const ID_PREFIX: &'static str;

    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);

    /// Store-assigned fields for a freshly created record.
    fn init_new(&mut self, _created_at: NaiveDateTime) {}
}

pub fn new_id<R: Record>() -> String {
    format!("{}{}", R::ID_PREFIX, Uuid::new_v4())
}

impl Record for Contact {
    const RESOURCE: &'static str = "contacts";
    const ID_PREFIX: &'static str = "c_";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

impl Record for Appointment {
    const RESOURCE: &'static str = "appointments";
    const ID_PREFIX: &'static str = "a_";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn init_new(&mut self, created_at: NaiveDateTime) {
        self.created_at = Some(created_at);
        self.reminder_sent = false;
    }
}

impl Record for Task {
    const RESOURCE: &'static str = "tasks";
    const ID_PREFIX: &'static str = "t_";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn init_new(&mut self, created_at: NaiveDateTime) {
        self.created_at = Some(created_at);
        self.completed = false;
    }
}

impl Record for Stock {
    const RESOURCE: &'static str = "stocks";
    const ID_PREFIX: &'static str = "s_";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn init_new(&mut self, created_at: NaiveDateTime) {
        self.created_at = Some(created_at);
    }
}

impl Record for Website {
    const RESOURCE: &'static str = "websites";
    const ID_PREFIX: &'static str = "w_";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn init_new(&mut self, created_at: NaiveDateTime) {
        self.created_at = Some(created_at);
    }
}

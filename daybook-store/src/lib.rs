//! daybook-store: the record-store collaborator. CRUD by id against a REST
//! backend, with a local in-memory collection when the backend is down.

pub mod memory;
pub mod record;
pub mod rest;
pub mod seed;
pub mod store;

pub use memory::MemoryStore;
pub use record::{new_id, Record};
pub use rest::{ApiSettings, RestClient};
pub use seed::example_contacts;
pub use store::FallbackStore;

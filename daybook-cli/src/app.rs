//! Per-process wiring: one store per record kind, built once from config
//! and handed to each command.

use anyhow::Result;
use chrono::Utc;
use chrono_tz::Tz;
use daybook_core::{Appointment, Contact, Stock, Task, TimeContext, Website};
use daybook_store::{example_contacts, ApiSettings, FallbackStore};

use crate::config::Config;

pub struct App {
    pub contacts: FallbackStore<Contact>,
    pub appointments: FallbackStore<Appointment>,
    pub tasks: FallbackStore<Task>,
    pub stocks: FallbackStore<Stock>,
    pub websites: FallbackStore<Website>,
    pub tz: Tz,
}

impl App {
    pub fn new(cfg: &Config, force_offline: bool) -> Result<Self> {
        let api = ApiSettings {
            offline: cfg.api.offline || force_offline,
            ..cfg.api.clone()
        };
        Ok(Self {
            contacts: FallbackStore::with_local(&api, example_contacts())?,
            appointments: FallbackStore::new(&api)?,
            tasks: FallbackStore::new(&api)?,
            stocks: FallbackStore::new(&api)?,
            websites: FallbackStore::new(&api)?,
            tz: cfg.timezone()?,
        })
    }

    pub fn time_context(&self) -> TimeContext {
        TimeContext::new(Utc::now(), self.tz)
    }
}

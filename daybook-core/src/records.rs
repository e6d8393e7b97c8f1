//! Contacts, appointments and bookmarked websites.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Phonebook groups
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ContactCategory {
    #[default]
    General,
    Family,
    Friends,
    Work,
    Business,
    Emergency,
}

impl ContactCategory {
    pub const ALL: [ContactCategory; 6] = [
        ContactCategory::General,
        ContactCategory::Family,
        ContactCategory::Friends,
        ContactCategory::Work,
        ContactCategory::Business,
        ContactCategory::Emergency,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactCategory::General => "General",
            ContactCategory::Family => "Family",
            ContactCategory::Friends => "Friends",
            ContactCategory::Work => "Work",
            ContactCategory::Business => "Business",
            ContactCategory::Emergency => "Emergency",
        }
    }
}

impl fmt::Display for ContactCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContactCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown contact category: {s}"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub category: ContactCategory,
}

impl Contact {
    pub fn new(id: impl Into<String>, name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            phone: phone.into(),
            email: None,
            category: ContactCategory::General,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_category(mut self, category: ContactCategory) -> Self {
        self.category = category;
        self
    }
}

/// A scheduled appointment.
///
/// `date` and `time` hold exactly what the store returned; they are parsed
/// by [`crate::time`] when an instant is needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub time: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub reminder_sent: bool,
    #[serde(default, with = "crate::timestamp::created_at")]
    pub created_at: Option<NaiveDateTime>,
}

impl Appointment {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            date: date.into(),
            time: time.into(),
            location: String::new(),
            category: String::new(),
            reminder_sent: false,
            created_at: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the reminder flag. It never goes back to false.
    ///
    /// Returns true if the flag changed.
    pub fn mark_reminder_sent(&mut self) -> bool {
        let changed = !self.reminder_sent;
        self.reminder_sent = true;
        changed
    }
}

/// Bookmarked website
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Website {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default, with = "crate::timestamp::created_at")]
    pub created_at: Option<NaiveDateTime>,
}

impl Website {
    pub fn new(id: impl Into<String>, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            url: url.into(),
            description: None,
            category: String::new(),
            created_at: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }
}

use anyhow::{bail, Result};
use clap::Subcommand;
use daybook_core::{categories, search, Contact, ContactCategory};

use crate::app::App;
use crate::display::contact_line;
use crate::input::{optional, required};

#[derive(Subcommand, Debug)]
pub enum ContactsCommand {
    /// List contacts, optionally filtered by a search query
    List {
        #[arg(long)]
        search: Option<String>,
    },

    /// Add a contact
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        phone: String,

        #[arg(long)]
        email: Option<String>,

        /// General, Family, Friends, Work, Business or Emergency
        #[arg(long, default_value_t = ContactCategory::General)]
        category: ContactCategory,
    },

    /// Change fields of an existing contact
    Update {
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        category: Option<ContactCategory>,
    },

    /// Delete a contact by id
    Delete { id: String },

    /// Distinct categories in use
    Categories,
}

pub async fn run(app: &App, cmd: ContactsCommand) -> Result<()> {
    match cmd {
        ContactsCommand::List { search: query } => {
            let all = app.contacts.get_all().await;
            let shown = search(&all, query.as_deref().unwrap_or(""));
            for c in &shown {
                println!("{}", contact_line(c));
            }
            println!("\n{} of {} contacts", shown.len(), all.len());
        }

        ContactsCommand::Add {
            name,
            phone,
            email,
            category,
        } => {
            let contact = new_contact(&name, &phone, email, category)?;
            let created = app.contacts.create(contact).await;
            println!("Added {}", contact_line(&created));
        }

        ContactsCommand::Update {
            id,
            name,
            phone,
            email,
            category,
        } => {
            let Some(mut contact) = app.contacts.get_by_id(&id).await else {
                bail!("no contact with id {id}");
            };
            apply_changes(&mut contact, name, phone, email, category)?;
            let updated = app.contacts.update(&id, contact).await;
            println!("Updated {}", contact_line(&updated));
        }

        ContactsCommand::Delete { id } => {
            app.contacts.delete(&id).await;
            println!("Deleted {id}");
        }

        ContactsCommand::Categories => {
            for c in categories(&app.contacts.get_all().await) {
                println!("{c}");
            }
        }
    }

    Ok(())
}

fn new_contact(
    name: &str,
    phone: &str,
    email: Option<String>,
    category: ContactCategory,
) -> Result<Contact> {
    let mut contact =
        Contact::new("", required("name", name)?, required("phone", phone)?).with_category(category);
    if let Some(email) = optional(email) {
        contact = contact.with_email(email);
    }
    Ok(contact)
}

/// Only the given fields change. An empty `--email` clears the address.
fn apply_changes(
    contact: &mut Contact,
    name: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    category: Option<ContactCategory>,
) -> Result<()> {
    if let Some(name) = name {
        contact.name = required("name", &name)?;
    }
    if let Some(phone) = phone {
        contact.phone = required("phone", &phone)?;
    }
    if email.is_some() {
        contact.email = optional(email);
    }
    if let Some(category) = category {
        contact.category = category;
    }
    Ok(())
}

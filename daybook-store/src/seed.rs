//! Example data the local collections start with.

use daybook_core::{Contact, ContactCategory};

pub fn example_contacts() -> Vec<Contact> {
    vec![
        Contact::new("c_69962c79ba3031.74750554", "John Smith", "+1 (555) 123-4567")
            .with_email("john@example.com")
            .with_category(ContactCategory::General),
        Contact::new("c_69962c8d974971.10518044", "Jane Doe", "+1 (555) 987-6543")
            .with_email("jane@example.com")
            .with_category(ContactCategory::Friends),
    ]
}

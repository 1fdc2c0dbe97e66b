use crate::ObjectId;
use super::contact::{Contact, NewContact};

/// In-memory contact collection backing the `/api/persons` service.
/// Keeps insertion order; names are not required to be unique.
#[derive(Debug, Default)]
pub struct ContactStore {
    contacts: Vec<Contact>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn contact(&self, id: &ObjectId) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id() == id)
    }

    pub fn put(&mut self, contact: NewContact) -> Contact {
        let contact = contact.into_contact(ObjectId::new());
        self.contacts.push(contact.clone());
        contact
    }

    pub fn update(&mut self, id: &ObjectId, contact: NewContact) -> Option<Contact> {
        let slot = self.contacts.iter_mut().find(|c| c.id() == id)?;
        *slot = contact.into_contact(*id);
        Some(slot.clone())
    }

    pub fn remove(&mut self, id: &ObjectId) -> Option<Contact> {
        let pos = self.contacts.iter().position(|c| c.id() == id)?;
        Some(self.contacts.remove(pos))
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

const SAMPLE_CONTACTS: [(&str, &str); 4] = [
    ("Arto Hellas", "040-123456"),
    ("Ada Lovelace", "39-44-5323523"),
    ("Dan Abramov", "12-43-234345"),
    ("Mary Poppendieck", "39-23-6423122"),
];

pub fn sample_contacts() -> Vec<NewContact> {
    SAMPLE_CONTACTS.iter()
        .map(|(name, number)| NewContact::new(name, number))
        .collect()
}

//! Client-side phonebook state and its reconciliation with the contact
//! service.
//!
//! The contact list is only ever mutated after the service acknowledged a
//! request, and always from the contact the service returned. A submission
//! whose name collides with a known contact becomes an update of that
//! contact (after confirmation), never an additional create.
use std::time::{Duration, Instant};
use log::{info, warn};

use crate::{
    ObjectId,
    Error,
    core::Result,
    core::default_configuration::DEFAULT_NOTIFICATION_TIMEOUT,
};

use super::{
    confirm::Confirm,
    contact::{Contact, NewContact},
    contact_service::ContactService,
    notification::Notification,
};

/// Outcome of a submission that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Created(Contact),
    Updated(Contact),
    /// The name was taken and the user declined the overwrite.
    Declined,
}

/// Outcome of a deletion that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deletion {
    Deleted(Contact),
    Declined,
}

pub struct Phonebook<S, C> {
    service     : S,
    confirm     : C,

    contacts    : Vec<Contact>,
    filter      : String,
    new_name    : String,
    new_number  : String,

    notification: Option<Notification>,
    timeout     : Duration,
}

impl<S, C> Phonebook<S, C>
where
    S: ContactService,
    C: Confirm,
{
    pub fn new(service: S, confirm: C) -> Self {
        Self {
            service,
            confirm,
            contacts    : Vec::new(),
            filter      : String::new(),
            new_name    : String::new(),
            new_number  : String::new(),
            notification: None,
            timeout     : Duration::from_secs(DEFAULT_NOTIFICATION_TIMEOUT),
        }
    }

    pub fn with_notification_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn contact(&self, id: &ObjectId) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id() == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.name() == name)
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: &str) {
        self.filter = filter.to_string();
    }

    pub fn new_name(&self) -> &str {
        &self.new_name
    }

    pub fn set_name(&mut self, name: &str) {
        self.new_name = name.to_string();
    }

    pub fn new_number(&self) -> &str {
        &self.new_number
    }

    pub fn set_number(&mut self, number: &str) {
        self.new_number = number.to_string();
    }

    /// Contacts whose name contains the filter, case-insensitively.
    pub fn visible(&self) -> Vec<&Contact> {
        let needle = self.filter.trim().to_lowercase();
        self.contacts.iter()
            .filter(|c| needle.is_empty() || c.name().to_lowercase().contains(&needle))
            .collect()
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// Drops the notification once it outlived the timeout.
    pub fn clear_expired(&mut self, now: Instant) {
        if self.notification.as_ref().is_some_and(|n| n.is_expired(now, self.timeout)) {
            self.notification = None;
        }
    }

    fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification);
    }

    fn fail(&mut self, context: &str, err: Error) -> Error {
        warn!("{context}: {err}");
        self.notify(Notification::error(format!("{context}: {err}")));
        err
    }

    fn clear_inputs(&mut self) {
        self.new_name.clear();
        self.new_number.clear();
    }

    /// Replaces the local list with the service's.
    pub async fn load(&mut self) -> Result<usize> {
        match self.service.get_all().await {
            Ok(contacts) => {
                self.contacts = contacts;
                info!("Loaded {} contacts", self.contacts.len());
                Ok(self.contacts.len())
            },
            Err(e) => Err(self.fail("Loading contacts failed", e)),
        }
    }

    /// Submits the bound name and number fields.
    pub async fn submit(&mut self) -> Result<Submission> {
        let candidate = NewContact::new(&self.new_name, &self.new_number);
        candidate.validate()?;

        let existing = self.find_by_name(&candidate.name).map(|c| *c.id());
        match existing {
            None => self.create(candidate).await,
            Some(id) => {
                let message = format!(
                    "{} is already added to phonebook, replace the old number with a new one?",
                    candidate.name
                );
                if !self.confirm.confirm(&message) {
                    return Ok(Submission::Declined);
                }
                self.update(&id, candidate).await
            }
        }
    }

    async fn create(&mut self, candidate: NewContact) -> Result<Submission> {
        let created = match self.service.create(&candidate).await {
            Ok(v) => v,
            Err(e) => return Err(self.fail(&format!("Adding {} failed", candidate.name), e)),
        };

        self.contacts.push(created.clone());
        self.clear_inputs();
        self.notify(Notification::success(format!("Added {}", created.name())));

        info!("Contact created: {}", created);
        Ok(Submission::Created(created))
    }

    async fn update(&mut self, id: &ObjectId, candidate: NewContact) -> Result<Submission> {
        let updated = match self.service.update(id, &candidate).await {
            Ok(v) => v,
            Err(e) => return Err(self.fail(&format!("Updating {} failed", candidate.name), e)),
        };

        match self.contacts.iter_mut().find(|c| c.id() == id) {
            Some(slot) => *slot = updated.clone(),
            None => self.contacts.push(updated.clone()),
        }
        self.clear_inputs();
        self.notify(Notification::success(format!("Updated {}", updated.name())));

        info!("Contact updated: {}", updated);
        Ok(Submission::Updated(updated))
    }

    /// Deletes the contact with `id` after confirmation. On failure the list
    /// is re-fetched from the service instead of guessing what happened.
    pub async fn delete(&mut self, id: &ObjectId) -> Result<Deletion> {
        let Some(target) = self.contact(id).cloned() else {
            return Err(Error::Argument(format!("No contact with id {}", id)));
        };

        if !self.confirm.confirm(&format!("Delete {}?", target.name())) {
            return Ok(Deletion::Declined);
        }

        if let Err(e) = self.service.delete_contact(id).await {
            let err = self.fail(&format!("Deleting {} failed", target.name()), e);
            match self.service.get_all().await {
                Ok(contacts) => self.contacts = contacts,
                Err(e) => warn!("Re-fetching contacts after failed delete error: {e}"),
            }
            return Err(err);
        }

        self.contacts.retain(|c| c.id() != id);
        self.notify(Notification::success(format!("Deleted {}", target.name())));

        info!("Contact deleted: {}", target);
        Ok(Deletion::Deleted(target))
    }
}

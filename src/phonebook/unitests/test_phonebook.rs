use std::cell::{Cell, RefCell};
use std::time::{Duration, Instant};

use crate::{
    Error,
    ObjectId,
    core::Result,
    phonebook::{
        Contact,
        ContactService,
        NewContact,
        Phonebook,
        Submission,
        Deletion,
    },
};

// In-process stand-in for the remote contact collection. Records every call
// and can be told to fail the next mutating request.
#[derive(Default)]
struct MockService {
    contacts    : RefCell<Vec<Contact>>,
    calls       : RefCell<Vec<&'static str>>,
    fail_writes : Cell<bool>,
}

impl MockService {
    fn with(names: &[(&str, &str)]) -> Self {
        let service = Self::default();
        for (name, number) in names {
            service.contacts.borrow_mut().push(
                NewContact::new(name, number).into_contact(ObjectId::new())
            );
        }
        service
    }

    fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    fn failure(&self) -> Result<()> {
        match self.fail_writes.get() {
            true => Err(Error::Network("connection refused".into())),
            false => Ok(()),
        }
    }
}

impl ContactService for MockService {
    async fn get_all(&self) -> Result<Vec<Contact>> {
        self.calls.borrow_mut().push("get_all");
        Ok(self.contacts.borrow().clone())
    }

    async fn create(&self, contact: &NewContact) -> Result<Contact> {
        self.calls.borrow_mut().push("create");
        self.failure()?;
        let created = contact.clone().into_contact(ObjectId::new());
        self.contacts.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: &ObjectId, contact: &NewContact) -> Result<Contact> {
        self.calls.borrow_mut().push("update");
        self.failure()?;
        let mut contacts = self.contacts.borrow_mut();
        let slot = contacts.iter_mut().find(|c| c.id() == id).ok_or_else(|| {
            Error::NotFound(format!("contact {} not found", id))
        })?;
        *slot = contact.clone().into_contact(*id);
        Ok(slot.clone())
    }

    async fn delete_contact(&self, id: &ObjectId) -> Result<()> {
        self.calls.borrow_mut().push("delete");
        self.failure()?;
        self.contacts.borrow_mut().retain(|c| c.id() != id);
        Ok(())
    }
}

fn accept(_: &str) -> bool { true }
fn decline(_: &str) -> bool { false }

async fn loaded<C>(service: MockService, confirm: C) -> Phonebook<MockService, C>
where
    C: Fn(&str) -> bool,
{
    let mut book = Phonebook::new(service, confirm);
    book.load().await.unwrap();
    book
}

#[tokio::test]
async fn test_load() {
    let service = MockService::with(&[("Arto Hellas", "040-123456"), ("Ada Lovelace", "39-44-5323523")]);
    let book = loaded(service, accept).await;
    assert_eq!(book.contacts().len(), 2);
    assert_eq!(book.contacts()[0].name(), "Arto Hellas");
    assert_eq!(book.service().calls(), vec!["get_all"]);
}

#[tokio::test]
async fn test_submit_new_name_creates() {
    let mut book = loaded(MockService::with(&[("Arto Hellas", "040-123456")]), decline).await;
    book.set_name("Dan Abramov");
    book.set_number("12-43-234345");

    let result = book.submit().await.unwrap();
    let Submission::Created(created) = result else {
        panic!("expected a created contact");
    };
    assert_eq!(created.name(), "Dan Abramov");
    assert_eq!(book.contacts().len(), 2);
    assert_eq!(book.contacts()[1], created);
    assert_eq!(book.new_name(), "");
    assert_eq!(book.new_number(), "");
    assert_eq!(book.notification().map(|n| n.message()), Some("Added Dan Abramov"));
    assert_eq!(book.service().calls(), vec!["get_all", "create"]);
}

#[tokio::test]
async fn test_submit_existing_name_updates_after_confirm() {
    let prompts = RefCell::new(Vec::new());
    let confirm = |msg: &str| {
        prompts.borrow_mut().push(msg.to_string());
        true
    };

    let mut book = loaded(MockService::with(&[("Arto Hellas", "040-123456")]), confirm).await;
    let id = *book.contacts()[0].id();
    book.set_name("Arto Hellas");
    book.set_number("040-654321");

    let result = book.submit().await.unwrap();
    let Submission::Updated(updated) = result else {
        panic!("expected an updated contact");
    };
    assert_eq!(updated.id(), &id);
    assert_eq!(updated.number(), "040-654321");
    assert_eq!(book.contacts().len(), 1);
    assert_eq!(book.contact(&id).map(|c| c.number()), Some("040-654321"));
    assert_eq!(book.service().calls(), vec!["get_all", "update"]);
    assert_eq!(book.notification().map(|n| n.message()), Some("Updated Arto Hellas"));

    assert_eq!(prompts.borrow().len(), 1);
    assert!(prompts.borrow()[0].starts_with("Arto Hellas is already added to phonebook"));
}

#[tokio::test]
async fn test_submit_existing_name_declined() {
    let mut book = loaded(MockService::with(&[("Arto Hellas", "040-123456")]), decline).await;
    let before = book.contacts().to_vec();
    book.set_name("Arto Hellas");
    book.set_number("040-654321");

    assert_eq!(book.submit().await.unwrap(), Submission::Declined);
    assert_eq!(book.contacts(), before.as_slice());
    assert_eq!(book.new_name(), "Arto Hellas");
    assert_eq!(book.new_number(), "040-654321");
    assert_eq!(book.service().calls(), vec!["get_all"]);
}

#[tokio::test]
async fn test_submit_empty_fields_rejected() {
    let mut book = loaded(MockService::default(), accept).await;
    book.set_name("  ");
    book.set_number("12");
    assert!(matches!(book.submit().await, Err(Error::Argument(_))));

    book.set_name("Mary Poppendieck");
    book.set_number("");
    assert!(matches!(book.submit().await, Err(Error::Argument(_))));

    assert_eq!(book.contacts().is_empty(), true);
    assert_eq!(book.service().calls(), vec!["get_all"]);
}

#[tokio::test]
async fn test_failed_create_keeps_state() {
    let mut book = loaded(MockService::with(&[("Arto Hellas", "040-123456")]), accept).await;
    book.service().fail_writes.set(true);
    book.set_name("Dan Abramov");
    book.set_number("12-43-234345");

    assert!(matches!(book.submit().await, Err(Error::Network(_))));
    assert_eq!(book.contacts().len(), 1);
    assert_eq!(book.new_name(), "Dan Abramov");
    assert_eq!(book.notification().map(|n| n.is_error()), Some(true));
}

#[tokio::test]
async fn test_failed_update_keeps_state() {
    let mut book = loaded(MockService::with(&[("Arto Hellas", "040-123456")]), accept).await;
    book.service().fail_writes.set(true);
    book.set_name("Arto Hellas");
    book.set_number("1");

    assert!(book.submit().await.is_err());
    assert_eq!(book.contacts()[0].number(), "040-123456");
    assert_eq!(book.new_number(), "1");
}

#[tokio::test]
async fn test_delete() {
    let mut book = loaded(MockService::with(&[("Arto Hellas", "1"), ("Ada Lovelace", "2")]), accept).await;
    let id = *book.contacts()[0].id();

    let Deletion::Deleted(removed) = book.delete(&id).await.unwrap() else {
        panic!("expected a deleted contact");
    };
    assert_eq!(removed.name(), "Arto Hellas");
    assert_eq!(book.contacts().len(), 1);
    assert_eq!(book.contact(&id), None);
    assert_eq!(book.notification().map(|n| n.message()), Some("Deleted Arto Hellas"));
    assert_eq!(book.service().calls(), vec!["get_all", "delete"]);
}

#[tokio::test]
async fn test_delete_declined() {
    let mut book = loaded(MockService::with(&[("Arto Hellas", "1")]), decline).await;
    let id = *book.contacts()[0].id();

    assert_eq!(book.delete(&id).await.unwrap(), Deletion::Declined);
    assert_eq!(book.contacts().len(), 1);
    assert_eq!(book.service().calls(), vec!["get_all"]);
}

#[tokio::test]
async fn test_delete_unknown_id() {
    let mut book = loaded(MockService::default(), accept).await;
    assert!(matches!(book.delete(&ObjectId::new()).await, Err(Error::Argument(_))));
}

#[tokio::test]
async fn test_failed_delete_refetches() {
    let mut book = loaded(MockService::with(&[("Arto Hellas", "1"), ("Ada Lovelace", "2")]), accept).await;
    let id = *book.contacts()[0].id();

    // The contact vanished on the server behind our back.
    book.service().contacts.borrow_mut().retain(|c| c.id() != &id);
    book.service().fail_writes.set(true);

    assert!(book.delete(&id).await.is_err());
    assert_eq!(book.service().calls(), vec!["get_all", "delete", "get_all"]);
    assert_eq!(book.contacts().len(), 1);
    assert_eq!(book.contacts()[0].name(), "Ada Lovelace");
    assert_eq!(book.notification().map(|n| n.is_error()), Some(true));
}

#[tokio::test]
async fn test_visible_filter() {
    let service = MockService::with(&[
        ("Arto Hellas", "1"),
        ("Ada Lovelace", "2"),
        ("Dan Abramov", "3"),
    ]);
    let mut book = loaded(service, accept).await;
    assert_eq!(book.visible().len(), 3);

    book.set_filter("AR");
    let names: Vec<_> = book.visible().iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["Arto Hellas"]);

    book.set_filter("a");
    assert_eq!(book.visible().len(), 3);

    book.set_filter("zzz");
    assert_eq!(book.visible().is_empty(), true);
    assert_eq!(book.contacts().len(), 3);
}

#[tokio::test]
async fn test_notification_expiry() {
    let mut book = loaded(MockService::default(), accept).await
        .with_notification_timeout(Duration::from_secs(5));
    book.set_name("Arto Hellas");
    book.set_number("1");
    book.submit().await.unwrap();

    book.clear_expired(Instant::now());
    assert_eq!(book.notification().is_some(), true);

    book.clear_expired(Instant::now() + Duration::from_secs(6));
    assert_eq!(book.notification().is_none(), true);
}

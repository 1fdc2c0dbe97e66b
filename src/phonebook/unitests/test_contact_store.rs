use crate::{
    ObjectId,
    phonebook::{ContactStore, NewContact},
    phonebook::contact_store::sample_contacts,
};

#[test]
fn test_store() {
    let mut store = ContactStore::new();
    assert_eq!(store.is_empty(), true);

    let arto = store.put(NewContact::new("Arto Hellas", "040-123456"));
    let ada = store.put(NewContact::new("Ada Lovelace", "39-44-5323523"));
    assert_eq!(store.len(), 2);
    assert_ne!(arto.id(), ada.id());
    assert_eq!(store.contact(arto.id()), Some(&arto));

    let updated = store.update(arto.id(), NewContact::new("Arto Hellas", "040-654321")).unwrap();
    assert_eq!(updated.id(), arto.id());
    assert_eq!(updated.number(), "040-654321");
    assert_eq!(store.contacts()[0], updated);

    assert_eq!(store.update(&ObjectId::new(), NewContact::new("x", "1")), None);

    assert_eq!(store.remove(ada.id()), Some(ada.clone()));
    assert_eq!(store.remove(ada.id()), None);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_duplicate_names_allowed() {
    let mut store = ContactStore::new();
    store.put(NewContact::new("Arto Hellas", "1"));
    store.put(NewContact::new("Arto Hellas", "2"));
    assert_eq!(store.len(), 2);
}

#[test]
fn test_sample_contacts() {
    let samples = sample_contacts();
    assert_eq!(samples.len(), 4);
    assert_eq!(samples[0].name, "Arto Hellas");
}

#[cfg(test)] mod test_contact_store;
#[cfg(test)] mod test_notification;
#[cfg(test)] mod test_phonebook;

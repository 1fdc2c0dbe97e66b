pub mod contact;
pub mod contact_service;
pub mod contact_store;
pub mod api_client;
pub mod confirm;
pub mod notification;
pub mod phonebook;
pub mod server;

pub use contact::{Contact, NewContact};
pub use contact_service::ContactService;
pub use contact_store::ContactStore;
pub use api_client::APIClient;
pub use confirm::Confirm;
pub use notification::{Notification, NotificationKind};
pub use phonebook::{Phonebook, Submission, Deletion};

#[cfg(test)]
mod unitests;

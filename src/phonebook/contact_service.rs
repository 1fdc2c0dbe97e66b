use crate::{
    ObjectId,
    core::Result,
};

use super::contact::{Contact, NewContact};

/// Remote contact collection. Each operation is exactly one REST call.
#[allow(async_fn_in_trait)]
pub trait ContactService {
    async fn get_all(&self) -> Result<Vec<Contact>>;
    async fn create(&self, contact: &NewContact) -> Result<Contact>;
    async fn update(&self, id: &ObjectId, contact: &NewContact) -> Result<Contact>;
    async fn delete_contact(&self, id: &ObjectId) -> Result<()>;
}

use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use url::Url;
use log::debug;

use crate::{
    ObjectId,
    Error,
    error::Result,
};

use super::{
    contact::{Contact, NewContact},
    contact_service::ContactService,
};

pub const PERSONS_PATH: &str = "/api/persons";

/// HTTP client for a `/api/persons` service. Contact ids must be 24-hex
/// object ids as issued by this crate's contact service.
pub struct APIClient {
    base_url    : Url,
    client      : Client,
}

impl APIClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        let client = Client::builder().build().map_err(|e| {
            Error::State(format!("Http error: building http client error {e}"))
        })?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn collection_url(&self) -> Result<Url> {
        Ok(self.base_url.join(PERSONS_PATH)?)
    }

    fn item_url(&self, id: &ObjectId) -> Result<Url> {
        Ok(self.base_url.join(&format!("{}/{}", PERSONS_PATH, id))?)
    }
}

// Maps the service status codes back onto the crate errors so callers can
// tell a validation failure from a missing contact.
async fn check_status(rsp: Response) -> Result<Response> {
    #[derive(Deserialize)]
    struct ErrorData {
        error: Option<String>,
    }

    let status = rsp.status();
    if status.is_success() {
        return Ok(rsp);
    }

    let reason = rsp.json::<ErrorData>().await.ok()
        .and_then(|v| v.error)
        .unwrap_or_else(|| status.to_string());

    Err(match status {
        StatusCode::BAD_REQUEST => Error::Argument(reason),
        StatusCode::NOT_FOUND   => Error::NotFound(reason),
        _ => Error::Network(format!("Http error: invalid http response {status}: {reason}")),
    })
}

impl ContactService for APIClient {
    async fn get_all(&self) -> Result<Vec<Contact>> {
        let url = self.collection_url()?;
        let rsp = self.client.get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
            Error::Network(format!("Http error: sending http request error {e}"))
        })?;

        let rsp = check_status(rsp).await?;
        let data = rsp.json::<Vec<Contact>>().await.map_err(|e| {
            Error::Protocol(format!("Http error: deserialize json error {e}"))
        })?;

        debug!("Fetched {} contacts", data.len());
        Ok(data)
    }

    async fn create(&self, contact: &NewContact) -> Result<Contact> {
        let url = self.collection_url()?;
        let rsp = self.client.post(url)
            .json(contact)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
            Error::Network(format!("Http error: sending http request error {e}"))
        })?;

        let rsp = check_status(rsp).await?;
        rsp.json::<Contact>().await.map_err(|e| {
            Error::Protocol(format!("Http error: deserialize json error {e}"))
        })
    }

    async fn update(&self, id: &ObjectId, contact: &NewContact) -> Result<Contact> {
        let url = self.item_url(id)?;
        let rsp = self.client.put(url)
            .json(contact)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
            Error::Network(format!("Http error: sending http request error {e}"))
        })?;

        let rsp = check_status(rsp).await?;
        rsp.json::<Contact>().await.map_err(|e| {
            Error::Protocol(format!("Http error: deserialize json error {e}"))
        })
    }

    async fn delete_contact(&self, id: &ObjectId) -> Result<()> {
        let url = self.item_url(id)?;
        let rsp = self.client.delete(url)
            .send()
            .await
            .map_err(|e| {
            Error::Network(format!("Http error: sending http request error {e}"))
        })?;

        check_status(rsp).await?;
        Ok(())
    }
}

//! `/api/persons` REST endpoints over an in-memory [`ContactStore`].
use std::sync::{Arc, Mutex};

use axum::{
    Json,
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use log::{debug, info};
use tokio::net::TcpListener;

use crate::{
    ObjectId,
    Error,
    core::Result,
    core::server::{self, JsonBody},
};

use super::{
    contact::{Contact, ContactRequest, NewContact},
    contact_store::ContactStore,
};

pub type SharedStore = Arc<Mutex<ContactStore>>;

pub fn shared(store: ContactStore) -> SharedStore {
    Arc::new(Mutex::new(store))
}

pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route("/api/persons", get(list_contacts).post(create_contact))
        .route("/api/persons/{id}", get(get_contact).put(update_contact).delete(delete_contact))
        .fallback(server::unknown_endpoint)
        .layer(server::cors())
        .with_state(store)
}

pub async fn serve<F>(listener: TcpListener, store: SharedStore, shutdown: F) -> Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!("Contact service running on {addr}");

    axum::serve(listener, router(store))
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Contact service on {addr} stopped");
    Ok(())
}

fn with_store<T>(store: &SharedStore, f: impl FnOnce(&mut ContactStore) -> Result<T>) -> Result<T> {
    let mut guard = store.lock().map_err(|_| {
        Error::State("Contact store lock poisoned".into())
    })?;
    f(&mut guard)
}

async fn list_contacts(State(store): State<SharedStore>) -> Result<Json<Vec<Contact>>> {
    let contacts = with_store(&store, |s| Ok(s.contacts().to_vec()))?;
    Ok(Json(contacts))
}

async fn get_contact(
    State(store): State<SharedStore>,
    Path(id): Path<String>
) -> Result<Json<Contact>> {
    let id = ObjectId::try_from(id.as_str())?;
    with_store(&store, |s| {
        s.contact(&id).cloned().ok_or_else(|| {
            Error::NotFound(format!("contact {} not found", id))
        })
    }).map(Json)
}

async fn create_contact(
    State(store): State<SharedStore>,
    JsonBody(request): JsonBody<ContactRequest>
) -> Result<impl IntoResponse> {
    let candidate = NewContact::try_from(request)?;
    let contact = with_store(&store, |s| Ok(s.put(candidate)))?;

    debug!("Contact created: {}", contact);
    Ok((StatusCode::CREATED, Json(contact)))
}

async fn update_contact(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
    JsonBody(request): JsonBody<ContactRequest>
) -> Result<Json<Contact>> {
    let id = ObjectId::try_from(id.as_str())?;
    let candidate = NewContact::try_from(request)?;
    let contact = with_store(&store, |s| {
        s.update(&id, candidate).ok_or_else(|| {
            Error::NotFound(format!("contact {} not found", id))
        })
    })?;

    debug!("Contact updated: {}", contact);
    Ok(Json(contact))
}

async fn delete_contact(
    State(store): State<SharedStore>,
    Path(id): Path<String>
) -> Result<StatusCode> {
    let id = ObjectId::try_from(id.as_str())?;
    let removed = with_store(&store, |s| Ok(s.remove(&id)))?;

    debug!("Contact {} delete requested, removed: {}", id, removed.is_some());
    Ok(StatusCode::NO_CONTENT)
}

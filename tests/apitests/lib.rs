#[cfg(test)]
mod blogs {
    mod api;
}

#[cfg(test)]
mod phonebook {
    mod persons;
    mod client;
}

use std::net::SocketAddr;
use tokio::net::TcpListener;

use directory::{
    BlogStorage,
    SqliteStorage,
    blogs::fixtures,
    blogs::server as blog_server,
    phonebook::{ContactStore, contact_store::sample_contacts},
    phonebook::server as contact_server,
};

// helper functions
async fn bind_local() -> (TcpListener, SocketAddr) {
    let listener = match TcpListener::bind("127.0.0.1:0").await {
        Ok(v) => v,
        Err(e) => panic!("Failed to bind listener: {}", e),
    };
    let addr = listener.local_addr().unwrap();
    (listener, addr)
}

/// Starts a blog service over a fresh in-memory database seeded with the
/// fixture blogs and returns its base url.
async fn spawn_blogs() -> String {
    let mut storage = SqliteStorage::new();
    storage.open(":memory:").unwrap();
    fixtures::seed(&mut storage).unwrap();

    let (listener, addr) = bind_local().await;
    let shared = blog_server::shared(Box::new(storage));
    tokio::spawn(blog_server::serve(listener, shared, std::future::pending()));
    format!("http://{}", addr)
}

/// Starts a contact service seeded with the sample contacts.
async fn spawn_persons() -> (String, contact_server::SharedStore) {
    let mut store = ContactStore::new();
    for contact in sample_contacts() {
        store.put(contact);
    }

    let (listener, addr) = bind_local().await;
    let shared = contact_server::shared(store);
    tokio::spawn(contact_server::serve(listener, shared.clone(), std::future::pending()));
    (format!("http://{}", addr), shared)
}

fn main() {}

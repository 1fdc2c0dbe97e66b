//! `/api/blogs` REST endpoints.
//!
//! | method | path              | success | failure           |
//! |--------|-------------------|---------|-------------------|
//! | GET    | /api/blogs        | 200     |                   |
//! | GET    | /api/blogs/{id}   | 200     | 400 bad id, 404   |
//! | POST   | /api/blogs        | 201     | 400 missing field |
//! | PUT    | /api/blogs/{id}   | 200     | 400, 404          |
//! | DELETE | /api/blogs/{id}   | 204     | 400 bad id        |
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
    blog::{Blog, BlogRequest},
    blog_storage::BlogStorage,
};

pub type SharedStorage = Arc<Mutex<Box<dyn BlogStorage>>>;

pub fn shared(storage: Box<dyn BlogStorage>) -> SharedStorage {
    Arc::new(Mutex::new(storage))
}

pub fn router(storage: SharedStorage) -> Router {
    Router::new()
        .route("/api/blogs", get(list_blogs).post(create_blog))
        .route("/api/blogs/{id}", get(get_blog).put(update_blog).delete(delete_blog))
        .fallback(server::unknown_endpoint)
        .layer(server::cors())
        .with_state(storage)
}

/// Serves the blog API on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, storage: SharedStorage, shutdown: F) -> Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!("Blog service running on {addr}");

    axum::serve(listener, router(storage))
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Blog service on {addr} stopped");
    Ok(())
}

fn with_storage<T>(storage: &SharedStorage, f: impl FnOnce(&mut dyn BlogStorage) -> Result<T>) -> Result<T> {
    let mut guard = storage.lock().map_err(|_| {
        Error::State("Blog storage lock poisoned".into())
    })?;
    f(&mut **guard)
}

async fn list_blogs(State(storage): State<SharedStorage>) -> Result<Json<Vec<Blog>>> {
    let blogs = with_storage(&storage, |s| s.blogs())?;
    Ok(Json(blogs))
}

async fn get_blog(
    State(storage): State<SharedStorage>,
    Path(id): Path<String>
) -> Result<Json<Blog>> {
    let id = ObjectId::try_from(id.as_str())?;
    match with_storage(&storage, |s| s.blog(&id))? {
        Some(blog) => Ok(Json(blog)),
        None => Err(Error::NotFound(format!("blog {} not found", id))),
    }
}

async fn create_blog(
    State(storage): State<SharedStorage>,
    JsonBody(request): JsonBody<BlogRequest>
) -> Result<impl IntoResponse> {
    let blog = request.into_blog()?;
    with_storage(&storage, |s| s.put_blog(&blog))?;

    debug!("Blog created: {}", blog);
    Ok((StatusCode::CREATED, Json(blog)))
}

async fn update_blog(
    State(storage): State<SharedStorage>,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<BlogRequest>
) -> Result<Json<Blog>> {
    let id = ObjectId::try_from(id.as_str())?;
    let blog = with_storage(&storage, |s| {
        let Some(mut blog) = s.blog(&id)? else {
            return Err(Error::NotFound(format!("blog {} not found", id)));
        };
        blog.apply(patch)?;
        s.update_blog(&blog)?;
        Ok(blog)
    })?;

    debug!("Blog updated: {}", blog);
    Ok(Json(blog))
}

async fn delete_blog(
    State(storage): State<SharedStorage>,
    Path(id): Path<String>
) -> Result<StatusCode> {
    let id = ObjectId::try_from(id.as_str())?;
    let removed = with_storage(&storage, |s| s.remove_blog(&id))?;

    debug!("Blog {} delete requested, removed: {}", id, removed);
    Ok(StatusCode::NO_CONTENT)
}

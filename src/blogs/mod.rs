pub(crate) mod sqlite3;

pub mod blog;
pub mod blog_storage;
pub mod sqlite_storage;
pub mod fixtures;
pub mod server;

pub use blog::{Blog, BlogBuilder, BlogRequest};
pub use blog_storage::BlogStorage;
pub use sqlite_storage::SqliteStorage;

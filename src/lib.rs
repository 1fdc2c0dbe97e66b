pub mod core;
pub mod blogs;
pub mod phonebook;

pub use crate::core::{
    error::{self, Error},
    object_id::{self, ObjectId},
    config::{self, Config, PhonebookConfig},
    logger,
    default_configuration as configuration,
};

pub use crate::blogs::{
    Blog,
    BlogBuilder,
    BlogStorage,
    SqliteStorage,
};

pub use crate::phonebook::{
    APIClient,
    Contact,
    ContactService,
    Phonebook,
};

/// Creates the parent directory of a file path if it is missing.
pub fn create_parent_dirs(input: &str) -> crate::core::Result<()> {
    let Some(parent) = std::path::Path::new(input).parent() else {
        return Ok(())
    };
    if parent.as_os_str().is_empty() || parent.exists() {
        return Ok(())
    }

    std::fs::create_dir_all(parent).map_err(|e|
         Error::Io(format!("Creating directory path {} error: {e}", parent.display()))
    )
}

pub(crate) fn is_none_or_empty<T: IsEmpty>(v: &Option<T>) -> bool {
    v.as_ref().map(|s| s.is_empty()).unwrap_or(true)
}

trait IsEmpty {
    fn is_empty(&self) -> bool;
}

impl IsEmpty for String {
    fn is_empty(&self) -> bool {
        self.trim().is_empty()
    }
}

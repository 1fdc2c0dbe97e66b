use std::time::SystemTime;
use diesel::prelude::*;
use log::debug;

use crate::{
    ObjectId,
    core::error::{Error, Result},
};

use crate::blogs::{
    blog::{Blog, BlogBuilder},
    blog_storage::BlogStorage,
};

use crate::blogs::sqlite3::{
    models::BlogRow,
    models::NewBlogRow,
    models::BlogChangeset,
    USER_VERSION,
    user_version,
    drop_tbs,
    create_tbs,
    get_blogs,
    get_blog,
    put_blog,
    update_blog,
    remove_blog,
    remove_blogs,
    count_blogs,
};

pub struct SqliteStorage {
    connection: Option<SqliteConnection>,
}

impl SqliteStorage {
    pub fn new() -> Self {
       Self { connection: None }
    }

    fn conn(&mut self) -> Result<&mut SqliteConnection> {
        self.connection.as_mut().ok_or_else(|| {
            Error::State("Blog storage is not opened".into())
        })
    }
}

impl Default for SqliteStorage {
    fn default() -> Self {
        Self::new()
    }
}

fn into_blog(row: BlogRow) -> Result<Blog> {
    let id = ObjectId::try_from(row.id.as_str()).map_err(|_| {
        Error::Db(format!("Corrupted blog id {} in storage", row.id))
    })?;

    let mut b = BlogBuilder::new(&row.title, &row.url);
    b.with_id(id).with_likes(row.likes);
    if let Some(author) = row.author.as_deref() {
        b.with_author(author);
    }
    b.build()
}

impl BlogStorage for SqliteStorage {
    fn open(&mut self, path: &str) -> Result<()> {
        let mut connection = SqliteConnection::establish(path)?;

        // if we change the schema,
        // we should check the user version, do the schema update,
        // then increase the user_version;
        let ver = user_version(&mut connection);
        if ver < USER_VERSION && !drop_tbs(&mut connection) {
            return Err(Error::State("Failed to update db tables".into()));
        }
        if !create_tbs(&mut connection) {
            return Err(Error::State("Failed to create db tables".into()));
        }

        debug!("Blog storage opened at {}", path);
        self.connection = Some(connection);
        Ok(())
    }

    fn close(&mut self) {
        self.connection = None;
    }

    fn blogs(&mut self) -> Result<Vec<Blog>> {
        let rows = get_blogs(self.conn()?)?;
        rows.into_iter().map(into_blog).collect()
    }

    fn blog(&mut self, id: &ObjectId) -> Result<Option<Blog>> {
        match get_blog(self.conn()?, &id.to_hex())? {
            Some(row) => into_blog(row).map(Some),
            None => Ok(None),
        }
    }

    fn put_blog(&mut self, blog: &Blog) -> Result<()> {
        let id = blog.id().to_hex();
        let row = NewBlogRow {
            id      : &id,
            title   : blog.title(),
            author  : blog.author(),
            url     : blog.url(),
            likes   : blog.likes(),
            created : millis_since_epoch(),
        };

        put_blog(self.conn()?, row)?;
        Ok(())
    }

    fn update_blog(&mut self, blog: &Blog) -> Result<bool> {
        let changes = BlogChangeset {
            title   : blog.title(),
            author  : blog.author(),
            url     : blog.url(),
            likes   : blog.likes(),
        };

        Ok(update_blog(self.conn()?, &blog.id().to_hex(), changes)?)
    }

    fn remove_blog(&mut self, id: &ObjectId) -> Result<bool> {
        Ok(remove_blog(self.conn()?, &id.to_hex())?)
    }

    fn remove_blogs(&mut self) -> Result<usize> {
        Ok(remove_blogs(self.conn()?)?)
    }

    fn count(&mut self) -> Result<usize> {
        Ok(count_blogs(self.conn()?)? as usize)
    }
}

fn millis_since_epoch() -> i64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

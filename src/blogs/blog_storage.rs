use crate::{
    ObjectId,
    core::Result,
};

use super::blog::Blog;

pub trait BlogStorage: Send {
    fn open(&mut self,
        path: &str
    ) -> Result<()>;

    fn close(&mut self);

    /// Fails with `Error::Db` if any stored row cannot be decoded.
    fn blogs(&mut self
    ) -> Result<Vec<Blog>>;

    fn blog(&mut self,
        id: &ObjectId
    ) -> Result<Option<Blog>>;

    fn put_blog(&mut self,
        blog: &Blog
    ) -> Result<()>;

    fn put_blogs(&mut self,
        blogs: &[Blog]
    ) -> Result<()> {
        for blog in blogs {
            self.put_blog(blog)?;
        }
        Ok(())
    }

    /// Returns false when no blog with the same id is stored.
    fn update_blog(&mut self,
        blog: &Blog
    ) -> Result<bool>;

    /// Returns false when nothing was removed.
    fn remove_blog(&mut self,
        id: &ObjectId
    ) -> Result<bool>;

    fn remove_blogs(&mut self
    ) -> Result<usize>;

    fn count(&mut self
    ) -> Result<usize>;
}

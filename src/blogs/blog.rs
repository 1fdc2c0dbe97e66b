use std::fmt;
use serde::{Serialize, Deserialize};

use crate::{
    is_none_or_empty,
    ObjectId,
    Error,
    error::Result,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blog {
    id      : ObjectId,
    title   : String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    author  : Option<String>,
    url     : String,
    #[serde(default)]
    likes   : i64,
}

impl Blog {
    pub fn id(&self) -> &ObjectId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn likes(&self) -> i64 {
        self.likes
    }

    /// Applies the fields present in `patch`, keeping the rest.
    pub(crate) fn apply(&mut self, patch: BlogRequest) -> Result<()> {
        patch.validate_present()?;

        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(author) = patch.author {
            self.author = Some(author);
        }
        if let Some(url) = patch.url {
            self.url = url;
        }
        if let Some(likes) = patch.likes {
            self.likes = likes;
        }
        Ok(())
    }
}

impl fmt::Display for Blog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} \"{}\"", self.id, self.title)?;
        if let Some(author) = self.author.as_ref() {
            write!(f, " by {}", author)?;
        }
        write!(f, " <{}> likes:{}", self.url, self.likes)
    }
}

pub struct BlogBuilder<'a> {
    id      : Option<ObjectId>,
    title   : &'a str,
    author  : Option<&'a str>,
    url     : &'a str,
    likes   : i64,
}

impl<'a> BlogBuilder<'a> {
    pub fn new(title: &'a str, url: &'a str) -> Self {
        Self {
            id      : None,
            title,
            author  : None,
            url,
            likes   : 0,
        }
    }

    pub fn with_id(&mut self, id: ObjectId) -> &mut Self {
        self.id = Some(id);
        self
    }

    pub fn with_author(&mut self, author: &'a str) -> &mut Self {
        self.author = Some(author);
        self
    }

    pub fn with_likes(&mut self, likes: i64) -> &mut Self {
        self.likes = likes;
        self
    }

    pub fn build(&self) -> Result<Blog> {
        if self.title.trim().is_empty() {
            return Err(Error::Argument("title is required".into()));
        }
        if self.url.trim().is_empty() {
            return Err(Error::Argument("url is required".into()));
        }

        Ok(Blog {
            id      : self.id.unwrap_or_default(),
            title   : self.title.to_string(),
            author  : self.author.map(|v| v.to_string()),
            url     : self.url.to_string(),
            likes   : self.likes,
        })
    }
}

/// Body of POST and PUT requests. Every field is optional on the wire;
/// creation requires `title` and `url`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlogRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title   : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author  : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url     : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likes   : Option<i64>,
}

impl BlogRequest {
    pub fn validate(&self) -> Result<()> {
        if is_none_or_empty(&self.title) {
            return Err(Error::Argument("title is required".into()));
        }
        if is_none_or_empty(&self.url) {
            return Err(Error::Argument("url is required".into()));
        }
        Ok(())
    }

    fn validate_present(&self) -> Result<()> {
        if self.title.as_ref().is_some_and(|v| v.trim().is_empty()) {
            return Err(Error::Argument("title cannot be empty".into()));
        }
        if self.url.as_ref().is_some_and(|v| v.trim().is_empty()) {
            return Err(Error::Argument("url cannot be empty".into()));
        }
        Ok(())
    }

    pub fn into_blog(self) -> Result<Blog> {
        self.validate()?;

        let title = self.title.unwrap_or_default();
        let url = self.url.unwrap_or_default();
        let mut b = BlogBuilder::new(&title, &url);
        if let Some(author) = self.author.as_deref() {
            b.with_author(author);
        }
        if let Some(likes) = self.likes {
            b.with_likes(likes);
        }
        b.build()
    }
}

impl From<&Blog> for BlogRequest {
    fn from(blog: &Blog) -> Self {
        Self {
            title   : Some(blog.title.clone()),
            author  : blog.author.clone(),
            url     : Some(blog.url.clone()),
            likes   : Some(blog.likes),
        }
    }
}

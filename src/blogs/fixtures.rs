use log::info;

use crate::core::Result;
use super::{
    blog::{Blog, BlogBuilder},
    blog_storage::BlogStorage,
};

const INITIAL_BLOGS: [(&str, &str, &str, i64); 6] = [
    ("React patterns", "Michael Chan", "https://reactpatterns.com/", 7),
    ("Go To Statement Considered Harmful", "Edsger W. Dijkstra",
        "http://www.u.arizona.edu/~rubinson/copyright_violations/Go_To_Considered_Harmful.html", 5),
    ("Canonical string reduction", "Edsger W. Dijkstra",
        "http://www.cs.utexas.edu/~EWD/transcriptions/EWD08xx/EWD808.html", 12),
    ("First class tests", "Robert C. Martin",
        "http://blog.cleancoder.com/uncle-bob/2017/05/05/TestDefinitions.htmll", 10),
    ("TDD harms architecture", "Robert C. Martin",
        "http://blog.cleancoder.com/uncle-bob/2017/03/03/TDD-Harms-Architecture.html", 0),
    ("Type wars", "Robert C. Martin",
        "http://blog.cleancoder.com/uncle-bob/2016/05/01/TypeWars.html", 2),
];

pub fn initial_blogs() -> Vec<Blog> {
    INITIAL_BLOGS.iter().filter_map(|(title, author, url, likes)| {
        BlogBuilder::new(title, url)
            .with_author(author)
            .with_likes(*likes)
            .build()
            .ok()
    }).collect()
}

/// Empties the storage and loads the six initial blogs.
pub fn seed(storage: &mut dyn BlogStorage) -> Result<Vec<Blog>> {
    let removed = storage.remove_blogs()?;
    let blogs = initial_blogs();
    storage.put_blogs(&blogs)?;

    info!("Seeded {} blogs (removed {})", blogs.len(), removed);
    Ok(blogs)
}

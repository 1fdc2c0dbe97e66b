use crate::blogs::{
    BlogStorage,
    SqliteStorage,
    BlogBuilder,
    fixtures,
};

#[test]
fn test_initial_blogs() {
    let blogs = fixtures::initial_blogs();
    assert_eq!(blogs.len(), 6);
    assert_eq!(blogs.iter().any(|b| b.title() == "React patterns"), true);
    assert_eq!(blogs.iter().map(|b| b.likes()).sum::<i64>(), 36);
}

#[test]
fn test_seed_replaces_content() {
    let mut db = SqliteStorage::new();
    db.open(":memory:").unwrap();

    let extra = BlogBuilder::new("Nauges", "https://nauges.typepad.com/").build().unwrap();
    db.put_blog(&extra).unwrap();

    let seeded = fixtures::seed(&mut db).unwrap();
    assert_eq!(seeded.len(), 6);
    assert_eq!(db.count().unwrap(), 6);
    assert_eq!(db.blog(extra.id()).unwrap(), None);

    // seeding twice keeps exactly six.
    fixtures::seed(&mut db).unwrap();
    assert_eq!(db.count().unwrap(), 6);
}

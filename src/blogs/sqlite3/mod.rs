pub(crate) mod models;
pub(crate) mod schema;
mod sql;

use crate::blogs::sqlite3::models::{
    BlogRow,
    NewBlogRow,
    BlogChangeset,
    UserVersion,
};

use crate::blogs::sqlite3::schema::blogs::{
    dsl::blogs,
    id          as blog_id,
    seq         as blog_seq,
};

use diesel::prelude::*;
use diesel::result::Error;

pub(crate) const USER_VERSION: i32 = 1;

pub(crate) fn user_version(
    conn: &mut SqliteConnection
) -> i32 {
    diesel::sql_query(sql::GET_USER_VERSION)
        .get_result::<UserVersion>(conn)
        .map(|v| v.user_version)
        .unwrap_or(0)
}

pub(crate) fn drop_tbs(
    conn: &mut SqliteConnection
) -> bool {
    diesel::sql_query(sql::DROP_BLOGS_ID_INDEX).execute(conn).is_ok()   &&
    diesel::sql_query(sql::DROP_BLOGS_TABLE).execute(conn).is_ok()
}

pub(crate) fn create_tbs(
    conn: &mut SqliteConnection
) -> bool {
    diesel::sql_query(sql::SET_USER_VERSION).execute(conn).is_ok()      &&
    diesel::sql_query(sql::CREATE_BLOGS_TABLE).execute(conn).is_ok()    &&
    diesel::sql_query(sql::CREATE_BLOGS_ID_INDEX).execute(conn).is_ok()
}

// -------------------------------------------
// "SELECT * FROM blogs ORDER BY seq"
// -------------------------------------------
pub(crate) fn get_blogs(
    conn: &mut SqliteConnection
) -> Result<Vec<BlogRow>, Error> {
    blogs.order(blog_seq.asc())
        .select(BlogRow::as_select())
        .load(conn)
}

// -------------------------------------------
// "SELECT * FROM blogs WHERE id = ?"
// -------------------------------------------
pub(crate) fn get_blog(
    conn: &mut SqliteConnection,
    id: &str
) -> Result<Option<BlogRow>, Error> {
    blogs.filter(blog_id.eq(id))
        .select(BlogRow::as_select())
        .first(conn)
        .optional()
}

// -------------------------------------------------------------
// "INSERT INTO blogs(id, title, author, url, likes, created) \
//  VALUES(?, ?, ?, ?, ?, ?)"
// -------------------------------------------------------------
pub(crate) fn put_blog(
    conn: &mut SqliteConnection,
    v: NewBlogRow
) -> Result<bool, Error> {
    use crate::blogs::sqlite3::schema::blogs;
    diesel::insert_into(blogs::table)
        .values(&v)
        .execute(conn)
        .map(|num| num > 0)
}

// ---------------------------------------------------------------------
// "UPDATE blogs SET title = ?, author = ?, url = ?, likes = ? WHERE id = ?"
// ---------------------------------------------------------------------
pub(crate) fn update_blog(
    conn: &mut SqliteConnection,
    id: &str,
    changes: BlogChangeset
) -> Result<bool, Error> {
    diesel::update(blogs.filter(blog_id.eq(id)))
        .set(&changes)
        .execute(conn)
        .map(|num| num > 0)
}

// ------------------------------------
// "DELETE FROM blogs WHERE id = ?"
// ------------------------------------
pub(crate) fn remove_blog(
    conn: &mut SqliteConnection,
    id: &str
) -> Result<bool, Error> {
    diesel::delete(blogs.filter(blog_id.eq(id)))
        .execute(conn)
        .map(|deleted| deleted > 0)
}

// ------------------------------------
// "DELETE FROM blogs"
// ------------------------------------
pub(crate) fn remove_blogs(
    conn: &mut SqliteConnection
) -> Result<usize, Error> {
    diesel::delete(blogs).execute(conn)
}

// ------------------------------------
// "SELECT COUNT(*) FROM blogs"
// ------------------------------------
pub(crate) fn count_blogs(
    conn: &mut SqliteConnection
) -> Result<i64, Error> {
    blogs.count().get_result(conn)
}

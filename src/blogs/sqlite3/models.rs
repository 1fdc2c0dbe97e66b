use diesel::prelude::*;
use diesel::sql_types::Integer;
use super::schema::blogs;

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = blogs)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct BlogRow {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) author: Option<String>,
    pub(crate) url: String,
    pub(crate) likes: i64,
}

#[derive(Insertable)]
#[diesel(table_name = blogs)]
pub(crate) struct NewBlogRow<'a> {
    pub(crate) id: &'a str,
    pub(crate) title: &'a str,
    pub(crate) author: Option<&'a str>,
    pub(crate) url: &'a str,
    pub(crate) likes: i64,
    pub(crate) created: i64,
}

#[derive(AsChangeset)]
#[diesel(table_name = blogs)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct BlogChangeset<'a> {
    pub(crate) title: &'a str,
    pub(crate) author: Option<&'a str>,
    pub(crate) url: &'a str,
    pub(crate) likes: i64,
}

#[derive(QueryableByName, Debug)]
pub(crate) struct UserVersion {
    #[diesel(sql_type = Integer)]
    pub(crate) user_version: i32,
}

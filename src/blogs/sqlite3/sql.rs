pub(crate) const SET_USER_VERSION: &str = "PRAGMA user_version = 1";
pub(crate) const GET_USER_VERSION: &str = "PRAGMA user_version";

pub(crate) const CREATE_BLOGS_TABLE: &str = "
        CREATE TABLE IF NOT EXISTS blogs(\
        seq INTEGER PRIMARY KEY AUTOINCREMENT, \
        id VARCHAR(24) NOT NULL UNIQUE, \
        title TEXT NOT NULL, \
        author TEXT, \
        url TEXT NOT NULL, \
        likes INTEGER NOT NULL DEFAULT 0, \
        created INTEGER NOT NULL\
        )
    ";

pub(crate) const CREATE_BLOGS_ID_INDEX: &str = "
        CREATE UNIQUE INDEX IF NOT EXISTS idx_blogs_id ON blogs(id)
    ";

pub(crate) const DROP_BLOGS_TABLE: &str = "
        DROP TABLE IF EXISTS blogs
    ";

pub(crate) const DROP_BLOGS_ID_INDEX: &str = "
        DROP INDEX IF EXISTS idx_blogs_id
    ";

use crate::{NewPost, Post, PostStore, Vote};
use anyhow::{Context, Result};
use rusqlite::types::ValueRef;
use rusqlite::{Connection, Row, params};
use std::path::{Path, PathBuf};

/// Table layout for the `posts` store.
pub const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS posts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT,
    caption TEXT,
    author TEXT,
    post_type TEXT,
    up INTEGER NOT NULL DEFAULT 0,
    down INTEGER NOT NULL DEFAULT 0
)";

const SELECT_COLUMNS: &str = "SELECT id, title, caption, author, post_type, up, down FROM posts";

/// A SQLite database file holding posts.
///
/// Opening is deferred to [`session`](Self::session), so a request only holds
/// a connection for as long as it keeps its session.
#[derive(Debug, Clone)]
pub struct SqliteDatabase {
    path: PathBuf,
}

impl SqliteDatabase {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the `posts` table if it does not exist yet.
    pub fn init_schema(&self) -> Result<()> {
        let conn = Connection::open(&self.path)
            .with_context(|| format!("open database {}", self.path.display()))?;
        conn.execute_batch(SCHEMA).context("create posts table")?;
        Ok(())
    }

    /// Open one connection for the duration of a request.
    pub fn session(&self) -> Result<SqliteSession> {
        let conn = Connection::open(&self.path)
            .with_context(|| format!("open database {}", self.path.display()))?;
        Ok(SqliteSession { conn })
    }
}

/// One open connection. Closed when dropped.
#[derive(Debug)]
pub struct SqliteSession {
    conn: Connection,
}

impl SqliteSession {
    /// A private in-memory database with the schema already applied.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("open in-memory database")?;
        conn.execute_batch(SCHEMA).context("create posts table")?;
        Ok(Self { conn })
    }

    fn query_posts(&self, sql: &str, keyword: Option<&str>) -> Result<Vec<Post>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = match keyword {
            Some(kw) => {
                let pattern = format!("%{kw}%");
                stmt.query_map(params![pattern], post_from_row)?
                    .collect::<rusqlite::Result<Vec<_>>>()?
            }
            None => stmt
                .query_map([], post_from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?,
        };
        Ok(rows)
    }
}

impl PostStore for SqliteSession {
    fn list_ascending(&self) -> Result<Vec<Post>> {
        self.query_posts(&format!("{SELECT_COLUMNS} ORDER BY id ASC"), None)
            .context("list posts")
    }

    fn insert(&mut self, post: &NewPost) -> Result<i64> {
        self.conn
            .execute(
                "INSERT INTO posts (title, caption, author, post_type, up, down)
                 VALUES (?1, ?2, ?3, ?4, 0, 0)",
                params![
                    post.title,
                    post.caption,
                    post.author_or_default(),
                    post.post_type_or_default()
                ],
            )
            .context("insert post")?;
        Ok(self.conn.last_insert_rowid())
    }

    fn update_caption(&mut self, id: i64, caption: &str) -> Result<bool> {
        let changed = self
            .conn
            .execute(
                "UPDATE posts SET caption = ?1 WHERE id = ?2",
                params![caption, id],
            )
            .with_context(|| format!("update caption of post {id}"))?;
        Ok(changed > 0)
    }

    fn vote(&mut self, id: i64, vote: Vote) -> Result<bool> {
        let sql = match vote {
            Vote::Up => "UPDATE posts SET up = up + 1 WHERE id = ?1",
            Vote::Down => "UPDATE posts SET down = down + 1 WHERE id = ?1",
        };
        let changed = self
            .conn
            .execute(sql, params![id])
            .with_context(|| format!("{vote}vote post {id}"))?;
        Ok(changed > 0)
    }

    fn delete(&mut self, id: i64) -> Result<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM posts WHERE id = ?1", params![id])
            .with_context(|| format!("delete post {id}"))?;
        Ok(changed > 0)
    }

    fn search_title_or_caption(&self, keyword: &str) -> Result<Vec<Post>> {
        // `%` and `_` in the keyword keep their LIKE meaning.
        self.query_posts(
            &format!("{SELECT_COLUMNS} WHERE title LIKE ?1 OR caption LIKE ?1 ORDER BY id ASC"),
            Some(keyword),
        )
        .with_context(|| format!("search posts for {keyword:?}"))
    }
}

fn post_from_row(row: &Row<'_>) -> rusqlite::Result<Post> {
    Ok(Post {
        id: row.get(0)?,
        title: text_or_empty(row, 1)?,
        caption: text_or_empty(row, 2)?,
        author: text_or_empty(row, 3)?,
        post_type: text_or_empty(row, 4)?,
        up: row.get::<_, Option<i64>>(5)?.unwrap_or(0),
        down: row.get::<_, Option<i64>>(6)?.unwrap_or(0),
    })
}

/// NULL reads as `""`; text or blob bytes that are not UTF-8 are decoded lossily.
fn text_or_empty(row: &Row<'_>, idx: usize) -> rusqlite::Result<String> {
    Ok(match row.get_ref(idx)? {
        ValueRef::Null => String::new(),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => String::from_utf8_lossy(bytes).into_owned(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(f) => f.to_string(),
    })
}
